pub mod api_client;
pub mod prompt_loader;

pub use api_client::{AnalyzeOptions, ApiClient};
pub use prompt_loader::PromptLoader;
