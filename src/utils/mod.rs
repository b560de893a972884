pub mod logging;

pub use logging::{body_preview, log_analysis_complete, log_startup, truncate_text};
