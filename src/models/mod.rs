pub mod analysis;
pub mod input;
pub mod session;

pub use analysis::{AnalysisRequest, AnalysisResult, ExportDocument, RenderedResult, Snapshot};
pub use input::{truncate_notes, ImageFile, SelectedInput};
pub use session::{Role, Session, UserProfile};
