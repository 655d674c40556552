//! Sync the "skills measured" section of the AZ-305 exam page into a
//! Markdown summary.

pub mod markdown;
pub mod parser;
pub mod sync;
pub mod types;

pub use markdown::render_markdown;
pub use parser::parse_objectives;
pub use sync::{exam_url_from_env, sync_objectives, DEFAULT_OUTPUT, EXAM_URL_VAR};
pub use types::{ExamObjectives, ObjectiveSection};
