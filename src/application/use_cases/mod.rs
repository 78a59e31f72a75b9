mod ask_question;
mod exam_tips;
mod revision_summary;

pub use ask_question::*;
pub use exam_tips::*;
pub use revision_summary::*;
