mod exam_tips;
mod generation;
mod message;

pub use exam_tips::*;
pub use generation::*;
pub use message::*;
