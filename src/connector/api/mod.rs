mod container;
mod dto;
mod router;

pub use container::*;
pub use dto::*;
pub use router::*;
