pub mod adapter;
pub mod api;

pub use adapter::*;
pub use api::*;
