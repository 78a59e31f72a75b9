mod relay_api;
mod repl;
mod session;

pub use relay_api::*;
pub use repl::run;
pub use session::*;
