pub(crate) mod content;
pub mod health_checks;
pub(crate) mod history;
mod root;

pub use health_checks::*;
pub use root::*;
