mod delete;
mod get;

pub use delete::*;
pub use get::*;
