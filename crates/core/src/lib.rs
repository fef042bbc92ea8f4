pub mod error;
pub mod logging;
pub mod model;

pub use error::{CxscopeError, Result};
