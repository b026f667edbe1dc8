pub(crate) mod error;
pub(crate) mod point;

pub use error::*;
pub use point::*;
