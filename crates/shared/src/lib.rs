mod category;
mod date;
mod error;

pub use category::*;
pub use date::*;
pub use error::*;
