mod aggregator;
mod command;
mod record;
mod store;
mod window;

pub use aggregator::*;
pub use command::*;
pub use record::*;
pub use store::*;
pub use window::*;
