pub mod config;
pub mod db;
pub mod observability;
pub mod report;

pub use config::Config;
