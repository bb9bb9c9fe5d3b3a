pub mod import;
pub mod migrate;
pub mod report;
