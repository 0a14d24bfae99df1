pub mod cli;
pub mod conf;
pub mod dataset;
pub mod entry;
pub mod ingest;
pub mod logging;
pub mod query;
