mod event_data;
mod fields;
mod log_entry;
mod metrics;
mod timestamp;
#[cfg(test)]
mod tests;

pub use event_data::*;
pub use log_entry::*;
pub use metrics::*;
pub use timestamp::*;
