pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogLine, T0, lines_to_content, write_source};
pub use tracing::{CapturedEvent, init_test_tracing};
