//! Command implementations behind the `logweave` binary.
//!
//! Every command ingests its sources into a dataset first and then runs
//! one query over it. Results go to stdout, diagnostics to the log on
//! stderr.

mod config;
mod metrics;
mod query;
mod render;
mod show;
mod sources;
mod summary;
mod timeline;

pub use config::{ConfigCmd, check, dump};
pub use metrics::{MetricsArgs, run_metrics};
pub use query::{FilterArgs, QueryArgs, run_query};
pub use show::{ShowArgs, run_show};
pub use sources::{SourceArgs, load_dataset, parse_time_bound};
pub use summary::run_summary;
pub use timeline::{TimelineArgs, run_timeline};
