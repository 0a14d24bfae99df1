//! Pure queries over a dataset.
//!
//! Nothing here mutates or caches; every function can run concurrently on
//! a shared dataset snapshot.

mod downsample;
mod filter;
mod pagination;
mod time_range;
mod timeline;
mod view;
#[cfg(test)]
mod tests;

pub use downsample::*;
pub use filter::*;
pub use pagination::*;
pub use time_range::*;
pub use timeline::*;
pub use view::*;
