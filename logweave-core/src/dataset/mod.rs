mod dataset;
mod store;
#[cfg(test)]
mod tests;

pub use dataset::*;
pub use store::*;
