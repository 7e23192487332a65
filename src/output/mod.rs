//! Terminal output for query results

mod config;
mod streaming;

pub use config::OutputConfig;
pub use streaming::{MatchPrinter, NO_RESULTS};
