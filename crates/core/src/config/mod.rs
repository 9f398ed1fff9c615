//! Breakdown configuration model (Functional Core - pure data).

mod error;
mod types;

pub use error::{ConfigError, Result};
pub use types::{Aggregation, Breakdown, Filter, GlobalConfig};
