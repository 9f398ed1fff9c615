//! Table provisioning planner.
//!
//! Naming, schema and throughput are pure functions of the configuration
//! (Functional Core). [`Planner::provision`] is the only part that talks to a
//! [`TableBackend`](crate::storage::TableBackend).

mod format;
mod period;
mod planner;
mod types;

pub use format::format_plan;
pub use period::Period;
pub use planner::{FanOut, Planner};
pub use types::{
    AttributeType, KeyAttribute, PlannerSettings, TablePlan, TableSchema, Throughput,
    DEFAULT_READ_CAPACITY, DEFAULT_WRITE_UNITS_PER_ROW,
};
