use async_trait::async_trait;

use crate::planning::TablePlan;

use super::Result;

/// Result of a create-table request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new table now exists with the planned schema and throughput.
    Created,
    /// A table with this name was already there. Nothing was changed.
    AlreadyExists,
}

/// Storage service that tables are provisioned in.
#[async_trait]
pub trait TableBackend: Send + Sync {
    /// Issues a single create-table request for `plan`.
    ///
    /// Implementations must report a name collision as
    /// [`CreateOutcome::AlreadyExists`] and every other failure as an error.
    async fn create_table(&self, plan: &TablePlan) -> Result<CreateOutcome>;
}
