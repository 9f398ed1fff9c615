use crate::config::{Breakdown, GlobalConfig};
use crate::storage::{CreateOutcome, Result, TableBackend};

use super::{PlannerSettings, TablePlan, TableSchema, Throughput};

/// Row variants written per incoming event for one breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FanOut {
    /// Filter views, including the unfiltered one.
    pub filters: i64,
    /// Metrics, including the primary count.
    pub metrics: i64,
}

impl FanOut {
    pub fn rows_per_write(&self) -> i64 {
        self.filters.saturating_mul(self.metrics)
    }
}

/// Plans and provisions one table per breakdown.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    settings: PlannerSettings,
}

impl Planner {
    pub fn new(settings: PlannerSettings) -> Self {
        Self { settings }
    }

    /// `<breakdown name>_<period name>`, name used verbatim.
    pub fn table_name(&self, breakdown: &Breakdown) -> String {
        format!("{}_{}", breakdown.name, self.settings.period.name)
    }

    /// Pure function: count the row variants a breakdown writes per event.
    ///
    /// Own and global extra aggregations are concatenated, so a metric listed
    /// in both places counts twice.
    pub fn fan_out(config: &GlobalConfig, breakdown: &Breakdown) -> FanOut {
        FanOut {
            filters: count(breakdown.filters.len()).saturating_add(1),
            metrics: count(config.extra_aggregations_for(breakdown).count()).saturating_add(1),
        }
    }

    /// Pure function: compute the table plan for one breakdown.
    pub fn plan(&self, config: &GlobalConfig, breakdown: &Breakdown) -> TablePlan {
        let fan_out = Self::fan_out(config, breakdown);
        TablePlan {
            table_name: self.table_name(breakdown),
            schema: TableSchema::bucketed(),
            throughput: Throughput {
                read: self.settings.read_capacity,
                write: self
                    .settings
                    .write_units_per_row
                    .saturating_mul(fan_out.rows_per_write()),
            },
        }
    }

    /// Pure function: plans for every breakdown, in config order.
    pub fn plans(&self, config: &GlobalConfig) -> Vec<TablePlan> {
        config
            .breakdowns
            .iter()
            .map(|breakdown| self.plan(config, breakdown))
            .collect()
    }

    /// Ensures a table exists for every breakdown, in config order.
    ///
    /// A table that already exists is skipped silently. Any other backend
    /// error stops the pass and is returned unchanged; breakdowns after the
    /// failing one are not attempted.
    pub async fn provision<B>(&self, config: &GlobalConfig, backend: &B) -> Result<()>
    where
        B: TableBackend + ?Sized,
    {
        for plan in self.plans(config) {
            match backend.create_table(&plan).await? {
                CreateOutcome::Created => {
                    tracing::info!(
                        read = plan.throughput.read,
                        write = plan.throughput.write,
                        "Creating table {}",
                        plan.table_name
                    );
                }
                CreateOutcome::AlreadyExists => {
                    tracing::debug!("Table {} already exists", plan.table_name);
                }
            }
        }
        Ok(())
    }
}

fn count(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
