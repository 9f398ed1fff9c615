use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, Result};

/// A sliced view of a breakdown's data.
///
/// Each filter adds one more row variant per incoming event. The planner only
/// cares about how many there are, so the descriptor is kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Filter(pub serde_json::Value);

impl Filter {
    pub fn new(descriptor: impl Into<serde_json::Value>) -> Self {
        Self(descriptor.into())
    }
}

/// An extra metric stored alongside the primary count.
///
/// The descriptor is opaque to this crate and kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Aggregation(pub serde_json::Value);

impl Aggregation {
    pub fn new(descriptor: impl Into<serde_json::Value>) -> Self {
        Self(descriptor.into())
    }
}

/// One row-group family, stored in its own table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Used verbatim as the table name prefix.
    pub name: String,
    /// Event properties that make up the row key.
    #[serde(default)]
    pub dimensions: Vec<String>,
    #[serde(default)]
    pub filters: Vec<Filter>,
    #[serde(default)]
    pub extra_aggregations: Vec<Aggregation>,
}

impl Breakdown {
    /// Creates a breakdown with no dimensions, filters or extra aggregations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dimensions: Vec::new(),
            filters: Vec::new(),
            extra_aggregations: Vec::new(),
        }
    }

    pub fn with_dimensions(mut self, dimensions: Vec<String>) -> Self {
        self.dimensions = dimensions;
        self
    }

    pub fn with_filters(mut self, filters: Vec<Filter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_extra_aggregations(mut self, extra_aggregations: Vec<Aggregation>) -> Self {
        self.extra_aggregations = extra_aggregations;
        self
    }
}

/// The parsed configuration document.
///
/// Read-only once loaded. Breakdown order is preserved exactly as written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub breakdowns: Vec<Breakdown>,
    /// Applied to every breakdown in addition to its own.
    #[serde(default)]
    pub extra_aggregations: Vec<Aggregation>,
}

impl GlobalConfig {
    pub fn new(breakdowns: Vec<Breakdown>) -> Self {
        Self {
            breakdowns,
            extra_aggregations: Vec::new(),
        }
    }

    pub fn with_extra_aggregations(mut self, extra_aggregations: Vec<Aggregation>) -> Self {
        self.extra_aggregations = extra_aggregations;
        self
    }

    /// Parses a configuration document from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the configuration document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Extra aggregations that apply to `breakdown`: its own followed by the
    /// global ones. Plain concatenation, duplicates are kept.
    pub fn extra_aggregations_for<'a>(
        &'a self,
        breakdown: &'a Breakdown,
    ) -> impl Iterator<Item = &'a Aggregation> + 'a {
        breakdown
            .extra_aggregations
            .iter()
            .chain(self.extra_aggregations.iter())
    }
}
