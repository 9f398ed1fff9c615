//! Table plan types (Functional Core - pure data).

use super::Period;

/// Read capacity units requested for every table.
pub const DEFAULT_READ_CAPACITY: i64 = 20;

/// Write capacity units requested per row variant written per event.
pub const DEFAULT_WRITE_UNITS_PER_ROW: i64 = 20;

/// Tunables injected into the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerSettings {
    pub period: Period,
    /// Uniform across tables, independent of fan-out.
    pub read_capacity: i64,
    pub write_units_per_row: i64,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            period: Period::HOURLY,
            read_capacity: DEFAULT_READ_CAPACITY,
            write_units_per_row: DEFAULT_WRITE_UNITS_PER_ROW,
        }
    }
}

impl PlannerSettings {
    pub fn with_read_capacity(mut self, read_capacity: i64) -> Self {
        self.read_capacity = read_capacity;
        self
    }

    pub fn with_write_units_per_row(mut self, write_units_per_row: i64) -> Self {
        self.write_units_per_row = write_units_per_row;
        self
    }
}

/// Key attribute types used by tally tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
}

impl AttributeType {
    /// DynamoDB scalar type code (`S` or `N`).
    pub fn code(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
            AttributeType::Number => "N",
        }
    }
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    pub fn new(name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attribute_type,
        }
    }
}

/// Two-part primary key shared by every tally table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub hash_key: KeyAttribute,
    pub range_key: KeyAttribute,
}

impl TableSchema {
    /// Hash key `key` (string row key), range key `timestamp` (bucket start).
    pub fn bucketed() -> Self {
        Self {
            hash_key: KeyAttribute::new("key", AttributeType::String),
            range_key: KeyAttribute::new("timestamp", AttributeType::Number),
        }
    }
}

/// Provisioned throughput in capacity units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throughput {
    pub read: i64,
    pub write: i64,
}

/// Everything needed to issue one create-table request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePlan {
    pub table_name: String,
    pub schema: TableSchema,
    pub throughput: Throughput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PlannerSettings::default();
        assert_eq!(settings.period, Period::HOURLY);
        assert_eq!(settings.read_capacity, 20);
        assert_eq!(settings.write_units_per_row, 20);
    }

    #[test]
    fn test_settings_builders() {
        let settings = PlannerSettings::default()
            .with_read_capacity(5)
            .with_write_units_per_row(10);
        assert_eq!(settings.read_capacity, 5);
        assert_eq!(settings.write_units_per_row, 10);
    }

    #[test]
    fn test_bucketed_schema() {
        let schema = TableSchema::bucketed();
        assert_eq!(schema.hash_key.name, "key");
        assert_eq!(schema.hash_key.attribute_type.code(), "S");
        assert_eq!(schema.range_key.name, "timestamp");
        assert_eq!(schema.range_key.attribute_type.code(), "N");
    }
}
