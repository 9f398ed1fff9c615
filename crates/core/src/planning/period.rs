/// Width of the time buckets a table is partitioned by.
///
/// Only the name reaches the planner: it is the suffix appended to breakdown
/// names to form table names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub name: &'static str,
}

impl Period {
    pub const HOURLY: Period = Period { name: "hourly" };
}

impl Default for Period {
    fn default() -> Self {
        Self::HOURLY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_default() {
        assert_eq!(Period::default(), Period::HOURLY);
        assert_eq!(Period::HOURLY.name, "hourly");
    }
}
