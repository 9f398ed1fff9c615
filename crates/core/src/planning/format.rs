use super::{KeyAttribute, TablePlan};

/// Pure function: Format a table plan for display.
pub fn format_plan(plan: &TablePlan) -> Vec<String> {
    vec![
        format!("+ Create table: {}", plan.table_name),
        format!("  Hash key: {}", describe_key(&plan.schema.hash_key)),
        format!("  Range key: {}", describe_key(&plan.schema.range_key)),
        format!(
            "  Throughput: read {}, write {}",
            plan.throughput.read, plan.throughput.write
        ),
    ]
}

fn describe_key(key: &KeyAttribute) -> String {
    format!("{} ({})", key.name, key.attribute_type.code())
}
