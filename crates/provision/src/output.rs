//! Dry-run output.

use anstream::println as aprintln;
use tally_core::planning::{format_plan, TablePlan};

const GREEN: &str = "\x1b[38;2;158;206;106m"; // #9ece6a
const RESET: &str = "\x1b[0m";

/// Print every plan, creation lines highlighted.
pub fn print_plans(plans: &[TablePlan]) {
    for plan in plans {
        for line in format_plan(plan) {
            aprintln!("{}", highlight(&line));
        }
    }
    aprintln!("{} table(s) planned.", plans.len());
}

fn highlight(line: &str) -> String {
    if line.starts_with('+') {
        format!("{GREEN}{line}{RESET}")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_creation_lines_only() {
        assert_eq!(
            highlight("+ Create table: a_hourly"),
            format!("{GREEN}+ Create table: a_hourly{RESET}")
        );
        assert_eq!(highlight("  Hash key: key (S)"), "  Hash key: key (S)");
    }
}
