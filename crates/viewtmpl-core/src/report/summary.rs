//! Markdown summary of comparison records.

use crate::compare::DiffRecord;
use crate::labels::Labels;
use crate::report::{group_first_seen, partition};

/// Render a short Markdown summary
///
/// Lists total difference and match counts, then the number of differences
/// per group in first-seen order. Informational only.
pub fn render_text_summary(
    records: &[DiffRecord],
    template1: &str,
    template2: &str,
    labels: &Labels,
) -> String {
    let (differences, matches) = partition(records);
    let mut out = String::new();

    out.push_str(&format!("## {}\n\n", labels.report_title));
    out.push_str(&format!(
        "**{}**: {}  \n**{}**: {}\n\n",
        labels.template1, template1, labels.template2, template2
    ));
    out.push_str(&format!("- **{}**: {}\n", labels.differences, differences.len()));
    out.push_str(&format!("- **{}**: {}\n\n", labels.matches, matches.len()));

    if differences.is_empty() {
        out.push_str(&format!("_{}_\n", labels.no_differences));
        return out;
    }

    out.push_str(&format!("### {}\n\n", labels.differences));
    for (group, rows) in group_first_seen(&differences) {
        out.push_str(&format!("- {}: {}\n", group, rows.len()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_per_group() {
        let records = vec![
            DiffRecord::new("Filters", "Filter: 'X'", "applied", "absent"),
            DiffRecord::new("General", "View Scale", "1:100", "1:50"),
            DiffRecord::new("Filters", "Filter: 'Y'", "absent", "applied"),
            DiffRecord::new("General", "Discipline", "Architectural", "Architectural"),
        ];
        let summary = render_text_summary(&records, "A", "B", &Labels::default());

        assert!(summary.contains("- **Differences**: 3\n"));
        assert!(summary.contains("- **Matches**: 1\n"));
        let filters = summary.find("- Filters: 2").unwrap();
        let general = summary.find("- General: 1").unwrap();
        assert!(filters < general);
    }

    #[test]
    fn test_summary_without_differences() {
        let records = vec![DiffRecord::new("General", "View Scale", "1:100", "1:100")];
        let summary = render_text_summary(&records, "A", "B", &Labels::default());
        assert!(summary.contains("_No differences found._"));
    }
}
