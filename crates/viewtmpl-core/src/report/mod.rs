//! Report rendering for comparison records.
//!
//! - [`html`] renders the standalone HTML document handed back to the host.
//! - [`summary`] renders a short Markdown digest for terminals and review notes.
//!
//! Both are pure functions of the record list: same input, same bytes.

pub mod html;
pub mod summary;

pub use html::{generate_report, HtmlReport};
pub use summary::render_text_summary;

use crate::compare::DiffRecord;
use indexmap::IndexMap;

/// Group records by `group_name`, groups in first-seen order
///
/// Records keep their relative order inside each group.
pub(crate) fn group_first_seen<'r>(
    records: &[&'r DiffRecord],
) -> IndexMap<&'r str, Vec<&'r DiffRecord>> {
    let mut groups: IndexMap<&'r str, Vec<&'r DiffRecord>> = IndexMap::new();
    for &record in records {
        groups
            .entry(record.group_name.as_str())
            .or_default()
            .push(record);
    }
    groups
}

/// Split into (differences, matches), each preserving input order
pub(crate) fn partition(records: &[DiffRecord]) -> (Vec<&DiffRecord>, Vec<&DiffRecord>) {
    records.iter().partition(|r| r.is_different())
}
