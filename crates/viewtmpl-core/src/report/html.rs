//! HTML report renderer.

use crate::compare::DiffRecord;
use crate::labels::Labels;
use crate::report::{group_first_seen, partition};
use htmlize::escape_all_quotes;
use std::borrow::Cow;

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
h1, h2 { color: #2E4053; }
table { border-collapse: collapse; width: 100%; margin-bottom: 30px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #f2f2f2; }
tr.difference { background-color: #ffecec; }
tr.group-header td { background-color: #AED6F1; font-weight: bold; }
";

/// Renders comparison records as a self-contained HTML document
pub struct HtmlReport<'a> {
    labels: Cow<'a, Labels>,
}

impl Default for HtmlReport<'_> {
    fn default() -> Self {
        Self {
            labels: Cow::Owned(Labels::default()),
        }
    }
}

impl<'a> HtmlReport<'a> {
    pub fn new(labels: &'a Labels) -> Self {
        Self {
            labels: Cow::Borrowed(labels),
        }
    }

    /// Render the document
    ///
    /// Differences come first, then matches. Inside each section records are
    /// grouped by group name, groups in the order they first appear in that
    /// section. An empty section renders a one-line placeholder.
    /// Every record lands in exactly one section.
    pub fn generate(&self, records: &[DiffRecord], template1: &str, template2: &str) -> String {
        let labels = &*self.labels;
        let (differences, matches) = partition(records);
        let t1 = escape_all_quotes(template1);
        let t2 = escape_all_quotes(template2);

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        out.push_str(&format!("<html lang='{}'>\n", escape_all_quotes(labels.report_lang.as_str())));
        out.push_str("<head>\n<meta charset='UTF-8'>\n");
        out.push_str(&format!(
            "<title>{}</title>\n",
            escape_all_quotes(labels.report_title.as_str())
        ));
        out.push_str("<style>\n");
        out.push_str(STYLE);
        out.push_str("</style>\n</head>\n<body>\n");

        out.push_str(&format!(
            "<h1>{}</h1>\n",
            escape_all_quotes(labels.report_title.as_str())
        ));
        out.push_str(&format!(
            "<p><b>{}:</b> {}</p>\n",
            escape_all_quotes(labels.template1.as_str()),
            t1
        ));
        out.push_str(&format!(
            "<p><b>{}:</b> {}</p>\n",
            escape_all_quotes(labels.template2.as_str()),
            t2
        ));

        let sections = [
            (&labels.differences, &labels.no_differences, &differences, true),
            (&labels.matches, &labels.no_matches, &matches, false),
        ];
        for (heading, placeholder, section, is_difference) in sections {
            out.push_str(&format!("<h2>{}</h2>\n", escape_all_quotes(heading.as_str())));
            if section.is_empty() {
                out.push_str(&format!("<p>{}</p>\n", escape_all_quotes(placeholder.as_str())));
                continue;
            }
            out.push_str("<table>\n");
            out.push_str(&format!(
                "<tr><th>{}</th><th>{}</th><th>{}</th></tr>\n",
                escape_all_quotes(labels.parameter.as_str()),
                t1,
                t2
            ));
            append_rows(&mut out, section, is_difference);
            out.push_str("</table>\n");
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

fn append_rows(out: &mut String, records: &[&DiffRecord], is_difference: bool) {
    for (group, rows) in group_first_seen(records) {
        out.push_str(&format!(
            "<tr class='group-header'><td colspan='3'>{}</td></tr>\n",
            escape_all_quotes(group)
        ));
        for record in rows {
            if is_difference {
                out.push_str("<tr class='difference'>\n");
            } else {
                out.push_str("<tr>\n");
            }
            out.push_str(&format!(
                "<td>{}</td>\n<td>{}</td>\n<td>{}</td>\n</tr>\n",
                escape_all_quotes(record.parameter_name.as_str()),
                escape_all_quotes(record.value1.as_str()),
                escape_all_quotes(record.value2.as_str())
            ));
        }
    }
}

/// Render with the default (English) labels
pub fn generate_report(records: &[DiffRecord], template1: &str, template2: &str) -> String {
    HtmlReport::default().generate(records, template1, template2)
}
