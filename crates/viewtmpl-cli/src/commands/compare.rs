//! Compare command
//!
//! Usage: viewtmpl compare --snapshot <FILE> <TEMPLATE1> <TEMPLATE2> [--output <FILE>]
//!        [--format html|json|summary] [--lang <LANG>] [--labels <TOML>]

use crate::commands::parse_language;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use viewtmpl_core::compare::{ComparisonEngine, DiffRecord};
use viewtmpl_core::model::Template;
use viewtmpl_core::report::{render_text_summary, HtmlReport};
use viewtmpl_core::viewtmpl_core_types::RequestContext;
use viewtmpl_core::{
    log_op_end, log_op_error, log_op_start, ExError, ExErrorKind, Labels, Language,
};
use viewtmpl_store::labels::load_labels_file;
use viewtmpl_store::load_document;

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Document snapshot (YAML or JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Name of the first template
    pub template1: String,

    /// Name of the second template
    pub template2: String,

    /// Output file path (default: Comparison_<T1>_vs_<T2>.<ext>; summary prints to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Html)]
    pub format: ReportFormat,

    /// Label language (en, ru)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    pub lang: Language,

    /// TOML file overriding individual labels
    #[arg(long)]
    pub labels: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Html,
    Json,
    Summary,
}

impl ReportFormat {
    fn extension(self) -> &'static str {
        match self {
            ReportFormat::Html => "html",
            ReportFormat::Json => "json",
            ReportFormat::Summary => "md",
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    document: &'a str,
    snapshot_digest: &'a str,
    template1: &'a str,
    template2: &'a str,
    difference_count: usize,
    records: &'a [DiffRecord],
}

/// Execute compare command
///
/// The whole command runs under one [`RequestContext`]; its id tags the
/// command's own events and the comparison engine's.
pub fn execute(args: CompareArgs) -> Result<(), Box<dyn std::error::Error>> {
    let context = RequestContext::new();
    let start = Instant::now();
    log_op_start!(
        "compare_command",
        request_id = %context.request_id,
        format = ?args.format
    );

    let outcome = run(&args, &context);

    let duration_ms = start.elapsed().as_millis() as u64;
    match &outcome {
        Ok(record_count) => {
            log_op_end!(
                "compare_command",
                duration_ms = duration_ms,
                request_id = %context.request_id,
                record_count = *record_count as u64
            );
        }
        Err(err) => {
            log_op_error!(
                "compare_command",
                err.clone(),
                duration_ms = duration_ms,
                request_id = %context.request_id
            );
        }
    }
    outcome.map(|_| ()).map_err(Into::into)
}

/// Load, select, compare and emit the report; returns the record count
fn run(args: &CompareArgs, context: &RequestContext) -> Result<usize, ExError> {
    let labels = match &args.labels {
        Some(path) => load_labels_file(path, args.lang)?,
        None => args.lang.labels(),
    };

    let loaded = load_document(&args.snapshot)?;
    let doc = &loaded.document;
    let (t1, t2) = doc.select_pair(&args.template1, &args.template2)?;

    let records = ComparisonEngine::new(doc, t1, t2)
        .with_labels(&labels)
        .with_context(context.clone())
        .compare();

    let content = render(args, &labels, &records, doc.name(), &loaded.digest, t1, t2)
        .map_err(|e| {
            ExError::new(ExErrorKind::Serialization)
                .with_op("report_render")
                .with_message(e.to_string())
        })?;

    match (&args.output, args.format) {
        (None, ReportFormat::Summary) => print!("{}", content),
        (output, format) => {
            let path = output.clone().unwrap_or_else(|| {
                PathBuf::from(labels.report_file_name(t1.name(), t2.name(), format.extension()))
            });
            std::fs::write(&path, content).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("report_write")
                    .with_entity_id(path.display().to_string())
                    .with_message(e.to_string())
            })?;
            println!("✓ Report saved to {}", path.display());
        }
    }

    Ok(records.len())
}

fn render(
    args: &CompareArgs,
    labels: &Labels,
    records: &[DiffRecord],
    document: &str,
    digest: &str,
    t1: &dyn Template,
    t2: &dyn Template,
) -> Result<String, serde_json::Error> {
    match args.format {
        ReportFormat::Html => Ok(HtmlReport::new(labels).generate(records, t1.name(), t2.name())),
        ReportFormat::Summary => Ok(render_text_summary(records, t1.name(), t2.name(), labels)),
        ReportFormat::Json => {
            let report = JsonReport {
                document,
                snapshot_digest: digest,
                template1: t1.name(),
                template2: t2.name(),
                difference_count: records.iter().filter(|r| r.is_different()).count(),
                records,
            };
            serde_json::to_string_pretty(&report)
        }
    }
}
