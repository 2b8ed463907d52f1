//! List command
//!
//! Usage: viewtmpl list --snapshot <FILE> [--kind <VIEW_KIND>] [--lang <LANG>]

use crate::commands::{parse_language, parse_view_kind};
use clap::Args;
use std::path::PathBuf;
use viewtmpl_core::model::{Template, ViewKind};
use viewtmpl_core::Language;
use viewtmpl_store::load_document;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Document snapshot (YAML or JSON)
    #[arg(short, long)]
    pub snapshot: PathBuf,

    /// Only list templates of this view kind (e.g. floor-plan)
    #[arg(short, long, value_parser = parse_view_kind)]
    pub kind: Option<ViewKind>,

    /// Label language (en, ru)
    #[arg(long, default_value = "en", value_parser = parse_language)]
    pub lang: Language,
}

/// Execute list command
pub fn execute(args: ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = load_document(&args.snapshot)?;
    let labels = args.lang.labels();

    let scope = args
        .kind
        .map_or(labels.all_kinds.as_str(), |kind| labels.view_kind(kind));
    println!("{} ({})", loaded.document.name(), scope);

    for template in loaded.document.list_templates(args.kind) {
        println!(
            "  {}\t{}",
            template.name(),
            labels.view_kind(template.view_kind())
        );
    }

    Ok(())
}
