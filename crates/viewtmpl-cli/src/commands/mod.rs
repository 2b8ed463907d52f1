pub mod compare;
pub mod list;

use viewtmpl_core::model::ViewKind;
use viewtmpl_core::Language;

/// Parse a `--kind` value such as `floor-plan`
pub fn parse_view_kind(value: &str) -> Result<ViewKind, String> {
    ViewKind::from_key(value).ok_or_else(|| {
        let known: Vec<&str> = ViewKind::ALL.iter().map(|k| k.key()).collect();
        format!("unknown view kind '{}', expected one of: {}", value, known.join(", "))
    })
}

/// Parse a `--lang` value
pub fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_code(value).ok_or_else(|| format!("unknown language '{}', expected en or ru", value))
}
