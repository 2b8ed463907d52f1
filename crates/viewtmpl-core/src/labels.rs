//! User-facing label vocabulary
//!
//! Every string the comparison engine and the report renderer emit comes
//! from a [`Labels`] value, so a report can be produced in another language
//! (or with house terminology) without touching comparison logic. The
//! sentinel strings here are compared verbatim when deciding whether a
//! record is a difference, so both templates are always formatted with the
//! same `Labels`.

use crate::model::{Rgb, ViewKind};
use serde::{Deserialize, Serialize};

/// Base vocabulary to start from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Russian,
}

impl Language {
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" => Some(Language::English),
            "ru" => Some(Language::Russian),
            _ => None,
        }
    }

    pub fn labels(self) -> Labels {
        match self {
            Language::English => Labels::default(),
            Language::Russian => Labels::russian(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Labels {
    // Sentinels
    pub not_controlled: String,
    pub controlled: String,
    pub no_value: String,
    pub none: String,
    pub not_available: String,
    pub applied: String,
    pub absent: String,
    pub true_text: String,
    pub false_text: String,

    // Groups
    pub group_general: String,
    pub group_model_categories: String,
    pub group_annotation_categories: String,
    pub group_filters: String,
    pub group_view_range: String,

    // Parameters
    pub view_scale: String,
    pub detail_level: String,
    pub graphics_style: String,
    pub discipline: String,
    pub all_overrides: String,
    pub filter_application: String,
    pub range_settings: String,
    pub visibility: String,
    pub halftone: String,
    pub line_weight: String,
    pub line_color: String,
    pub top_offset: String,
    pub cut_offset: String,
    pub bottom_offset: String,
    pub depth_offset: String,
    pub filter_word: String,

    // Report
    pub report_lang: String,
    pub report_title: String,
    pub template1: String,
    pub template2: String,
    pub differences: String,
    pub matches: String,
    pub parameter: String,
    pub no_differences: String,
    pub no_matches: String,
    pub file_prefix: String,

    // Template picker
    pub all_kinds: String,
    pub kind_floor_plan: String,
    pub kind_ceiling_plan: String,
    pub kind_elevation: String,
    pub kind_section: String,
    pub kind_three_d: String,
    pub kind_drafting: String,
    pub kind_legend: String,
    pub kind_schedule: String,
    pub kind_area_plan: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            not_controlled: "not controlled".into(),
            controlled: "controlled".into(),
            no_value: "no value".into(),
            none: "none".into(),
            not_available: "N/A".into(),
            applied: "applied".into(),
            absent: "absent".into(),
            true_text: "True".into(),
            false_text: "False".into(),

            group_general: "General".into(),
            group_model_categories: "Model Categories".into(),
            group_annotation_categories: "Annotation Categories".into(),
            group_filters: "Filters".into(),
            group_view_range: "View Range".into(),

            view_scale: "View Scale".into(),
            detail_level: "Detail Level".into(),
            graphics_style: "Graphics Style".into(),
            discipline: "Discipline".into(),
            all_overrides: "All Overrides".into(),
            filter_application: "Filter Application".into(),
            range_settings: "Range Settings".into(),
            visibility: "Visibility".into(),
            halftone: "Halftone".into(),
            line_weight: "Projection Lines (Weight)".into(),
            line_color: "Projection Lines (Color)".into(),
            top_offset: "Top (Offset)".into(),
            cut_offset: "Cut Plane (Offset)".into(),
            bottom_offset: "Bottom (Offset)".into(),
            depth_offset: "View Depth (Offset)".into(),
            filter_word: "Filter".into(),

            report_lang: "en".into(),
            report_title: "Template Comparison Report".into(),
            template1: "Template 1".into(),
            template2: "Template 2".into(),
            differences: "Differences".into(),
            matches: "Matches".into(),
            parameter: "Parameter".into(),
            no_differences: "No differences found.".into(),
            no_matches: "No matches found.".into(),
            file_prefix: "Comparison".into(),

            all_kinds: "All types".into(),
            kind_floor_plan: "Floor Plans".into(),
            kind_ceiling_plan: "Ceiling Plans".into(),
            kind_elevation: "Elevations".into(),
            kind_section: "Sections".into(),
            kind_three_d: "3D Views".into(),
            kind_drafting: "Drafting Views".into(),
            kind_legend: "Legends".into(),
            kind_schedule: "Schedules".into(),
            kind_area_plan: "Area Plans".into(),
        }
    }
}

impl Labels {
    pub fn russian() -> Self {
        Self {
            not_controlled: "Не управляется".into(),
            controlled: "Управляется".into(),
            no_value: "Нет значения".into(),
            none: "Нет".into(),
            not_available: "N/A".into(),
            applied: "Применен".into(),
            absent: "Отсутствует".into(),
            true_text: "True".into(),
            false_text: "False".into(),

            group_general: "Основные параметры".into(),
            group_model_categories: "Категории модели".into(),
            group_annotation_categories: "Категории аннотаций".into(),
            group_filters: "Фильтры".into(),
            group_view_range: "Секущий диапазон".into(),

            view_scale: "Масштаб вида".into(),
            detail_level: "Уровень детализации".into(),
            graphics_style: "Стиль графики".into(),
            discipline: "Дисциплина".into(),
            all_overrides: "Все переопределения".into(),
            filter_application: "Применение фильтров".into(),
            range_settings: "Настройки диапазона".into(),
            visibility: "Видимость".into(),
            halftone: "Полутона".into(),
            line_weight: "Линии проекции (Вес)".into(),
            line_color: "Линии проекции (Цвет)".into(),
            top_offset: "Верх (Отступ)".into(),
            cut_offset: "Секущая пл. (Отступ)".into(),
            bottom_offset: "Низ (Отступ)".into(),
            depth_offset: "Глубина проецирования (Отступ)".into(),
            filter_word: "Фильтр".into(),

            report_lang: "ru".into(),
            report_title: "Отчет о сравнении шаблонов".into(),
            template1: "Шаблон 1".into(),
            template2: "Шаблон 2".into(),
            differences: "Отличия".into(),
            matches: "Совпадения".into(),
            parameter: "Параметр".into(),
            no_differences: "Отличий не найдено.".into(),
            no_matches: "Совпадений не найдено.".into(),
            file_prefix: "Сравнение".into(),

            all_kinds: "Все типы".into(),
            kind_floor_plan: "Планы этажей".into(),
            kind_ceiling_plan: "Планы потолков".into(),
            kind_elevation: "Фасады".into(),
            kind_section: "Разрезы".into(),
            kind_three_d: "3D виды".into(),
            kind_drafting: "Чертежные виды".into(),
            kind_legend: "Легенды".into(),
            kind_schedule: "Спецификации".into(),
            kind_area_plan: "Планы зон".into(),
        }
    }

    /// Sentinel for one side's controlled-ness of a group field
    pub fn control_state(&self, controls: bool) -> &str {
        if controls {
            &self.controlled
        } else {
            &self.not_controlled
        }
    }

    pub fn bool_text(&self, value: bool) -> String {
        if value {
            self.true_text.clone()
        } else {
            self.false_text.clone()
        }
    }

    /// `R:{r} G:{g} B:{b}`, or the `none` sentinel for an invalid color
    pub fn color(&self, color: Option<Rgb>) -> String {
        match color {
            Some(c) => format!("R:{} G:{} B:{}", c.red, c.green, c.blue),
            None => self.none.clone(),
        }
    }

    pub fn line_weight_text(&self, weight: Option<i32>) -> String {
        weight.map_or_else(|| self.none.clone(), |w| w.to_string())
    }

    /// `{category}: {attribute}`
    pub fn category_param(&self, category: &str, attribute: &str) -> String {
        format!("{}: {}", category, attribute)
    }

    /// `Filter: '{name}'`
    pub fn filter_param(&self, name: &str) -> String {
        format!("{}: '{}'", self.filter_word, name)
    }

    /// `Filter '{name}': {attribute}`
    pub fn filter_attr(&self, name: &str, attribute: &str) -> String {
        format!("{} '{}': {}", self.filter_word, name, attribute)
    }

    /// Display label used when picking templates by kind
    pub fn view_kind(&self, kind: ViewKind) -> &str {
        match kind {
            ViewKind::FloorPlan => &self.kind_floor_plan,
            ViewKind::CeilingPlan => &self.kind_ceiling_plan,
            ViewKind::Elevation => &self.kind_elevation,
            ViewKind::Section => &self.kind_section,
            ViewKind::ThreeD => &self.kind_three_d,
            ViewKind::Drafting => &self.kind_drafting,
            ViewKind::Legend => &self.kind_legend,
            ViewKind::Schedule => &self.kind_schedule,
            ViewKind::AreaPlan => &self.kind_area_plan,
        }
    }

    /// Suggested report file name, e.g. `Comparison_Plan A_vs_Plan B.html`
    ///
    /// Path separators and characters reserved on common file systems are
    /// replaced with `_`, so the name always denotes a single file.
    pub fn report_file_name(&self, template1: &str, template2: &str, extension: &str) -> String {
        format!(
            "{}_{}_vs_{}.{}",
            file_name_part(&self.file_prefix),
            file_name_part(template1),
            file_name_part(template2),
            extension
        )
    }
}

fn file_name_part(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_formats() {
        let labels = Labels::default();
        assert_eq!(labels.filter_param("Phase 1"), "Filter: 'Phase 1'");
        assert_eq!(
            labels.filter_attr("Phase 1", &labels.visibility),
            "Filter 'Phase 1': Visibility"
        );
        assert_eq!(
            labels.category_param("Walls", &labels.halftone),
            "Walls: Halftone"
        );
    }

    #[test]
    fn test_color_and_weight_formatting() {
        let labels = Labels::default();
        assert_eq!(labels.color(Some(Rgb::new(255, 0, 12))), "R:255 G:0 B:12");
        assert_eq!(labels.color(None), "none");
        assert_eq!(labels.line_weight_text(Some(3)), "3");
        assert_eq!(labels.line_weight_text(None), "none");
    }

    #[test]
    fn test_russian_vocabulary() {
        let labels = Language::Russian.labels();
        assert_eq!(labels.not_controlled, "Не управляется");
        assert_eq!(labels.filter_param("Фаза 1"), "Фильтр: 'Фаза 1'");
        assert_eq!(labels.view_kind(ViewKind::FloorPlan), "Планы этажей");
    }

    #[test]
    fn test_partial_deserialize_keeps_defaults() {
        let labels: Labels = serde_json::from_str(r#"{"group_general": "Basics"}"#).unwrap();
        assert_eq!(labels.group_general, "Basics");
        assert_eq!(labels.not_controlled, "not controlled");
    }

    #[test]
    fn test_report_file_name() {
        let labels = Labels::default();
        assert_eq!(
            labels.report_file_name("A", "B", "html"),
            "Comparison_A_vs_B.html"
        );
    }

    #[test]
    fn test_report_file_name_replaces_reserved_characters() {
        let labels = Labels::default();
        assert_eq!(
            labels.report_file_name("A/B", "C:\\D*?\"<>|", "json"),
            "Comparison_A_B_vs_C__D______.json"
        );
        assert_eq!(
            labels.report_file_name("Plan A", "Plan B", "html"),
            "Comparison_Plan A_vs_Plan B.html"
        );
    }
}
