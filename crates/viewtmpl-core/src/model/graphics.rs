use super::ids::ElementId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetailLevel {
    #[default]
    ByView,
    Coarse,
    Medium,
    Fine,
}

/// An RGB line color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// Graphic overrides applied to a category or filter within a template
///
/// `None` weight or color means the override is not set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideRecord {
    pub halftone: bool,
    pub transparency: i32,
    pub detail_level: DetailLevel,
    pub projection_line_weight: Option<i32>,
    pub projection_line_pattern_id: ElementId,
    pub projection_line_color: Option<Rgb>,
}

impl Default for OverrideRecord {
    fn default() -> Self {
        Self {
            halftone: false,
            transparency: 0,
            detail_level: DetailLevel::ByView,
            projection_line_weight: None,
            projection_line_pattern_id: ElementId::INVALID,
            projection_line_color: None,
        }
    }
}

impl OverrideRecord {
    pub fn with_halftone(mut self, halftone: bool) -> Self {
        self.halftone = halftone;
        self
    }

    pub fn with_transparency(mut self, transparency: i32) -> Self {
        self.transparency = transparency;
        self
    }

    pub fn with_detail_level(mut self, detail_level: DetailLevel) -> Self {
        self.detail_level = detail_level;
        self
    }

    pub fn with_line_weight(mut self, weight: i32) -> Self {
        self.projection_line_weight = Some(weight);
        self
    }

    pub fn with_line_pattern(mut self, pattern: ElementId) -> Self {
        self.projection_line_pattern_id = pattern;
        self
    }

    pub fn with_line_color(mut self, color: Rgb) -> Self {
        self.projection_line_color = Some(color);
        self
    }
}

/// View range offsets of a plan template, in host length units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanRange {
    pub top_clip: f64,
    pub cut_plane: f64,
    pub bottom_clip: f64,
    pub view_depth: f64,
}
