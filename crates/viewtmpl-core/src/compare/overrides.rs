use crate::model::OverrideRecord;

/// Structural equality over the override fields the report covers
///
/// Two absent records are equal; an absent and a present record are not.
/// Otherwise halftone, transparency, detail level, projection line weight,
/// projection line pattern and projection line color must all match. Other
/// attributes (cut lines, surface patterns) are outside the compared set.
pub fn overrides_equal(ov1: Option<&OverrideRecord>, ov2: Option<&OverrideRecord>) -> bool {
    match (ov1, ov2) {
        (None, None) => true,
        (Some(a), Some(b)) => {
            a.halftone == b.halftone
                && a.transparency == b.transparency
                && a.detail_level == b.detail_level
                && a.projection_line_weight == b.projection_line_weight
                && a.projection_line_pattern_id == b.projection_line_pattern_id
                && a.projection_line_color == b.projection_line_color
        }
        _ => false,
    }
}
