use serde::{Deserialize, Serialize};

/// Kind of view a template applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewKind {
    FloorPlan,
    CeilingPlan,
    Elevation,
    Section,
    ThreeD,
    Drafting,
    Legend,
    Schedule,
    AreaPlan,
}

impl ViewKind {
    pub const ALL: [ViewKind; 9] = [
        ViewKind::FloorPlan,
        ViewKind::CeilingPlan,
        ViewKind::Elevation,
        ViewKind::Section,
        ViewKind::ThreeD,
        ViewKind::Drafting,
        ViewKind::Legend,
        ViewKind::Schedule,
        ViewKind::AreaPlan,
    ];

    /// Plan-like kinds carry a view range (cut plane offsets)
    pub fn is_plan(self) -> bool {
        matches!(
            self,
            ViewKind::FloorPlan | ViewKind::CeilingPlan | ViewKind::AreaPlan
        )
    }

    /// Stable kebab-case key, as used in snapshots and on the command line
    pub fn key(self) -> &'static str {
        match self {
            ViewKind::FloorPlan => "floor-plan",
            ViewKind::CeilingPlan => "ceiling-plan",
            ViewKind::Elevation => "elevation",
            ViewKind::Section => "section",
            ViewKind::ThreeD => "three-d",
            ViewKind::Drafting => "drafting",
            ViewKind::Legend => "legend",
            ViewKind::Schedule => "schedule",
            ViewKind::AreaPlan => "area-plan",
        }
    }

    pub fn from_key(key: &str) -> Option<ViewKind> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_kinds() {
        let plans: Vec<ViewKind> = ViewKind::ALL.into_iter().filter(|k| k.is_plan()).collect();
        assert_eq!(
            plans,
            vec![ViewKind::FloorPlan, ViewKind::CeilingPlan, ViewKind::AreaPlan]
        );
    }

    #[test]
    fn test_key_round_trip() {
        for kind in ViewKind::ALL {
            assert_eq!(ViewKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ViewKind::from_key("perspective"), None);
    }
}
