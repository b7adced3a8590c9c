use serde::{Deserialize, Serialize};

/// The eight similarity dimensions of a match record.
///
/// Declaration order is the canonical order: it is the deterministic
/// tie-break sequence for contribution breakdowns and the order in which
/// rationale labels are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Price,
    Bedroom,
    Bathroom,
    #[serde(rename = "type")]
    PropertyType,
    Condition,
    Year,
    Size,
    Location,
}

impl Component {
    /// All components in canonical order.
    pub const ALL: [Component; 8] = [
        Component::Price,
        Component::Bedroom,
        Component::Bathroom,
        Component::PropertyType,
        Component::Condition,
        Component::Year,
        Component::Size,
        Component::Location,
    ];

    /// Short name used in breakdown output.
    pub fn name(self) -> &'static str {
        match self {
            Component::Price => "price",
            Component::Bedroom => "bedroom",
            Component::Bathroom => "bathroom",
            Component::PropertyType => "type",
            Component::Condition => "condition",
            Component::Year => "year",
            Component::Size => "size",
            Component::Location => "location",
        }
    }

    /// Input column carrying this component's similarity score.
    pub fn column(self) -> &'static str {
        match self {
            Component::Price => "s_price",
            Component::Bedroom => "s_bed",
            Component::Bathroom => "s_bath",
            Component::PropertyType => "s_type",
            Component::Condition => "s_cond",
            Component::Year => "s_year",
            Component::Size => "s_size",
            Component::Location => "s_loc",
        }
    }

    /// Human-readable label used in match rationales.
    pub fn label(self) -> &'static str {
        match self {
            Component::Price => "price fit",
            Component::Bedroom => "bedroom match",
            Component::Bathroom => "bathroom match",
            Component::PropertyType => "property type match",
            Component::Condition => "condition match",
            Component::Year => "modernity/year match",
            Component::Size => "size/spaciousness match",
            Component::Location => "location intent match",
        }
    }

    /// Position in the canonical order, used as a tie-break key.
    pub fn ordinal(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Component {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_stable() {
        let names: Vec<&str> = Component::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            vec!["price", "bedroom", "bathroom", "type", "condition", "year", "size", "location"]
        );
    }

    #[test]
    fn ordinals_follow_canonical_order() {
        for (i, c) in Component::ALL.iter().enumerate() {
            assert_eq!(c.ordinal(), i);
        }
    }

    #[test]
    fn columns_match_input_schema() {
        assert_eq!(Component::Price.column(), "s_price");
        assert_eq!(Component::Bedroom.column(), "s_bed");
        assert_eq!(Component::Location.column(), "s_loc");
    }

    #[test]
    fn labels_are_rationale_phrases() {
        assert_eq!(Component::Price.label(), "price fit");
        assert_eq!(Component::Year.label(), "modernity/year match");
    }

    #[test]
    fn serializes_as_short_name() {
        let json = serde_json::to_string(&Component::PropertyType).unwrap();
        assert_eq!(json, "\"type\"");
    }
}
