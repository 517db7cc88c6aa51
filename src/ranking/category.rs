use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AwardCategory {
    Male,
    Female,
}

impl fmt::Display for AwardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AwardCategory::Male => f.write_str("Male"),
            AwardCategory::Female => f.write_str("Female"),
        }
    }
}

/// Splits participant categories into award categories by marker prefix.
///
/// The male marker is tested first, so a category can only ever land in one
/// list. Empty markers match nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConvention {
    male_marker: String,
    female_marker: String,
}

impl CategoryConvention {
    pub fn new(male_marker: &str, female_marker: &str) -> Self {
        Self {
            male_marker: male_marker.trim().to_string(),
            female_marker: female_marker.trim().to_string(),
        }
    }

    pub fn classify(&self, category: &str) -> Option<AwardCategory> {
        let category = category.trim();
        if has_prefix(category, &self.male_marker) {
            Some(AwardCategory::Male)
        } else if has_prefix(category, &self.female_marker) {
            Some(AwardCategory::Female)
        } else {
            None
        }
    }
}

impl Default for CategoryConvention {
    fn default() -> Self {
        Self::new("L", "P")
    }
}

fn has_prefix(value: &str, marker: &str) -> bool {
    !marker.is_empty()
        && value
            .get(..marker.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(marker))
}
