use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four houses every athlete and generic event is attributed to.
///
/// Declaration order is the fixed display order and the tie order used by
/// the standings ranker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum House {
    Biru,
    Hijau,
    Kuning,
    Merah,
}

impl House {
    pub const ALL: [House; 4] = [House::Biru, House::Hijau, House::Kuning, House::Merah];

    pub fn name(&self) -> &'static str {
        match self {
            House::Biru => "Biru",
            House::Hijau => "Hijau",
            House::Kuning => "Kuning",
            House::Merah => "Merah",
        }
    }

    /// Parse a house name, ignoring case and surrounding whitespace.
    /// Anything else is not a house.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        House::ALL
            .into_iter()
            .find(|house| house.name().eq_ignore_ascii_case(s))
    }

    /// Position in `House::ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EventType {
    Individual,
    Team,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Individual => f.write_str("Individual"),
            EventType::Team => f.write_str("Team"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum EventGroup {
    Track,
    Field,
    /// Generic events that live outside the catalog (tug-of-war, mini-games)
    Sukaneka,
}

/// A catalog entry. Created once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SportEvent {
    pub id: String,
    pub name: String,
    pub event_type: EventType,
    pub category: String, // eligibility key, e.g. "L1", "PPKI Mix", "Terbuka P"
    pub group: EventGroup,
}

impl SportEvent {
    pub fn new(
        id: &str,
        name: &str,
        event_type: EventType,
        category: &str,
        group: EventGroup,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            event_type,
            category: category.to_string(),
            group,
        }
    }

    pub fn is_individual(&self) -> bool {
        self.event_type == EventType::Individual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_house_parse_exact() {
        assert_eq!(House::parse("Biru"), Some(House::Biru));
        assert_eq!(House::parse("Merah"), Some(House::Merah));
    }

    #[test]
    fn test_house_parse_case_and_whitespace() {
        assert_eq!(House::parse("  kuning "), Some(House::Kuning));
        assert_eq!(House::parse("HIJAU"), Some(House::Hijau));
    }

    #[test]
    fn test_house_parse_rejects_unknown() {
        assert_eq!(House::parse("Ungu"), None);
        assert_eq!(House::parse(""), None);
    }

    #[test]
    fn test_house_index_matches_all_order() {
        for (i, house) in House::ALL.iter().enumerate() {
            assert_eq!(house.index(), i);
        }
    }

    #[test]
    fn test_house_serde_uses_display_name() {
        let json = serde_json::to_string(&House::Kuning).unwrap();
        assert_eq!(json, "\"Kuning\"");
        let parsed: House = serde_json::from_str("\"Merah\"").unwrap();
        assert_eq!(parsed, House::Merah);
    }
}
