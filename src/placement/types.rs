use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::catalog::House;

/// Finishing position. Only the top four are recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    First,
    Second,
    Third,
    Fourth,
}

impl Rank {
    pub const ALL: [Rank; 4] = [Rank::First, Rank::Second, Rank::Third, Rank::Fourth];

    /// 1-based position to rank; anything outside 1..=4 is `None`
    pub fn from_position(position: usize) -> Option<Self> {
        match position {
            1 => Some(Rank::First),
            2 => Some(Rank::Second),
            3 => Some(Rank::Third),
            4 => Some(Rank::Fourth),
            _ => None,
        }
    }

    pub fn position(&self) -> usize {
        *self as usize + 1
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::First => f.write_str("1st"),
            Rank::Second => f.write_str("2nd"),
            Rank::Third => f.write_str("3rd"),
            Rank::Fourth => f.write_str("4th"),
        }
    }
}

/// Placements for one catalog event.
///
/// For a team event the slots hold house names, for an individual event
/// participant ids. Which one is decided by the catalog event's type, never
/// by the slot contents. Slots may be filled in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventResult {
    pub event_id: String,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub first_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub second_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub third_id: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none", skip_serializing_if = "Option::is_none")]
    pub fourth_id: Option<String>,
}

impl EventResult {
    pub fn new(event_id: &str) -> Self {
        Self {
            event_id: event_id.to_string(),
            ..Default::default()
        }
    }

    pub fn slot(&self, rank: Rank) -> Option<&str> {
        match rank {
            Rank::First => self.first_id.as_deref(),
            Rank::Second => self.second_id.as_deref(),
            Rank::Third => self.third_id.as_deref(),
            Rank::Fourth => self.fourth_id.as_deref(),
        }
    }

    /// Set or clear a slot. Blank values clear it.
    pub fn set_slot(&mut self, rank: Rank, value: Option<String>) {
        let value = value.filter(|v| !v.trim().is_empty());
        match rank {
            Rank::First => self.first_id = value,
            Rank::Second => self.second_id = value,
            Rank::Third => self.third_id = value,
            Rank::Fourth => self.fourth_id = value,
        }
    }

    /// Populated slots, 1st to 4th.
    pub fn placements(&self) -> impl Iterator<Item = (Rank, &str)> {
        Rank::ALL
            .into_iter()
            .filter_map(move |rank| self.slot(rank).map(|value| (rank, value)))
    }

    pub fn has_placements(&self) -> bool {
        self.placements().next().is_some()
    }
}

/// House ranking for one generic (non-catalog) event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HouseRankResult {
    #[serde(default, deserialize_with = "lenient_house", skip_serializing_if = "Option::is_none")]
    pub first: Option<House>,
    #[serde(default, deserialize_with = "lenient_house", skip_serializing_if = "Option::is_none")]
    pub second: Option<House>,
    #[serde(default, deserialize_with = "lenient_house", skip_serializing_if = "Option::is_none")]
    pub third: Option<House>,
    #[serde(default, deserialize_with = "lenient_house", skip_serializing_if = "Option::is_none")]
    pub fourth: Option<House>,
}

impl HouseRankResult {
    pub fn get(&self, rank: Rank) -> Option<House> {
        match rank {
            Rank::First => self.first,
            Rank::Second => self.second,
            Rank::Third => self.third,
            Rank::Fourth => self.fourth,
        }
    }

    pub fn set(&mut self, rank: Rank, house: Option<House>) {
        match rank {
            Rank::First => self.first = house,
            Rank::Second => self.second = house,
            Rank::Third => self.third = house,
            Rank::Fourth => self.fourth = house,
        }
    }

    pub fn placements(&self) -> impl Iterator<Item = (Rank, House)> + '_ {
        Rank::ALL
            .into_iter()
            .filter_map(move |rank| self.get(rank).map(|house| (rank, house)))
    }

    pub fn has_placements(&self) -> bool {
        self.placements().next().is_some()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

// Unrecognized house names load as unset rather than failing the whole file.
fn lenient_house<'de, D>(deserializer: D) -> Result<Option<House>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(House::parse))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_positions() {
        assert_eq!(Rank::from_position(1), Some(Rank::First));
        assert_eq!(Rank::from_position(4), Some(Rank::Fourth));
        assert_eq!(Rank::from_position(0), None);
        assert_eq!(Rank::from_position(5), None);
        assert_eq!(Rank::Third.position(), 3);
        assert_eq!(Rank::Second.to_string(), "2nd");
    }

    #[test]
    fn test_set_slot_blank_clears() {
        let mut result = EventResult::new("100m-l1");
        result.set_slot(Rank::First, Some("p1".to_string()));
        assert_eq!(result.slot(Rank::First), Some("p1"));

        result.set_slot(Rank::First, Some("   ".to_string()));
        assert_eq!(result.slot(Rank::First), None);
    }

    #[test]
    fn test_placements_skip_gaps() {
        let mut result = EventResult::new("100m-l1");
        result.set_slot(Rank::Third, Some("p3".to_string()));
        result.set_slot(Rank::First, Some("p1".to_string()));

        let placements: Vec<_> = result.placements().collect();
        assert_eq!(placements, vec![(Rank::First, "p1"), (Rank::Third, "p3")]);
        assert!(result.has_placements());
        assert!(!EventResult::new("x").has_placements());
    }

    #[test]
    fn test_event_result_blank_strings_load_as_unset() {
        let json = r#"{"event_id":"100m-l1","first_id":"p1","second_id":"","third_id":null}"#;
        let result: EventResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.first_id.as_deref(), Some("p1"));
        assert!(result.second_id.is_none());
        assert!(result.third_id.is_none());
        assert!(result.fourth_id.is_none());
    }

    #[test]
    fn test_house_rank_result_lenient_load() {
        let json = r#"{"first":"kuning","second":"","third":"Ungu","fourth":"Hijau"}"#;
        let result: HouseRankResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.first, Some(House::Kuning));
        assert_eq!(result.second, None);
        assert_eq!(result.third, None);
        assert_eq!(result.fourth, Some(House::Hijau));
    }

    #[test]
    fn test_house_rank_result_placements() {
        let mut result = HouseRankResult::default();
        assert!(!result.has_placements());
        result.set(Rank::Fourth, Some(House::Biru));
        let placements: Vec<_> = result.placements().collect();
        assert_eq!(placements, vec![(Rank::Fourth, House::Biru)]);
    }
}
