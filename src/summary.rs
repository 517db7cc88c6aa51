use serde::Serialize;

use crate::catalog::{Catalog, EventType, House};
use crate::placement::{PlacementStore, Rank};
use crate::roster::Roster;
use crate::scoring::points_for;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteRef {
    pub name: String,
    pub participant_number: String,
}

/// One resolved placement and the points it earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementRow {
    pub position: usize,
    pub house: House,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub athlete: Option<AthleteRef>,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub event_id: String,
    pub event_name: String,
    pub event_type: EventType,
    pub rows: Vec<PlacementRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericSummary {
    pub name: String,
    pub rows: Vec<PlacementRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total_participants: usize,
    pub house_counts: Vec<(House, usize)>,
    pub total_entries: usize,
}

/// Completed catalog events with their resolvable placements, in recording
/// order. Events missing from the catalog and slots that resolve to no house
/// are left out, matching what the standings count.
pub fn event_summaries(
    placements: &PlacementStore,
    catalog: &Catalog,
    roster: &Roster,
) -> Vec<EventSummary> {
    placements
        .completed_results()
        .filter_map(|result| {
            let event = catalog.get(&result.event_id)?;
            let rows = result
                .placements()
                .filter_map(|(rank, value)| {
                    let (house, athlete) = match event.event_type {
                        EventType::Team => (House::parse(value)?, None),
                        EventType::Individual => {
                            let p = roster.get(value)?;
                            let athlete = AthleteRef {
                                name: p.name.clone(),
                                participant_number: p.participant_number.clone(),
                            };
                            (p.house, Some(athlete))
                        }
                    };
                    Some(PlacementRow {
                        position: rank.position(),
                        house,
                        athlete,
                        points: points_for(event.event_type, rank),
                    })
                })
                .collect();

            Some(EventSummary {
                event_id: event.id.clone(),
                event_name: event.name.clone(),
                event_type: event.event_type,
                rows,
            })
        })
        .collect()
}

/// Completed generic events, scored on the team schedule.
pub fn generic_summaries(placements: &PlacementStore) -> Vec<GenericSummary> {
    placements
        .completed_generic()
        .map(|(name, result)| GenericSummary {
            name: name.to_string(),
            rows: result
                .placements()
                .map(|(rank, house)| generic_row(rank, house))
                .collect(),
        })
        .collect()
}

fn generic_row(rank: Rank, house: House) -> PlacementRow {
    PlacementRow {
        position: rank.position(),
        house,
        athlete: None,
        points: points_for(EventType::Team, rank),
    }
}

pub fn roster_stats(roster: &Roster) -> RosterStats {
    RosterStats {
        total_participants: roster.len(),
        house_counts: roster.house_counts().to_vec(),
        total_entries: roster.iter().map(|p| p.events.len()).sum(),
    }
}
