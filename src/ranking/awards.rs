use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

use super::category::{AwardCategory, CategoryConvention};
use crate::catalog::{Catalog, EventType, House};
use crate::placement::PlacementStore;
use crate::roster::{Participant, Roster};
use crate::scoring::{points_for, MedalTally};

/// Athletes listed per award category
pub const AWARD_SIZE: usize = 3;

/// One athlete's record across individual events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AthleteAward {
    pub participant_id: String,
    pub name: String,
    pub house: House,
    pub participant_number: String,
    pub category: String,
    pub medals: MedalTally,
    pub points: u32,
}

impl AthleteAward {
    fn new(participant: &Participant) -> Self {
        Self {
            participant_id: participant.id.clone(),
            name: participant.name.clone(),
            house: participant.house,
            participant_number: participant.participant_number.clone(),
            category: participant.category.clone(),
            medals: MedalTally::default(),
            points: 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Awards {
    pub male: Vec<AthleteAward>,
    pub female: Vec<AthleteAward>,
}

impl Awards {
    pub fn list(&self, category: AwardCategory) -> &[AthleteAward] {
        match category {
            AwardCategory::Male => &self.male,
            AwardCategory::Female => &self.female,
        }
    }
}

/// Same shape as the house comparator, on individual counts only:
/// gold, silver, bronze, then points, all descending.
pub fn compare_athletes(a: &AthleteAward, b: &AthleteAward) -> Ordering {
    b.medals
        .gold
        .cmp(&a.medals.gold)
        .then_with(|| b.medals.silver.cmp(&a.medals.silver))
        .then_with(|| b.medals.bronze.cmp(&a.medals.bronze))
        .then_with(|| b.points.cmp(&a.points))
}

/// Every athlete with at least one individual placement, in the order they
/// were first credited. Team and generic events never count.
pub fn athlete_performances(
    placements: &PlacementStore,
    catalog: &Catalog,
    roster: &Roster,
) -> Vec<AthleteAward> {
    let mut athletes: Vec<AthleteAward> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for result in placements.results() {
        let Some(event) = catalog.get(&result.event_id) else {
            continue;
        };
        if event.event_type != EventType::Individual {
            continue;
        }

        for (rank, participant_id) in result.placements() {
            let Some(participant) = roster.get(participant_id) else {
                tracing::debug!(
                    event_id = %event.id,
                    participant_id,
                    "skipping placement for unknown participant"
                );
                continue;
            };

            let pos = *index.entry(participant.id.as_str()).or_insert_with(|| {
                athletes.push(AthleteAward::new(participant));
                athletes.len() - 1
            });

            let athlete = &mut athletes[pos];
            athlete.medals.record(rank);
            athlete.points = athlete.points.saturating_add(points_for(EventType::Individual, rank));
        }
    }

    athletes
}

/// Top athletes per award category.
///
/// Athletes whose category matches neither marker are left out. Each list
/// is sorted with `compare_athletes`, ties keep first-credited order, and
/// only the top `AWARD_SIZE` are kept.
pub fn rank_awards(
    placements: &PlacementStore,
    catalog: &Catalog,
    roster: &Roster,
    convention: &CategoryConvention,
) -> Awards {
    let mut awards = Awards::default();

    for athlete in athlete_performances(placements, catalog, roster) {
        match convention.classify(&athlete.category) {
            Some(AwardCategory::Male) => awards.male.push(athlete),
            Some(AwardCategory::Female) => awards.female.push(athlete),
            None => {}
        }
    }

    for list in [&mut awards.male, &mut awards.female] {
        list.sort_by(compare_athletes);
        list.truncate(AWARD_SIZE);
    }

    awards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Rank;

    fn participant(id: &str, house: House, category: &str) -> Participant {
        Participant {
            id: id.to_string(),
            name: id.to_uppercase(),
            house,
            participant_number: format!("N-{}", id),
            category: category.to_string(),
            events: vec![],
        }
    }

    fn place(store: &mut PlacementStore, event_id: &str, rank: Rank, id: &str) {
        store.set_placement(event_id, rank, Some(id.to_string()));
    }

    fn ids(list: &[AthleteAward]) -> Vec<&str> {
        list.iter().map(|a| a.participant_id.as_str()).collect()
    }

    fn awards_for(store: &PlacementStore, roster: &Roster) -> Awards {
        rank_awards(store, &Catalog::default(), roster, &CategoryConvention::default())
    }

    #[test]
    fn test_gold_count_beats_points() {
        let roster = Roster::from_participants(vec![
            participant("d", House::Biru, "L2"),
            participant("c", House::Hijau, "L2"),
        ]);
        let mut store = PlacementStore::new();
        // D: 1st + 2nd = 8 pts, C: 1st + 1st = 10 pts
        place(&mut store, "lp-l2", Rank::First, "d");
        place(&mut store, "lj-l2", Rank::Second, "d");
        place(&mut store, "100m-t3-l2", Rank::First, "c");
        place(&mut store, "100m-t4-l2", Rank::First, "c");

        let awards = awards_for(&store, &roster);
        assert_eq!(ids(&awards.male), vec!["c", "d"]);
        assert_eq!(awards.male[0].medals.gold, 2);
        assert_eq!(awards.male[0].points, 10);
        assert_eq!(awards.male[1].medals.silver, 1);
        assert_eq!(awards.male[1].points, 8);
        assert!(awards.female.is_empty());
    }

    #[test]
    fn test_points_break_medal_tie() {
        let roster = Roster::from_participants(vec![
            participant("a", House::Biru, "P1"),
            participant("b", House::Merah, "P1"),
        ]);
        let mut store = PlacementStore::new();
        // same gold/silver/bronze, b has an extra 4th place
        place(&mut store, "100m-p1", Rank::First, "a");
        place(&mut store, "200m-p1", Rank::First, "b");
        place(&mut store, "lj-p1", Rank::Fourth, "b");

        let awards = awards_for(&store, &roster);
        assert_eq!(ids(&awards.female), vec!["b", "a"]);
    }

    #[test]
    fn test_team_events_do_not_count() {
        let roster = Roster::from_participants(vec![participant("a", House::Biru, "L1")]);
        let mut store = PlacementStore::new();
        place(&mut store, "4x100m-l1", Rank::First, "a");
        place(&mut store, "4x100m-l1", Rank::Second, "Biru");
        store.set_generic_placement("Sukaneka Tahun 1", Rank::First, Some(House::Biru));

        let awards = awards_for(&store, &roster);
        assert!(awards.male.is_empty());
        assert!(awards.female.is_empty());
    }

    #[test]
    fn test_unknown_participant_and_event_skipped() {
        let roster = Roster::from_participants(vec![participant("a", House::Biru, "L1")]);
        let mut store = PlacementStore::new();
        place(&mut store, "100m-l1", Rank::First, "ghost");
        place(&mut store, "100m-l1", Rank::Second, "a");
        place(&mut store, "no-such-event", Rank::First, "a");

        let awards = awards_for(&store, &roster);
        assert_eq!(ids(&awards.male), vec!["a"]);
        assert_eq!(awards.male[0].medals.gold, 0);
        assert_eq!(awards.male[0].medals.silver, 1);
        assert_eq!(awards.male[0].points, 3);
    }

    #[test]
    fn test_truncated_to_award_size() {
        let roster = Roster::from_participants(
            ["a", "b", "c", "d", "e"]
                .iter()
                .map(|id| participant(id, House::Kuning, "P3"))
                .collect(),
        );
        let mut store = PlacementStore::new();
        place(&mut store, "50m-t1-p3", Rank::First, "a");
        place(&mut store, "50m-t1-p3", Rank::Second, "b");
        place(&mut store, "50m-t1-p3", Rank::Third, "c");
        place(&mut store, "50m-t1-p3", Rank::Fourth, "d");
        place(&mut store, "50m-t2-p3", Rank::First, "e");
        place(&mut store, "50m-t2-p3", Rank::Second, "d");

        let awards = awards_for(&store, &roster);
        assert_eq!(awards.female.len(), AWARD_SIZE);
        assert_eq!(ids(&awards.female), vec!["a", "e", "d"]);
    }

    #[test]
    fn test_full_tie_keeps_first_credited_order() {
        let roster = Roster::from_participants(vec![
            participant("late", House::Biru, "L1"),
            participant("early", House::Hijau, "L1"),
        ]);
        let mut store = PlacementStore::new();
        place(&mut store, "100m-l1", Rank::First, "early");
        place(&mut store, "200m-l1", Rank::First, "late");

        let awards = awards_for(&store, &roster);
        assert_eq!(ids(&awards.male), vec!["early", "late"]);
    }

    #[test]
    fn test_unclassified_category_excluded() {
        let roster = Roster::from_participants(vec![
            participant("t", House::Merah, "Guru"),
            participant("s", House::Merah, "L1"),
        ]);
        let mut store = PlacementStore::new();
        place(&mut store, "100m-l1", Rank::First, "t");
        place(&mut store, "100m-l1", Rank::Second, "s");

        let awards = awards_for(&store, &roster);
        assert_eq!(ids(&awards.male), vec!["s"]);
        assert!(awards.female.is_empty());
    }

    #[test]
    fn test_custom_convention() {
        let roster = Roster::from_participants(vec![participant("x", House::Biru, "PPKI L")]);
        let mut store = PlacementStore::new();
        place(&mut store, "lp-ppki-l", Rank::First, "x");

        let convention = CategoryConvention::new("PPKI L", "PPKI P");
        let awards = rank_awards(&store, &Catalog::default(), &roster, &convention);
        assert_eq!(ids(awards.list(AwardCategory::Male)), vec!["x"]);
        assert!(awards.list(AwardCategory::Female).is_empty());
    }

    #[test]
    fn test_performances_include_everyone_placed() {
        let roster = Roster::from_participants(vec![
            participant("a", House::Biru, "L1"),
            participant("b", House::Hijau, "Guru"),
            participant("idle", House::Merah, "L1"),
        ]);
        let mut store = PlacementStore::new();
        place(&mut store, "100m-l1", Rank::Third, "b");
        place(&mut store, "100m-l1", Rank::Fourth, "a");

        let all = athlete_performances(&store, &Catalog::default(), &roster);
        assert_eq!(ids(&all), vec!["b", "a"]);
    }
}
