use super::standings::{empty_standings, HouseStandings, ManualScores};
use crate::catalog::{Catalog, EventType, House, SportEvent};
use crate::placement::PlacementStore;
use crate::roster::Roster;

/// Derive per-house medal tallies from every recorded placement.
///
/// Always returns one entry per house in `House::ALL` order. References
/// that don't resolve (unknown event id, unknown participant id, text that
/// is not a house) are skipped, not reported as errors, so half-entered
/// data can still be scored during the meet.
pub fn compute_standings(
    placements: &PlacementStore,
    catalog: &Catalog,
    roster: &Roster,
    manual: &ManualScores,
) -> Vec<HouseStandings> {
    let mut standings = empty_standings(manual);
    let mut skipped = 0usize;

    for result in placements.results() {
        let Some(event) = catalog.get(&result.event_id) else {
            tracing::debug!(event_id = %result.event_id, "skipping result for unknown event");
            skipped += 1;
            continue;
        };

        for (rank, value) in result.placements() {
            let Some(house) = resolve_house(event, value, roster) else {
                tracing::debug!(
                    event_id = %event.id,
                    rank = %rank,
                    value,
                    "skipping placement that resolves to no house"
                );
                skipped += 1;
                continue;
            };

            let entry = &mut standings[house.index()];
            let tally = match event.event_type {
                EventType::Individual => &mut entry.individual,
                EventType::Team => &mut entry.team,
            };
            tally.record(rank);
        }
    }

    // Generic events always score as team placements
    for generic in placements.generic_results().values() {
        for (rank, house) in generic.placements() {
            standings[house.index()].team.record(rank);
        }
    }

    tracing::info!(
        results = placements.results().len(),
        generic = placements.generic_results().len(),
        skipped,
        "standings recomputed"
    );

    standings
}

/// Which house a slot value scores for. Team slots name the house directly;
/// individual slots name a participant whose house is looked up.
fn resolve_house(event: &SportEvent, value: &str, roster: &Roster) -> Option<House> {
    match event.event_type {
        EventType::Team => House::parse(value),
        EventType::Individual => roster.get(value).map(|p| p.house),
    }
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    use super::*;
    use crate::placement::{EventResult, HouseRankResult, Rank};
    use crate::roster::Participant;

    const PARTICIPANTS: usize = 4;

    fn roster() -> Roster {
        Roster::from_participants(
            (0..PARTICIPANTS)
                .map(|i| Participant {
                    id: format!("p{}", i),
                    name: format!("P{}", i),
                    house: House::ALL[i % 4],
                    participant_number: i.to_string(),
                    category: "L1".to_string(),
                    events: vec![],
                })
                .collect(),
        )
    }

    // Known participants, unknown participants, houses and a non-house
    fn arb_slot() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            (0..PARTICIPANTS + 2).prop_map(|i| Some(format!("p{}", i))),
            prop::sample::select(vec!["Biru", "Hijau", "Kuning", "Merah", "Ungu"])
                .prop_map(|h| Some(h.to_string())),
        ]
    }

    fn arb_results() -> impl Strategy<Value = Vec<EventResult>> {
        let catalog = Catalog::default();
        let mut ids: Vec<String> = catalog.events().iter().map(|e| e.id.clone()).collect();
        ids.push("not-in-catalog".to_string());
        let count = ids.len();

        prop::collection::vec(prop::option::of(prop::array::uniform4(arb_slot())), count).prop_map(
            move |slots| {
                ids.iter()
                    .zip(slots)
                    .filter_map(|(id, slots)| {
                        let slots = slots?;
                        let mut result = EventResult::new(id);
                        for (rank, value) in Rank::ALL.into_iter().zip(slots) {
                            result.set_slot(rank, value);
                        }
                        Some(result)
                    })
                    .collect()
            },
        )
    }

    fn arb_generic() -> impl Strategy<Value = BTreeMap<String, HouseRankResult>> {
        let house = prop::option::of(prop::sample::select(House::ALL.to_vec()));
        prop::collection::btree_map(
            "[A-Z][a-z]{1,6}",
            prop::array::uniform4(house).prop_map(|[first, second, third, fourth]| {
                HouseRankResult { first, second, third, fourth }
            }),
            0..5,
        )
    }

    fn resolves(event: &SportEvent, value: &str, roster: &Roster) -> bool {
        resolve_house(event, value, roster).is_some()
    }

    proptest! {
        #[test]
        fn order_of_results_does_not_matter(
            results in arb_results(),
            generic in arb_generic(),
            rotate in 0usize..40,
        ) {
            let catalog = Catalog::default();
            let roster = roster();
            let manual = ManualScores::new();

            let forward = PlacementStore::from_parts(results.clone(), generic.clone());

            let mut reordered = results;
            reordered.reverse();
            if !reordered.is_empty() {
                let by = rotate % reordered.len();
                reordered.rotate_left(by);
            }
            let backward = PlacementStore::from_parts(reordered, generic);

            prop_assert_eq!(
                compute_standings(&forward, &catalog, &roster, &manual),
                compute_standings(&backward, &catalog, &roster, &manual)
            );
        }

        #[test]
        fn medals_are_conserved(results in arb_results(), generic in arb_generic()) {
            let catalog = Catalog::default();
            let roster = roster();
            let store = PlacementStore::from_parts(results, generic);
            let standings = compute_standings(&store, &catalog, &roster, &ManualScores::new());

            for rank in Rank::ALL {
                let mut expected_individual = 0;
                let mut expected_team = 0;
                for result in store.results() {
                    let Some(event) = catalog.get(&result.event_id) else { continue };
                    let Some(value) = result.slot(rank) else { continue };
                    if !resolves(event, value, &roster) {
                        continue;
                    }
                    match event.event_type {
                        EventType::Individual => expected_individual += 1,
                        EventType::Team => expected_team += 1,
                    }
                }
                expected_team += store
                    .generic_results()
                    .values()
                    .filter(|g| g.get(rank).is_some())
                    .count() as u32;

                let individual: u32 = standings.iter().map(|s| s.individual.count(rank)).sum();
                let team: u32 = standings.iter().map(|s| s.team.count(rank)).sum();
                prop_assert_eq!(individual, expected_individual);
                prop_assert_eq!(team, expected_team);
            }
        }
    }
}
