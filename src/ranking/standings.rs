use std::cmp::Ordering;

use crate::scoring::HouseStandings;

/// Leaderboard order for houses: more golds first, then silvers, then
/// bronzes, then total points. Raw points only break medal ties.
pub fn compare_standings(a: &HouseStandings, b: &HouseStandings) -> Ordering {
    b.total_gold()
        .cmp(&a.total_gold())
        .then_with(|| b.total_silver().cmp(&a.total_silver()))
        .then_with(|| b.total_bronze().cmp(&a.total_bronze()))
        .then_with(|| b.total_points().cmp(&a.total_points()))
}

/// Sort houses for display. Houses equal on every level keep their input
/// order, which is the fixed house order when fed from `compute_standings`.
pub fn rank_standings(standings: &[HouseStandings]) -> Vec<HouseStandings> {
    let mut ranked = standings.to_vec();
    ranked.sort_by(compare_standings);
    ranked
}


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use crate::catalog::House;
    use crate::scoring::MedalTally;

    fn arb_tally() -> impl Strategy<Value = MedalTally> {
        prop::array::uniform4(0u32..4).prop_map(|[gold, silver, bronze, fourth]| MedalTally {
            gold,
            silver,
            bronze,
            fourth,
        })
    }

    fn arb_standings() -> impl Strategy<Value = HouseStandings> {
        (prop::sample::select(House::ALL.to_vec()), arb_tally(), arb_tally(), 0u32..6).prop_map(
            |(house, individual, team, sukantara)| HouseStandings {
                house,
                individual,
                team,
                sukantara,
            },
        )
    }

    fn key(s: &HouseStandings) -> (u32, u32, u32, u64) {
        (s.total_gold(), s.total_silver(), s.total_bronze(), s.total_points())
    }

    proptest! {
        #[test]
        fn ranking_is_ordered_and_stable(input in prop::collection::vec(arb_standings(), 0..8)) {
            let ranked = rank_standings(&input);
            prop_assert_eq!(ranked.len(), input.len());

            // never a strictly better house after a strictly worse one
            for pair in ranked.windows(2) {
                prop_assert!(key(&pair[0]) >= key(&pair[1]));
            }

            // map each output back to an input position; equal keys keep order
            let mut used = vec![false; input.len()];
            let mut positions = Vec::with_capacity(ranked.len());
            for s in &ranked {
                let pos = input
                    .iter()
                    .enumerate()
                    .position(|(i, candidate)| !used[i] && candidate == s);
                prop_assert!(pos.is_some());
                let pos = pos.unwrap();
                used[pos] = true;
                positions.push(pos);
            }
            for i in 0..ranked.len() {
                for j in i + 1..ranked.len() {
                    if key(&ranked[i]) == key(&ranked[j]) {
                        prop_assert!(positions[i] < positions[j]);
                    }
                }
            }
        }
    }
}
