use serde::Serialize;
use std::collections::BTreeMap;

use super::points::{INDIVIDUAL_POINTS, TEAM_POINTS};
use crate::catalog::House;
use crate::placement::Rank;

/// Operator-entered supplementary score per house. A missing house is 0.
pub type ManualScores = BTreeMap<House, u32>;

/// Counts of 1st..4th place finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub fourth: u32,
}

impl MedalTally {
    pub fn record(&mut self, rank: Rank) {
        match rank {
            Rank::First => self.gold = self.gold.saturating_add(1),
            Rank::Second => self.silver = self.silver.saturating_add(1),
            Rank::Third => self.bronze = self.bronze.saturating_add(1),
            Rank::Fourth => self.fourth = self.fourth.saturating_add(1),
        }
    }

    pub fn count(&self, rank: Rank) -> u32 {
        match rank {
            Rank::First => self.gold,
            Rank::Second => self.silver,
            Rank::Third => self.bronze,
            Rank::Fourth => self.fourth,
        }
    }

    pub fn total(&self) -> u64 {
        [self.gold, self.silver, self.bronze, self.fourth]
            .iter()
            .map(|&n| u64::from(n))
            .sum()
    }

    /// Weighted sum using a 1st..4th point schedule
    pub fn points(&self, schedule: &[u32; 4]) -> u64 {
        Rank::ALL
            .iter()
            .zip(schedule)
            .map(|(&rank, &pts)| u64::from(self.count(rank)) * u64::from(pts))
            .sum()
    }
}

/// Running tallies for one house.
///
/// Individual and team placements are kept in separate tallies; generic
/// events count as team placements. `sukantara` is copied from the manual
/// score and never derived from placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HouseStandings {
    pub house: House,
    pub individual: MedalTally,
    pub team: MedalTally,
    pub sukantara: u32,
}

impl HouseStandings {
    pub fn new(house: House, sukantara: u32) -> Self {
        Self {
            house,
            individual: MedalTally::default(),
            team: MedalTally::default(),
            sukantara,
        }
    }

    pub fn total_gold(&self) -> u32 {
        self.individual.gold.saturating_add(self.team.gold)
    }

    pub fn total_silver(&self) -> u32 {
        self.individual.silver.saturating_add(self.team.silver)
    }

    pub fn total_bronze(&self) -> u32 {
        self.individual.bronze.saturating_add(self.team.bronze)
    }

    pub fn total_fourth(&self) -> u32 {
        self.individual.fourth.saturating_add(self.team.fourth)
    }

    pub fn total_medals(&self) -> u64 {
        self.individual.total() + self.team.total()
    }

    pub fn individual_points(&self) -> u64 {
        self.individual.points(&INDIVIDUAL_POINTS)
    }

    pub fn team_points(&self) -> u64 {
        self.team.points(&TEAM_POINTS)
    }

    /// Points are summed in `u64` so a maximal manual score cannot overflow.
    pub fn total_points(&self) -> u64 {
        self.individual_points() + self.team_points() + u64::from(self.sukantara)
    }
}

/// Zeroed standings for every house, in `House::ALL` order.
pub fn empty_standings(manual: &ManualScores) -> Vec<HouseStandings> {
    House::ALL
        .iter()
        .map(|&house| HouseStandings::new(house, manual.get(&house).copied().unwrap_or(0)))
        .collect()
}
