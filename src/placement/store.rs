use std::collections::BTreeMap;

use super::types::{EventResult, HouseRankResult, Rank};
use crate::catalog::House;

/// Current placements: at most one `EventResult` per catalog event id, and one
/// `HouseRankResult` per generic event name.
#[derive(Debug, Clone, Default)]
pub struct PlacementStore {
    results: Vec<EventResult>,
    generic: BTreeMap<String, HouseRankResult>,
}

impl PlacementStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from loaded records. A repeated event id keeps the first
    /// record.
    pub fn from_parts(
        results: Vec<EventResult>,
        generic: BTreeMap<String, HouseRankResult>,
    ) -> Self {
        let mut store = Self {
            results: Vec::with_capacity(results.len()),
            generic,
        };
        for result in results {
            if store.result(&result.event_id).is_some() {
                tracing::warn!(event_id = %result.event_id, "dropping duplicate event result");
                continue;
            }
            store.results.push(result);
        }
        store
    }

    pub fn result(&self, event_id: &str) -> Option<&EventResult> {
        self.results.iter().find(|r| r.event_id == event_id)
    }

    pub fn results(&self) -> &[EventResult] {
        &self.results
    }

    /// Set or clear one slot of a catalog event, creating its record on first
    /// use. The value is a participant id or a house name depending on the
    /// event type; the store does not check which.
    pub fn set_placement(&mut self, event_id: &str, rank: Rank, value: Option<String>) {
        let pos = match self.results.iter().position(|r| r.event_id == event_id) {
            Some(pos) => pos,
            None => {
                self.results.push(EventResult::new(event_id));
                self.results.len() - 1
            }
        };
        self.results[pos].set_slot(rank, value);
    }

    pub fn generic(&self, name: &str) -> Option<&HouseRankResult> {
        self.generic.get(name)
    }

    pub fn generic_results(&self) -> &BTreeMap<String, HouseRankResult> {
        &self.generic
    }

    /// Set or clear one rank of a generic event, creating it on first edit.
    pub fn set_generic_placement(&mut self, name: &str, rank: Rank, house: Option<House>) {
        self.generic
            .entry(name.to_string())
            .or_default()
            .set(rank, house);
    }

    /// Event results with at least one slot recorded
    pub fn completed_results(&self) -> impl Iterator<Item = &EventResult> {
        self.results.iter().filter(|r| r.has_placements())
    }

    /// Generic events with at least one rank recorded
    pub fn completed_generic(&self) -> impl Iterator<Item = (&str, &HouseRankResult)> {
        self.generic
            .iter()
            .filter(|(_, r)| r.has_placements())
            .map(|(name, r)| (name.as_str(), r))
    }

    pub fn into_parts(self) -> (Vec<EventResult>, BTreeMap<String, HouseRankResult>) {
        (self.results, self.generic)
    }
}
