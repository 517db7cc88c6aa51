use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::House;

/// A registered athlete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub house: House,
    pub participant_number: String, // bib number shown to humans
    pub category: String,
    #[serde(default)]
    pub events: Vec<String>, // catalog event ids
}

/// Everything about a participant except the generated id.
/// Used for both registration and edits.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ParticipantDraft {
    pub name: String,
    pub house: House,
    pub participant_number: String,
    pub category: String,
    #[serde(default)]
    pub events: Vec<String>,
}

impl ParticipantDraft {
    fn into_participant(self, id: String) -> Participant {
        Participant {
            id,
            name: self.name,
            house: self.house,
            participant_number: self.participant_number,
            category: self.category,
            events: self.events,
        }
    }
}

impl From<&Participant> for ParticipantDraft {
    fn from(participant: &Participant) -> Self {
        Self {
            name: participant.name.clone(),
            house: participant.house,
            participant_number: participant.participant_number.clone(),
            category: participant.category.clone(),
            events: participant.events.clone(),
        }
    }
}

/// Participants keyed by id, iterated in registration order.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    index: HashMap<String, usize>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from stored participants. A repeated id keeps the first
    /// record and drops the rest.
    pub fn from_participants(participants: Vec<Participant>) -> Self {
        let mut roster = Self::new();
        for participant in participants {
            if roster.index.contains_key(&participant.id) {
                tracing::warn!(id = %participant.id, "dropping participant with duplicate id");
                continue;
            }
            roster.insert(participant);
        }
        roster
    }

    fn insert(&mut self, participant: Participant) {
        self.index
            .insert(participant.id.clone(), self.participants.len());
        self.participants.push(participant);
    }

    /// Millisecond timestamp ids, bumped until unused.
    fn next_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.index.contains_key(&candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }

    /// Register a new participant and return its generated id.
    pub fn register(&mut self, draft: ParticipantDraft) -> String {
        let id = self.next_id();
        self.insert(draft.into_participant(id.clone()));
        id
    }

    /// Replace every field of participant `id` except the id itself.
    /// Returns false if there is no such participant.
    pub fn edit(&mut self, id: &str, draft: ParticipantDraft) -> bool {
        match self.index.get(id) {
            Some(&pos) => {
                self.participants[pos] = draft.into_participant(id.to_string());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Participant> {
        self.index.get(id).map(|&pos| &self.participants[pos])
    }

    /// Find by bib number, compared trimmed and case-insensitively
    pub fn find_by_number(&self, number: &str) -> Option<&Participant> {
        let wanted = normalize_number(number);
        self.participants
            .iter()
            .find(|p| normalize_number(&p.participant_number) == wanted)
    }

    /// Look up by id first, then by bib number.
    pub fn resolve(&self, id_or_number: &str) -> Option<&Participant> {
        self.get(id_or_number).or_else(|| self.find_by_number(id_or_number))
    }

    /// Participants entered in `event_id` (if given) whose name or bib number
    /// contains `term` (if given), case-insensitively, in registration order.
    pub fn search(&self, event_id: Option<&str>, term: Option<&str>) -> Vec<&Participant> {
        let term = term
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty());

        self.participants
            .iter()
            .filter(|p| event_id.map_or(true, |id| p.events.iter().any(|e| e == id)))
            .filter(|p| {
                term.as_deref().map_or(true, |t| {
                    p.name.to_lowercase().contains(t)
                        || p.participant_number.to_lowercase().contains(t)
                })
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> {
        self.participants.iter()
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Participants per house, in `House::ALL` order.
    pub fn house_counts(&self) -> [(House, usize); 4] {
        let mut counts = House::ALL.map(|house| (house, 0));
        for participant in &self.participants {
            counts[participant.house.index()].1 += 1;
        }
        counts
    }
}

pub(crate) fn normalize_number(number: &str) -> String {
    number.trim().to_lowercase()
}
