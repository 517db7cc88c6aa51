use std::collections::HashSet;

use super::types::{normalize_number, ParticipantDraft, Roster};
use crate::catalog::{is_eligible, Catalog, EventType};

pub const MAX_INDIVIDUAL_EVENTS: usize = 2;
pub const MAX_TEAM_EVENTS: usize = 2;

/// Validate a registration or edit before it reaches the roster.
///
/// `existing_id` is the participant being edited, if any, so its own bib
/// number does not count as taken. Returns all validation errors at once.
pub fn validate_participant(
    draft: &ParticipantDraft,
    existing_id: Option<&str>,
    roster: &Roster,
    catalog: &Catalog,
) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push("name: must not be empty".to_string());
    }

    if draft.participant_number.trim().is_empty() {
        errors.push("participant_number: must not be empty".to_string());
    } else {
        let wanted = normalize_number(&draft.participant_number);
        let taken = roster.iter().any(|p| {
            Some(p.id.as_str()) != existing_id && normalize_number(&p.participant_number) == wanted
        });
        if taken {
            errors.push(format!(
                "participant_number: '{}' is already registered",
                draft.participant_number.trim()
            ));
        }
    }

    let mut seen = HashSet::new();
    let mut individual = 0;
    let mut team = 0;

    for (i, event_id) in draft.events.iter().enumerate() {
        if !seen.insert(event_id.as_str()) {
            errors.push(format!("events[{}]: '{}' entered twice", i, event_id));
            continue;
        }

        let Some(event) = catalog.get(event_id) else {
            errors.push(format!("events[{}]: unknown event '{}'", i, event_id));
            continue;
        };

        match event.event_type {
            EventType::Individual => individual += 1,
            EventType::Team => team += 1,
        }

        if !is_eligible(&event.category, &draft.category) {
            errors.push(format!(
                "events[{}]: '{}' ({}) is not open to category '{}'",
                i, event.name, event.category, draft.category
            ));
        }
    }

    if individual > MAX_INDIVIDUAL_EVENTS {
        errors.push(format!(
            "events: {} individual events, at most {} allowed",
            individual, MAX_INDIVIDUAL_EVENTS
        ));
    }
    if team > MAX_TEAM_EVENTS {
        errors.push(format!(
            "events: {} team events, at most {} allowed",
            team, MAX_TEAM_EVENTS
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a new participant and add it to the roster, returning its id.
pub fn register_participant(
    roster: &mut Roster,
    draft: ParticipantDraft,
    catalog: &Catalog,
) -> Result<String, Vec<String>> {
    validate_participant(&draft, None, roster, catalog)?;
    Ok(roster.register(draft))
}

/// Validate an edit of participant `id` and apply it.
pub fn edit_participant(
    roster: &mut Roster,
    id: &str,
    draft: ParticipantDraft,
    catalog: &Catalog,
) -> Result<(), Vec<String>> {
    if roster.get(id).is_none() {
        return Err(vec![format!("id: no participant '{}'", id)]);
    }
    validate_participant(&draft, Some(id), roster, catalog)?;
    roster.edit(id, draft);
    Ok(())
}
