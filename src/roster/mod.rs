pub mod types;
pub mod validation;

pub use types::{Participant, ParticipantDraft, Roster};
pub use validation::{
    edit_participant, register_participant, validate_participant, MAX_INDIVIDUAL_EVENTS,
    MAX_TEAM_EVENTS,
};
