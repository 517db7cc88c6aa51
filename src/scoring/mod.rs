pub mod engine;
pub mod points;
pub mod standings;

pub use engine::compute_standings;
pub use points::{points_for, INDIVIDUAL_POINTS, TEAM_POINTS};
pub use standings::{empty_standings, HouseStandings, ManualScores, MedalTally};
