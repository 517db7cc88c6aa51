pub mod awards;
pub mod category;
pub mod standings;

pub use awards::{athlete_performances, compare_athletes, rank_awards, AthleteAward, Awards, AWARD_SIZE};
pub use category::{AwardCategory, CategoryConvention};
pub use standings::{compare_standings, rank_standings};
