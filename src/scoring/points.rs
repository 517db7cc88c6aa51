use crate::catalog::EventType;
use crate::placement::Rank;

/// Individual event points for 1st..4th
pub const INDIVIDUAL_POINTS: [u32; 4] = [5, 3, 2, 1];

/// Team relay and generic event points for 1st..4th
pub const TEAM_POINTS: [u32; 4] = [10, 7, 5, 3];

/// Points one placement earns.
pub fn points_for(event_type: EventType, rank: Rank) -> u32 {
    schedule(event_type)[rank.position() - 1]
}

pub fn schedule(event_type: EventType) -> &'static [u32; 4] {
    match event_type {
        EventType::Individual => &INDIVIDUAL_POINTS,
        EventType::Team => &TEAM_POINTS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_individual_schedule() {
        let points: Vec<_> = Rank::ALL
            .iter()
            .map(|&r| points_for(EventType::Individual, r))
            .collect();
        assert_eq!(points, vec![5, 3, 2, 1]);
    }

    #[test]
    fn test_team_schedule() {
        let points: Vec<_> = Rank::ALL
            .iter()
            .map(|&r| points_for(EventType::Team, r))
            .collect();
        assert_eq!(points, vec![10, 7, 5, 3]);
    }
}
