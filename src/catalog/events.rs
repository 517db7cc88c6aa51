use super::eligibility::is_eligible;
use super::types::{EventGroup, EventType, SportEvent};

/// Generic (non-catalog) events scored by house rank only.
pub const DEFAULT_GENERIC_EVENTS: [&str; 9] = [
    "Sukaneka Tahun 1",
    "Sukaneka Tahun 2",
    "Sukaneka Tahun 3",
    "Sukaneka Tahun 4",
    "Sukaneka Tahun 5",
    "Sukaneka Tahun 6",
    "Sukaneka PPKI",
    "Tarik Tali (Lelaki)",
    "Tarik Tali (Perempuan)",
];

/// Ordered, immutable list of catalog events.
#[derive(Debug, Clone)]
pub struct Catalog {
    events: Vec<SportEvent>,
}

impl Catalog {
    pub fn new(events: Vec<SportEvent>) -> Self {
        Self { events }
    }

    /// Look up an event by id. Unknown ids are `None`, never an error.
    pub fn get(&self, id: &str) -> Option<&SportEvent> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events(&self) -> &[SportEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn by_group(&self, group: EventGroup) -> impl Iterator<Item = &SportEvent> {
        self.events.iter().filter(move |e| e.group == group)
    }

    /// Events of one type a participant of `participant_category` may enter,
    /// in catalog order.
    pub fn eligible_events(
        &self,
        participant_category: &str,
        event_type: EventType,
    ) -> Vec<&SportEvent> {
        self.events
            .iter()
            .filter(|e| e.event_type == event_type && is_eligible(&e.category, participant_category))
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        use EventGroup::{Field, Track};
        use EventType::{Individual, Team};

        let ev = SportEvent::new;
        Self::new(vec![
            // L1 & P1 field
            ev("lp-l1", "Lontar Peluru L1", Individual, "L1", Field),
            ev("lp-p1", "Lontar Peluru P1", Individual, "P1", Field),
            ev("lj-l1", "Lompat Jauh L1", Individual, "L1", Field),
            ev("lj-p1", "Lompat Jauh P1", Individual, "P1", Field),
            // L1 & P1 track
            ev("100m-l1", "100M L1", Individual, "L1", Track),
            ev("100m-p1", "100M P1", Individual, "P1", Track),
            ev("200m-l1", "200M L1", Individual, "L1", Track),
            ev("200m-p1", "200M P1", Individual, "P1", Track),
            // L2 & P2 field
            ev("lp-l2", "Lontar Peluru L2", Individual, "L2", Field),
            ev("lp-p2", "Lontar Peluru P2", Individual, "P2", Field),
            ev("lj-l2", "Lompat Jauh L2", Individual, "L2", Field),
            ev("lj-p2", "Lompat Jauh P2", Individual, "P2", Field),
            // L2 & P2 track
            ev("100m-t3-l2", "100M Tahun 3 L2", Individual, "L2", Track),
            ev("100m-t3-p2", "100M Tahun 3 P2", Individual, "P2", Track),
            ev("100m-t4-l2", "100M Tahun 4 L2", Individual, "L2", Track),
            ev("100m-t4-p2", "100M Tahun 4 P2", Individual, "P2", Track),
            // L3 & P3, track only
            ev("50m-t1-l3", "50M Tahun 1 L3", Individual, "L3", Track),
            ev("50m-t1-p3", "50M Tahun 1 P3", Individual, "P3", Track),
            ev("50m-t2-l3", "50M Tahun 2 L3", Individual, "L3", Track),
            ev("50m-t2-p3", "50M Tahun 2 P3", Individual, "P3", Track),
            // PPKI field
            ev("lp-ppki-l", "Lontar Peluru PPKI L", Individual, "PPKI L", Field),
            ev("lp-ppki-p", "Lontar Peluru PPKI P", Individual, "PPKI P", Field),
            ev("lj-ppki-l", "Lompat Jauh PPKI L", Individual, "PPKI L", Field),
            ev("lj-ppki-p", "Lompat Jauh PPKI P", Individual, "PPKI P", Field),
            // PPKI track
            ev("50m-ppki-t1-l", "50M PPKI Tahap 1 L", Individual, "PPKI L", Track),
            ev("50m-ppki-t1-p", "50M PPKI Tahap 1 P", Individual, "PPKI P", Track),
            ev("100m-ppki-t2-l", "100M PPKI Tahap 2 (L)", Individual, "PPKI L", Track),
            ev("100m-ppki-t2-p", "100M PPKI Tahap 2 (P)", Individual, "PPKI P", Track),
            ev("200m-ppki-mix", "200M PPKI Mix", Individual, "PPKI Mix", Track),
            // Relays
            ev("4x50m-l3", "4x50M L3", Team, "L3", Track),
            ev("4x50m-p3", "4x50M P3", Team, "P3", Track),
            ev("4x100m-l2", "4x100M L2", Team, "L2", Track),
            ev("4x100m-p2", "4x100M P2", Team, "P2", Track),
            ev("4x100m-l1", "4x100M L1", Team, "L1", Track),
            ev("4x100m-p1", "4x100M P1", Team, "P1", Track),
            ev("4x100m-ppki-mix", "4x100M PPKI Mix", Team, "PPKI Mix", Track),
            // Open relays
            ev("4x200m-terbuka-l", "4x200M Terbuka L", Team, "Terbuka L", Track),
            ev("4x200m-terbuka-p", "4x200M Terbuka P", Team, "Terbuka P", Track),
        ])
    }
}
