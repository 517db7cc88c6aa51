pub mod eligibility;
pub mod events;
pub mod types;

pub use eligibility::is_eligible;
pub use events::{Catalog, DEFAULT_GENERIC_EVENTS};
pub use types::{EventGroup, EventType, House, SportEvent};
