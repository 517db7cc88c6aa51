pub mod storage;
pub mod store;
pub mod types;

pub use storage::{get_snapshot_path, load_snapshot, save_snapshot, Meet, MeetSnapshot};
pub use store::PlacementStore;
pub use types::{EventResult, HouseRankResult, Rank};
