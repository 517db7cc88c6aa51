use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

use super::store::PlacementStore;
use super::types::{EventResult, HouseRankResult};
use crate::roster::{Participant, Roster};
use crate::scoring::ManualScores;

pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk meet file: the roster, every placement and the manual scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetSnapshot {
    pub version: u32,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(default)]
    pub results: Vec<EventResult>,
    #[serde(default)]
    pub generic_results: BTreeMap<String, HouseRankResult>,
    #[serde(default)]
    pub sukantara: ManualScores,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for MeetSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            participants: Vec::new(),
            results: Vec::new(),
            generic_results: BTreeMap::new(),
            sukantara: ManualScores::new(),
            updated_at: None,
        }
    }
}

/// The in-memory working set the engine reads from.
#[derive(Debug, Clone, Default)]
pub struct Meet {
    pub roster: Roster,
    pub placements: PlacementStore,
    pub sukantara: ManualScores,
}

impl From<MeetSnapshot> for Meet {
    fn from(snapshot: MeetSnapshot) -> Self {
        Self {
            roster: Roster::from_participants(snapshot.participants),
            placements: PlacementStore::from_parts(snapshot.results, snapshot.generic_results),
            sukantara: snapshot.sukantara,
        }
    }
}

impl From<Meet> for MeetSnapshot {
    fn from(meet: Meet) -> Self {
        let (results, generic_results) = meet.placements.into_parts();
        Self {
            version: SNAPSHOT_VERSION,
            participants: meet.roster.participants().to_vec(),
            results,
            generic_results,
            sukantara: meet.sukantara,
            updated_at: None,
        }
    }
}

/// Get the default meet file path (~/.config/kot-scorer/meet.json)
pub fn get_snapshot_path() -> PathBuf {
    crate::config::get_config_dir().join("meet.json")
}

/// Load a meet snapshot from a JSON file
///
/// If the file doesn't exist, returns an empty snapshot.
/// If the file exists but has an unsupported version, returns an error.
pub fn load_snapshot(path: &Path) -> Result<MeetSnapshot> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no meet file yet, starting empty");
        return Ok(MeetSnapshot::default());
    }

    let file = File::open(path)
        .with_context(|| format!("Failed to open meet file at {}", path.display()))?;

    let snapshot: MeetSnapshot = serde_json::from_reader(file)
        .with_context(|| format!("Failed to parse meet file at {}", path.display()))?;

    if snapshot.version != SNAPSHOT_VERSION {
        anyhow::bail!("Unsupported meet file version: {}", snapshot.version);
    }

    Ok(snapshot)
}

/// Save a meet snapshot atomically, stamping `updated_at`.
///
/// Creates the parent directory if it doesn't exist.
pub fn save_snapshot(path: &Path, snapshot: &MeetSnapshot) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut stamped = snapshot.clone();
    stamped.updated_at = Some(Utc::now());

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    serde_json::to_writer_pretty(&mut file, &stamped).context("Failed to serialize meet file")?;

    file.commit().context("Failed to save meet file")?;

    Ok(())
}
