//! File-backed snapshot persistence.
//!
//! Replaces the browser-local storage of the original tool with a JSON
//! file on disk. Saving writes the whole snapshot; loading applies it
//! all-or-nothing.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use super::snapshot::{Snapshot, export_json, import_json};

/// Persists snapshots to a single JSON file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store backed by the given file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the stored snapshot.
    ///
    /// A missing file is not an error and loads as `None`. A file that
    /// exists but does not parse is a [`EngineError::SnapshotParse`]
    /// error: corrupt data is surfaced to the caller instead of being
    /// silently treated as empty.
    pub fn load(&self) -> EngineResult<Option<Snapshot>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => import_json(&text).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EngineError::Storage {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Saves the snapshot, replacing any previous contents.
    pub fn save(&self, snapshot: &Snapshot) -> EngineResult<()> {
        let json = export_json(snapshot)?;
        fs::write(&self.path, json).map_err(|e| EngineError::Storage {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Employee, Level, LevelFactors, Region, Settings, Shares};
    use chrono::NaiveDate;

    fn create_test_snapshot() -> Snapshot {
        Snapshot {
            settings: Settings {
                monthly_profits: Settings::monthly_from_total(120_000.0),
                shared_costs: 20_000.0,
                total_profit_share: 0.4,
                min_years: 1.0,
                min_hours: 1000.0,
                sick_limit: 0.05,
                hours_per_day: 7.4,
                level_factors: LevelFactors {
                    level_one: 1.0,
                    level_two: 1.5,
                    level_three: 2.0,
                },
                seniority_factors: vec![],
                shares: Shares {
                    base: 0.3,
                    level: 0.5,
                    seniority: 0.2,
                },
            },
            employees: vec![Employee {
                name: "Ada".to_string(),
                region: Region::Jy,
                level: Some(Level::One),
                hire_date: NaiveDate::from_ymd_opt(2015, 3, 1).unwrap(),
                hours: 1400.0,
                sick_days: 0.0,
                breach: false,
            }],
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bonus-engine-{}-{}.json", name, std::process::id()))
    }

    /// ST-001: save then load round-trips the snapshot
    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_path("round-trip");
        let store = SnapshotStore::new(&path);
        let snapshot = create_test_snapshot();

        store.save(&snapshot).unwrap();
        let loaded = store.load().unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(loaded, Some(snapshot));
    }

    /// ST-002: a missing file loads as no snapshot
    #[test]
    fn test_missing_file_loads_as_none() {
        let store = SnapshotStore::new(temp_path("does-not-exist"));
        assert_eq!(store.load().unwrap(), None);
    }

    /// ST-003: a corrupt file is a parse error, not an empty snapshot
    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "{ half a snapsho").unwrap();
        let store = SnapshotStore::new(&path);

        let result = store.load();
        fs::remove_file(&path).ok();

        match result {
            Err(EngineError::SnapshotParse { .. }) => {}
            other => panic!("Expected SnapshotParse, got {:?}", other),
        }
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let path = temp_path("replace");
        let store = SnapshotStore::new(&path);

        let mut snapshot = create_test_snapshot();
        store.save(&snapshot).unwrap();
        snapshot.employees.clear();
        store.save(&snapshot).unwrap();

        let loaded = store.load().unwrap().unwrap();
        fs::remove_file(&path).ok();

        assert!(loaded.employees.is_empty());
    }
}
