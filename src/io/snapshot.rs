//! JSON snapshot import and export.
//!
//! A snapshot bundles the settings and the employee list into one value
//! that round-trips through JSON without losing numeric precision or
//! optional-field information (an unset level stays `null`).

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, Settings};

/// A combined settings-and-employees snapshot.
///
/// This is the unit of import/export and persistence: it is applied
/// all-or-nothing, so a failed parse never leaves the caller with half
/// of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The settings in effect for this snapshot.
    pub settings: Settings,
    /// The employee list.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

/// Serializes a snapshot to pretty-printed JSON.
pub fn export_json(snapshot: &Snapshot) -> EngineResult<String> {
    serde_json::to_string_pretty(snapshot).map_err(|e| EngineError::SnapshotEncode {
        message: e.to_string(),
    })
}

/// Parses a snapshot from JSON text.
///
/// Parsing is all-or-nothing: on failure the typed error carries the
/// serde message and no partial data, so the caller's previously-held
/// settings and employees stay intact.
///
/// # Example
///
/// ```
/// use bonus_engine::io::import_json;
///
/// let result = import_json("{ not json }");
/// assert!(result.is_err());
/// ```
pub fn import_json(text: &str) -> EngineResult<Snapshot> {
    serde_json::from_str(text).map_err(|e| EngineError::SnapshotParse {
        message: e.to_string(),
    })
}
