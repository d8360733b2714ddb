//! Employee model and related types.
//!
//! This module defines the Employee struct together with the Region and
//! Level enums used throughout the allocation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One of the two fixed organizational regions an employee belongs to.
///
/// Bonus pools are computed per region, and the region set is closed:
/// exactly `SJ` and `JY`. The `Unknown` variant only exists to absorb
/// unrecognized tags at the deserialization boundary; employees carrying
/// it are silently excluded from both regional results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// The SJ region.
    #[serde(rename = "SJ")]
    Sj,
    /// The JY region.
    #[serde(rename = "JY")]
    Jy,
    /// An unrecognized region tag from imported data.
    #[serde(other)]
    Unknown,
}

/// An employee's level, one of a small fixed set.
///
/// Serialized as the bare integer (1, 2 or 3) so that imported snapshots
/// keep their original shape; an unset level is `Option::<Level>::None`,
/// which serializes as `null` and stays distinguishable from any real
/// level.
///
/// # Example
///
/// ```
/// use bonus_engine::models::Level;
///
/// let level: Level = serde_json::from_str("2").unwrap();
/// assert_eq!(level, Level::Two);
/// assert!(serde_json::from_str::<Level>("4").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Level {
    /// Level 1.
    One = 1,
    /// Level 2.
    Two = 2,
    /// Level 3.
    Three = 3,
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as u8
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Level::One),
            2 => Ok(Level::Two),
            3 => Ok(Level::Three),
            other => Err(format!("level must be 1, 2 or 3, got {}", other)),
        }
    }
}

/// Represents an employee subject to bonus allocation.
///
/// The engine treats employees as immutable value snapshots; mutation
/// happens outside (in whatever editing layer feeds the engine) and the
/// allocator only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Display name. Used as an identifier but not required to be unique.
    pub name: String,
    /// The region the employee belongs to.
    pub region: Region,
    /// The employee's level, or `None` when unset.
    pub level: Option<Level>,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Accumulated hours worked (non-negative).
    pub hours: f64,
    /// Sick days taken (non-negative).
    pub sick_days: f64,
    /// Whether the employee has breached their contract.
    pub breach: bool,
}
