//! Allocation result models for the bonus allocation engine.
//!
//! This module contains the [`CalcResult`] type and its associated
//! structures that capture all outputs of one allocation run: per-employee
//! component amounts, per-region pools and payouts.

use serde::{Deserialize, Serialize};

use super::{Employee, Region};

/// The allocation outcome for a single employee.
///
/// Non-qualifying employees always carry zero in every component; the
/// employee itself is embedded so a result is self-describing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeResult {
    /// The employee this result belongs to.
    pub employee: Employee,
    /// Whether the employee passed the qualification predicate.
    pub qualified: bool,
    /// Equal share of the base sub-pool (0 when not qualified).
    pub base: f64,
    /// Level-factor-proportional share of the level sub-pool.
    pub level: f64,
    /// Seniority-factor-proportional share of the seniority sub-pool.
    pub seniority: f64,
    /// Sum of the three components.
    pub total: f64,
}

/// The allocation outcome for one region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionResult {
    /// The region this result covers.
    pub region: Region,
    /// The pool amount allocated to this region.
    pub pool: f64,
    /// Per-employee results for every employee in the region,
    /// qualified or not.
    pub employees: Vec<EmployeeResult>,
    /// Sum of all employee totals. Equals `pool` whenever the share
    /// fractions sum to 1 and every sub-pool fully distributes.
    pub total_payout: f64,
}

/// The per-region results of one allocation run, keyed by region tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionResults {
    /// The SJ region's result.
    #[serde(rename = "SJ")]
    pub sj: RegionResult,
    /// The JY region's result.
    #[serde(rename = "JY")]
    pub jy: RegionResult,
}

/// The complete result of one allocation run over both fixed regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcResult {
    /// Results for both regions.
    pub regions: RegionResults,
}

impl CalcResult {
    /// Returns the result for the given region.
    ///
    /// Only the two fixed regions carry results; [`Region::Unknown`]
    /// yields `None`.
    pub fn region(&self, region: Region) -> Option<&RegionResult> {
        match region {
            Region::Sj => Some(&self.regions.sj),
            Region::Jy => Some(&self.regions.jy),
            Region::Unknown => None,
        }
    }
}
