//! Request types for the bonus allocation API.
//!
//! This module defines the JSON request structures for the `/allocate`
//! endpoint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Employee, Level, LevelFactors, Region, SeniorityBand, Settings, Shares};

/// Request body for the `/allocate` endpoint.
///
/// Every field is optional: omitted settings and employees fall back to
/// the server's loaded defaults and seed list, an omitted reference date
/// defaults to today.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationRequest {
    /// Settings override for this calculation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsRequest>,
    /// The employees to allocate bonuses over.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employees: Option<Vec<EmployeeRequest>>,
    /// Reference date for tenure and seniority; defaults to today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_date: Option<NaiveDate>,
}

/// Employee information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    /// Display name.
    pub name: String,
    /// Region tag ("SJ" or "JY"; anything else is treated as unknown).
    pub region: Region,
    /// The employee's level, or null when unset.
    #[serde(default)]
    pub level: Option<Level>,
    /// Hire date.
    pub hire_date: NaiveDate,
    /// Accumulated hours worked.
    pub hours: f64,
    /// Sick days taken.
    pub sick_days: f64,
    /// Contract-breach flag.
    #[serde(default)]
    pub breach: bool,
}

/// Settings information in an allocation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    /// Profit figures for the 12 months of the year, in order.
    pub monthly_profits: [f64; 12],
    /// Costs shared equally between the two regions.
    pub shared_costs: f64,
    /// Fraction of net profit paid out as bonuses.
    pub total_profit_share: f64,
    /// Minimum tenure in years to qualify.
    pub min_years: f64,
    /// Minimum accumulated hours to qualify.
    pub min_hours: f64,
    /// Maximum allowed sick ratio to qualify.
    pub sick_limit: f64,
    /// Contracted hours per working day.
    pub hours_per_day: f64,
    /// Multiplicative factors per level.
    pub level_factors: LevelFactors,
    /// Seniority bands, first-match-wins in this order.
    #[serde(default)]
    pub seniority_factors: Vec<SeniorityBand>,
    /// The three-way split of each region's pool.
    pub shares: Shares,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            name: req.name,
            region: req.region,
            level: req.level,
            hire_date: req.hire_date,
            hours: req.hours,
            sick_days: req.sick_days,
            breach: req.breach,
        }
    }
}

impl From<SettingsRequest> for Settings {
    fn from(req: SettingsRequest) -> Self {
        Settings {
            monthly_profits: req.monthly_profits,
            shared_costs: req.shared_costs,
            total_profit_share: req.total_profit_share,
            min_years: req.min_years,
            min_hours: req.min_hours,
            sick_limit: req.sick_limit,
            hours_per_day: req.hours_per_day,
            level_factors: req.level_factors,
            seniority_factors: req.seniority_factors,
            shares: req.shares,
        }
    }
}
