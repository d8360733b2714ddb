//! The bonus allocator, main entry point of the engine.
//!
//! This module turns an employee list, a settings snapshot, and a
//! reference date into a [`CalcResult`] covering both fixed regions. The
//! whole computation is synchronous, side-effect-free, and total: every
//! degenerate input (no qualifiers, zero factor sums, missing level
//! factors, unrecognized regions) resolves to zero contributions rather
//! than an error.

use chrono::{NaiveDate, Utc};

use crate::models::{
    CalcResult, Employee, EmployeeResult, Region, RegionResult, RegionResults, Settings,
};

use super::qualification::qualifies;
use super::seniority::seniority_factor;

/// Computes the pool amount allocated to each region.
///
/// Profit and shared costs are split equally between the two fixed
/// regions, then scaled by the configured profit share. The division by
/// two is a structural assumption of the two-region setup, not a
/// parameter.
pub fn region_pool(settings: &Settings) -> f64 {
    (settings.total_profit() / 2.0 - settings.shared_costs / 2.0) * settings.total_profit_share
}

/// Calculates bonus payouts for both regions.
///
/// Identical inputs (including the reference date) always produce
/// identical output; callers are expected to rerun the full calculation
/// on every input change rather than patch prior results.
///
/// # Example
///
/// ```
/// use bonus_engine::calculation::calculate_bonuses;
/// use bonus_engine::models::{
///     Employee, Level, LevelFactors, Region, SeniorityBand, Settings, Shares,
/// };
/// use chrono::NaiveDate;
///
/// let settings = Settings {
///     monthly_profits: Settings::monthly_from_total(100_000.0),
///     shared_costs: 20_000.0,
///     total_profit_share: 0.4,
///     min_years: 1.0,
///     min_hours: 1000.0,
///     sick_limit: 0.05,
///     hours_per_day: 7.4,
///     level_factors: LevelFactors { level_one: 1.0, level_two: 1.5, level_three: 2.0 },
///     seniority_factors: vec![SeniorityBand { min: 1.0, max: None, factor: 1.0 }],
///     shares: Shares { base: 0.3, level: 0.5, seniority: 0.2 },
/// };
/// let employees = vec![Employee {
///     name: "Ada".to_string(),
///     region: Region::Jy,
///     level: Some(Level::Two),
///     hire_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
///     hours: 1200.0,
///     sick_days: 0.0,
///     breach: false,
/// }];
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
///
/// let result = calculate_bonuses(&employees, &settings, reference);
/// let jy = &result.regions.jy;
/// assert!((jy.pool - 16_000.0).abs() < 1e-6);
/// assert!((jy.total_payout - jy.pool).abs() < 1e-6);
/// ```
pub fn calculate_bonuses(
    employees: &[Employee],
    settings: &Settings,
    reference_date: NaiveDate,
) -> CalcResult {
    CalcResult {
        regions: RegionResults {
            sj: allocate_region(Region::Sj, employees, settings, reference_date),
            jy: allocate_region(Region::Jy, employees, settings, reference_date),
        },
    }
}

/// Calculates bonus payouts using today as the reference date.
///
/// Convenience wrapper over [`calculate_bonuses`]; prefer the explicit
/// variant wherever determinism matters (tests, replays).
pub fn calculate_bonuses_today(employees: &[Employee], settings: &Settings) -> CalcResult {
    calculate_bonuses(employees, settings, Utc::now().date_naive())
}

fn allocate_region(
    region: Region,
    employees: &[Employee],
    settings: &Settings,
    reference_date: NaiveDate,
) -> RegionResult {
    let pool = region_pool(settings);
    let base_pool = pool * settings.shares.base;
    let level_pool = pool * settings.shares.level;
    let seniority_pool = pool * settings.shares.seniority;

    // Employees with an unrecognized region match neither fixed region
    // and drop out of both regional lists here.
    let regional: Vec<&Employee> = employees.iter().filter(|e| e.region == region).collect();
    let qualified: Vec<bool> = regional
        .iter()
        .map(|e| qualifies(e, settings, reference_date))
        .collect();

    let qualifier_count = qualified.iter().filter(|q| **q).count();
    let base_each = if qualifier_count > 0 {
        base_pool / qualifier_count as f64
    } else {
        0.0
    };

    let level_sum: f64 = regional
        .iter()
        .zip(&qualified)
        .filter(|(_, q)| **q)
        .map(|(e, _)| level_factor(e, settings))
        .sum();
    let seniority_sum: f64 = regional
        .iter()
        .zip(&qualified)
        .filter(|(_, q)| **q)
        .map(|(e, _)| seniority_factor(e, settings, reference_date))
        .sum();

    let employee_results: Vec<EmployeeResult> = regional
        .iter()
        .zip(&qualified)
        .map(|(e, &is_qualified)| {
            let base = if is_qualified { base_each } else { 0.0 };
            let level = if is_qualified && level_sum > 0.0 {
                level_pool * level_factor(e, settings) / level_sum
            } else {
                0.0
            };
            let seniority = if is_qualified && seniority_sum > 0.0 {
                seniority_pool * seniority_factor(e, settings, reference_date) / seniority_sum
            } else {
                0.0
            };

            EmployeeResult {
                employee: (*e).clone(),
                qualified: is_qualified,
                base,
                level,
                seniority,
                total: base + level + seniority,
            }
        })
        .collect();

    let total_payout = employee_results.iter().map(|r| r.total).sum();

    RegionResult {
        region,
        pool,
        employees: employee_results,
        total_payout,
    }
}

/// Level factor for one employee, treating an unset level as factor 0.
///
/// Only reachable for qualified employees (an unset level never
/// qualifies), but kept total anyway.
fn level_factor(employee: &Employee, settings: &Settings) -> f64 {
    employee
        .level
        .map(|level| settings.level_factors.factor(level))
        .unwrap_or(0.0)
}
