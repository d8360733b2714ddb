//! Qualification predicate for bonus eligibility.
//!
//! This module decides whether a single employee qualifies for a bonus
//! under the configured thresholds. It is a pure function of the
//! employee, the settings, and an injectable reference date.

use chrono::NaiveDate;

use crate::models::{Employee, Settings};

use super::tenure::tenure_years;

/// Returns true if the employee qualifies for a bonus.
///
/// An employee qualifies when all of the following hold:
/// - tenure at the reference date is at least `settings.min_years`
///   (inclusive, in fractional years),
/// - accumulated hours are at least `settings.min_hours` (inclusive),
/// - the sick ratio `sick_days / (hours / hours_per_day)` is at most
///   `settings.sick_limit` (inclusive),
/// - the contract-breach flag is unset,
/// - the employee has a level.
///
/// With zero hours the sick ratio evaluates to infinity (or NaN when
/// sick days are also zero); both compare false against any finite
/// limit, so zero-hours employees never qualify and the division needs
/// no explicit guard.
///
/// # Example
///
/// ```
/// use bonus_engine::calculation::qualifies;
/// use bonus_engine::models::{Employee, Level, LevelFactors, Region, Settings, Shares};
/// use chrono::NaiveDate;
///
/// let settings = Settings {
///     monthly_profits: [10_000.0; 12],
///     shared_costs: 20_000.0,
///     total_profit_share: 0.4,
///     min_years: 1.0,
///     min_hours: 1000.0,
///     sick_limit: 0.05,
///     hours_per_day: 7.4,
///     level_factors: LevelFactors { level_one: 1.0, level_two: 1.5, level_three: 2.0 },
///     seniority_factors: vec![],
///     shares: Shares { base: 0.3, level: 0.5, seniority: 0.2 },
/// };
/// let employee = Employee {
///     name: "Ada".to_string(),
///     region: Region::Jy,
///     level: Some(Level::One),
///     hire_date: NaiveDate::from_ymd_opt(2010, 1, 1).unwrap(),
///     hours: 1200.0,
///     sick_days: 0.0,
///     breach: false,
/// };
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert!(qualifies(&employee, &settings, reference));
/// ```
pub fn qualifies(employee: &Employee, settings: &Settings, reference_date: NaiveDate) -> bool {
    let years = tenure_years(employee.hire_date, reference_date);
    // hours == 0 makes this infinite (or NaN), which fails the limit check
    let sick_ratio = employee.sick_days / (employee.hours / settings.hours_per_day);

    years >= settings.min_years
        && employee.hours >= settings.min_hours
        && sick_ratio <= settings.sick_limit
        && !employee.breach
        && employee.level.is_some()
}
