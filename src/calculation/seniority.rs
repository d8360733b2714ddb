//! Seniority factor lookup.
//!
//! This module maps an employee's tenure onto a multiplicative factor by
//! scanning the configured seniority bands.

use chrono::NaiveDate;

use crate::models::{Employee, Settings};

use super::tenure::tenure_years;

/// The factor applied when no seniority band matches an employee's tenure.
pub const DEFAULT_SENIORITY_FACTOR: f64 = 1.0;

/// Returns the seniority factor for the employee at the reference date.
///
/// The band list is scanned in its configured order and the first band
/// with `tenure >= min` and (no `max`, or `tenure <= max`) wins. Bands
/// are not required to be sorted, non-overlapping, or exhaustive: list
/// order is the authoritative tie-break for overlapping bands, and a
/// tenure falling into a gap between bands yields
/// [`DEFAULT_SENIORITY_FACTOR`].
///
/// # Example
///
/// ```
/// use bonus_engine::calculation::seniority_factor;
/// use bonus_engine::models::{Employee, Level, LevelFactors, Region, SeniorityBand, Settings, Shares};
/// use chrono::NaiveDate;
///
/// let settings = Settings {
///     monthly_profits: [10_000.0; 12],
///     shared_costs: 0.0,
///     total_profit_share: 0.4,
///     min_years: 1.0,
///     min_hours: 1000.0,
///     sick_limit: 0.05,
///     hours_per_day: 7.4,
///     level_factors: LevelFactors { level_one: 1.0, level_two: 1.5, level_three: 2.0 },
///     seniority_factors: vec![
///         SeniorityBand { min: 5.0, max: None, factor: 1.6 },
///     ],
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
/// assert_eq!(seniority_factor(&employee, &settings, reference), 1.6);
/// ```
pub fn seniority_factor(
    employee: &Employee,
    settings: &Settings,
    reference_date: NaiveDate,
) -> f64 {
    let years = tenure_years(employee.hire_date, reference_date);
    for band in &settings.seniority_factors {
        if years >= band.min && band.max.map_or(true, |max| years <= max) {
            return band.factor;
        }
    }
    DEFAULT_SENIORITY_FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, LevelFactors, Region, SeniorityBand, Shares};

    fn settings_with_bands(bands: Vec<SeniorityBand>) -> Settings {
        Settings {
            monthly_profits: [10_000.0; 12],
            shared_costs: 0.0,
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
            seniority_factors: bands,
            shares: Shares {
                base: 0.3,
                level: 0.5,
                seniority: 0.2,
            },
        }
    }

    fn employee_hired(hire_date: NaiveDate) -> Employee {
        Employee {
            name: "Test".to_string(),
            region: Region::Sj,
            level: Some(Level::One),
            hire_date,
            hours: 1200.0,
            sick_days: 0.0,
            breach: false,
        }
    }

    fn spec_bands() -> Vec<SeniorityBand> {
        vec![
            SeniorityBand {
                min: 1.0,
                max: Some(2.0),
                factor: 1.0,
            },
            SeniorityBand {
                min: 3.0,
                max: Some(4.0),
                factor: 1.3,
            },
            SeniorityBand {
                min: 5.0,
                max: None,
                factor: 1.6,
            },
        ]
    }

    /// SF-001: tenure inside a bounded band
    #[test]
    fn test_bounded_band_match() {
        let settings = settings_with_bands(spec_bands());
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        // ~3.5 years of tenure
        let employee = employee_hired(NaiveDate::from_ymd_opt(2020, 7, 1).unwrap());

        assert_eq!(seniority_factor(&employee, &settings, reference), 1.3);
    }

    /// SF-002: tenure above the unbounded band's minimum
    #[test]
    fn test_unbounded_band_match() {
        let settings = settings_with_bands(spec_bands());
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let employee = employee_hired(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());

        assert_eq!(seniority_factor(&employee, &settings, reference), 1.6);
    }

    /// SF-003: tenure of 4.5 years falls in the gap between the 3–4 band
    /// and the 5+ band and must return the default, not a neighbor
    #[test]
    fn test_gap_between_bands_returns_default() {
        let settings = settings_with_bands(spec_bands());
        let reference = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        // hired 2020-01-01: ~4.5 years before the reference date
        let employee = employee_hired(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());

        assert_eq!(
            seniority_factor(&employee, &settings, reference),
            DEFAULT_SENIORITY_FACTOR
        );
    }

    /// SF-004: tenure below the smallest band returns the default
    #[test]
    fn test_below_smallest_band_returns_default() {
        let settings = settings_with_bands(spec_bands());
        let reference = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let employee = employee_hired(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());

        assert_eq!(
            seniority_factor(&employee, &settings, reference),
            DEFAULT_SENIORITY_FACTOR
        );
    }

    /// SF-005: overlapping bands favor list order
    #[test]
    fn test_overlapping_bands_first_match_wins() {
        let settings = settings_with_bands(vec![
            SeniorityBand {
                min: 0.0,
                max: Some(10.0),
                factor: 2.0,
            },
            SeniorityBand {
                min: 0.0,
                max: Some(10.0),
                factor: 9.9,
            },
        ]);
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let employee = employee_hired(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());

        assert_eq!(seniority_factor(&employee, &settings, reference), 2.0);
    }

    /// SF-006: unsorted band lists are scanned as supplied
    #[test]
    fn test_unsorted_bands_scanned_in_list_order() {
        let settings = settings_with_bands(vec![
            SeniorityBand {
                min: 5.0,
                max: None,
                factor: 1.6,
            },
            SeniorityBand {
                min: 0.0,
                max: None,
                factor: 0.5,
            },
        ]);
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        // ~14 years: matches the 5+ band listed first even though a
        // broader band follows
        let employee = employee_hired(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());

        assert_eq!(seniority_factor(&employee, &settings, reference), 1.6);
    }

    /// SF-007: empty band list returns the default
    #[test]
    fn test_empty_band_list_returns_default() {
        let settings = settings_with_bands(vec![]);
        let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let employee = employee_hired(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap());

        assert_eq!(
            seniority_factor(&employee, &settings, reference),
            DEFAULT_SENIORITY_FACTOR
        );
    }
}
