//! Settings model for the bonus allocation engine.
//!
//! This module defines the Settings struct and its component types:
//! the three-way pool split, the level factor table, and the seniority
//! bands.

use serde::{Deserialize, Serialize};

use super::Level;

/// The three-way split of a region's pool.
///
/// The fractions are expected to sum to 1 but this is deliberately not
/// validated: a sum below 1 leaves part of the pool unallocated, a sum
/// above 1 lets payouts exceed the nominal pool. Existing saved data
/// relies on this permissiveness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shares {
    /// Fraction of the pool distributed equally among qualifiers.
    pub base: f64,
    /// Fraction distributed proportionally to level factors.
    pub level: f64,
    /// Fraction distributed proportionally to seniority factors.
    pub seniority: f64,
}

/// Multiplicative factors per employee level.
///
/// Represented as one explicit field per level rather than an open-ended
/// numeric map, so that a missing entry defaulting to factor 0 is a
/// visible, total rule instead of a lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelFactors {
    /// Factor for level 1 employees.
    #[serde(rename = "1", default)]
    pub level_one: f64,
    /// Factor for level 2 employees.
    #[serde(rename = "2", default)]
    pub level_two: f64,
    /// Factor for level 3 employees.
    #[serde(rename = "3", default)]
    pub level_three: f64,
}

impl LevelFactors {
    /// Returns the factor for the given level.
    ///
    /// An entry left at its default contributes factor 0, which removes
    /// that level from the level sub-pool without failing.
    pub fn factor(&self, level: Level) -> f64 {
        match level {
            Level::One => self.level_one,
            Level::Two => self.level_two,
            Level::Three => self.level_three,
        }
    }
}

/// A tenure range mapped to a seniority factor.
///
/// Bands are matched first-match-wins in list order (see
/// [`seniority_factor`](crate::calculation::seniority_factor)); they are
/// not required to be sorted, non-overlapping, or exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeniorityBand {
    /// Minimum tenure in years (inclusive).
    pub min: f64,
    /// Maximum tenure in years (inclusive); `None` means unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// The multiplicative factor for this band.
    pub factor: f64,
}

/// The full settings snapshot driving one allocation run.
///
/// Monthly profit figures are the canonical profit representation; total
/// profit is always derived by summation. Use
/// [`Settings::monthly_from_total`] to build the monthly figures from a
/// flat total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Profit figures for the 12 months of the year, in order.
    pub monthly_profits: [f64; 12],
    /// Costs shared equally between the two regions.
    pub shared_costs: f64,
    /// Fraction (0–1) of net profit paid out as bonuses.
    pub total_profit_share: f64,
    /// Minimum tenure in years to qualify.
    pub min_years: f64,
    /// Minimum accumulated hours to qualify.
    pub min_hours: f64,
    /// Maximum allowed sick ratio (fraction) to qualify.
    pub sick_limit: f64,
    /// Contracted hours per working day, used to convert worked hours
    /// into full-time-equivalent days for the sick ratio.
    pub hours_per_day: f64,
    /// Multiplicative factors per level.
    pub level_factors: LevelFactors,
    /// Seniority bands, matched first-match-wins in this order.
    pub seniority_factors: Vec<SeniorityBand>,
    /// The three-way split of each region's pool.
    pub shares: Shares,
}

impl Settings {
    /// Returns the total profit, derived by summing the monthly figures.
    pub fn total_profit(&self) -> f64 {
        self.monthly_profits.iter().sum()
    }

    /// Spreads a flat total-profit figure across 12 equal monthly entries.
    ///
    /// Convenience for callers holding only a yearly total; the canonical
    /// representation stays monthly.
    ///
    /// # Example
    ///
    /// ```
    /// use bonus_engine::models::Settings;
    ///
    /// let monthly = Settings::monthly_from_total(120_000.0);
    /// assert_eq!(monthly, [10_000.0; 12]);
    /// ```
    pub fn monthly_from_total(total: f64) -> [f64; 12] {
        [total / 12.0; 12]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_settings() -> Settings {
        Settings {
            monthly_profits: [10_000.0; 12],
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
            seniority_factors: vec![
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
            ],
            shares: Shares {
                base: 0.3,
                level: 0.5,
                seniority: 0.2,
            },
        }
    }

    #[test]
    fn test_total_profit_sums_monthly_figures() {
        let settings = create_test_settings();
        assert_eq!(settings.total_profit(), 120_000.0);
    }

    #[test]
    fn test_monthly_from_total_spreads_evenly() {
        let monthly = Settings::monthly_from_total(60_000.0);
        assert_eq!(monthly, [5_000.0; 12]);
    }

    #[test]
    fn test_level_factor_lookup() {
        let factors = LevelFactors {
            level_one: 1.0,
            level_two: 1.5,
            level_three: 2.0,
        };
        assert_eq!(factors.factor(Level::One), 1.0);
        assert_eq!(factors.factor(Level::Two), 1.5);
        assert_eq!(factors.factor(Level::Three), 2.0);
    }

    #[test]
    fn test_missing_level_factor_defaults_to_zero() {
        let json = r#"{"1": 1.0, "2": 1.5}"#;
        let factors: LevelFactors = serde_json::from_str(json).unwrap();
        assert_eq!(factors.factor(Level::Three), 0.0);
    }

    #[test]
    fn test_settings_round_trip_preserves_fractional_values() {
        let settings = create_test_settings();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_unbounded_band_omits_max_in_json() {
        let band = SeniorityBand {
            min: 5.0,
            max: None,
            factor: 1.6,
        };
        let json = serde_json::to_string(&band).unwrap();
        assert!(!json.contains("max"));

        let deserialized: SeniorityBand = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.max, None);
    }

    #[test]
    fn test_monthly_profits_must_have_twelve_entries() {
        let json = r#"{
            "monthlyProfits": [1, 2, 3],
            "sharedCosts": 0,
            "totalProfitShare": 0.4,
            "minYears": 1,
            "minHours": 1000,
            "sickLimit": 0.05,
            "hoursPerDay": 7.4,
            "levelFactors": {"1": 1, "2": 1.5, "3": 2},
            "seniorityFactors": [],
            "shares": {"base": 0.3, "level": 0.5, "seniority": 0.2}
        }"#;
        assert!(serde_json::from_str::<Settings>(json).is_err());
    }

    #[test]
    fn test_settings_uses_camel_case_field_names() {
        let settings = create_test_settings();
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("monthlyProfits"));
        assert!(json.contains("totalProfitShare"));
        assert!(json.contains("hoursPerDay"));
    }
}
