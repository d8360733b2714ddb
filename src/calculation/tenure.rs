//! Tenure computation shared by qualification and seniority lookup.

use chrono::NaiveDate;

/// Milliseconds in an average year of 365.25 days.
const MILLIS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Computes tenure in fractional years between two calendar dates.
///
/// The difference is taken at millisecond precision and divided by an
/// average year of 365.25 days, so the result is a fractional year count
/// rather than a calendar-year truncation. A hire date after the
/// reference date yields a negative tenure.
///
/// # Example
///
/// ```
/// use bonus_engine::calculation::tenure_years;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// let reference = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let years = tenure_years(hired, reference);
/// assert!((years - 4.0).abs() < 0.01);
/// ```
pub fn tenure_years(hire_date: NaiveDate, reference_date: NaiveDate) -> f64 {
    let elapsed = reference_date.signed_duration_since(hire_date);
    elapsed.num_milliseconds() as f64 / MILLIS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_same_date_is_zero_years() {
        assert_eq!(tenure_years(date(2024, 6, 1), date(2024, 6, 1)), 0.0);
    }

    #[test]
    fn test_1461_days_is_exactly_four_years() {
        // 1461 days = 4 * 365.25, and 1461 / 365.25 is exact in f64
        let years = tenure_years(date(2020, 1, 1), date(2024, 1, 1));
        assert_eq!(years, 4.0);
    }

    #[test]
    fn test_fractional_years_not_truncated() {
        let years = tenure_years(date(2023, 1, 1), date(2023, 7, 1));
        assert!(years > 0.49 && years < 0.51);
    }

    #[test]
    fn test_future_hire_date_is_negative() {
        let years = tenure_years(date(2025, 1, 1), date(2024, 1, 1));
        assert!(years < 0.0);
    }
}
