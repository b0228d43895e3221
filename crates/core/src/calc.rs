//! Derived-field calculations.
//!
//! Pure functions with no side effects. Both values are computed at a
//! specific point in time and stored or displayed, never back-filled:
//! age is derived on display from the date of birth, and BMI is derived
//! exactly once when a vital-signs entry is submitted.

use chrono::{Datelike, NaiveDate};

/// Full calendar years elapsed between `birth` and `as_of`.
///
/// The naive year difference is decremented by one when the `as_of`
/// month/day falls before the birth month/day; the birthday itself counts
/// as completed. This is a calendar computation, not `days / 365.25`.
///
/// Returns `None` when `as_of` precedes `birth`.
pub fn age_in_years(birth: NaiveDate, as_of: NaiveDate) -> Option<u32> {
    if as_of < birth {
        return None;
    }

    let mut years = as_of.year() - birth.year();
    if (as_of.month(), as_of.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }

    u32::try_from(years).ok()
}

/// Body-mass index from height and weight, rounded to two decimals.
///
/// Returns `None` unless both inputs are present and strictly positive;
/// a zero height must never reach the division.
pub fn bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let height_cm = height_cm?;
    let weight_kg = weight_kg?;

    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }

    let height_m = height_cm / 100.0;
    Some((weight_kg / (height_m * height_m) * 100.0).round() / 100.0)
}
