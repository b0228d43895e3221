//! Field coercion rules applied at submit time.
//!
//! Form fields are edited as raw text and coerced exactly once, when the
//! user submits. The rules are uniform across all nine forms:
//!
//! - required text must be non-blank
//! - optional text coerces blank to `None` (persisted as null, not `""`
//!   and not omitted)
//! - optional numerics coerce blank to `None` (never 0, never NaN) and
//!   reject unparseable input with a validation error
//! - dates are ISO `YYYY-MM-DD`

use crate::{ChartError, ChartResult};
use chrono::NaiveDate;

pub(crate) fn required_text(field: &'static str, value: &str) -> ChartResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChartError::validation(field, "required"));
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

pub(crate) fn required_date(field: &'static str, value: &str) -> ChartResult<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ChartError::validation(field, "required"));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ChartError::validation(field, format!("not a date: `{trimmed}`")))
}

pub(crate) fn optional_date(field: &'static str, value: &str) -> ChartResult<Option<NaiveDate>> {
    match value.trim() {
        "" => Ok(None),
        trimmed => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| ChartError::validation(field, format!("not a date: `{trimmed}`"))),
    }
}

pub(crate) fn optional_int(field: &'static str, value: &str) -> ChartResult<Option<i32>> {
    match value.trim() {
        "" => Ok(None),
        trimmed => trimmed
            .parse::<i32>()
            .map(Some)
            .map_err(|_| ChartError::validation(field, format!("not a whole number: `{trimmed}`"))),
    }
}

pub(crate) fn optional_int_in_range(
    field: &'static str,
    value: &str,
    range: std::ops::RangeInclusive<i32>,
) -> ChartResult<Option<i32>> {
    match optional_int(field, value)? {
        None => Ok(None),
        Some(n) if range.contains(&n) => Ok(Some(n)),
        Some(n) => Err(ChartError::validation(
            field,
            format!("{n} is outside {}..={}", range.start(), range.end()),
        )),
    }
}

pub(crate) fn required_int_at_least(
    field: &'static str,
    value: &str,
    min: i32,
) -> ChartResult<i32> {
    let n = optional_int(field, value)?
        .ok_or_else(|| ChartError::validation(field, "required"))?;
    if n < min {
        return Err(ChartError::validation(field, format!("must be at least {min}")));
    }
    Ok(n)
}

pub(crate) fn optional_float(field: &'static str, value: &str) -> ChartResult<Option<f64>> {
    match value.trim() {
        "" => Ok(None),
        trimmed => match trimmed.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(Some(n)),
            _ => Err(ChartError::validation(
                field,
                format!("not a number: `{trimmed}`"),
            )),
        },
    }
}
