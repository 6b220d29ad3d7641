// File: crates/viewership-core/src/range.rs
// Summary: Min/max and mean over numeric fields; NaN entries are skipped.

use crate::error::ChartError;
use crate::loader::{COL_AVG_VIEWERS, COL_YEAR};
use crate::record::Record;

/// Bounds over the two plotted fields.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub year_min: f64,
    pub year_max: f64,
    pub view_min: f64,
    pub view_max: f64,
}

/// `(min, max)` of `values`, ignoring NaN. Fails when nothing comparable remains.
pub fn min_max<I>(field: &'static str, values: I) -> Result<(f64, f64), ChartError>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold(None, |acc: Option<(f64, f64)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .ok_or(ChartError::EmptyInput(field))
}

/// Arithmetic mean ignoring NaN; `None` when no value remains.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, n) = values
        .into_iter()
        .filter(|v| !v.is_nan())
        .fold((0.0f64, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

pub fn axis_limits(records: &[Record]) -> Result<AxisLimits, ChartError> {
    if records.is_empty() {
        return Err(ChartError::EmptyInput("dataset"));
    }
    let (year_min, year_max) = min_max(COL_YEAR, records.iter().map(Record::year_value))?;
    let (view_min, view_max) = min_max(COL_AVG_VIEWERS, records.iter().map(|r| r.avg_viewers))?;
    Ok(AxisLimits { year_min, year_max, view_min, view_max })
}
