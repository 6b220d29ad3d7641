// File: crates/viewership-core/src/loader.rs
// Summary: CSV loading into typed records with explicit numeric coercion and warning tracking.

use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ChartError, LoadError};
use crate::record::{DataKind, Record, SourceText};

pub const COL_YEAR: &str = "Year";
pub const COL_EPISODES: &str = "Episodes";
pub const COL_AVG_VIEWERS: &str = "Avg. Viewers (mil)";
pub const COL_MOST_WATCHED: &str = "Most watched episode";
pub const COL_MOST_WATCHED_VIEWERS: &str = "Viewers (mil)";
pub const COL_DATA: &str = "Data";

/// A cell that could not be coerced. `row` is 1-based over data rows (header excluded).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseWarning {
    pub row: usize,
    pub column: &'static str,
    pub value: String,
}

impl fmt::Display for ParseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} column '{}': unparsable value '{}'", self.row, self.column, self.value)
    }
}

/// What to do with records whose cells failed coercion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Keep the row; NaN flows into the scales and the mark lands off-canvas.
    #[default]
    Permissive,
    /// Refuse to render when any warning was recorded.
    Strict,
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub warnings: Vec<ParseWarning>,
}

impl Dataset {
    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn validate(&self, policy: ValidationPolicy) -> Result<(), ChartError> {
        match (policy, self.warnings.first()) {
            (ValidationPolicy::Strict, Some(first)) => Err(ChartError::InvalidData {
                count: self.warnings.len(),
                first: first.clone(),
            }),
            _ => Ok(()),
        }
    }
}

/// Load a dataset from a CSV file on disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| LoadError::Open { path: path.to_path_buf(), source })?;
    debug!(path = %path.display(), "reading viewership CSV");
    read_records(rdr)
}

/// Load a dataset from any reader producing CSV text.
pub fn read_csv<R: io::Read>(reader: R) -> Result<Dataset, LoadError> {
    let rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    read_records(rdr)
}

struct Columns {
    year: usize,
    episodes: usize,
    avg_viewers: usize,
    most_watched: usize,
    most_watched_viewers: usize,
    data: usize,
}

impl Columns {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let idx = |name: &'static str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        Ok(Self {
            year: idx(COL_YEAR)?,
            episodes: idx(COL_EPISODES)?,
            avg_viewers: idx(COL_AVG_VIEWERS)?,
            most_watched: idx(COL_MOST_WATCHED)?,
            most_watched_viewers: idx(COL_MOST_WATCHED_VIEWERS)?,
            data: idx(COL_DATA)?,
        })
    }
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Dataset, LoadError> {
    let headers = rdr.headers()?.clone();
    let cols = Columns::resolve(&headers)?;

    let mut out = Dataset::default();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = i + 1;
        let cell = |ix: usize| rec.get(ix).unwrap_or("").trim();
        let warnings = &mut out.warnings;

        let year = coerce::<i32>(cell(cols.year), row, COL_YEAR, warnings);
        let episode_count = coerce::<u32>(cell(cols.episodes), row, COL_EPISODES, warnings);
        let avg_viewers = coerce_f64(cell(cols.avg_viewers), row, COL_AVG_VIEWERS, warnings);
        let most_watched_viewers =
            coerce_f64(cell(cols.most_watched_viewers), row, COL_MOST_WATCHED_VIEWERS, warnings);

        let data_kind = DataKind::parse(cell(cols.data)).unwrap_or_else(|| {
            push_warning(warnings, row, COL_DATA, cell(cols.data));
            DataKind::Actual
        });

        out.records.push(Record {
            year,
            episode_count,
            avg_viewers,
            most_watched_episode: cell(cols.most_watched).to_string(),
            most_watched_viewers,
            data_kind,
            source: SourceText {
                year: cell(cols.year).to_string(),
                episodes: cell(cols.episodes).to_string(),
                avg_viewers: cell(cols.avg_viewers).to_string(),
                most_watched_viewers: cell(cols.most_watched_viewers).to_string(),
            },
        });
    }

    debug!(records = out.records.len(), warnings = out.warnings.len(), "dataset loaded");
    Ok(out)
}

fn push_warning(warnings: &mut Vec<ParseWarning>, row: usize, column: &'static str, value: &str) {
    let w = ParseWarning { row, column, value: value.to_string() };
    warn!("{w}");
    warnings.push(w);
}

fn coerce<T: FromStr>(
    text: &str,
    row: usize,
    column: &'static str,
    warnings: &mut Vec<ParseWarning>,
) -> Option<T> {
    match text.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            push_warning(warnings, row, column, text);
            None
        }
    }
}

/// Non-finite results count as failures too; the value still becomes NaN.
fn coerce_f64(text: &str, row: usize, column: &'static str, warnings: &mut Vec<ParseWarning>) -> f64 {
    match coerce::<f64>(text, row, column, warnings) {
        Some(v) if v.is_finite() => v,
        Some(_) => {
            push_warning(warnings, row, column, text);
            f64::NAN
        }
        None => f64::NAN,
    }
}
