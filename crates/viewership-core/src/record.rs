// File: crates/viewership-core/src/record.rs
// Summary: One parsed season row with typed fields and the source text of its numeric cells.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataKind {
    Actual,
    Estimated,
}

impl DataKind {
    /// Exact (trimmed) match on `Actual` / `Estimated`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Actual" => Some(Self::Actual),
            "Estimated" => Some(Self::Estimated),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Actual => "Actual",
            Self::Estimated => "Estimated",
        }
    }
}

impl fmt::Display for DataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cell text exactly as it appeared in the file; labels and tooltips print these.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceText {
    pub year: String,
    pub episodes: String,
    pub avg_viewers: String,
    pub most_watched_viewers: String,
}

/// One season. `None` / NaN mark numeric cells that failed coercion.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub year: Option<i32>,
    pub episode_count: Option<u32>,
    pub avg_viewers: f64,
    pub most_watched_episode: String,
    pub most_watched_viewers: f64,
    pub data_kind: DataKind,
    pub source: SourceText,
}

impl Record {
    /// Actual-data record with the two plotted fields set; source text is derived from the values.
    pub fn new(year: i32, avg_viewers: f64) -> Self {
        Self {
            year: Some(year),
            episode_count: None,
            avg_viewers,
            most_watched_episode: String::new(),
            most_watched_viewers: f64::NAN,
            data_kind: DataKind::Actual,
            source: SourceText {
                year: year.to_string(),
                episodes: String::new(),
                avg_viewers: avg_viewers.to_string(),
                most_watched_viewers: String::new(),
            },
        }
    }

    pub fn with_kind(mut self, kind: DataKind) -> Self {
        self.data_kind = kind;
        self
    }

    pub fn with_episodes(mut self, episodes: u32) -> Self {
        self.episode_count = Some(episodes);
        self.source.episodes = episodes.to_string();
        self
    }

    pub fn with_most_watched(mut self, episode: impl Into<String>, viewers: f64) -> Self {
        self.most_watched_episode = episode.into();
        self.most_watched_viewers = viewers;
        self.source.most_watched_viewers = viewers.to_string();
        self
    }

    /// Year as a plotting coordinate; NaN when the cell did not parse.
    pub fn year_value(&self) -> f64 {
        self.year.map(f64::from).unwrap_or(f64::NAN)
    }

    pub fn is_estimated(&self) -> bool {
        self.data_kind == DataKind::Estimated
    }
}
