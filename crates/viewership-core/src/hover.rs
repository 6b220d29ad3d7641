// File: crates/viewership-core/src/hover.rs
// Summary: Hover handlers turning a bar's record or the mean value into tooltip text.

use crate::format::format_rounded;
use crate::record::Record;

/// Produces the tooltip content shown while the pointer is over a target.
/// Implementations are pure; hovering never touches the dataset or the scales.
pub trait HoverText<T: ?Sized> {
    fn hover_text(&self, target: &T) -> String;
}

/// Every field of a season, numeric cells as written in the source file.
pub struct SeasonTooltip;

impl HoverText<Record> for SeasonTooltip {
    fn hover_text(&self, r: &Record) -> String {
        let s = &r.source;
        format!(
            "Season #{year}\n\
             Year: {year}\n\
             Episodes: {episodes}\n\
             Avg Viewers (mil): {avg}\n\
             \n\
             Most Watched Episode: {episode}\n\
             Viewers (mil): {viewers}",
            year = s.year,
            episodes = s.episodes,
            avg = s.avg_viewers,
            episode = r.most_watched_episode,
            viewers = s.most_watched_viewers,
        )
    }
}

/// Dataset mean rounded to two decimals.
pub struct AverageTooltip;

impl HoverText<f64> for AverageTooltip {
    fn hover_text(&self, avg: &f64) -> String {
        format!("Average = {}", format_rounded(*avg, 2))
    }
}
