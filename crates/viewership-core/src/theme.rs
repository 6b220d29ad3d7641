// File: crates/viewership-core/src/theme.rs
// Summary: Color palette for bars, axes, the mean line and text.

use serde::Deserialize;

use crate::color::Rgba;
use crate::record::DataKind;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgba,
    pub actual: Rgba,
    pub estimated: Rgba,
    pub axis: Rgba,
    pub text: Rgba,
    pub mean_line: Rgba,
}

impl Palette {
    /// Fill for a bar of the given kind.
    pub fn bar_fill(&self, kind: DataKind) -> Rgba {
        match kind {
            DataKind::Estimated => self.estimated,
            DataKind::Actual => self.actual,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::WHITE,
            actual: Rgba::rgb(0x6a, 0xad, 0xe4),
            estimated: Rgba::rgb(0x78, 0x7d, 0x80),
            axis: Rgba::BLACK,
            text: Rgba::BLACK,
            mean_line: Rgba::BLACK,
        }
    }
}
