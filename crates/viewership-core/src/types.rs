// File: crates/viewership-core/src/types.rs
// Summary: Shared types and constants (canvas size, plot area).

use serde::Deserialize;

/// Default canvas width in pixel units.
pub const WIDTH: u32 = 750;
/// Default canvas height in pixel units.
pub const HEIGHT: u32 = 500;

/// Plot rectangle in canvas coordinates.
/// Contract: `left < right` and `top < bottom`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlotArea {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PlotArea {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self::new(50.0, 750.0, 50.0, 450.0)
    }
}
