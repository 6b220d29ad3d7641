// File: crates/viewership-core/src/config.rs
// Summary: Chart configuration (layout, palette, label text/positions, validation policy).
// Notes:
// - A JSON file only needs the keys it wants to override. Flat structs use
//   `#[serde(default)]`; labels go through sparse override structs so a nested
//   override keeps its sibling fields.

use std::path::Path;

use serde::Deserialize;

use crate::error::ChartError;
use crate::loader::ValidationPolicy;
use crate::theme::Palette;
use crate::types::{PlotArea, HEIGHT, WIDTH};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub layout: Layout,
    pub palette: Palette,
    pub labels: Labels,
    pub policy: ValidationPolicy,
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ChartError> {
        serde_json::from_str(s).map_err(|e| ChartError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ChartError::Config(format!("reading {}: {e}", path.display())))?;
        Self::from_json_str(&text)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub width: u32,
    pub height: u32,
    pub plot: PlotArea,
    /// Years added on each side of the horizontal domain.
    pub year_padding: f64,
    /// Millions of viewers added above and below the vertical domain.
    pub viewers_padding: f64,
    pub bar_width: f64,
    pub tick_count: usize,
    pub tick_size: f64,
    pub tick_label_px: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            plot: PlotArea::default(),
            year_padding: 1.0,
            viewers_padding: 5.0,
            bar_width: 20.0,
            tick_count: 10,
            tick_size: 6.0,
            tick_label_px: 10.0,
        }
    }
}

/// One piece of fixed text. `rotate` is in degrees around `(x, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub size_pt: f64,
    pub rotate: Option<f64>,
}

impl TextSpec {
    pub fn new(text: impl Into<String>, x: f64, y: f64, size_pt: f64) -> Self {
        Self { text: text.into(), x, y, size_pt, rotate: None }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// Color swatch at `(swatch_x, swatch_y)` followed by its caption.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    pub swatch_x: f64,
    pub swatch_y: f64,
    pub label: TextSpec,
}

/// Label texts and positions. Any field missing from the JSON, at any depth,
/// keeps the value from `Labels::default()`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "LabelsOverride")]
pub struct Labels {
    pub title: TextSpec,
    pub x_caption: TextSpec,
    pub y_caption: TextSpec,
    pub legend_heading: TextSpec,
    pub legend_actual: LegendEntry,
    pub legend_estimated: LegendEntry,
    pub swatch_size: f64,
    pub mark_label_pt: f64,
    pub mean_label_pt: f64,
    pub mean_label_x: f64,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            title: TextSpec::new("Average Viewership By Season", 250.0, 40.0, 14.0),
            x_caption: TextSpec::new("Year (Seasons)", 350.0, 490.0, 10.0),
            y_caption: TextSpec::new("Avg. Views (in millions)", 20.0, 315.0, 10.0).rotated(-90.0),
            legend_heading: TextSpec::new("Viewership Data", 650.0, 75.0, 10.0),
            legend_actual: LegendEntry {
                swatch_x: 650.0,
                swatch_y: 85.0,
                label: TextSpec::new("Actual", 670.0, 97.0, 9.0),
            },
            legend_estimated: LegendEntry {
                swatch_x: 650.0,
                swatch_y: 110.0,
                label: TextSpec::new("Estimated", 670.0, 122.0, 9.0),
            },
            swatch_size: 15.0,
            mark_label_pt: 8.0,
            mean_label_pt: 9.0,
            mean_label_x: 725.0,
        }
    }
}

// Sparse mirrors of the label structs as they appear in JSON.

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TextOverride {
    text: Option<String>,
    x: Option<f64>,
    y: Option<f64>,
    size_pt: Option<f64>,
    rotate: Option<f64>,
}

impl TextOverride {
    fn apply(self, base: &mut TextSpec) {
        if let Some(text) = self.text {
            base.text = text;
        }
        base.x = self.x.unwrap_or(base.x);
        base.y = self.y.unwrap_or(base.y);
        base.size_pt = self.size_pt.unwrap_or(base.size_pt);
        if self.rotate.is_some() {
            base.rotate = self.rotate;
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LegendOverride {
    swatch_x: Option<f64>,
    swatch_y: Option<f64>,
    label: TextOverride,
}

impl LegendOverride {
    fn apply(self, base: &mut LegendEntry) {
        base.swatch_x = self.swatch_x.unwrap_or(base.swatch_x);
        base.swatch_y = self.swatch_y.unwrap_or(base.swatch_y);
        self.label.apply(&mut base.label);
    }
}

#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct LabelsOverride {
    title: TextOverride,
    x_caption: TextOverride,
    y_caption: TextOverride,
    legend_heading: TextOverride,
    legend_actual: LegendOverride,
    legend_estimated: LegendOverride,
    swatch_size: Option<f64>,
    mark_label_pt: Option<f64>,
    mean_label_pt: Option<f64>,
    mean_label_x: Option<f64>,
}

impl From<LabelsOverride> for Labels {
    fn from(o: LabelsOverride) -> Self {
        let mut labels = Labels::default();
        o.title.apply(&mut labels.title);
        o.x_caption.apply(&mut labels.x_caption);
        o.y_caption.apply(&mut labels.y_caption);
        o.legend_heading.apply(&mut labels.legend_heading);
        o.legend_actual.apply(&mut labels.legend_actual);
        o.legend_estimated.apply(&mut labels.legend_estimated);
        labels.swatch_size = o.swatch_size.unwrap_or(labels.swatch_size);
        labels.mark_label_pt = o.mark_label_pt.unwrap_or(labels.mark_label_pt);
        labels.mean_label_pt = o.mean_label_pt.unwrap_or(labels.mean_label_pt);
        labels.mean_label_x = o.mean_label_x.unwrap_or(labels.mean_label_x);
        labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = ChartConfig::from_json_str(
            r##"{ "palette": { "actual": "#ff0000" }, "layout": { "bar_width": 12 }, "policy": "strict" }"##,
        )
        .expect("valid config");
        assert_eq!(cfg.palette.actual, Rgba::rgb(255, 0, 0));
        assert_eq!(cfg.palette.estimated, Palette::default().estimated);
        assert_eq!(cfg.layout.bar_width, 12.0);
        assert_eq!(cfg.layout.plot, PlotArea::default());
        assert_eq!(cfg.policy, ValidationPolicy::Strict);
        assert_eq!(cfg.labels, Labels::default());
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let err = ChartConfig::from_json_str(r#"{ "palette": { "actual": "nope" } }"#).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }

    #[test]
    fn nested_label_override_keeps_sibling_fields() {
        let cfg = ChartConfig::from_json_str(r#"{ "labels": { "title": { "x": 300 } } }"#).unwrap();
        let want = Labels::default();
        assert_eq!(cfg.labels.title.x, 300.0);
        assert_eq!(cfg.labels.title.text, "Average Viewership By Season");
        assert_eq!(cfg.labels.title.y, want.title.y);
        assert_eq!(cfg.labels.title.size_pt, want.title.size_pt);
        assert_eq!(cfg.labels.y_caption, want.y_caption);
    }

    #[test]
    fn legend_override_keeps_label_and_other_swatch_fields() {
        let cfg = ChartConfig::from_json_str(
            r#"{ "labels": { "legend_actual": { "swatch_x": 600, "label": { "text": "Aired" } } } }"#,
        )
        .unwrap();
        let want = Labels::default();
        let entry = &cfg.labels.legend_actual;
        assert_eq!(entry.swatch_x, 600.0);
        assert_eq!(entry.swatch_y, want.legend_actual.swatch_y);
        assert_eq!(entry.label.text, "Aired");
        assert_eq!(entry.label.x, want.legend_actual.label.x);
        assert_eq!(cfg.labels.legend_estimated, want.legend_estimated);
    }

    #[test]
    fn misspelled_label_field_is_rejected() {
        let err = ChartConfig::from_json_str(r#"{ "labels": { "title": { "txt": "x" } } }"#).unwrap_err();
        assert!(matches!(err, ChartError::Config(_)));
    }
}
