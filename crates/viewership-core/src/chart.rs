// File: crates/viewership-core/src/chart.rs
// Summary: Chart struct and the one-shot pipeline (limits -> scales -> scene -> SVG/HTML).

use std::path::Path;

use tracing::{debug, info};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::loader::Dataset;
use crate::range::{axis_limits, AxisLimits};
use crate::record::Record;
use crate::render::render;
use crate::scale::ScaleMapping;
use crate::scene::Scene;
use crate::{html, svg};

/// Limits, scales and the render pass for `records` in one call.
pub fn plot(records: &[Record], config: &ChartConfig) -> Result<Scene, ChartError> {
    let limits = axis_limits(records)?;
    debug!(?limits, "axis limits");
    let mapping = ScaleMapping::build(&limits, &config.layout);
    Ok(render(records, &mapping, config))
}

pub struct Chart {
    pub records: Vec<Record>,
    pub config: ChartConfig,
}

impl Chart {
    pub fn new(records: Vec<Record>, config: ChartConfig) -> Self {
        Self { records, config }
    }

    /// Apply the configured validation policy to a loaded dataset.
    pub fn from_dataset(dataset: Dataset, config: ChartConfig) -> Result<Self, ChartError> {
        dataset.validate(config.policy)?;
        if !dataset.warnings.is_empty() {
            info!(
                warnings = dataset.warnings.len(),
                "rendering with unparsable values; affected marks fall outside the plot"
            );
        }
        Ok(Self::new(dataset.records, config))
    }

    pub fn limits(&self) -> Result<AxisLimits, ChartError> {
        axis_limits(&self.records)
    }

    pub fn scene(&self) -> Result<Scene, ChartError> {
        plot(&self.records, &self.config)
    }

    pub fn to_svg(&self) -> Result<String, ChartError> {
        Ok(svg::to_svg(&self.scene()?))
    }

    pub fn to_html(&self) -> Result<String, ChartError> {
        Ok(html::to_html(&self.scene()?, &self.config.labels.title.text))
    }

    /// Render the chart to an SVG file at `path`.
    pub fn render_to_svg(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        write_file(path.as_ref(), &self.to_svg()?)
    }

    /// Render the chart to a standalone HTML page at `path`.
    pub fn render_to_html(&self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        write_file(path.as_ref(), &self.to_html()?)
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ChartError> {
    let wrap = |source| ChartError::Write { path: path.to_path_buf(), source };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    std::fs::write(path, contents).map_err(wrap)?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote chart");
    Ok(())
}
