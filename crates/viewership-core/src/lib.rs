// File: crates/viewership-core/src/lib.rs
// Summary: Core library entry point; exports the load -> limits -> scales -> scene pipeline.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod hover;
pub mod html;
pub mod loader;
pub mod range;
pub mod record;
pub mod render;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod types;

pub use axis::{Axis, Orient, Tick, TickFormat};
pub use chart::{plot, Chart};
pub use color::Rgba;
pub use config::{ChartConfig, Labels, Layout, LegendEntry, TextSpec};
pub use error::{ChartError, LoadError};
pub use hover::{AverageTooltip, HoverText, SeasonTooltip};
pub use loader::{load_csv, read_csv, Dataset, ParseWarning, ValidationPolicy};
pub use range::{axis_limits, mean, min_max, AxisLimits};
pub use record::{DataKind, Record, SourceText};
pub use render::render;
pub use scale::{LinearScale, ScaleMapping};
pub use scene::{Item, Role, Scene, Shape, TextAnchor, Tooltip, TooltipKind};
pub use theme::Palette;
pub use types::PlotArea;
