// File: crates/viewership-core/src/axis.rs
// Summary: Axis model: orientation, scale, tick generation and tick label formatting.

use crate::scale::LinearScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    /// Horizontal axis, ticks hang below the line.
    Bottom,
    /// Vertical axis, ticks point left of the line.
    Left,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Whole numbers only; fractional ticks are dropped so labels never repeat.
    Integer,
    /// Decimals derived from the tick step.
    Auto,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis.
    pub offset: f64,
    pub label: String,
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub orient: Orient,
    pub scale: LinearScale,
    /// Pixel position of the axis line across its orientation (y for bottom, x for left).
    pub position: f64,
    pub tick_count: usize,
    pub format: TickFormat,
}

impl Axis {
    pub fn bottom(scale: LinearScale, y: f64, tick_count: usize) -> Self {
        Self { orient: Orient::Bottom, scale, position: y, tick_count, format: TickFormat::Integer }
    }

    pub fn left(scale: LinearScale, x: f64, tick_count: usize) -> Self {
        Self { orient: Orient::Left, scale, position: x, tick_count, format: TickFormat::Auto }
    }

    pub fn ticks(&self) -> Vec<Tick> {
        let step = self.scale.tick_step(self.tick_count);
        self.scale
            .ticks(self.tick_count)
            .into_iter()
            .filter_map(|value| {
                let label = format_tick(value, step, self.format)?;
                Some(Tick { value, offset: self.scale.map(value), label })
            })
            .collect()
    }
}

/// Label for one tick, or `None` when `Integer` format rejects a fractional value.
pub fn format_tick(value: f64, step: f64, format: TickFormat) -> Option<String> {
    match format {
        TickFormat::Integer => {
            let rounded = value.round();
            if (value - rounded).abs() > 1e-9 {
                return None;
            }
            Some(format!("{}", rounded as i64))
        }
        TickFormat::Auto => {
            let decimals = if step > 0.0 && step < 1.0 {
                (-step.log10().floor()) as usize
            } else {
                0
            };
            Some(format!("{value:.decimals$}"))
        }
    }
}
