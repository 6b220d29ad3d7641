// File: crates/viewership-core/src/scene.rs
// Summary: Renderer-agnostic drawing list produced by one render pass.

use crate::color::Rgba;

/// What an item depicts; backends style by role and tests query by it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    AxisDomain,
    Tick,
    TickLabel,
    Mark,
    MarkLabel,
    MeanLine,
    MeanLabel,
    Title,
    Caption,
    LegendHeading,
    LegendSwatch,
    LegendLabel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

impl TextAnchor {
    pub fn as_svg(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgba,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        stroke: Rgba,
        width: f64,
        /// `[dash, gap]` in pixels.
        dash: Option<[f64; 2]>,
    },
    /// `(x, y)` is the baseline origin; `rotate` (degrees) turns around it.
    Text {
        x: f64,
        y: f64,
        content: String,
        size_pt: f64,
        fill: Rgba,
        anchor: TextAnchor,
        rotate: Option<f64>,
    },
}

/// Which hover box shows the tooltip in the HTML page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipKind {
    Season,
    Average,
}

impl TooltipKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Season => "tooltip",
            Self::Average => "avg",
        }
    }
}

/// Hover text; lines are separated by `\n`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub kind: TooltipKind,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    pub role: Role,
    pub shape: Shape,
    pub tooltip: Option<Tooltip>,
}

impl Item {
    pub fn new(role: Role, shape: Shape) -> Self {
        Self { role, shape, tooltip: None }
    }

    pub fn with_tooltip(mut self, kind: TooltipKind, text: String) -> Self {
        self.tooltip = Some(Tooltip { kind, text });
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    /// Used by raster backends; vector output stays transparent.
    pub background: Rgba,
    pub items: Vec<Item>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgba) -> Self {
        Self { width, height, background, items: Vec::new() }
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Item> + '_ {
        self.items.iter().filter(move |i| i.role == role)
    }

    /// Bars in record order.
    pub fn marks(&self) -> impl Iterator<Item = &Item> + '_ {
        self.with_role(Role::Mark)
    }

    pub fn mean_line(&self) -> Option<&Item> {
        self.with_role(Role::MeanLine).next()
    }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }
}
