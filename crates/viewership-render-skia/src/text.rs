// File: crates/viewership-render-skia/src/text.rs
// Summary: Text shaping/drawing with Skia textlayout; handles anchors and rotation.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};
use viewership_core::TextAnchor;

/// Points to pixels at 96 dpi.
pub const PX_PER_PT: f32 = 4.0 / 3.0;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size_px: f32, color: skia::Color) -> Paragraph {
        let mut style = TextStyle::new();
        style.set_font_size(size_px.max(1.0));
        style.set_color(color);
        style.set_font_families(&["Arial", "Helvetica", "DejaVu Sans", "sans-serif"]);

        let pstyle = ParagraphStyle::new();
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its baseline at `y`; `anchor` picks which end sits at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size_px: f32,
        color: skia::Color,
        anchor: TextAnchor,
    ) {
        let mut p = self.layout(text, size_px, color);
        let dx = match anchor {
            TextAnchor::Start => 0.0,
            TextAnchor::Middle => -p.longest_line() * 0.5,
            TextAnchor::End => -p.longest_line(),
        };
        // Paragraph paints from its top-left corner
        p.paint(canvas, (x + dx, y - p.alphabetic_baseline()));
    }

    /// Same as `draw`, turned `degrees` clockwise around `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_rotated(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        degrees: f32,
        size_px: f32,
        color: skia::Color,
        anchor: TextAnchor,
    ) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(degrees, None);
        self.draw(canvas, text, 0.0, 0.0, size_px, color, anchor);
        canvas.restore();
    }
}
