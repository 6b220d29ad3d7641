// File: crates/viewership-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: paints a Scene and encodes it as PNG.
// Notes:
// - Tooltips have no raster equivalent and are dropped.
// - Items with non-finite coordinates are skipped, the raster analogue of a mark
//   that lands nowhere on the canvas.

pub mod text;

use std::io::Cursor;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use skia_safe as skia;
use tracing::debug;
use viewership_core::{Item, Rgba, Scene, Shape};

pub use text::TextShaper;

pub fn to_skia_color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// Paint `scene` and return unpremultiplied RGBA8 pixels, row-major, `width * 4` bytes per row.
pub fn rasterize_rgba8(scene: &Scene) -> Result<(Vec<u8>, u32, u32)> {
    let (w, h) = (scene.width as i32, scene.height as i32);
    let mut surface = skia::surfaces::raster_n32_premul((w, h))
        .ok_or_else(|| anyhow!("failed to create {w}x{h} raster surface"))?;

    let shaper = TextShaper::new();
    {
        let canvas = surface.canvas();
        canvas.clear(to_skia_color(scene.background));
        for item in &scene.items {
            draw_item(canvas, &shaper, item);
        }
    }

    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = scene.width as usize * 4;
    let mut pixels = vec![0u8; row_bytes * scene.height as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        anyhow::bail!("reading back raster pixels failed");
    }
    Ok((pixels, scene.width, scene.height))
}

/// Paint `scene` and encode it as PNG bytes.
pub fn rasterize(scene: &Scene) -> Result<Vec<u8>> {
    let (pixels, w, h) = rasterize_rgba8(scene)?;
    let img = image::RgbaImage::from_raw(w, h, pixels)
        .ok_or_else(|| anyhow!("pixel buffer does not match {w}x{h}"))?;
    let mut bytes = Vec::new();
    img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .context("encode PNG failed")?;
    Ok(bytes)
}

/// Render the scene to a PNG at `output_png_path` using a CPU raster surface.
pub fn render_to_png(scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
    let path = output_png_path.as_ref();
    let bytes = rasterize(scene)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), bytes = bytes.len(), "wrote png");
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

fn draw_item(canvas: &skia::Canvas, shaper: &TextShaper, item: &Item) {
    match &item.shape {
        Shape::Rect { x, y, width, height, fill } => {
            if !finite(&[*x, *y, *width, *height]) { return; }
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Fill);
            paint.set_color(to_skia_color(*fill));
            let rect = skia::Rect::from_xywh(*x as f32, *y as f32, *width as f32, *height as f32);
            canvas.draw_rect(rect, &paint);
        }
        Shape::Line { x1, y1, x2, y2, stroke, width, dash } => {
            if !finite(&[*x1, *y1, *x2, *y2]) { return; }
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(*width as f32);
            paint.set_color(to_skia_color(*stroke));
            if let Some([on, off]) = dash {
                paint.set_path_effect(skia::PathEffect::dash(&[*on as f32, *off as f32], 0.0));
            }
            canvas.draw_line((*x1 as f32, *y1 as f32), (*x2 as f32, *y2 as f32), &paint);
        }
        Shape::Text { x, y, content, size_pt, fill, anchor, rotate } => {
            if !finite(&[*x, *y]) { return; }
            let size_px = *size_pt as f32 * text::PX_PER_PT;
            let color = to_skia_color(*fill);
            match rotate {
                Some(deg) => shaper.draw_rotated(canvas, content, *x as f32, *y as f32, *deg as f32, size_px, color, *anchor),
                None => shaper.draw(canvas, content, *x as f32, *y as f32, size_px, color, *anchor),
            }
        }
    }
}
