// File: crates/viewership-core/src/render.rs
// Summary: The render pass: axes, bars, mean line and static labels drawn into a Scene.
// Notes:
// - Each step only reads the records, the mapping and the config; the order below is
//   the paint order.

use tracing::debug;

use crate::axis::{Axis, Orient};
use crate::color::Rgba;
use crate::config::{ChartConfig, TextSpec};
use crate::format::format_rounded;
use crate::hover::{AverageTooltip, HoverText, SeasonTooltip};
use crate::range::mean;
use crate::record::Record;
use crate::scale::ScaleMapping;
use crate::scene::{Item, Role, Scene, Shape, TextAnchor, TooltipKind};
use crate::theme::Palette;

/// Draw the full chart for `records` into a fresh scene.
pub fn render(records: &[Record], mapping: &ScaleMapping, config: &ChartConfig) -> Scene {
    let layout = &config.layout;
    let mut scene = Scene::new(layout.width, layout.height, config.palette.background);

    draw_axes(&mut scene, mapping, config);
    draw_marks(&mut scene, records, mapping, config);
    draw_mean_line(&mut scene, records, mapping, config);
    draw_labels(&mut scene, config);

    debug!(items = scene.len(), "render pass complete");
    scene
}

/// Bottom (year, integer ticks) and left (viewers) axes.
pub fn draw_axes(scene: &mut Scene, mapping: &ScaleMapping, config: &ChartConfig) {
    let layout = &config.layout;
    let plot = &layout.plot;
    let bottom = Axis::bottom(mapping.x_scale, plot.bottom, layout.tick_count);
    let left = Axis::left(mapping.y_scale, plot.left, layout.tick_count);
    draw_axis(scene, &bottom, config);
    draw_axis(scene, &left, config);
}

fn draw_axis(scene: &mut Scene, axis: &Axis, config: &ChartConfig) {
    let layout = &config.layout;
    let color = config.palette.axis;
    let (r0, r1) = axis.scale.range;
    let pos = axis.position;
    let size = layout.tick_size;
    let font_pt = layout.tick_label_px * 0.75;

    let domain = match axis.orient {
        Orient::Bottom => (r0, pos, r1, pos),
        Orient::Left => (pos, r0, pos, r1),
    };
    scene.push(Item::new(Role::AxisDomain, line(domain, color, 1.0, None)));

    for tick in axis.ticks() {
        let t = tick.offset;
        let (tick_line, label_x, label_y, anchor) = match axis.orient {
            // label baseline sits one tick length plus ~0.71em below the tick
            Orient::Bottom => ((t, pos, t, pos + size), t, pos + size + 3.0 + layout.tick_label_px * 0.71, TextAnchor::Middle),
            // ~0.32em drop centers the label on the tick
            Orient::Left => ((pos - size, t, pos, t), pos - size - 3.0, t + layout.tick_label_px * 0.32, TextAnchor::End),
        };
        scene.push(Item::new(Role::Tick, line(tick_line, color, 1.0, None)));
        scene.push(Item::new(
            Role::TickLabel,
            Shape::Text {
                x: label_x,
                y: label_y,
                content: tick.label,
                size_pt: font_pt,
                fill: color,
                anchor,
                rotate: None,
            },
        ));
    }
}

/// One bar per record plus its value label and season tooltip.
pub fn draw_marks(scene: &mut Scene, records: &[Record], mapping: &ScaleMapping, config: &ChartConfig) {
    let layout = &config.layout;
    let bottom = layout.plot.bottom;
    let half = layout.bar_width * 0.5;

    for r in records {
        let cx = mapping.x(r);
        let top = mapping.y(r);
        let bar = Item::new(
            Role::Mark,
            Shape::Rect {
                x: cx - half,
                y: top,
                width: layout.bar_width,
                height: bottom - top,
                fill: bar_fill(r, &config.palette),
            },
        )
        .with_tooltip(TooltipKind::Season, SeasonTooltip.hover_text(r));
        scene.push(bar);

        scene.push(Item::new(
            Role::MarkLabel,
            Shape::Text {
                x: cx - half,
                y: top - 3.0,
                content: r.source.avg_viewers.clone(),
                size_pt: config.labels.mark_label_pt,
                fill: config.palette.text,
                anchor: TextAnchor::Start,
                rotate: None,
            },
        ));
    }
}

/// Estimated seasons are grey, everything else uses the actual color.
pub fn bar_fill(record: &Record, palette: &Palette) -> Rgba {
    palette.bar_fill(record.data_kind)
}

/// Dashed line at the mean of `avg_viewers` across the plot, with tooltip and label.
/// Nothing is drawn when no record has a numeric value.
pub fn draw_mean_line(scene: &mut Scene, records: &[Record], mapping: &ScaleMapping, config: &ChartConfig) {
    let Some(avg) = mean(records.iter().map(|r| r.avg_viewers)) else {
        debug!("no numeric viewers; skipping mean line");
        return;
    };
    let plot = &config.layout.plot;
    let labels = &config.labels;
    let y = mapping.y_scale.map(avg);

    scene.push(
        Item::new(
            Role::MeanLine,
            line((plot.left, y, plot.right, y), config.palette.mean_line, 2.0, Some([5.0, 2.0])),
        )
        .with_tooltip(TooltipKind::Average, AverageTooltip.hover_text(&avg)),
    );
    scene.push(Item::new(
        Role::MeanLabel,
        Shape::Text {
            x: labels.mean_label_x,
            y: y - 4.0,
            content: format_rounded(avg, 1),
            size_pt: labels.mean_label_pt,
            fill: config.palette.text,
            anchor: TextAnchor::Start,
            rotate: None,
        },
    ));
}

/// Title, axis captions and the two-entry legend.
pub fn draw_labels(scene: &mut Scene, config: &ChartConfig) {
    let labels = &config.labels;
    let palette = &config.palette;

    scene.push(Item::new(Role::Title, text(&labels.title, palette)));
    scene.push(Item::new(Role::Caption, text(&labels.x_caption, palette)));
    scene.push(Item::new(Role::Caption, text(&labels.y_caption, palette)));
    scene.push(Item::new(Role::LegendHeading, text(&labels.legend_heading, palette)));

    let size = labels.swatch_size;
    for (entry, fill) in [
        (&labels.legend_actual, palette.actual),
        (&labels.legend_estimated, palette.estimated),
    ] {
        scene.push(Item::new(
            Role::LegendSwatch,
            Shape::Rect { x: entry.swatch_x, y: entry.swatch_y, width: size, height: size, fill },
        ));
        scene.push(Item::new(Role::LegendLabel, text(&entry.label, palette)));
    }
}

fn text(spec: &TextSpec, palette: &Palette) -> Shape {
    Shape::Text {
        x: spec.x,
        y: spec.y,
        content: spec.text.clone(),
        size_pt: spec.size_pt,
        fill: palette.text,
        anchor: TextAnchor::Start,
        rotate: spec.rotate,
    }
}

fn line(
    (x1, y1, x2, y2): (f64, f64, f64, f64),
    stroke: Rgba,
    width: f64,
    dash: Option<[f64; 2]>,
) -> Shape {
    Shape::Line { x1, y1, x2, y2, stroke, width, dash }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::range::axis_limits;
    use crate::record::DataKind;

    fn mapping_for(records: &[Record], config: &ChartConfig) -> ScaleMapping {
        ScaleMapping::build(&axis_limits(records).unwrap(), &config.layout)
    }

    #[test]
    fn steps_run_in_paint_order() {
        let cfg = ChartConfig::default();
        let records = vec![Record::new(2020, 5.0), Record::new(2021, 7.0)];
        let scene = render(&records, &mapping_for(&records, &cfg), &cfg);

        let first = |role: Role| scene.items.iter().position(|i| i.role == role).unwrap();
        assert_eq!(first(Role::AxisDomain), 0);
        assert!(first(Role::TickLabel) < first(Role::Mark));
        assert!(first(Role::Mark) < first(Role::MeanLine));
        assert!(first(Role::MeanLine) < first(Role::Title));
    }

    #[test]
    fn bar_geometry_follows_mapping() {
        let cfg = ChartConfig::default();
        let records = vec![Record::new(2020, 5.0), Record::new(2021, 7.0).with_kind(DataKind::Estimated)];
        let mapping = mapping_for(&records, &cfg);
        let scene = render(&records, &mapping, &cfg);

        let bars: Vec<_> = scene.marks().collect();
        assert_eq!(bars.len(), 2);
        match &bars[1].shape {
            Shape::Rect { x, y, width, height, fill } => {
                assert_eq!(*x, mapping.x(&records[1]) - 10.0);
                assert_eq!(*y, mapping.y(&records[1]));
                assert_eq!(*width, 20.0);
                assert_eq!(*height, 450.0 - mapping.y(&records[1]));
                assert_eq!(*fill, cfg.palette.estimated);
            }
            other => panic!("expected rect, got {other:?}"),
        }
        assert_eq!(bars[1].tooltip.as_ref().unwrap().kind, TooltipKind::Season);
    }

    #[test]
    fn mark_labels_use_source_text() {
        let cfg = ChartConfig::default();
        let mut r = Record::new(2020, 5.0);
        r.source.avg_viewers = "5.00".into();
        let records = vec![r];
        let scene = render(&records, &mapping_for(&records, &cfg), &cfg);
        let label = scene.with_role(Role::MarkLabel).next().unwrap();
        assert!(matches!(&label.shape, Shape::Text { content, .. } if content == "5.00"));
    }

    #[test]
    fn legend_has_two_swatches() {
        let mut scene = Scene::new(750, 500, Palette::default().background);
        let cfg = ChartConfig::default();
        draw_labels(&mut scene, &cfg);
        let fills: Vec<_> = scene
            .with_role(Role::LegendSwatch)
            .map(|i| match i.shape {
                Shape::Rect { fill, .. } => fill,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(fills, vec![cfg.palette.actual, cfg.palette.estimated]);
    }
}
