// File: crates/viewership-core/tests/pipeline.rs
// Purpose: End-to-end properties of limits, scales and the render pass.

use approx::assert_relative_eq;
use viewership_core::{
    axis_limits, plot, ChartConfig, ChartError, DataKind, Record, Role, ScaleMapping, Shape,
};

fn two_seasons() -> Vec<Record> {
    vec![Record::new(2020, 5.0), Record::new(2021, 7.0)]
}

fn bar_rect(shape: &Shape) -> (f64, f64, f64, f64) {
    match shape {
        Shape::Rect { x, y, width, height, .. } => (*x, *y, *width, *height),
        other => panic!("expected rect, got {other:?}"),
    }
}

#[test]
fn padded_domains_for_two_seasons() {
    let cfg = ChartConfig::default();
    let records = two_seasons();
    let mapping = ScaleMapping::build(&axis_limits(&records).unwrap(), &cfg.layout);

    assert_eq!(mapping.x_scale.domain, (2019.0, 2022.0));
    assert_eq!(mapping.y_scale.domain, (12.0, 0.0));
    assert_eq!(mapping.x_scale.range, (50.0, 750.0));
    assert_eq!(mapping.y_scale.range, (50.0, 450.0));

    let (x0, x1) = (mapping.x(&records[0]), mapping.x(&records[1]));
    assert!(x0 < x1);
    for x in [x0, x1] {
        assert!((50.0..=750.0).contains(&x));
    }
    assert!(mapping.y(&records[0]) > mapping.y(&records[1]));
}

#[test]
fn scale_endpoints_hit_range_endpoints() {
    let cfg = ChartConfig::default();
    let mapping = ScaleMapping::build(&axis_limits(&two_seasons()).unwrap(), &cfg.layout);
    assert_relative_eq!(mapping.x_scale.map(2019.0), 50.0);
    assert_relative_eq!(mapping.x_scale.map(2022.0), 750.0);
    assert_relative_eq!(mapping.y_scale.map(12.0), 50.0);
    assert_relative_eq!(mapping.y_scale.map(0.0), 450.0);
}

#[test]
fn mean_line_sits_at_mapped_mean() {
    let cfg = ChartConfig::default();
    let records = vec![Record::new(2001, 10.0), Record::new(2002, 20.0), Record::new(2003, 30.0)];
    let scene = plot(&records, &cfg).unwrap();
    let mapping = ScaleMapping::build(&axis_limits(&records).unwrap(), &cfg.layout);
    let expected_y = mapping.y_scale.map(20.0);

    let line = scene.mean_line().expect("mean line drawn");
    match &line.shape {
        Shape::Line { x1, y1, x2, y2, dash, .. } => {
            assert_relative_eq!(*y1, expected_y);
            assert_relative_eq!(*y2, expected_y);
            assert_eq!((*x1, *x2), (50.0, 750.0));
            assert_eq!(*dash, Some([5.0, 2.0]));
        }
        other => panic!("expected line, got {other:?}"),
    }
    assert_eq!(line.tooltip.as_ref().unwrap().text, "Average = 20");

    let label = scene.with_role(Role::MeanLabel).next().unwrap();
    match &label.shape {
        Shape::Text { x, y, content, .. } => {
            assert_eq!(*x, 725.0);
            assert_relative_eq!(*y, expected_y - 4.0);
            assert_eq!(content, "20");
        }
        other => panic!("expected text, got {other:?}"),
    }
}

#[test]
fn estimated_bars_are_grey() {
    let cfg = ChartConfig::default();
    let records = vec![
        Record::new(2010, 8.0),
        Record::new(2011, 9.0),
        Record::new(2012, 6.5).with_kind(DataKind::Estimated),
    ];
    let scene = plot(&records, &cfg).unwrap();
    let fills: Vec<_> = scene
        .marks()
        .map(|m| match m.shape {
            Shape::Rect { fill, .. } => fill,
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(fills, vec![cfg.palette.actual, cfg.palette.actual, cfg.palette.estimated]);
    assert_eq!(cfg.palette.actual.to_hex(), "#6aade4");
    assert_eq!(cfg.palette.estimated.to_hex(), "#787d80");
}

#[test]
fn bars_stand_on_the_bottom_axis() {
    let cfg = ChartConfig::default();
    let scene = plot(&two_seasons(), &cfg).unwrap();
    for mark in scene.marks() {
        let (_, y, w, h) = bar_rect(&mark.shape);
        assert_eq!(w, 20.0);
        assert_relative_eq!(y + h, 450.0);
    }
}

#[test]
fn rendering_twice_is_identical() {
    let cfg = ChartConfig::default();
    let records = two_seasons();
    let a = plot(&records, &cfg).unwrap();
    let b = plot(&records, &cfg).unwrap();
    assert_eq!(a, b);
}

#[test]
fn empty_dataset_fails_fast() {
    let err = plot(&[], &ChartConfig::default()).unwrap_err();
    assert!(matches!(err, ChartError::EmptyInput(_)));
}

#[test]
fn nan_viewers_propagate_to_the_mark() {
    let cfg = ChartConfig::default();
    let mut broken = Record::new(2021, 0.0);
    broken.avg_viewers = f64::NAN;
    let records = vec![Record::new(2020, 5.0), broken];
    let scene = plot(&records, &cfg).unwrap();

    let bars: Vec<_> = scene.marks().map(|m| bar_rect(&m.shape)).collect();
    assert!(bars[0].1.is_finite());
    assert!(bars[1].1.is_nan());
    // the mean ignores the unparsable value
    assert_eq!(scene.mean_line().unwrap().tooltip.as_ref().unwrap().text, "Average = 5");
}

#[test]
fn year_ticks_are_integers() {
    let scene = plot(&two_seasons(), &ChartConfig::default()).unwrap();
    let labels: Vec<String> = scene
        .with_role(Role::TickLabel)
        .filter_map(|i| match &i.shape {
            Shape::Text { content, anchor: viewership_core::TextAnchor::Middle, .. } => Some(content.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(labels, vec!["2019", "2020", "2021", "2022"]);
}
