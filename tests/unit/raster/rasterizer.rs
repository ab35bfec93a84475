use super::*;
use crate::keyframe::key::Keyframe;

fn no_guides() -> RasterStyle {
    RasterStyle {
        graph_labels: 0,
        ..RasterStyle::default()
    }
}

fn ramp() -> HermiteCurve {
    HermiteCurve::new(vec![
        Keyframe::new(0.0, 0.0, 0.0, 0.02),
        Keyframe::new(100.0, 1.0, 0.02, 0.0),
    ])
}

#[test]
fn rejects_degenerate_dimensions() {
    assert!(Rasterizer::new(1, 10, RasterStyle::default()).is_err());
    assert!(Rasterizer::new(10, 0, RasterStyle::default()).is_err());
    assert!(Rasterizer::new(2, 1, RasterStyle::default()).is_ok());
}

#[test]
fn ramp_spans_full_height() {
    let mut r = Rasterizer::new(512, 128, no_guides()).unwrap();
    let out = r.rasterize(&ramp());
    assert_eq!(out.min_y, 0.0);
    assert_eq!(out.max_y, 1.0);
    assert_eq!(out.rows.len(), 512);
    assert_eq!(out.rows[0], Some(0));
    assert_eq!(out.rows[511], Some(127));
    assert_eq!(r.pixels().get_plot(0, 0), Some(Rgb8::GREEN));
    assert_eq!(r.pixels().get_plot(511, 127), Some(Rgb8::GREEN));
}

#[test]
fn every_row_is_in_bounds() {
    let curves = [
        ramp(),
        HermiteCurve::new(vec![]),
        HermiteCurve::new(vec![Keyframe::new(5.0, 3.0, 0.0, 0.0)]),
        HermiteCurve::new(vec![
            Keyframe::new(0.0, -5.0, 40.0, 40.0),
            Keyframe::new(1.0, 5.0, -40.0, -40.0),
            Keyframe::new(0.5, 1.0, 0.0, 0.0),
        ]),
    ];
    for curve in &curves {
        let mut r = Rasterizer::new(64, 16, RasterStyle::default()).unwrap();
        let out = r.rasterize(curve);
        for row in out.rows.iter().flatten() {
            assert!(*row <= 15);
        }
    }
}

#[test]
fn flat_curve_plots_centre_row() {
    let mut r = Rasterizer::new(16, 9, no_guides()).unwrap();
    let flat = HermiteCurve::new(vec![Keyframe::new(0.0, 2.0, 0.0, 0.0)]);
    let out = r.rasterize(&flat);
    assert_eq!(out.min_y, 2.0);
    assert_eq!(out.max_y, 2.0);
    assert!(out.rows.iter().all(|r| *r == Some(4)));
    assert_eq!(r.pixels().get_plot(7, 4), Some(Rgb8::GREEN));
}

#[test]
fn empty_curve_renders_flat_plot() {
    let mut r = Rasterizer::new(8, 4, no_guides()).unwrap();
    let out = r.rasterize(&HermiteCurve::new(vec![]));
    assert_eq!((out.min_y, out.max_y), (0.0, 0.0));
    assert!(out.rows.iter().all(|r| *r == Some(1)));
}

#[test]
fn rebuild_fully_rewrites_buffer() {
    let mut r = Rasterizer::new(32, 8, no_guides()).unwrap();
    r.rasterize(&ramp());
    let flat = HermiteCurve::new(vec![Keyframe::new(0.0, 1.0, 0.0, 0.0)]);
    r.rasterize(&flat);
    let green = r
        .pixels()
        .data()
        .chunks_exact(3)
        .filter(|p| *p == Rgb8::GREEN.to_array())
        .count();
    assert_eq!(green, 32);
}

#[test]
fn guides_are_drawn_under_the_curve() {
    let style = RasterStyle {
        graph_labels: 3,
        ..RasterStyle::default()
    };
    let mut r = Rasterizer::new(16, 11, style).unwrap();
    r.rasterize(&HermiteCurve::new(vec![Keyframe::new(0.0, 0.0, 0.0, 0.0)]));
    // Guides at rows 0, 5, 10; the flat curve sits on row 5.
    assert_eq!(r.pixels().get_plot(3, 0), Some(style.gridline));
    assert_eq!(r.pixels().get_plot(3, 10), Some(style.gridline));
    assert_eq!(r.pixels().get_plot(3, 5), Some(style.curve));
    assert_eq!(r.pixels().get_plot(3, 2), Some(style.background));
}

#[test]
fn sample_time_follows_min_plus_scaled_max() {
    let r = Rasterizer::new(5, 2, no_guides()).unwrap();
    let c = HermiteCurve::new(vec![
        Keyframe::new(10.0, 0.0, 0.0, 0.0),
        Keyframe::new(20.0, 1.0, 0.0, 0.0),
    ]);
    assert_eq!(r.sample_time(&c, 0), 10.0);
    assert_eq!(r.sample_time(&c, 2), 20.0);
    assert_eq!(r.sample_time(&c, 4), 30.0);
}

#[test]
fn plot_row_guards() {
    assert_eq!(plot_row(f64::NAN, 0.0, 1.0, 10), None);
    assert_eq!(plot_row(0.5, 1.0, 1.0, 10), Some(4));
    assert_eq!(plot_row(0.0, -f64::MAX, f64::MAX, 10), Some(4));
    assert_eq!(plot_row(2.0, 0.0, 1.0, 10), Some(9));
    assert_eq!(plot_row(-2.0, 0.0, 1.0, 10), Some(0));
}

#[test]
fn axis_labels_span_range() {
    let out = RasterOutput {
        min_y: -1.0,
        max_y: 3.0,
        rows: vec![],
    };
    assert_eq!(out.axis_labels(0), Vec::<f64>::new());
    assert_eq!(out.axis_labels(1), vec![1.0]);
    assert_eq!(out.axis_labels(5), vec![-1.0, 0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn guide_rows_are_even() {
    assert_eq!(guide_row(0, 4, 128), 0);
    assert_eq!(guide_row(3, 4, 128), 127);
    assert_eq!(guide_row(1, 4, 128), 42);
    assert_eq!(guide_row(0, 1, 128), 63);
}
