//! Scale derivation tests
//!
//! Tests for the aspect-preserving viewport fit, window-based viewport
//! sizing and the auxiliary pixels-per-unit ratio.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

mod common;

use common::{assert_close, dims, sample_lengths, EPSILON};
use panelfit::layout::{derive_scale, pixels_per_unit, ReferenceFigure, Viewport};
use panelfit::PanelfitError;
use test_case::test_case;

#[test_case(150.0, 100.0, 800.0, 400.0, 4.0 ; "height bound")]
#[test_case(1000.0, 100.0, 800.0, 400.0, 0.8 ; "width bound")]
#[test_case(200.0, 100.0, 800.0, 400.0, 4.0 ; "both axes equal")]
#[test_case(8.0, 4.0, 800.0, 400.0, 100.0 ; "tiny grid scales up")]
fn test_scale_scenarios(pw: f64, ph: f64, vw: f64, vh: f64, expected: f64) {
    let scale = derive_scale(dims(pw, ph), &Viewport::new(vw, vh)).unwrap();
    assert_close(scale.get(), expected);
}

#[test]
fn test_scale_fits_and_is_positive() {
    let values = sample_lengths();
    let viewports = [
        Viewport::default(),
        Viewport::fit_window(375.0),
        Viewport::new(1.0, 1000.0),
        Viewport::new(1920.0, 1080.0),
    ];
    for viewport in &viewports {
        for &w in &values {
            for &h in &values {
                let scale = derive_scale(dims(w, h), viewport).unwrap();
                assert!(scale.get() > 0.0);
                let fitted = scale.apply(dims(w, h));
                assert!(fitted.width <= viewport.width + EPSILON * viewport.width);
                assert!(fitted.height <= viewport.height + EPSILON * viewport.height);
                // At least one axis is fully used.
                let fills_width = (fitted.width - viewport.width).abs() <= 1e-6 * viewport.width;
                let fills_height = (fitted.height - viewport.height).abs() <= 1e-6 * viewport.height;
                assert!(fills_width || fills_height);
            }
        }
    }
}

#[test]
fn test_scale_preserves_aspect_ratio() {
    let physical = dims(333.0, 127.0);
    let scale = derive_scale(physical, &Viewport::default()).unwrap();
    let fitted = scale.apply(physical);
    assert_close(fitted.aspect_ratio(), physical.aspect_ratio());
}

#[test_case(0.0, 0.0 ; "zero panel grid")]
#[test_case(0.0, 100.0 ; "zero width")]
#[test_case(100.0, -1.0 ; "negative height")]
#[test_case(f64::NAN, 100.0 ; "nan width")]
fn test_degenerate_geometry(w: f64, h: f64) {
    match derive_scale(dims(w, h), &Viewport::default()) {
        Err(PanelfitError::DegenerateGeometry { .. }) => {}
        other => panic!("expected DegenerateGeometry, got {other:?}"),
    }
}

#[test]
fn test_viewport_fit_window() {
    assert_eq!(Viewport::fit_window(500.0), Viewport::new(460.0, 400.0));
    assert_eq!(Viewport::fit_window(840.0), Viewport::new(800.0, 400.0));
    assert_eq!(Viewport::fit_window(2560.0), Viewport::new(800.0, 400.0));
}

#[test]
fn test_window_too_narrow_is_rejected() {
    let err = derive_scale(dims(100.0, 100.0), &Viewport::fit_window(40.0)).unwrap_err();
    assert!(matches!(
        err,
        PanelfitError::InvalidDimension {
            field: "viewport.width",
            ..
        }
    ));
}

#[test]
fn test_pixels_per_unit_independent_of_artifact_size() {
    let scale = derive_scale(dims(150.0, 100.0), &Viewport::new(800.0, 400.0)).unwrap();
    for size in [1.0, 10.0, 170.0, 5000.0] {
        assert_eq!(pixels_per_unit(scale, size).unwrap(), scale.get());
    }
    assert!(pixels_per_unit(scale, -1.0).is_err());
    assert!(pixels_per_unit(scale, f64::INFINITY).is_err());
}

#[test]
fn test_reference_figure_matches_grid_scale() {
    // 400 x 100 grid in an 800 x 400 viewport: scale 2.
    let scale = derive_scale(dims(400.0, 100.0), &Viewport::new(800.0, 400.0)).unwrap();
    let ppu = pixels_per_unit(scale, ReferenceFigure::HUMAN_CM.native_height).unwrap();
    assert_eq!(ReferenceFigure::HUMAN_CM.rendered_height(ppu), 340.0);
    assert_eq!(
        ReferenceFigure::HUMAN_CM.rendered_height_at(scale).unwrap(),
        scale.to_render(170.0)
    );
}
