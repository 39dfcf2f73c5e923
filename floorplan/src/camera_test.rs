#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// --- Defaults ---

#[test]
fn camera_default_is_identity() {
    let cam = Camera::default();
    assert_eq!(cam.pan(), Point::new(0.0, 0.0));
    assert_eq!(cam.zoom, 1.0);
    assert_eq!(cam.css_transform(), "translate(0px, 0px) scale(1)");
}

#[test]
fn point_distance() {
    assert!(approx_eq(Point::new(0.0, 0.0).distance(Point::new(3.0, 4.0)), 5.0));
}

// --- Zoom ---

#[test]
fn zoom_in_steps_by_fifth() {
    let mut cam = Camera::default();
    cam.zoom_in();
    assert!(approx_eq(cam.zoom, 1.2));
    cam.zoom_out();
    cam.zoom_out();
    assert!(approx_eq(cam.zoom, 0.8));
}

#[test]
fn zoom_never_exceeds_max() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_in();
        assert!(cam.zoom <= ZOOM_MAX);
    }
    assert_eq!(cam.zoom, ZOOM_MAX);
    assert!(!cam.can_zoom_in());
}

#[test]
fn zoom_never_drops_below_min() {
    let mut cam = Camera::default();
    for _ in 0..50 {
        cam.zoom_out();
        assert!(cam.zoom >= ZOOM_MIN);
    }
    assert_eq!(cam.zoom, ZOOM_MIN);
    assert!(!cam.can_zoom_out());
}

#[test]
fn zoom_stays_in_range_for_mixed_sequences() {
    let mut cam = Camera::default();
    let pattern = [true, true, false, true, true, true, true, false, false, false, false, false, false, false];
    for _ in 0..10 {
        for &up in &pattern {
            if up {
                cam.zoom_in();
            } else {
                cam.zoom_out();
            }
            assert!((ZOOM_MIN..=ZOOM_MAX).contains(&cam.zoom), "zoom {} out of range", cam.zoom);
        }
    }
}

#[test]
fn set_zoom_clamps_and_ignores_nan() {
    let mut cam = Camera::default();
    cam.set_zoom(10.0);
    assert_eq!(cam.zoom, ZOOM_MAX);
    cam.set_zoom(f64::NAN);
    assert_eq!(cam.zoom, ZOOM_MAX);
    cam.set_zoom(0.0);
    assert_eq!(cam.zoom, ZOOM_MIN);
}

#[test]
fn zoom_percent_rounds() {
    let mut cam = Camera::default();
    cam.zoom_in();
    assert_eq!(cam.zoom_percent(), 120);
    cam.set_zoom(0.5);
    assert_eq!(cam.zoom_percent(), 50);
}

// --- Reset and transform ---

#[test]
fn reset_restores_origin_and_natural_size() {
    let mut cam = Camera { pan_x: 40.0, pan_y: -12.0, zoom: 1.6 };
    cam.reset();
    assert_eq!(cam, Camera::default());
}

#[test]
fn css_transform_translates_before_scaling() {
    let cam = Camera { pan_x: 25.0, pan_y: -10.5, zoom: 1.5 };
    assert_eq!(cam.css_transform(), "translate(25px, -10.5px) scale(1.5)");
}

