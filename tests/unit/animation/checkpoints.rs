use super::*;
use crate::animation::value::{Percent, StyleTemplate};

fn series(inputs: &[f64], outputs: &[f64]) -> CheckpointSeries<f64> {
    CheckpointSeries::new(inputs.iter().copied(), outputs.iter().copied()).unwrap()
}

#[test]
fn clamps_outside_input_range() {
    let s = series(&[0.2, 0.8], &[10.0, 20.0]);
    assert_eq!(s.sample(0.0), 10.0);
    assert_eq!(s.sample(-3.0), 10.0);
    assert_eq!(s.sample(1.0), 20.0);
    assert_eq!(s.sample(f64::NAN), 10.0);
}

#[test]
fn boundary_outputs_are_exact() {
    let s = series(&[0.12, 0.2025, 0.27, 0.45], &[0.6, 0.8, 1.2, 9.0]);
    assert_eq!(s.sample(0.12), 0.6);
    assert_eq!(s.sample(0.45), 9.0);
    assert_eq!(interpolate(0.2025, &s), 0.8);
}

#[test]
fn interpolation_stays_between_bounding_outputs() {
    let s = series(&[0.0, 0.25, 0.5, 0.75, 1.0], &[80.0, 120.0, 80.0, 50.0, 80.0]);
    for i in 0..=100 {
        let p = f64::from(i) / 100.0;
        let v = s.sample(p);
        let idx = s.points().partition_point(|c| c.input <= p).clamp(1, 4);
        let a = s.points()[idx - 1].output;
        let b = s.points()[idx].output;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        assert!(v >= lo - 1e-9 && v <= hi + 1e-9, "p={p} v={v} not in [{lo}, {hi}]");
    }
}

#[test]
fn linear_midpoint() {
    let s = series(&[0.0, 1.0], &[0.0, 360.0]);
    assert!((s.sample(0.5) - 180.0).abs() < 1e-9);
    assert!((s.sample(0.25) - 90.0).abs() < 1e-9);
}

#[test]
fn interior_step_prefers_later_checkpoint() {
    let s = series(&[0.0, 0.5, 0.5, 1.0], &[0.0, 1.0, 5.0, 5.0]);
    assert!((s.sample(0.49) - 0.98).abs() < 1e-9);
    assert_eq!(s.sample(0.5), 5.0);
}

#[test]
fn rejects_unsorted_empty_and_mismatched() {
    assert!(CheckpointSeries::new([0.5, 0.1], [1.0, 2.0]).is_err());
    assert!(CheckpointSeries::<f64>::new([], []).is_err());
    assert!(CheckpointSeries::new([0.0, 1.0], [1.0]).is_err());
    assert!(CheckpointSeries::new([0.0, f64::INFINITY], [1.0, 2.0]).is_err());
}

#[test]
fn rejects_templates_with_different_structure() {
    let a = StyleTemplate::parse("blur(0px)").unwrap();
    let b = StyleTemplate::parse("scale(2)").unwrap();
    assert!(CheckpointSeries::new([0.0, 1.0], [a, b]).is_err());
}

#[test]
fn percent_series_renders_css() {
    let s = CheckpointSeries::new([0.12, 0.2025, 0.27], [Percent(0.0), Percent(-48.0), Percent(-96.0)])
        .unwrap();
    assert_eq!(s.sample(0.2025).to_string(), "-48%");
    assert_eq!(s.sample(0.9).to_string(), "-96%");
}

#[test]
fn template_series_interpolates_clip_path() {
    let s = CheckpointSeries::new(
        [0.0, 1.0],
        [
            StyleTemplate::parse("inset(0 100% 0 0)").unwrap(),
            StyleTemplate::parse("inset(0 0% 0 0)").unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(s.sample(0.25).render(), "inset(0 75% 0 0)");
}

#[test]
fn eased_series_keeps_endpoints() {
    let s = series(&[0.0, 1.0], &[0.0, 10.0]).with_ease(Ease::InQuad);
    assert_eq!(s.sample(0.0), 0.0);
    assert_eq!(s.sample(1.0), 10.0);
    assert!((s.sample(0.5) - 2.5).abs() < 1e-9);
}

#[test]
fn constant_series_and_transform() {
    let s = CheckpointSeries::constant(3.0);
    assert_eq!(s.sample(0.7), 3.0);
    assert_eq!(transform(0.5, |v| format!("rgba(255, 255, 255, {v})")), "rgba(255, 255, 255, 0.5)");
}
