use super::*;

#[test]
fn progress_clamps_and_rejects_nan() {
    assert_eq!(Progress::new(-0.5).get(), 0.0);
    assert_eq!(Progress::new(1.5).get(), 1.0);
    assert_eq!(Progress::new(f64::NAN), Progress::START);
    assert_eq!(Progress::new(0.25).get(), 0.25);
}

#[test]
fn element_box_rejects_negative_size() {
    assert!(ElementBox::new(0.0, 0.0, -1.0, 10.0).is_err());
    let b = ElementBox::band(100.0, 50.0).unwrap();
    assert_eq!(b.top(), 100.0);
    assert_eq!(b.height(), 50.0);
}

#[test]
fn viewport_visible_fraction() {
    let vp = Viewport::new(0.0, 1000.0, 800.0).unwrap();
    let half_in = ElementBox::band(700.0, 200.0).unwrap();
    assert!((vp.visible_fraction(half_in) - 0.5).abs() < 1e-9);

    let below = ElementBox::band(900.0, 200.0).unwrap();
    assert_eq!(vp.visible_fraction(below), 0.0);

    let inside = ElementBox::band(100.0, 200.0).unwrap();
    assert_eq!(vp.visible_fraction(inside), 1.0);
}

#[test]
fn rgba_css_switches_on_alpha() {
    assert_eq!(Rgba::white().to_css(), "rgb(255, 255, 255)");
    assert_eq!(
        Rgba::rgba(255.0, 255.0, 255.0, 0.5).to_css(),
        "rgba(255, 255, 255, 0.5)"
    );
}
