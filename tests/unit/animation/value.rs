use super::*;

#[test]
fn format_number_trims_integers_and_negative_zero() {
    assert_eq!(format_number(40.0), "40");
    assert_eq!(format_number(-0.0), "0");
    assert_eq!(format_number(0.1 + 0.2), "0.3");
    assert_eq!(format_number(-96.0), "-96");
}

#[test]
fn percent_renders_with_suffix() {
    assert_eq!(Percent(48.0).to_string(), "48%");
    assert_eq!(Percent::lerp(&Percent(0.0), &Percent(-48.0), 0.5).to_string(), "-24%");
}

#[test]
fn template_splits_literals_and_numbers() {
    let t = StyleTemplate::parse("inset(0 40% 0 0)").unwrap();
    assert_eq!(t.numbers(), &[0.0, 40.0, 0.0, 0.0]);
    assert_eq!(t.render(), "inset(0 40% 0 0)");

    let t = StyleTemplate::parse("translate(-50%, -12.5px)").unwrap();
    assert_eq!(t.numbers(), &[-50.0, -12.5]);
}

#[test]
fn template_keeps_identifier_digits_literal() {
    let t = StyleTemplate::parse("translate3d(10px, 0, 0)").unwrap();
    assert_eq!(t.numbers(), &[10.0, 0.0, 0.0]);
    assert_eq!(t.render(), "translate3d(10px, 0, 0)");
}

#[test]
fn template_lerp_moves_numbers_only() {
    let a = StyleTemplate::parse("rgb(255, 255, 255)").unwrap();
    let b = StyleTemplate::parse("rgb(0, 0, 0)").unwrap();
    assert!(StyleTemplate::compatible(&a, &b));
    let mid = StyleTemplate::lerp(&a, &b, 0.5);
    assert_eq!(mid.render(), "rgb(127.5, 127.5, 127.5)");
}

#[test]
fn incompatible_templates_are_detected() {
    let a = StyleTemplate::parse("blur(0px)").unwrap();
    let b = StyleTemplate::parse("blur(0em)").unwrap();
    assert!(!StyleTemplate::compatible(&a, &b));
}

#[test]
fn with_numbers_checks_arity() {
    let t = StyleTemplate::parse("blur(0px)").unwrap();
    assert_eq!(t.with_numbers(&[14.0]).unwrap().render(), "blur(14px)");
    assert!(t.with_numbers(&[1.0, 2.0]).is_err());
}

#[test]
fn rgba_lerp_blends_channels() {
    let c = Rgba::lerp(&Rgba::white(), &Rgba::black(), 0.25);
    assert!((c.r - 191.25).abs() < 1e-9);
    assert_eq!(c.a, 1.0);
}

#[test]
fn hex_colours_are_not_templates() {
    for s in ["#000", "#fff", "color: #999999", "#a0b"] {
        assert!(
            matches!(StyleTemplate::parse(s), Err(ScrollworkError::Animation(_))),
            "{s}"
        );
    }
    assert_eq!(StyleTemplate::parse("#menu").unwrap().numbers(), &[] as &[f64]);
}
