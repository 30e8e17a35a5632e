use super::*;

fn vp(scroll_y: f64) -> Viewport {
    Viewport::new(scroll_y, 1280.0, 800.0).unwrap()
}

#[test]
fn contain_offset_spans_element_minus_viewport() {
    // 4x viewport tall section at y=1000: range is [1000, 1000 + 3200 - 800].
    let el = ElementBox::band(1000.0, 3200.0).unwrap();
    assert_eq!(track(el, vp(0.0), ScrollOffset::CONTAIN), Progress::START);
    assert_eq!(track(el, vp(1000.0), ScrollOffset::CONTAIN).get(), 0.0);
    assert!((track(el, vp(2200.0), ScrollOffset::CONTAIN).get() - 0.5).abs() < 1e-9);
    assert_eq!(track(el, vp(3400.0), ScrollOffset::CONTAIN), Progress::END);
    assert_eq!(track(el, vp(9000.0), ScrollOffset::CONTAIN), Progress::END);
}

#[test]
fn enter_to_exit_starts_when_element_peeks_in() {
    let el = ElementBox::band(1000.0, 400.0).unwrap();
    // Start: element top at viewport bottom -> scroll 200. End: element bottom at top -> 1400.
    assert_eq!(track(el, vp(200.0), ScrollOffset::ENTER_TO_EXIT).get(), 0.0);
    assert!((track(el, vp(800.0), ScrollOffset::ENTER_TO_EXIT).get() - 0.5).abs() < 1e-9);
    assert_eq!(track(el, vp(1400.0), ScrollOffset::ENTER_TO_EXIT).get(), 1.0);
}

#[test]
fn degenerate_range_is_a_step() {
    // Element exactly one viewport tall under CONTAIN: s0 == s1.
    let el = ElementBox::band(500.0, 800.0).unwrap();
    assert_eq!(track(el, vp(499.0), ScrollOffset::CONTAIN), Progress::START);
    assert_eq!(track(el, vp(500.0), ScrollOffset::CONTAIN), Progress::END);
}

#[test]
fn source_holds_last_reading_while_unmounted() {
    let el = ElementBox::band(0.0, 1600.0).unwrap();
    let mut src = ProgressSource::new(ScrollOffset::CONTAIN);
    assert_eq!(src.update(None, vp(300.0)), Progress::START);

    let p = src.update(Some(el), vp(400.0));
    assert!((p.get() - 0.5).abs() < 1e-9);

    assert_eq!(src.update(None, vp(800.0)), p);
    assert_eq!(src.get(), p);
}

#[test]
fn edge_pairs_parse_and_display() {
    let e: EdgePair = "start end".parse().unwrap();
    assert_eq!(e, ScrollOffset::ENTER_TO_EXIT.start);
    assert_eq!(e.to_string(), "start end");

    let f: EdgePair = "0.25 center".parse().unwrap();
    assert_eq!(f.element, Anchor::Fraction(0.25));
    assert_eq!(f.viewport, Anchor::Center);

    assert!("start".parse::<EdgePair>().is_err());
    assert!("top bottom".parse::<EdgePair>().is_err());
}
