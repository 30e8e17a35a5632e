use super::*;

fn viewport() -> Viewport {
    Viewport::new(0.0, 1280.0, 800.0).unwrap()
}

#[test]
fn cards_rise_in_with_staggered_delays() {
    let mut w = WorksSection::new(0.0);
    let on_screen = ElementBox::band(100.0, 400.0).unwrap();

    assert!(w.observe(0, Some(on_screen), viewport(), 1.0));
    assert!(w.observe(3, Some(on_screen), viewport(), 1.0));
    assert!(!w.observe(1, None, viewport(), 1.0));
    assert!(!w.observe(99, Some(on_screen), viewport(), 1.0));

    let f = w.frame(1.0);
    assert_eq!(f.cards.len(), 9);
    assert_eq!(f.cards[0].pose.opacity, 0.0);
    assert_eq!(f.cards[0].pose.y, 80.0);

    // Card 3 waits 0.3 s before moving.
    let f = w.frame(1.25);
    assert_eq!(f.cards[3].pose.y, 80.0);
    assert!(f.cards[0].pose.y < 80.0);

    let f = w.frame(3.0);
    assert_eq!(f.cards[0].pose, Pose::REST);
    assert_eq!(f.cards[3].pose, Pose::REST);
    assert_eq!(f.cards[1].pose.opacity, 0.0);
}

#[test]
fn hover_swaps_marquee_and_background() {
    let mut w = WorksSection::new(0.0);
    let idle = w.frame(15.0);
    assert_eq!(idle.marquee_text, DEFAULT_MARQUEE);
    assert_eq!(idle.marquee_x, -1000.0);
    assert!(idle.background.is_none());

    w.hover(3, 20.0);
    let f = w.frame(24.0);
    assert_eq!(f.marquee_text, "VOID • VOID • VOID • VOID");
    assert_eq!(f.marquee_x, 0.0);
    assert!(f.marquee_outlined);
    assert_eq!(f.background, Some("/index/void.png"));
    assert!(f.cards[3].hovered);
    assert_eq!(f.cards[3].href, "/works/void");
    assert_eq!(f.cards[3].left_percent, 50.0);

    // A late leave from a different card does not clear the selection.
    w.unhover(1, 24.5);
    assert_eq!(w.hovered().map(|c| c.title), Some("VOID"));

    w.unhover(3, 25.0);
    let f = w.frame(25.0);
    assert_eq!(f.marquee_text, DEFAULT_MARQUEE);
    assert_eq!(f.marquee_x, 0.0);
}
