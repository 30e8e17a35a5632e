use super::*;
use crate::config::SiteConfig;

fn cta(now: f64) -> GetInTouch {
    GetInTouch::new(SiteConfig::default().ripple, now).unwrap()
}

#[test]
fn rings_start_invisible_and_end_fully_grown() {
    let g = cta(0.0);
    let f = g.frame(0.0);
    assert_eq!(f.ripples.len(), 3);
    assert!(f.ripples.iter().all(|r| r.size == 0.0 && r.opacity == 0.0));

    // Instance 2 starts at 0.7 s and finishes at 3.2 s.
    let done = g.frame(3.2);
    assert!(done.ripples.iter().all(|r| r.phase == 1.0));
    assert!(done.ripples.iter().all(|r| r.size == RIPPLE_SIZE && r.opacity == 0.0));
}

#[test]
fn opacity_peaks_in_the_first_third() {
    let g = cta(0.0);
    let r = &g.frame(2.5 / 3.0).ripples[0];
    assert!((r.opacity - 0.7).abs() < 1e-6);
    assert!(r.size > 0.0 && r.size < RIPPLE_SIZE);
}

#[test]
fn hover_in_rekeys_and_restarts_rings() {
    let mut g = cta(0.0);
    assert_eq!(g.frame(0.0).ripples[0].key, "0-0");

    g.set_hovered(true, 10.0);
    let f = g.frame(10.0);
    assert!(f.hovered);
    assert_eq!(f.ripples[1].key, "1-1");
    assert_eq!(f.ripples[0].phase, 0.0);

    // Still looping on the third iteration while hovered.
    let looping = g.frame(10.0 + 2.0 * 3.05 + 1.25);
    assert!((looping.ripples[0].phase - 0.5).abs() < 1e-9);

    g.set_hovered(false, 20.0);
    g.set_hovered(true, 20.5);
    assert_eq!(g.frame(20.5).ripples[2].key, "2-2");
    assert_eq!(g.hover().generation(), 2);
}

#[test]
fn heading_enters_once() {
    let mut g = cta(0.0);
    let vp = Viewport::new(0.0, 1280.0, 800.0).unwrap();
    let el = ElementBox::band(200.0, 300.0).unwrap();

    assert_eq!(g.frame(0.0).heading.opacity, 0.0);
    assert!(g.observe(Some(el), vp, 1.0));
    let shown = g.frame(3.0).heading;
    assert_eq!(shown.opacity, 1.0);
    assert!((shown.scale - 1.0).abs() < 1e-9);

    // Scrolled away and unmounted: stays revealed.
    assert!(g.observe(None, vp, 3.0));
    assert_eq!(g.frame(4.0).heading.opacity, 1.0);
}
