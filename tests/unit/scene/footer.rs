use super::*;

fn scene() -> FooterScene {
    FooterScene::new(FooterConfig::default()).unwrap()
}

#[test]
fn stays_dark_until_the_last_sliver() {
    let f = scene().frame(Progress::new(0.9));
    assert_eq!(f.transition, 0.0);
    assert_eq!(f.text_color, "rgb(255, 255, 255)");
    assert_eq!(f.backdrop, "rgba(255, 255, 255, 0)");
    assert!(!f.open);
}

#[test]
fn inverts_colors_at_the_bottom() {
    let f = scene().frame(Progress::END);
    assert_eq!(f.transition, 1.0);
    assert_eq!(f.text_color, "rgb(0, 0, 0)");
    assert_eq!(f.pattern_color, "rgb(0, 0, 0)");
    assert_eq!(f.backdrop, "rgb(255, 255, 255)");
    assert!(f.open);

    let half = scene().frame(Progress::new(0.99));
    assert_eq!(half.text_color, "rgb(127.5, 127.5, 127.5)");
    assert_eq!(half.backdrop, "rgba(255, 255, 255, 0.5)");
}

#[test]
fn opens_just_above_threshold() {
    let s = scene();
    // transition = (p - 0.98) / 0.02, so 0.1 sits at p = 0.982.
    assert!(!s.is_open(Progress::new(0.9815)));
    assert!(s.is_open(Progress::new(0.9825)));
}

#[test]
fn threshold_is_configurable() {
    let s = FooterScene::new(FooterConfig {
        open_threshold: 0.6,
        ..FooterConfig::default()
    })
    .unwrap();
    assert!(!s.is_open(Progress::new(0.99)));
    assert!(s.is_open(Progress::new(0.995)));
}
