use super::*;
use crate::config::SiteConfig;

fn scene() -> ProfileScene {
    ProfileScene::new(SiteConfig::default().profile_lines).unwrap()
}

#[test]
fn hello_brightens_along_the_section() {
    let s = scene();
    assert_eq!(s.frame(Progress::START).hello_opacity, 0.6);
    assert!((s.frame(Progress::new(0.3)).hello_opacity - 0.9).abs() < 1e-9);
    assert!((s.frame(Progress::new(0.15)).hello_opacity - 0.75).abs() < 1e-9);
    assert_eq!(s.frame(Progress::END).hello_opacity, 1.0);
}

#[test]
fn nine_lines_reveal_in_order() {
    let s = scene();
    let f = s.frame(Progress::new(0.4));
    assert_eq!(f.lines.len(), 9);
    assert_eq!(f.lines[0].text, "I'm Kai.");
    for pair in f.lines.windows(2) {
        assert!(pair[0].reveal >= pair[1].reveal);
    }
    // Last line covers [0.6, 0.9].
    assert_eq!(f.lines[8].reveal, 0.0);
    let end = s.frame(Progress::new(0.9));
    assert_eq!(end.lines[8].reveal, 1.0);
}
