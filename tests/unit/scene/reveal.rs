use super::*;

const CFG: RevealConfig = RevealConfig {
    base: 0.2,
    step: 0.05,
    span: 0.3,
};

#[test]
fn clip_renders_hidden_fraction() {
    assert_eq!(inset_clip(0.0), "inset(0 100% 0 0)");
    assert_eq!(inset_clip(0.6), "inset(0 40% 0 0)");
    assert_eq!(inset_clip(1.0), "inset(0 0% 0 0)");
}

#[test]
fn lines_reveal_in_their_own_windows() {
    let r = LineReveal::new(CFG, ["one", "two", "three"]).unwrap();
    assert_eq!(r.len(), 3);

    let at_start = r.sample(0.2);
    assert_eq!(at_start[0].reveal, 0.0);
    assert_eq!(at_start[0].clip_path, "inset(0 100% 0 0)");

    let mid = r.sample(0.35);
    assert!((mid[0].reveal - 0.5).abs() < 1e-9);
    assert_eq!(mid[0].clip_path, "inset(0 50% 0 0)");
    assert!((mid[1].reveal - (0.1 / 0.3)).abs() < 1e-9);
    assert!(mid[2].reveal < mid[1].reveal);

    let done = r.sample(0.8);
    assert!(done.iter().all(|l| l.reveal == 1.0 && l.clip_path == "inset(0 0% 0 0)"));
    assert_eq!(done[2].text, "three");
}

#[test]
fn empty_reveal_samples_nothing() {
    let r = LineReveal::new(CFG, Vec::<String>::new()).unwrap();
    assert!(r.is_empty());
    assert!(r.sample(0.5).is_empty());
}
