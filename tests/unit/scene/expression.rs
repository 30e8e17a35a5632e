use super::*;

fn scene() -> ExpressionScene {
    ExpressionScene::new(&ExpressionConfig::default()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn windows_follow_the_allocator() {
    let s = scene();
    let starts: Vec<f64> = s.allocation().windows().iter().map(|w| w.start).collect();
    for (got, want) in starts.iter().zip([0.12, 0.30, 0.48, 0.66, 0.84]) {
        assert!(close(*got, want), "{got} vs {want}");
    }
    assert!(close(s.boundary().at(), 0.84));
}

#[test]
fn heading_fades_exactly_when_fullscreen_card_appears() {
    let s = scene();
    let b = s.boundary().at();

    let before = s.frame(Progress::new(b - 0.05));
    assert!(close(before.heading_opacity, 1.0));

    let mid = s.frame(Progress::new(b - 0.025));
    assert!(close(mid.heading_opacity, 0.5));

    let at = s.frame(Progress::new(b));
    assert!(close(at.heading_opacity, 0.0));
    let last = at.items.last().unwrap();
    assert!(last.fullscreen);
    assert!(close(last.opacity, 1.0));

    let just_before = s.frame(Progress::new(b - 0.01));
    assert!(close(just_before.items.last().unwrap().opacity, 0.0));
}

#[test]
fn corner_cards_fly_to_their_targets() {
    let s = scene();
    let w0 = s.allocation().windows()[0];

    let edge = s.frame(Progress::new(w0.edge));
    let first = &edge.items[0];
    assert_eq!(first.x, "-48%");
    assert_eq!(first.y, "-40%");
    assert!(close(first.scale, 1.0));
    assert!(close(first.opacity, 1.0));
    assert_eq!(first.z_index, 5);
    assert_eq!(first.image, "/works/flipside/flipside.png");

    let end = s.frame(Progress::new(w0.end));
    assert_eq!(end.items[0].x, "-96%");
    assert!(close(end.items[0].opacity, 0.0));

    let pre = s.frame(Progress::new(w0.start - 0.01));
    assert!(close(pre.items[0].opacity, 0.5));
    assert!(close(pre.items[0].scale, 0.6));
}

#[test]
fn fullscreen_card_keeps_growing_through_its_tail() {
    let s = scene();
    let f = s.frame(Progress::END);
    let last = f.items.last().unwrap();
    assert_eq!(last.z_index, 30);
    assert_eq!(last.x, "0%");
    assert!(last.scale > 1.2 && last.scale < 9.0);
    assert!(s.allocation().overruns());
}

#[test]
fn target_count_must_match_corner_windows() {
    let mut cfg = ExpressionConfig::default();
    cfg.targets.pop();
    let err = ExpressionScene::new(&cfg).unwrap_err();
    assert!(matches!(err, ScrollworkError::Validation(_)));

    cfg.windows.count = 0;
    cfg.targets.clear();
    assert!(ExpressionScene::new(&cfg).is_err());
}

#[test]
fn overrunning_allocation_still_builds() {
    let mut cfg = ExpressionConfig::default();
    cfg.windows.count = 6;
    cfg.targets.push([0.0, 48.0]);
    let s = ExpressionScene::new(&cfg).unwrap();
    let b = s.boundary().at();
    assert!(b > 1.0);

    // The terminal window never starts: the heading is only part way through its fade.
    assert!(close(s.frame(Progress::new(0.9)).heading_opacity, 1.0));
    let end = s.frame(Progress::END);
    assert!(end.heading_opacity > 0.0 && end.heading_opacity < 1.0);
    assert!(close(end.items.last().unwrap().opacity, 0.0));
    assert!(SceneKind::Expression.build(&crate::config::SiteConfig {
        expression: cfg,
        ..Default::default()
    })
    .is_ok());
}

#[test]
fn heading_lead_past_zero_is_clamped() {
    let mut cfg = ExpressionConfig::default();
    cfg.heading_lead = 2.0;
    let s = ExpressionScene::new(&cfg).unwrap();
    assert!(close(s.frame(Progress::START).heading_opacity, 1.0));
    assert!(close(s.frame(Progress::new(s.boundary().at())).heading_opacity, 0.0));

    cfg.heading_lead = -0.1;
    assert!(matches!(
        ExpressionScene::new(&cfg).unwrap_err(),
        ScrollworkError::Validation(_)
    ));
}
