use super::*;

#[test]
fn kinds_parse_by_name() {
    for k in SceneKind::ALL {
        assert_eq!(k.as_str().parse::<SceneKind>().unwrap(), k);
        assert_eq!(k.to_string(), k.as_str());
    }
    assert!("credits".parse::<SceneKind>().is_err());
}

#[test]
fn every_scene_builds_from_defaults_and_reports_its_kind() {
    let cfg = SiteConfig::default();
    for k in SceneKind::ALL {
        let scene = k.build(&cfg).unwrap();
        assert_eq!(scene.kind(), k);
        let frame = scene.sample(Progress::new(0.5));
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["scene"], k.as_str());
    }
}

#[test]
fn offsets_match_section_anchoring() {
    let cfg = SiteConfig::default();
    let offset = |k: SceneKind| k.build(&cfg).unwrap().offset();
    assert_eq!(offset(SceneKind::Expression), ScrollOffset::CONTAIN);
    assert_eq!(offset(SceneKind::Footer), ScrollOffset::CONTAIN);
    assert_eq!(offset(SceneKind::Hero), ScrollOffset::PIN_TO_EXIT);
    assert_eq!(offset(SceneKind::Profile), ScrollOffset::ENTER_TO_EXIT);
    assert_eq!(offset(SceneKind::Service), ScrollOffset::ENTER_TO_EXIT);
}
