use super::*;

fn expression_spec() -> WindowSpec {
    WindowSpec {
        count: 5,
        base: 0.12,
        size: 0.15,
        gap: 0.03,
        edge_fraction: 0.55,
        tail_extra: 0.18,
    }
}

#[test]
fn five_windows_start_on_the_expected_grid() {
    let alloc = expression_spec().allocate().unwrap();
    let starts: Vec<f64> = alloc.windows().iter().map(|w| w.start).collect();
    let expected = [0.12, 0.30, 0.48, 0.66, 0.84];
    assert_eq!(starts.len(), expected.len());
    for (got, want) in starts.iter().zip(expected) {
        assert!((got - want).abs() < 1e-9, "start {got} != {want}");
    }
    for w in alloc.windows() {
        assert!((w.end - (w.start + 0.15)).abs() < 1e-9);
    }
}

#[test]
fn only_terminal_window_gets_a_tail() {
    let alloc = expression_spec().allocate().unwrap();
    for w in &alloc.windows()[..4] {
        assert_eq!(w.full_end, w.end);
    }
    let last = alloc.terminal().unwrap();
    assert!((last.full_end - (last.end + 0.18)).abs() < 1e-9);
    assert!((last.edge - (last.start + 0.15 * 0.55)).abs() < 1e-9);
}

#[test]
fn overrun_is_reported_not_rejected() {
    let alloc = expression_spec().allocate().unwrap();
    // 0.84 + 0.15 + 0.18 = 1.17
    assert!(alloc.overruns());
    assert!((alloc.reach() - 1.17).abs() < 1e-9);
}

#[test]
fn rejects_bad_parameters() {
    let mut spec = expression_spec();
    spec.size = 0.0;
    assert!(spec.allocate().is_err());

    let mut spec = expression_spec();
    spec.edge_fraction = 1.5;
    assert!(spec.allocate().is_err());

    let mut spec = expression_spec();
    spec.tail_extra = -0.1;
    assert!(spec.allocate().is_err());
}

#[test]
fn empty_allocation_has_no_terminal() {
    let mut spec = expression_spec();
    spec.count = 0;
    let alloc = spec.allocate().unwrap();
    assert!(alloc.terminal().is_none());
    assert!(!alloc.overruns());
}

#[test]
fn window_series_use_window_checkpoints() {
    let alloc = expression_spec().allocate().unwrap();
    let w = alloc.windows()[1];
    let s = w.series([0.6, 1.0, 0.9]).unwrap();
    assert_eq!(s.sample(w.start), 0.6);
    assert_eq!(s.sample(w.edge), 1.0);
    assert_eq!(s.sample(w.end), 0.9);
}

#[test]
fn boundary_offsets_from_shared_point() {
    let alloc = expression_spec().allocate().unwrap();
    let b = alloc.terminal().unwrap().start_boundary();
    assert!((b.at() - 0.84).abs() < 1e-9);
    assert!((b.offset(-0.05) - 0.79).abs() < 1e-9);
}
