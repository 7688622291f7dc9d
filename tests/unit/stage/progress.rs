use super::*;

#[test]
fn scenario_eight_stages_mid_transition() {
    let tl = StageProgressTimeline::new(8, 0.75).unwrap();
    let s = tl.sample(0.8 / 8.0);
    assert_eq!(s.active_index, 0);
    assert!((s.local_progress - 0.8).abs() < 1e-12);
    assert!(s.transition > 0.0 && s.transition < 1.0);
    assert!(s.pointer > 0.0 && s.pointer < 1.0);
    assert_eq!(s.sub_progress, 1.0);
}

#[test]
fn stage_boundaries_hold_for_many_counts() {
    for n in 1..200usize {
        let tl = StageProgressTimeline::new(n, DEFAULT_DWELL).unwrap();
        assert_eq!(tl.stage_index(0.0), 0);
        assert_eq!(tl.stage_index(1.0), n - 1);
        assert_eq!(tl.stage_index(1.0 - 1e-12), n - 1);
        for k in 0..n {
            assert_eq!(tl.stage_index(k as f64 / n as f64), k, "k={k} n={n}");
        }
    }
}

#[test]
fn index_matches_floor_formula_away_from_boundaries() {
    let tl = StageProgressTimeline::new(7, DEFAULT_DWELL).unwrap();
    for i in 0..=1000 {
        let p = i as f64 / 1000.0;
        let expected = ((p * 7.0).floor() as usize).min(6);
        let got = tl.stage_index(p);
        assert!(got == expected || (got as f64 / 7.0 - p).abs() < 1e-12, "p={p}");
    }
}

#[test]
fn pointer_holds_during_dwell() {
    let tl = StageProgressTimeline::new(4, 0.75).unwrap();
    let s = tl.sample(0.25 + 0.25 * 0.5);
    assert_eq!(s.active_index, 1);
    assert_eq!(s.transition, 0.0);
    assert_eq!(s.pointer, 1.0);
    assert!((s.sub_progress - 0.5 / 0.75).abs() < 1e-12);
}

#[test]
fn pointer_is_monotonic_and_continuous() {
    let tl = StageProgressTimeline::new(5, 0.75).unwrap();
    let mut last = tl.sample(0.0).pointer;
    for i in 1..=5000 {
        let ptr = tl.sample(i as f64 / 5000.0).pointer;
        assert!(ptr >= last - 1e-12);
        assert!(ptr - last < 0.05, "jump at {i}");
        last = ptr;
    }
    assert_eq!(last, 4.0);
}

#[test]
fn last_stage_never_transitions() {
    let tl = StageProgressTimeline::new(3, 0.5).unwrap();
    for p in [0.7, 0.9, 0.999, 1.0] {
        let s = tl.sample(p);
        assert_eq!(s.active_index, 2);
        assert_eq!(s.transition, 0.0);
        assert_eq!(s.pointer, 2.0);
    }
    assert_eq!(tl.sample(1.0).local_progress, 1.0);
}

#[test]
fn out_of_range_progress_is_clamped() {
    let tl = StageProgressTimeline::new(3, 0.75).unwrap();
    assert_eq!(tl.sample(-2.0), tl.sample(0.0));
    assert_eq!(tl.sample(9.0), tl.sample(1.0));
    assert_eq!(tl.sample(f64::NAN), tl.sample(0.0));
}

#[test]
fn full_dwell_never_moves_pointer() {
    let tl = StageProgressTimeline::new(4, 1.0).unwrap();
    let s = tl.sample(0.24);
    assert_eq!(s.transition, 0.0);
    assert_eq!(s.active_index, 0);
}

#[test]
fn rejects_invalid_construction() {
    assert!(StageProgressTimeline::new(0, 0.75).is_err());
    assert!(StageProgressTimeline::new(3, 0.0).is_err());
    assert!(StageProgressTimeline::new(3, 1.5).is_err());
    assert!(StageProgressTimeline::new(3, f64::NAN).is_err());
}

#[test]
fn stage_list_names_active_stage() {
    let names = ["input", "policy", "tools", "output"]
        .map(String::from)
        .to_vec();
    let list = StageList::new(names, 0.75).unwrap().with_ease(Ease::InOutCubic);
    assert_eq!(list.active_name(0.0), "input");
    assert_eq!(list.active_name(0.6), "tools");
    assert_eq!(list.active_name(1.0), "output");
    assert_eq!(list.timeline().ease(), Ease::InOutCubic);
    assert!(StageList::new(vec![], 0.75).is_err());
}
