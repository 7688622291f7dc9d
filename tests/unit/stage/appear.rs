use super::*;

#[test]
fn gated_before_start_and_full_after_end() {
    let a = AppearTimeline::new(0.22, 0.22);
    assert_eq!(a.value(0.0), 0.0);
    assert_eq!(a.value(0.22), 0.0);
    assert_eq!(a.value(0.44 + 1e-9), 1.0);
    assert_eq!(a.value(1.0), 1.0);
}

#[test]
fn midpoint_is_half_and_curve_is_monotonic() {
    let a = AppearTimeline::new(0.5, 0.2);
    assert!((a.value(0.6) - 0.5).abs() < 1e-12);
    let mut last = 0.0;
    for i in 0..=100 {
        let v = a.value(i as f64 / 100.0);
        assert!((0.0..=1.0).contains(&v));
        assert!(v >= last);
        last = v;
    }
}

#[test]
fn zero_duration_is_a_step() {
    let a = AppearTimeline::new(0.3, 0.0);
    assert_eq!(a.value(0.29), 0.0);
    assert_eq!(a.value(0.3), 1.0);
}

#[test]
fn between_matches_appear_and_handles_degenerate_span() {
    assert!((between(0.5, 0.4, 0.6) - AppearTimeline::new(0.4, 0.2).value(0.5)).abs() < 1e-12);
    assert_eq!(between(0.5, 0.5, 0.5), 1.0);
    assert_eq!(between(0.49, 0.5, 0.5), 0.0);
}

#[test]
fn elements_are_independent_and_order_free() {
    let set = AppearSet::new()
        .with("brain", 0.0, 0.22)
        .with("tool", 0.22, 0.22)
        .with("rails", 0.74, 0.26);

    let forward = set.sample(0.3);
    let single = set.value_of("tool", 0.3).unwrap();
    assert_eq!(forward[1], ("tool".to_string(), single));
    assert_eq!(forward[0].1, 1.0);
    assert_eq!(forward[2].1, 0.0);

    let mut reversed: Vec<f64> = set
        .elements()
        .iter()
        .rev()
        .map(|e| e.timing.value(0.3))
        .collect();
    reversed.reverse();
    let values: Vec<f64> = forward.into_iter().map(|(_, v)| v).collect();
    assert_eq!(values, reversed);
    assert!(set.value_of("missing", 0.3).is_none());
}

#[test]
fn deserializes_with_default_duration() {
    let el: AppearElement = serde_json::from_str(r#"{"id":"gate","start":0.36}"#).unwrap();
    assert_eq!(el.timing.duration, 0.18);
}
