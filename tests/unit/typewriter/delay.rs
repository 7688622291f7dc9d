use super::*;

#[test]
fn variation_follows_char_code_hash() {
    // 'a' = 97 -> 1649 % 100 = 49; 'b' = 98 -> 1666 % 100 = 66.
    assert_eq!(HumanRhythm::variation('a'), 0.49);
    assert_eq!(HumanRhythm::variation('b'), 0.66);
    assert_eq!(HumanRhythm::variation('\0'), 0.0);
}

#[test]
fn frames_per_char_for_a_and_b() {
    let speed = Speed::new(1.0);
    assert!((HumanRhythm.frames_per_char('a', speed) - 0.78125).abs() < 1e-12);
    assert_eq!(HumanRhythm.frames_per_char('b', speed), 1.0 / (1.0 * (0.3 + 0.66 * 2.0)));
}

#[test]
fn factors_stay_in_documented_band() {
    for ch in (0u32..0x3000).filter_map(char::from_u32) {
        let f = HumanRhythm.delay_factor(ch);
        assert!((0.3..=2.28 + 1e-12).contains(&f), "{ch:?} -> {f}");
    }
}

#[test]
fn non_positive_speed_is_clamped() {
    assert_eq!(Speed::new(0.0).get(), Speed::MIN);
    assert_eq!(Speed::new(-4.0).get(), Speed::MIN);
    assert_eq!(Speed::new(f64::NAN).get(), Speed::MIN);
    assert_eq!(Speed::new(f64::INFINITY).get(), Speed::MIN);
    assert!(HumanRhythm.frames_per_char('x', Speed::new(0.0)).is_finite());
}

#[test]
fn constant_rhythm_rejects_bad_factor() {
    assert_eq!(ConstantRhythm(2.0).delay_factor('q'), 2.0);
    assert_eq!(ConstantRhythm(0.0).delay_factor('q'), 1.0);
    assert_eq!(ConstantRhythm(1.0).frames_per_char('q', Speed::new(0.5)), 2.0);
}
