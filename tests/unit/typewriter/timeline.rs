use super::*;
use crate::typewriter::delay::ConstantRhythm;

fn at(tl: &TypewriterTimeline, frames: f64) -> usize {
    tl.sample(ElapsedFrames::new(frames), FrameIndex(0)).chars_shown
}

#[test]
fn scenario_ab_transitions_at_exact_prefix_sums() {
    let tl = TypewriterTimeline::new("ab", Speed::new(1.0), 0.0);
    let fa = HumanRhythm.frames_per_char('a', Speed::new(1.0));
    let fb = HumanRhythm.frames_per_char('b', Speed::new(1.0));
    let total = fa + fb;
    assert_eq!(tl.typing_frames(), total);
    assert_eq!(tl.frames_for_chars(1), fa);

    assert_eq!(at(&tl, 0.0), 0);
    assert_eq!(at(&tl, fa - 1e-9), 0);
    assert_eq!(at(&tl, fa), 1);
    assert_eq!(at(&tl, total - 1e-9), 1);
    assert_eq!(at(&tl, total), 2);
    assert_eq!(at(&tl, total + 100.0), 2);
}

#[test]
fn completion_is_exact_at_typing_frames() {
    let text = "fn main() {\n    println!(\"hi ✓\");\n}";
    for speed in [0.05, 0.25, 1.0, 3.7] {
        let tl = TypewriterTimeline::new(text, Speed::new(speed), 0.0);
        assert_eq!(tl.chars_shown_at(tl.typing_frames()), tl.char_count());
        assert!(tl.chars_shown_at(tl.typing_frames() - 1e-9) < tl.char_count());
    }
}

#[test]
fn forward_and_inverse_agree_for_every_count() {
    let tl = TypewriterTimeline::new("agent.run(task)", Speed::new(0.25), 0.0);
    for k in 0..=tl.char_count() {
        assert_eq!(tl.chars_shown_at(tl.frames_for_chars(k)), k);
    }
}

#[test]
fn chars_shown_is_monotonic() {
    let tl = TypewriterTimeline::new("let x = \"héllo\";\n// done", Speed::new(0.3), 4.0);
    let mut last = 0;
    let mut t = 0.0;
    while t < tl.start_frames() + tl.typing_frames() + 5.0 {
        let n = at(&tl, t);
        assert!(n >= last, "regressed at t={t}");
        last = n;
        t += 0.137;
    }
    assert_eq!(last, tl.char_count());
}

#[test]
fn before_start_delay_shows_nothing() {
    let tl = TypewriterTimeline::new("abc", Speed::new(1.0), 15.0);
    let s = tl.sample(ElapsedFrames::new(14.9), FrameIndex(14));
    assert_eq!(s.visible_text, "");
    assert!(!s.is_typing);
    assert!(!s.show_cursor);
    assert_eq!(at(&tl, 15.0), 0);
    assert!(tl.sample(ElapsedFrames::new(15.0), FrameIndex(15)).is_typing);
}

#[test]
fn negative_start_delay_clamps_to_zero() {
    let tl = TypewriterTimeline::new("abc", Speed::new(1.0), -30.0);
    assert_eq!(tl.start_frames(), 0.0);
}

#[test]
fn empty_text_completes_instantly() {
    let tl = TypewriterTimeline::new("", Speed::new(0.25), 0.0);
    assert_eq!(tl.typing_frames(), 0.0);
    let s = tl.sample(ElapsedFrames::ZERO, FrameIndex(0));
    assert_eq!(s.visible_text, "");
    assert!(!s.is_typing);
    assert!(!s.show_cursor);
}

#[test]
fn visible_text_respects_char_boundaries() {
    let tl = TypewriterTimeline::with_model("é✓x", Speed::new(1.0), 0.0, &ConstantRhythm(1.0));
    assert_eq!(tl.visible_text(1), "é");
    assert_eq!(tl.visible_text(2), "é✓");
    assert_eq!(tl.visible_text(99), "é✓x");
    assert_eq!(at(&tl, 2.0), 2);
}

#[test]
fn cursor_blinks_with_fifteen_frame_half_period_while_typing() {
    let tl = TypewriterTimeline::with_model("abcdefgh", Speed::new(0.01), 0.0, &ConstantRhythm(1.0));
    for frame in 0..60u64 {
        let s = tl.sample(ElapsedFrames::new(frame as f64), FrameIndex(frame));
        assert!(s.is_typing);
        assert_eq!(s.show_cursor, (frame / 15) % 2 == 0, "frame {frame}");
    }
}

#[test]
fn cursor_hidden_once_typing_completes() {
    let tl = TypewriterTimeline::with_model("ab", Speed::new(1.0), 0.0, &ConstantRhythm(1.0));
    for frame in 2..40u64 {
        let s = tl.sample(ElapsedFrames::new(frame as f64), FrameIndex(frame));
        assert!(!s.is_typing);
        assert!(!s.show_cursor);
    }
}
