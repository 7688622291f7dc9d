use super::*;

fn ab() -> CodeBlockConfig {
    let mut cfg = CodeBlockConfig::new("ab");
    cfg.typewriter_speed = 1.0;
    cfg
}

#[test]
fn completion_and_cycle_frames_round_up() {
    let t = PlayerTiming::for_config(&ab());
    // 0.5 s delay is 15 frames; 1.398 typing frames round up to 2.
    assert_eq!(t.typing_complete_frame, 17);
    assert_eq!(t.cycle_length, 47);
    assert_eq!(t.duration_frames, 47);
}

#[test]
fn start_time_adds_to_the_base_delay() {
    let mut cfg = ab();
    cfg.start_time = 1.0;
    assert_eq!(PlayerTiming::for_config(&cfg).typing_complete_frame, 47);
}

#[test]
fn plain_text_runs_for_one_second() {
    let mut cfg = ab();
    cfg.show_typewriter = false;
    let t = PlayerTiming::for_config(&cfg);
    assert_eq!(t.typing_complete_frame, 0);
    assert_eq!(t.cycle_length, 30);
    assert_eq!(t.duration_frames, 30);
}

#[test]
fn explicit_duration_wins() {
    let mut cfg = ab();
    cfg.duration_frames = Some(10);
    assert_eq!(PlayerTiming::for_config(&cfg).duration_frames, 10);
}

#[test]
fn typewriter_loop_disables_native_loop() {
    let mut cfg = ab();
    cfg.native_loop = true;
    assert!(PlayerTiming::for_config(&cfg).native_loop);
    cfg.typewriter_loop = true;
    let t = PlayerTiming::for_config(&cfg);
    assert!(t.typewriter_loop);
    assert!(!t.native_loop);
}

#[test]
fn zero_end_delay_keeps_a_frame_of_full_text_before_the_boundary() {
    let mut cfg = ab();
    cfg.typewriter_delay = 0.0;
    cfg.typewriter_end_delay = 0.0;
    let t = PlayerTiming::for_config(&cfg);
    assert_eq!(t.typing_complete_frame, 2);
    assert_eq!(t.cycle_length, 4);
    assert!(t.duration_frames > t.typing_complete_frame);
    assert!(t.cycle_length - 1 > t.typing_complete_frame);
}
