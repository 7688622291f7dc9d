use super::*;
use crate::time::source::ManualClock;

const FRAME_MS: f64 = 1000.0 / 30.0;

fn ab(typewriter_loop: bool) -> CodeBlockConfig {
    let mut cfg = CodeBlockConfig::new("ab");
    cfg.typewriter_speed = 1.0;
    cfg.typewriter_loop = typewriter_loop;
    cfg
}

fn run_to(
    clock: &ManualClock,
    s: &mut InteractiveSession<LivePlayer<ManualClock>>,
    frame: u64,
) -> SessionFrame {
    clock.set_ms(frame as f64 * FRAME_MS);
    s.tick()
}

#[test]
fn no_loop_pauses_on_completion_frame() {
    let clock = ManualClock::new();
    let mut s = InteractiveSession::new(&ab(false), clock.clone()).unwrap();
    assert_eq!(s.timing().typing_complete_frame, 17);

    let typing = run_to(&clock, &mut s, 16);
    assert!(typing.playing);
    assert!(typing.commands.is_empty());

    let done = run_to(&clock, &mut s, 17);
    assert_eq!(done.commands, vec![PlayerCommand::Pause]);
    assert!(!done.playing);
    assert_eq!(done.visual.text, "ab");

    let later = run_to(&clock, &mut s, 400);
    assert_eq!(later.frame, FrameIndex(17));
    assert!(later.commands.is_empty());
}

#[test]
fn typewriter_loop_seeks_back_and_replays_start_delay() {
    let clock = ManualClock::new();
    let mut s = InteractiveSession::new(&ab(true), clock.clone()).unwrap();
    assert!(!s.renderer().loop_controller().is_looping());

    let wrapped = run_to(&clock, &mut s, 46);
    assert_eq!(
        wrapped.commands,
        vec![PlayerCommand::Seek(FrameIndex(0)), PlayerCommand::Play]
    );
    assert_eq!(wrapped.frame, FrameIndex(0));
    assert!(wrapped.playing);
    // Frame 0 is inside the start delay again.
    assert_eq!(wrapped.visual.text, "");

    let next = run_to(&clock, &mut s, 47);
    assert_eq!(next.frame, FrameIndex(1));
    assert!(next.commands.is_empty());
}

#[test]
fn replay_restarts_after_hold() {
    let clock = ManualClock::new();
    let mut s = InteractiveSession::new(&ab(false), clock.clone()).unwrap();
    run_to(&clock, &mut s, 20);
    let replayed = s.replay();
    assert_eq!(replayed.frame, FrameIndex(0));
    assert!(replayed.playing);
    assert_eq!(
        &replayed.commands[..2],
        &[PlayerCommand::Seek(FrameIndex(0)), PlayerCommand::Play]
    );
    let done = run_to(&clock, &mut s, 60);
    assert_eq!(done.commands, vec![PlayerCommand::Pause]);
}

#[test]
fn without_auto_play_nothing_moves() {
    let clock = ManualClock::new();
    let mut cfg = ab(false);
    cfg.auto_play = false;
    let mut s = InteractiveSession::new(&cfg, clock.clone()).unwrap();
    let f = run_to(&clock, &mut s, 30);
    assert_eq!(f.frame, FrameIndex(0));
    assert!(!f.playing);
    assert_eq!(s.playback_state().phase, crate::playback::controller::Phase::Idle);
}

#[test]
fn native_loop_keeps_playing_past_completion() {
    let clock = ManualClock::new();
    let mut cfg = ab(false);
    cfg.native_loop = true;
    let mut s = InteractiveSession::new(&cfg, clock.clone()).unwrap();
    let f = run_to(&clock, &mut s, 50);
    assert!(f.playing);
    assert_eq!(f.frame, FrameIndex(3));
    assert!(f.commands.is_empty());
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = ab(false);
    cfg.fps = crate::foundation::core::Fps { num: 0, den: 1 };
    assert!(InteractiveSession::new(&cfg, ManualClock::new()).is_err());
}
