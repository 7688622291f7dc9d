use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn frame_and_wall_clock_agree_exactly_on_frame_boundaries() {
    let fps = fps30();
    for f in [0u64, 1, 15, 29, 30, 451] {
        let from_frame = TimeSource::Frame(FrameIndex(f)).elapsed(fps);
        let ms = fps.frames_to_ms(f as f64);
        let from_clock = TimeSource::WallClock { elapsed_ms: ms }.elapsed(fps);
        assert_eq!(from_frame, from_clock);
        assert_eq!(
            TimeSource::WallClock { elapsed_ms: ms }.frame(fps),
            FrameIndex(f)
        );
    }
}

#[test]
fn wall_clock_keeps_fractional_frames() {
    let e = TimeSource::WallClock { elapsed_ms: 50.0 }.elapsed(fps30());
    assert!((e.get() - 1.5).abs() < 1e-12);
    assert_eq!(
        TimeSource::WallClock { elapsed_ms: 50.0 }.frame(fps30()),
        FrameIndex(1)
    );
}

#[test]
fn negative_and_nan_elapsed_collapse_to_zero() {
    let fps = fps30();
    assert_eq!(
        TimeSource::WallClock { elapsed_ms: -40.0 }.elapsed(fps),
        ElapsedFrames::ZERO
    );
    assert_eq!(
        TimeSource::WallClock {
            elapsed_ms: f64::NAN
        }
        .elapsed(fps),
        ElapsedFrames::ZERO
    );
}

#[test]
fn saturating_sub_never_goes_negative() {
    assert_eq!(ElapsedFrames::new(3.0).saturating_sub(5.0), ElapsedFrames::ZERO);
    assert_eq!(ElapsedFrames::new(5.0).saturating_sub(3.0).get(), 2.0);
}

#[test]
fn manual_clock_clones_share_time() {
    let clock = ManualClock::new();
    let handle = clock.clone();
    handle.advance_ms(16.5);
    handle.advance_ms(16.5);
    assert_eq!(clock.now_ms(), 33.0);
    handle.set_ms(5.0);
    assert_eq!(clock.now_ms(), 5.0);
}

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock::new();
    let a = clock.now_ms();
    let b = clock.now_ms();
    assert!(b >= a);
}
