use super::*;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::new(30, 1).unwrap())
}

#[test]
fn sequence_shifts_local_frame() {
    let c = ctx(70).sequence(60, None).unwrap();
    assert_eq!(c.frame, 10.0);
    assert!(ctx(59).sequence(60, None).is_none());
}

#[test]
fn sequence_duration_is_half_open() {
    assert!(ctx(25).sequence(25, Some(35)).is_some());
    assert!(ctx(59).sequence(25, Some(35)).is_some());
    assert!(ctx(60).sequence(25, Some(35)).is_none());
}

#[test]
fn entrance_is_zero_until_delay() {
    assert_eq!(ctx(10).entrance(55), 0.0);
    assert_eq!(ctx(55).entrance(55), 0.0);
    assert!(ctx(80).entrance(55) > 0.0);
}

#[test]
fn reached_compares_against_phase_frames() {
    assert!(!ctx(99).reached(100));
    assert!(ctx(100).reached(100));
}
