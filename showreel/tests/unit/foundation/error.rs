use super::*;

#[test]
fn each_failure_mode_names_itself() {
    for (err, prefix) in [
        (ShowreelError::config("x"), "config error:"),
        (ShowreelError::animation("x"), "animation error:"),
        (ShowreelError::composition("x"), "composition error:"),
        (ShowreelError::scene("x"), "scene error:"),
        (ShowreelError::encode("x"), "encode error:"),
    ] {
        assert!(err.to_string().starts_with(prefix), "{err}");
    }
}

#[test]
fn out_of_range_frame_reports_the_timeline() {
    let err = ShowreelError::FrameOutOfRange {
        composition: "SocialCodeDemo",
        frame: 240,
        duration: 240,
    };
    assert_eq!(err.to_string(), "frame 240 is outside SocialCodeDemo (0..240)");
}

#[test]
fn theme_json_errors_keep_their_source() {
    let err: ShowreelError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ShowreelError::Json(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn io_context_passes_through() {
    let base = std::io::Error::other("disk full");
    let err = ShowreelError::Other(anyhow::Error::new(base).context("open theme"));
    assert_eq!(err.to_string(), "open theme");
}
