use super::*;

fn demo() -> SocialCodeDemo {
    SocialCodeDemo::new(None).unwrap()
}

fn text_at(frame: u64) -> String {
    demo().render(FrameIndex(frame)).text_content()
}

#[test]
fn renders_on_vertical_canvas() {
    let d = demo();
    assert_eq!(d.info().canvas, Canvas::VERTICAL_9_16);
    assert_eq!(d.theme().name, "terminal");
    assert_eq!(d.phases().get("SUCCESS"), Some(SUCCESS));
    let root = d.render(FrameIndex(0));
    assert!(root.find("SocialCodeDemo").is_some());
    assert!(root.find("terminal").is_some());
}

#[test]
fn thinking_line_only_inside_its_window() {
    assert!(!text_at(24).contains("is writing code"));
    assert!(text_at(25).contains("is writing code"));
    assert!(text_at(59).contains("is writing code"));
    assert!(!text_at(60).contains("is writing code"));
}

#[test]
fn typing_starts_at_twice_code_start() {
    assert!(!text_at(119).contains("const"));
    let at_124 = text_at(124);
    // 4 frames at 1.5 chars per frame
    assert!(at_124.contains("const "), "{at_124}");
    assert!(!at_124.contains("const B"));
}

#[test]
fn success_message_after_phase() {
    assert!(!text_at(199).contains("created successfully"));
    assert!(text_at(200).contains("✓ Component created successfully!"));
}

#[test]
fn prompt_is_always_present() {
    for f in [0, 100, 239] {
        assert!(text_at(f).contains(r#"claude --code "Create a Button component""#));
    }
}

#[test]
fn branding_uses_short_label() {
    assert!(text_at(30).contains("Powered by Claude"));
    assert!(!text_at(30).contains("Claude Code"));
}
