use super::*;
use crate::foundation::core::{Fps, FrameIndex};
use crate::scene::model::SceneNode;
use crate::theme::ThemeName;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30))
}

fn theme() -> Theme {
    ThemeName::Terminal.theme()
}

fn runs(node: &SceneNode) -> &[TextRun] {
    match node {
        SceneNode::Text(t) => &t.runs,
        other => panic!("expected text node, got {other:?}"),
    }
}

fn chars(s: &str, colors: &[Color]) -> Vec<HighlightedChar> {
    s.chars()
        .zip(colors.iter().cycle())
        .map(|(ch, &color)| HighlightedChar { ch, color })
        .collect()
}

#[test]
fn typewriter_reveals_and_merges_runs() {
    let red = Color::hex(0xff0000);
    let blue = Color::hex(0x0000ff);
    let mut input = chars("ab", &[red]);
    input.extend(chars("cd", &[blue]));
    let tw = Typewriter::new(input, 10.0);

    assert_eq!(tw.visible_at(0.0), 0);
    assert_eq!(tw.visible_at(12.0), 3);

    let node = tw.render(ctx(12), &theme());
    let r = runs(&node);
    assert_eq!(r.len(), 3, "two color runs plus the cursor");
    assert_eq!(r[0].text, "ab");
    assert_eq!(r[1].text, "c");
    assert_eq!(r[2].text, " ");
    assert_eq!(r[0].text_shadows[0].color, red.with_alpha(GLOW_ALPHA));
}

#[test]
fn typewriter_drops_cursor_when_done() {
    let tw = Typewriter::new(chars("hi", &[Color::WHITE]), 0.0);
    let node = tw.render(ctx(100), &theme());
    assert_eq!(node.text_content(), "hi");
}

#[test]
fn typewriter_cursor_blinks() {
    let tw = Typewriter::new(chars(&"x".repeat(500), &[Color::WHITE]), 0.0);
    let t = theme();
    // sin(0.4 * 2) > 0, sin(0.4 * 10) < 0
    let on = tw.render(ctx(2), &t);
    let off = tw.render(ctx(10), &t);
    assert_eq!(runs(&on).last().unwrap().background, Some(t.colors.cursor));
    assert_eq!(runs(&off).last().unwrap().background, Some(Color::TRANSPARENT));
}

#[test]
fn command_line_types_at_chars_per_second() {
    let cmd = CommandLine::new("/review", 20.0);
    let t = theme();
    // 30 fps / 25 cps = 1.2 frames per char; 7 frames -> 5 chars
    let node = cmd.render(ctx(27), &t);
    assert_eq!(runs(&node)[1].text, " /revi");
    assert!(runs(&node)[2].block.is_some());
    assert_eq!(node.style().unwrap().opacity, 1.0);
}

#[test]
fn command_line_fades_in_before_start() {
    let cmd = CommandLine::new("ls", 20.0);
    let t = theme();
    let o = |f| cmd.render(ctx(f), &t).style().unwrap().opacity;
    assert_eq!(o(0), 0.0);
    assert!((o(15) - 0.5).abs() < 1e-9);
    assert_eq!(o(20), 1.0);
}

#[test]
fn command_line_cursor_hides_after_deadline() {
    let cmd = CommandLine::new("ls", 0.0).hide_cursor_after(30.0);
    let t = theme();
    for f in 30..60 {
        assert_eq!(runs(&cmd.render(ctx(f), &t)).len(), 2, "frame {f}");
    }
}

#[test]
fn status_message_has_bullet_and_body() {
    let msg = StatusMessage::new(0, "Launching agents");
    let node = msg.render(ctx(30), &theme());
    assert_eq!(node.text_content(), "⏺Launching agents");
    assert_eq!(node.children().len(), 2);
    let hidden = StatusMessage::new(50, "x").render(ctx(10), &theme());
    assert_eq!(hidden.style().unwrap().opacity, 0.0);
}

#[test]
fn thinking_dots_timer_caps() {
    let dots = ThinkingDots::new(0, "Thinking").with_timer();
    assert_eq!(dots.timer_text(0.0, 30.0), "0m 0s");
    assert_eq!(dots.timer_text(45.0, 30.0), "0m 3s");
    assert_eq!(dots.timer_text(960.0, 30.0), "1m 4s");
    assert_eq!(dots.timer_text(100_000.0, 30.0), "2m 3s");
}

#[test]
fn thinking_dots_render_label_dots_and_hint() {
    let dots = ThinkingDots::new(10, "Reviewing").with_timer().hint("esc to interrupt");
    let node = dots.render(ctx(26), &theme());
    // local frame 16 -> two dots, timer floor(16/30*2) = 1s
    assert_eq!(
        node.text_content(),
        "✳Reviewing..(0m 1s)(esc to interrupt)"
    );
}

#[test]
fn code_block_slides_into_place() {
    let block = CodeBlock::new(10, "src/Button.tsx").file("component");
    let t = theme();
    let start = block.render(ctx(10), &t);
    let end = block.render(ctx(40), &t);
    assert_eq!(start.style().unwrap().transform.unwrap().translate.x, 20.0);
    assert_eq!(end.style().unwrap().transform.unwrap().translate.x, 0.0);
    assert_eq!(end.text_content(), "+src/Button.tsx// component");
}

#[test]
fn session_header_lines() {
    let node = SessionHeader::new("Opus 4.5 · ~/proj").render(ctx(20), &theme());
    assert_eq!(node.children().len(), 2);
    assert_eq!(
        node.children()[0].text_content(),
        "Claude Code v2.1.20"
    );
    assert_eq!(node.style().unwrap().opacity, 1.0);
}
