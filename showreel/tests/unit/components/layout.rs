use super::*;
use crate::components::Component;
use crate::foundation::core::{Fps, FrameIndex};
use crate::theme::ThemeName;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30))
}

fn style_of(node: &SceneNode) -> &Style {
    node.style().unwrap()
}

#[test]
fn sequence_layer_is_absent_outside_window() {
    assert!(sequence_layer(ctx(9), 10, Some(5), "s", |_| vec![]).is_none());
    assert!(sequence_layer(ctx(15), 10, Some(5), "s", |_| vec![]).is_none());
    let mut seen = None;
    let layer = sequence_layer(ctx(12), 10, Some(5), "s", |c| {
        seen = Some(c.frame);
        vec![]
    });
    assert!(layer.is_some());
    assert_eq!(seen, Some(2.0));
}

#[test]
fn background_stacks_glows_before_children() {
    let theme = ThemeName::Ocean.theme();
    let child = TextNode::plain(Style::new(), "x").into_node();
    let bg = background(&theme, vec![child]);
    let n = theme.colors.ambient_glows.len();
    assert!(n > 0);
    assert_eq!(bg.children().len(), n + 1);
    assert_eq!(bg.children()[n].text_content(), "x");
}

#[test]
fn flicker_and_vignette_follow_theme_switches() {
    let terminal = ThemeName::Terminal.theme();
    let modern = ThemeName::Modern.theme();
    assert!(screen_flicker(ctx(0), &terminal).is_some());
    assert!(vignette(&terminal).is_some());
    assert!(screen_flicker(ctx(0), &modern).is_none());
    assert!(vignette(&modern).is_none());
}

#[test]
fn flicker_opacity_stays_in_band() {
    let theme = ThemeName::Terminal.theme();
    let lo = 1.0 - theme.effects.flicker.intensity;
    for f in 0..60 {
        let node = screen_flicker(ctx(f), &theme).unwrap();
        let o = style_of(&node).opacity;
        assert!(o >= lo - 1e-9 && o <= 1.0 + 1e-9, "frame {f}: {o}");
    }
}

#[test]
fn terminal_window_without_perspective_is_opaque_and_grows() {
    let theme = ThemeName::Terminal.theme();
    let win = TerminalWindow::titled("demo");
    let first = win.render(ctx(0), &theme, vec![]);
    let later = win.render(ctx(60), &theme, vec![]);
    assert_eq!(style_of(&first).opacity, 1.0);
    assert!(style_of(&first).transform.unwrap().tilt.is_none());
    let s0 = style_of(&first).transform.unwrap().scale;
    let s1 = style_of(&later).transform.unwrap().scale;
    assert!(s0 < s1);
    assert!(first.text_content().contains("demo"));
}

#[test]
fn terminal_window_with_perspective_fades_and_tilts() {
    let theme = ThemeName::Ocean.theme();
    let win = TerminalWindow::default();
    let first = win.render(ctx(0), &theme, vec![]);
    assert_eq!(style_of(&first).opacity, 0.0);
    assert!(style_of(&first).transform.unwrap().tilt.is_some());
    let later = win.render(ctx(30), &theme, vec![]);
    assert_eq!(style_of(&later).opacity, 1.0);
}

#[test]
fn title_bar_has_three_lights() {
    let theme = ThemeName::Terminal.theme();
    let node = TerminalWindow::default().render(ctx(10), &theme, vec![]);
    let bar = node.find("title_bar").unwrap();
    assert_eq!(bar.children().len(), 3);
}

#[test]
fn inner_effects_are_appended_to_content() {
    let theme = ThemeName::Terminal.theme();
    let plain = TerminalWindow::default().render(ctx(10), &theme, vec![]);
    let fx = TerminalWindow::default()
        .with_inner_effects()
        .render(ctx(10), &theme, vec![]);
    assert_eq!(plain.find("content").unwrap().children().len(), 0);
    assert!(fx.find("scanlines").is_some());
    assert!(fx.find("vignette").is_some());
}

#[test]
fn title_badge_fades_in_then_out() {
    let theme = ThemeName::Terminal.theme();
    let badge = TitleBadge::new("Claude Code", "Building a Button");
    let opacity = |f| style_of(&badge.render(ctx(f), &theme)).opacity;
    assert_eq!(opacity(0), 0.0);
    assert!((opacity(10) - 0.5).abs() < 1e-9);
    assert_eq!(opacity(60), 1.0);
    assert!((opacity(105) - 0.5).abs() < 1e-9);
    assert_eq!(opacity(130), 0.0);
    assert_eq!(
        badge.render(ctx(30), &theme).text_content(),
        "Claude Code·Building a Button"
    );
}

#[test]
fn branding_renders_optional_sublabel() {
    let theme = ThemeName::Terminal.theme();
    let plain = Branding::default().render(ctx(30), &theme);
    assert_eq!(plain.children().len(), 1);
    assert_eq!(plain.text_content(), "Powered by Claude Code");

    let sub = Branding::with_sublabel("12 agents").render(ctx(30), &theme);
    assert_eq!(sub.children().len(), 2);
    assert!(sub.text_content().ends_with("12 agents"));
}
