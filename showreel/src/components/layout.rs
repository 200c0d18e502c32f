use kurbo::Vec2;

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::SpringPreset;
use crate::components::{mono, system};
use crate::eval::context::FrameCtx;
use crate::scene::model::{
    Align, Border, BoxNode, Dimension, Edges, GradientStop, Inset, Paint, RadialGradient,
    RadialShape, SceneNode, Style, TextAlign, TextNode, TextRun,
};
use crate::theme::Theme;
use crate::theme::color::Color;

const TRAFFIC_LIGHTS: [Color; 3] = [
    Color::hex(0xff5f56),
    Color::hex(0xffbd2e),
    Color::hex(0x27ca3f),
];

/// Run `build` on a child timeline starting at `from`, wrapped in a full-size layer.
///
/// Outside the window nothing is emitted. Layers stack on top of each other, exactly like
/// nested sequences in a video editor.
pub fn sequence_layer(
    ctx: FrameCtx,
    from: u64,
    duration: Option<u64>,
    name: &str,
    build: impl FnOnce(FrameCtx) -> Vec<SceneNode>,
) -> Option<SceneNode> {
    let local = ctx.sequence(from, duration)?;
    Some(
        BoxNode::new(Style::new().fill().column())
            .named(name)
            .children(build(local))
            .into_node(),
    )
}

/// Full-frame backdrop: theme gradient, ambient glows, then `children` centered on top.
pub fn background(theme: &Theme, children: Vec<SceneNode>) -> SceneNode {
    let glows = theme
        .colors
        .ambient_glows
        .iter()
        .map(|g| BoxNode::new(Style::new().fill().background(g.clone())).into_node());

    BoxNode::new(
        Style::new()
            .fill()
            .column()
            .center()
            .background(theme.colors.background_gradient.clone()),
    )
    .named("background")
    .children(glows)
    .children(children)
    .into_node()
}

/// Horizontal scanline overlay.
pub fn scanlines(theme: &Theme) -> SceneNode {
    let s = theme.effects.scanlines;
    BoxNode::new(
        Style::new()
            .fill()
            .background(Paint::Stripes {
                color: Color::BLACK.with_alpha(s.opacity),
                line: 1.0,
                period: s.spacing + 1.0,
                angle_deg: 0.0,
            })
            .z(100),
    )
    .named("scanlines")
    .into_node()
}

/// Sinusoidal tint overlay; `None` when the theme disables flicker.
pub fn screen_flicker(ctx: FrameCtx, theme: &Theme) -> Option<SceneNode> {
    let f = &theme.effects.flicker;
    if !f.enabled {
        return None;
    }
    let opacity = interpolate(
        (ctx.frame * 0.5).sin(),
        [-1.0, 1.0],
        [1.0 - f.intensity, 1.0],
        InterpolateOpts::extend(),
    );
    Some(
        BoxNode::new(Style::new().fill().background(f.tint).opacity(opacity).z(5))
            .named("flicker")
            .into_node(),
    )
}

/// Darkened edges; `None` when the theme disables the vignette.
pub fn vignette(theme: &Theme) -> Option<SceneNode> {
    let v = theme.effects.vignette;
    if !v.enabled {
        return None;
    }
    let paint = RadialGradient {
        shape: RadialShape::Ellipse,
        center: Vec2::new(0.5, 0.5),
        stops: vec![
            GradientStop::new(Color::TRANSPARENT, 0.5),
            GradientStop::new(Color::BLACK.with_alpha(v.opacity), 1.0),
        ],
    };
    Some(
        BoxNode::new(Style::new().fill().background(paint).z(8))
            .named("vignette")
            .into_node(),
    )
}

/// Window chrome around terminal content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerminalWindow {
    /// Title shown next to the traffic lights.
    pub title: Option<String>,
    /// Draw scanlines, flicker and vignette inside the content area.
    pub inner_effects: bool,
}

impl TerminalWindow {
    /// Window with a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            inner_effects: false,
        }
    }

    /// Enable the in-window CRT effects.
    pub fn with_inner_effects(mut self) -> Self {
        self.inner_effects = true;
        self
    }

    /// Wrap `children` in the window at `ctx.frame`.
    ///
    /// With a perspective theme the window pops in on a snappy spring and fades over 15
    /// frames; otherwise it scales in gently at full opacity.
    pub fn render(&self, ctx: FrameCtx, theme: &Theme, children: Vec<SceneNode>) -> SceneNode {
        let term = theme.spacing.terminal;
        let colors = &theme.colors.terminal;
        let tilt = theme.effects.perspective.tilt();

        let (preset, opacity) = match tilt {
            Some(_) => (
                SpringPreset::Snappy,
                interpolate(ctx.frame, [0.0, 15.0], [0.0, 1.0], InterpolateOpts::clamp_right()),
            ),
            None => (SpringPreset::Gentle, 1.0),
        };
        let scale = ctx.spring(0.0, preset);

        let mut style = Style::new()
            .size(term.width, term.height)
            .column()
            .background(colors.bg)
            .backdrop_blur(theme.effects.backdrop.blur)
            .radius(term.border_radius)
            .clip()
            .scale(scale)
            .opacity(opacity)
            .shadows(colors.glow.iter().copied());
        if let Some(t) = tilt {
            style = style.tilt(t);
        }
        if let Some(b) = colors.border {
            style = style.border(b);
        }

        BoxNode::new(style)
            .named("terminal")
            .child(self.title_bar(theme))
            .child(self.content(ctx, theme, children))
            .into_node()
    }

    fn title_bar(&self, theme: &Theme) -> SceneNode {
        let term = theme.spacing.terminal;
        let mut style = Style::new()
            .height(term.title_bar_height)
            .background(theme.colors.terminal.title_bar_bg)
            .row()
            .align(Align::Center)
            .padding(Edges::symmetric(0.0, 24.0))
            .gap(12.0);
        if let Some(b) = theme.colors.terminal.title_bar_border {
            style = style.border_bottom(b);
        }

        let lights = TRAFFIC_LIGHTS.iter().map(|&c| {
            BoxNode::new(
                Style::new()
                    .size(term.traffic_light_size, term.traffic_light_size)
                    .round()
                    .background(c),
            )
        });
        let title = self.title.as_ref().map(|t| {
            TextNode::plain(
                mono(theme, theme.typography.sizes.xs)
                    .color(theme.colors.text.secondary)
                    .margin_left(20.0),
                t.clone(),
            )
        });

        BoxNode::new(style)
            .named("title_bar")
            .children(lights)
            .maybe_child(title)
            .into_node()
    }

    fn content(&self, ctx: FrameCtx, theme: &Theme, children: Vec<SceneNode>) -> SceneNode {
        let term = theme.spacing.terminal;
        let mut content = BoxNode::new(
            Style::new()
                .padding(Edges::all(term.padding))
                .height(term.height - term.title_bar_height)
                .column()
                .relative()
                .clip(),
        )
        .named("content")
        .children(children);
        if self.inner_effects {
            content = content
                .child(scanlines(theme))
                .maybe_child(screen_flicker(ctx, theme))
                .maybe_child(vignette(theme));
        }
        content.into_node()
    }
}

/// Centered "accent · main" card that fades in, then out over `fade_out`.
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBadge {
    /// Highlighted leading text.
    pub accent: String,
    /// Main text.
    pub main: String,
    /// Fade-out window in frames.
    pub fade_out: [f64; 2],
}

impl TitleBadge {
    /// Badge with the default 90..120 fade-out.
    pub fn new(accent: impl Into<String>, main: impl Into<String>) -> Self {
        Self {
            accent: accent.into(),
            main: main.into(),
            fade_out: [90.0, 120.0],
        }
    }
}

impl super::Component for TitleBadge {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let fade_in = interpolate(ctx.frame, [0.0, 20.0], [0.0, 1.0], InterpolateOpts::clamp_right());
        let fade_out = interpolate(ctx.frame, self.fade_out, [1.0, 0.0], InterpolateOpts::clamp());
        let scale = ctx.spring(0.0, SpringPreset::Snappy);

        let card = TextNode::new(
            system(theme, 42.0)
                .color(Color::WHITE.with_alpha(0.9))
                .background(Color::BLACK.with_alpha(0.7))
                .padding(Edges::symmetric(20.0, 40.0))
                .radius(12.0)
                .border(Border::new(1.0, Color::WHITE.with_alpha(0.15)))
                .scale(scale),
        )
        .run(
            TextRun::new(&self.accent)
                .color(theme.colors.text.accent)
                .weight(600),
        )
        .run(TextRun::new("·").color(theme.colors.text.muted).margin_x(16.0))
        .run(TextRun::new(&self.main));

        BoxNode::new(
            Style::new()
                .fill()
                .center()
                .opacity(fade_in.min(fade_out))
                .z(50),
        )
        .named("title_badge")
        .child(card)
        .into_node()
    }
}

/// "Powered by" footer pinned to the bottom of the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Branding {
    /// Product name.
    pub label: String,
    /// Optional second line.
    pub sublabel: Option<String>,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            label: "Claude Code".to_owned(),
            sublabel: None,
        }
    }
}

impl Branding {
    /// Default label with a sublabel.
    pub fn with_sublabel(sublabel: impl Into<String>) -> Self {
        Self {
            sublabel: Some(sublabel.into()),
            ..Self::default()
        }
    }
}

impl super::Component for Branding {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let opacity = interpolate(ctx.frame, [0.0, 20.0], [0.0, 1.0], InterpolateOpts::clamp_right());
        let bottom = Inset {
            bottom: Some(Dimension::Px(40.0)),
            ..Inset::default()
        };

        let mut headline = Style::new()
            .font_size(36.0)
            .color(Color::WHITE.with_alpha(0.5));
        if self.sublabel.is_some() {
            headline = headline.margin_bottom(8.0);
        }
        let headline = TextNode::new(headline)
            .run(TextRun::new("Powered by "))
            .run(
                TextRun::new(&self.label)
                    .color(theme.colors.text.brand)
                    .weight(500),
            );
        let sub = self.sublabel.as_ref().map(|s| {
            TextNode::plain(
                Style::new()
                    .font_size(26.0)
                    .color(Color::WHITE.with_alpha(0.35)),
                s.clone(),
            )
        });

        BoxNode::new(
            system(theme, 36.0)
                .absolute(bottom)
                .column()
                .align(Align::Center)
                .text_align(TextAlign::Center)
                .opacity(opacity),
        )
        .named("branding")
        .child(headline)
        .maybe_child(sub)
        .into_node()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/layout.rs"]
mod tests;
