use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::typewriter::{
    DEFAULT_CHARS_PER_FRAME, DEFAULT_CHARS_PER_SECOND, DEFAULT_CURSOR_SPEED, DEFAULT_DOTS_INTERVAL,
    cursor_visible, dots_string, typewriter_command_progress, typewriter_progress,
};
use crate::components::highlight::HighlightedChar;
use crate::components::{Component, mono};
use crate::eval::context::FrameCtx;
use crate::scene::model::{Align, BoxNode, SceneNode, Shadow, Style, TextNode, TextRun};
use crate::theme::Theme;
use crate::theme::color::Color;

const GLOW_ALPHA: f64 = 64.0 / 255.0;
const TIMER_CAP_SECS: u64 = 123;

/// Syntax-colored text revealed a few characters per frame, with a block cursor while typing.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    /// Characters to reveal.
    pub chars: Vec<HighlightedChar>,
    /// Frame at which typing starts.
    pub start_frame: f64,
    /// Reveal rate.
    pub chars_per_frame: f64,
    /// Font size; theme `sm` when unset.
    pub font_size: Option<f64>,
    /// Line height factor.
    pub line_height: f64,
    /// Soft glow around each character.
    pub show_glow: bool,
}

impl Typewriter {
    /// Typewriter with the default rate and styling.
    pub fn new(chars: Vec<HighlightedChar>, start_frame: f64) -> Self {
        Self {
            chars,
            start_frame,
            chars_per_frame: DEFAULT_CHARS_PER_FRAME,
            font_size: None,
            line_height: 1.6,
            show_glow: true,
        }
    }

    /// Override the font size.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    /// Number of characters visible at `frame`.
    pub fn visible_at(&self, frame: f64) -> usize {
        typewriter_progress(frame, self.start_frame, self.chars.len(), self.chars_per_frame)
    }

    fn run_for(&self, text: String, color: Color) -> TextRun {
        let run = TextRun::new(text).color(color);
        if self.show_glow {
            run.text_shadow(Shadow::glow(8.0, color.with_alpha(GLOW_ALPHA)))
        } else {
            run
        }
    }
}

impl Component for Typewriter {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let shown = self.visible_at(ctx.frame);

        // Adjacent characters of one color collapse into a single run.
        let mut runs: Vec<TextRun> = Vec::new();
        let mut pending: Option<(String, Color)> = None;
        for hc in &self.chars[..shown] {
            match &mut pending {
                Some((text, color)) if *color == hc.color => text.push(hc.ch),
                _ => {
                    if let Some((text, color)) = pending.take() {
                        runs.push(self.run_for(text, color));
                    }
                    pending = Some((hc.ch.to_string(), hc.color));
                }
            }
        }
        if let Some((text, color)) = pending {
            runs.push(self.run_for(text, color));
        }

        let cursor = (shown < self.chars.len()).then(|| {
            let on = cursor_visible(ctx.frame, DEFAULT_CURSOR_SPEED);
            let run = TextRun::new(" ")
                .color(theme.colors.terminal.bg)
                .background(if on { theme.colors.cursor } else { Color::TRANSPARENT });
            if on {
                run.text_shadow(Shadow::glow(15.0, theme.colors.cursor))
            } else {
                run
            }
        });

        TextNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.sm))
                .line_height(self.line_height)
                .pre_wrap(),
        )
        .runs(runs)
        .maybe_run(cursor)
        .into_node()
    }
}

/// Prompt line typing a shell command at a characters-per-second rate.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandLine {
    /// Command text.
    pub command: String,
    /// Frame at which typing starts; the line fades in over the 10 frames before it.
    pub start_frame: f64,
    /// Typing rate.
    pub chars_per_second: f64,
    /// After typing completes, the cursor blinks only before this frame.
    pub hide_cursor_after: f64,
    /// Prompt glyph.
    pub prompt: String,
    /// Font size; theme `xxl` when unset.
    pub font_size: Option<f64>,
}

impl CommandLine {
    /// Command typed from `start_frame` with the default prompt and rate.
    pub fn new(command: impl Into<String>, start_frame: f64) -> Self {
        Self {
            command: command.into(),
            start_frame,
            chars_per_second: DEFAULT_CHARS_PER_SECOND,
            hide_cursor_after: 999.0,
            prompt: "❯".to_owned(),
            font_size: None,
        }
    }

    /// Stop blinking the cursor at `frame`.
    pub fn hide_cursor_after(mut self, frame: f64) -> Self {
        self.hide_cursor_after = frame;
        self
    }

    /// Override the typing rate.
    pub fn chars_per_second(mut self, cps: f64) -> Self {
        self.chars_per_second = cps;
        self
    }

    /// Override the font size.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }
}

impl Component for CommandLine {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let len = self.command.chars().count();
        let shown = typewriter_command_progress(
            ctx.frame,
            self.start_frame,
            len,
            ctx.fps.as_f64(),
            self.chars_per_second,
        );
        let visible: String = self.command.chars().take(shown).collect();
        let typing = shown < len;
        let show_cursor =
            typing || (ctx.frame < self.hide_cursor_after && cursor_visible(ctx.frame, 0.3));
        let opacity = interpolate(
            ctx.frame - self.start_frame,
            [-10.0, 0.0],
            [0.0, 1.0],
            InterpolateOpts::clamp(),
        );

        let cursor = show_cursor.then(|| {
            TextRun::block(20.0, 40.0)
                .background(theme.colors.cursor)
                .margin_left(2.0)
        });

        TextNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.xxl))
                .opacity(opacity)
                .margin_bottom(24.0),
        )
        .run(TextRun::new(&self.prompt).color(theme.colors.prompt))
        .run(TextRun::new(format!(" {visible}")).color(theme.colors.text.primary))
        .maybe_run(cursor)
        .into_node()
    }
}

/// Bulleted status line that springs in after `delay`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    /// Body runs; plain runs inherit `color`.
    pub runs: Vec<TextRun>,
    /// Entrance delay in frames.
    pub delay: u64,
    /// Body color; theme secondary text when unset.
    pub color: Option<Color>,
    /// Bullet glyph.
    pub bullet: String,
    /// Font size; theme `lg` when unset.
    pub font_size: Option<f64>,
}

impl StatusMessage {
    /// Single-run message.
    pub fn new(delay: u64, text: impl Into<String>) -> Self {
        Self::rich(delay, vec![TextRun::new(text)])
    }

    /// Message made of several styled runs.
    pub fn rich(delay: u64, runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            delay,
            color: None,
            bullet: "⏺".to_owned(),
            font_size: None,
        }
    }

    /// Override the body color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the font size.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }
}

impl Component for StatusMessage {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        BoxNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.lg))
                .color(self.color.unwrap_or(theme.colors.text.secondary))
                .margin_bottom(14.0)
                .opacity(ctx.entrance(self.delay))
                .row()
                .align(Align::Start)
                .gap(12.0),
        )
        .child(TextNode::new(Style::new()).run(TextRun::new(&self.bullet).color(theme.colors.bullet)))
        .child(TextNode::new(Style::new()).runs(self.runs.iter().cloned()))
        .into_node()
    }
}

/// Muted "thinking…" line with animated dots and an optional timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ThinkingDots {
    /// Entrance delay; dots and timer count from here.
    pub delay: u64,
    /// Label before the dots.
    pub label: String,
    /// Show an elapsed-time readout.
    pub show_timer: bool,
    /// Timer speed-up relative to real time.
    pub timer_multiplier: f64,
    /// Leading glyph.
    pub icon: String,
    /// Parenthesized trailing hint.
    pub hint: Option<String>,
    /// Font size; theme `md` when unset.
    pub font_size: Option<f64>,
}

impl ThinkingDots {
    /// Dots without a timer.
    pub fn new(delay: u64, label: impl Into<String>) -> Self {
        Self {
            delay,
            label: label.into(),
            show_timer: false,
            timer_multiplier: 2.0,
            icon: "✳".to_owned(),
            hint: None,
            font_size: None,
        }
    }

    /// Show the elapsed-time readout.
    pub fn with_timer(mut self) -> Self {
        self.show_timer = true;
        self
    }

    /// Attach a hint.
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Replace the leading glyph.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Override the font size.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    /// Timer text at `local_frame`, e.g. `"1m 4s"`. Capped at 2m 3s.
    pub fn timer_text(&self, local_frame: f64, fps: f64) -> String {
        let secs = ((local_frame / fps) * self.timer_multiplier).floor().max(0.0) as u64;
        let secs = secs.min(TIMER_CAP_SECS);
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

impl Component for ThinkingDots {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let size = self.font_size.unwrap_or(theme.typography.sizes.md);
        let local = (ctx.frame - self.delay as f64).max(0.0);
        let muted = theme.colors.text.muted;

        let timer = self.show_timer.then(|| {
            TextRun::new(format!("({})", self.timer_text(local, ctx.fps.as_f64())))
                .color(muted)
                .margin_left(12.0)
                .size(size - 6.0)
        });
        let hint = self.hint.as_ref().map(|h| {
            TextRun::new(format!("({h})"))
                .color(muted)
                .margin_left(16.0)
                .size(size - 6.0)
        });

        TextNode::new(
            mono(theme, size)
                .color(muted)
                .margin_top(12.0)
                .margin_bottom(12.0)
                .opacity(ctx.entrance(self.delay)),
        )
        .run(TextRun::new(&self.icon).color(theme.colors.status.warning))
        .run(
            TextRun::new(format!(
                "{}{}",
                self.label,
                dots_string(local, DEFAULT_DOTS_INTERVAL)
            ))
            .margin_left(8.0),
        )
        .maybe_run(timer)
        .maybe_run(hint)
        .into_node()
    }
}

/// Added-file line: `+ code // file`, sliding in from the right.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    /// Code or path text.
    pub code: String,
    /// Trailing file comment.
    pub file: Option<String>,
    /// Entrance delay.
    pub delay: u64,
    /// Leading marker.
    pub prefix: String,
    /// Font size; theme `sm` when unset.
    pub font_size: Option<f64>,
}

impl CodeBlock {
    /// Line with the default `+` marker.
    pub fn new(delay: u64, code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            file: None,
            delay,
            prefix: "+".to_owned(),
            font_size: None,
        }
    }

    /// Attach a file comment.
    pub fn file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl Component for CodeBlock {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let size = self.font_size.unwrap_or(theme.typography.sizes.sm);
        let slide = interpolate(
            ctx.frame - self.delay as f64,
            [0.0, 15.0],
            [20.0, 0.0],
            InterpolateOpts::clamp().ease(Ease::OutQuad),
        );
        let span = |run: TextRun| TextNode::new(Style::new()).run(run);

        BoxNode::new(
            mono(theme, size)
                .margin_bottom(10.0)
                .margin_left(36.0)
                .opacity(ctx.entrance(self.delay))
                .translate_x(slide)
                .row()
                .align(Align::Center)
                .gap(12.0),
        )
        .child(span(TextRun::new(&self.prefix).color(theme.colors.status.success)))
        .child(span(TextRun::new(&self.code).color(theme.colors.status.info)))
        .maybe_child(self.file.as_ref().map(|f| {
            span(
                TextRun::new(format!("// {f}"))
                    .color(theme.colors.text.muted)
                    .size(size - 4.0),
            )
        }))
        .into_node()
    }
}

/// Two-line session banner: product and version, then a muted subtitle.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionHeader {
    /// Second line, e.g. model and working directory.
    pub subtitle: String,
    /// Product line size; theme `xl` when unset.
    pub title_size: Option<f64>,
    /// Subtitle size; theme `md` when unset.
    pub subtitle_size: Option<f64>,
}

impl SessionHeader {
    /// Product version shown after the name.
    pub const VERSION: &'static str = "v2.1.20";

    /// Header with theme-sized lines.
    pub fn new(subtitle: impl Into<String>) -> Self {
        Self {
            subtitle: subtitle.into(),
            title_size: None,
            subtitle_size: None,
        }
    }

    /// Override both line sizes.
    pub fn sized(mut self, title: f64, subtitle: f64) -> Self {
        self.title_size = Some(title);
        self.subtitle_size = Some(subtitle);
        self
    }
}

impl Component for SessionHeader {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let sizes = theme.typography.sizes;
        let opacity = interpolate(ctx.frame, [0.0, 10.0], [0.0, 1.0], InterpolateOpts::clamp_right());
        BoxNode::new(Style::new().column().margin_bottom(24.0).opacity(opacity))
            .named("session_header")
            .child(
                TextNode::new(mono(theme, self.title_size.unwrap_or(sizes.xl)))
                    .run(TextRun::new("Claude Code").color(theme.colors.text.brand))
                    .run(TextRun::new(format!(" {}", Self::VERSION)).color(theme.colors.text.muted)),
            )
            .child(TextNode::plain(
                mono(theme, self.subtitle_size.unwrap_or(sizes.md)).color(theme.colors.text.muted),
                self.subtitle.clone(),
            ))
            .into_node()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/text.rs"]
mod tests;
