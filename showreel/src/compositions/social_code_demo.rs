use kurbo::Vec2;

use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::SpringPreset;
use crate::animation::typewriter::{DEFAULT_DOTS_INTERVAL, dots_string};
use crate::components::highlight::highlight_code;
use crate::components::layout::{TerminalWindow, background, sequence_layer};
use crate::components::text::Typewriter;
use crate::components::{Branding, Component, mono};
use crate::compositions::{Composition, CompositionId, CompositionInfo, stage};
use crate::eval::context::FrameCtx;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::ShowreelResult;
use crate::scene::model::{
    BoxNode, Dimension, GradientStop, Inset, RadialGradient, RadialShape, SceneNode, Shadow,
    Style, TextNode, TextRun,
};
use crate::theme::color::Color;
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

pub(crate) const INFO: CompositionInfo = CompositionInfo::new(
    CompositionId::SocialCodeDemo,
    Canvas::VERTICAL_9_16,
    240,
    ThemeName::Terminal,
);

pub(crate) const PROMPT: u64 = 0;
pub(crate) const THINKING_START: u64 = 25;
pub(crate) const THINKING_END: u64 = 60;
pub(crate) const CODE_START: u64 = 60;
pub(crate) const SUCCESS: u64 = 200;

const CODE_TO_TYPE: &str = r#"const Button = ({ label, onClick }) => {
  const [isHovered, setIsHovered] = useState(false);

  return (
    <button
      className={isHovered ? 'btn-hover' : 'btn'}
      onMouseEnter={() => setIsHovered(true)}
      onMouseLeave={() => setIsHovered(false)}
      onClick={onClick}
    >
      {label}
    </button>
  );
};"#;

const PROMPT_TEXT: &str = r#"claude --code "Create a Button component""#;

/// Vertical clip: a prompt, a thinking line, then a React component typed out.
#[derive(Debug, Clone)]
pub struct SocialCodeDemo {
    theme: Theme,
    phases: PhaseTable,
    code: Typewriter,
}

impl SocialCodeDemo {
    /// Build with the terminal theme unless overridden.
    pub fn new(theme: Option<Theme>) -> ShowreelResult<Self> {
        let theme = theme.unwrap_or_else(|| INFO.default_theme.theme());
        let phases = PhaseTable::new(&[
            ("PROMPT", PROMPT),
            ("THINKING_START", THINKING_START),
            ("THINKING_END", THINKING_END),
            ("CODE_START", CODE_START),
            ("SUCCESS", SUCCESS),
        ])?;
        let code = Typewriter::new(
            highlight_code(CODE_TO_TYPE, &theme.colors.syntax),
            CODE_START as f64,
        );
        Ok(Self {
            theme,
            phases,
            code,
        })
    }

    fn prompt_line(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let opacity = interpolate(ctx.frame, [0.0, 15.0], [0.0, 1.0], InterpolateOpts::extend());
        TextNode::new(
            mono(t, t.typography.sizes.sm)
                .margin_bottom(15.0)
                .opacity(opacity),
        )
        .run(TextRun::new("➜").color(t.colors.prompt))
        .run(TextRun::new(" ~/project").color(t.colors.status.info))
        .run(TextRun::new(" $").color(t.colors.text.secondary))
        .run(TextRun::new(format!(" {PROMPT_TEXT}")).color(t.colors.text.primary))
        .into_node()
    }

    fn thinking(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        TextNode::new(
            mono(t, t.typography.sizes.md)
                .color(t.colors.text.primary)
                .margin_bottom(20.0)
                .text_shadow(Shadow::glow(10.0, Color::rgba8(255, 190, 118, 0.5))),
        )
        .run(TextRun::new("Claude").color(t.colors.text.accent))
        .run(
            TextRun::new(format!(
                " is writing code{}",
                dots_string(ctx.frame, DEFAULT_DOTS_INTERVAL)
            ))
            .color(t.colors.text.muted),
        )
        .into_node()
    }

    fn success(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let scale = ctx.spring(0.0, SpringPreset::Smooth);
        let glow = interpolate((ctx.frame * 0.2).sin(), [-1.0, 1.0], [0.5, 1.0], InterpolateOpts::extend());
        TextNode::plain(
            mono(t, t.typography.sizes.md)
                .color(t.colors.status.success)
                .margin_top(30.0)
                .scale(scale)
                .text_shadow(Shadow::glow(20.0 * glow, Color::rgba8(39, 202, 63, 0.8))),
            "✓ Component created successfully!",
        )
        .into_node()
    }

    fn ambient_glow() -> SceneNode {
        let inset = Inset {
            top: Some(Dimension::Percent(30.0)),
            left: Some(Dimension::Percent(50.0)),
            ..Inset::default()
        };
        BoxNode::new(
            Style::new()
                .absolute(inset)
                .size(600.0, 600.0)
                .round()
                .translate_self(-0.5, -0.5)
                .background(RadialGradient {
                    shape: RadialShape::Circle,
                    center: Vec2::new(0.5, 0.5),
                    stops: vec![
                        GradientStop::new(Color::rgba8(255, 180, 100, 0.1), 0.0),
                        GradientStop::new(Color::TRANSPARENT, 0.7),
                    ],
                }),
        )
        .named("ambient_glow")
        .into_node()
    }
}

impl Composition for SocialCodeDemo {
    fn info(&self) -> &CompositionInfo {
        &INFO
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn phases(&self) -> &PhaseTable {
        &self.phases
    }

    #[tracing::instrument(level = "trace", skip(self), fields(comp = "SocialCodeDemo"))]
    fn render(&self, frame: FrameIndex) -> SceneNode {
        let ctx = FrameCtx::new(frame, INFO.fps);
        let t = &self.theme;

        // The typewriter sits in a sequence starting at CODE_START and also waits for
        // CODE_START on its local clock, so typing begins at twice that frame.
        let layers = [
            sequence_layer(ctx, PROMPT, None, "prompt", |c| vec![self.prompt_line(c)]),
            sequence_layer(
                ctx,
                THINKING_START,
                Some(THINKING_END - THINKING_START),
                "thinking",
                |c| vec![self.thinking(c)],
            ),
            sequence_layer(ctx, CODE_START, None, "code", |c| {
                vec![self.code.render(c, t)]
            }),
            sequence_layer(ctx, SUCCESS, None, "success", |c| vec![self.success(c)]),
        ];

        let window = TerminalWindow::titled("claude@terminal ~")
            .with_inner_effects()
            .render(ctx, t, layers.into_iter().flatten().collect());
        let branding = sequence_layer(ctx, 0, None, "branding", |c| {
            vec![
                Branding {
                    label: "Claude".to_owned(),
                    sublabel: None,
                }
                .render(c, t),
            ]
        });

        let mut children = vec![Self::ambient_glow(), window];
        children.extend(branding);
        stage(&INFO, background(t, children))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/social_code_demo.rs"]
mod tests;
