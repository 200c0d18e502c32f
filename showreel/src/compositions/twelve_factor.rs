use crate::animation::interpolate::{InterpolateOpts, interpolate, pulse};
use crate::animation::spring::SpringConfig;
use crate::components::diagram::ConnectionLine;
use crate::components::layout::{TerminalWindow, background, scanlines};
use crate::components::text::{CommandLine, SessionHeader, StatusMessage, ThinkingDots};
use crate::components::{Component, mono, system};
use crate::compositions::{Composition, CompositionId, CompositionInfo, stage};
use crate::eval::context::FrameCtx;
use crate::foundation::core::{Canvas, FrameIndex, Point};
use crate::foundation::error::ShowreelResult;
use crate::scene::model::{
    Border, BoxNode, Dimension, Edges, GradientStop, Inset, LinearGradient, SceneNode, Shadow,
    Style, TextAlign, TextNode,
};
use crate::theme::color::Color;
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

pub(crate) const INFO: CompositionInfo = CompositionInfo::new(
    CompositionId::TwelveFactorShowcase,
    Canvas::HORIZONTAL_16_9,
    540,
    ThemeName::Ocean,
);

const HERO_END: u64 = 65;
const TERMINAL_APPEAR: u64 = 45;
const PROMPT_START: u64 = 60;
const PROMPT_DONE: u64 = 115;
const CLAUDE_THINKING: u64 = 120;
const CLAUDE_RESPONSE: u64 = 140;
const CODE_BLOCK_START: u64 = 160;
const CENTER_NODE: u64 = 180;
const LEFT_COL_START: u64 = 195;
const RIGHT_COL_START: u64 = 245;
const FINAL_MESSAGE: u64 = 420;

const COMMAND: &str = "build a 12-factor app mindmap diagram";
const RESPONSE: &str = "I'll create a 12-Factor App mindmap. Here's the Mermaid:";

const LINE_STAGGER: u64 = 4;
const FACTOR_STAGGER: u64 = 8;
const CONNECTION_DELAY: u64 = 3;

const LINE_HEIGHT: f64 = 21.0;
const CODE_VISIBLE_HEIGHT: f64 = 280.0;

const PANEL_WIDTH: f64 = 960.0;
const PANEL_HEIGHT: f64 = 530.0;
const NODE_WIDTH: f64 = 155.0;
const NODE_HEIGHT: f64 = 52.0;
const HUB_CENTER: Point = Point::new(480.0, 265.0);
const HUB_WIDTH: f64 = 180.0;
const HUB_HEIGHT: f64 = 60.0;

const NODE_SPRING: SpringConfig = SpringConfig::new(12.0, 150.0);
const PANEL_SPRING: SpringConfig = SpringConfig::new(14.0, 100.0);

const CYAN: Color = Color::hex(0x06b6d4);
const PURPLE: Color = Color::hex(0xa855f7);
const EMERALD: Color = Color::hex(0x10b981);
const AMBER: Color = Color::hex(0xf59e0b);

/// Syntax class of a Mermaid source line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LineKind {
    Fence,
    Keyword,
    Node,
    Subnode,
}

impl LineKind {
    fn color(self) -> Color {
        match self {
            Self::Fence => Color::hex(0x888888),
            Self::Keyword => PURPLE,
            Self::Node => CYAN,
            Self::Subnode => EMERALD,
        }
    }
}

const MERMAID: [(&str, LineKind); 40] = [
    ("```mermaid", LineKind::Fence),
    ("mindmap", LineKind::Keyword),
    ("  root((Cloud Native 12-Factor App))", LineKind::Keyword),
    ("    Codebase", LineKind::Node),
    ("      One repo per service", LineKind::Subnode),
    ("      Tracked in Git", LineKind::Subnode),
    ("    Dependencies", LineKind::Node),
    ("      Explicitly declared", LineKind::Subnode),
    ("      Isolated per service", LineKind::Subnode),
    ("    Config", LineKind::Node),
    ("      Stored in env vars", LineKind::Subnode),
    ("      Never in code", LineKind::Subnode),
    ("    Backing Services", LineKind::Node),
    ("      Attached resources", LineKind::Subnode),
    ("      DB, Cache, Queue", LineKind::Subnode),
    ("    Build Release Run", LineKind::Node),
    ("      Strict separation", LineKind::Subnode),
    ("      Immutable releases", LineKind::Subnode),
    ("    Processes", LineKind::Node),
    ("      Stateless", LineKind::Subnode),
    ("      Share-nothing", LineKind::Subnode),
    ("    Port Binding", LineKind::Node),
    ("      Self-contained", LineKind::Subnode),
    ("      Export via port", LineKind::Subnode),
    ("    Concurrency", LineKind::Node),
    ("      Scale out via processes", LineKind::Subnode),
    ("      Horizontal scaling", LineKind::Subnode),
    ("    Disposability", LineKind::Node),
    ("      Fast startup", LineKind::Subnode),
    ("      Graceful shutdown", LineKind::Subnode),
    ("    Dev/Prod Parity", LineKind::Node),
    ("      Keep envs similar", LineKind::Subnode),
    ("      Same backing services", LineKind::Subnode),
    ("    Logs", LineKind::Node),
    ("      Treat as event streams", LineKind::Subnode),
    ("      Stdout/Stderr", LineKind::Subnode),
    ("    Admin Processes", LineKind::Node),
    ("      Run as one-off tasks", LineKind::Subnode),
    ("      Same environment", LineKind::Subnode),
    ("```", LineKind::Fence),
];

struct Factor {
    number: u64,
    title: &'static str,
    emoji: &'static str,
    color: Color,
    /// Horizontal center and top edge inside the diagram panel.
    x: f64,
    y: f64,
}

const fn factor(number: u64, title: &'static str, emoji: &'static str, color: Color) -> Factor {
    let left = number <= 6;
    let row = if left { number - 1 } else { number - 7 };
    Factor {
        number,
        title,
        emoji,
        color,
        x: if left { 110.0 } else { 850.0 },
        y: 18.0 + row as f64 * 92.0,
    }
}

const FACTORS: [Factor; 12] = [
    factor(1, "Codebase", "📦", CYAN),
    factor(2, "Dependencies", "🔗", CYAN),
    factor(3, "Config", "⚙️", CYAN),
    factor(4, "Backing Svc", "🗄️", PURPLE),
    factor(5, "Build/Release", "🚀", PURPLE),
    factor(6, "Processes", "⚡", PURPLE),
    factor(7, "Port Binding", "🔌", EMERALD),
    factor(8, "Concurrency", "📈", EMERALD),
    factor(9, "Disposability", "♻️", EMERALD),
    factor(10, "Dev/Prod", "🔄", AMBER),
    factor(11, "Logs", "📋", AMBER),
    factor(12, "Admin Proc", "🛠️", AMBER),
];

impl Factor {
    fn is_left(&self) -> bool {
        self.x < HUB_CENTER.x
    }

    fn appear_frame(&self) -> u64 {
        if self.number <= 6 {
            LEFT_COL_START + (self.number - 1) * FACTOR_STAGGER
        } else {
            RIGHT_COL_START + (self.number - 7) * FACTOR_STAGGER
        }
    }

    /// Edge from the hub's near side to this node's near side.
    fn connection(&self) -> ConnectionLine {
        let (start_x, end_x) = if self.is_left() {
            (HUB_CENTER.x - HUB_WIDTH / 2.0, self.x + NODE_WIDTH / 2.0)
        } else {
            (HUB_CENTER.x + HUB_WIDTH / 2.0, self.x - NODE_WIDTH / 2.0)
        };
        ConnectionLine::new(
            Point::new(start_x, HUB_CENTER.y),
            Point::new(end_x, self.y + NODE_HEIGHT / 2.0),
            self.color,
            (self.appear_frame() + CONNECTION_DELAY) as f64,
        )
    }
}

/// Frame at which Mermaid line `index` appears.
pub fn line_appear_frame(index: usize) -> u64 {
    CODE_BLOCK_START + index as u64 * LINE_STAGGER
}

/// Scroll of the Mermaid block once more lines are shown than fit.
pub fn code_scroll(visible_lines: usize) -> f64 {
    (visible_lines as f64 * LINE_HEIGHT - CODE_VISIBLE_HEIGHT).max(0.0)
}

/// Terminal typing out a Mermaid mind map while the diagram assembles beside it.
#[derive(Debug, Clone)]
pub struct TwelveFactorShowcase {
    theme: Theme,
    phases: PhaseTable,
    connections: Vec<ConnectionLine>,
}

impl TwelveFactorShowcase {
    /// Build with a flat ocean theme. Overrides are flattened too.
    pub fn new(theme: Option<Theme>) -> ShowreelResult<Self> {
        let phases = PhaseTable::new(&[
            ("HERO_START", 0),
            ("HERO_END", HERO_END),
            ("TERMINAL_APPEAR", TERMINAL_APPEAR),
            ("PROMPT_START", PROMPT_START),
            ("PROMPT_DONE", PROMPT_DONE),
            ("CLAUDE_THINKING", CLAUDE_THINKING),
            ("CLAUDE_RESPONSE", CLAUDE_RESPONSE),
            ("CODE_BLOCK_START", CODE_BLOCK_START),
            ("CENTER_NODE", CENTER_NODE),
            ("LEFT_COL_START", LEFT_COL_START),
            ("RIGHT_COL_START", RIGHT_COL_START),
            ("FINAL_MESSAGE", FINAL_MESSAGE),
            ("HOLD_END", INFO.duration),
        ])?;
        let theme = theme.unwrap_or_else(|| INFO.default_theme.theme());
        Ok(Self {
            theme: theme.with_flat_perspective(),
            phases,
            connections: FACTORS.iter().map(Factor::connection).collect(),
        })
    }

    fn hero(&self, ctx: FrameCtx) -> Option<SceneNode> {
        if ctx.frame > (HERO_END + 5) as f64 {
            return None;
        }
        let t = &self.theme;
        let opacity = interpolate(
            ctx.frame,
            [(HERO_END - 20) as f64, HERO_END as f64],
            [1.0, 0.0],
            InterpolateOpts::clamp(),
        );
        let glow = pulse(ctx.frame, 0.15, 0.5, 0.9);
        let cyan_glow = |blur| Shadow::glow(blur, Color::rgba8(6, 182, 212, glow));

        let stack = BoxNode::new(Style::new().column().center().gap(28.0))
            .child(TextNode::plain(
                Style::new().font_size(80.0).text_shadow(cyan_glow(60.0)),
                "☁️",
            ))
            .child(TextNode::plain(
                system(t, 82.0)
                    .weight(900)
                    .color(Color::WHITE)
                    .letter_spacing(-2.0)
                    .text_align(TextAlign::Center)
                    .line_height(1.1)
                    .text_shadow(cyan_glow(80.0))
                    .text_shadow(Shadow::glow(160.0, Color::rgba8(168, 85, 247, 0.3))),
                "12-Factor App",
            ))
            .child(TextNode::plain(
                system(t, 30.0)
                    .weight(600)
                    .color(CYAN)
                    .uppercase()
                    .letter_spacing(6.0)
                    .text_shadow(cyan_glow(30.0)),
                "Mindmap → Visual in seconds",
            ));

        Some(
            BoxNode::new(
                Style::new()
                    .absolute(Inset::FILL)
                    .center()
                    .opacity(opacity)
                    .z(100),
            )
            .named("hero")
            .child(stack)
            .into_node(),
        )
    }

    fn mermaid(&self, ctx: FrameCtx) -> Option<SceneNode> {
        if !ctx.reached(CODE_BLOCK_START) {
            return None;
        }
        let t = &self.theme;
        let lines: Vec<SceneNode> = MERMAID
            .iter()
            .enumerate()
            .take_while(|&(i, _)| ctx.reached(line_appear_frame(i)))
            .map(|(i, &(text, kind))| {
                TextNode::plain(
                    mono(t, 16.0)
                        .line_height(LINE_HEIGHT / 16.0)
                        .color(kind.color())
                        .pre_wrap()
                        .opacity(ctx.fade_in(line_appear_frame(i), 6)),
                    text,
                )
                .into_node()
            })
            .collect();
        let scroll = code_scroll(lines.len());

        let fade = (scroll > 0.0).then(|| {
            let bottom = Inset {
                bottom: Some(Dimension::Px(0.0)),
                left: Some(Dimension::Px(0.0)),
                right: Some(Dimension::Px(0.0)),
                top: None,
            };
            BoxNode::new(Style::new().absolute(bottom).height(30.0).background(LinearGradient {
                angle_deg: 180.0,
                stops: vec![
                    GradientStop::new(Color::TRANSPARENT, 0.0),
                    GradientStop::new(Color::BLACK.with_alpha(0.6), 1.0),
                ],
            }))
        });

        Some(
            BoxNode::new(
                Style::new()
                    .relative()
                    .margin_top(16.0)
                    .background(Color::BLACK.with_alpha(0.35))
                    .radius(8.0)
                    .border(Border::new(1.0, Color::WHITE.with_alpha(0.08)))
                    .padding(Edges::symmetric(10.0, 14.0))
                    .height(CODE_VISIBLE_HEIGHT)
                    .clip(),
            )
            .named("mermaid")
            .child(
                BoxNode::new(Style::new().column().translate(0.0, -scroll)).children(lines),
            )
            .maybe_child(fade)
            .into_node(),
        )
    }

    fn terminal(&self, ctx: FrameCtx) -> Option<SceneNode> {
        if ctx.frame < (TERMINAL_APPEAR - 10) as f64 {
            return None;
        }
        let t = &self.theme;
        let appear = ctx.spring(TERMINAL_APPEAR as f64, PANEL_SPRING);

        let mut body = BoxNode::new(Style::new().column().padding(Edges::symmetric(8.0, 0.0)))
            .child(
                SessionHeader::new("Opus 4.5 · ~/cloud-project")
                    .sized(24.0, 16.0)
                    .render(ctx, t),
            );
        if ctx.reached(PROMPT_START) {
            body = body.child(
                CommandLine::new(COMMAND, PROMPT_START as f64)
                    .hide_cursor_after(PROMPT_DONE as f64)
                    .font_size(24.0)
                    .render(ctx, t),
            );
        }
        if ctx.reached(CLAUDE_THINKING) && !ctx.reached(CLAUDE_RESPONSE) {
            body = body.child(
                ThinkingDots::new(CLAUDE_THINKING, "Thinking")
                    .font_size(22.0)
                    .render(ctx, t),
            );
        }
        if ctx.reached(CLAUDE_RESPONSE) {
            body = body.child(
                StatusMessage::new(CLAUDE_RESPONSE, RESPONSE)
                    .font_size(20.0)
                    .render(ctx, t),
            );
        }
        body = body.maybe_child(self.mermaid(ctx));
        if ctx.reached(FINAL_MESSAGE) {
            body = body.child(
                BoxNode::new(Style::new().margin_top(16.0)).child(
                    StatusMessage::new(FINAL_MESSAGE, "✓ Mindmap diagram generated")
                        .font_size(22.0)
                        .color(t.colors.status.success)
                        .render(ctx, t),
                ),
            );
        }

        let anchor = Inset {
            left: Some(Dimension::Px(60.0)),
            top: Some(Dimension::Percent(50.0)),
            ..Inset::default()
        };
        Some(
            BoxNode::new(
                Style::new()
                    .absolute(anchor)
                    .width(750.0)
                    .translate_self(0.0, -0.5)
                    .scale(appear.min(1.0))
                    .opacity(appear),
            )
            .named("terminal_panel")
            .child(
                TerminalWindow::titled("claude code · ~/cloud-project").render(
                    ctx,
                    t,
                    vec![body.into_node()],
                ),
            )
            .into_node(),
        )
    }

    fn hub(&self, ctx: FrameCtx) -> Option<SceneNode> {
        if !ctx.reached(CENTER_NODE) {
            return None;
        }
        let t = &self.theme;
        let appear = ctx.spring(CENTER_NODE as f64, NODE_SPRING);
        let glow = pulse(ctx.frame, 0.1, 0.4, 0.8);
        let tint = 48.0 / 255.0;
        Some(
            BoxNode::new(
                Style::new()
                    .absolute(Inset::at(
                        HUB_CENTER.x - HUB_WIDTH / 2.0,
                        HUB_CENTER.y - HUB_HEIGHT / 2.0,
                    ))
                    .size(HUB_WIDTH, HUB_HEIGHT)
                    .radius(HUB_HEIGHT / 2.0)
                    .background(LinearGradient {
                        angle_deg: 135.0,
                        stops: vec![
                            GradientStop::new(CYAN.with_alpha(tint), 0.0),
                            GradientStop::new(PURPLE.with_alpha(tint), 1.0),
                        ],
                    })
                    .border(Border::new(3.0, CYAN))
                    .center()
                    .opacity(appear)
                    .scale(appear)
                    .shadow(Shadow::glow(40.0, Color::rgba8(6, 182, 212, glow)))
                    .shadow(Shadow::glow(80.0, Color::rgba8(168, 85, 247, glow * 0.4))),
            )
            .named("hub")
            .child(TextNode::plain(
                mono(t, 18.0)
                    .weight(800)
                    .color(Color::WHITE)
                    .text_align(TextAlign::Center)
                    .line_height(1.2)
                    .pre_wrap(),
                "12-Factor\nApp",
            ))
            .into_node(),
        )
    }

    fn factor_node(&self, ctx: FrameCtx, f: &Factor) -> Option<SceneNode> {
        let at = f.appear_frame();
        if !ctx.reached(at) {
            return None;
        }
        let t = &self.theme;
        let appear = ctx.spring(at as f64, NODE_SPRING);
        let badge = BoxNode::new(
            mono(t, 12.0)
                .absolute(Inset::at(-10.0, -10.0))
                .size(24.0, 24.0)
                .radius(12.0)
                .background(f.color)
                .center()
                .weight(800)
                .color(Color::BLACK)
                .shadow(Shadow::glow(12.0, f.color.with_alpha(128.0 / 255.0))),
        )
        .child(TextNode::plain(Style::new(), f.number.to_string()));

        Some(
            BoxNode::new(
                Style::new()
                    .absolute(Inset::at(f.x - NODE_WIDTH / 2.0, f.y))
                    .size(NODE_WIDTH, NODE_HEIGHT)
                    .background(f.color.with_alpha(32.0 / 255.0))
                    .border(Border::new(2.5, f.color))
                    .radius(12.0)
                    .row()
                    .center()
                    .gap(6.0)
                    .opacity(appear)
                    .scale(appear)
                    .shadow(Shadow::glow(24.0, f.color.with_alpha(64.0 / 255.0))),
            )
            .named(format!("factor_{}", f.number))
            .child(badge)
            .child(TextNode::plain(Style::new().font_size(18.0), f.emoji))
            .child(TextNode::plain(
                mono(t, 15.0).weight(600).color(Color::WHITE),
                f.title,
            ))
            .into_node(),
        )
    }

    fn diagram(&self, ctx: FrameCtx) -> Option<SceneNode> {
        let lead_in = CENTER_NODE - 10;
        if !ctx.reached(lead_in) {
            return None;
        }
        let appear = ctx.spring(lead_in as f64, PANEL_SPRING);
        let anchor = Inset {
            right: Some(Dimension::Px(40.0)),
            top: Some(Dimension::Percent(50.0)),
            ..Inset::default()
        };

        // Edges first so nodes paint over them.
        let edges = self.connections.iter().filter_map(|c| c.render(ctx));
        let nodes = FACTORS.iter().filter_map(|f| self.factor_node(ctx, f));
        Some(
            BoxNode::new(
                Style::new()
                    .absolute(anchor)
                    .size(PANEL_WIDTH, PANEL_HEIGHT)
                    .translate_self(0.0, -0.5)
                    .opacity(appear),
            )
            .named("diagram")
            .children(edges)
            .maybe_child(self.hub(ctx))
            .children(nodes)
            .into_node(),
        )
    }
}

impl Composition for TwelveFactorShowcase {
    fn info(&self) -> &CompositionInfo {
        &INFO
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn phases(&self) -> &PhaseTable {
        &self.phases
    }

    #[tracing::instrument(level = "trace", skip(self), fields(comp = "TwelveFactorShowcase"))]
    fn render(&self, frame: FrameIndex) -> SceneNode {
        let ctx = FrameCtx::new(frame, INFO.fps);
        let mut content: Vec<SceneNode> = Vec::with_capacity(4);
        content.extend(self.hero(ctx));
        content.extend(self.terminal(ctx));
        content.extend(self.diagram(ctx));
        content.push(scanlines(&self.theme));
        stage(&INFO, background(&self.theme, content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/twelve_factor.rs"]
mod tests;
