use crate::animation::ease::Ease;
use crate::animation::interpolate::pulse;
use crate::animation::scroll::{ScrollPhase, calculate_scroll};
use crate::animation::typewriter::{DEFAULT_DOTS_INTERVAL, dots_string};
use crate::components::data::{
    AgentData, AgentRow, CellValue, DataColumn, DataRow, DataTable, StepHeader,
};
use crate::components::layout::{Branding, TerminalWindow, TitleBadge, background, scanlines};
use crate::components::text::{CommandLine, SessionHeader, StatusMessage, ThinkingDots};
use crate::components::{Component, mono};
use crate::compositions::{Composition, CompositionId, CompositionInfo, stage};
use crate::eval::context::FrameCtx;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::ShowreelResult;
use crate::scene::model::{Align, Border, BoxNode, Edges, SceneNode, Shadow, Style, TextNode, TextRun};
use crate::theme::color::Color;
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

pub(crate) const INFO: CompositionInfo = CompositionInfo::new(
    CompositionId::MultiAgentShowcase,
    Canvas::HORIZONTAL_16_9,
    540,
    ThemeName::Ocean,
);

const COMMAND_START: u64 = 10;
const COMMAND_DONE: u64 = 50;
const SETUP_MSGS: u64 = 55;
const STEP1: u64 = 75;
const USER_QUESTION: u64 = 90;
const STEP2: u64 = 115;
const STEP3: u64 = 135;
const AGENTS_START: u64 = 145;
const LOADING: u64 = 200;
const RESULTS_START: u64 = 350;
const TABLES_START: u64 = 380;
const NEXT_STEPS: u64 = 460;

const COMMAND: &str = "/validate-design agent-forge";
const GRID: Color = Color::hex(0x333333);
const DIM: Color = Color::hex(0x666666);

const CRITICAL_ISSUES: [(&str, &str); 5] = [
    ("Security", "Auth/secrets/session management not specified"),
    ("Architecture", "Circular dependencies, missing LLM resilience"),
    ("Performance", "N+1 queries, unbounded memory, no circuit breakers"),
    ("UX", "No accessibility strategy, missing loading states"),
    ("Devil's Advocate", "LLM-judge reliability, cost explosion risk"),
];

const NEXT_STEP_ITEMS: [&str; 4] = [
    "Authentication + secrets management architecture",
    "LLM provider resilience (circuit breakers)",
    "EventBus pattern to break circular dependencies",
    "Cost controls and budget limits",
];

fn agents() -> Vec<AgentData> {
    vec![
        AgentData::new("security-sentinel", "Security validation", 23, 50.5, Color::hex(0xff6b6b))
            .sub_task("Bash: Create validation directory"),
        AgentData::new(
            "architecture-strategist",
            "Architecture validation",
            19,
            54.8,
            Color::hex(0xa29bfe),
        )
        .sub_task("Bash: Create validation directory if it doesn't exist"),
        AgentData::new("performance-oracle", "Performance validation", 15, 39.6, Color::hex(0xfdcb6e))
            .sub_task("Bash: Create validation directory"),
        AgentData::new("Task", "UX validation", 15, 45.4, Color::hex(0x4ecdc4))
            .sub_task("Bash: Check if validation folder exists"),
        AgentData::new("devils-advocate", "Devils advocate validation", 20, 48.7, Color::hex(0xff9f43))
            .sub_task("Bash: Create validation directory if it doesn't exist"),
    ]
}

fn severity_table() -> DataTable {
    let rows = [
        ("Critical", 19_u32, 0xff6b6b),
        ("High", 26, 0xff9f43),
        ("Medium", 29, 0xfdcb6e),
        ("Low", 20, 0x888888),
    ]
    .into_iter()
    .map(|(label, count, color)| {
        DataRow::new([CellValue::from(label), CellValue::from(count)])
            .color(Color::hex(color))
    })
    .collect();
    DataTable::new(
        vec![DataColumn::new("Severity", 180.0), DataColumn::new("Count", 100.0)],
        rows,
        TABLES_START,
    )
}

/// Five validator agents reviewing a design document in parallel.
#[derive(Debug, Clone)]
pub struct MultiAgentShowcase {
    theme: Theme,
    phases: PhaseTable,
    scroll: [ScrollPhase; 3],
    agent_rows: Vec<AgentRow>,
    severity: DataTable,
}

impl MultiAgentShowcase {
    /// Build with the ocean theme unless overridden.
    pub fn new(theme: Option<Theme>) -> ShowreelResult<Self> {
        let phases = PhaseTable::new(&[
            ("HEADER", 0),
            ("COMMAND_START", COMMAND_START),
            ("COMMAND_DONE", COMMAND_DONE),
            ("SETUP_MSGS", SETUP_MSGS),
            ("STEP1", STEP1),
            ("USER_QUESTION", USER_QUESTION),
            ("STEP2", STEP2),
            ("STEP3", STEP3),
            ("AGENTS_START", AGENTS_START),
            ("LOADING", LOADING),
            ("RESULTS_START", RESULTS_START),
            ("TABLES_START", TABLES_START),
            ("NEXT_STEPS", NEXT_STEPS),
        ])?;
        let scroll = [
            ScrollPhase::new(USER_QUESTION as f64, AGENTS_START as f64, 120.0),
            ScrollPhase::new(AGENTS_START as f64, (LOADING + 80) as f64, 280.0),
            ScrollPhase::new((RESULTS_START - 30) as f64, 520.0, 500.0).ease(Ease::InOutQuad),
        ];
        let list = agents();
        let last = list.len().saturating_sub(1);
        let agent_rows = list
            .into_iter()
            .enumerate()
            .map(|(i, a)| AgentRow::new(a, i, i == last, (AGENTS_START + 10) as f64))
            .collect();
        Ok(Self {
            theme: theme.unwrap_or_else(|| INFO.default_theme.theme()),
            phases,
            scroll,
            agent_rows,
            severity: severity_table(),
        })
    }

    /// Upward scroll of the terminal content at `frame`, in px.
    pub fn scroll_at(&self, frame: f64) -> f64 {
        calculate_scroll(frame, &self.scroll)
    }

    fn user_question(&self, ctx: FrameCtx, delay: u64) -> SceneNode {
        let t = &self.theme;
        let size = t.typography.sizes.lg;
        BoxNode::new(Style::new().column().margin_bottom(16.0).opacity(ctx.entrance(delay)))
            .child(
                TextNode::new(mono(t, size).color(t.colors.text.muted).margin_bottom(6.0))
                    .run(TextRun::new("*").color(t.colors.bullet))
                    .run(TextRun::new(" User answered:")),
            )
            .child(
                TextNode::new(
                    mono(t, size)
                        .color(t.colors.text.secondary)
                        .margin_left(20.0)
                        .opacity(ctx.entrance(delay + 15)),
                )
                .run(TextRun::new("· Which validators? → "))
                .run(TextRun::new("--all").color(t.colors.status.info)),
            )
            .into_node()
    }

    fn running_header(&self, ctx: FrameCtx, delay: u64) -> SceneNode {
        let t = &self.theme;
        let local = (ctx.frame - delay as f64).max(0.0);
        TextNode::new(
            mono(t, t.typography.sizes.lg)
                .color(t.colors.text.secondary)
                .margin_bottom(16.0)
                .opacity(ctx.entrance(delay)),
        )
        .run(TextRun::new("*").color(t.colors.bullet))
        .run(TextRun::new(format!(
            " Running 5 agents{}",
            dots_string(local, DEFAULT_DOTS_INTERVAL)
        )))
        .run(
            TextRun::new("(ctrl+o to expand)")
                .color(t.colors.text.muted)
                .margin_left(16.0)
                .size(t.typography.sizes.sm),
        )
        .into_node()
    }

    fn verdict(&self, ctx: FrameCtx, delay: u64) -> SceneNode {
        let t = &self.theme;
        let glow = pulse(ctx.frame, 0.1, 0.7, 1.0);
        TextNode::new(
            mono(t, t.typography.sizes.xl)
                .margin_bottom(20.0)
                .opacity(ctx.entrance(delay)),
        )
        .run(TextRun::new("Verdict:").color(t.colors.text.secondary))
        .run(
            TextRun::new("NEEDS_ATTENTION")
                .color(Color::hex(0xff9f43))
                .margin_left(16.0)
                .weight(600)
                .text_shadow(Shadow::glow(20.0 * glow, Color::rgba8(255, 159, 67, 0.5))),
        )
        .into_node()
    }

    fn critical_issues(&self, ctx: FrameCtx, delay: u64) -> SceneNode {
        let t = &self.theme;
        let cell = |text: &str, color: Color, vpad: f64, first: bool| {
            let mut style = Style::new().padding(Edges::symmetric(vpad, 16.0)).color(color);
            style = if first {
                style.width(180.0)
            } else {
                style.grow(1.0).border_left(Border::new(2.0, GRID))
            };
            BoxNode::new(style).child(TextNode::plain(Style::new(), text))
        };

        let header = BoxNode::new(
            Style::new()
                .row()
                .background(Color::hex(0x1a1a1a))
                .border_bottom(Border::new(2.0, GRID)),
        )
        .child(cell("Validator", t.colors.text.muted, 10.0, true))
        .child(cell("Finding", t.colors.text.muted, 10.0, false));

        let shown = &CRITICAL_ISSUES[..3];
        let rows = shown.iter().enumerate().map(|(i, (validator, finding))| {
            let mut style = Style::new()
                .row()
                .opacity(ctx.fade_in(delay + 10 + i as u64 * 3, 8));
            if i + 1 < shown.len() {
                style = style.border_bottom(Border::new(2.0, GRID));
            }
            BoxNode::new(style)
                .child(cell(validator, t.colors.text.accent, 8.0, true))
                .child(cell(finding, t.colors.text.secondary, 8.0, false))
        });

        BoxNode::new(
            mono(t, t.typography.sizes.sm)
                .column()
                .grow(1.0)
                .opacity(ctx.entrance(delay)),
        )
        .named("critical_issues")
        .child(TextNode::plain(
            Style::new().color(t.colors.text.secondary).margin_bottom(12.0),
            "Critical Issues",
        ))
        .child(
            BoxNode::new(
                Style::new()
                    .column()
                    .border(Border::new(2.0, GRID))
                    .radius(8.0)
                    .clip(),
            )
            .child(header)
            .children(rows),
        )
        .into_node()
    }

    fn next_steps(&self, ctx: FrameCtx, delay: u64) -> SceneNode {
        let t = &self.theme;
        let items = NEXT_STEP_ITEMS[..3].iter().enumerate().map(|(i, step)| {
            TextNode::new(
                Style::new()
                    .color(t.colors.text.muted)
                    .margin_bottom(6.0)
                    .opacity(ctx.fade_in(delay + 10 + i as u64 * 4, 8)),
            )
            .run(TextRun::new(format!("{}.", i + 1)).color(t.colors.status.info))
            .run(TextRun::new(format!(" {step}")))
        });
        BoxNode::new(
            mono(t, 28.0)
                .column()
                .margin_top(24.0)
                .opacity(ctx.entrance(delay)),
        )
        .named("next_steps")
        .child(TextNode::plain(
            Style::new().color(t.colors.text.secondary).margin_bottom(10.0),
            "Next Steps",
        ))
        .children(items)
        .into_node()
    }

    fn setup(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        BoxNode::new(Style::new().column())
            .named("setup")
            .child(
                StatusMessage::new(
                    SETUP_MSGS,
                    "Using validate-design to run validation on agent-forge.",
                )
                .render(ctx, t),
            )
            .child(
                StatusMessage::new(SETUP_MSGS + 15, "Read 2 files · Prerequisites verified")
                    .color(DIM)
                    .render(ctx, t),
            )
            .child(StepHeader::new(1, "Parse Arguments", STEP1).render(ctx, t))
            .child(self.user_question(ctx, USER_QUESTION))
            .child(
                StatusMessage::new(
                    USER_QUESTION + 25,
                    "Running all 5 validators: security, architecture, performance, ux, devils-advocate",
                )
                .render(ctx, t),
            )
            .child(StepHeader::new(2, "Prerequisites Check", STEP2).render(ctx, t))
            .child(
                StatusMessage::new(STEP2 + 10, "Curated artifacts exist.")
                    .color(DIM)
                    .render(ctx, t),
            )
            .child(StepHeader::new(3, "Dispatch Validators (PARALLEL)", STEP3).render(ctx, t))
            .into_node()
    }

    fn agents(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        BoxNode::new(Style::new().column().margin_top(8.0))
            .named("agents")
            .child(self.running_header(ctx, AGENTS_START))
            .child(
                BoxNode::new(Style::new().column().margin_left(8.0))
                    .children(self.agent_rows.iter().map(|row| row.render(ctx, t))),
            )
            .into_node()
    }

    fn results(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let tables = BoxNode::new(
            Style::new()
                .row()
                .align(Align::Start)
                .margin_top(12.0),
        )
        .child(
            BoxNode::new(Style::new().margin_right(32.0))
                .child(self.severity.render(ctx, t)),
        )
        .child(self.critical_issues(ctx, TABLES_START + 20));

        BoxNode::new(Style::new().column().margin_top(20.0))
            .named("results")
            .child(
                StatusMessage::new(
                    RESULTS_START,
                    "Validators run: security, architecture, performance, ux, devils-advocate",
                )
                .color(Color::hex(0x888888))
                .render(ctx, t),
            )
            .child(
                BoxNode::new(Style::new().column().margin_top(16.0))
                    .child(self.verdict(ctx, RESULTS_START + 15))
                    .child(tables)
                    .child(self.next_steps(ctx, NEXT_STEPS)),
            )
            .into_node()
    }
}

impl Composition for MultiAgentShowcase {
    fn info(&self) -> &CompositionInfo {
        &INFO
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn phases(&self) -> &PhaseTable {
        &self.phases
    }

    #[tracing::instrument(level = "trace", skip(self), fields(comp = "MultiAgentShowcase"))]
    fn render(&self, frame: FrameIndex) -> SceneNode {
        let ctx = FrameCtx::new(frame, INFO.fps);
        let t = &self.theme;

        let mut log = BoxNode::new(
            Style::new()
                .column()
                .translate(0.0, -self.scroll_at(ctx.frame)),
        )
        .named("scroll")
        .child(
            SessionHeader::new("Opus 4.5 · Claude Max · ~/project/agent-forge").render(ctx, t),
        )
        .child(
            CommandLine::new(COMMAND, COMMAND_START as f64)
                .hide_cursor_after(SETUP_MSGS as f64)
                .render(ctx, t),
        );
        if ctx.reached(SETUP_MSGS) {
            log = log.child(self.setup(ctx));
        }
        if ctx.reached(AGENTS_START) {
            log = log.child(self.agents(ctx));
        }
        if ctx.reached(LOADING) {
            log = log.child(
                ThinkingDots::new(LOADING, "Processing")
                    .icon("✢")
                    .with_timer()
                    .font_size(30.0)
                    .render(ctx, t),
            );
        }
        if ctx.reached(RESULTS_START) {
            log = log.child(self.results(ctx));
        }

        let content = vec![
            TitleBadge::new("Spec-Driven Development", "How 5 AI Agents Review My Design")
                .render(ctx, t),
            TerminalWindow::default().render(ctx, t, vec![log.into_node()]),
            scanlines(t),
            Branding::with_sublabel("~2 min for 5 expert reviews").render(ctx, t),
        ];
        stage(&INFO, background(t, content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/multi_agent.rs"]
mod tests;
