use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate, pulse};
use crate::animation::scroll::{ScrollPhase, calculate_scroll};
use crate::components::layout::{TerminalWindow, background, scanlines};
use crate::components::text::{CommandLine, SessionHeader, StatusMessage};
use crate::components::{Component, mono, system};
use crate::compositions::{Composition, CompositionId, CompositionInfo, stage};
use crate::eval::context::FrameCtx;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::ShowreelResult;
use crate::scene::model::{
    Align, Border, BoxNode, Edges, Inset, SceneNode, Shadow, Style, TextNode, TextRun,
};
use crate::theme::color::Color;
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

pub(crate) const INFO: CompositionInfo = CompositionInfo::new(
    CompositionId::KanbanSprintShowcase,
    Canvas::HORIZONTAL_16_9,
    600,
    ThemeName::Modern,
);

const COMMAND_START: u64 = 10;
const COMMAND_DONE: u64 = 55;
const BOARD_APPEAR: u64 = 65;
const AGENTS_APPEAR: u64 = 95;
const WAVE1_START: u64 = 130;
const WAVE1_REVIEW: u64 = 210;
const WAVE2_START: u64 = 250;
const WAVE1_DONE: u64 = 300;
const WAVE2_REVIEW: u64 = 340;
const WAVE3_REVIEW: u64 = 380;
const WAVE2_DONE: u64 = 420;
const WAVE3_DONE: u64 = 480;
const SUMMARY: u64 = 510;

const COMMAND: &str = "/sprint run --agents 5 --parallel";

const COLUMN_WIDTH: f64 = 400.0;
const CARD_HEIGHT: f64 = 36.0;
const COLUMN_HEADER_HEIGHT: f64 = 44.0;
const BOARD_PADDING: f64 = 12.0;
const MAX_CARDS: f64 = 6.0;

/// Board column a card can sit in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Column {
    /// Not started.
    Backlog,
    /// Picked up by an agent.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Done,
}

impl Column {
    /// Left-to-right board order.
    pub const ALL: [Self; 4] = [Self::Backlog, Self::InProgress, Self::Review, Self::Done];

    /// Header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::InProgress => "IN PROGRESS",
            Self::Review => "REVIEW",
            Self::Done => "DONE",
        }
    }

    fn accent(self) -> Color {
        match self {
            Self::Backlog => Color::hex(0x888888),
            Self::InProgress => Color::hex(0x4ecdc4),
            Self::Review => Color::hex(0xfdcb6e),
            Self::Done => Color::hex(0x27ca3f),
        }
    }
}

struct Card {
    label: &'static str,
    color: Color,
}

const CARDS: [Card; 6] = [
    Card {
        label: "Auth API",
        color: Color::hex(0xff6b6b),
    },
    Card {
        label: "Button Component",
        color: Color::hex(0x4ecdc4),
    },
    Card {
        label: "DB Schema",
        color: Color::hex(0xa29bfe),
    },
    Card {
        label: "Unit Tests",
        color: Color::hex(0xfdcb6e),
    },
    Card {
        label: "Nav Bar",
        color: Color::hex(0x4ecdc4),
    },
    Card {
        label: "API Docs",
        color: Color::hex(0xff9f43),
    },
];

/// (card index, destination, frame), in frame order.
const CARD_TRANSITIONS: [(usize, Column, u64); 18] = [
    (0, Column::InProgress, WAVE1_START),
    (1, Column::InProgress, WAVE1_START + 10),
    (2, Column::InProgress, WAVE1_START + 20),
    (3, Column::InProgress, WAVE1_START + 30),
    (0, Column::Review, WAVE1_REVIEW),
    (1, Column::Review, WAVE1_REVIEW + 10),
    (4, Column::InProgress, WAVE2_START),
    (5, Column::InProgress, WAVE2_START + 10),
    (0, Column::Done, WAVE1_DONE),
    (1, Column::Done, WAVE1_DONE + 10),
    (2, Column::Review, WAVE2_REVIEW),
    (3, Column::Review, WAVE2_REVIEW + 10),
    (4, Column::Review, WAVE3_REVIEW),
    (5, Column::Review, WAVE3_REVIEW + 10),
    (2, Column::Done, WAVE2_DONE),
    (3, Column::Done, WAVE2_DONE + 10),
    (4, Column::Done, WAVE3_DONE),
    (5, Column::Done, WAVE3_DONE + 10),
];

struct Agent {
    name: &'static str,
    tool_uses: u32,
    color: Color,
    sub_task: &'static str,
}

const AGENTS: [Agent; 5] = [
    Agent {
        name: "security-sentinel",
        tool_uses: 23,
        color: Color::hex(0xff6b6b),
        sub_task: "Auth API",
    },
    Agent {
        name: "frontend-dev",
        tool_uses: 19,
        color: Color::hex(0x4ecdc4),
        sub_task: "Button Component",
    },
    Agent {
        name: "backend-dev",
        tool_uses: 15,
        color: Color::hex(0xa29bfe),
        sub_task: "DB Schema",
    },
    Agent {
        name: "test-runner",
        tool_uses: 15,
        color: Color::hex(0xfdcb6e),
        sub_task: "Unit Tests",
    },
    Agent {
        name: "reviewer",
        tool_uses: 15,
        color: Color::hex(0xff9f43),
        sub_task: "API Docs",
    },
];

/// (agent index, new sub-task, frame).
const AGENT_TASK_UPDATES: [(usize, &str, u64); 2] =
    [(1, "Nav Bar", WAVE2_START), (4, "API Docs", WAVE2_START + 10)];

/// Column a card sits in at `frame`: the last transition that has fired.
pub fn card_column(card: usize, frame: f64) -> Column {
    CARD_TRANSITIONS
        .iter()
        .filter(|&&(c, _, at)| c == card && frame >= at as f64)
        .fold(Column::Backlog, |_, &(_, to, _)| to)
}

/// Frame at which `card` moves into `column`, if it ever does.
pub fn transition_frame(card: usize, column: Column) -> Option<u64> {
    CARD_TRANSITIONS
        .iter()
        .find(|&&(c, to, _)| c == card && to == column)
        .map(|&(_, _, at)| at)
}

/// Sub-task an agent reports at `frame`.
pub fn agent_sub_task(agent: usize, frame: f64) -> &'static str {
    let initial = AGENTS.get(agent).map_or("", |a| a.sub_task);
    AGENT_TASK_UPDATES
        .iter()
        .filter(|&&(a, _, at)| a == agent && frame >= at as f64)
        .fold(initial, |_, &(_, task, _)| task)
}

fn rule(left: char, join: char, right: char) -> String {
    let segment = "─".repeat((COLUMN_WIDTH / 10.0) as usize);
    let inner = vec![segment; Column::ALL.len()].join(&join.to_string());
    format!("{left}{inner}{right}")
}

/// Five agents moving six cards across a four-column board.
#[derive(Debug, Clone)]
pub struct KanbanSprintShowcase {
    theme: Theme,
    phases: PhaseTable,
    scroll: [ScrollPhase; 3],
}

impl KanbanSprintShowcase {
    /// Build with the modern theme. The tilt is always flattened so the board reads square.
    pub fn new(theme: Option<Theme>) -> ShowreelResult<Self> {
        let phases = PhaseTable::new(&[
            ("HEADER", 0),
            ("COMMAND_START", COMMAND_START),
            ("COMMAND_DONE", COMMAND_DONE),
            ("BOARD_APPEAR", BOARD_APPEAR),
            ("AGENTS_APPEAR", AGENTS_APPEAR),
            ("WAVE1_START", WAVE1_START),
            ("WAVE1_REVIEW", WAVE1_REVIEW),
            ("WAVE2_START", WAVE2_START),
            ("WAVE1_DONE", WAVE1_DONE),
            ("WAVE2_REVIEW", WAVE2_REVIEW),
            ("WAVE3_REVIEW", WAVE3_REVIEW),
            ("WAVE2_DONE", WAVE2_DONE),
            ("WAVE3_DONE", WAVE3_DONE),
            ("SUMMARY", SUMMARY),
            ("END", INFO.duration),
        ])?;
        let scroll = [
            ScrollPhase::new(BOARD_APPEAR as f64, (AGENTS_APPEAR + 40) as f64, 100.0),
            ScrollPhase::new(WAVE1_START as f64, WAVE2_START as f64, 80.0),
            ScrollPhase::new(WAVE2_DONE as f64, (SUMMARY + 30) as f64, 100.0).ease(Ease::InOutQuad),
        ];
        let theme = theme.unwrap_or_else(|| INFO.default_theme.theme());
        Ok(Self {
            theme: theme.with_flat_perspective(),
            phases,
            scroll,
        })
    }

    /// Upward scroll of the terminal content at `frame`, in px.
    pub fn scroll_at(&self, frame: f64) -> f64 {
        calculate_scroll(frame, &self.scroll)
    }

    fn hero(&self, ctx: FrameCtx) -> Option<SceneNode> {
        let t = &self.theme;
        let opacity = interpolate(ctx.frame, [40.0, 75.0], [1.0, 0.0], InterpolateOpts::clamp());
        if opacity <= 0.0 {
            return None;
        }
        let glow = pulse(ctx.frame, 0.15, 0.6, 1.0);
        let dots = AGENTS.iter().map(|a| {
            BoxNode::new(
                Style::new()
                    .size(16.0, 16.0)
                    .round()
                    .background(a.color)
                    .shadow(Shadow::glow(12.0 * glow, a.color)),
            )
        });
        let node = BoxNode::new(
            Style::new()
                .absolute(Inset::FILL)
                .column()
                .center()
                .opacity(opacity)
                .z(50),
        )
        .named("hero")
        .child(TextNode::plain(
            system(t, 120.0)
                .weight(700)
                .color(Color::WHITE)
                .line_height(1.0)
                .text_shadow(Shadow::glow(60.0 * glow, Color::rgba8(150, 100, 255, 0.6)))
                .text_shadow(Shadow::glow(120.0, Color::rgba8(150, 100, 255, 0.3))),
            "5 AI Agents",
        ))
        .child(TextNode::plain(
            system(t, 56.0)
                .weight(500)
                .color(Color::WHITE.with_alpha(0.7))
                .margin_top(16.0),
            "ship a feature sprint",
        ))
        .child(
            BoxNode::new(Style::new().row().gap(24.0).margin_top(40.0)).children(dots),
        );
        Some(node.into_node())
    }

    fn column_edges(&self, index: usize, style: Style) -> Style {
        let line = Border::new(1.0, self.theme.colors.text.muted);
        let style = style.width(COLUMN_WIDTH).border_right(line);
        if index == 0 { style.border_left(line) } else { style }
    }

    fn board(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let muted = t.colors.text.muted;
        let opacity = ctx.fade_in(BOARD_APPEAR, 20);
        let rule_line = |l, j, r| TextNode::plain(Style::new().color(muted).pre_wrap(), rule(l, j, r));

        let headers = Column::ALL.iter().enumerate().map(|(i, &col)| {
            let count = (0..CARDS.len())
                .filter(|&c| card_column(c, ctx.frame) == col)
                .count();
            BoxNode::new(
                self.column_edges(
                    i,
                    Style::new()
                        .height(COLUMN_HEADER_HEIGHT)
                        .padding(Edges::symmetric(8.0, 0.0))
                        .row()
                        .center()
                        .gap(8.0),
                ),
            )
            .child(TextNode::new(Style::new()).run(
                TextRun::new(col.label())
                    .color(col.accent())
                    .weight(600)
                    .size(t.typography.sizes.sm),
            ))
            .child(TextNode::new(Style::new()).run(
                TextRun::new(format!("({count})"))
                    .color(muted)
                    .size(t.typography.sizes.xs),
            ))
        });

        let columns = Column::ALL.iter().enumerate().map(|(i, &col)| {
            let cards = CARDS.iter().enumerate().filter_map(|(c, card)| {
                if card_column(c, ctx.frame) != col {
                    return None;
                }
                // Backlog cards are visible as soon as the board is.
                let opacity = transition_frame(c, col).map_or(1.0, |at| ctx.fade_in(at, 12));
                Some(
                    BoxNode::new(
                        Style::new()
                            .height(CARD_HEIGHT)
                            .row()
                            .align(Align::Center)
                            .gap(8.0)
                            .opacity(opacity),
                    )
                    .child(TextNode::new(Style::new()).run(TextRun::new("▪").color(card.color).size(18.0)))
                    .child(TextNode::new(Style::new()).run(
                        TextRun::new(card.label).color(t.colors.text.secondary),
                    )),
                )
            });
            BoxNode::new(self.column_edges(
                i,
                Style::new()
                    .column()
                    .height(MAX_CARDS * CARD_HEIGHT + BOARD_PADDING * 2.0)
                    .padding(Edges::symmetric(BOARD_PADDING, 16.0)),
            ))
            .named(format!("column_{}", col.label().to_lowercase().replace(' ', "_")))
            .children(cards)
        });

        BoxNode::new(
            mono(t, t.typography.sizes.sm)
                .column()
                .opacity(opacity)
                .margin_top(8.0)
                .margin_bottom(20.0),
        )
        .named("board")
        .child(rule_line('┌', '┬', '┐'))
        .child(BoxNode::new(Style::new().row()).children(headers))
        .child(rule_line('├', '┼', '┤'))
        .child(BoxNode::new(Style::new().row()).children(columns))
        .child(rule_line('└', '┴', '┘'))
        .into_node()
    }

    fn agent_status(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let muted = t.colors.text.muted;
        let tool_progress = interpolate(
            ctx.frame,
            [WAVE1_START as f64, SUMMARY as f64],
            [0.0, 1.0],
            InterpolateOpts::clamp().ease(Ease::OutQuad),
        );
        let span = |run: TextRun| TextNode::new(Style::new()).run(run);

        let rows = AGENTS.iter().enumerate().map(|(i, agent)| {
            let entry = ctx.entrance(AGENTS_APPEAR + 10 + i as u64 * 6);
            let tools = (f64::from(agent.tool_uses) * tool_progress).floor();
            let tree = if i + 1 == AGENTS.len() { "└─" } else { "├─" };
            BoxNode::new(
                Style::new()
                    .row()
                    .align(Align::Center)
                    .margin_bottom(4.0)
                    .opacity(entry)
                    .translate_x((1.0 - entry) * 20.0),
            )
            .child(span(TextRun::new(tree).color(muted).margin_right(8.0).width(28.0)))
            .child(span(TextRun::new(agent.name).color(agent.color).weight(500).width(200.0)))
            .child(span(TextRun::new("·").color(muted).margin_left(10.0)))
            .child(span(
                TextRun::new(agent_sub_task(i, ctx.frame))
                    .color(t.colors.text.secondary)
                    .margin_left(10.0)
                    .width(180.0),
            ))
            .child(span(TextRun::new("·").color(muted).margin_left(10.0)))
            .child(span(
                TextRun::new(format!("{tools} tools"))
                    .color(t.colors.status.info)
                    .margin_left(10.0),
            ))
        });

        BoxNode::new(
            mono(t, t.typography.sizes.sm)
                .column()
                .opacity(ctx.fade_in(AGENTS_APPEAR, 15))
                .margin_bottom(16.0),
        )
        .named("agents")
        .child(
            TextNode::new(Style::new().color(t.colors.text.secondary).margin_bottom(10.0))
                .run(TextRun::new("⏺").color(t.colors.bullet))
                .run(TextRun::new(" Running 5 agents in parallel")),
        )
        .child(BoxNode::new(Style::new().column().margin_left(8.0)).children(rows))
        .into_node()
    }

    fn summary(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let glow = pulse(ctx.frame, 0.1, 0.7, 1.0);
        BoxNode::new(
            mono(t, t.typography.sizes.md)
                .column()
                .opacity(ctx.entrance(SUMMARY))
                .margin_top(8.0),
        )
        .named("summary")
        .child(TextNode::plain(
            Style::new()
                .font_size(t.typography.sizes.lg)
                .color(t.colors.status.success)
                .weight(600)
                .margin_bottom(10.0)
                .text_shadow(Shadow::glow(20.0 * glow, Color::rgba8(39, 202, 63, 0.5))),
            "Sprint complete",
        ))
        .child(TextNode::plain(
            Style::new()
                .font_size(t.typography.sizes.sm)
                .color(t.colors.text.muted),
            "6 tasks · 5 agents · 87 tool calls · 238.5k tokens",
        ))
        .into_node()
    }
}

impl Composition for KanbanSprintShowcase {
    fn info(&self) -> &CompositionInfo {
        &INFO
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn phases(&self) -> &PhaseTable {
        &self.phases
    }

    #[tracing::instrument(level = "trace", skip(self), fields(comp = "KanbanSprintShowcase"))]
    fn render(&self, frame: FrameIndex) -> SceneNode {
        let ctx = FrameCtx::new(frame, INFO.fps);
        let t = &self.theme;

        let mut log = BoxNode::new(
            Style::new()
                .column()
                .translate(0.0, -self.scroll_at(ctx.frame)),
        )
        .named("scroll")
        .child(SessionHeader::new("Opus 4.5 · Claude Max · ~/project/feature-sprint").render(ctx, t))
        .child(
            CommandLine::new(COMMAND, COMMAND_START as f64)
                .hide_cursor_after(COMMAND_DONE as f64)
                .render(ctx, t),
        );
        if ctx.reached(COMMAND_DONE) {
            log = log.child(
                StatusMessage::new(COMMAND_DONE, "Initializing sprint with 5 agents · 6 tasks queued")
                    .render(ctx, t),
            );
        }
        if ctx.reached(BOARD_APPEAR) {
            log = log.child(self.board(ctx));
        }
        if ctx.reached(AGENTS_APPEAR) {
            log = log.child(self.agent_status(ctx));
        }
        if ctx.reached(SUMMARY) {
            log = log.child(self.summary(ctx));
        }

        let mut content = Vec::with_capacity(3);
        content.extend(self.hero(ctx));
        content.push(TerminalWindow::default().render(ctx, t, vec![log.into_node()]));
        content.push(scanlines(t));
        stage(&INFO, background(t, content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/kanban_sprint.rs"]
mod tests;
