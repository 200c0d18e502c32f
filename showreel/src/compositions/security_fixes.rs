use crate::animation::scroll::{ScrollPhase, calculate_scroll};
use crate::components::data::{ProgressBar, TaskItem, TaskListItem};
use crate::components::layout::{TerminalWindow, TitleBadge, background, scanlines};
use crate::components::text::{CodeBlock, CommandLine, SessionHeader, StatusMessage, ThinkingDots};
use crate::components::Component;
use crate::compositions::{Composition, CompositionId, CompositionInfo, stage};
use crate::eval::context::FrameCtx;
use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::ShowreelResult;
use crate::scene::model::{BoxNode, SceneNode, Style};
use crate::theme::color::Color;
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

pub(crate) const INFO: CompositionInfo = CompositionInfo::new(
    CompositionId::SecurityFixesShowcase,
    Canvas::HORIZONTAL_16_9,
    660,
    ThemeName::Modern,
);

const COMMAND_START: u64 = 10;
const COMMAND_DONE: u64 = 60;
const INIT_MSG: u64 = 70;
const TASK_LIST_START: u64 = 100;
const TASK_COMPLETE_INTERVAL: u64 = 45;
const FIRST_COMPLETE: u64 = 160;

/// Frames a finished task's code snippet stays on screen.
const SNIPPET_FRAMES: u64 = 40;

const COMMAND: &str = "address Critical issues for @ideas/agent-forge/";

const SECURITY: Color = Color::hex(0xff6b6b);
const PERFORMANCE: Color = Color::hex(0xfdcb6e);
const DEVILS_ADVOCATE: Color = Color::hex(0xff9f43);

const TASKS: [(&str, &str, &str, Color); 10] = [
    ("C1", "Security", "CSRF Token Validation", SECURITY),
    ("C2", "Security", "Input Sanitization at Data Layer", SECURITY),
    ("C3", "Security", "Session Invalidation", SECURITY),
    ("C1", "Performance", "Event History Partitioning", PERFORMANCE),
    ("C2", "Performance", "Query Projections", PERFORMANCE),
    ("C3", "Performance", "Async Event Bus", PERFORMANCE),
    ("C1", "Devils Advocate", "Hybrid LLM Validation", DEVILS_ADVOCATE),
    ("C2", "Devils Advocate", "Cost Transparency", DEVILS_ADVOCATE),
    ("C3", "Devils Advocate", "Agent SLAs", DEVILS_ADVOCATE),
    ("C4", "Devils Advocate", "Defense in Depth for Sandbox", DEVILS_ADVOCATE),
];

/// Code snippet shown under the first six tasks as they complete: (code, file).
const SNIPPETS: [(&str, &str); 6] = [
    ("CSRFMiddleware(next http.Handler)", "authentication.md"),
    ("SanitizeInput(input string) string", "data-layer.md"),
    ("InvalidateAllSessions(userID)", "session.md"),
    ("PartitionByTimeRange(events)", "event-store.md"),
    ("ProjectionBuilder.Select()", "queries.md"),
    ("AsyncEventBus.Publish(event)", "event-bus.md"),
];

/// A checklist of ten fixes completing one after another under a progress bar.
#[derive(Debug, Clone)]
pub struct SecurityFixesShowcase {
    theme: Theme,
    phases: PhaseTable,
    tasks: Vec<TaskItem>,
    scroll: [ScrollPhase; 2],
}

impl SecurityFixesShowcase {
    /// Build with the modern theme unless overridden.
    pub fn new(theme: Option<Theme>) -> ShowreelResult<Self> {
        let phases = PhaseTable::new(&[
            ("HEADER", 0),
            ("COMMAND_START", COMMAND_START),
            ("COMMAND_DONE", COMMAND_DONE),
            ("INIT_MSG", INIT_MSG),
            ("TASK_LIST_START", TASK_LIST_START),
            ("FIRST_COMPLETE", FIRST_COMPLETE),
        ])?;
        let tasks = TASKS
            .iter()
            .map(|&(id, category, label, color)| TaskItem::new(id, category, label, color))
            .collect();
        let scroll = [
            ScrollPhase::new(TASK_LIST_START as f64, (TASK_LIST_START + 150) as f64, 100.0),
            ScrollPhase::new((FIRST_COMPLETE + 200) as f64, (FIRST_COMPLETE + 400) as f64, 300.0),
        ];
        Ok(Self {
            theme: theme.unwrap_or_else(|| INFO.default_theme.theme()),
            phases,
            tasks,
            scroll,
        })
    }

    /// Frame at which task `index` is checked off.
    pub fn complete_frame(index: usize) -> u64 {
        FIRST_COMPLETE + index as u64 * TASK_COMPLETE_INTERVAL
    }

    /// Number of tasks complete at `frame`.
    pub fn completed_count(&self, frame: f64) -> usize {
        (0..self.tasks.len())
            .filter(|&i| frame >= Self::complete_frame(i) as f64)
            .count()
    }

    /// Task being worked on at `frame`: the one whose completion falls within the next
    /// interval.
    pub fn active_task(&self, frame: f64) -> Option<usize> {
        (0..self.tasks.len()).find(|&i| {
            let done = Self::complete_frame(i) as f64;
            frame < done && frame >= done - TASK_COMPLETE_INTERVAL as f64
        })
    }

    /// Upward scroll of the terminal content at `frame`, in px.
    pub fn scroll_at(&self, frame: f64) -> f64 {
        calculate_scroll(frame, &self.scroll)
    }

    fn task_list(&self, ctx: FrameCtx) -> SceneNode {
        let t = &self.theme;
        let completed = self.completed_count(ctx.frame);
        let active = self.active_task(ctx.frame);

        let mut list = BoxNode::new(Style::new().column().margin_top(20.0))
            .named("tasks")
            .child(
                ProgressBar::new(TASK_LIST_START, completed as u32, self.tasks.len() as u32)
                    .render(ctx, t),
            );

        for (i, task) in self.tasks.iter().enumerate() {
            let done = Self::complete_frame(i);
            list = list.child(
                TaskListItem::new(
                    task.clone(),
                    (TASK_LIST_START + i as u64 * 8) as f64,
                    done as f64,
                    active == Some(i),
                )
                .render(ctx, t),
            );
            let showing = ctx.frame >= done as f64 && ctx.frame < (done + SNIPPET_FRAMES) as f64;
            if let Some((code, file)) = SNIPPETS.get(i)
                && showing
            {
                list = list.child(CodeBlock::new(done, *code).file(*file).render(ctx, t));
            }
        }

        if let Some(i) = active {
            let task = &self.tasks[i];
            list = list.child(
                ThinkingDots::new(
                    Self::complete_frame(i) - TASK_COMPLETE_INTERVAL + 10,
                    format!("Addressing {} {}", task.category, task.id),
                )
                .hint("esc to interrupt")
                .render(ctx, t),
            );
        }

        if let Some(last) = self.tasks.len().checked_sub(1)
            && completed == self.tasks.len()
        {
            let last = Self::complete_frame(last);
            list = list.child(
                BoxNode::new(Style::new().column().margin_top(24.0))
                    .named("summary")
                    .child(
                        StatusMessage::new(last + 20, "All 10 critical issues have been addressed!")
                            .color(Color::hex(0x27ca3f))
                            .render(ctx, t),
                    )
                    .child(
                        StatusMessage::new(last + 40, "Updated 6 files in ideas/agent-forge/07-curated/")
                            .color(Color::hex(0x888888))
                            .render(ctx, t),
                    ),
            );
        }
        list.into_node()
    }
}

impl Composition for SecurityFixesShowcase {
    fn info(&self) -> &CompositionInfo {
        &INFO
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn phases(&self) -> &PhaseTable {
        &self.phases
    }

    #[tracing::instrument(level = "trace", skip(self), fields(comp = "SecurityFixesShowcase"))]
    fn render(&self, frame: FrameIndex) -> SceneNode {
        let ctx = FrameCtx::new(frame, INFO.fps);
        let t = &self.theme;

        let mut log = BoxNode::new(
            Style::new()
                .column()
                .translate(0.0, -self.scroll_at(ctx.frame)),
        )
        .named("scroll")
        .child(SessionHeader::new("Opus 4.5 · Claude Max · ~/project/agent-forge").render(ctx, t))
        .child(
            CommandLine::new(COMMAND, COMMAND_START as f64)
                .chars_per_second(30.0)
                .hide_cursor_after(INIT_MSG as f64)
                .render(ctx, t),
        );
        if ctx.reached(INIT_MSG) {
            log = log
                .child(
                    StatusMessage::new(
                        INIT_MSG,
                        "I see 10 critical issues across Security (3), Performance (3), and Devils Advocate (4).",
                    )
                    .render(ctx, t),
                )
                .child(
                    StatusMessage::new(INIT_MSG + 20, "Read 6 files · Creating task list to track progress")
                        .color(Color::hex(0x666666))
                        .render(ctx, t),
                );
        }
        if ctx.reached(TASK_LIST_START) {
            log = log.child(self.task_list(ctx));
        }

        let content = vec![
            TitleBadge::new("Addressing Critical Issues", "10 Fixes in Agent-Forge").render(ctx, t),
            TerminalWindow::default().render(ctx, t, vec![log.into_node()]),
            scanlines(t),
        ];
        stage(&INFO, background(t, content))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/security_fixes.rs"]
mod tests;
