use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::animation::interpolate::{InterpolateOpts, interpolate};
use crate::animation::spring::SpringPreset;
use crate::animation::stagger::{DEFAULT_STAGGER, stagger_delay};
use crate::components::{Component, mono};
use crate::eval::context::FrameCtx;
use crate::scene::model::{
    Align, Border, BoxNode, Edges, SceneNode, Style, TextAlign, TextNode, TextRun,
};
use crate::theme::Theme;
use crate::theme::color::Color;

const GRID: Color = Color::hex(0x333333);
const HEADER_BG: Color = Color::hex(0x1a1a1a);
const CELL_TEXT: Color = Color::hex(0xcccccc);
const PENDING_ICON: Color = Color::hex(0x444444);
const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// One sub-agent in a fan-out listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentData {
    /// Display name.
    pub name: String,
    /// Short role label.
    pub label: String,
    /// Final tool-call count.
    pub tool_uses: u32,
    /// Final token count in thousands.
    pub tokens: f64,
    /// Accent color.
    pub color: Color,
    /// What the agent is working on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_task: Option<String>,
}

impl AgentData {
    /// Agent without a sub-task.
    pub fn new(name: &str, label: &str, tool_uses: u32, tokens: f64, color: Color) -> Self {
        Self {
            name: name.to_owned(),
            label: label.to_owned(),
            tool_uses,
            tokens,
            color,
            sub_task: None,
        }
    }

    /// Attach a sub-task description.
    pub fn sub_task(mut self, task: &str) -> Self {
        self.sub_task = Some(task.to_owned());
        self
    }
}

/// One entry of a task checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskItem {
    /// Ticket id.
    pub id: String,
    /// Category label shown before the id.
    pub category: String,
    /// Task description.
    pub label: String,
    /// Accent color for the category.
    pub color: Color,
}

impl TaskItem {
    /// Build a task.
    pub fn new(id: &str, category: &str, label: &str, color: Color) -> Self {
        Self {
            id: id.to_owned(),
            category: category.to_owned(),
            label: label.to_owned(),
            color,
        }
    }
}

/// Table column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataColumn {
    /// Header label.
    pub label: String,
    /// Width in px.
    pub width: f64,
}

impl DataColumn {
    /// Build a column.
    pub fn new(label: &str, width: f64) -> Self {
        Self {
            label: label.to_owned(),
            width,
        }
    }
}

/// Cell content. Numbers count up from zero as the row appears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Static text.
    Text(String),
    /// Animated number, displayed floored.
    Number(f64),
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

/// Table row; cells line up with the columns by position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRow {
    /// Cells in column order. Missing trailing cells render empty.
    pub cells: Vec<CellValue>,
    /// Color of the first cell; theme primary text when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl DataRow {
    /// Row from cells.
    pub fn new<I, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CellValue>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
            color: None,
        }
    }

    /// Color the first cell.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

/// Tree-style row reporting one agent's tool and token counters.
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRow {
    /// Agent to show.
    pub agent: AgentData,
    /// Position in the list; drives the stagger.
    pub index: usize,
    /// Last row draws the closing tree branch.
    pub is_last: bool,
    /// Frame at which the list starts.
    pub start_frame: f64,
    /// Frames between consecutive rows.
    pub stagger: u64,
    /// Local frame at which counters reach their final values.
    pub work_end: f64,
}

impl AgentRow {
    /// Row with the default stagger and work window.
    pub fn new(agent: AgentData, index: usize, is_last: bool, start_frame: f64) -> Self {
        Self {
            agent,
            index,
            is_last,
            start_frame,
            stagger: DEFAULT_STAGGER,
            work_end: 180.0,
        }
    }

    /// Counter progress in `0..=1` at `frame`.
    pub fn counter_progress(&self, frame: f64) -> f64 {
        let delay = stagger_delay(self.index, self.stagger) as f64;
        interpolate(
            frame - self.start_frame,
            [delay + 20.0, self.work_end],
            [0.0, 1.0],
            InterpolateOpts::clamp().ease(Ease::OutQuad),
        )
    }
}

impl Component for AgentRow {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let delay = stagger_delay(self.index, self.stagger) as f64;
        let entry = ctx
            .spring(self.start_frame + delay, SpringPreset::Snappy)
            .max(0.0);
        let progress = self.counter_progress(ctx.frame);
        let tools = (f64::from(self.agent.tool_uses) * progress).floor();
        let muted = theme.colors.text.muted;
        let tree = if self.is_last { "└─" } else { "├─" };

        TextNode::new(
            mono(theme, theme.typography.sizes.md)
                .margin_bottom(4.0)
                .opacity(entry)
                .translate_x((1.0 - entry) * 20.0),
        )
        .run(TextRun::new(tree).color(muted).margin_right(8.0).width(28.0))
        .run(TextRun::new(&self.agent.name).color(self.agent.color).weight(500))
        .run(TextRun::new("·").color(muted).margin_left(10.0))
        .run(
            TextRun::new(format!("{tools} tools"))
                .color(theme.colors.status.info)
                .margin_left(10.0),
        )
        .run(TextRun::new("·").color(muted).margin_left(10.0))
        .run(
            TextRun::new(format!("{:.1}k", self.agent.tokens * progress))
                .color(theme.colors.status.warning)
                .margin_left(10.0),
        )
        .into_node()
    }
}

/// Bordered grid whose rows fade in one after another while numbers count up.
#[derive(Debug, Clone, PartialEq)]
pub struct DataTable {
    /// Columns, left to right.
    pub columns: Vec<DataColumn>,
    /// Rows, top to bottom.
    pub rows: Vec<DataRow>,
    /// Entrance delay of the table and of the first row.
    pub delay: u64,
    /// Frames between consecutive rows.
    pub row_stagger: u64,
    /// Count numbers up from zero.
    pub animate_values: bool,
    /// Caption above the grid.
    pub title: Option<String>,
    /// Font size; theme `md` when unset.
    pub font_size: Option<f64>,
}

impl DataTable {
    /// Table with the default stagger and animated values.
    pub fn new(columns: Vec<DataColumn>, rows: Vec<DataRow>, delay: u64) -> Self {
        Self {
            columns,
            rows,
            delay,
            row_stagger: 4,
            animate_values: true,
            title: None,
            font_size: None,
        }
    }

    /// Caption the table.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Override the font size.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_size = Some(px);
        self
    }

    fn cell(width: f64, padding: (f64, f64), first: bool, color: Color, text: String) -> BoxNode {
        let mut style = Style::new()
            .width(width)
            .padding(Edges::symmetric(padding.0, padding.1))
            .color(color);
        if !first {
            style = style.border_left(Border::new(2.0, GRID));
        }
        BoxNode::new(style).child(TextNode::plain(Style::new(), text))
    }

    fn row(&self, ctx: FrameCtx, theme: &Theme, i: usize, row: &DataRow) -> SceneNode {
        let local = ctx.frame - (self.delay + i as u64 * self.row_stagger) as f64;
        let opacity = interpolate(local, [0.0, 10.0], [0.0, 1.0], InterpolateOpts::clamp());
        let count = if self.animate_values {
            interpolate(
                local,
                [5.0, 25.0],
                [0.0, 1.0],
                InterpolateOpts::clamp().ease(Ease::OutQuad),
            )
        } else {
            1.0
        };

        let cells = self.columns.iter().enumerate().map(|(j, col)| {
            let text = match row.cells.get(j) {
                Some(CellValue::Number(n)) => format!("{}", (n * count).floor()),
                Some(CellValue::Text(s)) => s.clone(),
                None => String::new(),
            };
            let color = if j == 0 {
                row.color.unwrap_or(theme.colors.text.primary)
            } else {
                CELL_TEXT
            };
            Self::cell(col.width, (10.0, 20.0), j == 0, color, text)
        });

        let mut style = Style::new().row().opacity(opacity);
        if i + 1 < self.rows.len() {
            style = style.border_bottom(Border::new(2.0, GRID));
        }
        BoxNode::new(style).children(cells).into_node()
    }
}

impl Component for DataTable {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let header = BoxNode::new(
            Style::new()
                .row()
                .background(HEADER_BG)
                .border_bottom(Border::new(2.0, GRID)),
        )
        .children(self.columns.iter().enumerate().map(|(i, col)| {
            Self::cell(col.width, (12.0, 20.0), i == 0, theme.colors.text.muted, col.label.clone())
        }));

        let grid = BoxNode::new(
            Style::new()
                .column()
                .align(Align::Start)
                .border(Border::new(2.0, GRID))
                .radius(8.0)
                .clip(),
        )
        .child(header)
        .children(
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| self.row(ctx, theme, i, row)),
        );

        let caption = self.title.as_ref().map(|t| {
            TextNode::plain(
                Style::new()
                    .color(theme.colors.text.secondary)
                    .margin_bottom(12.0),
                t.clone(),
            )
        });

        BoxNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.md))
                .column()
                .align(Align::Start)
                .opacity(ctx.entrance(self.delay)),
        )
        .named("data_table")
        .maybe_child(caption)
        .child(grid)
        .into_node()
    }
}

/// "Progress: c/t (p%)" caption over a filled bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    /// Entrance delay.
    pub delay: u64,
    /// Completed units.
    pub completed: u32,
    /// Total units.
    pub total: u32,
    /// Bar width in px.
    pub bar_width: f64,
    /// Font size; theme `lg` when unset.
    pub font_size: Option<f64>,
}

impl ProgressBar {
    /// 400 px bar.
    pub fn new(delay: u64, completed: u32, total: u32) -> Self {
        Self {
            delay,
            completed,
            total,
            bar_width: 400.0,
            font_size: None,
        }
    }

    /// Rounded completion percentage; an empty total reads as 0%.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.completed) / f64::from(self.total) * 100.0).round() as u32
    }

    /// Filled width in px, capped at the bar width.
    pub fn fill_width(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        interpolate(
            self.completed.into(),
            [0.0, self.total.into()],
            [0.0, self.bar_width],
            InterpolateOpts::clamp_right(),
        )
    }
}

impl Component for ProgressBar {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let pct = self.percentage();
        let fill = if pct == 100 {
            theme.colors.status.success
        } else {
            theme.colors.status.info
        };
        let span = |run: TextRun| TextNode::new(Style::new()).run(run);

        let caption = BoxNode::new(
            Style::new()
                .row()
                .align(Align::Center)
                .gap(16.0)
                .margin_bottom(12.0),
        )
        .child(span(TextRun::new("Progress:").color(theme.colors.text.secondary)))
        .child(span(
            TextRun::new(format!("{}/{}", self.completed, self.total))
                .color(theme.colors.status.info),
        ))
        .child(span(TextRun::new(format!("({pct}%)")).color(theme.colors.text.muted)));

        let track = BoxNode::new(
            Style::new()
                .size(self.bar_width, 8.0)
                .background(GRID)
                .radius(4.0)
                .clip(),
        )
        .child(BoxNode::new(
            Style::new()
                .width(self.fill_width())
                .height_pct(100.0)
                .background(fill)
                .radius(4.0),
        ));

        BoxNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.lg))
                .column()
                .margin_top(24.0)
                .margin_bottom(16.0)
                .opacity(ctx.entrance(self.delay)),
        )
        .named("progress")
        .child(caption)
        .child(track)
        .into_node()
    }
}

/// "Step n: title" heading.
#[derive(Debug, Clone, PartialEq)]
pub struct StepHeader {
    /// Step number.
    pub step: u32,
    /// Heading text.
    pub title: String,
    /// Entrance delay.
    pub delay: u64,
    /// Font size; theme `lg` when unset.
    pub font_size: Option<f64>,
}

impl StepHeader {
    /// Build a heading.
    pub fn new(step: u32, title: impl Into<String>, delay: u64) -> Self {
        Self {
            step,
            title: title.into(),
            delay,
            font_size: None,
        }
    }
}

impl Component for StepHeader {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        TextNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.lg))
                .color(theme.colors.text.secondary)
                .margin_top(16.0)
                .margin_bottom(12.0)
                .opacity(ctx.entrance(self.delay)),
        )
        .run(TextRun::new(format!("Step {}:", self.step)).color(theme.colors.text.muted))
        .run(TextRun::new(format!(" {}", self.title)))
        .into_node()
    }
}

/// Checklist line: pending box, spinner while active, bouncing check once complete.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskListItem {
    /// Task to show.
    pub task: TaskItem,
    /// Frame at which the line slides in.
    pub start_frame: f64,
    /// Frame at which the task completes.
    pub complete_frame: f64,
    /// Spin while not yet complete.
    pub active: bool,
    /// Font size; theme `md` when unset.
    pub font_size: Option<f64>,
}

impl TaskListItem {
    /// Build a checklist line.
    pub fn new(task: TaskItem, start_frame: f64, complete_frame: f64, active: bool) -> Self {
        Self {
            task,
            start_frame,
            complete_frame,
            active,
            font_size: None,
        }
    }

    /// Spinner glyph at `frame`; advances every 4 frames.
    pub fn spinner_at(frame: f64) -> &'static str {
        SPINNER[(frame / 4.0).floor().rem_euclid(4.0) as usize]
    }
}

impl Component for TaskListItem {
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode {
        let entry = ctx.spring(self.start_frame, SpringPreset::Snappy).max(0.0);
        let complete = ctx.frame >= self.complete_frame;

        let mut icon_style = Style::new().width(24.0).text_align(TextAlign::Center);
        let (icon, icon_color) = if complete {
            let pop = ctx.spring(self.complete_frame, SpringPreset::Bouncy);
            icon_style = icon_style.scale(1.0 + pop * 0.2);
            ("✔", theme.colors.status.success)
        } else if self.active {
            (Self::spinner_at(ctx.frame), theme.colors.status.warning)
        } else {
            ("◻", PENDING_ICON)
        };
        let label_color = if complete {
            theme.colors.text.muted
        } else {
            theme.colors.text.secondary
        };
        let span = |run: TextRun| TextNode::new(Style::new()).run(run);

        BoxNode::new(
            mono(theme, self.font_size.unwrap_or(theme.typography.sizes.md))
                .margin_bottom(8.0)
                .opacity(entry)
                .translate_x((1.0 - entry) * 30.0)
                .row()
                .align(Align::Center)
                .gap(12.0),
        )
        .named(format!("task_{}", self.task.id))
        .child(TextNode::new(icon_style).run(TextRun::new(icon).color(icon_color)))
        .child(span(
            TextRun::new(format!("{} {}", self.task.category, self.task.id))
                .color(self.task.color)
                .weight(500),
        ))
        .child(span(TextRun::new("-").color(theme.colors.text.muted)))
        .child(span(
            TextRun::new(&self.task.label)
                .color(label_color)
                .strike(complete),
        ))
        .into_node()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/data.rs"]
mod tests;
