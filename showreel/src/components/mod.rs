//! Reusable building blocks of the compositions.
//!
//! Leaf components are prop structs implementing [`Component`]; containers are functions taking
//! their already-rendered children. Every component receives the theme and the time context
//! explicitly.

pub(crate) mod data;
pub(crate) mod diagram;
pub(crate) mod highlight;
pub(crate) mod layout;
pub(crate) mod text;

use crate::eval::context::FrameCtx;
use crate::scene::model::{SceneNode, Style};
use crate::theme::Theme;

pub use data::{
    AgentData, AgentRow, CellValue, DataColumn, DataRow, DataTable, ProgressBar, StepHeader,
    TaskItem, TaskListItem,
};
pub use diagram::{ConnectionLine, connection_curve};
pub use highlight::{HighlightedChar, highlight_code};
pub use layout::{
    Branding, TerminalWindow, TitleBadge, background, scanlines, screen_flicker, sequence_layer,
    vignette,
};
pub use text::{CodeBlock, CommandLine, SessionHeader, StatusMessage, ThinkingDots, Typewriter};

/// A leaf component: props in, scene subtree out.
pub trait Component {
    /// Evaluate the component at `ctx.frame`.
    fn render(&self, ctx: FrameCtx, theme: &Theme) -> SceneNode;
}

pub(crate) fn mono(theme: &Theme, size: f64) -> Style {
    Style::new().font(theme.typography.mono.clone(), size)
}

pub(crate) fn system(theme: &Theme, size: f64) -> Style {
    Style::new().font(theme.typography.system.clone(), size)
}
