//! The registered compositions and their shared registry.
//!
//! A composition owns its theme, phase table and content data, and maps a frame to a complete
//! scene tree. Nothing is retained between frames.

pub(crate) mod kanban_sprint;
pub(crate) mod multi_agent;
pub(crate) mod security_fixes;
pub(crate) mod social_code_demo;
pub(crate) mod twelve_factor;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{ShowreelError, ShowreelResult};
use crate::scene::model::{BoxNode, SceneNode, Style};
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

pub use kanban_sprint::KanbanSprintShowcase;
pub use multi_agent::MultiAgentShowcase;
pub use security_fixes::SecurityFixesShowcase;
pub use social_code_demo::SocialCodeDemo;
pub use twelve_factor::TwelveFactorShowcase;

/// Static metadata of a composition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CompositionInfo {
    /// Registry id.
    pub id: CompositionId,
    /// Output size.
    pub canvas: Canvas,
    /// Frame rate.
    pub fps: Fps,
    /// Length in frames.
    pub duration: u64,
    /// Theme used when no override is given.
    pub default_theme: ThemeName,
}

impl CompositionInfo {
    const fn new(id: CompositionId, canvas: Canvas, duration: u64, theme: ThemeName) -> Self {
        Self {
            id,
            canvas,
            fps: Fps::whole(30),
            duration,
            default_theme: theme,
        }
    }

    /// Return `true` if `frame` lies inside `0..duration`.
    pub fn contains(&self, frame: FrameIndex) -> bool {
        frame.0 < self.duration
    }
}

/// A frame-addressable animated scene.
pub trait Composition: Send + Sync {
    /// Static metadata.
    fn info(&self) -> &CompositionInfo;

    /// Theme the scene is styled with.
    fn theme(&self) -> &Theme;

    /// Named event frames.
    fn phases(&self) -> &PhaseTable;

    /// Evaluate the scene at `frame`. Frames past the end are still evaluated.
    fn render(&self, frame: FrameIndex) -> SceneNode;

    /// Registry id.
    fn id(&self) -> CompositionId {
        self.info().id
    }
}

/// Identifier of a registered composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum CompositionId {
    /// Vertical clip typing a React component.
    SocialCodeDemo,
    /// Five review agents fanning out over a design.
    MultiAgentShowcase,
    /// Security ticket sweep with a progress bar.
    SecurityFixesShowcase,
    /// Sprint board beside the terminal.
    KanbanSprintShowcase,
    /// Mermaid mindmap of the twelve factors.
    TwelveFactorShowcase,
}

impl CompositionId {
    /// Every registered id, in listing order.
    pub const ALL: [Self; 5] = [
        Self::SocialCodeDemo,
        Self::MultiAgentShowcase,
        Self::SecurityFixesShowcase,
        Self::KanbanSprintShowcase,
        Self::TwelveFactorShowcase,
    ];

    /// Registry string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SocialCodeDemo => "SocialCodeDemo",
            Self::MultiAgentShowcase => "MultiAgentShowcase",
            Self::SecurityFixesShowcase => "SecurityFixesShowcase",
            Self::KanbanSprintShowcase => "KanbanSprintShowcase",
            Self::TwelveFactorShowcase => "TwelveFactorShowcase",
        }
    }

    /// Static metadata.
    pub fn info(self) -> CompositionInfo {
        match self {
            Self::SocialCodeDemo => social_code_demo::INFO,
            Self::MultiAgentShowcase => multi_agent::INFO,
            Self::SecurityFixesShowcase => security_fixes::INFO,
            Self::KanbanSprintShowcase => kanban_sprint::INFO,
            Self::TwelveFactorShowcase => twelve_factor::INFO,
        }
    }

    /// Instantiate the composition, optionally restyled with `theme`.
    pub fn build(self, theme: Option<Theme>) -> ShowreelResult<Box<dyn Composition>> {
        if let Some(t) = &theme {
            t.validate()?;
        }
        Ok(match self {
            Self::SocialCodeDemo => Box::new(SocialCodeDemo::new(theme)?),
            Self::MultiAgentShowcase => Box::new(MultiAgentShowcase::new(theme)?),
            Self::SecurityFixesShowcase => Box::new(SecurityFixesShowcase::new(theme)?),
            Self::KanbanSprintShowcase => Box::new(KanbanSprintShowcase::new(theme)?),
            Self::TwelveFactorShowcase => Box::new(TwelveFactorShowcase::new(theme)?),
        })
    }
}

impl fmt::Display for CompositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CompositionId {
    type Err = ShowreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|id| id.as_str()).collect();
                ShowreelError::composition(format!(
                    "unknown composition '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

/// Metadata of every registered composition.
pub fn registry() -> Vec<CompositionInfo> {
    CompositionId::ALL.into_iter().map(CompositionId::info).collect()
}

/// Canvas-sized root that every composition renders into.
pub(crate) fn stage(info: &CompositionInfo, content: SceneNode) -> SceneNode {
    BoxNode::new(
        Style::new()
            .size(info.canvas.width.into(), info.canvas.height.into())
            .relative()
            .clip(),
    )
    .named(info.id.as_str())
    .child(content)
    .into_node()
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/mod.rs"]
mod tests;
