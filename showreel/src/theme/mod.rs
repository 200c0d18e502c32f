//! Visual themes: palettes, CRT effects, typography and terminal spacing.
//!
//! Themes are plain data passed explicitly to every component. The four built-ins are
//! available through [`ThemeName`]; custom themes load from JSON with the same shape as
//! `showreel theme --name <NAME>` prints.

pub(crate) mod color;
pub(crate) mod presets;

pub use color::Color;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{ShowreelError, ShowreelResult};
use crate::scene::model::{Border, LinearGradient, RadialGradient, Shadow, Tilt};

/// Complete visual theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Display name.
    pub name: String,
    /// Palette.
    pub colors: ThemeColors,
    /// CRT and glass effects.
    pub effects: ThemeEffects,
    /// Font stacks and size scale.
    pub typography: Typography,
    /// Window geometry.
    pub spacing: Spacing,
}

/// Theme palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    /// Flat background color.
    pub background: Color,
    /// Full-canvas background gradient.
    pub background_gradient: LinearGradient,
    /// Radial glows layered over the background.
    #[serde(default)]
    pub ambient_glows: Vec<RadialGradient>,
    /// Terminal window chrome.
    pub terminal: TerminalColors,
    /// Text roles.
    pub text: TextColors,
    /// Syntax highlighting roles.
    pub syntax: SyntaxColors,
    /// Status roles.
    pub status: StatusColors,
    /// Finding severity roles.
    pub severity: SeverityColors,
    /// Status message bullet.
    pub bullet: Color,
    /// Typing cursor.
    pub cursor: Color,
    /// Shell prompt symbol.
    pub prompt: Color,
}

/// Terminal window chrome colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminalColors {
    /// Window body.
    pub bg: Color,
    /// Title bar.
    pub title_bar_bg: Color,
    /// Window border.
    #[serde(default)]
    pub border: Option<Border>,
    /// Separator under the title bar.
    #[serde(default)]
    pub title_bar_border: Option<Border>,
    /// Window shadows and glows.
    #[serde(default)]
    pub glow: Vec<Shadow>,
}

/// Text colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextColors {
    /// Main text.
    pub primary: Color,
    /// Secondary text.
    pub secondary: Color,
    /// De-emphasized text.
    pub muted: Color,
    /// Accent highlights.
    pub accent: Color,
    /// Brand name.
    pub brand: Color,
}

/// Syntax highlighting colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntaxColors {
    /// Language keywords.
    pub keyword: Color,
    /// Framework identifiers.
    pub react: Color,
    /// String literals.
    pub string: Color,
    /// Angle brackets of markup.
    pub jsx: Color,
    /// Braces, parentheses and brackets.
    pub bracket: Color,
    /// `=>`.
    pub arrow: Color,
    /// Everything else.
    pub default: Color,
}

/// Status colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusColors {
    /// Success.
    pub success: Color,
    /// Error.
    pub error: Color,
    /// Warning.
    pub warning: Color,
    /// Informational.
    pub info: Color,
}

/// Finding severity colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityColors {
    /// Critical.
    pub critical: Color,
    /// High.
    pub high: Color,
    /// Medium.
    pub medium: Color,
    /// Low.
    pub low: Color,
}

/// Visual effects toggles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeEffects {
    /// CRT scanlines.
    pub scanlines: Scanlines,
    /// Darkened corners.
    pub vignette: Vignette,
    /// Tinted brightness flicker.
    pub flicker: Flicker,
    /// Frosted glass behind the window.
    pub backdrop: Backdrop,
    /// 3D window tilt.
    pub perspective: Perspective,
}

/// Scanline overlay settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scanlines {
    /// Line opacity; zero disables the overlay.
    pub opacity: f64,
    /// Gap between lines in px.
    pub spacing: f64,
}

/// Vignette overlay settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vignette {
    /// Whether the overlay is drawn.
    pub enabled: bool,
    /// Corner darkness.
    pub opacity: f64,
}

/// Screen flicker settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flicker {
    /// Whether the overlay is drawn.
    pub enabled: bool,
    /// Overlay tint.
    pub tint: Color,
    /// Opacity swing.
    pub intensity: f64,
}

/// Backdrop blur settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Backdrop {
    /// Blur radius in px; zero disables it.
    pub blur: f64,
}

/// Window tilt settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perspective {
    /// Whether the window is tilted.
    pub enabled: bool,
    /// Rotation about the x axis in degrees.
    pub rotate_x: f64,
    /// Rotation about the y axis in degrees.
    pub rotate_y: f64,
    /// Perspective distance in px.
    pub distance: f64,
}

impl Perspective {
    /// Tilt to apply, when enabled.
    pub fn tilt(&self) -> Option<Tilt> {
        self.enabled.then_some(Tilt {
            distance: self.distance,
            rotate_x_deg: self.rotate_x,
            rotate_y_deg: self.rotate_y,
        })
    }
}

/// Font stacks and size scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    /// Monospace stack.
    pub mono: String,
    /// UI stack.
    pub system: String,
    /// Size scale in px.
    pub sizes: FontSizes,
}

/// Font size scale in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    /// Extra small.
    pub xs: f64,
    /// Small.
    pub sm: f64,
    /// Medium.
    pub md: f64,
    /// Large.
    pub lg: f64,
    /// Extra large.
    pub xl: f64,
    /// Largest.
    pub xxl: f64,
}

/// Layout metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    /// Terminal window metrics.
    pub terminal: TerminalSpacing,
}

/// Terminal window metrics in px.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminalSpacing {
    /// Window width.
    pub width: f64,
    /// Window height.
    pub height: f64,
    /// Title bar height.
    pub title_bar_height: f64,
    /// Content padding.
    pub padding: f64,
    /// Corner radius.
    pub border_radius: f64,
    /// Traffic light diameter.
    pub traffic_light_size: f64,
}

/// Built-in theme identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Amber CRT terminal.
    Terminal,
    /// Teal glass.
    Ocean,
    /// Purple glass.
    Modern,
    /// Messenger blue, flat.
    Telegram,
}

impl ThemeName {
    /// Every built-in, in listing order.
    pub const ALL: [Self; 4] = [Self::Terminal, Self::Ocean, Self::Modern, Self::Telegram];

    /// Identifier used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Terminal => "terminal",
            Self::Ocean => "ocean",
            Self::Modern => "modern",
            Self::Telegram => "telegram",
        }
    }

    /// Build the theme.
    pub fn theme(self) -> Theme {
        match self {
            Self::Terminal => presets::terminal(),
            Self::Ocean => presets::ocean(),
            Self::Modern => presets::modern(),
            Self::Telegram => presets::telegram(),
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ThemeName {
    type Err = ShowreelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|n| n.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ShowreelError::config(format!(
                    "unknown theme '{s}' (expected one of: terminal, ocean, modern, telegram)"
                ))
            })
    }
}

impl Theme {
    /// Parse a theme from JSON.
    pub fn from_json_str(s: &str) -> ShowreelResult<Self> {
        let theme: Self = serde_json::from_str(s)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Parse a theme from a JSON reader.
    pub fn from_reader(r: impl std::io::Read) -> ShowreelResult<Self> {
        let theme: Self = serde_json::from_reader(r)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Load a theme from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> ShowreelResult<Self> {
        let path = path.as_ref();
        let f = std::fs::File::open(path).map_err(|e| {
            ShowreelError::Other(anyhow::Error::new(e).context(format!(
                "open theme '{}'",
                path.display()
            )))
        })?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    /// Same theme with the window tilt and its snappy entrance switched off.
    pub fn with_flat_perspective(mut self) -> Self {
        self.effects.perspective.enabled = false;
        self
    }

    /// Check geometry and effect ranges.
    pub fn validate(&self) -> ShowreelResult<()> {
        let t = &self.spacing.terminal;
        for (name, v) in [
            ("spacing.terminal.width", t.width),
            ("spacing.terminal.height", t.height),
            ("spacing.terminal.title_bar_height", t.title_bar_height),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(ShowreelError::config(format!("{name} must be > 0")));
            }
        }
        if t.title_bar_height >= t.height {
            return Err(ShowreelError::config(
                "spacing.terminal.title_bar_height must be smaller than the window height",
            ));
        }
        let s = &self.effects.scanlines;
        if !(0.0..=1.0).contains(&s.opacity) || s.spacing < 0.0 {
            return Err(ShowreelError::config(
                "effects.scanlines needs opacity in [0,1] and spacing >= 0",
            ));
        }
        let p = &self.effects.perspective;
        if p.enabled && (!p.distance.is_finite() || p.distance <= 0.0) {
            return Err(ShowreelError::config(
                "effects.perspective.distance must be > 0 when enabled",
            ));
        }
        if self.typography.sizes.xs <= 0.0 {
            return Err(ShowreelError::config("typography sizes must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/theme/mod.rs"]
mod tests;
