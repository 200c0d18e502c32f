use kurbo::Vec2;

use crate::scene::model::{
    Border, GradientStop, LinearGradient, RadialGradient, RadialShape, Shadow,
};
use crate::theme::color::Color;
use crate::theme::{
    Backdrop, Flicker, FontSizes, Perspective, Scanlines, SeverityColors, Spacing, StatusColors,
    SyntaxColors, TerminalColors, TerminalSpacing, TextColors, Theme, ThemeColors, ThemeEffects,
    Typography, Vignette,
};

const MONO: &str = "Monaco, Consolas, monospace";
const SYSTEM: &str = "system-ui, -apple-system, sans-serif";

fn vertical_gradient(stops: &[(u32, f64)]) -> LinearGradient {
    LinearGradient {
        angle_deg: 180.0,
        stops: stops
            .iter()
            .map(|&(rgb, at)| GradientStop::new(Color::hex(rgb), at))
            .collect(),
    }
}

fn glow(shape: RadialShape, cx: f64, cy: f64, color: Color, fade_at: f64) -> RadialGradient {
    RadialGradient {
        shape,
        center: Vec2::new(cx, cy),
        stops: vec![
            GradientStop::new(color, 0.0),
            GradientStop::new(Color::TRANSPARENT, fade_at),
        ],
    }
}

fn amber_text() -> TextColors {
    TextColors {
        primary: Color::hex(0xffbe76),
        secondary: Color::hex(0x888888),
        muted: Color::hex(0x666666),
        accent: Color::hex(0xa29bfe),
        brand: Color::hex(0xd4a574),
    }
}

fn amber_syntax() -> SyntaxColors {
    SyntaxColors {
        keyword: Color::hex(0xff6b6b),
        react: Color::hex(0x4ecdc4),
        string: Color::hex(0xf9ca24),
        jsx: Color::hex(0xa29bfe),
        bracket: Color::hex(0xfdcb6e),
        arrow: Color::hex(0xff6b6b),
        default: Color::hex(0xffbe76),
    }
}

fn amber_status() -> StatusColors {
    StatusColors {
        success: Color::hex(0x27ca3f),
        error: Color::hex(0xff6b6b),
        warning: Color::hex(0xfdcb6e),
        info: Color::hex(0x4ecdc4),
    }
}

fn amber_severity() -> SeverityColors {
    SeverityColors {
        critical: Color::hex(0xff6b6b),
        high: Color::hex(0xff9f43),
        medium: Color::hex(0xfdcb6e),
        low: Color::hex(0x888888),
    }
}

fn flat_effects(blur: f64) -> ThemeEffects {
    ThemeEffects {
        scanlines: Scanlines {
            opacity: 0.0,
            spacing: 0.0,
        },
        vignette: Vignette {
            enabled: false,
            opacity: 0.0,
        },
        flicker: Flicker {
            enabled: false,
            tint: Color::TRANSPARENT,
            intensity: 0.0,
        },
        backdrop: Backdrop { blur },
        perspective: Perspective {
            enabled: false,
            rotate_x: 0.0,
            rotate_y: 0.0,
            distance: 2000.0,
        },
    }
}

/// Amber CRT look for vertical social clips.
pub(crate) fn terminal() -> Theme {
    let amber = Color::rgba8(255, 180, 100, 1.0);
    Theme {
        name: "terminal".to_owned(),
        colors: ThemeColors {
            background: Color::hex(0x0d0d0d),
            background_gradient: vertical_gradient(&[(0x0d0d0d, 0.0), (0x0d0d0d, 1.0)]),
            ambient_glows: vec![glow(
                RadialShape::Circle,
                0.5,
                0.5,
                amber.with_alpha(0.1),
                0.7,
            )],
            terminal: TerminalColors {
                bg: Color::hex(0x0a0a0a),
                title_bar_bg: Color::hex(0x1a1a1a),
                border: Some(Border::new(3.0, Color::hex(0x333333))),
                title_bar_border: None,
                glow: vec![
                    Shadow::glow(60.0, amber.with_alpha(0.3)),
                    Shadow::glow(100.0, amber.with_alpha(0.05)).inset(),
                ],
            },
            text: amber_text(),
            syntax: amber_syntax(),
            status: amber_status(),
            severity: amber_severity(),
            bullet: Color::hex(0xa29bfe),
            cursor: Color::hex(0xffbe76),
            prompt: Color::hex(0x27ca3f),
        },
        effects: ThemeEffects {
            scanlines: Scanlines {
                opacity: 0.15,
                spacing: 2.0,
            },
            vignette: Vignette {
                enabled: true,
                opacity: 0.5,
            },
            flicker: Flicker {
                enabled: true,
                tint: Color::rgba8(255, 200, 100, 0.02),
                intensity: 0.02,
            },
            ..flat_effects(0.0)
        },
        typography: Typography {
            mono: MONO.to_owned(),
            system: SYSTEM.to_owned(),
            sizes: FontSizes {
                xs: 18.0,
                sm: 22.0,
                md: 24.0,
                lg: 32.0,
                xl: 38.0,
                xxl: 44.0,
            },
        },
        spacing: Spacing {
            terminal: TerminalSpacing {
                width: 980.0,
                height: 1400.0,
                title_bar_height: 50.0,
                padding: 30.0,
                border_radius: 20.0,
                traffic_light_size: 16.0,
            },
        },
    }
}

/// Frosted, tilted window over a colored gradient; shared by `ocean` and `modern`.
fn glass(
    name: &str,
    background: u32,
    gradient: LinearGradient,
    glows: [(u8, u8, u8); 3],
) -> Theme {
    let [top, left, right] = glows;
    Theme {
        name: name.to_owned(),
        colors: ThemeColors {
            background: Color::hex(background),
            background_gradient: gradient,
            ambient_glows: vec![
                glow(
                    RadialShape::Ellipse,
                    0.5,
                    -0.2,
                    Color::rgba8(top.0, top.1, top.2, 0.15),
                    0.6,
                ),
                glow(
                    RadialShape::Ellipse,
                    0.3,
                    0.8,
                    Color::rgba8(left.0, left.1, left.2, 0.1),
                    0.4,
                ),
                glow(
                    RadialShape::Ellipse,
                    0.7,
                    0.9,
                    Color::rgba8(right.0, right.1, right.2, 0.08),
                    0.35,
                ),
            ],
            terminal: TerminalColors {
                bg: Color::rgba8(10, 10, 10, 0.55),
                title_bar_bg: Color::rgba8(20, 20, 20, 0.5),
                border: Some(Border::new(1.0, Color::WHITE.with_alpha(0.1))),
                title_bar_border: Some(Border::new(1.0, Color::WHITE.with_alpha(0.05))),
                glow: vec![
                    Shadow::drop(0.0, 40.0, 100.0, Color::BLACK.with_alpha(0.5)),
                    Shadow::glow(1.0, Color::WHITE.with_alpha(0.1)),
                ],
            },
            text: amber_text(),
            syntax: amber_syntax(),
            status: amber_status(),
            severity: amber_severity(),
            bullet: Color::hex(0xa29bfe),
            cursor: Color::hex(0xffbe76),
            prompt: Color::hex(0x27ca3f),
        },
        effects: ThemeEffects {
            scanlines: Scanlines {
                opacity: 0.06,
                spacing: 3.0,
            },
            perspective: Perspective {
                enabled: true,
                rotate_x: 8.0,
                rotate_y: -3.0,
                distance: 2000.0,
            },
            ..flat_effects(30.0)
        },
        typography: Typography {
            mono: MONO.to_owned(),
            system: SYSTEM.to_owned(),
            sizes: FontSizes {
                xs: 22.0,
                sm: 26.0,
                md: 30.0,
                lg: 34.0,
                xl: 38.0,
                xxl: 44.0,
            },
        },
        spacing: Spacing {
            terminal: TerminalSpacing {
                width: 1820.0,
                height: 980.0,
                title_bar_height: 56.0,
                padding: 48.0,
                border_radius: 20.0,
                traffic_light_size: 18.0,
            },
        },
    }
}

/// Teal glass.
pub(crate) fn ocean() -> Theme {
    glass(
        "ocean",
        0x0a1628,
        vertical_gradient(&[
            (0x0a1628, 0.0),
            (0x0d2137, 0.25),
            (0x0f4c75, 0.5),
            (0x1a7f8e, 0.75),
            (0x3dc1d3, 1.0),
        ]),
        [(100, 200, 255), (60, 180, 200), (80, 200, 220)],
    )
}

/// Purple glass.
pub(crate) fn modern() -> Theme {
    glass(
        "modern",
        0x0f0a1a,
        vertical_gradient(&[
            (0x0f0a1a, 0.0),
            (0x1a1028, 0.25),
            (0x2d1f4a, 0.5),
            (0x4a2c7a, 0.75),
            (0x6b3fa0, 1.0),
        ]),
        [(150, 100, 255), (180, 100, 255), (200, 150, 255)],
    )
}

pub(crate) fn telegram() -> Theme {
    let blue = Color::rgba8(42, 171, 238, 1.0);
    Theme {
        name: "telegram".to_owned(),
        colors: ThemeColors {
            background: Color::hex(0x0f1923),
            background_gradient: vertical_gradient(&[
                (0x0f1923, 0.0),
                (0x0d1620, 0.3),
                (0x162230, 0.6),
                (0x1a2d42, 1.0),
            ]),
            ambient_glows: vec![
                glow(RadialShape::Ellipse, 0.5, 0.3, blue.with_alpha(0.12), 0.6),
                glow(RadialShape::Ellipse, 0.7, 0.7, blue.with_alpha(0.06), 0.4),
            ],
            terminal: TerminalColors {
                bg: Color::rgba8(10, 15, 20, 0.65),
                title_bar_bg: Color::rgba8(15, 20, 28, 0.6),
                border: Some(Border::new(1.0, blue.with_alpha(0.15))),
                title_bar_border: Some(Border::new(1.0, blue.with_alpha(0.08))),
                glow: vec![
                    Shadow::drop(0.0, 40.0, 100.0, Color::BLACK.with_alpha(0.5)),
                    Shadow::glow(1.0, blue.with_alpha(0.2)),
                ],
            },
            text: TextColors {
                primary: Color::hex(0xffffff),
                secondary: Color::hex(0x8b9daf),
                muted: Color::hex(0x5a6a7a),
                accent: Color::hex(0x2aabee),
                brand: Color::hex(0x2aabee),
            },
            syntax: SyntaxColors {
                keyword: Color::hex(0x2aabee),
                react: Color::hex(0x34d058),
                string: Color::hex(0xffd866),
                jsx: Color::hex(0x2aabee),
                bracket: Color::hex(0x8b9daf),
                arrow: Color::hex(0xff4757),
                default: Color::hex(0xffffff),
            },
            status: StatusColors {
                success: Color::hex(0x34d058),
                error: Color::hex(0xff4757),
                warning: Color::hex(0xffd866),
                info: Color::hex(0x2aabee),
            },
            severity: SeverityColors {
                critical: Color::hex(0xff4757),
                high: Color::hex(0xff6b6b),
                medium: Color::hex(0xffd866),
                low: Color::hex(0x5a6a7a),
            },
            bullet: Color::hex(0x2aabee),
            cursor: Color::hex(0x2aabee),
            prompt: Color::hex(0x34d058),
        },
        effects: flat_effects(20.0),
        typography: Typography {
            mono: MONO.to_owned(),
            system: SYSTEM.to_owned(),
            sizes: FontSizes {
                xs: 22.0,
                sm: 26.0,
                md: 30.0,
                lg: 34.0,
                xl: 38.0,
                xxl: 44.0,
            },
        },
        spacing: Spacing {
            terminal: TerminalSpacing {
                width: 1200.0,
                height: 920.0,
                title_bar_height: 48.0,
                padding: 36.0,
                border_radius: 16.0,
                traffic_light_size: 16.0,
            },
        },
    }
}
