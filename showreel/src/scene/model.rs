use kurbo::{Affine, Vec2};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::theme::color::Color;

/// Node of the declarative scene tree handed to the rendering host.
///
/// All animated attributes are already resolved for the frame; the host only lays out and
/// rasterizes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneNode {
    /// Container with style and children.
    Box(BoxNode),
    /// Inline text made of styled runs.
    Text(TextNode),
    /// Stroked vector path.
    Path(PathNode),
}

impl SceneNode {
    /// Style of this node, when it has one.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::Box(b) => Some(&b.style),
            Self::Text(t) => Some(&t.style),
            Self::Path(_) => None,
        }
    }

    /// Direct children (empty for leaves).
    pub fn children(&self) -> &[SceneNode] {
        match self {
            Self::Box(b) => &b.children,
            _ => &[],
        }
    }

    /// Total node count, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children().iter().map(Self::node_count).sum::<usize>()
    }

    /// Depth-first search for a box by name.
    pub fn find(&self, name: &str) -> Option<&SceneNode> {
        if let Self::Box(b) = self
            && b.name.as_deref() == Some(name)
        {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(name))
    }

    /// Concatenated text of every run under this node, in tree order.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Box(b) => b.children.iter().for_each(|c| c.collect_text(out)),
            Self::Text(t) => t.runs.iter().for_each(|r| out.push_str(&r.text)),
            Self::Path(_) => {}
        }
    }
}

/// Container node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxNode {
    /// Debug/lookup name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resolved style.
    #[serde(default, skip_serializing_if = "Style::is_default")]
    pub style: Style,
    /// Children in paint order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SceneNode>,
}

/// Text node: a block of inline runs sharing the block style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextNode {
    /// Block style (font, color, spacing).
    #[serde(default, skip_serializing_if = "Style::is_default")]
    pub style: Style,
    /// Inline runs in reading order.
    pub runs: Vec<TextRun>,
}

/// Inline span of text. Unset attributes inherit from the enclosing [`TextNode`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// Run text; may contain newlines.
    pub text: String,
    /// Color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Font weight (CSS numeric).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// Font size in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Outer spacing in px.
    #[serde(default, skip_serializing_if = "Edges::is_zero")]
    pub margin: Edges,
    /// Background fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Color>,
    /// Text shadows, painted in order.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub text_shadows: SmallVec<[Shadow; 1]>,
    /// Fixed inline width in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Inline-block size in px, used for block cursors with empty text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<Vec2>,
    /// Uniform scale factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Strike-through decoration.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub strike: bool,
}

/// Stroked vector path in the parent's coordinate space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathNode {
    /// SVG path data.
    pub d: String,
    /// Arc length of the path in px.
    pub length: f64,
    /// Stroke paint.
    pub stroke: Stroke,
    /// Dash pattern revealing the path progressively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
    /// Opacity in `0..=1`.
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub opacity: f64,
}

/// Stroke paint and width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Color.
    pub color: Color,
    /// Width.
    pub width: f64,
    /// Gaussian glow radius around the stroke.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub glow: f64,
}

/// Single-dash pattern `dasharray = array`, `dashoffset = offset`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    /// Dash length in px.
    pub array: f64,
    /// Offset.
    pub offset: f64,
}

/// Resolved visual and layout attributes of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Opacity in `0..=1`.
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub opacity: f64,
    /// Visual transform; does not affect layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Transform>,
    /// Positioning scheme.
    #[serde(default, skip_serializing_if = "Position::is_flow")]
    pub position: Position,
    /// Width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<Dimension>,
    /// Height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Minimum width in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    /// Flex grow factor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flex_grow: Option<f64>,
    /// Inner spacing in px.
    #[serde(default, skip_serializing_if = "Edges::is_zero")]
    pub padding: Edges,
    /// Outer spacing in px.
    #[serde(default, skip_serializing_if = "Edges::is_zero")]
    pub margin: Edges,
    /// Flex layout of the children; block flow when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Background fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Paint>,
    /// Per-side borders.
    #[serde(default, skip_serializing_if = "BorderSides::is_none")]
    pub border: BorderSides,
    /// Corner radius.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<Dimension>,
    /// Box shadows, painted in order.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub shadows: SmallVec<[Shadow; 2]>,
    /// Font settings inherited by text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Text shadows, painted in order.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub text_shadows: SmallVec<[Shadow; 1]>,
    /// Clip children to the padding box.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub clip: bool,
    /// Backdrop blur radius in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_blur: Option<f64>,
    /// Stacking order among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            transform: None,
            position: Position::Flow,
            width: None,
            height: None,
            min_width: None,
            flex_grow: None,
            padding: Edges::ZERO,
            margin: Edges::ZERO,
            layout: None,
            background: None,
            border: BorderSides::default(),
            radius: None,
            shadows: SmallVec::new(),
            font: None,
            color: None,
            text_shadows: SmallVec::new(),
            clip: false,
            backdrop_blur: None,
            z_index: None,
        }
    }
}

impl Style {
    /// Return `true` when nothing differs from the default style.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Length in px or percent of the containing block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// Absolute pixels.
    Px(f64),
    /// Percent of the containing block.
    Percent(f64),
}

impl Serialize for Dimension {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Px(v) => serializer.serialize_f64(*v),
            Self::Percent(p) => serializer.serialize_str(&format!("{p}%")),
        }
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) => Ok(Self::Px(v)),
            Repr::Str(s) => {
                let s = s.trim();
                let (num, pct) = match s.strip_suffix('%') {
                    Some(n) => (n, true),
                    None => (s.strip_suffix("px").unwrap_or(s), false),
                };
                let v: f64 = num
                    .trim()
                    .parse()
                    .map_err(|_| serde::de::Error::custom(format!("invalid length \"{s}\"")))?;
                Ok(if pct { Self::Percent(v) } else { Self::Px(v) })
            }
        }
    }
}

/// Box edges in px (padding, margin).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Edges {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Edges {
    /// All edges zero.
    pub const ZERO: Self = Self::all(0.0);

    /// Same value on every edge.
    pub const fn all(v: f64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    /// CSS two-value shorthand: `vertical horizontal`.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Return `true` when every edge is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl<'de> Deserialize<'de> for Edges {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            All(f64),
            Obj {
                #[serde(default)]
                top: f64,
                #[serde(default)]
                right: f64,
                #[serde(default)]
                bottom: f64,
                #[serde(default)]
                left: f64,
            },
        }

        match Repr::deserialize(deserializer)? {
            Repr::All(v) => Ok(Self::all(v)),
            Repr::Obj {
                top,
                right,
                bottom,
                left,
            } => Ok(Self {
                top,
                right,
                bottom,
                left,
            }),
        }
    }
}

/// Positioning scheme of a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Normal flow.
    #[default]
    Flow,
    /// Normal flow, and the containing block for absolute descendants.
    Relative,
    /// Removed from flow, placed by insets against the containing block.
    Absolute(Inset),
}

impl Position {
    fn is_flow(&self) -> bool {
        matches!(self, Self::Flow)
    }
}

/// Absolute-position insets; unset sides are auto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Inset {
    /// Top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Dimension>,
    /// Right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Dimension>,
    /// Bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Dimension>,
    /// Left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Dimension>,
}

impl Inset {
    /// Zero on every side: cover the containing block.
    pub const FILL: Self = Self {
        top: Some(Dimension::Px(0.0)),
        right: Some(Dimension::Px(0.0)),
        bottom: Some(Dimension::Px(0.0)),
        left: Some(Dimension::Px(0.0)),
    };

    /// Top-left anchor in px.
    pub const fn at(left: f64, top: f64) -> Self {
        Self {
            top: Some(Dimension::Px(top)),
            right: None,
            bottom: None,
            left: Some(Dimension::Px(left)),
        }
    }
}

/// Flex layout of a container's children.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    /// Main axis.
    #[serde(default)]
    pub direction: LayoutDirection,
    /// Gap between children in px.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub gap: f64,
    /// Cross-axis alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align_items: Option<Align>,
    /// Main-axis distribution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub justify_content: Option<Justify>,
    /// Wrap children onto new lines.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub wrap: bool,
}

/// Main axis of a flex container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutDirection {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
}

/// Cross-axis alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Pack at the start.
    Start,
    /// Pack at the end.
    End,
    /// Center.
    Center,
    /// Stretch to fill.
    Stretch,
}

/// Main-axis distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Justify {
    /// Pack at the start.
    Start,
    /// Pack at the end.
    End,
    /// Center.
    Center,
    /// Distribute with equal gaps between.
    SpaceBetween,
}

/// 2D transform plus an optional 3D tilt the host applies around the node center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Translation in px.
    #[serde(default, skip_serializing_if = "is_zero_vec")]
    pub translate: Vec2,
    /// Translation as a fraction of the node's own size (CSS `translate(-50%, ..)`).
    #[serde(default, skip_serializing_if = "is_zero_vec")]
    pub translate_self: Vec2,
    /// Uniform scale factor.
    #[serde(default = "one", skip_serializing_if = "is_one")]
    pub scale: f64,
    /// 3D tilt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tilt: Option<Tilt>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            translate_self: Vec2::ZERO,
            scale: 1.0,
            tilt: None,
        }
    }
}

impl Transform {
    /// Pixel-space 2D part about the node origin: translate, then scale.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Return `true` when the transform does nothing.
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

/// Perspective tilt (CSS `perspective() rotateX() rotateY()`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tilt {
    /// Perspective distance in px.
    pub distance: f64,
    /// Rotation about the x axis in degrees.
    pub rotate_x_deg: f64,
    /// Rotation about the y axis in degrees.
    pub rotate_y_deg: f64,
}

/// Fill of a box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Paint {
    /// Solid color.
    Solid {
        /// Fill color.
        color: Color,
    },
    /// Linear gradient.
    Linear(LinearGradient),
    /// Radial gradient.
    Radial(RadialGradient),
    /// Repeating hard-edged stripes: `line` px of `color` every `period` px.
    Stripes {
        /// Stripe color.
        color: Color,
        /// Stripe thickness in px.
        line: f64,
        /// Repeat period in px.
        period: f64,
        /// Stripe direction in degrees.
        angle_deg: f64,
    },
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid { color }
    }
}

impl From<LinearGradient> for Paint {
    fn from(g: LinearGradient) -> Self {
        Self::Linear(g)
    }
}

impl From<RadialGradient> for Paint {
    fn from(g: RadialGradient) -> Self {
        Self::Radial(g)
    }
}

/// Gradient color stop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Color.
    pub color: Color,
    /// Position along the gradient line, `0..=1`.
    pub offset: f64,
}

impl GradientStop {
    /// Stop at `offset`.
    pub const fn new(color: Color, offset: f64) -> Self {
        Self { color, offset }
    }
}

/// CSS-style linear gradient; `angle_deg` 180 runs top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Gradient angle in degrees.
    pub angle_deg: f64,
    /// Color stops in offset order.
    pub stops: Vec<GradientStop>,
}

/// Ending shape of a radial gradient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadialShape {
    /// Circular.
    Circle,
    /// Elliptical, matching the box aspect.
    #[default]
    Ellipse,
}

/// CSS-style radial gradient sized to the farthest corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    /// Gradient shape.
    #[serde(default)]
    pub shape: RadialShape,
    /// Center as fractions of the box size.
    pub center: Vec2,
    /// Color stops in offset order.
    pub stops: Vec<GradientStop>,
}

/// Box or text shadow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    /// Offset.
    #[serde(default, skip_serializing_if = "is_zero_vec")]
    pub offset: Vec2,
    /// Blur radius in px.
    pub blur: f64,
    /// Spread in px.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub spread: f64,
    /// Color.
    pub color: Color,
    /// Draw inside the box.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub inset: bool,
}

impl Shadow {
    /// Centered glow of `blur` px.
    pub const fn glow(blur: f64, color: Color) -> Self {
        Self {
            offset: Vec2::ZERO,
            blur,
            spread: 0.0,
            color,
            inset: false,
        }
    }

    /// Offset drop shadow.
    pub const fn drop(dx: f64, dy: f64, blur: f64, color: Color) -> Self {
        Self {
            offset: Vec2::new(dx, dy),
            blur,
            spread: 0.0,
            color,
            inset: false,
        }
    }

    /// Same shadow drawn inside the box.
    pub const fn inset(self) -> Self {
        Self {
            inset: true,
            ..self
        }
    }
}

/// Solid border line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    /// Width.
    pub width: f64,
    /// Color.
    pub color: Color,
}

impl Border {
    /// Border of `width` px.
    pub const fn new(width: f64, color: Color) -> Self {
        Self { width, color }
    }
}

/// Per-side borders; `None` sides have no border.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderSides {
    /// Top edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<Border>,
    /// Right edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<Border>,
    /// Bottom edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<Border>,
    /// Left edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<Border>,
}

impl BorderSides {
    /// Same border on every side.
    pub const fn all(b: Border) -> Self {
        Self {
            top: Some(b),
            right: Some(b),
            bottom: Some(b),
            left: Some(b),
        }
    }

    /// Return `true` when no side has a border.
    pub fn is_none(&self) -> bool {
        self.top.is_none() && self.right.is_none() && self.bottom.is_none() && self.left.is_none()
    }
}

/// Font settings. Unset fields inherit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// CSS font-family list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    /// Font size in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    /// Font weight (CSS numeric).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    /// Multiple of the font size.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    /// Extra spacing between letters in px.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f64>,
    /// Horizontal text alignment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
    /// Preserve whitespace and newlines, wrapping long lines.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub pre_wrap: bool,
    /// Render text uppercased.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub uppercase: bool,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Center.
    Center,
    /// Right aligned.
    Right,
}

fn one() -> f64 {
    1.0
}

fn is_one(v: &f64) -> bool {
    *v == 1.0
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

fn is_zero_vec(v: &Vec2) -> bool {
    *v == Vec2::ZERO
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
