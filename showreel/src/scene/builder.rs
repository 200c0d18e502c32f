//! Fluent construction of scene nodes.
//!
//! Every setter consumes and returns `self`, so component code reads top-down:
//!
//! ```
//! use showreel::scene::{BoxNode, Style, TextRun, TextNode};
//! use showreel::Color;
//!
//! let node = BoxNode::new(Style::new().row().gap(12.0).opacity(0.5))
//!     .child(TextNode::new(Style::new().font_size(24.0)).run(TextRun::new("hi").color(Color::WHITE)))
//!     .into_node();
//! assert_eq!(node.text_content(), "hi");
//! ```

use kurbo::Vec2;

use crate::scene::model::{
    Align, Border, BoxNode, Dimension, Edges, Font, Inset, Justify, Layout, LayoutDirection,
    Paint, PathNode, Position, SceneNode, Shadow, Style, TextAlign, TextNode, TextRun, Tilt,
    Transform,
};
use crate::theme::color::Color;

impl Style {
    /// Default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiply opacity; the factor is clamped to `0..=1` as CSS does.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity *= opacity.clamp(0.0, 1.0);
        self
    }

    fn transform_mut(&mut self) -> &mut Transform {
        self.transform.get_or_insert_with(Transform::default)
    }

    /// Translate by `(x, y)` px.
    pub fn translate(mut self, x: f64, y: f64) -> Self {
        self.transform_mut().translate += Vec2::new(x, y);
        self
    }

    /// Translate horizontally by `x` px.
    pub fn translate_x(self, x: f64) -> Self {
        self.translate(x, 0.0)
    }

    /// Translate by fractions of the node's own size.
    pub fn translate_self(mut self, fx: f64, fy: f64) -> Self {
        self.transform_mut().translate_self = Vec2::new(fx, fy);
        self
    }

    /// Multiply scale.
    pub fn scale(mut self, scale: f64) -> Self {
        self.transform_mut().scale *= scale;
        self
    }

    /// Apply a perspective tilt.
    pub fn tilt(mut self, tilt: Tilt) -> Self {
        self.transform_mut().tilt = Some(tilt);
        self
    }

    /// Absolutely position with the given insets.
    pub fn absolute(mut self, inset: Inset) -> Self {
        self.position = Position::Absolute(inset);
        self
    }

    /// Absolutely cover the containing block.
    pub fn fill(self) -> Self {
        self.absolute(Inset::FILL)
    }

    /// Become the containing block for absolute descendants.
    pub fn relative(mut self) -> Self {
        self.position = Position::Relative;
        self
    }

    /// Width in px.
    pub fn width(mut self, px: f64) -> Self {
        self.width = Some(Dimension::Px(px));
        self
    }

    /// Height in px.
    pub fn height(mut self, px: f64) -> Self {
        self.height = Some(Dimension::Px(px));
        self
    }

    /// Width and height in px.
    pub fn size(self, w: f64, h: f64) -> Self {
        self.width(w).height(h)
    }

    /// Width as a percent of the containing block.
    pub fn width_pct(mut self, pct: f64) -> Self {
        self.width = Some(Dimension::Percent(pct));
        self
    }

    /// Height as a percent of the containing block.
    pub fn height_pct(mut self, pct: f64) -> Self {
        self.height = Some(Dimension::Percent(pct));
        self
    }

    /// Minimum width in px.
    pub fn min_width(mut self, px: f64) -> Self {
        self.min_width = Some(px);
        self
    }

    /// Flex grow factor.
    pub fn grow(mut self, factor: f64) -> Self {
        self.flex_grow = Some(factor);
        self
    }

    /// Inner spacing.
    pub fn padding(mut self, edges: Edges) -> Self {
        self.padding = edges;
        self
    }

    /// Outer spacing.
    pub fn margin(mut self, edges: Edges) -> Self {
        self.margin = edges;
        self
    }

    /// Top margin in px.
    pub fn margin_top(mut self, px: f64) -> Self {
        self.margin.top = px;
        self
    }

    /// Bottom margin in px.
    pub fn margin_bottom(mut self, px: f64) -> Self {
        self.margin.bottom = px;
        self
    }

    /// Left margin in px.
    pub fn margin_left(mut self, px: f64) -> Self {
        self.margin.left = px;
        self
    }

    /// Right margin in px.
    pub fn margin_right(mut self, px: f64) -> Self {
        self.margin.right = px;
        self
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.layout.get_or_insert_with(Layout::default)
    }

    /// Flex row.
    pub fn row(mut self) -> Self {
        self.layout_mut().direction = LayoutDirection::Row;
        self
    }

    /// Flex column.
    pub fn column(mut self) -> Self {
        self.layout_mut().direction = LayoutDirection::Column;
        self
    }

    /// Gap between flex children.
    pub fn gap(mut self, px: f64) -> Self {
        self.layout_mut().gap = px;
        self
    }

    /// Cross-axis alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.layout_mut().align_items = Some(align);
        self
    }

    /// Main-axis distribution.
    pub fn justify(mut self, justify: Justify) -> Self {
        self.layout_mut().justify_content = Some(justify);
        self
    }

    /// Center children on both axes.
    pub fn center(self) -> Self {
        self.align(Align::Center).justify(Justify::Center)
    }

    /// Wrap flex children.
    pub fn wrap(mut self) -> Self {
        self.layout_mut().wrap = true;
        self
    }

    /// Background fill.
    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = Some(paint.into());
        self
    }

    /// Border on every side.
    pub fn border(mut self, border: Border) -> Self {
        self.border = crate::scene::model::BorderSides::all(border);
        self
    }

    /// Top border.
    pub fn border_top(mut self, border: Border) -> Self {
        self.border.top = Some(border);
        self
    }

    /// Bottom border.
    pub fn border_bottom(mut self, border: Border) -> Self {
        self.border.bottom = Some(border);
        self
    }

    /// Left border.
    pub fn border_left(mut self, border: Border) -> Self {
        self.border.left = Some(border);
        self
    }

    /// Right border.
    pub fn border_right(mut self, border: Border) -> Self {
        self.border.right = Some(border);
        self
    }

    /// Corner radius in px.
    pub fn radius(mut self, px: f64) -> Self {
        self.radius = Some(Dimension::Px(px));
        self
    }

    /// Fully rounded corners (circle or pill).
    pub fn round(mut self) -> Self {
        self.radius = Some(Dimension::Percent(50.0));
        self
    }

    /// Append a box shadow.
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadows.push(shadow);
        self
    }

    /// Append box shadows.
    pub fn shadows(mut self, shadows: impl IntoIterator<Item = Shadow>) -> Self {
        self.shadows.extend(shadows);
        self
    }

    fn font_mut(&mut self) -> &mut Font {
        self.font.get_or_insert_with(Font::default)
    }

    /// Font family list.
    pub fn font_family(mut self, family: impl Into<String>) -> Self {
        self.font_mut().family = Some(family.into());
        self
    }

    /// Font size in px.
    pub fn font_size(mut self, px: f64) -> Self {
        self.font_mut().size = Some(px);
        self
    }

    /// Font family and size.
    pub fn font(self, family: impl Into<String>, px: f64) -> Self {
        self.font_family(family).font_size(px)
    }

    /// Font weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.font_mut().weight = Some(weight);
        self
    }

    /// Line height as a multiple of the font size.
    pub fn line_height(mut self, factor: f64) -> Self {
        self.font_mut().line_height = Some(factor);
        self
    }

    /// Extra letter spacing in px.
    pub fn letter_spacing(mut self, px: f64) -> Self {
        self.font_mut().letter_spacing = Some(px);
        self
    }

    /// Text alignment.
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.font_mut().align = Some(align);
        self
    }

    /// Preserve whitespace and newlines.
    pub fn pre_wrap(mut self) -> Self {
        self.font_mut().pre_wrap = true;
        self
    }

    /// Uppercase text.
    pub fn uppercase(mut self) -> Self {
        self.font_mut().uppercase = true;
        self
    }

    /// Text color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Append a text shadow.
    pub fn text_shadow(mut self, shadow: Shadow) -> Self {
        self.text_shadows.push(shadow);
        self
    }

    /// Clip children.
    pub fn clip(mut self) -> Self {
        self.clip = true;
        self
    }

    /// Blur whatever is behind the node. Zero leaves it unset.
    pub fn backdrop_blur(mut self, px: f64) -> Self {
        self.backdrop_blur = (px > 0.0).then_some(px);
        self
    }

    /// Stacking order.
    pub fn z(mut self, z: i32) -> Self {
        self.z_index = Some(z);
        self
    }
}

impl BoxNode {
    /// Empty container with `style`.
    pub fn new(style: Style) -> Self {
        Self {
            name: None,
            style,
            children: Vec::new(),
        }
    }

    /// Attach a lookup name.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<SceneNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child when present.
    pub fn maybe_child(mut self, child: Option<impl Into<SceneNode>>) -> Self {
        if let Some(c) = child {
            self.children.push(c.into());
        }
        self
    }

    /// Append children.
    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<SceneNode>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Wrap as a [`SceneNode`].
    pub fn into_node(self) -> SceneNode {
        SceneNode::Box(self)
    }
}

impl TextNode {
    /// Text block with no runs yet.
    pub fn new(style: Style) -> Self {
        Self {
            style,
            runs: Vec::new(),
        }
    }

    /// Single unstyled run.
    pub fn plain(style: Style, text: impl Into<String>) -> Self {
        Self::new(style).run(TextRun::new(text))
    }

    /// Append a run.
    pub fn run(mut self, run: TextRun) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run when present.
    pub fn maybe_run(mut self, run: Option<TextRun>) -> Self {
        self.runs.extend(run);
        self
    }

    /// Append runs.
    pub fn runs(mut self, runs: impl IntoIterator<Item = TextRun>) -> Self {
        self.runs.extend(runs);
        self
    }

    /// Wrap as a [`SceneNode`].
    pub fn into_node(self) -> SceneNode {
        SceneNode::Text(self)
    }
}

impl TextRun {
    /// Run inheriting everything from its block.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Empty inline block of `w` x `h` px.
    pub fn block(w: f64, h: f64) -> Self {
        Self {
            block: Some(Vec2::new(w, h)),
            ..Self::default()
        }
    }

    /// Run color.
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Run weight.
    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Run font size in px.
    pub fn size(mut self, px: f64) -> Self {
        self.size = Some(px);
        self
    }

    /// Left margin in px.
    pub fn margin_left(mut self, px: f64) -> Self {
        self.margin.left = px;
        self
    }

    /// Right margin in px.
    pub fn margin_right(mut self, px: f64) -> Self {
        self.margin.right = px;
        self
    }

    /// Horizontal margin on both sides in px.
    pub fn margin_x(self, px: f64) -> Self {
        self.margin_left(px).margin_right(px)
    }

    /// Background color behind the run.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Append a text shadow.
    pub fn text_shadow(mut self, shadow: Shadow) -> Self {
        self.text_shadows.push(shadow);
        self
    }

    /// Fixed inline width in px.
    pub fn width(mut self, px: f64) -> Self {
        self.width = Some(px);
        self
    }

    /// Scale the run about its center.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Strike-through when `on`.
    pub fn strike(mut self, on: bool) -> Self {
        self.strike = on;
        self
    }
}

impl From<BoxNode> for SceneNode {
    fn from(node: BoxNode) -> Self {
        Self::Box(node)
    }
}

impl From<TextNode> for SceneNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<PathNode> for SceneNode {
    fn from(node: PathNode) -> Self {
        Self::Path(node)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/builder.rs"]
mod tests;
