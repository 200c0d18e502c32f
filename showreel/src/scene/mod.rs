pub(crate) mod builder;
pub(crate) mod fingerprint;
pub(crate) mod model;

pub use fingerprint::{FrameFingerprint, fingerprint_scene};
pub use model::{
    Align, Border, BorderSides, BoxNode, Dash, Dimension, Edges, Font, GradientStop, Inset,
    Justify, Layout, LayoutDirection, LinearGradient, Paint, PathNode, Position, RadialGradient,
    RadialShape, SceneNode, Shadow, Stroke, Style, TextAlign, TextNode, TextRun, Tilt, Transform,
};
