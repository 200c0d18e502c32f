use super::*;
use crate::scene::model::{BorderSides, LayoutDirection};

#[test]
fn opacity_and_scale_multiply() {
    let s = Style::new().opacity(0.5).opacity(0.5).scale(2.0).scale(0.25);
    assert_eq!(s.opacity, 0.25);
    assert_eq!(s.transform.unwrap().scale, 0.5);
}

#[test]
fn translate_accumulates() {
    let s = Style::new().translate_x(20.0).translate(5.0, -3.0);
    assert_eq!(s.transform.unwrap().translate, Vec2::new(25.0, -3.0));
}

#[test]
fn layout_setters_share_one_layout() {
    let s = Style::new().column().gap(8.0).center();
    let l = s.layout.unwrap();
    assert_eq!(l.direction, LayoutDirection::Column);
    assert_eq!(l.gap, 8.0);
    assert_eq!(l.align_items, Some(Align::Center));
    assert_eq!(l.justify_content, Some(Justify::Center));
}

#[test]
fn border_sides_are_independent() {
    let b = Border::new(2.0, Color::hex(0x333333));
    let s = Style::new().border_left(b);
    assert_eq!(
        s.border,
        BorderSides {
            left: Some(b),
            ..BorderSides::default()
        }
    );
    assert_eq!(Style::new().border(b).border, BorderSides::all(b));
}

#[test]
fn zero_backdrop_blur_stays_unset() {
    assert_eq!(Style::new().backdrop_blur(0.0).backdrop_blur, None);
    assert_eq!(Style::new().backdrop_blur(30.0).backdrop_blur, Some(30.0));
}

#[test]
fn box_children_and_optional_children() {
    let node = BoxNode::new(Style::new())
        .named("root")
        .child(TextNode::plain(Style::new(), "a"))
        .maybe_child(None::<SceneNode>)
        .maybe_child(Some(TextNode::plain(Style::new(), "b")))
        .children(["c", "d"].map(|t| TextNode::plain(Style::new(), t)))
        .into_node();
    assert_eq!(node.children().len(), 4);
    assert_eq!(node.text_content(), "abcd");
    assert!(node.find("root").is_some());
}

#[test]
fn text_run_setters() {
    let run = TextRun::new("x")
        .color(Color::WHITE)
        .weight(600)
        .margin_x(16.0)
        .strike(true);
    assert_eq!(run.weight, Some(600));
    assert_eq!(run.margin.left, 16.0);
    assert_eq!(run.margin.right, 16.0);
    assert!(run.strike);

    let cursor = TextRun::block(20.0, 40.0);
    assert!(cursor.text.is_empty());
    assert_eq!(cursor.block, Some(Vec2::new(20.0, 40.0)));
}

#[test]
fn opacity_factor_is_clamped() {
    assert_eq!(Style::new().opacity(2.0).opacity, 1.0);
    assert_eq!(Style::new().opacity(-0.5).opacity, 0.0);
}
