use super::*;
use serde_json::json;

#[test]
fn default_style_serializes_empty() {
    let node = SceneNode::Box(BoxNode::default());
    assert_eq!(serde_json::to_value(&node).unwrap(), json!({"kind": "box"}));
}

#[test]
fn text_node_is_tagged_and_sparse() {
    let node = SceneNode::Text(TextNode {
        style: Style {
            opacity: 0.5,
            ..Style::default()
        },
        runs: vec![TextRun {
            text: "hi".into(),
            color: Some(Color::hex(0x27ca3f)),
            ..TextRun::default()
        }],
    });
    assert_eq!(
        serde_json::to_value(&node).unwrap(),
        json!({
            "kind": "text",
            "style": {"opacity": 0.5},
            "runs": [{"text": "hi", "color": "#27ca3f"}]
        })
    );
}

#[test]
fn dimension_serializes_px_as_number_and_percent_as_string() {
    assert_eq!(serde_json::to_value(Dimension::Px(12.0)).unwrap(), json!(12.0));
    assert_eq!(serde_json::to_value(Dimension::Percent(50.0)).unwrap(), json!("50%"));

    let d: Dimension = serde_json::from_value(json!("30%")).unwrap();
    assert_eq!(d, Dimension::Percent(30.0));
    let d: Dimension = serde_json::from_value(json!("40px")).unwrap();
    assert_eq!(d, Dimension::Px(40.0));
    assert!(serde_json::from_value::<Dimension>(json!("wide")).is_err());
}

#[test]
fn edges_accept_number_shorthand() {
    let e: Edges = serde_json::from_value(json!(12.0)).unwrap();
    assert_eq!(e, Edges::all(12.0));
    let e: Edges = serde_json::from_value(json!({"left": 36.0})).unwrap();
    assert_eq!(e.left, 36.0);
    assert_eq!(e.top, 0.0);
}

#[test]
fn scene_round_trips_through_json() {
    let node = SceneNode::Box(BoxNode {
        name: Some("terminal".into()),
        style: Style {
            position: Position::Absolute(Inset::FILL),
            background: Some(Paint::Stripes {
                color: Color::BLACK.with_alpha(0.2),
                line: 1.0,
                period: 3.0,
                angle_deg: 0.0,
            }),
            ..Style::default()
        },
        children: vec![SceneNode::Path(PathNode {
            d: "M0,0 L10,0".into(),
            length: 10.0,
            stroke: Stroke {
                color: Color::WHITE,
                width: 2.0,
                glow: 0.0,
            },
            dash: Some(Dash {
                array: 10.0,
                offset: 5.0,
            }),
            opacity: 1.0,
        })],
    });
    let s = serde_json::to_string(&node).unwrap();
    let back: SceneNode = serde_json::from_str(&s).unwrap();
    assert_eq!(back, node);
}

#[test]
fn transform_affine_translates_then_scales() {
    let t = Transform {
        translate: Vec2::new(10.0, 0.0),
        scale: 2.0,
        ..Transform::default()
    };
    let p = t.to_affine() * kurbo::Point::new(1.0, 1.0);
    assert_eq!(p, kurbo::Point::new(12.0, 2.0));
    assert!(Transform::default().is_identity());
}

#[test]
fn node_count_and_find_walk_the_tree() {
    let tree = SceneNode::Box(BoxNode {
        name: Some("outer".into()),
        style: Style::default(),
        children: vec![SceneNode::Box(BoxNode {
            name: Some("inner".into()),
            ..BoxNode::default()
        })],
    });
    assert_eq!(tree.node_count(), 2);
    assert!(tree.find("inner").is_some());
    assert!(tree.find("missing").is_none());
}
