use super::*;
use crate::foundation::core::{Fps, FrameIndex};

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30))
}

#[test]
fn curve_bows_toward_the_leaf() {
    let right = connection_curve(Point::new(0.0, 0.0), Point::new(100.0, 50.0));
    assert_eq!(right.p1, Point::new(40.0, 0.0));
    assert_eq!(right.p2, Point::new(60.0, 50.0));

    let left = connection_curve(Point::new(0.0, 0.0), Point::new(-100.0, 50.0));
    assert_eq!(left.p1, Point::new(-40.0, 0.0));
    assert_eq!(left.p2, Point::new(-60.0, 50.0));
}

#[test]
fn straight_line_arclen_matches_distance() {
    let line = ConnectionLine::new(Point::new(0.0, 10.0), Point::new(300.0, 10.0), Color::WHITE, 0.0);
    let Some(SceneNode::Path(p)) = line.render(ctx(100)) else {
        panic!("expected a path");
    };
    assert!((p.length - 300.0).abs() < 0.01, "length {}", p.length);
    assert!(p.d.starts_with('M'));
}

#[test]
fn draws_over_eighteen_frames() {
    let line = ConnectionLine::new(Point::new(0.0, 0.0), Point::new(200.0, 80.0), Color::WHITE, 10.0);
    assert!(line.render(ctx(9)).is_none());

    let Some(SceneNode::Path(start)) = line.render(ctx(10)) else {
        panic!("expected a path");
    };
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.dash.unwrap().offset, start.length);

    let Some(SceneNode::Path(half)) = line.render(ctx(19)) else {
        panic!("expected a path");
    };
    assert!((half.opacity - 0.3).abs() < 1e-9);

    let Some(SceneNode::Path(done)) = line.render(ctx(40)) else {
        panic!("expected a path");
    };
    assert_eq!(done.dash.unwrap().offset, 0.0);
    assert!((done.opacity - 0.6).abs() < 1e-9);
}
