use super::*;

fn showcase() -> TwelveFactorShowcase {
    TwelveFactorShowcase::new(None).unwrap()
}

fn root(frame: u64) -> SceneNode {
    showcase().render(FrameIndex(frame))
}

#[test]
fn ocean_theme_is_flattened() {
    let s = showcase();
    assert_eq!(s.theme().name, "ocean");
    assert!(!s.theme().effects.perspective.enabled);
    assert!(!s.phases().is_monotonic());
    assert_eq!(s.phases().get("HOLD_END"), Some(540));
}

#[test]
fn factor_layout_mirrors_two_columns() {
    assert_eq!(FACTORS[0].x, 110.0);
    assert_eq!(FACTORS[5].y, 478.0);
    assert_eq!(FACTORS[6].x, 850.0);
    assert_eq!(FACTORS[11].y, 478.0);
    assert_eq!(FACTORS[0].appear_frame(), 195);
    assert_eq!(FACTORS[5].appear_frame(), 235);
    assert_eq!(FACTORS[6].appear_frame(), 245);
    assert_eq!(FACTORS[11].appear_frame(), 285);
}

#[test]
fn connections_join_facing_edges() {
    let left = FACTORS[0].connection();
    assert_eq!(left.start, Point::new(390.0, 265.0));
    assert_eq!(left.end, Point::new(187.5, 44.0));
    assert_eq!(left.appear_frame, 198.0);
    let right = FACTORS[7].connection();
    assert_eq!(right.start, Point::new(570.0, 265.0));
    assert_eq!(right.end, Point::new(772.5, 136.0));
}

#[test]
fn code_scrolls_only_when_overflowing() {
    assert_eq!(line_appear_frame(0), 160);
    assert_eq!(line_appear_frame(39), 316);
    assert_eq!(code_scroll(10), 0.0);
    assert_eq!(code_scroll(40), 40.0 * 21.0 - 280.0);
}

#[test]
fn mermaid_lines_accumulate() {
    assert!(root(159).find("mermaid").is_none());
    let early = root(160).find("mermaid").unwrap().text_content();
    assert_eq!(early, "```mermaid");
    let late = root(400).find("mermaid").unwrap().text_content();
    assert!(late.contains("Graceful shutdown"));
    assert!(late.ends_with("```"));
}

#[test]
fn hero_then_terminal() {
    assert!(root(0).find("hero").is_some());
    assert!(root(0).find("terminal_panel").is_none());
    assert!(root(35).find("terminal_panel").is_some());
    assert!(root(70).find("hero").is_some());
    assert!(root(71).find("hero").is_none());
}

#[test]
fn diagram_fills_in_by_column() {
    assert!(root(169).find("diagram").is_none());
    let d = root(200);
    assert!(d.find("diagram").is_some());
    assert!(d.find("hub").is_some());
    assert!(d.find("factor_1").is_some());
    assert!(d.find("factor_2").is_none());
    let full = root(500);
    for n in 1..=12 {
        assert!(full.find(&format!("factor_{n}")).is_some(), "factor {n}");
    }
    let diagram = full.find("diagram").unwrap();
    let paths = diagram
        .children()
        .iter()
        .filter(|c| matches!(c, SceneNode::Path(_)))
        .count();
    assert_eq!(paths, 12);
}

#[test]
fn thinking_gives_way_to_response() {
    let thinking = root(130).text_content();
    assert!(thinking.contains("Thinking"));
    let answered = root(150).text_content();
    assert!(!answered.contains("Thinking"));
    assert!(answered.contains("Here's the Mermaid:"));
    assert!(root(450).text_content().contains("✓ Mindmap diagram generated"));
}
