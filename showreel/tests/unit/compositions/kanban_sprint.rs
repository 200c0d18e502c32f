use super::*;

fn showcase() -> KanbanSprintShowcase {
    KanbanSprintShowcase::new(None).unwrap()
}

#[test]
fn perspective_is_flat_even_with_override() {
    assert!(!showcase().theme().effects.perspective.enabled);
    let ocean = ThemeName::Ocean.theme();
    assert!(ocean.effects.perspective.enabled);
    let s = KanbanSprintShowcase::new(Some(ocean)).unwrap();
    assert!(!s.theme().effects.perspective.enabled);
    assert_eq!(s.theme().name, "ocean");
}

#[test]
fn cards_follow_their_transitions() {
    assert_eq!(card_column(0, 0.0), Column::Backlog);
    assert_eq!(card_column(0, 130.0), Column::InProgress);
    assert_eq!(card_column(0, 210.0), Column::Review);
    assert_eq!(card_column(0, 300.0), Column::Done);
    assert_eq!(card_column(5, 259.0), Column::Backlog);
    assert_eq!(card_column(5, 260.0), Column::InProgress);
    for card in 0..CARDS.len() {
        assert_eq!(card_column(card, 599.0), Column::Done, "card {card}");
    }
}

#[test]
fn transition_lookup() {
    assert_eq!(transition_frame(3, Column::Review), Some(350));
    assert_eq!(transition_frame(3, Column::Backlog), None);
}

#[test]
fn sub_tasks_switch_in_wave_two() {
    assert_eq!(agent_sub_task(1, 249.0), "Button Component");
    assert_eq!(agent_sub_task(1, 250.0), "Nav Bar");
    assert_eq!(agent_sub_task(0, 500.0), "Auth API");
    assert_eq!(agent_sub_task(42, 0.0), "");
}

#[test]
fn column_counts_in_headers() {
    let board = showcase().render(FrameIndex(225));
    let text = board.find("board").unwrap().text_content();
    // cards 0,1 in review; 2,3 in progress; 4,5 still in backlog
    assert!(text.contains("BACKLOG(2)"), "{text}");
    assert!(text.contains("IN PROGRESS(2)"));
    assert!(text.contains("REVIEW(2)"));
    assert!(text.contains("DONE(0)"));
}

#[test]
fn cards_render_in_their_column() {
    let root = showcase().render(FrameIndex(320));
    let done = root.find("column_done").unwrap();
    assert_eq!(done.children().len(), 2);
    assert!(done.text_content().contains("Auth API"));
    assert!(root.find("column_backlog").unwrap().children().is_empty());
}

#[test]
fn board_rules_span_every_column() {
    let line = rule('┌', '┬', '┐');
    assert!(line.starts_with('┌') && line.ends_with('┐'));
    assert_eq!(line.matches('┬').count(), 3);
    assert_eq!(line.chars().filter(|&c| c == '─').count(), 160);
}

#[test]
fn hero_fades_out_before_board() {
    let s = showcase();
    assert!(s.render(FrameIndex(0)).find("hero").is_some());
    assert!(s.render(FrameIndex(74)).find("hero").is_some());
    assert!(s.render(FrameIndex(75)).find("hero").is_none());
}

#[test]
fn summary_appears_last() {
    let s = showcase();
    assert!(s.render(FrameIndex(509)).find("summary").is_none());
    let late = s.render(FrameIndex(560)).text_content();
    assert!(late.contains("Sprint complete"));
    assert!(late.contains("87 tool calls"));
}

#[test]
fn scroll_totals_280() {
    assert_eq!(showcase().scroll_at(599.0), 280.0);
}
