use super::*;
use crate::foundation::core::{Fps, FrameIndex};
use crate::theme::ThemeName;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30))
}

fn theme() -> Theme {
    ThemeName::Ocean.theme()
}

fn agent() -> AgentData {
    AgentData::new("security-expert", "Security", 12, 48.3, Color::hex(0xff6b6b))
}

#[test]
fn agent_row_counts_up_to_final_values() {
    let row = AgentRow::new(agent(), 1, true, 10.0);
    // stagger 6: counters start at local 26
    assert_eq!(row.counter_progress(30.0), 0.0);
    assert_eq!(row.counter_progress(300.0), 1.0);
    let done = row.render(ctx(300), &theme()).text_content();
    assert_eq!(done, "└─security-expert·12 tools·48.3k");
    let start = row.render(ctx(10), &theme()).text_content();
    assert_eq!(start, "└─security-expert·0 tools·0.0k");
}

#[test]
fn agent_row_uses_branch_for_inner_rows() {
    let row = AgentRow::new(agent(), 0, false, 0.0);
    assert!(row.render(ctx(50), &theme()).text_content().starts_with("├─"));
}

#[test]
fn agent_row_hidden_before_stagger() {
    let row = AgentRow::new(agent(), 3, false, 0.0);
    let node = row.render(ctx(10), &theme());
    assert_eq!(node.style().unwrap().opacity, 0.0);
}

fn table() -> DataTable {
    DataTable::new(
        vec![DataColumn::new("Severity", 200.0), DataColumn::new("Count", 120.0)],
        vec![
            DataRow::new([CellValue::from("Critical"), CellValue::from(4u32)])
                .color(Color::hex(0xff0000)),
            DataRow::new([CellValue::from("Low")]),
        ],
        0,
    )
}

#[test]
fn data_table_counts_numbers() {
    let t = theme();
    let early = table().render(ctx(5), &t);
    assert_eq!(early.text_content(), "SeverityCountCritical0Low");
    let late = table().render(ctx(60), &t);
    assert_eq!(late.text_content(), "SeverityCountCritical4Low");
}

#[test]
fn data_table_rows_fade_in_staggered() {
    let node = table().title("Findings").render(ctx(6), &theme());
    // caption, grid; grid holds header plus two rows
    let grid = &node.children()[1];
    assert_eq!(grid.children().len(), 3);
    let row0 = grid.children()[1].style().unwrap().opacity;
    let row1 = grid.children()[2].style().unwrap().opacity;
    assert!((row0 - 0.6).abs() < 1e-9);
    assert!((row1 - 0.2).abs() < 1e-9);
    assert!(grid.children()[1].style().unwrap().border.bottom.is_some());
    assert!(grid.children()[2].style().unwrap().border.bottom.is_none());
}

#[test]
fn data_table_first_cell_uses_row_color() {
    let node = table().render(ctx(60), &theme());
    let grid = &node.children()[0];
    let first = grid.children()[1].children()[0].style().unwrap().color;
    assert_eq!(first, Some(Color::hex(0xff0000)));
    let second = grid.children()[1].children()[1].style().unwrap().color;
    assert_eq!(second, Some(CELL_TEXT));
}

#[test]
fn progress_bar_math() {
    let bar = ProgressBar::new(0, 3, 8);
    assert_eq!(bar.percentage(), 38);
    assert_eq!(bar.fill_width(), 150.0);
    assert_eq!(ProgressBar::new(0, 9, 8).fill_width(), 400.0);
    assert_eq!(ProgressBar::new(0, 0, 0).percentage(), 0);
    assert_eq!(ProgressBar::new(0, 0, 0).fill_width(), 0.0);
    let node = ProgressBar::new(0, 8, 8).render(ctx(30), &theme());
    assert_eq!(node.text_content(), "Progress:8/8(100%)");
}

#[test]
fn step_header_text() {
    let node = StepHeader::new(2, "Validate findings", 0).render(ctx(30), &theme());
    assert_eq!(node.text_content(), "Step 2: Validate findings");
}

fn task() -> TaskItem {
    TaskItem::new("SEC-101", "[Critical]", "Fix SQL injection", Color::hex(0xff5555))
}

#[test]
fn spinner_cycles_every_four_frames() {
    assert_eq!(TaskListItem::spinner_at(0.0), "◐");
    assert_eq!(TaskListItem::spinner_at(4.0), "◓");
    assert_eq!(TaskListItem::spinner_at(15.0), "◒");
    assert_eq!(TaskListItem::spinner_at(16.0), "◐");
    assert_eq!(TaskListItem::spinner_at(-1.0), "◒");
}

#[test]
fn task_item_states() {
    let t = theme();
    let pending = TaskListItem::new(task(), 0.0, 100.0, false).render(ctx(50), &t);
    assert!(pending.text_content().starts_with('◻'));

    let active = TaskListItem::new(task(), 0.0, 100.0, true).render(ctx(50), &t);
    assert!(active.text_content().starts_with(TaskListItem::spinner_at(50.0)));

    let done = TaskListItem::new(task(), 0.0, 100.0, true).render(ctx(100), &t);
    assert_eq!(done.text_content(), "✔[Critical] SEC-101-Fix SQL injection");
    match &done.children()[3] {
        SceneNode::Text(label) => assert!(label.runs[0].strike),
        other => panic!("unexpected {other:?}"),
    }
}
