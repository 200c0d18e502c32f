use super::*;

fn showcase() -> SecurityFixesShowcase {
    SecurityFixesShowcase::new(None).unwrap()
}

fn text_at(frame: u64) -> String {
    showcase().render(FrameIndex(frame)).text_content()
}

#[test]
fn defaults_to_modern_theme() {
    let s = showcase();
    assert_eq!(s.theme().name, "modern");
    assert_eq!(s.info().duration, 660);
    assert_eq!(s.phases().get("FIRST_COMPLETE"), Some(FIRST_COMPLETE));
}

#[test]
fn tasks_complete_on_a_fixed_cadence() {
    let s = showcase();
    assert_eq!(SecurityFixesShowcase::complete_frame(0), 160);
    assert_eq!(SecurityFixesShowcase::complete_frame(9), 565);
    assert_eq!(s.completed_count(159.0), 0);
    assert_eq!(s.completed_count(160.0), 1);
    assert_eq!(s.completed_count(250.0), 3);
    assert_eq!(s.completed_count(659.0), 10);
}

#[test]
fn active_task_is_the_next_one_due() {
    let s = showcase();
    assert_eq!(s.active_task(100.0), None);
    assert_eq!(s.active_task(115.0), Some(0));
    assert_eq!(s.active_task(160.0), Some(1));
    assert_eq!(s.active_task(564.0), Some(9));
    assert_eq!(s.active_task(565.0), None);
}

#[test]
fn progress_caption_tracks_completion() {
    assert!(text_at(100).contains("0/10"));
    assert!(text_at(250).contains("3/10"));
    assert!(text_at(600).contains("10/10(100%)"));
}

#[test]
fn snippet_shows_for_forty_frames_after_completion() {
    assert!(!text_at(159).contains("CSRFMiddleware"));
    assert!(text_at(160).contains("CSRFMiddleware(next http.Handler)"));
    assert!(text_at(199).contains("// authentication.md"));
    assert!(!text_at(200).contains("CSRFMiddleware"));
    // only the first six tasks carry a snippet
    assert!(!text_at(450).contains("//"));
}

fn task_list_text_at(frame: u64) -> String {
    showcase()
        .render(FrameIndex(frame))
        .find("tasks")
        .map(SceneNode::text_content)
        .unwrap_or_default()
}

#[test]
fn thinking_line_names_active_task() {
    assert!(task_list_text_at(130).contains("Addressing Security C1"));
    assert!(task_list_text_at(300).contains("Addressing Performance C2"));
    // the title badge keeps its own wording once the list is done
    assert!(!task_list_text_at(600).contains("Addressing"));
    assert!(text_at(600).contains("Addressing Critical Issues"));
}

#[test]
fn summary_only_after_everything_is_done() {
    let s = showcase();
    assert!(s.render(FrameIndex(564)).find("summary").is_none());
    assert!(s.render(FrameIndex(565)).find("summary").is_some());
    assert!(text_at(620).contains("All 10 critical issues have been addressed!"));
}

#[test]
fn scroll_reaches_full_distance() {
    let s = showcase();
    assert_eq!(s.scroll_at(0.0), 0.0);
    assert_eq!(s.scroll_at(250.0), 100.0);
    assert_eq!(s.scroll_at(659.0), 400.0);
}
