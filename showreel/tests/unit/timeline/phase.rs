use super::*;

#[test]
fn lookup_by_name() {
    let t = PhaseTable::new(&[("PROMPT", 0), ("THINKING_START", 25), ("SUCCESS", 200)]).unwrap();
    assert_eq!(t.get("THINKING_START"), Some(25));
    assert_eq!(t.get("MISSING"), None);
    assert_eq!(t.len(), 3);
}

#[test]
fn duplicate_names_are_rejected() {
    let err = PhaseTable::new(&[("A", 0), ("B", 5), ("A", 9)]).unwrap_err();
    assert!(err.to_string().contains("duplicate phase 'A'"));
}

#[test]
fn empty_names_are_rejected() {
    assert!(PhaseTable::new(&[(" ", 0)]).is_err());
}

#[test]
fn shared_frames_are_allowed() {
    let t = PhaseTable::new(&[("THINKING_END", 60), ("CODE_START", 60)]).unwrap();
    assert!(t.is_monotonic());
}

#[test]
fn current_picks_latest_reached_milestone() {
    let t = PhaseTable::new(&[("A", 0), ("C", 50), ("B", 20)]).unwrap();
    assert!(!t.is_monotonic());
    assert_eq!(t.current(10).map(|p| p.name), Some("A"));
    assert_eq!(t.current(30).map(|p| p.name), Some("B"));
    assert_eq!(t.current(500).map(|p| p.name), Some("C"));
}
