use super::*;

#[test]
fn registry_lists_every_composition() {
    let reg = registry();
    assert_eq!(reg.len(), CompositionId::ALL.len());
    let social = reg
        .iter()
        .find(|i| i.id == CompositionId::SocialCodeDemo)
        .unwrap();
    assert_eq!(social.duration, 240);
    assert_eq!(social.canvas, Canvas::VERTICAL_9_16);
    assert!(reg.iter().all(|i| i.fps == Fps::whole(30)));
}

#[test]
fn durations_match_catalog() {
    let d = |id: CompositionId| id.info().duration;
    assert_eq!(d(CompositionId::MultiAgentShowcase), 540);
    assert_eq!(d(CompositionId::SecurityFixesShowcase), 660);
    assert_eq!(d(CompositionId::KanbanSprintShowcase), 600);
    assert_eq!(d(CompositionId::TwelveFactorShowcase), 540);
}

#[test]
fn ids_parse_case_insensitively() {
    for id in CompositionId::ALL {
        assert_eq!(id.as_str().parse::<CompositionId>().unwrap(), id);
        assert_eq!(id.as_str().to_lowercase().parse::<CompositionId>().unwrap(), id);
    }
    let err = "Nope".parse::<CompositionId>().unwrap_err();
    assert!(err.to_string().contains("unknown composition 'Nope'"));
}

#[test]
fn build_respects_theme_override() {
    let comp = CompositionId::SocialCodeDemo
        .build(Some(ThemeName::Ocean.theme()))
        .unwrap();
    assert_eq!(comp.theme().name, "ocean");
    assert_eq!(comp.id(), CompositionId::SocialCodeDemo);
}

#[test]
fn build_rejects_invalid_theme() {
    let mut bad = ThemeName::Terminal.theme();
    bad.spacing.terminal.width = 0.0;
    assert!(CompositionId::MultiAgentShowcase.build(Some(bad)).is_err());
}

#[test]
fn every_phase_table_is_nonempty() {
    for id in CompositionId::ALL {
        let comp = id.build(None).unwrap();
        assert!(!comp.phases().is_empty(), "{id}");
        assert_eq!(comp.info().default_theme.theme().name, comp.theme().name.as_str());
    }
}

#[test]
fn info_contains_checks_duration() {
    let info = CompositionId::SocialCodeDemo.info();
    assert!(info.contains(FrameIndex(239)));
    assert!(!info.contains(FrameIndex(240)));
}
