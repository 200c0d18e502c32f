use super::*;
use crate::compositions::{CompositionId, CompositionInfo, SocialCodeDemo};
use crate::foundation::core::{Canvas, Fps};
use crate::scene::model::{Style, TextNode};
use crate::theme::{Theme, ThemeName};
use crate::timeline::phase::PhaseTable;

/// Holds a still scene for the first `hold` frames, then changes every frame.
struct Hold {
    info: CompositionInfo,
    theme: Theme,
    phases: PhaseTable,
    hold: u64,
}

impl Hold {
    fn new(duration: u64, hold: u64) -> Self {
        Self {
            info: CompositionInfo {
                id: CompositionId::SocialCodeDemo,
                canvas: Canvas::HORIZONTAL_16_9,
                fps: Fps::whole(30),
                duration,
                default_theme: ThemeName::Terminal,
            },
            theme: ThemeName::Terminal.theme(),
            phases: PhaseTable::new(&[("START", 0)]).unwrap(),
            hold,
        }
    }
}

impl Composition for Hold {
    fn info(&self) -> &CompositionInfo {
        &self.info
    }

    fn theme(&self) -> &Theme {
        &self.theme
    }

    fn phases(&self) -> &PhaseTable {
        &self.phases
    }

    fn render(&self, frame: FrameIndex) -> SceneNode {
        let text = if frame.0 < self.hold {
            "hold".to_owned()
        } else {
            frame.0.to_string()
        };
        TextNode::plain(Style::new(), text).into_node()
    }
}

fn range(start: u64, end: u64) -> FrameRange {
    FrameRange::new(FrameIndex(start), FrameIndex(end)).unwrap()
}

#[test]
fn evaluate_frame_rejects_frames_past_the_end() {
    let comp = Hold::new(10, 0);
    assert!(evaluate_frame(&comp, FrameIndex(9)).is_ok());
    let err = evaluate_frame(&comp, FrameIndex(10)).unwrap_err();
    assert!(err.to_string().contains("outside"));
}

#[test]
fn range_must_be_non_empty_and_in_bounds() {
    let comp = Hold::new(10, 0);
    let opts = RenderOpts::default();
    assert!(evaluate_frames(&comp, range(3, 3), &opts).is_err());
    assert!(evaluate_frames(&comp, range(0, 11), &opts).is_err());
}

#[test]
fn sequential_range_emits_every_frame_in_order() {
    let comp = Hold::new(10, 0);
    let opts = RenderOpts {
        chunk_size: 3,
        ..RenderOpts::default()
    };
    let mut sink = InMemorySink::new();
    let stats = evaluate_range(&comp, range(2, 9), &opts, &mut sink).unwrap();
    assert_eq!(stats.frames_total, range(2, 9).len_frames());
    assert_eq!(
        stats,
        RenderStats {
            frames_total: 7,
            frames_emitted: 7,
            frames_elided: 0,
        }
    );
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (2..9).collect::<Vec<_>>());
    assert_eq!(sink.frames()[0].1.text_content(), "2");
    assert!(sink.is_finished());
    assert_eq!(sink.config().unwrap().range, range(2, 9));
}

#[test]
fn parallel_matches_sequential() {
    let comp = SocialCodeDemo::new(None).unwrap();
    let (seq, _) = evaluate_frames(&comp, range(100, 140), &RenderOpts::default()).unwrap();
    let par_opts = RenderOpts {
        parallel: true,
        chunk_size: 7,
        threads: Some(3),
        ..RenderOpts::default()
    };
    let (par, stats) = evaluate_frames(&comp, range(100, 140), &par_opts).unwrap();
    assert_eq!(seq, par);
    assert_eq!(stats.frames_total, 40);
}

#[test]
fn elision_reports_repeats_across_chunks() {
    let comp = Hold::new(20, 8);
    let opts = RenderOpts {
        chunk_size: 3,
        static_frame_elision: true,
        ..RenderOpts::default()
    };
    let mut sink = InMemorySink::new();
    let stats = evaluate_range(&comp, range(0, 20), &opts, &mut sink).unwrap();
    assert_eq!(stats.frames_total, 20);
    assert_eq!(stats.frames_elided, 7);
    assert_eq!(stats.frames_emitted, 13);
    // the in-memory sink still receives the full scene for a repeat
    assert_eq!(sink.frames().len(), 20);
    assert_eq!(sink.frames()[5].1.text_content(), "hold");
}

#[test]
fn zero_threads_is_rejected() {
    let comp = Hold::new(5, 0);
    let opts = RenderOpts {
        parallel: true,
        threads: Some(0),
        ..RenderOpts::default()
    };
    assert!(evaluate_frames(&comp, range(0, 5), &opts).is_err());
}

#[test]
fn opts_deserialize_with_defaults() {
    let opts: RenderOpts = serde_json::from_value(serde_json::json!({ "parallel": true })).unwrap();
    assert!(opts.parallel);
    assert_eq!(opts.chunk_size, 64);
    assert!(!opts.static_frame_elision);
}
