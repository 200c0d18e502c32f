use std::io::Write;

use serde::Serialize;

use crate::compositions::CompositionId;
use crate::foundation::core::{Canvas, Fps, FrameIndex, FrameRange};
use crate::foundation::error::{ShowreelError, ShowreelResult};
use crate::scene::model::SceneNode;

/// Configuration provided to a [`FrameSink`] at the start of a range evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SinkConfig {
    /// Composition being evaluated.
    pub composition: CompositionId,
    /// Output size.
    pub canvas: Canvas,
    /// Frame rate.
    pub fps: Fps,
    /// Requested frames (start inclusive, end exclusive).
    pub range: FrameRange,
}

/// Sink contract for consuming evaluated scenes in timeline order.
///
/// Ordering contract: `push_frame`/`push_repeat` are called in strictly increasing
/// `FrameIndex` order within the requested range.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ShowreelResult<()>;

    /// Push one evaluated frame.
    fn push_frame(&mut self, idx: FrameIndex, scene: &SceneNode) -> ShowreelResult<()>;

    /// Push a frame whose scene is identical to the one already pushed at `same_as`.
    ///
    /// Sinks that cannot reference earlier frames get the scene again.
    fn push_repeat(
        &mut self,
        idx: FrameIndex,
        same_as: FrameIndex,
        scene: &SceneNode,
    ) -> ShowreelResult<()> {
        let _ = same_as;
        self.push_frame(idx, scene)
    }

    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ShowreelResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, SceneNode)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Captured frames in timeline order.
    pub fn frames(&self) -> &[(FrameIndex, SceneNode)] {
        &self.frames
    }

    /// Take ownership of the captured scenes.
    pub fn into_scenes(self) -> Vec<SceneNode> {
        self.frames.into_iter().map(|(_, s)| s).collect()
    }

    /// Return `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ShowreelResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, scene: &SceneNode) -> ShowreelResult<()> {
        self.frames.push((idx, scene.clone()));
        Ok(())
    }

    fn end(&mut self) -> ShowreelResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[derive(Serialize)]
struct Header<'a> {
    config: &'a SinkConfig,
}

#[derive(Serialize)]
struct FrameLine<'a> {
    frame: u64,
    scene: &'a SceneNode,
}

#[derive(Serialize)]
struct RepeatLine {
    frame: u64,
    same_as: u64,
}

/// Newline-delimited JSON sink.
///
/// The first line is `{"config": ...}`; every following line is either
/// `{"frame": n, "scene": ...}` or, for an elided frame, `{"frame": n, "same_as": m}`.
#[derive(Debug)]
pub struct JsonLinesSink<W: Write + Send> {
    out: W,
    frames_written: u64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    /// Wrap a writer. Callers should buffer file writers.
    pub fn new(out: W) -> Self {
        Self {
            out,
            frames_written: 0,
        }
    }

    /// Frame lines written since `begin`.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, value: &impl Serialize) -> ShowreelResult<()> {
        serde_json::to_writer(&mut self.out, value)?;
        self.out
            .write_all(b"\n")
            .map_err(|e| ShowreelError::encode(format!("jsonl sink write failed: {e}")))
    }
}

impl<W: Write + Send> FrameSink for JsonLinesSink<W> {
    fn begin(&mut self, cfg: SinkConfig) -> ShowreelResult<()> {
        self.frames_written = 0;
        self.line(&Header { config: &cfg })
    }

    fn push_frame(&mut self, idx: FrameIndex, scene: &SceneNode) -> ShowreelResult<()> {
        self.line(&FrameLine {
            frame: idx.0,
            scene,
        })?;
        self.frames_written += 1;
        Ok(())
    }

    fn push_repeat(
        &mut self,
        idx: FrameIndex,
        same_as: FrameIndex,
        _scene: &SceneNode,
    ) -> ShowreelResult<()> {
        self.line(&RepeatLine {
            frame: idx.0,
            same_as: same_as.0,
        })?;
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> ShowreelResult<()> {
        self.out
            .flush()
            .map_err(|e| ShowreelError::encode(format!("jsonl sink flush failed: {e}")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
