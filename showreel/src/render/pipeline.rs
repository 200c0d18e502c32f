use std::collections::HashMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    compositions::Composition,
    encode::sink::{FrameSink, InMemorySink, SinkConfig},
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ShowreelError, ShowreelResult},
    scene::fingerprint::{FrameFingerprint, fingerprint_scene},
    scene::model::SceneNode,
};

/// Evaluate one frame of a composition.
///
/// Frames outside `0..duration` are rejected; use [`Composition::render`] directly to
/// evaluate past the end.
pub fn evaluate_frame(comp: &dyn Composition, frame: FrameIndex) -> ShowreelResult<SceneNode> {
    let info = comp.info();
    if !info.contains(frame) {
        return Err(ShowreelError::FrameOutOfRange {
            composition: info.id.as_str(),
            frame: frame.0,
            duration: info.duration,
        });
    }
    Ok(comp.render(frame))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Threading, chunking and elision controls for range evaluation.
pub struct RenderOpts {
    /// Evaluate chunks on a rayon pool when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
    /// Hand scenes identical to an earlier one in the range to the sink as repeats.
    pub static_frame_elision: bool,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
            static_frame_elision: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
/// Aggregated evaluation counters.
pub struct RenderStats {
    /// Total requested frames.
    pub frames_total: u64,
    /// Frames handed to the sink as full scenes.
    pub frames_emitted: u64,
    /// Frames handed to the sink as repeats of an earlier scene.
    pub frames_elided: u64,
}

impl RenderStats {
    fn absorb(&mut self, other: Self) {
        self.frames_total += other.frames_total;
        self.frames_emitted += other.frames_emitted;
        self.frames_elided += other.frames_elided;
    }
}

/// Evaluate a frame range (start inclusive, end exclusive) into `sink`.
///
/// Output is identical whether or not `opts.parallel` is set: chunks are evaluated
/// concurrently but always pushed in timeline order.
#[tracing::instrument(level = "debug", skip_all, fields(comp = %comp.id(), start = range.start.0, end = range.end.0))]
pub fn evaluate_range(
    comp: &dyn Composition,
    range: FrameRange,
    opts: &RenderOpts,
    sink: &mut dyn FrameSink,
) -> ShowreelResult<RenderStats> {
    let info = *comp.info();
    if range.is_empty() {
        return Err(ShowreelError::config("render range must be non-empty"));
    }
    if range.end.0 > info.duration {
        return Err(ShowreelError::config(format!(
            "render range end {} exceeds {} duration {}",
            range.end.0, info.id, info.duration
        )));
    }

    let pool = if opts.parallel {
        Some(build_thread_pool(opts.threads)?)
    } else {
        None
    };
    let chunk_size = normalized_chunk_size(opts.chunk_size);

    sink.begin(SinkConfig {
        composition: info.id,
        canvas: info.canvas,
        fps: info.fps,
        range,
    })?;

    let mut stats = RenderStats::default();
    let mut first_seen = HashMap::<FrameFingerprint, FrameIndex>::with_capacity(
        if opts.static_frame_elision {
            range.len_frames().min(chunk_size) as usize
        } else {
            0
        },
    );
    let mut chunk_start = range.start.0;
    while chunk_start < range.end.0 {
        let chunk_end = (chunk_start + chunk_size).min(range.end.0);
        let chunk = FrameRange::new(FrameIndex(chunk_start), FrameIndex(chunk_end))?;
        let frames = match &pool {
            Some(pool) => evaluate_chunk_parallel(comp, chunk, opts, pool)?,
            None => evaluate_chunk_sequential(comp, chunk, opts)?,
        };

        let chunk_stats = push_chunk(chunk, frames, &mut first_seen, sink)?;
        tracing::debug!(
            start = chunk.start.0,
            end = chunk.end.0,
            elided = chunk_stats.frames_elided,
            "chunk evaluated"
        );
        stats.absorb(chunk_stats);
        chunk_start = chunk_end;
    }

    sink.end()?;
    tracing::info!(
        comp = %info.id,
        total = stats.frames_total,
        emitted = stats.frames_emitted,
        elided = stats.frames_elided,
        "range evaluated"
    );
    Ok(stats)
}

/// Evaluate a frame range into memory and return the scenes in timeline order.
pub fn evaluate_frames(
    comp: &dyn Composition,
    range: FrameRange,
    opts: &RenderOpts,
) -> ShowreelResult<(Vec<SceneNode>, RenderStats)> {
    let mut sink = InMemorySink::new();
    let stats = evaluate_range(comp, range, opts, &mut sink)?;
    Ok((sink.into_scenes(), stats))
}

type Evaluated = (SceneNode, Option<FrameFingerprint>);

fn evaluate_one(
    comp: &dyn Composition,
    frame: FrameIndex,
    opts: &RenderOpts,
) -> ShowreelResult<Evaluated> {
    let scene = comp.render(frame);
    let fingerprint = if opts.static_frame_elision {
        Some(fingerprint_scene(&scene)?)
    } else {
        None
    };
    Ok((scene, fingerprint))
}

fn evaluate_chunk_sequential(
    comp: &dyn Composition,
    range: FrameRange,
    opts: &RenderOpts,
) -> ShowreelResult<Vec<Evaluated>> {
    (range.start.0..range.end.0)
        .map(|f| evaluate_one(comp, FrameIndex(f), opts))
        .collect()
}

fn evaluate_chunk_parallel(
    comp: &dyn Composition,
    range: FrameRange,
    opts: &RenderOpts,
    pool: &rayon::ThreadPool,
) -> ShowreelResult<Vec<Evaluated>> {
    pool.install(|| {
        (range.start.0..range.end.0)
            .into_par_iter()
            .map(|f| evaluate_one(comp, FrameIndex(f), opts))
            .collect::<ShowreelResult<Vec<_>>>()
    })
}

fn push_chunk(
    range: FrameRange,
    frames: Vec<Evaluated>,
    first_seen: &mut HashMap<FrameFingerprint, FrameIndex>,
    sink: &mut dyn FrameSink,
) -> ShowreelResult<RenderStats> {
    let mut stats = RenderStats::default();
    for (offset, (scene, fingerprint)) in frames.into_iter().enumerate() {
        let idx = FrameIndex(range.start.0 + offset as u64);
        stats.frames_total += 1;
        let earlier = match fingerprint {
            Some(fp) => match first_seen.get(&fp).copied() {
                Some(prev) => Some(prev),
                None => {
                    first_seen.insert(fp, idx);
                    None
                }
            },
            None => None,
        };
        match earlier {
            Some(prev) => {
                sink.push_repeat(idx, prev, &scene)?;
                stats.frames_elided += 1;
            }
            None => {
                sink.push_frame(idx, &scene)?;
                stats.frames_emitted += 1;
            }
        }
    }
    Ok(stats)
}

fn build_thread_pool(threads: Option<usize>) -> ShowreelResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(ShowreelError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| ShowreelError::Other(anyhow::Error::new(e).context("build rayon thread pool")))
}

fn normalized_chunk_size(chunk_size: usize) -> u64 {
    if chunk_size == 0 {
        1
    } else {
        chunk_size as u64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
