use xxhash_rust::xxh3::Xxh3;

use crate::foundation::error::{ShowreelError, ShowreelResult};
use crate::scene::model::SceneNode;

const XXH3_SEED: u64 = 0x8b5ad4a0c7d8e9f1;

/// Stable 128-bit fingerprint of an evaluated scene, used by static-frame elision.
///
/// The frame index is not part of the scene, so a still frame elides across time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FrameFingerprint {
    /// High 64 bits.
    pub hi: u64,
    /// Low 64 bits.
    pub lo: u64,
}

impl std::fmt::Display for FrameFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016x}{:016x}", self.hi, self.lo)
    }
}

/// Fingerprint a scene by streaming its canonical JSON form through xxh3.
///
/// Field order is fixed by the model's serde derives and floats print in shortest
/// round-trip form, so equal scenes always hash equal.
pub fn fingerprint_scene(scene: &SceneNode) -> ShowreelResult<FrameFingerprint> {
    let mut h = StableHasher::new();
    serde_json::to_writer(&mut h, scene)
        .map_err(|e| ShowreelError::scene(format!("fingerprint serialization failed: {e}")))?;
    Ok(h.finish())
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn finish(self) -> FrameFingerprint {
        let v = self.inner.digest128();
        FrameFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

impl std::io::Write for StableHasher {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/fingerprint.rs"]
mod tests;
