use crate::foundation::error::{ShowreelError, ShowreelResult};

/// Named milestones of a composition mapped to absolute frames.
///
/// Keys are unique. Values are reference points only and need not increase.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct PhaseTable {
    entries: Vec<Phase>,
}

/// One `(name, frame)` entry of a [`PhaseTable`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Phase {
    /// Symbolic milestone name.
    pub name: &'static str,
    /// Absolute frame of the milestone.
    pub frame: u64,
}

impl PhaseTable {
    /// Build a table, rejecting empty or duplicate names.
    pub fn new(entries: &[(&'static str, u64)]) -> ShowreelResult<Self> {
        let mut out: Vec<Phase> = Vec::with_capacity(entries.len());
        for &(name, frame) in entries {
            if name.trim().is_empty() {
                return Err(ShowreelError::composition("phase name must be non-empty"));
            }
            if out.iter().any(|p| p.name == name) {
                return Err(ShowreelError::composition(format!(
                    "duplicate phase '{name}'"
                )));
            }
            out.push(Phase { name, frame });
        }
        Ok(Self { entries: out })
    }

    /// Frame of the named milestone.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.entries.iter().find(|p| p.name == name).map(|p| p.frame)
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Phase> + '_ {
        self.entries.iter()
    }

    /// Number of milestones.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when the table has no milestones.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest milestone (by frame) that `frame` has reached; ties resolve to the later entry.
    pub fn current(&self, frame: u64) -> Option<&Phase> {
        self.entries
            .iter()
            .filter(|p| p.frame <= frame)
            .max_by_key(|p| p.frame)
    }

    /// Return `true` when milestones never decrease in declaration order.
    pub fn is_monotonic(&self) -> bool {
        self.entries.windows(2).all(|w| w[0].frame <= w[1].frame)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/phase.rs"]
mod tests;
