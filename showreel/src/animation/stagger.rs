/// Default per-item stagger interval in frames.
pub const DEFAULT_STAGGER: u64 = 6;

/// Delay of the `index`-th sibling: `index * interval`.
pub fn stagger_delay(index: usize, interval: u64) -> u64 {
    (index as u64).saturating_mul(interval)
}

/// Delay of the `index`-th sibling after a base delay.
pub fn stagger_from(base: u64, index: usize, interval: u64) -> u64 {
    base.saturating_add(stagger_delay(index, interval))
}
