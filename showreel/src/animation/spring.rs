use crate::foundation::core::Fps;
use crate::foundation::error::{ShowreelError, ShowreelResult};

/// Physical parameters of a damped spring settling from 0 to 1.
///
/// Omitted fields take the defaults `damping = 10`, `stiffness = 100`, `mass = 1`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Damping coefficient.
    pub damping: f64,
    /// Spring stiffness.
    pub stiffness: f64,
    /// Moving mass.
    pub mass: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
        }
    }
}

impl SpringConfig {
    /// Config with the given damping and default stiffness/mass.
    pub const fn damped(damping: f64) -> Self {
        Self {
            damping,
            stiffness: 100.0,
            mass: 1.0,
        }
    }

    /// Config with the given damping and stiffness and default mass.
    pub const fn new(damping: f64, stiffness: f64) -> Self {
        Self {
            damping,
            stiffness,
            mass: 1.0,
        }
    }

    /// Damping ratio `c / (2 sqrt(k m))`; `< 1` overshoots.
    pub fn damping_ratio(self) -> f64 {
        self.damping.max(0.0) / (2.0 * (self.stiffness.max(0.0) * self.mass.max(1e-9)).sqrt()).max(1e-9)
    }

    /// Reject non-finite or non-physical parameters.
    pub fn validate(self) -> ShowreelResult<()> {
        let finite = self.damping.is_finite() && self.stiffness.is_finite() && self.mass.is_finite();
        if !finite {
            return Err(ShowreelError::animation("spring parameters must be finite"));
        }
        if self.damping < 0.0 {
            return Err(ShowreelError::animation("spring damping must be >= 0"));
        }
        if self.stiffness <= 0.0 || self.mass <= 0.0 {
            return Err(ShowreelError::animation(
                "spring stiffness and mass must be > 0",
            ));
        }
        Ok(())
    }
}

/// Named spring presets shared by every composition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpringPreset {
    /// Heavily overdamped, never overshoots.
    Snappy,
    /// Moderate damping and stiffness.
    Gentle,
    /// Slightly underdamped glide.
    Smooth,
    /// Stiff and underdamped; overshoots past 1.0 before settling.
    Bouncy,
}

impl SpringPreset {
    /// All presets in declaration order.
    pub const ALL: [Self; 4] = [Self::Snappy, Self::Gentle, Self::Smooth, Self::Bouncy];

    /// Resolve to physical parameters.
    pub const fn config(self) -> SpringConfig {
        match self {
            Self::Snappy => SpringConfig::damped(200.0),
            Self::Gentle => SpringConfig::new(15.0, 80.0),
            Self::Smooth => SpringConfig::new(12.0, 100.0),
            Self::Bouncy => SpringConfig::new(15.0, 200.0),
        }
    }
}

/// Motion configuration: a named preset or explicit parameters.
///
/// Deserializes from a preset name (`"bouncy"`) or a parameter object; an unknown preset
/// name is a deserialization error.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Motion {
    /// Named preset.
    Preset(SpringPreset),
    /// Explicit parameters.
    Config(SpringConfig),
}

impl Motion {
    /// Resolve to physical parameters.
    pub fn resolve(self) -> SpringConfig {
        match self {
            Self::Preset(p) => p.config(),
            Self::Config(c) => c,
        }
    }
}

impl From<SpringPreset> for Motion {
    fn from(p: SpringPreset) -> Self {
        Self::Preset(p)
    }
}

impl From<SpringConfig> for Motion {
    fn from(c: SpringConfig) -> Self {
        Self::Config(c)
    }
}

/// Spring progress at `frame` frames after the start.
///
/// Returns exactly `0.0` for `frame <= 0`. The value is unclamped and may overshoot 1.0.
pub fn spring(frame: f64, fps: Fps, motion: impl Into<Motion>) -> f64 {
    if frame.is_nan() || frame <= 0.0 {
        return 0.0;
    }
    let cfg = motion.into().resolve();
    let t = fps.frames_to_secs(frame);
    spring_step(t, cfg.stiffness, cfg.damping, cfg.mass)
}

/// Number of frames after which the spring stays within `threshold` of 1.0 for good.
pub fn measure_spring(fps: Fps, motion: impl Into<Motion>, threshold: f64) -> ShowreelResult<u64> {
    const MAX_FRAMES: u64 = 1_000_000;

    if !(threshold > 0.0 && threshold.is_finite()) {
        return Err(ShowreelError::animation("settle threshold must be > 0"));
    }
    let motion = motion.into();
    let cfg = motion.resolve();
    cfg.validate()?;

    let w0 = (cfg.stiffness / cfg.mass).sqrt();
    let zeta = cfg.damping_ratio();
    let mut settled_since = None;
    for f in 0..MAX_FRAMES {
        let v = spring(f as f64, fps, motion);
        if (v - 1.0).abs() < threshold {
            let since = *settled_since.get_or_insert(f);
            // Only underdamped springs can leave the band again; stop once the envelope
            // can no longer reach it.
            if zeta >= 1.0 {
                return Ok(since);
            }
            let t = fps.frames_to_secs(f as f64);
            let amplitude = 1.0 / (1.0 - zeta * zeta).sqrt();
            if amplitude * (-zeta * w0 * t).exp() < threshold {
                return Ok(since);
            }
        } else {
            settled_since = None;
        }
    }
    Err(ShowreelError::animation(format!(
        "spring did not settle within {MAX_FRAMES} frames"
    )))
}

fn spring_step(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return t;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
