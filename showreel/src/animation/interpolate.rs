use crate::animation::ease::Ease;

/// Behavior of [`interpolate`] for inputs outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the (eased) mapping past the endpoint.
    #[default]
    Extend,
    /// Hold the output endpoint.
    Clamp,
    /// Return the input value unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct InterpolateOpts {
    /// Easing applied to the normalized parameter.
    #[serde(default)]
    pub easing: Ease,
    /// Policy below the input range.
    #[serde(default)]
    pub left: Extrapolate,
    /// Policy above the input range.
    #[serde(default)]
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Linear, extend on both sides.
    pub fn extend() -> Self {
        Self::default()
    }

    /// Linear, clamped on both sides.
    pub fn clamp() -> Self {
        Self {
            easing: Ease::Linear,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }

    /// Linear, clamped above the range only.
    pub fn clamp_right() -> Self {
        Self {
            right: Extrapolate::Clamp,
            ..Self::default()
        }
    }

    /// Replace the easing curve.
    pub fn ease(mut self, easing: Ease) -> Self {
        self.easing = easing;
        self
    }
}

/// Map `input` from `input_range` to `output_range`.
///
/// A degenerate input range (`i0 == i1`) behaves as a step: `o0` below `i0`, `o1` otherwise.
pub fn interpolate(
    input: f64,
    input_range: [f64; 2],
    output_range: [f64; 2],
    opts: InterpolateOpts,
) -> f64 {
    let [i0, i1] = input_range;
    let [o0, o1] = output_range;

    if i0 == i1 {
        return if input < i0 { o0 } else { o1 };
    }

    let (lo, hi) = if i0 < i1 { (i0, i1) } else { (i1, i0) };
    let mut x = input;
    if x < lo {
        match opts.left {
            Extrapolate::Clamp => x = lo,
            Extrapolate::Identity => return input,
            Extrapolate::Extend => {}
        }
    }
    if x > hi {
        match opts.right {
            Extrapolate::Clamp => x = hi,
            Extrapolate::Identity => return input,
            Extrapolate::Extend => {}
        }
    }

    if o0 == o1 {
        return o0;
    }

    let t = (x - i0) / (i1 - i0);
    let eased = if (0.0..=1.0).contains(&t) {
        opts.easing.apply(t)
    } else {
        opts.easing.apply_unclamped(t)
    };
    o0 + eased * (o1 - o0)
}

/// Remap `sin(frame * speed)` from `[-1, 1]` onto `[lo, hi]`, used for pulsing glows.
pub fn pulse(frame: f64, speed: f64, lo: f64, hi: f64) -> f64 {
    interpolate(
        (frame * speed).sin(),
        [-1.0, 1.0],
        [lo, hi],
        InterpolateOpts::extend(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
