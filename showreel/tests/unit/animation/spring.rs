use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn no_motion_before_start() {
    for p in SpringPreset::ALL {
        for f in [-100.0, -1.0, -0.5, 0.0] {
            assert_eq!(spring(f, fps30(), p), 0.0, "{p:?} at {f}");
        }
    }
}

#[test]
fn evaluation_is_bit_identical() {
    for p in SpringPreset::ALL {
        for f in 0..90 {
            let a = spring(f64::from(f), fps30(), p);
            let b = spring(f64::from(f), fps30(), p);
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn critically_damped_matches_closed_form() {
    // zeta = 20 / (2 * sqrt(100)) = 1, w0 = 10, t = 0.1s
    let v = spring(3.0, fps30(), SpringConfig::new(20.0, 100.0));
    let expected = 1.0 - (-1.0f64).exp() * 2.0;
    assert!((v - expected).abs() < 1e-12);
}

#[test]
fn snappy_is_monotonic_and_never_overshoots() {
    let mut prev = 0.0;
    for f in 1..600 {
        let v = spring(f64::from(f), fps30(), SpringPreset::Snappy);
        assert!(v >= prev);
        assert!(v <= 1.0);
        prev = v;
    }
}

#[test]
fn bouncy_overshoots_then_decays() {
    let samples: Vec<f64> = (0..120)
        .map(|f| spring(f64::from(f), fps30(), SpringPreset::Bouncy))
        .collect();
    let peak = samples.iter().copied().fold(f64::MIN, f64::max);
    assert!(peak > 1.1, "peak {peak}");

    let early = samples[..30].iter().map(|v| (v - 1.0).abs()).fold(0.0, f64::max);
    let late = samples[60..].iter().map(|v| (v - 1.0).abs()).fold(0.0, f64::max);
    assert!(late < early);
}

#[test]
fn presets_settle_within_measured_window() {
    let eps = 0.01;
    for p in SpringPreset::ALL {
        let settle = measure_spring(fps30(), p, eps).unwrap();
        for f in settle..settle + 300 {
            let v = spring(f as f64, fps30(), p);
            assert!((v - 1.0).abs() < eps, "{p:?} frame {f} value {v}");
        }
    }
}

#[test]
fn higher_damping_ratio_means_less_overshoot() {
    assert!(SpringPreset::Bouncy.config().damping_ratio() < 1.0);
    assert!(SpringPreset::Snappy.config().damping_ratio() > 1.0);
}

#[test]
fn measure_rejects_bad_inputs() {
    assert!(measure_spring(fps30(), SpringPreset::Gentle, 0.0).is_err());
    assert!(measure_spring(fps30(), SpringConfig::new(10.0, 0.0), 0.01).is_err());
}

#[test]
fn motion_deserializes_from_name_or_params() {
    let m: Motion = serde_json::from_str("\"bouncy\"").unwrap();
    assert_eq!(m, Motion::Preset(SpringPreset::Bouncy));

    let m: Motion = serde_json::from_str(r#"{"damping": 200}"#).unwrap();
    assert_eq!(m.resolve(), SpringPreset::Snappy.config());
}

#[test]
fn unknown_preset_is_rejected_at_load() {
    assert!(serde_json::from_str::<SpringPreset>("\"wobbly\"").is_err());
    assert!(serde_json::from_str::<Motion>("\"wobbly\"").is_err());
}
