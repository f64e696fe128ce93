//! Sigma-Delta Modulator Tests.
//!
//! Verifies the quantization rule, noise-shaping convergence, and integrator
//! boundedness of the first-order error-feedback modulator.

use bcsim_core::common::Bit;
use bcsim_core::deterministic::SigmaDeltaModulator;
use proptest::prelude::*;

/// The first pulse quantizes the initial integrator sign: zero maps high.
#[test]
fn initial_pulse_is_high() {
    let mut sdm = SigmaDeltaModulator::new();
    assert_eq!(sdm.step(0.0).to_real(), 1.0);
    // Error feedback: s = 0 + 0 - 1 = -1, so the next pulse is low.
    assert_eq!(sdm.step(0.0).to_real(), -1.0);
}

/// Constant full-scale inputs lock the output to the rail.
#[test]
fn full_scale_inputs_lock_the_rail() {
    let mut sdm = SigmaDeltaModulator::new();
    for _ in 0..100 {
        assert_eq!(sdm.step(1.0).to_real(), 1.0);
    }

    let mut sdm = SigmaDeltaModulator::new();
    let _ = sdm.step(-1.0); // initial s = 0 quantizes high once
    for _ in 0..100 {
        assert_eq!(sdm.step(-1.0).to_real(), -1.0);
    }
}

/// The running output average converges to a constant input, and the error
/// bound tightens as the window grows.
#[test]
fn output_average_converges_to_constant_input() {
    for input in [-0.73, -0.2, 0.0, 0.37, 0.9] {
        let mut sdm = SigmaDeltaModulator::new();
        let mut sum = 0.0;
        let steps = 10_000;
        for _ in 0..steps {
            sum += sdm.step(input).to_real();
        }
        let average = sum / f64::from(steps);
        // First-order noise shaping: |average - input| <= |s_T - s_0| / T.
        assert!(
            (average - input).abs() < 4.0 / f64::from(steps),
            "input {input}, average {average}"
        );
    }
}

/// A slowly varying input is tracked by the running average as well.
#[test]
fn tracks_slow_inputs() {
    let mut sdm = SigmaDeltaModulator::new();
    let steps = 8192;
    let mut sum_in = 0.0;
    let mut sum_out = 0.0;
    for t in 0..steps {
        let u = 0.5 * (2.0 * std::f64::consts::PI * t as f64 / 4096.0).sin();
        sum_in += u;
        sum_out += sdm.step(u).to_real();
    }
    assert!(((sum_out - sum_in) / steps as f64).abs() < 0.001);
}

proptest! {
    /// The integrator stays within [-2, 2] for any bounded input sequence.
    #[test]
    fn integrator_stays_bounded(inputs in prop::collection::vec(-1.0f64..=1.0, 1..500)) {
        let mut sdm = SigmaDeltaModulator::new();
        for u in inputs {
            let _ = sdm.step(u);
            prop_assert!(sdm.integrator().abs() <= 2.0, "integrator {}", sdm.integrator());
        }
    }
}
