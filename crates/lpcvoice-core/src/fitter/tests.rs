//! Tests for coefficient estimation.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::*;

/// x[n] = sum_k taps[k] * x[n-1-k] + white noise in [-1, 1).
fn ar_process(taps: &[f64], len: usize, seed: u64) -> Vec<f64> {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut x = vec![0.0; len];
    for n in 0..len {
        let mut s: f64 = rng.gen_range(-1.0..1.0);
        for (k, &t) in taps.iter().enumerate() {
            if n > k {
                s += t * x[n - 1 - k];
            }
        }
        x[n] = s;
    }
    x
}

fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len());
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() < tol,
            "coefficient {}: got {}, expected {}",
            i,
            a,
            e
        );
    }
}

#[test]
fn test_autocorrelation_values() {
    let r = autocorrelation(&[1.0, 2.0, 3.0], 2);
    assert_eq!(r, vec![14.0, 8.0, 3.0]);
}

#[test]
fn test_burg_ar1() {
    let x = ar_process(&[0.9], 4000, 7);
    let a = BurgFitter.fit_frame(&x, 1).unwrap();
    assert_close(&a, &[1.0, -0.9], 0.03);
}

#[test]
fn test_autocorrelation_ar1() {
    let x = ar_process(&[0.9], 4000, 7);
    let a = AutocorrelationFitter.fit_frame(&x, 1).unwrap();
    assert_close(&a, &[1.0, -0.9], 0.03);
}

#[test]
fn test_burg_ar2() {
    let x = ar_process(&[1.5, -0.8], 8000, 11);
    let a = BurgFitter.fit_frame(&x, 2).unwrap();
    assert_close(&a, &[1.0, -1.5, 0.8], 0.05);
}

#[test]
fn test_autocorrelation_ar2() {
    let x = ar_process(&[1.5, -0.8], 8000, 11);
    let a = AutocorrelationFitter.fit_frame(&x, 2).unwrap();
    assert_close(&a, &[1.0, -1.5, 0.8], 0.05);
}

#[test]
fn test_higher_order_taps_near_zero_for_ar2() {
    let x = ar_process(&[1.5, -0.8], 8000, 3);
    for fitter in [FitMethod::Burg.fitter(), FitMethod::Autocorrelation.fitter()] {
        let a = fitter.fit_frame(&x, 6).unwrap();
        assert_eq!(a[0], 1.0);
        for (k, &tap) in a.iter().enumerate().skip(3) {
            assert!(tap.abs() < 0.1, "{}: tap {} = {}", fitter.name(), k, tap);
        }
    }
}

#[test]
fn test_silent_frame_gives_identity() {
    let silence = vec![0.0; 64];
    assert_eq!(
        BurgFitter.fit_frame(&silence, 4).unwrap(),
        vec![1.0, 0.0, 0.0, 0.0, 0.0]
    );
    assert_eq!(
        AutocorrelationFitter.fit_frame(&silence, 4).unwrap(),
        vec![1.0, 0.0, 0.0, 0.0, 0.0]
    );
}

#[test]
fn test_pure_tone_stays_finite() {
    let tone: Vec<f64> = (0..200).map(|n| (0.1 * n as f64).sin()).collect();
    for fitter in [FitMethod::Burg.fitter(), FitMethod::Autocorrelation.fitter()] {
        let a = fitter.fit_frame(&tone, 10).unwrap();
        assert!(a.iter().all(|c| c.is_finite()), "{}: {:?}", fitter.name(), a);
    }
}

#[test]
fn test_order_too_large() {
    let frame = vec![1.0; 8];
    assert!(matches!(
        BurgFitter.fit_frame(&frame, 8),
        Err(LpcError::Fit { .. })
    ));
    assert!(matches!(
        AutocorrelationFitter.fit_frame(&frame, 9),
        Err(LpcError::Fit { .. })
    ));
}

#[test]
fn test_batch_fit_one_set_per_frame() {
    let x = ar_process(&[0.5], 1000, 5);
    let frames = FrameSet::from_waveform(&x, 200, 100);
    let coeffs = BurgFitter.fit(&frames, 4).unwrap();

    assert_eq!(coeffs.len(), frames.len());
    assert_eq!(coeffs.order(), 4);
    assert!(coeffs.iter().all(|set| set[0] == 1.0));
}

#[test]
fn test_batch_fit_rejects_order_at_frame_length() {
    let frames = FrameSet::from_waveform(&[0.5; 100], 10, 5);
    assert!(AutocorrelationFitter.fit(&frames, 10).is_err());
}

#[test]
fn test_batch_fit_empty() {
    let frames = FrameSet::from_waveform(&[0.5; 10], 200, 100);
    let coeffs = BurgFitter.fit(&frames, 10).unwrap();
    assert!(coeffs.is_empty());
}

#[test]
fn test_fixed_broadcast() {
    let frames = FrameSet::from_waveform(&[0.0; 50], 10, 10);
    let fitter = FixedFitter::broadcast(vec![1.0, -0.5, 0.25]);
    let coeffs = fitter.fit(&frames, 2).unwrap();

    assert_eq!(coeffs.len(), 4);
    assert!(coeffs.iter().all(|set| set == [1.0, -0.5, 0.25]));
    assert!(fitter.fit(&frames, 3).is_err());
}

#[test]
fn test_fixed_per_frame_must_match_frame_count() {
    let frames = FrameSet::from_waveform(&[0.0; 50], 10, 10);
    let fitter = FixedFitter::per_frame(Coefficients::identity(3, 2));
    assert!(matches!(
        fitter.fit(&frames, 2),
        Err(LpcError::DimensionMismatch { expected: 4, found: 3, .. })
    ));

    let fitter = FixedFitter::per_frame(Coefficients::identity(4, 2));
    assert_eq!(fitter.fit(&frames, 2).unwrap().len(), 4);
    assert!(fitter.fit(&frames, 3).is_err());
}

#[test]
fn test_fit_method_fitter_names() {
    assert_eq!(FitMethod::Burg.fitter().name(), "burg");
    assert_eq!(FitMethod::Autocorrelation.fitter().name(), "autocorrelation");
}
