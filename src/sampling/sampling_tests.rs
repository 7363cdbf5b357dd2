use std::f64::consts::PI;

use approx::assert_relative_eq;

use crate::parameters::{SamplingScheme, So3Params};
use crate::sampling::{alpha, alphas, beta, betas, gamma, gammas, n_alpha, n_beta, n_gamma, n_samples};

fn params(l: usize, n: usize, sampling: SamplingScheme) -> So3Params {
    So3Params::builder()
        .harmonic_band_limit(l)
        .orientational_band_limit(n)
        .sampling(sampling)
        .build()
        .unwrap()
}

#[test]
fn test_sampling_counts_mw() {
    let p = params(4, 2, SamplingScheme::Mw);
    assert_eq!(n_alpha(&p), 7);
    assert_eq!(n_beta(&p), 4);
    assert_eq!(n_gamma(&p), 3);

    let p = params(1, 1, SamplingScheme::Mw);
    assert_eq!(n_alpha(&p), 1);
    assert_eq!(n_beta(&p), 1);
    assert_eq!(n_gamma(&p), 1);
}

#[test]
fn test_sampling_counts_mwss() {
    let p = params(4, 2, SamplingScheme::MwSs);
    assert_eq!(n_alpha(&p), 8);
    assert_eq!(n_beta(&p), 5);
    assert_eq!(n_gamma(&p), 3);
}

#[test]
fn test_sampling_n_samples_mw() {
    // ((2L-1)(L-1) + 1)(2N-1)
    let expected = [
        (1, 1, 1),
        (1, 2, 3),
        (1, 4, 7),
        (2, 1, 4),
        (2, 2, 12),
        (2, 4, 28),
        (4, 1, 22),
        (4, 2, 66),
        (4, 4, 154),
        (8, 1, 106),
        (8, 2, 318),
        (8, 4, 742),
    ];
    for (l, n, count) in expected {
        assert_eq!(
            n_samples(&params(l, n, SamplingScheme::Mw)),
            count,
            "MW sample count mismatch at L = {l}, N = {n}."
        );
    }
}

#[test]
fn test_sampling_n_samples_mwss() {
    // (2L(L-1) + 2)(2N-1)
    let expected = [
        (1, 1, 2),
        (1, 2, 6),
        (1, 4, 14),
        (2, 1, 6),
        (2, 2, 18),
        (2, 4, 42),
        (4, 1, 26),
        (4, 2, 78),
        (4, 4, 182),
        (8, 1, 114),
        (8, 2, 342),
        (8, 4, 798),
    ];
    for (l, n, count) in expected {
        assert_eq!(
            n_samples(&params(l, n, SamplingScheme::MwSs)),
            count,
            "MWSS sample count mismatch at L = {l}, N = {n}."
        );
    }
}

#[test]
fn test_sampling_alpha_angles() {
    let p = params(4, 2, SamplingScheme::Mw);
    assert_relative_eq!(alpha(0, &p), 0.0);
    assert_relative_eq!(alpha(1, &p), 2.0 * PI / 7.0);
    assert_relative_eq!(alpha(6, &p), 12.0 * PI / 7.0);
    assert!(alpha(6, &p) < 2.0 * PI);

    let p = params(4, 2, SamplingScheme::MwSs);
    assert_relative_eq!(alpha(1, &p), PI / 4.0);
    assert_relative_eq!(alpha(7, &p), 7.0 * PI / 4.0);
}

#[test]
fn test_sampling_beta_angles() {
    // MW covers (0, pi]: the north pole is never sampled, the south pole is.
    let p = params(4, 2, SamplingScheme::Mw);
    assert!(beta(0, &p) > 0.0);
    assert_relative_eq!(beta(0, &p), PI / 7.0);
    assert_relative_eq!(beta(3, &p), PI);

    // MWSS covers [0, pi] with both poles sampled.
    let p = params(4, 2, SamplingScheme::MwSs);
    assert_relative_eq!(beta(0, &p), 0.0);
    assert_relative_eq!(beta(2, &p), PI / 2.0);
    assert_relative_eq!(beta(4, &p), PI);
}

#[test]
fn test_sampling_gamma_angles() {
    // The gamma grid only depends on N.
    let p_mw = params(4, 2, SamplingScheme::Mw);
    let p_mwss = params(4, 2, SamplingScheme::MwSs);
    for g in 0..n_gamma(&p_mw) {
        assert_relative_eq!(gamma(g, &p_mw), gamma(g, &p_mwss));
    }
    assert_relative_eq!(gamma(0, &p_mw), 0.0);
    assert_relative_eq!(gamma(2, &p_mw), 4.0 * PI / 3.0);
}

#[test]
fn test_sampling_angle_grids() {
    let p = params(3, 2, SamplingScheme::Mw);
    assert_eq!(alphas(&p).len(), n_alpha(&p));
    assert_eq!(betas(&p).len(), n_beta(&p));
    assert_eq!(gammas(&p).len(), n_gamma(&p));
    assert_relative_eq!(alphas(&p)[2], alpha(2, &p));
    assert_relative_eq!(betas(&p)[1], beta(1, &p));
    assert_relative_eq!(gammas(&p)[1], gamma(1, &p));
}

#[test]
#[should_panic(expected = "Alpha index")]
fn test_sampling_alpha_domain() {
    let p = params(2, 1, SamplingScheme::Mw);
    alpha(3, &p);
}

#[test]
#[should_panic(expected = "Beta index")]
fn test_sampling_beta_domain() {
    let p = params(2, 1, SamplingScheme::MwSs);
    beta(3, &p);
}
