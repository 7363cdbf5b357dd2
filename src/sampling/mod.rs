//! Discrete sampling grids for the Euler angles $`(\alpha, \beta, \gamma)`$ on
//! $`\mathrm{SO}(3)`$.
//!
//! The sampling is uniform in angle per scheme definition, not uniform in area on
//! the rotation group. The two schemes differ only in their $`\alpha`$ and
//! $`\beta`$ grids: McEwen–Wiaux ([`SamplingScheme::Mw`]) keeps its $`\beta`$
//! samples in $`(0, \pi]`$ so that the associated Wigner-$`d`$ recursions never see
//! the degenerate north pole, whereas the symmetrised variant
//! ([`SamplingScheme::MwSs`]) samples both poles explicitly at the cost of one
//! extra $`\beta`$ ring.

use std::f64::consts::PI;

use crate::parameters::{SamplingScheme, So3Params};

#[cfg(test)]
#[path = "sampling_tests.rs"]
mod sampling_tests;

/// Computes the total number of samples on the rotation group.
///
/// Only one sample is taken on each sampled pole, where the $`\alpha`$ rotation
/// degenerates into the $`\gamma`$ rotation, hence
///
/// ```math
/// n_{\mathrm{MW}} = [(2L-1)(L-1) + 1](2N-1), \quad
/// n_{\mathrm{MWSS}} = [2L(L-1) + 2](2N-1).
/// ```
///
/// # Arguments
///
/// * `params` - The parameter bundle; only the band-limits and the sampling scheme
/// are read.
///
/// # Returns
///
/// The number of samples on $`\mathrm{SO}(3)`$.
pub fn n_samples(params: &So3Params) -> usize {
    let l = params.harmonic_band_limit;
    let n = params.orientational_band_limit;
    match params.sampling {
        SamplingScheme::Mw => ((2 * l - 1) * (l - 1) + 1) * (2 * n - 1),
        SamplingScheme::MwSs => (2 * l * (l - 1) + 2) * (2 * n - 1),
    }
}

/// Computes the number of $`\alpha`$ samples.
pub fn n_alpha(params: &So3Params) -> usize {
    let l = params.harmonic_band_limit;
    match params.sampling {
        SamplingScheme::Mw => 2 * l - 1,
        SamplingScheme::MwSs => 2 * l,
    }
}

/// Computes the number of $`\beta`$ samples.
pub fn n_beta(params: &So3Params) -> usize {
    let l = params.harmonic_band_limit;
    match params.sampling {
        SamplingScheme::Mw => l,
        SamplingScheme::MwSs => l + 1,
    }
}

/// Computes the number of $`\gamma`$ samples. The $`\gamma`$ grid is
/// scheme-independent.
pub fn n_gamma(params: &So3Params) -> usize {
    2 * params.orientational_band_limit - 1
}

/// Converts an $`\alpha`$ index to its angle.
///
/// # Arguments
///
/// * `a` - The $`\alpha`$ index in `[0, n_alpha)`.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// The angle $`\alpha_a \in [0, 2\pi)`$.
///
/// # Panics
///
/// Panics if `a` lies outside the grid.
pub fn alpha(a: usize, params: &So3Params) -> f64 {
    assert!(
        a < n_alpha(params),
        "Alpha index {a} lies outside [0, {}).",
        n_alpha(params)
    );
    let l = params.harmonic_band_limit as f64;
    match params.sampling {
        SamplingScheme::Mw => 2.0 * (a as f64) * PI / (2.0 * l - 1.0),
        SamplingScheme::MwSs => 2.0 * (a as f64) * PI / (2.0 * l),
    }
}

/// Converts a $`\beta`$ index to its angle.
///
/// For [`SamplingScheme::Mw`] the samples $`\beta_b = (2b+1)\pi/(2L-1)`$ lie in
/// $`(0, \pi]`$; for [`SamplingScheme::MwSs`] the samples $`\beta_b = 2b\pi/(2L)`$
/// cover $`[0, \pi]`$ including both poles.
///
/// # Arguments
///
/// * `b` - The $`\beta`$ index in `[0, n_beta)`.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// The angle $`\beta_b`$.
///
/// # Panics
///
/// Panics if `b` lies outside the grid.
pub fn beta(b: usize, params: &So3Params) -> f64 {
    assert!(
        b < n_beta(params),
        "Beta index {b} lies outside [0, {}).",
        n_beta(params)
    );
    let l = params.harmonic_band_limit as f64;
    match params.sampling {
        SamplingScheme::Mw => (2.0 * (b as f64) + 1.0) * PI / (2.0 * l - 1.0),
        SamplingScheme::MwSs => 2.0 * (b as f64) * PI / (2.0 * l),
    }
}

/// Converts a $`\gamma`$ index to its angle $`\gamma_g = 2g\pi/(2N-1) \in [0, 2\pi)`$.
///
/// # Arguments
///
/// * `g` - The $`\gamma`$ index in `[0, n_gamma)`.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// The angle $`\gamma_g`$.
///
/// # Panics
///
/// Panics if `g` lies outside the grid.
pub fn gamma(g: usize, params: &So3Params) -> f64 {
    assert!(
        g < n_gamma(params),
        "Gamma index {g} lies outside [0, {}).",
        n_gamma(params)
    );
    let n = params.orientational_band_limit as f64;
    2.0 * (g as f64) * PI / (2.0 * n - 1.0)
}

/// Returns the full grid of $`\alpha`$ sample angles.
pub fn alphas(params: &So3Params) -> Vec<f64> {
    (0..n_alpha(params)).map(|a| alpha(a, params)).collect()
}

/// Returns the full grid of $`\beta`$ sample angles.
pub fn betas(params: &So3Params) -> Vec<f64> {
    (0..n_beta(params)).map(|b| beta(b, params)).collect()
}

/// Returns the full grid of $`\gamma`$ sample angles.
pub fn gammas(params: &So3Params) -> Vec<f64> {
    (0..n_gamma(params)).map(|g| gamma(g, params)).collect()
}
