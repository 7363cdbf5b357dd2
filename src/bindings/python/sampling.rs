//! Python bindings for the SO(3) sampling grids.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bindings::python::{build_params, parse_scheme};
use crate::parameters::{So3Params, StorageConvention};
use crate::sampling;

/// Builds a parameter bundle for a sampling query; the storage convention is
/// immaterial here.
fn sampling_params(
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    sampling: &str,
) -> PyResult<So3Params> {
    let scheme = parse_scheme(sampling)?;
    build_params(
        harmonic_band_limit,
        orientational_band_limit,
        scheme,
        StorageConvention::NegFirstPad,
        false,
    )
}

/// Checks that an angle index lies inside its grid.
fn check_angle_index(index: i64, count: usize, angle: &str) -> PyResult<usize> {
    usize::try_from(index)
        .ok()
        .filter(|i| *i < count)
        .ok_or_else(|| {
            PyValueError::new_err(format!("{angle} index {index} lies outside [0, {count})."))
        })
}

/// A Python-exposed function to compute the sample counts of an SO(3) grid.
///
/// Returns the tuple `(n_samples, n_alpha, n_beta, n_gamma)`.
#[pyfunction]
pub(super) fn sampling_counts(
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    sampling: &str,
) -> PyResult<(usize, usize, usize, usize)> {
    let params = sampling_params(harmonic_band_limit, orientational_band_limit, sampling)?;
    Ok((
        sampling::n_samples(&params),
        sampling::n_alpha(&params),
        sampling::n_beta(&params),
        sampling::n_gamma(&params),
    ))
}

/// A Python-exposed function to convert an alpha index to its angle.
#[pyfunction]
pub(super) fn alpha_angle(
    a: i64,
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    sampling: &str,
) -> PyResult<f64> {
    let params = sampling_params(harmonic_band_limit, orientational_band_limit, sampling)?;
    let a = check_angle_index(a, sampling::n_alpha(&params), "Alpha")?;
    Ok(sampling::alpha(a, &params))
}

/// A Python-exposed function to convert a beta index to its angle.
#[pyfunction]
pub(super) fn beta_angle(
    b: i64,
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    sampling: &str,
) -> PyResult<f64> {
    let params = sampling_params(harmonic_band_limit, orientational_band_limit, sampling)?;
    let b = check_angle_index(b, sampling::n_beta(&params), "Beta")?;
    Ok(sampling::beta(b, &params))
}

/// A Python-exposed function to convert a gamma index to its angle.
#[pyfunction]
pub(super) fn gamma_angle(
    g: i64,
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    sampling: &str,
) -> PyResult<f64> {
    let params = sampling_params(harmonic_band_limit, orientational_band_limit, sampling)?;
    let g = check_angle_index(g, sampling::n_gamma(&params), "Gamma")?;
    Ok(sampling::gamma(g, &params))
}
