//! Python bindings for the Wigner coefficient indexing.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::bindings::python::{build_params, parse_convention};
use crate::indexing;
use crate::indexing::reality;
use crate::parameters::{SamplingScheme, So3Params};

/// Builds a parameter bundle for an indexing query; the sampling scheme is
/// immaterial here.
fn indexing_params(
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    order: &str,
    storage: &str,
    reality: bool,
) -> PyResult<So3Params> {
    let convention = parse_convention(order, storage)?;
    build_params(
        harmonic_band_limit,
        orientational_band_limit,
        SamplingScheme::Mw,
        convention,
        reality,
    )
}

/// A Python-exposed function to compute the size of the flattened Wigner
/// coefficient array.
#[pyfunction]
pub(super) fn flmn_size(
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    order: &str,
    storage: &str,
    reality: bool,
) -> PyResult<usize> {
    let params = indexing_params(
        harmonic_band_limit,
        orientational_band_limit,
        order,
        storage,
        reality,
    )?;
    Ok(indexing::flmn_size(&params))
}

/// A Python-exposed function to convert harmonic indices `(el, m, n)` to the flat
/// coefficient-array index.
#[pyfunction]
pub(super) fn elmn_to_index(
    el: i64,
    m: i64,
    n: i64,
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    order: &str,
    storage: &str,
    reality: bool,
) -> PyResult<usize> {
    let params = indexing_params(
        harmonic_band_limit,
        orientational_band_limit,
        order,
        storage,
        reality,
    )?;
    if reality {
        reality::elmn_to_index_real(el, m, n, &params)
    } else {
        indexing::elmn_to_index(el, m, n, &params)
    }
    .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// A Python-exposed function to convert a flat coefficient-array index back to its
/// harmonic indices `(el, m, n)`.
#[pyfunction]
pub(super) fn index_to_elmn(
    ind: i64,
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    order: &str,
    storage: &str,
    reality: bool,
) -> PyResult<(i64, i64, i64)> {
    let params = indexing_params(
        harmonic_band_limit,
        orientational_band_limit,
        order,
        storage,
        reality,
    )?;
    let ind = usize::try_from(ind)
        .map_err(|_| PyValueError::new_err("Array index must be a non-negative integer."))?;
    if reality {
        reality::index_to_elmn_real(ind, &params)
    } else {
        indexing::index_to_elmn(ind, &params)
    }
    .map_err(|err| PyValueError::new_err(err.to_string()))
}
