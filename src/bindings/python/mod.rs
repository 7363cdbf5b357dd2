//! Python bindings for so3rs.
//!
//! The binding layer validates untyped inputs (positive band-limits, recognised
//! scheme/order/storage labels, in-range indices) and re-raises core failures as
//! Python exceptions. All indices are 0-based on both sides of the boundary.

use std::str::FromStr;

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::parameters::{SamplingScheme, So3Params, StorageConvention, StorageOrder, MAX_LABEL_LEN};

pub mod indexing;
pub mod sampling;

/// Parses a sampling-scheme label supplied by Python.
fn parse_scheme(label: &str) -> PyResult<SamplingScheme> {
    SamplingScheme::from_str(label).map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Parses the order and storage-type labels supplied by Python into a storage
/// convention.
fn parse_convention(order: &str, storage: &str) -> PyResult<StorageConvention> {
    let order =
        StorageOrder::from_str(order).map_err(|err| PyValueError::new_err(err.to_string()))?;
    if storage.len() > MAX_LABEL_LEN {
        return Err(PyValueError::new_err(format!(
            "Storage-type label exceeds {MAX_LABEL_LEN} characters."
        )));
    }
    let compact = match storage.to_lowercase().as_str() {
        "padded" => false,
        "compact" => true,
        _ => {
            return Err(PyValueError::new_err(format!(
                "Invalid storage type `{storage}`."
            )))
        }
    };
    Ok(StorageConvention::from_order_and_layout(order, compact))
}

/// Builds a validated parameter bundle from untyped Python inputs.
fn build_params(
    harmonic_band_limit: i64,
    orientational_band_limit: i64,
    sampling: SamplingScheme,
    storage: StorageConvention,
    reality: bool,
) -> PyResult<So3Params> {
    if harmonic_band_limit <= 0 {
        return Err(PyValueError::new_err(
            "Harmonic band-limit must be a positive integer.",
        ));
    }
    if orientational_band_limit <= 0 {
        return Err(PyValueError::new_err(
            "Orientational band-limit must be a positive integer.",
        ));
    }
    So3Params::builder()
        .harmonic_band_limit(harmonic_band_limit as usize)
        .orientational_band_limit(orientational_band_limit as usize)
        .sampling(sampling)
        .storage(storage)
        .reality(reality)
        .build()
        .map_err(|err| PyValueError::new_err(err.to_string()))
}

/// Python module for so3rs implemented in Rust.
#[pymodule]
pub fn so3rs(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    // --------------
    // Python logging
    // --------------
    pyo3_log::init();

    // -------
    // Version
    // -------
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // ---------
    // Functions
    // ---------
    m.add_function(wrap_pyfunction!(sampling::sampling_counts, m)?)?;
    m.add_function(wrap_pyfunction!(sampling::alpha_angle, m)?)?;
    m.add_function(wrap_pyfunction!(sampling::beta_angle, m)?)?;
    m.add_function(wrap_pyfunction!(sampling::gamma_angle, m)?)?;
    m.add_function(wrap_pyfunction!(indexing::flmn_size, m)?)?;
    m.add_function(wrap_pyfunction!(indexing::elmn_to_index, m)?)?;
    m.add_function(wrap_pyfunction!(indexing::index_to_elmn, m)?)?;

    Ok(())
}
