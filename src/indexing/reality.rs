//! Reality-compacted indexing for band-limited real signals.
//!
//! A band-limited real signal on $`\mathrm{SO}(3)`$ satisfies the conjugate
//! symmetry $`f_{\ell, -n} = f^*_{\ell, n}`$, so only the $`n \ge 0`$
//! coefficients need to be stored. Rather than duplicating the flattening
//! arithmetic, the reduced index space is derived from the full one: the storage
//! convention is forced to its negative-first variant (so that the discarded
//! $`n < 0`$ coefficients occupy a single contiguous prefix), and the offset of the
//! first $`n = 0`$ coefficient is subtracted from every full index.

use anyhow::{self, bail};

use crate::indexing::{elmn_to_index, flmn_size, index_to_elmn};
use crate::parameters::So3Params;

#[cfg(test)]
#[path = "reality_tests.rs"]
mod reality_tests;

/// Converts harmonic indices $`(\ell, m, n)`$, $`n \ge 0`$, to the flat index of
/// the coefficient in the reality-compacted array.
///
/// The caller's zero-first/negative-first choice is immaterial here: the reduced
/// space is always derived over the negative-first variant of the caller's
/// padded/compact choice.
///
/// # Arguments
///
/// * `el` - The harmonic degree $`\ell \in [0, L)`$.
/// * `m` - The azimuthal order $`m \in [-\ell, \ell]`$.
/// * `n` - The orientational order, $`n \in [0, N-1]`$ and additionally
/// $`n \le \ell`$ for compact conventions.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// A `Result` containing the flat index in the reality-compacted array.
///
/// # Errors
///
/// Errors when any index lies outside its admissible range; in particular, a
/// negative `n` is rejected since its coefficient is not stored.
pub fn elmn_to_index_real(
    el: i64,
    m: i64,
    n: i64,
    params: &So3Params,
) -> Result<usize, anyhow::Error> {
    if n < 0 {
        bail!("Orientational order {n} is negative; real storage only holds n >= 0.");
    }
    let forced = params.with_negative_first_order();
    let base = elmn_to_index(0, 0, 0, &forced)?;
    let ind = elmn_to_index(el, m, n, &forced)?;
    Ok(ind - base)
}

/// Converts a flat index of the reality-compacted array back to its harmonic
/// indices $`(\ell, m, n)`$, $`n \ge 0`$; the exact inverse of
/// [`elmn_to_index_real`].
///
/// # Arguments
///
/// * `ind` - The flat index in `[0, size)` where `size` is the reality-compacted
/// array size of the bundle's padded/compact choice.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// A `Result` containing the triple $`(\ell, m, n)`$.
///
/// # Errors
///
/// Errors when `ind` lies outside the reality-compacted array.
pub fn index_to_elmn_real(
    ind: usize,
    params: &So3Params,
) -> Result<(i64, i64, i64), anyhow::Error> {
    let mut forced = params.with_negative_first_order();
    forced.reality = true;
    let size = flmn_size(&forced);
    if ind >= size {
        bail!("Flat index {ind} lies outside [0, {size}) of the real coefficient array.");
    }
    let base = elmn_to_index(0, 0, 0, &forced)?;
    index_to_elmn(base + ind, &forced)
}
