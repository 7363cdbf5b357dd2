//! Bijective flattening of the Wigner coefficient pyramid $`(\ell, m, n)`$ into
//! one-dimensional array offsets.
//!
//! For a fixed orientational order $`n`$, the coefficients $`f_{\ell m n}`$ with
//! $`\ell \in [0, L)`$ and $`m \in [-\ell, \ell]`$ form a pyramid of $`L^2`$ slots in
//! the standard single-index spherical-harmonic packing $`\ell^2 + \ell + m`$.
//! A [`StorageConvention`](crate::parameters::StorageConvention) stacks these
//! $`n`$-slices into a single array, either zero-padded (every slice occupies
//! $`L^2`$ slots, including the structurally-zero slots with
//! $`\ell < \lvert n \rvert`$) or compact (each slice only holds its
//! $`L^2 - n^2`$ non-trivial slots). Cumulative compact slice sizes are evaluated
//! with the closed form $`\sum_{k=0}^{K} k^2 = K(K+1)(2K+1)/6`$ instead of explicit
//! enumeration.
//!
//! The forward and inverse maps are exact inverses of each other over the entire
//! flat range; this round-trip is the central correctness property of the module
//! and is exercised exhaustively in the tests.

use anyhow::{self, bail};
use num::integer::Roots;

use crate::parameters::{So3Params, StorageConvention, StorageOrder};

pub mod reality;

#[cfg(test)]
#[path = "indexing_tests.rs"]
mod indexing_tests;

/// Computes the size of the flattened Wigner coefficient array described by a
/// parameter bundle.
///
/// ```math
/// \begin{aligned}
/// \text{padded:} \quad & (2N-1)L^2
///     && \text{or } N L^2 \text{ for real signals}, \\
/// \text{compact:} \quad & (2N-1)\left[3L^2 - N(N-1)\right]/3
///     && \text{or } N\left[6L^2 - (N-1)(2N-1)\right]/6 \text{ for real signals}.
/// \end{aligned}
/// ```
///
/// The compact forms follow from $`\sum_{n=0}^{N-1} (L^2 - n^2)`$ and its
/// negative-extended variant.
///
/// # Arguments
///
/// * `params` - The parameter bundle; the band-limits, the storage convention and
/// the reality flag are read.
///
/// # Returns
///
/// The number of slots in the coefficient array.
pub fn flmn_size(params: &So3Params) -> usize {
    let l = i64::try_from(params.harmonic_band_limit)
        .expect("Unable to convert the harmonic band-limit to `i64`.");
    let n = i64::try_from(params.orientational_band_limit)
        .expect("Unable to convert the orientational band-limit to `i64`.");
    let size = if params.reality {
        if params.storage.is_compact() {
            n * (6 * l * l - (n - 1) * (2 * n - 1)) / 6
        } else {
            n * l * l
        }
    } else {
        complex_flmn_size(l, n, params.storage.is_compact())
    };
    usize::try_from(size).expect("Unable to convert the coefficient array size to `usize`.")
}

/// Computes the size of the full (complex-signal) coefficient array, disregarding
/// the reality flag.
fn complex_flmn_size(l: i64, n: i64, compact: bool) -> i64 {
    if compact {
        (2 * n - 1) * (3 * l * l - n * (n - 1)) / 3
    } else {
        (2 * n - 1) * l * l
    }
}

/// Converts harmonic indices $`(\ell, m, n)`$ to the flat index of the coefficient
/// in the array described by a parameter bundle.
///
/// The mapping covers the full complex-signal coefficient set regardless of the
/// bundle's reality flag; the reality-compacted index space is provided by
/// [`reality::elmn_to_index_real`].
///
/// # Arguments
///
/// * `el` - The harmonic degree $`\ell \in [0, L)`$.
/// * `m` - The azimuthal order $`m \in [-\ell, \ell]`$.
/// * `n` - The orientational order, $`n \in [-(N-1), N-1]`$ for padded conventions
/// and additionally $`\lvert n \rvert \le \ell`$ for compact conventions.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// A `Result` containing the flat index.
///
/// # Errors
///
/// Errors when any index lies outside its admissible range.
pub fn elmn_to_index(el: i64, m: i64, n: i64, params: &So3Params) -> Result<usize, anyhow::Error> {
    let l_lim = i64::try_from(params.harmonic_band_limit)
        .expect("Unable to convert the harmonic band-limit to `i64`.");
    let n_lim = i64::try_from(params.orientational_band_limit)
        .expect("Unable to convert the orientational band-limit to `i64`.");
    if el < 0 || el >= l_lim {
        bail!("Harmonic degree {el} lies outside [0, {l_lim}).");
    }
    if m.abs() > el {
        bail!("Azimuthal order {m} lies outside [-{el}, {el}].");
    }
    if n.abs() > n_lim - 1 {
        bail!(
            "Orientational order {n} lies outside [-{}, {}].",
            n_lim - 1,
            n_lim - 1
        );
    }
    let lsq = l_lim * l_lim;
    let absn = n.abs();
    let ind = match params.storage {
        StorageConvention::ZeroFirstPad => {
            let offset = (if n < 0 { -2 * n - 1 } else { 2 * n }) * lsq;
            offset + el * el + el + m
        }
        StorageConvention::NegFirstPad => {
            let offset = (n_lim - 1 + n) * lsq;
            offset + el * el + el + m
        }
        StorageConvention::ZeroFirstCompact => {
            if absn > el {
                bail!("Tried to access a coefficient with |n| > l in compact storage.");
            }
            // Cumulative compact size of all slices with magnitude below |n|; the
            // positive slice follows its same-magnitude negative slice.
            let mut offset = (2 * absn - 1) * (3 * lsq - absn * (absn - 1)) / 3;
            if n >= 0 {
                offset += lsq - n * n;
            }
            offset + el * el - n * n + el + m
        }
        StorageConvention::NegFirstCompact => {
            if absn > el {
                bail!("Tried to access a coefficient with |n| > l in compact storage.");
            }
            // Padded slice base corrected by the cumulative compact savings, then by
            // the asymmetry of the slice sizes as n crosses zero.
            let mut offset = (n_lim - 1 + n) * lsq - (2 * n_lim - 1) * (n_lim - 1) * n_lim / 6;
            if n <= 0 {
                offset += absn * (2 * absn + 1) * (absn + 1) / 6;
            } else {
                offset -= absn * (2 * absn - 1) * (absn - 1) / 6;
            }
            offset + el * el - n * n + el + m
        }
    };
    Ok(usize::try_from(ind).expect("Unable to convert the flat index to `usize`."))
}

/// Converts a flat coefficient-array index back to its harmonic indices
/// $`(\ell, m, n)`$; the exact inverse of [`elmn_to_index`].
///
/// For padded conventions the $`n`$-slice is recovered by integer division by
/// $`L^2`$ (with sign decoding for zero-first ordering). For compact conventions
/// the slice is located by an $`O(N)`$ scan subtracting per-slice sizes
/// $`L^2 - n^2`$ in slice order, since compact slice boundaries are not evenly
/// spaced. Within the located slice, $`\ell = \lfloor\sqrt{r}\rfloor`$ and
/// $`m = r - \ell^2 - \ell`$ where $`r`$ is the position within the
/// $`(\ell, m)`$ pyramid.
///
/// # Arguments
///
/// * `ind` - The flat index in `[0, size)` where `size` is the full complex-signal
/// array size of the bundle's convention.
/// * `params` - The parameter bundle.
///
/// # Returns
///
/// A `Result` containing the triple $`(\ell, m, n)`$.
///
/// # Errors
///
/// Errors when `ind` lies outside the array.
pub fn index_to_elmn(ind: usize, params: &So3Params) -> Result<(i64, i64, i64), anyhow::Error> {
    let l_lim = i64::try_from(params.harmonic_band_limit)
        .expect("Unable to convert the harmonic band-limit to `i64`.");
    let n_lim = i64::try_from(params.orientational_band_limit)
        .expect("Unable to convert the orientational band-limit to `i64`.");
    let lsq = l_lim * l_lim;
    let size = complex_flmn_size(l_lim, n_lim, params.storage.is_compact());
    let ind = i64::try_from(ind).expect("Unable to convert the flat index to `i64`.");
    if ind >= size {
        bail!("Flat index {ind} lies outside [0, {size}).");
    }
    match params.storage {
        StorageConvention::ZeroFirstPad => {
            let slice = ind / lsq;
            let n = if slice % 2 == 0 {
                slice / 2
            } else {
                -(slice + 1) / 2
            };
            let (el, m) = split_pyramid_position(ind % lsq);
            Ok((el, m, n))
        }
        StorageConvention::NegFirstPad => {
            let n = ind / lsq - (n_lim - 1);
            let (el, m) = split_pyramid_position(ind % lsq);
            Ok((el, m, n))
        }
        StorageConvention::ZeroFirstCompact | StorageConvention::NegFirstCompact => {
            let mut remaining = ind;
            for n in compact_slice_order(params.storage.order(), n_lim) {
                let slice_size = lsq - n * n;
                if remaining < slice_size {
                    let (el, m) = split_pyramid_position(remaining + n * n);
                    return Ok((el, m, n));
                }
                remaining -= slice_size;
            }
            panic!("Flat index {ind} was not located in any compact slice.");
        }
    }
}

/// Splits a 0-based position within the $`(\ell, m)`$ pyramid into its degree and
/// azimuthal order, inverting $`r = \ell^2 + \ell + m`$.
fn split_pyramid_position(r: i64) -> (i64, i64) {
    let el = r.sqrt();
    (el, r - el * el - el)
}

/// Returns the $`n`$-slice traversal order of a compact convention: monotone for
/// negative-first ordering, by increasing magnitude (negative before positive) for
/// zero-first ordering.
fn compact_slice_order(order: StorageOrder, n_lim: i64) -> Box<dyn Iterator<Item = i64>> {
    match order {
        StorageOrder::NegativeFirst => Box::new(-(n_lim - 1)..n_lim),
        StorageOrder::ZeroFirst => Box::new((0..n_lim).flat_map(|k| {
            if k == 0 {
                vec![0]
            } else {
                vec![-k, k]
            }
            .into_iter()
        })),
    }
}

/// Returns an iterator over every storable $`(\ell, m, n)`$ triple of a parameter
/// bundle, in increasing flat-index order of its convention.
///
/// For padded conventions this includes the structurally-zero slots with
/// $`\ell < \lvert n \rvert`$, so that the iteration enumerates every array slot.
/// With the reality flag set, only $`n \ge 0`$ triples are yielded, in the order of
/// the reality-compacted index space of [`reality::elmn_to_index_real`].
pub fn harmonic_indices(params: &So3Params) -> impl Iterator<Item = (i64, i64, i64)> {
    let l_lim = i64::try_from(params.harmonic_band_limit)
        .expect("Unable to convert the harmonic band-limit to `i64`.");
    let n_lim = i64::try_from(params.orientational_band_limit)
        .expect("Unable to convert the orientational band-limit to `i64`.");
    let compact = params.storage.is_compact();
    let slices: Box<dyn Iterator<Item = i64>> = if params.reality {
        Box::new(0..n_lim)
    } else {
        compact_slice_order(params.storage.order(), n_lim)
    };
    slices.flat_map(move |n| {
        let start_el = if compact { n.abs() } else { 0 };
        (start_el..l_lim).flat_map(move |el| (-el..=el).map(move |m| (el, m, n)))
    })
}
