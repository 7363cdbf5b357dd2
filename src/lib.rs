//! # so3rs: sampling grids and Wigner coefficient indexing on SO(3)
//!
//! so3rs provides the discrete sampling grid and harmonic-coefficient indexing layer
//! underlying Wigner transforms of signals defined on the rotation group
//! $`\mathrm{SO}(3)`$, with the following capabilities:
//! - McEwen–Wiaux (`MW`) and pole-inclusive symmetric (`MWSS`) sampling schemes for the
//!   Euler angles $`(\alpha, \beta, \gamma)`$,
//! - bijective flattening of the sparse Wigner coefficient pyramid
//!   $`(\ell, m, n)`$ into a one-dimensional array offset under four storage
//!   conventions (zero-first or negative-first $`n`$-slice ordering, each either
//!   zero-padded or compact), and
//! - a reality-compacted index space storing only $`n \ge 0`$ coefficients of
//!   band-limited real signals.
//!
//! All operations are pure functions of an immutable parameter bundle
//! ([`parameters::So3Params`]); there is no shared mutable state and any number of
//! callers may invoke any operation concurrently.
//!
//! ## Features
//!
//! - `python`: Enables the Python bindings for the sampling and indexing
//!   functionalities.
//!
//! ## Usage
//!
//! For most items (structs, enums, functions, and traits), their usages are illustrated
//! in test functions. For more explanation, please consult this documentation.

pub mod bindings;
pub mod indexing;
pub mod io;
pub mod parameters;
pub mod sampling;
