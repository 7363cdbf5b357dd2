//! Parameter bundles controlling SO(3) sampling grids and Wigner coefficient storage.

use std::fmt;
use std::str::FromStr;

use anyhow::{self, bail};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};


/// The maximum length accepted for sampling-scheme and storage labels at parsing
/// boundaries.
pub const MAX_LABEL_LEN: usize = 64;

// ================
// Enum definitions
// ================

/// An enumerated type for named discretisations of the Euler angles
/// $`(\alpha, \beta, \gamma)`$ on $`\mathrm{SO}(3)`$.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SamplingScheme {
    /// Variant for the McEwen–Wiaux sampling, which places its $`\beta`$ samples in
    /// $`(0, \pi]`$ and therefore never samples the north pole.
    Mw,

    /// Variant for the symmetrised McEwen–Wiaux sampling, which samples both poles
    /// $`\beta = 0`$ and $`\beta = \pi`$ at the cost of one extra $`\beta`$ ring.
    MwSs,
}

impl FromStr for SamplingScheme {
    type Err = anyhow::Error;

    /// Parses a sampling-scheme label. Recognised labels (case-insensitive) are `MW`
    /// and `MWSS` (or `MW_SS`).
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.len() > MAX_LABEL_LEN {
            bail!("Sampling-scheme label exceeds {MAX_LABEL_LEN} characters.");
        }
        match label.to_uppercase().as_str() {
            "MW" => Ok(SamplingScheme::Mw),
            "MWSS" | "MW_SS" => Ok(SamplingScheme::MwSs),
            _ => bail!("Invalid sampling scheme `{label}`."),
        }
    }
}

impl fmt::Display for SamplingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingScheme::Mw => write!(f, "McEwen–Wiaux"),
            SamplingScheme::MwSs => write!(f, "McEwen–Wiaux (symmetrised)"),
        }
    }
}

/// An enumerated type for the ordering of the $`n`$-slices of a flattened Wigner
/// coefficient array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageOrder {
    /// Variant for the ordering $`n = 0, -1, +1, -2, +2, \ldots`$ in which slices
    /// appear by increasing $`\lvert n \rvert`$, negative before positive.
    ZeroFirst,

    /// Variant for the monotone ordering $`n = -(N-1), \ldots, 0, \ldots, N-1`$.
    NegativeFirst,
}

impl FromStr for StorageOrder {
    type Err = anyhow::Error;

    /// Parses a storage-order label. Recognised labels (case-insensitive) are
    /// `ZeroFirst` and `NegativeFirst`.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        if label.len() > MAX_LABEL_LEN {
            bail!("Storage-order label exceeds {MAX_LABEL_LEN} characters.");
        }
        match label.to_uppercase().as_str() {
            "ZEROFIRST" => Ok(StorageOrder::ZeroFirst),
            "NEGATIVEFIRST" => Ok(StorageOrder::NegativeFirst),
            _ => bail!("Invalid storage order `{label}`."),
        }
    }
}

impl fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageOrder::ZeroFirst => write!(f, "zero-first"),
            StorageOrder::NegativeFirst => write!(f, "negative-first"),
        }
    }
}

/// An enumerated type for the conventions flattening the Wigner coefficient pyramid
/// $`(\ell, m, n)`$ into a one-dimensional array.
///
/// A convention fixes both the ordering of the $`n`$-slices ([`StorageOrder`]) and
/// whether the structurally-zero slots with $`\ell < \lvert n \rvert`$ are allocated
/// (padded) or omitted (compact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageConvention {
    /// Variant for zero-first slice ordering with zero-padded slices of size
    /// $`L^2`$ each.
    ZeroFirstPad,

    /// Variant for zero-first slice ordering with compact slices of size
    /// $`L^2 - n^2`$ each.
    ZeroFirstCompact,

    /// Variant for negative-first slice ordering with zero-padded slices of size
    /// $`L^2`$ each.
    NegFirstPad,

    /// Variant for negative-first slice ordering with compact slices of size
    /// $`L^2 - n^2`$ each.
    NegFirstCompact,
}

impl StorageConvention {
    /// Returns the $`n`$-slice ordering of this convention.
    pub fn order(&self) -> StorageOrder {
        match self {
            StorageConvention::ZeroFirstPad | StorageConvention::ZeroFirstCompact => {
                StorageOrder::ZeroFirst
            }
            StorageConvention::NegFirstPad | StorageConvention::NegFirstCompact => {
                StorageOrder::NegativeFirst
            }
        }
    }

    /// Indicates if this convention omits the structurally-zero slots with
    /// $`\ell < \lvert n \rvert`$.
    pub fn is_compact(&self) -> bool {
        match self {
            StorageConvention::ZeroFirstCompact | StorageConvention::NegFirstCompact => true,
            StorageConvention::ZeroFirstPad | StorageConvention::NegFirstPad => false,
        }
    }

    /// Composes a convention from a slice ordering and a padded/compact choice, as
    /// supplied separately by binding layers.
    pub fn from_order_and_layout(order: StorageOrder, compact: bool) -> Self {
        match (order, compact) {
            (StorageOrder::ZeroFirst, false) => StorageConvention::ZeroFirstPad,
            (StorageOrder::ZeroFirst, true) => StorageConvention::ZeroFirstCompact,
            (StorageOrder::NegativeFirst, false) => StorageConvention::NegFirstPad,
            (StorageOrder::NegativeFirst, true) => StorageConvention::NegFirstCompact,
        }
    }

    /// Returns the negative-first convention with the same padded/compact choice as
    /// this convention.
    pub fn to_negative_first(&self) -> Self {
        StorageConvention::from_order_and_layout(StorageOrder::NegativeFirst, self.is_compact())
    }
}

impl fmt::Display for StorageConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_compact() {
            write!(f, "{}, compact", self.order())
        } else {
            write!(f, "{}, zero-padded", self.order())
        }
    }
}

// =================
// Struct definition
// =================

/// A structure containing the immutable parameter bundle controlling SO(3) sampling
/// and Wigner coefficient storage.
///
/// Every sampling and indexing operation in this crate is a pure function of a
/// `So3Params` value; no operation mutates the bundle.
#[derive(Clone, Builder, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct So3Params {
    /// The angular (harmonic) band-limit $`L > 0`$: Wigner coefficients with degree
    /// $`\ell \ge L`$ are defined to be zero.
    pub harmonic_band_limit: usize,

    /// The orientational band-limit $`N > 0`$: Wigner coefficients with orientational
    /// order $`\lvert n \rvert \ge N`$ are defined to be zero. Typically
    /// $`1 \le N \le L`$, although this is not enforced here.
    pub orientational_band_limit: usize,

    /// The sampling scheme discretising the Euler angles.
    #[builder(default = "SamplingScheme::Mw")]
    pub sampling: SamplingScheme,

    /// The convention flattening $`(\ell, m, n)`$ into a one-dimensional array offset.
    /// The default is [`StorageConvention::NegFirstPad`]: monotone slice order keeps
    /// sequential $`\ell`$-sweeps local, and padding keeps slice boundaries at
    /// multiples of $`L^2`$.
    #[builder(default = "StorageConvention::NegFirstPad")]
    pub storage: StorageConvention,

    /// A boolean indicating if only $`n \ge 0`$ coefficients are stored, relying on
    /// the conjugate symmetry $`f_{\ell, -n} = f^*_{\ell, n}`$ of band-limited real
    /// signals to recover the $`n < 0`$ values.
    #[builder(default = "false")]
    pub reality: bool,
}

impl So3ParamsBuilder {
    fn validate(&self) -> Result<(), String> {
        let l = self
            .harmonic_band_limit
            .ok_or("No harmonic band-limit found.".to_string())?;
        let n = self
            .orientational_band_limit
            .ok_or("No orientational band-limit found.".to_string())?;
        if l == 0 {
            return Err("The harmonic band-limit must be positive.".to_string());
        }
        if n == 0 {
            return Err("The orientational band-limit must be positive.".to_string());
        }
        Ok(())
    }
}

impl So3Params {
    /// Returns a builder to construct a [`So3Params`] structure.
    pub fn builder() -> So3ParamsBuilder {
        So3ParamsBuilder::default()
    }

    /// Returns a copy of this bundle with the storage convention forced to the
    /// negative-first variant of the caller's padded/compact choice.
    ///
    /// The reality-compacted index space is always derived over a negative-first
    /// convention so that the discarded $`n < 0`$ coefficients occupy a single
    /// contiguous prefix of the full array.
    pub fn with_negative_first_order(&self) -> Self {
        let mut forced = self.clone();
        forced.storage = self.storage.to_negative_first();
        forced
    }
}

impl fmt::Display for So3Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Harmonic band-limit: {}", self.harmonic_band_limit)?;
        writeln!(
            f,
            "Orientational band-limit: {}",
            self.orientational_band_limit
        )?;
        writeln!(f, "Sampling scheme: {}", self.sampling)?;
        writeln!(f, "Storage convention: {}", self.storage)?;
        writeln!(
            f,
            "Real signal storage: {}",
            if self.reality { "yes" } else { "no" }
        )?;
        Ok(())
    }
}
