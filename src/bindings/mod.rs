//! Bindings for core so3rs functionalities.

#[cfg(feature = "python")]
pub mod python;
