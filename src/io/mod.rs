//! Input/output of SO(3) parameter bundles.
//!
//! Parameter bundles are (de)serialisable so that a host program can keep the
//! sampling and storage configuration of a transform in a YAML file alongside its
//! data.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{self, bail, format_err};
use serde::{de::DeserializeOwned, Serialize};
use serde_yaml;

use crate::parameters::So3Params;


/// Reads a configuration YAML file and deserialises it into an appropriate
/// structure.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (with its `.yml` or `.yaml`
/// extension).
///
/// # Returns
///
/// A `Result` containing the structure deserialised from the read-in file.
pub fn read_so3_yaml<T, P: AsRef<Path>>(name: P) -> Result<T, anyhow::Error>
where
    T: DeserializeOwned,
{
    let mut reader = BufReader::new(File::open(name).map_err(|err| format_err!(err))?);
    serde_yaml::from_reader(&mut reader).map_err(|err| format_err!(err))
}

/// Serialises a structure and writes into a configuration YAML file.
///
/// # Arguments
///
/// * `name` - The name of the YAML file to be written (without extensions). The
/// resulting file will have the `.yml` extension.
///
/// # Returns
///
/// A `Result` indicating if the serialisation and writing processes have been
/// successful.
pub fn write_so3_yaml<T, P: AsRef<Path>>(name: P, value: &T) -> Result<(), anyhow::Error>
where
    T: Serialize,
{
    let mut path = name.as_ref().to_path_buf();
    path.set_extension("yml");
    let mut writer = BufWriter::new(File::create(path)?);
    serde_yaml::to_writer(&mut writer, value).map_err(|err| format_err!(err))
}

/// Reads a parameter bundle from a YAML file, re-checking the band-limit
/// positivity that the builder would normally enforce.
///
/// # Arguments
///
/// * `name` - The name of the file to be read in (with its `.yml` or `.yaml`
/// extension).
///
/// # Returns
///
/// A `Result` containing the deserialised [`So3Params`].
///
/// # Errors
///
/// Errors when the file cannot be read or deserialised, or when a deserialised
/// band-limit is not positive.
pub fn read_params<P: AsRef<Path>>(name: P) -> Result<So3Params, anyhow::Error> {
    let params: So3Params = read_so3_yaml(&name)?;
    if params.harmonic_band_limit == 0 || params.orientational_band_limit == 0 {
        bail!(
            "Band-limits read from `{}` must be positive.",
            name.as_ref().display()
        );
    }
    log::debug!(
        "Parameter bundle read from `{}`:\n{params}",
        name.as_ref().display()
    );
    Ok(params)
}
