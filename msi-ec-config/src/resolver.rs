//! Startup configuration resolution.
//!
//! The firmware version is the only fingerprint used to pick a register
//! map. Resolution failure is fatal by design: operating with a wrong map
//! means reading and writing arbitrary EC state, so there is no default and
//! no best-guess fallback.

use msi_ec_access::{EcTransport, error, info};

use crate::descriptor::Config;
use crate::firmware::{self, FirmwareError, FirmwareVersion};
use crate::tables;

/// Failure to adopt a register map at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ResolveError<E> {
    /// No register map covers the firmware version read from the EC.
    UnsupportedFirmware,
    /// The firmware version could not be read.
    Transport(E),
}

/// Read the firmware version and adopt the first matching register map.
///
/// Returns the version alongside the map so callers can report it without
/// touching the EC again.
pub async fn resolve<T: EcTransport>(
    ec: &mut T,
) -> Result<(FirmwareVersion, &'static Config), ResolveError<T::Error>> {
    let version = firmware::read_version(ec).await.map_err(|e| match e {
        // A fingerprint that is not even ASCII cannot match any entry.
        FirmwareError::Malformed => ResolveError::UnsupportedFirmware,
        FirmwareError::Transport(e) => ResolveError::Transport(e),
    })?;

    match tables::lookup(version.as_str()) {
        Some(config) => {
            info!("EC firmware {} matched register map {}", version.as_str(), config.name);
            Ok((version, config))
        }
        None => {
            error!("EC firmware version {} is not supported", version.as_str());
            Err(ResolveError::UnsupportedFirmware)
        }
    }
}
