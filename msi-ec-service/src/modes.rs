//! Enumerated mode capabilities: performance shift mode and fan mode.
//!
//! Mode tables are per-model data; names are matched case-sensitively in
//! declaration order, and that order is also the advertised enumeration
//! order.

use embassy_sync::blocking_mutex::raw::RawMutex;
use msi_ec_access::{Address, EcTransport};
use msi_ec_config::Mode;

use crate::{Error, Service};

/// Raw register value reporting that no mode has been specified.
pub const MODE_UNSPECIFIED: u8 = 0x80;

/// Current mode as read back from the EC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeReading {
    /// A mode from the model's table.
    Named(&'static str),
    /// The EC reports no specified mode. There is no corresponding
    /// writable name.
    Unspecified,
    /// The register holds a value outside the model's table.
    Unknown(u8),
}

/// Strip at most one trailing line terminator.
///
/// Mode names arriving from a line-oriented surface carry a trailing
/// newline; this is the single normalization step applied before the
/// exact-match scan.
fn strip_newline(name: &str) -> &str {
    name.strip_suffix('\n').unwrap_or(name)
}

impl<M: RawMutex, E: EcTransport> Service<M, E> {
    /// Current performance shift mode.
    pub async fn shift_mode(&self) -> Result<ModeReading, Error<E::Error>> {
        let shift = &self.config().shift_mode;
        self.read_mode(shift.address, shift.modes).await
    }

    /// Select a performance shift mode by name.
    pub async fn set_shift_mode(&self, name: &str) -> Result<(), Error<E::Error>> {
        let shift = &self.config().shift_mode;
        self.write_mode(shift.address, shift.modes, name).await
    }

    /// Shift mode names in advertised order.
    pub fn available_shift_modes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.config().shift_mode.modes.iter().map(|mode| mode.name)
    }

    /// Current fan policy mode.
    pub async fn fan_mode(&self) -> Result<ModeReading, Error<E::Error>> {
        let fan = &self.config().fan_mode;
        self.read_mode(fan.address, fan.modes).await
    }

    /// Select a fan policy mode by name.
    pub async fn set_fan_mode(&self, name: &str) -> Result<(), Error<E::Error>> {
        let fan = &self.config().fan_mode;
        self.write_mode(fan.address, fan.modes, name).await
    }

    /// Fan mode names in advertised order.
    pub fn available_fan_modes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.config().fan_mode.modes.iter().map(|mode| mode.name)
    }

    async fn read_mode(&self, address: Address, modes: &'static [Mode]) -> Result<ModeReading, Error<E::Error>> {
        let raw = self.read_register(address).await?;
        if raw == MODE_UNSPECIFIED {
            return Ok(ModeReading::Unspecified);
        }
        Ok(modes
            .iter()
            .find(|mode| mode.value == raw)
            .map_or(ModeReading::Unknown(raw), |mode| ModeReading::Named(mode.name)))
    }

    async fn write_mode(&self, address: Address, modes: &'static [Mode], name: &str) -> Result<(), Error<E::Error>> {
        let addr = self.require_register(address)?;
        let name = strip_newline(name);
        let mode = modes.iter().find(|mode| mode.name == name).ok_or(Error::InvalidValue)?;
        let mut ec = self.lock().await;
        ec.write(addr, mode.value).await.map_err(Error::Transport)
    }
}
