//! Typed capability accessors for the MSI laptop embedded controller.
//!
//! [`Service`] pairs a resolved register map with the EC transport and turns
//! raw register bytes into type-safe capabilities: webcam and cooler-boost
//! switches, battery charge thresholds, performance and fan modes, fan speed
//! percentages, LED states and firmware identity.
//!
//! The register space has no locking of its own, and every mutation is a
//! read-modify-write over a shared byte. The service therefore keeps the
//! transport behind a mutex and holds the lock across each complete
//! transaction; two racing writers to the same register would otherwise be
//! able to lose an update.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod battery;
pub mod leds;
pub mod modes;
pub mod switches;
pub mod thermal;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use msi_ec_access::{Address, EcTransport, info};
use msi_ec_config::firmware::{self, FirmwareError, FirmwareVersion, ReleaseDate};
use msi_ec_config::{Capability, Config, ExposedSet, ResolveError};

pub use battery::{BatteryMode, BatteryModeReading, Threshold};
pub use modes::ModeReading;
pub use switches::{KeySide, Switch};

/// Failure of a single capability access.
///
/// Errors are local to the access that produced them; they never invalidate
/// the resolved register map or affect other capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The capability has no usable register on this model. Callers should
    /// have filtered it out via [`ExposedSet`] already.
    Unsupported,
    /// A value failed range, format or name validation, or the register
    /// held a byte outside its declared valid range. No register write was
    /// performed.
    InvalidValue,
    /// The underlying EC transaction failed.
    Transport(E),
}

impl<E> From<FirmwareError<E>> for Error<E> {
    fn from(err: FirmwareError<E>) -> Self {
        match err {
            FirmwareError::Malformed => Self::InvalidValue,
            FirmwareError::Transport(e) => Self::Transport(e),
        }
    }
}

/// Capability access service over one EC and one resolved register map.
///
/// Exactly one register map is adopted for the lifetime of the service and
/// never swapped; the exposed-capability set is computed once at
/// construction.
pub struct Service<M: RawMutex, E: EcTransport> {
    ec: Mutex<M, E>,
    config: &'static Config,
    exposed: ExposedSet,
}

impl<M: RawMutex, E: EcTransport> Service<M, E> {
    /// Resolve the register map from the EC's firmware version and build
    /// the service around it.
    ///
    /// Fails closed on an unrecognized version: a wrong register map could
    /// write to unrelated hardware state, so there is no fallback.
    pub async fn resolve(mut ec: E) -> Result<Self, ResolveError<E::Error>> {
        let (_, config) = msi_ec_config::resolve(&mut ec).await?;
        Ok(Self::with_config(ec, config))
    }

    /// Build the service for an already-known register map.
    pub fn with_config(ec: E, config: &'static Config) -> Self {
        let exposed = ExposedSet::new(config);
        info!(
            "EC register map {} exposes {} capabilities",
            config.name,
            exposed.len()
        );
        Self {
            ec: Mutex::new(ec),
            config,
            exposed,
        }
    }

    /// The adopted register map.
    pub fn config(&self) -> &'static Config {
        self.config
    }

    /// Capabilities this model exposes, fixed at construction.
    pub fn exposed(&self) -> &ExposedSet {
        &self.exposed
    }

    /// Whether `capability` is exposed on this model.
    pub fn supports(&self, capability: Capability) -> bool {
        self.exposed.contains(capability)
    }

    /// Hand the transport back, consuming the service.
    pub fn release(self) -> E {
        self.ec.into_inner()
    }

    /// Firmware version fingerprint.
    pub async fn firmware_version(&self) -> Result<FirmwareVersion, Error<E::Error>> {
        let mut ec = self.ec.lock().await;
        Ok(firmware::read_version(&mut *ec).await?)
    }

    /// Firmware build date and time.
    pub async fn firmware_release_date(&self) -> Result<ReleaseDate, Error<E::Error>> {
        let mut ec = self.ec.lock().await;
        Ok(firmware::read_release_date(&mut *ec).await?)
    }

    /// Resolve a sentinel-checked register address, or report the
    /// capability as not exposed before any I/O happens.
    pub(crate) fn require_register(&self, address: Address) -> Result<u8, Error<E::Error>> {
        address.known().ok_or(Error::Unsupported)
    }

    /// Take the transport for one complete transaction.
    pub(crate) async fn lock(&self) -> MutexGuard<'_, M, E> {
        self.ec.lock().await
    }

    pub(crate) async fn read_register(&self, address: Address) -> Result<u8, Error<E::Error>> {
        let addr = self.require_register(address)?;
        let mut ec = self.ec.lock().await;
        ec.read(addr).await.map_err(Error::Transport)
    }

    pub(crate) async fn read_flag(&self, address: Address, bit: u8) -> Result<bool, Error<E::Error>> {
        let addr = self.require_register(address)?;
        let mut ec = self.ec.lock().await;
        ec.check_bit(addr, bit).await.map_err(Error::Transport)
    }

    pub(crate) async fn write_flag(&self, address: Address, bit: u8, set: bool) -> Result<(), Error<E::Error>> {
        let addr = self.require_register(address)?;
        let mut ec = self.ec.lock().await;
        if set {
            ec.set_bit(addr, bit).await.map_err(Error::Transport)
        } else {
            ec.unset_bit(addr, bit).await.map_err(Error::Transport)
        }
    }

    pub(crate) async fn write_register(&self, address: Address, value: u8) -> Result<(), Error<E::Error>> {
        let addr = self.require_register(address)?;
        let mut ec = self.ec.lock().await;
        ec.write(addr, value).await.map_err(Error::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use msi_ec_access::mock::{Transaction, Transport};
    use msi_ec_config::firmware::{FW_DATE_ADDRESS, FW_TIME_ADDRESS, FW_VERSION_ADDRESS};
    use msi_ec_config::tables::{CONF2, CONF6};

    pub(crate) fn service<'a>(
        expectations: &'a [Transaction],
        config: &'static Config,
    ) -> Service<NoopRawMutex, Transport<'a>> {
        Service::with_config(Transport::new(expectations), config)
    }

    pub(crate) fn finish(service: Service<NoopRawMutex, Transport<'_>>) {
        service.release().done();
    }

    fn seq(base: u8, bytes: &[u8]) -> std::vec::Vec<Transaction> {
        bytes
            .iter()
            .enumerate()
            .map(|(i, b)| Transaction::read(base.wrapping_add(i as u8), *b))
            .collect()
    }

    #[tokio::test]
    async fn resolve_adopts_the_matching_map() {
        let expectations = seq(FW_VERSION_ADDRESS, b"1552EMS1.118");
        let service = Service::<NoopRawMutex, _>::resolve(Transport::new(&expectations))
            .await
            .unwrap();

        assert_eq!(service.config().name, CONF2.name);
        assert!(service.supports(Capability::SuperBattery));
        finish(service);
    }

    #[tokio::test]
    async fn resolve_fails_closed_on_unknown_firmware() {
        let expectations = seq(FW_VERSION_ADDRESS, b"UNKNOWN.0000");
        let result = Service::<NoopRawMutex, _>::resolve(Transport::new(&expectations)).await;

        assert!(matches!(result, Err(ResolveError::UnsupportedFirmware)));
    }

    #[tokio::test]
    async fn firmware_version_reads_the_identity_range() {
        let expectations = seq(FW_VERSION_ADDRESS, b"1542EMS1.104");
        let service = service(&expectations, &CONF6);

        let version = service.firmware_version().await.unwrap();

        assert_eq!(version.as_str(), "1542EMS1.104");
        finish(service);
    }

    #[tokio::test]
    async fn firmware_release_date_reads_both_ranges() {
        let mut expectations = seq(FW_DATE_ADDRESS, b"05172022");
        expectations.extend(seq(FW_TIME_ADDRESS, b"10:21:42"));
        let service = service(&expectations, &CONF2);

        let date = service.firmware_release_date().await.unwrap();

        assert_eq!((date.year, date.month, date.day), (2022, 5, 17));
        assert_eq!((date.hour, date.minute, date.second), (10, 21, 42));
        finish(service);
    }

    #[tokio::test]
    async fn unsupported_capability_issues_no_transactions() {
        let service = service(&[], &CONF6);

        assert_eq!(service.read_flag(CONF6.leds.micmute_led_address, 2).await, Err(Error::Unsupported));
        finish(service);
    }
}
