//! Firmware identity registers: version, release date and release time.
//!
//! All three are fixed-length ASCII sequences at well-known addresses,
//! shared by every model. The version string is the fingerprint the
//! resolver matches register maps against, byte for byte, with no
//! normalization beyond cutting at the first NUL.

use msi_ec_access::EcTransport;

/// Base address of the firmware version string.
pub const FW_VERSION_ADDRESS: u8 = 0xa0;
/// Length of the firmware version string.
pub const FW_VERSION_LENGTH: usize = 12;

/// Base address of the firmware release date (`MMDDYYYY`).
pub const FW_DATE_ADDRESS: u8 = 0xac;
/// Length of the firmware release date.
pub const FW_DATE_LENGTH: usize = 8;

/// Base address of the firmware release time (`HH:MM:SS`).
pub const FW_TIME_ADDRESS: u8 = 0xb4;
/// Length of the firmware release time.
pub const FW_TIME_LENGTH: usize = 8;

/// Failure while reading or decoding a firmware identity register range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareError<E> {
    /// The bytes read do not form the expected ASCII layout.
    Malformed,
    /// The underlying EC transaction failed.
    Transport(E),
}

/// Firmware version fingerprint read from the EC.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FirmwareVersion(heapless::String<FW_VERSION_LENGTH>);

impl FirmwareVersion {
    /// Decode a version from the raw register bytes.
    ///
    /// The sequence is cut at the first NUL; the remainder must be ASCII.
    pub fn from_bytes(raw: &[u8; FW_VERSION_LENGTH]) -> Option<Self> {
        let len = raw.iter().position(|b| *b == 0).unwrap_or(raw.len());
        let bytes = raw.get(..len)?;
        if !bytes.is_ascii() {
            return None;
        }
        let text = core::str::from_utf8(bytes).ok()?;
        let mut version = heapless::String::new();
        version.push_str(text).ok()?;
        Some(Self(version))
    }

    /// The version as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Read the firmware version fingerprint.
pub async fn read_version<T: EcTransport>(ec: &mut T) -> Result<FirmwareVersion, FirmwareError<T::Error>> {
    let mut raw = [0u8; FW_VERSION_LENGTH];
    ec.read_seq(FW_VERSION_ADDRESS, &mut raw)
        .await
        .map_err(FirmwareError::Transport)?;
    FirmwareVersion::from_bytes(&raw).ok_or(FirmwareError::Malformed)
}

/// Firmware build timestamp, decoded from the date and time registers.
///
/// Formatting for display is left to the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ReleaseDate {
    /// Four-digit year.
    pub year: u16,
    /// Month, 1-12 as reported by the firmware.
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Hour, 24-hour clock.
    pub hour: u8,
    /// Minute.
    pub minute: u8,
    /// Second.
    pub second: u8,
}

impl ReleaseDate {
    /// Decode from the raw `MMDDYYYY` and `HH:MM:SS` register bytes.
    pub fn from_bytes(date: &[u8; FW_DATE_LENGTH], time: &[u8; FW_TIME_LENGTH]) -> Option<Self> {
        let [m1, m2, d1, d2, y1, y2, y3, y4] = *date;
        let [h1, h2, c1, mi1, mi2, c2, s1, s2] = *time;
        if c1 != b':' || c2 != b':' {
            return None;
        }
        Some(Self {
            year: u16::from(digit(y1)?) * 1000
                + u16::from(digit(y2)?) * 100
                + u16::from(digit(y3)?) * 10
                + u16::from(digit(y4)?),
            month: digit(m1)? * 10 + digit(m2)?,
            day: digit(d1)? * 10 + digit(d2)?,
            hour: digit(h1)? * 10 + digit(h2)?,
            minute: digit(mi1)? * 10 + digit(mi2)?,
            second: digit(s1)? * 10 + digit(s2)?,
        })
    }
}

fn digit(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}

/// Read and decode the firmware release date and time.
pub async fn read_release_date<T: EcTransport>(ec: &mut T) -> Result<ReleaseDate, FirmwareError<T::Error>> {
    let mut date = [0u8; FW_DATE_LENGTH];
    ec.read_seq(FW_DATE_ADDRESS, &mut date)
        .await
        .map_err(FirmwareError::Transport)?;

    let mut time = [0u8; FW_TIME_LENGTH];
    ec.read_seq(FW_TIME_ADDRESS, &mut time)
        .await
        .map_err(FirmwareError::Transport)?;

    ReleaseDate::from_bytes(&date, &time).ok_or(FirmwareError::Malformed)
}
