//! Support-state computation: which capabilities a resolved register map
//! actually exposes.
//!
//! Computed once after resolution and fixed for the process lifetime; the
//! active configuration never changes, so there is nothing to re-evaluate.

use msi_ec_access::{Support, debug, warn};

use crate::descriptor::Config;

/// Every user-visible capability backed by the EC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Capability {
    /// Integrated webcam on/off.
    Webcam,
    /// Webcam hardware block.
    WebcamBlock,
    /// Fn key position.
    FnKey,
    /// Win key position.
    WinKey,
    /// Battery health mode derived from the charge-end threshold.
    BatteryMode,
    /// Battery charge start/end thresholds.
    ChargeControl,
    /// Cooler boost.
    CoolerBoost,
    /// CPU/GPU performance shift mode.
    ShiftMode,
    /// Super battery (battery saver).
    SuperBattery,
    /// Fan policy mode.
    FanMode,
    /// CPU realtime temperature.
    CpuRealtimeTemperature,
    /// CPU realtime fan speed percentage.
    CpuRealtimeFanSpeed,
    /// CPU basic fan speed percentage.
    CpuBasicFanSpeed,
    /// GPU realtime temperature.
    GpuRealtimeTemperature,
    /// GPU realtime fan speed.
    GpuRealtimeFanSpeed,
    /// Mic-mute LED.
    MicmuteLed,
    /// Mute LED.
    MuteLed,
    /// Keyboard backlight level.
    KbdBacklight,
    /// Firmware version fingerprint.
    FirmwareVersion,
    /// Firmware release date.
    FirmwareReleaseDate,
}

impl Capability {
    /// Every capability, in presentation order.
    pub const ALL: [Self; 20] = [
        Self::Webcam,
        Self::WebcamBlock,
        Self::FnKey,
        Self::WinKey,
        Self::BatteryMode,
        Self::ChargeControl,
        Self::CoolerBoost,
        Self::ShiftMode,
        Self::SuperBattery,
        Self::FanMode,
        Self::CpuRealtimeTemperature,
        Self::CpuRealtimeFanSpeed,
        Self::CpuBasicFanSpeed,
        Self::GpuRealtimeTemperature,
        Self::GpuRealtimeFanSpeed,
        Self::MicmuteLed,
        Self::MuteLed,
        Self::KbdBacklight,
        Self::FirmwareVersion,
        Self::FirmwareReleaseDate,
    ];

    /// Stable attribute-style name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Webcam => "webcam",
            Self::WebcamBlock => "webcam_block",
            Self::FnKey => "fn_key",
            Self::WinKey => "win_key",
            Self::BatteryMode => "battery_mode",
            Self::ChargeControl => "charge_control",
            Self::CoolerBoost => "cooler_boost",
            Self::ShiftMode => "shift_mode",
            Self::SuperBattery => "super_battery",
            Self::FanMode => "fan_mode",
            Self::CpuRealtimeTemperature => "cpu/realtime_temperature",
            Self::CpuRealtimeFanSpeed => "cpu/realtime_fan_speed",
            Self::CpuBasicFanSpeed => "cpu/basic_fan_speed",
            Self::GpuRealtimeTemperature => "gpu/realtime_temperature",
            Self::GpuRealtimeFanSpeed => "gpu/realtime_fan_speed",
            Self::MicmuteLed => "micmute_led",
            Self::MuteLed => "mute_led",
            Self::KbdBacklight => "kbd_backlight",
            Self::FirmwareVersion => "fw_version",
            Self::FirmwareReleaseDate => "fw_release_date",
        }
    }

    /// Support state of this capability under `config`, derived from its
    /// governing register address.
    pub const fn support(self, config: &Config) -> Support {
        match self {
            Self::Webcam => config.webcam.address.support(),
            Self::WebcamBlock => config.webcam.block_address.support(),
            Self::FnKey | Self::WinKey => config.fn_win_swap.address.support(),
            Self::BatteryMode | Self::ChargeControl => config.charge_control.address.support(),
            Self::CoolerBoost => config.cooler_boost.address.support(),
            Self::ShiftMode => config.shift_mode.address.support(),
            Self::SuperBattery => config.super_battery.address.support(),
            Self::FanMode => config.fan_mode.address.support(),
            Self::CpuRealtimeTemperature => config.cpu.rt_temp_address.support(),
            Self::CpuRealtimeFanSpeed => config.cpu.rt_fan_speed_address.support(),
            Self::CpuBasicFanSpeed => config.cpu.bs_fan_speed_address.support(),
            Self::GpuRealtimeTemperature => config.gpu.rt_temp_address.support(),
            Self::GpuRealtimeFanSpeed => config.gpu.rt_fan_speed_address.support(),
            Self::MicmuteLed => config.leds.micmute_led_address.support(),
            Self::MuteLed => config.leds.mute_led_address.support(),
            Self::KbdBacklight => config.kbd_bl.bl_state_address.support(),
            // Identity registers are common to all models.
            Self::FirmwareVersion | Self::FirmwareReleaseDate => Support::Supported,
        }
    }
}

/// The capabilities a register map exposes, computed once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExposedSet {
    exposed: heapless::Vec<Capability, { Capability::ALL.len() }>,
}

impl ExposedSet {
    /// Evaluate every capability against `config`.
    ///
    /// Address-unknown capabilities are logged separately from unsupported
    /// ones: the feature may exist and is merely awaiting
    /// reverse-engineering.
    pub fn new(config: &Config) -> Self {
        let mut exposed = heapless::Vec::new();
        for capability in Capability::ALL {
            match capability.support(config) {
                Support::Supported => {
                    // Capacity equals the capability count, the push cannot fail.
                    let _ = exposed.push(capability);
                }
                Support::AddressUnknown => {
                    warn!("{}: register address not yet determined, hiding", capability.name());
                }
                Support::Unsupported => {
                    debug!("{}: not present on this hardware", capability.name());
                }
            }
        }
        Self { exposed }
    }

    /// Whether `capability` is exposed.
    pub fn contains(&self, capability: Capability) -> bool {
        self.exposed.iter().any(|c| *c == capability)
    }

    /// Exposed capabilities in presentation order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.exposed.iter().copied()
    }

    /// Number of exposed capabilities.
    pub fn len(&self) -> usize {
        self.exposed.len()
    }

    /// Whether nothing is exposed.
    pub fn is_empty(&self) -> bool {
        self.exposed.is_empty()
    }
}
