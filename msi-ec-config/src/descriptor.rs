//! Capability descriptors: where and how each capability lives in register
//! space. Descriptors are pure data; the accessors in `msi-ec-service` give
//! them behavior.

use msi_ec_access::Address;

/// One named entry of an enumerated mode table.
///
/// Tables are scanned in declaration order for both enumeration and
/// matching; the order is part of the user-visible contract (it is the
/// advertised "available modes" order), not incidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Mode {
    /// User-visible mode name, matched case-sensitively.
    pub name: &'static str,
    /// Raw byte the EC stores for this mode.
    pub value: u8,
}

impl Mode {
    /// Create a mode table entry.
    pub const fn new(name: &'static str, value: u8) -> Self {
        Self { name, value }
    }
}

/// Battery charge threshold registers.
///
/// The register stores `percentage + offset`; raw values are only valid
/// inside `[range_min, range_max]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChargeControl {
    /// Threshold register.
    pub address: Address,
    /// Offset added to the charge-start percentage.
    pub offset_start: u8,
    /// Offset added to the charge-end percentage.
    pub offset_end: u8,
    /// Lowest valid raw byte.
    pub range_min: u8,
    /// Highest valid raw byte.
    pub range_max: u8,
}

/// Webcam enable flag plus the hardware block flag.
///
/// Both registers use the same bit; in the block register a cleared bit
/// means the camera is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Webcam {
    /// Webcam enable register.
    pub address: Address,
    /// Hardware block register.
    pub block_address: Address,
    /// Flag bit index in both registers.
    pub bit: u8,
}

/// Fn/Win key swap flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FnWinSwap {
    /// Swap register.
    pub address: Address,
    /// Flag bit index.
    pub bit: u8,
}

/// Cooler boost flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CoolerBoost {
    /// Cooler boost register.
    pub address: Address,
    /// Flag bit index.
    pub bit: u8,
}

/// Shift mode (CPU/GPU performance profile) register and its mode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShiftMode {
    /// Mode register.
    pub address: Address,
    /// Named modes in display/matching order.
    pub modes: &'static [Mode],
}

/// Super battery (battery saver) masked flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SuperBattery {
    /// Mode register.
    pub address: Address,
    /// Bits that must all be set for the feature to count as enabled.
    pub mask: u8,
}

/// Fan mode register and its mode table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FanMode {
    /// Mode register.
    pub address: Address,
    /// Named modes in display/matching order.
    pub modes: &'static [Mode],
}

/// CPU temperature and fan speed registers.
///
/// Fan speed registers store a raw byte inside `[base_min, base_max]` that
/// maps linearly onto a 0-100 percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cpu {
    /// Realtime temperature register (degrees Celsius, raw).
    pub rt_temp_address: Address,
    /// Realtime fan speed register.
    pub rt_fan_speed_address: Address,
    /// Raw value meaning 0% realtime fan speed.
    pub rt_fan_speed_base_min: u8,
    /// Raw value meaning 100% realtime fan speed.
    pub rt_fan_speed_base_max: u8,
    /// Basic fan speed register.
    pub bs_fan_speed_address: Address,
    /// Raw value meaning 0% basic fan speed.
    pub bs_fan_speed_base_min: u8,
    /// Raw value meaning 100% basic fan speed.
    pub bs_fan_speed_base_max: u8,
}

/// GPU temperature and fan speed registers; both read as raw bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Gpu {
    /// Realtime temperature register (degrees Celsius, raw).
    pub rt_temp_address: Address,
    /// Realtime fan speed register.
    pub rt_fan_speed_address: Address,
}

/// Mute and mic-mute LED flags; both use the same bit index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Leds {
    /// Mic-mute LED register.
    pub micmute_led_address: Address,
    /// Mute LED register.
    pub mute_led_address: Address,
    /// Flag bit index in both registers.
    pub bit: u8,
}

/// Keyboard backlight state registers.
///
/// The state register encodes `state_base_value | level` with the level in
/// `0..=max_state`. The mode register and its values are carried from
/// hardware notes but are not driven by any accessor yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KbdBacklight {
    /// Backlight mode register.
    pub bl_mode_address: Address,
    /// Known mode register values.
    pub bl_modes: [u8; 2],
    /// Highest valid mode index.
    pub max_mode: u8,
    /// Backlight state register.
    pub bl_state_address: Address,
    /// Base value or-ed with the brightness level on writes.
    pub state_base_value: u8,
    /// Highest valid brightness level.
    pub max_state: u8,
}

/// Complete register map for one firmware family.
///
/// Immutable by construction: entries live in [`crate::tables`] as statics
/// and exactly one of them is adopted for the whole process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Family tag used in diagnostics.
    pub name: &'static str,
    /// Firmware version strings this map applies to, compared byte for byte.
    pub allowed_fw: &'static [&'static str],
    /// Battery charge threshold descriptor.
    pub charge_control: ChargeControl,
    /// Webcam descriptor.
    pub webcam: Webcam,
    /// Fn/Win swap descriptor.
    pub fn_win_swap: FnWinSwap,
    /// Cooler boost descriptor.
    pub cooler_boost: CoolerBoost,
    /// Shift mode descriptor.
    pub shift_mode: ShiftMode,
    /// Super battery descriptor.
    pub super_battery: SuperBattery,
    /// Fan mode descriptor.
    pub fan_mode: FanMode,
    /// CPU thermals descriptor.
    pub cpu: Cpu,
    /// GPU thermals descriptor.
    pub gpu: Gpu,
    /// Mute/mic-mute LED descriptor.
    pub leds: Leds,
    /// Keyboard backlight descriptor.
    pub kbd_bl: KbdBacklight,
}

impl Config {
    /// Whether `version` is one of the firmware versions this map covers.
    pub fn matches(&self, version: &str) -> bool {
        self.allowed_fw.iter().any(|fw| *fw == version)
    }
}
