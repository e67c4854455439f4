//! Hand-curated register maps, one per supported firmware family.
//!
//! Addresses, offsets, ranges and mode tables come from per-model
//! reverse-engineering. Entries marked [`Unknown`] are features that may
//! exist but whose register has not been confirmed on hardware; they must
//! not be promoted to a concrete address without independent verification.

use msi_ec_access::Address::{Known, Unknown, Unsupported};

use crate::descriptor::{
    ChargeControl, Config, CoolerBoost, Cpu, FanMode, FnWinSwap, Gpu, KbdBacklight, Leds, Mode, ShiftMode, SuperBattery,
    Webcam,
};

const SM_ECO: &str = "eco";
const SM_COMFORT: &str = "comfort";
const SM_SPORT: &str = "sport";
const SM_TURBO: &str = "turbo";

const FM_AUTO: &str = "auto";
const FM_SILENT: &str = "silent";
const FM_BASIC: &str = "basic";
const FM_ADVANCED: &str = "advanced";

/// 14C1EMS1 family.
pub static CONF0: Config = Config {
    name: "conf0",
    allowed_fw: &["14C1EMS1.012", "14C1EMS1.101", "14C1EMS1.102"],
    charge_control: ChargeControl {
        address: Known(0xef),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Known(0x2f),
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xbf),
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xf2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
        ],
    },
    super_battery: SuperBattery {
        address: Unknown, // 0xd5 needs testing
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xf4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_BASIC, 0x4d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0x71),
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Known(0x89),
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Known(0x80),
        rt_fan_speed_address: Known(0x89),
    },
    leds: Leds {
        micmute_led_address: Known(0x2b),
        mute_led_address: Known(0x2c),
        bit: 2,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Known(0x2c), // ?
        bl_modes: [0x00, 0x08],       // ?
        max_mode: 1,                  // ?
        bl_state_address: Known(0xf3),
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 17F2EMS1 family.
pub static CONF1: Config = Config {
    name: "conf1",
    allowed_fw: &["17F2EMS1.103", "17F2EMS1.104", "17F2EMS1.106", "17F2EMS1.107"],
    charge_control: ChargeControl {
        address: Known(0xef),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Known(0x2f),
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xbf),
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xf2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
            Mode::new(SM_TURBO, 0xc4),
        ],
    },
    super_battery: SuperBattery {
        address: Unknown,
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xf4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_BASIC, 0x4d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0x71),
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Known(0x89),
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Known(0x80),
        rt_fan_speed_address: Known(0x89),
    },
    leds: Leds {
        micmute_led_address: Known(0x2b),
        mute_led_address: Known(0x2c),
        bit: 2,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Known(0x2c), // ?
        bl_modes: [0x00, 0x08],       // ?
        max_mode: 1,                  // ?
        bl_state_address: Known(0xf3),
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 1552EMS1 family.
pub static CONF2: Config = Config {
    name: "conf2",
    allowed_fw: &["1552EMS1.118"],
    charge_control: ChargeControl {
        address: Known(0xd7),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Known(0x2f),
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xe8),
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xf2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
        ],
    },
    super_battery: SuperBattery {
        address: Known(0xeb),
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xd4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_BASIC, 0x4d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0x71),
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Known(0x89),
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Known(0x80),
        rt_fan_speed_address: Known(0x89),
    },
    leds: Leds {
        micmute_led_address: Known(0x2c),
        mute_led_address: Known(0x2d),
        bit: 1,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Known(0x2c), // ?
        bl_modes: [0x00, 0x08],       // ?
        max_mode: 1,                  // ?
        bl_state_address: Known(0xd3),
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 1592EMS1 family.
pub static CONF3: Config = Config {
    name: "conf3",
    allowed_fw: &["1592EMS1.111", "E1592IMS.10C"],
    charge_control: ChargeControl {
        address: Known(0xef),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Known(0x2f),
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xe8),
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xd2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
        ],
    },
    super_battery: SuperBattery {
        address: Known(0xeb),
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xd4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_BASIC, 0x4d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0xc9),
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Known(0x89), // ?
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Known(0x80),
        rt_fan_speed_address: Known(0x89),
    },
    leds: Leds {
        micmute_led_address: Known(0x2b),
        mute_led_address: Known(0x2c),
        bit: 1,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Known(0x2c), // ?
        bl_modes: [0x00, 0x08],       // ?
        max_mode: 1,                  // ?
        bl_state_address: Known(0xd3),
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 16V4EMS1 family.
pub static CONF4: Config = Config {
    name: "conf4",
    allowed_fw: &["16V4EMS1.114"],
    charge_control: ChargeControl {
        address: Known(0xd7),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Known(0x2f),
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Unknown, // supported, but address unconfirmed
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xd2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
        ],
    },
    super_battery: SuperBattery {
        address: Unknown, // may be supported, but address is unknown
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xd4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),      // needs testing
        rt_fan_speed_address: Known(0x71), // needs testing
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Unknown,
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Known(0x80),
        rt_fan_speed_address: Unknown,
    },
    leds: Leds {
        micmute_led_address: Unknown,
        mute_led_address: Unknown,
        bit: 1,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Unknown, // ?
        bl_modes: [0x00, 0x08],   // ?
        max_mode: 1,              // ?
        bl_state_address: Unsupported, // 0xd3, not functional
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 158LEMS1 family.
pub static CONF5: Config = Config {
    name: "conf5",
    allowed_fw: &["158LEMS1.103", "158LEMS1.105", "158LEMS1.106"],
    charge_control: ChargeControl {
        address: Known(0xef),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Known(0x2f),
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xbf), // needs reverse-engineering
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xf2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_TURBO, 0xc4),
        ],
    },
    super_battery: SuperBattery {
        address: Unknown, // unsupported?
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xf4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),      // needs testing
        rt_fan_speed_address: Known(0x71), // needs testing
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Unsupported,
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Unknown,
        rt_fan_speed_address: Unknown,
    },
    leds: Leds {
        micmute_led_address: Known(0x2b),
        mute_led_address: Known(0x2c),
        bit: 2,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Unknown, // ?
        bl_modes: [0x00, 0x08],   // ?
        max_mode: 1,              // ?
        bl_state_address: Unsupported, // 0xf3, not functional
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 1542EMS1 family.
pub static CONF6: Config = Config {
    name: "conf6",
    allowed_fw: &["1542EMS1.102", "1542EMS1.104"],
    charge_control: ChargeControl {
        address: Known(0xef),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Unsupported,
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xbf), // needs reverse-engineering
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xf2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
            Mode::new(SM_TURBO, 0xc4),
        ],
    },
    super_battery: SuperBattery {
        address: Known(0xd5),
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xf4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0xc9),
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Unsupported,
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Known(0x80),
        rt_fan_speed_address: Unknown,
    },
    leds: Leds {
        micmute_led_address: Unsupported,
        mute_led_address: Unsupported,
        bit: 2,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Unknown, // ?
        bl_modes: [0x00, 0x08],   // ?
        max_mode: 1,              // ?
        bl_state_address: Unsupported, // 0xf3, not functional
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 17FKEMS1 family.
pub static CONF7: Config = Config {
    name: "conf7",
    allowed_fw: &["17FKEMS1.108", "17FKEMS1.109", "17FKEMS1.10A"],
    charge_control: ChargeControl {
        address: Known(0xef),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Unsupported,
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xbf), // needs testing
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xf2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
            Mode::new(SM_TURBO, 0xc4),
        ],
    },
    super_battery: SuperBattery {
        address: Unknown, // 0xd5 but has its own set of modes
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xf4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d), // d may not be relevant
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_ADVANCED, 0x8d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0xc9), // needs testing
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Unsupported,
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Unknown,
        rt_fan_speed_address: Unknown,
    },
    leds: Leds {
        micmute_led_address: Unsupported,
        mute_led_address: Known(0x2c),
        bit: 2,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Unknown, // ?
        bl_modes: [0x00, 0x08],   // ?
        max_mode: 1,              // ?
        bl_state_address: Known(0xf3),
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// 14F1EMS1 family.
pub static CONF8: Config = Config {
    name: "conf8",
    allowed_fw: &["14F1EMS1.115"],
    charge_control: ChargeControl {
        address: Known(0xd7),
        offset_start: 0x8a,
        offset_end: 0x80,
        range_min: 0x8a,
        range_max: 0xe4,
    },
    webcam: Webcam {
        address: Known(0x2e),
        block_address: Unsupported,
        bit: 1,
    },
    fn_win_swap: FnWinSwap {
        address: Known(0xe8),
        bit: 4,
    },
    cooler_boost: CoolerBoost {
        address: Known(0x98),
        bit: 7,
    },
    shift_mode: ShiftMode {
        address: Known(0xd2),
        modes: &[
            Mode::new(SM_ECO, 0xc2),
            Mode::new(SM_COMFORT, 0xc1),
            Mode::new(SM_SPORT, 0xc0),
        ],
    },
    super_battery: SuperBattery {
        address: Known(0xeb),
        mask: 0x0f,
    },
    fan_mode: FanMode {
        address: Known(0xd4),
        modes: &[
            Mode::new(FM_AUTO, 0x0d),
            Mode::new(FM_SILENT, 0x1d),
            Mode::new(FM_BASIC, 0x4d),
        ],
    },
    cpu: Cpu {
        rt_temp_address: Known(0x68),
        rt_fan_speed_address: Known(0x71),
        rt_fan_speed_base_min: 0x19,
        rt_fan_speed_base_max: 0x37,
        bs_fan_speed_address: Unsupported,
        bs_fan_speed_base_min: 0x00,
        bs_fan_speed_base_max: 0x0f,
    },
    gpu: Gpu {
        rt_temp_address: Unknown,
        rt_fan_speed_address: Unknown,
    },
    leds: Leds {
        micmute_led_address: Unsupported,
        mute_led_address: Known(0x2d),
        bit: 1,
    },
    kbd_bl: KbdBacklight {
        bl_mode_address: Unknown, // ?
        bl_modes: [0x00, 0x08],   // ?
        max_mode: 1,              // ?
        bl_state_address: Unsupported, // not functional
        state_base_value: 0x80,
        max_state: 3,
    },
};

/// Every known register map, in match order. First match wins; the version
/// lists are disjoint by construction.
pub static CONFIGURATIONS: &[&Config] = &[
    &CONF0, &CONF1, &CONF2, &CONF3, &CONF4, &CONF5, &CONF6, &CONF7, &CONF8,
];

/// Find the register map covering `version`, scanning in declaration order.
pub fn lookup(version: &str) -> Option<&'static Config> {
    CONFIGURATIONS.iter().find(|config| config.matches(version)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use msi_ec_access::Address;

    #[test]
    fn lookup_finds_each_declared_version() {
        for config in CONFIGURATIONS {
            for version in config.allowed_fw {
                let found = lookup(version).unwrap();
                assert_eq!(found.name, config.name, "version {version} resolved to the wrong family");
            }
        }
    }

    #[test]
    fn lookup_rejects_unknown_versions() {
        assert!(lookup("0000EMS0.000").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn version_lists_are_disjoint() {
        for (i, config) in CONFIGURATIONS.iter().enumerate() {
            for other in CONFIGURATIONS.iter().skip(i + 1) {
                for version in config.allowed_fw {
                    assert!(!other.matches(version), "{version} appears in two families");
                }
            }
        }
    }

    #[test]
    fn charge_control_ranges_are_ordered() {
        for config in CONFIGURATIONS {
            let cc = &config.charge_control;
            assert!(cc.range_min <= cc.range_max, "{}", config.name);
            assert!(cc.offset_start >= cc.offset_end, "{}", config.name);
            // Raw values inside the range always sit above both offsets.
            assert!(cc.offset_start <= cc.range_min, "{}", config.name);
            assert!(cc.offset_end <= cc.range_min, "{}", config.name);
        }
    }

    #[test]
    fn fan_speed_scales_are_nondegenerate() {
        for config in CONFIGURATIONS {
            assert!(
                config.cpu.rt_fan_speed_base_min < config.cpu.rt_fan_speed_base_max,
                "{}",
                config.name
            );
            assert!(
                config.cpu.bs_fan_speed_base_min < config.cpu.bs_fan_speed_base_max,
                "{}",
                config.name
            );
        }
    }

    #[test]
    fn mode_tables_are_nonempty_with_unique_names() {
        for config in CONFIGURATIONS {
            for table in [config.shift_mode.modes, config.fan_mode.modes] {
                assert!(!table.is_empty(), "{}", config.name);
                for (i, mode) in table.iter().enumerate() {
                    assert!(
                        table.iter().skip(i + 1).all(|m| m.name != mode.name),
                        "duplicate mode name in {}",
                        config.name
                    );
                }
            }
        }
    }

    #[test]
    fn shift_mode_tables_keep_declaration_order() {
        let names: std::vec::Vec<_> = CONF0.shift_mode.modes.iter().map(|m| m.name).collect();
        assert_eq!(names, ["eco", "comfort", "sport"]);

        let names: std::vec::Vec<_> = CONF1.shift_mode.modes.iter().map(|m| m.name).collect();
        assert_eq!(names, ["eco", "comfort", "sport", "turbo"]);
    }

    #[test]
    fn uncertain_addresses_stay_uncertain() {
        // Annotated-uncertain registers must not be promoted to concrete
        // addresses without hardware verification.
        assert_eq!(CONF0.super_battery.address, Address::Unknown);
        assert_eq!(CONF4.fn_win_swap.address, Address::Unknown);
        assert_eq!(CONF4.kbd_bl.bl_state_address, Address::Unsupported);
        assert_eq!(CONF7.super_battery.address, Address::Unknown);
    }

    #[test]
    fn bit_indexes_are_in_register_width() {
        for config in CONFIGURATIONS {
            assert!(config.webcam.bit < 8);
            assert!(config.fn_win_swap.bit < 8);
            assert!(config.cooler_boost.bit < 8);
            assert!(config.leds.bit < 8);
        }
    }
}
