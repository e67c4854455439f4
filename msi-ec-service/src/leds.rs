//! LED-like capabilities: mute LED, mic-mute LED and keyboard backlight.
//!
//! All three follow the brightness convention of LED class devices:
//! brightness 0 is off, any positive value up to the capability's maximum
//! turns the LED on. The keyboard backlight additionally has an ordinal
//! level range encoded as `state_base_value | level`.

use embassy_sync::blocking_mutex::raw::RawMutex;
use msi_ec_access::{Address, EcTransport};

use crate::{Error, Service};

/// Bits of the backlight state register holding the current level.
pub const KBD_BL_STATE_MASK: u8 = 0x03;

/// Maximum brightness of the mute and mic-mute LEDs.
pub const LED_MAX_BRIGHTNESS: u8 = 1;

impl<M: RawMutex, E: EcTransport> Service<M, E> {
    /// Mic-mute LED brightness (0 or 1).
    pub async fn micmute_led(&self) -> Result<u8, Error<E::Error>> {
        let leds = &self.config().leds;
        self.led_brightness(leds.micmute_led_address, leds.bit).await
    }

    /// Set the mic-mute LED brightness; any positive value turns it on.
    pub async fn set_micmute_led(&self, brightness: u8) -> Result<(), Error<E::Error>> {
        let leds = &self.config().leds;
        self.write_flag(leds.micmute_led_address, leds.bit, brightness > 0).await
    }

    /// Mute LED brightness (0 or 1).
    pub async fn mute_led(&self) -> Result<u8, Error<E::Error>> {
        let leds = &self.config().leds;
        self.led_brightness(leds.mute_led_address, leds.bit).await
    }

    /// Set the mute LED brightness; any positive value turns it on.
    pub async fn set_mute_led(&self, brightness: u8) -> Result<(), Error<E::Error>> {
        let leds = &self.config().leds;
        self.write_flag(leds.mute_led_address, leds.bit, brightness > 0).await
    }

    /// Current keyboard backlight level.
    pub async fn kbd_backlight(&self) -> Result<u8, Error<E::Error>> {
        let raw = self.read_register(self.config().kbd_bl.bl_state_address).await?;
        Ok(raw & KBD_BL_STATE_MASK)
    }

    /// Highest keyboard backlight level this model accepts.
    pub fn kbd_backlight_max(&self) -> u8 {
        self.config().kbd_bl.max_state
    }

    /// Set the keyboard backlight level.
    ///
    /// Levels above the model's maximum are rejected without touching the
    /// EC.
    pub async fn set_kbd_backlight(&self, level: u8) -> Result<(), Error<E::Error>> {
        let kbd = &self.config().kbd_bl;
        if level > kbd.max_state {
            return Err(Error::InvalidValue);
        }
        self.write_register(kbd.bl_state_address, kbd.state_base_value | level).await
    }

    async fn led_brightness(&self, address: Address, bit: u8) -> Result<u8, Error<E::Error>> {
        let on = self.read_flag(address, bit).await?;
        Ok(u8::from(on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{finish, service};
    use msi_ec_access::mock::Transaction;
    use msi_ec_config::tables::{CONF0, CONF6};

    // CONF0: mic-mute at 0x2b, mute at 0x2c, bit 2; backlight state at 0xf3.

    #[tokio::test]
    async fn led_brightness_reflects_the_flag_bit() {
        let expectations = [
            Transaction::read(0x2b, 0b0000_0100),
            Transaction::read(0x2c, 0b0000_0000),
        ];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.micmute_led().await, Ok(1));
        assert_eq!(service.mute_led().await, Ok(0));
        finish(service);
    }

    #[tokio::test]
    async fn any_positive_brightness_turns_the_led_on() {
        let expectations = [
            Transaction::read(0x2c, 0b0000_0000),
            Transaction::write(0x2c, 0b0000_0100),
            Transaction::read(0x2c, 0b0000_0100),
            Transaction::write(0x2c, 0b0000_0000),
        ];
        let service = service(&expectations, &CONF0);

        service.set_mute_led(LED_MAX_BRIGHTNESS).await.unwrap();
        service.set_mute_led(0).await.unwrap();
        finish(service);
    }

    #[tokio::test]
    async fn backlight_level_is_masked_out_of_the_state_register() {
        let expectations = [Transaction::read(0xf3, 0x82)];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.kbd_backlight().await, Ok(2));
        finish(service);
    }

    #[tokio::test]
    async fn backlight_writes_combine_base_value_and_level() {
        let expectations = [
            Transaction::write(0xf3, 0x80),
            Transaction::write(0xf3, 0x83),
        ];
        let service = service(&expectations, &CONF0);

        service.set_kbd_backlight(0).await.unwrap();
        service.set_kbd_backlight(3).await.unwrap();
        finish(service);
    }

    #[tokio::test]
    async fn backlight_levels_above_the_maximum_are_rejected_without_io() {
        let service = service(&[], &CONF0);

        assert_eq!(service.kbd_backlight_max(), 3);
        assert_eq!(service.set_kbd_backlight(4).await, Err(Error::InvalidValue));
        finish(service);
    }

    #[tokio::test]
    async fn absent_leds_are_unsupported() {
        let service = service(&[], &CONF6);

        assert_eq!(service.micmute_led().await, Err(Error::Unsupported));
        assert_eq!(service.set_mute_led(1).await, Err(Error::Unsupported));
        assert_eq!(service.kbd_backlight().await, Err(Error::Unsupported));
        assert_eq!(service.set_kbd_backlight(1).await, Err(Error::Unsupported));
        finish(service);
    }
}
