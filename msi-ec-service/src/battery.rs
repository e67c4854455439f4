//! Battery charge control: start/end thresholds and the derived battery
//! health mode.

use embassy_sync::blocking_mutex::raw::RawMutex;
use msi_ec_access::EcTransport;

use crate::{Error, Service};

/// Which charge threshold to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Threshold {
    /// Charging starts when the battery drops below this level.
    Start,
    /// Charging stops at this level.
    End,
}

/// Battery health mode, a named view over the charge-end threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryMode {
    /// Charge to 100%.
    Max,
    /// Charge up to 80%.
    Medium,
    /// Charge up to 60%.
    Min,
}

/// Battery health mode as read back from the EC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryModeReading {
    /// Charge to 100%.
    Max,
    /// Charge up to 80%.
    Medium,
    /// Charge up to 60%.
    Min,
    /// The register holds a threshold not matching any named mode.
    Unknown(u8),
}

impl<M: RawMutex, E: EcTransport> Service<M, E> {
    /// Read a charge threshold as a percentage.
    ///
    /// The register byte must lie in the declared valid range; anything
    /// else is reported as an error, never clamped.
    pub async fn charge_threshold(&self, threshold: Threshold) -> Result<u8, Error<E::Error>> {
        let cc = &self.config().charge_control;
        let raw = self.read_register(cc.address).await?;
        if raw < cc.range_min || raw > cc.range_max {
            return Err(Error::InvalidValue);
        }
        Ok(raw - self.threshold_offset(threshold))
    }

    /// Write a charge threshold as a percentage.
    ///
    /// Rejects any percentage whose raw encoding falls outside the declared
    /// valid range, without touching the EC; both range ends are accepted.
    pub async fn set_charge_threshold(&self, threshold: Threshold, percent: u8) -> Result<(), Error<E::Error>> {
        let cc = &self.config().charge_control;
        let raw = u16::from(percent) + u16::from(self.threshold_offset(threshold));
        if raw < u16::from(cc.range_min) || raw > u16::from(cc.range_max) {
            return Err(Error::InvalidValue);
        }
        self.write_register(cc.address, raw as u8).await
    }

    /// Classify the charge-end register as a battery health mode.
    pub async fn battery_mode(&self) -> Result<BatteryModeReading, Error<E::Error>> {
        let cc = &self.config().charge_control;
        let raw = self.read_register(cc.address).await?;
        Ok(if raw == cc.range_max {
            BatteryModeReading::Max
        } else if raw == cc.offset_end + 80 {
            BatteryModeReading::Medium
        } else if raw == cc.offset_end + 60 {
            BatteryModeReading::Min
        } else {
            BatteryModeReading::Unknown(raw)
        })
    }

    /// Set the battery health mode by writing its defining raw threshold.
    pub async fn set_battery_mode(&self, mode: BatteryMode) -> Result<(), Error<E::Error>> {
        let cc = &self.config().charge_control;
        let raw = match mode {
            BatteryMode::Max => cc.range_max,
            BatteryMode::Medium => cc.offset_end + 80,
            BatteryMode::Min => cc.offset_end + 60,
        };
        self.write_register(cc.address, raw).await
    }

    fn threshold_offset(&self, threshold: Threshold) -> u8 {
        let cc = &self.config().charge_control;
        match threshold {
            Threshold::Start => cc.offset_start,
            Threshold::End => cc.offset_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{finish, service};
    use msi_ec_access::mock::Transaction;
    use msi_ec_config::tables::{CONF0, CONF2};

    // CONF0: address 0xef, offsets 0x8a/0x80, range [0x8a, 0xe4].

    #[tokio::test]
    async fn thresholds_subtract_their_offset() {
        let expectations = [
            Transaction::read(0xef, 0xd0),
            Transaction::read(0xef, 0xd0),
        ];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.charge_threshold(Threshold::Start).await, Ok(0xd0 - 0x8a));
        assert_eq!(service.charge_threshold(Threshold::End).await, Ok(0xd0 - 0x80));
        finish(service);
    }

    #[tokio::test]
    async fn out_of_range_register_read_is_an_error_not_a_clamp() {
        let expectations = [Transaction::read(0xef, 0x50)];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.charge_threshold(Threshold::End).await, Err(Error::InvalidValue));
        finish(service);
    }

    #[tokio::test]
    async fn writes_add_the_offset() {
        let expectations = [Transaction::write(0xef, 0xcc)];
        let service = service(&expectations, &CONF0);

        service.set_charge_threshold(Threshold::End, 76).await.unwrap();
        finish(service);
    }

    #[tokio::test]
    async fn out_of_range_write_is_rejected_without_io() {
        let service = service(&[], &CONF0);

        // 0x8a + 91 > 0xe4
        assert_eq!(
            service.set_charge_threshold(Threshold::Start, 91).await,
            Err(Error::InvalidValue)
        );
        // 0x80 + 9 < 0x8a
        assert_eq!(
            service.set_charge_threshold(Threshold::End, 9).await,
            Err(Error::InvalidValue)
        );
        // Large percentages must not wrap into the valid range.
        assert_eq!(
            service.set_charge_threshold(Threshold::End, 255).await,
            Err(Error::InvalidValue)
        );
        finish(service);
    }

    #[tokio::test]
    async fn range_boundaries_are_accepted() {
        let expectations = [
            Transaction::write(0xef, 0x8a),
            Transaction::write(0xef, 0xe4),
        ];
        let service = service(&expectations, &CONF0);

        service.set_charge_threshold(Threshold::Start, 0).await.unwrap();
        service.set_charge_threshold(Threshold::End, 100).await.unwrap();
        finish(service);
    }

    #[tokio::test]
    async fn battery_mode_classifies_the_raw_threshold() {
        let expectations = [
            Transaction::read(0xef, 0xe4), // range_max
            Transaction::read(0xef, 0xd0), // offset_end + 80
            Transaction::read(0xef, 0xbc), // offset_end + 60
            Transaction::read(0xef, 0x99),
        ];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.battery_mode().await, Ok(BatteryModeReading::Max));
        assert_eq!(service.battery_mode().await, Ok(BatteryModeReading::Medium));
        assert_eq!(service.battery_mode().await, Ok(BatteryModeReading::Min));
        assert_eq!(service.battery_mode().await, Ok(BatteryModeReading::Unknown(0x99)));
        finish(service);
    }

    #[tokio::test]
    async fn set_battery_mode_writes_the_defining_threshold() {
        let expectations = [
            Transaction::write(0xd7, 0xe4),
            Transaction::write(0xd7, 0xd0),
            Transaction::write(0xd7, 0xbc),
        ];
        let service = service(&expectations, &CONF2);

        service.set_battery_mode(BatteryMode::Max).await.unwrap();
        service.set_battery_mode(BatteryMode::Medium).await.unwrap();
        service.set_battery_mode(BatteryMode::Min).await.unwrap();
        finish(service);
    }
}
