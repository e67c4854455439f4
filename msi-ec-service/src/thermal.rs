//! Thermals: CPU/GPU temperatures and fan speeds.
//!
//! Fan speed registers store a raw byte inside a per-model `[min, max]`
//! window; percentages are derived with pure integer arithmetic. A raw
//! value outside the window is an error, never a clamp.

use embassy_sync::blocking_mutex::raw::RawMutex;
use msi_ec_access::EcTransport;

use crate::{Error, Service};

fn percent_from_raw(raw: u8, base_min: u8, base_max: u8) -> Option<u8> {
    if base_max <= base_min || raw < base_min || raw > base_max {
        return None;
    }
    let span = u32::from(base_max) - u32::from(base_min);
    Some((100 * (u32::from(raw) - u32::from(base_min)) / span) as u8)
}

fn raw_from_percent(percent: u8, base_min: u8, base_max: u8) -> Option<u8> {
    if base_max <= base_min || percent > 100 {
        return None;
    }
    let span = u32::from(base_max) - u32::from(base_min);
    Some(((u32::from(percent) * span + 100 * u32::from(base_min)) / 100) as u8)
}

impl<M: RawMutex, E: EcTransport> Service<M, E> {
    /// CPU temperature in degrees Celsius.
    pub async fn cpu_realtime_temperature(&self) -> Result<u8, Error<E::Error>> {
        self.read_register(self.config().cpu.rt_temp_address).await
    }

    /// CPU fan speed as a percentage of its realtime window.
    pub async fn cpu_realtime_fan_speed(&self) -> Result<u8, Error<E::Error>> {
        let cpu = &self.config().cpu;
        let raw = self.read_register(cpu.rt_fan_speed_address).await?;
        percent_from_raw(raw, cpu.rt_fan_speed_base_min, cpu.rt_fan_speed_base_max).ok_or(Error::InvalidValue)
    }

    /// CPU basic fan speed as a percentage of its window.
    pub async fn cpu_basic_fan_speed(&self) -> Result<u8, Error<E::Error>> {
        let cpu = &self.config().cpu;
        let raw = self.read_register(cpu.bs_fan_speed_address).await?;
        percent_from_raw(raw, cpu.bs_fan_speed_base_min, cpu.bs_fan_speed_base_max).ok_or(Error::InvalidValue)
    }

    /// Set the CPU basic fan speed percentage.
    ///
    /// Percentages above 100 are rejected without touching the EC.
    pub async fn set_cpu_basic_fan_speed(&self, percent: u8) -> Result<(), Error<E::Error>> {
        let cpu = &self.config().cpu;
        let raw = raw_from_percent(percent, cpu.bs_fan_speed_base_min, cpu.bs_fan_speed_base_max)
            .ok_or(Error::InvalidValue)?;
        self.write_register(cpu.bs_fan_speed_address, raw).await
    }

    /// GPU temperature in degrees Celsius.
    pub async fn gpu_realtime_temperature(&self) -> Result<u8, Error<E::Error>> {
        self.read_register(self.config().gpu.rt_temp_address).await
    }

    /// GPU fan speed, raw as reported by the EC.
    pub async fn gpu_realtime_fan_speed(&self) -> Result<u8, Error<E::Error>> {
        self.read_register(self.config().gpu.rt_fan_speed_address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{finish, service};
    use msi_ec_access::mock::Transaction;
    use msi_ec_config::tables::{CONF0, CONF8};
    use rstest::rstest;

    #[rstest]
    #[case(0x19, 0)]
    #[case(0x28, 50)]
    #[case(0x37, 100)]
    fn realtime_window_scales_linearly(#[case] raw: u8, #[case] percent: u8) {
        assert_eq!(percent_from_raw(raw, 0x19, 0x37), Some(percent));
    }

    #[rstest]
    #[case(0x10)]
    #[case(0x18)]
    #[case(0x38)]
    #[case(0xff)]
    fn raw_outside_the_window_is_an_error_not_a_clamp(#[case] raw: u8) {
        assert_eq!(percent_from_raw(raw, 0x19, 0x37), None);
    }

    #[rstest]
    #[case(0, 0x00)]
    #[case(50, 0x07)]
    #[case(100, 0x0f)]
    fn basic_window_write_scaling(#[case] percent: u8, #[case] raw: u8) {
        assert_eq!(raw_from_percent(percent, 0x00, 0x0f), Some(raw));
    }

    #[test]
    fn percentages_above_100_are_rejected() {
        assert_eq!(raw_from_percent(101, 0x00, 0x0f), None);
    }

    #[test]
    fn boundary_percentages_round_trip_exactly() {
        for (min, max) in [(0x19u8, 0x37u8), (0x00, 0x0f)] {
            for percent in [0u8, 100] {
                let raw = raw_from_percent(percent, min, max).unwrap();
                assert_eq!(percent_from_raw(raw, min, max), Some(percent));
            }
        }
    }

    #[tokio::test]
    async fn cpu_fan_speed_reads_scale() {
        let expectations = [
            Transaction::read(0x71, 0x19),
            Transaction::read(0x71, 0x37),
            Transaction::read(0x71, 0x10),
        ];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.cpu_realtime_fan_speed().await, Ok(0));
        assert_eq!(service.cpu_realtime_fan_speed().await, Ok(100));
        assert_eq!(service.cpu_realtime_fan_speed().await, Err(Error::InvalidValue));
        finish(service);
    }

    #[tokio::test]
    async fn basic_fan_speed_writes_the_scaled_raw() {
        let expectations = [
            Transaction::write(0x89, 0x00),
            Transaction::write(0x89, 0x0f),
        ];
        let service = service(&expectations, &CONF0);

        service.set_cpu_basic_fan_speed(0).await.unwrap();
        service.set_cpu_basic_fan_speed(100).await.unwrap();
        finish(service);
    }

    #[tokio::test]
    async fn overlarge_percentage_is_rejected_without_io() {
        let service = service(&[], &CONF0);

        assert_eq!(service.set_cpu_basic_fan_speed(101).await, Err(Error::InvalidValue));
        finish(service);
    }

    #[tokio::test]
    async fn temperatures_read_raw_bytes() {
        let expectations = [
            Transaction::read(0x68, 52),
            Transaction::read(0x80, 47),
            Transaction::read(0x89, 0x0b),
        ];
        let service = service(&expectations, &CONF0);

        assert_eq!(service.cpu_realtime_temperature().await, Ok(52));
        assert_eq!(service.gpu_realtime_temperature().await, Ok(47));
        assert_eq!(service.gpu_realtime_fan_speed().await, Ok(0x0b));
        finish(service);
    }

    #[tokio::test]
    async fn absent_gpu_registers_are_unsupported() {
        let service = service(&[], &CONF8);

        assert_eq!(service.gpu_realtime_temperature().await, Err(Error::Unsupported));
        assert_eq!(service.gpu_realtime_fan_speed().await, Err(Error::Unsupported));
        assert_eq!(service.set_cpu_basic_fan_speed(50).await, Err(Error::Unsupported));
        finish(service);
    }
}
