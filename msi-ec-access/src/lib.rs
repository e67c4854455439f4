//! Register access layer for the MSI laptop embedded controller.
//!
//! The EC exposes a flat, byte-addressable register space. This crate
//! abstracts the byte-level transport behind [`EcTransport`] and builds the
//! read-modify-write algebra (bit and mask operators) every higher-level
//! capability is made of.
//!
//! A read-modify-write sequence is not atomic on its own: two concurrent
//! writers hitting the same register can interleave their windows and lose
//! an update. Callers must serialize whole transactions, e.g. by keeping the
//! transport behind an `embassy_sync::mutex::Mutex` and holding the lock
//! across the complete operation, as `msi-ec-service` does.

#![no_std]

pub mod address;
mod fmt;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use address::{Address, Support};

/// Byte-level transport to the embedded controller.
///
/// `read` and `write` are single-register transactions, assumed blocking and
/// atomic with respect to the EC itself. The provided combinators each issue
/// exactly one read followed by at most one write; when the write fails the
/// register may be left in either the pre- or post-write state and the caller
/// must treat the whole operation as failed.
#[allow(async_fn_in_trait)]
pub trait EcTransport {
    /// Transport-level error, propagated verbatim to callers.
    type Error: core::fmt::Debug;

    /// Read the register at `addr`.
    async fn read(&mut self, addr: u8) -> Result<u8, Self::Error>;

    /// Write `value` to the register at `addr`.
    async fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error>;

    /// Read `buf.len()` consecutive registers starting at `start`,
    /// short-circuiting on the first failed transaction.
    async fn read_seq(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        for (i, slot) in buf.iter_mut().enumerate() {
            *slot = self.read(start.wrapping_add(i as u8)).await?;
        }
        Ok(())
    }

    /// Set bit `bit` (0-7) of the register at `addr`.
    async fn set_bit(&mut self, addr: u8, bit: u8) -> Result<(), Self::Error> {
        let stored = self.read(addr).await?;
        self.write(addr, stored | (1 << bit)).await
    }

    /// Clear bit `bit` (0-7) of the register at `addr`.
    async fn unset_bit(&mut self, addr: u8, bit: u8) -> Result<(), Self::Error> {
        let stored = self.read(addr).await?;
        self.write(addr, stored & !(1 << bit)).await
    }

    /// Return bit `bit` (0-7) of the register at `addr`.
    async fn check_bit(&mut self, addr: u8, bit: u8) -> Result<bool, Self::Error> {
        let stored = self.read(addr).await?;
        Ok((stored >> bit) & 1 == 1)
    }

    /// Set every bit of `mask` in the register at `addr`.
    async fn set_by_mask(&mut self, addr: u8, mask: u8) -> Result<(), Self::Error> {
        let stored = self.read(addr).await?;
        self.write(addr, stored | mask).await
    }

    /// Clear every bit of `mask` in the register at `addr`.
    async fn unset_by_mask(&mut self, addr: u8, mask: u8) -> Result<(), Self::Error> {
        let stored = self.read(addr).await?;
        self.write(addr, stored & !mask).await
    }

    /// Check whether every bit of `mask` is set in the register at `addr`.
    async fn check_by_mask(&mut self, addr: u8, mask: u8) -> Result<bool, Self::Error> {
        let stored = self.read(addr).await?;
        Ok(stored & mask == mask)
    }
}

impl<T: EcTransport + ?Sized> EcTransport for &mut T {
    type Error = T::Error;

    async fn read(&mut self, addr: u8) -> Result<u8, Self::Error> {
        T::read(self, addr).await
    }

    async fn write(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        T::write(self, addr, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Transaction, Transport};

    #[tokio::test]
    async fn set_bit_reads_then_writes() {
        let expectations = [Transaction::read(0x98, 0b0000_0001), Transaction::write(0x98, 0b1000_0001)];
        let mut ec = Transport::new(&expectations);

        ec.set_bit(0x98, 7).await.unwrap();

        ec.done();
    }

    #[tokio::test]
    async fn set_bit_is_idempotent_on_register_image() {
        let expectations = [Transaction::read(0x98, 0b1000_0000), Transaction::write(0x98, 0b1000_0000)];
        let mut ec = Transport::new(&expectations);

        ec.set_bit(0x98, 7).await.unwrap();

        ec.done();
    }

    #[tokio::test]
    async fn unset_bit_clears_only_the_requested_bit() {
        let expectations = [Transaction::read(0x2c, 0b0000_0110), Transaction::write(0x2c, 0b0000_0010)];
        let mut ec = Transport::new(&expectations);

        ec.unset_bit(0x2c, 2).await.unwrap();

        ec.done();
    }

    #[tokio::test]
    async fn check_bit_reads_without_writing() {
        let expectations = [Transaction::read(0xbf, 0b0001_0000)];
        let mut ec = Transport::new(&expectations);

        assert!(ec.check_bit(0xbf, 4).await.unwrap());

        ec.done();
    }

    #[tokio::test]
    async fn check_by_mask_requires_all_masked_bits() {
        let expectations = [
            Transaction::read(0xeb, 0x0f),
            Transaction::read(0xeb, 0x07),
            Transaction::read(0xeb, 0xff),
        ];
        let mut ec = Transport::new(&expectations);

        assert!(ec.check_by_mask(0xeb, 0x0f).await.unwrap());
        assert!(!ec.check_by_mask(0xeb, 0x0f).await.unwrap());
        assert!(ec.check_by_mask(0xeb, 0x0f).await.unwrap());

        ec.done();
    }

    #[tokio::test]
    async fn mask_operators_leave_unmasked_bits_alone() {
        let expectations = [
            Transaction::read(0xeb, 0xa0),
            Transaction::write(0xeb, 0xaf),
            Transaction::read(0xeb, 0xaf),
            Transaction::write(0xeb, 0xa0),
        ];
        let mut ec = Transport::new(&expectations);

        ec.set_by_mask(0xeb, 0x0f).await.unwrap();
        ec.unset_by_mask(0xeb, 0x0f).await.unwrap();

        ec.done();
    }

    #[tokio::test]
    async fn rmw_propagates_read_errors_without_writing() {
        let expectations = [Transaction::read_error(0x98)];
        let mut ec = Transport::new(&expectations);

        assert!(ec.set_bit(0x98, 7).await.is_err());

        ec.done();
    }

    #[tokio::test]
    async fn rmw_propagates_write_errors() {
        let expectations = [Transaction::read(0x98, 0x00), Transaction::write_error(0x98, 0x80)];
        let mut ec = Transport::new(&expectations);

        assert!(ec.set_bit(0x98, 7).await.is_err());

        ec.done();
    }

    #[tokio::test]
    async fn read_seq_walks_consecutive_addresses() {
        let expectations = [
            Transaction::read(0xa0, b'1'),
            Transaction::read(0xa1, b'4'),
            Transaction::read(0xa2, b'C'),
        ];
        let mut ec = Transport::new(&expectations);

        let mut buf = [0u8; 3];
        ec.read_seq(0xa0, &mut buf).await.unwrap();

        assert_eq!(&buf, b"14C");
        ec.done();
    }

    #[tokio::test]
    async fn read_seq_short_circuits_on_first_error() {
        let expectations = [Transaction::read(0xa0, b'1'), Transaction::read_error(0xa1)];
        let mut ec = Transport::new(&expectations);

        let mut buf = [0u8; 4];
        assert!(ec.read_seq(0xa0, &mut buf).await.is_err());

        ec.done();
    }
}
