//! Expectation-based mock transport.
//!
//! Mirrors the `embedded-hal-mock` transaction style: a test declares the
//! exact sequence of register transactions it expects, runs the code under
//! test, then calls [`Transport::done`] to assert the sequence was consumed
//! in full. Any deviation panics with the offending transaction.

#![allow(clippy::panic)]

use crate::EcTransport;

/// Error returned by a mock transaction declared to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Fault;

/// One expected register transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transaction {
    /// Expected read and the response it produces.
    Read {
        /// Register address the code under test must read.
        addr: u8,
        /// Value handed back, or a transport fault.
        response: Result<u8, Fault>,
    },
    /// Expected write and the response it produces.
    Write {
        /// Register address the code under test must write.
        addr: u8,
        /// Value the code under test must write.
        value: u8,
        /// Outcome of the transaction.
        response: Result<(), Fault>,
    },
}

impl Transaction {
    /// Expect a read of `addr` returning `value`.
    pub const fn read(addr: u8, value: u8) -> Self {
        Self::Read {
            addr,
            response: Ok(value),
        }
    }

    /// Expect a read of `addr` failing with a transport fault.
    pub const fn read_error(addr: u8) -> Self {
        Self::Read {
            addr,
            response: Err(Fault),
        }
    }

    /// Expect a write of `value` to `addr`.
    pub const fn write(addr: u8, value: u8) -> Self {
        Self::Write {
            addr,
            value,
            response: Ok(()),
        }
    }

    /// Expect a write of `value` to `addr` failing with a transport fault.
    pub const fn write_error(addr: u8, value: u8) -> Self {
        Self::Write {
            addr,
            value,
            response: Err(Fault),
        }
    }
}

/// Mock EC transport driven by a fixed expectation sequence.
#[derive(Debug)]
pub struct Transport<'a> {
    expected: &'a [Transaction],
    position: usize,
}

impl<'a> Transport<'a> {
    /// Create a transport expecting exactly the given transactions, in order.
    pub const fn new(expected: &'a [Transaction]) -> Self {
        Self { expected, position: 0 }
    }

    /// Assert that every expected transaction was performed.
    pub fn done(&self) {
        if self.position != self.expected.len() {
            panic!(
                "mock EC dropped: {} of {} expected transactions performed",
                self.position,
                self.expected.len()
            );
        }
    }

    fn next(&mut self) -> Transaction {
        let Some(transaction) = self.expected.get(self.position) else {
            panic!("unexpected EC transaction: expectation list exhausted");
        };
        self.position += 1;
        *transaction
    }
}

impl EcTransport for Transport<'_> {
    type Error = Fault;

    async fn read(&mut self, addr: u8) -> Result<u8, Fault> {
        match self.next() {
            Transaction::Read {
                addr: expected,
                response,
            } if expected == addr => response,
            other => panic!("unexpected read of {:#04x}, expected {:?}", addr, other),
        }
    }

    async fn write(&mut self, addr: u8, value: u8) -> Result<(), Fault> {
        match self.next() {
            Transaction::Write {
                addr: expected,
                value: expected_value,
                response,
            } if expected == addr && expected_value == value => response,
            other => panic!(
                "unexpected write of {:#04x} to {:#04x}, expected {:?}",
                value, addr, other
            ),
        }
    }
}
