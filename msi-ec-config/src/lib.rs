//! Per-firmware register maps and configuration resolution for the MSI
//! laptop embedded controller.
//!
//! The same capability lives at different registers, bits or encodings
//! depending on the machine, so hardware variance is isolated to pure data:
//! one [`Config`] per firmware family, each tagged with the firmware version
//! strings it applies to. At startup [`resolver::resolve`] reads the
//! firmware identity from the EC and adopts the first matching entry of
//! [`tables::CONFIGURATIONS`], or fails closed — a wrong register map could
//! write to unrelated hardware state, so there is no best-guess fallback.

#![no_std]

#[cfg(test)]
extern crate std;

pub mod descriptor;
pub mod firmware;
pub mod resolver;
pub mod support;
pub mod tables;

pub use descriptor::{Config, Mode};
pub use resolver::{ResolveError, resolve};
pub use support::{Capability, ExposedSet};
