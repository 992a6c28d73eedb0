//! Driver core for the TSL2561 light-to-digital sensor
//!
//! Drives the sensor's register-level handshake over a caller-supplied
//! two-wire bus and converts the two raw photodiode channels into an
//! integer lux value using the vendor's fixed-point piecewise-linear
//! approximation.
//!
//! Key constraints:
//! - `no_std` by default, no heap allocation anywhere
//! - Integer-only lux math (targets run without an FPU)
//! - One bus transaction at a time, owned from call to return
//!
//! ```
//! use tsl2561_core::lux::estimate_lux;
//!
//! // Broadband count 100, infrared count 20 at the fixed 1x gain
//! assert_eq!(estimate_lux(100, 20), 38);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bus;
pub mod constants;
pub mod diag;
pub mod driver;
pub mod errors;
pub mod lux;
pub mod sampler;
pub mod time;

// Public API
pub use bus::TwoWireBus;
pub use driver::{Sample, Tsl2561};
pub use errors::{BusError, BusResult};
pub use lux::estimate_lux;
pub use sampler::Sampler;
pub use time::{Clock, FixedClock, Timestamp};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
