//! Error Types for Bus Transaction Failures
//!
//! ## Design Philosophy
//!
//! The original vendor flow signals failure with magic values (`-1` cast
//! into an all-ones word), which cannot be told apart from a legitimate
//! all-ones sensor reading. This crate replaces that with an explicit
//! `Result` so a communication fault and an extreme-but-valid measurement
//! are different types, not different bit patterns.
//!
//! Errors follow the same rules as the rest of the crate:
//!
//! 1. **Small Size**: one byte of context per variant, no padding games.
//! 2. **No Heap Allocation**: all error data is inline.
//! 3. **Copy Semantics**: errors are returned from hot protocol paths and
//!    may be stored by callers.
//!
//! ## Error Categories
//!
//! Both variants are acknowledgement failures; they differ in which
//! protocol step went unanswered:
//!
//! - `AddressNack`: nobody answered the address byte. This is what a
//!   missing or powered-down device looks like.
//! - `DataNack`: the device answered its address but refused a command or
//!   data byte - usually wiring trouble or a device in a bad state.
//!
//! The failed byte is carried so diagnostics can print exactly where in
//! the sequence the transaction died.

use thiserror_no_std::Error;

/// Result type for bus transaction operations
pub type BusResult<T> = Result<T, BusError>;

/// Bus acknowledgement failures - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// No device acknowledged the address byte
    #[error("no acknowledgement for address byte {byte:#04x}")]
    AddressNack {
        /// The address byte (7-bit address shifted left, R/W bit in bit 0)
        byte: u8,
    },

    /// The addressed device did not acknowledge a command or data byte
    #[error("no acknowledgement for data byte {byte:#04x}")]
    DataNack {
        /// The byte that went unacknowledged
        byte: u8,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for BusError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::AddressNack { byte } => {
                defmt::write!(fmt, "address byte {=u8:#x} not acked", byte)
            }
            Self::DataNack { byte } => {
                defmt::write!(fmt, "data byte {=u8:#x} not acked", byte)
            }
        }
    }
}
