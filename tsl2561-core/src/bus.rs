//! Two-Wire Bus Contract
//!
//! The sequencer drives the sensor through these primitives; the
//! bit-banging itself (GPIO timing, clock stretching) is platform code and
//! lives behind this trait.
//!
//! ## Design Philosophy
//!
//! - **Caller-driven**: every condition and acknowledgement bit is an
//!   explicit call. Nothing is hidden in the primitive layer, so the
//!   sequencer's transcript of calls IS the wire protocol.
//! - **Separate ack check**: `write_byte` returns nothing; success is
//!   observed through `check_ack`. This mirrors how an open-drain bus
//!   actually works - the ninth clock is its own bus event.
//! - **Exclusive ownership**: a transaction owns the bus from `start` to
//!   `stop`. There is no interleaving to defend against, so the trait
//!   needs no locking vocabulary.
//!
//! ## Example Implementation
//!
//! ```
//! use tsl2561_core::bus::TwoWireBus;
//!
//! /// Test double that acknowledges everything and reads zeros.
//! struct QuietBus;
//!
//! impl TwoWireBus for QuietBus {
//!     fn start(&mut self) {}
//!     fn stop(&mut self) {}
//!     fn write_byte(&mut self, _byte: u8) {}
//!     fn check_ack(&mut self) -> bool { true }
//!     fn read_byte(&mut self) -> u8 { 0 }
//!     fn send_ack(&mut self, _ack: bool) {}
//! }
//! ```

/// Software-driven two-wire (I²C-style) bus primitives
///
/// Implementations are expected to be blocking and cheap: each call maps
/// to a handful of GPIO edges. None of the methods return errors - the
/// only failure the protocol knows is a missing acknowledgement, reported
/// by `check_ack`.
pub trait TwoWireBus {
    /// Issue a start condition (also used for repeated start)
    fn start(&mut self);

    /// Issue a stop condition, releasing the bus
    fn stop(&mut self);

    /// Clock out one byte, MSB first
    ///
    /// Success is not reported here; call [`check_ack`](Self::check_ack)
    /// afterwards to learn whether the device pulled the ack bit low.
    fn write_byte(&mut self, byte: u8);

    /// Sample the acknowledgement bit for the previously written byte
    ///
    /// Returns `true` if the device acknowledged.
    fn check_ack(&mut self) -> bool;

    /// Clock in one byte, MSB first
    fn read_byte(&mut self) -> u8;

    /// Drive the master acknowledgement bit after a read
    ///
    /// `true` acknowledges and asks for more data; `false` (NACK) tells
    /// the device the master is done reading.
    fn send_ack(&mut self, ack: bool);
}
