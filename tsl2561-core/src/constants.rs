//! Device Protocol Constants
//!
//! Fixed external contract with the physical TSL2561. None of these are
//! configurable: the address is strapped in hardware and the command bytes
//! are defined by the part's command register layout.

// ===== DEVICE ADDRESSING =====

/// 7-bit bus address of the TSL2561.
///
/// The part ships with three address options selected by the ADDR SEL pin
/// (0x29, 0x39, 0x49); this deployment uses the floating-pin default.
///
/// Source: TSL2561 datasheet, slave address table
pub const DEVICE_ADDRESS: u8 = 0x39;

// ===== COMMAND BYTES =====

/// Command byte selecting the control register (command bit | register 0x0).
///
/// Source: TSL2561 datasheet, command register description
pub const REG_CONTROL: u8 = 0x80;

/// Control register value that powers the part up.
///
/// Writing 0x03 sets both POWER bits; the ADC starts integrating.
///
/// Source: TSL2561 datasheet, control register description
pub const CMD_POWER_UP: u8 = 0x03;

/// Command byte for the channel 0 (broadband) data register pair.
///
/// Command bit | word bit | DATA0LOW. The word bit makes the device
/// auto-advance to DATA0HIGH on the second read.
///
/// Source: TSL2561 datasheet, ADC channel data registers
pub const CMD_CHANNEL0: u8 = 0xAC;

/// Command byte for the channel 1 (infrared) data register pair.
///
/// Source: TSL2561 datasheet, ADC channel data registers
pub const CMD_CHANNEL1: u8 = 0xAE;

// ===== SAMPLING =====

/// Default sampling period for the periodic sampler (ms).
///
/// One reading every half second; comfortably above the part's longest
/// integration time.
pub const DEFAULT_SAMPLE_PERIOD_MS: u64 = 500;
