//! Periodic Sampling Example
//!
//! Runs the full stack - sampler, sequencer, estimator - on the host
//! against a scripted bus and a manually advanced clock. The bus double
//! stands in for the platform's bit-banged two-wire implementation.
//!
//! ## What You'll Learn
//!
//! - Wiring a `TwoWireBus` implementation into the driver
//! - Arming the sampler (and what happens when the probe fails)
//! - The `nb`-style polling loop a firmware superloop would run
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_mock_sampling
//! ```

use core::cell::Cell;

use tsl2561_core::{
    constants::DEFAULT_SAMPLE_PERIOD_MS,
    time::{Clock, Timestamp},
    Sampler, Tsl2561, TwoWireBus,
};

/// Clock the example advances by hand while the sampler holds it
struct SharedClock<'a>(&'a Cell<Timestamp>);

impl Clock for SharedClock<'_> {
    fn now(&self) -> Timestamp {
        self.0.get()
    }
}

/// Bus double simulating a TSL2561 under slowly brightening light
///
/// Acknowledges everything and serves each register read from a table of
/// channel pairs, low byte first, advancing one pair per measurement.
struct SimulatedSensor {
    frames: &'static [(u16, u16)],
    byte_index: usize,
}

impl SimulatedSensor {
    fn new(frames: &'static [(u16, u16)]) -> Self {
        Self {
            frames,
            byte_index: 0,
        }
    }
}

impl TwoWireBus for SimulatedSensor {
    fn start(&mut self) {}
    fn stop(&mut self) {}
    fn write_byte(&mut self, _byte: u8) {}
    fn check_ack(&mut self) -> bool {
        true
    }
    fn read_byte(&mut self) -> u8 {
        let frame = self.frames[(self.byte_index / 4) % self.frames.len()];
        let byte = match self.byte_index % 4 {
            0 => (frame.0 & 0xFF) as u8,
            1 => (frame.0 >> 8) as u8,
            2 => (frame.1 & 0xFF) as u8,
            _ => (frame.1 >> 8) as u8,
        };
        self.byte_index += 1;
        byte
    }
    fn send_ack(&mut self, _ack: bool) {}
}

fn main() {
    println!("TSL2561 Periodic Sampling Example");
    println!("=================================\n");

    let frames: &[(u16, u16)] = &[
        (120, 24),
        (340, 70),
        (900, 180),
        (2400, 500),
        (6000, 1300),
        (11000, 2600),
    ];

    let time = Cell::new(0);
    let driver = Tsl2561::new(SimulatedSensor::new(frames));
    let mut sampler = Sampler::new(driver, SharedClock(&time), DEFAULT_SAMPLE_PERIOD_MS);

    sampler.arm().expect("simulated device always acks");
    println!(
        "Sampler armed, one reading every {}ms:\n",
        sampler.period_ms()
    );

    // A firmware superloop would spin on poll(); here we jump the clock
    // straight to each due time
    for tick in 1..=frames.len() as u64 {
        time.set(tick * DEFAULT_SAMPLE_PERIOD_MS);

        match sampler.poll() {
            Ok(sample) => println!(
                "t={:>5}ms  ch0={:>5} ch1={:>5}  ->  {} lux",
                time.get(),
                sample.channel0,
                sample.channel1,
                sample.lux
            ),
            Err(nb::Error::WouldBlock) => unreachable!("clock sits on a due time"),
            Err(nb::Error::Other(err)) => println!("t={:>5}ms  bus fault: {}", time.get(), err),
        }
    }
}
