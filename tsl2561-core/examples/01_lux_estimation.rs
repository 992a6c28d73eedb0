//! Lux Estimation Example
//!
//! Demonstrates the fixed-point channel-pair to lux conversion on its
//! own, without any bus traffic.
//!
//! ## What You'll Learn
//!
//! - How the infrared ratio steers the piecewise approximation
//! - Why high-infrared readings collapse toward zero lux
//! - The estimator's clamped, never-negative output contract
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_lux_estimation
//! ```

use tsl2561_core::estimate_lux;

fn main() {
    println!("TSL2561 Lux Estimation Example");
    println!("==============================\n");

    let readings = [
        (0u16, 0u16, "complete darkness"),
        (0, 500, "infrared only (clamped to zero)"),
        (100, 20, "dim indoor light, vendor reference pair"),
        (1000, 300, "office lighting"),
        (4095, 1024, "bright room"),
        (20000, 9000, "indirect daylight"),
        (u16::MAX, u16::MAX, "saturated sensor"),
    ];

    println!("{:>8} {:>8} {:>8}   description", "ch0", "ch1", "lux");
    for (channel0, channel1, description) in readings {
        println!(
            "{:>8} {:>8} {:>8}   {}",
            channel0,
            channel1,
            estimate_lux(channel0, channel1),
            description
        );
    }

    println!();
    println!("Channel 0 is the broadband photodiode (visible + infrared),");
    println!("channel 1 is infrared only. The ratio between them selects one");
    println!("of eight linear segments; infrared-dominant light (ratio above");
    println!("1.3) is outside the visible response and reads as 0 lux.");
}
