//! Fixed-Point Lux Estimation
//!
//! ## Motivation
//!
//! The TSL2561's two photodiodes (channel 0: visible + infrared,
//! channel 1: infrared only) do not map linearly to illuminance. The
//! vendor characterizes the response as a family of linear segments keyed
//! by the infrared ratio `channel1 / channel0`, with all coefficients
//! published as pre-scaled integers. Keeping the whole computation in
//! integer fixed point matters on the targets this crate runs on: many
//! have no FPU, and a software float divide costs thousands of cycles
//! where a shift-and-multiply costs a handful.
//!
//! ## Fixed-Point Layout
//!
//! Three scale factors, all powers of two:
//!
//! ```text
//! Quantity       | Scale          | Meaning
//! ---------------|----------------|--------------------------------
//! channel counts | 2^CH_SCALE     | headroom for the gain multiply
//! ratio          | 2^RATIO_SCALE  | ch1/ch0 as a 9-bit fraction
//! lux            | 2^LUX_SCALE    | segment coefficients b and m
//! ```
//!
//! The deployment runs the analog front end at a fixed 1x gain, so both
//! channels are scaled up by 16 to land in the same numeric range the
//! coefficient table was derived for. Dynamic gain switching is out of
//! scope; the 16x compensation is a build-time constant.
//!
//! ## Segment Selection
//!
//! Eight segments, scanned in ascending threshold order; the first
//! segment whose threshold is >= the ratio wins, and the eighth segment
//! is open-ended above the seventh threshold. The comparison order and
//! operators are part of the vendor contract - boundary ratios must land
//! in the lower segment.
//!
//! ## Zero Clamp
//!
//! The segment evaluation `ch0*b - ch1*m` can go negative in the
//! infrared-dominant corner of the input space. The difference is taken
//! in signed 64-bit and clamped, so the estimator's contract is simply:
//! lux is never negative and every `(u16, u16)` input has a defined
//! output.

/// Channel scale exponent: counts carry `2^CH_SCALE` fractional headroom
pub const CH_SCALE: u32 = 10;

/// Ratio scale exponent: `ratio` is ch1/ch0 in units of `2^-RATIO_SCALE`
pub const RATIO_SCALE: u32 = 9;

/// Lux scale exponent: segment coefficients are in units of `2^-LUX_SCALE`
pub const LUX_SCALE: u32 = 14;

/// Channel scale for the fixed 1x analog gain (16x compensation baked in)
const CH_SCALE_GAIN_1X: u32 = (1 << CH_SCALE) << 4;

/// One linear segment of the response approximation
struct Segment {
    /// Ratio upper bound, inclusive (scaled by `2^RATIO_SCALE`)
    threshold: u32,
    /// Broadband coefficient (scaled by `2^LUX_SCALE`)
    b: u32,
    /// Infrared coefficient (scaled by `2^LUX_SCALE`)
    m: u32,
}

/// Vendor coefficient table for the T/FN/CL package, ascending thresholds.
///
/// The last entry's threshold equals the seventh's; it is matched as the
/// open-ended catch-all, never by threshold comparison.
static SEGMENTS: [Segment; 8] = [
    Segment { threshold: 0x0040, b: 0x01F2, m: 0x01BE }, // ratio <= 0.125
    Segment { threshold: 0x0080, b: 0x0214, m: 0x02D1 }, // ratio <= 0.250
    Segment { threshold: 0x00C0, b: 0x023F, m: 0x037B }, // ratio <= 0.375
    Segment { threshold: 0x0100, b: 0x0270, m: 0x03FE }, // ratio <= 0.500
    Segment { threshold: 0x0138, b: 0x016F, m: 0x01FC }, // ratio <= 0.610
    Segment { threshold: 0x019A, b: 0x00D2, m: 0x00FB }, // ratio <= 0.800
    Segment { threshold: 0x029A, b: 0x0018, m: 0x0012 }, // ratio <= 1.300
    Segment { threshold: 0x029A, b: 0x0000, m: 0x0000 }, // above 1.300
];

/// Estimate illuminance in lux from the two raw channel counts
///
/// Pure and total: any input pair produces a defined, non-negative
/// result, and equal inputs always produce equal outputs. Darkness
/// (channel 0 at zero) reads as 0 lux.
pub fn estimate_lux(channel0: u16, channel1: u16) -> u32 {
    let scaled0 = scale_channel(channel0);
    let scaled1 = scale_channel(channel1);

    let ratio = channel_ratio(scaled0, scaled1);
    let segment = segment_for(ratio);

    // Signed domain so the infrared-dominant corner clamps instead of
    // wrapping. Max operand is ~2^40, well inside i64.
    let raw = i64::from(scaled0) * i64::from(segment.b)
        - i64::from(scaled1) * i64::from(segment.m);
    let raw = raw.max(0) as u64;

    // Round to nearest before stripping the fractional bits
    ((raw + (1 << (LUX_SCALE - 1))) >> LUX_SCALE) as u32
}

/// Apply the fixed-gain channel scaling to one raw count
///
/// Multiply-then-rescale rather than a plain multiply: the intermediate
/// keeps `CH_SCALE` bits of headroom so the 16x gain compensation does
/// not lose precision.
fn scale_channel(raw: u16) -> u32 {
    (u32::from(raw) * CH_SCALE_GAIN_1X) >> CH_SCALE
}

/// Infrared ratio `scaled1 / scaled0` in `2^-RATIO_SCALE` units
///
/// Zero when channel 0 is zero - the sensor is reading darkness and
/// there is nothing to divide by.
fn channel_ratio(scaled0: u32, scaled1: u32) -> u32 {
    if scaled0 == 0 {
        return 0;
    }

    // One extra fractional bit, then round it away
    let ratio_raw = (scaled1 << (RATIO_SCALE + 1)) / scaled0;
    (ratio_raw + 1) >> 1
}

/// First segment whose threshold covers the ratio, ascending scan
fn segment_for(ratio: u32) -> &'static Segment {
    for segment in &SEGMENTS[..7] {
        if ratio <= segment.threshold {
            return segment;
        }
    }
    &SEGMENTS[7]
}
