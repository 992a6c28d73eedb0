//! Periodic Sampling Service
//!
//! Recreates the original deployment's timer-driven loop as an explicitly
//! owned component: the sampler holds the driver and a [`Clock`] handle,
//! and the platform's executor (timer interrupt, superloop, whatever is
//! available) calls [`poll`](Sampler::poll) as often as it likes.
//!
//! ## Arming
//!
//! The schedule only starts after [`arm`](Sampler::arm) probes the device
//! with a power-up handshake. If the probe fails - device absent, wiring
//! broken - the sampler stays unarmed and `poll` reports `WouldBlock`
//! forever: no device, no periodic output.
//!
//! ## Cadence
//!
//! The schedule is strictly periodic: each fired sample moves the due
//! time forward by exactly one period from the previous due time, so the
//! cadence does not drift with polling latency. A bus fault during a
//! sample is non-fatal; the error is surfaced and the next period tries
//! again.

use crate::{
    bus::TwoWireBus,
    driver::{Sample, Tsl2561},
    errors::BusError,
    time::{Clock, Timestamp},
};

#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Fixed-cadence sampler owning the driver and its clock
pub struct Sampler<B: TwoWireBus, C: Clock> {
    driver: Tsl2561<B>,
    clock: C,
    period_ms: u64,
    next_due: Option<Timestamp>,
}

impl<B: TwoWireBus, C: Clock> Sampler<B, C> {
    /// Build an unarmed sampler with the given period
    ///
    /// See [`DEFAULT_SAMPLE_PERIOD_MS`](crate::constants::DEFAULT_SAMPLE_PERIOD_MS)
    /// for the deployment default.
    pub fn new(driver: Tsl2561<B>, clock: C, period_ms: u64) -> Self {
        Self {
            driver,
            clock,
            period_ms,
            next_due: None,
        }
    }

    /// Probe the device and start the schedule
    ///
    /// The first sample becomes due one full period after a successful
    /// probe. On failure the sampler stays unarmed and the error is
    /// returned; arming can be retried.
    pub fn arm(&mut self) -> Result<(), BusError> {
        match self.driver.power_up() {
            Ok(()) => {
                self.next_due = Some(self.clock.now() + self.period_ms);
                log_info!("sampler armed, period {}ms", self.period_ms);
                Ok(())
            }
            Err(err) => {
                log_warn!("device probe failed, sampler not armed: {}", err);
                Err(err)
            }
        }
    }

    /// Take one scheduled sample if it is due
    ///
    /// Returns `WouldBlock` while unarmed or before the next due time.
    /// When due, performs one full read, advances the schedule by exactly
    /// one period, and returns the sample. A bus fault is returned as
    /// `nb::Error::Other`; the schedule still advances, so the fault
    /// costs one sample, not the whole loop.
    pub fn poll(&mut self) -> nb::Result<Sample, BusError> {
        let due = self.next_due.ok_or(nb::Error::WouldBlock)?;
        if self.clock.now() < due {
            return Err(nb::Error::WouldBlock);
        }

        self.next_due = Some(due + self.period_ms);

        match self.driver.read_sample() {
            Ok(sample) => {
                log_info!("lux: {}", sample.lux);
                log_debug!("raw channels: ch0={} ch1={}", sample.channel0, sample.channel1);
                Ok(sample)
            }
            Err(err) => {
                log_warn!("sample failed: {}", err);
                Err(nb::Error::Other(err))
            }
        }
    }

    /// Has a successful probe started the schedule?
    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Configured sampling period in milliseconds
    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// Tear down, handing back the driver and the clock
    pub fn release(self) -> (Tsl2561<B>, C) {
        (self.driver, self.clock)
    }
}
