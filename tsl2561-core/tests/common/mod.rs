//! Common test utilities for integration tests
//!
//! Provides a recording bus double: it answers acknowledgement checks
//! from a per-call script, serves reads from a byte queue, and keeps a
//! full transcript of bus operations so tests can assert the exact wire
//! protocol, including where an aborted transaction stopped.

#![allow(dead_code)]

use tsl2561_core::bus::TwoWireBus;

/// One observable bus event, in call order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    /// Start or repeated start condition
    Start,
    /// Stop condition
    Stop,
    /// Master wrote this byte
    Write(u8),
    /// Master read a byte
    Read,
    /// Master drove its acknowledgement bit
    MasterAck(bool),
}

/// Scripted, recording bus double
pub struct RecordingBus {
    /// Transcript of every operation performed on the bus
    pub ops: Vec<BusOp>,
    acks: Vec<bool>,
    ack_cursor: usize,
    reads: Vec<u8>,
    read_cursor: usize,
}

impl RecordingBus {
    /// Bus that acknowledges everything and serves the given read bytes
    pub fn responsive(reads: &[u8]) -> Self {
        Self {
            ops: Vec::new(),
            acks: Vec::new(),
            ack_cursor: 0,
            reads: reads.to_vec(),
            read_cursor: 0,
        }
    }

    /// Bus that answers acknowledgement checks from a script, then keeps
    /// acknowledging once the script runs out
    pub fn with_ack_script(acks: &[bool], reads: &[u8]) -> Self {
        Self {
            acks: acks.to_vec(),
            ..Self::responsive(reads)
        }
    }

    /// Bytes written so far, in order
    pub fn written(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Write(byte) => Some(*byte),
                _ => None,
            })
            .collect()
    }

    /// Number of bytes the master has read
    pub fn reads_performed(&self) -> usize {
        self.read_cursor
    }
}

impl TwoWireBus for RecordingBus {
    fn start(&mut self) {
        self.ops.push(BusOp::Start);
    }

    fn stop(&mut self) {
        self.ops.push(BusOp::Stop);
    }

    fn write_byte(&mut self, byte: u8) {
        self.ops.push(BusOp::Write(byte));
    }

    fn check_ack(&mut self) -> bool {
        let ack = self.acks.get(self.ack_cursor).copied().unwrap_or(true);
        self.ack_cursor += 1;
        ack
    }

    fn read_byte(&mut self) -> u8 {
        let byte = self.reads.get(self.read_cursor).copied().unwrap_or(0);
        self.read_cursor += 1;
        self.ops.push(BusOp::Read);
        byte
    }

    fn send_ack(&mut self, ack: bool) {
        self.ops.push(BusOp::MasterAck(ack));
    }
}

/// Encode a channel word as the low-then-high byte pair the device sends
pub fn word_bytes(value: u16) -> [u8; 2] {
    [(value & 0xFF) as u8, (value >> 8) as u8]
}

/// Read bytes for a full two-channel measurement
pub fn channel_bytes(channel0: u16, channel1: u16) -> Vec<u8> {
    let mut bytes = word_bytes(channel0).to_vec();
    bytes.extend_from_slice(&word_bytes(channel1));
    bytes
}
