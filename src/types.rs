//! This module defines types used by various traits.
//! These types are meant to be agnostic of the trait implementation.

use core::{
    fmt::{Display, Formatter, Result},
    write,
};

use bitfield_struct::bitfield;

/// Transmit power level. The units dBm (decibel-milliwatts or dB<sub>mW</sub>)
/// represents a logarithmic signal loss.
///
/// The variants map directly onto the 2-bit `RF_PWR` field of the `RF_SETUP` register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PowerLevel {
    /// -18 dBm (`RF_PWR = 0`)
    Low,
    /// -12 dBm (`RF_PWR = 1`)
    Medium,
    /// -6 dBm (`RF_PWR = 2`)
    High,
    /// 0 dBm (`RF_PWR = 3`)
    VeryHigh,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for PowerLevel {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PowerLevel::Low => defmt::write!(fmt, "Low"),
            PowerLevel::Medium => defmt::write!(fmt, "Medium"),
            PowerLevel::High => defmt::write!(fmt, "High"),
            PowerLevel::VeryHigh => defmt::write!(fmt, "VeryHigh"),
        }
    }
}

impl PowerLevel {
    pub(crate) const fn into_bits(self) -> u8 {
        match self {
            PowerLevel::Low => 0,
            PowerLevel::Medium => 1,
            PowerLevel::High => 2,
            PowerLevel::VeryHigh => 3,
        }
    }

    pub(crate) const fn from_bits(value: u8) -> Self {
        match value & 3 {
            0 => PowerLevel::Low,
            1 => PowerLevel::Medium,
            2 => PowerLevel::High,
            _ => PowerLevel::VeryHigh,
        }
    }
}

impl Display for PowerLevel {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PowerLevel::Low => write!(f, "Low"),
            PowerLevel::Medium => write!(f, "Medium"),
            PowerLevel::High => write!(f, "High"),
            PowerLevel::VeryHigh => write!(f, "VeryHigh"),
        }
    }
}

/// How fast data moves through the air. Units are in bits per second (bps).
///
/// The device encodes this with two bits of the `RF_SETUP` register
/// (`RF_DR_LOW` and `RF_DR_HIGH`); both bits are never set at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataRate {
    /// represents 250 Kbps
    Low,
    /// represents 1 Mbps
    Medium,
    /// represents 2 Mbps
    High,
}

impl DataRate {
    /// Decode the `RF_DR_LOW` and `RF_DR_HIGH` bits.
    ///
    /// `RF_DR_LOW` takes precedence, as it does on the device.
    pub(crate) const fn from_flags(dr_low: bool, dr_high: bool) -> Self {
        if dr_low {
            DataRate::Low
        } else if dr_high {
            DataRate::High
        } else {
            DataRate::Medium
        }
    }

    /// Returns the `(RF_DR_LOW, RF_DR_HIGH)` pair for this data rate.
    pub(crate) const fn into_flags(self) -> (bool, bool) {
        match self {
            DataRate::Low => (true, false),
            DataRate::Medium => (false, false),
            DataRate::High => (false, true),
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for DataRate {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DataRate::Low => defmt::write!(fmt, "250 Kbps"),
            DataRate::Medium => defmt::write!(fmt, "1 Mbps"),
            DataRate::High => defmt::write!(fmt, "2 Mbps"),
        }
    }
}

impl Display for DataRate {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            DataRate::Low => write!(f, "250 Kbps"),
            DataRate::Medium => write!(f, "1 Mbps"),
            DataRate::High => write!(f, "2 Mbps"),
        }
    }
}

/// The length of the CRC checksum appended to every packet.
///
/// Cyclical Redundancy Checking (CRC) is commonly used to ensure data integrity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrcLength {
    /// represents CRC 8 bit checksum is used
    Bit8,
    /// represents CRC 16 bit checksum is used
    Bit16,
}

impl CrcLength {
    /// The state of the `CRCO` bit for this length.
    pub(crate) const fn into_bit(self) -> bool {
        matches!(self, CrcLength::Bit16)
    }

    pub(crate) const fn from_bit(crco: bool) -> Self {
        if crco {
            CrcLength::Bit16
        } else {
            CrcLength::Bit8
        }
    }
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for CrcLength {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CrcLength::Bit8 => defmt::write!(fmt, "8 bit"),
            CrcLength::Bit16 => defmt::write!(fmt, "16 bit"),
        }
    }
}

impl Display for CrcLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            CrcLength::Bit8 => write!(f, "8 bit"),
            CrcLength::Bit16 => write!(f, "16 bit"),
        }
    }
}

/// The possible states of a FIFO.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FifoState {
    /// Represent the state of a FIFO when it is full.
    Full,
    /// Represent the state of a FIFO when it is empty.
    Empty,
    /// Represent the state of a FIFO when it is not full but not empty either.
    Occupied,
}

#[cfg(feature = "defmt")]
#[cfg(target_os = "none")]
impl defmt::Format for FifoState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            FifoState::Empty => defmt::write!(fmt, "Empty"),
            FifoState::Full => defmt::write!(fmt, "Full"),
            FifoState::Occupied => defmt::write!(fmt, "Occupied"),
        }
    }
}

impl Display for FifoState {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            FifoState::Empty => write!(f, "Empty"),
            FifoState::Full => write!(f, "Full"),
            FifoState::Occupied => write!(f, "Occupied"),
        }
    }
}

/// A snapshot of the device's `STATUS` register.
///
/// The event flags (`rx_dr`, `tx_ds`, `max_rt`) are latches on the device.
/// A flag that reads as set stays set until it is cleared with
/// [`EsbStatus`](trait@crate::radio::prelude::EsbStatus).
#[bitfield(u8, new = false, order = Msb)]
pub struct StatusFlags {
    #[bits(1)]
    _padding: u8,

    /// A flag to describe if RX Data Ready to read.
    #[bits(1, access = RO)]
    pub rx_dr: bool,

    /// A flag to describe if TX Data Sent (and acknowledged, if an ACK was requested).
    #[bits(1, access = RO)]
    pub tx_ds: bool,

    /// A flag to describe if the maximum number of retransmits was reached.
    #[bits(1, access = RO)]
    pub max_rt: bool,

    /// The pipe number of the payload at the head of the RX FIFO (`7` means empty).
    #[bits(3, access = RO)]
    pub rx_pipe: u8,

    /// A flag to describe if the TX FIFO is full.
    #[bits(1, access = RO)]
    pub tx_full: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for StatusFlags {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

impl Display for StatusFlags {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "StatusFlags rx_dr: {}, tx_ds: {}, max_rt: {}",
            self.rx_dr(),
            self.tx_ds(),
            self.max_rt()
        )
    }
}

/// A received payload of 1 to 32 bytes.
///
/// This is a fixed-size container, so no allocation is needed to hold it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Packet {
    buf: [u8; 32],
    len: u8,
}

impl Packet {
    /// The largest payload the nRF24L01 can carry.
    pub const MAX_LEN: usize = 32;

    /// An empty packet.
    pub const fn new() -> Self {
        Self {
            buf: [0u8; 32],
            len: 0,
        }
    }

    /// Copy `data` into a new packet.
    ///
    /// Returns `None` if `data` is longer than [`Packet::MAX_LEN`].
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        if data.len() > Self::MAX_LEN {
            return None;
        }
        let mut packet = Self::new();
        packet.buf[..data.len()].copy_from_slice(data);
        packet.len = data.len() as u8;
        Some(packet)
    }

    /// The payload bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    /// The payload width in bytes.
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Resize to `len` bytes and return the writable payload region.
    pub(crate) fn fill_region(&mut self, len: u8) -> &mut [u8] {
        self.len = len.min(Self::MAX_LEN as u8);
        &mut self.buf[..self.len as usize]
    }
}

impl Default for Packet {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Packet {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Packet {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Packet({=[u8]})", self.as_slice())
    }
}

/// The outcome of a multi-packet send.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TxReport {
    /// Number of packets the device reported as sent (`TX_DS`).
    pub sent: usize,
    /// Number of packets dropped after the device exhausted its retries.
    ///
    /// This is always `0` when lost packets are resent.
    pub lost: usize,
    /// Number of `MAX_RT` events observed, whether the packet was dropped or retried.
    pub max_rt_events: usize,
    /// The send was stopped by the caller before every packet was dispositioned.
    pub cancelled: bool,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TxReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "TxReport sent: {}, lost: {}, max_rt_events: {}, cancelled: {}",
            self.sent,
            self.lost,
            self.max_rt_events,
            self.cancelled
        )
    }
}

/// The outcome of a bounded receive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RxReport {
    /// Number of output buffers filled with a received packet.
    pub received: usize,
    /// Number of times the device reported an impossible payload width
    /// and the RX FIFO was flushed.
    pub framing_errors: usize,
}

#[cfg(feature = "defmt")]
impl defmt::Format for RxReport {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "RxReport received: {}, framing_errors: {}",
            self.received,
            self.framing_errors
        )
    }
}

#[cfg(test)]
mod test {
    use super::{CrcLength, DataRate, FifoState, Packet, PowerLevel, StatusFlags};
    extern crate std;
    use std::{format, string::String};

    fn display_crc(param: CrcLength, expected: String) -> bool {
        format!("{param}") == expected
    }

    #[test]
    fn crc_8bit() {
        assert!(display_crc(CrcLength::Bit8, String::from("8 bit")));
        assert_eq!(CrcLength::from_bit(CrcLength::Bit8.into_bit()), CrcLength::Bit8);
    }

    #[test]
    fn crc_16bit() {
        assert!(display_crc(CrcLength::Bit16, String::from("16 bit")));
        assert!(CrcLength::Bit16.into_bit());
    }

    #[test]
    fn fifo_state_display() {
        assert_eq!(format!("{}", FifoState::Empty), "Empty");
        assert_eq!(format!("{}", FifoState::Full), "Full");
        assert_eq!(format!("{}", FifoState::Occupied), "Occupied");
    }

    #[test]
    fn data_rate_flags() {
        for rate in [DataRate::Low, DataRate::Medium, DataRate::High] {
            let (dr_low, dr_high) = rate.into_flags();
            assert!(!(dr_low && dr_high));
            assert_eq!(DataRate::from_flags(dr_low, dr_high), rate);
        }
        // RF_DR_LOW wins if both bits are somehow set
        assert_eq!(DataRate::from_flags(true, true), DataRate::Low);
    }

    #[test]
    fn data_rate_display() {
        assert_eq!(format!("{}", DataRate::Low), "250 Kbps");
        assert_eq!(format!("{}", DataRate::Medium), "1 Mbps");
        assert_eq!(format!("{}", DataRate::High), "2 Mbps");
    }

    #[test]
    fn power_level_bits() {
        for (bits, level) in [
            (0u8, PowerLevel::Low),
            (1, PowerLevel::Medium),
            (2, PowerLevel::High),
            (3, PowerLevel::VeryHigh),
        ] {
            assert_eq!(level.into_bits(), bits);
            assert_eq!(PowerLevel::from_bits(bits), level);
        }
        assert_eq!(format!("{}", PowerLevel::VeryHigh), "VeryHigh");
    }

    #[test]
    fn status_flags() {
        let flags = StatusFlags::from_bits(0x5E);
        assert!(flags.rx_dr());
        assert!(!flags.tx_ds());
        assert!(flags.max_rt());
        assert_eq!(flags.rx_pipe(), 7);
        assert!(!flags.tx_full());
        assert_eq!(
            format!("{flags}"),
            String::from("StatusFlags rx_dr: true, tx_ds: false, max_rt: true")
        );
    }

    #[test]
    fn packet() {
        let packet = Packet::from_slice(b"hello").unwrap();
        assert_eq!(packet.len(), 5);
        assert_eq!(packet.as_slice(), b"hello");
        assert!(Packet::new().is_empty());
        assert!(Packet::from_slice(&[0u8; 33]).is_none());
    }
}
