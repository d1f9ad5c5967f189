//! This module defines the generic traits that may
//! need to imported to use radio implementations.
//!
//! Since rustc only compiles objects that are used,
//! it is convenient to import these traits with the `*` syntax.
//!
//! ```
//! use nrf24l01::radio::prelude::*;
//! ```

use core::sync::atomic::AtomicBool;

use crate::{
    clock::Clock,
    types::{CrcLength, DataRate, FifoState, Packet, PowerLevel, RxReport, StatusFlags, TxReport},
};

use super::RadioConfig;

/// A trait to represent manipulation of data pipes
/// for an ESB capable transceiver.
///
/// All pipes share the 4 byte address prefix given to [`EsbInit::init()`];
/// the functions here only change the least significant byte of an address.
pub trait EsbPipe {
    type PipeErrorType;

    /// Use pipe 0 for transmitting to the address whose LSB is `address`.
    ///
    /// The TX address and the RX address of pipe 0 are both set to `address`,
    /// because pipe 0 must mirror the TX address to receive auto-acknowledgments.
    /// Pipe 0 is then enabled with dynamic payload length.
    fn set_pipe0_write(&mut self, address: u8) -> Result<(), Self::PipeErrorType>;

    /// Open `pipe` for receiving on the address whose LSB is `address`.
    ///
    /// The pipe is enabled with dynamic payload length (its static width is set
    /// to 32 bytes, which only matters if dynamic payloads are later disabled).
    ///
    /// Pipe numbers outside [0, 5] are rejected without touching the radio.
    fn set_pipe_read(&mut self, pipe: u8, address: u8) -> Result<(), Self::PipeErrorType>;

    /// Stop receiving on `pipe`.
    fn close_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType>;
}

/// A trait to represent manipulation of a channel (aka frequency)
/// for an ESB capable transceiver.
pub trait EsbChannel {
    type ChannelErrorType;

    /// Set the radio's currently selected channel.
    ///
    /// These channels translate to the RF frequency as an offset of MHz from 2400 MHz.
    /// Values greater than 125 are rejected and the radio is left unchanged.
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType>;

    /// Get the radio's currently selected channel.
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType>;
}

/// A trait to represent manipulation of [`StatusFlags`]
/// for an ESB capable transceiver.
pub trait EsbStatus {
    type StatusErrorType;

    /// Read the radio's [`StatusFlags`].
    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType>;

    /// Clear the selected event flags.
    ///
    /// Flags passed as `false` are left latched.
    fn clear_status_flags(
        &mut self,
        rx_dr: bool,
        tx_ds: bool,
        max_rt: bool,
    ) -> Result<(), Self::StatusErrorType>;
}

/// A trait to represent manipulation of RX and TX FIFOs
/// for an ESB capable transceiver.
pub trait EsbFifo {
    type FifoErrorType;

    /// Flush the radio's RX FIFO.
    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Flush the radio's TX FIFO.
    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType>;

    /// Get the state of the specified FIFO.
    ///
    /// - Pass `true` to `about_tx` parameter to get the state of the TX FIFO.
    /// - Pass `false` to `about_tx` parameter to get the state of the RX FIFO.
    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType>;

    /// Is there a payload waiting in the radio's RX FIFO?
    fn available(&mut self) -> Result<bool, Self::FifoErrorType>;
}

/// A trait to represent manipulation of the power level
/// for an ESB capable transceiver.
pub trait EsbPowerLevel {
    type PowerLevelErrorType;

    /// Get the currently configured transmit [`PowerLevel`].
    fn get_power_level(&mut self) -> Result<PowerLevel, Self::PowerLevelErrorType>;

    /// Set the transmit [`PowerLevel`].
    fn set_power_level(&mut self, level: PowerLevel) -> Result<(), Self::PowerLevelErrorType>;
}

/// A trait to represent manipulation of the retransmission policy
/// for an ESB capable transceiver.
///
/// Both values are 4-bit fields of the same register; setting one never
/// changes the other.
pub trait EsbAutoRetries {
    type AutoRetriesErrorType;

    /// Set the delay between retransmits, in steps of 250 microseconds
    /// (`0` means 250 us, `15` means 4000 us).
    ///
    /// Values greater than 15 are rejected and the radio is left unchanged.
    fn set_retransmit_delay(&mut self, delay: u8) -> Result<(), Self::AutoRetriesErrorType>;

    fn get_retransmit_delay(&mut self) -> Result<u8, Self::AutoRetriesErrorType>;

    /// Set how many times an unacknowledged payload is retransmitted before
    /// the radio raises `MAX_RT`. `0` disables retransmission.
    ///
    /// Values greater than 15 are rejected and the radio is left unchanged.
    fn set_retransmit_count(&mut self, count: u8) -> Result<(), Self::AutoRetriesErrorType>;

    fn get_retransmit_count(&mut self) -> Result<u8, Self::AutoRetriesErrorType>;
}

/// A trait to represent manipulation of the power state
/// for an ESB capable transceiver.
pub trait EsbPower {
    type PowerErrorType;

    /// Power down the radio. This takes effect immediately.
    fn power_down(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Power up the radio.
    ///
    /// This blocks for 5 milliseconds, the worst case time the radio needs to
    /// settle into standby mode. Register access before that is not reliable.
    fn power_up(&mut self) -> Result<(), Self::PowerErrorType>;

    /// Is the radio powered up?
    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType>;
}

/// A trait to represent manipulation of Cyclical Redundancy Checksums
/// for an ESB capable transceiver.
pub trait EsbCrcLength {
    type CrcLengthErrorType;

    /// Get the current setting of the radio's CRC Length.
    fn get_crc_length(&mut self) -> Result<CrcLength, Self::CrcLengthErrorType>;

    /// Set the radio's CRC Length.
    fn set_crc_length(&mut self, crc_length: CrcLength) -> Result<(), Self::CrcLengthErrorType>;
}

/// A trait to represent manipulation of the data rate
/// for an ESB capable transceiver.
pub trait EsbDataRate {
    type DataRateErrorType;

    /// Get the radio's currently configured [`DataRate`].
    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType>;

    /// Set the radio's [`DataRate`].
    ///
    /// Lower data rates reach further.
    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType>;
}

/// A trait to represent manipulation of a transceiver's
/// operation (mode transitions, sending and receiving).
///
/// All of these functions busy-wait on the radio's `STATUS` register.
pub trait EsbRadio {
    type RadioErrorType;

    /// Put the radio into RX mode (sets `PRIM_RX`).
    ///
    /// The CE pin is not touched; the receive functions assert it while listening.
    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Put the radio into TX mode (deasserts CE, then clears `PRIM_RX`).
    fn as_tx(&mut self) -> Result<(), Self::RadioErrorType>;

    /// Is the radio in RX mode?
    fn is_rx(&mut self) -> Result<bool, Self::RadioErrorType>;

    /// Send every payload in `packets`, in order, requesting an acknowledgment
    /// for each.
    ///
    /// Up to 3 payloads are kept in the radio's TX FIFO at once.
    ///
    /// When the radio gives up on a payload (`MAX_RT`):
    /// - if `resend_lost_packets` is `false`, that payload is dropped and the
    ///   payloads queued behind it are written again;
    /// - if `resend_lost_packets` is `true`, the radio keeps retrying the same
    ///   payload. If the peer never acknowledges, this never returns.
    ///   A payload may be delivered twice if an acknowledgment was lost.
    ///
    /// Every payload must be 1 to 32 bytes long; this is checked before
    /// anything is sent.
    fn send_packets(
        &mut self,
        packets: &[&[u8]],
        resend_lost_packets: bool,
    ) -> Result<TxReport, Self::RadioErrorType>;

    /// Like [`EsbRadio::send_packets()`], but `stop` is checked on every poll
    /// of the radio. Once it reads `true`, the TX FIFO is flushed and the
    /// returned report has `cancelled` set.
    fn send_packets_until(
        &mut self,
        packets: &[&[u8]],
        resend_lost_packets: bool,
        stop: &AtomicBool,
    ) -> Result<TxReport, Self::RadioErrorType>;

    /// Send every payload in `packets` without asking for acknowledgments.
    ///
    /// A payload that never reaches the peer is not noticed.
    fn send_packets_no_ack(&mut self, packets: &[&[u8]]) -> Result<TxReport, Self::RadioErrorType>;

    /// Like [`EsbRadio::send_packets_no_ack()`], but cancellable with `stop`.
    fn send_packets_no_ack_until(
        &mut self,
        packets: &[&[u8]],
        stop: &AtomicBool,
    ) -> Result<TxReport, Self::RadioErrorType>;

    /// Listen until every buffer in `packets` is filled, or until no payload
    /// has arrived for more than `timeout_ms` after at least one was received.
    ///
    /// The first payload is waited for indefinitely. Payloads that report an
    /// impossible width cause the RX FIFO to be flushed; they are counted in
    /// [`RxReport::framing_errors`] and do not fill a buffer.
    fn receive_packets<C: Clock>(
        &mut self,
        packets: &mut [Packet],
        timeout_ms: u32,
        clock: &mut C,
    ) -> Result<RxReport, Self::RadioErrorType>;

    /// Listen until `stop` reads `true`, passing every received payload to `callback`.
    fn receive_packets_inf<F>(
        &mut self,
        callback: F,
        stop: &AtomicBool,
    ) -> Result<(), Self::RadioErrorType>
    where
        F: FnMut(&[u8]);
}

/// A trait to represent manipulation of a transceiver's initial configuration.
pub trait EsbInit {
    type ConfigErrorType;

    /// Initialize the radio.
    ///
    /// After checking that a radio answers on the bus, this:
    /// - enables dynamic payload length and the no-ACK payload command,
    /// - disables all 6 receive pipes,
    /// - sets the TX address and the addresses of pipes 0 and 1 to
    ///   `address_prefix` followed by `0x00`, and the LSB of pipes 2 - 5 to `0x00`,
    /// - flushes both FIFOs.
    ///
    /// The power state is not changed; call [`EsbPower::power_up()`] next.
    fn init(&mut self, address_prefix: [u8; 4]) -> Result<(), Self::ConfigErrorType>;

    /// Apply a [`RadioConfig`].
    ///
    /// Every value is checked first; if any is out of range, nothing is written.
    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType>;
}

/// A trait to dump the radio's state for debugging.
pub trait EsbDetails {
    type DetailsErrorType;

    /// Print details about the radio's current configuration.
    ///
    /// This function uses [`defmt::println`](https://docs.rs/defmt/latest/defmt/macro.println.html)
    /// on bare metal with the `defmt` feature, or `std::println` with the `std` feature.
    /// It does nothing otherwise.
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType>;
}
