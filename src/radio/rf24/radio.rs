use core::sync::atomic::{AtomicBool, Ordering};

use super::{commands, mnemonics, ConfigError, Nrf24Error, Nrf24l01};
use crate::{
    clock::Clock,
    radio::prelude::{EsbFifo, EsbRadio, EsbStatus},
    Packet, RxReport, TxReport,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Dequeue the head of the RX FIFO into `packet`.
    ///
    /// Returns `false` if the radio reported an impossible payload width.
    /// The RX FIFO is flushed in that case, since its contents can't be trusted.
    pub(crate) fn take_payload(
        &mut self,
        packet: &mut Packet,
    ) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        let width = self.r_rx_pl_wid()?;
        if width == 0 || width > mnemonics::MAX_PAYLOAD {
            #[cfg(feature = "defmt")]
            defmt::warn!("RX payload width {=u8} is invalid; flushing RX FIFO", width);
            self.flush_rx()?;
            return Ok(false);
        }
        self.r_rx_payload(packet.fill_region(width))?;
        Ok(true)
    }

    /// The TX state machine shared by all the send functions.
    ///
    /// `command` picks between W_TX_PAYLOAD and W_TX_PAYLOAD_NO_ACK.
    fn send_pipelined(
        &mut self,
        packets: &[&[u8]],
        command: u8,
        resend_lost_packets: bool,
        stop: Option<&AtomicBool>,
    ) -> Result<TxReport, Nrf24Error<SPI::Error, DO::Error>> {
        if let Some(packet) = packets
            .iter()
            .find(|p| p.is_empty() || p.len() > mnemonics::MAX_PAYLOAD as usize)
        {
            return Err(ConfigError::PayloadLength(packet.len()).into());
        }
        let mut report = TxReport::default();
        if packets.is_empty() {
            return Ok(report);
        }
        let wants_ack = command == commands::W_TX_PAYLOAD;

        self.as_tx()?;
        self.flush_tx()?;
        // a latched MAX_RT halts the radio, and a stale TX_DS would be miscounted
        self.clear_status_flags(false, true, true)?;

        // never hand the radio more than its FIFO can hold
        let preload = packets.len().min(mnemonics::FIFO_DEPTH);
        for packet in &packets[..preload] {
            self.spi_write_buf(command, packet)?;
        }
        self.ce_high()?;

        for index in 0..packets.len() {
            loop {
                if stop.is_some_and(|s| s.load(Ordering::Relaxed)) {
                    self.ce_low()?;
                    self.clear_status_flags(false, true, true)?;
                    self.flush_tx()?;
                    report.cancelled = true;
                    return Ok(report);
                }

                let status = self.get_status()?;
                if status.tx_ds() {
                    self.clear_tx_ds()?;
                    report.sent += 1;
                    if let Some(next) = packets.get(index + preload) {
                        self.spi_write_buf(command, next)?;
                    }
                    break;
                }
                if !wants_ack || !status.max_rt() {
                    continue;
                }

                report.max_rt_events += 1;
                if resend_lost_packets {
                    // CE stays high, so the radio retries the same payload
                    #[cfg(feature = "defmt")]
                    defmt::trace!("no ACK for packet {=usize}; retrying", index);
                    self.clear_max_rt()?;
                    continue;
                }

                #[cfg(feature = "defmt")]
                defmt::debug!("no ACK for packet {=usize}; dropped", index);
                self.ce_low()?;
                self.clear_max_rt()?;
                self.flush_tx()?;
                for next in packets.iter().skip(index + 1).take(mnemonics::FIFO_DEPTH) {
                    self.spi_write_buf(command, next)?;
                }
                self.ce_high()?;
                report.lost += 1;
                break;
            }
        }

        self.ce_low()?;
        Ok(report)
    }
}

impl<SPI, DO, DELAY> EsbRadio for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type RadioErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn as_rx(&mut self) -> Result<(), Self::RadioErrorType> {
        self.set_prim_rx(true)
    }

    fn as_tx(&mut self) -> Result<(), Self::RadioErrorType> {
        self.ce_low()?;
        self.set_prim_rx(false)
    }

    fn is_rx(&mut self) -> Result<bool, Self::RadioErrorType> {
        self.get_prim_rx()
    }

    fn send_packets(
        &mut self,
        packets: &[&[u8]],
        resend_lost_packets: bool,
    ) -> Result<TxReport, Self::RadioErrorType> {
        self.send_pipelined(packets, commands::W_TX_PAYLOAD, resend_lost_packets, None)
    }

    fn send_packets_until(
        &mut self,
        packets: &[&[u8]],
        resend_lost_packets: bool,
        stop: &AtomicBool,
    ) -> Result<TxReport, Self::RadioErrorType> {
        self.send_pipelined(
            packets,
            commands::W_TX_PAYLOAD,
            resend_lost_packets,
            Some(stop),
        )
    }

    fn send_packets_no_ack(&mut self, packets: &[&[u8]]) -> Result<TxReport, Self::RadioErrorType> {
        self.send_pipelined(packets, commands::W_TX_PAYLOAD_NO_ACK, false, None)
    }

    fn send_packets_no_ack_until(
        &mut self,
        packets: &[&[u8]],
        stop: &AtomicBool,
    ) -> Result<TxReport, Self::RadioErrorType> {
        self.send_pipelined(packets, commands::W_TX_PAYLOAD_NO_ACK, false, Some(stop))
    }

    fn receive_packets<C: Clock>(
        &mut self,
        packets: &mut [Packet],
        timeout_ms: u32,
        clock: &mut C,
    ) -> Result<RxReport, Self::RadioErrorType> {
        let mut report = RxReport::default();
        if packets.is_empty() {
            return Ok(report);
        }

        self.as_rx()?;
        self.flush_rx()?;
        self.ce_high()?;

        let mut last_packet = clock.now_ms();
        while report.received < packets.len() {
            if !self.get_rx_dr()? {
                // idle timeout only; the first packet is awaited indefinitely
                if report.received > 0 && clock.now_ms().wrapping_sub(last_packet) > timeout_ms {
                    break;
                }
                continue;
            }

            last_packet = clock.now_ms();
            loop {
                if !self.take_payload(&mut packets[report.received])? {
                    report.framing_errors += 1;
                    break;
                }
                report.received += 1;
                if report.received == packets.len() || self.get_rx_empty()? {
                    break;
                }
            }
            self.clear_rx_dr()?;
        }

        self.ce_low()?;
        Ok(report)
    }

    fn receive_packets_inf<F>(
        &mut self,
        mut callback: F,
        stop: &AtomicBool,
    ) -> Result<(), Self::RadioErrorType>
    where
        F: FnMut(&[u8]),
    {
        for packet in self.receive_stream(stop)? {
            callback(packet?.as_slice());
        }
        Ok(())
    }
}
