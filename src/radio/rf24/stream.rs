use core::{
    iter::FusedIterator,
    sync::atomic::{AtomicBool, Ordering},
};

use super::{Nrf24Error, Nrf24l01};
use crate::{
    radio::prelude::{EsbFifo, EsbRadio},
    Packet,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// An unbounded, cancellable sequence of received packets.
///
/// Created by [`Nrf24l01::receive_stream()`]. The radio keeps listening until
/// the stop signal is raised, an error occurs, or the stream is dropped;
/// in each of those cases CE is driven low again.
///
/// The stop signal is only observed between bursts. Packets already
/// waiting in the RX FIFO are yielded before the stream ends.
pub struct PacketStream<'a, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    radio: &'a mut Nrf24l01<SPI, DO, DELAY>,
    stop: &'a AtomicBool,
    draining: bool,
    finished: bool,
    framing_errors: usize,
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Start listening and return an iterator over the packets received.
    ///
    /// The RX FIFO is flushed first, so stale packets are never yielded.
    /// Each call starts a fresh stream.
    ///
    /// ```ignore
    /// let stop = AtomicBool::new(false);
    /// for packet in radio.receive_stream(&stop)? {
    ///     handle(packet?.as_slice());
    /// }
    /// ```
    pub fn receive_stream<'a>(
        &'a mut self,
        stop: &'a AtomicBool,
    ) -> Result<PacketStream<'a, SPI, DO, DELAY>, Nrf24Error<SPI::Error, DO::Error>> {
        self.as_rx()?;
        self.flush_rx()?;
        self.ce_high()?;
        Ok(PacketStream {
            radio: self,
            stop,
            draining: false,
            finished: false,
            framing_errors: 0,
        })
    }
}

impl<SPI, DO, DELAY> PacketStream<'_, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// How many bursts were discarded because of an invalid payload width.
    pub fn framing_errors(&self) -> usize {
        self.framing_errors
    }

    fn finish(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.finished = true;
        self.radio.ce_low()
    }

    /// Block until a packet is available or the stop signal is seen.
    fn poll(&mut self) -> Result<Option<Packet>, Nrf24Error<SPI::Error, DO::Error>> {
        loop {
            if !self.draining {
                if self.stop.load(Ordering::Relaxed) {
                    return Ok(None);
                }
                if !self.radio.get_rx_dr()? {
                    continue;
                }
                self.draining = true;
            }

            let mut packet = Packet::new();
            if !self.radio.take_payload(&mut packet)? {
                self.framing_errors += 1;
                self.draining = false;
                self.radio.clear_rx_dr()?;
                continue;
            }
            if self.radio.get_rx_empty()? {
                self.draining = false;
                self.radio.clear_rx_dr()?;
            }
            return Ok(Some(packet));
        }
    }
}

impl<SPI, DO, DELAY> Iterator for PacketStream<'_, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type Item = Result<Packet, Nrf24Error<SPI::Error, DO::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.poll() {
            Ok(Some(packet)) => Some(Ok(packet)),
            Ok(None) => self.finish().err().map(Err),
            Err(e) => {
                // the bus error is more useful to the caller than a CE error
                let _ = self.finish();
                Some(Err(e))
            }
        }
    }
}

impl<SPI, DO, DELAY> FusedIterator for PacketStream<'_, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
}

impl<SPI, DO, DELAY> Drop for PacketStream<'_, SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn drop(&mut self) {
        if !self.finished {
            let _ = self.radio.ce_low();
        }
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use crate::radio::rf24::sim::sim_radio;
    use core::sync::atomic::{AtomicBool, Ordering};
    use std::{vec, vec::Vec};

    #[test]
    fn yields_until_stopped() {
        let (mut radio, sim) = sim_radio();
        sim.borrow_mut()
            .air
            .extend([vec![1u8], vec![2u8, 2], vec![3u8, 3, 3], vec![4u8]]);
        let stop = AtomicBool::new(false);
        let mut received = Vec::new();
        for packet in radio.receive_stream(&stop).unwrap() {
            received.push(packet.unwrap().as_slice().to_vec());
            if received.len() == 3 {
                stop.store(true, Ordering::Relaxed);
            }
        }
        assert_eq!(received, vec![vec![1u8], vec![2u8, 2], vec![3u8, 3, 3]]);
        assert!(!sim.borrow().ce);
    }

    #[test]
    fn drop_lowers_ce() {
        let (mut radio, sim) = sim_radio();
        sim.borrow_mut().air.extend([vec![7u8; 5], vec![8u8; 5]]);
        let stop = AtomicBool::new(false);
        {
            let mut stream = radio.receive_stream(&stop).unwrap();
            assert!(sim.borrow().ce);
            let first = stream.next().unwrap().unwrap();
            assert_eq!(first.as_slice(), &[7u8; 5]);
        }
        assert!(!sim.borrow().ce);

        // a new stream starts over with an empty RX FIFO
        stop.store(true, Ordering::Relaxed);
        let mut stream = radio.receive_stream(&stop).unwrap();
        assert!(stream.next().is_none());
        assert!(stream.next().is_none());
    }

    #[test]
    fn skips_bad_width() {
        let (mut radio, sim) = sim_radio();
        {
            let mut state = sim.borrow_mut();
            state.air.extend([vec![1u8; 3], vec![2u8; 6]]);
            state.bad_width = Some(0xFF);
        }
        let stop = AtomicBool::new(false);
        let mut stream = radio.receive_stream(&stop).unwrap();
        let packet = stream.next().unwrap().unwrap();
        assert_eq!(packet.as_slice(), &[2u8; 6]);
        assert_eq!(stream.framing_errors(), 1);
    }
}
