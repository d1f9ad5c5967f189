use super::{bit_fields::FifoStatus, commands, mnemonics, registers};
use crate::{
    radio::{prelude::EsbFifo, ConfigError, Nrf24Error, Nrf24l01},
    FifoState,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn write_payload(
        &mut self,
        command: u8,
        payload: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = payload.len();
        if len == 0 || len > mnemonics::MAX_PAYLOAD as usize {
            return Err(ConfigError::PayloadLength(len).into());
        }
        self.spi_write_buf(command, payload)
    }

    /// Queue a payload in the TX FIFO and request an acknowledgment for it.
    pub fn w_tx_payload(
        &mut self,
        payload: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_payload(commands::W_TX_PAYLOAD, payload)
    }

    /// Queue a payload in the TX FIFO without requesting an acknowledgment.
    ///
    /// The radio ignores this command unless `EN_DYN_ACK` is set.
    pub fn w_tx_payload_no_ack(
        &mut self,
        payload: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_payload(commands::W_TX_PAYLOAD_NO_ACK, payload)
    }

    /// Dequeue the payload at the head of the RX FIFO into `buf`.
    ///
    /// `buf.len()` bytes are clocked out, so it should be exactly as long
    /// as the width reported by [`Nrf24l01::r_rx_pl_wid()`].
    pub fn r_rx_payload(
        &mut self,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        if len == 0 || len > mnemonics::MAX_PAYLOAD as usize {
            return Err(ConfigError::PayloadLength(len).into());
        }
        self.spi_read(len, commands::R_RX_PAYLOAD)?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Get the width of the payload at the head of the RX FIFO.
    ///
    /// Only meaningful with dynamic payload length enabled. The value is
    /// returned unchecked; anything above 32 means the FIFO is corrupt.
    pub fn r_rx_pl_wid(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::R_RX_PL_WID)?;
        Ok(self._buf[1])
    }
}

impl<SPI, DO, DELAY> EsbFifo for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type FifoErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn flush_rx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::FLUSH_RX)
    }

    fn flush_tx(&mut self) -> Result<(), Self::FifoErrorType> {
        self.send_command(commands::FLUSH_TX)
    }

    fn get_fifo_state(&mut self, about_tx: bool) -> Result<FifoState, Self::FifoErrorType> {
        let status = FifoStatus::from_bits(self.read_byte(registers::FIFO_STATUS)?);
        let (full, empty) = if about_tx {
            (status.tx_full(), status.tx_empty())
        } else {
            (status.rx_full(), status.rx_empty())
        };
        if full {
            Ok(FifoState::Full)
        } else if empty {
            Ok(FifoState::Empty)
        } else {
            Ok(FifoState::Occupied)
        }
    }

    fn available(&mut self) -> Result<bool, Self::FifoErrorType> {
        Ok(!self.get_rx_empty()?)
    }
}
