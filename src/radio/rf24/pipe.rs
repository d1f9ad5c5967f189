use super::mnemonics;
use crate::radio::{prelude::EsbPipe, ConfigError, Nrf24Error, Nrf24l01};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbPipe for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PipeErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_pipe0_write(&mut self, address: u8) -> Result<(), Self::PipeErrorType> {
        self.set_tx_addr_lsb(address)?;
        // auto-ACK packets come back on pipe 0, so it has to mirror the TX address
        self.set_rx_addr_lsb(0, address)?;
        self.set_rx_pw(0, 0)?;
        self.set_dpl(0, true)?;
        self.set_erx(0, true)
    }

    fn set_pipe_read(&mut self, pipe: u8, address: u8) -> Result<(), Self::PipeErrorType> {
        if pipe > mnemonics::MAX_PIPE {
            return Err(ConfigError::Pipe(pipe).into());
        }
        self.set_rx_addr_lsb(pipe, address)?;
        self.set_rx_pw(pipe, mnemonics::MAX_PAYLOAD)?;
        self.set_dpl(pipe, true)?;
        self.set_erx(pipe, true)
    }

    fn close_pipe(&mut self, pipe: u8) -> Result<(), Self::PipeErrorType> {
        self.set_erx(pipe, false)
    }
}
