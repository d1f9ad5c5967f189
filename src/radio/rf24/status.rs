use super::{mnemonics, registers};
use crate::{
    radio::{prelude::EsbStatus, Nrf24Error, Nrf24l01},
    StatusFlags,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbStatus for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type StatusErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_status_flags(&mut self) -> Result<StatusFlags, Self::StatusErrorType> {
        self.get_status()
    }

    fn clear_status_flags(
        &mut self,
        rx_dr: bool,
        tx_ds: bool,
        max_rt: bool,
    ) -> Result<(), Self::StatusErrorType> {
        let mask = (rx_dr as u8 * mnemonics::MASK_RX_DR)
            | (tx_ds as u8 * mnemonics::MASK_TX_DS)
            | (max_rt as u8 * mnemonics::MASK_MAX_RT);
        if mask == 0 {
            return Ok(());
        }
        self.write_byte(registers::STATUS, mask)
    }
}
