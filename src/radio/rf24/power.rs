use super::mnemonics;
use crate::radio::{prelude::EsbPower, Nrf24Error, Nrf24l01};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbPower for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn power_down(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_pwr_up(false)
    }

    fn power_up(&mut self) -> Result<(), Self::PowerErrorType> {
        self.set_pwr_up(true)?;

        // Tpd2stby is 1.5 ms with an external clock, up to 4.5 ms with a crystal
        self._delay_impl.delay_ms(mnemonics::POWER_UP_DELAY_MS);
        Ok(())
    }

    fn is_powered(&mut self) -> Result<bool, Self::PowerErrorType> {
        self.get_pwr_up()
    }
}
