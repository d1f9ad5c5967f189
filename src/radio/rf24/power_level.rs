use crate::{
    radio::{prelude::EsbPowerLevel, Nrf24Error, Nrf24l01},
    PowerLevel,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbPowerLevel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type PowerLevelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_power_level(&mut self) -> Result<PowerLevel, Self::PowerLevelErrorType> {
        Ok(PowerLevel::from_bits(self.get_rf_pwr()?))
    }

    fn set_power_level(&mut self, level: PowerLevel) -> Result<(), Self::PowerLevelErrorType> {
        self.set_rf_pwr(level.into_bits())
    }
}
