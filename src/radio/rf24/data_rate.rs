use crate::{
    radio::{prelude::EsbDataRate, Nrf24Error, Nrf24l01},
    DataRate,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbDataRate for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DataRateErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn get_data_rate(&mut self) -> Result<DataRate, Self::DataRateErrorType> {
        let dr_low = self.get_rf_dr_low()?;
        let dr_high = self.get_rf_dr_high()?;
        Ok(DataRate::from_flags(dr_low, dr_high))
    }

    fn set_data_rate(&mut self, data_rate: DataRate) -> Result<(), Self::DataRateErrorType> {
        let (dr_low, dr_high) = data_rate.into_flags();
        // clear the bit that must be off first, so both are never set at once
        if dr_low {
            self.set_rf_dr_high(dr_high)?;
            self.set_rf_dr_low(dr_low)
        } else {
            self.set_rf_dr_low(dr_low)?;
            self.set_rf_dr_high(dr_high)
        }
    }
}
