use super::mnemonics;
use crate::radio::{prelude::EsbChannel, ConfigError, Nrf24Error, Nrf24l01};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbChannel for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ChannelErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// The nRF24L01 support 126 channels, [0, 125].
    fn set_channel(&mut self, channel: u8) -> Result<(), Self::ChannelErrorType> {
        if channel > mnemonics::MAX_CHANNEL {
            return Err(ConfigError::Channel(channel).into());
        }
        self.set_rf_ch(channel)
    }

    /// See also [`EsbChannel::set_channel()`].
    fn get_channel(&mut self) -> Result<u8, Self::ChannelErrorType> {
        self.get_rf_ch()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{super::commands, super::registers, EsbChannel};
    use crate::{
        radio::{ConfigError, Nrf24Error},
        spi_test_expects,
        test::mk_radio,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    pub fn set_channel() {
        let spi_expectations = spi_test_expects![
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 2u8]),
            (
                vec![registers::RF_CH | commands::W_REGISTER, 125u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_channel(125).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn reject_channel() {
        // no SPI transactions expected
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            radio.set_channel(126),
            Err(Nrf24Error::Config(ConfigError::Channel(126)))
        );
        assert_eq!(
            radio.set_channel(255),
            Err(Nrf24Error::Config(ConfigError::Channel(255)))
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    pub fn get_channel() {
        let spi_expectations = spi_test_expects![
            // get the RF_CH register value
            (vec![registers::RF_CH, 0u8], vec![0xEu8, 76u8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(radio.get_channel().unwrap(), 76u8);
        spi.done();
        ce_pin.done();
    }
}
