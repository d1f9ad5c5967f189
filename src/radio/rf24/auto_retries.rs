use super::mnemonics;
use crate::radio::{prelude::EsbAutoRetries, ConfigError, Nrf24Error, Nrf24l01};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbAutoRetries for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type AutoRetriesErrorType = Nrf24Error<SPI::Error, DO::Error>;

    fn set_retransmit_delay(&mut self, delay: u8) -> Result<(), Self::AutoRetriesErrorType> {
        if delay > mnemonics::MAX_RETRY_FIELD {
            return Err(ConfigError::RetransmitDelay(delay).into());
        }
        self.set_ard(delay)
    }

    fn get_retransmit_delay(&mut self) -> Result<u8, Self::AutoRetriesErrorType> {
        self.get_ard()
    }

    fn set_retransmit_count(&mut self, count: u8) -> Result<(), Self::AutoRetriesErrorType> {
        if count > mnemonics::MAX_RETRY_FIELD {
            return Err(ConfigError::RetransmitCount(count).into());
        }
        self.set_arc(count)
    }

    fn get_retransmit_count(&mut self) -> Result<u8, Self::AutoRetriesErrorType> {
        self.get_arc()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{super::commands, super::registers, EsbAutoRetries};
    use crate::{
        radio::{ConfigError, Nrf24Error},
        spi_test_expects,
        test::mk_radio,
    };
    use embedded_hal_mock::eh1::spi::Transaction as SpiTransaction;
    use std::vec;

    #[test]
    fn set_retransmit_delay() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0x03u8]),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0xF3u8],
                vec![0xEu8, 0u8],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_retransmit_delay(15).unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn set_retransmit_count() {
        let spi_expectations = spi_test_expects![
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0x53u8]),
            (
                vec![registers::SETUP_RETR | commands::W_REGISTER, 0x5Fu8],
                vec![0xEu8, 0u8],
            ),
            (vec![registers::SETUP_RETR, 0u8], vec![0xEu8, 0x5Fu8]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio.set_retransmit_count(15).unwrap();
        assert_eq!(radio.get_retransmit_count(), Ok(15));
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn reject_out_of_range() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        assert_eq!(
            radio.set_retransmit_delay(16),
            Err(Nrf24Error::Config(ConfigError::RetransmitDelay(16)))
        );
        assert_eq!(
            radio.set_retransmit_count(16),
            Err(Nrf24Error::Config(ConfigError::RetransmitCount(16)))
        );
        spi.done();
        ce_pin.done();
    }
}
