use super::{bit_fields::SetupRetry, mnemonics, registers, Nrf24Error, Nrf24l01};
use crate::radio::{
    prelude::{EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbInit, EsbPowerLevel},
    RadioConfig,
};
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

impl<SPI, DO, DELAY> EsbInit for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type ConfigErrorType = Nrf24Error<SPI::Error, DO::Error>;

    /// Initialize the radio's hardware using the [`SpiDevice`] and [`OutputPin`] given
    /// to [`Nrf24l01::new()`].
    fn init(&mut self, address_prefix: [u8; 4]) -> Result<(), Self::ConfigErrorType> {
        self.ce_low()?;

        // SETUP_AW only holds 1..=3; a floating MISO reads 0x00 or 0xFF
        let address_width = self.read_byte(registers::SETUP_AW)?;
        if !(1..=3).contains(&address_width) {
            return Err(Nrf24Error::BinaryCorruption);
        }

        self.set_en_dyn_ack(true)?;
        self.set_en_dpl(true)?;

        for pipe in 0..=mnemonics::MAX_PIPE {
            self.set_erx(pipe, false)?;
        }

        let mut address = [0u8; 5];
        address[..4].copy_from_slice(&address_prefix);
        self.set_tx_addr(&address)?;
        self.set_rx_addr(0, &address)?;
        self.set_rx_addr(1, &address)?;
        for pipe in 2..=mnemonics::MAX_PIPE {
            self.set_rx_addr_lsb(pipe, 0)?;
        }

        self.flush_tx()?;
        self.flush_rx()
    }

    fn with_config(&mut self, config: &RadioConfig) -> Result<(), Self::ConfigErrorType> {
        config.validate()?;

        self.set_channel(config.channel())?;
        self.set_data_rate(config.data_rate())?;
        self.set_power_level(config.power_level())?;
        self.set_crc_length(config.crc_length())?;
        let retries = SetupRetry::new()
            .with_ard(config.retransmit_delay())
            .with_arc(config.retransmit_count());
        self.write_byte(registers::SETUP_RETR, retries.into_bits())
    }
}
