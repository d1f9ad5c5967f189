use core::fmt::{Display, Formatter};

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
mod auto_retries;
pub(crate) mod bit_fields;
mod channel;
mod constants;
mod crc_length;
mod data_rate;
mod details;
mod fields;
mod fifo;
mod init;
mod pipe;
mod power;
mod power_level;
mod radio;
mod status;
mod stream;
pub use constants::{commands, mnemonics, registers};
pub use stream::PacketStream;

#[cfg(test)]
pub(crate) mod sim;

/// A caller-supplied value that is outside the range the device accepts.
///
/// These are always reported before any bus transaction takes place,
/// so the device state is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A channel greater than 125.
    Channel(u8),
    /// A retransmit delay greater than 15.
    RetransmitDelay(u8),
    /// A retransmit count greater than 15.
    RetransmitCount(u8),
    /// A pipe number greater than 5.
    Pipe(u8),
    /// A payload (or register buffer) that is empty or longer than 32 bytes.
    PayloadLength(usize),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::Channel(v) => write!(f, "channel {v} is not in range [0, 125]"),
            ConfigError::RetransmitDelay(v) => {
                write!(f, "retransmit delay {v} is not in range [0, 15]")
            }
            ConfigError::RetransmitCount(v) => {
                write!(f, "retransmit count {v} is not in range [0, 15]")
            }
            ConfigError::Pipe(v) => write!(f, "pipe {v} is not in range [0, 5]"),
            ConfigError::PayloadLength(v) => write!(f, "length {v} is not in range [1, 32]"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            ConfigError::Channel(v) => defmt::write!(fmt, "Channel({=u8})", v),
            ConfigError::RetransmitDelay(v) => defmt::write!(fmt, "RetransmitDelay({=u8})", v),
            ConfigError::RetransmitCount(v) => defmt::write!(fmt, "RetransmitCount({=u8})", v),
            ConfigError::Pipe(v) => defmt::write!(fmt, "Pipe({=u8})", v),
            ConfigError::PayloadLength(v) => defmt::write!(fmt, "PayloadLength({=usize})", v),
        }
    }
}

/// An collection of error types to describe hardware malfunctions
/// and rejected arguments.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Nrf24Error<SPI, DO> {
    /// Represents a SPI transaction error.
    Spi(SPI),
    /// Represents a DigitalOutput error.
    Gpo(DO),
    /// Represents a corruption of binary data (as it was transferred over the SPI bus' MISO).
    ///
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init) reports this when
    /// no device answers on the bus.
    BinaryCorruption,
    /// A caller-supplied value was rejected; see [`ConfigError`].
    Config(ConfigError),
}

impl<SPI, DO> From<ConfigError> for Nrf24Error<SPI, DO> {
    fn from(value: ConfigError) -> Self {
        Nrf24Error::Config(value)
    }
}

#[cfg(feature = "defmt")]
impl<SPI, DO> defmt::Format for Nrf24Error<SPI, DO> {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Nrf24Error::Spi(_) => defmt::write!(fmt, "Spi"),
            Nrf24Error::Gpo(_) => defmt::write!(fmt, "Gpo"),
            Nrf24Error::BinaryCorruption => defmt::write!(fmt, "BinaryCorruption"),
            Nrf24Error::Config(e) => defmt::write!(fmt, "Config({})", e),
        }
    }
}

/// This struct implements the [`Esb*` traits](mod@crate::radio::prelude)
/// for the nRF24L01 transceiver.
///
/// No register state is cached here. Every getter and setter is a
/// round trip to the device, so what is returned is always what the device holds.
///
/// The raw field accessors (the `get_*`/`set_*` methods named after datasheet
/// fields, like [`Nrf24l01::set_arc()`]) are inherent methods. The validated,
/// higher level API lives in the traits of [`prelude`](mod@crate::radio::prelude).
///
/// <div class="warning">
///
/// Each [`SpiDevice`] transaction frames one command with the radio's CSN pin.
/// When several radios share one SPI peripheral, the [`SpiDevice`] implementation
/// (e.g. `embedded-hal-bus`) must serialize access to the bus.
///
/// </div>
pub struct Nrf24l01<SPI, DO, DELAY> {
    _spi: SPI,
    /// The CE pin for the radio.
    ///
    /// This really only exposed for advanced manipulation of active TX mode.
    /// It is strongly recommended to enter RX or TX mode using
    /// [`EsbRadio::as_rx()`](fn@crate::radio::prelude::EsbRadio::as_rx) and
    /// [`EsbRadio::as_tx()`](fn@crate::radio::prelude::EsbRadio::as_tx).
    pub ce_pin: DO,
    _delay_impl: DELAY,
    _buf: [u8; 33],
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    /// Instantiate a [`Nrf24l01`] object for use on the specified
    /// `spi` bus with the given `ce_pin`.
    ///
    /// The radio's CSN pin (aka Chip Select pin) shall be defined
    /// when instantiating the [`SpiDevice`](trait@embedded_hal::spi::SpiDevice)
    /// object (passed to the `spi` parameter).
    ///
    /// Nothing is sent to the radio until
    /// [`init()`](fn@crate::radio::prelude::EsbInit::init) is called.
    pub fn new(ce_pin: DO, spi: SPI, delay_impl: DELAY) -> Nrf24l01<SPI, DO, DELAY> {
        Nrf24l01 {
            _spi: spi,
            ce_pin,
            _delay_impl: delay_impl,
            _buf: [0u8; 33],
        }
    }

    /// Release the bus, pin and delay objects.
    pub fn free(self) -> (DO, SPI, DELAY) {
        (self.ce_pin, self._spi, self._delay_impl)
    }

    /// Read `buf.len()` bytes from the register at `address`.
    ///
    /// Only the low 5 bits of `address` are used. Addresses that the device
    /// does not implement are not checked here; the device ignores them.
    pub fn read_register(
        &mut self,
        address: u8,
        buf: &mut [u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        let len = buf.len();
        if len > mnemonics::MAX_PAYLOAD as usize {
            return Err(ConfigError::PayloadLength(len).into());
        }
        self.spi_read(
            len,
            commands::R_REGISTER | (address & mnemonics::REGISTER_MASK),
        )?;
        buf.copy_from_slice(&self._buf[1..=len]);
        Ok(())
    }

    /// Write `data` to the register at `address`.
    ///
    /// Only the low 5 bits of `address` are used.
    pub fn write_register(
        &mut self,
        address: u8,
        data: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        if data.len() > mnemonics::MAX_PAYLOAD as usize {
            return Err(ConfigError::PayloadLength(data.len()).into());
        }
        self.spi_write_buf(
            commands::W_REGISTER | (address & mnemonics::REGISTER_MASK),
            data,
        )
    }

    fn spi_transfer(&mut self, len: usize) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._spi
            .transfer_in_place(&mut self._buf[..len])
            .map_err(Nrf24Error::Spi)
    }

    /// Send `command` followed by `len` zeros; the response lands in `self._buf[1..=len]`.
    ///
    /// This is also used to send commands that consist of 1 byte:
    /// ```ignore
    /// self.spi_read(0, commands::FLUSH_TX)?;
    /// ```
    fn spi_read(
        &mut self,
        len: usize,
        command: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        self._buf[1..=len].fill(0);
        self.spi_transfer(len + 1)
    }

    fn spi_write_buf(
        &mut self,
        command: u8,
        buf: &[u8],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = command;
        let buf_len = buf.len();
        self._buf[1..(buf_len + 1)].copy_from_slice(buf);
        self.spi_transfer(buf_len + 1)
    }

    pub(crate) fn read_byte(
        &mut self,
        address: u8,
    ) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(1, commands::R_REGISTER | address)?;
        Ok(self._buf[1])
    }

    pub(crate) fn write_byte(
        &mut self,
        address: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self._buf[0] = commands::W_REGISTER | address;
        self._buf[1] = value;
        self.spi_transfer(2)
    }

    /// Read a 1-byte register, apply `f`, and write the result back.
    pub(crate) fn modify_register<F>(
        &mut self,
        address: u8,
        f: F,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>>
    where
        F: FnOnce(u8) -> u8,
    {
        let value = self.read_byte(address)?;
        self.write_byte(address, f(value))
    }

    /// Send a command that has no data bytes.
    pub(crate) fn send_command(
        &mut self,
        command: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.spi_read(0, command)
    }

    pub(crate) fn ce_high(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.ce_pin.set_high().map_err(Nrf24Error::Gpo)
    }

    pub(crate) fn ce_low(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.ce_pin.set_low().map_err(Nrf24Error::Gpo)
    }

    /// Pulse the CE pin high for 15 microseconds.
    ///
    /// With the radio in TX mode, this transmits the payload at the head of the TX FIFO.
    pub fn pulse_ce(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.ce_high()?;
        self._delay_impl.delay_us(mnemonics::CE_PULSE_US);
        self.ce_low()
    }
}

/////////////////////////////////////////////////////////////////////////////////
/// unit tests
#[cfg(test)]
mod test {
    extern crate std;
    use super::{commands, registers, ConfigError, Nrf24Error};
    use crate::{
        spi_test_expects,
        test::{mk_radio, mk_radio_with_delay},
    };
    use embedded_hal_mock::eh1::{
        delay::Transaction as DelayTransaction,
        digital::{State as PinState, Transaction as PinTransaction},
        spi::Transaction as SpiTransaction,
    };
    use std::{format, vec};

    #[test]
    fn read_register() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::TX_ADDR, 0, 0, 0, 0, 0],
                vec![0xEu8, 1, 2, 3, 4, 5],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut address = [0u8; 5];
        radio.read_register(registers::TX_ADDR, &mut address).unwrap();
        assert_eq!(address, [1, 2, 3, 4, 5]);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn write_register() {
        let spi_expectations = spi_test_expects![
            (
                vec![registers::RX_ADDR_P0 | commands::W_REGISTER, 0xAA, 0xBB],
                vec![0xEu8, 0, 0],
            ),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        radio
            .write_register(registers::RX_ADDR_P0, &[0xAA, 0xBB])
            .unwrap();
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn register_address_is_masked() {
        // 0x3D would otherwise collide with the W_REGISTER command space
        let spi_expectations = spi_test_expects![
            (vec![registers::FEATURE, 0], vec![0xEu8, 0x05]),
        ];
        let mocks = mk_radio(&[], &spi_expectations);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut value = [0u8];
        radio.read_register(0x3D, &mut value).unwrap();
        assert_eq!(value[0], 0x05);
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn oversized_register_buffer() {
        let mocks = mk_radio(&[], &[]);
        let (mut radio, mut spi, mut ce_pin) = (mocks.0, mocks.1, mocks.2);
        let mut buf = [0u8; 33];
        assert_eq!(
            radio.read_register(registers::TX_ADDR, &mut buf),
            Err(Nrf24Error::Config(ConfigError::PayloadLength(33)))
        );
        assert_eq!(
            radio.write_register(registers::TX_ADDR, &buf),
            Err(Nrf24Error::Config(ConfigError::PayloadLength(33)))
        );
        spi.done();
        ce_pin.done();
    }

    #[test]
    fn pulse_ce() {
        let ce_expectations = [
            PinTransaction::set(PinState::High),
            PinTransaction::set(PinState::Low),
        ];
        let delay_expectations = [DelayTransaction::delay_us(15)];
        let mocks = mk_radio_with_delay(&ce_expectations, &[], &delay_expectations);
        let (mut radio, mut spi, mut ce_pin, mut delay) = (mocks.0, mocks.1, mocks.2, mocks.3);
        radio.pulse_ce().unwrap();
        spi.done();
        ce_pin.done();
        delay.done();
    }

    #[test]
    fn config_error_display() {
        assert_eq!(
            format!("{}", ConfigError::Channel(126)),
            "channel 126 is not in range [0, 125]"
        );
        assert_eq!(
            format!("{}", ConfigError::Pipe(6)),
            "pipe 6 is not in range [0, 5]"
        );
    }
}
