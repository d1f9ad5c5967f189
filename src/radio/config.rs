use crate::{
    radio::rf24::{mnemonics, ConfigError},
    CrcLength, DataRate, PowerLevel,
};

/// An object to configure the radio.
///
/// This struct follows a builder pattern. Since all fields are private, users should
/// start with the [`RadioConfig::default`] constructor, then mutate the object accordingly.
/// ```
/// use nrf24l01::radio::RadioConfig;
///
/// let mut config = RadioConfig::default();
/// config = config.with_channel(42);
/// assert_eq!(config.channel(), 42);
/// ```
///
/// Values are checked when the config is applied with
/// [`EsbInit::with_config()`](fn@crate::radio::prelude::EsbInit::with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadioConfig {
    channel: u8,
    data_rate: DataRate,
    power_level: PowerLevel,
    crc_length: CrcLength,
    retransmit_delay: u8,
    retransmit_count: u8,
}

impl Default for RadioConfig {
    /// Instantiate a [`RadioConfig`] object with library defaults.
    ///
    /// | feature | default value |
    /// |--------:|:--------------|
    /// | [`RadioConfig::channel()`] | `76` |
    /// | [`RadioConfig::data_rate()`] | [`DataRate::Medium`] |
    /// | [`RadioConfig::power_level()`] | [`PowerLevel::VeryHigh`] |
    /// | [`RadioConfig::crc_length()`] | [`CrcLength::Bit16`] |
    /// | [`RadioConfig::retransmit_delay()`] | `5` |
    /// | [`RadioConfig::retransmit_count()`] | `15` |
    fn default() -> Self {
        Self {
            channel: 76,
            data_rate: DataRate::Medium,
            power_level: PowerLevel::VeryHigh,
            crc_length: CrcLength::Bit16,
            // 5 * 250 + 250 = 1500 us delay between attempts
            retransmit_delay: 5,
            retransmit_count: 15,
        }
    }
}

impl RadioConfig {
    /// Returns the value set by [`RadioConfig::with_channel()`].
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The RF channel, in range [0, 125].
    ///
    /// See [`EsbChannel::set_channel()`](fn@crate::radio::prelude::EsbChannel::set_channel).
    pub fn with_channel(self, channel: u8) -> Self {
        Self { channel, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_data_rate()`].
    pub const fn data_rate(&self) -> DataRate {
        self.data_rate
    }

    /// The Data Rate (over the air).
    ///
    /// See [`EsbDataRate::set_data_rate()`](fn@crate::radio::prelude::EsbDataRate::set_data_rate).
    pub fn with_data_rate(self, data_rate: DataRate) -> Self {
        Self { data_rate, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_power_level()`].
    pub const fn power_level(&self) -> PowerLevel {
        self.power_level
    }

    /// The transmit power level.
    pub fn with_power_level(self, power_level: PowerLevel) -> Self {
        Self {
            power_level,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_crc_length()`].
    pub const fn crc_length(&self) -> CrcLength {
        self.crc_length
    }

    /// The Cyclical Redundancy Checksum (CRC) length.
    pub fn with_crc_length(self, crc_length: CrcLength) -> Self {
        Self { crc_length, ..self }
    }

    /// Returns the value set by [`RadioConfig::with_retransmit_delay()`].
    pub const fn retransmit_delay(&self) -> u8 {
        self.retransmit_delay
    }

    /// The delay between retransmits, in range [0, 15].
    ///
    /// See [`EsbAutoRetries::set_retransmit_delay()`][set_retransmit_delay].
    ///
    /// [set_retransmit_delay]: fn@crate::radio::prelude::EsbAutoRetries::set_retransmit_delay
    pub fn with_retransmit_delay(self, delay: u8) -> Self {
        Self {
            retransmit_delay: delay,
            ..self
        }
    }

    /// Returns the value set by [`RadioConfig::with_retransmit_count()`].
    pub const fn retransmit_count(&self) -> u8 {
        self.retransmit_count
    }

    /// The maximum number of retransmits, in range [0, 15].
    pub fn with_retransmit_count(self, count: u8) -> Self {
        Self {
            retransmit_count: count,
            ..self
        }
    }

    /// Check every value against the range the radio accepts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel > mnemonics::MAX_CHANNEL {
            return Err(ConfigError::Channel(self.channel));
        }
        if self.retransmit_delay > mnemonics::MAX_RETRY_FIELD {
            return Err(ConfigError::RetransmitDelay(self.retransmit_delay));
        }
        if self.retransmit_count > mnemonics::MAX_RETRY_FIELD {
            return Err(ConfigError::RetransmitCount(self.retransmit_count));
        }
        Ok(())
    }
}
