//! Raw accessors for the register fields the driver uses.
//!
//! Each setter is a read-modify-write of the containing register, so fields
//! that share a register are never disturbed. Values wider than a field are
//! truncated to the field width; range checks belong to the validated API in
//! [`prelude`](mod@crate::radio::prelude).

use super::{
    bit_fields::{Config, Feature, FifoStatus, RfChannel, RfSetup, RxPayloadWidth, SetupRetry},
    mnemonics, registers, ConfigError, Nrf24Error, Nrf24l01,
};
use crate::StatusFlags;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

fn check_pipe(pipe: u8) -> Result<(), ConfigError> {
    if pipe > mnemonics::MAX_PIPE {
        return Err(ConfigError::Pipe(pipe));
    }
    Ok(())
}

impl<SPI, DO, DELAY> Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    fn config(&mut self) -> Result<Config, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(Config::from_bits(self.read_byte(registers::CONFIG)?))
    }

    fn setup_retry(&mut self) -> Result<SetupRetry, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(SetupRetry::from_bits(self.read_byte(registers::SETUP_RETR)?))
    }

    fn rf_setup(&mut self) -> Result<RfSetup, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(RfSetup::from_bits(self.read_byte(registers::RF_SETUP)?))
    }

    fn feature(&mut self) -> Result<Feature, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(Feature::from_bits(self.read_byte(registers::FEATURE)?))
    }

    fn set_pipe_bit(
        &mut self,
        address: u8,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        let mask = 1u8 << pipe;
        self.modify_register(address, |value| {
            if enable {
                value | mask
            } else {
                value & !mask
            }
        })
    }

    fn get_pipe_bit(
        &mut self,
        address: u8,
        pipe: u8,
    ) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        Ok(self.read_byte(address)? & (1u8 << pipe) != 0)
    }

    // CONFIG

    /// Get the `CRCO` bit (`true` = 2 byte CRC).
    pub fn get_crco(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.config()?.crco())
    }

    pub fn set_crco(&mut self, enable: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::CONFIG, |v| {
            Config::from_bits(v).with_crco(enable).into_bits()
        })
    }

    pub fn get_pwr_up(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.config()?.pwr_up())
    }

    pub fn set_pwr_up(&mut self, enable: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::CONFIG, |v| {
            Config::from_bits(v).with_pwr_up(enable).into_bits()
        })
    }

    pub fn get_prim_rx(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.config()?.prim_rx())
    }

    pub fn set_prim_rx(&mut self, enable: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::CONFIG, |v| {
            Config::from_bits(v).with_prim_rx(enable).into_bits()
        })
    }

    // EN_RXADDR

    /// Is the receive `pipe` enabled?
    pub fn get_erx(&mut self, pipe: u8) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.get_pipe_bit(registers::EN_RXADDR, pipe)
    }

    pub fn set_erx(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.set_pipe_bit(registers::EN_RXADDR, pipe, enable)
    }

    // SETUP_RETR

    /// Get the auto retransmit delay (`ARD`) field.
    pub fn get_ard(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.setup_retry()?.ard())
    }

    pub fn set_ard(&mut self, value: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::SETUP_RETR, |v| {
            SetupRetry::from_bits(v).with_ard(value & 0xF).into_bits()
        })
    }

    /// Get the auto retransmit count (`ARC`) field.
    pub fn get_arc(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.setup_retry()?.arc())
    }

    pub fn set_arc(&mut self, value: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::SETUP_RETR, |v| {
            SetupRetry::from_bits(v).with_arc(value & 0xF).into_bits()
        })
    }

    // RF_CH

    pub fn get_rf_ch(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(RfChannel::from_bits(self.read_byte(registers::RF_CH)?).rf_ch())
    }

    pub fn set_rf_ch(&mut self, value: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::RF_CH, |v| {
            RfChannel::from_bits(v).with_rf_ch(value & 0x7F).into_bits()
        })
    }

    // RF_SETUP

    pub fn get_rf_dr_low(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.rf_setup()?.rf_dr_low())
    }

    pub fn set_rf_dr_low(&mut self, enable: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::RF_SETUP, |v| {
            RfSetup::from_bits(v).with_rf_dr_low(enable).into_bits()
        })
    }

    pub fn get_rf_dr_high(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.rf_setup()?.rf_dr_high())
    }

    pub fn set_rf_dr_high(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::RF_SETUP, |v| {
            RfSetup::from_bits(v).with_rf_dr_high(enable).into_bits()
        })
    }

    /// Get the 2-bit `RF_PWR` field.
    pub fn get_rf_pwr(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.rf_setup()?.rf_pwr())
    }

    pub fn set_rf_pwr(&mut self, value: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::RF_SETUP, |v| {
            RfSetup::from_bits(v).with_rf_pwr(value & 3).into_bits()
        })
    }

    // STATUS

    /// Read the whole `STATUS` register in one transaction.
    pub fn get_status(&mut self) -> Result<StatusFlags, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(StatusFlags::from_bits(self.read_byte(registers::STATUS)?))
    }

    pub fn get_rx_dr(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.get_status()?.rx_dr())
    }

    /// Clear the `RX_DR` latch. Only that bit is written, so other
    /// pending events are left latched.
    pub fn clear_rx_dr(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_byte(registers::STATUS, mnemonics::MASK_RX_DR)
    }

    pub fn get_tx_ds(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.get_status()?.tx_ds())
    }

    /// Clear the `TX_DS` latch.
    pub fn clear_tx_ds(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_byte(registers::STATUS, mnemonics::MASK_TX_DS)
    }

    pub fn get_max_rt(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.get_status()?.max_rt())
    }

    /// Clear the `MAX_RT` latch.
    pub fn clear_max_rt(&mut self) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_byte(registers::STATUS, mnemonics::MASK_MAX_RT)
    }

    // RX_ADDR_Px / TX_ADDR

    /// Get the receive address of `pipe`, least significant byte first.
    ///
    /// Pipes 2 - 5 only store their LSB; the other 4 bytes are shared with pipe 1.
    pub fn get_rx_addr(&mut self, pipe: u8) -> Result<[u8; 5], Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        let mut address = [0u8; 5];
        if pipe < 2 {
            self.read_register(registers::RX_ADDR_P0 + pipe, &mut address)?;
        } else {
            self.read_register(registers::RX_ADDR_P1, &mut address)?;
            address[0] = self.read_byte(registers::RX_ADDR_P0 + pipe)?;
        }
        Ok(address)
    }

    /// Set the full receive address of pipe 0 or 1, least significant byte first.
    ///
    /// For pipes 2 - 5 only `address[0]` is written.
    pub fn set_rx_addr(
        &mut self,
        pipe: u8,
        address: &[u8; 5],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        if pipe < 2 {
            self.write_register(registers::RX_ADDR_P0 + pipe, address)
        } else {
            self.write_byte(registers::RX_ADDR_P0 + pipe, address[0])
        }
    }

    pub fn get_rx_addr_lsb(&mut self, pipe: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        self.read_byte(registers::RX_ADDR_P0 + pipe)
    }

    /// Write only the least significant byte of the receive address of `pipe`.
    pub fn set_rx_addr_lsb(
        &mut self,
        pipe: u8,
        value: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        self.write_byte(registers::RX_ADDR_P0 + pipe, value)
    }

    pub fn get_tx_addr(&mut self) -> Result<[u8; 5], Nrf24Error<SPI::Error, DO::Error>> {
        let mut address = [0u8; 5];
        self.read_register(registers::TX_ADDR, &mut address)?;
        Ok(address)
    }

    pub fn set_tx_addr(
        &mut self,
        address: &[u8; 5],
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_register(registers::TX_ADDR, address)
    }

    pub fn get_tx_addr_lsb(&mut self) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        self.read_byte(registers::TX_ADDR)
    }

    pub fn set_tx_addr_lsb(&mut self, value: u8) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.write_byte(registers::TX_ADDR, value)
    }

    // RX_PW_Px

    /// Get the static payload width of `pipe`.
    pub fn get_rx_pw(&mut self, pipe: u8) -> Result<u8, Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        let value = self.read_byte(registers::RX_PW_P0 + pipe)?;
        Ok(RxPayloadWidth::from_bits(value).rx_pw())
    }

    /// Set the static payload width of `pipe`, in range [0, 32].
    pub fn set_rx_pw(
        &mut self,
        pipe: u8,
        width: u8,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        check_pipe(pipe)?;
        if width > mnemonics::MAX_PAYLOAD {
            return Err(ConfigError::PayloadLength(width as usize).into());
        }
        self.modify_register(registers::RX_PW_P0 + pipe, |v| {
            RxPayloadWidth::from_bits(v).with_rx_pw(width).into_bits()
        })
    }

    // FIFO_STATUS

    pub fn get_rx_empty(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(FifoStatus::from_bits(self.read_byte(registers::FIFO_STATUS)?).rx_empty())
    }

    // DYNPD

    /// Is dynamic payload length enabled for `pipe`?
    pub fn get_dpl(&mut self, pipe: u8) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        self.get_pipe_bit(registers::DYNPD, pipe)
    }

    pub fn set_dpl(
        &mut self,
        pipe: u8,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.set_pipe_bit(registers::DYNPD, pipe, enable)
    }

    // FEATURE

    pub fn get_en_dpl(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.feature()?.en_dpl())
    }

    pub fn set_en_dpl(&mut self, enable: bool) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::FEATURE, |v| {
            Feature::from_bits(v).with_en_dpl(enable).into_bits()
        })
    }

    pub fn get_en_dyn_ack(&mut self) -> Result<bool, Nrf24Error<SPI::Error, DO::Error>> {
        Ok(self.feature()?.en_dyn_ack())
    }

    pub fn set_en_dyn_ack(
        &mut self,
        enable: bool,
    ) -> Result<(), Nrf24Error<SPI::Error, DO::Error>> {
        self.modify_register(registers::FEATURE, |v| {
            Feature::from_bits(v).with_en_dyn_ack(enable).into_bits()
        })
    }
}
