use super::{Nrf24Error, Nrf24l01};
use crate::radio::prelude::EsbDetails;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

#[cfg(any(feature = "defmt", feature = "std"))]
use super::registers;
#[cfg(any(feature = "defmt", feature = "std"))]
use crate::radio::prelude::{
    EsbAutoRetries, EsbChannel, EsbCrcLength, EsbDataRate, EsbFifo, EsbPower, EsbPowerLevel,
    EsbRadio, EsbStatus,
};

#[cfg(feature = "std")]
extern crate std;

impl<SPI, DO, DELAY> EsbDetails for Nrf24l01<SPI, DO, DELAY>
where
    SPI: SpiDevice,
    DO: OutputPin,
    DELAY: DelayNs,
{
    type DetailsErrorType = Nrf24Error<SPI::Error, DO::Error>;

    #[cfg(feature = "defmt")]
    #[cfg(target_os = "none")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        defmt::println!(
            "Channel___________________{=u8} ~ {=u16} MHz",
            channel,
            channel as u16 + 2400u16
        );
        defmt::println!("RF Data Rate______________{}", self.get_data_rate()?);
        defmt::println!("RF Power Level____________{}", self.get_power_level()?);
        defmt::println!("CRC Length________________{}", self.get_crc_length()?);
        defmt::println!(
            "Auto retry delay__________{=u16} microseconds",
            (self.get_retransmit_delay()? as u16 + 1) * 250
        );
        defmt::println!(
            "Auto retry attempts_______{=u8} maximum",
            self.get_retransmit_count()?
        );

        let observer = self.read_byte(registers::OBSERVE_TX)?;
        defmt::println!(
            "Packets lost\n    on current channel____{=u8}",
            observer >> 4
        );
        defmt::println!(
            "Retry attempts made\n    for last transmission_{=u8}",
            observer & 0xF
        );

        defmt::println!("Status flags______________{}", self.get_status_flags()?);
        defmt::println!("TX FIFO___________________{}", self.get_fifo_state(true)?);
        defmt::println!("RX FIFO___________________{}", self.get_fifo_state(false)?);
        defmt::println!("Ask no ACK allowed________{=bool}", self.get_en_dyn_ack()?);
        defmt::println!(
            "Dynamic Payloads__________0b{=0..8}",
            self.read_byte(registers::DYNPD)?
        );
        defmt::println!(
            "Auto Acknowledgment_______0b{=0..8}",
            self.read_byte(registers::EN_AA)?
        );
        let rx = defmt::intern!("R");
        let tx = defmt::intern!("T");
        defmt::println!(
            "Primary Mode______________{=istr}X",
            if self.is_rx()? { rx } else { tx }
        );
        defmt::println!("Powered Up________________{=bool}", self.is_powered()?);

        defmt::println!("TX address________________{=[u8; 5]:02X}", self.get_tx_addr()?);
        let open_pipes = self.read_byte(registers::EN_RXADDR)?;
        let opened = defmt::intern!(" open ");
        let closed = defmt::intern!("closed");
        for pipe in 0..=5u8 {
            defmt::println!(
                "Pipe {=u8} ({=istr}) bound to {=[u8; 5]:02X}",
                pipe,
                if (open_pipes & (1u8 << pipe)) > 0 {
                    opened
                } else {
                    closed
                },
                self.get_rx_addr(pipe)?,
            );
        }
        Ok(())
    }

    #[cfg(not(any(feature = "defmt", feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(feature = "defmt")]
    #[cfg(not(any(target_os = "none", feature = "std")))]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        Ok(())
    }

    #[cfg(not(all(feature = "defmt", target_os = "none")))]
    #[cfg(feature = "std")]
    fn print_details(&mut self) -> Result<(), Self::DetailsErrorType> {
        let channel = self.get_channel()?;
        std::println!(
            "Channel___________________{channel} ~ {} MHz",
            channel as u16 + 2400u16
        );
        std::println!("RF Data Rate______________{}", self.get_data_rate()?);
        std::println!("RF Power Level____________{}", self.get_power_level()?);
        std::println!("CRC Length________________{}", self.get_crc_length()?);
        std::println!(
            "Auto retry delay__________{} microseconds",
            (self.get_retransmit_delay()? as u16 + 1) * 250
        );
        std::println!(
            "Auto retry attempts_______{} maximum",
            self.get_retransmit_count()?
        );

        let observer = self.read_byte(registers::OBSERVE_TX)?;
        std::println!("Packets lost\n    on current channel____{}", observer >> 4);
        std::println!(
            "Retry attempts made\n    for last transmission_{}",
            observer & 0xF
        );

        std::println!("Status flags______________{}", self.get_status_flags()?);
        std::println!("TX FIFO___________________{}", self.get_fifo_state(true)?);
        std::println!("RX FIFO___________________{}", self.get_fifo_state(false)?);
        std::println!("Ask no ACK allowed________{}", self.get_en_dyn_ack()?);
        std::println!(
            "Dynamic Payloads__________{:#010b}",
            self.read_byte(registers::DYNPD)?
        );
        std::println!(
            "Auto Acknowledgment_______{:#010b}",
            self.read_byte(registers::EN_AA)?
        );
        std::println!(
            "Primary Mode______________{}X",
            if self.is_rx()? { "R" } else { "T" }
        );
        std::println!("Powered Up________________{}", self.is_powered()?);

        // addresses are stored LSB first; print them MSB first
        let address = self.get_tx_addr()?;
        std::println!(
            "TX address________________0x{:02X}{:02X}{:02X}{:02X}{:02X}",
            address[4],
            address[3],
            address[2],
            address[1],
            address[0]
        );
        let open_pipes = self.read_byte(registers::EN_RXADDR)?;
        for pipe in 0..=5u8 {
            let address = self.get_rx_addr(pipe)?;
            std::println!(
                "Pipe {pipe} ({}) bound to 0x{:02X}{:02X}{:02X}{:02X}{:02X}",
                if (open_pipes & (1u8 << pipe)) > 0 {
                    " open "
                } else {
                    "closed"
                },
                address[4],
                address[3],
                address[2],
                address[1],
                address[0]
            );
        }
        Ok(())
    }
}
