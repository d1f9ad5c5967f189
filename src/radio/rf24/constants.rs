/// Register offsets for the nRF24L01.
pub mod registers {
    pub const CONFIG: u8 = 0x00;
    pub const EN_AA: u8 = 0x01;
    pub const EN_RXADDR: u8 = 0x02;
    pub const SETUP_AW: u8 = 0x03;
    pub const SETUP_RETR: u8 = 0x04;
    pub const RF_CH: u8 = 0x05;
    pub const RF_SETUP: u8 = 0x06;
    pub const STATUS: u8 = 0x07;
    pub const OBSERVE_TX: u8 = 0x08;
    pub const RX_ADDR_P0: u8 = 0x0A;
    pub const RX_ADDR_P1: u8 = 0x0B;
    pub const TX_ADDR: u8 = 0x10;
    pub const RX_PW_P0: u8 = 0x11;
    pub const FIFO_STATUS: u8 = 0x17;
    pub const DYNPD: u8 = 0x1C;
    pub const FEATURE: u8 = 0x1D;
}

/// SPI command bytes for the nRF24L01.
pub mod commands {
    pub const R_REGISTER: u8 = 0x00;
    pub const W_REGISTER: u8 = 0x20;
    pub const R_RX_PL_WID: u8 = 0x60;
    pub const R_RX_PAYLOAD: u8 = 0x61;
    pub const W_TX_PAYLOAD: u8 = 0xA0;
    pub const W_TX_PAYLOAD_NO_ACK: u8 = 0xB0;
    pub const FLUSH_TX: u8 = 0xE1;
    pub const FLUSH_RX: u8 = 0xE2;
}

/// Bit masks and device limits.
pub mod mnemonics {
    pub const MASK_RX_DR: u8 = 1 << 6;
    pub const MASK_TX_DS: u8 = 1 << 5;
    pub const MASK_MAX_RT: u8 = 1 << 4;

    /// Register addresses occupy the low 5 bits of a register command.
    pub const REGISTER_MASK: u8 = 0x1F;

    /// Largest payload the device can hold.
    pub const MAX_PAYLOAD: u8 = 32;

    /// Depth of the device's TX (and RX) FIFO.
    pub const FIFO_DEPTH: usize = 3;

    /// Highest channel number accepted by the validated setters.
    pub const MAX_CHANNEL: u8 = 125;

    /// Highest value of the 4-bit retransmit delay/count fields.
    pub const MAX_RETRY_FIELD: u8 = 15;

    /// Highest pipe number.
    pub const MAX_PIPE: u8 = 5;

    /// Power-down to standby settling time.
    pub const POWER_UP_DELAY_MS: u32 = 5;

    /// Width of the CE pulse that starts a single transmission.
    pub const CE_PULSE_US: u32 = 15;
}
