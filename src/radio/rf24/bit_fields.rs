use bitfield_struct::bitfield;

#[bitfield(u8, order = Msb)]
pub(crate) struct Config {
    #[bits(1)]
    _reserved: u8,

    /// Mask the "RX Data Ready" event from the IRQ pin.
    pub mask_rx_dr: bool,

    /// Mask the "TX Data Sent" event from the IRQ pin.
    pub mask_tx_ds: bool,

    /// Mask the "max retransmits" event from the IRQ pin.
    pub mask_max_rt: bool,

    pub en_crc: bool,

    /// CRC encoding scheme: `false` = 1 byte, `true` = 2 bytes.
    pub crco: bool,

    pub pwr_up: bool,

    /// `true` = primary receiver, `false` = primary transmitter.
    pub prim_rx: bool,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct SetupRetry {
    /// Auto retransmit delay, in steps of 250 us (plus 250 us).
    #[bits(4)]
    pub ard: u8,

    /// Auto retransmit count.
    #[bits(4)]
    pub arc: u8,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct RfSetup {
    pub cont_wave: bool,

    #[bits(1)]
    _reserved: u8,

    pub rf_dr_low: bool,

    pub pll_lock: bool,

    pub rf_dr_high: bool,

    #[bits(2)]
    pub rf_pwr: u8,

    /// LNA gain on the original nRF24L01; don't care on the plus variant.
    pub lna: bool,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct RfChannel {
    #[bits(1)]
    _reserved: u8,

    #[bits(7)]
    pub rf_ch: u8,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct RxPayloadWidth {
    #[bits(2)]
    _reserved: u8,

    #[bits(6)]
    pub rx_pw: u8,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct FifoStatus {
    #[bits(1)]
    _reserved: u8,

    pub tx_reuse: bool,

    pub tx_full: bool,

    pub tx_empty: bool,

    #[bits(2)]
    _reserved2: u8,

    pub rx_full: bool,

    pub rx_empty: bool,
}

#[bitfield(u8, order = Msb)]
pub(crate) struct Feature {
    #[bits(5)]
    _reserved: u8,

    /// Global dynamic payload length enable.
    pub en_dpl: bool,

    pub en_ack_pay: bool,

    /// Allow the W_TX_PAYLOAD_NO_ACK command.
    pub en_dyn_ack: bool,
}
