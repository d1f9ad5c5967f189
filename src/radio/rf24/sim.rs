//! A behavioural model of an nRF24L01 on the other end of the SPI bus.
//!
//! Unlike the transaction mocks, this keeps a register file and both FIFOs,
//! so tests can check what the device ends up holding rather than the exact
//! bytes on the wire. Radio events are produced lazily: every read of the
//! `STATUS` register moves the simulated air forward by at most one event.

extern crate std;
use super::{commands, mnemonics, registers, Nrf24l01};
use core::convert::Infallible;
use embedded_hal::{
    digital::{ErrorType as PinErrorType, OutputPin},
    spi::{ErrorType as SpiErrorType, Operation, SpiDevice},
};
use embedded_hal_mock::eh1::delay::NoopDelay;
use std::{boxed::Box, cell::RefCell, collections::VecDeque, rc::Rc, vec::Vec};

const FIFO_DEPTH: usize = mnemonics::FIFO_DEPTH;

pub(crate) struct SimState {
    pub regs: [u8; 0x1E],
    pub rx_addr_p0: [u8; 5],
    pub rx_addr_p1: [u8; 5],
    pub tx_addr: [u8; 5],
    pub ce: bool,
    /// Queued payloads; the flag is set when no ACK was requested.
    pub tx_fifo: VecDeque<(bool, Vec<u8>)>,
    pub rx_fifo: VecDeque<Vec<u8>>,
    /// Payloads that will arrive over the air while listening.
    pub air: VecDeque<Vec<u8>>,
    /// Every payload write, as `(command, payload)`.
    pub tx_writes: Vec<(u8, Vec<u8>)>,
    /// Payloads that left the device successfully.
    pub delivered: Vec<Vec<u8>>,
    /// Does the peer acknowledge this payload?
    pub ack: Box<dyn FnMut(&[u8]) -> bool>,
    /// The most payloads the TX FIFO ever held.
    pub tx_high_water: usize,
    /// A payload was written while the TX FIFO was full.
    pub tx_overflow: bool,
    /// Reported by the next R_RX_PL_WID instead of the real width.
    pub bad_width: Option<u8>,
    pub status_reads: usize,
}

impl SimState {
    fn new() -> Self {
        let mut regs = [0u8; 0x1E];
        regs[registers::CONFIG as usize] = 0x08;
        regs[registers::EN_AA as usize] = 0x3F;
        regs[registers::EN_RXADDR as usize] = 0x03;
        regs[registers::SETUP_AW as usize] = 0x03;
        regs[registers::SETUP_RETR as usize] = 0x03;
        regs[registers::RF_CH as usize] = 0x02;
        regs[registers::RF_SETUP as usize] = 0x0E;
        for (pipe, lsb) in [0xC3u8, 0xC4, 0xC5, 0xC6].iter().enumerate() {
            regs[registers::RX_ADDR_P0 as usize + 2 + pipe] = *lsb;
        }
        Self {
            regs,
            rx_addr_p0: [0xE7; 5],
            rx_addr_p1: [0xC2; 5],
            tx_addr: [0xE7; 5],
            ce: false,
            tx_fifo: VecDeque::new(),
            rx_fifo: VecDeque::new(),
            air: VecDeque::new(),
            tx_writes: Vec::new(),
            delivered: Vec::new(),
            ack: Box::new(|_| true),
            tx_high_water: 0,
            tx_overflow: false,
            bad_width: None,
            status_reads: 0,
        }
    }

    fn prim_rx(&self) -> bool {
        self.regs[registers::CONFIG as usize] & 1 == 1
    }

    fn status(&self) -> u8 {
        let rx_pipe = if self.rx_fifo.is_empty() { 7 } else { 0 };
        let tx_full = (self.tx_fifo.len() >= FIFO_DEPTH) as u8;
        (self.regs[registers::STATUS as usize] & 0x70) | (rx_pipe << 1) | tx_full
    }

    fn fifo_status(&self) -> u8 {
        let mut value = 0u8;
        if self.tx_fifo.len() >= FIFO_DEPTH {
            value |= 0x20;
        }
        if self.tx_fifo.is_empty() {
            value |= 0x10;
        }
        if self.rx_fifo.len() >= FIFO_DEPTH {
            value |= 0x02;
        }
        if self.rx_fifo.is_empty() {
            value |= 0x01;
        }
        value
    }

    fn latch(&mut self, mask: u8) {
        self.regs[registers::STATUS as usize] |= mask;
    }

    /// Let one radio event happen, if the device is in a state to produce one.
    fn tick(&mut self) {
        if !self.ce {
            return;
        }
        let status = self.regs[registers::STATUS as usize];
        if self.prim_rx() {
            if self.rx_fifo.len() < FIFO_DEPTH {
                if let Some(payload) = self.air.pop_front() {
                    self.rx_fifo.push_back(payload);
                    self.latch(mnemonics::MASK_RX_DR);
                }
            }
            return;
        }
        // a pending event stalls the simulated air until it is observed and cleared
        if status & (mnemonics::MASK_TX_DS | mnemonics::MASK_MAX_RT) != 0 {
            return;
        }
        let Some((no_ack, payload)) = self.tx_fifo.front() else {
            return;
        };
        let (no_ack, payload) = (*no_ack, payload.clone());
        if no_ack || (self.ack)(&payload) {
            self.tx_fifo.pop_front();
            self.delivered.push(payload);
            self.latch(mnemonics::MASK_TX_DS);
        } else {
            self.latch(mnemonics::MASK_MAX_RT);
        }
    }

    fn read_register(&mut self, address: u8, out: &mut [u8]) {
        let source: &[u8] = match address {
            registers::RX_ADDR_P0 => &self.rx_addr_p0,
            registers::RX_ADDR_P1 => &self.rx_addr_p1,
            registers::TX_ADDR => &self.tx_addr,
            _ => {
                let value = match address {
                    registers::STATUS => {
                        self.status_reads += 1;
                        self.tick();
                        self.status()
                    }
                    registers::FIFO_STATUS => self.fifo_status(),
                    _ => self.regs[address as usize],
                };
                if let Some(first) = out.first_mut() {
                    *first = value;
                }
                return;
            }
        };
        let len = out.len().min(5);
        out[..len].copy_from_slice(&source[..len]);
    }

    fn write_register(&mut self, address: u8, data: &[u8]) {
        let target: &mut [u8] = match address {
            registers::RX_ADDR_P0 => &mut self.rx_addr_p0,
            registers::RX_ADDR_P1 => &mut self.rx_addr_p1,
            registers::TX_ADDR => &mut self.tx_addr,
            registers::STATUS => {
                // write 1 to clear
                self.regs[address as usize] &= !(data[0] & 0x70);
                return;
            }
            _ => {
                self.regs[address as usize] = data[0];
                return;
            }
        };
        let len = data.len().min(5);
        target[..len].copy_from_slice(&data[..len]);
    }

    fn push_tx(&mut self, command: u8, payload: &[u8]) {
        self.tx_writes.push((command, payload.to_vec()));
        if self.tx_fifo.len() >= FIFO_DEPTH {
            self.tx_overflow = true;
            return;
        }
        self.tx_fifo
            .push_back((command == commands::W_TX_PAYLOAD_NO_ACK, payload.to_vec()));
        self.tx_high_water = self.tx_high_water.max(self.tx_fifo.len());
    }

    fn transfer(&mut self, buf: &mut [u8]) {
        let command = buf[0];
        buf[0] = self.status();
        let data = &mut buf[1..];
        match command {
            0x00..=0x1F => self.read_register(command & mnemonics::REGISTER_MASK, data),
            0x20..=0x3F => {
                let payload = data.to_vec();
                self.write_register(command & mnemonics::REGISTER_MASK, &payload);
            }
            commands::R_RX_PL_WID => {
                let width = match self.bad_width.take() {
                    Some(width) => width,
                    None => self.rx_fifo.front().map_or(0, |p| p.len() as u8),
                };
                data[0] = width;
            }
            commands::R_RX_PAYLOAD => {
                if let Some(payload) = self.rx_fifo.pop_front() {
                    let len = payload.len().min(data.len());
                    data[..len].copy_from_slice(&payload[..len]);
                }
            }
            commands::W_TX_PAYLOAD | commands::W_TX_PAYLOAD_NO_ACK => {
                let payload = data.to_vec();
                self.push_tx(command, &payload);
            }
            commands::FLUSH_TX => self.tx_fifo.clear(),
            commands::FLUSH_RX => self.rx_fifo.clear(),
            _ => (),
        }
    }
}

#[derive(Clone)]
pub(crate) struct SimSpi(Rc<RefCell<SimState>>);

impl SpiErrorType for SimSpi {
    type Error = Infallible;
}

impl SpiDevice for SimSpi {
    fn transaction(&mut self, operations: &mut [Operation<'_, u8>]) -> Result<(), Infallible> {
        let mut state = self.0.borrow_mut();
        for operation in operations {
            match operation {
                Operation::TransferInPlace(buf) => state.transfer(buf),
                _ => panic!("the driver only uses transfer_in_place()"),
            }
        }
        Ok(())
    }
}

#[derive(Clone)]
pub(crate) struct SimCe(Rc<RefCell<SimState>>);

impl PinErrorType for SimCe {
    type Error = Infallible;
}

impl OutputPin for SimCe {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().ce = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.0.borrow_mut().ce = true;
        Ok(())
    }
}

pub(crate) type SimNrf24l01 = Nrf24l01<SimSpi, SimCe, NoopDelay>;

/// A driver wired to a fresh simulated device, and a handle to inspect that device.
pub(crate) fn sim_radio() -> (SimNrf24l01, Rc<RefCell<SimState>>) {
    let state = Rc::new(RefCell::new(SimState::new()));
    let radio = Nrf24l01::new(SimCe(state.clone()), SimSpi(state.clone()), NoopDelay);
    (radio, state)
}
