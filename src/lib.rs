#![doc = include_str!("../README.md")]
//!
//! ## Basic API
//!
//! - [`Nrf24l01::new()`](fn@crate::radio::Nrf24l01::new)
//! - [`Nrf24l01::init()`](radio/struct.Nrf24l01.html#method.init)
//! - [`Nrf24l01::with_config()`](radio/struct.Nrf24l01.html#method.with_config)
//! - [`Nrf24l01::power_up()`](radio/struct.Nrf24l01.html#method.power_up)
//! - [`Nrf24l01::power_down()`](radio/struct.Nrf24l01.html#method.power_down)
//! - [`Nrf24l01::set_pipe0_write()`](radio/struct.Nrf24l01.html#method.set_pipe0_write)
//! - [`Nrf24l01::set_pipe_read()`](radio/struct.Nrf24l01.html#method.set_pipe_read)
//! - [`Nrf24l01::close_pipe()`](radio/struct.Nrf24l01.html#method.close_pipe)
//! - [`Nrf24l01::send_packets()`](radio/struct.Nrf24l01.html#method.send_packets)
//! - [`Nrf24l01::send_packets_no_ack()`](radio/struct.Nrf24l01.html#method.send_packets_no_ack)
//! - [`Nrf24l01::receive_packets()`](radio/struct.Nrf24l01.html#method.receive_packets)
//! - [`Nrf24l01::receive_packets_inf()`](radio/struct.Nrf24l01.html#method.receive_packets_inf)
//! - [`Nrf24l01::receive_stream()`](fn@crate::radio::Nrf24l01::receive_stream)
//!
//! ## Configuration API
//!
//! - [`Nrf24l01::set_channel()`](radio/struct.Nrf24l01.html#method.set_channel)
//! - [`Nrf24l01::set_data_rate()`](radio/struct.Nrf24l01.html#method.set_data_rate)
//! - [`Nrf24l01::set_power_level()`](radio/struct.Nrf24l01.html#method.set_power_level)
//! - [`Nrf24l01::set_crc_length()`](radio/struct.Nrf24l01.html#method.set_crc_length)
//! - [`Nrf24l01::set_retransmit_delay()`](radio/struct.Nrf24l01.html#method.set_retransmit_delay)
//! - [`Nrf24l01::set_retransmit_count()`](radio/struct.Nrf24l01.html#method.set_retransmit_count)
//!
//! ## Advanced API
//!
//! - [`Nrf24l01::send_packets_until()`](radio/struct.Nrf24l01.html#method.send_packets_until)
//! - [`Nrf24l01::send_packets_no_ack_until()`][send_no_ack_until]
//! - [`Nrf24l01::get_status_flags()`](radio/struct.Nrf24l01.html#method.get_status_flags)
//! - [`Nrf24l01::clear_status_flags()`](radio/struct.Nrf24l01.html#method.clear_status_flags)
//! - [`Nrf24l01::get_fifo_state()`](radio/struct.Nrf24l01.html#method.get_fifo_state)
//! - [`Nrf24l01::flush_rx()`](radio/struct.Nrf24l01.html#method.flush_rx)
//! - [`Nrf24l01::flush_tx()`](radio/struct.Nrf24l01.html#method.flush_tx)
//! - [`Nrf24l01::pulse_ce()`](fn@crate::radio::Nrf24l01::pulse_ce)
//! - [`Nrf24l01::read_register()`](fn@crate::radio::Nrf24l01::read_register)
//! - [`Nrf24l01::write_register()`](fn@crate::radio::Nrf24l01::write_register)
//! - [`Nrf24l01::print_details()`](radio/struct.Nrf24l01.html#method.print_details)
//!
//! [send_no_ack_until]: radio/struct.Nrf24l01.html#method.send_packets_no_ack_until
//!
#![no_std]

mod types;
pub use types::{
    CrcLength, DataRate, FifoState, Packet, PowerLevel, RxReport, StatusFlags, TxReport,
};
pub mod clock;
pub mod radio;
