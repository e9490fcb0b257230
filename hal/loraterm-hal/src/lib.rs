//! Loraterm Hardware Abstraction Layer
//!
//! This crate defines the serial transport traits the terminal driver is
//! written against. Chip-specific code (or any `embedded-io` byte stream)
//! implements them, so the same display code runs on the device and on a
//! host test bench.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  loraterm-display (status panel)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  loraterm-vt100 (terminal control)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  loraterm-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`uart::UartTx`], [`uart::UartRx`] - Blocking serial communication
//! - [`uart::Uart`] - Both directions sharing one error type
//! - [`io::EmbeddedIoUart`] - Adapter for `embedded-io` streams

#![no_std]
#![deny(unsafe_code)]

pub mod io;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use io::EmbeddedIoUart;
pub use uart::{Uart, UartConfig, UartRx, UartTx};
