//! LoRaWAN status panel for a serial terminal
//!
//! This crate provides:
//! - `SerialDisplay`, which paints the panel and rewrites single fields
//! - Status types the application fills in (`UplinkStatus`, `DownlinkStatus`, ...)
//! - The panel geometry and field positions (`layout`)
//! - Keyboard commands read back from the terminal (`Command`)
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐   update_*()   ┌───────────────┐   bytes   ┌──────────┐
//! │ LoRaWAN app loop ├───────────────►│ SerialDisplay ├──────────►│  Vt100   │──► UART
//! └──────────────────┘◄───────────────┤   (panel)     │◄──────────┤          │◄── UART
//!                       Command        └───────────────┘   keys    └──────────┘
//! ```
//!
//! The panel is drawn once with [`SerialDisplay::draw_initial_layout`]. After
//! that each update only touches the cells of its own field, so nothing else
//! on screen flickers.

#![no_std]
#![deny(unsafe_code)]

pub mod data;
pub mod input;
pub mod layout;
pub mod panel;
pub mod status;

pub use input::Command;
pub use layout::Cell;
pub use panel::SerialDisplay;
pub use status::{Activation, DownlinkStatus, Led, UplinkStatus};
