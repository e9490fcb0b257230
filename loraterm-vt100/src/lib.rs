//! VT100 Terminal Control
//!
//! This crate drives a VT100-compatible terminal emulator over a blocking
//! serial link. It knows how to encode the handful of escape sequences the
//! status panel needs and how to push formatted text through a UART one
//! byte at a time.
//!
//! # Wire Format
//!
//! ```text
//! ESC c                     reset to power-on state
//! ESC [ Ps J                erase in display   (Ps = 0, 1, 2)
//! ESC [ Ps K                erase in line      (Ps = 0, 1, 2)
//! ESC [ Ps m                select attribute
//! ESC [ Ps ; 3f ; 4b m      select attribute, foreground, background
//! ESC [ ? 25 h / l          show / hide cursor
//! ESC [ Pl ; Pc H           move cursor (1-based, decimal)
//! ESC ( 0 c ESC ( B         one glyph from the line-drawing set
//! ```
//!
//! All numbers are plain decimal without padding.

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod attr;
pub mod buffer;
pub mod glyph;
pub mod sequence;
pub mod terminal;

pub use attr::{Color, EraseMode, TextAttribute};
pub use buffer::STRING_STACK_LIMIT;
pub use glyph::BoxGlyph;
pub use sequence::{Sequence, SequenceError, MAX_SEQUENCE_LEN};
pub use terminal::{TerminalError, Vt100, Vt100Error};

/// Escape byte that starts every control sequence
pub const ESC: u8 = 0x1B;
