//! Escape sequence encoding
//!
//! Each [`Sequence`] encodes to the exact byte string a VT100 expects.
//! Numeric parameters are written in decimal without padding:
//!
//! - `ESC c`
//! - `ESC [ Ps J`, `ESC [ Ps K`
//! - `ESC [ Ps m`, `ESC [ Ps ; Ps ; Ps m`
//! - `ESC [ ? 25 h`, `ESC [ ? 25 l`
//! - `ESC [ Pl ; Pc H`
//! - `ESC ( 0 c ESC ( B`

use heapless::Vec;

use crate::attr::{Color, TextAttribute};
use crate::glyph::BoxGlyph;
use crate::ESC;

/// Longest encoded sequence (`ESC [ 255;255;255m` is 14 bytes)
pub const MAX_SEQUENCE_LEN: usize = 16;

/// Errors that can occur while encoding a sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequenceError {
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// A terminal control sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Sequence {
    /// Reset the terminal to its power-on state
    Reset,
    /// Erase in display; the mode is sent as given
    ClearScreen(u8),
    /// Erase in line; the mode is sent as given
    ClearLine(u8),
    /// Select a single attribute
    Attribute(TextAttribute),
    /// Select an attribute together with foreground and background colors
    AttributeColors {
        attr: TextAttribute,
        fg: Color,
        bg: Color,
    },
    /// Show or hide the cursor
    CursorVisible(bool),
    /// Move the cursor (1-based terminal coordinates)
    CursorPosition { line: u8, col: u8 },
    /// One glyph from the line-drawing set
    BoxDrawing(BoxGlyph),
}

/// Bounded cursor over an output buffer
struct ByteWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> ByteWriter<'a> {
    fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn push(&mut self, byte: u8) -> Result<(), SequenceError> {
        let slot = self
            .buf
            .get_mut(self.pos)
            .ok_or(SequenceError::BufferTooSmall)?;
        *slot = byte;
        self.pos += 1;
        Ok(())
    }

    fn push_slice(&mut self, bytes: &[u8]) -> Result<(), SequenceError> {
        for &byte in bytes {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Decimal, no leading zeros
    fn push_decimal(&mut self, value: u8) -> Result<(), SequenceError> {
        if value >= 100 {
            self.push(b'0' + value / 100)?;
        }
        if value >= 10 {
            self.push(b'0' + (value / 10) % 10)?;
        }
        self.push(b'0' + value % 10)
    }

    /// `ESC [`
    fn push_csi(&mut self) -> Result<(), SequenceError> {
        self.push_slice(&[ESC, b'['])
    }
}

impl Sequence {
    /// Encode this sequence into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, SequenceError> {
        let mut w = ByteWriter::new(buffer);

        match *self {
            Sequence::Reset => w.push_slice(&[ESC, b'c'])?,
            Sequence::ClearScreen(mode) => {
                w.push_csi()?;
                w.push_decimal(mode)?;
                w.push(b'J')?;
            }
            Sequence::ClearLine(mode) => {
                w.push_csi()?;
                w.push_decimal(mode)?;
                w.push(b'K')?;
            }
            Sequence::Attribute(attr) => {
                w.push_csi()?;
                w.push_decimal(attr.to_byte())?;
                w.push(b'm')?;
            }
            Sequence::AttributeColors { attr, fg, bg } => {
                w.push_csi()?;
                w.push_decimal(attr.to_byte())?;
                w.push(b';')?;
                w.push_decimal(fg.foreground())?;
                w.push(b';')?;
                w.push_decimal(bg.background())?;
                w.push(b'm')?;
            }
            Sequence::CursorVisible(visible) => {
                w.push_csi()?;
                w.push_slice(b"?25")?;
                w.push(if visible { b'h' } else { b'l' })?;
            }
            Sequence::CursorPosition { line, col } => {
                w.push_csi()?;
                w.push_decimal(line)?;
                w.push(b';')?;
                w.push_decimal(col)?;
                w.push(b'H')?;
            }
            Sequence::BoxDrawing(glyph) => {
                w.push_slice(&[ESC, b'(', b'0', glyph.to_byte(), ESC, b'(', b'B'])?;
            }
        }

        Ok(w.pos)
    }

    /// Encode this sequence into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_SEQUENCE_LEN>, SequenceError> {
        let mut buffer = [0u8; MAX_SEQUENCE_LEN];
        let len = self.encode(&mut buffer)?;
        let mut vec = Vec::new();
        vec.extend_from_slice(&buffer[..len])
            .map_err(|_| SequenceError::BufferTooSmall)?;
        Ok(vec)
    }
}
