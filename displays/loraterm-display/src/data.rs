//! Text rendering for value fields, keys, EUIs and payload blocks
//!
//! A payload block has 64 slots laid out 16 per row over 4 rows. Slot `i`
//! lands on row `start_line + i / 16`; each slot is three columns wide and
//! shows either a byte (`A5 `) or a placeholder (`__ `). The closing bracket
//! goes on the last row, overwriting the trailing space of slot 63.

use core::fmt::{self, Write};

use heapless::String;

use crate::layout::{HEX_COL, KEY_CLOSE_COL};

/// Payload bytes shown per block
pub const DATA_SLOTS: usize = 64;

/// Slots per terminal row
pub const SLOTS_PER_ROW: usize = 16;

/// Terminal rows per block
pub const DATA_ROWS: u8 = (DATA_SLOTS / SLOTS_PER_ROW) as u8;

/// Columns taken by one slot
pub const SLOT_WIDTH: usize = 3;

/// Columns taken by a full row of slots
pub const ROW_WIDTH: usize = SLOTS_PER_ROW * SLOT_WIDTH;

/// Placeholder for an empty slot
pub const PLACEHOLDER: &str = "__ ";

/// Text of one row of slots
pub type RowText = String<ROW_WIDTH>;

/// Widest single-value field on the panel (the device address)
pub const FIELD_MAX: usize = 11;

/// Text of one value field
pub type FieldText = String<FIELD_MAX>;

/// Render `args` cut to at most `width` columns
///
/// Whatever does not fit is dropped, so the result never runs into the
/// bracket closing the field.
pub fn fit_field(args: fmt::Arguments<'_>, width: usize) -> FieldText {
    let mut out = Truncated {
        text: FieldText::new(),
        width: width.min(FIELD_MAX),
    };
    // Truncated never fails; integer formatting doesn't either
    let _ = out.write_fmt(args);
    out.text
}

/// `fmt::Write` sink that stops accepting text at `width` bytes
struct Truncated {
    text: FieldText,
    width: usize,
}

impl Write for Truncated {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.text.len() + c.len_utf8() > self.width {
                break;
            }
            let _ = self.text.push(c);
        }
        Ok(())
    }
}

/// Append `bytes` as `XX ` pairs (uppercase hex)
///
/// Stops early, leaving `out` intact, if it runs out of room.
pub fn push_hex_pairs<const N: usize>(out: &mut String<N>, bytes: &[u8]) {
    for byte in bytes {
        if out.len() + SLOT_WIDTH > N {
            break;
        }
        let _ = write!(out, "{:02X} ", byte);
    }
}

/// One rendered row of a payload block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRow {
    /// Terminal line
    pub line: u8,
    /// Terminal column of the first slot
    pub col: u8,
    pub text: RowText,
}

/// Rows of a payload block starting at `start_line`
///
/// Bytes past [`DATA_SLOTS`] are not shown.
pub fn data_rows(start_line: u8, data: &[u8]) -> DataRows<'_> {
    DataRows {
        start_line,
        data: &data[..data.len().min(DATA_SLOTS)],
        row: 0,
    }
}

/// Iterator over the rows of a payload block
pub struct DataRows<'a> {
    start_line: u8,
    data: &'a [u8],
    row: u8,
}

impl<'a> Iterator for DataRows<'a> {
    type Item = DataRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= DATA_ROWS {
            return None;
        }

        let first = self.row as usize * SLOTS_PER_ROW;
        let mut text = RowText::new();
        for slot in first..first + SLOTS_PER_ROW {
            match self.data.get(slot) {
                Some(&byte) => push_hex_pairs(&mut text, &[byte]),
                None => {
                    let _ = text.push_str(PLACEHOLDER);
                }
            }
        }

        let row = DataRow {
            line: self.start_line.saturating_add(self.row),
            col: HEX_COL,
            text,
        };
        self.row += 1;
        Some(row)
    }
}

/// Where the closing bracket of a block starting at `start_line` goes
///
/// The last rendered row, not the row after it.
pub fn closing_bracket(start_line: u8) -> (u8, u8) {
    (start_line.saturating_add(DATA_ROWS - 1), KEY_CLOSE_COL)
}
