//! VT100 terminal handle
//!
//! [`Vt100`] owns the serial transport for the lifetime of the display and
//! translates display intents into escape sequences. Every transmit blocks
//! until the UART accepts each byte; there is no timeout.

use core::fmt;

use loraterm_hal::{Uart, UartConfig, UartTx};

use crate::attr::{Color, TextAttribute};
use crate::buffer::{self, FormatError};
use crate::glyph::BoxGlyph;
use crate::sequence::{Sequence, SequenceError, MAX_SEQUENCE_LEN};

/// Errors reported by terminal operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminalError<E> {
    /// The serial transport failed
    Transport(E),
    /// A formatting trait implementation returned an error
    Format,
    /// Formatted output exceeds the stack buffer and no heap is available
    Overflow { len: usize },
    /// An escape sequence did not fit its encode buffer
    Encoding(SequenceError),
}

impl<E> From<FormatError> for TerminalError<E> {
    fn from(e: FormatError) -> Self {
        match e {
            FormatError::Format => TerminalError::Format,
            FormatError::Overflow { len } => TerminalError::Overflow { len },
        }
    }
}

impl<E> From<SequenceError> for TerminalError<E> {
    fn from(e: SequenceError) -> Self {
        TerminalError::Encoding(e)
    }
}

/// Error type of a terminal driving `U`
pub type Vt100Error<U> = TerminalError<<U as UartTx>::Error>;

/// A VT100 terminal on the other end of a serial link
#[derive(Debug)]
pub struct Vt100<U> {
    uart: U,
    config: UartConfig,
}

impl<U: Uart> Vt100<U> {
    /// Take ownership of a transport running at 115200 8N1 and reset the
    /// terminal to its power-on settings
    pub fn new(uart: U) -> Result<Self, Vt100Error<U>> {
        Self::with_config(uart, UartConfig::default())
    }

    /// Same as [`Vt100::new`] for a transport set up with `config`
    pub fn with_config(uart: U, config: UartConfig) -> Result<Self, Vt100Error<U>> {
        let mut vt = Self { uart, config };
        vt.send(Sequence::Reset)?;

        #[cfg(feature = "defmt")]
        defmt::trace!("VT100 terminal reset at {} baud", vt.config.baudrate);

        Ok(vt)
    }

    /// Link settings the terminal was created with
    pub fn config(&self) -> &UartConfig {
        &self.config
    }

    /// Give the transport back
    pub fn release(self) -> U {
        self.uart
    }

    /// Borrow the transport
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Mutably borrow the transport
    pub fn uart_mut(&mut self) -> &mut U {
        &mut self.uart
    }

    /// Transmit an escape sequence
    pub fn send(&mut self, seq: Sequence) -> Result<(), Vt100Error<U>> {
        let mut buf = [0u8; MAX_SEQUENCE_LEN];
        let len = seq.encode(&mut buf)?;
        self.write_bytes(&buf[..len])
    }

    /// Erase in display
    ///
    /// 0 clears from the cursor down, 1 from the cursor up, 2 the entire
    /// screen. Other values are sent as-is and left to the terminal.
    pub fn clear_screen(&mut self, mode: impl Into<u8>) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::ClearScreen(mode.into()))
    }

    /// Erase in line
    ///
    /// 0 clears to the end of the line, 1 from the start of the line,
    /// 2 the whole line. Other values are sent as-is.
    pub fn clear_line(&mut self, mode: impl Into<u8>) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::ClearLine(mode.into()))
    }

    pub fn set_attribute(&mut self, attr: TextAttribute) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::Attribute(attr))
    }

    pub fn set_attribute_colors(
        &mut self,
        attr: TextAttribute,
        fg: Color,
        bg: Color,
    ) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::AttributeColors { attr, fg, bg })
    }

    pub fn set_cursor_visible(&mut self, visible: bool) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::CursorVisible(visible))
    }

    /// Move the cursor to 1-based terminal coordinates
    pub fn set_cursor_position(&mut self, line: u8, col: u8) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::CursorPosition { line, col })
    }

    pub fn put_string_at(&mut self, line: u8, col: u8, s: &str) -> Result<(), Vt100Error<U>> {
        self.set_cursor_position(line, col)?;
        self.write_str(s)
    }

    /// Write one raw byte at a position
    pub fn put_char_at(&mut self, line: u8, col: u8, c: u8) -> Result<(), Vt100Error<U>> {
        self.set_cursor_position(line, col)?;
        self.write_bytes(&[c])
    }

    /// Write `n` as unpadded uppercase hex at a position
    pub fn put_hex_at(&mut self, line: u8, col: u8, n: u16) -> Result<(), Vt100Error<U>> {
        self.set_cursor_position(line, col)?;
        self.print(format_args!("{:X}", n)).map(|_| ())
    }

    pub fn put_box_drawing_char(&mut self, glyph: BoxGlyph) -> Result<(), Vt100Error<U>> {
        self.send(Sequence::BoxDrawing(glyph))
    }

    /// Format and transmit
    ///
    /// Returns the formatted length. Short output is rendered on the stack,
    /// long output on the heap (see [`crate::buffer`]); nothing is
    /// transmitted if rendering fails.
    pub fn print(&mut self, args: fmt::Arguments<'_>) -> Result<usize, Vt100Error<U>> {
        let out = buffer::render(args)?;

        #[cfg(feature = "defmt")]
        if out.is_heap() {
            defmt::debug!("Formatted {} bytes on the heap", out.len());
        }

        self.write_bytes(out.as_bytes())?;
        Ok(out.len())
    }

    /// Transmit text without formatting
    pub fn write_str(&mut self, s: &str) -> Result<(), Vt100Error<U>> {
        self.write_bytes(s.as_bytes())
    }

    /// Transmit raw bytes
    pub fn write_bytes(&mut self, data: &[u8]) -> Result<(), Vt100Error<U>> {
        self.uart
            .write_blocking(data)
            .map_err(TerminalError::Transport)
    }

    /// Wait until everything handed to the transport has left it
    pub fn flush(&mut self) -> Result<(), Vt100Error<U>> {
        self.uart.flush().map_err(TerminalError::Transport)
    }

    /// Check whether a keypress is waiting
    pub fn readable(&mut self) -> Result<bool, Vt100Error<U>> {
        self.uart.is_readable().map_err(TerminalError::Transport)
    }

    /// Read one byte, blocking until it arrives
    pub fn read_char(&mut self) -> Result<u8, Vt100Error<U>> {
        self.uart.read_byte().map_err(TerminalError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::STRING_STACK_LIMIT;
    use heapless::{Deque, Vec};
    use loraterm_hal::UartRx;

    /// In-memory transport recording transmitted bytes
    struct MockUart {
        tx: Vec<u8, 512>,
        rx: Deque<u8, 8>,
        fail_tx: bool,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct MockError;

    impl MockUart {
        fn new() -> Self {
            Self {
                tx: Vec::new(),
                rx: Deque::new(),
                fail_tx: false,
            }
        }
    }

    impl UartTx for MockUart {
        type Error = MockError;

        fn is_writable(&mut self) -> Result<bool, MockError> {
            Ok(true)
        }

        fn write_byte(&mut self, byte: u8) -> Result<(), MockError> {
            if self.fail_tx {
                return Err(MockError);
            }
            self.tx.push(byte).map_err(|_| MockError)
        }

        fn flush(&mut self) -> Result<(), MockError> {
            Ok(())
        }
    }

    impl UartRx for MockUart {
        type Error = MockError;

        fn is_readable(&mut self) -> Result<bool, MockError> {
            Ok(!self.rx.is_empty())
        }

        fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, MockError> {
            match (buf.first_mut(), self.rx.pop_front()) {
                (Some(slot), Some(byte)) => {
                    *slot = byte;
                    Ok(1)
                }
                _ => Err(MockError),
            }
        }
    }

    /// Terminal with the reset sequence already cleared from the log
    fn terminal() -> Vt100<MockUart> {
        let mut vt = Vt100::new(MockUart::new()).unwrap();
        vt.uart_mut().tx.clear();
        vt
    }

    #[test]
    fn test_new_resets_terminal() {
        let vt = Vt100::new(MockUart::new()).unwrap();
        assert_eq!(&vt.uart().tx[..], b"\x1Bc");
    }

    #[test]
    fn test_link_config() {
        assert_eq!(terminal().config().baudrate, 115200);

        let config = UartConfig::with_baudrate(9600);
        let vt = Vt100::with_config(MockUart::new(), config).unwrap();
        assert_eq!(vt.config(), &config);
        assert_eq!(&vt.uart().tx[..], b"\x1Bc");
    }

    #[test]
    fn test_clear_modes() {
        let mut vt = terminal();
        vt.clear_screen(crate::EraseMode::All).unwrap();
        vt.clear_line(1u8).unwrap();
        assert_eq!(&vt.uart().tx[..], b"\x1B[2J\x1B[1K");
    }

    #[test]
    fn test_put_string_at() {
        let mut vt = terminal();
        vt.put_string_at(42, 1, "To refresh").unwrap();
        assert_eq!(&vt.uart().tx[..], b"\x1B[42;1HTo refresh");
    }

    #[test]
    fn test_put_char_at() {
        let mut vt = terminal();
        vt.put_char_at(5, 50, b']').unwrap();
        assert_eq!(&vt.uart().tx[..], b"\x1B[5;50H]");
    }

    #[test]
    fn test_put_hex_at() {
        let mut vt = terminal();
        vt.put_hex_at(1, 2, 0xBEEF).unwrap();
        vt.put_hex_at(1, 2, 0x0A).unwrap();
        assert_eq!(&vt.uart().tx[..], b"\x1B[1;2HBEEF\x1B[1;2HA");
    }

    #[test]
    fn test_print_returns_length() {
        let mut vt = terminal();
        let len = vt.print(format_args!("{:10}", 1234u32)).unwrap();
        assert_eq!(len, 10);
        assert_eq!(&vt.uart().tx[..], b"      1234");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_print_long_output_uses_heap() {
        let mut vt = terminal();
        let len = vt
            .print(format_args!("{:>1$}", "x", STRING_STACK_LIMIT + 1))
            .unwrap();
        assert_eq!(len, STRING_STACK_LIMIT + 1);
        assert_eq!(vt.uart().tx.len(), STRING_STACK_LIMIT + 1);
        assert_eq!(vt.uart().tx.last(), Some(&b'x'));
    }

    #[cfg(not(feature = "alloc"))]
    #[test]
    fn test_print_overflow_sends_nothing() {
        let mut vt = terminal();
        assert_eq!(
            vt.print(format_args!("{:>1$}", "x", STRING_STACK_LIMIT + 1)),
            Err(TerminalError::Overflow {
                len: STRING_STACK_LIMIT + 1
            })
        );
        assert!(vt.uart().tx.is_empty());

        // Stack-sized output still goes through afterwards
        vt.print(format_args!("{:>1$}", "x", STRING_STACK_LIMIT)).unwrap();
        assert_eq!(vt.uart().tx.len(), STRING_STACK_LIMIT);
    }

    #[test]
    fn test_transport_error_propagates() {
        let mut vt = terminal();
        vt.uart_mut().fail_tx = true;
        assert_eq!(
            vt.set_cursor_visible(false),
            Err(TerminalError::Transport(MockError))
        );
    }

    #[test]
    fn test_read_char() {
        let mut vt = terminal();
        assert!(!vt.readable().unwrap());

        vt.uart_mut().rx.push_back(b'r').unwrap();
        assert!(vt.readable().unwrap());
        assert_eq!(vt.read_char().unwrap(), b'r');
        assert!(!vt.readable().unwrap());
    }

    #[test]
    fn test_release_returns_transport() {
        let mut vt = terminal();
        vt.write_str("x").unwrap();
        let uart = vt.release();
        assert_eq!(&uart.tx[..], b"x");
    }
}
