//! Status panel renderer
//!
//! [`SerialDisplay`] paints the panel once and then rewrites single fields
//! in place. Every update moves the cursor itself and writes exactly the
//! width reserved for its field, so updates can come in any order and
//! repeating one produces the same bytes.

use core::fmt;

use heapless::String;
use loraterm_hal::Uart;
use loraterm_vt100::{BoxGlyph, Color, EraseMode, TextAttribute, Vt100, Vt100Error};

use crate::data::{self, push_hex_pairs};
use crate::input::Command;
use crate::layout::{self, Cell, Row, Rule, BODY_COLS, LABEL_COLS};
use crate::status::{Activation, DownlinkStatus, Led, UplinkStatus};

/// Status panel on a VT100 terminal
pub struct SerialDisplay<U> {
    vt: Vt100<U>,
}

impl<U: Uart> SerialDisplay<U> {
    /// Take ownership of the terminal
    ///
    /// Nothing is drawn until [`SerialDisplay::draw_initial_layout`].
    pub fn new(vt: Vt100<U>) -> Self {
        Self { vt }
    }

    /// Reset the terminal on `uart` and take ownership of it
    pub fn with_uart(uart: U) -> Result<Self, Vt100Error<U>> {
        Ok(Self::new(Vt100::new(uart)?))
    }

    /// Direct access to the terminal
    pub fn terminal(&mut self) -> &mut Vt100<U> {
        &mut self.vt
    }

    /// Give the terminal back
    pub fn release(self) -> Vt100<U> {
        self.vt
    }

    /// Clear the screen and paint the empty panel
    ///
    /// Used at startup and whenever the user asks for a refresh.
    pub fn draw_initial_layout(&mut self) -> Result<(), Vt100Error<U>> {
        #[cfg(feature = "defmt")]
        defmt::info!("Drawing status panel");

        self.vt.clear_screen(EraseMode::All)?;
        self.vt.set_cursor_visible(false)?;
        self.vt.set_cursor_position(0, 0)?;

        for row in layout::PANEL.iter() {
            self.draw_row(row)?;
        }

        self.vt.write_str(layout::HELP_MESSAGE)?;
        self.vt.write_str("\r\n")
    }

    fn draw_row(&mut self, row: &Row) -> Result<(), Vt100Error<U>> {
        match *row {
            Row::Rule(rule) => self.draw_rule(&rule)?,
            Row::Title(title) => {
                self.vt.put_box_drawing_char(BoxGlyph::Vertical)?;
                self.vt.write_str(title)?;
                self.vt.put_box_drawing_char(BoxGlyph::Vertical)?;
            }
            Row::Fields(label, body) => {
                self.vt.put_box_drawing_char(BoxGlyph::Vertical)?;
                self.vt.write_str(label)?;
                self.vt.put_box_drawing_char(BoxGlyph::Vertical)?;
                self.vt.write_str(body)?;
                self.vt.put_box_drawing_char(BoxGlyph::Vertical)?;
            }
        }
        self.vt.write_str("\r\n")
    }

    fn draw_rule(&mut self, rule: &Rule) -> Result<(), Vt100Error<U>> {
        self.vt.put_box_drawing_char(rule.left)?;
        for _ in 0..LABEL_COLS {
            self.vt.put_box_drawing_char(rule.label_fill)?;
        }
        self.vt.put_box_drawing_char(rule.joint)?;
        for _ in 0..BODY_COLS {
            self.vt.put_box_drawing_char(rule.body_fill)?;
        }
        self.vt.put_box_drawing_char(rule.right)
    }

    /// A colored square when activated, a plain blank otherwise
    ///
    /// Attributes are always switched off again afterwards.
    fn checkbox(
        &mut self,
        cell: Cell,
        activated: bool,
        color: Color,
    ) -> Result<(), Vt100Error<U>> {
        self.vt.set_cursor_position(cell.line, cell.col)?;
        if activated {
            self.vt.set_attribute_colors(TextAttribute::Off, color, color)?;
        } else {
            self.vt.set_attribute(TextAttribute::Off)?;
        }
        self.vt.write_str(" ")?;
        self.vt.set_attribute(TextAttribute::Off)
    }

    /// Write formatted text into a value field, cut to `width` columns
    fn put_field(
        &mut self,
        cell: Cell,
        width: usize,
        args: fmt::Arguments<'_>,
    ) -> Result<(), Vt100Error<U>> {
        let text = data::fit_field(args, width);
        self.vt.put_string_at(cell.line, cell.col, &text)
    }

    fn on_off(&mut self, cell: Cell, on: bool) -> Result<(), Vt100Error<U>> {
        let text = if on { " ON" } else { "OFF" };
        self.vt.put_string_at(cell.line, cell.col, text)
    }

    pub fn update_activation_mode(&mut self, activation: Activation) -> Result<(), Vt100Error<U>> {
        let otaa = activation.is_otaa();
        self.checkbox(layout::OTAA_CHECKBOX, otaa, Color::White)?;
        self.checkbox(layout::ABP_CHECKBOX, !otaa, Color::White)
    }

    /// Show an 8-byte EUI on `line` (see [`layout::DEV_EUI_LINE`])
    pub fn update_eui(&mut self, line: u8, eui: &[u8; 8]) -> Result<(), Vt100Error<U>> {
        let mut text: String<24> = String::new();
        push_hex_pairs(&mut text, eui);
        self.vt.put_string_at(line, layout::HEX_COL, &text)?;
        self.vt.put_char_at(line, layout::EUI_CLOSE_COL, b']')
    }

    /// Show a 16-byte key on `line` (see [`layout::APP_KEY_LINE`])
    pub fn update_key(&mut self, line: u8, key: &[u8; 16]) -> Result<(), Vt100Error<U>> {
        let mut text: String<48> = String::new();
        push_hex_pairs(&mut text, key);
        self.vt.put_string_at(line, layout::HEX_COL, &text)?;
        self.vt.put_char_at(line, layout::KEY_CLOSE_COL, b']')
    }

    pub fn update_nwk_id(&mut self, id: u8) -> Result<(), Vt100Error<U>> {
        self.put_field(layout::NWK_ID, layout::NWK_ID_WIDTH, format_args!("{:03}", id))
    }

    /// Device address, most significant byte first
    pub fn update_dev_addr(&mut self, addr: u32) -> Result<(), Vt100Error<U>> {
        let [b0, b1, b2, b3] = addr.to_be_bytes();
        self.put_field(
            layout::DEV_ADDR,
            layout::DEV_ADDR_WIDTH,
            format_args!("{:02X} {:02X} {:02X} {:02X}", b0, b1, b2, b3),
        )
    }

    pub fn update_frame_type(&mut self, confirmed: bool) -> Result<(), Vt100Error<U>> {
        self.checkbox(layout::CONFIRMED_CHECKBOX, confirmed, Color::White)?;
        self.checkbox(layout::UNCONFIRMED_CHECKBOX, !confirmed, Color::White)
    }

    pub fn update_adr(&mut self, adr: bool) -> Result<(), Vt100Error<U>> {
        self.on_off(layout::ADR, adr)
    }

    pub fn update_duty_cycle(&mut self, duty_cycle: bool) -> Result<(), Vt100Error<U>> {
        self.on_off(layout::DUTY_CYCLE, duty_cycle)
    }

    pub fn update_public_network(&mut self, public: bool) -> Result<(), Vt100Error<U>> {
        self.checkbox(layout::PUBLIC_CHECKBOX, public, Color::White)?;
        self.checkbox(layout::PRIVATE_CHECKBOX, !public, Color::White)
    }

    /// Red "joining" box until joined, then the green "joined" box
    pub fn update_join_state(&mut self, joined: bool) -> Result<(), Vt100Error<U>> {
        self.checkbox(layout::JOINING_CHECKBOX, !joined, Color::Red)?;
        self.checkbox(layout::JOINED_CHECKBOX, joined, Color::Green)
    }

    pub fn update_led_state(&mut self, led: Led, on: bool) -> Result<(), Vt100Error<U>> {
        let (cell, color) = match led {
            Led::Tx => (layout::LED_TX_CHECKBOX, Color::Red),
            Led::Rx => (layout::LED_RX_CHECKBOX, Color::Green),
            Led::App => (layout::LED_APP_CHECKBOX, Color::Blue),
        };
        self.checkbox(cell, on, color)
    }

    /// Same as [`SerialDisplay::update_led_state`] for a board LED number;
    /// unknown numbers draw nothing
    pub fn update_led_id_state(&mut self, id: u8, on: bool) -> Result<(), Vt100Error<U>> {
        match Led::from_id(id) {
            Some(led) => self.update_led_state(led, on),
            None => Ok(()),
        }
    }

    /// Show up to 64 payload bytes as a block starting at `line`
    pub fn update_data_bytes(&mut self, line: u8, data: &[u8]) -> Result<(), Vt100Error<U>> {
        for row in data::data_rows(line, data) {
            self.vt.put_string_at(row.line, row.col, &row.text)?;
        }
        let (line, col) = data::closing_bracket(line);
        self.vt.put_char_at(line, col, b']')
    }

    pub fn update_uplink_acked(&mut self, acked: bool) -> Result<(), Vt100Error<U>> {
        self.checkbox(layout::UPLINK_ACKED_CHECKBOX, acked, Color::Green)
    }

    /// Refresh the uplink section and the help line below the panel
    ///
    /// Datarates above DR99 do not fit their field and are cut to
    /// four columns.
    pub fn update_uplink(&mut self, uplink: &UplinkStatus<'_>) -> Result<(), Vt100Error<U>> {
        self.update_uplink_acked(uplink.acked)?;

        self.put_field(
            layout::UPLINK_DATARATE,
            layout::DATARATE_WIDTH,
            format_args!("DR{:<2}", uplink.datarate),
        )?;
        self.put_field(
            layout::UPLINK_COUNTER,
            layout::COUNTER_WIDTH,
            format_args!("{:>10}", uplink.counter),
        )?;
        self.put_field(
            layout::UPLINK_PORT,
            layout::PORT_WIDTH,
            format_args!("{:>3}", uplink.port),
        )?;

        self.update_data_bytes(layout::UPLINK_DATA_LINE, uplink.data)?;

        self.vt.put_string_at(layout::HELP_LINE, 1, layout::HELP_MESSAGE)
    }

    pub fn update_downlink_rx_data(&mut self, rx_data: bool) -> Result<(), Vt100Error<U>> {
        self.checkbox(layout::DOWNLINK_RX_CHECKBOX, rx_data, Color::Green)
    }

    /// Refresh the downlink section
    ///
    /// Port and payload are blanked when the downlink carried no data. An
    /// RSSI below -9999 does not fit its field and is cut to five columns.
    pub fn update_downlink(&mut self, downlink: &DownlinkStatus<'_>) -> Result<(), Vt100Error<U>> {
        self.update_downlink_rx_data(downlink.rx_data)?;

        self.put_field(
            layout::DOWNLINK_RSSI,
            layout::SIGNAL_WIDTH,
            format_args!("{:>5}", downlink.rssi),
        )?;
        self.put_field(
            layout::DOWNLINK_SNR,
            layout::SIGNAL_WIDTH,
            format_args!("{:>5}", downlink.snr),
        )?;
        self.put_field(
            layout::DOWNLINK_COUNTER,
            layout::COUNTER_WIDTH,
            format_args!("{:>10}", downlink.counter),
        )?;

        if downlink.rx_data {
            self.put_field(
                layout::DOWNLINK_PORT,
                layout::PORT_WIDTH,
                format_args!("{:>3}", downlink.port),
            )?;
            self.update_data_bytes(layout::DOWNLINK_DATA_LINE, downlink.data)
        } else {
            let cell = layout::DOWNLINK_PORT;
            self.vt.put_string_at(cell.line, cell.col, "   ")?;
            self.update_data_bytes(layout::DOWNLINK_DATA_LINE, &[])
        }
    }

    /// Check whether a key is waiting
    pub fn readable(&mut self) -> Result<bool, Vt100Error<U>> {
        self.vt.readable()
    }

    /// Read one key, blocking until it arrives
    pub fn read_key(&mut self) -> Result<u8, Vt100Error<U>> {
        self.vt.read_char()
    }

    /// Read a waiting key, if any, and map it to a command
    ///
    /// Returns `Ok(None)` without blocking when no key is waiting or the key
    /// has no meaning.
    pub fn poll_command(&mut self) -> Result<Option<Command>, Vt100Error<U>> {
        if !self.vt.readable()? {
            return Ok(None);
        }

        let key = self.vt.read_char()?;
        let command = Command::from_byte(key);

        #[cfg(feature = "defmt")]
        match command {
            Some(command) => defmt::debug!("Key {=u8} -> {:?}", key, command),
            None => defmt::trace!("Ignoring key {=u8}", key),
        }

        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use core::convert::Infallible;
    use loraterm_hal::{UartRx, UartTx};
    use std::collections::VecDeque;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockUart {
        tx: Vec<u8>,
        rx: VecDeque<u8>,
    }

    impl UartTx for MockUart {
        type Error = Infallible;

        fn is_writable(&mut self) -> Result<bool, Infallible> {
            Ok(true)
        }

        fn write_byte(&mut self, byte: u8) -> Result<(), Infallible> {
            self.tx.push(byte);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Infallible> {
            Ok(())
        }
    }

    impl UartRx for MockUart {
        type Error = Infallible;

        fn is_readable(&mut self) -> Result<bool, Infallible> {
            Ok(!self.rx.is_empty())
        }

        fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Infallible> {
            match self.rx.pop_front() {
                Some(byte) if !buf.is_empty() => {
                    buf[0] = byte;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    fn display() -> SerialDisplay<MockUart> {
        let mut display = SerialDisplay::with_uart(MockUart::default()).unwrap();
        display.terminal().uart_mut().tx.clear();
        display
    }

    fn take_output(display: &mut SerialDisplay<MockUart>) -> Vec<u8> {
        core::mem::take(&mut display.terminal().uart_mut().tx)
    }

    #[test]
    fn test_checkbox_sequences() {
        let mut display = display();
        display.update_uplink_acked(true).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[24;36H\x1B[0;32;42m \x1B[0m");

        display.update_uplink_acked(false).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[24;36H\x1B[0m \x1B[0m");
    }

    #[test]
    fn test_activation_mode_marks_one_box() {
        let mut display = display();
        display
            .update_activation_mode(Activation::OverTheAir)
            .unwrap();
        assert_eq!(
            take_output(&mut display),
            b"\x1B[4;17H\x1B[0;37;47m \x1B[0m\x1B[9;17H\x1B[0m \x1B[0m"
        );
    }

    #[test]
    fn test_join_state_colors() {
        let mut display = display();
        display.update_join_state(false).unwrap();
        assert_eq!(
            take_output(&mut display),
            b"\x1B[20;17H\x1B[0;31;41m \x1B[0m\x1B[20;30H\x1B[0m \x1B[0m"
        );
    }

    #[test]
    fn test_eui() {
        let mut display = display();
        display
            .update_eui(layout::DEV_EUI_LINE, &[0x00, 0x01, 0x02, 0x03, 0xA4, 0xB5, 0xC6, 0xFF])
            .unwrap();
        assert_eq!(
            take_output(&mut display),
            b"\x1B[5;27H00 01 02 03 A4 B5 C6 FF \x1B[5;50H]"
        );
    }

    #[test]
    fn test_key() {
        let mut display = display();
        let key: [u8; 16] = core::array::from_fn(|i| (i as u8) * 0x11);
        display.update_key(layout::APP_KEY_LINE, &key).unwrap();
        assert_eq!(
            take_output(&mut display),
            &b"\x1B[7;27H00 11 22 33 44 55 66 77 88 99 AA BB CC DD EE FF \x1B[7;74H]"[..]
        );
    }

    #[test]
    fn test_nwk_id_zero_padded() {
        let mut display = display();
        display.update_nwk_id(7).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[10;27H007");
    }

    #[test]
    fn test_dev_addr_big_endian() {
        let mut display = display();
        display.update_dev_addr(0x2601_1A0B).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[11;27H26 01 1A 0B");
    }

    #[test]
    fn test_adr_and_duty_cycle() {
        let mut display = display();
        display.update_adr(true).unwrap();
        display.update_duty_cycle(false).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[16;27H ON\x1B[17;27HOFF");
    }

    #[test]
    fn test_led_states() {
        let mut display = display();
        display.update_led_state(Led::App, true).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[22;45H\x1B[0;34;44m \x1B[0m");

        display.update_led_id_state(2, true).unwrap();
        assert_eq!(take_output(&mut display), b"\x1B[22;31H\x1B[0;32;42m \x1B[0m");

        display.update_led_id_state(9, true).unwrap();
        assert!(take_output(&mut display).is_empty());
    }

    #[test]
    fn test_uplink_fields() {
        let mut display = display();
        let uplink = UplinkStatus {
            acked: false,
            datarate: 5,
            counter: 1234,
            port: 2,
            data: &[],
        };
        display.update_uplink(&uplink).unwrap();
        let out = take_output(&mut display);
        let text = std::string::String::from_utf8(out).unwrap();

        assert!(text.contains("\x1B[25;33HDR5 "));
        assert!(text.contains("\x1B[26;27H      1234"));
        assert!(text.contains("\x1B[27;34H  2"));
        assert!(text.contains("\x1B[31;74H]"));
        assert!(text.ends_with("\x1B[42;1HTo refresh screen please hit 'r' key."));
    }

    #[test]
    fn test_uplink_datarate_stays_in_field() {
        let mut display = display();
        let uplink = UplinkStatus {
            acked: false,
            datarate: u8::MAX,
            counter: u32::MAX,
            port: u8::MAX,
            data: &[],
        };
        display.update_uplink(&uplink).unwrap();
        let text = std::string::String::from_utf8(take_output(&mut display)).unwrap();

        assert!(text.contains("\x1B[25;33HDR25\x1B[26;27H4294967295\x1B[27;34H255\x1B"));
    }

    #[test]
    fn test_downlink_rssi_stays_in_field() {
        let mut display = display();
        let downlink = DownlinkStatus {
            rx_data: false,
            rssi: i16::MIN,
            snr: i8::MIN,
            counter: 0,
            port: 0,
            data: &[],
        };
        display.update_downlink(&downlink).unwrap();
        let text = std::string::String::from_utf8(take_output(&mut display)).unwrap();

        assert!(text.contains("\x1B[33;32H-3276\x1B[34;32H -128\x1B[35;27H"));
    }

    #[test]
    fn test_downlink_without_data_blanks_port() {
        let mut display = display();
        let downlink = DownlinkStatus {
            rx_data: false,
            rssi: -112,
            snr: -7,
            counter: 3,
            port: 10,
            data: &[1, 2, 3],
        };
        display.update_downlink(&downlink).unwrap();
        let text = std::string::String::from_utf8(take_output(&mut display)).unwrap();

        assert!(text.starts_with("\x1B[34;4H\x1B[0m \x1B[0m"));
        assert!(text.contains("\x1B[33;32H -112"));
        assert!(text.contains("\x1B[34;32H   -7"));
        assert!(text.contains("\x1B[35;27H         3"));
        assert!(text.contains("\x1B[36;34H   "));
        assert!(!text.contains("01 02 03"));
        assert_eq!(text.matches("__ ").count(), 64);
    }

    #[test]
    fn test_downlink_with_data() {
        let mut display = display();
        let downlink = DownlinkStatus {
            rx_data: true,
            rssi: -40,
            snr: 9,
            counter: 12,
            port: 224,
            data: &[0xCA, 0xFE],
        };
        display.update_downlink(&downlink).unwrap();
        let text = std::string::String::from_utf8(take_output(&mut display)).unwrap();

        assert!(text.contains("\x1B[36;34H224"));
        assert!(text.contains("\x1B[37;27HCA FE __ "));
        assert!(text.ends_with("\x1B[40;74H]"));
    }

    #[test]
    fn test_poll_command() {
        let mut display = display();
        assert_eq!(display.poll_command().unwrap(), None);

        display.terminal().uart_mut().rx.extend([b'x', b'r']);
        assert_eq!(display.poll_command().unwrap(), None);
        assert_eq!(display.poll_command().unwrap(), Some(Command::Refresh));
        assert!(!display.readable().unwrap());
    }

    #[test]
    fn test_read_key() {
        let mut display = display();
        display.terminal().uart_mut().rx.push_back(b'q');
        assert!(display.readable().unwrap());
        assert_eq!(display.read_key().unwrap(), b'q');
    }
}
