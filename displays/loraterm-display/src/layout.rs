//! Fixed panel layout
//!
//! The panel is 80 columns wide and 41 rows tall, followed by a help line.
//! Every content row is `│ <12-column label> │ <65-column body> │`, and the
//! field coordinates below point into the literal rows, so the two must
//! change together.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────────┐
//! │                      LoRaWAN Demonstration Application                       │
//! ├────────────┬─────────────────────────────────────────────────────────────────┤
//! │ Activation │ [ ]Over The Air                                                 │
//! │            │ DevEui    [__ __ __ __ __ __ __ __]                             │
//! ...
//! ├────────────┼─────────────────────────────────────────────────────────────────┤
//! │ Downlink   │ RSSI           [     ] dBm                                      │
//! ...
//! └────────────┴─────────────────────────────────────────────────────────────────┘
//! ```

use loraterm_vt100::BoxGlyph;

/// Panel width including both borders
pub const PANEL_COLS: usize = 80;

/// Width of the label column
pub const LABEL_COLS: usize = 12;

/// Width of the body column
pub const BODY_COLS: usize = 65;

/// Number of rows in [`PANEL`]
pub const PANEL_ROWS: usize = 41;

/// Printed below the panel and after every uplink refresh
pub const HELP_MESSAGE: &str = "To refresh screen please hit 'r' key.";

/// Line of the help message (the row right below the panel)
pub const HELP_LINE: u8 = 42;

/// Panel title, centered in the 78 inner columns
pub const TITLE: &str =
    "                      LoRaWAN Demonstration Application                       ";

/// A 1-based terminal coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub line: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(line: u8, col: u8) -> Self {
        Self { line, col }
    }
}

/// A horizontal rule drawn entirely from box glyphs
///
/// Renders as `left`, 12 × `label_fill`, `joint`, 65 × `body_fill`, `right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub left: BoxGlyph,
    pub label_fill: BoxGlyph,
    pub joint: BoxGlyph,
    pub body_fill: BoxGlyph,
    pub right: BoxGlyph,
}

pub const TOP_BORDER: Rule = Rule {
    left: BoxGlyph::TopLeft,
    label_fill: BoxGlyph::Horizontal,
    joint: BoxGlyph::Horizontal,
    body_fill: BoxGlyph::Horizontal,
    right: BoxGlyph::TopRight,
};

/// Below the title, where the label column starts
pub const HEADER_SEPARATOR: Rule = Rule {
    left: BoxGlyph::TeeRight,
    label_fill: BoxGlyph::Horizontal,
    joint: BoxGlyph::TeeDown,
    body_fill: BoxGlyph::Horizontal,
    right: BoxGlyph::TeeLeft,
};

/// Splits the body column only, leaving the label column open
pub const SUBSECTION_SEPARATOR: Rule = Rule {
    left: BoxGlyph::Vertical,
    label_fill: BoxGlyph::Blank,
    joint: BoxGlyph::TeeRight,
    body_fill: BoxGlyph::Horizontal,
    right: BoxGlyph::TeeLeft,
};

pub const SECTION_SEPARATOR: Rule = Rule {
    left: BoxGlyph::TeeRight,
    label_fill: BoxGlyph::Horizontal,
    joint: BoxGlyph::Cross,
    body_fill: BoxGlyph::Horizontal,
    right: BoxGlyph::TeeLeft,
};

pub const BOTTOM_BORDER: Rule = Rule {
    left: BoxGlyph::BottomLeft,
    label_fill: BoxGlyph::Horizontal,
    joint: BoxGlyph::TeeUp,
    body_fill: BoxGlyph::Horizontal,
    right: BoxGlyph::BottomRight,
};

/// One row of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Rule(Rule),
    /// Title text between two vertical bars
    Title(&'static str),
    /// Label and body columns
    Fields(&'static str, &'static str),
}

/// The full panel, top to bottom (terminal lines 1 to 41)
pub const PANEL: [Row; PANEL_ROWS] = [
    Row::Rule(TOP_BORDER),
    Row::Title(TITLE),
    Row::Rule(HEADER_SEPARATOR),
    Row::Fields(" Activation ", " [ ]Over The Air                                                 "),
    Row::Fields("            ", " DevEui    [__ __ __ __ __ __ __ __]                             "),
    Row::Fields("            ", " AppEui    [__ __ __ __ __ __ __ __]                             "),
    Row::Fields("            ", " AppKey    [__ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __]     "),
    Row::Rule(SUBSECTION_SEPARATOR),
    Row::Fields("            ", " [ ]Personalisation                                              "),
    Row::Fields("            ", " NwkId     [___]                                                 "),
    Row::Fields("            ", " DevAddr   [__ __ __ __]                                         "),
    Row::Fields("            ", " NwkSKey   [__ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __]     "),
    Row::Fields("            ", " AppSKey   [__ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __]     "),
    Row::Rule(SECTION_SEPARATOR),
    Row::Fields(" MAC params ", " [ ]Confirmed / [ ]Unconfirmed                                   "),
    Row::Fields("            ", " ADR       [   ]                                                 "),
    Row::Fields("            ", " Duty cycle[   ]                                                 "),
    Row::Rule(SECTION_SEPARATOR),
    Row::Fields(" Network    ", " [ ]Public  / [ ]Private                                         "),
    Row::Fields("            ", " [ ]Joining / [ ]Joined                                          "),
    Row::Rule(SECTION_SEPARATOR),
    Row::Fields(" LED status ", " [ ]LED1(Tx) / [ ]LED2(Rx) / [ ]LED3(App)                        "),
    Row::Rule(SECTION_SEPARATOR),
    Row::Fields(" Uplink     ", " Acked              [ ]                                          "),
    Row::Fields("            ", " Datarate        [    ]                                          "),
    Row::Fields("            ", " Counter   [          ]                                          "),
    Row::Fields("            ", " Port             [   ]                                          "),
    Row::Fields("            ", " Data      [__ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Fields("            ", "            __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Fields("            ", "            __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Fields("            ", "            __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Rule(SECTION_SEPARATOR),
    Row::Fields(" Downlink   ", " RSSI           [     ] dBm                                      "),
    Row::Fields(" [ ]Data    ", " SNR            [     ] dB                                       "),
    Row::Fields("            ", " Counter   [          ]                                          "),
    Row::Fields("            ", " Port             [   ]                                          "),
    Row::Fields("            ", " Data      [__ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Fields("            ", "            __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Fields("            ", "            __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Fields("            ", "            __ __ __ __ __ __ __ __ __ __ __ __ __ __ __ __      "),
    Row::Rule(BOTTOM_BORDER),
];

// Field coordinates

pub const OTAA_CHECKBOX: Cell = Cell::new(4, 17);
pub const ABP_CHECKBOX: Cell = Cell::new(9, 17);

/// First column of every hex field
pub const HEX_COL: u8 = 27;
/// Closing bracket of the 8-byte EUI fields
pub const EUI_CLOSE_COL: u8 = 50;
/// Closing bracket of the 16-byte key fields and the data blocks
pub const KEY_CLOSE_COL: u8 = 74;

pub const DEV_EUI_LINE: u8 = 5;
pub const APP_EUI_LINE: u8 = 6;
pub const APP_KEY_LINE: u8 = 7;
pub const NWK_SKEY_LINE: u8 = 12;
pub const APP_SKEY_LINE: u8 = 13;

pub const NWK_ID: Cell = Cell::new(10, 27);
pub const NWK_ID_WIDTH: usize = 3;
pub const DEV_ADDR: Cell = Cell::new(11, 27);
pub const DEV_ADDR_WIDTH: usize = 11;

pub const CONFIRMED_CHECKBOX: Cell = Cell::new(15, 17);
pub const UNCONFIRMED_CHECKBOX: Cell = Cell::new(15, 32);
pub const ADR: Cell = Cell::new(16, 27);
pub const DUTY_CYCLE: Cell = Cell::new(17, 27);

pub const PUBLIC_CHECKBOX: Cell = Cell::new(19, 17);
pub const PRIVATE_CHECKBOX: Cell = Cell::new(19, 30);
pub const JOINING_CHECKBOX: Cell = Cell::new(20, 17);
pub const JOINED_CHECKBOX: Cell = Cell::new(20, 30);

pub const LED_TX_CHECKBOX: Cell = Cell::new(22, 17);
pub const LED_RX_CHECKBOX: Cell = Cell::new(22, 31);
pub const LED_APP_CHECKBOX: Cell = Cell::new(22, 45);

pub const UPLINK_ACKED_CHECKBOX: Cell = Cell::new(24, 36);
pub const UPLINK_DATARATE: Cell = Cell::new(25, 33);
pub const DATARATE_WIDTH: usize = 4;
pub const UPLINK_COUNTER: Cell = Cell::new(26, 27);
pub const UPLINK_PORT: Cell = Cell::new(27, 34);
pub const UPLINK_DATA_LINE: u8 = 28;

pub const DOWNLINK_RSSI: Cell = Cell::new(33, 32);
pub const DOWNLINK_RX_CHECKBOX: Cell = Cell::new(34, 4);
pub const DOWNLINK_SNR: Cell = Cell::new(34, 32);
/// RSSI and SNR share the same field width
pub const SIGNAL_WIDTH: usize = 5;
pub const DOWNLINK_COUNTER: Cell = Cell::new(35, 27);
pub const DOWNLINK_PORT: Cell = Cell::new(36, 34);
pub const DOWNLINK_DATA_LINE: u8 = 37;

/// Frame counters, both directions
pub const COUNTER_WIDTH: usize = 10;
/// Application ports, both directions
pub const PORT_WIDTH: usize = 3;
