//! Text attributes, colors and erase modes

/// Select Graphic Rendition parameters understood by VT100 terminals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextAttribute {
    /// All attributes off
    Off,
    Bold,
    Underscore,
    Blink,
    Reverse,
    BoldOff,
    UnderscoreOff,
    BlinkOff,
    ReverseOff,
}

// Wire format values
const SGR_OFF: u8 = 0;
const SGR_BOLD: u8 = 1;
const SGR_UNDERSCORE: u8 = 4;
const SGR_BLINK: u8 = 5;
const SGR_REVERSE: u8 = 7;
const SGR_BOLD_OFF: u8 = 21;
const SGR_UNDERSCORE_OFF: u8 = 24;
const SGR_BLINK_OFF: u8 = 25;
const SGR_REVERSE_OFF: u8 = 27;

impl TextAttribute {
    /// Every attribute, in parameter order
    pub const ALL: [TextAttribute; 9] = [
        TextAttribute::Off,
        TextAttribute::Bold,
        TextAttribute::Underscore,
        TextAttribute::Blink,
        TextAttribute::Reverse,
        TextAttribute::BoldOff,
        TextAttribute::UnderscoreOff,
        TextAttribute::BlinkOff,
        TextAttribute::ReverseOff,
    ];

    /// Convert to SGR parameter
    pub fn to_byte(self) -> u8 {
        match self {
            TextAttribute::Off => SGR_OFF,
            TextAttribute::Bold => SGR_BOLD,
            TextAttribute::Underscore => SGR_UNDERSCORE,
            TextAttribute::Blink => SGR_BLINK,
            TextAttribute::Reverse => SGR_REVERSE,
            TextAttribute::BoldOff => SGR_BOLD_OFF,
            TextAttribute::UnderscoreOff => SGR_UNDERSCORE_OFF,
            TextAttribute::BlinkOff => SGR_BLINK_OFF,
            TextAttribute::ReverseOff => SGR_REVERSE_OFF,
        }
    }
}

/// The eight ANSI base colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Brown = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

/// Foreground colors start at SGR 30
const FOREGROUND_BASE: u8 = 30;
/// Background colors start at SGR 40
const BACKGROUND_BASE: u8 = 40;

impl Color {
    /// Every color, in index order
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Brown,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Color index (0-7)
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// SGR parameter selecting this color as foreground
    pub const fn foreground(self) -> u8 {
        FOREGROUND_BASE + self as u8
    }

    /// SGR parameter selecting this color as background
    pub const fn background(self) -> u8 {
        BACKGROUND_BASE + self as u8
    }
}

/// Erase direction for `ESC [ Ps J` and `ESC [ Ps K`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EraseMode {
    /// From the cursor to the end, inclusive
    ToEnd,
    /// From the start to the cursor, inclusive
    ToStart,
    /// Everything
    All,
}

impl From<EraseMode> for u8 {
    fn from(mode: EraseMode) -> u8 {
        match mode {
            EraseMode::ToEnd => 0,
            EraseMode::ToStart => 1,
            EraseMode::All => 2,
        }
    }
}
