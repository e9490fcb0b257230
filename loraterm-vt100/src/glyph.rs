//! Line-drawing glyphs
//!
//! While the terminal's G0 set is switched to DEC special graphics
//! (`ESC ( 0`), lowercase letters render as box-drawing pieces. Each glyph
//! is emitted on its own, wrapped in the switch and the switch back to
//! ASCII (`ESC ( B`), so a dropped byte never leaves the terminal in
//! graphics mode.

/// A single box-drawing character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoxGlyph {
    /// ┌
    TopLeft,
    /// ┐
    TopRight,
    /// └
    BottomLeft,
    /// ┘
    BottomRight,
    /// ─
    Horizontal,
    /// │
    Vertical,
    /// ├
    TeeRight,
    /// ┤
    TeeLeft,
    /// ┬
    TeeDown,
    /// ┴
    TeeUp,
    /// ┼
    Cross,
    /// Blank cell drawn through the graphics set
    Blank,
}

impl BoxGlyph {
    /// Character selecting this glyph in the DEC special graphics set
    pub const fn to_byte(self) -> u8 {
        match self {
            BoxGlyph::TopLeft => b'l',
            BoxGlyph::TopRight => b'k',
            BoxGlyph::BottomLeft => b'm',
            BoxGlyph::BottomRight => b'j',
            BoxGlyph::Horizontal => b'q',
            BoxGlyph::Vertical => b'x',
            BoxGlyph::TeeRight => b't',
            BoxGlyph::TeeLeft => b'u',
            BoxGlyph::TeeDown => b'w',
            BoxGlyph::TeeUp => b'v',
            BoxGlyph::Cross => b'n',
            BoxGlyph::Blank => b' ',
        }
    }
}
