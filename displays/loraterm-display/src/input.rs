//! Keyboard commands typed on the terminal

/// Single-key commands understood by the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Repaint the whole panel
    Refresh,
}

// Wire format values
const KEY_REFRESH: u8 = b'r';

impl Command {
    /// Parse a command from the key that was typed
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            KEY_REFRESH => Some(Command::Refresh),
            _ => None,
        }
    }

    /// Key that triggers this command
    pub fn to_byte(self) -> u8 {
        match self {
            Command::Refresh => KEY_REFRESH,
        }
    }
}
