//! UART serial communication abstractions
//!
//! Provides traits for blocking serial communication that can be
//! implemented by chip-specific HALs.

/// UART transmitter
///
/// Transmission is byte oriented: every byte waits for the transmit slot
/// to become free before it is handed to the peripheral.
pub trait UartTx {
    /// Error type for transmit operations
    type Error;

    /// Check whether the transmit slot can accept another byte
    fn is_writable(&mut self) -> Result<bool, Self::Error>;

    /// Hand a single byte to the peripheral
    ///
    /// Callers must only invoke this once [`UartTx::is_writable`] returned
    /// `true`; [`UartTx::write_blocking`] takes care of that.
    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error>;

    /// Write data to the UART
    ///
    /// Blocks until all data has been written or an error occurs. There is
    /// no timeout: a transport that never becomes writable blocks forever.
    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        for &byte in data {
            while !self.is_writable()? {
                core::hint::spin_loop();
            }
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Flush any buffered data
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// UART receiver
pub trait UartRx {
    /// Error type for receive operations
    type Error;

    /// Check whether at least one byte can be read without blocking
    fn is_readable(&mut self) -> Result<bool, Self::Error>;

    /// Read data from the UART
    ///
    /// Blocks until at least one byte is available, then returns how many
    /// bytes were placed in `buf`.
    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;

    /// Read a single byte from the UART
    fn read_byte(&mut self) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        while self.read_blocking(&mut buf)? == 0 {}
        Ok(buf[0])
    }
}

/// Combined UART interface
///
/// For UARTs that provide both TX and RX on a single peripheral and report
/// failures through one error type.
pub trait Uart: UartTx + UartRx<Error = <Self as UartTx>::Error> {}

// Blanket implementation
impl<T> Uart for T where T: UartTx + UartRx<Error = <T as UartTx>::Error> {}

/// UART configuration
///
/// The display link is fixed at initialization; the defaults match the
/// debug port of the demo boards. The transport is expected to be set up
/// with these settings before it is handed to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UartConfig {
    /// Baud rate in bits per second
    pub baudrate: u32,
    /// Number of data bits (typically 8)
    pub data_bits: DataBits,
    /// Parity mode
    pub parity: Parity,
    /// Number of stop bits
    pub stop_bits: StopBits,
}

impl Default for UartConfig {
    fn default() -> Self {
        Self {
            baudrate: 115200,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }
}

impl UartConfig {
    /// 8N1 framing at the given baud rate
    pub const fn with_baudrate(baudrate: u32) -> Self {
        Self {
            baudrate,
            data_bits: DataBits::Eight,
            parity: Parity::None,
            stop_bits: StopBits::One,
        }
    }

}

/// Number of data bits per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataBits {
    Seven,
    Eight,
    Nine,
}

/// Parity mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Parity {
    None,
    Even,
    Odd,
}

/// Number of stop bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopBits {
    One,
    Two,
}
