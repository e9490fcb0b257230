//! Adapter from `embedded-io` byte streams to the UART traits
//!
//! Most HALs (embassy, esp-hal, rp-hal, ...) expose their blocking UARTs
//! through `embedded-io`. Wrapping one in [`EmbeddedIoUart`] is all that is
//! needed to drive the terminal from it.

use embedded_io::{Read, ReadReady, Write, WriteReady};

use crate::uart::{UartRx, UartTx};

/// UART backed by an `embedded-io` stream
#[derive(Debug)]
pub struct EmbeddedIoUart<T> {
    inner: T,
}

impl<T> EmbeddedIoUart<T> {
    /// Wrap a stream
    pub const fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped stream
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the wrapped stream
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwrap the stream
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> UartTx for EmbeddedIoUart<T>
where
    T: Write + WriteReady,
{
    type Error = T::Error;

    fn is_writable(&mut self) -> Result<bool, Self::Error> {
        self.inner.write_ready()
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        self.inner.write_all(&[byte])
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.inner.flush()
    }
}

impl<T> UartRx for EmbeddedIoUart<T>
where
    T: Read + ReadReady,
{
    type Error = T::Error;

    fn is_readable(&mut self) -> Result<bool, Self::Error> {
        self.inner.read_ready()
    }

    fn read_blocking(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.inner.read(buf)
    }
}
