//! Bounded formatting buffers
//!
//! Formatted output is measured before it is rendered. Anything up to
//! [`STRING_STACK_LIMIT`] bytes is rendered into a stack buffer; longer
//! output goes to a heap buffer that is dropped as soon as it has been
//! transmitted. Without the `alloc` feature longer output is rejected.

use core::fmt::{self, Write};

use heapless::String;

/// Largest formatted output rendered on the stack
pub const STRING_STACK_LIMIT: usize = 120;

/// Errors that can occur while rendering formatted output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FormatError {
    /// A formatting trait implementation returned an error
    Format,
    /// Output does not fit the stack buffer and no heap is available
    Overflow { len: usize },
}

/// `fmt::Write` sink that only counts bytes
struct LengthCounter {
    len: usize,
}

impl Write for LengthCounter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.len += s.len();
        Ok(())
    }
}

/// Number of bytes `args` formats to
pub fn formatted_len(args: fmt::Arguments<'_>) -> Result<usize, FormatError> {
    let mut counter = LengthCounter { len: 0 };
    counter.write_fmt(args).map_err(|_| FormatError::Format)?;
    Ok(counter.len)
}

/// Rendered output, wherever it ended up
#[derive(Debug)]
pub enum Formatted {
    Stack(String<STRING_STACK_LIMIT>),
    #[cfg(feature = "alloc")]
    Heap(alloc::string::String),
}

impl Formatted {
    /// Rendered bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Formatted::Stack(s) => s.as_bytes(),
            #[cfg(feature = "alloc")]
            Formatted::Heap(s) => s.as_bytes(),
        }
    }

    /// Rendered length in bytes
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Returns true if nothing was rendered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns true if the output needed the heap
    pub fn is_heap(&self) -> bool {
        !matches!(self, Formatted::Stack(_))
    }
}

/// Render `args`, choosing the buffer by measured length
pub fn render(args: fmt::Arguments<'_>) -> Result<Formatted, FormatError> {
    let len = formatted_len(args)?;

    if len <= STRING_STACK_LIMIT {
        let mut s = String::new();
        s.write_fmt(args).map_err(|_| FormatError::Format)?;
        return Ok(Formatted::Stack(s));
    }

    render_heap(args, len)
}

#[cfg(feature = "alloc")]
fn render_heap(args: fmt::Arguments<'_>, len: usize) -> Result<Formatted, FormatError> {
    let mut s = alloc::string::String::with_capacity(len);
    s.write_fmt(args).map_err(|_| FormatError::Format)?;
    Ok(Formatted::Heap(s))
}

#[cfg(not(feature = "alloc"))]
fn render_heap(_args: fmt::Arguments<'_>, len: usize) -> Result<Formatted, FormatError> {
    Err(FormatError::Overflow { len })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl fmt::Display for Failing {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn test_formatted_len() {
        assert_eq!(formatted_len(format_args!("DR{}", 5)).unwrap(), 3);
        assert_eq!(formatted_len(format_args!("{:10}", 42)).unwrap(), 10);
        assert_eq!(formatted_len(format_args!("")).unwrap(), 0);
    }

    #[test]
    fn test_short_output_stays_on_stack() {
        let out = render(format_args!("{:02X} ", 0xAB)).unwrap();
        assert!(!out.is_heap());
        assert_eq!(out.as_bytes(), b"AB ");
    }

    #[test]
    fn test_exact_limit_stays_on_stack() {
        let out = render(format_args!("{:1$}", "", STRING_STACK_LIMIT)).unwrap();
        assert!(!out.is_heap());
        assert_eq!(out.len(), STRING_STACK_LIMIT);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_long_output_uses_heap() {
        let out = render(format_args!("{:>1$}", "x", STRING_STACK_LIMIT + 1)).unwrap();
        assert!(out.is_heap());
        assert_eq!(out.len(), STRING_STACK_LIMIT + 1);
        assert_eq!(out.as_bytes()[STRING_STACK_LIMIT], b'x');
    }

    #[cfg(not(feature = "alloc"))]
    #[test]
    fn test_long_output_overflows_without_heap() {
        let result = render(format_args!("{:>1$}", "x", STRING_STACK_LIMIT + 1));
        assert_eq!(
            result.err(),
            Some(FormatError::Overflow {
                len: STRING_STACK_LIMIT + 1
            })
        );
    }

    #[test]
    fn test_failing_display() {
        assert_eq!(
            render(format_args!("{}", Failing)).err(),
            Some(FormatError::Format)
        );
    }
}
