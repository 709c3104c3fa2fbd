//! Bounded text buffers
//!
//! Display strings live in fixed-capacity `heapless::String`s. Writers here
//! truncate at capacity instead of failing, so an oversized value still
//! shows its leading characters.

use core::fmt;

use heapless::String;

/// `fmt::Write` adapter that drops whatever does not fit
pub struct Truncating<'a, const N: usize> {
    buf: &'a mut String<N>,
    truncated: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    pub fn new(buf: &'a mut String<N>) -> Self {
        Self {
            buf,
            truncated: false,
        }
    }

    /// True if any character was dropped
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.truncated = true;
                break;
            }
        }
        Ok(())
    }
}

/// Format into a fresh bounded string, truncating at capacity
pub fn format_truncated<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut out = String::new();
    // Truncating never reports an error
    let _ = fmt::write(&mut Truncating::new(&mut out), args);
    out
}

/// Copy `src` into a bounded string, truncating at capacity
pub fn copy_truncated<const N: usize>(src: &str) -> String<N> {
    format_truncated(format_args!("{}", src))
}
