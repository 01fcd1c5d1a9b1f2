//! Fixed-capacity text buffers for the logging hot path
//!
//! Every stage of a log call (argument expansion, markup rendering, line
//! encoding) writes into one of these instead of allocating. Overflow is
//! handled by silent truncation: the buffer stays valid UTF-8 and never
//! grows past its declared capacity.

use std::fmt;

/// Capacity of the message-expansion buffer (formatted arguments).
pub const MSG_CAPACITY: usize = 256;

/// Capacity of the final encoded-line buffer.
pub const LINE_CAPACITY: usize = 512;

/// A fixed-capacity UTF-8 text buffer with truncation-safe writes.
///
/// Once a write does not fit, the overflowing tail is dropped at a char
/// boundary and the buffer stops accepting input entirely, so truncation
/// never interleaves later fragments after a dropped one.
#[derive(Debug, Clone)]
pub struct LineBuffer<const N: usize> {
    buf: [u8; N],
    len: usize,
    truncated: bool,
}

impl<const N: usize> LineBuffer<N> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self {
            buf: [0; N],
            len: 0,
            truncated: false,
        }
    }

    /// Number of content bytes currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the buffer holds no content.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total capacity in bytes.
    pub fn capacity(&self) -> usize {
        N
    }

    /// Whether any write has been truncated.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Discard all content and re-arm the buffer for writing.
    pub fn clear(&mut self) {
        self.len = 0;
        self.truncated = false;
    }

    /// View the content as a string slice.
    pub fn as_str(&self) -> &str {
        // len always lands on a char boundary, so this cannot fail
        std::str::from_utf8(&self.buf[..self.len]).unwrap_or_default()
    }

    /// Append a string, truncating at a char boundary if it does not fit.
    ///
    /// Returns `false` once the buffer is in the truncated state.
    pub fn push_str(&mut self, s: &str) -> bool {
        if self.truncated {
            return false;
        }
        let avail = N - self.len;
        if s.len() <= avail {
            self.buf[self.len..self.len + s.len()].copy_from_slice(s.as_bytes());
            self.len += s.len();
            true
        } else {
            let mut take = avail;
            while take > 0 && !s.is_char_boundary(take) {
                take -= 1;
            }
            self.buf[self.len..self.len + take].copy_from_slice(s[..take].as_bytes());
            self.len += take;
            self.truncated = true;
            false
        }
    }

    /// Append a string only if it fits in full, otherwise mark the buffer
    /// truncated without writing anything.
    ///
    /// Used for ANSI control sequences, which must never be split.
    pub fn push_exact(&mut self, s: &str) -> bool {
        if self.truncated {
            return false;
        }
        if s.len() <= N - self.len {
            self.push_str(s)
        } else {
            self.truncated = true;
            false
        }
    }

    /// Append a single character, truncating if it does not fit.
    pub fn push_char(&mut self, c: char) -> bool {
        let mut tmp = [0u8; 4];
        self.push_str(c.encode_utf8(&mut tmp))
    }
}

impl<const N: usize> Default for LineBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Write for LineBuffer<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Truncation is silent by contract, so this never reports an error;
        // a fmt::Error here would abort write! mid-stream instead.
        self.push_str(s);
        Ok(())
    }
}

impl<const N: usize> fmt::Display for LineBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
