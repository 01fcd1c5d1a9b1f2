//! Inline color-markup engine
//!
//! Messages may contain `key|...|` runs: a color-table key immediately
//! followed by the separator opens a color region, a lone separator closes
//! it, and a doubled separator `||` is one literal `|`. Validation and
//! rendering are both single left-to-right scans over the same grammar.

use crate::buffer::LineBuffer;
use crate::color;

/// The markup separator character.
pub const SEPARATOR: char = '|';

/// Check that a message's markup is well-formed.
///
/// A message is well-formed when its unescaped separators pair up: every
/// opened color region has a close. Doubled separators are escapes and do
/// not count. This is a `const fn` so call-site macros can evaluate it at
/// compile time over literal format strings, with the exact same result
/// the runtime check produces — the two can never diverge.
pub const fn is_well_formed(input: &str) -> bool {
    let bytes = input.as_bytes();
    let mut i = 0;
    let mut separators = 0u32;
    while i < bytes.len() {
        if bytes[i] == b'|' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'|' {
                // escaped literal separator
                i += 2;
                continue;
            }
            separators += 1;
        }
        i += 1;
    }
    // Greedy escape pairing means two adjacent unescaped separators cannot
    // survive the scan, so well-formedness reduces to an even count.
    separators % 2 == 0
}

/// Render a markup message into `out`, expanding tags to ANSI sequences.
///
/// Tag recognition is independent of `color_enabled`; the flag only gates
/// whether control sequences are emitted. With color disabled this strips
/// markup entirely, leaving just the literal text. The scan stops as soon
/// as `out` reports truncation; overflow is silent.
pub fn render_markup<const N: usize>(input: &str, color_enabled: bool, out: &mut LineBuffer<N>) {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() && !out.is_truncated() {
        if bytes[i] == b'|' {
            if i + 1 < bytes.len() && bytes[i + 1] == b'|' {
                // escaped literal separator
                out.push_char('|');
                i += 2;
                continue;
            }
            // lone separator closes the open color region
            if color_enabled {
                out.push_exact(color::RESET);
            }
            i += 1;
            continue;
        }
        if i + 1 < bytes.len() && bytes[i + 1] == b'|' {
            if let Some(code) = color::code_for(bytes[i] as char) {
                if color_enabled {
                    out.push_exact(code);
                }
                i += 2;
                continue;
            }
            // unrecognized key: fall through and copy it as literal text
        }
        // literal character, copied whole (may be multi-byte)
        let start = i;
        i += 1;
        while i < bytes.len() && !input.is_char_boundary(i) {
            i += 1;
        }
        out.push_str(&input[start..i]);
    }
}

/// Strip markup from a message, keeping only the literal text.
///
/// Same scan as [`render_markup`] with emission of control sequences
/// suppressed; used by the structured encoders, whose payloads must not
/// carry raw control bytes.
pub fn strip_markup<const N: usize>(input: &str, out: &mut LineBuffer<N>) {
    render_markup(input, false, out);
}
