//! ANSI color table shared by the markup renderer and the encoders
//!
//! One fixed mapping from single-character markup keys to escape sequences,
//! so every call site emits identical bytes for the same color.

/// Red foreground.
pub const RED: &str = "\x1b[31m";
/// Green foreground.
pub const GREEN: &str = "\x1b[32m";
/// Yellow foreground.
pub const YELLOW: &str = "\x1b[33m";
/// Blue foreground.
pub const BLUE: &str = "\x1b[34m";
/// Reset to the terminal default.
pub const RESET: &str = "\x1b[0m";

/// Look up the escape sequence for a markup color key.
///
/// Returns `None` for characters outside the table; the renderer treats
/// those as ordinary literal text.
pub const fn code_for(key: char) -> Option<&'static str> {
    match key {
        'r' => Some(RED),
        'g' => Some(GREEN),
        'y' => Some(YELLOW),
        'b' => Some(BLUE),
        'd' => Some(RESET),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(code_for('r'), Some(RED));
        assert_eq!(code_for('g'), Some(GREEN));
        assert_eq!(code_for('y'), Some(YELLOW));
        assert_eq!(code_for('b'), Some(BLUE));
        assert_eq!(code_for('d'), Some(RESET));
    }

    #[test]
    fn test_unknown_keys_are_not_colors() {
        assert_eq!(code_for('x'), None);
        assert_eq!(code_for('|'), None);
        assert_eq!(code_for('R'), None);
    }
}
