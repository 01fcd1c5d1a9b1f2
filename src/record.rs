//! A single log record
//!
//! Borrowed view of one log call: severity, call site, and the message
//! text. Built per call and dropped when the call returns; nothing is
//! retained.

use crate::level::Level;

/// One log call's worth of data, handed to an encoder.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Severity of this record.
    pub level: Level,
    /// Source file path as captured by `file!()`.
    pub file: &'a str,
    /// Source line as captured by `line!()`.
    pub line: u32,
    /// Enclosing function name. Not captured yet; kept for the encoders'
    /// field layout to grow into.
    pub function: Option<&'a str>,
    /// Message text, markup included.
    pub message: &'a str,
}

impl<'a> Record<'a> {
    /// Final path component of the source file, with either `/` or `\`
    /// separators stripped.
    pub fn file_name(&self) -> &'a str {
        short_file_name(self.file)
    }
}

/// Reduce a path to its final component.
pub fn short_file_name(path: &str) -> &str {
    match path.rfind(|c| c == '/' || c == '\\') {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_file_name_unix() {
        assert_eq!(short_file_name("src/logging/file.rs"), "file.rs");
        assert_eq!(short_file_name("/abs/path/main.rs"), "main.rs");
    }

    #[test]
    fn test_short_file_name_windows() {
        assert_eq!(short_file_name("src\\logging\\file.rs"), "file.rs");
        assert_eq!(short_file_name("C:\\code\\main.rs"), "main.rs");
    }

    #[test]
    fn test_short_file_name_bare() {
        assert_eq!(short_file_name("main.rs"), "main.rs");
        assert_eq!(short_file_name(""), "");
    }

    #[test]
    fn test_record_file_name() {
        let record = Record {
            level: Level::Info,
            file: "src/deep/nested/module.rs",
            line: 7,
            function: None,
            message: "hello",
        };
        assert_eq!(record.file_name(), "module.rs");
    }
}
