//! Call-site logging macros
//!
//! Capture `file!()` and `line!()` at the call site and forward the format
//! arguments without allocating. For literal format strings the markup is
//! checked at compile time with the same `const fn` the runtime uses, so a
//! malformed literal tag is a build error instead of a runtime diagnostic.
//! Dynamically built messages go through [`Logger::log`](crate::Logger::log)
//! and are caught by the runtime check.

/// Log at an explicit level through `$logger`.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {{
        const _: () = assert!(
            $crate::markup::is_well_formed($fmt),
            "malformed color markup in log format string"
        );
        $logger.log($level, file!(), line!(), ::core::format_args!($fmt $(, $arg)*))
    }};
}

/// Log at `Debug` level.
#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Debug, $fmt $(, $arg)*)
    };
}

/// Log at `Info` level.
#[macro_export]
macro_rules! log_info {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Info, $fmt $(, $arg)*)
    };
}

/// Log at `Warning` level.
#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Warning, $fmt $(, $arg)*)
    };
}

/// Log at `Error` level.
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::log!($logger, $crate::Level::Error, $fmt $(, $arg)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::encoder::Encoder;
    use crate::logger::Logger;
    use crate::sink::MemorySink;

    #[test]
    fn test_macros_capture_file_and_line() {
        let sink = MemorySink::new();
        let lines = sink.lines();
        let mut logger = Logger::with(Encoder::Plain, Box::new(sink));
        log_info!(logger, "hello {}", "world");
        let lines = lines.lock().unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("macros.rs:"));
        assert!(lines[0].ends_with(": hello world"));
    }

    #[test]
    fn test_level_macros_use_their_level() {
        let sink = MemorySink::new();
        let lines = sink.lines();
        let mut logger = Logger::with(Encoder::Plain, Box::new(sink));
        logger.set_min_level(crate::Level::Debug);
        log_debug!(logger, "a");
        log_info!(logger, "b");
        log_warn!(logger, "c");
        log_error!(logger, "d");
        let lines = lines.lock().unwrap();
        assert!(lines[0].starts_with("[DEBUG]"));
        assert!(lines[1].starts_with("[INFO]"));
        assert!(lines[2].starts_with("[WARN]"));
        assert!(lines[3].starts_with("[ERROR]"));
    }

    #[test]
    fn test_well_formed_literal_markup_compiles_and_renders() {
        let sink = MemorySink::new();
        let lines = sink.lines();
        let mut logger = Logger::with(Encoder::Plain, Box::new(sink));
        log_info!(logger, "status: g|{}| (escaped: ||)", "up");
        let lines = lines.lock().unwrap();
        assert!(lines[0].ends_with(": status: up (escaped: |)"));
    }
}
