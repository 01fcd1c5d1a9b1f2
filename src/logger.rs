//! The logger orchestrator
//!
//! Wires the pipeline together: level filter, argument expansion into a
//! bounded buffer, markup validation, encoding, and the sink write. Also
//! owns the process-wide default instance behind an init-once primitive.

use std::fmt;
use std::io::Write as IoWrite;
use std::sync::{Mutex, OnceLock};

use crate::buffer::{LineBuffer, LINE_CAPACITY, MSG_CAPACITY};
use crate::encoder::Encoder;
use crate::level::Level;
use crate::markup::is_well_formed;
use crate::record::Record;
use crate::sink::{ConsoleSink, Sink};

/// Diagnostic substituted for a message whose markup fails validation.
/// The original message is never emitted in that case.
pub const INVALID_MARKUP_NOTICE: &str = "Invalid color tags: check | pairing";

/// Runtime knobs read on every log call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Calls below this level are dropped before any work happens.
    pub min_level: Level,
    /// Whether the console encoder emits ANSI colors.
    pub color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_level: Level::Info,
            color_enabled: true,
        }
    }
}

/// Synchronous logger: each call runs filter → expand → validate → encode
/// → write to completion before returning.
///
/// Encoder and sink are optional; when unset the logger falls back to a
/// minimal plain rendering on stdout, so output never silently disappears
/// because of missing configuration.
pub struct Logger {
    config: Config,
    encoder: Option<Encoder>,
    sink: Option<Box<dyn Sink>>,
}

impl Logger {
    /// Create a logger with default config and no encoder or sink set.
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            encoder: None,
            sink: None,
        }
    }

    /// Create a fully wired logger.
    pub fn with(encoder: Encoder, sink: Box<dyn Sink>) -> Self {
        Self {
            config: Config::default(),
            encoder: Some(encoder),
            sink: Some(sink),
        }
    }

    /// Current configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Set the minimum level that will be emitted.
    pub fn set_min_level(&mut self, level: Level) {
        self.config.min_level = level;
    }

    /// Enable or disable ANSI colors on the console encoder.
    pub fn set_color_enabled(&mut self, enabled: bool) {
        self.config.color_enabled = enabled;
    }

    /// Replace the output encoder.
    pub fn set_encoder(&mut self, encoder: Encoder) {
        self.encoder = Some(encoder);
    }

    /// Replace the output sink.
    pub fn set_sink(&mut self, sink: Box<dyn Sink>) {
        self.sink = Some(sink);
    }

    /// Flush the sink, if one is set.
    pub fn flush(&mut self) {
        if let Some(sink) = &mut self.sink {
            sink.flush();
        }
    }

    /// Run one log call through the pipeline.
    ///
    /// Below-minimum calls return immediately without expanding `args`.
    /// A message that fails markup validation is replaced by
    /// [`INVALID_MARKUP_NOTICE`] at `Error` severity.
    pub fn log(&mut self, level: Level, file: &str, line: u32, args: fmt::Arguments<'_>) {
        if level < self.config.min_level {
            return;
        }

        let mut message = LineBuffer::<MSG_CAPACITY>::new();
        let _ = fmt::Write::write_fmt(&mut message, args);

        let (level, text) = if is_well_formed(message.as_str()) {
            (level, message.as_str())
        } else {
            (Level::Error, INVALID_MARKUP_NOTICE)
        };

        let record = Record {
            level,
            file,
            line,
            function: None,
            message: text,
        };

        let mut encoded = LineBuffer::<LINE_CAPACITY>::new();
        match self.encoder {
            Some(encoder) => encoder.encode(&record, self.config.color_enabled, &mut encoded),
            // minimal fallback rendering
            None => Encoder::Plain.encode(&record, false, &mut encoded),
        }

        match &mut self.sink {
            Some(sink) => sink.write_line(encoded.as_str()),
            None => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                let _ = writeln!(out, "{}", encoded.as_str());
            }
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

static DEFAULT_LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Process-wide default logger, constructed exactly once on first use.
///
/// The default instance writes colorized console output. Callers sharing
/// it across threads serialize through the mutex; everything else in the
/// crate takes `&mut Logger` explicitly.
pub fn default_logger() -> &'static Mutex<Logger> {
    DEFAULT_LOGGER
        .get_or_init(|| Mutex::new(Logger::with(Encoder::Console, Box::new(ConsoleSink))))
}
