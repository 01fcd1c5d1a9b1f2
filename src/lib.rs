//! tintlog - synchronous logging with inline color markup
//!
//! Messages may carry lightweight `key|...|` markup (`g|ok|` renders "ok"
//! in green); the engine validates the markup, renders or strips it inside
//! fixed-capacity buffers, and hands each finished line to a pluggable
//! encoder (console, plain, JSON, CSV, XML) and sink.
//!
//! ```
//! use tintlog::{log_info, Encoder, Logger, MemorySink};
//!
//! let sink = MemorySink::new();
//! let lines = sink.lines();
//! let mut logger = Logger::with(Encoder::Plain, Box::new(sink));
//! log_info!(logger, "service is g|up| on port {}", 8080);
//! assert!(lines.lock().unwrap()[0].ends_with(": service is up on port 8080"));
//! ```

pub mod buffer;
pub mod color;
pub mod encoder;
pub mod level;
pub mod logger;
mod macros;
pub mod markup;
pub mod record;
pub mod sink;

pub use buffer::{LineBuffer, LINE_CAPACITY, MSG_CAPACITY};
pub use encoder::Encoder;
pub use level::{Level, ParseLevelError};
pub use logger::{default_logger, Config, Logger, INVALID_MARKUP_NOTICE};
pub use markup::{is_well_formed, render_markup, strip_markup};
pub use record::Record;
pub use sink::{BufferedSink, ConsoleSink, FileSink, MemorySink, Sink};
