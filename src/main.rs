//! Demo binary exercising the markup engine, encoders, and sinks.

use anyhow::Result;

use tintlog::{
    log_debug, log_error, log_info, log_warn, BufferedSink, ConsoleSink, Encoder, FileSink, Level,
    Logger,
};

fn main() -> Result<()> {
    // Colorized console output with inline markup.
    let mut logger = Logger::with(Encoder::Console, Box::new(ConsoleSink));
    logger.set_min_level(Level::Debug);

    log_debug!(logger, "starting up, pid = {}", std::process::id());
    log_info!(logger, "listening on g|{}|", "127.0.0.1:8080");
    log_warn!(logger, "y|low disk space|: {} MiB left", 412);
    log_error!(logger, "r|connection lost|, retry ||{}|| scheduled", 1);

    // The same record through each structured encoder.
    for encoder in [Encoder::Plain, Encoder::Json, Encoder::Csv, Encoder::Xml] {
        logger.set_encoder(encoder);
        log_info!(logger, "payload is g|ready|");
    }

    // A buffered sink batches lines and flushes when it goes out of scope.
    {
        let buffered = BufferedSink::new(Box::new(ConsoleSink));
        let mut batched = Logger::with(Encoder::Plain, Box::new(buffered));
        log_info!(batched, "buffered line one");
        log_info!(batched, "buffered line two");
    }

    // Structured output to a file.
    let path = std::env::temp_dir().join("tintlog-demo.log");
    let mut file_logger = Logger::with(Encoder::Json, Box::new(FileSink::create(&path)?));
    log_info!(file_logger, "demo finished");
    file_logger.flush();
    println!("json log appended to {}", path.display());

    Ok(())
}
