//! Output encoders
//!
//! Each variant turns one validated [`Record`] into a single self-contained
//! line in its format. The structured formats (JSON, CSV, XML) strip markup
//! so their payloads never carry raw control bytes; only the console format
//! colorizes. Encoding always succeeds, up to silent truncation of the
//! output buffer.

use std::fmt::Write;

use crate::buffer::{LineBuffer, MSG_CAPACITY};
use crate::color;
use crate::markup::{render_markup, strip_markup};
use crate::record::Record;

/// Width of the console `file:line` column.
const LOCATION_WIDTH: usize = 13;

/// The closed set of output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoder {
    /// Colorized, column-aligned console line.
    Console,
    /// Console layout without colors or markup.
    Plain,
    /// One JSON object per line.
    Json,
    /// One quoted CSV row per line.
    Csv,
    /// One `<log>` element per line.
    Xml,
}

impl Encoder {
    /// Encode `record` into `out` as one line.
    ///
    /// `color_enabled` only affects the `Console` variant; the other
    /// formats always strip markup.
    pub fn encode<const N: usize>(
        &self,
        record: &Record<'_>,
        color_enabled: bool,
        out: &mut LineBuffer<N>,
    ) {
        match self {
            Encoder::Console => encode_console(record, color_enabled, out),
            Encoder::Plain => encode_plain(record, out),
            Encoder::Json => encode_json(record, out),
            Encoder::Csv => encode_csv(record, out),
            Encoder::Xml => encode_xml(record, out),
        }
    }
}

/// `<color>[LEVEL]  <reset> file:line      : message` with the location
/// column padded for alignment.
fn encode_console<const N: usize>(record: &Record<'_>, color_enabled: bool, out: &mut LineBuffer<N>) {
    let mut message = LineBuffer::<MSG_CAPACITY>::new();
    render_markup(record.message, color_enabled, &mut message);

    let (tag_color, reset) = if color_enabled {
        (record.level.color(), color::RESET)
    } else {
        ("", "")
    };

    let mut location = LineBuffer::<64>::new();
    let _ = write!(location, "{}:{}", record.file_name(), record.line);

    let _ = write!(
        out,
        "{}{}{} {:<width$} : {}",
        tag_color,
        record.level.padded_tag(),
        reset,
        location.as_str(),
        message.as_str(),
        width = LOCATION_WIDTH,
    );
}

/// `[LEVEL] file:line : message`, markup stripped.
fn encode_plain<const N: usize>(record: &Record<'_>, out: &mut LineBuffer<N>) {
    let mut message = LineBuffer::<MSG_CAPACITY>::new();
    strip_markup(record.message, &mut message);

    let _ = write!(
        out,
        "[{}] {}:{} : {}",
        record.level.as_str(),
        record.file_name(),
        record.line,
        message.as_str(),
    );
}

/// `{"level":"...","file":"...","line":N,"message":"..."}`.
fn encode_json<const N: usize>(record: &Record<'_>, out: &mut LineBuffer<N>) {
    let mut message = LineBuffer::<MSG_CAPACITY>::new();
    strip_markup(record.message, &mut message);

    out.push_str("{\"level\":\"");
    out.push_str(record.level.as_str());
    out.push_str("\",\"file\":\"");
    write_json_escaped(record.file_name(), out);
    out.push_str("\",\"line\":");
    let _ = write!(out, "{}", record.line);
    out.push_str(",\"message\":\"");
    write_json_escaped(message.as_str(), out);
    out.push_str("\"}");
}

/// `"LEVEL","file",line,"message"` with inner quotes doubled.
fn encode_csv<const N: usize>(record: &Record<'_>, out: &mut LineBuffer<N>) {
    let mut message = LineBuffer::<MSG_CAPACITY>::new();
    strip_markup(record.message, &mut message);

    let _ = write!(
        out,
        "\"{}\",\"{}\",{},\"",
        record.level.as_str(),
        record.file_name(),
        record.line,
    );
    for c in message.as_str().chars() {
        if c == '"' {
            out.push_str("\"\"");
        } else {
            out.push_char(c);
        }
    }
    out.push_char('"');
}

/// `<log level="..." file="..." line="...">message</log>` with the message
/// entity-escaped.
fn encode_xml<const N: usize>(record: &Record<'_>, out: &mut LineBuffer<N>) {
    let mut message = LineBuffer::<MSG_CAPACITY>::new();
    strip_markup(record.message, &mut message);

    let _ = write!(
        out,
        "<log level=\"{}\" file=\"{}\" line=\"{}\">",
        record.level.as_str(),
        record.file_name(),
        record.line,
    );
    write_xml_escaped(message.as_str(), out);
    out.push_str("</log>");
}

/// JSON string escaping: quote, backslash, and control characters.
fn write_json_escaped<const N: usize>(text: &str, out: &mut LineBuffer<N>) {
    for c in text.chars() {
        match c {
            '"' => {
                out.push_str("\\\"");
            }
            '\\' => {
                out.push_str("\\\\");
            }
            '\n' => {
                out.push_str("\\n");
            }
            '\r' => {
                out.push_str("\\r");
            }
            '\t' => {
                out.push_str("\\t");
            }
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                out.push_char(c);
            }
        }
    }
}

/// XML entity escaping for `<`, `>`, `&`, and `"`.
fn write_xml_escaped<const N: usize>(text: &str, out: &mut LineBuffer<N>) {
    for c in text.chars() {
        match c {
            '<' => {
                out.push_str("&lt;");
            }
            '>' => {
                out.push_str("&gt;");
            }
            '&' => {
                out.push_str("&amp;");
            }
            '"' => {
                out.push_str("&quot;");
            }
            c => {
                out.push_char(c);
            }
        }
    }
}
