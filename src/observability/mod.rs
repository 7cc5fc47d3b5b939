//! Trace export for the plugin and its worker.
//!
//! `tracing` spans are bridged into OpenTelemetry and written as OTLP JSON
//! lines to a file in the plugin data directory:
//!
//! ```text
//! tracing → tracing-opentelemetry → opentelemetry_sdk → FileSpanExporter → promptfolio-otlp.json
//! ```
//!
//! The file rotates once it passes a size limit, keeping numbered backups
//! (`promptfolio-otlp.json.1` is the most recent). Nothing here can fail the
//! plugin: directory or write errors just drop spans.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup from [`Config::trace_level`](crate::Config)
//! - [`exporter`]: the `SpanExporter` implementation and provider builder
//! - [`otlp`]: span batch to OTLP JSON conversion
//! - [`rotation`]: size-limited appending writer

mod exporter;
mod init;
mod otlp;
mod rotation;

pub use init::{init_tracing, TRACE_FILE_NAME};
