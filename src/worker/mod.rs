//! Background worker thread for dataset loading.
//!
//! A user-supplied dataset is read on the worker so disk I/O never blocks the
//! plugin UI thread. The bundled dataset needs no worker round-trip.
//!
//! # Architecture
//!
//! - `messages`: Request/response protocol types with trace context propagation
//! - `handler`: Worker implementation and message processing logic

pub mod handler;
pub mod messages;

pub use handler::PromptfolioWorker;
pub use messages::{TraceContext, WorkerMessage, WorkerResponse};
