//! Worker thread implementation for dataset loading.
//!
//! Runs on a thread spawned by Zellij so that reading a user dataset from disk
//! never blocks the plugin's render loop. Parent trace context from each
//! message is re-attached so worker spans appear under the plugin's span.

use crate::infrastructure::strip_host_prefix;
use crate::storage::{JsonFileSource, PromptSource};
use crate::worker::{WorkerMessage, WorkerResponse};
use serde::{Deserialize, Serialize};
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

/// Worker thread state.
///
/// Holds no dataset; every `LoadCatalog` request re-reads its file.
#[derive(Serialize, Deserialize, Default)]
pub struct PromptfolioWorker {
    /// Number of load requests served, for log correlation.
    #[serde(skip)]
    loads_served: u64,
}

impl PromptfolioWorker {
    /// Reads `source` and wraps the outcome in a response.
    fn load_from(source: &dyn PromptSource, origin: &str) -> WorkerResponse {
        match source.load() {
            Ok(prompts) => {
                tracing::debug!(origin = origin, count = prompts.len(), "dataset read");
                WorkerResponse::CatalogLoaded { prompts }
            }
            Err(e) => {
                tracing::debug!(origin = origin, error = %e, "dataset read failed");
                WorkerResponse::Error {
                    message: format!("{}: {e}", strip_host_prefix(origin)),
                }
            }
        }
    }

    /// Re-creates the sender's span context so spans opened here join its trace.
    ///
    /// The returned guard must be held for the duration of the operation.
    fn attach_parent_trace_context(message: &WorkerMessage) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

        let trace_context = message.trace_context()?;
        let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
        let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        Some(
            opentelemetry::Context::current()
                .with_remote_span_context(span_context)
                .attach(),
        )
    }

    /// Processes one request and returns the response to post back.
    pub fn handle_message(&mut self, message: WorkerMessage) -> WorkerResponse {
        let _context_guard = Self::attach_parent_trace_context(&message);
        let _span = tracing::debug_span!("worker_handle_message", message_type = ?message).entered();

        self.loads_served += 1;
        match message {
            WorkerMessage::LoadCatalog { path, .. } => {
                tracing::debug!(path = %path, request = self.loads_served, "loading dataset file");
                Self::load_from(&JsonFileSource::new(&path), &path)
            }
        }
    }
}

/// Initializes tracing for the worker thread with the default configuration.
fn init_worker_tracing() {
    crate::observability::init_tracing(&crate::Config::default());
}

static WORKER_TRACING_INITIALIZED: std::sync::atomic::AtomicBool =
    std::sync::atomic::AtomicBool::new(false);

impl ZellijWorker<'_> for PromptfolioWorker {
    /// Deserializes a [`WorkerMessage`], handles it, and posts the
    /// [`WorkerResponse`] back under the same message name.
    fn on_message(&mut self, message: String, payload: String) {
        if !WORKER_TRACING_INITIALIZED.swap(true, std::sync::atomic::Ordering::Relaxed) {
            init_worker_tracing();
        }

        let response = match serde_json::from_str::<WorkerMessage>(&payload) {
            Ok(worker_message) => self.handle_message(worker_message),
            Err(e) => {
                tracing::debug!(error = %e, "failed to deserialize worker message");
                WorkerResponse::Error {
                    message: format!("malformed worker request: {e}"),
                }
            }
        };

        match serde_json::to_string(&response) {
            Ok(payload) => post_message_to_plugin(PluginMessage {
                name: message,
                payload,
                worker_name: None,
            }),
            Err(e) => tracing::debug!(error = %e, "failed to serialize worker response"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_catalog_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","title":"Alpha","content":"body","category":"Backend"}}]"#
        )
        .unwrap();

        let mut worker = PromptfolioWorker::default();
        let path = file.path().to_string_lossy().into_owned();
        let response = worker.handle_message(WorkerMessage::load_catalog(path));

        match response {
            WorkerResponse::CatalogLoaded { prompts } => assert_eq!(prompts.len(), 1),
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn missing_file_reports_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json").to_string_lossy().into_owned();

        let mut worker = PromptfolioWorker::default();
        let response = worker.handle_message(WorkerMessage::load_catalog(path.clone()));

        assert!(matches!(response, WorkerResponse::Error { message } if message.starts_with(&path)));
    }
}
