//! Worker thread message types for cross-thread communication.
//!
//! The plugin thread asks the worker to read the prompt dataset from disk; the
//! worker answers with the raw records or an error. Messages carry a
//! [`TraceContext`] so worker spans join the plugin's trace.

use crate::domain::Prompt;
use serde::{Deserialize, Serialize};

/// Trace and span ids captured from the sending span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a 32-digit hex string.
    pub trace_id: String,

    /// Parent span ID as a 16-digit hex string.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current tracing span.
    ///
    /// Returns `None` when there is no valid span context, e.g. when tracing
    /// has not been initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        let context = Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        };
        tracing::debug!(
            trace_id = %context.trace_id,
            parent_span_id = %context.parent_span_id,
            "capturing trace context"
        );
        Some(context)
    }
}

/// Requests sent from the plugin to the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerMessage {
    /// Read and parse the dataset file at `path`.
    LoadCatalog {
        /// Sandbox path of the JSON dataset.
        path: String,

        #[serde(skip_serializing_if = "Option::is_none")]
        trace_context: Option<TraceContext>,
    },
}

impl WorkerMessage {
    /// Builds a [`WorkerMessage::LoadCatalog`] tagged with the current trace context.
    #[must_use]
    pub fn load_catalog(path: impl Into<String>) -> Self {
        Self::LoadCatalog {
            path: path.into(),
            trace_context: TraceContext::from_current(),
        }
    }

    /// Trace context attached to the message, if any.
    #[must_use]
    pub const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::LoadCatalog { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses sent from the worker back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerResponse {
    /// The dataset was read; records are not validated yet.
    CatalogLoaded {
        prompts: Vec<Prompt>,
    },

    /// Reading or parsing the dataset failed.
    Error {
        /// Human-readable error message.
        message: String,
    },
}
