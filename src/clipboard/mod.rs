//! System clipboard access through the host's command runner.
//!
//! The plugin runs in a WASM sandbox, so writing the clipboard means asking
//! Zellij to run a shell pipeline (`run_command`). The prompt text is passed as
//! a positional argument and piped into the pipeline's stdin. The result comes
//! back later as a `RunCommandResult` event carrying the context map built here.

use std::collections::BTreeMap;

/// Context key marking a command as a clipboard write.
pub const CONTEXT_KIND: &str = "promptfolio.kind";
/// Context value for [`CONTEXT_KIND`].
pub const KIND_CLIPBOARD: &str = "clipboard";
/// Context key carrying the copy request id.
pub const CONTEXT_REQUEST_ID: &str = "promptfolio.request_id";

/// Tries the common clipboard tools in turn; exits 127 when none is installed.
const AUTO_PIPELINE: &str = "if command -v pbcopy >/dev/null 2>&1; then pbcopy; \
elif command -v wl-copy >/dev/null 2>&1; then wl-copy; \
elif command -v xclip >/dev/null 2>&1; then xclip -selection clipboard; \
elif command -v xsel >/dev/null 2>&1; then xsel --clipboard --input; \
else echo 'no clipboard tool found (tried pbcopy, wl-copy, xclip, xsel)' >&2; exit 127; fi";

/// The shell pipeline used to write the clipboard.
///
/// # Examples
///
/// ```
/// use promptfolio::clipboard::ClipboardCommand;
///
/// let cmd = ClipboardCommand::custom("wl-copy");
/// let argv = cmd.argv("hello");
/// assert_eq!(argv[0], "sh");
/// assert_eq!(argv.last().map(String::as_str), Some("hello"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardCommand {
    pipeline: Option<String>,
}

impl ClipboardCommand {
    /// Detects the clipboard tool at copy time.
    #[must_use]
    pub const fn auto() -> Self {
        Self { pipeline: None }
    }

    /// Uses a user-supplied pipeline that reads the text on stdin.
    #[must_use]
    pub fn custom(pipeline: impl Into<String>) -> Self {
        Self {
            pipeline: Some(pipeline.into()),
        }
    }

    /// Parses the `clipboard_command` config value; blank or `auto` means detection.
    #[must_use]
    pub fn from_config(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("" | "auto") => Self::auto(),
            Some(pipeline) => Self::custom(pipeline),
        }
    }

    #[must_use]
    pub fn pipeline(&self) -> &str {
        self.pipeline.as_deref().unwrap_or(AUTO_PIPELINE)
    }

    /// Command line handed to `run_command`.
    ///
    /// The text travels as `$1` so it is never interpreted by the shell.
    #[must_use]
    pub fn argv(&self, text: &str) -> Vec<String> {
        vec![
            "sh".to_string(),
            "-c".to_string(),
            format!("printf '%s' \"$1\" | {{ {}; }}", self.pipeline()),
            "promptfolio".to_string(),
            text.to_string(),
        ]
    }

    /// Context map tagging the command with its request id.
    #[must_use]
    pub fn context(request_id: u64) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_KIND.to_string(), KIND_CLIPBOARD.to_string()),
            (CONTEXT_REQUEST_ID.to_string(), request_id.to_string()),
        ])
    }

    /// Extracts the request id from a command result context, if it is ours.
    #[must_use]
    pub fn request_id_from_context(context: &BTreeMap<String, String>) -> Option<u64> {
        if context.get(CONTEXT_KIND).map(String::as_str) != Some(KIND_CLIPBOARD) {
            return None;
        }
        context.get(CONTEXT_REQUEST_ID)?.parse().ok()
    }
}

/// Result of one clipboard write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

impl CopyOutcome {
    /// Interprets a finished command's exit code and stderr.
    #[must_use]
    pub fn from_exit(exit_code: Option<i32>, stderr: &[u8]) -> Self {
        match exit_code {
            Some(0) => Self::Copied,
            code => {
                let stderr = String::from_utf8_lossy(stderr);
                let stderr = stderr.trim();
                let reason = match (code, stderr.is_empty()) {
                    (Some(code), true) => format!("clipboard command exited with {code}"),
                    (None, true) => "clipboard command was terminated".to_string(),
                    (_, false) => stderr.to_string(),
                };
                Self::Failed(reason)
            }
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_value_selects_pipeline() {
        assert_eq!(ClipboardCommand::from_config(None), ClipboardCommand::auto());
        assert_eq!(ClipboardCommand::from_config(Some(" auto ")), ClipboardCommand::auto());
        assert_eq!(
            ClipboardCommand::from_config(Some("xclip -i")).pipeline(),
            "xclip -i"
        );
    }

    #[test]
    fn argv_passes_text_as_positional_argument() {
        let argv = ClipboardCommand::custom("pbcopy").argv("it's $HOME");
        assert_eq!(argv[0], "sh");
        assert_eq!(argv[1], "-c");
        assert_eq!(argv[2], "printf '%s' \"$1\" | { pbcopy; }");
        assert_eq!(argv[4], "it's $HOME");
    }

    #[test]
    fn auto_pipeline_tries_known_tools() {
        let pipeline = ClipboardCommand::auto().pipeline().to_string();
        for tool in ["pbcopy", "wl-copy", "xclip", "xsel", "exit 127"] {
            assert!(pipeline.contains(tool), "missing {tool}");
        }
    }

    #[test]
    fn context_round_trips_request_id() {
        let ctx = ClipboardCommand::context(42);
        assert_eq!(ClipboardCommand::request_id_from_context(&ctx), Some(42));

        let foreign = BTreeMap::from([(CONTEXT_REQUEST_ID.to_string(), "7".to_string())]);
        assert_eq!(ClipboardCommand::request_id_from_context(&foreign), None);
    }

    #[test]
    fn exit_codes_map_to_outcomes() {
        assert_eq!(CopyOutcome::from_exit(Some(0), b""), CopyOutcome::Copied);
        assert_eq!(
            CopyOutcome::from_exit(Some(127), b"no clipboard tool found\n"),
            CopyOutcome::Failed("no clipboard tool found".to_string())
        );
        assert_eq!(
            CopyOutcome::from_exit(Some(1), b""),
            CopyOutcome::Failed("clipboard command exited with 1".to_string())
        );
        assert!(!CopyOutcome::from_exit(None, b"").is_success());
    }
}
