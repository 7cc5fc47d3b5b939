//! JSON file dataset source.
//!
//! Reads a user-supplied prompt collection from disk. Two layouts are accepted:
//!
//! ```json
//! [ { "id": "...", "title": "...", "content": "...", "category": "..." } ]
//! ```
//!
//! or a versioned container:
//!
//! ```json
//! { "version": 1, "prompts": [ ... ] }
//! ```

use crate::domain::error::{PromptfolioError, Result};
use crate::domain::Prompt;
use crate::storage::source::PromptSource;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Highest container version this reader understands.
const SUPPORTED_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DatasetFile {
    Bare(Vec<Prompt>),
    Versioned {
        #[serde(default = "default_version")]
        version: u32,
        prompts: Vec<Prompt>,
    },
}

const fn default_version() -> u32 {
    SUPPORTED_VERSION
}

/// Parses dataset JSON in either accepted layout.
///
/// # Errors
///
/// Returns [`PromptfolioError::Storage`] if the text is not valid JSON in one of
/// the two layouts, or if the container version is newer than supported.
/// Records with absent fields parse as blank and are rejected later by
/// [`Catalog::new`](crate::catalog::Catalog::new).
pub fn parse_dataset(contents: &str) -> Result<Vec<Prompt>> {
    let file: DatasetFile = serde_json::from_str(contents)
        .map_err(|e| PromptfolioError::Storage(format!("failed to parse JSON: {e}")))?;

    match file {
        DatasetFile::Bare(prompts) => Ok(prompts),
        DatasetFile::Versioned { version, prompts } => {
            if version > SUPPORTED_VERSION {
                return Err(PromptfolioError::Storage(format!(
                    "unsupported dataset version {version}"
                )));
            }
            Ok(prompts)
        }
    }
}

/// Prompt dataset stored in a JSON file.
///
/// The file is read on every [`load`](PromptSource::load); the worker calls it
/// once per session.
///
/// # Examples
///
/// ```no_run
/// use promptfolio::storage::{JsonFileSource, PromptSource};
///
/// let source = JsonFileSource::new("/host/.config/promptfolio/prompts.json");
/// let prompts = source.load()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    file_path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl PromptSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Prompt>> {
        let _span = tracing::debug_span!("json_load_dataset", path = ?self.file_path).entered();

        let contents = std::fs::read_to_string(&self.file_path)?;
        let prompts = parse_dataset(&contents)?;

        tracing::debug!(count = prompts.len(), "loaded dataset file");
        Ok(prompts)
    }
}
