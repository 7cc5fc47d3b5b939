//! Dataset source abstraction.
//!
//! A [`PromptSource`] yields the raw, unvalidated record list. Validation is
//! the catalog's job, so sources stay dumb readers.

use crate::domain::{Prompt, Result};

/// Anything that can supply the prompt dataset.
///
/// # Implementations
///
/// - [`BundledSource`](crate::storage::BundledSource): dataset compiled into the plugin
/// - [`JsonFileSource`](crate::storage::JsonFileSource): user file read by the worker
pub trait PromptSource: Send {
    /// Reads every record in load order.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<Vec<Prompt>>;
}
