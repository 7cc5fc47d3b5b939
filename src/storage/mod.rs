//! Storage layer for the prompt dataset.
//!
//! Sources produce raw record lists; [`Catalog::new`](crate::catalog::Catalog::new)
//! validates them. File sources run inside the background worker so disk I/O
//! never blocks the UI thread.
//!
//! # Modules
//!
//! - `source`: The [`PromptSource`] trait
//! - `json`: JSON file source and dataset parser
//! - `bundled`: Dataset compiled into the binary

pub mod bundled;
pub mod json;
pub mod source;

pub use bundled::BundledSource;
pub use json::{parse_dataset, JsonFileSource};
pub use source::PromptSource;
