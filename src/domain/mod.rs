//! Domain layer for the Promptfolio plugin.
//!
//! Core types independent of Zellij APIs and storage concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`prompt`]: The immutable prompt record and its identifier
//! - [`query`]: Search text and category filter

pub mod error;
pub mod prompt;
pub mod query;

pub use error::{PromptfolioError, Result};
pub use prompt::{Prompt, PromptId};
pub use query::{CategoryFilter, Query, ALL_CATEGORIES};
