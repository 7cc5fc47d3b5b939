//! Sandbox filesystem conventions.
//!
//! Zellij mounts the host filesystem under `/host`; user-facing paths in
//! configuration use `~` and have to be translated before the plugin or its
//! worker can open them.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, strip_host_prefix};
