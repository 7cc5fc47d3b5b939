//! Terminal rendering.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready data for one frame
//! - [`renderer`]: screen selection
//! - [`components`]: per-widget renderers and screen layouts
//! - [`helpers`]: cursor, highlighting, truncation, wrapping
//! - [`theme`]: TOML color themes and ANSI escapes

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, CategoryChip, DetailView, EmptyState, FatalError, FooterInfo, HeaderInfo,
    PaginationInfo, SearchBarInfo, SummaryInfo, ToastInfo, UIViewModel,
};
