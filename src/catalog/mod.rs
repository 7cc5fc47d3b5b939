//! Prompt catalog: validated dataset, filter engine and paginator.
//!
//! Everything here is pure and host-agnostic. The app layer composes
//! [`filter`] and [`paginate`] on every render to derive the visible page.

pub mod dataset;
pub mod filter;
pub mod pager;

pub use dataset::Catalog;
pub use filter::{filter, match_ranges};
pub use pager::{clamp_page, paginate, total_pages, Page};
