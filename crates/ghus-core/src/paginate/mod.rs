//! Client-side page math.
//!
//! Splits an in-memory result list into fixed-size pages. Out-of-range pages
//! are empty rather than errors.

mod page;

pub use page::{page_bounds, page_count, shows_controls, visible_page, Paginator};
