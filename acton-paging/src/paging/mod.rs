//! Paging and sort normalization for repository queries
//!
//! Converts untyped query parameters (`page`, `size`, and per-field direction
//! hints) into a validated [`PagingRequest`] and an ordered list of
//! [`SortInstruction`]s. The translation is lenient: malformed values fall
//! back to defaults instead of producing errors.
//!
//! # Example
//!
//! ```rust
//! use acton_paging::paging::{
//!     build_paging_request, build_sort_instructions, normalize_directions, SortInstruction,
//! };
//!
//! let params = vec![
//!     ("page", "1"),
//!     ("size", "10"),
//!     ("name", "asc"),
//!     ("created_at", "desc"),
//! ];
//!
//! let paging = build_paging_request(params.iter().copied());
//! assert_eq!((paging.page(), paging.size()), (1, 10));
//!
//! let sort = build_sort_instructions(normalize_directions(params.iter().copied()));
//! assert_eq!(
//!     sort,
//!     vec![SortInstruction::asc("name"), SortInstruction::desc("created_at")]
//! );
//! ```

mod direction;
mod request;
mod sort;
mod translator;

// Re-export all public types
pub use direction::SortDirection;
pub use request::{
    resolve_page_number, resolve_page_size, PagingRequest, DEFAULT_PAGE, DEFAULT_PAGE_SIZE,
};
pub use sort::{build_sort_instructions, SortInstruction};
pub use translator::{
    build_paging_request, is_reserved_key, normalize_directions, PageQuery, PagingTranslator,
    PAGE_KEY, RESERVED_KEYS, SIZE_KEY,
};
