//! # acton-paging
//!
//! Request-parameter normalization for data-access layers, plus type-safe
//! entity identifiers.
//!
//! ## Features
//!
//! - **Lenient paging**: `page` / `size` parameters resolved with per-field fallbacks
//! - **Direction hints**: any value starting with `d` sorts descending, everything else ascending
//! - **Deterministic sort order**: first-seen field order, de-duplicated on field and direction
//! - **Typed identifiers**: [`EntityId`] wraps integer, string or UUID keys
//! - **Configuration**: defaults and a page-size cap loaded through Figment
//!
//! ## Example
//!
//! ```rust
//! use acton_paging::prelude::*;
//! use std::collections::HashMap;
//!
//! let mut params = HashMap::new();
//! params.insert("page".to_string(), "2".to_string());
//! params.insert("size".to_string(), "-5".to_string());
//! params.insert("age".to_string(), "desc".to_string());
//!
//! let paging = build_paging_request(&params);
//! assert_eq!(paging.page(), 2);
//! assert_eq!(paging.size(), PagingRequest::DEFAULT.size());
//!
//! let sort = build_sort_instructions(normalize_directions(&params));
//! assert_eq!(sort, vec![SortInstruction::desc("age")]);
//!
//! let owner = EntityId::new(42_i64);
//! assert_eq!(owner.as_string(), "42");
//! ```

pub mod config;
pub mod error;
pub mod ids;
pub mod paging;

pub use config::PagingConfig;
pub use error::{Error, Result};
pub use ids::{EntityId, EntityIdBuilder, IdValue};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PagingConfig;
    pub use crate::error::{Error, Result};
    pub use crate::ids::{EntityId, EntityIdBuilder, IdValue};
    pub use crate::paging::{
        build_paging_request, build_sort_instructions, normalize_directions, PageQuery,
        PagingRequest, PagingTranslator, SortDirection, SortInstruction,
    };
}
