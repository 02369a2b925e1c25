//! Page number / page size request and its lenient field resolution

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default page number (0-indexed)
pub const DEFAULT_PAGE: u32 = 0;

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Which slice of an ordered result set to retrieve.
///
/// Pages are 0-indexed. The size is always at least 1.
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::PagingRequest;
///
/// let request = PagingRequest::try_new(2, 25).unwrap();
/// assert_eq!(request.page(), 2);
/// assert_eq!(request.size(), 25);
/// assert_eq!(request.offset(), 50);
///
/// assert!(PagingRequest::try_new(0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPagingRequest")]
pub struct PagingRequest {
    page: u32,
    size: u32,
}

impl PagingRequest {
    /// Request used whenever the caller omits or garbles page or size.
    pub const DEFAULT: Self = Self {
        page: DEFAULT_PAGE,
        size: DEFAULT_PAGE_SIZE,
    };

    /// Create a paging request.
    ///
    /// Fails with [`Error::InvalidArgument`] when `size` is zero.
    pub fn try_new(page: u32, size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::invalid_argument("page size must be at least 1"));
        }
        Ok(Self { page, size })
    }

    /// Page number (0-indexed)
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Number of items per page
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Number of items to skip
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page as u64 * self.size as u64
    }

    /// Maximum number of items to return
    #[must_use]
    pub const fn limit(&self) -> u64 {
        self.size as u64
    }
}

impl Default for PagingRequest {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Deserialize)]
struct RawPagingRequest {
    page: u32,
    size: u32,
}

impl TryFrom<RawPagingRequest> for PagingRequest {
    type Error = Error;

    fn try_from(raw: RawPagingRequest) -> Result<Self> {
        Self::try_new(raw.page, raw.size)
    }
}

/// Resolve a raw page number, falling back when it is unusable.
///
/// The raw value must be a plain 32-bit decimal integer (a leading `-` is
/// allowed, a leading `+` or surrounding whitespace is not) and be
/// non-negative.
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::resolve_page_number;
///
/// assert_eq!(resolve_page_number(Some("3"), 0), 3);
/// assert_eq!(resolve_page_number(Some("abc"), 0), 0);
/// assert_eq!(resolve_page_number(Some("-1"), 0), 0);
/// assert_eq!(resolve_page_number(None, 5), 5);
/// ```
#[must_use]
pub fn resolve_page_number(raw: Option<&str>, fallback: u32) -> u32 {
    resolve_with(raw, 0, fallback, "page")
}

/// Resolve a raw page size, falling back when it is unusable.
///
/// Same parsing rule as [`resolve_page_number`], but the value must be at
/// least 1.
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::resolve_page_size;
///
/// assert_eq!(resolve_page_size(Some("10"), 20), 10);
/// assert_eq!(resolve_page_size(Some("0"), 20), 20);
/// assert_eq!(resolve_page_size(Some("-5"), 20), 20);
/// ```
#[must_use]
pub fn resolve_page_size(raw: Option<&str>, fallback: u32) -> u32 {
    resolve_with(raw, 1, fallback, "size")
}

fn resolve_with(raw: Option<&str>, min: i32, fallback: u32, field: &'static str) -> u32 {
    let Some(raw) = raw else {
        return fallback;
    };

    if raw.starts_with('+') {
        tracing::debug!(field, raw, fallback, "Explicit plus sign, using default");
        return fallback;
    }

    match raw.parse::<i32>() {
        Ok(value) if value >= min => value.unsigned_abs(),
        Ok(value) => {
            tracing::debug!(field, value, min, fallback, "Value below minimum, using default");
            fallback
        }
        Err(_) if raw.is_empty() => fallback,
        Err(e) => {
            tracing::debug!(field, raw, error = %e, fallback, "Unparsable value, using default");
            fallback
        }
    }
}
