//! Sort direction and direction-hint inference

use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction for ordering results
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::SortDirection;
///
/// assert_eq!(format!("{}", SortDirection::Ascending), "asc");
/// assert_eq!(format!("{}", SortDirection::Descending), "desc");
/// assert_eq!(SortDirection::default(), SortDirection::Ascending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortDirection {
    /// Sort in ascending order (A-Z, 0-9)
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    /// Sort in descending order (Z-A, 9-0)
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Infer a direction from a free-form hint.
    ///
    /// Any hint whose first character is `d` or `D` is descending. Everything
    /// else, including `None`, the empty string and unrecognized words, is
    /// ascending. This never fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_paging::paging::SortDirection;
    ///
    /// assert_eq!(SortDirection::from_hint(Some("desc")), SortDirection::Descending);
    /// assert_eq!(SortDirection::from_hint(Some("DOWN")), SortDirection::Descending);
    /// assert_eq!(SortDirection::from_hint(Some("asc")), SortDirection::Ascending);
    /// assert_eq!(SortDirection::from_hint(Some("xyz")), SortDirection::Ascending);
    /// assert_eq!(SortDirection::from_hint(None), SortDirection::Ascending);
    /// ```
    #[must_use]
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint.and_then(|h| h.chars().next()) {
            Some('d' | 'D') => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Convert to SQL ORDER BY clause fragment
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::Ascending => "ASC",
            Self::Descending => "DESC",
        }
    }

    /// Whether this is [`SortDirection::Descending`]
    #[must_use]
    pub const fn is_descending(&self) -> bool {
        matches!(self, Self::Descending)
    }

    /// The opposite direction
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "asc"),
            Self::Descending => write!(f, "desc"),
        }
    }
}
