//! Sort instructions

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::SortDirection;

/// A single field-plus-direction rule in a multi-key sort order
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::{SortDirection, SortInstruction};
///
/// let by_age = SortInstruction::desc("age");
/// assert_eq!(by_age.field(), "age");
/// assert_eq!(by_age.direction(), SortDirection::Descending);
/// assert_eq!(by_age.to_string(), "age desc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortInstruction {
    field: String,
    direction: SortDirection,
}

impl SortInstruction {
    /// Create a sort instruction
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    /// Create an ascending sort instruction
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    /// Create a descending sort instruction
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Field name (case-sensitive)
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Sort direction
    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

impl fmt::Display for SortInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.direction)
    }
}

/// Assemble sort instructions from field/direction pairs.
///
/// Entries with an empty field name are dropped and a missing direction
/// counts as ascending. Pairs repeated in both field and direction collapse
/// to their first occurrence; the same field with two different directions
/// keeps both. Output follows first-seen input order, highest priority first.
///
/// The result is only as ordered as `entries`. A `HashMap` (or the output of
/// [`normalize_directions`] built from one) iterates in an arbitrary,
/// per-process order, so the priority between fields is then unspecified.
/// Pass a `Vec` of pairs, a `BTreeMap` or an `IndexMap` built from ordered
/// input when the multi-key order matters.
///
/// [`normalize_directions`]: super::normalize_directions
///
/// # Example
///
/// ```rust
/// use acton_paging::paging::{build_sort_instructions, SortDirection, SortInstruction};
///
/// let sort = build_sort_instructions([
///     ("name", Some(SortDirection::Ascending)),
///     ("", Some(SortDirection::Descending)),
///     ("age", None),
///     ("name", Some(SortDirection::Ascending)),
/// ]);
///
/// assert_eq!(sort, vec![SortInstruction::asc("name"), SortInstruction::asc("age")]);
/// ```
pub fn build_sort_instructions<I, K, D>(entries: I) -> Vec<SortInstruction>
where
    I: IntoIterator<Item = (K, D)>,
    K: AsRef<str>,
    D: Into<Option<SortDirection>>,
{
    let mut seen = HashSet::new();
    let mut instructions = Vec::new();

    for (field, direction) in entries {
        let field = field.as_ref();
        if field.is_empty() {
            tracing::trace!("Dropping sort entry with empty field name");
            continue;
        }

        let instruction = SortInstruction::new(field, direction.into().unwrap_or_default());
        if seen.insert(instruction.clone()) {
            instructions.push(instruction);
        }
    }

    instructions
}
