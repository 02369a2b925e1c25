//! Type-safe entity identifiers
//!
//! [`EntityId`] wraps a single scalar key (integer, string, UUID) so that domain
//! code passes identities around as a distinct type rather than a bare `i64` or
//! `String`. Equality, ordering and hashing come from the wrapped value only,
//! and the identifier serializes as that bare value.
//!
//! ```rust
//! use acton_paging::ids::EntityId;
//!
//! let id = EntityId::new(42_i64);
//! assert_eq!(*id.id(), 42);
//! assert_eq!(id.as_string(), "42");
//! assert_eq!(id, EntityId::new(42_i64));
//! ```
//!
//! # Two-phase construction
//!
//! Mapping layers that materialize an entity field by field cannot supply the
//! key up front. [`EntityIdBuilder`] holds the unpopulated state; only a
//! populated builder can produce an [`EntityId`].
//!
//! ```rust
//! use acton_paging::ids::EntityIdBuilder;
//!
//! let mut builder = EntityIdBuilder::<String>::new();
//! assert!(builder.build().is_err());
//!
//! builder.populate("usr_7".to_string());
//! let id = builder.build().unwrap();
//! assert_eq!(id.as_string(), "usr_7");
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Scalar types usable as an entity key.
///
/// A key must be comparable, hashable, printable and serializable as a single
/// value. Implemented for the common key types; implement it for your own
/// scalar newtypes as needed.
pub trait IdValue:
    Clone + Eq + Ord + Hash + fmt::Display + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
}

impl IdValue for i32 {}
impl IdValue for i64 {}
impl IdValue for u32 {}
impl IdValue for u64 {}
impl IdValue for String {}
impl IdValue for Uuid {}

/// An immutable, type-safe entity identifier.
///
/// # Example
///
/// ```rust
/// use acton_paging::ids::EntityId;
/// use std::collections::HashSet;
///
/// let a = EntityId::new("order-1".to_string());
/// let b = EntityId::new("order-1".to_string());
///
/// let mut seen = HashSet::new();
/// seen.insert(a);
/// assert!(seen.contains(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent, bound = "T: IdValue")]
pub struct EntityId<T: IdValue>(T);

impl<T: IdValue> EntityId<T> {
    /// Wrap an identifier value.
    #[must_use]
    pub fn new(id: T) -> Self {
        Self(id)
    }

    /// Wrap an identifier value that may be absent.
    ///
    /// Fails with [`Error::InvalidArgument`] when `id` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use acton_paging::ids::EntityId;
    ///
    /// assert!(EntityId::try_from_option(Some(7_u64)).is_ok());
    /// assert!(EntityId::<u64>::try_from_option(None).is_err());
    /// ```
    pub fn try_from_option(id: Option<T>) -> Result<Self> {
        id.map(Self)
            .ok_or_else(|| Error::invalid_argument("id must not be null"))
    }

    /// Returns the wrapped value.
    #[must_use]
    pub fn id(&self) -> &T {
        &self.0
    }

    /// Consumes the identifier and returns the wrapped value.
    #[must_use]
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Returns the textual form of the wrapped value.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

impl EntityId<Uuid> {
    /// Creates a new identifier backed by a time-sortable UUIDv7.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl<T: IdValue> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<T: IdValue> From<T> for EntityId<T> {
    fn from(id: T) -> Self {
        Self(id)
    }
}

impl<T: IdValue> AsRef<T> for EntityId<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> FromStr for EntityId<T>
where
    T: IdValue + FromStr,
    T::Err: fmt::Display,
{
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.parse::<T>()
            .map(Self)
            .map_err(|e| Error::invalid_argument(format!("invalid id '{s}': {e}")))
    }
}

/// Holder for an identifier that is populated after construction.
///
/// The unpopulated state is only observable through this type; [`build`]
/// refuses to hand out an [`EntityId`] until a value is present.
///
/// [`build`]: EntityIdBuilder::build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityIdBuilder<T: IdValue> {
    id: Option<T>,
}

impl<T: IdValue> EntityIdBuilder<T> {
    /// Create an unpopulated builder.
    #[must_use]
    pub fn new() -> Self {
        Self { id: None }
    }

    /// Set (or replace) the identifier value.
    pub fn populate(&mut self, id: T) -> &mut Self {
        self.id = Some(id);
        self
    }

    /// Whether a value has been supplied.
    #[must_use]
    pub fn is_populated(&self) -> bool {
        self.id.is_some()
    }

    /// Textual form of the value, or [`Error::NullState`] when unpopulated.
    pub fn as_string(&self) -> Result<String> {
        self.id
            .as_ref()
            .map(ToString::to_string)
            .ok_or_else(|| Error::null_state("id has not been populated"))
    }

    /// Produce the identifier, or [`Error::NullState`] when unpopulated.
    pub fn build(&self) -> Result<EntityId<T>> {
        self.id
            .clone()
            .map(EntityId)
            .ok_or_else(|| Error::null_state("id has not been populated"))
    }
}

impl<T: IdValue> Default for EntityIdBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
