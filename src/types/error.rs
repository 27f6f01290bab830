//! Immutable structured error values.

use core::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::{String, Vec};

/// Categorical tag classifying an [`Error`].
///
/// The closed set carries purely semantic meaning; this crate assigns no
/// transport or status-code interpretation to any category. Categories
/// outside the closed set use [`ErrorKind::Custom`] with a caller-chosen
/// numeric tag.
///
/// # Examples
///
/// ```
/// use error_or::ErrorKind;
///
/// assert_eq!(ErrorKind::Validation.numeric(), 2);
/// assert_eq!(ErrorKind::Custom(42).numeric(), 42);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Failure,
    Unexpected,
    Validation,
    Conflict,
    NotFound,
    Unauthorized,
    Forbidden,
    /// Escape hatch for categories outside the closed set.
    Custom(u32),
}

impl ErrorKind {
    /// Returns the stable numeric tag for this category.
    ///
    /// The closed set occupies `0..=6` in declaration order; `Custom` yields
    /// its payload unchanged.
    #[must_use]
    #[inline]
    pub fn numeric(self) -> u32 {
        match self {
            Self::Failure => 0,
            Self::Unexpected => 1,
            Self::Validation => 2,
            Self::Conflict => 3,
            Self::NotFound => 4,
            Self::Unauthorized => 5,
            Self::Forbidden => 6,
            Self::Custom(tag) => tag,
        }
    }
}

/// A single metadata value attached to an [`Error`].
///
/// Conversions exist from the usual literal types, so
/// [`Metadata::insert`] and the [`metadata!`](crate::metadata) macro accept
/// plain Rust literals.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
#[derive(Clone, Debug, PartialEq)]
pub enum MetadataValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

impl From<&str> for MetadataValue {
    #[inline]
    fn from(value: &str) -> Self {
        Self::Str(value.into())
    }
}

impl From<String> for MetadataValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for MetadataValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for MetadataValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u64> for MetadataValue {
    #[inline]
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for MetadataValue {
    #[inline]
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for MetadataValue {
    #[inline]
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered string-keyed metadata preserving insertion order.
///
/// Unlike a hash map, iteration yields entries in the order they were
/// inserted, so metadata attached to an [`Error`] reads back deterministically.
/// Inserting an existing key replaces its value in place without changing the
/// key's position.
///
/// # Examples
///
/// ```
/// use error_or::Metadata;
///
/// let mut metadata = Metadata::new();
/// metadata.insert("user_id", 42);
/// metadata.insert("source", "import");
///
/// let keys: Vec<&str> = metadata.iter().map(|(key, _)| key).collect();
/// assert_eq!(keys, ["user_id", "source"]);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    /// Creates an empty metadata mapping.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Collects a metadata mapping from key/value pairs, preserving order.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::Metadata;
    ///
    /// let metadata = Metadata::from_entries([("attempt", 3), ("limit", 5)]);
    /// assert_eq!(metadata.len(), 2);
    /// ```
    #[must_use]
    pub fn from_entries<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<MetadataValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut metadata = Self::new();
        for (key, value) in entries {
            metadata.insert(key, value);
        }
        metadata
    }

    /// Inserts a key/value pair.
    ///
    /// If the key already exists its value is replaced in place, keeping the
    /// key's original position in iteration order.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<MetadataValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Looks up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Number of entries.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no entries are present.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An immutable structured error value.
///
/// An `Error` is a [`ErrorKind`] category, a machine-readable `code`, a
/// human-readable `description`, and optional ordered [`Metadata`]. Two
/// errors compare equal iff all four fields are equal; there is no identity
/// comparison.
///
/// Construction starts from a per-category factory that fills the category's
/// default code and description, then builder methods override individual
/// fields. Construction cannot fail.
///
/// # Examples
///
/// ```
/// use error_or::{Error, ErrorKind};
///
/// let err = Error::not_found()
///     .with_code("User.NotFound")
///     .with_description("no user with the given id");
///
/// assert_eq!(err.kind(), ErrorKind::NotFound);
/// assert_eq!(err.to_string(), "User.NotFound: no user with the given id");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    code: String,
    description: String,
    metadata: Option<Metadata>,
}

impl Error {
    fn with_defaults(kind: ErrorKind, code: &str, description: &str) -> Self {
        Self {
            kind,
            code: code.into(),
            description: description.into(),
            metadata: None,
        }
    }

    /// A general failure.
    ///
    /// Defaults: code `General.Failure`, description
    /// `A failure has occurred.`.
    #[must_use]
    #[inline]
    pub fn failure() -> Self {
        Self::with_defaults(ErrorKind::Failure, "General.Failure", "A failure has occurred.")
    }

    /// An unexpected error.
    #[must_use]
    #[inline]
    pub fn unexpected() -> Self {
        Self::with_defaults(
            ErrorKind::Unexpected,
            "General.Unexpected",
            "An unexpected error has occurred.",
        )
    }

    /// A validation error.
    #[must_use]
    #[inline]
    pub fn validation() -> Self {
        Self::with_defaults(
            ErrorKind::Validation,
            "General.Validation",
            "A validation error has occurred.",
        )
    }

    /// A conflict error.
    #[must_use]
    #[inline]
    pub fn conflict() -> Self {
        Self::with_defaults(
            ErrorKind::Conflict,
            "General.Conflict",
            "A conflict error has occurred.",
        )
    }

    /// A not-found error.
    #[must_use]
    #[inline]
    pub fn not_found() -> Self {
        Self::with_defaults(
            ErrorKind::NotFound,
            "General.NotFound",
            "A 'Not Found' error has occurred.",
        )
    }

    /// An unauthorized error.
    #[must_use]
    #[inline]
    pub fn unauthorized() -> Self {
        Self::with_defaults(
            ErrorKind::Unauthorized,
            "General.Unauthorized",
            "An 'Unauthorized' error has occurred.",
        )
    }

    /// A forbidden error.
    #[must_use]
    #[inline]
    pub fn forbidden() -> Self {
        Self::with_defaults(
            ErrorKind::Forbidden,
            "General.Forbidden",
            "A 'Forbidden' error has occurred.",
        )
    }

    /// An error in a caller-defined category outside the closed set.
    ///
    /// # Examples
    ///
    /// ```
    /// use error_or::{Error, ErrorKind};
    ///
    /// let err = Error::custom(23, "Flow.Timeout", "the flow timed out");
    /// assert_eq!(err.kind(), ErrorKind::Custom(23));
    /// ```
    #[must_use]
    pub fn custom<C, D>(kind: u32, code: C, description: D) -> Self
    where
        C: Into<String>,
        D: Into<String>,
    {
        Self {
            kind: ErrorKind::Custom(kind),
            code: code.into(),
            description: description.into(),
            metadata: None,
        }
    }

    /// Replaces the machine-readable code.
    #[must_use]
    #[inline]
    pub fn with_code<C: Into<String>>(mut self, code: C) -> Self {
        self.code = code.into();
        self
    }

    /// Replaces the human-readable description.
    #[must_use]
    #[inline]
    pub fn with_description<D: Into<String>>(mut self, description: D) -> Self {
        self.description = description.into();
        self
    }

    /// Attaches metadata.
    #[must_use]
    #[inline]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// The categorical tag.
    #[must_use]
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The machine-readable code.
    #[must_use]
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// The human-readable description.
    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The attached metadata, if any.
    #[must_use]
    #[inline]
    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.description)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
