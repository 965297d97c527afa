//! Value model for SEON data.
//!
//! This module provides the core vocabulary of the format:
//!
//! - [`SeonType`]: the type tag carried by every value, also spelled out in
//!   typed-null text (`null.int`, `null.list`, ...)
//! - [`ContainerType`]: the three container kinds a writer can step into
//! - [`Scalar`]: a single leaf value (booleans, integers, big integers,
//!   floats, timestamps, symbols, strings, typed nulls)
//! - [`Element`]: an owned document tree, useful when the structure isn't
//!   known at compile time or when a document is assembled programmatically
//!
//! ## Examples
//!
//! ```rust
//! use seon::Element;
//!
//! let doc = Element::struct_of([
//!     ("name", Element::from("Ada")),
//!     ("scores", Element::list_of([Element::from(1), Element::from(2)])),
//! ]);
//!
//! assert_eq!(
//!     doc.to_string(),
//!     "{\n  name: \"Ada\",\n  scores: [\n    1,\n    2\n  ]\n}"
//! );
//! ```

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::fmt;

use crate::options::WriterOptions;
use crate::pretty::PrettyWriter;

/// The type vocabulary of the SEON format.
///
/// Scalar values carry their tag implicitly through [`Scalar`]; null values
/// spell it out in the emitted text, so `null` of type `Int` is written
/// `null.int`. The plain [`SeonType::Null`] tag renders as a bare `null`.
///
/// # Examples
///
/// ```rust
/// use seon::SeonType;
///
/// assert_eq!(SeonType::Int.name(), "int");
/// assert_eq!(SeonType::Struct.name(), "struct");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeonType {
    Null,
    Bool,
    Int,
    Float,
    Timestamp,
    Symbol,
    String,
    List,
    SExp,
    Struct,
}

impl SeonType {
    /// The lowercase name used in typed-null text.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            SeonType::Null => "null",
            SeonType::Bool => "bool",
            SeonType::Int => "int",
            SeonType::Float => "float",
            SeonType::Timestamp => "timestamp",
            SeonType::Symbol => "symbol",
            SeonType::String => "string",
            SeonType::List => "list",
            SeonType::SExp => "sexp",
            SeonType::Struct => "struct",
        }
    }
}

/// The three container kinds of the format.
///
/// Lists delimit with `[` `]` and separate elements with commas, s-expressions
/// delimit with `(` `)` and separate with spaces, structs delimit with `{` `}`
/// and hold `name: value` fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContainerType {
    List,
    SExp,
    Struct,
}

/// A single SEON leaf value.
///
/// # Examples
///
/// ```rust
/// use seon::{Scalar, SeonType};
///
/// let value = Scalar::Int(42);
/// assert_eq!(value.seon_type(), SeonType::Int);
/// assert!(!value.is_null());
///
/// let nothing = Scalar::Null(SeonType::String);
/// assert!(nothing.is_null());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    /// A null value carrying the type it stands in for.
    Null(SeonType),
    Bool(bool),
    Int(i64),
    BigInt(BigInt),
    Float(f64),
    Timestamp(DateTime<Utc>),
    /// A symbol token, written bare when it is an identifier and
    /// single-quoted otherwise.
    Symbol(String),
    String(String),
}

impl Scalar {
    /// The type tag of this value. Nulls report the type they stand in for.
    #[must_use]
    pub fn seon_type(&self) -> SeonType {
        match self {
            Scalar::Null(tpe) => *tpe,
            Scalar::Bool(_) => SeonType::Bool,
            Scalar::Int(_) | Scalar::BigInt(_) => SeonType::Int,
            Scalar::Float(_) => SeonType::Float,
            Scalar::Timestamp(_) => SeonType::Timestamp,
            Scalar::Symbol(_) => SeonType::Symbol,
            Scalar::String(_) => SeonType::String,
        }
    }

    /// Returns `true` for any null, regardless of its type tag.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null(_))
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Scalar::Int(i64::from(value))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::Int(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Scalar::Float(value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::String(value.to_string())
    }
}

impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Scalar::String(value)
    }
}

impl From<BigInt> for Scalar {
    fn from(value: BigInt) -> Self {
        Scalar::BigInt(value)
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(value: DateTime<Utc>) -> Self {
        Scalar::Timestamp(value)
    }
}

/// An owned SEON document tree.
///
/// Struct fields live in an insertion-ordered [`IndexMap`] so that a tree
/// serializes deterministically, in the order it was built.
///
/// The [`fmt::Display`] impl serializes with [`WriterOptions::default`]
/// (2-space indent, unbounded prettify depth).
///
/// # Examples
///
/// ```rust
/// use seon::Element;
///
/// let doc = Element::struct_of([
///     ("a", Element::from(1)),
///     ("b", Element::from(2)),
/// ]);
/// assert_eq!(doc.to_string(), "{\n  a: 1,\n  b: 2\n}");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Scalar(Scalar),
    List(Vec<Element>),
    SExp(Vec<Element>),
    Struct(IndexMap<String, Element>),
    /// A value prefixed with one or more `annotation::` tokens.
    Annotated(Vec<String>, Box<Element>),
}

impl Element {
    /// Builds a struct element from key/value pairs, keeping their order.
    pub fn struct_of<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Element)>,
    {
        Element::Struct(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        )
    }

    /// Builds a list element.
    pub fn list_of<I: IntoIterator<Item = Element>>(items: I) -> Self {
        Element::List(items.into_iter().collect())
    }

    /// Builds an s-expression element.
    pub fn sexp_of<I: IntoIterator<Item = Element>>(items: I) -> Self {
        Element::SExp(items.into_iter().collect())
    }

    /// Wraps a value with a single annotation.
    ///
    /// ```rust
    /// use seon::Element;
    ///
    /// let qty = Element::annotated("cm", Element::from(17));
    /// assert_eq!(qty.to_string(), "cm::17");
    /// ```
    pub fn annotated(annotation: impl Into<String>, value: Element) -> Self {
        Element::Annotated(vec![annotation.into()], Box::new(value))
    }

    /// Serializes this tree with the given layout options.
    ///
    /// # Errors
    ///
    /// Returns an error only if an internal writer invariant is violated; a
    /// well-formed tree cannot trip the structural grammar checks.
    pub fn to_text(&self, options: WriterOptions) -> crate::Result<String> {
        let mut writer = PrettyWriter::new(options);
        writer.write_element(self)?;
        writer.into_string()
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.to_text(WriterOptions::default()).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

impl From<Scalar> for Element {
    fn from(value: Scalar) -> Self {
        Element::Scalar(value)
    }
}

impl From<bool> for Element {
    fn from(value: bool) -> Self {
        Element::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for Element {
    fn from(value: i32) -> Self {
        Element::Scalar(Scalar::Int(i64::from(value)))
    }
}

impl From<i64> for Element {
    fn from(value: i64) -> Self {
        Element::Scalar(Scalar::Int(value))
    }
}

impl From<f64> for Element {
    fn from(value: f64) -> Self {
        Element::Scalar(Scalar::Float(value))
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Element::Scalar(Scalar::String(value.to_string()))
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Element::Scalar(Scalar::String(value))
    }
}

impl From<BigInt> for Element {
    fn from(value: BigInt) -> Self {
        Element::Scalar(Scalar::BigInt(value))
    }
}

impl From<DateTime<Utc>> for Element {
    fn from(value: DateTime<Utc>) -> Self {
        Element::Scalar(Scalar::Timestamp(value))
    }
}
