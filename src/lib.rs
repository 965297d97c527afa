//! # seon
//!
//! A streaming pretty-printer for the SEON (S-Expression Object Notation)
//! text format.
//!
//! ## What is SEON?
//!
//! SEON is a nested, self-describing text format: structs (`{name: value}`),
//! lists (`[1, 2]`), s-expressions (`(a b)`), scalars, typed nulls
//! (`null.int`), and `annotation::` prefixes. This crate is the write side
//! only: given a stream of "write this value / step into container / step
//! out" calls it emits human-readable, correctly delimited, consistently
//! indented text while enforcing the structural grammar of the format.
//!
//! ## Key Features
//!
//! - **Streaming writer**: push values through [`PrettyWriter`] without
//!   building an intermediate tree
//! - **Configurable layout**: indent size and a prettify depth beyond which
//!   deeply nested containers degrade to compact output
//! - **Grammar enforcement**: field names only inside structs, every
//!   announced field gets a value, balanced container nesting — violations
//!   fail fast with [`StructuralError`]
//! - **Serde compatible**: any `T: Serialize` turns into SEON text via
//!   [`to_string`], or into an owned [`Element`] tree via [`to_element`]
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use seon::to_string;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     name: String,
//!     active: bool,
//! }
//!
//! let user = User {
//!     id: 123,
//!     name: "Alice".to_string(),
//!     active: true,
//! };
//!
//! let text = to_string(&user).unwrap();
//! assert_eq!(text, "{\n  id: 123,\n  name: \"Alice\",\n  active: true\n}");
//! ```
//!
//! ## Streaming Writes
//!
//! The writer API mirrors the structure of the document. Top-level values
//! are newline-delimited:
//!
//! ```rust
//! use seon::{ContainerType, PrettyWriter, WriterOptions};
//!
//! let mut writer = PrettyWriter::new(WriterOptions::default());
//! writer.write_int(1).unwrap();
//! writer.annotate("deg");
//! writer.write_int(30).unwrap();
//! writer.step_in(ContainerType::SExp).unwrap();
//! writer.write_symbol("sum").unwrap();
//! writer.write_int(2).unwrap();
//! writer.step_out().unwrap();
//!
//! assert_eq!(
//!     writer.into_string().unwrap(),
//!     "1\ndeg::30\n(\n  sum\n  2\n)"
//! );
//! ```
//!
//! ## Layout Control
//!
//! ```rust
//! use seon::{to_string_compact, to_string_with_options, WriterOptions};
//!
//! let doc = vec![vec![1, 2]];
//!
//! // Compact: only structural punctuation.
//! assert_eq!(to_string_compact(&doc).unwrap(), "[[1,2]]");
//!
//! // Containers at depth >= 2 degrade to compact layout.
//! let options = WriterOptions::new().with_prettify_depth(2);
//! assert_eq!(
//!     to_string_with_options(&doc, options).unwrap(),
//!     "[\n  [1,2]\n]"
//! );
//! ```

pub mod error;
pub mod options;
pub mod pretty;
mod raw;
pub mod ser;
pub mod value;

pub use error::{Error, Result, StructuralError};
pub use options::WriterOptions;
pub use pretty::PrettyWriter;
pub use ser::{ElementSerializer, Serializer};
pub use value::{ContainerType, Element, Scalar, SeonType};

use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to pretty-printed SEON text.
///
/// Uses [`WriterOptions::default`]: 2-space indent, unbounded prettify
/// depth.
///
/// # Examples
///
/// ```rust
/// use seon::to_string;
///
/// assert_eq!(to_string(&vec![1, 2]).unwrap(), "[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized (e.g. a map with
/// non-string keys).
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WriterOptions::default())
}

/// Serialize any `T: Serialize` to compact SEON text.
///
/// The output carries only structural punctuation, no added whitespace.
///
/// # Examples
///
/// ```rust
/// use seon::to_string_compact;
///
/// assert_eq!(to_string_compact(&vec![1, 2]).unwrap(), "[1,2]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_compact<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, WriterOptions::compact())
}

/// Serialize any `T: Serialize` to SEON text with custom layout options.
///
/// # Examples
///
/// ```rust
/// use seon::{to_string_with_options, WriterOptions};
///
/// let options = WriterOptions::new().with_indent(4);
/// let text = to_string_with_options(&vec![1], options).unwrap();
/// assert_eq!(text, "[\n    1\n]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: WriterOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    serializer.into_string()
}

/// Convert any `T: Serialize` to an owned [`Element`] tree.
///
/// Useful for inspecting or reshaping a document before it is turned into
/// text.
///
/// # Examples
///
/// ```rust
/// use seon::{to_element, Element};
///
/// let element = to_element(&vec![1, 2, 3]).unwrap();
/// assert!(matches!(element, Element::List(items) if items.len() == 3));
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_element<T>(value: &T) -> Result<Element>
where
    T: ?Sized + Serialize,
{
    value.serialize(ElementSerializer)
}

/// Serialize any `T: Serialize` as pretty-printed SEON text to a writer.
///
/// # Examples
///
/// ```rust
/// use seon::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec![1, 2]).unwrap();
/// assert_eq!(buffer, b"[\n  1,\n  2\n]");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, WriterOptions::default())
}

/// Serialize any `T: Serialize` as SEON text to a writer with custom layout
/// options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: WriterOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    value.serialize(&mut serializer)?;
    writer
        .write_all(&serializer.into_bytes())
        .map_err(|err| Error::io(err.to_string()))?;
    Ok(())
}
