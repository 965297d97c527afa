//! Error types for SEON serialization.
//!
//! Two failure families exist:
//!
//! - [`StructuralError`]: the caller violated the structural grammar of the
//!   format (a field name outside a struct, a value where a field name was
//!   expected, closing a container that isn't open). These are fail-fast: the
//!   writer may already have emitted bytes and must be discarded.
//! - [`Error::Internal`]: an internal invariant of the writer was violated.
//!   This indicates a bug in the writer itself, not caller misuse.
//!
//! All operations are pure, local, and deterministic, so no error is worth
//! retrying; it propagates synchronously to the caller of the violating
//! operation.
//!
//! ## Examples
//!
//! ```rust
//! use seon::{PrettyWriter, WriterOptions};
//!
//! let mut writer = PrettyWriter::new(WriterOptions::default());
//! let err = writer.write_field_name("orphan").unwrap_err();
//! assert!(err.is_structural());
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors the writer and its serde adapters produce.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The caller violated the structural grammar. Non-recoverable for the
    /// current writer instance.
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),

    /// An internal writer invariant was violated; a bug in the writer, not
    /// caller misuse.
    #[error("internal writer error: {0}")]
    Internal(String),

    /// IO error while flushing serialized text to an [`std::io::Write`] sink.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message, used by serde's `custom` entry point.
    #[error("{0}")]
    Message(String),
}

/// A grammar violation, one variant per reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StructuralError {
    /// A field name was written while the current container is not a struct.
    #[error("cannot write a field name outside a struct")]
    FieldNameOutsideStruct,

    /// A field name was written while the struct already has a pending one.
    #[error("expected a value, not a field name")]
    ExpectedValue,

    /// A value was written while the enclosing struct expects a field name.
    #[error("a field name must precede every value in a struct")]
    ExpectedFieldName,

    /// A container was closed while a previously announced field still has
    /// no value.
    #[error("expecting a struct value")]
    DanglingFieldName,

    /// A container was closed at the top level.
    #[error("not inside a container")]
    NotInContainer,
}

impl Error {
    /// Creates an internal-invariant error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Error::Internal(msg.into())
    }

    /// Creates an IO error from a sink failure.
    pub fn io(msg: impl Into<String>) -> Self {
        Error::Io(msg.into())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }

    /// Returns `true` for grammar violations raised by the structural checks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seon::{ContainerType, PrettyWriter, WriterOptions};
    ///
    /// let mut writer = PrettyWriter::new(WriterOptions::default());
    /// writer.step_in(ContainerType::Struct).unwrap();
    /// assert!(writer.write_int(1).unwrap_err().is_structural());
    /// ```
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Error::Structural(_))
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
