//! Configuration options for SEON layout.
//!
//! [`WriterOptions`] controls how much whitespace the writer adds around the
//! structural punctuation. It never affects the emitted values themselves,
//! only their layout.
//!
//! ## Examples
//!
//! ```rust
//! use seon::{to_string_with_options, WriterOptions};
//!
//! let data = vec![1, 2];
//!
//! // Default: 2-space indent, unbounded prettify depth.
//! let pretty = to_string_with_options(&data, WriterOptions::default()).unwrap();
//! assert_eq!(pretty, "[\n  1,\n  2\n]");
//!
//! // Compact: structural punctuation only.
//! let compact = to_string_with_options(&data, WriterOptions::compact()).unwrap();
//! assert_eq!(compact, "[1,2]");
//! ```

/// Layout configuration for [`crate::PrettyWriter`].
///
/// Two knobs control the output shape:
///
/// - `indent`: spaces per nesting level. `0` disables all added newlines,
///   indentation, and padding, producing compact output with only the
///   mandatory separators.
/// - `prettify_depth`: containers nested at or beyond this depth are emitted
///   without added whitespace, degrading gracefully to compact layout for
///   deeply nested data. `None` means no limit.
///
/// Options are fixed at writer construction and cannot change mid-stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WriterOptions {
    pub indent: usize,
    pub prettify_depth: Option<usize>,
}

impl Default for WriterOptions {
    fn default() -> Self {
        WriterOptions {
            indent: 2,
            prettify_depth: None,
        }
    }
}

impl WriterOptions {
    /// Creates the default pretty options (2-space indent, unbounded depth).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seon::WriterOptions;
    ///
    /// let options = WriterOptions::new();
    /// assert_eq!(options.indent, 2);
    /// assert_eq!(options.prettify_depth, None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for compact output with only structural punctuation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seon::WriterOptions;
    ///
    /// let options = WriterOptions::compact();
    /// assert_eq!(options.indent, 0);
    /// ```
    #[must_use]
    pub fn compact() -> Self {
        WriterOptions {
            indent: 0,
            ..Default::default()
        }
    }

    /// Sets the indentation size (spaces per nesting level).
    ///
    /// `0` disables all added whitespace.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Suppresses added whitespace for containers nested at or beyond
    /// `depth`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seon::{to_string_with_options, WriterOptions};
    ///
    /// let doc = vec![vec![1], vec![2]];
    /// let options = WriterOptions::new().with_prettify_depth(2);
    /// let text = to_string_with_options(&doc, options).unwrap();
    /// assert_eq!(text, "[\n  [1],\n  [2]\n]");
    /// ```
    #[must_use]
    pub fn with_prettify_depth(mut self, depth: usize) -> Self {
        self.prettify_depth = Some(depth);
        self
    }
}
