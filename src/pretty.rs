//! The pretty-printing layer of the SEON writer.
//!
//! [`PrettyWriter`] wraps the raw token emitter and decides, for every token,
//! whether a separator, a line break, and how much indentation precede it.
//! The decision depends on the enclosing container kind, the nesting depth,
//! whether the container already has a child, and the configured prettify
//! depth beyond which layout degrades to compact output.
//!
//! The writer also enforces the structural grammar of the format: field names
//! are only legal inside a struct that expects one, every announced field
//! must receive a value, and containers must be closed in order. A grammar
//! violation fails fast with [`StructuralError`]; the writer must then be
//! discarded, since bytes already emitted are never retracted.
//!
//! ## Layout rules
//!
//! - Top-level values are separated by bare newlines, never commas.
//! - List elements separate with `,`, s-expression elements with a space;
//!   within the prettify depth the writer puts every element on its own
//!   indented line instead.
//! - Struct fields separate with `,` and a line break owned by the
//!   field-name path; values follow `name: ` on the same line.
//! - An empty container is exactly its two delimiter bytes, at any depth.
//!
//! ## Examples
//!
//! ```rust
//! use seon::{ContainerType, PrettyWriter, WriterOptions};
//!
//! let mut writer = PrettyWriter::new(WriterOptions::default());
//! writer.step_in(ContainerType::Struct).unwrap();
//! writer.write_field_name("a").unwrap();
//! writer.write_int(1).unwrap();
//! writer.write_field_name("b").unwrap();
//! writer.write_int(2).unwrap();
//! writer.step_out().unwrap();
//!
//! assert_eq!(writer.into_string().unwrap(), "{\n  a: 1,\n  b: 2\n}");
//! ```

use chrono::{DateTime, Utc};
use num_bigint::BigInt;

use crate::error::{Error, Result, StructuralError};
use crate::options::WriterOptions;
use crate::raw::{Frame, FrameState, RawWriter};
use crate::value::{ContainerType, Element, Scalar, SeonType};

/// A streaming SEON text writer with configurable pretty layout.
///
/// Values are written through a push API: scalars and nulls directly,
/// containers by stepping in and out. The writer owns its byte sink; consume
/// it with [`PrettyWriter::into_bytes`] or [`PrettyWriter::into_string`].
///
/// A writer instance is single-threaded state with a strict call protocol;
/// after any [`StructuralError`] it is inconsistent and must be dropped.
///
/// # Examples
///
/// ```rust
/// use seon::{ContainerType, PrettyWriter, WriterOptions};
///
/// let mut writer = PrettyWriter::new(WriterOptions::default());
/// writer.step_in(ContainerType::List).unwrap();
/// writer.write_int(1).unwrap();
/// writer.write_int(2).unwrap();
/// writer.step_out().unwrap();
///
/// assert_eq!(writer.into_string().unwrap(), "[\n  1,\n  2\n]");
/// ```
pub struct PrettyWriter {
    raw: RawWriter,
    options: WriterOptions,
    indent_count: usize,
}

impl Default for PrettyWriter {
    fn default() -> Self {
        Self::new(WriterOptions::default())
    }
}

impl PrettyWriter {
    #[must_use]
    pub fn new(options: WriterOptions) -> Self {
        PrettyWriter {
            raw: RawWriter::new(),
            options,
            indent_count: 0,
        }
    }

    /// Current container nesting depth; 0 at top level.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.raw.depth()
    }

    /// Queues an annotation for the next value or container, emitted as an
    /// `annotation::` prefix.
    ///
    /// ```rust
    /// use seon::{PrettyWriter, WriterOptions};
    ///
    /// let mut writer = PrettyWriter::new(WriterOptions::default());
    /// writer.annotate("deg");
    /// writer.write_int(30).unwrap();
    /// assert_eq!(writer.into_string().unwrap(), "deg::30");
    /// ```
    pub fn annotate(&mut self, annotation: impl Into<String>) {
        self.raw.annotate(annotation.into());
    }

    /// Writes a struct field name followed by `: `.
    ///
    /// # Errors
    ///
    /// Fails with a [`StructuralError`] when the current container is not a
    /// struct, or when the struct already has a pending field name.
    pub fn write_field_name(&mut self, name: &str) -> Result<()> {
        let parent = self.raw.parent();
        if parent.container != Some(ContainerType::Struct) {
            return Err(StructuralError::FieldNameOutsideStruct.into());
        }
        if parent.state == FrameState::ExpectValue {
            return Err(StructuralError::ExpectedValue.into());
        }
        if self.raw.parent().clean {
            // Line break after the opening brace, deferred from step_in so
            // that empty structs stay on one line.
            self.write_pretty_newline(0);
        } else {
            self.raw.push_byte(b',');
            self.write_pretty_newline(0);
        }
        self.write_pretty_indent(0);
        self.raw.serialize_symbol_token(name);
        self.raw.push_byte(b':');
        if self.options.indent > 0 {
            self.raw.push_byte(b' ');
        }
        self.raw.parent_mut().state = FrameState::ExpectValue;
        Ok(())
    }

    /// Writes a null of the given type: `null` for [`SeonType::Null`],
    /// `null.<name>` otherwise.
    ///
    /// # Errors
    ///
    /// Fails with a [`StructuralError`] when the enclosing struct expects a
    /// field name.
    pub fn write_null(&mut self, tpe: SeonType) -> Result<()> {
        self.check_value_allowed()?;
        self.handle_separator();
        self.write_pretty_value();
        self.raw.serialize_annotations();
        self.raw.serialize_null(tpe);
        self.end_value();
        Ok(())
    }

    /// Writes a scalar value. Nulls are redirected to [`Self::write_null`].
    ///
    /// # Errors
    ///
    /// Fails with a [`StructuralError`] when the enclosing struct expects a
    /// field name.
    pub fn write_value(&mut self, value: &Scalar) -> Result<()> {
        if let Scalar::Null(tpe) = value {
            return self.write_null(*tpe);
        }
        self.check_value_allowed()?;
        self.handle_separator();
        self.write_pretty_value();
        self.raw.serialize_annotations();
        self.raw.serialize_scalar(value);
        self.end_value();
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_value(&Scalar::Bool(value))
    }

    pub fn write_int(&mut self, value: i64) -> Result<()> {
        self.write_value(&Scalar::Int(value))
    }

    pub fn write_bigint(&mut self, value: BigInt) -> Result<()> {
        self.write_value(&Scalar::BigInt(value))
    }

    pub fn write_float(&mut self, value: f64) -> Result<()> {
        self.write_value(&Scalar::Float(value))
    }

    pub fn write_timestamp(&mut self, value: DateTime<Utc>) -> Result<()> {
        self.write_value(&Scalar::Timestamp(value))
    }

    /// Writes a symbol token, bare or single-quoted as needed.
    pub fn write_symbol(&mut self, value: &str) -> Result<()> {
        self.write_value(&Scalar::Symbol(value.to_string()))
    }

    /// Writes a double-quoted, escaped string.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_value(&Scalar::String(value.to_string()))
    }

    /// Opens a list, s-expression, or struct.
    ///
    /// Inside a struct the container itself counts as the announced field's
    /// value, so the frame flips back to expecting a field name before the
    /// layout work happens.
    ///
    /// # Errors
    ///
    /// Fails with a [`StructuralError`] when the enclosing struct expects a
    /// field name.
    pub fn step_in(&mut self, container: ContainerType) -> Result<()> {
        let parent = self.raw.parent_mut();
        if parent.container == Some(ContainerType::Struct) {
            match parent.state {
                FrameState::ExpectFieldName => {
                    return Err(StructuralError::ExpectedFieldName.into());
                }
                FrameState::ExpectValue => parent.state = FrameState::ExpectFieldName,
            }
        }
        self.handle_separator();
        self.write_pretty_value();
        self.raw.serialize_annotations();
        self.raw.push_byte(match container {
            ContainerType::List => b'[',
            ContainerType::SExp => b'(',
            ContainerType::Struct => b'{',
        });
        // The line break that follows the delimiter is deferred until the
        // first child arrives, so an empty container closes on the same
        // line. Only the indent counter moves here.
        if self.prettify_at(self.raw.depth() + 1) {
            self.indent_count += 1;
        }
        self.raw.push_frame(Frame::open(container));
        Ok(())
    }

    /// Closes the innermost open container.
    ///
    /// # Errors
    ///
    /// Fails with a [`StructuralError`] when no container is open or when a
    /// previously announced struct field still has no value.
    pub fn step_out(&mut self) -> Result<()> {
        let depth = self.raw.depth();
        let frame = self
            .raw
            .pop_frame()
            .ok_or(StructuralError::NotInContainer)?;
        if frame.container == Some(ContainerType::Struct)
            && frame.state == FrameState::ExpectValue
        {
            return Err(StructuralError::DanglingFieldName.into());
        }
        if self.prettify_at(depth) {
            if frame.clean {
                self.indent_count = self.indent_count.saturating_sub(1);
            } else {
                self.write_pretty_newline(0);
                self.write_pretty_indent(-1);
            }
        }
        match frame.container {
            Some(ContainerType::List) => self.raw.push_byte(b']'),
            Some(ContainerType::SExp) => self.raw.push_byte(b')'),
            Some(ContainerType::Struct) => self.raw.push_byte(b'}'),
            None => {
                return Err(Error::internal(
                    "closed a container frame with no container type",
                ))
            }
        }
        Ok(())
    }

    /// Writes an owned [`Element`] tree through the streaming API.
    ///
    /// # Errors
    ///
    /// A well-formed tree cannot violate the structural grammar; errors can
    /// only surface from internal invariants.
    pub fn write_element(&mut self, element: &Element) -> Result<()> {
        match element {
            Element::Scalar(value) => self.write_value(value),
            Element::Annotated(annotations, inner) => {
                for annotation in annotations {
                    self.annotate(annotation.clone());
                }
                self.write_element(inner)
            }
            Element::List(items) => {
                self.step_in(ContainerType::List)?;
                for item in items {
                    self.write_element(item)?;
                }
                self.step_out()
            }
            Element::SExp(items) => {
                self.step_in(ContainerType::SExp)?;
                for item in items {
                    self.write_element(item)?;
                }
                self.step_out()
            }
            Element::Struct(fields) => {
                self.step_in(ContainerType::Struct)?;
                for (name, value) in fields {
                    self.write_field_name(name)?;
                    self.write_element(value)?;
                }
                self.step_out()
            }
        }
    }

    /// Consumes the writer, returning the emitted bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.raw.into_bytes()
    }

    /// Consumes the writer, returning the emitted text.
    ///
    /// # Errors
    ///
    /// The writer only ever appends UTF-8; a conversion failure means an
    /// internal invariant broke.
    pub fn into_string(self) -> Result<String> {
        String::from_utf8(self.into_bytes()).map_err(|err| Error::internal(err.to_string()))
    }

    /// True when containers at `depth` still receive pretty layout.
    fn prettify_at(&self, depth: usize) -> bool {
        self.options.prettify_depth.map_or(true, |limit| depth < limit)
    }

    /// Decides what separates the element about to be written from its
    /// predecessor. The first child of any container flips the frame's
    /// `clean` flag instead of separating.
    fn handle_separator(&mut self) {
        let depth = self.raw.depth();
        if depth == 0 {
            if self.raw.parent().clean {
                self.raw.parent_mut().clean = false;
            } else {
                // Top-level values are newline-delimited, never comma'd.
                self.raw.push_byte(b'\n');
            }
            return;
        }
        let container = self.raw.parent().container;
        if self.raw.parent().clean {
            self.raw.parent_mut().clean = false;
            // The deferred line break after the opening delimiter. Struct
            // layout is owned by write_field_name.
            if matches!(
                container,
                Some(ContainerType::List | ContainerType::SExp)
            ) {
                self.write_pretty_newline(0);
            }
        } else {
            match container {
                Some(ContainerType::List) => {
                    self.raw.push_byte(b',');
                    if self.prettify_at(depth) {
                        self.write_pretty_newline(0);
                    }
                }
                Some(ContainerType::SExp) => {
                    if self.options.indent > 0 && self.prettify_at(depth) {
                        self.write_pretty_newline(0);
                    } else {
                        self.raw.push_byte(b' ');
                    }
                }
                // Struct field separators are emitted by write_field_name.
                _ => {}
            }
        }
    }

    /// Indents a value in a list or s-expression. Struct values already sit
    /// behind `name: ` and need no indentation of their own.
    fn write_pretty_value(&mut self) {
        if self.raw.depth() > 0 && self.raw.parent().container != Some(ContainerType::Struct) {
            self.write_pretty_indent(0);
        }
    }

    /// Applies `increment` to the indent counter, then emits a line feed when
    /// layout is active at the current depth. The counter moves even when no
    /// byte is emitted.
    fn write_pretty_newline(&mut self, increment: isize) {
        self.indent_count = self.indent_count.saturating_add_signed(increment);
        if self.options.indent > 0 && self.prettify_at(self.raw.depth()) {
            self.raw.push_byte(b'\n');
        }
    }

    /// Applies `increment` to the indent counter, then emits the indentation
    /// for the current level when layout is active at the current depth.
    fn write_pretty_indent(&mut self, increment: isize) {
        self.indent_count = self.indent_count.saturating_add_signed(increment);
        if self.options.indent > 0 && self.prettify_at(self.raw.depth()) {
            for _ in 0..self.indent_count * self.options.indent {
                self.raw.push_byte(b' ');
            }
        }
    }

    fn check_value_allowed(&self) -> Result<()> {
        let parent = self.raw.parent();
        if parent.container == Some(ContainerType::Struct)
            && parent.state == FrameState::ExpectFieldName
        {
            return Err(StructuralError::ExpectedFieldName.into());
        }
        Ok(())
    }

    /// A completed value sends the enclosing struct back to expecting a
    /// field name.
    fn end_value(&mut self) {
        let parent = self.raw.parent_mut();
        if parent.container == Some(ContainerType::Struct) {
            parent.state = FrameState::ExpectFieldName;
        }
    }
}
