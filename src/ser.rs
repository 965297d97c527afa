//! serde support for SEON serialization.
//!
//! This module provides two serde serializers:
//!
//! - [`Serializer`]: streams any `T: Serialize` straight through a
//!   [`PrettyWriter`], producing SEON text without an intermediate tree.
//! - [`ElementSerializer`]: builds an owned [`Element`] tree, backing
//!   [`crate::to_element`]. It also resolves map keys for the streaming
//!   path, since SEON struct fields must be named by strings.
//!
//! ## Data model mapping
//!
//! | serde                  | SEON                          |
//! |------------------------|-------------------------------|
//! | bool / ints / floats   | scalars (`u64` and 128-bit values beyond `i64` become big integers) |
//! | str / char             | string                        |
//! | bytes                  | list of ints                  |
//! | unit / none            | `null`                        |
//! | unit variant           | symbol                        |
//! | newtype variant        | annotated value               |
//! | seq / tuple            | list                          |
//! | tuple variant          | annotated list                |
//! | map / struct           | struct                        |
//! | struct variant         | annotated struct              |
//!
//! ## Usage
//!
//! Most users should go through the high-level functions in the crate root:
//!
//! ```rust
//! use serde::Serialize;
//! use seon::to_string;
//!
//! #[derive(Serialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let point = Point { x: 1, y: 2 };
//! assert_eq!(to_string(&point).unwrap(), "{\n  x: 1,\n  y: 2\n}");
//! ```

use indexmap::IndexMap;
use num_bigint::BigInt;
use serde::{ser, Serialize};

use crate::error::{Error, Result};
use crate::options::WriterOptions;
use crate::pretty::PrettyWriter;
use crate::value::{ContainerType, Element, Scalar, SeonType};

/// A serde serializer that streams values through a [`PrettyWriter`].
///
/// Created via [`Serializer::new`] with layout options; consume the output
/// with [`Serializer::into_string`] or [`Serializer::into_bytes`].
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use seon::{Serializer, WriterOptions};
///
/// let mut serializer = Serializer::new(WriterOptions::compact());
/// vec![1, 2, 3].serialize(&mut serializer).unwrap();
/// assert_eq!(serializer.into_string().unwrap(), "[1,2,3]");
/// ```
pub struct Serializer {
    writer: PrettyWriter,
}

impl Serializer {
    #[must_use]
    pub fn new(options: WriterOptions) -> Self {
        Serializer {
            writer: PrettyWriter::new(options),
        }
    }

    /// Consumes the serializer, returning the emitted text.
    ///
    /// # Errors
    ///
    /// Fails only if an internal writer invariant broke.
    pub fn into_string(self) -> Result<String> {
        self.writer.into_string()
    }

    /// Consumes the serializer, returning the emitted bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_bytes()
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a>;
    type SerializeTuple = Compound<'a>;
    type SerializeTupleStruct = Compound<'a>;
    type SerializeTupleVariant = Compound<'a>;
    type SerializeMap = Compound<'a>;
    type SerializeStruct = Compound<'a>;
    type SerializeStructVariant = Compound<'a>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.writer.write_bool(v)
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.writer.write_int(v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        match i64::try_from(v) {
            Ok(n) => self.writer.write_int(n),
            Err(_) => self.writer.write_bigint(BigInt::from(v)),
        }
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        match i64::try_from(v) {
            Ok(n) => self.writer.write_int(n),
            Err(_) => self.writer.write_bigint(BigInt::from(v)),
        }
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        match i64::try_from(v) {
            Ok(n) => self.writer.write_int(n),
            Err(_) => self.writer.write_bigint(BigInt::from(v)),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.writer.write_float(v)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        self.writer.write_string(&v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.writer.write_string(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.writer.step_in(ContainerType::List)?;
        for byte in v {
            self.writer.write_int(i64::from(*byte))?;
        }
        self.writer.step_out()
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.writer.write_null(SeonType::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.writer.write_symbol(variant)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.writer.annotate(variant);
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        self.writer.step_in(ContainerType::List)?;
        Ok(Compound { ser: self })
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        self.writer.step_in(ContainerType::List)?;
        Ok(Compound { ser: self })
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.writer.step_in(ContainerType::List)?;
        Ok(Compound { ser: self })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        self.writer.annotate(variant);
        self.writer.step_in(ContainerType::List)?;
        Ok(Compound { ser: self })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        self.writer.step_in(ContainerType::Struct)?;
        Ok(Compound { ser: self })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        self.writer.step_in(ContainerType::Struct)?;
        Ok(Compound { ser: self })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        self.writer.annotate(variant);
        self.writer.step_in(ContainerType::Struct)?;
        Ok(Compound { ser: self })
    }
}

/// In-progress compound value for the streaming serializer. The opening
/// delimiter is already written; `end` steps back out.
pub struct Compound<'a> {
    ser: &'a mut Serializer,
}

impl ser::SerializeSeq for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

impl ser::SerializeTuple for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

impl ser::SerializeTupleStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

impl ser::SerializeTupleVariant for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

impl ser::SerializeMap for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ElementSerializer)? {
            Element::Scalar(Scalar::String(text) | Scalar::Symbol(text)) => {
                self.ser.writer.write_field_name(&text)
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

impl ser::SerializeStruct for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.writer.write_field_name(key)?;
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

impl ser::SerializeStructVariant for Compound<'_> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.ser.writer.write_field_name(key)?;
        value.serialize(&mut *self.ser)
    }

    fn end(self) -> Result<()> {
        self.ser.writer.step_out()
    }
}

/// A serde serializer producing an owned [`Element`] tree.
///
/// Useful when the output needs inspecting or reshaping before it is turned
/// into text. The mapping matches the streaming [`Serializer`] exactly.
///
/// # Examples
///
/// ```rust
/// use seon::{to_element, Element};
///
/// let element = to_element(&vec![1, 2]).unwrap();
/// assert!(matches!(element, Element::List(items) if items.len() == 2));
/// ```
pub struct ElementSerializer;

impl ser::Serializer for ElementSerializer {
    type Ok = Element;
    type Error = Error;

    type SerializeSeq = ElementSeq;
    type SerializeTuple = ElementSeq;
    type SerializeTupleStruct = ElementSeq;
    type SerializeTupleVariant = ElementSeq;
    type SerializeMap = ElementStructBuilder;
    type SerializeStruct = ElementStructBuilder;
    type SerializeStructVariant = ElementStructBuilder;

    fn serialize_bool(self, v: bool) -> Result<Element> {
        Ok(Element::Scalar(Scalar::Bool(v)))
    }

    fn serialize_i8(self, v: i8) -> Result<Element> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Element> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Element> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Element> {
        Ok(Element::Scalar(Scalar::Int(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Element> {
        Ok(match i64::try_from(v) {
            Ok(n) => Element::Scalar(Scalar::Int(n)),
            Err(_) => Element::Scalar(Scalar::BigInt(BigInt::from(v))),
        })
    }

    fn serialize_u8(self, v: u8) -> Result<Element> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Element> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Element> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Element> {
        Ok(match i64::try_from(v) {
            Ok(n) => Element::Scalar(Scalar::Int(n)),
            Err(_) => Element::Scalar(Scalar::BigInt(BigInt::from(v))),
        })
    }

    fn serialize_u128(self, v: u128) -> Result<Element> {
        Ok(match i64::try_from(v) {
            Ok(n) => Element::Scalar(Scalar::Int(n)),
            Err(_) => Element::Scalar(Scalar::BigInt(BigInt::from(v))),
        })
    }

    fn serialize_f32(self, v: f32) -> Result<Element> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Element> {
        Ok(Element::Scalar(Scalar::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Element> {
        Ok(Element::Scalar(Scalar::String(v.to_string())))
    }

    fn serialize_str(self, v: &str) -> Result<Element> {
        Ok(Element::Scalar(Scalar::String(v.to_string())))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Element> {
        Ok(Element::List(
            v.iter()
                .map(|byte| Element::Scalar(Scalar::Int(i64::from(*byte))))
                .collect(),
        ))
    }

    fn serialize_none(self) -> Result<Element> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<Element>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Element> {
        Ok(Element::Scalar(Scalar::Null(SeonType::Null)))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Element> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Element> {
        Ok(Element::Scalar(Scalar::Symbol(variant.to_string())))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Element>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Element>
    where
        T: ?Sized + Serialize,
    {
        Ok(Element::Annotated(
            vec![variant.to_string()],
            Box::new(value.serialize(ElementSerializer)?),
        ))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ElementSeq {
            items: Vec::with_capacity(len.unwrap_or(0)),
            variant: None,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(ElementSeq {
            items: Vec::with_capacity(len),
            variant: Some(variant),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(ElementStructBuilder {
            fields: IndexMap::new(),
            next_key: None,
            variant: None,
        })
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(ElementStructBuilder {
            fields: IndexMap::new(),
            next_key: None,
            variant: None,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(ElementStructBuilder {
            fields: IndexMap::new(),
            next_key: None,
            variant: Some(variant),
        })
    }
}

fn annotate_if(variant: Option<&'static str>, element: Element) -> Element {
    match variant {
        Some(name) => Element::Annotated(vec![name.to_string()], Box::new(element)),
        None => element,
    }
}

/// In-progress list for [`ElementSerializer`].
pub struct ElementSeq {
    items: Vec<Element>,
    variant: Option<&'static str>,
}

impl ser::SerializeSeq for ElementSeq {
    type Ok = Element;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::List(self.items)))
    }
}

impl ser::SerializeTuple for ElementSeq {
    type Ok = Element;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::List(self.items)))
    }
}

impl ser::SerializeTupleStruct for ElementSeq {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::List(self.items)))
    }
}

impl ser::SerializeTupleVariant for ElementSeq {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.items.push(value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::List(self.items)))
    }
}

/// In-progress struct for [`ElementSerializer`].
pub struct ElementStructBuilder {
    fields: IndexMap<String, Element>,
    next_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::SerializeMap for ElementStructBuilder {
    type Ok = Element;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(ElementSerializer)? {
            Element::Scalar(Scalar::String(text) | Scalar::Symbol(text)) => {
                self.next_key = Some(text);
                Ok(())
            }
            _ => Err(Error::custom("map keys must be strings")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.fields.insert(key, value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::Struct(self.fields)))
    }
}

impl ser::SerializeStruct for ElementStructBuilder {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields
            .insert(key.to_string(), value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::Struct(self.fields)))
    }
}

impl ser::SerializeStructVariant for ElementStructBuilder {
    type Ok = Element;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields
            .insert(key.to_string(), value.serialize(ElementSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Element> {
        Ok(annotate_if(self.variant, Element::Struct(self.fields)))
    }
}
