/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Field value types and per-tag typed storage.
//!
//! This module provides:
//! - [`ValueType`]: The semantic type a tag's raw text is materialized into
//! - [`FieldStore`]: Reusable typed value buffer owned by one message slot
//! - [`FieldValue`]: Borrowed view of one stored value
//! - [`Values`]: Iterator over every value stored under a tag

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// Byte written between successive values stored under the same tag.
///
/// SOH terminates every field on the wire, so no decoded value span can
/// contain it.
pub const MULTI_VALUE_DELIMITER: u8 = 0x01;

/// Inline capacity of a field store before it spills to the heap.
const INLINE_CAPACITY: usize = 16;

/// Semantic value type of a FIX field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    /// Single character.
    Char,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer (lengths and large counters).
    Length,
    /// Double precision floating point.
    Double,
    /// Text.
    String,
}

impl ValueType {
    /// Returns the encoded width in bytes of one stored value, or `None` for
    /// variable-width text.
    #[inline]
    #[must_use]
    pub const fn width(self) -> Option<usize> {
        match self {
            Self::Char => Some(1),
            Self::Int => Some(4),
            Self::Length | Self::Double => Some(8),
            Self::String => None,
        }
    }

    /// Returns the lowercase name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Char => "char",
            Self::Int => "int",
            Self::Length => "length",
            Self::Double => "double",
            Self::String => "string",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed view of one value stored in a [`FieldStore`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// Character value.
    Char(char),
    /// 32-bit integer value.
    Int(i32),
    /// 64-bit integer value.
    Length(i64),
    /// Floating point value.
    Double(f64),
    /// Text value.
    Str(&'a str),
    /// Untyped bytes stored for a tag the dictionary does not define.
    Raw(&'a [u8]),
}

impl<'a> FieldValue<'a> {
    /// Returns the value as an `i64`.
    ///
    /// Integer and length values convert directly; a digit character and
    /// numeric text are parsed.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(i64::from(v)),
            Self::Length(v) => Some(v),
            Self::Char(c) => c.to_digit(10).map(i64::from),
            Self::Str(s) => s.parse().ok(),
            Self::Raw(b) => std::str::from_utf8(b).ok()?.parse().ok(),
            Self::Double(_) => None,
        }
    }

    /// Returns the value as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Self::Double(v) => Some(v),
            Self::Int(v) => Some(f64::from(v)),
            Self::Length(v) => Some(v as f64),
            Self::Str(s) => s.parse().ok(),
            Self::Raw(b) => std::str::from_utf8(b).ok()?.parse().ok(),
            Self::Char(_) => None,
        }
    }

    /// Returns the value as a character.
    ///
    /// Text of exactly one ASCII byte also qualifies.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match *self {
            Self::Char(c) => Some(c),
            Self::Str(s) if s.len() == 1 => s.chars().next(),
            Self::Raw([b]) if b.is_ascii() => Some(*b as char),
            _ => None,
        }
    }

    /// Returns the value as text.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Self::Str(s) => Some(s),
            Self::Raw(b) => std::str::from_utf8(b).ok(),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::Int(v) => write!(f, "{}", v),
            Self::Length(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::Str(s) => f.write_str(s),
            Self::Raw(b) => write!(f, "<{} bytes>", b.len()),
        }
    }
}

/// Reusable typed value buffer for a single tag.
///
/// The store's length is its write cursor: a store with nothing written is
/// empty, meaning the tag is absent from the current message. Every push
/// after the first is preceded by [`MULTI_VALUE_DELIMITER`], so a tag seen
/// several times holds all of its values in arrival order.
///
/// Clearing keeps any heap capacity the store has grown, so a warmed-up
/// store never allocates again.
#[derive(Debug, Clone)]
pub struct FieldStore {
    tag: u32,
    value_type: Option<ValueType>,
    data: SmallVec<[u8; INLINE_CAPACITY]>,
}

impl FieldStore {
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `tag` - The tag number this store holds
    /// * `value_type` - The semantic type, or `None` for untyped raw bytes
    #[inline]
    #[must_use]
    pub fn new(tag: u32, value_type: Option<ValueType>) -> Self {
        Self {
            tag,
            value_type,
            data: SmallVec::new(),
        }
    }

    /// Returns the tag number.
    #[inline]
    #[must_use]
    pub const fn tag(&self) -> u32 {
        self.tag
    }

    /// Returns the semantic type, or `None` for raw storage.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> Option<ValueType> {
        self.value_type
    }

    /// Returns true if no value is stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the write cursor (number of stored bytes).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns the stored bytes, delimiters included.
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Resets the cursor to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    fn begin_value(&mut self) {
        if !self.data.is_empty() {
            self.data.push(MULTI_VALUE_DELIMITER);
        }
    }

    /// Appends a character value. Non-ASCII bytes read back as raw.
    #[inline]
    pub fn push_char(&mut self, value: u8) {
        self.begin_value();
        self.data.push(value);
    }

    /// Appends a 32-bit integer value.
    #[inline]
    pub fn push_int(&mut self, value: i32) {
        self.begin_value();
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a 64-bit integer value.
    #[inline]
    pub fn push_length(&mut self, value: i64) {
        self.begin_value();
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a floating point value.
    #[inline]
    pub fn push_double(&mut self, value: f64) {
        self.begin_value();
        self.data.extend_from_slice(&value.to_le_bytes());
    }

    /// Appends a text value.
    #[inline]
    pub fn push_str(&mut self, value: &str) {
        self.begin_value();
        self.data.extend_from_slice(value.as_bytes());
    }

    /// Appends untyped bytes.
    #[inline]
    pub fn push_raw(&mut self, value: &[u8]) {
        self.begin_value();
        self.data.extend_from_slice(value);
    }

    /// Returns an iterator over every stored value in arrival order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> Values<'_> {
        Values {
            value_type: self.value_type,
            rest: if self.data.is_empty() {
                None
            } else {
                Some(&self.data)
            },
        }
    }

    /// Returns the first stored value.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<FieldValue<'_>> {
        self.values().next()
    }

    /// Returns the number of stored values.
    #[must_use]
    pub fn value_count(&self) -> usize {
        self.values().count()
    }
}

/// Iterator over the values of a [`FieldStore`].
///
/// Fixed-width values are read by width, so encoded bytes equal to the
/// delimiter never split a value.
#[derive(Debug, Clone)]
pub struct Values<'a> {
    value_type: Option<ValueType>,
    rest: Option<&'a [u8]>,
}

impl<'a> Iterator for Values<'a> {
    type Item = FieldValue<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest.take()?;

        let Some(width) = self.value_type.and_then(ValueType::width) else {
            let (value, tail) = match rest.iter().position(|&b| b == MULTI_VALUE_DELIMITER) {
                Some(i) => (&rest[..i], Some(&rest[i + 1..])),
                None => (rest, None),
            };
            self.rest = tail;
            return Some(match (self.value_type, std::str::from_utf8(value)) {
                (Some(ValueType::String), Ok(s)) => FieldValue::Str(s),
                _ => FieldValue::Raw(value),
            });
        };

        if rest.len() < width {
            return None;
        }
        let (value, tail) = rest.split_at(width);
        if let Some((_, after)) = tail.split_first() {
            self.rest = Some(after);
        }

        let value = match self.value_type? {
            ValueType::Char => match value {
                [c] if c.is_ascii() => FieldValue::Char(char::from(*c)),
                _ => FieldValue::Raw(value),
            },
            ValueType::Int => FieldValue::Int(i32::from_le_bytes(value.try_into().ok()?)),
            ValueType::Length => FieldValue::Length(i64::from_le_bytes(value.try_into().ok()?)),
            ValueType::Double => FieldValue::Double(f64::from_le_bytes(value.try_into().ok()?)),
            ValueType::String => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_width() {
        assert_eq!(ValueType::Char.width(), Some(1));
        assert_eq!(ValueType::Int.width(), Some(4));
        assert_eq!(ValueType::Length.width(), Some(8));
        assert_eq!(ValueType::Double.width(), Some(8));
        assert_eq!(ValueType::String.width(), None);
    }

    #[test]
    fn test_store_starts_empty() {
        let store = FieldStore::new(58, Some(ValueType::String));
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.first().is_none());
        assert_eq!(store.value_count(), 0);
    }

    #[test]
    fn test_store_multi_value_text() {
        let mut store = FieldStore::new(58, Some(ValueType::String));
        store.push_str("A");
        store.push_str("B");

        assert_eq!(store.as_bytes(), &[b'A', MULTI_VALUE_DELIMITER, b'B']);
        let values: Vec<_> = store.values().collect();
        assert_eq!(values, vec![FieldValue::Str("A"), FieldValue::Str("B")]);
    }

    #[test]
    fn test_store_multi_value_fixed_width() {
        // 1 encodes as 01 00 00 00, the first byte equal to the delimiter.
        let mut store = FieldStore::new(38, Some(ValueType::Int));
        store.push_int(1);
        store.push_int(-7);
        store.push_int(300);

        assert_eq!(store.len(), 4 * 3 + 2);
        let values: Vec<_> = store.values().collect();
        assert_eq!(
            values,
            vec![FieldValue::Int(1), FieldValue::Int(-7), FieldValue::Int(300)]
        );
    }

    #[test]
    fn test_store_char_reads_ascii_only() {
        let mut store = FieldStore::new(54, Some(ValueType::Char));
        store.push_char(b'2');
        store.push_char(0xC3);

        let values: Vec<_> = store.values().collect();
        assert_eq!(values, vec![FieldValue::Char('2'), FieldValue::Raw(&[0xC3])]);
    }

    #[test]
    fn test_store_double_and_length() {
        let mut price = FieldStore::new(44, Some(ValueType::Double));
        price.push_double(7900.0);
        assert_eq!(price.first(), Some(FieldValue::Double(7900.0)));

        let mut len = FieldStore::new(9, Some(ValueType::Length));
        len.push_length(154);
        assert_eq!(len.first(), Some(FieldValue::Length(154)));
    }

    #[test]
    fn test_store_clear_resets_cursor() {
        let mut store = FieldStore::new(58, Some(ValueType::String));
        store.push_str("a value long enough to spill past the inline buffer");
        store.clear();

        assert!(store.is_empty());
        store.push_str("fresh");
        assert_eq!(store.first(), Some(FieldValue::Str("fresh")));
        assert_eq!(store.value_count(), 1);
    }

    #[test]
    fn test_store_raw() {
        let mut store = FieldStore::new(9999, None);
        store.push_raw(b"custom");
        assert_eq!(store.first(), Some(FieldValue::Raw(b"custom")));
        assert_eq!(store.first().and_then(|v| v.as_str()), Some("custom"));
    }

    #[test]
    fn test_field_value_coercion() {
        assert_eq!(FieldValue::Char('2').as_i64(), Some(2));
        assert_eq!(FieldValue::Char('H').as_i64(), None);
        assert_eq!(FieldValue::Str("238").as_i64(), Some(238));
        assert_eq!(FieldValue::Int(42).as_f64(), Some(42.0));
        assert_eq!(FieldValue::Str("6").as_char(), Some('6'));
        assert_eq!(FieldValue::Double(1.5).as_i64(), None);
        assert_eq!(FieldValue::Double(1.5).as_str(), None);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::Str("BRKR").to_string(), "BRKR");
        assert_eq!(FieldValue::Int(42).to_string(), "42");
        assert_eq!(FieldValue::Char('N').to_string(), "N");
        assert_eq!(FieldValue::Raw(b"abc").to_string(), "<3 bytes>");
    }
}
