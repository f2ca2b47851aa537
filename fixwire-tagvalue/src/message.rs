/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Tag-indexed decoded message.
//!
//! A [`Message`] owns one [`FieldStore`] per dictionary tag, laid out so the
//! store for tag `n` sits at index `n`. Most slots stay empty for any given
//! message; the message remembers which tags it populated so a reset only
//! touches those.
//!
//! Repeated tags are appended to the same store with the multi-value
//! delimiter. This also happens for the fields of a repeating group, which
//! this representation does not model: messages are flat tag/value sets.

use fixwire_core::error::FieldError;
use fixwire_core::field::{FieldStore, FieldValue, ValueType, Values};
use fixwire_dictionary::Dictionary;
use smallvec::SmallVec;
use std::sync::Arc;

/// BeginString tag.
pub const BEGIN_STRING: u32 = 8;

/// MsgType tag.
pub const MSG_TYPE: u32 = 35;

/// Overflow stores kept across resets. Stores for further tags above the
/// dictionary range are dropped on reset.
pub const OVERFLOW_RETAINED: usize = 4;

/// One decoded FIX message.
#[derive(Debug, Clone)]
pub struct Message {
    /// Shared dictionary used to type each slot.
    dictionary: Arc<Dictionary>,
    /// Stores indexed by tag, sized to the dictionary's highest tag.
    fields: Box<[FieldStore]>,
    /// Raw stores for tags above the dictionary's highest tag.
    overflow: SmallVec<[FieldStore; OVERFLOW_RETAINED]>,
    /// Tags written since the last reset, in first-seen order.
    populated: SmallVec<[u32; 32]>,
}

impl Message {
    /// Creates an empty message with one store per dictionary tag.
    ///
    /// # Arguments
    /// * `dictionary` - The dictionary that types every slot
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        let fields = (0..=dictionary.max_tag())
            .map(|tag| FieldStore::new(tag, dictionary.value_type(tag)))
            .collect();
        Self {
            dictionary,
            fields,
            overflow: SmallVec::new(),
            populated: SmallVec::new(),
        }
    }

    /// Returns the dictionary this message was built from.
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Returns the store a decoder writes the next value of `tag` into,
    /// recording the tag as populated.
    pub(crate) fn write_store(&mut self, tag: u32) -> &mut FieldStore {
        let index = tag as usize;
        if index < self.fields.len() {
            if self.fields[index].is_empty() && !self.populated.contains(&tag) {
                self.populated.push(tag);
            }
            return &mut self.fields[index];
        }

        let slot = match self.overflow.iter().position(|s| s.tag() == tag) {
            Some(slot) => slot,
            None => match self.overflow.iter().position(FieldStore::is_empty) {
                Some(slot) => {
                    self.overflow[slot] = FieldStore::new(tag, None);
                    slot
                }
                None => {
                    self.overflow.push(FieldStore::new(tag, None));
                    self.overflow.len() - 1
                }
            },
        };
        if self.overflow[slot].is_empty() && !self.populated.contains(&tag) {
            self.populated.push(tag);
        }
        &mut self.overflow[slot]
    }

    fn store(&self, tag: u32) -> Option<&FieldStore> {
        match self.fields.get(tag as usize) {
            Some(store) => Some(store),
            None => self.overflow.iter().find(|s| s.tag() == tag),
        }
    }

    /// Clears every populated store. Calling it on an empty message does
    /// nothing.
    ///
    /// At most [`OVERFLOW_RETAINED`] overflow stores survive a reset, so a
    /// long-lived message does not grow with every distinct unknown tag it
    /// has seen.
    pub fn reset(&mut self) {
        for tag in self.populated.drain(..) {
            if let Some(store) = self.fields.get_mut(tag as usize) {
                store.clear();
            }
        }
        if self.overflow.len() > OVERFLOW_RETAINED {
            self.overflow.truncate(OVERFLOW_RETAINED);
            self.overflow.shrink_to_fit();
        }
        for store in &mut self.overflow {
            store.clear();
        }
    }

    /// Returns the store for a tag, or `None` if the message carries no
    /// value for it.
    #[inline]
    #[must_use]
    pub fn field(&self, tag: u32) -> Option<&FieldStore> {
        self.store(tag).filter(|s| !s.is_empty())
    }

    /// Returns true if the message carries a value for the tag.
    #[inline]
    #[must_use]
    pub fn contains(&self, tag: u32) -> bool {
        self.field(tag).is_some()
    }

    /// Returns the first value of a tag.
    #[inline]
    #[must_use]
    pub fn get(&self, tag: u32) -> Option<FieldValue<'_>> {
        self.field(tag)?.first()
    }

    /// Returns every value of a tag in arrival order.
    #[must_use]
    pub fn values(&self, tag: u32) -> Option<Values<'_>> {
        self.field(tag).map(FieldStore::values)
    }

    fn read<'a, T>(
        &'a self,
        tag: u32,
        expected: ValueType,
        convert: impl FnOnce(FieldValue<'a>) -> Option<T>,
    ) -> Result<T, FieldError> {
        let value = self.get(tag).ok_or(FieldError::Missing { tag })?;
        convert(value).ok_or(FieldError::TypeMismatch { tag, expected })
    }

    /// Reads the first value of a tag as a character.
    ///
    /// # Errors
    /// Returns `FieldError::Missing` if the tag is absent, or
    /// `FieldError::TypeMismatch` if the value is not a single character.
    pub fn get_char(&self, tag: u32) -> Result<char, FieldError> {
        self.read(tag, ValueType::Char, |v| v.as_char())
    }

    /// Reads the first value of a tag as an integer.
    ///
    /// # Errors
    /// Returns `FieldError::Missing` if the tag is absent, or
    /// `FieldError::TypeMismatch` if the value is not integral.
    pub fn get_i64(&self, tag: u32) -> Result<i64, FieldError> {
        self.read(tag, ValueType::Length, |v| v.as_i64())
    }

    /// Reads the first value of a tag as a floating point number.
    ///
    /// # Errors
    /// Returns `FieldError::Missing` if the tag is absent, or
    /// `FieldError::TypeMismatch` if the value is not numeric.
    pub fn get_f64(&self, tag: u32) -> Result<f64, FieldError> {
        self.read(tag, ValueType::Double, |v| v.as_f64())
    }

    /// Reads the first value of a tag as text.
    ///
    /// # Errors
    /// Returns `FieldError::Missing` if the tag is absent, or
    /// `FieldError::TypeMismatch` if the value is not text.
    pub fn get_str(&self, tag: u32) -> Result<&str, FieldError> {
        self.read(tag, ValueType::String, |v| v.as_str())
    }

    /// Returns the BeginString (tag 8) value.
    #[must_use]
    pub fn begin_string(&self) -> Option<&str> {
        self.get_str(BEGIN_STRING).ok()
    }

    /// Returns the MsgType (tag 35) value.
    #[must_use]
    pub fn msg_type(&self) -> Option<&str> {
        self.get_str(MSG_TYPE).ok()
    }

    /// Returns the dictionary name of a tag.
    #[inline]
    #[must_use]
    pub fn name(&self, tag: u32) -> Option<&str> {
        self.dictionary.name(tag)
    }

    /// Returns the tags carrying a value, in first-seen order.
    #[inline]
    #[must_use]
    pub fn populated_tags(&self) -> &[u32] {
        &self.populated
    }

    /// Returns the number of distinct tags carrying a value.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields().count()
    }

    /// Returns true if no tag carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Returns an iterator over the populated stores in first-seen order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldStore> {
        self.populated.iter().filter_map(|&tag| self.field(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message() -> Message {
        Message::new(Arc::new(Dictionary::fix42()))
    }

    #[test]
    fn test_message_slots_typed_from_dictionary() {
        let msg = message();
        assert!(msg.is_empty());
        assert_eq!(msg.field_count(), 0);
        assert_eq!(msg.fields.len(), 447);
        assert_eq!(msg.fields[44].value_type(), Some(ValueType::Double));
        assert_eq!(msg.fields[101].value_type(), None);
        assert_eq!(msg.name(55), Some("Symbol"));
    }

    #[test]
    fn test_write_and_read() {
        let mut msg = message();
        msg.write_store(49).push_str("BRKR");
        msg.write_store(44).push_double(7900.0);
        msg.write_store(54).push_char(b'2');

        assert_eq!(msg.get_str(49), Ok("BRKR"));
        assert_eq!(msg.get_f64(44), Ok(7900.0));
        assert_eq!(msg.get_char(54), Ok('2'));
        assert_eq!(msg.get_i64(54), Ok(2));
        assert_eq!(msg.populated_tags(), &[49, 44, 54]);
        assert_eq!(msg.field_count(), 3);
    }

    #[test]
    fn test_read_errors() {
        let mut msg = message();
        msg.write_store(44).push_double(1.25);

        assert_eq!(msg.get_str(58), Err(FieldError::Missing { tag: 58 }));
        assert_eq!(
            msg.get_char(44),
            Err(FieldError::TypeMismatch {
                tag: 44,
                expected: ValueType::Char
            })
        );
    }

    #[test]
    fn test_repeated_write_records_tag_once() {
        let mut msg = message();
        msg.write_store(58).push_str("A");
        msg.write_store(58).push_str("B");

        assert_eq!(msg.populated_tags(), &[58]);
        let values: Vec<_> = msg.values(58).unwrap().collect();
        assert_eq!(values, vec![FieldValue::Str("A"), FieldValue::Str("B")]);
    }

    #[test]
    fn test_overflow_tags() {
        let mut msg = message();
        msg.write_store(9001).push_raw(b"vendor");

        assert_eq!(msg.get(9001), Some(FieldValue::Raw(b"vendor")));
        assert_eq!(msg.get_str(9001), Ok("vendor"));
        assert!(msg.name(9001).is_none());

        msg.reset();
        assert!(!msg.contains(9001));
        assert_eq!(msg.overflow.len(), 1);

        msg.write_store(9001).push_raw(b"again");
        assert_eq!(msg.overflow.len(), 1);
        assert_eq!(msg.get_str(9001), Ok("again"));
    }

    #[test]
    fn test_overflow_bounded_across_resets() {
        let mut msg = message();
        for i in 0..5000 {
            msg.write_store(10_000 + i).push_raw(b"x");
            msg.write_store(20_000 + i).push_raw(b"y");
            assert_eq!(msg.overflow.len(), 2);
            msg.reset();
            assert!(msg.overflow.len() <= OVERFLOW_RETAINED);
            assert!(!msg.overflow.spilled());
            assert!(msg.is_empty());
        }
    }

    #[test]
    fn test_overflow_within_one_message_unbounded_until_reset() {
        let mut msg = message();
        for tag in 5000..5010 {
            msg.write_store(tag).push_raw(b"v");
        }
        assert_eq!(msg.field_count(), 10);
        assert_eq!(msg.get_str(5009), Ok("v"));

        msg.reset();
        assert_eq!(msg.overflow.len(), OVERFLOW_RETAINED);
        assert!(msg.is_empty());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut msg = message();
        msg.write_store(35).push_str("D");
        msg.write_store(38).push_double(100.0);

        msg.reset();
        assert!(msg.is_empty());
        assert!(msg.populated_tags().is_empty());
        assert!(msg.msg_type().is_none());

        msg.reset();
        assert!(msg.is_empty());
    }
}
