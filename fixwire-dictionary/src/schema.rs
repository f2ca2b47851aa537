/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Schema definitions for the tag dictionary.
//!
//! This module defines:
//! - [`FieldType`]: FIX data types as named in dictionary sources
//! - [`FieldDef`]: Field definitions with tag, name, and type
//! - [`Dictionary`]: Immutable tag-indexed lookup shared by every decoder

use crate::fix42::{FIX42_BEGIN_STRING, FIX42_FIELDS};
use fixwire_core::field::ValueType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// FIX field data type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Integer value.
    Int,
    /// Length field (for data fields and BodyLength).
    Length,
    /// Sequence number.
    SeqNum,
    /// Number of entries in a repeating group.
    NumInGroup,
    /// Day of month (1-31).
    DayOfMonth,
    /// Floating point number.
    Float,
    /// Quantity.
    Qty,
    /// Price.
    Price,
    /// Price offset.
    PriceOffset,
    /// Amount (price * quantity).
    Amt,
    /// Percentage.
    Percentage,
    /// Single character.
    Char,
    /// Boolean (Y/N).
    Boolean,
    /// String.
    String,
    /// Multiple space-separated values.
    MultipleValueString,
    /// Country code (ISO 3166).
    Country,
    /// Currency code (ISO 4217).
    Currency,
    /// Exchange code.
    Exchange,
    /// Month-year (YYYYMM).
    MonthYear,
    /// UTC timestamp.
    UtcTimestamp,
    /// UTC time only.
    UtcTimeOnly,
    /// UTC date.
    UtcDate,
    /// Local market date.
    LocalMktDate,
    /// Raw data.
    ///
    /// Decoded as text like the other string types, so a value that is not
    /// valid UTF-8 fails the whole message with `DecodeError::InvalidUtf8`.
    /// Binary payloads, which may also contain SOH, are not supported.
    Data,
}

impl FieldType {
    /// Returns the semantic type values of this FIX type decode into.
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Int | Self::SeqNum | Self::NumInGroup | Self::DayOfMonth => ValueType::Int,
            Self::Length => ValueType::Length,
            Self::Float
            | Self::Qty
            | Self::Price
            | Self::PriceOffset
            | Self::Amt
            | Self::Percentage => ValueType::Double,
            Self::Char | Self::Boolean => ValueType::Char,
            Self::String
            | Self::MultipleValueString
            | Self::Country
            | Self::Currency
            | Self::Exchange
            | Self::MonthYear
            | Self::UtcTimestamp
            | Self::UtcTimeOnly
            | Self::UtcDate
            | Self::LocalMktDate
            | Self::Data => ValueType::String,
        }
    }

    /// Returns true if this type represents a numeric value.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self.value_type(),
            ValueType::Int | ValueType::Length | ValueType::Double
        )
    }
}

impl std::str::FromStr for FieldType {
    type Err = std::convert::Infallible;

    /// Creates a FieldType from a dictionary type name.
    ///
    /// Unrecognized names map to `String`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "INT" => Self::Int,
            "LENGTH" => Self::Length,
            "SEQNUM" => Self::SeqNum,
            "NUMINGROUP" => Self::NumInGroup,
            "DAYOFMONTH" => Self::DayOfMonth,
            "FLOAT" => Self::Float,
            "QTY" | "QUANTITY" => Self::Qty,
            "PRICE" => Self::Price,
            "PRICEOFFSET" => Self::PriceOffset,
            "AMT" | "AMOUNT" => Self::Amt,
            "PERCENTAGE" => Self::Percentage,
            "CHAR" => Self::Char,
            "BOOLEAN" => Self::Boolean,
            "MULTIPLEVALUESTRING" => Self::MultipleValueString,
            "COUNTRY" => Self::Country,
            "CURRENCY" => Self::Currency,
            "EXCHANGE" => Self::Exchange,
            "MONTHYEAR" => Self::MonthYear,
            "UTCTIMESTAMP" => Self::UtcTimestamp,
            "UTCTIMEONLY" => Self::UtcTimeOnly,
            "UTCDATE" | "UTCDATEONLY" => Self::UtcDate,
            "LOCALMKTDATE" => Self::LocalMktDate,
            "DATA" => Self::Data,
            _ => Self::String,
        })
    }
}

/// Definition of a FIX field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    /// Field tag number.
    pub tag: u32,
    /// Field name.
    pub name: String,
    /// Field data type.
    pub field_type: FieldType,
}

impl FieldDef {
    /// Creates a new field definition.
    ///
    /// # Arguments
    /// * `tag` - The field tag number
    /// * `name` - The field name
    /// * `field_type` - The field data type
    #[must_use]
    pub fn new(tag: u32, name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            tag,
            name: name.into(),
            field_type,
        }
    }

    /// Returns the semantic type values of this field decode into.
    #[inline]
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.field_type.value_type()
    }
}

/// Tag dictionary for one protocol version.
///
/// Field definitions live in a dense table indexed by tag so lookups on the
/// decode path are a bounds check and an index. Build the dictionary once,
/// wrap it in an `Arc`, and share it between every reader and message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    /// BeginString (tag 8) value of the protocol version.
    begin_string: String,
    /// Field definitions indexed by tag.
    fields: Vec<Option<FieldDef>>,
    /// Field tags indexed by name.
    fields_by_name: HashMap<String, u32>,
}

impl Dictionary {
    /// Creates a new empty dictionary.
    ///
    /// # Arguments
    /// * `begin_string` - The BeginString value messages must carry
    #[must_use]
    pub fn new(begin_string: impl Into<String>) -> Self {
        Self {
            begin_string: begin_string.into(),
            fields: Vec::new(),
            fields_by_name: HashMap::new(),
        }
    }

    /// Creates the standard FIX 4.2 dictionary.
    #[must_use]
    pub fn fix42() -> Self {
        Self::from_fields(
            FIX42_BEGIN_STRING,
            FIX42_FIELDS
                .iter()
                .map(|&(tag, name, field_type)| FieldDef::new(tag, name, field_type)),
        )
    }

    /// Creates a dictionary from an external list of field definitions.
    ///
    /// # Arguments
    /// * `begin_string` - The BeginString value messages must carry
    /// * `fields` - Field definitions; a later definition replaces an earlier
    ///   one with the same tag
    #[must_use]
    pub fn from_fields(
        begin_string: impl Into<String>,
        fields: impl IntoIterator<Item = FieldDef>,
    ) -> Self {
        let mut dict = Self::new(begin_string);
        for field in fields {
            dict.add_field(field);
        }
        dict
    }

    /// Adds a field definition.
    pub fn add_field(&mut self, field: FieldDef) {
        let index = field.tag as usize;
        if index >= self.fields.len() {
            self.fields.resize(index + 1, None);
        }
        if let Some(previous) = self.fields[index].take() {
            self.fields_by_name.remove(&previous.name);
        }
        self.fields_by_name.insert(field.name.clone(), field.tag);
        self.fields[index] = Some(field);
    }

    /// Returns the BeginString value messages must carry.
    #[inline]
    #[must_use]
    pub fn begin_string(&self) -> &str {
        &self.begin_string
    }

    /// Returns true if `value` names this dictionary's protocol version,
    /// ignoring ASCII case.
    #[inline]
    #[must_use]
    pub fn is_supported_version(&self, value: &[u8]) -> bool {
        value.eq_ignore_ascii_case(self.begin_string.as_bytes())
    }

    /// Gets a field definition by tag.
    #[inline]
    #[must_use]
    pub fn get_field(&self, tag: u32) -> Option<&FieldDef> {
        self.fields.get(tag as usize).and_then(Option::as_ref)
    }

    /// Gets a field definition by name.
    #[must_use]
    pub fn get_field_by_name(&self, name: &str) -> Option<&FieldDef> {
        self.fields_by_name
            .get(name)
            .and_then(|&tag| self.get_field(tag))
    }

    /// Returns the semantic type of a tag.
    #[inline]
    #[must_use]
    pub fn value_type(&self, tag: u32) -> Option<ValueType> {
        self.get_field(tag).map(FieldDef::value_type)
    }

    /// Returns the display name of a tag.
    #[inline]
    #[must_use]
    pub fn name(&self, tag: u32) -> Option<&str> {
        self.get_field(tag).map(|f| f.name.as_str())
    }

    /// Returns the highest tag number defined, or 0 for an empty dictionary.
    #[inline]
    #[must_use]
    pub fn max_tag(&self) -> u32 {
        self.fields.len().saturating_sub(1) as u32
    }

    /// Returns the number of field definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields_by_name.len()
    }

    /// Returns true if the dictionary defines no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields_by_name.is_empty()
    }

    /// Returns an iterator over all field definitions in tag order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_type_from_str() {
        assert_eq!("INT".parse::<FieldType>().unwrap(), FieldType::Int);
        assert_eq!("price".parse::<FieldType>().unwrap(), FieldType::Price);
        assert_eq!(
            "UTCTIMESTAMP".parse::<FieldType>().unwrap(),
            FieldType::UtcTimestamp
        );
        assert_eq!("unknown".parse::<FieldType>().unwrap(), FieldType::String);
    }

    #[test]
    fn test_field_type_value_type() {
        assert_eq!(FieldType::SeqNum.value_type(), ValueType::Int);
        assert_eq!(FieldType::Length.value_type(), ValueType::Length);
        assert_eq!(FieldType::Qty.value_type(), ValueType::Double);
        assert_eq!(FieldType::Boolean.value_type(), ValueType::Char);
        assert_eq!(FieldType::UtcTimestamp.value_type(), ValueType::String);
        assert!(FieldType::Price.is_numeric());
        assert!(!FieldType::String.is_numeric());
    }

    #[test]
    fn test_dictionary_field_operations() {
        let mut dict = Dictionary::new("FIX.4.2");
        dict.add_field(FieldDef::new(35, "MsgType", FieldType::String));

        assert!(dict.get_field(35).is_some());
        assert!(dict.get_field_by_name("MsgType").is_some());
        assert!(dict.get_field(34).is_none());
        assert!(dict.get_field(999).is_none());
        assert_eq!(dict.max_tag(), 35);
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_dictionary_replaces_tag() {
        let mut dict = Dictionary::new("FIX.4.2");
        dict.add_field(FieldDef::new(58, "Text", FieldType::String));
        dict.add_field(FieldDef::new(58, "FreeText", FieldType::String));

        assert_eq!(dict.name(58), Some("FreeText"));
        assert!(dict.get_field_by_name("Text").is_none());
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_fix42_dictionary() {
        let dict = Dictionary::fix42();
        assert_eq!(dict.begin_string(), "FIX.4.2");
        assert_eq!(dict.max_tag(), 446);
        assert_eq!(dict.name(49), Some("SenderCompID"));
        assert_eq!(dict.value_type(8), Some(ValueType::String));
        assert_eq!(dict.value_type(9), Some(ValueType::Length));
        assert_eq!(dict.value_type(34), Some(ValueType::Int));
        assert_eq!(dict.value_type(44), Some(ValueType::Double));
        assert_eq!(dict.value_type(54), Some(ValueType::Char));
        assert_eq!(dict.value_type(101), None);
        assert_eq!(dict.fields().count(), dict.len());
    }

    #[test]
    fn test_supported_version() {
        let dict = Dictionary::fix42();
        assert!(dict.is_supported_version(b"FIX.4.2"));
        assert!(dict.is_supported_version(b"fix.4.2"));
        assert!(!dict.is_supported_version(b"FIX.4.4"));
        assert!(!dict.is_supported_version(b""));
    }
}
