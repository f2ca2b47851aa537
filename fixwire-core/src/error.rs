/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the fixwire FIX decoder.
//!
//! This module provides a unified error hierarchy using `thiserror` for typed,
//! domain-specific errors across decoding, field access, and message pooling.

use crate::field::ValueType;
use thiserror::Error;

/// Result type alias using [`FixError`] as the error type.
pub type Result<T> = std::result::Result<T, FixError>;

/// Top-level error type for all fixwire operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FixError {
    /// Error during message decoding.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// Error reading a field from a decoded message.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Error in message pool operations.
    #[error("pool error: {0}")]
    Pool(#[from] PoolError),
}

/// Errors that occur while decoding a FIX message.
///
/// A failed decode leaves the target message in an undefined state; it must
/// be reset or returned to its pool before reuse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Decode was invoked before any buffer was bound to the reader.
    #[error("no buffer bound to the reader")]
    NoBuffer,

    /// BeginString (tag 8) does not name the supported protocol version.
    #[error("unsupported protocol version: {found}")]
    UnsupportedVersion {
        /// The BeginString value found in the message.
        found: String,
    },

    /// A field is missing its terminator or its `=` separator before the
    /// buffer limit.
    #[error("malformed message at offset {offset}")]
    Malformed {
        /// Buffer offset of the start of the offending field.
        offset: usize,
    },

    /// The tag number is not a positive base-10 integer.
    #[error("invalid tag at offset {offset}")]
    InvalidTag {
        /// Buffer offset of the start of the offending field.
        offset: usize,
    },

    /// The tag has no entry in the dictionary.
    #[error("unknown tag {tag}")]
    UnknownTag {
        /// The unknown tag number.
        tag: u32,
    },

    /// The value could not be converted to the tag's semantic type.
    #[error("invalid field value for tag {tag}: {reason}")]
    InvalidFieldValue {
        /// The tag number of the field.
        tag: u32,
        /// Description of why the value is invalid.
        reason: String,
    },

    /// A string-typed field holds bytes that are not valid UTF-8.
    #[error("invalid utf-8 in field {tag}")]
    InvalidUtf8 {
        /// The tag number of the field.
        tag: u32,
    },
}

/// Errors returned when reading a field from a decoded message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The message carries no value for the tag.
    #[error("field {tag} not present")]
    Missing {
        /// The requested tag number.
        tag: u32,
    },

    /// The stored value cannot be read as the requested type.
    #[error("field {tag} cannot be read as {expected}")]
    TypeMismatch {
        /// The requested tag number.
        tag: u32,
        /// The type the caller asked for.
        expected: ValueType,
    },
}

/// Errors in message pool operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolError {
    /// Every pooled message is in use and the pool rejects new requests.
    #[error("message pool exhausted: all {capacity} messages in use")]
    Exhausted {
        /// Configured pool capacity.
        capacity: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::UnsupportedVersion {
            found: "FIX.4.4".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported protocol version: FIX.4.4");
        assert_eq!(
            DecodeError::Malformed { offset: 17 }.to_string(),
            "malformed message at offset 17"
        );
    }

    #[test]
    fn test_fix_error_from_decode() {
        let fix_err: FixError = DecodeError::NoBuffer.into();
        assert!(matches!(fix_err, FixError::Decode(DecodeError::NoBuffer)));
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::TypeMismatch {
            tag: 44,
            expected: ValueType::Char,
        };
        assert_eq!(err.to_string(), "field 44 cannot be read as char");
        assert_eq!(FieldError::Missing { tag: 58 }.to_string(), "field 58 not present");
    }

    #[test]
    fn test_pool_error_display() {
        let err: FixError = PoolError::Exhausted { capacity: 4 }.into();
        assert_eq!(
            err.to_string(),
            "pool error: message pool exhausted: all 4 messages in use"
        );
    }
}
