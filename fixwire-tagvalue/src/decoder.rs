/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Allocation-free FIX message decoder.
//!
//! A [`MessageReader`] walks the bound [`FixBuffer`] once, splits it into
//! `tag=value` spans, resolves each tag's semantic type through the
//! message's dictionary, and writes the typed value into the message's
//! store for that tag. The reader keeps a scratch text buffer across calls,
//! so once warmed up a decode performs no allocation.

use crate::buffer::FixBuffer;
use crate::config::{DecoderConfig, UnknownTagPolicy, VersionCheck};
use crate::message::{BEGIN_STRING, Message};
use fixwire_core::error::DecodeError;
use fixwire_core::field::{FieldStore, ValueType};
use memchr::{memchr, memrchr};
use tracing::{debug, trace};

/// SOH (Start of Header) delimiter terminating every FIX field.
pub const SOH: u8 = 0x01;

/// Equals sign delimiter between tag and value.
pub const EQUALS: u8 = b'=';

/// Human-readable stand-in for SOH accepted by [`MessageReader::set_text`].
pub const TEXT_DELIMITER: u8 = b'|';

/// Outcome of a successful decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeSummary {
    /// Number of fields decoded.
    pub fields: usize,
    /// Number of bytes consumed from the start of the readable window.
    /// Anything past this point is a truncated trailing field.
    pub consumed: usize,
}

/// Stateful FIX message decoder.
///
/// One reader serves one thread; rebind it to a new buffer and pass a new
/// message for each decode.
#[derive(Debug, Default)]
pub struct MessageReader {
    config: DecoderConfig,
    buffer: Option<FixBuffer>,
    /// Text accumulator reused across string fields.
    scratch: String,
    version_checked: bool,
}

impl MessageReader {
    /// Creates a reader with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a reader with the given configuration.
    #[must_use]
    pub fn with_config(config: DecoderConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the reader's configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Binds a buffer whose readable window holds the message, returning the
    /// previously bound buffer.
    pub fn set_buffer(&mut self, buffer: FixBuffer) -> Option<FixBuffer> {
        self.buffer.replace(buffer)
    }

    /// Binds human-readable text, replacing every `|` with SOH.
    ///
    /// The text is written into the bound buffer, reusing its capacity; a
    /// buffer is allocated only if none is bound.
    pub fn set_text(&mut self, text: &str) {
        let buffer = self
            .buffer
            .get_or_insert_with(|| FixBuffer::with_capacity(text.len()));
        buffer.clear();
        buffer.write_text(text);
    }

    /// Returns the bound buffer.
    #[inline]
    #[must_use]
    pub fn buffer(&self) -> Option<&FixBuffer> {
        self.buffer.as_ref()
    }

    /// Unbinds and returns the bound buffer.
    pub fn take_buffer(&mut self) -> Option<FixBuffer> {
        self.buffer.take()
    }

    /// Unbinds the bound buffer, dropping it.
    pub fn clear(&mut self) {
        self.buffer = None;
    }

    /// Returns true if a BeginString has passed the version check and the
    /// check is not due again.
    #[inline]
    #[must_use]
    pub const fn version_checked(&self) -> bool {
        self.version_checked
    }

    /// Re-arms the version check.
    pub fn reset_version_check(&mut self) {
        self.version_checked = false;
    }

    /// Decodes the bound buffer into `message`.
    ///
    /// Values are appended to whatever the message already holds, so pass a
    /// freshly reset message. The buffer's position and limit are unchanged
    /// afterwards.
    ///
    /// # Errors
    /// Returns `DecodeError::NoBuffer` if no buffer is bound, or any other
    /// `DecodeError` describing the first bad field. The message contents are
    /// undefined after an error and must be reset before reuse.
    pub fn decode(&mut self, message: &mut Message) -> Result<DecodeSummary, DecodeError> {
        let buffer = self.buffer.as_ref().ok_or(DecodeError::NoBuffer)?;
        if self.config.version_check == VersionCheck::EveryMessage {
            self.version_checked = false;
        }

        let result = decode_fields(
            buffer,
            message,
            &self.config,
            &mut self.scratch,
            &mut self.version_checked,
        );
        match &result {
            Ok(summary) => trace!(
                fields = summary.fields,
                consumed = summary.consumed,
                "decoded message"
            ),
            Err(err) => debug!(error = %err, "failed to decode message"),
        }
        result
    }
}

fn decode_fields(
    buffer: &FixBuffer,
    message: &mut Message,
    config: &DecoderConfig,
    scratch: &mut String,
    version_checked: &mut bool,
) -> Result<DecodeSummary, DecodeError> {
    let base = buffer.position();
    let input = buffer.as_slice();
    let end = if config.trim_partial_tail {
        memrchr(SOH, input).map_or(0, |i| i + 1)
    } else {
        input.len()
    };

    let mut offset = 0;
    let mut fields = 0;
    while offset < end {
        let rest = &input[offset..end];
        let malformed = DecodeError::Malformed {
            offset: base + offset,
        };
        let soh = memchr(SOH, rest).ok_or_else(|| malformed.clone())?;
        let field = &rest[..soh];
        let eq = memchr(EQUALS, field).ok_or(malformed)?;
        let tag = parse_tag(&field[..eq]).ok_or(DecodeError::InvalidTag {
            offset: base + offset,
        })?;
        let value = &field[eq + 1..];

        if tag == BEGIN_STRING
            && !*version_checked
            && config.version_check != VersionCheck::Disabled
        {
            if !message.dictionary().is_supported_version(value) {
                return Err(DecodeError::UnsupportedVersion {
                    found: String::from_utf8_lossy(value).into_owned(),
                });
            }
            *version_checked = true;
        }

        if config.unknown_tags == UnknownTagPolicy::Reject
            && message.dictionary().get_field(tag).is_none()
        {
            return Err(DecodeError::UnknownTag { tag });
        }

        materialize(message.write_store(tag), value, scratch)?;
        fields += 1;
        offset += soh + 1;
    }

    Ok(DecodeSummary {
        fields,
        consumed: offset,
    })
}

/// Writes one raw value into a store according to the store's type.
fn materialize(
    store: &mut FieldStore,
    value: &[u8],
    scratch: &mut String,
) -> Result<(), DecodeError> {
    let tag = store.tag();
    match store.value_type() {
        Some(ValueType::Char) => {
            let c = match value {
                [c] if c.is_ascii() => *c,
                _ => return Err(invalid_value(tag, "expected single character")),
            };
            store.push_char(c);
        }
        Some(ValueType::Int) => {
            let v = parse_int(value)
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| invalid_value(tag, "expected 32-bit integer"))?;
            store.push_int(v);
        }
        Some(ValueType::Length) => {
            let v = parse_int(value).ok_or_else(|| invalid_value(tag, "expected integer"))?;
            store.push_length(v);
        }
        Some(ValueType::Double) => {
            let v = parse_double(value).ok_or_else(|| invalid_value(tag, "expected decimal"))?;
            store.push_double(v);
        }
        Some(ValueType::String) => {
            let text = std::str::from_utf8(value).map_err(|_| DecodeError::InvalidUtf8 { tag })?;
            scratch.clear();
            scratch.push_str(text);
            store.push_str(scratch);
        }
        None => store.push_raw(value),
    }
    Ok(())
}

fn invalid_value(tag: u32, reason: &str) -> DecodeError {
    DecodeError::InvalidFieldValue {
        tag,
        reason: reason.to_string(),
    }
}

/// Parses a tag number from ASCII bytes.
///
/// # Returns
/// The parsed tag number, or `None` if empty, non-numeric, zero, or out of
/// range.
#[inline]
fn parse_tag(bytes: &[u8]) -> Option<u32> {
    if bytes.is_empty() || bytes.len() > 10 {
        return None;
    }

    let mut result: u32 = 0;
    for &b in bytes {
        if !b.is_ascii_digit() {
            return None;
        }
        result = result.checked_mul(10)?.checked_add((b - b'0') as u32)?;
    }

    (result > 0).then_some(result)
}

/// Parses an optionally signed base-10 integer.
#[inline]
fn parse_int(bytes: &[u8]) -> Option<i64> {
    let (negative, digits) = match bytes.split_first()? {
        (&b'-', rest) => (true, rest),
        (&b'+', rest) => (false, rest),
        _ => (false, bytes),
    };
    if digits.is_empty() {
        return None;
    }

    let mut result: i64 = 0;
    for &b in digits {
        if !b.is_ascii_digit() {
            return None;
        }
        let digit = (b - b'0') as i64;
        result = result.checked_mul(10)?;
        result = if negative {
            result.checked_sub(digit)?
        } else {
            result.checked_add(digit)?
        };
    }
    Some(result)
}

/// Parses a finite decimal number.
#[inline]
fn parse_double(bytes: &[u8]) -> Option<f64> {
    let value: f64 = std::str::from_utf8(bytes).ok()?.parse().ok()?;
    value.is_finite().then_some(value)
}
