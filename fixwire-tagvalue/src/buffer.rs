/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Owned input buffer with position and limit cursors.
//!
//! A [`FixBuffer`] is the contiguous memory region a reader decodes from.
//! The readable window is `position..limit`; decoding reads the window and
//! leaves both cursors untouched, so the caller gets the buffer back exactly
//! as it was bound.

use crate::decoder::{SOH, TEXT_DELIMITER};
use bytes::BytesMut;

/// Contiguous byte buffer with explicit position and limit.
#[derive(Debug, Clone, Default)]
pub struct FixBuffer {
    data: BytesMut,
    position: usize,
    limit: usize,
}

impl FixBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty buffer able to hold `capacity` bytes without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: BytesMut::with_capacity(capacity),
            position: 0,
            limit: 0,
        }
    }

    /// Creates a buffer whose readable window is a copy of `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut buffer = Self::with_capacity(bytes.len());
        buffer.write(bytes);
        buffer
    }

    /// Creates a buffer from human-readable text, replacing every `|` with
    /// the SOH field terminator.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::with_capacity(text.len());
        buffer.write_text(text);
        buffer
    }

    /// Appends bytes and extends the limit to cover them.
    pub fn write(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
        self.limit = self.data.len();
    }

    /// Appends text, replacing every `|` with SOH, and extends the limit to
    /// cover it.
    pub fn write_text(&mut self, text: &str) {
        self.data.extend(
            text.bytes()
                .map(|b| if b == TEXT_DELIMITER { SOH } else { b }),
        );
        self.limit = self.data.len();
    }

    /// Empties the buffer and zeroes both cursors, keeping the capacity.
    pub fn clear(&mut self) {
        self.data.clear();
        self.position = 0;
        self.limit = 0;
    }

    /// Returns the start of the readable window.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the end of the readable window.
    #[inline]
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Moves the start of the readable window, clamped to the limit.
    pub fn set_position(&mut self, position: usize) {
        self.position = position.min(self.limit);
    }

    /// Moves the end of the readable window, clamped to the written length.
    /// The position is pulled back if it would exceed the new limit.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.min(self.data.len());
        self.position = self.position.min(self.limit);
    }

    /// Returns the number of readable bytes.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.limit - self.position
    }

    /// Returns true if the readable window is non-empty.
    #[inline]
    #[must_use]
    pub const fn has_remaining(&self) -> bool {
        self.limit > self.position
    }

    /// Returns the readable window.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.position..self.limit]
    }

    /// Returns the number of bytes the buffer can hold without reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }
}

impl From<&[u8]> for FixBuffer {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for FixBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
