/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Decoder configuration.
//!
//! This module provides the policies a [`MessageReader`](crate::MessageReader)
//! applies while decoding.

/// When the BeginString (tag 8) value is checked against the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VersionCheck {
    /// Check the first tag 8 of every message.
    #[default]
    EveryMessage,
    /// Check the first tag 8 the reader ever sees; skip the check after it
    /// has passed once.
    Once,
    /// Never check.
    Disabled,
}

/// What to do with a tag the dictionary does not define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownTagPolicy {
    /// Fail the decode with `DecodeError::UnknownTag`.
    #[default]
    Reject,
    /// Store the untouched value bytes and continue.
    StoreRaw,
}

/// Configuration for a message reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecoderConfig {
    /// BeginString check policy.
    pub version_check: VersionCheck,
    /// Unknown tag policy.
    pub unknown_tags: UnknownTagPolicy,
    /// Whether bytes after the last SOH are ignored instead of reported as
    /// a malformed field.
    pub trim_partial_tail: bool,
}

impl DecoderConfig {
    /// Creates the default configuration: check the version of every
    /// message, reject unknown tags, and ignore a truncated tail.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            version_check: VersionCheck::EveryMessage,
            unknown_tags: UnknownTagPolicy::Reject,
            trim_partial_tail: true,
        }
    }

    /// Sets the BeginString check policy.
    #[must_use]
    pub const fn with_version_check(mut self, version_check: VersionCheck) -> Self {
        self.version_check = version_check;
        self
    }

    /// Sets the unknown tag policy.
    #[must_use]
    pub const fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }

    /// Sets whether a truncated tail is ignored.
    #[must_use]
    pub const fn with_trim_partial_tail(mut self, trim: bool) -> Self {
        self.trim_partial_tail = trim;
        self
    }
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self::new()
    }
}
