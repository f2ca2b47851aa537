/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fixwire Tag-Value
//!
//! Allocation-free FIX tag=value decoding for the fixwire decoder.
//!
//! This crate turns a buffer of `tag=value<SOH>` pairs into a tag-indexed
//! [`Message`] whose slots hold typed values.
//!
//! ## Features
//!
//! - **Single pass**: Each field is split and materialized as it is found
//! - **SIMD-accelerated**: Uses `memchr` for delimiter search, bounded by
//!   the buffer limit
//! - **Reusable state**: Messages, buffers, and the reader's text scratch
//!   keep their capacity between decodes
//! - **Explicit policies**: Version checking, unknown tags, and truncated
//!   tails are configured per reader

pub mod buffer;
pub mod config;
pub mod decoder;
pub mod message;

pub use buffer::FixBuffer;
pub use config::{DecoderConfig, UnknownTagPolicy, VersionCheck};
pub use decoder::{DecodeSummary, MessageReader, SOH};
pub use message::Message;
