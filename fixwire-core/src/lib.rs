/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fixwire Core
//!
//! Core types and error definitions for the fixwire FIX 4.2 decoder.
//!
//! This crate provides the building blocks used across all fixwire crates:
//! - **Error types**: Unified error handling with `thiserror`
//! - **Value types**: `ValueType`, the semantic type of a tag
//! - **Field storage**: `FieldStore`, a reusable typed value buffer with
//!   multi-value append semantics, and `FieldValue`, a borrowed view of
//!   one stored value
//!
//! ## Allocation-Free Reuse
//!
//! Field stores keep their capacity across resets, so a message that has
//! decoded a few representative inputs stops allocating altogether.

pub mod error;
pub mod field;

pub use error::{DecodeError, FieldError, FixError, PoolError, Result};
pub use field::{FieldStore, FieldValue, MULTI_VALUE_DELIMITER, ValueType, Values};
