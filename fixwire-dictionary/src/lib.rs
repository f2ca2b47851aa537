/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fixwire Dictionary
//!
//! Tag dictionary management for the fixwire decoder.
//!
//! This crate provides:
//! - **Schema definitions**: `FieldType`, `FieldDef`, and the tag-indexed
//!   `Dictionary`
//! - **Embedded dictionary**: The standard FIX 4.2 field table
//!
//! A dictionary is populated once at startup and is read-only afterwards.

pub mod fix42;
pub mod schema;

pub use fix42::FIX42_BEGIN_STRING;
pub use schema::{Dictionary, FieldDef, FieldType};
