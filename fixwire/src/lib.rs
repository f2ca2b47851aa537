/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fixwire
//!
//! Allocation-free FIX 4.2 message decoding for Rust.
//!
//! fixwire decodes `tag=value<SOH>` byte streams into tag-indexed messages
//! whose field slots are typed from a FIX dictionary. Messages come from a
//! pool and are reset on return, so a warmed-up decode loop does not
//! allocate.
//!
//! ## Features
//!
//! - **Typed slots**: Each tag is materialized as a char, integer, length,
//!   double, or string as the dictionary defines it
//! - **Multi-value fields**: Repeated tags are appended, not overwritten
//! - **Bounded scanning**: A field missing its terminator is reported, never
//!   over-read
//! - **Thread-safe pool**: Share one pool between decoding threads
//!
//! ## Quick Start
//!
//! ```rust
//! use fixwire::prelude::*;
//! use std::sync::Arc;
//!
//! let pool = MessagePool::new(Arc::new(Dictionary::fix42()), PoolConfig::default());
//! let mut reader = MessageReader::new();
//!
//! let mut msg = pool.acquire()?;
//! reader.set_text("8=FIX.4.2|35=6|49=BRKR|54=2|44=7900.000000|");
//! reader.decode(&mut msg)?;
//!
//! assert_eq!(msg.get_str(49)?, "BRKR");
//! assert_eq!(msg.get_f64(44)?, 7900.0);
//! pool.release(msg);
//! # Ok::<(), FixError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Value types, field storage, and error definitions
//! - [`dictionary`]: Tag dictionary and the embedded FIX 4.2 table
//! - [`tagvalue`]: Buffers, messages, and the tag=value reader
//! - [`pool`]: Reusable message pool

pub mod core {
    //! Value types, field storage, and error definitions.
    pub use fixwire_core::*;
}

pub mod dictionary {
    //! Tag dictionary and the embedded FIX 4.2 table.
    pub use fixwire_dictionary::*;
}

pub mod tagvalue {
    //! Buffers, messages, and the tag=value reader.
    pub use fixwire_tagvalue::*;
}

pub mod pool {
    //! Reusable message pool.
    pub use fixwire_pool::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use fixwire_core::{
        DecodeError, FieldError, FieldStore, FieldValue, FixError, MULTI_VALUE_DELIMITER,
        PoolError, Result, ValueType,
    };

    // Dictionary
    pub use fixwire_dictionary::{Dictionary, FieldDef, FieldType};

    // Tag-value decoding
    pub use fixwire_tagvalue::{
        DecodeSummary, DecoderConfig, FixBuffer, Message, MessageReader, UnknownTagPolicy,
        VersionCheck,
    };

    // Pool
    pub use fixwire_pool::{ExhaustionPolicy, MessagePool, PoolConfig, PooledMessage};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;
    use std::sync::Arc;

    const SAMPLE: &str = "8=FIX.4.2|9=12|35=6|49=BRKR|54=2|44=7900.000000|";

    fn pool() -> MessagePool {
        MessagePool::new(
            Arc::new(Dictionary::fix42()),
            PoolConfig::new().with_capacity(2),
        )
    }

    #[test]
    fn test_sample_round_trip() {
        let pool = pool();
        let mut reader = MessageReader::new();
        let mut msg = pool.acquire().unwrap();

        reader.set_text(SAMPLE);
        let summary = reader.decode(&mut msg).unwrap();

        assert_eq!(summary.fields, 6);
        assert_eq!(msg.begin_string(), Some("FIX.4.2"));
        assert_eq!(msg.get_i64(9), Ok(12));
        assert_eq!(msg.msg_type(), Some("6"));
        assert_eq!(msg.get_str(49), Ok("BRKR"));
        assert_eq!(msg.get_i64(54), Ok(2));
        assert_eq!(msg.get_f64(44), Ok(7900.0));
    }

    #[test]
    fn test_reuse_through_pool_leaves_no_residue() {
        let pool = pool();
        let mut reader = MessageReader::new();

        let mut msg = pool.acquire().unwrap();
        reader.set_text("8=FIX.4.2|35=D|58=hello|");
        reader.decode(&mut msg).unwrap();
        pool.release(msg);

        let mut first = pool.acquire().unwrap();
        let mut second = pool.acquire().unwrap();
        for msg in [&mut first, &mut second] {
            assert!(msg.is_empty());
            reader.set_text(SAMPLE);
            reader.decode(msg).unwrap();
            assert!(!msg.contains(58));
            assert_eq!(msg.get_str(49), Ok("BRKR"));
        }
    }

    #[test]
    fn test_multi_value_append() {
        let pool = pool();
        let mut reader = MessageReader::new();
        let mut msg = pool.acquire().unwrap();

        reader.set_text("8=FIX.4.2|58=A|58=B|");
        reader.decode(&mut msg).unwrap();

        let store = msg.field(58).unwrap();
        assert_eq!(store.as_bytes(), &[b'A', MULTI_VALUE_DELIMITER, b'B']);
        assert_eq!(store.value_count(), 2);
        assert_eq!(msg.get_str(58), Ok("A"));
    }

    #[test]
    fn test_version_rejected() {
        let pool = pool();
        let mut reader = MessageReader::new();
        let mut msg = pool.acquire().unwrap();

        reader.set_text("8=FIX.4.4|35=0|");
        let err = reader.decode(&mut msg).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnsupportedVersion {
                found: "FIX.4.4".to_string()
            }
        );
        assert!(matches!(
            FixError::from(err),
            FixError::Decode(DecodeError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn test_missing_buffer() {
        let pool = pool();
        let mut reader = MessageReader::new();
        let mut msg = pool.acquire().unwrap();
        assert_eq!(reader.decode(&mut msg), Err(DecodeError::NoBuffer));
    }

    #[test]
    fn test_truncated_tail_ignored() {
        let pool = pool();
        let mut reader = MessageReader::new();
        let mut msg = pool.acquire().unwrap();

        reader.set_text("8=FIX.4.2|35=6|44=79");
        let summary = reader.decode(&mut msg).unwrap();
        assert_eq!(summary.fields, 2);
        assert!(!msg.contains(44));
    }
}
