/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # fixwire Pool
//!
//! Reusable decoded messages for the fixwire decoder.
//!
//! A [`MessagePool`] allocates its messages once and hands them out through
//! [`PooledMessage`] guards, so steady-state decoding allocates nothing.
//! The pool is `Sync` and can be shared between decoding threads.

pub mod config;
pub mod pool;

pub use config::{ExhaustionPolicy, PoolConfig};
pub use pool::{MessagePool, PooledMessage};
