/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Decodes a few FIX 4.2 messages through a shared pool and prints their
//! fields.
//!
//! Run with `RUST_LOG=trace` to see per-decode and per-acquire events.
//! Pool sizing is read from `FIXWIRE_POOL_CAPACITY` and
//! `FIXWIRE_POOL_EXHAUSTION`.

use fixwire::prelude::*;
use std::sync::Arc;
use tracing::{error, info};

const MESSAGES: &[&str] = &[
    "8=FIX.4.2|9=12|35=6|49=BRKR|54=2|44=7900.000000|",
    "8=FIX.4.2|35=D|49=CLNT|56=BRKR|11=ORD-1|55=IBM|54=1|38=100|40=2|44=101.25|58=first|58=second|",
    "8=FIX.4.4|35=0|",
    "8=FIX.4.2|35=0|112=TEST|10=",
];

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() {
    init_logging();

    let pool = MessagePool::new(Arc::new(Dictionary::fix42()), PoolConfig::from_env());
    info!(
        capacity = pool.capacity(),
        exhaustion = ?pool.config().exhaustion,
        "pool ready"
    );

    let mut reader = MessageReader::new();
    for text in MESSAGES {
        let mut msg = match pool.acquire() {
            Ok(msg) => msg,
            Err(e) => {
                error!(error = %e, "cannot acquire message");
                continue;
            }
        };

        reader.set_text(text);
        match reader.decode(&mut msg) {
            Ok(summary) => {
                info!(fields = summary.fields, consumed = summary.consumed, "decoded");
                for store in msg.fields() {
                    let name = msg.name(store.tag()).unwrap_or("?");
                    let values: Vec<String> = store.values().map(|v| v.to_string()).collect();
                    println!("  {:>4} {:<16} {}", store.tag(), name, values.join(" | "));
                }
            }
            Err(e) => error!(error = %e, "decode failed"),
        }
        pool.release(msg);
    }

    info!(
        available = pool.available(),
        in_use = pool.in_use(),
        created = pool.created(),
        "done"
    );
}
