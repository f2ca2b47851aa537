/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Thread-safe message pool.
//!
//! The free list is a bounded lock-free queue holding reset messages. A
//! [`PooledMessage`] guard hands one out and puts it back, reset, when it is
//! released or dropped.

use crate::config::{ExhaustionPolicy, PoolConfig};
use crossbeam_queue::ArrayQueue;
use fixwire_core::error::PoolError;
use fixwire_dictionary::Dictionary;
use fixwire_tagvalue::Message;
use parking_lot::{Condvar, Mutex};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace, warn};

/// Bounded pool of reusable messages sharing one dictionary.
#[derive(Debug)]
pub struct MessagePool {
    dictionary: Arc<Dictionary>,
    config: PoolConfig,
    available: ArrayQueue<Box<Message>>,
    in_use: AtomicUsize,
    created: AtomicUsize,
    /// Parks `Block` waiters until a release.
    wait_lock: Mutex<()>,
    released: Condvar,
}

impl MessagePool {
    /// Creates a pool and allocates `config.capacity` messages up front.
    ///
    /// # Arguments
    /// * `dictionary` - Dictionary every pooled message is typed from
    /// * `config` - Capacity and exhaustion policy
    #[must_use]
    pub fn new(dictionary: Arc<Dictionary>, config: PoolConfig) -> Self {
        let config = config.with_capacity(config.capacity);
        let available = ArrayQueue::new(config.capacity);
        for _ in 0..config.capacity {
            let _ = available.push(Box::new(Message::new(Arc::clone(&dictionary))));
        }
        debug!(
            capacity = config.capacity,
            exhaustion = ?config.exhaustion,
            begin_string = dictionary.begin_string(),
            "created message pool"
        );

        Self {
            dictionary,
            config,
            available,
            in_use: AtomicUsize::new(0),
            created: AtomicUsize::new(config.capacity),
            wait_lock: Mutex::new(()),
            released: Condvar::new(),
        }
    }

    /// Creates a pool with the default configuration.
    #[must_use]
    pub fn with_dictionary(dictionary: Arc<Dictionary>) -> Self {
        Self::new(dictionary, PoolConfig::default())
    }

    /// Takes a reset message from the pool.
    ///
    /// When every message is in use the configured [`ExhaustionPolicy`]
    /// decides whether to allocate, fail, or wait.
    ///
    /// # Errors
    /// Returns `PoolError::Exhausted` if the pool is empty and the policy is
    /// `Reject`.
    pub fn acquire(&self) -> Result<PooledMessage<'_>, PoolError> {
        let message = match self.available.pop() {
            Some(message) => message,
            None => match self.config.exhaustion {
                ExhaustionPolicy::Grow => {
                    let created = self.created.fetch_add(1, Ordering::Relaxed) + 1;
                    warn!(
                        capacity = self.config.capacity,
                        created, "message pool exhausted, allocating beyond capacity"
                    );
                    Box::new(Message::new(Arc::clone(&self.dictionary)))
                }
                ExhaustionPolicy::Reject => {
                    debug!(capacity = self.config.capacity, "message pool exhausted");
                    return Err(PoolError::Exhausted {
                        capacity: self.config.capacity,
                    });
                }
                ExhaustionPolicy::Block => self.wait_for_release(),
            },
        };

        let in_use = self.in_use.fetch_add(1, Ordering::Relaxed) + 1;
        trace!(in_use, "acquired message");
        Ok(PooledMessage {
            pool: self,
            message: Some(message),
        })
    }

    /// Returns a message to the pool. Equivalent to dropping the guard.
    pub fn release(&self, message: PooledMessage<'_>) {
        drop(message);
    }

    fn wait_for_release(&self) -> Box<Message> {
        let mut guard = self.wait_lock.lock();
        loop {
            if let Some(message) = self.available.pop() {
                return message;
            }
            self.released.wait(&mut guard);
        }
    }

    fn give_back(&self, mut message: Box<Message>) {
        message.reset();
        let in_use = self.in_use.fetch_sub(1, Ordering::Relaxed) - 1;
        trace!(in_use, "released message");

        if self.available.push(message).is_err() {
            warn!(
                capacity = self.config.capacity,
                "message pool full, dropping surplus message"
            );
            return;
        }
        if self.config.exhaustion == ExhaustionPolicy::Block {
            let _guard = self.wait_lock.lock();
            self.released.notify_one();
        }
    }

    /// Returns the dictionary shared by the pooled messages.
    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    /// Returns the pool configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Returns the number of messages retained by the pool.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Returns the number of messages ready to be acquired.
    #[inline]
    #[must_use]
    pub fn available(&self) -> usize {
        self.available.len()
    }

    /// Returns the number of messages currently handed out.
    #[inline]
    #[must_use]
    pub fn in_use(&self) -> usize {
        self.in_use.load(Ordering::Relaxed)
    }

    /// Returns the total number of messages ever allocated by the pool.
    #[inline]
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }
}

/// A message borrowed from a [`MessagePool`].
///
/// Dereferences to [`Message`]. Dropping the guard resets the message and
/// returns it to the pool.
#[derive(Debug)]
pub struct PooledMessage<'a> {
    pool: &'a MessagePool,
    /// Emptied only by `Drop`.
    message: Option<Box<Message>>,
}

impl PooledMessage<'_> {
    /// Returns the pool this message belongs to.
    #[inline]
    #[must_use]
    pub fn pool(&self) -> &MessagePool {
        self.pool
    }
}

impl Deref for PooledMessage<'_> {
    type Target = Message;

    fn deref(&self) -> &Message {
        self.message
            .as_deref()
            .expect("pooled message accessed after release")
    }
}

impl DerefMut for PooledMessage<'_> {
    fn deref_mut(&mut self) -> &mut Message {
        self.message
            .as_deref_mut()
            .expect("pooled message accessed after release")
    }
}

impl Drop for PooledMessage<'_> {
    fn drop(&mut self) {
        if let Some(message) = self.message.take() {
            self.pool.give_back(message);
        }
    }
}
