//! Streaming enumeration through a bounded channel
//!
//! One producer owns the only `Sender`. Dropping it is the end-of-stream
//! signal, so the channel closes exactly once on every return path.

use std::iter::FusedIterator;
use std::panic;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, Receiver, Sender};
use tracing::{debug, trace};

use super::ObjectIds;
use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::object_id::ObjectId;

/// Hand-off buffer size used by [`GeneratorConfig::stream`]
pub const DEFAULT_STREAM_CAPACITY: usize = 1;

impl GeneratorConfig {
    /// Send every ObjectId of this config on `tx`, then close it
    ///
    /// Blocks while the channel is full. Returns the number of ids sent,
    /// which is less than `count()` if the receiver went away early.
    /// On a validation error nothing is sent and the channel is still closed.
    pub fn send_to(&self, tx: Sender<ObjectId>) -> Result<u64, GeneratorError> {
        let ids = self.ids()?;
        Ok(produce(ids, tx))
    }

    /// Enumerate on a producer thread with the default buffer size
    pub fn stream(&self) -> Result<ObjectIdStream, GeneratorError> {
        self.stream_with_capacity(DEFAULT_STREAM_CAPACITY)
    }

    /// Enumerate on a producer thread, buffering up to `capacity` ids
    ///
    /// A capacity of zero hands each id over directly.
    pub fn stream_with_capacity(&self, capacity: usize) -> Result<ObjectIdStream, GeneratorError> {
        let ids = self.ids()?;
        let (tx, rx) = bounded(capacity);

        debug!(count = ids.remaining(), capacity, "Starting ObjectId producer");
        let producer = thread::spawn(move || produce(ids, tx));

        Ok(ObjectIdStream { rx, producer })
    }
}

fn produce(ids: ObjectIds, tx: Sender<ObjectId>) -> u64 {
    let total = ids.remaining();
    let mut sent = 0u64;
    for id in ids {
        if tx.send(id).is_err() {
            trace!(sent, total, "Receiver disconnected, stopping producer");
            break;
        }
        sent += 1;
    }
    debug!(sent, "ObjectId producer finished");
    sent
}

/// Receiving end of a streamed enumeration
///
/// Yields ids in nested order and ends when the producer closes the channel.
/// Dropping the stream early disconnects the channel and the producer stops
/// at its next send.
#[derive(Debug)]
pub struct ObjectIdStream {
    rx: Receiver<ObjectId>,
    producer: JoinHandle<u64>,
}

impl ObjectIdStream {
    /// Stop receiving and wait for the producer
    ///
    /// Returns how many ids the producer handed to the channel.
    pub fn join(self) -> u64 {
        let Self { rx, producer } = self;
        drop(rx);
        producer
            .join()
            .unwrap_or_else(|e| panic::resume_unwind(e))
    }
}

impl Iterator for ObjectIdStream {
    type Item = ObjectId;

    #[inline]
    fn next(&mut self) -> Option<ObjectId> {
        self.rx.recv().ok()
    }
}

impl FusedIterator for ObjectIdStream {}
