//! Lazy enumeration cursor

use std::iter::FusedIterator;

use crate::config::GeneratorConfig;
use crate::object_id::{encode, ObjectId};

/// Iterator over an ObjectId space in nested order
///
/// Holds a cursor over (machine, process, counter) and the number of ids left,
/// so a zero-sized axis yields nothing.
#[derive(Debug, Clone)]
pub struct ObjectIds {
    timestamp: u32,
    processes: u32,
    items: u32,
    machine: u32,
    process: u32,
    counter: u32,
    remaining: u64,
}

impl ObjectIds {
    /// Callers validate the config first
    pub(crate) fn new(config: &GeneratorConfig) -> Self {
        Self {
            timestamp: config.timestamp_secs(),
            processes: u32::from(config.process_count()),
            items: config.item_count(),
            machine: 0,
            process: 0,
            counter: 0,
            remaining: config.count(),
        }
    }

    /// Number of ObjectIds not yet produced
    #[inline(always)]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    #[inline(always)]
    fn advance(&mut self) {
        self.counter += 1;
        if self.counter == self.items {
            self.counter = 0;
            self.process += 1;
            if self.process == self.processes {
                self.process = 0;
                self.machine += 1;
            }
        }
    }
}

impl Iterator for ObjectIds {
    type Item = ObjectId;

    #[inline]
    fn next(&mut self) -> Option<ObjectId> {
        if self.remaining == 0 {
            return None;
        }
        let id = encode(self.timestamp, self.machine, self.process as u16, self.counter);
        self.remaining -= 1;
        self.advance();
        Some(id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for ObjectIds {}
