//! Configuration for the ObjectId space generator

mod builder;

use chrono::{DateTime, SubsecRound, Utc};

pub use builder::GeneratorConfigBuilder;
use builder::{DEFAULT_ITEM_COUNT, DEFAULT_MACHINE_COUNT, DEFAULT_PROCESS_COUNT};

use crate::error::GeneratorError;

/// Largest machine count the 3-byte machine field can hold
pub const MAX_MACHINES: u32 = 1 << 24;
/// Largest per-process item count the 3-byte counter field can hold
pub const MAX_ITEMS_PER_PROCESS: u32 = 1 << 24;

/// Bounds of one ObjectId space: a fixed timestamp and the number of
/// machines, processes per machine and items per process to enumerate.
///
/// The config is immutable once built. Enumeration methods live in
/// `crate::generator` and validate before producing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    timestamp: DateTime<Utc>,
    machine_count: u32,
    process_count: u16,
    item_count: u32,
}

impl GeneratorConfig {
    /// Create and validate a config
    ///
    /// The invalid config is not returned on error; build it through
    /// [`GeneratorConfig::builder`] to inspect it.
    pub fn new(
        timestamp: DateTime<Utc>,
        machines: u32,
        processes_per_machine: u16,
        items_per_process: u32,
    ) -> Result<Self, GeneratorError> {
        Self::builder()
            .timestamp(timestamp)
            .machines(machines)
            .processes_per_machine(processes_per_machine)
            .items_per_process(items_per_process)
            .try_build()
    }

    /// Create config from builder
    pub(crate) fn from_builder(b: GeneratorConfigBuilder) -> Self {
        Self {
            timestamp: b.timestamp.trunc_subsecs(0),
            machine_count: b.machine_count,
            process_count: b.process_count,
            item_count: b.item_count,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Check field bounds. Machines are checked before items.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.machine_count > MAX_MACHINES {
            return Err(GeneratorError::MachineCountTooLarge {
                count: self.machine_count,
                max: MAX_MACHINES,
            });
        }
        if self.item_count > MAX_ITEMS_PER_PROCESS {
            return Err(GeneratorError::ItemCountTooLarge {
                count: self.item_count,
                max: MAX_ITEMS_PER_PROCESS,
            });
        }
        Ok(())
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Shared timestamp, truncated to whole seconds
    #[inline(always)]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Unix seconds truncated to the 4-byte timestamp field
    #[inline(always)]
    pub fn timestamp_secs(&self) -> u32 {
        self.timestamp.timestamp() as u32
    }

    #[inline(always)]
    pub const fn machine_count(&self) -> u32 {
        self.machine_count
    }

    #[inline(always)]
    pub const fn process_count(&self) -> u16 {
        self.process_count
    }

    #[inline(always)]
    pub const fn item_count(&self) -> u32 {
        self.item_count
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            machine_count: DEFAULT_MACHINE_COUNT,
            process_count: DEFAULT_PROCESS_COUNT,
            item_count: DEFAULT_ITEM_COUNT,
        }
    }
}
