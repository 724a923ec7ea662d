//! GeneratorConfig builder for constructing configuration

use chrono::{DateTime, Utc};

use super::GeneratorConfig;

/// Default configuration values
pub(super) const DEFAULT_MACHINE_COUNT: u32 = 1;
pub(super) const DEFAULT_PROCESS_COUNT: u16 = 1;
pub(super) const DEFAULT_ITEM_COUNT: u32 = 1;

/// Builder for GeneratorConfig
///
/// `build` does not validate, so an out-of-range config can still be
/// inspected. Use `try_build` (or `GeneratorConfig::new`) to get a checked one.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfigBuilder {
    pub(super) timestamp: DateTime<Utc>,
    pub(super) machine_count: u32,
    pub(super) process_count: u16,
    pub(super) item_count: u32,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            timestamp: DateTime::<Utc>::UNIX_EPOCH,
            machine_count: DEFAULT_MACHINE_COUNT,
            process_count: DEFAULT_PROCESS_COUNT,
            item_count: DEFAULT_ITEM_COUNT,
        }
    }

    /// Set the timestamp shared by every generated ObjectId (seconds precision)
    pub const fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the number of machines to enumerate (at most 2^24)
    pub const fn machines(mut self, count: u32) -> Self {
        self.machine_count = count;
        self
    }

    /// Set the number of processes per machine
    pub const fn processes_per_machine(mut self, count: u16) -> Self {
        self.process_count = count;
        self
    }

    /// Set the number of counter values per process (at most 2^24)
    pub const fn items_per_process(mut self, count: u32) -> Self {
        self.item_count = count;
        self
    }

    /// Build the GeneratorConfig without validating it
    pub fn build(self) -> GeneratorConfig {
        GeneratorConfig::from_builder(self)
    }

    /// Build the GeneratorConfig and validate its bounds
    pub fn try_build(self) -> Result<GeneratorConfig, crate::GeneratorError> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
