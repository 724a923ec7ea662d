//! # objectid-space
//!
//! Deterministic enumeration of every 12-byte ObjectId reachable from a
//! fixed timestamp and bounded machine, process and counter ranges.
//!
//! - 🧮 Exact counts before generating
//! - 📦 Batch, lazy and streaming modes
//! - 🔢 Fixed nested order (counter fastest, machine slowest)
//! - 🧷 Bit-exact BSON ObjectId layout
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use objectid_space::GeneratorConfig;
//!
//! let t = Utc.with_ymd_and_hms(2009, 11, 10, 23, 0, 0).unwrap();
//! let config = GeneratorConfig::new(t, 4, 4, 10).unwrap();
//! assert_eq!(config.count(), 160);
//! assert_eq!(config.generate().unwrap().len(), 160);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod generator;
mod object_id;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{GeneratorConfig, GeneratorConfigBuilder, MAX_ITEMS_PER_PROCESS, MAX_MACHINES};
pub use error::{GeneratorError, ParseObjectIdError};
pub use generator::{ObjectIdStream, ObjectIds, DEFAULT_STREAM_CAPACITY};
pub use object_id::{encode, ObjectId, OBJECT_ID_LEN};
