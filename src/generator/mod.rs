//! Enumeration of the ObjectId space described by a `GeneratorConfig`
//!
//! Split into modules by operating mode:
//! - `iter` - Lazy single-threaded enumeration cursor
//! - `stream` - Producer thread feeding a bounded channel
//!
//! Every mode walks the same nested order: machine outermost, then process,
//! then counter (fastest).

mod iter;
mod stream;

use tracing::debug;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::object_id::{ObjectId, OBJECT_ID_LEN};

pub use iter::ObjectIds;
pub use stream::{ObjectIdStream, DEFAULT_STREAM_CAPACITY};

/// Largest batch `generate` will try to allocate on this platform
const MAX_BATCH_LEN: u64 = (isize::MAX as u64) / OBJECT_ID_LEN as u64;

impl GeneratorConfig {
    /// Number of ObjectIds this config enumerates
    ///
    /// The widest valid product is `2^24 * (2^16 - 1) * 2^24`, below `u64::MAX`.
    #[inline]
    pub fn count(&self) -> u64 {
        u64::from(self.machine_count())
            * u64::from(self.process_count())
            * u64::from(self.item_count())
    }

    /// Lazily enumerate every ObjectId of this config
    pub fn ids(&self) -> Result<ObjectIds, GeneratorError> {
        self.validate()?;
        Ok(ObjectIds::new(self))
    }

    /// Create every ObjectId of this config in one `Vec`
    ///
    /// Memory use is `12 * count()` bytes, check [`count`](Self::count)
    /// before calling this on large spaces.
    pub fn generate(&self) -> Result<Vec<ObjectId>, GeneratorError> {
        let ids = self.ids()?;
        let count = ids.remaining();
        if count > MAX_BATCH_LEN {
            return Err(GeneratorError::BatchTooLarge { count });
        }

        debug!(
            count,
            machines = self.machine_count(),
            processes = self.process_count(),
            items = self.item_count(),
            "Materializing ObjectId space"
        );
        let mut oids = Vec::with_capacity(count as usize);
        oids.extend(ids);
        Ok(oids)
    }
}
