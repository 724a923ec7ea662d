use thiserror::Error;

/// Represents errors that can occur while enumerating an ObjectId space
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Machine count exceeds the 3-byte machine field
    #[error("Can only manage up to {max} unique machines, got {count}")]
    MachineCountTooLarge { count: u32, max: u32 },
    /// Item count exceeds the 3-byte counter field
    #[error("Can only manage up to {max} items per process, got {count}")]
    ItemCountTooLarge { count: u32, max: u32 },
    /// The batch cannot be held in memory on this platform
    #[error("Cannot materialize {count} ObjectIds at once, use ids() or stream() instead")]
    BatchTooLarge { count: u64 },
}

/// Errors that can occur while parsing the hex form of an ObjectId
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseObjectIdError {
    /// The input is not exactly 24 bytes long
    #[error("Invalid ObjectId hex length {0}, expected 24")]
    InvalidLength(usize),
    /// The input contains a non-hex character
    #[error("Invalid hex character {c:?} at position {index}")]
    InvalidCharacter { c: char, index: usize },
}
