//! The 12-byte ObjectId value and its bit-exact layout
//!
//! | bytes | field     | width |
//! |-------|-----------|-------|
//! | 0..4  | timestamp | 4     |
//! | 4..7  | machine   | 3     |
//! | 7..9  | process   | 2     |
//! | 9..12 | counter   | 3     |
//!
//! All fields are big-endian.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use hex::FromHexError;

use crate::error::ParseObjectIdError;

/// Length of an ObjectId in bytes
pub const OBJECT_ID_LEN: usize = 12;

/// Length of the hex form of an ObjectId
const HEX_LEN: usize = OBJECT_ID_LEN * 2;

/// A 12-byte identifier in the BSON ObjectId layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId([u8; OBJECT_ID_LEN]);

/// Pack the four ObjectId fields into their byte layout
///
/// No validation: only the low 24 bits of `machine` and `counter` are kept.
#[inline]
pub fn encode(timestamp: u32, machine: u32, process: u16, counter: u32) -> ObjectId {
    let mut b = [0u8; OBJECT_ID_LEN];
    b[0..4].copy_from_slice(&timestamp.to_be_bytes());
    b[4..7].copy_from_slice(&machine.to_be_bytes()[1..]);
    b[7..9].copy_from_slice(&process.to_be_bytes());
    b[9..12].copy_from_slice(&counter.to_be_bytes()[1..]);
    ObjectId(b)
}

impl ObjectId {
    /// Build an ObjectId from its components, see [`encode`]
    #[inline]
    pub fn new(timestamp: u32, machine: u32, process: u16, counter: u32) -> Self {
        encode(timestamp, machine, process, counter)
    }

    #[inline(always)]
    pub const fn from_bytes(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub const fn as_bytes(&self) -> &[u8; OBJECT_ID_LEN] {
        &self.0
    }

    #[inline(always)]
    pub const fn into_bytes(self) -> [u8; OBJECT_ID_LEN] {
        self.0
    }

    /// Extract timestamp component as Unix seconds
    #[inline(always)]
    pub fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Extract timestamp component as a UTC time
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        // Every u32 second count is in chrono's range
        DateTime::from_timestamp(i64::from(self.timestamp_secs()), 0).unwrap_or_default()
    }

    /// Extract machine component
    #[inline(always)]
    pub fn machine(&self) -> u32 {
        u32::from_be_bytes([0, self.0[4], self.0[5], self.0[6]])
    }

    /// Extract process component
    #[inline(always)]
    pub fn process(&self) -> u16 {
        u16::from_be_bytes([self.0[7], self.0[8]])
    }

    /// Extract counter component
    #[inline(always)]
    pub fn counter(&self) -> u32 {
        u32::from_be_bytes([0, self.0[9], self.0[10], self.0[11]])
    }

    /// Decompose into timestamp seconds, machine, process and counter
    #[inline]
    pub fn decompose(&self) -> (u32, u32, u16, u32) {
        (
            self.timestamp_secs(),
            self.machine(),
            self.process(),
            self.counter(),
        )
    }

    /// Lowercase 24-character hex form
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse the 24-character hex form, either case
    pub fn from_hex(s: &str) -> Result<Self, ParseObjectIdError> {
        let mut bytes = [0u8; OBJECT_ID_LEN];
        match hex::decode_to_slice(s, &mut bytes) {
            Ok(()) => Ok(Self(bytes)),
            Err(FromHexError::InvalidHexCharacter { c, index }) => {
                // Everything before `index` is ASCII, so it is a char boundary
                let c = s.get(index..).and_then(|rest| rest.chars().next()).unwrap_or(c);
                Err(ParseObjectIdError::InvalidCharacter { c, index })
            }
            Err(_) => Err(ParseObjectIdError::InvalidLength(s.len())),
        }
    }
}

impl From<[u8; OBJECT_ID_LEN]> for ObjectId {
    fn from(bytes: [u8; OBJECT_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<ObjectId> for [u8; OBJECT_ID_LEN] {
    fn from(id: ObjectId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for ObjectId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0u8; HEX_LEN];
        hex::encode_to_slice(self.0, &mut buf).map_err(|_| fmt::Error)?;
        f.write_str(std::str::from_utf8(&buf).map_err(|_| fmt::Error)?)
    }
}

impl FromStr for ObjectId {
    type Err = ParseObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}
