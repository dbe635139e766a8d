use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;

use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::{DuvError, Result};

/// Length of an identifier in bytes
pub const ID_BYTES: usize = 12;

/// Length of the textual (hex) form of an identifier
pub const ID_HEX_LEN: usize = ID_BYTES * 2;

/// Opaque, immutable identifier for People, Ships and Declarations
///
/// Layout is `[4-byte seconds timestamp][5 process-random bytes][3-byte counter]`,
/// rendered as 24 lowercase hex characters. Ids minted by one process never
/// repeat: the counter starts at a random offset and the random middle
/// section is fixed per process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId([u8; ID_BYTES]);

static PROCESS_UNIQUE: OnceLock<[u8; 5]> = OnceLock::new();
static COUNTER: OnceLock<AtomicU32> = OnceLock::new();

impl EntityId {
    /// Mint a fresh identifier
    pub fn new() -> Self {
        let secs = Utc::now().timestamp() as u32;
        let unique = PROCESS_UNIQUE.get_or_init(|| rand::thread_rng().gen());
        let counter = COUNTER
            .get_or_init(|| AtomicU32::new(rand::thread_rng().gen_range(0..0x00FF_FFFF)))
            .fetch_add(1, Ordering::Relaxed);

        let mut bytes = [0u8; ID_BYTES];
        bytes[0..4].copy_from_slice(&secs.to_be_bytes());
        bytes[4..9].copy_from_slice(unique);
        bytes[9..12].copy_from_slice(&counter.to_be_bytes()[1..4]);
        Self(bytes)
    }

    /// Parse the 24-character hex form (either case)
    ///
    /// # Errors
    ///
    /// Returns `InvalidIdentifier` for anything that is not exactly 24 hex digits.
    pub fn parse(value: &str) -> Result<Self> {
        let invalid = || DuvError::InvalidIdentifier {
            value: value.to_string(),
        };

        if value.len() != ID_HEX_LEN {
            return Err(invalid());
        }

        let mut bytes = [0u8; ID_BYTES];
        hex::decode_to_slice(value, &mut bytes).map_err(|_| invalid())?;
        Ok(Self(bytes))
    }

    pub fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }

    /// Creation time embedded in the identifier (seconds since epoch)
    pub fn timestamp_secs(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for EntityId {
    type Err = DuvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for EntityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for EntityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        EntityId::parse(&text).map_err(serde::de::Error::custom)
    }
}
