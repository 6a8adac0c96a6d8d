//! Checksummed binary save envelope.
//!
//! Layout:
//! - version magic (8 bytes, little endian)
//! - payload length (4 bytes, little endian)
//! - bincode payload: the character plus a unix `saved_at` timestamp
//! - SHA-256 over magic, length and payload (32 bytes)
//!
//! Where the bytes live is the host's concern.

use super::state::Character;
use super::tiers::Tier;
use crate::core::constants::SAVE_VERSION_MAGIC;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::warn;

const MAGIC_LEN: usize = 8;
const LENGTH_LEN: usize = 4;
const CHECKSUM_LEN: usize = 32;
const HEADER_LEN: usize = MAGIC_LEN + LENGTH_LEN;

#[derive(Serialize)]
struct SavePayloadRef<'a> {
    saved_at: i64,
    character: &'a Character,
}

#[derive(Deserialize)]
struct SavePayload {
    saved_at: i64,
    character: Character,
}

/// Header-level facts about a save, for load menus.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SaveInfo {
    pub name: String,
    pub tier: Tier,
    pub level: u32,
    pub saved_at: i64,
}

/// Encodes `character` stamped with the current time.
pub fn serialize(character: &Character) -> Result<Vec<u8>, bincode::Error> {
    encode(character, chrono::Utc::now().timestamp())
}

fn encode(character: &Character, saved_at: i64) -> Result<Vec<u8>, bincode::Error> {
    let data = bincode::serialize(&SavePayloadRef {
        saved_at,
        character,
    })?;
    let data_len =
        u32::try_from(data.len()).map_err(|_| Box::new(bincode::ErrorKind::SizeLimit))?;

    let mut hasher = Sha256::new();
    hasher.update(SAVE_VERSION_MAGIC.to_le_bytes());
    hasher.update(data_len.to_le_bytes());
    hasher.update(&data);
    let checksum = hasher.finalize();

    let mut bytes = Vec::with_capacity(HEADER_LEN + data.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&data_len.to_le_bytes());
    bytes.extend_from_slice(&data);
    bytes.extend_from_slice(&checksum);
    Ok(bytes)
}

/// Decodes bytes produced by [`serialize`], verifying magic, length and checksum.
///
/// A payload that passes the checksum must still describe a character the API
/// could have produced, or it comes back as [`DecodeError::InvalidState`].
pub fn deserialize(bytes: &[u8]) -> Result<Character, DecodeError> {
    decode(bytes).map(|payload| payload.character)
}

/// Reads the identifying fields of a save without handing back the character.
pub fn save_info(bytes: &[u8]) -> Result<SaveInfo, DecodeError> {
    let payload = decode(bytes)?;
    Ok(SaveInfo {
        name: payload.character.name,
        tier: payload.character.tier,
        level: payload.character.level,
        saved_at: payload.saved_at,
    })
}

fn decode(bytes: &[u8]) -> Result<SavePayload, DecodeError> {
    let result = verify(bytes).and_then(|data| {
        let payload: SavePayload = bincode::deserialize(data)?;
        payload
            .character
            .validate()
            .map_err(DecodeError::InvalidState)?;
        Ok(payload)
    });
    if let Err(err) = &result {
        warn!(error = %err, len = bytes.len(), "save decode failed");
    }
    result
}

/// Checks the envelope and returns the payload slice.
fn verify(bytes: &[u8]) -> Result<&[u8], DecodeError> {
    if bytes.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(DecodeError::Truncated {
            expected: HEADER_LEN + CHECKSUM_LEN,
            actual: bytes.len(),
        });
    }

    let (magic_bytes, rest) = bytes.split_at(MAGIC_LEN);
    let (length_bytes, rest) = rest.split_at(LENGTH_LEN);

    let mut magic = [0u8; MAGIC_LEN];
    magic.copy_from_slice(magic_bytes);
    let version = u64::from_le_bytes(magic);
    if version != SAVE_VERSION_MAGIC {
        return Err(DecodeError::BadMagic {
            expected: SAVE_VERSION_MAGIC,
            found: version,
        });
    }

    let mut length = [0u8; LENGTH_LEN];
    length.copy_from_slice(length_bytes);
    let declared = u32::from_le_bytes(length) as usize;
    let available = rest.len() - CHECKSUM_LEN;
    if declared != available {
        return Err(DecodeError::LengthMismatch {
            declared,
            actual: available,
        });
    }

    let (data, stored_checksum) = rest.split_at(declared);

    let mut hasher = Sha256::new();
    hasher.update(magic);
    hasher.update(length);
    hasher.update(data);
    let computed_checksum = hasher.finalize();

    if stored_checksum != computed_checksum.as_slice() {
        return Err(DecodeError::ChecksumMismatch);
    }

    Ok(data)
}
