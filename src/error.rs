use crate::abilities::AbilityId;
use crate::items::{ItemCategory, ItemId};

/// A guarded operation refused to run. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("not enough spirit stones: need {needed}, have {available}")]
    InsufficientCurrency { needed: u64, available: u64 },

    #[error("not enough attribute points: requested {requested}, have {available}")]
    InsufficientAttributePoints { requested: u32, available: u32 },

    #[error("item {0} is not in the inventory")]
    ItemNotFound(ItemId),

    #[error("{0:?} items cannot be equipped")]
    NotEquippable(ItemCategory),

    #[error("{0:?} items cannot be consumed")]
    NotConsumable(ItemCategory),

    #[error("item stack is empty")]
    StackEmpty,

    #[error("ability {0} has not been learned")]
    AbilityNotLearned(AbilityId),

    #[error("ability {0} is already active")]
    AbilityAlreadyActive(AbilityId),

    #[error("ability {0} is not active")]
    AbilityNotActive(AbilityId),

    #[error("all {0} active ability slots are in use")]
    ActiveAbilitiesFull(usize),

    #[error("ability is already at max level {0}")]
    AbilityAtMaxLevel(u32),
}

/// Persisted bytes could not be turned back into a character.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("save data truncated: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("invalid save version: expected 0x{expected:016X}, got 0x{found:016X}")]
    BadMagic { expected: u64, found: u64 },

    #[error("declared payload length {declared} does not match {actual} available bytes")]
    LengthMismatch { declared: usize, actual: usize },

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("malformed save payload: {0}")]
    Malformed(#[from] bincode::Error),

    #[error("save holds an impossible character: {0}")]
    InvalidState(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_error_messages() {
        let err = ActionError::InsufficientCurrency {
            needed: 500,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "not enough spirit stones: need 500, have 100"
        );
        assert_eq!(
            ActionError::ActiveAbilitiesFull(4).to_string(),
            "all 4 active ability slots are in use"
        );
    }

    #[test]
    fn test_decode_error_messages() {
        let err = DecodeError::BadMagic {
            expected: 1,
            found: 2,
        };
        assert!(err.to_string().contains("0x0000000000000001"));
        assert_eq!(
            DecodeError::ChecksumMismatch.to_string(),
            "checksum verification failed"
        );
        assert_eq!(
            DecodeError::InvalidState("too many active abilities").to_string(),
            "save holds an impossible character: too many active abilities"
        );
    }
}
