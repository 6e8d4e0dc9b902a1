//! Set of claimed short flag characters.

use std::collections::HashSet;

use crate::error::{OpterError, OpterResult};

/// Characters used by the argument parser's built-in help and version flags.
pub const RESERVED_SHORTS: &[char] = &['h', 'V'];

/// Short flag characters already claimed during a resolution.
#[derive(Clone, Debug)]
pub struct CharacterRegistry {
    claimed: HashSet<char>,
}

impl Default for CharacterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterRegistry {
    /// Creates a registry holding only the reserved characters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            claimed: RESERVED_SHORTS.iter().copied().collect(),
        }
    }

    /// Returns `true` when `character` has been claimed.
    #[must_use]
    pub fn is_claimed(&self, character: char) -> bool {
        self.claimed.contains(&character)
    }

    /// Claims `character` if free, returning whether the claim succeeded.
    pub fn try_claim(&mut self, character: char) -> bool {
        self.claimed.insert(character)
    }

    /// Claims the character an option declares explicitly.
    ///
    /// # Errors
    ///
    /// Returns [`OpterError::InvalidCharacter`] when `character` is not ASCII
    /// alphanumeric and [`OpterError::DuplicateCharacter`] when it is already
    /// claimed, reserved characters included.
    pub fn claim_explicit(&mut self, option: &str, character: char) -> OpterResult<()> {
        if !character.is_ascii_alphanumeric() {
            return Err(OpterError::InvalidCharacter {
                option: option.to_owned(),
                character,
            });
        }
        if !self.try_claim(character) {
            return Err(OpterError::DuplicateCharacter {
                option: option.to_owned(),
                character,
            });
        }
        Ok(())
    }

    /// Number of claimed characters, reserved ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Always `false`: the reserved characters are claimed from the start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
