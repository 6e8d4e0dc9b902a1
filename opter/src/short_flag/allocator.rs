//! Deterministic short flag selection.

use crate::error::{OpterError, OpterResult};

use super::CharacterRegistry;

/// Characters tried once the option name offers nothing usable.
const FALLBACK_ALPHABET: &str = "abcdefgijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUWXYZ";

/// Picks and claims a short flag character for `option`.
///
/// Candidates, in order, skipping anything already claimed:
///
/// 1. the first character of the name, then its upper-case form;
/// 2. every upper-case letter in the name, lower-case form first;
/// 3. every later character of the name, lower-case form first;
/// 4. the fallback alphabet (`a`-`z` without `h`, then `A`-`Z` without `V`).
///
/// Only ASCII alphanumerics are ever considered.
///
/// # Errors
///
/// Returns [`OpterError::ExhaustedCharacterSpace`] when every candidate is
/// taken.
///
/// # Examples
///
/// ```
/// use opter::short_flag::{CharacterRegistry, allocate};
///
/// let mut registry = CharacterRegistry::new();
/// assert_eq!(allocate("myOption", &mut registry)?, 'm');
/// assert_eq!(allocate("mySecondOption", &mut registry)?, 'M');
/// assert_eq!(allocate("mySixthOption", &mut registry)?, 's');
/// # Ok::<_, opter::OpterError>(())
/// ```
pub fn allocate(option: &str, registry: &mut CharacterRegistry) -> OpterResult<char> {
    let chosen = candidates(option)
        .filter(char::is_ascii_alphanumeric)
        .find(|candidate| registry.try_claim(*candidate))
        .ok_or_else(|| OpterError::ExhaustedCharacterSpace {
            option: option.to_owned(),
        })?;
    tracing::trace!(option, short = %chosen, "allocated short flag");
    Ok(chosen)
}

fn candidates(option: &str) -> impl Iterator<Item = char> + '_ {
    let first = option
        .chars()
        .next()
        .into_iter()
        .flat_map(|c| [c, c.to_ascii_uppercase()]);
    let capitals = option
        .chars()
        .filter(char::is_ascii_uppercase)
        .flat_map(|c| [c.to_ascii_lowercase(), c]);
    let rest = option
        .chars()
        .skip(1)
        .flat_map(|c| [c.to_ascii_lowercase(), c.to_ascii_uppercase()]);
    first.chain(capitals).chain(rest).chain(FALLBACK_ALPHABET.chars())
}
