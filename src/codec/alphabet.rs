// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Codec alphabets.

use crate::error::InvalidInput;
use std::collections::HashSet;

/// Characters allowed in a URL, in index order (84 characters).
pub const URL_ALLOWED_CHARS: &str = concat!(
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
    "0123456789-_.~!*'();:@&=+$,/?#[]"
);

/// Two-digit code marking "no second character". Never a real index.
pub const SENTINEL: u32 = 99;

/// Largest alphabet whose indices all stay below [`SENTINEL`].
pub const MAX_ALPHABET_LEN: usize = SENTINEL as usize;

/// Check that `alphabet` can be packed two characters per code.
///
/// # Errors
///
/// - [`InvalidInput::EmptyAlphabet`] if it has no characters
/// - [`InvalidInput::AlphabetTooLarge`] if an index would reach the sentinel
/// - [`InvalidInput::DuplicateCharacter`] if a character repeats
pub fn validate(alphabet: &str) -> Result<Vec<char>, InvalidInput> {
    let chars: Vec<char> = alphabet.chars().collect();
    if chars.is_empty() {
        return Err(InvalidInput::EmptyAlphabet);
    }
    if chars.len() > MAX_ALPHABET_LEN {
        return Err(InvalidInput::AlphabetTooLarge {
            len: chars.len(),
            max: MAX_ALPHABET_LEN,
        });
    }

    let mut seen = HashSet::with_capacity(chars.len());
    if let Some(&ch) = chars.iter().find(|&&ch| !seen.insert(ch)) {
        return Err(InvalidInput::DuplicateCharacter { ch });
    }
    Ok(chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_alphabet_is_valid() {
        let chars = validate(URL_ALLOWED_CHARS).unwrap();
        assert_eq!(chars.len(), 84);
        assert!(chars.len() < SENTINEL as usize);
    }

    #[test]
    fn test_rejections() {
        assert_eq!(validate(""), Err(InvalidInput::EmptyAlphabet));
        assert_eq!(
            validate("abca"),
            Err(InvalidInput::DuplicateCharacter { ch: 'a' })
        );

        let too_big: String = (0..100u32).filter_map(|i| char::from_u32(0x100 + i)).collect();
        assert_eq!(
            validate(&too_big),
            Err(InvalidInput::AlphabetTooLarge { len: 100, max: 99 })
        );

        let largest: String = too_big.chars().take(99).collect();
        assert_eq!(validate(&largest).unwrap().len(), 99);
    }
}
