// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reversible URL packing.
//!
//! Each character becomes its two-digit index in a fixed alphabet. The digit
//! string is cut into four-digit groups, and each group becomes the single
//! character whose scalar value is that number:
//!
//! ```text
//! "ab"  ->  "26" "27"  ->  2627  ->  '\u{a43}'
//! "A"   ->  "00" "99"  ->  0099  ->  'c'        (99 pads an odd length)
//! ```
//!
//! Output is half the length of the input, rounded up. This is an exercise
//! in index packing: there is no storage, no hashing and no collision
//! handling.

pub mod alphabet;

pub use alphabet::{MAX_ALPHABET_LEN, SENTINEL, URL_ALLOWED_CHARS};

use crate::error::InvalidInput;

/// Encoder/decoder bound to one alphabet.
///
/// # Example
///
/// ```
/// use snaking_katas::UrlShortener;
///
/// let shortener = UrlShortener::new();
/// let url = "https://en.wikipedia.org/wiki/URL_shortening";
/// let short = shortener.encode(url).unwrap();
/// assert_eq!(short.chars().count(), 22);
/// assert_eq!(shortener.decode(&short).unwrap(), url);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlShortener {
    alphabet: Vec<char>,
}

impl UrlShortener {
    /// A shortener over [`URL_ALLOWED_CHARS`].
    pub fn new() -> Self {
        Self {
            alphabet: URL_ALLOWED_CHARS.chars().collect(),
        }
    }

    /// A shortener over a custom alphabet.
    ///
    /// # Errors
    ///
    /// See [`alphabet::validate`].
    pub fn with_alphabet(alphabet: &str) -> Result<Self, InvalidInput> {
        Ok(Self {
            alphabet: alphabet::validate(alphabet)?,
        })
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    fn index_of(&self, ch: char) -> Option<u32> {
        self.alphabet.iter().position(|&c| c == ch).map(|i| i as u32)
    }

    fn char_at(&self, index: u32) -> Option<char> {
        self.alphabet.get(index as usize).copied()
    }

    /// Pack `url` into half as many characters.
    ///
    /// # Errors
    ///
    /// [`InvalidInput::CharacterOutsideAlphabet`] for the first character
    /// the alphabet does not contain.
    pub fn encode(&self, url: &str) -> Result<String, InvalidInput> {
        let codes = url
            .chars()
            .enumerate()
            .map(|(position, ch)| {
                self.index_of(ch)
                    .ok_or(InvalidInput::CharacterOutsideAlphabet { ch, position })
            })
            .collect::<Result<Vec<u32>, _>>()?;

        Ok(codes
            .chunks(2)
            .map(|pair| {
                let low = pair.get(1).copied().unwrap_or(SENTINEL);
                // At most 98 * 100 + 99, far below the surrogate range.
                char::from_u32(pair[0] * 100 + low).unwrap_or(char::REPLACEMENT_CHARACTER)
            })
            .collect())
    }

    /// Reverse [`UrlShortener::encode`].
    ///
    /// # Errors
    ///
    /// [`InvalidInput::MalformedCode`] if a character's value exceeds four
    /// digits, either half is outside the alphabet, or the sentinel appears
    /// anywhere but the last character.
    pub fn decode(&self, code: &str) -> Result<String, InvalidInput> {
        let packed: Vec<char> = code.chars().collect();
        let mut url = String::with_capacity(packed.len() * 2);

        for (position, &ch) in packed.iter().enumerate() {
            let malformed = |reason: &'static str| InvalidInput::MalformedCode {
                ch,
                position,
                reason,
            };

            let value = ch as u32;
            if value >= 10_000 {
                return Err(malformed("value has more than four digits"));
            }

            let (high, low) = (value / 100, value % 100);
            url.push(
                self.char_at(high)
                    .ok_or_else(|| malformed("first index outside the alphabet"))?,
            );

            if low == SENTINEL {
                if position + 1 != packed.len() {
                    return Err(malformed("padding before the last character"));
                }
            } else {
                url.push(
                    self.char_at(low)
                        .ok_or_else(|| malformed("second index outside the alphabet"))?,
                );
            }
        }

        Ok(url)
    }
}

impl Default for UrlShortener {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_encodings() {
        let shortener = UrlShortener::new();
        assert_eq!(shortener.encode("AB").unwrap(), "\u{1}");
        assert_eq!(shortener.encode("ab").unwrap(), "\u{a43}");
        assert_eq!(shortener.encode("A").unwrap(), "c");
        assert_eq!(shortener.encode("").unwrap(), "");
    }

    #[test]
    fn test_round_trip() {
        let shortener = UrlShortener::new();
        for url in [
            "",
            "A",
            "ab",
            "https://en.wikipedia.org/wiki/URL_shortening",
            "http://example.com/path?q=1&r=[2]#frag",
            URL_ALLOWED_CHARS,
        ] {
            let short = shortener.encode(url).unwrap();
            assert_eq!(short.chars().count(), (url.len() + 1) / 2);
            assert_eq!(shortener.decode(&short).unwrap(), url);
        }
    }

    #[test]
    fn test_sentinel_strips_padding() {
        let shortener = UrlShortener::new();
        assert_eq!(shortener.decode("c").unwrap(), "A");
        // 'A' is 65: index 0 then index 65.
        assert_eq!(shortener.decode("A").unwrap(), "A~");
    }

    #[test]
    fn test_encode_rejects_unknown_character() {
        let shortener = UrlShortener::new();
        assert_eq!(
            shortener.encode("ab cd"),
            Err(InvalidInput::CharacterOutsideAlphabet {
                ch: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let shortener = UrlShortener::new();

        let err = shortener.decode("\u{2710}").unwrap_err(); // 10000
        assert!(matches!(err, InvalidInput::MalformedCode { position: 0, .. }));

        // 8400: first index 84 is one past the alphabet.
        let err = shortener.decode("\u{20d0}").unwrap_err();
        assert!(matches!(err, InvalidInput::MalformedCode { ch: '\u{20d0}', .. }));

        // 0090: second index 90 is outside the alphabet.
        let err = shortener.decode("\u{5a}").unwrap_err();
        assert!(matches!(err, InvalidInput::MalformedCode { .. }));

        // Padding may only close the code.
        let err = shortener.decode("cA").unwrap_err();
        assert_eq!(
            err,
            InvalidInput::MalformedCode {
                ch: 'c',
                position: 0,
                reason: "padding before the last character"
            }
        );
    }

    #[test]
    fn test_custom_alphabet() {
        let shortener = UrlShortener::with_alphabet("xyz").unwrap();
        assert_eq!(shortener.alphabet(), &['x', 'y', 'z']);
        assert_eq!(shortener.encode("zy").unwrap(), "\u{c9}"); // 0201
        assert_eq!(shortener.decode("\u{c9}").unwrap(), "zy");
        assert!(shortener.encode("A").is_err());
    }
}
