// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! All orderings of a string's characters.

use crate::error::InvalidInput;
use std::collections::HashSet;

/// The permutations of a string, yielded one at a time.
///
/// Consumed by value: once exhausted it cannot be restarted. The order in
/// which permutations appear is unspecified.
#[derive(Debug, Clone)]
pub struct Permutations {
    inner: std::vec::IntoIter<String>,
}

impl Iterator for Permutations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Permutations {}

/// All `n!` orderings of the characters of `chars`.
///
/// Characters are assumed pairwise distinct; repeated characters produce
/// repeated permutations. The empty string has exactly one permutation,
/// itself.
///
/// # Example
///
/// ```
/// use snaking_katas::permutations;
///
/// let mut all: Vec<String> = permutations("ab").collect();
/// all.sort();
/// assert_eq!(all, vec!["ab", "ba"]);
/// ```
pub fn permutations(chars: &str) -> Permutations {
    let chars: Vec<char> = chars.chars().collect();
    Permutations {
        inner: permute(&chars).into_iter(),
    }
}

/// Like [`permutations`], but rejects input with repeated characters.
pub fn permutations_distinct(chars: &str) -> Result<Permutations, InvalidInput> {
    let mut seen = HashSet::new();
    if let Some(ch) = chars.chars().find(|&ch| !seen.insert(ch)) {
        return Err(InvalidInput::DuplicateCharacter { ch });
    }
    Ok(permutations(chars))
}

/// Remove each character in turn and prefix it to every permutation of the rest.
fn permute(chars: &[char]) -> Vec<String> {
    match chars {
        [] => vec![String::new()],
        [a] => vec![a.to_string()],
        [a, b] => vec![[*a, *b].iter().collect(), [*b, *a].iter().collect()],
        _ => {
            let mut result = Vec::new();
            for (index, &ch) in chars.iter().enumerate() {
                let mut rest = chars.to_vec();
                rest.remove(index);
                for tail in permute(&rest) {
                    let mut permutation = String::with_capacity(ch.len_utf8() + tail.len());
                    permutation.push(ch);
                    permutation.push_str(&tail);
                    result.push(permutation);
                }
            }
            result
        }
    }
}
