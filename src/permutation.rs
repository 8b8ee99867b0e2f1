//! Shared permutation representation over the 26-letter alphabet.
//!
//! Rotor and reflector wirings are both bijective mappings of A-Z onto
//! itself. This module owns the single validation path for those tables
//! plus the letter/index conversions used at the engine boundary.

use crate::error::EnigmaError;

/// Number of symbols in the alphabet.
pub const ALPHABET_LEN: usize = 26;

/// Converts an ASCII letter (either case) to its symbol index 0..=25.
///
/// Returns `None` for anything outside A-Z / a-z.
pub fn letter_to_index(letter: char) -> Option<u8> {
    if letter.is_ascii_alphabetic() {
        Some(letter.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Converts a symbol index 0..=25 back to its uppercase letter.
///
/// # Panics
/// Debug-asserts that `index < 26`; all internal arithmetic is mod 26.
pub fn index_to_letter(index: u8) -> char {
    debug_assert!((index as usize) < ALPHABET_LEN);
    (b'A' + index) as char
}

/// Parses a 26-letter wiring string into a validated permutation table.
///
/// `table[i]` is the symbol that symbol `i` maps to. Fails with
/// [`EnigmaError::InvalidPermutation`] unless the string is exactly 26
/// letters with every letter A-Z appearing once.
pub fn parse_wiring(wiring: &str) -> Result<[u8; ALPHABET_LEN], EnigmaError> {
    let chars: Vec<char> = wiring.chars().collect();
    if chars.len() != ALPHABET_LEN {
        return Err(EnigmaError::InvalidPermutation(format!(
            "wiring {:?} has {} characters, expected {}",
            wiring,
            chars.len(),
            ALPHABET_LEN
        )));
    }

    let mut table = [0u8; ALPHABET_LEN];
    let mut seen = [false; ALPHABET_LEN];
    for (i, &c) in chars.iter().enumerate() {
        let sym = letter_to_index(c).ok_or_else(|| {
            EnigmaError::InvalidPermutation(format!("wiring contains non-letter {:?}", c))
        })?;
        if seen[sym as usize] {
            return Err(EnigmaError::InvalidPermutation(format!(
                "letter {} appears more than once in wiring {:?}",
                index_to_letter(sym),
                wiring
            )));
        }
        seen[sym as usize] = true;
        table[i] = sym;
    }
    Ok(table)
}

/// Computes the functional inverse of a permutation table.
///
/// `invert(t)[t[i]] == i` for all `i`. The input must already be a
/// validated permutation.
pub fn invert(table: &[u8; ALPHABET_LEN]) -> [u8; ALPHABET_LEN] {
    let mut inverse = [0u8; ALPHABET_LEN];
    for (i, &out) in table.iter().enumerate() {
        inverse[out as usize] = i as u8;
    }
    inverse
}

/// Returns true iff the table is an involution: `table[table[i]] == i`
/// for all `i`. Fixed points are allowed.
pub fn is_involution(table: &[u8; ALPHABET_LEN]) -> bool {
    table
        .iter()
        .enumerate()
        .all(|(i, &out)| table[out as usize] as usize == i)
}

/// Renders a permutation table back into its 26-letter wiring string.
pub fn render_wiring(table: &[u8; ALPHABET_LEN]) -> String {
    table.iter().map(|&sym| index_to_letter(sym)).collect()
}
