//! Plugboard: user-configurable involutive substitution.
//!
//! The plugboard swaps up to 10 disjoint letter pairs before the signal
//! enters the rotor stack and again after it returns. Unplugged letters
//! pass through unchanged, so the mapping is always an involution over
//! the full alphabet.
//!
//! Connection strings are whitespace-separated two-letter tokens, e.g.
//! `"AB CD EF"`. Validation is all-or-nothing: a rejected string leaves
//! the previous mapping in place.

use std::fmt;

use log::debug;

use crate::error::EnigmaError;
use crate::permutation::{index_to_letter, letter_to_index, ALPHABET_LEN};

/// Maximum number of connection pairs (the physical machine shipped
/// with 10 cables).
pub const MAX_CONNECTIONS: usize = 10;

/// Involutive substitution applied at both ends of the circuit.
#[derive(Debug, Clone)]
pub struct Plugboard {
    mapping: [u8; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Plugboard {
            mapping: identity(),
        }
    }
}

fn identity() -> [u8; ALPHABET_LEN] {
    let mut mapping = [0u8; ALPHABET_LEN];
    for (i, slot) in mapping.iter_mut().enumerate() {
        *slot = i as u8;
    }
    mapping
}

impl Plugboard {
    /// Builds a plugboard from a connection string.
    ///
    /// # Errors
    /// See [`set_connections`](Self::set_connections).
    pub fn new(connections: &str) -> Result<Self, EnigmaError> {
        let mut board = Plugboard::default();
        board.set_connections(connections)?;
        Ok(board)
    }

    /// Replaces the full connection set from a whitespace-separated
    /// string of two-letter tokens. An empty string clears the board.
    ///
    /// The new mapping is validated on the side and committed only when
    /// every pair checks out; on error the previous mapping survives.
    ///
    /// # Errors
    /// - [`EnigmaError::TooManyConnections`] for more than 10 tokens.
    /// - [`EnigmaError::MalformedPair`] for a token that is not exactly
    ///   two characters.
    /// - [`EnigmaError::SelfPair`] for a pair of identical letters.
    /// - [`EnigmaError::OutOfRange`] for characters outside A-Z.
    /// - [`EnigmaError::DuplicateConnection`] when a letter reappears in
    ///   a later token; the error names the conflicting pairs.
    pub fn set_connections(&mut self, connections: &str) -> Result<(), EnigmaError> {
        let tokens: Vec<&str> = connections.split_whitespace().collect();
        if tokens.len() > MAX_CONNECTIONS {
            return Err(EnigmaError::TooManyConnections(tokens.len()));
        }

        let mut mapping = identity();
        for token in tokens {
            let chars: Vec<char> = token.chars().collect();
            if chars.len() != 2 {
                return Err(EnigmaError::MalformedPair(token.to_string()));
            }
            let first = letter_to_index(chars[0])
                .ok_or_else(|| EnigmaError::OutOfRange(token.to_string()))?;
            let second = letter_to_index(chars[1])
                .ok_or_else(|| EnigmaError::OutOfRange(token.to_string()))?;
            if first == second {
                return Err(EnigmaError::SelfPair(token.to_string()));
            }
            if mapping[first as usize] != first || mapping[second as usize] != second {
                return Err(EnigmaError::DuplicateConnection(conflict_report(
                    &mapping, token, first, second,
                )));
            }
            mapping[first as usize] = second;
            mapping[second as usize] = first;
        }

        self.mapping = mapping;
        debug!("plugboard connections set to {:?}", self.connections());
        Ok(())
    }

    /// Removes every connection, restoring the identity mapping.
    pub fn reset(&mut self) {
        self.mapping = identity();
    }

    /// Passes a symbol through the board.
    pub fn pass_through(&self, symbol: u8) -> u8 {
        self.mapping[symbol as usize]
    }

    /// Passes a letter through the board, accepting either case.
    ///
    /// Returns `None` for non-letter input.
    pub fn pass_through_letter(&self, letter: char) -> Option<u8> {
        letter_to_index(letter).map(|symbol| self.pass_through(symbol))
    }

    /// Renders the current connections as canonical `"XY XY ..."` pair
    /// notation: fixed points skipped, each pair emitted once, ordered
    /// by its alphabetically first letter.
    pub fn connections(&self) -> String {
        let mut pairs = Vec::new();
        for (i, &mapped) in self.mapping.iter().enumerate() {
            if mapped as usize > i {
                let mut pair = String::with_capacity(2);
                pair.push(index_to_letter(i as u8));
                pair.push(index_to_letter(mapped));
                pairs.push(pair);
            }
        }
        pairs.join(" ")
    }
}

/// Builds the `DuplicateConnection` message: the offending token plus
/// the earlier pair(s) that already claimed its letters.
fn conflict_report(mapping: &[u8; ALPHABET_LEN], token: &str, first: u8, second: u8) -> String {
    let mut pairs = vec![token.to_ascii_uppercase()];
    for letter in [first, second] {
        let mapped = mapping[letter as usize];
        if mapped != letter {
            pairs.push(format!(
                "{}{}",
                index_to_letter(letter),
                index_to_letter(mapped)
            ));
        }
    }
    pairs.join(", ")
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Plugboard Connections: {}", self.connections())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_identity() {
        let board = Plugboard::new("").unwrap();
        for symbol in 0..26u8 {
            assert_eq!(board.pass_through(symbol), symbol);
        }
        assert_eq!(board.connections(), "");
    }

    #[test]
    fn test_pairs_swap_both_ways() {
        let board = Plugboard::new("AB CD EF").unwrap();
        assert_eq!(board.pass_through(0), 1);
        assert_eq!(board.pass_through(1), 0);
        assert_eq!(board.pass_through(2), 3);
        assert_eq!(board.pass_through(5), 4);
        assert_eq!(board.pass_through(25), 25);
    }

    #[test]
    fn test_involution() {
        let board = Plugboard::new("AJ KU DO WE FC NB QZ GM XV RT").unwrap();
        for symbol in 0..26u8 {
            assert_eq!(board.pass_through(board.pass_through(symbol)), symbol);
        }
    }

    #[test]
    fn test_pass_through_letter() {
        let board = Plugboard::new("AB").unwrap();
        assert_eq!(board.pass_through_letter('A'), Some(1));
        assert_eq!(board.pass_through_letter('b'), Some(0));
        assert_eq!(board.pass_through_letter('C'), Some(2));
        assert_eq!(board.pass_through_letter('!'), None);
    }

    #[test]
    fn test_ten_connections_accepted() {
        let board = Plugboard::new("AB CD EF GH IJ KL MN OP QR ST").unwrap();
        assert_eq!(board.connections(), "AB CD EF GH IJ KL MN OP QR ST");
    }

    #[test]
    fn test_eleven_connections_rejected() {
        let err = Plugboard::new("AB CD EF GH IJ KL MN OP QR ST UV").unwrap_err();
        assert!(matches!(err, EnigmaError::TooManyConnections(11)));
    }

    #[test]
    fn test_malformed_pair() {
        assert!(matches!(
            Plugboard::new("A").unwrap_err(),
            EnigmaError::MalformedPair(_)
        ));
        assert!(matches!(
            Plugboard::new("ABC").unwrap_err(),
            EnigmaError::MalformedPair(_)
        ));
    }

    #[test]
    fn test_self_pair_rejected() {
        assert!(matches!(
            Plugboard::new("AA").unwrap_err(),
            EnigmaError::SelfPair(_)
        ));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(matches!(
            Plugboard::new("A1").unwrap_err(),
            EnigmaError::OutOfRange(_)
        ));
    }

    #[test]
    fn test_duplicate_connection_names_conflicts() {
        let err = Plugboard::new("AB CA").unwrap_err();
        match err {
            EnigmaError::DuplicateConnection(msg) => {
                assert!(msg.contains("CA"));
                assert!(msg.contains("AB"));
            }
            other => panic!("expected DuplicateConnection, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_update_preserves_previous_state() {
        let mut board = Plugboard::new("AB CD").unwrap();
        assert!(board.set_connections("EF GE").is_err());
        assert_eq!(board.connections(), "AB CD");
        assert_eq!(board.pass_through(0), 1);
    }

    #[test]
    fn test_lowercase_tokens_accepted() {
        let board = Plugboard::new("ab cd").unwrap();
        assert_eq!(board.connections(), "AB CD");
    }

    #[test]
    fn test_connections_canonical_order() {
        let board = Plugboard::new("ZY XW").unwrap();
        assert_eq!(board.connections(), "WX YZ");
    }

    #[test]
    fn test_reset_clears_connections() {
        let mut board = Plugboard::new("AB").unwrap();
        board.reset();
        assert_eq!(board.connections(), "");
        assert_eq!(board.pass_through(0), 0);
    }

    #[test]
    fn test_connections_is_pure() {
        let board = Plugboard::new("AB CD").unwrap();
        assert_eq!(board.connections(), board.connections());
        assert_eq!(board.pass_through(0), 1);
    }
}
