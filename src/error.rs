//! Error types for the rotorcrypt library.
//!
//! Every failure is a rejected state transition detected synchronously at
//! configuration time. Components validate transactionally: a rejected
//! reconfiguration leaves the previous valid state untouched, so the
//! machine stays usable after any error.

use thiserror::Error;

/// Errors produced by the rotorcrypt library.
#[derive(Debug, Error)]
pub enum EnigmaError {
    /// A wiring table is not a bijection over the 26-letter alphabet.
    #[error("invalid permutation: {0}")]
    InvalidPermutation(String),

    /// A reflector wiring table failed permutation validation.
    #[error("invalid reflector wiring: {0}")]
    InvalidWiring(String),

    /// A rotor notch position falls outside 0..=25.
    #[error("invalid notch position {0}, must be in 0..=25")]
    InvalidNotch(u8),

    /// More than 10 plugboard connection pairs were supplied.
    #[error("too many plugboard connections: {0} given, at most 10 supported")]
    TooManyConnections(usize),

    /// A plugboard connection token is not exactly two letters.
    #[error("malformed plugboard pair: {0:?}")]
    MalformedPair(String),

    /// A plugboard pair connects a letter to itself.
    #[error("plugboard pair {0:?} connects a letter to itself")]
    SelfPair(String),

    /// A plugboard pair contains a character outside A-Z.
    #[error("plugboard pair {0:?} contains a character outside A-Z")]
    OutOfRange(String),

    /// A plugboard letter appears in more than one connection pair.
    /// The message names the conflicting pairs.
    #[error("repeated letter in plugboard connections: {0}")]
    DuplicateConnection(String),

    /// A rotor selection is not exactly 3 distinct in-range pool indices.
    #[error("invalid rotor selection: {0}")]
    InvalidSelection(String),

    /// Configuration file I/O failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Configuration file contained malformed JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_too_many_connections() {
        let err = EnigmaError::TooManyConnections(11);
        assert_eq!(
            format!("{}", err),
            "too many plugboard connections: 11 given, at most 10 supported"
        );
    }

    #[test]
    fn test_display_invalid_notch() {
        let err = EnigmaError::InvalidNotch(26);
        assert_eq!(
            format!("{}", err),
            "invalid notch position 26, must be in 0..=25"
        );
    }

    #[test]
    fn test_display_malformed_pair() {
        let err = EnigmaError::MalformedPair("ABC".to_string());
        assert_eq!(format!("{}", err), "malformed plugboard pair: \"ABC\"");
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&EnigmaError::InvalidNotch(30));
    }
}
