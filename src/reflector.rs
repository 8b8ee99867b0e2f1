//! Reflector: fixed involutive substitution at the end of the rotor stack.
//!
//! The reflector does not rotate, so its substitution never changes. Its
//! wiring is an involution with no fixed points when generated by this
//! crate; hand-authored wirings are only checked for being permutations
//! (see [`Reflector::new`]).

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::permutation::{self, ALPHABET_LEN};

/// Immutable description of a reflector: name and wiring string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReflectorSpec {
    /// 26-letter wiring string.
    pub wiring: String,
    /// Display name.
    #[serde(default = "default_reflector_name")]
    pub name: String,
}

fn default_reflector_name() -> String {
    "Reflector".to_string()
}

impl ReflectorSpec {
    /// Generates a random fixed-point-free involutive reflector spec by
    /// drawing 13 disjoint letter pairs and wiring each pair both ways.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let mut pool: Vec<u8> = (0..ALPHABET_LEN as u8).collect();
        pool.shuffle(rng);
        let mut table = [0u8; ALPHABET_LEN];
        for pair in pool.chunks_exact(2) {
            table[pair[0] as usize] = pair[1];
            table[pair[1] as usize] = pair[0];
        }
        ReflectorSpec {
            wiring: permutation::render_wiring(&table),
            name: default_reflector_name(),
        }
    }
}

/// Non-rotating substitution component.
#[derive(Debug, Clone)]
pub struct Reflector {
    name: String,
    wiring: String,
    mapping: [u8; ALPHABET_LEN],
}

impl Reflector {
    /// Builds a reflector from its spec.
    ///
    /// Only permutation validity is enforced here; the fixed-point-free
    /// involution property is guaranteed by [`ReflectorSpec::generate`]
    /// and assumed (not re-checked) for hand-supplied wirings. A wiring
    /// with fixed points degrades reciprocity but is accepted. Callers
    /// that need the stricter check can use
    /// [`permutation::is_involution`].
    ///
    /// # Errors
    /// [`EnigmaError::InvalidWiring`] if the 26 values are not a
    /// permutation of A-Z.
    pub fn new(spec: &ReflectorSpec) -> Result<Self, EnigmaError> {
        let mapping = permutation::parse_wiring(&spec.wiring).map_err(|err| match err {
            EnigmaError::InvalidPermutation(msg) => EnigmaError::InvalidWiring(msg),
            other => other,
        })?;
        Ok(Reflector {
            name: spec.name.clone(),
            wiring: spec.wiring.to_ascii_uppercase(),
            mapping,
        })
    }

    /// Reflects a symbol straight through the wiring. No positional
    /// offset applies because the reflector never rotates.
    pub fn reflect(&self, symbol: u8) -> u8 {
        self.mapping[symbol as usize]
    }

    /// Reflector display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The 26-letter wiring string.
    pub fn wiring(&self) -> &str {
        &self.wiring
    }
}

impl fmt::Display for Reflector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wiring: {}", self.name, self.wiring)
    }
}
