//! Rotor: rotating substitution component.
//!
//! A rotor pairs a fixed wiring permutation with a mutable rotational
//! offset. The offset shifts both the entry and exit contacts, so the
//! effective substitution changes every time the rotor steps. The notch
//! marks the position at which the stepping mechanism carries rotation
//! into the next rotor inward.

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::permutation::{self, ALPHABET_LEN};

/// Immutable description of a physical rotor: name, wiring, notch.
///
/// Created by configuration loading or random generation, never mutated.
/// A [`Rotor`] copies the validated wiring tables out of its spec at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotorSpec {
    /// Display name, e.g. `"Rotor I"`.
    pub name: String,
    /// 26-letter wiring string; position `i` holds the letter that
    /// symbol `i` maps to at rotational offset 0.
    pub wiring: String,
    /// Notch position (0 = A .. 25 = Z).
    pub notch: u8,
}

impl RotorSpec {
    /// Generates a random rotor spec: a shuffled alphabet for the wiring
    /// and a uniformly random notch.
    pub fn generate<R: Rng>(name: &str, rng: &mut R) -> Self {
        let mut alphabet: Vec<char> = ('A'..='Z').collect();
        alphabet.shuffle(rng);
        RotorSpec {
            name: name.to_string(),
            wiring: alphabet.into_iter().collect(),
            notch: rng.gen_range(0..ALPHABET_LEN as u8),
        }
    }
}

/// Stateful rotor engaged in the machine's working set.
#[derive(Debug, Clone)]
pub struct Rotor {
    name: String,
    wiring: String,
    notch: u8,
    forward_mapping: [u8; ALPHABET_LEN],
    backward_mapping: [u8; ALPHABET_LEN],
    position: u8,
}

impl Rotor {
    /// Builds a rotor from its spec at the given initial position.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidPermutation`] if the wiring is not a
    /// permutation of A-Z; [`EnigmaError::InvalidNotch`] if the notch
    /// falls outside 0..=25.
    pub fn new(spec: &RotorSpec, init_position: u8) -> Result<Self, EnigmaError> {
        let forward_mapping = permutation::parse_wiring(&spec.wiring)?;
        if spec.notch as usize >= ALPHABET_LEN {
            return Err(EnigmaError::InvalidNotch(spec.notch));
        }
        Ok(Rotor {
            name: spec.name.clone(),
            wiring: spec.wiring.to_ascii_uppercase(),
            notch: spec.notch,
            backward_mapping: permutation::invert(&forward_mapping),
            forward_mapping,
            position: init_position % ALPHABET_LEN as u8,
        })
    }

    /// Maps a symbol through the wiring in the forward direction
    /// (plugboard side toward reflector side).
    ///
    /// The rotational offset applies on both the entry and exit contacts.
    pub fn forward(&self, symbol: u8) -> u8 {
        let index = (self.position as usize + symbol as usize) % ALPHABET_LEN;
        let raw = self.forward_mapping[index] as usize;
        ((raw + ALPHABET_LEN - self.position as usize) % ALPHABET_LEN) as u8
    }

    /// Maps a symbol through the wiring in the backward direction
    /// (reflector side toward plugboard side).
    pub fn backward(&self, symbol: u8) -> u8 {
        let index = (self.position as usize + symbol as usize) % ALPHABET_LEN;
        let raw = self.backward_mapping[index] as usize;
        ((raw + ALPHABET_LEN - self.position as usize) % ALPHABET_LEN) as u8
    }

    /// Advances the rotor by one position.
    pub fn rotate(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN as u8;
    }

    /// Sets the rotor to a specific position, reduced mod 26.
    ///
    /// Bypasses the stepping mechanism; used for manual reconfiguration.
    pub fn set_position(&mut self, position: u8) {
        self.position = position % ALPHABET_LEN as u8;
    }

    /// Current rotational offset (0..=25).
    pub fn position(&self) -> u8 {
        self.position
    }

    /// True iff the rotor sits on its notch position.
    pub fn is_at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Rotor display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Notch position.
    pub fn notch(&self) -> u8 {
        self.notch
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} state:\n    wiring: {}\n    notch: {}\n    current position: {}",
            self.name, self.wiring, self.notch, self.position
        )
    }
}
