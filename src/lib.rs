//! Electromechanical rotor cipher engine (Enigma machine simulation).
//!
//! Simulates the classic rotor cipher: a plugboard, three rotating
//! rotors drawn from a pool of five, and a fixed reflector, composed
//! into a reciprocal polyalphabetic substitution over A-Z. The stepping
//! mechanism reproduces the historical double-step anomaly.
//!
//! # Architecture
//!
//! ```text
//! Rotor       (rotating substitution — wiring permutation + offset + notch)
//!     x3 in the working set, stepped by the ActuatorBar
//! Reflector   (fixed involutive substitution, no rotation)
//! Plugboard   (user-configurable involution, up to 10 letter pairs)
//! EnigmaMachine (orchestrator — assembles the circuit and drives one
//!                symbol at a time through it, stepping first)
//! ```
//!
//! Per keystroke the signal path is: plugboard, rotors fast-to-slow
//! forward, reflector, rotors slow-to-fast backward, plugboard.
//!
//! # Examples
//!
//! Encrypt and decrypt with identically configured machines:
//!
//! ```
//! use rotorcrypt::{EnigmaMachine, EnigmaMachineConfig};
//!
//! let mut encoder = EnigmaMachine::new(EnigmaMachineConfig::default()).unwrap();
//! let ciphertext = encoder.encrypt_decrypt("HELLO");
//! assert_ne!(ciphertext, "HELLO");
//!
//! let mut decoder = EnigmaMachine::new(EnigmaMachineConfig::default()).unwrap();
//! assert_eq!(decoder.encrypt_decrypt(&ciphertext), "HELLO");
//! ```
//!
//! Reconfigure the working set and plugboard:
//!
//! ```
//! use rotorcrypt::EnigmaMachine;
//!
//! let mut machine = EnigmaMachine::with_default_config().unwrap();
//! machine.choose_rotors([3, 4, 1], Some([23, 1, 15])).unwrap();
//! machine.set_plugboard("AB CD EF").unwrap();
//! assert_eq!(machine.working_rotors()[0].name(), "Rotor IV");
//! ```
//!
//! A machine instance is deliberately mutable single-threaded state:
//! stepping and substitution are not atomic as a pair, so callers in a
//! concurrent context must serialize access per instance.

#![deny(clippy::all)]

pub mod actuator;
pub mod config;
pub mod error;
pub mod machine;
pub mod permutation;
pub mod plugboard;
pub mod reflector;
pub mod rotor;

pub use error::EnigmaError;
pub use machine::{CircuitStage, EnigmaMachine, EnigmaMachineConfig};
pub use plugboard::Plugboard;
pub use reflector::{Reflector, ReflectorSpec};
pub use rotor::{Rotor, RotorSpec};
