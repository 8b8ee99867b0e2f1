//! EnigmaMachine: the cipher engine.
//!
//! Owns the rotor pool, the working set of 3 rotors, the reflector, the
//! plugboard, and the stepping mechanism, and drives one symbol at a
//! time through the assembled circuit.
//!
//! ```text
//! +-----------+   +--------+   +--------+   +--------+   +-----------+
//! | reflector |<--| rotor2 |<--| rotor1 |<--| rotor0 |<--| plugboard |
//! +-----------+   +--------+   +--------+   +--------+   +-----------+
//!                   (slow)      (middle)      (fast)
//! ```
//!
//! One instance is single-threaded mutable state: stepping and
//! substitution are not atomic as a pair, so concurrent callers must
//! serialize access to a given machine.

use std::fmt::Write as _;

use log::{debug, trace};

use crate::actuator::ActuatorBar;
use crate::config;
use crate::error::EnigmaError;
use crate::permutation::{index_to_letter, letter_to_index};
use crate::plugboard::Plugboard;
use crate::reflector::{Reflector, ReflectorSpec};
use crate::rotor::{Rotor, RotorSpec};

/// Number of simultaneously engaged rotors.
pub const WORKING_ROTORS: usize = 3;

/// Complete construction-time configuration for an [`EnigmaMachine`].
///
/// Built once and consumed by [`EnigmaMachine::new`]; not part of the
/// machine's run-time state. `Default` yields the stock setup: the
/// built-in 5-rotor pool, the UKW-B reflector, rotors I/II/III at
/// position 0, and the default plugboard connections.
#[derive(Debug, Clone)]
pub struct EnigmaMachineConfig {
    /// Pool of selectable rotors.
    pub rotor_pool: Vec<RotorSpec>,
    /// Reflector definition.
    pub reflector: ReflectorSpec,
    /// Pool indices of the working rotors, fast to slow. Order matters.
    pub working_rotor_indices: [usize; WORKING_ROTORS],
    /// Initial rotor positions, fast to slow.
    pub rotor_init_positions: [u8; WORKING_ROTORS],
    /// Plugboard connection string, e.g. `"AJ KU DO"`.
    pub plugboard_connections: String,
}

impl Default for EnigmaMachineConfig {
    fn default() -> Self {
        EnigmaMachineConfig {
            rotor_pool: config::default_rotor_pool(),
            reflector: config::default_reflector(),
            working_rotor_indices: [0, 1, 2],
            rotor_init_positions: [0, 0, 0],
            plugboard_connections: config::DEFAULT_PLUGBOARD.to_string(),
        }
    }
}

/// One substitution stage of the circuit.
///
/// The circuit is an ordered list of these tags rather than boxed
/// closures; rotor stages carry the working-set slot they read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitStage {
    /// Plugboard pass (applied at both ends of the circuit).
    Plugboard,
    /// Forward pass through the rotor in the given slot.
    RotorForward(usize),
    /// Backward pass through the rotor in the given slot.
    RotorBackward(usize),
    /// Reflection at the far end.
    Reflector,
}

/// Simulated Enigma machine.
pub struct EnigmaMachine {
    pool: Vec<RotorSpec>,
    working_rotors: [Rotor; WORKING_ROTORS],
    reflector: Reflector,
    plugboard: Plugboard,
    circuit: Vec<CircuitStage>,
}

impl EnigmaMachine {
    /// Builds a machine from its configuration.
    ///
    /// Validates everything up front: the rotor selection, every wiring
    /// table, the notch positions, and the plugboard string.
    ///
    /// # Errors
    /// Any validation error from the [`crate::error::EnigmaError`]
    /// configuration family.
    pub fn new(enigma_config: EnigmaMachineConfig) -> Result<Self, EnigmaError> {
        let working_rotors = build_working_set(
            &enigma_config.rotor_pool,
            enigma_config.working_rotor_indices,
            enigma_config.rotor_init_positions,
        )?;
        let reflector = Reflector::new(&enigma_config.reflector)?;
        let plugboard = Plugboard::new(&enigma_config.plugboard_connections)?;

        let mut machine = EnigmaMachine {
            pool: enigma_config.rotor_pool,
            working_rotors,
            reflector,
            plugboard,
            circuit: Vec::new(),
        };
        machine.rebuild_circuit();
        debug!(
            "machine assembled: rotors [{}], reflector {}",
            machine
                .working_rotors
                .iter()
                .map(|r| r.name())
                .collect::<Vec<_>>()
                .join(", "),
            machine.reflector.name()
        );
        Ok(machine)
    }

    /// Builds a machine from the stock configuration.
    pub fn with_default_config() -> Result<Self, EnigmaError> {
        Self::new(EnigmaMachineConfig::default())
    }

    /// Replaces the entire working set with rotors drawn from the pool.
    ///
    /// `indices` are pool positions, fast to slow; `positions` are the
    /// initial offsets (all 0 when `None`). The replacement is
    /// all-or-nothing: on error the previous working set survives.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSelection`] unless the 3 indices are
    /// pairwise distinct and in range.
    pub fn choose_rotors(
        &mut self,
        indices: [usize; WORKING_ROTORS],
        positions: Option<[u8; WORKING_ROTORS]>,
    ) -> Result<(), EnigmaError> {
        let positions = positions.unwrap_or([0; WORKING_ROTORS]);
        self.working_rotors = build_working_set(&self.pool, indices, positions)?;
        self.rebuild_circuit();
        debug!("working set replaced with pool indices {:?}", indices);
        Ok(())
    }

    /// Sets one working rotor's offset directly, reduced mod 26.
    ///
    /// Bypasses the stepping mechanism; wiring and notch are untouched.
    ///
    /// # Errors
    /// [`EnigmaError::InvalidSelection`] for a slot outside 0..=2.
    pub fn set_rotor_position(&mut self, slot: usize, position: u8) -> Result<(), EnigmaError> {
        let rotor = self.working_rotors.get_mut(slot).ok_or_else(|| {
            EnigmaError::InvalidSelection(format!("no working rotor slot {}", slot))
        })?;
        rotor.set_position(position);
        Ok(())
    }

    /// Replaces the plugboard connections.
    ///
    /// Delegates to [`Plugboard::set_connections`]; on error the
    /// previous connections stay in effect.
    pub fn set_plugboard(&mut self, connections: &str) -> Result<(), EnigmaError> {
        self.plugboard.set_connections(connections)?;
        self.rebuild_circuit();
        Ok(())
    }

    /// Encrypts or decrypts a message, one symbol at a time.
    ///
    /// For each letter the stepping mechanism advances first, then the
    /// symbol runs the full circuit. Lowercase input is normalized to
    /// uppercase; non-letter characters pass through unchanged without
    /// advancing the rotors.
    ///
    /// The transformation is self-inverse only when the rotor positions
    /// match the positions at the start of the original encryption run,
    /// so decrypt with a freshly built machine (or reset the positions).
    pub fn encrypt_decrypt(&mut self, message: &str) -> String {
        let mut output = String::with_capacity(message.len());
        for letter in message.chars() {
            match letter_to_index(letter) {
                Some(symbol) => {
                    ActuatorBar::push_rotors(&mut self.working_rotors);
                    let mut current = symbol;
                    for stage in &self.circuit {
                        current = self.apply_stage(*stage, current);
                    }
                    let out = index_to_letter(current);
                    trace!("{} -> {}", letter.to_ascii_uppercase(), out);
                    output.push(out);
                }
                None => output.push(letter),
            }
        }
        output
    }

    /// Applies one circuit stage to a symbol.
    fn apply_stage(&self, stage: CircuitStage, symbol: u8) -> u8 {
        match stage {
            CircuitStage::Plugboard => self.plugboard.pass_through(symbol),
            CircuitStage::RotorForward(slot) => self.working_rotors[slot].forward(symbol),
            CircuitStage::RotorBackward(slot) => self.working_rotors[slot].backward(symbol),
            CircuitStage::Reflector => self.reflector.reflect(symbol),
        }
    }

    /// Rebuilds the stage list after any component change.
    fn rebuild_circuit(&mut self) {
        self.circuit.clear();
        self.circuit.push(CircuitStage::Plugboard);
        for slot in 0..WORKING_ROTORS {
            self.circuit.push(CircuitStage::RotorForward(slot));
        }
        self.circuit.push(CircuitStage::Reflector);
        for slot in (0..WORKING_ROTORS).rev() {
            self.circuit.push(CircuitStage::RotorBackward(slot));
        }
        self.circuit.push(CircuitStage::Plugboard);
    }

    /// Current working rotor positions, fast to slow.
    pub fn rotor_positions(&self) -> [u8; WORKING_ROTORS] {
        [
            self.working_rotors[0].position(),
            self.working_rotors[1].position(),
            self.working_rotors[2].position(),
        ]
    }

    /// Read-only view of the working set, fast to slow.
    pub fn working_rotors(&self) -> &[Rotor; WORKING_ROTORS] {
        &self.working_rotors
    }

    /// Read-only view of the rotor pool.
    pub fn rotor_pool(&self) -> &[RotorSpec] {
        &self.pool
    }

    /// Human-readable state of each working rotor.
    pub fn working_rotors_info(&self) -> String {
        self.working_rotors
            .iter()
            .map(|rotor| rotor.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Human-readable reflector summary.
    pub fn reflector_info(&self) -> String {
        self.reflector.to_string()
    }

    /// Human-readable plugboard summary.
    pub fn plugboard_info(&self) -> String {
        self.plugboard.to_string()
    }

    /// Combined configuration report: rotors, reflector, plugboard.
    pub fn machine_info(&self) -> String {
        let mut info = String::new();
        let _ = writeln!(info, "Enigma Machine Configuration:");
        let _ = writeln!(info);
        let _ = writeln!(info, "{}", self.working_rotors_info());
        let _ = writeln!(info);
        let _ = writeln!(info, "{}", self.reflector_info());
        let _ = writeln!(info);
        let _ = writeln!(info, "{}", self.plugboard_info());
        info
    }
}

/// Validates a rotor selection and instantiates the working set.
///
/// Shared by construction and [`EnigmaMachine::choose_rotors`]. Builds
/// all three rotors before anything is committed.
fn build_working_set(
    pool: &[RotorSpec],
    indices: [usize; WORKING_ROTORS],
    positions: [u8; WORKING_ROTORS],
) -> Result<[Rotor; WORKING_ROTORS], EnigmaError> {
    for (slot, &index) in indices.iter().enumerate() {
        if index >= pool.len() {
            return Err(EnigmaError::InvalidSelection(format!(
                "pool index {} out of range for a pool of {}",
                index,
                pool.len()
            )));
        }
        if indices[..slot].contains(&index) {
            return Err(EnigmaError::InvalidSelection(format!(
                "pool index {} selected more than once",
                index
            )));
        }
    }
    Ok([
        Rotor::new(&pool[indices[0]], positions[0])?,
        Rotor::new(&pool[indices[1]], positions[1])?,
        Rotor::new(&pool[indices[2]], positions[2])?,
    ])
}
