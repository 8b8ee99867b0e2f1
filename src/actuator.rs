//! Actuator bar: the rotor stepping mechanism.
//!
//! Advances the three working rotors once per keystroke, before the
//! symbol enters the circuit. The rules run against positions as they
//! stand at the start of the step:
//!
//! 1. middle at its notch: middle and slow both rotate,
//! 2. otherwise, fast at its notch: middle rotates,
//! 3. fast always rotates.
//!
//! Rule 1 reproduces the historical double-step anomaly: a middle rotor
//! sitting on its notch advances on this keystroke (carrying the slow
//! rotor with it) having already advanced on the previous one via rule 2.
//! Dropping rule 1 does not emulate the original device.

use crate::rotor::Rotor;

/// Pushes rotor positions by one keystroke.
///
/// Works over the working set in electrical order: index 0 is the fast
/// rotor next to the plugboard, index 2 the slow rotor next to the
/// reflector.
pub struct ActuatorBar;

impl ActuatorBar {
    /// Advances the working set by one step.
    pub fn push_rotors(rotors: &mut [Rotor; 3]) {
        let middle_at_notch = rotors[1].is_at_notch();
        let fast_at_notch = rotors[0].is_at_notch();

        if middle_at_notch {
            rotors[1].rotate();
            rotors[2].rotate();
        } else if fast_at_notch {
            rotors[1].rotate();
        }
        rotors[0].rotate();
    }
}
