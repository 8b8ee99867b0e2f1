//! Configuration loading, saving, and defaults.
//!
//! Rotor and reflector definitions persist as JSON records keyed by
//! component kind: `{"rotors": [...]}` for a pool file and
//! `{"reflectors": {...}}` for a reflector file. Loading validates
//! every record (wiring permutation, notch range) before returning it,
//! so a malformed file never reaches a machine.
//!
//! The built-in defaults are the historical Enigma I rotors I-V with
//! their notch letters (Q, E, V, J, Z) and the UKW-B reflector.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::EnigmaError;
use crate::reflector::{Reflector, ReflectorSpec};
use crate::rotor::{Rotor, RotorSpec};

/// Default plugboard connection string.
pub const DEFAULT_PLUGBOARD: &str = "AJ KU DO WE FC NB QZ GM XV RT";

/// Historical rotor definitions: (name, wiring, notch letter).
const DEFAULT_ROTORS: [(&str, &str, u8); 5] = [
    ("Rotor I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", b'Q' - b'A'),
    ("Rotor II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", b'E' - b'A'),
    ("Rotor III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", b'V' - b'A'),
    ("Rotor IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", b'J' - b'A'),
    ("Rotor V", "VZBRGITYUPSDNHLXAWMJQOFECK", b'Z' - b'A'),
];

/// Historical UKW-B reflector wiring.
const DEFAULT_REFLECTOR_WIRING: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// The built-in 5-rotor pool.
pub fn default_rotor_pool() -> Vec<RotorSpec> {
    DEFAULT_ROTORS
        .iter()
        .map(|&(name, wiring, notch)| RotorSpec {
            name: name.to_string(),
            wiring: wiring.to_string(),
            notch,
        })
        .collect()
}

/// The built-in UKW-B reflector.
pub fn default_reflector() -> ReflectorSpec {
    ReflectorSpec {
        wiring: DEFAULT_REFLECTOR_WIRING.to_string(),
        name: "Reflector".to_string(),
    }
}

/// On-disk shape of a rotor pool file.
#[derive(Serialize, Deserialize)]
struct RotorPoolFile {
    rotors: Vec<RotorSpec>,
}

/// On-disk shape of a reflector file.
#[derive(Serialize, Deserialize)]
struct ReflectorFile {
    reflectors: ReflectorSpec,
}

/// Loads and validates a rotor pool from a JSON file.
///
/// # Errors
/// I/O and JSON errors from reading the file, plus the validation
/// errors of [`Rotor::new`] for any malformed record.
pub fn load_rotor_pool<P: AsRef<Path>>(path: P) -> Result<Vec<RotorSpec>, EnigmaError> {
    let file = File::open(path.as_ref())?;
    let pool_file: RotorPoolFile = serde_json::from_reader(BufReader::new(file))?;
    for spec in &pool_file.rotors {
        Rotor::new(spec, 0)?;
    }
    debug!(
        "loaded {} rotor specs from {}",
        pool_file.rotors.len(),
        path.as_ref().display()
    );
    Ok(pool_file.rotors)
}

/// Saves a rotor pool to a JSON file.
pub fn save_rotor_pool<P: AsRef<Path>>(path: P, rotors: &[RotorSpec]) -> Result<(), EnigmaError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(
        file,
        &RotorPoolFile {
            rotors: rotors.to_vec(),
        },
    )?;
    Ok(())
}

/// Loads and validates a reflector from a JSON file.
///
/// Validation only checks the permutation property, matching
/// [`Reflector::new`]; involutivity is a generation-time guarantee.
pub fn load_reflector<P: AsRef<Path>>(path: P) -> Result<ReflectorSpec, EnigmaError> {
    let file = File::open(path.as_ref())?;
    let reflector_file: ReflectorFile = serde_json::from_reader(BufReader::new(file))?;
    Reflector::new(&reflector_file.reflectors)?;
    debug!("loaded reflector from {}", path.as_ref().display());
    Ok(reflector_file.reflectors)
}

/// Saves a reflector to a JSON file.
pub fn save_reflector<P: AsRef<Path>>(path: P, reflector: &ReflectorSpec) -> Result<(), EnigmaError> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(
        file,
        &ReflectorFile {
            reflectors: reflector.clone(),
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_pool_is_valid() {
        let pool = default_rotor_pool();
        assert_eq!(pool.len(), 5);
        for spec in &pool {
            Rotor::new(spec, 0).unwrap();
        }
        assert_eq!(pool[0].name, "Rotor I");
        assert_eq!(pool[0].notch, 16); // Q
        assert_eq!(pool[4].notch, 25); // Z
    }

    #[test]
    fn test_default_reflector_is_involution() {
        let spec = default_reflector();
        let reflector = Reflector::new(&spec).unwrap();
        for symbol in 0..26u8 {
            assert_eq!(reflector.reflect(reflector.reflect(symbol)), symbol);
            assert_ne!(reflector.reflect(symbol), symbol);
        }
    }

    #[test]
    fn test_rotor_pool_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotors.json");

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let pool: Vec<RotorSpec> = ["I", "II", "III"]
            .iter()
            .map(|n| RotorSpec::generate(&format!("Rotor {}", n), &mut rng))
            .collect();

        save_rotor_pool(&path, &pool).unwrap();
        let loaded = load_rotor_pool(&path).unwrap();
        assert_eq!(loaded, pool);
    }

    #[test]
    fn test_reflector_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reflector.json");

        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let spec = ReflectorSpec::generate(&mut rng);

        save_reflector(&path, &spec).unwrap();
        let loaded = load_reflector(&path).unwrap();
        assert_eq!(loaded, spec);
    }

    #[test]
    fn test_load_rejects_malformed_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotors.json");
        std::fs::write(
            &path,
            r#"{"rotors": [{"name": "Broken", "wiring": "ABC", "notch": 0}]}"#,
        )
        .unwrap();
        assert!(matches!(
            load_rotor_pool(&path),
            Err(EnigmaError::InvalidPermutation(_))
        ));
    }

    #[test]
    fn test_load_rejects_out_of_range_notch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotors.json");
        let spec = RotorSpec {
            name: "Rotor I".to_string(),
            wiring: "EKMFLGDQVZNTOWYHXUSPAIBRCJ".to_string(),
            notch: 26,
        };
        save_rotor_pool(&path, &[spec]).unwrap();
        assert!(matches!(
            load_rotor_pool(&path),
            Err(EnigmaError::InvalidNotch(26))
        ));
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotors.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(load_rotor_pool(&path), Err(EnigmaError::Json(_))));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            load_rotor_pool("/nonexistent/rotors.json"),
            Err(EnigmaError::Io(_))
        ));
    }
}
