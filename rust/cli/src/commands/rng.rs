//! Die sample command.
//!
//! Prints a run of faces from the seeded die used by `play`, which helps to
//! check that a seed reproduces the same throws.

use crate::error::CliError;
use dicematch_engine::dice::{DiceSource, Die};
use std::io::Write;

/// Handle the rng command: print `count` die faces for `seed` (random when
/// omitted).
pub fn handle_rng_command(
    seed: Option<u64>,
    count: usize,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut die = Die::new_with_seed(s);
    let faces: Vec<u8> = (0..count).map(|_| die.roll()).collect();
    writeln!(out, "Die sample (seed={}): {:?}", s, faces)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_command_with_explicit_seed() {
        let mut out = Vec::new();
        assert!(handle_rng_command(Some(12345), 5, &mut out).is_ok());
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Die sample"));
        assert!(output.contains("seed=12345"));
    }

    #[test]
    fn test_rng_command_produces_deterministic_output() {
        let mut out1 = Vec::new();
        let _ = handle_rng_command(Some(42), 10, &mut out1);
        let mut out2 = Vec::new();
        let _ = handle_rng_command(Some(42), 10, &mut out2);
        assert_eq!(out1, out2, "Same seed should produce same output");
    }

    #[test]
    fn test_rng_command_outputs_requested_count() {
        let mut out = Vec::new();
        let _ = handle_rng_command(Some(1), 4, &mut out);
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches(',').count(), 3);
    }
}
