use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Number of faces on a standard die.
pub const DIE_FACES: u8 = 6;

/// Source of die faces in `1..=6`.
///
/// Every roll in the engine goes through this trait so that matches can be
/// driven by a seeded RNG in play and by a fixed script in tests.
pub trait DiceSource {
    fn roll(&mut self) -> u8;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// A fair six-sided die backed by ChaCha20.
#[derive(Debug, Clone)]
pub struct Die {
    rng: ChaCha20Rng,
}

impl Die {
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Continue an existing stream, e.g. one already used to shuffle seats.
    pub fn from_rng(rng: ChaCha20Rng) -> Self {
        Self { rng }
    }
}

impl DiceSource for Die {
    fn roll(&mut self) -> u8 {
        self.rng.random_range(1..=DIE_FACES)
    }
}

/// Replays a fixed sequence of faces, in order. Test builds only: `new`
/// panics on a face outside `1..=6` and `roll` panics once the script is
/// exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct ScriptedDice {
    faces: Vec<u8>,
    position: usize,
}

#[cfg(test)]
impl ScriptedDice {
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(
            faces.iter().all(|f| (1..=DIE_FACES).contains(f)),
            "scripted faces must be in 1..=6: {:?}",
            faces
        );
        Self { faces, position: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.faces.len().saturating_sub(self.position)
    }
}

#[cfg(test)]
impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = *self
            .faces
            .get(self.position)
            .unwrap_or_else(|| panic!("scripted dice exhausted after {} rolls", self.position));
        self.position += 1;
        face
    }
}
