//! Shared fixtures for the engine integration tests.

use dicematch_engine::dice::DiceSource;

/// Replays a fixed list of faces and panics once it runs out, so a test
/// that rolls more than it scripted fails loudly.
#[derive(Debug)]
pub struct ScriptedDice {
    faces: std::vec::IntoIter<u8>,
    rolled: usize,
}

impl ScriptedDice {
    pub fn new(faces: Vec<u8>) -> Self {
        assert!(
            faces.iter().all(|f| (1..=6).contains(f)),
            "scripted faces must be in 1..=6: {:?}",
            faces
        );
        Self {
            faces: faces.into_iter(),
            rolled: 0,
        }
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        let face = self
            .faces
            .next()
            .unwrap_or_else(|| panic!("scripted dice exhausted after {} rolls", self.rolled));
        self.rolled += 1;
        face
    }
}
