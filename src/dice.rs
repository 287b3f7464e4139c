use rand::Rng;
use serde::{Deserialize, Serialize};

pub const FACES: u8 = 6;

/// Outcome of rolling two six-sided dice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            first: rng.gen_range(1..=FACES),
            second: rng.gen_range(1..=FACES),
        }
    }

    pub fn sum(self) -> u8 {
        self.first + self.second
    }
}
