//! Randomness behind a seam.
//!
//! Card effects never touch a generator directly. They ask a `RandomSource`
//! for a roll, which lets the engine run on a seeded ChaCha stream in play
//! and on a fixed script in tests.
//!
//! A seed fans out into named streams (`for_context`), so the deck shuffle
//! and the damage rolls of one game do not disturb each other.
//!
//! ```
//! use effect_deck::core::{GameRng, RandomSource};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll(3, 9), b.roll(3, 9));
//! ```

use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Source of randomness for card effects.
///
/// Object safe; the engine holds one as `Box<dyn RandomSource>`.
pub trait RandomSource: Send {
    /// Uniform integer in `min..=max`. Returns `min` if `max <= min`.
    fn roll(&mut self, min: u32, max: u32) -> u32;
}

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// A stream derived from this generator's seed and a name.
    ///
    /// Ignores how far this generator has advanced: the same seed and name
    /// always give the same stream.
    #[must_use]
    pub fn for_context(&self, name: &str) -> Self {
        let mut hasher = FxHasher::default();
        (self.seed, name).hash(&mut hasher);
        Self::new(hasher.finish())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.stream);
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        if max <= min {
            return min;
        }
        self.stream.gen_range(min..=max)
    }
}

/// Replays a fixed list of rolls.
///
/// Each value is clamped into the requested range; the list repeats when it
/// runs out. An empty script always rolls the minimum.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: script.into_iter().collect(),
            next: 0,
        }
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self, min: u32, max: u32) -> u32 {
        let Some(&value) = self.script.get(self.next % self.script.len().max(1)) else {
            return min;
        };
        self.next += 1;
        value.clamp(min, max.max(min))
    }
}
