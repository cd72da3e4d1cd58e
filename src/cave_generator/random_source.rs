use rand::rngs::{StdRng, ThreadRng};
use rand::Rng;

/// Source of the noise used to seed a grid.
///
/// Every call yields an integer uniformly distributed in `0..100`. Implemented for the `rand`
/// generators the crate uses; [`ScriptedSource`] replays fixed values instead.
pub trait RandomSource {
    fn next_percent(&mut self) -> u32;
}

impl RandomSource for StdRng {
    fn next_percent(&mut self) -> u32 {
        self.gen_range(0..100)
    }
}

impl RandomSource for ThreadRng {
    fn next_percent(&mut self) -> u32 {
        self.gen_range(0..100)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_percent(&mut self) -> u32 {
        (**self).next_percent()
    }
}

/// Replays a fixed list of draws, starting over once it runs out.
///
/// Values are reduced modulo 100 so they stay in range; an empty script always yields `0`.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<u32>,
    next: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, next: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn next_percent(&mut self) -> u32 {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.next % self.values.len()] % 100
        };
        self.next += 1;
        value
    }
}
