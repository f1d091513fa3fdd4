//! Random source seam for question generation.
//!
//! The quiz engine draws every random choice through [`RandomSource`], so a
//! host can plug in real entropy while tests replay a fixed script.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer draws in `0..bound`.
pub trait RandomSource {
    /// Draw a value uniformly from `0..bound`. `bound` is never zero.
    fn below(&mut self, bound: u32) -> u32;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn below(&mut self, bound: u32) -> u32 {
        (**self).below(bound)
    }
}

/// [`RandomSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// A reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, bound: u32) -> u32 {
        self.rng.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of draws, for tests that assert exact rounds.
///
/// Each scripted value is reduced modulo the requested bound. When the script
/// runs out the source keeps returning its last value (or zero if empty).
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<u32>,
    last: u32,
    draws: usize,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = u32>>(values: I) -> Self {
        Self {
            script: values.into_iter().collect(),
            last: 0,
            draws: 0,
        }
    }

    /// Number of draws made so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: u32) -> u32 {
        self.draws += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last % bound
    }
}
