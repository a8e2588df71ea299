// lib/src/restock.rs

//! Sources for the amount added to each medication by `restock_all`.

use std::ops::RangeInclusive;

#[cfg(test)]
use mockall::automock;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg_attr(test, automock)]
pub trait RestockSource {
    /// Draws an amount uniformly from `range`.
    fn next_amount(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Draws from the thread-local generator. Not reproducible.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RestockSource for ThreadRngSource {
    fn next_amount(&mut self, range: RangeInclusive<u32>) -> u32 {
        rand::thread_rng().gen_range(range)
    }
}

/// Reproducible source for a given seed.
#[derive(Debug)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        SeededSource {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RestockSource for SeededSource {
    fn next_amount(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.rng.gen_range(range)
    }
}
