// file: sampler.rs
//
// Copyright 2026 The Modsel Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Maps uniform draws to population indices.

use rand::Rng;

use crate::distribution::CumulativeDistribution;
use crate::error::{SelectResult, SelectionError};

/// Draws indices with probability proportional to fitness.
#[derive(Clone, Copy, Debug)]
pub struct Sampler<'a> {
    cumulative: &'a [f64],
    total_mass: f64,
}

impl<'a> Sampler<'a> {
    /// Create a sampler over `distribution`.
    ///
    /// Fails with `DegenerateDistribution` when the total mass is not positive,
    /// since there is no range to draw from, and with `NonFiniteFitness` when
    /// the running sum overflowed.
    pub fn new(distribution: &'a CumulativeDistribution) -> SelectResult<Sampler<'a>> {
        let total_mass = distribution.total_mass();
        if !total_mass.is_finite() {
            return Err(SelectionError::NonFiniteFitness(total_mass));
        }
        if distribution.is_degenerate() {
            return Err(SelectionError::DegenerateDistribution {
                population: distribution.len(),
            });
        }
        Ok(Sampler {
            cumulative: distribution.cumulative(),
            total_mass,
        })
    }

    /// Total fitness mass; draws fall in `[0, total_mass)`.
    pub fn total_mass(&self) -> f64 {
        self.total_mass
    }

    /// Draw one index.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        let x = rng.gen_range(0.0, self.total_mass);
        self.locate(x)
    }

    /// The first index whose running sum is strictly greater than `x`.
    ///
    /// Falls back to the last index when no entry exceeds `x`, which only
    /// happens through rounding at the upper bound.
    pub fn locate(&self, x: f64) -> usize {
        let index = self.cumulative.partition_point(|&acc| acc <= x);
        index.min(self.cumulative.len() - 1)
    }
}
