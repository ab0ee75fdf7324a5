// file: distribution.rs
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

//! Cumulative fitness distribution and elite tracking.

/// The best candidate of a population.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Elite {
    /// Position of the candidate in the population.
    pub index: usize,
    /// Its clamped fitness.
    pub fitness: f64,
}

/// Running sums over a sequence of clamped fitness values.
///
/// The sequence has the same length as the population and never decreases,
/// so its last entry is the total fitness mass.
#[derive(Clone, Debug, PartialEq)]
pub struct CumulativeDistribution {
    cumulative: Vec<f64>,
    elite: Option<Elite>,
}

impl CumulativeDistribution {
    /// Build the distribution and find the elite in one ordered pass.
    ///
    /// `fitness` must be clamped (finite and non-negative). The elite is the
    /// first index holding the maximum value.
    pub fn build(fitness: &[f64]) -> CumulativeDistribution {
        let mut cumulative = Vec::with_capacity(fitness.len());
        let mut elite: Option<Elite> = None;
        let mut best = -1.0;
        let mut acc = 0.0;
        for (index, &value) in fitness.iter().enumerate() {
            // strict: ties keep the earlier index
            if value > best {
                best = value;
                elite = Some(Elite { index, fitness: value });
            }
            acc += value;
            cumulative.push(acc);
        }
        CumulativeDistribution { cumulative, elite }
    }

    /// The running sums.
    pub fn cumulative(&self) -> &[f64] {
        &self.cumulative
    }

    /// Sum of all fitness values; `0.0` for an empty population.
    pub fn total_mass(&self) -> f64 {
        self.cumulative.last().cloned().unwrap_or(0.0)
    }

    /// The best candidate, absent only for an empty population.
    pub fn elite(&self) -> Option<Elite> {
        self.elite
    }

    /// Number of candidates covered.
    pub fn len(&self) -> usize {
        self.cumulative.len()
    }

    /// True when built from an empty population.
    pub fn is_empty(&self) -> bool {
        self.cumulative.is_empty()
    }

    /// True when there is no positive mass to sample from.
    pub fn is_degenerate(&self) -> bool {
        !(self.total_mass() > 0.0)
    }
}
