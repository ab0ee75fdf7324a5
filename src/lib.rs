// file: lib.rs
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

//! Parent selection for genetic algorithms that search for graph community
//! partitions.
//!
//! Every candidate is scored by the modularity of the partition it encodes.
//! Negative modularity is clamped to zero, the scores are turned into a
//! cumulative distribution, and parents are drawn from it with replacement
//! (roulette-wheel selection). The best candidate of the generation is
//! reported alongside the drawn parents.
//!
//! Chromosome encoding, graph storage and the modularity computation itself
//! are supplied by the caller through the [`Chromosome`](partition::Chromosome)
//! and [`ModularityMetric`](partition::ModularityMetric) traits.
//!
//! ```
//! use std::collections::HashSet;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use modsel::partition::{Chromosome, CommunityPartition, MetricError, ModularityMetric};
//! use modsel::select::{ModularitySelector, SelectionStrategy};
//!
//! struct Split(Vec<Vec<u32>>);
//!
//! impl Chromosome for Split {
//!     type Vertex = u32;
//!
//!     fn to_community_partition(&self) -> CommunityPartition<u32> {
//!         self.0.iter().map(|c| c.iter().cloned().collect::<HashSet<_>>()).collect()
//!     }
//! }
//!
//! /// Rewards partitions with fewer communities.
//! #[derive(Debug)]
//! struct FewerIsBetter;
//!
//! impl ModularityMetric<(), u32> for FewerIsBetter {
//!     fn compute(&self, partition: &CommunityPartition<u32>, _: &()) -> Result<f64, MetricError> {
//!         Ok(1.0 / partition.len() as f64)
//!     }
//! }
//!
//! let population = vec![
//!     Split(vec![vec![0], vec![1], vec![2]]),
//!     Split(vec![vec![0, 1, 2]]),
//! ];
//! let selector = ModularitySelector::new(FewerIsBetter);
//! let mut rng = StdRng::seed_from_u64(7);
//! let result = selector.choose(&population, &(), 4, &mut rng).unwrap();
//!
//! assert_eq!(result.chosen.len(), 4);
//! assert!(std::ptr::eq(result.elite.unwrap(), &population[1]));
//! ```

pub mod distribution;
pub mod error;
pub mod fitness;
pub mod partition;
pub mod sampler;
pub mod select;

#[cfg(test)]
mod test;

pub use crate::error::{SelectResult, SelectionError};
