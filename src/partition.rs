// file: partition.rs
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

//! The collaborators the selection strategies rely on.
//!
//! Chromosomes, graphs and the modularity computation live outside this crate.
//! A chromosome only has to expose the partition it encodes, and a metric only
//! has to score such a partition against a borrowed graph.

use std::collections::HashSet;
use std::error::Error;
use std::hash::Hash;

/// One community: a set of vertex identifiers.
pub type Community<V> = HashSet<V>;

/// An ordered sequence of disjoint communities.
///
/// It is expected to cover every vertex of the graph, but nothing here checks that.
pub type CommunityPartition<V> = Vec<Community<V>>;

/// Error raised by a `ModularityMetric`. It is passed through unchanged.
pub type MetricError = Box<dyn Error + Send + Sync + 'static>;

/// A candidate solution that encodes a community partition.
pub trait Chromosome {
    /// Vertex identifier type used by the partition.
    type Vertex: Eq + Hash;

    /// Decode this chromosome into the partition it represents.
    fn to_community_partition(&self) -> CommunityPartition<Self::Vertex>;
}

/// Scores a partition of a graph `G`.
///
/// Implementations must be deterministic and free of side effects. Scores are
/// expected to lie in `[-1, 1]`.
pub trait ModularityMetric<G: ?Sized, V> {
    /// Compute the modularity of `partition` with respect to `graph`.
    fn compute(&self, partition: &CommunityPartition<V>, graph: &G) -> Result<f64, MetricError>;
}
