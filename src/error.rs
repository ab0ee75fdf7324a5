// file: error.rs
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

//! Error types returned by the selection strategies.

use crate::partition::MetricError;
use thiserror::Error;

/// Reasons a selection call can fail.
///
/// Every variant is a hard stop for the generation: no partial selection is
/// returned alongside an error.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// A strategy parameter was out of range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// All candidates have zero clamped fitness, so proportional sampling is
    /// undefined.
    #[error("Degenerate distribution: total fitness of {population} candidates is zero")]
    DegenerateDistribution {
        /// Number of candidates in the population.
        population: usize,
    },

    /// The metric returned NaN or an infinite value.
    #[error("Non-finite fitness: {0}")]
    NonFiniteFitness(f64),

    /// The modularity metric failed. The metric's own error is kept as the source.
    #[error("Modularity metric failed: {0}")]
    Metric(#[source] MetricError),
}

/// Result type alias for selection operations.
pub type SelectResult<T> = Result<T, SelectionError>;
