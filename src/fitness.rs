// file: fitness.rs
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

//! Turns chromosomes into clamped modularity scores.

use rayon::prelude::*;
use tracing::warn;

use crate::error::{SelectResult, SelectionError};
use crate::partition::{Chromosome, ModularityMetric};

/// Clamp a raw modularity value to `[0, +inf)`.
///
/// Negative values (and `-0.0`) become `0.0`. NaN and infinities are rejected.
pub fn clamp_fitness(raw: f64) -> SelectResult<f64> {
    if !raw.is_finite() {
        Err(SelectionError::NonFiniteFitness(raw))
    } else if raw <= 0.0 {
        Ok(0.0)
    } else {
        Ok(raw)
    }
}

/// Scores chromosomes with a modularity metric.
#[derive(Clone, Debug)]
pub struct FitnessEvaluator<M> {
    metric: M,
    parallel: bool,
}

impl<M> FitnessEvaluator<M> {
    /// Create a sequential evaluator around `metric`.
    pub fn new(metric: M) -> FitnessEvaluator<M> {
        FitnessEvaluator {
            metric,
            parallel: false,
        }
    }

    /// Evaluate populations on the rayon thread pool when `parallel` is set.
    ///
    /// Every candidate is scored before errors are inspected, so the error
    /// returned is always that of the first failing candidate.
    pub fn with_parallel(mut self, parallel: bool) -> FitnessEvaluator<M> {
        self.parallel = parallel;
        self
    }

    /// The wrapped metric.
    pub fn metric(&self) -> &M {
        &self.metric
    }

    /// Whether populations are evaluated in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Clamped fitness of a single chromosome.
    ///
    /// Metric failures are returned as `SelectionError::Metric` without interpretation.
    pub fn evaluate<C, G>(&self, chromosome: &C, graph: &G) -> SelectResult<f64>
    where
        C: Chromosome,
        G: ?Sized,
        M: ModularityMetric<G, C::Vertex>,
    {
        let partition = chromosome.to_community_partition();
        let raw = self
            .metric
            .compute(&partition, graph)
            .map_err(SelectionError::Metric)?;
        clamp_fitness(raw)
    }

    /// Clamped fitness of every chromosome, in population order.
    pub fn evaluate_population<C, G>(&self, population: &[C], graph: &G) -> SelectResult<Vec<f64>>
    where
        C: Chromosome + Sync,
        G: ?Sized + Sync,
        M: ModularityMetric<G, C::Vertex> + Sync,
    {
        let score = |(index, chromosome): (usize, &C)| {
            self.evaluate(chromosome, graph).map_err(|err| {
                warn!(index, error = %err, "fitness evaluation failed");
                err
            })
        };
        if self.parallel {
            // lowest failing index wins
            let scores: Vec<SelectResult<f64>> = population.par_iter().enumerate().map(score).collect();
            scores.into_iter().collect()
        } else {
            population.iter().enumerate().map(score).collect()
        }
    }
}
