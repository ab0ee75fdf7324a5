// file: roulette.rs
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

use rand::{Rng, RngCore};
use std::fmt::Debug;
use tracing::{debug, instrument, warn};

use super::*;
use crate::distribution::CumulativeDistribution;
use crate::error::SelectionError;
use crate::fitness::FitnessEvaluator;
use crate::partition::{Chromosome, ModularityMetric};
use crate::sampler::Sampler;

/// Selects parents with probability proportional to their clamped modularity.
#[derive(Clone, Debug)]
pub struct ModularitySelector<M> {
    evaluator: FitnessEvaluator<M>,
    degenerate_policy: DegeneratePolicy,
}

impl<M> ModularitySelector<M> {
    /// Create and return a modularity selector that scores candidates with `metric`.
    ///
    /// Populations are evaluated sequentially and a zero-mass population is an error.
    pub fn new(metric: M) -> ModularitySelector<M> {
        ModularitySelector {
            evaluator: FitnessEvaluator::new(metric),
            degenerate_policy: DegeneratePolicy::default(),
        }
    }

    /// Set the policy for populations whose clamped fitness is all zero.
    pub fn with_degenerate_policy(mut self, policy: DegeneratePolicy) -> ModularitySelector<M> {
        self.degenerate_policy = policy;
        self
    }

    /// Evaluate fitness on the rayon thread pool.
    pub fn with_parallel_evaluation(mut self, parallel: bool) -> ModularitySelector<M> {
        self.evaluator = self.evaluator.with_parallel(parallel);
        self
    }

    /// The configured degenerate-distribution policy.
    pub fn degenerate_policy(&self) -> DegeneratePolicy {
        self.degenerate_policy
    }
}

impl<C, G, M> SelectionStrategy<C, G> for ModularitySelector<M>
where
    C: Chromosome + Sync,
    G: ?Sized + Sync,
    M: ModularityMetric<G, C::Vertex> + Sync + Debug,
{
    #[instrument(level = "debug", skip_all, fields(population = population.len(), choose_num = choose_num))]
    fn choose<'a>(
        &self,
        population: &'a [C],
        graph: &G,
        choose_num: usize,
        rng: &mut dyn RngCore,
    ) -> SelectResult<SelectionResult<'a, C>> {
        if population.is_empty() {
            return Ok(SelectionResult::empty());
        }

        let fitness = self.evaluator.evaluate_population(population, graph)?;
        let distribution = CumulativeDistribution::build(&fitness);
        let elite = distribution.elite();
        debug!(
            total_mass = distribution.total_mass(),
            elite = ?elite,
            "built fitness distribution"
        );

        let elite = elite.map(|e| &population[e.index]);
        if choose_num == 0 {
            return Ok(SelectionResult {
                elite,
                chosen: Vec::new(),
            });
        }

        let chosen = match Sampler::new(&distribution) {
            Ok(sampler) => (0..choose_num)
                .map(|_| &population[sampler.sample(rng)])
                .collect(),
            Err(SelectionError::DegenerateDistribution { .. })
                if self.degenerate_policy == DegeneratePolicy::Uniform =>
            {
                warn!("all candidates have zero fitness, selecting uniformly");
                (0..choose_num)
                    .map(|_| &population[rng.gen_range(0, population.len())])
                    .collect()
            }
            Err(err) => return Err(err),
        };

        Ok(SelectionResult { elite, chosen })
    }
}
