// file: tournament.rs
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

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use std::fmt::Debug;
use tracing::{debug, instrument};

use super::*;
use crate::distribution::CumulativeDistribution;
use crate::error::SelectionError;
use crate::fitness::FitnessEvaluator;
use crate::partition::{Chromosome, ModularityMetric};

/// Runs several tournaments, and selects the best performing chromosome from each tournament.
///
/// Fitness is the same clamped modularity used by `ModularitySelector`, but
/// only its ordering matters, so a population with zero total fitness can
/// still be selected from.
#[derive(Clone, Debug)]
pub struct TournamentSelector<M> {
    evaluator: FitnessEvaluator<M>,
    participants: usize,
}

impl<M> TournamentSelector<M> {
    /// Create and return a tournament selector.
    ///
    /// Such a selector runs one tournament per parent, each with `participants`
    /// participants drawn with replacement. The fittest participant wins.
    ///
    /// * `participants`: must be larger than zero.
    pub fn new_checked(metric: M, participants: usize) -> SelectResult<TournamentSelector<M>> {
        if participants == 0 {
            return Err(SelectionError::InvalidInput(String::from(
                "participants must be larger than zero",
            )));
        }
        Ok(TournamentSelector {
            evaluator: FitnessEvaluator::new(metric),
            participants,
        })
    }

    /// Evaluate fitness on the rayon thread pool.
    pub fn with_parallel_evaluation(mut self, parallel: bool) -> TournamentSelector<M> {
        self.evaluator = self.evaluator.with_parallel(parallel);
        self
    }

    /// Number of participants per tournament.
    pub fn participants(&self) -> usize {
        self.participants
    }

    /// Index of the winner of one tournament. Ties go to the earliest draw.
    fn tournament<R: Rng + ?Sized>(&self, fitness: &[f64], rng: &mut R) -> usize {
        let mut winner = rng.gen_range(0, fitness.len());
        for _ in 1..self.participants {
            let challenger = rng.gen_range(0, fitness.len());
            if fitness[challenger] > fitness[winner] {
                winner = challenger;
            }
        }
        winner
    }
}

impl<C, G, M> SelectionStrategy<C, G> for TournamentSelector<M>
where
    C: Chromosome + Sync,
    G: ?Sized + Sync,
    M: ModularityMetric<G, C::Vertex> + Sync + Debug,
{
    #[instrument(level = "debug", skip_all, fields(population = population.len(), choose_num = choose_num, participants = self.participants))]
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
        let elite = CumulativeDistribution::build(&fitness).elite();
        debug!(elite = ?elite, "evaluated population");

        // One local generator per tournament keeps the caller's stream the only source of randomness.
        let seeds: Vec<u64> = (0..choose_num).map(|_| rng.gen()).collect();
        let winners: Vec<usize> = seeds
            .into_par_iter()
            .map(|seed| {
                let mut local = StdRng::seed_from_u64(seed);
                self.tournament(&fitness, &mut local)
            })
            .collect();

        Ok(SelectionResult {
            elite: elite.map(|e| &population[e.index]),
            chosen: winners.into_iter().map(|i| &population[i]).collect(),
        })
    }
}
