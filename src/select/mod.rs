// file: mod.rs
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

//! The selection module provides a trait that can be implemented
//! to implement new selection algorithms. This module also provides
//! modularity-proportional (roulette-wheel) and tournament selection.
//!
//! Each strategy owns its fitness function and answers the same question:
//! choose `choose_num` parents from a population, with replacement, and
//! report the elite of the generation.

mod roulette;
mod tournament;

use rand::RngCore;
use std::fmt::Debug;

use crate::error::SelectResult;

pub use self::roulette::ModularitySelector;
pub use self::tournament::TournamentSelector;

/// Outcome of a selection call. Chromosomes are borrowed from the population.
#[derive(Debug)]
pub struct SelectionResult<'a, C> {
    /// The first candidate with the highest clamped fitness; `None` only for an
    /// empty population.
    pub elite: Option<&'a C>,
    /// Selected parents, in draw order. Repeats are allowed.
    pub chosen: Vec<&'a C>,
}

impl<'a, C> SelectionResult<'a, C> {
    /// The result for an empty population.
    pub fn empty() -> SelectionResult<'a, C> {
        SelectionResult {
            elite: None,
            chosen: Vec::new(),
        }
    }
}

/// What to do when every candidate has zero clamped fitness.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Return `SelectionError::DegenerateDistribution`.
    Fail,
    /// Draw uniformly over the whole population instead.
    Uniform,
}

impl Default for DegeneratePolicy {
    fn default() -> DegeneratePolicy {
        DegeneratePolicy::Fail
    }
}

/// A `SelectionStrategy` chooses parents for the next generation.
///
/// `G` is the graph the population partitions. It is only borrowed.
pub trait SelectionStrategy<C, G: ?Sized>: Debug {
    /// Choose `choose_num` parents from `population`.
    ///
    /// An empty population yields `SelectionResult::empty()` whatever
    /// `choose_num` is. Otherwise `chosen` has exactly `choose_num` entries.
    /// All randomness comes from `rng`.
    fn choose<'a>(
        &self,
        population: &'a [C],
        graph: &G,
        choose_num: usize,
        rng: &mut dyn RngCore,
    ) -> SelectResult<SelectionResult<'a, C>>;
}
