// file: test.rs
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

// This is a private module containing code used in
// several tests across the library.

use std::collections::HashMap;

use crate::partition::{Chromosome, CommunityPartition, MetricError, ModularityMetric};

/// A chromosome that stores its partition directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Partitioned(pub Vec<Vec<u32>>);

impl Chromosome for Partitioned {
    type Vertex = u32;

    fn to_community_partition(&self) -> CommunityPartition<u32> {
        self.0
            .iter()
            .map(|community| community.iter().cloned().collect())
            .collect()
    }
}

fn canonical(partition: &CommunityPartition<u32>) -> Vec<Vec<u32>> {
    let mut key: Vec<Vec<u32>> = partition
        .iter()
        .map(|community| {
            let mut members: Vec<u32> = community.iter().cloned().collect();
            members.sort();
            members
        })
        .collect();
    key.sort();
    key
}

/// Graph stand-in: the modularity of every known partition, looked up by `TableMetric`.
#[derive(Debug, Default)]
pub struct ScoreTable {
    scores: HashMap<Vec<Vec<u32>>, f64>,
}

impl ScoreTable {
    pub fn insert(&mut self, chromosome: &Partitioned, score: f64) {
        let key = canonical(&chromosome.to_community_partition());
        self.scores.insert(key, score);
    }
}

#[derive(Debug)]
pub struct TableMetric;

impl ModularityMetric<ScoreTable, u32> for TableMetric {
    fn compute(&self, partition: &CommunityPartition<u32>, graph: &ScoreTable) -> Result<f64, MetricError> {
        let key = canonical(partition);
        match graph.scores.get(&key) {
            Some(score) => Ok(*score),
            None => Err(format!("partition {:?} is not in the table", key).into()),
        }
    }
}

/// Builds a population whose i-th chromosome has raw modularity `scores[i]`.
pub fn scored_population(scores: &[f64]) -> (Vec<Partitioned>, ScoreTable) {
    let mut table = ScoreTable::default();
    let population: Vec<Partitioned> = (0..scores.len())
        .map(|i| Partitioned(vec![vec![i as u32]]))
        .collect();
    for (chromosome, score) in population.iter().zip(scores) {
        table.insert(chromosome, *score);
    }
    (population, table)
}

#[derive(Debug)]
pub struct EdgeList {
    pub vertices: u32,
    pub edges: Vec<(u32, u32)>,
}

/// Two triangles `{0, 1, 2}` and `{3, 4, 5}` joined by the edge `(2, 3)`.
pub fn two_triangles() -> EdgeList {
    EdgeList {
        vertices: 6,
        edges: vec![(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5), (2, 3)],
    }
}

/// Newman modularity of an undirected, unweighted graph.
#[derive(Debug)]
pub struct Newman;

impl ModularityMetric<EdgeList, u32> for Newman {
    fn compute(&self, partition: &CommunityPartition<u32>, graph: &EdgeList) -> Result<f64, MetricError> {
        let mut community_of = HashMap::new();
        for (index, community) in partition.iter().enumerate() {
            for vertex in community {
                community_of.insert(*vertex, index);
            }
        }
        if let Some(missing) = (0..graph.vertices).find(|v| !community_of.contains_key(v)) {
            return Err(format!("vertex {} is not covered by the partition", missing).into());
        }

        let m = graph.edges.len() as f64;
        let mut internal = vec![0.0; partition.len()];
        let mut degree = vec![0.0; partition.len()];
        for (a, b) in &graph.edges {
            let (ca, cb) = (community_of[a], community_of[b]);
            degree[ca] += 1.0;
            degree[cb] += 1.0;
            if ca == cb {
                internal[ca] += 1.0;
            }
        }
        Ok(internal
            .iter()
            .zip(&degree)
            .map(|(l, d)| l / m - (d / (2.0 * m)).powi(2))
            .sum())
    }
}

#[test]
fn test_newman_two_triangles() {
    let graph = two_triangles();
    let split = Partitioned(vec![vec![0, 1, 2], vec![3, 4, 5]]);
    let whole = Partitioned(vec![vec![0, 1, 2, 3, 4, 5]]);
    let q_split = Newman.compute(&split.to_community_partition(), &graph).unwrap();
    let q_whole = Newman.compute(&whole.to_community_partition(), &graph).unwrap();
    assert!((q_split - (6.0 / 7.0 - 0.5)).abs() < 1e-12);
    assert!(q_whole.abs() < 1e-12);
}

#[test]
fn test_newman_rejects_uncovered_vertex() {
    let graph = two_triangles();
    let partial = Partitioned(vec![vec![0, 1, 2]]);
    assert!(Newman.compute(&partial.to_community_partition(), &graph).is_err());
}
