//! Graph generators for the MST property suites.
//!
//! Fixtures are built from a seeded `SmallRng` so rstest cases can pin a
//! distribution and seed, while proptest samples both.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{EdgeList, Vertex, Weight};

use super::oracle::BRUTE_FORCE_MAX_EDGES;
use super::types::{MstFixture, WeightDistribution};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 40;

/// Samples a distribution and a seed, then builds the fixture.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Small graphs that the brute-force oracle can enumerate.
pub(super) fn small_graph_strategy() -> impl Strategy<Value = EdgeList> {
    (1_usize..=6).prop_flat_map(|vertex_count| {
        prop::collection::vec(
            (0..vertex_count, 0..vertex_count, -3_i64..6),
            0..=BRUTE_FORCE_MAX_EDGES,
        )
        .prop_map(move |edges| build(vertex_count, &edges))
    })
}

/// Builds a fixture for an explicit distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    let graph = match distribution {
        WeightDistribution::Unique => random_graph(rng, |r| r.gen_range(0..1_000_000)),
        WeightDistribution::ManyIdentical => {
            let pool: Vec<Weight> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(1..=10))
                .collect();
            random_graph(rng, move |r| pool[r.gen_range(0..pool.len())])
        }
        WeightDistribution::Sparse => sparse_graph(rng),
        WeightDistribution::Disconnected => disconnected_graph(rng),
    };
    MstFixture {
        graph,
        distribution,
    }
}

fn build(vertex_count: usize, edges: &[(Vertex, Vertex, Weight)]) -> EdgeList {
    let mut graph = EdgeList::new(vertex_count, edges.len());
    for &(start, end, weight) in edges {
        graph
            .insert_edge(start, end, weight)
            .expect("generated edges stay in range and within capacity");
    }
    graph
}

/// Adds each vertex pair with a sampled probability.
fn random_graph(rng: &mut SmallRng, mut weight: impl FnMut(&mut SmallRng) -> Weight) -> EdgeList {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let probability: f64 = rng.gen_range(0.1..=0.6);
    let mut edges = Vec::new();
    for start in 0..vertex_count {
        for end in (start + 1)..vertex_count {
            if rng.gen_bool(probability) {
                let w = weight(rng);
                edges.push((start, end, w));
            }
        }
    }
    build(vertex_count, &edges)
}

/// A random spanning tree (so the graph is connected) plus extra edges.
fn sparse_graph(rng: &mut SmallRng) -> EdgeList {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<Vertex> = (0..vertex_count).collect();
    for i in (1..order.len()).rev() {
        order.swap(i, rng.gen_range(0..=i));
    }

    let mut edges: Vec<_> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], rng.gen_range(0..100)))
        .collect();
    for _ in 0..rng.gen_range(0..=vertex_count / 2) {
        let start = rng.gen_range(0..vertex_count);
        let end = rng.gen_range(0..vertex_count);
        edges.push((start, end, rng.gen_range(0..100)));
    }
    build(vertex_count, &edges)
}

/// Two to four components with no edges between them.
fn disconnected_graph(rng: &mut SmallRng) -> EdgeList {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=4))
        .map(|_| rng.gen_range(1..=8))
        .collect();
    let vertex_count = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        for start in offset..offset + size {
            for end in (start + 1)..offset + size {
                if rng.gen_bool(0.6) {
                    edges.push((start, end, rng.gen_range(0..20)));
                }
            }
        }
        offset += size;
    }
    build(vertex_count, &edges)
}

impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Disconnected),
        ]
    }
}
