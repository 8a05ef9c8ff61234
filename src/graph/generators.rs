use crate::graph::{ArcType, Graph, MutableGraph, Network};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::ops::RangeInclusive;

/// Number of distinct arc types handed out by the generators
pub const GENERATED_ARC_TYPES: ArcType = 4;

/// Generates a random directed network with `n` vertices (ids `0..n`) and up
/// to `m` arcs, without self-loops or parallel arcs.
///
/// The same seed always yields the same network.
pub fn generate_random_network(
    n: usize,
    m: usize,
    weights: RangeInclusive<i64>,
    seed: u64,
) -> Network<i64> {
    let mut network = Network::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        // Ids are fresh, insertion cannot collide
        let _ = network.add_vertex(v);
    }
    if n < 2 {
        return network;
    }

    let target = m.min(n * (n - 1));
    while network.arc_count() < target {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u == v || network.has_arc(u, v).unwrap_or(true) {
            continue;
        }
        let weight = rng.gen_range(weights.clone());
        let arc_type = rng.gen_range(0..GENERATED_ARC_TYPES);
        let _ = network.add_arc(u, v, weight, arc_type);
    }

    network
}

/// Generates a `width` x `height` grid where each cell is linked to its
/// four neighbours in both directions, like a street map. Vertex id of cell
/// `(x, y)` is `y * width + x`.
pub fn generate_grid_network(
    width: usize,
    height: usize,
    weights: RangeInclusive<i64>,
    seed: u64,
) -> Network<i64> {
    let mut network = Network::with_capacity(width * height);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..(width * height) {
        let _ = network.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            let mut neighbours = Vec::with_capacity(2);
            if x + 1 < width {
                neighbours.push(vertex + 1);
            }
            if y + 1 < height {
                neighbours.push(vertex + width);
            }

            for neighbour in neighbours {
                let arc_type = rng.gen_range(0..GENERATED_ARC_TYPES);
                let there = rng.gen_range(weights.clone());
                let back = rng.gen_range(weights.clone());
                let _ = network.add_arc(vertex, neighbour, there, arc_type);
                let _ = network.add_arc(neighbour, vertex, back, arc_type);
            }
        }
    }

    network
}
