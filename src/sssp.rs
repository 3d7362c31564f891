//! Multi-source Dijkstra over a [`SurfaceGraph`].
//!
//! The priority queue is a `BinaryHeap` of [`HeapEntry`], whose `Ord` impl is
//! reversed so the heap behaves as a min-heap on distance, with the seed's
//! rank (its position in the seed list) folded in as a tie-breaker: on equal
//! distance, the seed that was added first wins. That makes the resulting
//! partition a pure function of input order and seed order, never of heap
//! pop order alone.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Instant;

use log::info;

use crate::graph::SurfaceGraph;

/// Sentinel stored in `nearest` for a vertex unreached by any seed.
pub const UNREACHABLE: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeapEntry {
    dist: f64,
    rank: i64,
    vertex: usize,
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap` (a max-heap) pops the smallest distance
        // first; on a tie, the lower seed rank pops first.
        other
            .dist
            .partial_cmp(&self.dist)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.rank.cmp(&self.rank))
    }
}

/// Result of a multi-source shortest-path computation.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// Geodesic distance to the nearest seed, or `f64::INFINITY` if
    /// unreachable.
    pub dist: Vec<f64>,
    /// Rank (within the seed list) of the nearest seed, or [`UNREACHABLE`].
    pub nearest: Vec<i64>,
}

/// Computes, for every vertex, the distance to and rank of its nearest seed.
/// Seeds are ranked by their position in `seeds`.
pub fn multi_source_dijkstra(graph: &SurfaceGraph, seeds: &[usize]) -> ShortestPaths {
    let start = Instant::now();
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    let mut nearest = vec![UNREACHABLE; n];
    let mut heap = BinaryHeap::with_capacity(graph.edge_count().min(n * 4));

    for (rank, &seed) in seeds.iter().enumerate() {
        dist[seed] = 0.0;
        nearest[seed] = rank as i64;
        heap.push(HeapEntry {
            dist: 0.0,
            rank: rank as i64,
            vertex: seed,
        });
    }

    run(graph, &mut dist, &mut nearest, heap);

    info!(
        "Multi-source Dijkstra from {} seeds over {} vertices took {:?}",
        seeds.len(),
        n,
        start.elapsed()
    );

    ShortestPaths { dist, nearest }
}

/// Propagates a single newly added seed through an existing distance field,
/// overwriting only vertices the new seed improves on. This is the
/// incremental update used by farthest-point sampling: it never touches a
/// vertex whose nearest seed does not change.
pub(crate) fn relax_from_new_seed(
    graph: &SurfaceGraph,
    dist: &mut [f64],
    nearest: &mut [i64],
    seed: usize,
    rank: i64,
    capacity_hint: usize,
) {
    dist[seed] = 0.0;
    nearest[seed] = rank;

    let mut heap = BinaryHeap::with_capacity(capacity_hint.max(graph.degree(seed)));
    heap.push(HeapEntry {
        dist: 0.0,
        rank,
        vertex: seed,
    });

    run(graph, dist, nearest, heap);
}

fn run(graph: &SurfaceGraph, dist: &mut [f64], nearest: &mut [i64], mut heap: BinaryHeap<HeapEntry>) {
    while let Some(HeapEntry { dist: d, rank, vertex: v }) = heap.pop() {
        if d > dist[v] {
            continue;
        }
        for &(u, w) in graph.neighbors(v) {
            let candidate = d + w;
            if candidate < dist[u] {
                dist[u] = candidate;
                nearest[u] = rank;
                heap.push(HeapEntry {
                    dist: candidate,
                    rank,
                    vertex: u,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph() -> SurfaceGraph {
        // 0 - 1 - 2 - 3, unit spacing along x.
        let points = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ];
        let edges = vec![(0, 1), (1, 2), (2, 3)];
        SurfaceGraph::from_edges(&points, &edges).unwrap()
    }

    #[test]
    fn single_seed_matches_euclidean_distance_on_a_line() {
        let g = path_graph();
        let sp = multi_source_dijkstra(&g, &[0]);
        assert_eq!(sp.dist, vec![0.0, 1.0, 2.0, 3.0]);
        assert!(sp.nearest.iter().all(|&r| r == 0));
    }

    #[test]
    fn two_seeds_split_the_line() {
        let g = path_graph();
        let sp = multi_source_dijkstra(&g, &[0, 3]);
        assert_eq!(sp.nearest, vec![0, 0, 1, 1]);
        assert_eq!(sp.dist, vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn triangle_inequality_holds() {
        let g = path_graph();
        let sp = multi_source_dijkstra(&g, &[0]);
        for v in 0..g.vertex_count() {
            for &(u, w) in g.neighbors(v) {
                assert!(sp.dist[u] <= sp.dist[v] + w + 1e-12);
            }
        }
    }
}
