//! Geodesic Voronoi farthest-point sampling.

use log::{debug, info};
use std::time::Instant;

use crate::components::connected_components;
use crate::config::VfpsConfig;
use crate::error::Error;
use crate::graph::SurfaceGraph;
use crate::sssp::{multi_source_dijkstra, relax_from_new_seed, ShortestPaths};

/// A seed set together with the Voronoi partition it induces.
#[derive(Debug, Clone)]
pub struct VfpsResult {
    /// Seed vertex indices, in the order they were added. A seed's position
    /// here is its rank, matching [`ShortestPaths::nearest`].
    pub seeds: Vec<usize>,
    pub dist: Vec<f64>,
    pub nearest: Vec<i64>,
}

/// Grows a seed set to `config.sample_count` vertices (or until the graph
/// runs out of distinct vertices to offer), maintaining the Voronoi
/// partition incrementally.
pub fn voronoi_fps(graph: &SurfaceGraph, config: VfpsConfig) -> Result<VfpsResult, Error> {
    if config.sample_count == 0 {
        return Err(Error::InvalidSampleCount(0));
    }

    let start = Instant::now();
    let n = graph.vertex_count();
    let target = config.sample_count.min(n);

    let initial = initial_seed(graph);
    let mut seeds = vec![initial];
    let ShortestPaths { mut dist, mut nearest } = multi_source_dijkstra(graph, &seeds);

    let average_degree = (graph.edge_count() * 2 / n.max(1)).max(1);
    let capacity_hint = average_degree * config.heap_capacity_factor;

    while seeds.len() < target {
        let (farthest, farthest_dist) = argmax_distance(&dist);
        if farthest_dist == 0.0 {
            debug!(
                "Voronoi FPS stopped early at {} of {} requested seeds: every vertex is already a seed",
                seeds.len(),
                config.sample_count
            );
            break;
        }

        let rank = seeds.len() as i64;
        relax_from_new_seed(graph, &mut dist, &mut nearest, farthest, rank, capacity_hint);
        seeds.push(farthest);
    }

    info!(
        "Voronoi FPS sampled {} of {} requested seeds over {} vertices in {:?}",
        seeds.len(),
        config.sample_count,
        n,
        start.elapsed()
    );

    Ok(VfpsResult { seeds, dist, nearest })
}

fn initial_seed(graph: &SurfaceGraph) -> usize {
    let labels = connected_components(graph);
    let component_count = labels.iter().copied().max().map_or(0, |m| m + 1);

    if component_count <= 1 {
        return 0;
    }

    let mut sizes = vec![0usize; component_count];
    for &label in &labels {
        sizes[label] += 1;
    }
    let largest = sizes
        .iter()
        .enumerate()
        .max_by_key(|&(_, &size)| size)
        .map(|(label, _)| label)
        .unwrap_or(0);

    labels
        .iter()
        .position(|&label| label == largest)
        .unwrap_or(0)
}

fn argmax_distance(dist: &[f64]) -> (usize, f64) {
    let mut best_vertex = 0;
    let mut best_dist = dist[0];
    for (v, &d) in dist.iter().enumerate().skip(1) {
        if d > best_dist {
            best_vertex = v;
            best_dist = d;
        }
    }
    (best_vertex, best_dist)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> SurfaceGraph {
        let points = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 1.0],
        ];
        let triangles = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
        SurfaceGraph::from_triangles(&points, &triangles).unwrap()
    }

    #[test]
    fn samples_all_vertices_of_a_tetrahedron() {
        let g = tetrahedron();
        let result = voronoi_fps(&g, VfpsConfig::new(4)).unwrap();
        assert_eq!(result.seeds.len(), 4);
        let mut sorted = result.seeds.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn stops_early_when_n_exceeds_vertex_count() {
        let g = tetrahedron();
        let result = voronoi_fps(&g, VfpsConfig::new(100)).unwrap();
        assert_eq!(result.seeds.len(), 4);
        assert!(result.dist.iter().all(|&d| d == 0.0));
    }

    #[test]
    fn rejects_zero_sample_count() {
        let g = tetrahedron();
        let err = voronoi_fps(&g, VfpsConfig::new(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidSampleCount(0)));
    }

    #[test]
    fn seeds_every_disconnected_component() {
        let points = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [10.0, 0.0, 0.0],
            [11.0, 0.0, 0.0],
            [10.0, 1.0, 0.0],
        ];
        let triangles = vec![[0, 1, 2], [3, 4, 5]];
        let g = SurfaceGraph::from_triangles(&points, &triangles).unwrap();

        let result = voronoi_fps(&g, VfpsConfig::new(2)).unwrap();
        let components_of_seeds: std::collections::HashSet<bool> =
            result.seeds.iter().map(|&s| s < 3).collect();
        assert_eq!(components_of_seeds.len(), 2);
    }
}
