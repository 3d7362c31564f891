//! Weakly connected components over a [`SurfaceGraph`].
//!
//! Mesh-scale graphs have nowhere near the edge counts that motivate
//! afforest-style subgraph sampling, so this is a single baseline BFS pass,
//! one queue, one visited bitset, one label per vertex.

use std::collections::VecDeque;

use crate::graph::SurfaceGraph;

/// Labels every vertex with its connected-component id, in `[0, k)`. Vertices
/// reachable from one another via any path, ignoring edge weight, receive the
/// same label.
pub fn connected_components(graph: &SurfaceGraph) -> Vec<usize> {
    let n = graph.vertex_count();
    let mut labels = vec![usize::MAX; n];
    let mut queue = VecDeque::new();
    let mut next_label = 0usize;

    for start in 0..n {
        if labels[start] != usize::MAX {
            continue;
        }

        labels[start] = next_label;
        queue.push_back(start);

        while let Some(u) = queue.pop_front() {
            for &(v, _) in graph.neighbors(u) {
                if labels[v] == usize::MAX {
                    labels[v] = next_label;
                    queue.push_back(v);
                }
            }
        }

        next_label += 1;
    }

    labels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SurfaceGraph;

    #[test]
    fn two_disconnected_triangles() {
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

        let labels = connected_components(&g);
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[1], labels[2]);
        assert_eq!(labels[3], labels[4]);
        assert_eq!(labels[4], labels[5]);
        assert_ne!(labels[0], labels[3]);
    }

    #[test]
    fn single_component() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let triangles = vec![[0, 1, 2]];
        let g = SurfaceGraph::from_triangles(&points, &triangles).unwrap();
        let labels = connected_components(&g);
        assert!(labels.iter().all(|&l| l == labels[0]));
    }
}
