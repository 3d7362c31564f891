//! Voronoi-dual reconstruction: turning a partition back into a coarse
//! triangle mesh, plus the per-triangle orientation fixup that keeps winding
//! consistent with the original surface.

use std::collections::HashMap;
use std::time::Instant;

use log::{debug, info};
use rayon::prelude::*;

use crate::graph::{Point, SurfaceGraph};
use crate::sssp::UNREACHABLE;

/// The low-resolution triangle mesh produced by [`dual_mesh`].
#[derive(Debug, Clone)]
pub struct DualMesh {
    pub points: Vec<Point>,
    pub triangles: Vec<[usize; 3]>,
    /// For each entry in `triangles`, the index into the original triangle
    /// array of the first source triangle that produced it. Used by
    /// [`reorient`] to recover the normal to fix winding against; not part of
    /// the public low-resolution mesh contract.
    source_triangle: Vec<usize>,
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn normal(a: Point, b: Point, c: Point) -> [f64; 3] {
    cross(sub(b, a), sub(c, a))
}

/// Builds the low-resolution mesh: one vertex per seed, one triangle per
/// original triangle whose three vertices fall into three distinct,
/// reachable Voronoi cells. Winding is inherited as-is from the originating
/// source triangle; call [`reorient`] to correct it against the surface
/// normal.
pub fn dual_mesh(
    graph: &SurfaceGraph,
    seeds: &[usize],
    nearest: &[i64],
    triangles: &[[usize; 3]],
) -> DualMesh {
    let start = Instant::now();

    let points: Vec<Point> = seeds.iter().map(|&s| graph.point(s)).collect();
    let mut seen: HashMap<[usize; 3], ()> = HashMap::new();
    let mut out_triangles = Vec::new();
    let mut source_triangle = Vec::new();

    for (ti, tri) in triangles.iter().enumerate() {
        let mapped = [
            nearest[tri[0]],
            nearest[tri[1]],
            nearest[tri[2]],
        ];
        if mapped.iter().any(|&m| m == UNREACHABLE) {
            continue;
        }
        let mapped = [mapped[0] as usize, mapped[1] as usize, mapped[2] as usize];
        if mapped[0] == mapped[1] || mapped[1] == mapped[2] || mapped[0] == mapped[2] {
            continue;
        }

        let mut key = mapped;
        key.sort_unstable();
        if seen.contains_key(&key) {
            continue;
        }
        seen.insert(key, ());
        out_triangles.push(mapped);
        source_triangle.push(ti);
    }

    if out_triangles.is_empty() {
        debug!(
            "Dual mesh construction produced no triangles from {} source triangles and {} seeds",
            triangles.len(),
            seeds.len()
        );
    }

    info!(
        "Built dual mesh with {} vertices and {} triangles from {} source triangles in {:?}",
        points.len(),
        out_triangles.len(),
        triangles.len(),
        start.elapsed()
    );

    DualMesh {
        points,
        triangles: out_triangles,
        source_triangle,
    }
}

/// Flips the winding of any dual triangle whose normal disagrees with that of
/// its originating source triangle. Operates in place; `triangles` must be
/// the same original triangle array that produced `mesh` via [`dual_mesh`].
pub fn reorient(mesh: &mut DualMesh, graph: &SurfaceGraph, triangles: &[[usize; 3]]) {
    let points = &mesh.points;
    let source_triangle = &mesh.source_triangle;

    mesh.triangles
        .par_iter_mut()
        .zip(source_triangle.par_iter())
        .for_each(|(tri, &ti)| {
            let src = triangles[ti];
            let src_normal = normal(graph.point(src[0]), graph.point(src[1]), graph.point(src[2]));
            let dual_normal = normal(points[tri[0]], points[tri[1]], points[tri[2]]);
            if dot(src_normal, dual_normal) < 0.0 {
                tri.swap(1, 2);
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sssp::multi_source_dijkstra;

    #[test]
    fn single_triangle_dual_mesh_matches_input() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let triangles = vec![[0usize, 1, 2]];
        let graph = SurfaceGraph::from_triangles(
            &points,
            &triangles
                .iter()
                .map(|t| [t[0] as i32, t[1] as i32, t[2] as i32])
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let seeds = vec![0, 1, 2];
        let sp = multi_source_dijkstra(&graph, &seeds);

        let mesh = dual_mesh(&graph, &seeds, &sp.nearest, &triangles);
        assert_eq!(mesh.points.len(), 3);
        assert_eq!(mesh.triangles.len(), 1);
        assert_eq!(mesh.triangles[0], [0, 1, 2]);
    }

    #[test]
    fn disconnected_pair_emits_no_dual_triangle() {
        let points = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
            [10.0, 0.0, 0.0],
            [11.0, 0.0, 0.0],
            [10.0, 1.0, 0.0],
        ];
        let triangles = vec![[0usize, 1, 2], [3, 4, 5]];
        let graph = SurfaceGraph::from_triangles(
            &points,
            &triangles
                .iter()
                .map(|t| [t[0] as i32, t[1] as i32, t[2] as i32])
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let seeds = vec![0, 3];
        let sp = multi_source_dijkstra(&graph, &seeds);
        let mesh = dual_mesh(&graph, &seeds, &sp.nearest, &triangles);
        assert!(mesh.triangles.is_empty());
    }

    #[test]
    fn reorient_is_idempotent_once_consistent() {
        let points = vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]];
        let triangles = vec![[0usize, 1, 2]];
        let graph = SurfaceGraph::from_triangles(
            &points,
            &triangles
                .iter()
                .map(|t| [t[0] as i32, t[1] as i32, t[2] as i32])
                .collect::<Vec<_>>(),
        )
        .unwrap();
        let seeds = vec![0, 1, 2];
        let sp = multi_source_dijkstra(&graph, &seeds);
        let mut mesh = dual_mesh(&graph, &seeds, &sp.nearest, &triangles);
        reorient(&mut mesh, &graph, &triangles);
        let before = mesh.triangles.clone();
        reorient(&mut mesh, &graph, &triangles);
        assert_eq!(before, mesh.triangles);
    }
}
