//! Barycentric weight transfer from the original mesh to the low-resolution
//! dual mesh: a sparse, row-stochastic matrix with at most three non-zero
//! entries per row, stored in the same offsets-plus-flat-pairs shape the
//! surface graph uses for its adjacency.

use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::config::WeightMapConfig;
use crate::dual_mesh::DualMesh;
use crate::graph::{Point, SurfaceGraph};
use crate::sssp::UNREACHABLE;

/// A sparse `(n_orig_input, low_res_vertex_count)` matrix. Row `i` lists its
/// non-zero `(column, weight)` pairs in `entries[off[i]..off[i + 1]]`;
/// weights in a row are non-negative and sum to one.
#[derive(Debug, Clone)]
pub struct SparseWeights {
    off: Vec<usize>,
    entries: Vec<(usize, f64)>,
}

impl SparseWeights {
    #[inline]
    pub fn row_count(&self) -> usize {
        self.off.len().saturating_sub(1)
    }

    #[inline]
    pub fn row(&self, i: usize) -> &[(usize, f64)] {
        &self.entries[self.off[i]..self.off[i + 1]]
    }
}

fn sub(a: Point, b: Point) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn norm(a: [f64; 3]) -> f64 {
    dot(a, a).sqrt()
}

/// Barycentric coordinates of the projection of `p` onto triangle `(a, b,
/// c)`, and the perpendicular out-of-plane residual relative to the
/// triangle's longest edge.
fn project(p: Point, a: Point, b: Point, c: Point) -> ([f64; 3], f64) {
    let v0 = sub(b, a);
    let v1 = sub(c, a);
    let v2 = sub(p, a);

    let d00 = dot(v0, v0);
    let d01 = dot(v0, v1);
    let d11 = dot(v1, v1);
    let d20 = dot(v2, v0);
    let d21 = dot(v2, v1);

    let denom = d00 * d11 - d01 * d01;
    let (v, w) = if denom.abs() < 1e-18 {
        (0.0, 0.0)
    } else {
        ((d11 * d20 - d01 * d21) / denom, (d00 * d21 - d01 * d20) / denom)
    };
    let u = 1.0 - v - w;

    let edge_bc = norm(sub(c, b));
    let longest_edge = norm(v0).max(norm(v1)).max(edge_bc).max(1e-18);

    let normal = cross(v0, v1);
    let normal_len = norm(normal).max(1e-18);
    let perp = dot(v2, normal).abs() / normal_len;

    ([u, v, w], perp / longest_edge)
}

fn nearest_low_res_vertex(p: Point, points: &[Point]) -> usize {
    points
        .iter()
        .enumerate()
        .map(|(k, &q)| (k, norm(sub(p, q))))
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k)
        .unwrap_or(0)
}

fn clamp_and_normalize(mut coords: [f64; 3]) -> [f64; 3] {
    for c in coords.iter_mut() {
        if *c < 0.0 {
            *c = 0.0;
        }
    }
    let sum: f64 = coords.iter().sum();
    if sum > 1e-18 {
        for c in coords.iter_mut() {
            *c /= sum;
        }
    } else {
        coords = [1.0, 0.0, 0.0];
    }
    coords
}

fn row_for_vertex(
    i: usize,
    graph: &SurfaceGraph,
    mesh: &DualMesh,
    nearest: &[i64],
    incident: &[Vec<usize>],
    config: &WeightMapConfig,
) -> Vec<(usize, f64)> {
    if mesh.points.is_empty() {
        return Vec::new();
    }

    let p = graph.point(i);
    let k0 = if nearest[i] != UNREACHABLE {
        nearest[i] as usize
    } else {
        nearest_low_res_vertex(p, &mesh.points)
    };

    let candidates = &incident[k0];
    if candidates.is_empty() {
        let k = nearest_low_res_vertex(p, &mesh.points);
        return vec![(k, 1.0)];
    }

    let mut best_tri = candidates[0];
    let mut best_coords = [0.0; 3];
    let mut best_residual = f64::INFINITY;

    for &ti in candidates {
        let tri = mesh.triangles[ti];
        let (coords, residual) = project(
            p,
            mesh.points[tri[0]],
            mesh.points[tri[1]],
            mesh.points[tri[2]],
        );
        if residual < best_residual {
            best_residual = residual;
            best_coords = coords;
            best_tri = ti;
        }
        if residual <= config.residual_tolerance {
            break;
        }
    }

    let tri = mesh.triangles[best_tri];
    let coords = clamp_and_normalize(best_coords);

    let mut row = Vec::with_capacity(3);
    for (slot, &weight) in tri.iter().zip(coords.iter()) {
        if weight > 0.0 {
            row.push((*slot, weight));
        }
    }
    if row.is_empty() {
        row.push((tri[0], 1.0));
    }
    row
}

/// Builds the sparse barycentric transfer matrix from the original mesh to
/// `mesh`. `nearest` is the Voronoi assignment produced by
/// [`crate::vfps::voronoi_fps`]; `n_orig_input` is the vertex count of the
/// original input mesh, which may exceed `graph.vertex_count()` if an
/// external pre-resampling stage grew the mesh before this core saw it.
pub fn weight_map(
    graph: &SurfaceGraph,
    mesh: &DualMesh,
    nearest: &[i64],
    n_orig_input: usize,
    config: WeightMapConfig,
) -> SparseWeights {
    let start = Instant::now();

    let mut incident = vec![Vec::new(); mesh.points.len()];
    for (ti, tri) in mesh.triangles.iter().enumerate() {
        for &v in tri {
            incident[v].push(ti);
        }
    }

    let rows: Vec<Vec<(usize, f64)>> = (0..n_orig_input.min(graph.vertex_count()))
        .into_par_iter()
        .map(|i| row_for_vertex(i, graph, mesh, nearest, &incident, &config))
        .collect();

    let mut off = Vec::with_capacity(rows.len() + 1);
    let mut entries = Vec::new();
    off.push(0);
    for row in &rows {
        entries.extend_from_slice(row);
        off.push(entries.len());
    }

    info!(
        "Built barycentric weight map for {} vertices against {} low-res vertices in {:?}",
        rows.len(),
        mesh.points.len(),
        start.elapsed()
    );

    SparseWeights { off, entries }
}
