//! Geodesic Voronoi remeshing.
//!
//! Turns a triangle surface mesh into a coarser one whose vertices are a
//! near-uniform geodesic sampling of the original surface, together with a
//! sparse barycentric map that transfers per-vertex scalar fields between the
//! two resolutions.
//!
//! ```
//! use remesh_core::{build_graph, voronoi_fps, dual_mesh, weight_map, VfpsConfig, WeightMapConfig};
//!
//! let points = vec![
//!     [0.0, 0.0, 0.0],
//!     [1.0, 0.0, 0.0],
//!     [0.0, 1.0, 0.0],
//!     [0.0, 0.0, 1.0],
//! ];
//! let triangles = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];
//!
//! let graph = build_graph(&points, &triangles).unwrap();
//! let fps = voronoi_fps(&graph, VfpsConfig::new(4)).unwrap();
//!
//! let triangles_usize: Vec<[usize; 3]> = triangles
//!     .iter()
//!     .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
//!     .collect();
//! let mut mesh = dual_mesh(&graph, &fps.seeds, &fps.nearest, &triangles_usize);
//! remesh_core::reorient(&mut mesh, &graph, &triangles_usize);
//!
//! let weights = weight_map(&graph, &mesh, &fps.nearest, points.len(), WeightMapConfig::default());
//! assert_eq!(weights.row_count(), points.len());
//! ```

pub mod components;
pub mod config;
pub mod dual_mesh;
pub mod error;
pub mod graph;
pub mod sssp;
pub mod vfps;
pub mod weights;

pub use components::connected_components;
pub use config::{VfpsConfig, WeightMapConfig};
pub use dual_mesh::{dual_mesh, reorient, DualMesh};
pub use error::Error;
pub use graph::{Point, SurfaceGraph};
pub use sssp::{multi_source_dijkstra, ShortestPaths};
pub use vfps::{voronoi_fps, VfpsResult};
pub use weights::{weight_map, SparseWeights};

/// Builds the surface graph from a dense point array and a dense,
/// `i32`-indexed triangle array, the shape an external array-matrix
/// front-end hands over at the boundary.
pub fn build_graph(points: &[Point], triangles: &[[i32; 3]]) -> Result<SurfaceGraph, Error> {
    SurfaceGraph::from_triangles(points, triangles)
}

/// Commonly imported items.
pub mod prelude {
    pub use crate::{
        build_graph, connected_components, dual_mesh, reorient, voronoi_fps, weight_map,
        DualMesh, Error, Point, ShortestPaths, SparseWeights, SurfaceGraph, VfpsConfig,
        VfpsResult, WeightMapConfig,
    };
}
