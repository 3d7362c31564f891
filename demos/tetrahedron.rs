//! Runs the full remeshing pipeline over a tetrahedron and prints the
//! resulting low-resolution mesh and weight map row sums.

use remesh_core::prelude::*;

fn main() {
    env_logger::init();

    let points = vec![
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];
    let triangles = vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

    let graph = build_graph(&points, &triangles).expect("valid mesh");
    let fps = voronoi_fps(&graph, VfpsConfig::new(4)).expect("positive sample count");

    let triangles_usize: Vec<[usize; 3]> = triangles
        .iter()
        .map(|t| [t[0] as usize, t[1] as usize, t[2] as usize])
        .collect();

    let mut mesh = dual_mesh(&graph, &fps.seeds, &fps.nearest, &triangles_usize);
    reorient(&mut mesh, &graph, &triangles_usize);

    println!(
        "low-res mesh: {} vertices, {} triangles",
        mesh.points.len(),
        mesh.triangles.len()
    );

    let weights = weight_map(&graph, &mesh, &fps.nearest, points.len(), WeightMapConfig::default());
    for i in 0..weights.row_count() {
        let sum: f64 = weights.row(i).iter().map(|&(_, w)| w).sum();
        println!("row {i}: {} entries, sum {sum:.6}", weights.row(i).len());
    }
}
