use approx::assert_relative_eq;
use config::constants::{reference_elevation_angles, REFERENCE_AZIMUTH_STEPS};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shell_mesh::primitives::sample_triangles;
use shell_mesh::AngularGrid;

fn reference_grid() -> AngularGrid {
    AngularGrid::new(REFERENCE_AZIMUTH_STEPS, reference_elevation_angles()).unwrap()
}

#[test]
fn sampled_triangles_face_outward() {
    let grid = reference_grid();
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let scene = sample_triangles(&grid, 5_000, 1.0, &mut rng).unwrap();
    assert_eq!(scene.len(), 5_000);
    for (i, tri) in scene.iter().enumerate() {
        let n = (tri.v1 - tri.v0).cross(tri.v2 - tri.v0);
        assert!(n.dot(tri.v0) >= 0.0, "triangle {i} faces the origin");
    }
}

#[test]
fn ascending_channels_face_outward_too() {
    let mut elevations = reference_elevation_angles();
    elevations.reverse();
    let grid = AngularGrid::new(720, elevations).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let scene = sample_triangles(&grid, 2_000, 50.0, &mut rng).unwrap();
    assert!(scene.iter().all(|t| t.faces_outward()));
}

#[test]
fn sampled_vertices_lie_on_the_shell() {
    let grid = reference_grid();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let scene = sample_triangles(&grid, 1_000, 12.5, &mut rng).unwrap();
    for tri in &scene {
        for v in [tri.v0, tri.v1, tri.v2] {
            assert_relative_eq!(v.length(), 12.5, max_relative = 1e-12);
        }
    }
}

#[test]
fn same_seed_same_scene() {
    let grid = reference_grid();
    let a = sample_triangles(&grid, 500, 1.0, &mut ChaCha8Rng::seed_from_u64(1234)).unwrap();
    let b = sample_triangles(&grid, 500, 1.0, &mut ChaCha8Rng::seed_from_u64(1234)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seed_different_scene() {
    let grid = reference_grid();
    let a = sample_triangles(&grid, 500, 1.0, &mut ChaCha8Rng::seed_from_u64(1)).unwrap();
    let b = sample_triangles(&grid, 500, 1.0, &mut ChaCha8Rng::seed_from_u64(2)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn duplicates_are_kept() {
    // One cell only: every draw is the same triangle
    let grid = AngularGrid::new(1, vec![0.2]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let scene = sample_triangles(&grid, 4, 1.0, &mut rng).unwrap();
    assert_eq!(scene.len(), 4);
    assert!(scene.iter().all(|t| *t == scene.triangles()[0]));
}

#[test]
fn works_with_trait_object_rng() {
    let grid = reference_grid();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let dyn_rng: &mut dyn rand::RngCore = &mut rng;
    let scene = sample_triangles(&grid, 10, 1.0, dyn_rng).unwrap();
    assert_eq!(scene.len(), 10);
}
