use clap::Parser;
use scene_cli::run::{reference_grid, sampled_scene, shell_scene};
use scene_cli::{gen_scene, gen_triangles, CliSceneKind, GenSceneArgs, GenTrianglesArgs};
use scene_io::{read_triangles, MemorySink, OutputSink, SceneIoError, SceneIoResult, SceneKind, Settings};
use std::path::{Path, PathBuf};

const CONFIG: &str = r#"
[LIDAR_SENSOR]
azimuth_steps = 4
elevation_angles = [0.1, -0.1]

[SCENE_GENERATION]
target_vertices = 8
dense_radius = 10.0
sparse_radius = 100.0
angular_margin = 0.0

[RAY_TRACER]
ray_t_min = 0.0
ray_t_max = 1000.0
"#;

/// Accepts every write except the ones under `blocked`.
struct BlockingSink {
    inner: MemorySink,
    blocked: PathBuf,
    attempts: Vec<PathBuf>,
}

impl BlockingSink {
    fn new(blocked: &str) -> Self {
        Self {
            inner: MemorySink::new(),
            blocked: PathBuf::from(blocked),
            attempts: Vec::new(),
        }
    }
}

impl OutputSink for BlockingSink {
    fn write(&mut self, path: &Path, contents: &[u8]) -> SceneIoResult<()> {
        self.attempts.push(path.to_path_buf());
        if path.starts_with(&self.blocked) {
            return Err(SceneIoError::Write {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::Other, "blocked"),
            });
        }
        self.inner.write(path, contents)
    }
}

fn settings(text: &str) -> Settings {
    Settings::from_toml_str(text, Path::new("inline.toml")).unwrap()
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("scene-cli-{}-{name}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn parses_scene_kind_case_insensitively() {
    let args = GenSceneArgs::try_parse_from(["gen-scene", "DENSE"]).unwrap();
    assert_eq!(args.scene, CliSceneKind::Dense);
    assert_eq!(args.out_dir, PathBuf::from("."));
    assert!(args.config.is_none());

    let args = GenSceneArgs::try_parse_from(["gen-scene", "sparse", "--rays", "rays.csv"]).unwrap();
    assert_eq!(SceneKind::from(args.scene), SceneKind::Sparse);
    assert_eq!(args.rays, Some(PathBuf::from("rays.csv")));
}

#[test]
fn rejects_bad_invocations() {
    assert!(GenSceneArgs::try_parse_from(["gen-scene"]).is_err());
    assert!(GenSceneArgs::try_parse_from(["gen-scene", "medium"]).is_err());
    assert!(GenSceneArgs::try_parse_from(["gen-scene", "dense", "extra"]).is_err());
}

#[test]
fn sampler_defaults() {
    let args = GenTrianglesArgs::try_parse_from(["gen-triangles"]).unwrap();
    assert_eq!(args.count, 100_000);
    assert_eq!(args.radius, 1.0);
    assert_eq!(args.seed, None);
    assert_eq!(args.out, PathBuf::from("triangles.csv"));
    assert!(GenTrianglesArgs::try_parse_from(["gen-triangles", "--count", "-3"]).is_err());
}

#[test]
fn dense_scene_lands_at_preset_path() {
    let mut sink = MemorySink::new();
    let run = shell_scene(&settings(CONFIG), SceneKind::Dense, None, &mut sink).unwrap();

    assert_eq!(run.output, Path::new("scenes/dense/scene_triangles_dense.csv"));
    assert_eq!(run.triangles, 8);
    assert!(!run.layout.clamped);
    assert_eq!(sink.len(), 1);

    let scene = read_triangles(sink.get(&run.output).unwrap()).unwrap();
    assert_eq!(scene.len(), 8);
    for tri in scene.iter() {
        for v in [tri.v0, tri.v1, tri.v2] {
            assert!((v.length() - 10.0).abs() < 1e-9);
        }
        assert!(tri.faces_inward());
    }
}

#[test]
fn sparse_scene_uses_sparse_radius() {
    let mut sink = MemorySink::new();
    let run = shell_scene(&settings(CONFIG), SceneKind::Sparse, None, &mut sink).unwrap();
    assert_eq!(run.output, Path::new("scenes/sparse/scene_triangles_sparse.csv"));

    let scene = read_triangles(sink.get(&run.output).unwrap()).unwrap();
    assert!((scene.triangles()[0].v0.length() - 100.0).abs() < 1e-9);
}

#[test]
fn clamped_budget_is_reported() {
    let text = CONFIG.replace("target_vertices = 8", "target_vertices = 6");
    let mut sink = MemorySink::new();
    let run = shell_scene(&settings(&text), SceneKind::Dense, None, &mut sink).unwrap();
    assert!(run.layout.clamped);
    assert_eq!(run.layout.azimuth_points, 3);
    assert_eq!(run.triangles, 6);
}

#[test]
fn ray_directions_written_alongside() {
    let mut sink = MemorySink::new();
    let rays = Path::new("rays/dirs.csv");
    let run = shell_scene(&settings(CONFIG), SceneKind::Dense, Some(rays), &mut sink).unwrap();
    assert_eq!(run.rays.as_deref(), Some(rays));
    assert_eq!(sink.len(), 2);

    let text = String::from_utf8(sink.get(rays).unwrap().to_vec()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "dx,dy,dz");
    assert_eq!(lines.len(), 1 + 4 * 2);
}

#[test]
fn failed_scene_write_skips_rays() {
    let mut sink = BlockingSink::new("scenes");
    let rays = Path::new("rays.csv");
    let err = shell_scene(&settings(CONFIG), SceneKind::Dense, Some(rays), &mut sink).unwrap_err();
    assert!(format!("{err:#}").contains("scene_triangles_dense.csv"));
    assert_eq!(sink.attempts.len(), 1);
    assert!(sink.inner.is_empty());
}

#[test]
fn failed_rays_write_is_reported() {
    let mut sink = BlockingSink::new("blocker");
    let rays = Path::new("blocker/rays.csv");
    let err = shell_scene(&settings(CONFIG), SceneKind::Dense, Some(rays), &mut sink).unwrap_err();
    assert!(format!("{err:#}").contains("blocker/rays.csv"));
    assert_eq!(
        sink.attempts,
        vec![PathBuf::from("scenes/dense/scene_triangles_dense.csv"), rays.to_path_buf()]
    );
    assert!(sink.inner.get(rays).is_none());
}

#[test]
fn missing_generation_section_writes_nothing() {
    let text = CONFIG.split("[SCENE_GENERATION]").next().unwrap();
    let mut sink = MemorySink::new();
    assert!(shell_scene(&settings(text), SceneKind::Dense, None, &mut sink).is_err());
    assert!(sink.is_empty());
}

#[test]
fn missing_config_file_writes_nothing() {
    let dir = scratch_dir("missing");
    let args = GenSceneArgs {
        scene: CliSceneKind::Dense,
        config: Some(dir.join("nope.toml")),
        out_dir: dir.clone(),
        rays: None,
    };
    let mut sink = MemorySink::new();
    let err = gen_scene(&args, &mut sink).unwrap_err();
    assert!(format!("{err:#}").contains("nope.toml"));
    assert!(sink.is_empty());
}

#[test]
fn explicit_config_file_drives_gen_scene() {
    let dir = scratch_dir("explicit");
    let path = dir.join("config.toml");
    std::fs::write(&path, CONFIG).unwrap();

    let args = GenSceneArgs::try_parse_from([
        "gen-scene",
        "sparse",
        "--config",
        path.to_str().unwrap(),
    ])
    .unwrap();
    let mut sink = MemorySink::new();
    let run = gen_scene(&args, &mut sink).unwrap();
    assert_eq!(run.kind, SceneKind::Sparse);
    assert!(sink.get(&run.output).is_some());
}

#[test]
fn seeded_sampler_is_reproducible() {
    let args = GenTrianglesArgs::try_parse_from([
        "gen-triangles",
        "--count",
        "50",
        "--seed",
        "1234",
        "--out",
        "out.csv",
    ])
    .unwrap();

    let mut first = MemorySink::new();
    let mut second = MemorySink::new();
    let run = gen_triangles(&args, &mut first).unwrap();
    gen_triangles(&args, &mut second).unwrap();

    assert_eq!(run.seed, 1234);
    assert_eq!(run.triangles, 50);
    let path = Path::new("out.csv");
    assert_eq!(first.get(path), second.get(path));

    let scene = read_triangles(first.get(path).unwrap()).unwrap();
    assert_eq!(scene.len(), 50);
    assert!(scene.iter().all(|t| t.faces_outward()));
}

#[test]
fn sampler_rejects_bad_radius_without_output() {
    let grid = reference_grid().unwrap();
    let mut sink = MemorySink::new();
    assert!(sampled_scene(&grid, 10, 0.0, 7, Path::new("t.csv"), &mut sink).is_err());
    assert!(sink.is_empty());
}

#[test]
fn reference_grid_matches_profile() {
    let grid = reference_grid().unwrap();
    assert_eq!(grid.azimuth_count(), 3600);
    assert_eq!(grid.elevation_count(), 32);
}
