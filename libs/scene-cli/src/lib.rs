//! # Scene CLI
//!
//! Argument parsing and run orchestration for the `gen-scene` and
//! `gen-triangles` binaries. The binaries only parse arguments, set up
//! logging, and pick a [`scene_io::DirectorySink`]; everything else lives
//! here so it can be driven against a [`scene_io::MemorySink`] in tests.

pub mod args;
pub mod run;

pub use args::{CliSceneKind, GenSceneArgs, GenTrianglesArgs};
pub use run::{gen_scene, gen_triangles, init_logging, SampleRun, ShellRun};
