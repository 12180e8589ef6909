use anyhow::Result;
use clap::Parser;
use scene_cli::{gen_scene, init_logging, GenSceneArgs};
use scene_io::DirectorySink;

fn main() -> Result<()> {
    let args = GenSceneArgs::parse();
    init_logging();

    let mut sink = DirectorySink::new(&args.out_dir);
    let run = gen_scene(&args, &mut sink)?;
    log::info!(
        "{} scene complete: {}",
        run.kind,
        sink.resolve(&run.output).display()
    );
    Ok(())
}
