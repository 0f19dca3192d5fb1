//! Builds the city-and-mountains demo scene into an in-memory backend.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p ridgeline-demo -- --resolution 256 --seed 7`.

use std::path::PathBuf;

use clap::Parser;
use ridgeline_config::{CliArgs, Config};
use ridgeline_scene::{MemoryBackend, SceneSession, build_scene, rest_height};
use tracing::info;

fn main() {
    let args = CliArgs::parse();

    let config_dir = args
        .config
        .clone()
        .or_else(Config::default_dir)
        .unwrap_or_else(|| PathBuf::from(".ridgeline"));

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    ridgeline_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    info!(
        resolution = config.terrain.resolution,
        width = config.terrain.width,
        depth = config.terrain.depth,
        seed = config.terrain.seed,
        "building scene"
    );

    let (mut session, mut backend) = match build_scene(&config) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("scene generation failed: {e}");
            std::process::exit(1);
        }
    };
    report(&session, &backend);

    if args.regenerate {
        session.regenerate(&mut backend);
        info!("scene regenerated");
        report(&session, &backend);
    }
}

fn report(session: &SceneSession, backend: &MemoryBackend) {
    let summary = session.summary();
    info!(
        owned = summary.entities,
        backend = backend.len(),
        "scene summary"
    );
    for (tag, count) in &summary.by_tag {
        info!(tag, count, "placed");
    }

    if let Some(field) = session.sampler().field() {
        info!(min = field.min(), max = field.max(), "raw elevation range");
    }

    let scale = session.options().vertical_scale;
    for name in ["Central_Skyscraper", "Main_Peak"] {
        if let Some((_, desc)) = backend.find(name) {
            let ground = rest_height(session.sampler(), desc.position.x, desc.position.z, scale);
            info!(name, ground, center_y = desc.position.y, "landmark");
        }
    }
}
