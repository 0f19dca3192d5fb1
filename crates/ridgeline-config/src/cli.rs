//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Ridgeline command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "ridgeline", about = "Procedural city-and-mountains scene generator")]
pub struct CliArgs {
    /// Height-field resolution (cells per side).
    #[arg(long)]
    pub resolution: Option<u32>,

    /// Terrain width along X, in world units.
    #[arg(long)]
    pub width: Option<f64>,

    /// Terrain depth along Z, in world units.
    #[arg(long)]
    pub depth: Option<f64>,

    /// Vertical scale applied to raw elevations.
    #[arg(long)]
    pub max_height: Option<f64>,

    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Number of scattered trees.
    #[arg(long)]
    pub trees: Option<u32>,

    /// Skip tree scatter.
    #[arg(long)]
    pub no_forest: bool,

    /// Skip mountain, hill and rock blocks.
    #[arg(long)]
    pub no_mountains: bool,

    /// Tear the scene down and populate it again once after the first build.
    #[arg(long)]
    pub regenerate: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.resolution {
            self.terrain.resolution = r;
        }
        if let Some(w) = args.width {
            self.terrain.width = w;
        }
        if let Some(d) = args.depth {
            self.terrain.depth = d;
        }
        if let Some(h) = args.max_height {
            self.terrain.max_height = h;
        }
        if let Some(seed) = args.seed {
            self.terrain.seed = seed;
        }
        if let Some(trees) = args.trees {
            self.scene.number_of_trees = trees;
        }
        if args.no_forest {
            self.scene.create_forest = false;
        }
        if args.no_mountains {
            self.scene.create_mountains = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
