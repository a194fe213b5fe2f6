//! Mesh generator for the deep-ocean exploration showcase
//!
//! Generates creature and vehicle meshes (OBJ format) organized by depth
//! zone:
//! - Zone 1: Sunlit Waters (0-200m)
//! - Zone 2: Twilight Realm (200-1000m)
//! - Zone 3: Midnight Abyss (1000-4000m)
//! - Zone 4: Hydrothermal Vents (4000-5000m)
//!
//! Plus epic encounters (whales and the giant isopod), the player
//! submersible, and soft-form metaball variants of selected creatures.

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use proc_mesh::style::{DetailLevel, StyleTokens};

mod mesh_helpers;
mod metaballs;
mod submersible;
mod whales;
mod zone1;
mod zone2;
mod zone3;
mod zone4;

#[derive(Parser)]
#[command(name = "gen-meshes")]
#[command(about = "Generate procedural creature and vehicle meshes")]
struct Cli {
    /// Output directory for generated meshes
    #[arg(short, long, default_value = "generated", global = true)]
    output: PathBuf,

    /// Detail level: low, medium, high
    #[arg(short, long, default_value = "medium", global = true)]
    detail: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Zone 1 creatures (reef fish, sea turtle, manta ray, coral crab)
    Zone1,
    /// Generate Zone 2 creatures (moon jelly, lanternfish, siphonophore, giant squid)
    Zone2,
    /// Generate Zone 3 creatures (anglerfish, gulper eel, dumbo octopus, vampire squid)
    Zone3,
    /// Generate Zone 4 creatures (tube worms, vent shrimp, ghost fish, vent octopus)
    Zone4,
    /// Generate epic encounters (blue whale, sperm whale, giant isopod)
    Epics,
    /// Generate the player submersible
    Submersible,
    /// Generate soft-form metaball creature variants
    Metaballs,
    /// Generate everything
    All,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    let Some(detail) = DetailLevel::from_str(&cli.detail) else {
        bail!("invalid detail level {:?} (expected low, medium, or high)", cli.detail);
    };
    let tokens = StyleTokens::with_detail(detail);

    fs::create_dir_all(&cli.output)?;

    match cli.command {
        Commands::Zone1 => zone1::generate_all(&tokens, &cli.output)?,
        Commands::Zone2 => zone2::generate_all(&tokens, &cli.output)?,
        Commands::Zone3 => zone3::generate_all(&tokens, &cli.output)?,
        Commands::Zone4 => zone4::generate_all(&tokens, &cli.output)?,
        Commands::Epics => whales::generate_all(&tokens, &cli.output)?,
        Commands::Submersible => submersible::generate_all(&tokens, &cli.output)?,
        Commands::Metaballs => metaballs::generate_all(&tokens, &cli.output)?,
        Commands::All => {
            zone1::generate_all(&tokens, &cli.output)?;
            zone2::generate_all(&tokens, &cli.output)?;
            zone3::generate_all(&tokens, &cli.output)?;
            zone4::generate_all(&tokens, &cli.output)?;
            whales::generate_all(&tokens, &cli.output)?;
            submersible::generate_all(&tokens, &cli.output)?;
            metaballs::generate_all(&tokens, &cli.output)?;
        }
    }

    Ok(())
}
