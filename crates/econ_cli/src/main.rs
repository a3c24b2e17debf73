//! Inspection CLI: load content plus a zone-state snapshot and print
//! per-zone rate bundles or upgrade-factor breakdowns.
//!
//! The real tick scheduler lives elsewhere; this binary exists so
//! balance work doesn't require booting the whole game.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use econ_core::{upgrade_factor, zone_rates, SkillSet, ZoneState};
use econ_world::load_content;
use serde::Deserialize;
use std::collections::HashMap;

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser)]
#[command(name = "econ_cli", about = "Production engine inspector")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the rate bundle for every zone in a snapshot.
    Rates {
        #[arg(long, default_value = "./content")]
        content_dir: String,
        /// Snapshot JSON: zone states, raw skill values, probe census.
        #[arg(long)]
        snapshot: String,
    },
    /// Print the upgrade-factor breakdown for one production category.
    Factor {
        #[arg(long, default_value = "./content")]
        content_dir: String,
        #[arg(long)]
        snapshot: String,
        /// Category name, e.g. probe_mining or salvage_efficiency.
        #[arg(long)]
        category: String,
    },
}

/// On-disk snapshot format. Skills arrive under their raw configured
/// names; aliases are resolved on load.
#[derive(Deserialize)]
struct Snapshot {
    #[serde(default)]
    skills: HashMap<String, f64>,
    #[serde(default)]
    total_probe_count: f64,
    zones: Vec<ZoneState>,
}

fn load_snapshot(path: &str) -> Result<(Snapshot, SkillSet)> {
    let snapshot: Snapshot = serde_json::from_str(
        &std::fs::read_to_string(path).with_context(|| format!("reading snapshot {path}"))?,
    )
    .with_context(|| format!("parsing snapshot {path}"))?;
    let skills = SkillSet::from_named(
        snapshot
            .skills
            .iter()
            .map(|(name, value)| (name.as_str(), *value)),
    );
    Ok((snapshot, skills))
}

fn run_rates(content_dir: &str, snapshot_path: &str) -> Result<()> {
    let content = load_content(content_dir)?;
    let (snapshot, skills) = load_snapshot(snapshot_path)?;
    let ctx = content.context(&skills, snapshot.total_probe_count);

    println!(
        "{:<16} {:>14} {:>14} {:>14} {:>14} {:>14}",
        "zone", "mining", "building", "metal", "methalox", "slag"
    );
    for state in &snapshot.zones {
        let bundle = zone_rates(&ctx, state);
        println!(
            "{:<16} {:>14.3e} {:>14.3e} {:>14.3e} {:>14.3e} {:>14.3e}",
            state.zone_id.0,
            bundle.mining,
            bundle.building,
            bundle.metal_production,
            bundle.methalox_production,
            bundle.slag_production,
        );
    }
    Ok(())
}

fn run_factor(content_dir: &str, snapshot_path: &str, category: &str) -> Result<()> {
    let content = load_content(content_dir)?;
    let (_, skills) = load_snapshot(snapshot_path)?;

    let entries = content.coefficients.entries(category, &skills);
    let factor = upgrade_factor(&entries);

    println!("category {category}: factor {:.4}", factor.factor);
    for c in &factor.contributions {
        println!(
            "  {:<20} weight {:>6.3}  value {:>8.4}  contribution {:>+8.4}",
            c.skill.as_str(),
            c.weight,
            c.value,
            c.contribution,
        );
    }
    if factor.contributions.is_empty() {
        println!("  (no valid entries — neutral factor)");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Rates {
            content_dir,
            snapshot,
        } => run_rates(&content_dir, &snapshot),
        Commands::Factor {
            content_dir,
            snapshot,
            category,
        } => run_factor(&content_dir, &snapshot, &category),
    }
}
