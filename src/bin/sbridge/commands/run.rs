use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use silica_bridge::io::{
    Format, read_rings, read_xyz, write_area_histogram, write_bridges, write_connectivity,
    write_ring_histogram,
};
use silica_bridge::{
    AreaStatistics, Bond, BondGraph, ConnectConfig, ConnectError, Ring, RingBridges,
    RingStatistics, Slab, Strategy,
};

use crate::cli::Cli;
use crate::config::build_connect_config;
use crate::display::{
    Context as DisplayContext, Progress, print_ring_failures, print_ring_statistics,
    print_structure_info,
};
use crate::io::{create_output, open_input};
use crate::util::path::artifact_path;

const TOTAL_STEPS: u8 = 5;

const RING_HISTOGRAM_SUFFIX: &str = "_ringhist.dat";
const AREA_HISTOGRAM_SUFFIX: &str = "_areahist.dat";

/// A ring that could not be resolved, numbered from 1 in ring-list order.
#[derive(Debug)]
pub struct RingFailure {
    pub ring_number: usize,
    pub error: ConnectError,
}

#[derive(Debug, thiserror::Error)]
#[error("{failed} of {total} ring(s) could not be resolved")]
pub struct UnresolvedRings {
    pub failed: usize,
    pub total: usize,
}

pub fn run(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let config = build_connect_config(&cli.detect, cli.distance)?;
    let output_dir = cli.output.output_dir.as_deref();
    if let Some(dir) = output_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading structure");
    let slab = read_slab(&cli.coordinates)?;
    progress.done(
        "Reading structure",
        &[format!("{} atoms from {}", slab.atom_count(), cli.coordinates.display())],
    );

    progress.step("Detecting Si–O bonds");
    let bonds = silica_bridge::connect(&slab, &config).context("Bond detection failed")?;
    let table_path = artifact_path(
        &cli.coordinates,
        output_dir,
        &format!(".{}", Format::Connectivity.extension()),
    );
    write_bond_table(&table_path, &bonds)?;
    progress.done(
        "Detecting Si–O bonds",
        &build_detect_details(&config, bonds.len(), &table_path),
    );

    let corrections = config.corrections.len();
    if ctx.interactive {
        print_structure_info(&slab, bonds.len() - corrections, corrections);
    }

    progress.step("Reading rings");
    let rings = read_ring_list(&cli.rings)?;
    progress.done(
        "Reading rings",
        &[format!("{} rings from {}", rings.len(), cli.rings.display())],
    );

    progress.step("Resolving bridging oxygens");
    let graph = BondGraph::from_bonds(&bonds);
    info!(bonds = graph.bond_count(), rings = rings.len(), "resolving rings");
    let (resolved, failures) = resolve_rings(&rings, &slab, &graph);
    write_bridge_list(cli.output.bridges.as_deref(), &resolved)?;
    progress.done(
        "Resolving bridging oxygens",
        &build_resolve_details(resolved.len(), failures.len(), cli.output.bridges.as_deref()),
    );

    progress.step("Ring statistics");
    let stats = RingStatistics::from_rings(&rings);
    let areas = AreaStatistics::from_rings(
        rings
            .iter()
            .filter(|ring| ring.check_bounds(slab.atom_count()).is_ok()),
        &slab.atoms,
    )
    .context("Ring area calculation failed")?;
    let stats_paths = write_statistics(&cli.coordinates, output_dir, &stats, &areas)?;
    info!(
        rings = stats.ring_count,
        mean_size = stats.mean_size,
        second_moment = stats.second_moment,
        total_area = areas.total_area,
        "ring statistics"
    );
    progress.done(
        "Ring statistics",
        &stats_paths
            .iter()
            .map(|p| format!("Write {}", p.display()))
            .collect::<Vec<_>>(),
    );

    if ctx.interactive {
        print_ring_statistics(&stats, &areas);
        print_ring_failures(&failures);
    }

    progress.finish(failures.len());

    if failures.is_empty() {
        Ok(())
    } else {
        Err(UnresolvedRings {
            failed: failures.len(),
            total: rings.len(),
        }
        .into())
    }
}

fn read_slab(path: &Path) -> Result<Slab> {
    let input = open_input(path)?;
    read_xyz(input).with_context(|| format!("Failed to read coordinates: {}", path.display()))
}

fn read_ring_list(path: &Path) -> Result<Vec<Ring>> {
    let input = open_input(path)?;
    read_rings(input).with_context(|| format!("Failed to read ring list: {}", path.display()))
}

fn write_bond_table(path: &Path, bonds: &[Bond]) -> Result<()> {
    let writer = create_output(Some(path))?;
    write_connectivity(writer, bonds)
        .with_context(|| format!("Failed to write bond table: {}", path.display()))
}

fn write_bridge_list(path: Option<&Path>, resolved: &[RingBridges]) -> Result<()> {
    let writer = create_output(path)?;
    write_bridges(writer, resolved).context("Failed to write bridge list")
}

fn write_statistics(
    input: &Path,
    output_dir: Option<&Path>,
    stats: &RingStatistics,
    areas: &AreaStatistics,
) -> Result<[PathBuf; 2]> {
    let ring_path = artifact_path(input, output_dir, RING_HISTOGRAM_SUFFIX);
    write_ring_histogram(create_output(Some(&ring_path))?, stats)
        .with_context(|| format!("Failed to write ring histogram: {}", ring_path.display()))?;

    let area_path = artifact_path(input, output_dir, AREA_HISTOGRAM_SUFFIX);
    write_area_histogram(create_output(Some(&area_path))?, areas)
        .with_context(|| format!("Failed to write area histogram: {}", area_path.display()))?;

    Ok([ring_path, area_path])
}

fn resolve_rings(
    rings: &[Ring],
    slab: &Slab,
    graph: &BondGraph,
) -> (Vec<RingBridges>, Vec<RingFailure>) {
    let mut resolved = Vec::with_capacity(rings.len());
    let mut failures = Vec::new();

    for (i, ring) in rings.iter().enumerate() {
        let outcome = ring
            .check_bounds(slab.atom_count())
            .and_then(|()| silica_bridge::resolve(ring, graph));

        match outcome {
            Ok(bridges) => resolved.push(bridges),
            Err(error) => {
                let ring_number = i + 1;
                if error.is_resolution_failure() {
                    warn!(ring = ring_number, %error, "skipping ring with an unresolved edge");
                } else {
                    warn!(ring = ring_number, %error, "skipping ring that does not fit the slab");
                }
                failures.push(RingFailure { ring_number, error });
            }
        }
    }

    (resolved, failures)
}

fn build_detect_details(config: &ConnectConfig, total: usize, table: &Path) -> Vec<String> {
    let search = match config.strategy {
        Strategy::Exhaustive => "exhaustive",
        Strategy::Grid => "grid",
    };

    let mut details = vec![format!(
        "cutoff {:.4} Å ({:.4} Å², {} search)",
        config.cutoff.distance(),
        config.cutoff.squared(),
        search
    )];
    if !config.corrections.is_empty() {
        details.push(format!(
            "{} boundary correction(s) appended",
            config.corrections.len()
        ));
    }
    details.push(format!("{} bonds → {}", total, table.display()));
    details
}

fn build_resolve_details(resolved: usize, failed: usize, output: Option<&Path>) -> Vec<String> {
    let target = output
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());

    let mut details = vec![format!("{} ring(s) resolved", resolved)];
    if failed > 0 {
        details.push(format!("{} ring(s) skipped", failed));
    }
    details.push(format!("bridges → {}", target));
    details
}
