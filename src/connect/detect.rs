//! Distance-threshold Si–O bond detection.

use tracing::debug;

use super::config::{Cutoff, Strategy};
use super::error::Error;
use super::spatial::SpatialGrid;
use crate::model::atom::Atom;
use crate::model::system::Bond;
use crate::model::types::Species;

/// Relative padding on grid cells so rounding cannot push a true neighbor two cells away.
const GRID_SLACK: f64 = 1e-6;

/// Emits `(si, o)` for every Si/O pair whose squared distance is strictly
/// below `cutoff.squared()`.
///
/// Each pair is tested once, so the result holds no duplicates. Output is
/// ordered by Si index, then O index, for either strategy. Only the grid
/// strategy can fail, when the cutoff cannot size a grid cell.
pub fn detect(atoms: &[Atom], cutoff: Cutoff, strategy: Strategy) -> Result<Vec<Bond>, Error> {
    let bonds = match strategy {
        Strategy::Exhaustive => detect_exhaustive(atoms, cutoff),
        Strategy::Grid => detect_grid(atoms, cutoff)?,
    };

    debug!(
        atoms = atoms.len(),
        cutoff_sq = cutoff.squared(),
        ?strategy,
        bonds = bonds.len(),
        "detected Si-O bonds"
    );

    Ok(bonds)
}

fn detect_exhaustive(atoms: &[Atom], cutoff: Cutoff) -> Vec<Bond> {
    let limit = cutoff.squared();
    let mut bonds = Vec::new();

    for (i, si) in atoms.iter().enumerate() {
        if si.species != Species::Si {
            continue;
        }
        for (j, o) in atoms.iter().enumerate() {
            if o.species != Species::O {
                continue;
            }
            if si.distance_squared(o) < limit {
                bonds.push(Bond::new(i, j));
            }
        }
    }

    bonds
}

fn detect_grid(atoms: &[Atom], cutoff: Cutoff) -> Result<Vec<Bond>, Error> {
    let limit = cutoff.squared();
    let mut grid = SpatialGrid::new(cutoff.distance() * (1.0 + GRID_SLACK))?;
    for (j, atom) in atoms.iter().enumerate() {
        if atom.species == Species::O {
            grid.insert(j, atom.position);
        }
    }

    let mut bonds = Vec::new();
    let mut hits = Vec::new();
    for (i, si) in atoms.iter().enumerate() {
        if si.species != Species::Si {
            continue;
        }
        hits.clear();
        grid.for_each_candidate(si.position, |j| {
            if si.distance_squared(&atoms[j]) < limit {
                hits.push(j);
            }
        });
        hits.sort_unstable();
        bonds.extend(hits.iter().map(|&j| Bond::new(i, j)));
    }

    Ok(bonds)
}
