mod bridge;
mod config;
mod correct;
mod detect;
mod error;
mod graph;
mod spatial;
mod stats;

pub use bridge::{resolve, resolve_edges, resolve_with_bonds};
pub use config::{ConnectConfig, CorrectionSet, Cutoff, Strategy};
pub use correct::{augment, validate as validate_corrections};
pub use detect::detect;
pub use error::Error;
pub use graph::BondGraph;
pub use stats::{AreaStatistics, RingStatistics, SizeArea, ring_area};

use tracing::debug;

use crate::model::system::{Bond, Slab};

/// Builds the full bond list of `slab`: distance detection followed by the
/// configured boundary corrections.
pub fn connect(slab: &Slab, config: &ConnectConfig) -> Result<Vec<Bond>, Error> {
    let corrections = &config.corrections.corrections;
    correct::validate(corrections, slab.atom_count())?;

    let detected = detect::detect(&slab.atoms, config.cutoff, config.strategy)?;
    let detected_count = detected.len();
    let bonds = correct::augment(detected, corrections);

    debug!(
        detected = detected_count,
        corrections = corrections.len(),
        total = bonds.len(),
        "assembled bond list"
    );

    Ok(bonds)
}
