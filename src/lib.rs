//! Si–O connectivity and bridging-oxygen resolution for silica bilayer slabs.
//!
//! Starting from raw coordinates of a two-species slab, the crate detects every
//! silicon–oxygen bond within a distance cutoff, appends any boundary
//! corrections the model needs, and then, for each supplied ring of silicon
//! atoms, finds the oxygen that bridges every pair of consecutive ring atoms.
//!
//! # Quick Start
//!
//! ```
//! use silica_bridge::{Atom, Slab, Species, Ring};
//! use silica_bridge::{connect, resolve_with_bonds, ConnectConfig, Cutoff, ConnectError};
//!
//! // Two silicons sharing one oxygen, plus a distant oxygen.
//! let mut slab = Slab::new();
//! slab.atoms.push(Atom::new(Species::Si, [0.0, 0.0, 0.0]));
//! slab.atoms.push(Atom::new(Species::O, [0.9, 0.0, 0.0]));
//! slab.atoms.push(Atom::new(Species::Si, [1.8, 0.0, 0.0]));
//! slab.atoms.push(Atom::new(Species::O, [0.9, 1.5, 0.0]));
//!
//! let config = ConnectConfig {
//!     cutoff: Cutoff::from_distance(1.0)?,
//!     ..ConnectConfig::default()
//! };
//! let bonds = connect(&slab, &config)?;
//! assert_eq!(bonds.len(), 2);
//!
//! // A degenerate two-atom ring: both edges are bridged by oxygen 1.
//! let ring = Ring::new(vec![0, 2])?;
//! let bridges = resolve_with_bonds(&ring, &bonds)?;
//! assert_eq!(bridges.bridges(), &[1, 1]);
//! # Ok::<(), ConnectError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — XYZ, ring-list, connectivity table and bridge-list text formats
//! - [`connect`] — Bond pipeline (`connect`) and ring bridge resolution
//!
//! # Data Types
//!
//! - [`Slab`] — Title plus the immutable atom list
//! - [`Atom`] — Species and Cartesian position
//! - [`Species`] — Silicon or oxygen
//! - [`Bond`] — `(si, o)` index pair, detected or supplied as a correction
//! - [`Ring`] — Validated cyclic sequence of ring atoms
//! - [`RingBridges`] — One bridging atom per ring edge
//! - [`RingStatistics`], [`AreaStatistics`] — Ring-size distribution and ring areas
//!
//! # Configuration
//!
//! - [`ConnectConfig`] — Cutoff, neighbor search strategy and corrections
//! - [`Cutoff`] — Detection threshold with explicit linear or squared units
//! - [`Strategy`] — Exhaustive pair scan or spatial grid
//! - [`CorrectionSet`] — Boundary corrections loaded from TOML

pub mod connect;
pub mod io;
mod model;

pub use model::atom::Atom;
pub use model::ring::{Ring, RingBridges};
pub use model::system::{Bond, CorrectionBond, Slab};
pub use model::types::{ParseSpeciesError, Species};

pub use connect::{
    AreaStatistics, BondGraph, ConnectConfig, CorrectionSet, Cutoff, RingStatistics, SizeArea,
    Strategy, connect, detect, resolve, resolve_edges, resolve_with_bonds, ring_area,
};

pub use connect::Error as ConnectError;
