//! Error types for connectivity detection and ring bridge resolution.
//!
//! Errors are grouped by stage: configuration (cutoff and correction list),
//! ring validation, and per-edge bridge resolution.

use thiserror::Error;

/// Errors that can occur while building or querying slab connectivity.
#[derive(Debug, Error)]
pub enum Error {
    /// The detection cutoff is not a finite, positive number.
    #[error("invalid bond cutoff {value}: must be finite and greater than zero")]
    InvalidCutoff {
        /// The rejected value, in the units it was supplied in.
        value: f64,
    },

    /// Failed to parse a correction list TOML document.
    #[error("failed to parse correction list: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A correction bond addresses an atom the slab does not have.
    #[error(
        "correction bond ({si}, {o}) references an atom outside the slab ({atom_count} atoms)"
    )]
    CorrectionOutOfRange {
        /// Silicon-side index of the correction.
        si: usize,
        /// Oxygen-side index of the correction.
        o: usize,
        /// Number of atoms in the slab.
        atom_count: usize,
    },

    /// A ring holds fewer atoms than a cycle needs.
    #[error("ring has {len} atom(s); at least 2 are required")]
    RingTooShort {
        /// Number of atoms supplied.
        len: usize,
    },

    /// A ring visits the same atom more than once.
    #[error("ring visits atom {atom} more than once")]
    RepeatedRingAtom {
        /// The repeated atom index.
        atom: usize,
    },

    /// A ring references an atom the slab does not have.
    #[error("ring atom {atom} is outside the slab ({atom_count} atoms)")]
    RingAtomOutOfRange {
        /// The offending index.
        atom: usize,
        /// Number of atoms in the slab.
        atom_count: usize,
    },

    /// No atom is bonded to both endpoints of a ring edge.
    #[error("no bridging atom between ring atoms {a} and {b} (edge {position})")]
    NoBridge {
        /// Edge position within the ring.
        position: usize,
        /// Edge start atom.
        a: usize,
        /// Edge end atom.
        b: usize,
    },

    /// More than one atom is bonded to both endpoints of a ring edge.
    #[error(
        "ambiguous bridge between ring atoms {a} and {b} (edge {position}): candidates {candidates:?}"
    )]
    AmbiguousBridge {
        /// Edge position within the ring.
        position: usize,
        /// Edge start atom.
        a: usize,
        /// Edge end atom.
        b: usize,
        /// Every qualifying atom, ascending.
        candidates: Vec<usize>,
    },
}

impl Error {
    /// Returns `true` for the per-edge resolution failures.
    pub fn is_resolution_failure(&self) -> bool {
        matches!(self, Error::NoBridge { .. } | Error::AmbiguousBridge { .. })
    }
}
