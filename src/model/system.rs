use super::atom::Atom;
use super::types::Species;
use serde::Deserialize;

/// A detected or supplied Si–O connection, stored as `(si, o)` atom indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub struct Bond {
    pub si: usize,
    pub o: usize,
}

impl Bond {
    pub fn new(si: usize, o: usize) -> Self {
        Self { si, o }
    }
}

/// A bond appended outside the distance rule to patch slab-boundary truncation.
pub type CorrectionBond = Bond;

#[derive(Debug, Clone, Default)]
pub struct Slab {
    pub title: String,
    pub atoms: Vec<Atom>,
}

impl Slab {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            atoms: Vec::new(),
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    pub fn count_of(&self, species: Species) -> usize {
        self.atoms.iter().filter(|a| a.species == species).count()
    }
}
