use std::collections::HashMap;

use crate::model::system::Bond;

/// Endpoint index over a bond list.
///
/// Neighbor lists are multisets in bond-list order: a bond listed twice
/// contributes its partner twice.
#[derive(Debug, Clone, Default)]
pub struct BondGraph {
    by_si: HashMap<usize, Vec<usize>>,
    by_o: HashMap<usize, Vec<usize>>,
    bond_count: usize,
}

impl BondGraph {
    pub fn from_bonds(bonds: &[Bond]) -> Self {
        let mut graph = Self::default();
        for bond in bonds {
            graph.by_si.entry(bond.si).or_default().push(bond.o);
            graph.by_o.entry(bond.o).or_default().push(bond.si);
        }
        graph.bond_count = bonds.len();
        graph
    }

    /// Oxygen-side partners of silicon-side atom `si`.
    pub fn oxygens_of(&self, si: usize) -> &[usize] {
        self.by_si.get(&si).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Silicon-side partners of oxygen-side atom `o`.
    pub fn silicons_of(&self, o: usize) -> &[usize] {
        self.by_o.get(&o).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bond_count
    }

    /// Number of bonds touching `idx` on either side.
    pub fn degree(&self, idx: usize) -> usize {
        self.oxygens_of(idx).len() + self.silicons_of(idx).len()
    }
}
