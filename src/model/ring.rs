use std::collections::HashSet;

use crate::connect::Error;

/// An ordered, cyclic sequence of silicon atom indices.
///
/// Position `i` is adjacent to `i + 1`, and the last position wraps around to
/// the first. A ring holds at least two atoms and never repeats an index; a
/// two-atom ring is a degenerate cycle whose two edges join the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ring {
    atoms: Vec<usize>,
}

impl Ring {
    pub const MIN_LEN: usize = 2;

    pub fn new(atoms: Vec<usize>) -> Result<Self, Error> {
        if atoms.len() < Self::MIN_LEN {
            return Err(Error::RingTooShort { len: atoms.len() });
        }

        let mut seen = HashSet::with_capacity(atoms.len());
        for &idx in &atoms {
            if !seen.insert(idx) {
                return Err(Error::RepeatedRingAtom { atom: idx });
            }
        }

        Ok(Self { atoms })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn atoms(&self) -> &[usize] {
        &self.atoms
    }

    /// Iterates `(position, a, b)` over every ring edge, `b` being the
    /// successor of `a` with wrap-around.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
        let n = self.atoms.len();
        (0..n).map(move |i| (i, self.atoms[i], self.atoms[(i + 1) % n]))
    }

    /// Fails with the first index that does not address one of `atom_count` atoms.
    pub fn check_bounds(&self, atom_count: usize) -> Result<(), Error> {
        match self.atoms.iter().find(|&&idx| idx >= atom_count) {
            Some(&atom) => Err(Error::RingAtomOutOfRange { atom, atom_count }),
            None => Ok(()),
        }
    }
}

/// The bridging atom of every ring edge, in ring order.
///
/// Only produced when all edges resolve, so `bridges().len() == ring().len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingBridges {
    ring: Ring,
    bridges: Vec<usize>,
}

impl RingBridges {
    pub(crate) fn new(ring: Ring, bridges: Vec<usize>) -> Self {
        debug_assert_eq!(ring.len(), bridges.len());
        Self { ring, bridges }
    }

    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    pub fn bridges(&self) -> &[usize] {
        &self.bridges
    }

    /// Pairs each ring atom with the bridge of the edge that leaves it.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.ring
            .atoms()
            .iter()
            .copied()
            .zip(self.bridges.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_rejects_short_sequences() {
        assert!(matches!(
            Ring::new(vec![]),
            Err(Error::RingTooShort { len: 0 })
        ));
        assert!(matches!(
            Ring::new(vec![4]),
            Err(Error::RingTooShort { len: 1 })
        ));
    }

    #[test]
    fn ring_rejects_repeated_atoms() {
        assert!(matches!(
            Ring::new(vec![1, 2, 1]),
            Err(Error::RepeatedRingAtom { atom: 1 })
        ));
    }

    #[test]
    fn edges_wrap_around() {
        let ring = Ring::new(vec![10, 20, 30]).unwrap();
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges, vec![(0, 10, 20), (1, 20, 30), (2, 30, 10)]);
    }

    #[test]
    fn degenerate_two_cycle_has_two_edges() {
        let ring = Ring::new(vec![0, 2]).unwrap();
        let edges: Vec<_> = ring.edges().collect();
        assert_eq!(edges, vec![(0, 0, 2), (1, 2, 0)]);
    }

    #[test]
    fn check_bounds_reports_first_offender() {
        let ring = Ring::new(vec![0, 7, 9]).unwrap();
        assert!(ring.check_bounds(10).is_ok());
        assert!(matches!(
            ring.check_bounds(8),
            Err(Error::RingAtomOutOfRange {
                atom: 9,
                atom_count: 8
            })
        ));
    }

    #[test]
    fn pairs_interleave_ring_and_bridges() {
        let ring = Ring::new(vec![0, 2, 4]).unwrap();
        let result = RingBridges::new(ring, vec![1, 3, 5]);
        let pairs: Vec<_> = result.pairs().collect();
        assert_eq!(pairs, vec![(0, 1), (2, 3), (4, 5)]);
    }
}
