use std::collections::BTreeMap;

use super::error::Error;
use crate::model::atom::Atom;
use crate::model::ring::Ring;

/// Ring-size distribution of a ring list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingStatistics {
    /// Ring size → number of rings of that size.
    pub histogram: BTreeMap<usize, usize>,
    pub ring_count: usize,
    /// Sum of all ring sizes.
    pub size_sum: usize,
    pub mean_size: f64,
    /// Second moment about the mean, μ₂ = Σ (n − ⟨n⟩)² p(n).
    pub second_moment: f64,
}

impl RingStatistics {
    pub fn from_rings<'a>(rings: impl IntoIterator<Item = &'a Ring>) -> Self {
        let mut histogram = BTreeMap::new();
        for ring in rings {
            *histogram.entry(ring.len()).or_insert(0) += 1;
        }
        Self::from_histogram(histogram)
    }

    pub fn from_histogram(histogram: BTreeMap<usize, usize>) -> Self {
        let ring_count: usize = histogram.values().sum();
        let size_sum: usize = histogram.iter().map(|(size, count)| size * count).sum();

        if ring_count == 0 {
            return Self {
                histogram,
                ..Self::default()
            };
        }

        let total = ring_count as f64;
        let mean_size = size_sum as f64 / total;
        let second_moment = histogram
            .iter()
            .map(|(&size, &count)| {
                let dev = size as f64 - mean_size;
                dev * dev * (count as f64 / total)
            })
            .sum();

        Self {
            histogram,
            ring_count,
            size_sum,
            mean_size,
            second_moment,
        }
    }

    /// Fraction of rings with `size` atoms.
    pub fn fraction(&self, size: usize) -> f64 {
        if self.ring_count == 0 {
            return 0.0;
        }
        self.histogram.get(&size).copied().unwrap_or(0) as f64 / self.ring_count as f64
    }
}

/// Area of `ring` as a polygon in the xy plane of the slab (shoelace formula).
///
/// Vertices are taken in ring order; a two-atom ring encloses no area.
pub fn ring_area(ring: &Ring, atoms: &[Atom]) -> Result<f64, Error> {
    ring.check_bounds(atoms.len())?;

    let twice_signed: f64 = ring
        .edges()
        .map(|(_, a, b)| {
            let [xa, ya, _] = atoms[a].position;
            let [xb, yb, _] = atoms[b].position;
            xa * yb - xb * ya
        })
        .sum();

    Ok(0.5 * twice_signed.abs())
}

/// Ring count and summed area for one ring size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeArea {
    pub count: usize,
    pub total: f64,
}

impl SizeArea {
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Ring areas grouped by ring size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaStatistics {
    pub by_size: BTreeMap<usize, SizeArea>,
    /// Sum of every ring area.
    pub total_area: f64,
}

impl AreaStatistics {
    /// Fails on the first ring that addresses an atom outside `atoms`.
    pub fn from_rings<'a>(
        rings: impl IntoIterator<Item = &'a Ring>,
        atoms: &[Atom],
    ) -> Result<Self, Error> {
        let mut stats = Self::default();
        for ring in rings {
            let area = ring_area(ring, atoms)?;
            let entry = stats.by_size.entry(ring.len()).or_default();
            entry.count += 1;
            entry.total += area;
            stats.total_area += area;
        }
        Ok(stats)
    }

    /// Mean area of rings with `size` atoms, 0 when there are none.
    pub fn mean_area(&self, size: usize) -> f64 {
        self.by_size.get(&size).map(SizeArea::mean).unwrap_or(0.0)
    }
}
