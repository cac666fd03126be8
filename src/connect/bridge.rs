//! Bridging-atom resolution for ring edges.
//!
//! For a ring edge `(a, b)`, the bridge is the atom bonded to both `a` and
//! `b`: the one partner that occurs exactly twice in the combined neighbor
//! multiset of the two endpoints. An edge with no such partner, or with
//! several, is an error for that edge; it is never dropped, so a result
//! always lines up position for position with its ring.

use std::collections::BTreeMap;

use tracing::trace;

use super::error::Error;
use super::graph::BondGraph;
use crate::model::ring::{Ring, RingBridges};
use crate::model::system::Bond;

/// Resolves every edge of `ring`, failing on the first unresolvable edge.
pub fn resolve(ring: &Ring, graph: &BondGraph) -> Result<RingBridges, Error> {
    let bridges = resolve_edges(ring, graph)
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RingBridges::new(ring.clone(), bridges))
}

/// Builds a [`BondGraph`] from `bonds` and resolves `ring` against it.
pub fn resolve_with_bonds(ring: &Ring, bonds: &[Bond]) -> Result<RingBridges, Error> {
    resolve(ring, &BondGraph::from_bonds(bonds))
}

/// Resolves each edge of `ring` independently, one result per edge in ring order.
pub fn resolve_edges(ring: &Ring, graph: &BondGraph) -> Vec<Result<usize, Error>> {
    ring.edges()
        .map(|(position, a, b)| resolve_edge(position, a, b, graph))
        .collect()
}

fn resolve_edge(position: usize, a: usize, b: usize, graph: &BondGraph) -> Result<usize, Error> {
    let mut multiplicity: BTreeMap<usize, usize> = BTreeMap::new();
    for &o in graph.oxygens_of(a).iter().chain(graph.oxygens_of(b)) {
        *multiplicity.entry(o).or_insert(0) += 1;
    }

    let candidates: Vec<usize> = multiplicity
        .into_iter()
        .filter_map(|(o, count)| (count == 2).then_some(o))
        .collect();

    trace!(
        position,
        a,
        b,
        degree_a = graph.degree(a),
        degree_b = graph.degree(b),
        ?candidates,
        "ring edge candidates"
    );

    match candidates.as_slice() {
        [bridge] => Ok(*bridge),
        [] => Err(Error::NoBridge { position, a, b }),
        _ => Err(Error::AmbiguousBridge {
            position,
            a,
            b,
            candidates,
        }),
    }
}
