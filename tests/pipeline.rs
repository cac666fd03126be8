//! End-to-end runs of the read → connect → resolve → write pipeline on small slabs.

use std::fs::{self, File};
use std::io::{BufReader, Cursor};

use silica_bridge::io::{self, Format};
use silica_bridge::{
    BondGraph, ConnectConfig, ConnectError, CorrectionSet, Cutoff, Ring, RingStatistics, Strategy,
    connect, resolve,
};

const SCENARIO_A: &str = "4
scenario A
Si 0.0 0.0 0.0
O  0.9 0.0 0.0
Si 1.8 0.0 0.0
O  0.9 1.5 0.0
";

// Three silicons on an equilateral triangle with an oxygen on every edge midpoint.
const TRIANGLE: &str = "6
triangle
Si 0.0  0.0   0.0
Si 3.0  0.0   0.0
Si 1.5  2.598 0.0
O  1.5  0.0   0.0
O  2.25 1.299 0.0
O  0.75 1.299 0.0
";

fn config(cutoff: Cutoff, strategy: Strategy) -> ConnectConfig {
    ConnectConfig {
        cutoff,
        strategy,
        ..ConnectConfig::default()
    }
}

#[test]
fn scenario_a_resolves_two_cycle() {
    let slab = io::read_xyz(Cursor::new(SCENARIO_A)).unwrap();
    let cutoff = Cutoff::from_squared(1.0).unwrap();

    for strategy in [Strategy::Exhaustive, Strategy::Grid] {
        let bonds = connect(&slab, &config(cutoff, strategy)).unwrap();
        assert_eq!(bonds.len(), 2);

        let graph = BondGraph::from_bonds(&bonds);
        let ring = Ring::new(vec![0, 2]).unwrap();
        let result = resolve(&ring, &graph).unwrap();
        assert_eq!(result.bridges(), &[1, 1]);
    }
}

#[test]
fn scenario_b_empty_ring_list_writes_nothing() {
    let rings = io::read_rings(Cursor::new("")).unwrap();
    assert!(rings.is_empty());

    let mut out = Vec::new();
    io::write_bridges(&mut out, &[]).unwrap();
    assert!(out.is_empty());

    let stats = RingStatistics::from_rings(&rings);
    assert_eq!(stats.ring_count, 0);
    assert_eq!(stats.mean_size, 0.0);
}

#[test]
fn scenario_c_short_coordinate_file_is_rejected() {
    let text = "5\nshort\nSi 0 0 0\nO 1 0 0\nSi 2 0 0\nO 3 0 0\n";
    let err = io::read_xyz(Cursor::new(text)).unwrap_err();
    assert!(matches!(
        err,
        io::Error::CountMismatch {
            format: Format::Xyz,
            declared: 5,
            found: 4,
        }
    ));
}

#[test]
fn triangle_ring_writes_interleaved_bridges() {
    let slab = io::read_xyz(Cursor::new(TRIANGLE)).unwrap();
    let bonds = connect(
        &slab,
        &config(Cutoff::from_distance(1.6).unwrap(), Strategy::Grid),
    )
    .unwrap();
    assert_eq!(bonds.len(), 6);

    let rings = io::read_rings(Cursor::new("0 1 2\n")).unwrap();
    let graph = BondGraph::from_bonds(&bonds);
    let results: Vec<_> = rings.iter().map(|r| resolve(r, &graph).unwrap()).collect();

    let mut out = Vec::new();
    io::write_bridges(&mut out, &results).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "0 3 1 4 2 5\n");
}

#[test]
fn bond_table_round_trips_through_a_file() {
    let slab = io::read_xyz(Cursor::new(TRIANGLE)).unwrap();
    let bonds = connect(&slab, &config(Cutoff::from_distance(1.6).unwrap(), Strategy::Exhaustive))
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(format!("triangle.{}", Format::Connectivity.extension()));
    io::write_connectivity(File::create(&path).unwrap(), &bonds).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("6\n"));

    let read_back = io::read_connectivity(BufReader::new(File::open(&path).unwrap())).unwrap();
    assert_eq!(read_back, bonds);
}

#[test]
fn corrections_restore_a_missing_boundary_bridge() {
    // Oxygen 5 sits too far from silicon 0 for the cutoff, as at a slab edge.
    let text = TRIANGLE.replace("O  0.75 1.299 0.0", "O  1.0  1.9   0.0");
    let slab = io::read_xyz(Cursor::new(text)).unwrap();
    let ring = Ring::new(vec![0, 1, 2]).unwrap();
    let cutoff = Cutoff::from_distance(1.6).unwrap();

    let plain = connect(&slab, &config(cutoff, Strategy::Exhaustive)).unwrap();
    let err = resolve(&ring, &BondGraph::from_bonds(&plain)).unwrap_err();
    assert!(matches!(err, ConnectError::NoBridge { position: 2, a: 2, b: 0 }));

    let corrections = CorrectionSet::from_toml_str("[[corrections]]\nsi = 0\no = 5\n").unwrap();
    let patched = connect(
        &slab,
        &ConnectConfig {
            cutoff,
            strategy: Strategy::Exhaustive,
            corrections,
        },
    )
    .unwrap();
    let result = resolve(&ring, &BondGraph::from_bonds(&patched)).unwrap();
    assert_eq!(result.bridges(), &[3, 4, 5]);
}

#[test]
fn out_of_range_correction_is_rejected() {
    let slab = io::read_xyz(Cursor::new(SCENARIO_A)).unwrap();
    let corrections = CorrectionSet::from_toml_str("[[corrections]]\nsi = 0\no = 40\n").unwrap();
    let err = connect(
        &slab,
        &ConnectConfig {
            corrections,
            ..ConnectConfig::default()
        },
    )
    .unwrap_err();
    assert!(matches!(err, ConnectError::CorrectionOutOfRange { o: 40, .. }));
}
