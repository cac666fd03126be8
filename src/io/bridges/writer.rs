use crate::io::error::Error;
use crate::model::ring::RingBridges;
use std::io::Write;

/// Writes one line per ring, interleaving each ring atom with the bridge of
/// the edge leaving it: `r0 b0 r1 b1 ...`.
pub fn write<'a, W: Write>(
    mut writer: W,
    results: impl IntoIterator<Item = &'a RingBridges>,
) -> Result<(), Error> {
    for result in results {
        let line = result
            .pairs()
            .map(|(atom, bridge)| format!("{atom} {bridge}"))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connect::resolve_with_bonds;
    use crate::model::ring::Ring;
    use crate::model::system::Bond;

    #[test]
    fn interleaves_ring_and_bridges() {
        let bonds = [
            Bond::new(0, 1),
            Bond::new(2, 1),
            Bond::new(2, 3),
            Bond::new(4, 3),
            Bond::new(4, 5),
            Bond::new(0, 5),
        ];
        let ring = Ring::new(vec![0, 2, 4]).unwrap();
        let result = resolve_with_bonds(&ring, &bonds).unwrap();

        let mut buf = Vec::new();
        write(&mut buf, [&result]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0 1 2 3 4 5\n");
    }

    #[test]
    fn no_rings_writes_nothing() {
        let mut buf = Vec::new();
        write(&mut buf, std::iter::empty()).unwrap();
        assert!(buf.is_empty());
    }
}
