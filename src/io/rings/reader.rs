use crate::io::{Format, error::Error};
use crate::model::ring::Ring;
use std::io::BufRead;

/// Reads one ring per line as whitespace-separated atom indices.
///
/// Blank lines carry no ring and are skipped.
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Ring>, Error> {
    let mut rings = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let ln = i + 1;
        if line.trim().is_empty() {
            continue;
        }

        let atoms = line
            .split_whitespace()
            .map(|token| {
                token.parse::<usize>().map_err(|_| {
                    Error::parse(
                        Format::RingList,
                        ln,
                        format!("invalid atom index '{token}'"),
                    )
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ring =
            Ring::new(atoms).map_err(|e| Error::parse(Format::RingList, ln, e.to_string()))?;
        rings.push(ring);
    }

    Ok(rings)
}
