use crate::io::{Format, error::Error};
use crate::model::system::Bond;
use std::io::BufRead;

/// Reads a bond table written by [`super::writer::write`].
pub fn read<R: BufRead>(reader: R) -> Result<Vec<Bond>, Error> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let declared = match lines.next() {
        Some((ln, line)) => line?
            .trim()
            .parse::<usize>()
            .map_err(|_| Error::parse(Format::Connectivity, ln, "invalid bond count"))?,
        None => {
            return Err(Error::parse(
                Format::Connectivity,
                1,
                "missing bond count line",
            ));
        }
    };

    let mut bonds = Vec::with_capacity(declared);
    for (ln, line) in lines {
        let line = line?;
        let tokens: Vec<_> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [si, o] => {
                let si = si
                    .parse::<usize>()
                    .map_err(|_| Error::parse(Format::Connectivity, ln, "invalid Si index"))?;
                let o = o
                    .parse::<usize>()
                    .map_err(|_| Error::parse(Format::Connectivity, ln, "invalid O index"))?;
                bonds.push(Bond::new(si, o));
            }
            _ => {
                return Err(Error::parse(
                    Format::Connectivity,
                    ln,
                    "bond line must contain exactly two indices",
                ));
            }
        }
    }

    if bonds.len() != declared {
        return Err(Error::CountMismatch {
            format: Format::Connectivity,
            declared,
            found: bonds.len(),
        });
    }

    Ok(bonds)
}
