use crate::io::{Format, error::Error};
use crate::model::{atom::Atom, system::Slab, types::Species};
use std::io::BufRead;
use std::str::FromStr;

/// Reads an XYZ coordinate file: atom count, title, then `symbol x y z` records.
///
/// Columns past `z` are ignored, as are blank lines. Coordinates must be
/// finite, and the number of records must match the declared count.
pub fn read<R: BufRead>(reader: R) -> Result<Slab, Error> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let declared = match lines.next() {
        Some((ln, line)) => parse_count(&line?, ln)?,
        None => return Err(Error::parse(Format::Xyz, 1, "missing atom count line")),
    };

    let title = match lines.next() {
        Some((_, line)) => line?.trim().to_string(),
        None => String::new(),
    };

    let mut slab = Slab::with_title(title);
    slab.atoms.reserve(declared);

    for (ln, line) in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        slab.atoms.push(parse_atom(&line, ln)?);
    }

    if slab.atom_count() != declared {
        return Err(Error::CountMismatch {
            format: Format::Xyz,
            declared,
            found: slab.atom_count(),
        });
    }

    Ok(slab)
}

fn parse_count(line: &str, line_no: usize) -> Result<usize, Error> {
    line.split_whitespace()
        .next()
        .ok_or_else(|| Error::parse(Format::Xyz, line_no, "missing atom count"))?
        .parse::<usize>()
        .map_err(|_| Error::parse(Format::Xyz, line_no, "invalid atom count"))
}

fn parse_atom(line: &str, line_no: usize) -> Result<Atom, Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() < 4 {
        return Err(Error::parse(
            Format::Xyz,
            line_no,
            "atom record must contain a symbol and three coordinates",
        ));
    }

    let species = Species::from_str(tokens[0])
        .map_err(|e| Error::parse(Format::Xyz, line_no, e.to_string()))?;

    let mut position = [0.0; 3];
    for (axis, (slot, token)) in position.iter_mut().zip(&tokens[1..4]).enumerate() {
        let axis = ["x", "y", "z"][axis];
        let value = token.parse::<f64>().map_err(|_| {
            Error::parse(
                Format::Xyz,
                line_no,
                format!("invalid {axis} coordinate '{token}'"),
            )
        })?;
        if !value.is_finite() {
            return Err(Error::parse(
                Format::Xyz,
                line_no,
                format!("non-finite {axis} coordinate '{token}'"),
            ));
        }
        *slot = value;
    }

    Ok(Atom::new(species, position))
}
