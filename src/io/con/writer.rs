use crate::io::error::Error;
use crate::model::system::Bond;
use std::io::Write;

/// Writes the bond count followed by one `si o` pair per line.
pub fn write<W: Write>(mut writer: W, bonds: &[Bond]) -> Result<(), Error> {
    writeln!(writer, "{}", bonds.len())?;
    for bond in bonds {
        writeln!(writer, "{} {}", bond.si, bond.o)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_count_then_pairs() {
        let mut buf = Vec::new();
        write(&mut buf, &[Bond::new(0, 1), Bond::new(2, 1), Bond::new(963, 2382)]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "3\n0 1\n2 1\n963 2382\n");
    }

    #[test]
    fn empty_table_writes_zero_count() {
        let mut buf = Vec::new();
        write(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0\n");
    }
}
