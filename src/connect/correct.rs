use super::error::Error;
use crate::model::system::{Bond, CorrectionBond};

/// Appends `corrections` to `bonds` unconditionally.
///
/// No geometry test and no deduplication: a correction that repeats a
/// detected bond appears twice.
pub fn augment(mut bonds: Vec<Bond>, corrections: &[CorrectionBond]) -> Vec<Bond> {
    bonds.extend_from_slice(corrections);
    bonds
}

/// Checks that every correction addresses one of `atom_count` atoms.
pub fn validate(corrections: &[CorrectionBond], atom_count: usize) -> Result<(), Error> {
    match corrections
        .iter()
        .find(|c| c.si >= atom_count || c.o >= atom_count)
    {
        Some(c) => Err(Error::CorrectionOutOfRange {
            si: c.si,
            o: c.o,
            atom_count,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn augment_appends_in_order() {
        let bonds = vec![Bond::new(0, 1), Bond::new(2, 1)];
        let corrections = [Bond::new(4, 5), Bond::new(6, 5)];
        let out = augment(bonds, &corrections);
        assert_eq!(
            out,
            vec![
                Bond::new(0, 1),
                Bond::new(2, 1),
                Bond::new(4, 5),
                Bond::new(6, 5)
            ]
        );
    }

    #[test]
    fn augment_keeps_duplicates() {
        let out = augment(vec![Bond::new(0, 1)], &[Bond::new(0, 1)]);
        assert_eq!(out, vec![Bond::new(0, 1), Bond::new(0, 1)]);
    }

    #[test]
    fn augment_with_no_corrections_is_identity() {
        let bonds = vec![Bond::new(3, 4)];
        assert_eq!(augment(bonds.clone(), &[]), bonds);
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let corrections = [Bond::new(1, 2), Bond::new(3, 10)];
        assert!(matches!(
            validate(&corrections, 10),
            Err(Error::CorrectionOutOfRange {
                si: 3,
                o: 10,
                atom_count: 10
            })
        ));
        assert!(validate(&corrections, 11).is_ok());
    }
}
