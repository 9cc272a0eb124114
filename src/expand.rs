//! Expansion of a single minterm of the ON-set into implicants avoiding the whole OFF-set.
//!
//! For a minterm `f`, each minterm `r` of the OFF-set yields a row `f xor r` marking the positions where
//! they differ. A product of literals of `f` excludes `r` if and only if it fixes one of these positions:
//! the smallest implicants containing `f` are given by the minimal covers of this difference matrix.

use crate::bits::BitVector;
use crate::cube::{Cube, Literal};
use crate::error::EkspressoError;
use crate::matrix::CoverMatrix;
use log::trace;

/// Select which implicants are kept when several covers of the same size exist
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExpansionMode {
    /// Keep every minimal implicant
    AllTies,
    /// Keep only the first minimal implicant found
    FirstOnly,
}

/// Build the difference matrix of a minterm against the OFF-set.
///
/// Column `k` is labelled by the literal stating the value of the minterm at position `k`.
pub fn difference_matrix(minterm: &BitVector, off: &[BitVector]) -> CoverMatrix<Literal> {
    let labels = (0..minterm.width())
        .map(|pos| Literal::new(minterm.variable(pos), minterm.get(pos)))
        .collect();
    let rows = off.iter().map(|r| r.xor(minterm).bits).collect();
    CoverMatrix::new(rows, labels)
}

/// Find the implicants of minimal size containing the minterm and no minterm of the OFF-set.
///
/// Every returned cube contains the same number of literals.
pub fn expand_minterm(
    minterm: &BitVector,
    off: &[BitVector],
    mode: ExpansionMode,
) -> Result<Vec<Cube>, EkspressoError> {
    let width = minterm.width();
    let mut matrix = difference_matrix(minterm, off);
    matrix.reduce_dominated();
    matrix.sort_columns_by_weight();
    let mandatory = matrix.extract_mandatory()?;

    if matrix.column_count() == 0 {
        return Ok(vec![Cube::from_literals(width, &mandatory)]);
    }

    let mut covers = matrix.minimal_covers()?;
    if mode == ExpansionMode::FirstOnly {
        covers.truncate(1);
    }
    trace!("{}: {} candidate implicants", minterm, covers.len());

    let cubes = covers
        .iter()
        .map(|cover| Cube::from_literals(width, mandatory.iter().chain(cover)))
        .collect();
    Ok(cubes)
}

#[cfg(test)]
mod tests {
    use crate::bits::{encode, BitVector};
    use crate::cube::Cube;
    use crate::error::EkspressoError;
    use crate::expand::*;

    fn vectors(values: &[u64], width: usize) -> Vec<BitVector> {
        values.iter().map(|n| encode(*n, width)).collect()
    }

    fn cubes(descr: &[&str]) -> Vec<Cube> {
        descr.iter().map(|d| d.parse().unwrap()).collect()
    }

    #[test]
    fn difference_rows_and_labels() {
        let m = difference_matrix(&encode(0b101, 3), &vectors(&[0b100, 0b011], 3));
        let labels: Vec<String> = m.labels().iter().map(|l| l.to_string()).collect();
        assert_eq!(labels, ["x2", "x1`", "x0"]);
        let rows: Vec<Vec<usize>> = m.rows().iter().map(|r| r.iter().collect()).collect();
        assert_eq!(rows, [vec![2], vec![0, 1]]);
    }

    #[test]
    fn single_literal() -> Result<(), EkspressoError> {
        let off = vectors(&[4, 5, 6, 7], 3);
        for f in 0..4 {
            let found = expand_minterm(&encode(f, 3), &off, ExpansionMode::AllTies)?;
            assert_eq!(found, cubes(&["0--"]));
        }
        Ok(())
    }

    #[test]
    fn ties_are_kept_or_dropped() -> Result<(), EkspressoError> {
        // 011 against 000 can be separated by x1 or by x0
        let off = vectors(&[0], 3);
        let f = encode(0b011, 3);
        let all = expand_minterm(&f, &off, ExpansionMode::AllTies)?;
        assert_eq!(all, cubes(&["-1-", "--1"]));
        let first = expand_minterm(&f, &off, ExpansionMode::FirstOnly)?;
        assert_eq!(first, cubes(&["-1-"]));
        Ok(())
    }

    #[test]
    fn mandatory_and_chosen_literals() -> Result<(), EkspressoError> {
        // 1100 must differ from 0100 at position 0, and from 1111 at position 2 or 3
        let off = vectors(&[0b0100, 0b1111], 4);
        let found = expand_minterm(&encode(0b1100, 4), &off, ExpansionMode::AllTies)?;
        assert_eq!(found, cubes(&["1-0-", "1--0"]));
        Ok(())
    }

    #[test]
    fn empty_off_set() -> Result<(), EkspressoError> {
        let found = expand_minterm(&encode(2, 2), &[], ExpansionMode::AllTies)?;
        assert_eq!(found, [Cube::universe(2)]);
        Ok(())
    }

    #[test]
    fn minterm_in_off_set_is_a_defect() {
        let f = encode(3, 3);
        let off = vec![encode(1, 3), f.clone()];
        let err = expand_minterm(&f, &off, ExpansionMode::AllTies).unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn implicants_avoid_off_set() -> Result<(), EkspressoError> {
        let width = 8;
        let off = vectors(&[5, 6, 45, 56, 145], width);
        for f in [1, 2, 59, 228] {
            let f = encode(f, width);
            for cube in expand_minterm(&f, &off, ExpansionMode::AllTies)? {
                assert!(cube.matches(&f));
                assert!(off.iter().all(|r| !cube.matches(r)), "{} hits the OFF-set", cube);
            }
        }
        Ok(())
    }
}
