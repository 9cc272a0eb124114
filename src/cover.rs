//! Exact search of the minimal covers of a [CoverMatrix].

use crate::error::EkspressoError;
use crate::matrix::CoverMatrix;
use bit_set::BitSet;
use itertools::Itertools;
use log::trace;

impl<L> CoverMatrix<L> {
    /// Test if selecting the given columns hits every row
    pub fn is_covered_by(&self, columns: &[usize]) -> bool {
        let selection: BitSet = columns.iter().copied().collect();
        self.rows.iter().all(|row| !row.is_disjoint(&selection))
    }

    /// Find all selections of columns of minimal size hitting every row.
    ///
    /// Selections of increasing size are enumerated in lexicographic order of column indices and
    /// the search stops at the first size for which a selection is found. All selections of this size are
    /// returned, in the same order. A matrix without rows is covered by the empty selection.
    ///
    /// The search is exponential in the number of columns. It fails with
    /// [UndefinedBehavior](EkspressoError::UndefinedBehavior) if even the selection of all columns
    /// misses a row.
    pub fn minimal_cover_columns(&self) -> Result<Vec<Vec<usize>>, EkspressoError> {
        if self.rows.is_empty() {
            return Ok(vec![vec![]]);
        }

        let count = self.column_count();
        for size in 1..=count {
            let covers: Vec<Vec<usize>> = (0..count)
                .combinations(size)
                .filter(|cols| self.is_covered_by(cols))
                .collect();
            if !covers.is_empty() {
                trace!("{} covers of size {} among {} columns", covers.len(), size, count);
                return Ok(covers);
            }
        }
        Err(EkspressoError::UndefinedBehavior(
            "no selection of columns covers the matrix",
        ))
    }
}

impl<L: Clone> CoverMatrix<L> {
    /// Find the labels of all minimal covers, see [CoverMatrix::minimal_cover_columns]
    pub fn minimal_covers(&self) -> Result<Vec<Vec<L>>, EkspressoError> {
        let covers = self
            .minimal_cover_columns()?
            .into_iter()
            .map(|cols| cols.into_iter().map(|c| self.labels[c].clone()).collect())
            .collect();
        Ok(covers)
    }
}
