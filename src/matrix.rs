//! Boolean covering matrices and the reductions applied before searching for a cover.
//!
//! A [CoverMatrix] lists rows which must all be *hit*, and labelled columns which can be selected.
//! A row is hit by a selection of columns if it is set in at least one of them.
//! The same structure is used for two problems:
//!
//! * separating one minterm of the ON-set from the OFF-set: each row marks the positions where an
//!   OFF-set minterm differs, and each column is a literal of the ON-set minterm;
//! * covering the ON-set with implicants: each row is a minterm and each column is an implicant.
//!
//! The reductions implemented here shrink the matrix without changing its minimal covers.

use crate::bits::lexicographic;
use crate::error::EkspressoError;
use bit_set::BitSet;
use log::trace;

/// Rows to hit (as sets of column indices) and the labels of the columns.
#[derive(Clone, Debug)]
pub struct CoverMatrix<L> {
    pub(crate) rows: Vec<BitSet>,
    pub(crate) labels: Vec<L>,
}

impl<L> CoverMatrix<L> {
    /// Create a matrix from its rows and column labels.
    ///
    /// Each row lists the indices of the columns which hit it, these indices must be lower than the number of labels.
    pub fn new(rows: Vec<BitSet>, labels: Vec<L>) -> Self {
        debug_assert!(rows
            .iter()
            .all(|row| row.iter().all(|col| col < labels.len())));
        Self { rows, labels }
    }

    /// Create a matrix by testing if each column hits each row
    pub fn from_relation<R>(rows: &[R], labels: Vec<L>, hits: impl Fn(&R, &L) -> bool) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                labels
                    .iter()
                    .enumerate()
                    .filter(|(_, l)| hits(row, l))
                    .map(|(col, _)| col)
                    .collect()
            })
            .collect();
        Self { rows, labels }
    }

    pub fn rows(&self) -> &[BitSet] {
        &self.rows
    }

    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of rows hit by a column
    pub fn column_weight(&self, col: usize) -> usize {
        self.rows.iter().filter(|row| row.contains(col)).count()
    }

    /// Remove rows which are hit whenever another row is hit.
    ///
    /// See [reduce_dominated] for details.
    pub fn reduce_dominated(&mut self) {
        let before = self.rows.len();
        self.rows = reduce_dominated(std::mem::take(&mut self.rows));
        trace!("dominance: {} -> {} rows", before, self.rows.len());
    }

    /// Reorder the columns by decreasing weight, columns of equal weight keep their relative order.
    ///
    /// This only changes the order in which covers are enumerated.
    pub fn sort_columns_by_weight(&mut self) {
        let mut order: Vec<usize> = (0..self.labels.len()).collect();
        let weights: Vec<usize> = order.iter().map(|c| self.column_weight(*c)).collect();
        order.sort_by(|a, b| weights[*b].cmp(&weights[*a]));

        self.rows = self
            .rows
            .iter()
            .map(|row| {
                order
                    .iter()
                    .enumerate()
                    .filter(|(_, old)| row.contains(**old))
                    .map(|(new, _)| new)
                    .collect()
            })
            .collect();

        let mut labels: Vec<Option<L>> = self.labels.drain(..).map(Some).collect();
        self.labels = order.iter().filter_map(|old| labels[*old].take()).collect();
    }

    /// Remove a column and shift the following ones, returning its label
    pub fn remove_column(&mut self, col: usize) -> L {
        for row in self.rows.iter_mut() {
            *row = row
                .iter()
                .filter(|c| *c != col)
                .map(|c| if c > col { c - 1 } else { c })
                .collect();
        }
        self.labels.remove(col)
    }

    /// Extract the columns which must be part of any cover.
    ///
    /// Columns hitting no row are discarded first (from the last to the first).
    /// Rows are then visited once, from the last to the first: a row hit by a single column forces
    /// the selection of this column, the row is removed and the column is moved to the returned list.
    /// Rows visited before a column is extracted are not visited again.
    ///
    /// On a matrix without dominated rows (see [CoverMatrix::reduce_dominated]), an extracted
    /// column hits no other row, so that the remaining matrix needs to be covered independently.
    ///
    /// A row hit by no column can not be covered at all and yields an
    /// [UndefinedBehavior](EkspressoError::UndefinedBehavior) error.
    pub fn extract_mandatory(&mut self) -> Result<Vec<L>, EkspressoError> {
        for col in (0..self.labels.len()).rev() {
            if self.rows.iter().all(|row| !row.contains(col)) {
                self.remove_column(col);
            }
        }

        let mut mandatory = vec![];
        for idx in (0..self.rows.len()).rev() {
            let mut hits = self.rows[idx].iter();
            match (hits.next(), hits.next()) {
                (None, _) => {
                    return Err(EkspressoError::UndefinedBehavior(
                        "a row of the covering matrix is hit by no column",
                    ))
                }
                (Some(col), None) => {
                    self.rows.remove(idx);
                    mandatory.push(self.remove_column(col));
                }
                _ => (),
            }
        }
        trace!(
            "{} mandatory columns, {} x {} left",
            mandatory.len(),
            self.rows.len(),
            self.labels.len()
        );
        Ok(mandatory)
    }
}

/// Remove the rows whose set of columns contains the set of columns of another row.
///
/// Rows are sorted by number of set columns, then by their value (position 0 first),
/// then each row removes all later rows including it. Any selection of columns hitting the kept rows
/// also hits the removed ones: the minimal covers are unchanged.
/// Among identical rows, only the first one is kept.
///
/// ```
/// use bit_set::BitSet;
/// use ekspresso::reduce_dominated;
///
/// let rows: Vec<BitSet> = vec![
///     [0, 1, 2].iter().copied().collect(),
///     [1].iter().copied().collect(),
///     [0, 2].iter().copied().collect(),
/// ];
/// let reduced = reduce_dominated(rows);
/// assert_eq!(reduced.len(), 2);
/// ```
pub fn reduce_dominated(mut rows: Vec<BitSet>) -> Vec<BitSet> {
    rows.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| lexicographic(a, b)));

    let mut i = 0;
    while i < rows.len() {
        for j in (i + 1..rows.len()).rev() {
            if rows[j].is_superset(&rows[i]) {
                rows.remove(j);
            }
        }
        i += 1;
    }
    rows
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::matrix::*;
    use proptest::prelude::*;

    /// Build a matrix row from strings of 0 and 1 (position 0 first)
    pub(crate) fn row(descr: &str) -> BitSet {
        descr
            .chars()
            .enumerate()
            .filter(|(_, c)| *c == '1')
            .map(|(col, _)| col)
            .collect()
    }

    pub(crate) fn matrix(rows: &[&str]) -> CoverMatrix<char> {
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        let labels = ('a'..='z').take(width).collect();
        CoverMatrix::new(rows.iter().map(|r| row(r)).collect(), labels)
    }

    fn render<L>(m: &CoverMatrix<L>) -> Vec<String> {
        m.rows
            .iter()
            .map(|r| {
                (0..m.column_count())
                    .map(|c| if r.contains(c) { '1' } else { '0' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn dominated_rows_are_removed() {
        let mut m = matrix(&["1110", "0110", "0100", "1001", "1011", "0100"]);
        m.reduce_dominated();
        assert_eq!(render(&m), ["0100", "1001"]);
    }

    #[test]
    fn rows_are_sorted_before_reduction() {
        let mut m = matrix(&["1100", "0011", "1010"]);
        m.reduce_dominated();
        assert_eq!(render(&m), ["0011", "1010", "1100"]);
    }

    #[test]
    fn columns_sorted_by_weight() {
        let mut m = matrix(&["0011", "0110", "0101"]);
        m.sort_columns_by_weight();
        assert_eq!(m.labels, ['b', 'c', 'd', 'a']);
        assert_eq!(render(&m), ["0110", "1100", "1010"]);
    }

    #[test]
    fn mandatory_columns() -> Result<(), EkspressoError> {
        let mut m = matrix(&["01000", "00110", "00011"]);
        let mandatory = m.extract_mandatory()?;
        assert_eq!(mandatory, ['b']);
        assert_eq!(m.labels, ['c', 'd', 'e']);
        assert_eq!(render(&m), ["110", "011"]);
        Ok(())
    }

    #[test]
    fn all_rows_mandatory() -> Result<(), EkspressoError> {
        let mut m = matrix(&["100", "001"]);
        let mandatory = m.extract_mandatory()?;
        assert_eq!(mandatory, ['c', 'a']);
        assert_eq!(m.column_count(), 0);
        assert_eq!(m.row_count(), 0);
        Ok(())
    }

    #[test]
    fn empty_row_is_a_defect() {
        let mut m = matrix(&["0110", "0000"]);
        m.reduce_dominated();
        let err = m.extract_mandatory().unwrap_err();
        assert!(err.is_internal());
    }

    #[test]
    fn relation_builder() {
        let m = CoverMatrix::from_relation(&[2, 3, 4][..], vec![2, 3], |r, l| r % l == 0);
        assert_eq!(render(&m), ["10", "01", "10"]);
    }

    pub(crate) fn arb_rows(max_cols: usize) -> impl Strategy<Value = Vec<BitSet>> {
        prop::collection::vec(
            prop::collection::btree_set(0..max_cols, 1..4)
                .prop_map(|s| s.into_iter().collect::<BitSet>()),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn reduction_is_idempotent(rows in arb_rows(6)) {
            let once = reduce_dominated(rows);
            let twice = reduce_dominated(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn reduction_keeps_an_antichain(rows in arb_rows(6)) {
            let reduced = reduce_dominated(rows.clone());
            for (i, a) in reduced.iter().enumerate() {
                for b in &reduced[i + 1..] {
                    prop_assert!(!a.is_subset(b) && !b.is_subset(a));
                }
            }
            // every removed row includes a kept one
            for r in &rows {
                prop_assert!(reduced.iter().any(|k| r.is_superset(k)));
            }
        }
    }
}
