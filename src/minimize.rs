//! Two-level minimization of a function given by its ON-set and OFF-set.
//!
//! Both minimizers start by [expanding](expand_minterm) each minterm of the ON-set into its smallest
//! implicants avoiding the OFF-set. The exact (systematic) minimizer keeps all of them and solves the
//! covering problem of the ON-set by these candidates with the same exact cover search. The greedy
//! (heuristic) minimizer keeps a single candidate per minterm and accepts them in order until the
//! ON-set is covered.
//!
//! Minterms missing from both sets are free (don't care).

use crate::bits::{encode, width, BitVector};
use crate::cube::Cube;
use crate::error::EkspressoError;
use crate::expand::{expand_minterm, ExpansionMode};
use crate::expression::Expression;
use crate::matrix::CoverMatrix;
use crate::timing::Timed;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeSet;
use std::fmt;

/// Validated and encoded ON-set and OFF-set of a function.
///
/// Both sets are deduplicated and sorted by increasing index.
#[derive(Clone, Debug)]
pub struct MintermSet {
    width: usize,
    on: Vec<BitVector>,
    off: Vec<BitVector>,
}

impl MintermSet {
    /// Check and encode the sets of minterms.
    ///
    /// Fails with [InvalidInput](EkspressoError::InvalidInput) if an index is negative or
    /// if both sets share a minterm. The given slices are only read.
    pub fn new(on: &[i64], off: &[i64]) -> Result<Self, EkspressoError> {
        let on = checked_indices(on)?;
        let off = checked_indices(off)?;
        if let Some(shared) = on.intersection(&off).next() {
            return Err(EkspressoError::InvalidInput(format!(
                "minterm {} is in both sets",
                shared
            )));
        }

        let on: Vec<u64> = on.into_iter().collect();
        let off: Vec<u64> = off.into_iter().collect();
        let width = width(&on, &off);
        Ok(Self {
            width,
            on: on.iter().map(|n| encode(*n, width)).collect(),
            off: off.iter().map(|n| encode(*n, width)).collect(),
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn on(&self) -> &[BitVector] {
        &self.on
    }

    pub fn off(&self) -> &[BitVector] {
        &self.off
    }

    /// Expand all minterms of the ON-set, in order, and collect the distinct implicants
    pub fn candidates(&self, mode: ExpansionMode) -> Result<Vec<Cube>, EkspressoError> {
        let mut found = vec![];
        for minterm in &self.on {
            found.extend(expand_minterm(minterm, &self.off, mode)?);
        }
        let candidates: Vec<Cube> = found.into_iter().unique().collect();
        trace!("{} distinct candidate implicants", candidates.len());
        Ok(candidates)
    }

    /// Build the reduced covering problem of the ON-set by all candidate implicants.
    ///
    /// Returns the implicants required by any cover and the remaining problem.
    fn covering_problem(&self) -> Result<(Vec<Cube>, CoverMatrix<Cube>), EkspressoError> {
        let candidates = self.candidates(ExpansionMode::AllTies)?;
        let mut matrix = CoverMatrix::from_relation(&self.on, candidates, |f, c| c.matches(f));
        matrix.reduce_dominated();
        matrix.sort_columns_by_weight();
        let mandatory = matrix.extract_mandatory()?;
        Ok((mandatory, matrix))
    }

    /// Exact minimization: fewest terms, each term with the fewest literals.
    ///
    /// When several covers of minimal size exist, the first one found is used.
    pub fn minimize_exact(&self) -> Result<Expression, EkspressoError> {
        Ok(self
            .exact_alternatives()?
            .into_iter()
            .next()
            .unwrap_or_else(|| Expression::new(self.width)))
    }

    /// All exact minimizations found by the final cover search.
    ///
    /// All alternatives share the implicants required by every cover and have the same number of terms.
    pub fn exact_alternatives(&self) -> Result<Vec<Expression>, EkspressoError> {
        debug!(
            "exact minimization: {} ON, {} OFF, width {}",
            self.on.len(),
            self.off.len(),
            self.width
        );
        if self.on.is_empty() {
            return Ok(vec![Expression::new(self.width)]);
        }

        let (mandatory, matrix) = self.covering_problem()?;
        let base = Expression::from_terms(self.width, mandatory);
        if matrix.column_count() == 0 {
            debug!("{} terms, all mandatory", base.len());
            return Ok(vec![base]);
        }

        let alternatives: Vec<Expression> = matrix
            .minimal_covers()?
            .into_iter()
            .map(|cover| {
                let mut expr = base.clone();
                for term in cover {
                    expr.push_term(term);
                }
                expr
            })
            .collect();
        debug!(
            "{} alternatives with {} terms",
            alternatives.len(),
            alternatives.first().map(|e| e.len()).unwrap_or(0)
        );
        Ok(alternatives)
    }

    /// Greedy minimization with a single candidate implicant per minterm.
    ///
    /// Candidates are taken in the order of the minterms which produced them. A candidate is kept if it
    /// covers at least one minterm of the ON-set which is not yet covered. The result is a valid cover,
    /// with no guarantee on its size.
    pub fn minimize_greedy(&self) -> Result<Expression, EkspressoError> {
        debug!(
            "greedy minimization: {} ON, {} OFF, width {}",
            self.on.len(),
            self.off.len(),
            self.width
        );
        let candidates = self.candidates(ExpansionMode::FirstOnly)?;

        let mut uncovered = self.on.clone();
        let mut expr = Expression::new(self.width);
        for cube in candidates {
            if uncovered.is_empty() {
                break;
            }
            let before = uncovered.len();
            for idx in (0..uncovered.len()).rev() {
                if cube.matches(&uncovered[idx]) {
                    uncovered.remove(idx);
                }
            }
            if uncovered.len() < before {
                expr.push_term(cube);
            }
        }
        if !uncovered.is_empty() {
            return Err(EkspressoError::UndefinedBehavior(
                "some minterms are not covered by their own implicant",
            ));
        }
        debug!("{} terms", expr.len());
        Ok(expr)
    }
}

fn checked_indices(indices: &[i64]) -> Result<BTreeSet<u64>, EkspressoError> {
    indices
        .iter()
        .map(|n| {
            u64::try_from(*n)
                .map_err(|_| EkspressoError::InvalidInput(format!("negative minterm {}", n)))
        })
        .collect()
}

/// Choice between the exact and the greedy minimizer
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Method {
    #[default]
    Systematic,
    Heuristic,
}

impl Method {
    /// Minimize the function with this method and measure the time spent
    pub fn run(self, on: &[i64], off: &[i64]) -> Result<Timed<Expression>, EkspressoError> {
        match self {
            Method::Systematic => systematic(on, off),
            Method::Heuristic => heuristic(on, off),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Systematic => write!(f, "systematic"),
            Method::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Exact minimization of the function true on `on` and false on `off`.
///
/// ```
/// use ekspresso::systematic;
///
/// let result = systematic(&[0, 1, 2, 3], &[4, 5, 6, 7]).unwrap();
/// assert_eq!(result.value.to_string(), "x2`");
/// ```
pub fn systematic(on: &[i64], off: &[i64]) -> Result<Timed<Expression>, EkspressoError> {
    Timed::measure(|| MintermSet::new(on, off)?.minimize_exact()).transpose()
}

/// Greedy minimization of the function true on `on` and false on `off`.
pub fn heuristic(on: &[i64], off: &[i64]) -> Result<Timed<Expression>, EkspressoError> {
    Timed::measure(|| MintermSet::new(on, off)?.minimize_greedy()).transpose()
}

/// All exact minimizations found for the function true on `on` and false on `off`.
pub fn alternatives(on: &[i64], off: &[i64]) -> Result<Timed<Vec<Expression>>, EkspressoError> {
    Timed::measure(|| MintermSet::new(on, off)?.exact_alternatives()).transpose()
}

#[cfg(test)]
mod tests {
    use crate::error::EkspressoError;
    use crate::minimize::*;
    use proptest::prelude::*;

    /// Check that the expression is true on the ON-set and false on the OFF-set
    fn assert_separates(expr: &Expression, on: &[i64], off: &[i64]) {
        for n in on {
            assert!(expr.eval(*n as u64), "{} should be true on {}", expr, n);
        }
        for n in off {
            assert!(!expr.eval(*n as u64), "{} should be false on {}", expr, n);
        }
    }

    #[test]
    fn single_literal_function() -> Result<(), EkspressoError> {
        let on = [0, 1, 2, 3];
        let off = [4, 5, 6, 7];
        assert_eq!(systematic(&on, &off)?.value.to_string(), "x2`");
        assert_eq!(heuristic(&on, &off)?.value.to_string(), "x2`");
        Ok(())
    }

    #[test]
    fn overlapping_sets() {
        let err = systematic(&[3], &[3, 4]).unwrap_err();
        assert!(matches!(err, EkspressoError::InvalidInput(_)));
        assert!(!err.is_internal());
        assert!(heuristic(&[3], &[3, 4]).is_err());
    }

    #[test]
    fn negative_index() {
        let err = MintermSet::new(&[1, -2], &[0]).unwrap_err();
        assert!(matches!(err, EkspressoError::InvalidInput(_)));
    }

    #[test]
    fn fixture() -> Result<(), EkspressoError> {
        let on = [1, 2, 59, 228];
        let off = [5, 6, 45, 56, 145];
        let set = MintermSet::new(&on, &off)?;
        assert_eq!(set.width(), 8);
        assert_eq!(set.on()[0].to_string(), "00000001");
        assert_eq!(set.off()[4].to_string(), "10010001");

        let exact = systematic(&on, &off)?.value;
        let greedy = heuristic(&on, &off)?.value;
        assert_separates(&exact, &on, &off);
        assert_separates(&greedy, &on, &off);
        assert!(exact.len() <= greedy.len());
        Ok(())
    }

    #[test]
    fn mixed_function() -> Result<(), EkspressoError> {
        let on = [0, 1, 3, 7, 8, 12];
        let off = [2, 4, 6, 9, 15];
        for method in [Method::Systematic, Method::Heuristic] {
            let expr = method.run(&on, &off)?.value;
            assert_separates(&expr, &on, &off);
        }
        Ok(())
    }

    #[test]
    fn xor_needs_all_minterms() -> Result<(), EkspressoError> {
        let expr = systematic(&[1, 2], &[0, 3])?.value;
        assert_eq!(expr.len(), 2);
        assert_eq!(expr.literal_count(), 4);
        assert_separates(&expr, &[1, 2], &[0, 3]);
        Ok(())
    }

    #[test]
    fn constant_functions() -> Result<(), EkspressoError> {
        assert_eq!(systematic(&[], &[1, 2])?.value.to_string(), "0");
        assert_eq!(heuristic(&[], &[1, 2])?.value.to_string(), "0");
        assert_eq!(systematic(&[0, 5], &[])?.value.to_string(), "1");
        assert_eq!(heuristic(&[0, 5], &[])?.value.to_string(), "1");
        Ok(())
    }

    #[test]
    fn duplicated_minterms() -> Result<(), EkspressoError> {
        let expr = systematic(&[3, 1, 3], &[0, 0, 2])?.value;
        assert_eq!(expr.to_string(), "x0");
        Ok(())
    }

    #[test]
    fn inputs_are_left_untouched() -> Result<(), EkspressoError> {
        let on = vec![5, 1, 3];
        let off = vec![0, 2];
        systematic(&on, &off)?;
        assert_eq!(on, [5, 1, 3]);
        assert_eq!(off, [0, 2]);
        Ok(())
    }

    #[test]
    fn tied_alternatives() -> Result<(), EkspressoError> {
        // cyclic function with two covers of three terms
        let on = [1, 2, 3, 4, 5, 6];
        let off = [0, 7];
        let found = alternatives(&on, &off)?.value;
        let exact = systematic(&on, &off)?.value;
        assert!(found.len() > 1);
        assert_eq!(found[0], exact);
        for expr in &found {
            assert_eq!(expr.len(), 3);
            assert_separates(expr, &on, &off);
        }
        Ok(())
    }

    fn longest_term(expr: &Expression) -> usize {
        expr.iter().map(|t| t.literal_count()).max().unwrap_or(0)
    }

    #[test]
    fn exact_terms_are_never_longer() -> Result<(), EkspressoError> {
        // fewer total literals for the greedy result, but neither more terms nor a longer one
        let on = [0, 1, 4, 7];
        let off = [2, 3, 5, 8, 9, 11, 15];
        let exact = systematic(&on, &off)?.value;
        let greedy = heuristic(&on, &off)?.value;
        assert_separates(&exact, &on, &off);
        assert_separates(&greedy, &on, &off);
        assert!(exact.len() <= greedy.len());
        assert!(longest_term(&exact) <= longest_term(&greedy));
        Ok(())
    }

    /// Random partial function over 4 variables: 0 is free, 1 in the ON-set, 2 in the OFF-set
    fn arb_function() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
        prop::collection::vec(0u8..3, 1..=16).prop_map(|values| {
            let pick = |v: u8| -> Vec<i64> {
                values
                    .iter()
                    .enumerate()
                    .filter(|(_, x)| **x == v)
                    .map(|(n, _)| n as i64)
                    .collect()
            };
            (pick(1), pick(2))
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn both_minimizers_separate_the_sets((on, off) in arb_function()) {
            let exact = systematic(&on, &off).unwrap().value;
            let greedy = heuristic(&on, &off).unwrap().value;
            for n in &on {
                prop_assert!(exact.eval(*n as u64));
                prop_assert!(greedy.eval(*n as u64));
            }
            for n in &off {
                prop_assert!(!exact.eval(*n as u64));
                prop_assert!(!greedy.eval(*n as u64));
            }
            // term lengths only: the exact result may have more literals in total
            prop_assert!(exact.len() <= greedy.len());
            prop_assert!(longest_term(&exact) <= longest_term(&greedy));
        }
    }
}
