//! Sum-of-products expressions returned by the minimizers.

use crate::cube::{Cube, Literal};
use crate::efmt::{Notated, Notation, NotationFormatter, CANONICAL_FMT_CFG};
use crate::error::ParseError;
use delegate::delegate;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::slice::Iter;
use std::str::FromStr;

static RE_TERM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:x(?:0|[1-9][0-9]*)`?)+$").unwrap());
static RE_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"x([0-9]+)(`?)").unwrap());

/// A disjunction of product terms over variables of a fixed width.
///
/// The canonical text form joins terms with `" + "`; a term concatenates its literals, each
/// written as `x` followed by the bit index and a trailing `` ` `` if the variable is negated.
/// The constant true term is written `1` and the empty disjunction (constant false) `0`.
/// Variable indices are written without leading zeros and must be lower than 64, the bit size of a minterm.
///
/// ```
/// use ekspresso::Expression;
///
/// let expr: Expression = "x2`x0 + x1".parse().unwrap();
/// assert_eq!(expr.len(), 2);
/// assert!(expr.eval(0b001));
/// assert!(expr.eval(0b110));
/// assert!(!expr.eval(0b100));
/// assert_eq!(expr.to_string(), "x2`x0 + x1");
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Expression {
    width: usize,
    terms: Vec<Cube>,
}

impl Expression {
    /// The constant false expression (no term)
    pub fn new(width: usize) -> Self {
        Self {
            width,
            terms: vec![],
        }
    }

    /// Build an expression from a list of terms, duplicated terms are skipped
    pub fn from_terms(width: usize, terms: impl IntoIterator<Item = Cube>) -> Self {
        let mut expr = Self::new(width);
        for t in terms {
            expr.push_term(t);
        }
        expr
    }

    /// Add a term if it is not already present, return true if it was added.
    pub fn push_term(&mut self, term: Cube) -> bool {
        debug_assert_eq!(term.width(), self.width);
        if self.terms.contains(&term) {
            return false;
        }
        self.terms.push(term);
        true
    }

    delegate! {
        to self.terms {
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
            pub fn iter(&self) -> Iter<'_, Cube>;
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn terms(&self) -> &[Cube] {
        &self.terms
    }

    /// Total number of literals over all terms
    pub fn literal_count(&self) -> usize {
        self.terms.iter().map(|t| t.literal_count()).sum()
    }

    /// Evaluate the expression on an integer minterm
    pub fn eval(&self, minterm: u64) -> bool {
        self.terms.iter().any(|t| t.eval(minterm))
    }

    /// Display this expression with another notation
    pub fn notated(&self, notation: Notation) -> Notated<'_> {
        Notated::new(self, notation.config())
    }

    /// Parse the canonical form of an expression, using the given number of variables.
    pub fn parse_with_width(descr: &str, width: usize) -> Result<Self, ParseError> {
        let terms = parse_terms(descr)?;
        if let Some(lit) = terms.iter().flatten().find(|l| l.variable() >= width) {
            return Err(ParseError::Term(lit.to_string()));
        }
        Ok(Self::from_terms(
            width,
            terms.iter().map(|t| Cube::from_literals(width, t)),
        ))
    }
}

fn parse_terms(descr: &str) -> Result<Vec<Vec<Literal>>, ParseError> {
    let descr = descr.trim();
    if descr == "0" {
        return Ok(vec![]);
    }

    let mut terms = vec![];
    for term in descr.split('+').map(str::trim) {
        if term == "1" {
            terms.push(vec![]);
            continue;
        }
        if !RE_TERM.is_match(term) {
            return Err(ParseError::Term(term.to_string()));
        }
        let literals = RE_LITERAL
            .captures_iter(term)
            .map(|cap| -> Result<Literal, ParseError> {
                let variable: usize = cap[1]
                    .parse()
                    .map_err(|_| ParseError::Term(term.to_string()))?;
                if variable >= u64::BITS as usize {
                    return Err(ParseError::Term(term.to_string()));
                }
                Ok(Literal::new(variable, cap[2].is_empty()))
            })
            .collect::<Result<Vec<Literal>, ParseError>>()?;
        terms.push(literals);
    }
    Ok(terms)
}

impl FromStr for Expression {
    type Err = ParseError;

    // the width is given by the largest variable index
    fn from_str(descr: &str) -> Result<Self, ParseError> {
        let terms = parse_terms(descr)?;
        let width = terms
            .iter()
            .flatten()
            .map(|l| l.variable() + 1)
            .max()
            .unwrap_or(1);
        Ok(Self::from_terms(
            width,
            terms.iter().map(|t| Cube::from_literals(width, t)),
        ))
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a Cube;
    type IntoIter = Iter<'a, Cube>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        NotationFormatter::new(f, &CANONICAL_FMT_CFG).write_expression(self)
    }
}
