//! Formatting API for expressions

use crate::cube::{Cube, Literal};
use crate::expression::Expression;

use std::fmt;

/// Symbols used to write variables, products and sums.
pub struct NotationConfig<'a> {
    s_var: &'a str,
    s_neg_var: &'a str,
    s_neg_mark: &'a str,
    s_and: &'a str,
    s_or: &'a str,
    s_open: &'a str,
    s_close: &'a str,
    s_true: &'a str,
    s_false: &'a str,
}

/// The token grammar produced by the minimizers: `x2`x0 + x1`
pub static CANONICAL_FMT_CFG: NotationConfig = NotationConfig {
    s_var: "x",
    s_neg_var: "x",
    s_neg_mark: "`",
    s_and: "",
    s_or: " + ",
    s_open: "",
    s_close: "",
    s_true: "1",
    s_false: "0",
};

pub static MATHEMATICAL_FMT_CFG: NotationConfig = NotationConfig {
    s_var: "x",
    s_neg_var: "x\u{304}",
    s_neg_mark: "",
    s_and: "",
    s_or: " + ",
    s_open: "",
    s_close: "",
    s_true: "1",
    s_false: "0",
};

pub static LOGICAL_FMT_CFG: NotationConfig = NotationConfig {
    s_var: "x",
    s_neg_var: "¬x",
    s_neg_mark: "",
    s_and: "∧",
    s_or: " ∨ ",
    s_open: "(",
    s_close: ")",
    s_true: "⊤",
    s_false: "⊥",
};

pub static ALT_LOGICAL_FMT_CFG: NotationConfig = NotationConfig {
    s_var: "x",
    s_neg_var: "~x",
    s_neg_mark: "",
    s_and: "∧",
    s_or: " ∨ ",
    s_open: "(",
    s_close: ")",
    s_true: "⊤",
    s_false: "⊥",
};

pub static PROGRAMMING_BOOL_FMT_CFG: NotationConfig = NotationConfig {
    s_var: "x",
    s_neg_var: "!x",
    s_neg_mark: "",
    s_and: "&&",
    s_or: " || ",
    s_open: "",
    s_close: "",
    s_true: "true",
    s_false: "false",
};

pub static PROGRAMMING_BITWISE_FMT_CFG: NotationConfig = NotationConfig {
    s_var: "x",
    s_neg_var: "!x",
    s_neg_mark: "",
    s_and: "&",
    s_or: " | ",
    s_open: "",
    s_close: "",
    s_true: "1",
    s_false: "0",
};

/// Available display styles for expressions.
///
/// ```
/// use ekspresso::{Expression, Notation};
///
/// let expr: Expression = "x2`x0 + x1".parse().unwrap();
/// assert_eq!(expr.notated(Notation::Logical).to_string(), "(¬x2∧x0) ∨ (x1)");
/// assert_eq!(expr.notated(Notation::ProgrammingBool).to_string(), "!x2&&x0 || x1");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Notation {
    /// Token grammar of the minimizers, negation marked by a trailing `` ` ``
    #[default]
    Canonical,
    /// Juxtaposed literals, negation with a bar and `+` between terms
    Mathematical,
    /// Logical connectives with a `¬` negation, terms in brackets
    Logical,
    /// Logical connectives with a `~` negation, terms in brackets
    AltLogical,
    /// Boolean operators of C-like languages
    ProgrammingBool,
    /// Bitwise operators of C-like languages
    ProgrammingBitwise,
}

impl Notation {
    pub const ALL: [Notation; 6] = [
        Notation::Canonical,
        Notation::Mathematical,
        Notation::Logical,
        Notation::AltLogical,
        Notation::ProgrammingBool,
        Notation::ProgrammingBitwise,
    ];

    pub fn config(self) -> &'static NotationConfig<'static> {
        match self {
            Notation::Canonical => &CANONICAL_FMT_CFG,
            Notation::Mathematical => &MATHEMATICAL_FMT_CFG,
            Notation::Logical => &LOGICAL_FMT_CFG,
            Notation::AltLogical => &ALT_LOGICAL_FMT_CFG,
            Notation::ProgrammingBool => &PROGRAMMING_BOOL_FMT_CFG,
            Notation::ProgrammingBitwise => &PROGRAMMING_BITWISE_FMT_CFG,
        }
    }
}

/// Write expressions into a [fmt::Formatter] with the symbols of a [NotationConfig]
pub struct NotationFormatter<'a, 'b>(&'a mut fmt::Formatter<'b>, &'a NotationConfig<'a>);

impl<'a, 'b> NotationFormatter<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>, cfg: &'a NotationConfig<'a>) -> Self {
        Self(f, cfg)
    }

    /// Pass-through enabling the ```write!``` macro
    fn write_fmt(&mut self, args: fmt::Arguments) -> fmt::Result {
        fmt::Formatter::write_fmt(self.0, args)
    }

    pub fn write_bool(&mut self, b: bool) -> fmt::Result {
        let cfg = self.1;
        match b {
            true => write!(self, "{}", cfg.s_true),
            false => write!(self, "{}", cfg.s_false),
        }
    }

    pub fn write_literal(&mut self, lit: Literal) -> fmt::Result {
        let cfg = self.1;
        match lit.is_positive() {
            true => write!(self, "{}{}", cfg.s_var, lit.variable()),
            false => write!(
                self,
                "{}{}{}",
                cfg.s_neg_var,
                lit.variable(),
                cfg.s_neg_mark
            ),
        }
    }

    /// Write a product term, the term without literal is the constant true
    pub fn write_term(&mut self, term: &Cube) -> fmt::Result {
        if term.is_universe() {
            return self.write_bool(true);
        }
        let cfg = self.1;
        write!(self, "{}", cfg.s_open)?;
        for (idx, lit) in term.literals().enumerate() {
            if idx > 0 {
                write!(self, "{}", cfg.s_and)?;
            }
            self.write_literal(lit)?;
        }
        write!(self, "{}", cfg.s_close)
    }

    /// Write a sum of products, the empty sum is the constant false
    pub fn write_expression(&mut self, expr: &Expression) -> fmt::Result {
        if expr.is_empty() {
            return self.write_bool(false);
        }
        let cfg = self.1;
        for (idx, term) in expr.iter().enumerate() {
            if idx > 0 {
                write!(self, "{}", cfg.s_or)?;
            }
            self.write_term(term)?;
        }
        Ok(())
    }
}

/// Display wrapper for an expression in a chosen notation
pub struct Notated<'a> {
    expr: &'a Expression,
    cfg: &'a NotationConfig<'a>,
}

impl<'a> Notated<'a> {
    pub fn new(expr: &'a Expression, cfg: &'a NotationConfig<'a>) -> Self {
        Self { expr, cfg }
    }
}

impl fmt::Display for Notated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        NotationFormatter::new(f, self.cfg).write_expression(self.expr)
    }
}
