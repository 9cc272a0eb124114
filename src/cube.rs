use crate::bits::BitVector;
use crate::error::ParseError;

use std::fmt;
use std::str::FromStr;

/// Value of a single position in a [Cube].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Ternary {
    False,
    True,
    DontCare,
}

impl Ternary {
    /// Test if a bit is compatible with this value
    pub fn accepts(self, bit: bool) -> bool {
        match self {
            Ternary::DontCare => true,
            Ternary::True => bit,
            Ternary::False => !bit,
        }
    }
}

impl From<bool> for Ternary {
    fn from(b: bool) -> Self {
        match b {
            true => Ternary::True,
            false => Ternary::False,
        }
    }
}

/// A variable associated to the value it must take.
///
/// Variables are named by their bit index, counting from the least significant bit.
/// A positive literal requires the bit to be set, a negative one requires it to be clear.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Literal {
    variable: usize,
    positive: bool,
}

impl Literal {
    pub fn new(variable: usize, positive: bool) -> Self {
        Self { variable, positive }
    }

    /// Bit index of the constrained variable
    pub fn variable(&self) -> usize {
        self.variable
    }

    /// Return true if the variable must be set
    pub fn is_positive(&self) -> bool {
        self.positive
    }

    /// Evaluate this literal on an integer minterm
    pub fn eval(&self, minterm: u64) -> bool {
        let bit = self.variable < u64::BITS as usize && (minterm >> self.variable) & 1 == 1;
        bit == self.positive
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "x{}", self.variable)?;
        if !self.positive {
            write!(f, "`")?;
        }
        Ok(())
    }
}

/// A product term, seen as a subspace where some positions are fixed and the others are free.
///
/// Positions follow the layout of [BitVector]: position 0 is the most significant bit.
/// A cube matches a bit vector if every fixed position agrees with it.
///
/// Cubes can be parsed from strings where `0` and `1` fix a position and `-` or `*` leave it free:
///
/// ```
/// use ekspresso::{encode, Cube};
///
/// let cube: Cube = "0-1".parse().unwrap();
/// assert!(cube.matches(&encode(1, 3)));
/// assert!(cube.matches(&encode(3, 3)));
/// assert!(!cube.matches(&encode(5, 3)));
/// assert_eq!(cube.to_string(), "0-1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cube {
    values: Vec<Ternary>,
}

impl Cube {
    /// The cube covering all vectors of the given width (the constant true term)
    pub fn universe(width: usize) -> Self {
        Self {
            values: vec![Ternary::DontCare; width],
        }
    }

    /// Build the cube fixing exactly the given literals, other positions remain free.
    ///
    /// If the same variable is named twice, the last literal wins.
    pub fn from_literals<'a>(width: usize, literals: impl IntoIterator<Item = &'a Literal>) -> Self {
        let mut cube = Self::universe(width);
        for lit in literals {
            debug_assert!(lit.variable < width, "{} outside of width {}", lit, width);
            cube.values[width - 1 - lit.variable] = lit.positive.into();
        }
        cube
    }

    pub fn width(&self) -> usize {
        self.values.len()
    }

    /// Test if every fixed position of this cube agrees with the vector
    pub fn matches(&self, vector: &BitVector) -> bool {
        self.values
            .iter()
            .enumerate()
            .all(|(pos, v)| v.accepts(vector.get(pos)))
    }

    /// Iterate over the fixed positions as literals, from the most significant variable down
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        let width = self.width();
        self.values
            .iter()
            .enumerate()
            .filter_map(move |(pos, v)| match v {
                Ternary::DontCare => None,
                Ternary::True => Some(Literal::new(width - 1 - pos, true)),
                Ternary::False => Some(Literal::new(width - 1 - pos, false)),
            })
    }

    /// Number of fixed positions
    pub fn literal_count(&self) -> usize {
        self.values
            .iter()
            .filter(|v| **v != Ternary::DontCare)
            .count()
    }

    /// Return true if no position is fixed
    pub fn is_universe(&self) -> bool {
        self.literal_count() == 0
    }

    /// Evaluate the product term on an integer minterm
    pub fn eval(&self, minterm: u64) -> bool {
        self.literals().all(|lit| lit.eval(minterm))
    }
}

impl FromStr for Cube {
    type Err = ParseError;

    fn from_str(descr: &str) -> Result<Cube, ParseError> {
        let mut values = vec![];
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => (), // skip spacing
                '-' | '*' => values.push(Ternary::DontCare),
                '0' => values.push(Ternary::False),
                '1' => values.push(Ternary::True),
                _ => return Err(ParseError::Pattern(descr.to_string())),
            };
        }
        Ok(Cube { values })
    }
}

impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self
            .values
            .iter()
            .map(|v| match v {
                Ternary::False => '0',
                Ternary::True => '1',
                Ternary::DontCare => '-',
            })
            .collect();
        write!(f, "{}", &s)
    }
}

#[cfg(test)]
mod tests {
    use crate::bits::encode;
    use crate::cube::*;

    #[test]
    fn literals_follow_variable_indices() -> Result<(), ParseError> {
        let cube: Cube = "1-0-".parse()?;
        let lits: Vec<Literal> = cube.literals().collect();
        assert_eq!(lits, [Literal::new(3, true), Literal::new(1, false)]);
        assert_eq!(Cube::from_literals(4, &lits), cube);
        assert_eq!(cube.literal_count(), 2);

        let names: Vec<String> = lits.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, ["x3", "x1`"]);
        Ok(())
    }

    #[test]
    fn matching() -> Result<(), ParseError> {
        let cube: Cube = "1*0".parse()?;
        for n in 0..8 {
            let expected = n == 4 || n == 6;
            assert_eq!(cube.matches(&encode(n, 3)), expected, "minterm {}", n);
            assert_eq!(cube.eval(n), expected, "minterm {}", n);
        }

        assert!(Cube::universe(3).matches(&encode(5, 3)));
        assert!(Cube::universe(3).is_universe());
        Ok(())
    }

    #[test]
    fn parsing() -> Result<(), ParseError> {
        let cube: Cube = "1 -'0".parse()?;
        assert_eq!(cube.to_string(), "1-0");
        assert_eq!(cube.width(), 3);
        assert_eq!("1x0".parse::<Cube>(), Err(ParseError::Pattern("1x0".to_string())));
        Ok(())
    }
}
