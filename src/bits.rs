//! Fixed-width encoding of minterm indices.

use crate::error::ParseError;
use bit_set::BitSet;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Smallest number of bits able to encode every index of both sets (at least 1).
///
/// ```
/// use ekspresso::width;
///
/// assert_eq!(width(&[1, 2, 59, 228], &[5, 6, 45, 56, 145]), 8);
/// assert_eq!(width(&[0], &[]), 1);
/// ```
pub fn width(on: &[u64], off: &[u64]) -> usize {
    let max = on.iter().chain(off).copied().max().unwrap_or(0);
    ((u64::BITS - max.leading_zeros()) as usize).max(1)
}

/// Encode an index into a vector of `width` bits, most significant bit first.
///
/// Bits above `width` are silently dropped: callers compute the width with [width].
pub fn encode(n: u64, width: usize) -> BitVector {
    let mut bits = BitSet::with_capacity(width);
    for pos in 0..width {
        let var = width - 1 - pos;
        if var < u64::BITS as usize && (n >> var) & 1 == 1 {
            bits.insert(pos);
        }
    }
    BitVector { bits, width }
}

/// Recover the index encoded in a bit vector.
pub fn decode(vector: &BitVector) -> u64 {
    vector
        .bits
        .iter()
        .map(|pos| vector.variable(pos))
        .filter(|var| *var < u64::BITS as usize)
        .fold(0, |n, var| n | (1 << var))
}

/// Compare two rows of bits position by position, where an unset bit is smaller than a set one.
///
/// Position 0 is compared first, which makes this the natural order of vectors written MSB first.
pub(crate) fn lexicographic(a: &BitSet, b: &BitSet) -> Ordering {
    match a.symmetric_difference(b).next() {
        None => Ordering::Equal,
        Some(pos) if a.contains(pos) => Ordering::Greater,
        Some(_) => Ordering::Less,
    }
}

/// A single minterm as an ordered vector of bits of fixed width.
///
/// Position 0 holds the most significant bit. The variable (bit index) associated to a position
/// counts from the least significant bit: in a vector of width `w`, position `p` holds variable `w-1-p`.
///
/// Bit vectors can be parsed from strings of `0` and `1`, spaces and single quotes are ignored:
///
/// ```
/// use ekspresso::{encode, BitVector};
///
/// let v: BitVector = "1001 0001".parse().unwrap();
/// assert_eq!(v, encode(145, 8));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct BitVector {
    pub(crate) bits: BitSet,
    width: usize,
}

impl BitVector {
    /// Build a vector from its bits, most significant first
    pub fn from_bools(bits: &[bool]) -> Self {
        let set = bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b)
            .map(|(pos, _)| pos)
            .collect();
        Self {
            bits: set,
            width: bits.len(),
        }
    }

    /// Number of positions in this vector
    pub fn width(&self) -> usize {
        self.width
    }

    /// Value at a given position (0 is the most significant bit)
    pub fn get(&self, pos: usize) -> bool {
        self.bits.contains(pos)
    }

    /// Variable (bit index from the least significant bit) stored at a position
    pub fn variable(&self, pos: usize) -> usize {
        self.width - 1 - pos
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.len()
    }

    /// Bitwise exclusive or of two vectors of the same width.
    ///
    /// The result has a set bit wherever the two minterms disagree.
    pub fn xor(&self, other: &Self) -> Self {
        debug_assert_eq!(self.width, other.width);
        let mut bits = self.bits.clone();
        bits.symmetric_difference_with(&other.bits);
        Self {
            bits,
            width: self.width,
        }
    }

    /// Expand into a list of booleans, most significant bit first
    pub fn to_bools(&self) -> Vec<bool> {
        (0..self.width).map(|pos| self.get(pos)).collect()
    }
}

impl FromStr for BitVector {
    type Err = ParseError;

    fn from_str(descr: &str) -> Result<Self, ParseError> {
        let mut bits = vec![];
        for c in descr.chars() {
            match c {
                ' ' | '\t' | '\'' => (),
                '0' => bits.push(false),
                '1' => bits.push(true),
                _ => return Err(ParseError::Pattern(descr.to_string())),
            }
        }
        Ok(Self::from_bools(&bits))
    }
}

impl fmt::Display for BitVector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for pos in 0..self.width {
            write!(f, "{}", if self.get(pos) { '1' } else { '0' })?;
        }
        Ok(())
    }
}
