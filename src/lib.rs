//! Two-level minimization of incompletely specified Boolean functions.
//!
//! A function over `w` Boolean variables is given by two disjoint sets of minterms (integer indices of
//! variable assignments): the ON-set where it must be true and the OFF-set where it must be false.
//! All other minterms are free. The minimizers return a [sum of products](Expression) which is true on
//! the whole ON-set and false on the whole OFF-set.
//!
//! Variable `x<k>` denotes bit `k` of the minterm index, `x0` being the least significant bit. The width
//! is the number of bits of the largest index of both sets.
//!
//! ```
//! use ekspresso::{heuristic, systematic};
//! # use ekspresso::EkspressoError;
//! # fn main() -> Result<(), EkspressoError> {
//!
//! let on = [0, 1, 3, 7, 8, 12];
//! let off = [2, 4, 6, 9, 15];
//!
//! // Fewest terms, each with the fewest literals
//! let exact = systematic(&on, &off)?;
//! println!("{} (in {:?})", exact.value, exact.elapsed);
//!
//! // Faster, possibly with more terms
//! let greedy = heuristic(&on, &off)?.into_inner();
//! assert!(exact.value.len() <= greedy.len());
//!
//! for n in on {
//!     assert!(exact.value.eval(n as u64) && greedy.eval(n as u64));
//! }
//! for n in off {
//!     assert!(!exact.value.eval(n as u64) && !greedy.eval(n as u64));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Building blocks
//!
//! Both minimizers expand each minterm of the ON-set into its smallest implicants avoiding the OFF-set.
//! This expansion, as well as the final selection of implicants in the exact minimizer, solves a
//! [covering problem](CoverMatrix): find the smallest sets of columns of a Boolean matrix hitting every row.
//! Covering problems are first simplified by removing dominated rows and by extracting the columns
//! which are the only way to cover a row.
//!
//! ```
//! use ekspresso::{encode, expand_minterm, Cube, ExpansionMode};
//! # use ekspresso::EkspressoError;
//! # fn main() -> Result<(), EkspressoError> {
//!
//! let off = [encode(0b000, 3)];
//! let implicants = expand_minterm(&encode(0b011, 3), &off, ExpansionMode::AllTies)?;
//! assert_eq!(implicants, ["-1-".parse::<Cube>()?, "--1".parse()?]);
//! # Ok(())
//! # }
//! ```
//!
//! # Reading and writing
//!
//! Lists of minterms typed by users are read with the strict [parse_minterms] parser. Problem files and
//! result files are handled by the [store] module. Expressions can be displayed in several
//! [notations](Notation) and the canonical form can be parsed back.
//!
//! ```
//! use ekspresso::{parse_minterms, systematic, Notation};
//! # use ekspresso::EkspressoError;
//! # fn main() -> Result<(), EkspressoError> {
//!
//! let on = parse_minterms("0, 1, 2, 3")?;
//! let off = parse_minterms("4 5 6 7")?;
//! let expr = systematic(&on, &off)?.value;
//! assert_eq!(expr.to_string(), "x2`");
//! assert_eq!(expr.notated(Notation::Logical).to_string(), "(¬x2)");
//! # Ok(())
//! # }
//! ```

mod bits;
mod cover;
mod cube;
pub mod efmt;
mod error;
mod expand;
mod expression;
mod matrix;
mod minimize;
mod parse;
pub mod store;
mod timing;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use bits::{decode, encode, width, BitVector};
pub use cube::{Cube, Literal, Ternary};
pub use efmt::{Notated, Notation, NotationConfig};
pub use error::{EkspressoError, ParseError};
pub use expand::{difference_matrix, expand_minterm, ExpansionMode};
pub use expression::Expression;
pub use matrix::{reduce_dominated, CoverMatrix};
pub use minimize::{alternatives, heuristic, systematic, Method, MintermSet};
pub use parse::parse_minterms;
pub use timing::Timed;
