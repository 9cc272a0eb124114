use thiserror::Error;

/// Error raised while minimizing a function or handling its inputs.
#[derive(Error, Debug)]
pub enum EkspressoError {
    /// The ON-set and OFF-set are not usable as given (negative index or overlap)
    #[error("Invalid input data: {0}")]
    InvalidInput(String),

    /// An internal invariant was violated during the search
    #[error("Undefined behaviour has been observed: {0}")]
    UndefinedBehavior(&'static str),

    /// A list of minterms or an expression could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// A problem file could not be read or a result could not be saved
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl EkspressoError {
    /// Return true if this error denotes a defect of the minimizer rather than a user mistake.
    pub fn is_internal(&self) -> bool {
        matches!(self, EkspressoError::UndefinedBehavior(_))
    }
}

/// Rejected user-provided text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Not a list of non-negative integers
    #[error("'{0}' is not a list of non-negative integers")]
    MintermList(String),

    /// An integer does not fit in the supported range
    #[error("'{0}' is too large to be used as a minterm")]
    Overflow(String),

    /// A problem file does not contain exactly two lines
    #[error("Expected two lines (ON-set then OFF-set), found {0}")]
    LineCount(usize),

    /// A bit vector or cube description contains unexpected characters
    #[error("'{0}' is not a valid pattern")]
    Pattern(String),

    /// A term of an expression could not be read
    #[error("'{0}' is not a valid product term")]
    Term(String),
}
