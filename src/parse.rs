//! Strict reader for lists of minterm indices typed by users.

use crate::error::ParseError;
use pest::Parser;

#[derive(Parser)]
#[grammar_inline = r####"
list = { SOI ~ sep* ~ int ~ (sep+ ~ int)* ~ sep* ~ EOI }
int  = @{ ASCII_DIGIT+ }
sep  = _{ "," | ";" | " " | "\t" }
"####]
struct MintermListParser;

/// Parse a list of non-negative decimal integers.
///
/// Integers can be separated by commas, semicolons or blanks. Signs, operators and any other
/// character are rejected, as is a list without any integer.
///
/// ```
/// use ekspresso::parse_minterms;
///
/// assert_eq!(parse_minterms("1, 2;3  5").unwrap(), vec![1, 2, 3, 5]);
/// assert!(parse_minterms("1, -2").is_err());
/// ```
pub fn parse_minterms(text: &str) -> Result<Vec<i64>, ParseError> {
    let parsed = MintermListParser::parse(Rule::list, text)
        .map_err(|_| ParseError::MintermList(text.trim().to_string()))?;

    parsed
        .flatten()
        .filter(|pair| pair.as_rule() == Rule::int)
        .map(|pair| {
            let digits = pair.as_str();
            digits
                .parse::<i64>()
                .map_err(|_| ParseError::Overflow(digits.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::error::ParseError;
    use crate::parse::*;

    #[test]
    fn separators() -> Result<(), ParseError> {
        assert_eq!(parse_minterms("7")?, [7]);
        assert_eq!(parse_minterms(" 1,2 ,3 ")?, [1, 2, 3]);
        assert_eq!(parse_minterms("4;\t8; 15")?, [4, 8, 15]);
        assert_eq!(parse_minterms("0 0 12,,3")?, [0, 0, 12, 3]);
        Ok(())
    }

    #[test]
    fn rejected_lists() {
        for text in ["", " , ", "1,-2", "1+2", "[1, 2]", "0x10", "3.5", "__import__('os')"] {
            assert_eq!(
                parse_minterms(text),
                Err(ParseError::MintermList(text.trim().to_string())),
                "{:?} should be rejected",
                text
            );
        }
    }

    #[test]
    fn overflow() {
        let big = "123456789012345678901234567890";
        assert_eq!(
            parse_minterms(&format!("1, {}", big)),
            Err(ParseError::Overflow(big.to_string()))
        );
    }
}
