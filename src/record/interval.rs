//! Intron and exon intervals.

use std::num::ParseIntError;

use omics::coordinate::position::Number;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to the parsing of an interval line.
#[derive(Debug)]
pub enum ParseError {
    /// The line held an odd number of values, so they cannot be paired.
    OddNumberOfValues(usize),

    /// A value was not a non-negative integer.
    InvalidValue(String, ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::OddNumberOfValues(n) => write!(
                f,
                "expected an even number of values to form (start, end) pairs, found {n} values"
            ),
            ParseError::InvalidValue(value, err) => {
                write!(f, "invalid value \"{value}\": {err}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Interval
////////////////////////////////////////////////////////////////////////////////////////

/// A `(start, end)` pair of 0-based offsets into a sequence.
///
/// The pair is stored exactly as it was read: no ordering between the start
/// and the end is enforced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Interval {
    /// The start offset.
    start: Number,

    /// The end offset.
    end: Number,
}

impl Interval {
    /// Creates a new [`Interval`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::Interval;
    ///
    /// let interval = Interval::new(4, 28);
    /// assert_eq!(interval.start(), 4);
    /// assert_eq!(interval.end(), 28);
    /// ```
    pub fn new(start: Number, end: Number) -> Self {
        Self { start, end }
    }

    /// Gets the start offset.
    pub fn start(&self) -> Number {
        self.start
    }

    /// Gets the end offset.
    pub fn end(&self) -> Number {
        self.end
    }
}

impl From<(Number, Number)> for Interval {
    fn from((start, end): (Number, Number)) -> Self {
        Self::new(start, end)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// Parses a whitespace-separated line of integers into consecutive
/// [`Interval`]s.
///
/// The order of appearance is preserved.
///
/// # Examples
///
/// ```
/// use splicefrag::record::Interval;
/// use splicefrag::record::interval::parse_intervals;
///
/// let intervals = parse_intervals(" 0 3 28 36")?;
/// assert_eq!(intervals, vec![Interval::new(0, 3), Interval::new(28, 36)]);
///
/// assert!(parse_intervals("0 3 28").is_err());
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn parse_intervals(s: &str) -> Result<Vec<Interval>, ParseError> {
    let values = s
        .split_whitespace()
        .map(|value| {
            value
                .parse::<Number>()
                .map_err(|err| ParseError::InvalidValue(value.to_string(), err))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() % 2 != 0 {
        return Err(ParseError::OddNumberOfValues(values.len()));
    }

    Ok(values
        .chunks_exact(2)
        .map(|pair| Interval::new(pair[0], pair[1]))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_pairs_values_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let intervals = parse_intervals("28 36 0 3")?;
        assert_eq!(intervals, vec![Interval::new(28, 36), Interval::new(0, 3)]);
        Ok(())
    }

    #[test]
    fn it_accepts_mixed_whitespace() -> Result<(), Box<dyn std::error::Error>> {
        let intervals = parse_intervals("\t4  27 \t 30\t31  ")?;
        assert_eq!(intervals, vec![Interval::new(4, 27), Interval::new(30, 31)]);
        Ok(())
    }

    #[test]
    fn it_parses_an_empty_line_to_no_intervals() -> Result<(), Box<dyn std::error::Error>> {
        assert!(parse_intervals("")?.is_empty());
        assert!(parse_intervals("   ")?.is_empty());
        Ok(())
    }

    #[test]
    fn it_fails_on_an_odd_number_of_values() {
        let err = parse_intervals("0 3 28").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected an even number of values to form (start, end) pairs, found 3 values"
        );
    }

    #[test]
    fn it_fails_on_negative_values() {
        let err = parse_intervals("-1 3").unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue(ref value, _) if value == "-1"));
    }

    #[test]
    fn it_fails_on_non_numeric_values() {
        let err = parse_intervals("0 x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value \"x\": invalid digit found in string"
        );
    }
}
