//! Scanning sequences for candidate splice sites.

use std::sync::LazyLock;

use omics::coordinate::position::Number;
use regex::Regex;

use crate::core::SpliceType;
use crate::core::splice::ACCEPTOR_MOTIF;
use crate::core::splice::DONOR_MOTIF;

/// An error related to a [`Motif`].
#[derive(Debug)]
pub enum Error {
    /// The motif was empty.
    Empty,

    /// The motif could not be compiled into a pattern.
    Pattern(regex::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Empty => write!(f, "motif cannot be empty"),
            Error::Pattern(err) => write!(f, "invalid motif pattern: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// The canonical donor motif.
static DONOR: LazyLock<Motif> = LazyLock::new(|| Motif::try_new(DONOR_MOTIF).unwrap());

/// The canonical acceptor motif.
static ACCEPTOR: LazyLock<Motif> = LazyLock::new(|| Motif::try_new(ACCEPTOR_MOTIF).unwrap());

/// A literal motif that marks candidate splice sites.
#[derive(Clone, Debug)]
pub struct Motif {
    /// The motif as given.
    literal: String,

    /// The compiled, literal-only pattern.
    pattern: Regex,
}

impl Motif {
    /// Attempts to create a new [`Motif`].
    ///
    /// The motif is matched literally, so characters with a meaning in
    /// regular expressions carry no special meaning here.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::extract::scanner::Motif;
    ///
    /// let motif = Motif::try_new("GC")?;
    /// assert_eq!(motif.as_str(), "GC");
    ///
    /// assert!(Motif::try_new("").is_err());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_new(motif: impl Into<String>) -> Result<Self, Error> {
        let literal = motif.into();

        if literal.is_empty() {
            return Err(Error::Empty);
        }

        let pattern = Regex::new(&regex::escape(&literal)).map_err(Error::Pattern)?;
        Ok(Self { literal, pattern })
    }

    /// Gets the canonical donor motif (`GT`).
    pub fn donor() -> Self {
        DONOR.clone()
    }

    /// Gets the canonical acceptor motif (`AG`).
    pub fn acceptor() -> Self {
        ACCEPTOR.clone()
    }

    /// Gets the canonical motif for a splice type.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::SpliceType;
    /// use splicefrag::extract::scanner::Motif;
    ///
    /// assert_eq!(Motif::for_splice_type(SpliceType::Donor).as_str(), "GT");
    /// assert_eq!(Motif::for_splice_type(SpliceType::Acceptor).as_str(), "AG");
    /// ```
    pub fn for_splice_type(splice_type: SpliceType) -> Self {
        match splice_type {
            SpliceType::Donor => Self::donor(),
            SpliceType::Acceptor => Self::acceptor(),
        }
    }

    /// Gets the motif as a string.
    pub fn as_str(&self) -> &str {
        &self.literal
    }

    /// Finds the starting offset of every occurrence of the motif.
    ///
    /// The scan runs left to right and never reuses characters from a
    /// previous match, so occurrences of self-overlapping motifs (such as
    /// `AA` within `AAA`) are only counted once.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::extract::scanner::Motif;
    ///
    /// let sequence = "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT";
    /// assert_eq!(Motif::donor().scan(sequence), vec![4, 16, 23, 31]);
    /// assert_eq!(Motif::acceptor().scan(sequence), vec![7, 18, 22, 27]);
    /// ```
    pub fn scan(&self, sequence: &str) -> Vec<Number> {
        self.pattern
            .find_iter(sequence)
            .map(|m| m.start() as Number)
            .collect()
    }
}

impl PartialEq for Motif {
    fn eq(&self, other: &Self) -> bool {
        self.literal == other.literal
    }
}

impl Eq for Motif {}

impl std::fmt::Display for Motif {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.literal)
    }
}

impl std::str::FromStr for Motif {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_does_not_reuse_matched_characters() -> Result<(), Box<dyn std::error::Error>> {
        let motif = Motif::try_new("AA")?;
        assert_eq!(motif.scan("AAAA"), vec![0, 2]);
        assert_eq!(motif.scan("AAA"), vec![0]);
        Ok(())
    }

    #[test]
    fn it_finds_adjacent_occurrences() {
        assert_eq!(Motif::donor().scan("GTGTGT"), vec![0, 2, 4]);
        assert_eq!(Motif::acceptor().scan("AGAG"), vec![0, 2]);
    }

    #[test]
    fn it_matches_the_motif_literally() -> Result<(), Box<dyn std::error::Error>> {
        let motif = Motif::try_new("N.")?;
        assert_eq!(motif.scan("NANN.A"), vec![3]);
        Ok(())
    }

    #[test]
    fn it_is_case_sensitive() {
        assert!(Motif::donor().scan("acgtac").is_empty());
    }

    #[test]
    fn it_finds_nothing_in_an_empty_sequence() {
        assert!(Motif::donor().scan("").is_empty());
    }

    #[test]
    fn it_rejects_an_empty_motif() {
        let err = Motif::try_new("").unwrap_err();
        assert_eq!(err.to_string(), "motif cannot be empty");
    }
}
