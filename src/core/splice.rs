//! The kind of splice site being extracted.

use std::str::FromStr;

use omics::coordinate::position::Number;

use crate::record::Interval;

/// The canonical donor motif.
pub const DONOR_MOTIF: &str = "GT";

/// The canonical acceptor motif.
pub const ACCEPTOR_MOTIF: &str = "AG";

/// An error related to the parsing of a splice type.
#[derive(Debug)]
pub struct ParseSpliceTypeError(String);

impl std::fmt::Display for ParseSpliceTypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "parse splice type error: {} is not a valid splice type (expected \"donor\" or \
             \"acceptor\")",
            self.0
        )
    }
}

impl std::error::Error for ParseSpliceTypeError {}

/// Where a splice site sits relative to its sequence.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SitePosition {
    /// One before the first nucleotide.
    ///
    /// Only the acceptor of an intron ending at `0` sits here. It never yields
    /// a fragment, but its window still reaches into the sequence.
    BeforeStart,

    /// A 0-based offset into the sequence.
    At(Number),
}

impl SitePosition {
    /// Gets the offset into the sequence, if the site sits within it.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::splice::SitePosition;
    ///
    /// assert_eq!(SitePosition::At(4).offset(), Some(4));
    /// assert_eq!(SitePosition::BeforeStart.offset(), None);
    /// ```
    pub fn offset(self) -> Option<Number> {
        match self {
            SitePosition::BeforeStart => None,
            SitePosition::At(offset) => Some(offset),
        }
    }
}

impl From<Number> for SitePosition {
    fn from(offset: Number) -> Self {
        SitePosition::At(offset)
    }
}

/// The kind of splice site.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SpliceType {
    /// The 5' boundary of an intron.
    Donor,

    /// The 3' boundary of an intron.
    Acceptor,
}

impl SpliceType {
    /// Both splice types, donors first.
    pub const ALL: [SpliceType; 2] = [SpliceType::Donor, SpliceType::Acceptor];

    /// Gets the splice site position of an intron.
    ///
    /// A donor sits at the intron's start. An acceptor sits one before the
    /// intron's end, so the acceptor of an intron ending at `0` sits
    /// [before the start](SitePosition::BeforeStart) of the sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::SpliceType;
    /// use splicefrag::core::splice::SitePosition;
    /// use splicefrag::record::Interval;
    ///
    /// let intron = Interval::new(4, 28);
    /// assert_eq!(SpliceType::Donor.position(&intron), SitePosition::At(4));
    /// assert_eq!(SpliceType::Acceptor.position(&intron), SitePosition::At(27));
    ///
    /// assert_eq!(
    ///     SpliceType::Acceptor.position(&Interval::new(0, 0)),
    ///     SitePosition::BeforeStart
    /// );
    /// ```
    pub fn position(&self, intron: &Interval) -> SitePosition {
        match self {
            SpliceType::Donor => SitePosition::At(intron.start()),
            SpliceType::Acceptor => intron
                .end()
                .checked_sub(1)
                .map_or(SitePosition::BeforeStart, SitePosition::At),
        }
    }

    /// Gets the canonical motif found at this kind of splice site.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::SpliceType;
    ///
    /// assert_eq!(SpliceType::Donor.default_motif(), "GT");
    /// assert_eq!(SpliceType::Acceptor.default_motif(), "AG");
    /// ```
    pub fn default_motif(&self) -> &'static str {
        match self {
            SpliceType::Donor => DONOR_MOTIF,
            SpliceType::Acceptor => ACCEPTOR_MOTIF,
        }
    }
}

impl FromStr for SpliceType {
    type Err = ParseSpliceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "donor" => Ok(Self::Donor),
            "acceptor" => Ok(Self::Acceptor),
            _ => Err(ParseSpliceTypeError(s.to_string())),
        }
    }
}

impl std::fmt::Display for SpliceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpliceType::Donor => write!(f, "donor"),
            SpliceType::Acceptor => write!(f, "acceptor"),
        }
    }
}
