//! A builder for a sequence record.

use crate::record::Interval;
use crate::record::SequenceRecord;

/// An error that occurs when a required field was never provided to the
/// [`Builder`].
#[derive(Debug)]
pub enum MissingError {
    /// No sequence was provided to the [`Builder`].
    Sequence,
}

impl std::fmt::Display for MissingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissingError::Sequence => write!(f, "sequence"),
        }
    }
}

impl std::error::Error for MissingError {}

/// An error that occurs when a singular field was provided multiple times to
/// the [`Builder`].
#[derive(Debug)]
pub enum MultipleError {
    /// The introns field was provided multiple times to the [`Builder`].
    Introns,

    /// The exons field was provided multiple times to the [`Builder`].
    Exons,

    /// The sequence field was provided multiple times to the [`Builder`].
    Sequence,
}

impl std::fmt::Display for MultipleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipleError::Introns => write!(f, "introns"),
            MultipleError::Exons => write!(f, "exons"),
            MultipleError::Sequence => write!(f, "sequence"),
        }
    }
}

impl std::error::Error for MultipleError {}

/// An error related to a [`Builder`].
#[derive(Debug)]
pub enum Error {
    /// An error where a required field was never provided to the [`Builder`].
    Missing(MissingError),

    /// An error where a singular field was provided to the [`Builder`] more
    /// than once.
    Multiple(MultipleError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Missing(err) => write!(f, "missing required field: {err}"),
            Error::Multiple(err) => write!(f, "singular field set multiple times: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`SequenceRecord`].
///
/// Only the sequence is required. Records without an intron or exon section
/// are built with no intervals for that section.
#[derive(Debug, Default)]
pub struct Builder {
    /// The intron intervals.
    introns: Option<Vec<Interval>>,

    /// The exon intervals.
    exons: Option<Vec<Interval>>,

    /// The nucleotide sequence.
    sequence: Option<String>,
}

impl Builder {
    /// Sets the intron intervals for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::Builder;
    /// use splicefrag::record::Interval;
    ///
    /// let builder = Builder::default().introns(vec![Interval::new(4, 28)])?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn introns(mut self, introns: Vec<Interval>) -> Result<Self> {
        if self.introns.is_some() {
            return Err(Error::Multiple(MultipleError::Introns));
        }

        self.introns = Some(introns);
        Ok(self)
    }

    /// Sets the exon intervals for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::Builder;
    /// use splicefrag::record::Interval;
    ///
    /// let builder = Builder::default().exons(vec![Interval::new(0, 3)])?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn exons(mut self, exons: Vec<Interval>) -> Result<Self> {
        if self.exons.is_some() {
            return Err(Error::Multiple(MultipleError::Exons));
        }

        self.exons = Some(exons);
        Ok(self)
    }

    /// Sets the nucleotide sequence for the [`Builder`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::Builder;
    ///
    /// let builder = Builder::default().sequence("TTTTGTCAG")?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn sequence(mut self, sequence: impl Into<String>) -> Result<Self> {
        if self.sequence.is_some() {
            return Err(Error::Multiple(MultipleError::Sequence));
        }

        self.sequence = Some(sequence.into());
        Ok(self)
    }

    /// Whether no field has been provided to the [`Builder`] yet.
    pub fn is_empty(&self) -> bool {
        self.introns.is_none() && self.exons.is_none() && self.sequence.is_none()
    }

    /// Consumes `self` to attempt to build a [`SequenceRecord`].
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::Builder;
    /// use splicefrag::record::Interval;
    ///
    /// let record = Builder::default()
    ///     .introns(vec![Interval::new(4, 28)])?
    ///     .exons(vec![Interval::new(0, 3), Interval::new(28, 36)])?
    ///     .sequence("TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT")?
    ///     .try_build()?;
    ///
    /// assert_eq!(record.introns().len(), 1);
    /// assert_eq!(record.exons().len(), 2);
    /// assert_eq!(record.len(), 36);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build(self) -> Result<SequenceRecord> {
        let sequence = self
            .sequence
            .ok_or(Error::Missing(MissingError::Sequence))?;

        Ok(SequenceRecord {
            introns: self.introns.unwrap_or_default(),
            exons: self.exons.unwrap_or_default(),
            sequence,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_fails_to_produce_a_record_when_no_sequence_is_provided() {
        let err = Builder::default()
            .introns(vec![Interval::new(4, 28)])
            .and_then(|builder| builder.try_build())
            .unwrap_err();

        assert_eq!(err.to_string(), "missing required field: sequence");
    }

    #[test]
    fn it_fails_when_the_introns_are_provided_more_than_once(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .introns(Vec::new())?
            .introns(Vec::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "singular field set multiple times: introns");

        Ok(())
    }

    #[test]
    fn it_fails_when_the_exons_are_provided_more_than_once(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let err = Builder::default()
            .exons(Vec::new())?
            .exons(Vec::new())
            .unwrap_err();

        assert_eq!(err.to_string(), "singular field set multiple times: exons");

        Ok(())
    }

    #[test]
    fn it_defaults_missing_sections_to_no_intervals(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let builder = Builder::default();
        assert!(builder.is_empty());

        let builder = builder.sequence("ACGT")?;
        assert!(!builder.is_empty());

        let record = builder.try_build()?;
        assert!(record.introns().is_empty());
        assert!(record.exons().is_empty());
        assert_eq!(record.sequence(), "ACGT");

        Ok(())
    }
}
