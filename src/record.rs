//! Annotated sequence records.

pub mod builder;
pub mod interval;
pub mod records;

pub use builder::Builder;
pub use interval::Interval;
pub use records::parse_lines;
pub use records::Records;

/// An annotated sequence record.
///
/// A record holds the intron and exon intervals (in the order they were read)
/// along with the raw nucleotide sequence they index into. Characters outside
/// of `ACGT` are kept as-is.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SequenceRecord {
    /// The intron intervals.
    introns: Vec<Interval>,

    /// The exon intervals.
    exons: Vec<Interval>,

    /// The nucleotide sequence.
    sequence: String,
}

impl SequenceRecord {
    /// Gets the intron intervals.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::parse_lines;
    /// use splicefrag::record::Interval;
    ///
    /// let records = parse_lines(["Introns", "4 28 30 33", "Data", "ACGT"])?;
    /// assert_eq!(
    ///     records[0].introns(),
    ///     &[Interval::new(4, 28), Interval::new(30, 33)]
    /// );
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn introns(&self) -> &[Interval] {
        &self.introns
    }

    /// Gets the exon intervals.
    pub fn exons(&self) -> &[Interval] {
        &self.exons
    }

    /// Gets the nucleotide sequence.
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Gets the length of the nucleotide sequence.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the nucleotide sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
