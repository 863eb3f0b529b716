//! Extracting labeled fragments from sequence records.
//!
//! An [`Extractor`] runs one parameterization (window, splice type, overlap
//! policy and motif) over a set of records. For each record it:
//!
//! 1. derives the true splice positions from the introns
//!    ([`positions::true_positions`]),
//! 2. cuts a fragment around each true position that fits in the sequence,
//! 3. scans the sequence for the motif ([`scanner::Motif::scan`]), and
//! 4. cuts a fragment around each motif occurrence that the
//!    [`collision::CollisionFilter`] accepts.
//!
//! True positions are never filtered against each other.

use omics::coordinate::position::Number;

use crate::core::SitePosition;
use crate::core::SpliceType;
use crate::core::Window;
use crate::fragment::Fragment;
use crate::fragment::Label;
use crate::record::SequenceRecord;

pub mod builder;
pub mod collision;
pub mod positions;
pub mod scanner;

pub use builder::Builder;

use self::collision::CollisionFilter;
use self::collision::OverlapPolicy;
use self::scanner::Motif;

////////////////////////////////////////////////////////////////////////////////////////
// Fragments
////////////////////////////////////////////////////////////////////////////////////////

/// The fragments produced by an extraction run.
///
/// Both lists keep record order, and within a record, the order in which the
/// positions were found.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Fragments {
    /// The fragments around true splice sites.
    true_fragments: Vec<String>,

    /// The fragments around accepted candidate sites.
    false_fragments: Vec<String>,
}

impl Fragments {
    /// Creates a new [`Fragments`].
    pub fn new(true_fragments: Vec<String>, false_fragments: Vec<String>) -> Self {
        Self {
            true_fragments,
            false_fragments,
        }
    }

    /// Gets the fragments around true splice sites.
    pub fn true_fragments(&self) -> &[String] {
        &self.true_fragments
    }

    /// Gets the fragments around accepted candidate sites.
    pub fn false_fragments(&self) -> &[String] {
        &self.false_fragments
    }

    /// Gets the total number of fragments.
    pub fn len(&self) -> usize {
        self.true_fragments.len() + self.false_fragments.len()
    }

    /// Whether there are no fragments at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends the fragments of `other`, keeping both orders.
    pub fn append(&mut self, mut other: Fragments) {
        self.true_fragments.append(&mut other.true_fragments);
        self.false_fragments.append(&mut other.false_fragments);
    }

    /// Replaces the false fragments, keeping the true fragments.
    pub fn with_false_fragments(self, false_fragments: Vec<String>) -> Self {
        Self {
            true_fragments: self.true_fragments,
            false_fragments,
        }
    }

    /// Iterates over the labeled fragments, true fragments first.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::fragment::Label;
    ///
    /// let records = splicefrag::record::parse_lines([
    ///     "Introns",
    ///     "4 28",
    ///     "Data",
    ///     "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT",
    /// ])?;
    ///
    /// let fragments = splicefrag::extract::Builder::default()
    ///     .window(splicefrag::core::Window::new(0, 2))
    ///     .splice_type(splicefrag::core::SpliceType::Donor)
    ///     .try_build()?
    ///     .extract(&records);
    ///
    /// let labels = fragments.labeled().map(|f| f.label()).collect::<Vec<_>>();
    /// assert_eq!(labels, vec![Label::True, Label::False, Label::False, Label::False]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn labeled(&self) -> impl Iterator<Item = Fragment> + '_ {
        let trues = self
            .true_fragments
            .iter()
            .map(|content| Fragment::new(Label::True, content.as_str()));
        let falses = self
            .false_fragments
            .iter()
            .map(|content| Fragment::new(Label::False, content.as_str()));

        trues.chain(falses)
    }

    /// Consumes `self` and returns the true and false fragments.
    pub fn into_parts(self) -> (Vec<String>, Vec<String>) {
        (self.true_fragments, self.false_fragments)
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Extractor
////////////////////////////////////////////////////////////////////////////////////////

/// Extracts true and false fragments for one splice type.
///
/// Generally, you will want to use a [`Builder`] to construct one of these.
#[derive(Clone, Debug)]
pub struct Extractor {
    /// The fragment window.
    window: Window,

    /// The splice type.
    splice_type: SpliceType,

    /// The overlap policy.
    policy: OverlapPolicy,

    /// The candidate motif.
    motif: Motif,
}

impl Extractor {
    /// Gets the fragment window.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Gets the splice type.
    pub fn splice_type(&self) -> SpliceType {
        self.splice_type
    }

    /// Gets the overlap policy.
    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Gets the candidate motif.
    pub fn motif(&self) -> &Motif {
        &self.motif
    }

    /// Extracts the fragments of every record, concatenated in record order.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::core::SpliceType;
    /// use splicefrag::core::Window;
    /// use splicefrag::extract::Builder;
    ///
    /// let records = splicefrag::record::parse_lines([
    ///     "Introns",
    ///     "4 28",
    ///     "Data",
    ///     "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT",
    /// ])?;
    ///
    /// let fragments = Builder::default()
    ///     .window(Window::new(2, 3))
    ///     .splice_type(SpliceType::Donor)
    ///     .try_build()?
    ///     .extract(&records);
    ///
    /// assert_eq!(fragments.true_fragments(), &["TTGTC"]);
    /// assert_eq!(fragments.false_fragments(), &["ACGTA", "GAGTT", "ATGTG"]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn extract(&self, records: &[SequenceRecord]) -> Fragments {
        records
            .iter()
            .map(|record| self.extract_record(record))
            .fold(Fragments::default(), |mut all, fragments| {
                all.append(fragments);
                all
            })
    }

    /// Extracts the fragments of a single record.
    pub fn extract_record(&self, record: &SequenceRecord) -> Fragments {
        let true_positions = positions::true_positions(record, self.splice_type);

        Fragments {
            true_fragments: self.true_fragments(record, &true_positions),
            false_fragments: self.false_fragments(record, &true_positions),
        }
    }

    /// Cuts the fragments around the true positions.
    fn true_fragments(
        &self,
        record: &SequenceRecord,
        true_positions: &[SitePosition],
    ) -> Vec<String> {
        let offsets = true_positions.iter().filter_map(|position| position.offset());
        self.cut(record.sequence(), offsets)
    }

    /// Cuts the fragments around the accepted motif occurrences.
    fn false_fragments(
        &self,
        record: &SequenceRecord,
        true_positions: &[SitePosition],
    ) -> Vec<String> {
        let filter = CollisionFilter::new(true_positions, self.window, self.policy);
        let len = record.len() as Number;

        let candidates = self
            .motif
            .scan(record.sequence())
            .into_iter()
            .filter(|&pos| filter.accepts(pos, len));

        self.cut(record.sequence(), candidates)
    }

    /// Cuts a fragment at each position, skipping positions whose fragment
    /// doesn't fit and empty fragments.
    fn cut(&self, sequence: &str, positions: impl Iterator<Item = Number>) -> Vec<String> {
        positions
            .filter_map(|pos| self.window.fragment(sequence, pos))
            .filter(|fragment| !fragment.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Extracts the true and false fragments for one splice type with the
/// canonical motif.
///
/// `overlap` selects [`OverlapPolicy::Permissive`] when set and
/// [`OverlapPolicy::Strict`] otherwise.
///
/// # Examples
///
/// ```
/// use splicefrag::core::SpliceType;
///
/// let records = splicefrag::record::parse_lines([
///     "Introns",
///     "4 28",
///     "Data",
///     "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT",
/// ])?;
///
/// let (trues, falses) = splicefrag::extract::extract(0, 2, &records, SpliceType::Acceptor, false);
/// assert_eq!(trues, vec!["AG"]);
/// assert!(falses.iter().all(|fragment| fragment == "AG"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn extract(
    left: Number,
    right: Number,
    records: &[SequenceRecord],
    splice_type: SpliceType,
    overlap: bool,
) -> (Vec<String>, Vec<String>) {
    Extractor {
        window: Window::new(left, right),
        splice_type,
        policy: OverlapPolicy::from(overlap),
        motif: Motif::for_splice_type(splice_type),
    }
    .extract(records)
    .into_parts()
}
