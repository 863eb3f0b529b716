//! Writing labeled datasets.
//!
//! Two layouts are supported:
//!
//! - the labeled fragment layout ([`write_labeled`]), where each fragment is
//!   written as two lines (`1` or `0`, then the nucleotides), true fragments
//!   first, and
//! - a one-hot feature table ([`write_feature_table`]) in CSV form, with a
//!   `class` column followed by four indicator columns per nucleotide.

use std::io;
use std::io::Write;

use crate::extract::Fragments;

pub mod encode;

/// The delimiter for a feature table.
const DELIMITER: char = ',';

/// An error related to writing a dataset.
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// A fragment did not have the expected width.
    ///
    /// Holds the expected width, the width found, and the fragment.
    WidthMismatch(usize, usize, String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::WidthMismatch(expected, found, fragment) => write!(
                f,
                "expected fragments of width {expected}, found width {found}: {fragment}"
            ),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Writes fragments in the labeled fragment layout.
///
/// Empty fragments are skipped.
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
/// let fragments = splicefrag::extract::Builder::default()
///     .window(splicefrag::core::Window::new(0, 2))
///     .splice_type(SpliceType::Acceptor)
///     .try_build()?
///     .extract(&records);
///
/// let mut buffer = Vec::new();
/// splicefrag::dataset::write_labeled(&mut buffer, &fragments)?;
///
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "1\nAG\n0\nAG\n0\nAG\n0\nAG\n"
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_labeled<W>(writer: &mut W, fragments: &Fragments) -> io::Result<()>
where
    W: Write,
{
    for fragment in fragments.labeled() {
        if fragment.content().is_empty() {
            continue;
        }

        writeln!(writer, "{fragment}")?;
    }

    Ok(())
}

/// Writes fragments as a one-hot feature table.
///
/// Every fragment must be `width` nucleotides wide.
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
/// let (trues, _) = splicefrag::extract::extract(0, 1, &records, SpliceType::Donor, false);
/// assert_eq!(trues, vec!["G"]);
///
/// let fragments = splicefrag::extract::Builder::default()
///     .window(splicefrag::core::Window::new(0, 1))
///     .splice_type(SpliceType::Donor)
///     .try_build()?
///     .extract(&records);
///
/// let mut buffer = Vec::new();
/// splicefrag::dataset::write_feature_table(&mut buffer, &fragments, 1)?;
///
/// let table = String::from_utf8(buffer)?;
/// let mut lines = table.lines();
/// assert_eq!(lines.next(), Some("class,0_A,0_C,0_G,0_T"));
/// assert_eq!(lines.next(), Some("1,0,0,1,0"));
/// assert!(lines.all(|line| line == "0,0,0,1,0"));
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_feature_table<W>(writer: &mut W, fragments: &Fragments, width: usize) -> Result<()>
where
    W: Write,
{
    let header = encode::header(width).join(&DELIMITER.to_string());
    writeln!(writer, "{header}").map_err(Error::Io)?;

    for fragment in fragments.labeled() {
        let found = fragment.content().len();

        if found != width {
            return Err(Error::WidthMismatch(width, found, fragment.content().to_string()));
        }

        let mut row = fragment.label().to_string();

        for value in encode::encode(fragment.content()) {
            row.push(DELIMITER);
            row.push(char::from(b'0' + value));
        }

        writeln!(writer, "{row}").map_err(Error::Io)?;
    }

    Ok(())
}
