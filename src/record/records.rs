//! An iterator over the [sequence records](crate::record::SequenceRecord)
//! within an annotated sequence file.

use std::io::BufRead;

use crate::Line;
use crate::Reader;
use crate::line::Marker;
use crate::reader;
use crate::record::Builder;
use crate::record::SequenceRecord;
use crate::record::builder;
use crate::record::interval;
use crate::record::interval::parse_intervals;

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to the parsing of sequence records.
#[derive(Debug)]
pub enum ParseError {
    /// An intron or exon line could not be parsed into intervals.
    ///
    /// Holds the section, the line number, the underlying error, and the
    /// offending line.
    InvalidIntervals(Marker, usize, interval::ParseError, String),

    /// The file ended immediately after a section marker.
    MissingSectionLine(Marker, usize),

    /// The file ended in the middle of a record (before its `Data` section).
    AbruptEndInRecord,

    /// There was an issue reading from the underlying reader.
    Reader(reader::Error),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidIntervals(marker, line_no, err, line) => write!(
                f,
                "invalid {} line at line {line_no}: {err}\n\nline: {line}",
                marker.to_string().to_lowercase()
            ),
            ParseError::MissingSectionLine(marker, line_no) => write!(
                f,
                "the file ended after the `{marker}` marker at line {line_no}"
            ),
            ParseError::AbruptEndInRecord => {
                write!(f, "the file abruptly ended in the middle of a record")
            }
            ParseError::Reader(err) => write!(f, "reader error: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// An error related to [`Records`].
#[derive(Debug)]
pub enum Error {
    /// A builder error at the specified line number.
    Builder(builder::Error, usize),

    /// A parse error.
    Parse(ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Builder(err, line_no) => write!(f, "builder error at line {line_no}: {err}"),
            Error::Parse(err) => write!(f, "parse error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

////////////////////////////////////////////////////////////////////////////////////////
// Parser
////////////////////////////////////////////////////////////////////////////////////////

/// The state of the parser.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    /// Waiting for a section marker. Anything else is skipped.
    AwaitingSection,

    /// The `Introns` marker was just read.
    AwaitingIntrons,

    /// The `Exons` marker was just read.
    AwaitingExons,

    /// The `Data` marker was just read.
    AwaitingData,
}

impl State {
    /// The marker that led to this state, if any.
    fn marker(&self) -> Option<Marker> {
        match self {
            State::AwaitingSection => None,
            State::AwaitingIntrons => Some(Marker::Introns),
            State::AwaitingExons => Some(Marker::Exons),
            State::AwaitingData => Some(Marker::Data),
        }
    }
}

impl From<Marker> for State {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Introns => State::AwaitingIntrons,
            Marker::Exons => State::AwaitingExons,
            Marker::Data => State::AwaitingData,
        }
    }
}

/// A line-at-a-time parser for sequence records.
///
/// Every marker consumes the line directly after it, whatever that line
/// contains. Fields are accumulated into a [`Builder`] that is swapped for a
/// fresh one each time a `Data` line completes a record.
#[derive(Debug)]
pub struct Parser {
    /// The current state.
    state: State,

    /// The record under construction.
    builder: Builder,

    /// The number of lines seen so far.
    line_no: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            state: State::AwaitingSection,
            builder: Builder::default(),
            line_no: 0,
        }
    }
}

impl Parser {
    /// Feeds the next line to the parser.
    ///
    /// Returns the completed record when the line finishes a `Data` section.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::record::records::Parser;
    ///
    /// let mut parser = Parser::default();
    ///
    /// assert!(parser.push("Introns".parse()?)?.is_none());
    /// assert!(parser.push(" 4 28".parse()?)?.is_none());
    /// assert!(parser.push("Data".parse()?)?.is_none());
    ///
    /// let record = parser.push("TTTTGTCAG".parse()?)?.unwrap();
    /// assert_eq!(record.sequence(), "TTTTGTCAG");
    ///
    /// parser.finish()?;
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[allow(clippy::result_large_err)]
    pub fn push(&mut self, line: Line) -> Result<Option<SequenceRecord>> {
        self.line_no += 1;
        let line_no = self.line_no;

        match (self.state, line) {
            (State::AwaitingSection, Line::Marker(marker)) => {
                self.state = State::from(marker);
                Ok(None)
            }
            (State::AwaitingSection, _) => Ok(None),
            (State::AwaitingIntrons, line) => {
                let introns = self.intervals(Marker::Introns, line)?;
                self.update(|builder| builder.introns(introns))?;
                self.state = State::AwaitingSection;
                Ok(None)
            }
            (State::AwaitingExons, line) => {
                let exons = self.intervals(Marker::Exons, line)?;
                self.update(|builder| builder.exons(exons))?;
                self.state = State::AwaitingSection;
                Ok(None)
            }
            (State::AwaitingData, line) => {
                let builder = std::mem::take(&mut self.builder);
                self.state = State::AwaitingSection;

                builder
                    .sequence(line.as_str())
                    .and_then(Builder::try_build)
                    .map(Some)
                    .map_err(|err| Error::Builder(err, line_no))
            }
        }
    }

    /// Signals that no more lines are coming.
    ///
    /// Fails if the input stopped inside a record.
    #[allow(clippy::result_large_err)]
    pub fn finish(self) -> Result<()> {
        if let Some(marker) = self.state.marker() {
            return Err(Error::Parse(ParseError::MissingSectionLine(
                marker,
                self.line_no,
            )));
        }

        if !self.builder.is_empty() {
            return Err(Error::Parse(ParseError::AbruptEndInRecord));
        }

        Ok(())
    }

    /// Parses the contents of an intron or exon line.
    #[allow(clippy::result_large_err)]
    fn intervals(&self, marker: Marker, line: Line) -> Result<Vec<interval::Interval>> {
        parse_intervals(line.as_str()).map_err(|err| {
            Error::Parse(ParseError::InvalidIntervals(
                marker,
                self.line_no,
                err,
                line.to_string(),
            ))
        })
    }

    /// Applies a fallible update to the record under construction.
    #[allow(clippy::result_large_err)]
    fn update<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(Builder) -> std::result::Result<Builder, builder::Error>,
    {
        let builder = std::mem::take(&mut self.builder);
        self.builder = f(builder).map_err(|err| Error::Builder(err, self.line_no))?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Records
////////////////////////////////////////////////////////////////////////////////////////

/// An iterator over the sequence records of a [`Reader`].
///
/// The iterator stops after the first error.
#[derive(Debug)]
pub struct Records<'a, T>
where
    T: BufRead,
{
    /// The inner reader.
    reader: &'a mut Reader<T>,

    /// The parser, or [`None`] once the iterator is exhausted.
    parser: Option<Parser>,
}

impl<'a, T> Records<'a, T>
where
    T: BufRead,
{
    /// Creates a new [`Records`].
    pub(crate) fn new(reader: &'a mut Reader<T>) -> Self {
        Self {
            reader,
            parser: Some(Parser::default()),
        }
    }
}

impl<T> Iterator for Records<'_, T>
where
    T: BufRead,
{
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buffer = String::new();

        loop {
            let parser = self.parser.as_mut()?;

            let line = match self.reader.read_line(&mut buffer) {
                Ok(line) => line,
                Err(err) => {
                    self.parser = None;
                    return Some(Err(Error::Parse(ParseError::Reader(err))));
                }
            };

            let line = match line {
                Some(line) => line,
                None => return self.parser.take()?.finish().err().map(Err),
            };

            match parser.push(line) {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => {}
                Err(err) => {
                    self.parser = None;
                    return Some(Err(err));
                }
            }
        }
    }
}

/// Parses sequence records from raw text lines.
///
/// # Examples
///
/// ```
/// use splicefrag::record::records::parse_lines;
///
/// let lines = ["Introns", " 4 28", "Exons", " 0 3 28 36", "Data", "TTTTGTCAG"];
/// let records = parse_lines(lines)?;
///
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].introns()[0].start(), 4);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[allow(clippy::result_large_err)]
pub fn parse_lines<I, S>(lines: I) -> Result<Vec<SequenceRecord>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parser = Parser::default();
    let mut records = Vec::new();

    for line in lines {
        let line = line.as_ref();
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        // Classifying a line never fails.
        let line = line.parse::<Line>().unwrap_or_else(|never| match never {});

        if let Some(record) = parser.push(line)? {
            records.push(record);
        }
    }

    parser.finish()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Interval;

    const FIXTURE: &str = "
>Seq 21 Len:
37
Introns
 4 28
Exons
 0 3 28 36
Data
TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT
";

    #[test]
    fn it_parses_the_fixture() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = parse_lines(FIXTURE.lines())?;
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.introns(), &[Interval::new(4, 28)]);
        assert_eq!(record.exons(), &[Interval::new(0, 3), Interval::new(28, 36)]);
        assert_eq!(record.sequence(), "TTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT");

        Ok(())
    }

    #[test]
    fn it_resets_after_each_data_line() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let lines = [
            "Introns", "1 5", "Data", "ACGTACGT", "Exons", "0 2", "Data", "GGGG",
        ];
        let records = parse_lines(lines)?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].introns(), &[Interval::new(1, 5)]);
        assert!(records[0].exons().is_empty());
        assert!(records[1].introns().is_empty());
        assert_eq!(records[1].exons(), &[Interval::new(0, 2)]);
        assert_eq!(records[1].sequence(), "GGGG");

        Ok(())
    }

    #[test]
    fn it_does_not_enforce_section_order() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let lines = ["Exons", "0 3", "junk", "Introns", "4 28", "Data", "ACGT"];
        let records = parse_lines(lines)?;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].introns(), &[Interval::new(4, 28)]);
        assert_eq!(records[0].exons(), &[Interval::new(0, 3)]);

        Ok(())
    }

    #[test]
    fn it_consumes_the_line_after_a_marker_verbatim(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        let records = parse_lines(["Data", "Introns", "Data", ""])?;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence(), "Introns");
        assert_eq!(records[1].sequence(), "");

        Ok(())
    }

    #[test]
    fn it_fails_on_an_odd_number_of_values() {
        let err = parse_lines(["Introns", " 4 28 30", "Data", "ACGT"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: invalid introns line at line 2: expected an even number of values \
             to form (start, end) pairs, found 3 values\n\nline:  4 28 30"
        );
    }

    #[test]
    fn it_fails_when_a_section_is_repeated_within_a_record() {
        let err = parse_lines(["Exons", "0 3", "Exons", "5 9", "Data", "ACGT"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "builder error at line 4: singular field set multiple times: exons"
        );
    }

    #[test]
    fn it_fails_when_the_file_ends_after_a_marker() {
        let err = parse_lines(["Introns", "4 28", "Data"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: the file ended after the `Data` marker at line 3"
        );
    }

    #[test]
    fn it_fails_when_the_file_ends_inside_a_record() {
        let err = parse_lines(["Data", "ACGT", "Introns", "4 28"]).unwrap_err();
        assert!(matches!(
            err,
            Error::Parse(ParseError::AbruptEndInRecord)
        ));
    }

    #[test]
    fn it_parses_nothing_from_a_file_without_markers(
    ) -> std::result::Result<(), Box<dyn std::error::Error>> {
        assert!(parse_lines([">Seq 1", "12", ""])?.is_empty());
        assert!(parse_lines(Vec::<String>::new())?.is_empty());
        Ok(())
    }

    #[test]
    fn it_iterates_records_from_a_reader() -> std::result::Result<(), Box<dyn std::error::Error>>
    {
        let data = b"Introns\r\n1 3\r\nData\r\nACGTAC\r\nData\r\nTT\r\n";
        let mut reader = Reader::new(&data[..]);

        let records = reader.records().collect::<Result<Vec<_>>>()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence(), "ACGTAC");
        assert_eq!(records[1].sequence(), "TT");

        Ok(())
    }

    #[test]
    fn it_stops_iterating_after_an_error() {
        let data = b"Introns\n1\nData\nACGT\n";
        let mut reader = Reader::new(&data[..]);
        let mut records = reader.records();

        assert!(matches!(records.next(), Some(Err(_))));
        assert!(records.next().is_none());
    }
}
