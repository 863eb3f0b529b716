//! An annotated sequence file reader.

use std::io::BufRead;
use std::io::{self};

use crate::Line;
use crate::record::Records;
use crate::record::SequenceRecord;
use crate::record::records;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// An error related to a [`Reader`].
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// An annotated sequence file reader.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates an annotated sequence file reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"Introns\n4 28\nData\nTTTTGTCAG";
    /// let reader = splicefrag::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"Introns\n4 28\nData\nTTTTGTCAG";
    /// let cursor = io::Cursor::new(data);
    ///
    /// let reader = splicefrag::Reader::new(cursor);
    /// assert_eq!(reader.inner().position(), 0);
    /// ```
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// The trailing line ending (`\n` or `\r\n`) is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"Introns\r\n4 28\nData";
    /// let mut reader = splicefrag::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 9);
    /// assert_eq!(buffer, "Introns");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 5);
    /// assert_eq!(buffer, "4 28");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 4);
    /// assert_eq!(buffer, "Data");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Attempts to read a [`Line`] from the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::line::Marker;
    /// use splicefrag::Line;
    ///
    /// let data = b"Introns\n4 28";
    /// let mut reader = splicefrag::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    /// assert_eq!(
    ///     reader.read_line(&mut buffer)?,
    ///     Some(Line::Marker(Marker::Introns))
    /// );
    /// assert!(matches!(
    ///     reader.read_line(&mut buffer)?,
    ///     Some(Line::Content(_))
    /// ));
    /// assert!(reader.read_line(&mut buffer)?.is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_line(&mut self, buffer: &mut String) -> Result<Option<Line>, Error> {
        let read = self.read_line_raw(buffer).map_err(Error::Io)?;

        match read {
            0 => Ok(None),
            // Classifying a line never fails.
            _ => Ok(Some(buffer.parse::<Line>().unwrap_or_else(|never| match never {}))),
        }
    }

    /// Returns an iterator over the [`SequenceRecord`]s in the underlying
    /// reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"Introns\n4 28\nData\nTTTTGTCAG\nData\nACGT";
    /// let mut reader = splicefrag::Reader::new(&data[..]);
    ///
    /// let records = reader
    ///     .records()
    ///     .map(|result| result.unwrap())
    ///     .collect::<Vec<_>>();
    /// assert_eq!(records.len(), 2);
    /// ```
    pub fn records(&mut self) -> Records<'_, T> {
        Records::new(self)
    }

    /// Reads every [`SequenceRecord`] in the underlying reader.
    ///
    /// Fails on the first malformed record, so either every record is
    /// returned or none are.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"Introns\n4 28\nData\nTTTTGTCAG";
    /// let mut reader = splicefrag::Reader::new(&data[..]);
    ///
    /// let records = reader.read_records()?;
    /// assert_eq!(records.len(), 1);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn read_records(&mut self) -> Result<Vec<SequenceRecord>, records::Error> {
        self.records().collect()
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Reads a line from a buffered reader.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
