//! A line within an annotated sequence file.

use std::convert::Infallible;
use std::str::FromStr;

/// The marker preceding an intron line.
pub const INTRONS_MARKER: &str = "Introns";

/// The marker preceding an exon line.
pub const EXONS_MARKER: &str = "Exons";

/// The marker preceding a sequence line.
pub const DATA_MARKER: &str = "Data";

////////////////////////////////////////////////////////////////////////////////////////
// Markers
////////////////////////////////////////////////////////////////////////////////////////

/// A section marker.
///
/// Each marker is followed by exactly one line holding the section's contents.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Marker {
    /// The `Introns` marker.
    Introns,

    /// The `Exons` marker.
    Exons,

    /// The `Data` marker.
    Data,
}

impl Marker {
    /// Attempts to match a line against the known section markers.
    ///
    /// Only exact matches are considered markers.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::line::Marker;
    ///
    /// assert_eq!(Marker::from_line("Introns"), Some(Marker::Introns));
    /// assert_eq!(Marker::from_line("Data"), Some(Marker::Data));
    /// assert_eq!(Marker::from_line(" Data"), None);
    /// ```
    pub fn from_line(s: &str) -> Option<Self> {
        match s {
            INTRONS_MARKER => Some(Self::Introns),
            EXONS_MARKER => Some(Self::Exons),
            DATA_MARKER => Some(Self::Data),
            _ => None,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::Introns => write!(f, "{INTRONS_MARKER}"),
            Marker::Exons => write!(f, "{EXONS_MARKER}"),
            Marker::Data => write!(f, "{DATA_MARKER}"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Lines
////////////////////////////////////////////////////////////////////////////////////////

/// A line within an annotated sequence file.
///
/// Classifying a line never fails: anything that isn't a marker is content,
/// and it's up to the record parser to decide whether that content means
/// anything in its current state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Line {
    /// An empty line.
    Empty,

    /// A section marker line.
    Marker(Marker),

    /// Any other line.
    Content(String),
}

impl Line {
    /// Gets the textual contents of the line.
    ///
    /// # Examples
    ///
    /// ```
    /// use splicefrag::Line;
    ///
    /// assert_eq!("".parse::<Line>()?.as_str(), "");
    /// assert_eq!("Exons".parse::<Line>()?.as_str(), "Exons");
    /// assert_eq!(" 0 3 28 36".parse::<Line>()?.as_str(), " 0 3 28 36");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn as_str(&self) -> &str {
        match self {
            Line::Empty => "",
            Line::Marker(Marker::Introns) => INTRONS_MARKER,
            Line::Marker(Marker::Exons) => EXONS_MARKER,
            Line::Marker(Marker::Data) => DATA_MARKER,
            Line::Content(s) => s.as_str(),
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Line {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::Empty);
        }

        Ok(match Marker::from_line(s) {
            Some(marker) => Self::Marker(marker),
            None => Self::Content(s.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_classifies_marker_lines() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("Introns".parse::<Line>()?, Line::Marker(Marker::Introns));
        assert_eq!("Exons".parse::<Line>()?, Line::Marker(Marker::Exons));
        assert_eq!("Data".parse::<Line>()?, Line::Marker(Marker::Data));
        Ok(())
    }

    #[test]
    fn it_requires_markers_to_match_exactly() -> Result<(), Box<dyn std::error::Error>> {
        assert!(matches!("introns".parse::<Line>()?, Line::Content(_)));
        assert!(matches!("Data ".parse::<Line>()?, Line::Content(_)));
        assert!(matches!(">Seq 21 Len:".parse::<Line>()?, Line::Content(_)));
        Ok(())
    }

    #[test]
    fn it_classifies_empty_lines() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!("".parse::<Line>()?, Line::Empty);
        assert!(matches!(" ".parse::<Line>()?, Line::Content(_)));
        Ok(())
    }

    #[test]
    fn it_displays_lines_as_read() -> Result<(), Box<dyn std::error::Error>> {
        for s in ["", "Introns", " 4 28", "TTTTGTCAG"] {
            assert_eq!(s.parse::<Line>()?.to_string(), s);
        }

        Ok(())
    }
}
