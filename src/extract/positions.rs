//! True splice site positions.

use crate::core::SitePosition;
use crate::core::SpliceType;
use crate::record::SequenceRecord;

/// Gets the true splice site positions of a record.
///
/// Positions come out in intron order, not sorted by position.
///
/// # Examples
///
/// ```
/// use splicefrag::core::SitePosition;
/// use splicefrag::core::SpliceType;
/// use splicefrag::extract::positions::true_positions;
/// use splicefrag::record::parse_lines;
///
/// let records = parse_lines(["Introns", "30 33 4 28", "Data", "ACGT"])?;
///
/// assert_eq!(
///     true_positions(&records[0], SpliceType::Donor),
///     vec![SitePosition::At(30), SitePosition::At(4)]
/// );
/// assert_eq!(
///     true_positions(&records[0], SpliceType::Acceptor),
///     vec![SitePosition::At(32), SitePosition::At(27)]
/// );
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn true_positions(record: &SequenceRecord, splice_type: SpliceType) -> Vec<SitePosition> {
    record
        .introns()
        .iter()
        .map(|intron| splice_type.position(intron))
        .collect()
}
