//! One-hot encoding of fragments.

/// The nucleotides, in column order.
pub const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

/// The name of the label column.
pub const CLASS_COLUMN: &str = "class";

/// Encodes a single nucleotide as four indicator values.
///
/// Anything outside of `ACGT` (including lowercase bases) is encoded as all
/// ones.
///
/// # Examples
///
/// ```
/// use splicefrag::dataset::encode::one_hot;
///
/// assert_eq!(one_hot(b'A'), [1, 0, 0, 0]);
/// assert_eq!(one_hot(b'T'), [0, 0, 0, 1]);
/// assert_eq!(one_hot(b'N'), [1, 1, 1, 1]);
/// ```
pub fn one_hot(nucleotide: u8) -> [u8; 4] {
    match nucleotide {
        b'A' => [1, 0, 0, 0],
        b'C' => [0, 1, 0, 0],
        b'G' => [0, 0, 1, 0],
        b'T' => [0, 0, 0, 1],
        _ => [1, 1, 1, 1],
    }
}

/// Encodes a fragment as a flat row of indicator values.
///
/// # Examples
///
/// ```
/// use splicefrag::dataset::encode::encode;
///
/// assert_eq!(encode("GT"), vec![0, 0, 1, 0, 0, 0, 0, 1]);
/// ```
pub fn encode(fragment: &str) -> Vec<u8> {
    fragment.bytes().flat_map(one_hot).collect()
}

/// Gets the column names of a feature table for fragments of `width`
/// nucleotides.
///
/// # Examples
///
/// ```
/// use splicefrag::dataset::encode::header;
///
/// assert_eq!(
///     header(1),
///     vec!["class", "0_A", "0_C", "0_G", "0_T"]
/// );
/// ```
pub fn header(width: usize) -> Vec<String> {
    std::iter::once(CLASS_COLUMN.to_string())
        .chain((0..width).flat_map(|i| {
            NUCLEOTIDES
                .iter()
                .map(move |nucleotide| format!("{i}_{nucleotide}"))
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_encodes_four_columns_per_nucleotide() {
        let row = encode("ACGTN");
        assert_eq!(row.len(), 20);
        assert_eq!(&row[16..], &[1, 1, 1, 1]);
    }

    #[test]
    fn it_treats_lowercase_as_unknown() {
        assert_eq!(encode("a"), vec![1, 1, 1, 1]);
    }

    #[test]
    fn it_names_columns_by_offset_and_nucleotide() {
        let header = header(2);
        assert_eq!(header.len(), 9);
        assert_eq!(header[5], "1_A");
        assert_eq!(header[8], "1_T");
    }
}
