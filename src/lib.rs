//! `splicefrag` is a crate for extracting labeled splice-site fragments from
//! annotated DNA sequences.
//!
//! The crate provides two main points of entry:
//!
//! - Parsing and reading annotated sequence files.
//! - Extracting true and false fragments around donor and acceptor sites.
//!
//! ## Parsing and reading sequence files
//!
//! An annotated sequence file is a series of records, each made up of an
//! `Introns` section, an `Exons` section, and a `Data` section. The line after
//! each marker holds the section's contents: whitespace-separated `(start,
//! end)` pairs for the interval sections and the nucleotides for the data
//! section. Every other line is ignored.
//!
//! You can use the [`Reader`] facility to read these files. Most users will
//! want to use [`Reader::records()`] to iterate over the parsed
//! [`SequenceRecord`](crate::record::SequenceRecord)s or
//! [`Reader::read_records()`] to collect all of them at once. If the lines are
//! already in memory, [`record::parse_lines()`] does the same without a reader.
//!
//! ## Extracting fragments
//!
//! Each splice type has a true position per intron: donors sit at the intron's
//! start and acceptors sit one before the intron's end. A _true_ fragment is
//! the [`Window`](crate::core::Window) of nucleotides around a true position. A
//! _false_ fragment is the window around an occurrence of the splice type's
//! motif (`GT` for donors and `AG` for acceptors) that is not a true splice
//! site. The [`OverlapPolicy`](crate::extract::collision::OverlapPolicy)
//! decides how close to a true site a false fragment may come.
//!
//! An [`Extractor`](crate::extract::Extractor) cannot be instantiated directly.
//! Instead, you should use [`extract::Builder`] to configure one.
//!
//! ```
//! use splicefrag::core::SpliceType;
//! use splicefrag::core::Window;
//! use splicefrag::extract::collision::OverlapPolicy;
//!
//! let data = b">Seq 1\nIntrons\n4 28\nExons\n0 4 28 36\nData\nTTTTGTCAGCACATACGTAGCGAGTTCAGATGTGCT\n";
//! let mut reader = splicefrag::Reader::new(&data[..]);
//! let records = reader.read_records()?;
//!
//! let extractor = splicefrag::extract::Builder::default()
//!     .window(Window::new(2, 3))
//!     .splice_type(SpliceType::Acceptor)
//!     .policy(OverlapPolicy::Permissive)
//!     .try_build()?;
//!
//! let fragments = extractor.extract(&records);
//! assert_eq!(fragments.true_fragments(), &["TCAGA"]);
//!
//! for fragment in fragments.labeled() {
//!     println!("{fragment}");
//! }
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The fragments can then be written out with the facilities in [`dataset`].

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod core;
pub mod dataset;
pub mod extract;
pub mod fragment;
pub mod line;
pub mod reader;
pub mod record;

pub use line::Line;

pub use self::reader::Reader;
