//! Extracts labeled donor and acceptor fragments from an annotated sequence
//! file.
//!
//! ```shell
//! cargo run --release --bin=splicefrag --features=binaries -- 10 10 sequences.txt
//! ```
//!
//! For each splice type, the true fragments (labeled `1`) are written followed
//! by the false fragments (labeled `0`). By default, donors are written to
//! `donor.dat` and acceptors to `acceptor.dat`.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use flate2::read::GzDecoder;
use omics::coordinate::position::Number;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use splicefrag::core::SpliceType;
use splicefrag::core::Window;
use splicefrag::dataset;
use splicefrag::extract;
use splicefrag::extract::Fragments;
use splicefrag::extract::collision::OverlapPolicy;
use splicefrag::extract::scanner::Motif;
use splicefrag::record::SequenceRecord;
use tracing::debug;
use tracing::info;
use tracing_log::AsTrace as _;
use tracing_subscriber::EnvFilter;

////////////////////////////////////////////////////////////////////////////////////////
// Arguments
////////////////////////////////////////////////////////////////////////////////////////

/// Ensures that the input file exists.
fn existing_file(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);

    if path.is_file() {
        Ok(path)
    } else {
        Err(format!("file does not exist: {value}"))
    }
}

/// Extracts labeled splice-site fragments for training classifiers.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// The number of nucleotides to keep before each site.
    a: Number,

    /// The number of nucleotides to keep from each site onward.
    b: Number,

    /// The annotated sequence file (optionally gzipped).
    #[arg(value_parser = existing_file)]
    input: PathBuf,

    /// Where to write the donor fragments.
    #[arg(default_value = "donor.dat")]
    donors: PathBuf,

    /// Where to write the acceptor fragments.
    #[arg(default_value = "acceptor.dat")]
    acceptors: PathBuf,

    /// Allow false fragments to overlap the windows of true sites.
    #[arg(long, default_value_t = false)]
    overlap: bool,

    /// The motif that marks candidate donor sites.
    #[arg(long, default_value_t = Motif::donor())]
    donor_motif: Motif,

    /// The motif that marks candidate acceptor sites.
    #[arg(long, default_value_t = Motif::acceptor())]
    acceptor_motif: Motif,

    /// Only extract one splice type (`donor` or `acceptor`).
    #[arg(long)]
    only: Option<SpliceType>,

    /// A directory within which to also write one-hot feature tables.
    #[arg(long)]
    features: Option<PathBuf>,

    /// Downsample the larger class to the size of the smaller one.
    #[arg(long, default_value_t = false)]
    balance: bool,

    /// The seed to use when balancing.
    #[arg(long, requires = "balance")]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: Verbosity,
}

impl Args {
    /// Gets the splice types to extract.
    fn splice_types(&self) -> Vec<SpliceType> {
        match self.only {
            Some(splice_type) => vec![splice_type],
            None => SpliceType::ALL.to_vec(),
        }
    }

    /// Gets the output path for a splice type.
    fn output(&self, splice_type: SpliceType) -> &Path {
        match splice_type {
            SpliceType::Donor => &self.donors,
            SpliceType::Acceptor => &self.acceptors,
        }
    }

    /// Gets the motif for a splice type.
    fn motif(&self, splice_type: SpliceType) -> &Motif {
        match splice_type {
            SpliceType::Donor => &self.donor_motif,
            SpliceType::Acceptor => &self.acceptor_motif,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Balancing
////////////////////////////////////////////////////////////////////////////////////////

/// Randomly keeps `amount` of the fragments, preserving their order.
fn downsample(fragments: Vec<String>, amount: usize, rng: &mut StdRng) -> Vec<String> {
    if fragments.len() <= amount {
        return fragments;
    }

    let mut keep = index::sample(rng, fragments.len(), amount).into_vec();
    keep.sort_unstable();

    let mut keep = keep.into_iter().peekable();
    fragments
        .into_iter()
        .enumerate()
        .filter_map(|(i, fragment)| {
            if keep.peek() == Some(&i) {
                keep.next();
                Some(fragment)
            } else {
                None
            }
        })
        .collect()
}

/// Downsamples the larger of the two classes to the size of the smaller one.
fn balance(fragments: Fragments, rng: &mut StdRng) -> Fragments {
    let (trues, falses) = fragments.into_parts();
    let amount = trues.len().min(falses.len());

    Fragments::new(
        downsample(trues, amount, rng),
        downsample(falses, amount, rng),
    )
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// An output file, fully rendered before anything is written.
struct Output {
    /// Where to write the file.
    path: PathBuf,

    /// The contents of the file.
    contents: Vec<u8>,
}

/// Reads the sequence records from `path`.
fn read_records(path: &Path) -> Result<Vec<SequenceRecord>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;

    let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some("gz") => Box::new(BufReader::new(GzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    splicefrag::Reader::new(inner)
        .read_records()
        .with_context(|| format!("parsing {}", path.display()))
}

/// Gets the number of nucleotides in each row of a feature table.
fn feature_width(window: Window) -> Result<usize> {
    window
        .width()
        .and_then(|width| usize::try_from(width).ok())
        .with_context(|| {
            format!(
                "a window of {} + {} nucleotides is too wide for a feature table",
                window.left(),
                window.right()
            )
        })
}

fn throw(args: &Args) -> Result<()> {
    let window = Window::new(args.a, args.b);
    let policy = OverlapPolicy::from(args.overlap);

    info!("reading records from {}", args.input.display());
    let records = read_records(&args.input)?;
    info!("read {} records", records.len());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut outputs = Vec::new();

    for splice_type in args.splice_types() {
        info!("extracting {splice_type} fragments ({policy} overlap policy)");

        let extractor = extract::Builder::default()
            .window(window)
            .splice_type(splice_type)
            .policy(policy)
            .motif(args.motif(splice_type).clone())
            .try_build()
            .context("configuring the extractor")?;

        let mut fragments = extractor.extract(&records);

        debug!(
            "{splice_type}: {} true fragments, {} false fragments",
            fragments.true_fragments().len(),
            fragments.false_fragments().len()
        );

        if args.balance {
            fragments = balance(fragments, &mut rng);
            debug!("{splice_type}: balanced to {} fragments", fragments.len());
        }

        let mut contents = Vec::new();
        dataset::write_labeled(&mut contents, &fragments)
            .with_context(|| format!("rendering {splice_type} fragments"))?;
        outputs.push(Output {
            path: args.output(splice_type).to_path_buf(),
            contents,
        });

        if let Some(directory) = &args.features {
            let mut contents = Vec::new();
            dataset::write_feature_table(&mut contents, &fragments, feature_width(window)?)
                .with_context(|| format!("rendering {splice_type} feature table"))?;
            outputs.push(Output {
                path: directory.join(format!("{splice_type}_{}_{}.csv", args.a, args.b)),
                contents,
            });
        }
    }

    if let Some(directory) = &args.features {
        std::fs::create_dir_all(directory)
            .with_context(|| format!("creating {}", directory.display()))?;
    }

    for output in outputs {
        info!("writing {}", output.path.display());
        std::fs::write(&output.path, output.contents)
            .with_context(|| format!("writing {}", output.path.display()))?;
    }

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    match std::env::var("RUST_LOG") {
        Ok(_) => tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(args.verbose.log_level_filter().as_trace())
            .init(),
    };

    throw(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn it_downsamples_while_keeping_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let fragments = strings(&["A", "B", "C", "D", "E", "F"]);

        let kept = downsample(fragments.clone(), 3, &mut rng);
        assert_eq!(kept.len(), 3);

        let positions = kept
            .iter()
            .map(|fragment| fragments.iter().position(|f| f == fragment).unwrap())
            .collect::<Vec<_>>();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn it_balances_the_majority_class() {
        let mut rng = StdRng::seed_from_u64(7);
        let fragments = Fragments::new(strings(&["T1", "T2"]), strings(&["F1", "F2", "F3", "F4"]));

        let balanced = balance(fragments, &mut rng);
        assert_eq!(balanced.true_fragments(), &["T1", "T2"]);
        assert_eq!(balanced.false_fragments().len(), 2);
    }

    #[test]
    fn it_balances_the_same_way_for_the_same_seed() {
        let fragments = Fragments::new(
            strings(&["T1"]),
            strings(&["F1", "F2", "F3", "F4", "F5", "F6"]),
        );

        let first = balance(fragments.clone(), &mut StdRng::seed_from_u64(42));
        let second = balance(fragments, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn it_sizes_feature_tables_by_the_window() -> Result<()> {
        assert_eq!(feature_width(Window::new(2, 3))?, 5);

        let err = feature_width(Window::new(Number::MAX, 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "a window of {} + 1 nucleotides is too wide for a feature table",
                Number::MAX
            )
        );

        Ok(())
    }

    #[test]
    fn it_parses_arguments() {
        let args = Args::try_parse_from([
            "splicefrag",
            "2",
            "3",
            "Cargo.toml",
            "--only",
            "acceptor",
            "--overlap",
            "--donor-motif",
            "GC",
        ])
        .unwrap();

        assert_eq!(args.splice_types(), vec![SpliceType::Acceptor]);
        assert_eq!(args.output(SpliceType::Acceptor), Path::new("acceptor.dat"));
        assert_eq!(args.motif(SpliceType::Donor).as_str(), "GC");
        assert_eq!(args.motif(SpliceType::Acceptor).as_str(), "AG");
        assert!(args.overlap);
    }

    #[test]
    fn it_rejects_a_missing_input() {
        assert!(Args::try_parse_from(["splicefrag", "2", "3", "does-not-exist.txt"]).is_err());
    }

    #[test]
    fn it_rejects_an_unknown_splice_type() {
        assert!(
            Args::try_parse_from(["splicefrag", "2", "3", "Cargo.toml", "--only", "branch"])
                .is_err()
        );
    }
}
