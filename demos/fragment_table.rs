//! Renders the labeled fragments of an annotated sequence file as a table.
//!
//! ```
//! cargo run --release --example fragment_table <INPUT> <A> <B> [donor|acceptor]
//! ```

use std::env;
use std::fs::File;
use std::io::BufReader;

use splicefrag::core::SpliceType;
use splicefrag::core::Window;
use splicefrag::extract;
use splicefrag::extract::collision::OverlapPolicy;
use tabled::builder::Builder;
use tabled::settings::Alignment;
use tabled::settings::Style;
use tabled::settings::object::Rows;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let src = env::args().nth(1).expect("missing src");
    let a = env::args().nth(2).expect("missing A").parse::<u64>()?;
    let b = env::args().nth(3).expect("missing B").parse::<u64>()?;

    let splice_types = match env::args().nth(4) {
        Some(value) => vec![value.parse::<SpliceType>()?],
        None => SpliceType::ALL.to_vec(),
    };

    let records = File::open(src)
        .map(BufReader::new)
        .map(splicefrag::Reader::new)?
        .read_records()?;

    let mut builder = Builder::default();
    builder.push_record(["Type", "Policy", "Label", "Fragment"]);

    for splice_type in splice_types {
        for policy in [OverlapPolicy::Strict, OverlapPolicy::Permissive] {
            let fragments = extract::Builder::default()
                .window(Window::new(a, b))
                .splice_type(splice_type)
                .policy(policy)
                .try_build()?
                .extract(&records);

            for fragment in fragments.labeled() {
                builder.push_record([
                    splice_type.to_string(),
                    policy.to_string(),
                    fragment.label().to_string(),
                    fragment.content().to_string(),
                ]);
            }
        }
    }

    let table = builder
        .build()
        .with(Style::rounded())
        .modify(Rows::new(1..), Alignment::left())
        .to_string();

    println!("{}", table);

    Ok(())
}
