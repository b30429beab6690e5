use clap::Parser;
use colored::*;
use anyhow::Result;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use nf_folding::Base;
use nf_folding::NucleotideVec;


#[derive(Debug, Parser)]
#[command(name = "nf-randseq")]
#[command(version, about = "Generate random nucleotide sequences")]
pub struct Cli {
    /// Sequence length.
    #[arg(value_name = "LENGTH")]
    length: usize,

    /// Number of sequences to generate.
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng: StdRng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    const BASES: [Base; 4] = [Base::A, Base::C, Base::G, Base::U];
    for k in 0..cli.count {
        let seq = NucleotideVec(
            (0..cli.length).map(|_| BASES[rng.random_range(0..4)]).collect(),
        );
        println!("{}", format!(">random-{:03}", k).yellow());
        println!("{}", seq);
    }

    Ok(())
}
