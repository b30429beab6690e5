use std::fs;
use std::io::Write;
use std::path::PathBuf;

use log::debug;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use nf_folding::Nussinov;
use nf_structure::DotBracketVec;

use nussfold::input_parsers::ruler;
use nussfold::input_parsers::read_sequence_input;
use nussfold::gen_dot::dot_script;


#[derive(Debug, Args)]
pub struct FoldInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Args)]
pub struct FoldingParameters {
    /// Smallest allowed separation j - i between paired positions.
    #[arg(short = 'l', long, default_value_t = 0)]
    pub min_loop_length: usize,

    /// Fill the DP table width-parallel (for long sequences).
    #[arg(long)]
    pub parallel: bool,
}

#[derive(Debug, Parser)]
#[command(name = "nf-fold")]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub fold: FoldInput,

    #[command(flatten, next_help_heading = "Folding parameters")]
    pub params: FoldingParameters,

    /// Write a Graphviz DOT script of the structure to this path.
    #[arg(long, value_name = "PATH")]
    pub dot: Option<PathBuf>,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.fold.verbose);

    let (header, sequence) = read_sequence_input(&cli.fold.input)?;
    if let Some(h) = header {
        println!("{}", h.yellow())
    }

    let dp = if cli.params.parallel {
        Nussinov::new_parallel(sequence, cli.params.min_loop_length)
    } else {
        Nussinov::new(sequence, cli.params.min_loop_length)
    };
    let pairs = dp.fold();
    let structure = DotBracketVec::try_from(&pairs)?;

    if !dp.is_empty() {
        info!("{}", ruler(dp.len() - 1).magenta());
    }
    println!("{}\n{} {}", dp.sequence(), structure, format!("{:>4}", dp.score()).green());
    if !dp.is_empty() {
        info!("{}", ruler(dp.len() - 1).magenta());
    }
    for &(i, j) in &pairs.pairs {
        debug!("pair {} - {}", i, j);
    }

    if let Some(path) = &cli.dot {
        fs::write(path, dot_script(dp.sequence(), &pairs))?;
        info!("DOT script written to {}", path.display());
    }

    Ok(())
}
