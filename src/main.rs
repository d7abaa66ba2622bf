use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use pointgen::{input, Options, OutputFormat, DEFAULT_BOUND, DEFAULT_OUTPUT};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of points to generate, asked for on stdin when omitted
    #[arg(allow_hyphen_values = true)]
    count: Option<String>,

    /// Inclusive upper bound of both coordinates
    #[arg(long, short, default_value_t = DEFAULT_BOUND)]
    bound: u32,

    /// Seed for a reproducible instance
    #[arg(long, short)]
    seed: Option<u64>,

    /// Output file
    #[arg(long, short, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Layout of the output file
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Args {
    fn options(&self, count: usize) -> Options {
        Options {
            count,
            bound: self.bound,
            seed: self.seed,
            format: self.format,
        }
    }
}

fn main() -> Result<()> {
    pointgen::init_logging();

    let cli = Args::parse();

    let n = match &cli.count {
        Some(count) => input::parse_count(count)?,
        None => input::prompt_count(io::stdin().lock(), &mut io::stdout())?,
    };

    pointgen::write_instance_file(&cli.output, &cli.options(n))
        .with_context(|| format!("Unable to write {}", cli.output.display()))?;

    println!("Success");

    Ok(())
}
