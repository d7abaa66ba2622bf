use std::{
    fs,
    io::BufReader,
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use pointgen::{parse_instance, validate, Instance, PointRecord, DEFAULT_BOUND, DEFAULT_OUTPUT};
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about = "Load and validate a generated instance", long_about = None)]
struct Args {
    /// Instance file, read as JSON when it ends in `.json`
    #[arg(default_value = DEFAULT_OUTPUT)]
    file: PathBuf,

    /// Inclusive upper bound the coordinates must respect
    #[arg(long, short, default_value_t = DEFAULT_BOUND)]
    bound: u32,
}

fn load(path: &Path) -> Result<Vec<PointRecord>> {
    let records = if path.extension().is_some_and(|ext| ext == "json") {
        let input = fs::read_to_string(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        Instance::from_json(&input)?.points
    } else {
        let file = fs::File::open(path)
            .with_context(|| format!("Unable to read {}", path.display()))?;
        parse_instance(BufReader::new(file))?
    };
    Ok(records)
}

fn main() -> Result<()> {
    pointgen::init_logging();

    let cli = Args::parse();

    let start_time = Instant::now();
    let records = load(&cli.file)?;
    let mid_time = Instant::now();

    debug!(count = records.len(), "instance parsed");

    let summary = validate::check(&records, cli.bound)
        .with_context(|| format!("{} is not a valid instance", cli.file.display()))?;

    let end_time = Instant::now();

    println!("Points = {}", summary.count);
    println!("Min = {}", summary.min);
    println!("Max = {}", summary.max);
    println!(
        "Input = {} seconds",
        (mid_time - start_time).as_millis() as f32 / 1000.0
    );
    println!(
        "Check = {} seconds",
        (end_time - mid_time).as_millis() as f32 / 1000.0
    );

    Ok(())
}
