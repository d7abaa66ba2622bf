//! Generate an instance and persist it in one step.

use std::{fs, path::Path};

use tracing::info;

use crate::{
    error::Result,
    format::{write_instance, Instance},
    point::Point,
    sampler::{self, DEFAULT_BOUND},
};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Count line followed by tab separated `id x y` lines
    #[default]
    Text,
    /// `{"points":[{"id":..,"x":..,"y":..}]}`
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Options {
    pub count: usize,
    pub bound: u32,
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            count: 0,
            bound: DEFAULT_BOUND,
            seed: None,
            format: OutputFormat::Text,
        }
    }
}

/// Renders `points` in the requested format.
pub fn render(points: &[Point], format: OutputFormat) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Text => {
            let mut buf = Vec::new();
            write_instance(&mut buf, points)?;
            Ok(buf)
        }
        OutputFormat::Json => Ok(Instance::from_points(points).to_json()?.into_bytes()),
    }
}

/// Samples an instance and writes it to `path`.
///
/// Sampling and rendering finish before `path` is created, so an error
/// leaves no file behind.
pub fn write_instance_file(path: &Path, options: &Options) -> Result<Vec<Point>> {
    let points = match options.seed {
        Some(seed) => sampler::generate_seeded(options.count, options.bound, seed)?,
        None => sampler::generate(options.count, options.bound)?,
    };

    let contents = render(&points, options.format)?;
    fs::write(path, contents)?;

    info!(
        n = options.count,
        bound = options.bound,
        output = %path.display(),
        "instance written"
    );

    Ok(points)
}
