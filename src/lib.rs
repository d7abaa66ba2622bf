//! Generator for test instances of distinct integer points on a square grid.

pub mod error;
pub mod format;
pub mod generator;
pub mod input;
pub mod point;
pub mod sampler;
pub mod validate;

pub use error::{Error, Result};
pub use format::{format, parse_instance, records, write_instance, Instance};
pub use generator::{write_instance_file, Options, OutputFormat};
pub use point::{Point, PointRecord};
pub use sampler::{capacity, generate, generate_seeded, generate_with, DEFAULT_BOUND};

/// Where the generator writes when no path is given.
pub const DEFAULT_OUTPUT: &str = "source.txt";

/// Installs a stderr `tracing` subscriber filtered by `RUST_LOG`, `warn` by default.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
