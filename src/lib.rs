pub mod config;
pub mod encode;
pub mod generator;
pub use config::{Config, Distribution};
pub use sample::{iso_seconds, Sample};

mod sample;

use anyhow::Result;
use std::io::{self, BufWriter, Write};

// Generates the configured fixture and writes it to stdout.
pub fn emit(config: &Config) -> Result<()> {
    let samples = generator::generate(config)?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    encode::encode_samples(&mut writer, &samples)?;
    writer.flush()?;
    Ok(())
}
