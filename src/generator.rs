use crate::{
    config::{Config, ConfigError, Distribution},
    sample::Sample,
};
use chrono::{DateTime, Duration, SubsecRound, Utc};
use log::debug;
use rand::{
    distributions::Standard,
    rngs::{OsRng, StdRng},
    Rng, SeedableRng,
};
use rand_distr::StandardNormal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("error validating config")]
    InvalidConfig(#[from] ConfigError),
    #[error("failed to seed random number generator")]
    Entropy(#[from] rand::Error),
    #[error("timestamp for sample {0} is out of range")]
    TimestampOutOfRange(usize),
}

fn rng(seed: Option<u64>) -> Result<StdRng, rand::Error> {
    match seed {
        Some(seed) => Ok(StdRng::seed_from_u64(seed)),
        None => StdRng::from_rng(OsRng),
    }
}

pub fn draw_values(distribution: &Distribution, n: usize) -> Result<Vec<f64>, GenerateError> {
    let values = match *distribution {
        Distribution::Normal { seed } => rng(seed)?
            .sample_iter::<f64, _>(StandardNormal)
            .take(n)
            .collect(),
        Distribution::Uniform => rng(None)?
            .sample_iter::<f64, _>(Standard)
            .take(n)
            .collect(),
    };
    Ok(values)
}

/// Builds the sample sequence anchored at `now`.
///
/// Sample `i` is stamped `i` whole days before `now`, truncated to the
/// second, so the result is strictly descending in time.
pub fn generate_at(config: &Config, now: DateTime<Utc>) -> Result<Vec<Sample>, GenerateError> {
    config.validate()?;

    let anchor = now.trunc_subsecs(0);
    let values = draw_values(&config.distribution, config.length)?;
    debug!(
        "drew {} values from {:?}, anchored at {}",
        values.len(),
        config.distribution,
        anchor
    );

    values
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let days = i64::try_from(i).map_err(|_| GenerateError::TimestampOutOfRange(i))?;
            let timestamp = anchor
                .checked_sub_signed(Duration::days(days))
                .ok_or(GenerateError::TimestampOutOfRange(i))?;
            Ok(Sample { timestamp, value })
        })
        .collect()
}

pub fn generate(config: &Config) -> Result<Vec<Sample>, GenerateError> {
    generate_at(config, Utc::now())
}
