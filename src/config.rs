use thiserror::Error;

// Upper bound on the sequence length. One sample per day, so this keeps
// every timestamp a few thousand years from the generation instant, well
// inside what chrono can represent.
pub const MAX_LENGTH: usize = 1_000_000;

pub const NORMAL_FIXTURE_SEED: u64 = 42;
pub const NORMAL_FIXTURE_LENGTH: usize = 10_000;
pub const UNIFORM_FIXTURE_LENGTH: usize = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    // Mean 0, standard deviation 1. Without a seed the generator is seeded
    // from the operating system.
    Normal { seed: Option<u64> },
    // Half-open [0, 1), always seeded from the operating system.
    Uniform,
}

impl Default for Distribution {
    fn default() -> Self {
        Distribution::Normal {
            seed: Some(NORMAL_FIXTURE_SEED),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    // Number of samples, one per day counting back from now.
    pub length: usize,
    pub distribution: Distribution,
}

impl Default for Config {
    fn default() -> Self {
        Self::normal_fixture()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("length must be greater than zero")]
    EmptyLength,
    #[error("length {0} exceeds the maximum sample count")]
    LengthTooLarge(usize),
}

impl Config {
    /// Seeded standard-normal profile: seed 42, 10,000 samples.
    pub fn normal_fixture() -> Self {
        Self {
            length: NORMAL_FIXTURE_LENGTH,
            distribution: Distribution::Normal {
                seed: Some(NORMAL_FIXTURE_SEED),
            },
        }
    }

    /// Unseeded uniform profile: 1,000 samples.
    pub fn uniform_fixture() -> Self {
        Self {
            length: UNIFORM_FIXTURE_LENGTH,
            distribution: Distribution::Uniform,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.length == 0 {
            return Err(ConfigError::EmptyLength);
        }
        if self.length > MAX_LENGTH {
            return Err(ConfigError::LengthTooLarge(self.length));
        }
        Ok(())
    }
}
