use crate::sample::Sample;
use log::debug;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("sample {index} has non-finite value {value}")]
    NonFinite { index: usize, value: f64 },
    #[error("error serializing samples")]
    Serialize(#[from] serde_json::Error),
    #[error("error writing samples")]
    Io(#[from] io::Error),
}

fn check_finite(samples: &[Sample]) -> Result<(), EncodeError> {
    match samples.iter().position(|s| !s.value.is_finite()) {
        Some(index) => Err(EncodeError::NonFinite {
            index,
            value: samples[index].value,
        }),
        None => Ok(()),
    }
}

// Writes the samples as one compact JSON array followed by a newline.
// Nothing is written if any value is NaN or infinite.
pub fn encode_samples<W: Write>(writable: &mut W, samples: &[Sample]) -> Result<(), EncodeError> {
    check_finite(samples)?;
    serde_json::to_writer(&mut *writable, samples)?;
    writable.write_all(b"\n")?;
    writable.flush()?;
    debug!("encoded {} samples", samples.len());
    Ok(())
}

pub fn to_string(samples: &[Sample]) -> Result<String, EncodeError> {
    let mut buf = Vec::new();
    encode_samples(&mut buf, samples)?;
    // serde_json only emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
