use std::{error::Error, fmt};

use crate::parser::Assignment;

#[derive(Debug)]
pub struct RangeError {
    error: String,
}

impl RangeError {
    pub fn new<S: ToString>(error: S) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RangeError: {}", self.error)
    }
}

impl Error for RangeError {}

/// Decodes `d` into an `n`-bit vector, most significant bit first.
pub fn dec_to_bits(d: u64, n: usize) -> Result<Vec<bool>, Box<dyn Error>> {
    if n > 64 || (n < 64 && d >= 1 << n) {
        return Err(Box::new(RangeError::new(format!(
            "Integer {} outside of {}-bit uint range",
            d, n
        ))));
    }

    Ok((0..n).rev().map(|i| (d >> i) & 1 == 1).collect())
}

pub fn bits_to_dec(bits: &[bool]) -> Result<u64, Box<dyn Error>> {
    if bits.len() > 64 {
        return Err(Box::new(RangeError::new(format!(
            "{} bits do not fit in a 64-bit uint",
            bits.len()
        ))));
    }

    Ok(bits.iter().fold(0, |acc, &bit| (acc << 1) | bit as u64))
}

pub fn bind(vnames: &[char], bits: &[bool]) -> Assignment {
    vnames.iter().copied().zip(bits.iter().copied()).collect()
}
