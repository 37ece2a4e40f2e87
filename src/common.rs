// src/common.rs

use core::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum FftError {
    /// Zero-length input; no transform is defined for it.
    EmptyInput,
    /// The radix-2 paths need a power-of-two length. Carries the rejected length.
    NotPowerOfTwo(usize),
    /// A sized engine was handed a buffer of a different length.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for FftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "Transform length must be at least 1, got 0"),
            FftError::NotPowerOfTwo(len) => write!(f, "Size must be a power of 2, got {}", len),
            FftError::SizeMismatch { expected, actual } => write!(
                f,
                "Data buffer size ({}) does not match FFT size ({})",
                actual, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Common surface of the transform engines, so callers can swap one for another.
pub trait FftProcess<T> {
    fn process(&self, buffer: &mut [T], inverse: bool) -> Result<(), FftError>;
}

pub(crate) fn check_non_empty(len: usize) -> Result<(), FftError> {
    if len == 0 {
        return Err(FftError::EmptyInput);
    }
    Ok(())
}

pub(crate) fn check_power_of_two(len: usize) -> Result<(), FftError> {
    check_non_empty(len)?;
    if !len.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo(len));
    }
    Ok(())
}

pub(crate) fn check_size(expected: usize, actual: usize) -> Result<(), FftError> {
    if expected != actual {
        return Err(FftError::SizeMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
#[path = "common_tests.rs"]
mod tests;
