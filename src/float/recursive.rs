// src/float/recursive.rs

use crate::common::{FftError, FftProcess, check_power_of_two, check_size};
use crate::sequence::ComplexArray;
use core::f64::consts::PI;
use num_complex::Complex64;
use super::radix2::{inverse_via_conjugation, unit_polar};

/// Even/odd recursion: transform both halves, then combine with `e^{-i*2*pi*k/N}`.
///
/// Depth is `log2(N)` and every level allocates its two halves. It produces the
/// same spectrum as [`fft`](super::fft) and is kept as an independent reference for it.
pub fn fft_recursive(buffer: &mut [Complex64]) -> Result<(), FftError> {
    check_power_of_two(buffer.len())?;
    debug_log!("fft_recursive: n = {}", buffer.len());

    recursive_core(buffer);
    Ok(())
}

/// Inverse of [`fft_recursive`], including the `1/N` normalization.
pub fn ifft_recursive(buffer: &mut [Complex64]) -> Result<(), FftError> {
    check_power_of_two(buffer.len())?;
    debug_log!("ifft_recursive: n = {}", buffer.len());

    inverse_via_conjugation(buffer, recursive_core);
    Ok(())
}

fn recursive_core(buffer: &mut [Complex64]) {
    let n = buffer.len();
    if n <= 1 {
        return;
    }

    let half = n / 2;
    let mut even = ComplexArray::strided(buffer, 0, half, 2);
    let mut odd = ComplexArray::strided(buffer, 1, half, 2);

    recursive_core(&mut even);
    recursive_core(&mut odd);

    for (k, (&e, &o)) in even.iter().zip(odd.iter()).enumerate() {
        let t = unit_polar(-2.0 * PI * k as f64 / n as f64) * o;
        buffer[k] = e + t;
        buffer[k + half] = e - t;
    }
}

/// Sized wrapper over [`fft_recursive`] / [`ifft_recursive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveFft {
    n: usize,
}

impl RecursiveFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_power_of_two(n)?;
        Ok(Self { n })
    }

    pub fn size(&self) -> usize {
        self.n
    }
}

impl FftProcess<Complex64> for RecursiveFft {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        check_size(self.n, buffer.len())?;

        if inverse {
            inverse_via_conjugation(buffer, recursive_core);
        } else {
            recursive_core(buffer);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "recursive_tests.rs"]
mod tests;
