//! Chirp Z-Transform (Bluestein's algorithm).
//!
//! An N-point DFT for any N >= 1, computed as a convolution with a quadratic-phase chirp.
//! The convolution runs through the radix-2 transform on buffers zero-padded to a power of
//! two `L >= 2N - 1`, which is long enough that the circular convolution never wraps
//! into the samples that are read back.

use alloc::vec::Vec;
use crate::common::{FftError, FftProcess, check_non_empty, check_size};
use crate::sequence::ComplexArray;
use core::f64::consts::PI;
use num_complex::Complex64;
use super::radix2::{dit_fft_core, inverse_via_conjugation, unit_polar};

/// Chirp of length `2n - 1`: entry `j` is `e^{-i*pi*(j - n + 1)^2 / n}`.
///
/// Symmetric about index `n - 1`. The squared offset is reduced modulo `2n` before it
/// becomes an angle, so the phase stays accurate for large `n`.
///
/// # Panics
/// If `n` is zero.
pub fn chirp(n: usize) -> ComplexArray {
    assert!(n > 0, "chirp length must be at least 1");

    let period = 2 * n as u128;
    let unit = PI / n as f64;
    (0..2 * n - 1)
        .map(|j| {
            let offset = (j as i128 - (n as i128 - 1)).unsigned_abs();
            let phase = (offset * offset) % period;
            unit_polar(-unit * phase as f64)
        })
        .collect()
}

/// Smallest power of two that holds the `2n - 1` point linear convolution.
pub fn padded_len(n: usize) -> usize {
    (2 * n).saturating_sub(1).next_power_of_two()
}

/// Forward DFT of any non-zero length, in place.
pub fn czt(buffer: &mut [Complex64]) -> Result<(), FftError> {
    check_non_empty(buffer.len())?;
    debug_log!("czt: n = {}, padded to {}", buffer.len(), padded_len(buffer.len()));

    chirp_core(buffer);
    Ok(())
}

/// Inverse of [`czt`], including the `1/N` normalization.
pub fn iczt(buffer: &mut [Complex64]) -> Result<(), FftError> {
    check_non_empty(buffer.len())?;
    debug_log!("iczt: n = {}, padded to {}", buffer.len(), padded_len(buffer.len()));

    inverse_via_conjugation(buffer, chirp_core);
    Ok(())
}

fn chirp_core(buffer: &mut [Complex64]) {
    let n = buffer.len();
    let w = chirp(n);
    let l = padded_len(n);
    // w[n - 1 + i] = e^{-i*pi*i^2/n}
    let centre = &w[n - 1..];

    let mut y = ComplexArray::new(l);
    for (dst, (&x, &c)) in y.iter_mut().zip(buffer.iter().zip(centre)) {
        *dst = x * c;
    }

    let mut v = ComplexArray::new(l);
    for (dst, &c) in v.iter_mut().zip(w.iter()) {
        *dst = c.inv();
    }

    // Y and V are independent.
    dit_fft_core(&mut y);
    dit_fft_core(&mut v);

    let mut g = &y * &v;
    inverse_via_conjugation(&mut g, dit_fft_core);

    for (dst, (&gk, &c)) in buffer.iter_mut().zip(g[n - 1..].iter().zip(centre)) {
        *dst = gk * c;
    }
}

/// Direct `O(N^2)` DFT, for checking the fast paths and for very small inputs.
pub fn dft(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .map(|(j, &x)| {
                    // k * j mod n keeps the angle in [0, 2*pi)
                    let phase = ((k as u128 * j as u128) % n as u128) as f64;
                    x * unit_polar(-2.0 * PI * phase / n as f64)
                })
                .sum()
        })
        .collect()
}

/// Sized wrapper over [`czt`] / [`iczt`]. Accepts every non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChirpFft {
    n: usize,
}

impl ChirpFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_non_empty(n)?;
        Ok(Self { n })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    /// Length of the power-of-two work buffers used internally.
    pub fn padded_size(&self) -> usize {
        padded_len(self.n)
    }
}

impl FftProcess<Complex64> for ChirpFft {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        check_size(self.n, buffer.len())?;

        if inverse {
            inverse_via_conjugation(buffer, chirp_core);
        } else {
            chirp_core(buffer);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "chirp_tests.rs"]
mod tests;
