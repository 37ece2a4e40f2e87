use crate::common::{FftError, FftProcess, check_power_of_two, check_size};
use num_complex::Complex64;
use super::radix2::{dit_fft_core, inverse_via_conjugation};

/// Forward FFT in place: `X_k = sum_n x_n * e^{-i*2*pi*k*n/N}`, natural order.
///
/// The length must be a non-zero power of two. Anything else is rejected before the
/// buffer is touched. Use [`czt`](super::czt) for other lengths.
pub fn fft(buffer: &mut [Complex64]) -> Result<(), FftError> {
    check_power_of_two(buffer.len())?;
    debug_log!("fft: n = {}", buffer.len());

    dit_fft_core(buffer);
    Ok(())
}

/// Inverse of [`fft`], including the `1/N` normalization.
pub fn ifft(buffer: &mut [Complex64]) -> Result<(), FftError> {
    check_power_of_two(buffer.len())?;
    debug_log!("ifft: n = {}", buffer.len());

    inverse_via_conjugation(buffer, dit_fft_core);
    Ok(())
}

/// Radix-2 transform sized once at construction.
///
/// Twiddles are generated on the fly by repeated squaring, so the engine holds no tables.
/// It only remembers the size it was validated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CplxFft {
    n: usize,
}

impl CplxFft {
    pub fn new(n: usize) -> Result<Self, FftError> {
        check_power_of_two(n)?;
        Ok(Self { n })
    }

    /// Transform size this engine accepts.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Executes the FFT in-place.
    pub fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        check_size(self.n, buffer.len())?;

        if inverse {
            inverse_via_conjugation(buffer, dit_fft_core);
        } else {
            dit_fft_core(buffer);
        }

        Ok(())
    }
}

impl FftProcess<Complex64> for CplxFft {
    fn process(&self, buffer: &mut [Complex64], inverse: bool) -> Result<(), FftError> {
        CplxFft::process(self, buffer, inverse)
    }
}

#[cfg(test)]
#[path = "complex_tests.rs"]
mod tests;
