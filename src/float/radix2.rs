// src/float/radix2.rs

use super::bitrev::bit_reverse_permute;
use core::f64::consts::PI;
use num_complex::Complex64;

/// sin/cos that works with and without `std`.
pub(crate) fn sin_cos(angle: f64) -> (f64, f64) {
    #[cfg(feature = "std")]
    return angle.sin_cos();

    #[cfg(not(feature = "std"))]
    return (libm::sin(angle), libm::cos(angle));
}

/// `e^{i * angle}`.
#[inline]
pub(crate) fn unit_polar(angle: f64) -> Complex64 {
    let (sin, cos) = sin_cos(angle);
    Complex64::new(cos, sin)
}

/// In-place radix-2 FFT, natural order in and out.
///
/// Stage sizes run `N, N/2, .., 2`. Each stage gets its root by squaring the previous
/// one, starting from `e^{-i*pi/N}`, and walks its groups with a running twiddle that is
/// multiplied by that root once per group. The butterflies leave the spectrum in
/// bit-reversed order, and a final permutation restores natural order.
///
/// `buffer.len()` must be a power of two. Callers validate it.
pub(crate) fn dit_fft_core(buffer: &mut [Complex64]) {
    let n = buffer.len();
    let mut half = n;
    let mut phi = unit_polar(-PI / n as f64);

    while half > 1 {
        let span = half;
        half >>= 1;
        phi = phi * phi;

        let mut twiddle = Complex64::new(1.0, 0.0);
        for group in 0..half {
            for a in (group..n).step_by(span) {
                let b = a + half;
                let t = buffer[a] - buffer[b];
                buffer[a] = buffer[a] + buffer[b];
                buffer[b] = t * twiddle;
            }
            twiddle = twiddle * phi;
        }
    }

    bit_reverse_permute(buffer);
}

/// Runs the forward transform `forward` as an inverse: conjugate, transform,
/// conjugate again, divide by N.
pub(crate) fn inverse_via_conjugation<F>(buffer: &mut [Complex64], forward: F)
where
    F: FnOnce(&mut [Complex64]),
{
    for value in buffer.iter_mut() {
        *value = value.conj();
    }

    forward(buffer);

    let n = buffer.len() as f64;
    for value in buffer.iter_mut() {
        *value = value.conj().unscale(n);
    }
}

#[cfg(test)]
#[path = "radix2_tests.rs"]
mod tests;
