// src/sequence.rs

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Add, Deref, DerefMut, DivAssign, Mul, MulAssign, Sub};
use num_complex::Complex64;

/// Fixed-length sequence of complex samples.
///
/// The length is set at construction and never changes. Every transform in this crate
/// works on `&mut [Complex64]`, and `ComplexArray` derefs to that slice, so it can be
/// passed anywhere a buffer is expected. The whole-array operators are elementwise and
/// panic on mismatched lengths, the same way slice indexing panics when out of bounds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexArray {
    data: Vec<Complex64>,
}

impl ComplexArray {
    /// Zero-filled array of `len` samples.
    pub fn new(len: usize) -> Self {
        Self { data: vec![Complex64::new(0.0, 0.0); len] }
    }

    /// Copies `buffer` into a new array.
    pub fn from_slice(buffer: &[Complex64]) -> Self {
        Self { data: buffer.to_vec() }
    }

    /// Real samples with a zero imaginary part.
    pub fn from_real(samples: &[f64]) -> Self {
        samples.iter().map(|&re| Complex64::new(re, 0.0)).collect()
    }

    /// Extracts `count` samples of `source` starting at `start`, `stride` apart.
    ///
    /// # Panics
    /// If `stride` is zero or the last requested index is out of bounds.
    pub fn strided(source: &[Complex64], start: usize, count: usize, stride: usize) -> Self {
        assert!(stride > 0, "stride must be non-zero");
        if count > 0 {
            let last = start + (count - 1) * stride;
            assert!(
                last < source.len(),
                "strided slice out of bounds: index {} in a sequence of length {}",
                last,
                source.len()
            );
        }
        let data = source[start.min(source.len())..]
            .iter()
            .step_by(stride)
            .take(count)
            .copied()
            .collect();
        Self { data }
    }

    /// Strided sub-sequence of this array. See [`ComplexArray::strided`].
    pub fn slice(&self, start: usize, count: usize, stride: usize) -> Self {
        Self::strided(&self.data, start, count, stride)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<Complex64> {
        self.data
    }

    /// Replaces every element with `f(element)`.
    pub fn apply<F: Fn(Complex64) -> Complex64>(&mut self, f: F) {
        for value in self.data.iter_mut() {
            *value = f(*value);
        }
    }

    pub fn conjugate(&mut self) {
        self.apply(|value| value.conj());
    }

    fn zip_with<F: Fn(Complex64, Complex64) -> Complex64>(&self, other: &Self, f: F) -> Self {
        assert_eq!(
            self.len(),
            other.len(),
            "elementwise operation on sequences of different lengths"
        );
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| f(a, b))
            .collect()
    }
}

impl Deref for ComplexArray {
    type Target = [Complex64];

    fn deref(&self) -> &[Complex64] {
        &self.data
    }
}

impl DerefMut for ComplexArray {
    fn deref_mut(&mut self) -> &mut [Complex64] {
        &mut self.data
    }
}

impl From<Vec<Complex64>> for ComplexArray {
    fn from(data: Vec<Complex64>) -> Self {
        Self { data }
    }
}

impl From<ComplexArray> for Vec<Complex64> {
    fn from(array: ComplexArray) -> Self {
        array.data
    }
}

impl FromIterator<Complex64> for ComplexArray {
    fn from_iter<I: IntoIterator<Item = Complex64>>(iter: I) -> Self {
        Self { data: iter.into_iter().collect() }
    }
}

impl<'a> Add<&'a ComplexArray> for &'a ComplexArray {
    type Output = ComplexArray;

    fn add(self, rhs: &'a ComplexArray) -> ComplexArray {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl<'a> Sub<&'a ComplexArray> for &'a ComplexArray {
    type Output = ComplexArray;

    fn sub(self, rhs: &'a ComplexArray) -> ComplexArray {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl<'a> Mul<&'a ComplexArray> for &'a ComplexArray {
    type Output = ComplexArray;

    fn mul(self, rhs: &'a ComplexArray) -> ComplexArray {
        self.zip_with(rhs, |a, b| a * b)
    }
}

impl MulAssign<&ComplexArray> for ComplexArray {
    fn mul_assign(&mut self, rhs: &ComplexArray) {
        assert_eq!(
            self.len(),
            rhs.len(),
            "elementwise operation on sequences of different lengths"
        );
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a *= b;
        }
    }
}

impl DivAssign<f64> for ComplexArray {
    fn div_assign(&mut self, rhs: f64) {
        for value in self.data.iter_mut() {
            *value = value.unscale(rhs);
        }
    }
}

#[cfg(test)]
#[path = "sequence_tests.rs"]
mod tests;
