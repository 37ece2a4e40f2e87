#![no_std]

extern crate alloc;

// Links the standard library for tests and for the `std` feature,
// so you can run 'cargo test' on your PC normally.
#[cfg(any(test, feature = "std"))]
extern crate std;

/// Emits a `log::debug!` record when `verbose-logging` is enabled, nothing otherwise.
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose-logging")]
        ::log::debug!($($arg)*);
    };
}

pub mod common;
pub mod float;
pub mod sequence;

pub use common::{FftError, FftProcess};
pub use float::{ChirpFft, CplxFft, RecursiveFft};
pub use float::{czt, dft, fft, fft_recursive, iczt, ifft, ifft_recursive};
pub use num_complex::Complex64;
pub use sequence::ComplexArray;
