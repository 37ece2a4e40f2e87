pub mod bitrev;
pub mod chirp;
pub mod complex;
pub mod recursive;
mod radix2;

pub use crate::common::{FftError, FftProcess};
pub use bitrev::{bit_reverse, bit_reverse_permute, reverse_bits64, BIT_REVERSE_TABLE};
pub use chirp::{chirp, czt, dft, iczt, padded_len, ChirpFft};
pub use complex::{fft, ifft, CplxFft};
pub use recursive::{fft_recursive, ifft_recursive, RecursiveFft};
