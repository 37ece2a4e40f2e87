// src/float/bitrev.rs

/// Builds the 8-bit reversal of every byte value.
const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let byte = i as u8;
        let mut reversed = 0u8;
        let mut bit = 0;
        while bit < 8 {
            reversed |= ((byte >> bit) & 1) << (7 - bit);
            bit += 1;
        }
        table[i] = reversed;
        i += 1;
    }
    table
}

/// `BIT_REVERSE_TABLE[b]` holds `b` with its 8 bits reversed. Built at compile time.
pub static BIT_REVERSE_TABLE: [u8; 256] = build_table();

/// Reverses all 64 bits of `value`, one byte lookup at a time.
#[inline]
pub fn reverse_bits64(value: u64) -> u64 {
    let input = value.to_le_bytes();
    let mut output = [0u8; 8];
    for (i, &byte) in input.iter().enumerate() {
        output[7 - i] = BIT_REVERSE_TABLE[byte as usize];
    }
    u64::from_le_bytes(output)
}

/// Reverses the low `width` bits of `index`. `width` must be in `0..=64`.
#[inline]
pub fn bit_reverse(index: u64, width: u32) -> u64 {
    debug_assert!(width <= 64, "bit width {} exceeds 64", width);
    if width == 0 {
        return 0;
    }
    reverse_bits64(index) >> (64 - width)
}

/// Moves `buffer[i]` to `buffer[bit_reverse(i)]` for a power-of-two length.
pub fn bit_reverse_permute<T>(buffer: &mut [T]) {
    let n = buffer.len();
    if n < 2 {
        return;
    }
    debug_assert!(n.is_power_of_two());

    let width = n.trailing_zeros();
    for a in 0..n {
        let b = bit_reverse(a as u64, width) as usize;
        if b > a {
            buffer.swap(a, b);
        }
    }
}

#[cfg(test)]
#[path = "bitrev_tests.rs"]
mod tests;
