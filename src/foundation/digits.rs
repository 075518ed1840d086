//! Decimal digit helpers shared by the trace engines and renderers.
//!
//! Digit sequences are stored least-significant-first throughout the crate;
//! renderers reverse them for display. Zero decomposes to `[0]`, never to an
//! empty sequence.

/// Decompose a non-negative value into decimal digits, units first.
pub fn digits_of(value: u64) -> Vec<u8> {
    digits_of_wide(u128::from(value))
}

/// [`digits_of`] for values outside `u64` range (sums and products).
pub fn digits_of_wide(value: u128) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    let mut v = value;
    while v > 0 {
        out.push((v % 10) as u8);
        v /= 10;
    }
    out
}

/// Number of decimal digits in `value` (`1` for zero).
pub fn digit_count(value: u64) -> usize {
    let mut count = 1;
    let mut v = value / 10;
    while v > 0 {
        count += 1;
        v /= 10;
    }
    count
}

/// Recompose a units-first digit sequence into its numeric value.
pub fn value_of(digits: &[u8]) -> u128 {
    let mut value = 0u128;
    for &d in digits.iter().rev() {
        value = value * 10 + u128::from(d);
    }
    value
}

/// Most-significant-first rendering of a units-first digit sequence,
/// leading zeros stripped (`"0"` when all digits are zero).
pub fn to_display(digits: &[u8]) -> String {
    let mut out: String = digits
        .iter()
        .rev()
        .skip_while(|&&d| d == 0)
        .map(|d| char::from(b'0' + d))
        .collect();
    if out.is_empty() {
        out.push('0');
    }
    out
}
