//! Egel multiplication: the diagonal lattice of two-cell partial products
//! with an addition-style column carry over the grid.
//!
//! Every pair of operand digits contributes a two-digit partial product whose
//! tens and units sub-digits occupy adjacent grid cells on a diagonal. The
//! stacked sub-digits of each grid column are then summed with the same
//! ten-completion rules as Egel addition, producing underline marks and a
//! carry row. The product itself comes from an independent digit convolution
//! so display choices can never corrupt the arithmetic.

use std::collections::BTreeMap;

use crate::foundation::digits;
use crate::foundation::error::EgelResult;
use crate::trace::checked_operand;

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// One two-cell partial-product block of the lattice.
pub struct MulCell {
    /// Index of the `a` digit (0 = units).
    pub i: usize,
    /// Index into `b`'s digits taken most significant first.
    pub j: usize,
    /// Grid column of the tens sub-digit; the units sub-digit sits at `x + 1`.
    pub x: i64,
    /// Grid row of both sub-digits.
    pub y: i64,
    /// Tens sub-digit of the partial product.
    pub tens: u8,
    /// Units sub-digit of the partial product.
    pub units: u8,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Stacked sub-digits of one grid column with its carry bookkeeping.
pub struct MulColumn {
    /// Grid column.
    pub x: i64,
    /// Sub-digits of the column, top to bottom.
    pub digits: Vec<u8>,
    /// Carry received from the column to the right.
    pub carry_in: u32,
    /// Tens completed in this column.
    pub carry_out: u32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// Underline marks accumulated at one grid cell.
pub struct MulMark {
    /// Grid column.
    pub x: i64,
    /// Grid row.
    pub y: i64,
    /// Tens completed at this cell.
    pub count: u32,
}

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// A carry value written one column left of the column that produced it.
pub struct MulCarry {
    /// Grid column the carry is written in.
    pub x: i64,
    /// Carry value (may be multi-digit).
    pub value: u32,
    /// Grid column that produced the carry.
    pub src_x: i64,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Complete record of one Egel multiplication run.
pub struct MulTrace {
    /// First factor.
    pub a: i64,
    /// Second factor.
    pub b: i64,
    /// Digits of `a`, units first.
    pub a_digits: Vec<u8>,
    /// Digits of `b`, units first.
    pub b_digits: Vec<u8>,
    /// Partial-product blocks in `(i, j)` iteration order.
    pub cells: Vec<MulCell>,
    /// Per-column carry bookkeeping, rightmost column first.
    pub columns: Vec<MulColumn>,
    /// Underline marks ordered by column, then row.
    pub marks: Vec<MulMark>,
    /// Carry-row entries, rightmost producing column first.
    pub carries: Vec<MulCarry>,
    /// Leftmost grid column covered by blocks.
    pub x_min: i64,
    /// Rightmost grid column covered by blocks (the ones column).
    pub x_max: i64,
    /// Bottom grid row covered by blocks.
    pub y_max: i64,
    /// True product digits, units first, from the digit convolution.
    pub product_digits: Vec<u8>,
    /// Pedagogical warnings gathered while tracing.
    pub warnings: Vec<String>,
}

impl MulTrace {
    /// Numeric value of the recorded product digits.
    pub fn product(&self) -> u128 {
        digits::value_of(&self.product_digits)
    }
}

#[tracing::instrument]
/// Trace Egel multiplication of `a` by `b`.
///
/// Both operands must be non-negative and at most
/// [`MAX_OPERAND`](crate::MAX_OPERAND), which bounds the lattice at 19x19
/// blocks.
pub fn trace_multiplication(a: i64, b: i64) -> EgelResult<MulTrace> {
    let a_u = checked_operand(a, "multiplicand")?;
    let b_u = checked_operand(b, "multiplier")?;

    let a_digits = digits::digits_of(a_u);
    let b_digits = digits::digits_of(b_u);
    let m = a_digits.len();
    let n = b_digits.len();

    // `b` digits are placed most significant first down the right diagonal.
    let b_ms: Vec<u8> = b_digits.iter().rev().copied().collect();

    let mut cells = Vec::with_capacity(m * n);
    let mut x_min = i64::MAX;
    let mut x_max = i64::MIN;
    let mut y_max = i64::MIN;
    for (i, &ad) in a_digits.iter().enumerate() {
        for (j, &bd) in b_ms.iter().enumerate() {
            let p = u16::from(ad) * u16::from(bd);
            let x = j as i64 - i as i64;
            let y = 2 + (i + j) as i64;
            x_min = x_min.min(x);
            x_max = x_max.max(x + 1);
            y_max = y_max.max(y);
            cells.push(MulCell {
                i,
                j,
                x,
                y,
                tens: (p / 10) as u8,
                units: (p % 10) as u8,
            });
        }
    }

    // Stack sub-digits by grid column, preserving block order for equal rows.
    let mut by_column: BTreeMap<i64, Vec<(i64, u8)>> = BTreeMap::new();
    for cell in &cells {
        by_column.entry(cell.x).or_default().push((cell.y, cell.tens));
        by_column
            .entry(cell.x + 1)
            .or_default()
            .push((cell.y, cell.units));
    }

    // Addition-style carry sweep, rightmost column first.
    let mut columns = Vec::with_capacity((x_max - x_min + 1) as usize);
    let mut mark_counts: BTreeMap<(i64, i64), u32> = BTreeMap::new();
    let mut carries = Vec::new();
    let mut carry_in: u32 = 0;

    for x in (x_min..=x_max).rev() {
        let mut stack = by_column.remove(&x).unwrap_or_default();
        stack.sort_by_key(|&(y, _)| y);

        let mut value = carry_in;
        let mut tens: u32 = 0;
        for &(y, digit) in &stack {
            value += u32::from(digit);
            if value >= 10 {
                let produced = value / 10;
                tens += produced;
                value %= 10;
                *mark_counts.entry((x, y)).or_insert(0) += produced;
            }
        }

        if tens > 0 {
            carries.push(MulCarry {
                x: x - 1,
                value: tens,
                src_x: x,
            });
        }

        columns.push(MulColumn {
            x,
            digits: stack.iter().map(|&(_, d)| d).collect(),
            carry_in,
            carry_out: tens,
        });
        carry_in = tens;
    }

    let marks = mark_counts
        .into_iter()
        .map(|((x, y), count)| MulMark { x, y, count })
        .collect();

    Ok(MulTrace {
        a,
        b,
        product_digits: multiply_digits(&a_digits, &b_digits),
        a_digits,
        b_digits,
        cells,
        columns,
        marks,
        carries,
        x_min,
        x_max,
        y_max,
        warnings: Vec::new(),
    })
}

/// Multiply two units-first digit sequences by convolution and carry
/// normalization, independent of the lattice.
pub fn multiply_digits(a: &[u8], b: &[u8]) -> Vec<u8> {
    let mut acc = vec![0u64; a.len() + b.len()];
    for (i, &ad) in a.iter().enumerate() {
        for (j, &bd) in b.iter().enumerate() {
            acc[i + j] += u64::from(ad) * u64::from(bd);
        }
    }

    let mut out = Vec::with_capacity(acc.len());
    let mut carry = 0u64;
    for v in acc {
        let total = v + carry;
        out.push((total % 10) as u8);
        carry = total / 10;
    }
    while out.len() > 1 && out.last() == Some(&0) {
        out.pop();
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/trace/mul.rs"]
mod tests;
