//! Egel addition: column sums with visible ten-completions.
//!
//! Each column is summed top to bottom in operand entry order; every time the
//! running sum reaches ten, a mark is recorded at the digit that completed it
//! and ten is taken away. The carry-in is added after the operand digits so a
//! diagram can distinguish the raw digit sum from the carry completion.

use crate::foundation::digits;
use crate::foundation::error::{EgelError, EgelResult};
use crate::trace::checked_operand;

/// Mark row value recording that the carry-in completed the ten.
pub const CARRY_ROW: i32 = -1;

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// Location of one ten-completion underline in the addition grid.
pub struct AddMark {
    /// Addend row that completed a ten (top row is 0), or [`CARRY_ROW`] when
    /// the carry-in did.
    pub row: i32,
    /// Decimal place of the column (0 = units).
    pub col: usize,
}

#[derive(Clone, Debug, serde::Serialize)]
/// One digit column of an addition trace.
pub struct AddColumn {
    /// Decimal place (0 = units). The synthetic trailing column sits one past
    /// the last operand place.
    pub col: usize,
    /// Operand digits of this column in entry order, top to bottom.
    pub digits: Vec<u8>,
    /// Carry received from the previous column.
    pub carry_in: u32,
    /// Tens completed while summing this column.
    pub carry_out: u32,
    /// Value left in this column after all completions.
    pub result_digit: u32,
    /// Ten-completion marks recorded in this column.
    pub marks: Vec<AddMark>,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Complete record of one Egel addition run.
pub struct AddTrace {
    /// Operands in entry order.
    pub addends: Vec<i64>,
    /// True sum digits, units first, computed directly from the operands.
    pub sum_digits: Vec<u8>,
    /// Number of digit columns, including the synthetic trailing carry column.
    pub max_digits: usize,
    /// Per-column traces, units outward.
    pub columns: Vec<AddColumn>,
    /// Pedagogical warnings gathered while tracing.
    pub warnings: Vec<String>,
}

impl AddTrace {
    /// Numeric value of the recorded sum digits.
    pub fn sum(&self) -> u128 {
        digits::value_of(&self.sum_digits)
    }
}

#[tracing::instrument]
/// Trace Egel addition over `addends`.
///
/// Rejects an empty list, negative operands, and operands over
/// [`MAX_OPERAND`](crate::MAX_OPERAND).
pub fn trace_addition(addends: &[i64]) -> EgelResult<AddTrace> {
    if addends.is_empty() {
        return Err(EgelError::domain("at least one addend is required"));
    }
    let digit_rows = addends
        .iter()
        .map(|&x| checked_operand(x, "addend").map(digits::digits_of))
        .collect::<EgelResult<Vec<_>>>()?;

    let mut max_digits = digit_rows.iter().map(Vec::len).max().unwrap_or(1);
    let mut warnings = Vec::new();
    let mut columns = Vec::with_capacity(max_digits + 1);
    let mut carry_in: u32 = 0;

    for col in 0..max_digits {
        let digits_here: Vec<u8> = digit_rows
            .iter()
            .map(|d| d.get(col).copied().unwrap_or(0))
            .collect();

        let mut s: u32 = 0;
        let mut carry_out: u32 = 0;
        let mut marks = Vec::new();

        // Operand digits first, top to bottom.
        for (row, &digit) in digits_here.iter().enumerate() {
            s += u32::from(digit);
            if s >= 10 {
                marks.push(AddMark {
                    row: row as i32,
                    col,
                });
                s -= 10;
                carry_out += 1;
            }
        }

        // Carry-in last, so the diagram keeps it visible as its own event.
        if carry_in > 0 {
            s += carry_in;
            if s >= 10 {
                marks.push(AddMark {
                    row: CARRY_ROW,
                    col,
                });
                s -= 10;
                carry_out += 1;
            }
        }

        if carry_out >= 10 {
            warnings.push(format!(
                "Column {col} produced carry_out={carry_out} (>=10). \
                 For primary grades, prefer fewer addends / smaller digits."
            ));
        }

        columns.push(AddColumn {
            col,
            digits: digits_here,
            carry_in,
            carry_out,
            result_digit: s,
            marks,
        });
        carry_in = carry_out;
    }

    // A trailing carry becomes one synthetic column so the diagram can show it.
    if carry_in > 0 {
        if carry_in >= 10 {
            warnings.push(format!(
                "Final carry_in={carry_in} is multi-digit. \
                 It will be shown as a number in the carry row."
            ));
        }
        columns.push(AddColumn {
            col: max_digits,
            digits: vec![0; addends.len()],
            carry_in,
            carry_out: carry_in / 10,
            result_digit: carry_in % 10,
            marks: Vec::new(),
        });
        max_digits += 1;
    }

    // The sum is computed directly, never reconstructed from the columns.
    let total: u128 = addends.iter().map(|&x| x as u128).sum();

    Ok(AddTrace {
        addends: addends.to_vec(),
        sum_digits: digits::digits_of_wide(total),
        max_digits,
        columns,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/add.rs"]
mod tests;
