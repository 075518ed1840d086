//! Egel subtraction by the completion method ("güitseekh").
//!
//! Instead of borrowing, a place where the subtrahend digit does not fit is
//! resolved by completing to ten: the ten's complement of the digit being
//! subtracted is added to the minuend digit, and one is carried into the next
//! place. A carry leaving the most significant place signals `a < b`.

use crate::foundation::digits;
use crate::foundation::error::EgelResult;
use crate::trace::checked_operand;

/// Warning attached when the final borrow indicates the minuend may be smaller.
pub const A_LT_B_WARNING: &str = "⚠ A < B байж магадгүй";

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// Which rule resolved one place of the subtraction.
pub enum SubRule {
    /// The subtrahend digit (plus borrow) fit under the minuend digit.
    Fit,
    /// A ten was completed and one carried to the next place.
    Complete,
}

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// One place of the completion subtraction.
pub struct SubStep {
    /// Decimal place (0 = units).
    pub place: usize,
    /// Minuend digit at this place.
    pub a: u8,
    /// Subtrahend digit at this place.
    pub b: u8,
    /// Borrow received from the previous place.
    pub carry_in: u8,
    /// Value actually subtracted (`b + carry_in`).
    pub sub_val: u8,
    /// Rule applied at this place.
    pub rule: SubRule,
    /// Ten's complement used by the complete rule.
    pub complement: Option<u8>,
    /// Result digit at this place.
    pub result_digit: u8,
    /// Borrow passed to the next place.
    pub carry_out: u8,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Complete record of one Egel subtraction run.
pub struct SubTrace {
    /// Minuend.
    pub a: i64,
    /// Subtrahend.
    pub b: i64,
    /// Minuend digits zero-padded to `width`, units first.
    pub a_digits: Vec<u8>,
    /// Subtrahend digits zero-padded to `width`, units first.
    pub b_digits: Vec<u8>,
    /// Common digit width after zero padding.
    pub width: usize,
    /// Borrow received at each place, units first.
    pub borrows: Vec<u8>,
    /// Per-place steps in reading order (most significant place first).
    pub steps: Vec<SubStep>,
    /// Result digits zero-padded to `width`, units first.
    pub result_digits: Vec<u8>,
    /// Result value with leading zeros stripped.
    pub result: u64,
    /// Borrow leaving the most significant place (1 signals `a < b`).
    pub final_carry: u8,
    /// Pedagogical warnings gathered while tracing.
    pub warnings: Vec<String>,
}

#[tracing::instrument]
/// Trace Egel subtraction of `b` from `a`.
///
/// Both operands must be non-negative and at most
/// [`MAX_OPERAND`](crate::MAX_OPERAND). `a < b` is not an error: the method
/// runs to completion and flags the mismatch with `final_carry == 1` and a
/// warning.
pub fn trace_subtraction(a: i64, b: i64) -> EgelResult<SubTrace> {
    let a_u = checked_operand(a, "minuend")?;
    let b_u = checked_operand(b, "subtrahend")?;

    let mut a_digits = digits::digits_of(a_u);
    let mut b_digits = digits::digits_of(b_u);
    let width = a_digits.len().max(b_digits.len());
    a_digits.resize(width, 0);
    b_digits.resize(width, 0);

    let mut carry: u8 = 0;
    let mut borrows = vec![0u8; width];
    let mut result_digits = vec![0u8; width];
    let mut steps = Vec::with_capacity(width);

    for place in 0..width {
        let ad = a_digits[place];
        let bd = b_digits[place];
        borrows[place] = carry;
        let sub_val = bd + carry;

        let (rule, complement, result_digit, carry_out) = if sub_val > ad {
            let comp = 10 - sub_val;
            (SubRule::Complete, Some(comp), comp + ad, 1)
        } else {
            (SubRule::Fit, None, ad - sub_val, 0)
        };

        result_digits[place] = result_digit;
        steps.push(SubStep {
            place,
            a: ad,
            b: bd,
            carry_in: carry,
            sub_val,
            rule,
            complement,
            result_digit,
            carry_out,
        });
        carry = carry_out;
    }

    // Report steps in reading order, most significant place first.
    steps.reverse();

    let mut warnings = Vec::new();
    if carry == 1 {
        warnings.push(A_LT_B_WARNING.to_string());
    }

    Ok(SubTrace {
        a,
        b,
        a_digits,
        b_digits,
        width,
        borrows,
        steps,
        result: digits::value_of(&result_digits) as u64,
        result_digits,
        final_carry: carry,
        warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/sub.rs"]
mod tests;
