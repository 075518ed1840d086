//! Egel division: greedy repeated subtraction of divisor multiples using
//! only the 5, 2 and 1 times rows of the helper table.
//!
//! Each round reads the shortest dividend prefix that fits the divisor,
//! scales the divisor by the matching power of ten, and subtracts the
//! largest of 5x, 2x or 1x that still fits. The quotient is the sum of
//! the per-round chunks and the final remainder is what could not be
//! subtracted.

use crate::foundation::digits;
use crate::foundation::error::{EgelError, EgelResult};
use crate::trace::checked_operand;

/// Hard cap on recorded subtraction rounds.
pub const MAX_DIV_STEPS: usize = 200;

#[derive(Clone, Copy, Debug, serde::Serialize, PartialEq, Eq)]
/// One row of the helper table shown next to the worked division.
pub struct DivHelperEntry {
    /// Multiplier (1, 2 or 5).
    pub factor: u8,
    /// `factor` times the divisor.
    pub value: u64,
}

#[derive(Clone, Debug, serde::Serialize)]
/// One greedy subtraction round.
pub struct DivStep {
    /// Remainder at the start of the round.
    pub remainder_before: u64,
    /// Amount subtracted, `factor * divisor * 10^power`.
    pub subtracted: u64,
    /// Quotient chunk contributed, `factor * 10^power`.
    pub quotient_part: u64,
    /// Helper factor used (1, 2 or 5).
    pub factor: u8,
    /// Power of ten the divisor was scaled by.
    pub power: u32,
    /// Shortest remainder prefix that fit the divisor.
    pub prefix: u64,
    /// Narration of the round in the classroom phrasing.
    pub note: String,
}

#[derive(Clone, Debug, serde::Serialize)]
/// Complete record of one Egel division run.
pub struct DivTrace {
    /// Dividend.
    pub dividend: i64,
    /// Divisor.
    pub divisor: i64,
    /// Subtraction rounds in execution order.
    pub steps: Vec<DivStep>,
    /// Quotient chunks in execution order.
    pub quotient_parts: Vec<u64>,
    /// Sum of the quotient chunks.
    pub quotient: u64,
    /// Final remainder, strictly below the divisor.
    pub remainder: u64,
    /// Helper table rows for factors 1, 2 and 5.
    pub helper: Vec<DivHelperEntry>,
    /// Pedagogical warnings gathered while tracing.
    pub warnings: Vec<String>,
}

#[tracing::instrument]
/// Trace Egel division of `dividend` by `divisor`.
///
/// The dividend must be non-negative and at most
/// [`MAX_OPERAND`](crate::MAX_OPERAND); the divisor must be positive.
/// Tracing stops silently after [`MAX_DIV_STEPS`] rounds.
pub fn trace_division(dividend: i64, divisor: i64) -> EgelResult<DivTrace> {
    if divisor <= 0 {
        return Err(EgelError::domain(format!(
            "divisor must be positive, got {divisor}"
        )));
    }
    let dividend_u = checked_operand(dividend, "dividend")?;
    let divisor_u = checked_operand(divisor, "divisor")?;

    let helper = vec![
        DivHelperEntry { factor: 1, value: divisor_u },
        DivHelperEntry { factor: 2, value: divisor_u * 2 },
        DivHelperEntry { factor: 5, value: divisor_u * 5 },
    ];

    let mut steps: Vec<DivStep> = Vec::new();
    let mut quotient_parts = Vec::new();
    let mut quotient: u64 = 0;
    let mut remainder = dividend_u;

    while remainder >= divisor_u && steps.len() < MAX_DIV_STEPS {
        // Shortest prefix of the remainder that the divisor fits into.
        let len = digits::digit_count(remainder);
        let mut prefix = remainder;
        let mut power = 0u32;
        for take in 1..=len {
            let skipped = (len - take) as u32;
            let candidate = remainder / 10u64.pow(skipped);
            if candidate >= divisor_u {
                prefix = candidate;
                power = skipped;
                break;
            }
        }

        let multiplier = 10u64.pow(power);
        let factor: u8 = if divisor_u * 5 * multiplier <= remainder {
            5
        } else if divisor_u * 2 * multiplier <= remainder {
            2
        } else {
            1
        };

        let subtracted = divisor_u * u64::from(factor) * multiplier;
        let quotient_part = u64::from(factor) * multiplier;
        let mut note = format!(
            "Уншсан тоо {prefix}-д {divisor_u} нь {factor} удаа багтана."
        );
        if power > 0 {
            note.push_str(&format!(
                " {power} тэгээр орон гүйцээж {quotient_part} болов."
            ));
        }

        steps.push(DivStep {
            remainder_before: remainder,
            subtracted,
            quotient_part,
            factor,
            power,
            prefix,
            note,
        });
        quotient_parts.push(quotient_part);
        quotient += quotient_part;
        remainder -= subtracted;
    }

    Ok(DivTrace {
        dividend,
        divisor,
        steps,
        quotient_parts,
        quotient,
        remainder,
        helper,
        warnings: Vec::new(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/trace/div.rs"]
mod tests;
