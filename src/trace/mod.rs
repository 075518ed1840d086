//! Trace engines for the four Egel arithmetic methods.
//!
//! Each engine is a pure function from validated operands to an immutable
//! trace record; nothing is shared across calls.

pub mod add;
pub mod div;
pub mod mul;
pub mod sub;

use crate::foundation::error::{EgelError, EgelResult};

/// Largest accepted operand value, `10^18`.
///
/// The cap keeps every derived quantity of a single run (probe products,
/// helper-table entries and the like) inside `u64`, and bounds diagrams at
/// 19 digit columns per operand.
pub const MAX_OPERAND: i64 = 1_000_000_000_000_000_000;

pub(crate) fn checked_operand(value: i64, name: &str) -> EgelResult<u64> {
    if value < 0 {
        return Err(EgelError::domain(format!(
            "{name} must be non-negative, got {value}"
        )));
    }
    if value > MAX_OPERAND {
        return Err(EgelError::domain(format!(
            "{name} exceeds the supported magnitude 10^18"
        )));
    }
    Ok(value as u64)
}
