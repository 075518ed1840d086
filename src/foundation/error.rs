/// Convenience result type used across Egel.
pub type EgelResult<T> = Result<T, EgelError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum EgelError {
    /// Operands outside the supported domain (negative, empty, zero divisor, over the magnitude cap).
    #[error("domain error: {0}")]
    Domain(String),

    /// Errors when serializing trace or payload data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EgelError {
    /// Build a [`EgelError::Domain`] value.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    /// Build a [`EgelError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
