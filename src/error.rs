use thiserror::Error;

/// Why [`try_approximate`](crate::try_approximate) refused an input.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RsqrtError {
    /// NaN or an infinity.
    #[error("input {0} is not finite")]
    NotFinite(f32),

    /// Zero of either sign, or a negative value.
    #[error("input {0} is not strictly positive")]
    NonPositive(f32),
}

impl RsqrtError {
    /// The rejected input.
    pub fn value(&self) -> f32 {
        match *self {
            RsqrtError::NotFinite(v) | RsqrtError::NonPositive(v) => v,
        }
    }
}
