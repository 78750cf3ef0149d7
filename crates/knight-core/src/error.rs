//! Error types for knight path search
//!
//! Label parsing failures and search failures share one enum so callers can
//! match on the cause and still get the offending label or square pair.

use crate::types::Square;

/// Knight path errors
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KnightError {
    /// Malformed square label (wrong length, letter or digit out of range)
    #[error("invalid square label '{label}': {reason}")]
    InvalidLabel { label: String, reason: &'static str },

    /// Board index outside 0..64
    #[error("board index {0} is out of range (expected 0..64)")]
    IndexOutOfRange(usize),

    /// Frontier exhausted before the target was reached
    #[error("no knight path from {start} to {end}")]
    NoPathFound { start: Square, end: Square },

    /// Stop flag observed between generations
    #[error("search from {start} to {end} interrupted at depth {depth}")]
    Interrupted { start: Square, end: Square, depth: u32 },
}

impl KnightError {
    /// ラベル不正エラーを生成
    pub(crate) fn invalid_label(label: &str, reason: &'static str) -> Self {
        KnightError::InvalidLabel { label: label.to_string(), reason }
    }
}

/// Result type for knight path operations
pub type KnightResult<T> = Result<T, KnightError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = KnightError::invalid_label("z9", "file must be a..h");
        assert_eq!(err.to_string(), "invalid square label 'z9': file must be a..h");

        let start = Square::from_label("a1").unwrap();
        let end = Square::from_label("h8").unwrap();
        let err = KnightError::NoPathFound { start, end };
        assert_eq!(err.to_string(), "no knight path from a1 to h8");

        let err = KnightError::Interrupted { start, end, depth: 3 };
        assert_eq!(err.to_string(), "search from a1 to h8 interrupted at depth 3");
    }
}
