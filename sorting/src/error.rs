use std::fmt;

/// Every way a sort request can be rejected.
///
/// None of these are transient: they describe a caller passing something the
/// sorter cannot accept, so nothing is ever retried and no partial output is
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SortError {
    /// Input is not a sequence of integers.
    #[error("type error: {reason}")]
    Type {
        /// What was wrong with the input.
        reason: String,
    },

    /// Input has `max` or more elements.
    #[error("size error: sequence has {len} elements, must be < {max}")]
    Size { len: usize, max: usize },

    /// Algorithm name is not one of the registered ones.
    #[error("invalid algorithm name `{name}`")]
    InvalidAlgorithm { name: String },

    /// Order token is neither `ascending` nor `descending`.
    #[error("invalid order `{token}`, expected `ascending` or `descending`")]
    InvalidOrder { token: String },
}

/// Fieldless view of [`SortError`] for matching on the failure kind alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Size,
    InvalidAlgorithm,
    InvalidOrder,
}

impl SortError {
    pub(crate) fn type_error(reason: impl Into<String>) -> Self {
        Self::Type {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Size { .. } => ErrorKind::Size,
            Self::InvalidAlgorithm { .. } => ErrorKind::InvalidAlgorithm,
            Self::InvalidOrder { .. } => ErrorKind::InvalidOrder,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::Type => "type",
            ErrorKind::Size => "size",
            ErrorKind::InvalidAlgorithm => "invalid algorithm",
            ErrorKind::InvalidOrder => "invalid order",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(SortError::type_error("x").kind(), ErrorKind::Type);
        assert_eq!(
            SortError::Size {
                len: 200_000,
                max: 200_000
            }
            .kind(),
            ErrorKind::Size
        );
        assert_eq!(
            SortError::InvalidAlgorithm {
                name: "bogo".into()
            }
            .kind(),
            ErrorKind::InvalidAlgorithm
        );
        assert_eq!(
            SortError::InvalidOrder {
                token: "up".into()
            }
            .kind(),
            ErrorKind::InvalidOrder
        );
    }

    #[test]
    fn messages() {
        let err = SortError::Size {
            len: 200_000,
            max: 200_000,
        };
        assert_eq!(
            err.to_string(),
            "size error: sequence has 200000 elements, must be < 200000"
        );
        let err = SortError::InvalidAlgorithm {
            name: "bogo".into(),
        };
        assert_eq!(err.to_string(), "invalid algorithm name `bogo`");
    }
}
