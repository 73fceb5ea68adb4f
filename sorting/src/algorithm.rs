use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SortError;
use crate::order::Order;
use crate::validate::sequence_from_json;

/// A sorting algorithm that can be picked at runtime.
///
/// Implementations never modify the input, they sort a private copy and
/// return it. Input is checked with [`validate`](crate::validate::validate)
/// before any work is done.
pub trait SortAlgorithm: fmt::Debug + Send + Sync {
    fn name(&self) -> AlgorithmName;

    /// Equal elements keep their relative order.
    fn is_stable(&self) -> bool;

    fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError>;

    /// Sort a loosely typed JSON array, see
    /// [`sequence_from_json`](crate::validate::sequence_from_json).
    fn sort_value(&self, value: &Value, order: Order) -> Result<Vec<i64>, SortError> {
        let sequence = sequence_from_json(value)?;
        self.sort(&sequence, order)
    }
}

/// Names of the registered algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmName {
    Bubble,
    Selection,
    Quick,
    Merge,
    Shell,
}

impl AlgorithmName {
    pub const ALL: [AlgorithmName; 5] = [
        AlgorithmName::Bubble,
        AlgorithmName::Selection,
        AlgorithmName::Quick,
        AlgorithmName::Merge,
        AlgorithmName::Shell,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AlgorithmName::Bubble => "bubble",
            AlgorithmName::Selection => "selection",
            AlgorithmName::Quick => "quick",
            AlgorithmName::Merge => "merge",
            AlgorithmName::Shell => "shell",
        }
    }
}

impl fmt::Display for AlgorithmName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmName {
    type Err = SortError;

    /// Case insensitive, `"BUBBLE"` and `"bubble"` are the same name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        AlgorithmName::ALL
            .into_iter()
            .find(|name| name.as_str() == lower)
            .ok_or_else(|| SortError::InvalidAlgorithm { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse_any_case() {
        assert_eq!("bubble".parse::<AlgorithmName>(), Ok(AlgorithmName::Bubble));
        assert_eq!("BUBBLE".parse::<AlgorithmName>(), Ok(AlgorithmName::Bubble));
        assert_eq!("SeLeCtIoN".parse::<AlgorithmName>(), Ok(AlgorithmName::Selection));
        assert_eq!("Quick".parse::<AlgorithmName>(), Ok(AlgorithmName::Quick));
        assert_eq!("merge".parse::<AlgorithmName>(), Ok(AlgorithmName::Merge));
        assert_eq!("SHELL".parse::<AlgorithmName>(), Ok(AlgorithmName::Shell));
    }

    #[test]
    fn parse_unknown() {
        for s in ["", "heap", "bubblesort", "quick ", "bogo"] {
            let err = s.parse::<AlgorithmName>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidAlgorithm);
            assert_eq!(err, SortError::InvalidAlgorithm { name: s.to_owned() });
        }
    }

    #[test]
    fn display_round_trips() {
        for name in AlgorithmName::ALL {
            assert_eq!(name.to_string().parse::<AlgorithmName>(), Ok(name));
        }
    }
}
