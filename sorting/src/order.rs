use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// Direction of a sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

impl Order {
    /// Compare `a` and `b` as they should be placed in the output, so that
    /// `Less` means `a` goes first.
    #[inline]
    pub fn compare<T: Ord>(self, a: &T, b: &T) -> Ordering {
        match self {
            Order::Ascending => a.cmp(b),
            Order::Descending => b.cmp(a),
        }
    }

    /// `a` must be placed strictly before `b`.
    #[inline]
    pub fn precedes<T: Ord>(self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Every adjacent pair of `slice` is in this order.
    pub fn is_sorted<T: Ord>(self, slice: &[T]) -> bool {
        slice.windows(2).all(|w| !self.precedes(&w[1], &w[0]))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Order::Ascending => "ascending",
            Order::Descending => "descending",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = SortError;

    /// Accepts `ascending` or `descending` in any letter case. Anything else
    /// is rejected rather than treated as ascending.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ascending") {
            Ok(Order::Ascending)
        } else if s.eq_ignore_ascii_case("descending") {
            Ok(Order::Descending)
        } else {
            Err(SortError::InvalidOrder {
                token: s.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parse() {
        assert_eq!("ascending".parse::<Order>(), Ok(Order::Ascending));
        assert_eq!("Descending".parse::<Order>(), Ok(Order::Descending));
        assert_eq!("DESCENDING".parse::<Order>(), Ok(Order::Descending));
    }

    #[test]
    fn parse_rejects_unknown() {
        for token in ["", "asc", "desc", "up", " ascending", "reverse"] {
            let err = token.parse::<Order>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidOrder);
            assert_eq!(
                err,
                SortError::InvalidOrder {
                    token: token.to_owned()
                }
            );
        }
    }

    #[test]
    fn compare() {
        assert!(Order::Ascending.precedes(&1, &2));
        assert!(!Order::Ascending.precedes(&2, &2));
        assert!(Order::Descending.precedes(&2, &1));
        assert!(!Order::Descending.precedes(&1, &1));
    }

    #[test]
    fn is_sorted() {
        assert!(Order::Ascending.is_sorted(&[1, 2, 2, 3]));
        assert!(!Order::Ascending.is_sorted(&[2, 1]));
        assert!(Order::Descending.is_sorted(&[3, 2, 2, 1]));
        assert!(Order::Descending.is_sorted::<i64>(&[]));
    }

    #[test]
    fn serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Order::Descending).unwrap(),
            "\"descending\""
        );
        let order: Order = serde_json::from_str("\"ascending\"").unwrap();
        assert_eq!(order, Order::Ascending);
    }

    #[test]
    fn default_is_ascending() {
        assert_eq!(Order::default(), Order::Ascending);
    }
}
