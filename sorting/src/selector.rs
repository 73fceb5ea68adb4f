//! Picking an algorithm by name.
//!
//! [`algorithm`] is the registry: it maps every [`AlgorithmName`] to a static
//! instance of its implementation. A new algorithm needs a new name, a new
//! arm there and an impl of [`SortAlgorithm`]. Callers that only hold a name
//! as text go through [`Selector`].

use core::convert::Infallible;
use core::str::FromStr;

use serde_json::Value;

use crate::algorithm::{AlgorithmName, SortAlgorithm};
use crate::bubble_sort::BubbleSort;
use crate::error::SortError;
use crate::merge_sort::MergeSort;
use crate::order::Order;
use crate::quicksort::QuickSort;
use crate::selection_sort::SelectionSort;
use crate::shell_sort::ShellSort;

pub fn algorithm(name: AlgorithmName) -> &'static dyn SortAlgorithm {
    match name {
        AlgorithmName::Bubble => &BubbleSort,
        AlgorithmName::Selection => &SelectionSort,
        AlgorithmName::Quick => &QuickSort,
        AlgorithmName::Merge => &MergeSort,
        AlgorithmName::Shell => &ShellSort,
    }
}

/// All registered algorithms, in [`AlgorithmName::ALL`] order.
pub fn algorithms() -> impl Iterator<Item = &'static dyn SortAlgorithm> {
    AlgorithmName::ALL.into_iter().map(algorithm)
}

/// Sorts with the algorithm named at construction.
///
/// The name is only checked when the selector is used, so building one never
/// fails. Lookup ignores letter case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    name: String,
}

impl Selector {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name as given, before case folding.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn resolve(&self) -> Result<&'static dyn SortAlgorithm, SortError> {
        let name: AlgorithmName = self.name.parse().map_err(|err| {
            tracing::debug!(name = %self.name, "unknown sort algorithm");
            err
        })?;
        Ok(algorithm(name))
    }

    pub fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError> {
        let algorithm = self.resolve()?;
        tracing::debug!(
            algorithm = %algorithm.name(),
            len = sequence.len(),
            %order,
            "sorting"
        );
        algorithm.sort(sequence, order)
    }

    /// Like [`Selector::sort`] but with the input as a JSON array.
    pub fn sort_value(&self, value: &Value, order: Order) -> Result<Vec<i64>, SortError> {
        let algorithm = self.resolve()?;
        tracing::debug!(algorithm = %algorithm.name(), %order, "sorting json input");
        algorithm.sort_value(value, order)
    }

    /// Like [`Selector::sort`] but with the order given as `"ascending"` or
    /// `"descending"`.
    pub fn sort_with_order_token(
        &self,
        sequence: &[i64],
        order: &str,
    ) -> Result<Vec<i64>, SortError> {
        let order: Order = order.parse()?;
        self.sort(sequence, order)
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::new(AlgorithmName::Quick.as_str())
    }
}

impl From<AlgorithmName> for Selector {
    fn from(name: AlgorithmName) -> Self {
        Self::new(name.as_str())
    }
}

impl FromStr for Selector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}
