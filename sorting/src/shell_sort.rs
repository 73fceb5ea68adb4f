use crate::algorithm::{AlgorithmName, SortAlgorithm};
use crate::error::SortError;
use crate::order::Order;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShellSort;

impl SortAlgorithm for ShellSort {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::Shell
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError> {
        validate(sequence)?;
        let mut out = sequence.to_vec();
        shell_sort(&mut out, order);
        Ok(out)
    }
}

/// Shell sort with Shell's original gaps `n/2, n/4, ..., 1`.
pub fn shell_sort<T: Ord + Copy>(slice: &mut [T], order: Order) {
    let mut gap = slice.len() / 2;
    while gap > 0 {
        gapped_insertion_sort(slice, gap, order);
        gap /= 2;
    }
}

/// Insertion sort over each of the `gap` interleaved subsequences of `slice`.
///
/// With `gap == 1` this is a plain insertion sort.
fn gapped_insertion_sort<T: Ord + Copy>(slice: &mut [T], gap: usize, order: Order) {
    for i in gap..slice.len() {
        let held = slice[i];
        let mut j = i;
        // shift items that must go after `held` one gap forward
        while j >= gap && order.precedes(&held, &slice[j - gap]) {
            slice[j] = slice[j - gap];
            j -= gap;
        }
        slice[j] = held;
    }
}
