use crate::algorithm::{AlgorithmName, SortAlgorithm};
use crate::error::SortError;
use crate::order::Order;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::Bubble
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError> {
        validate(sequence)?;
        let mut out = sequence.to_vec();
        bubble_sort(&mut out, order);
        Ok(out)
    }
}

pub fn bubble_sort<T: Ord>(mut slice: &mut [T], order: Order) {
    // Everything after the last swap of a pass is already in place, so the
    // next pass only needs to go up to it. A pass without swaps ends the sort.
    while slice.len() > 1 {
        let mut new_unsorted_len = 0;
        for i in 0..slice.len() - 1 {
            let j = i + 1;
            if order.precedes(&slice[j], &slice[i]) {
                slice.swap(i, j);
                new_unsorted_len = j;
            }
        }
        slice = &mut slice[..new_unsorted_len];
    }
}
