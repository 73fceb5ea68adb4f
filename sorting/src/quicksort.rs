use core::cmp::Ordering;

use crate::algorithm::{AlgorithmName, SortAlgorithm};
use crate::error::SortError;
use crate::order::Order;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl SortAlgorithm for QuickSort {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::Quick
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError> {
        validate(sequence)?;
        let mut out = sequence.to_vec();
        quicksort(&mut out, order);
        Ok(out)
    }
}

/// Quicksort with a middle pivot and three-way partitioning.
///
/// Only the smaller side of each partition is sorted recursively, the larger
/// one is handled by the loop. That keeps the recursion depth at `O(log n)`
/// even when every pivot is the worst possible one.
pub fn quicksort<T: Ord>(mut slice: &mut [T], order: Order) {
    while slice.len() > 1 {
        let (before, after) = partition_3way(slice, order);
        if before.len() < after.len() {
            quicksort(before, order);
            slice = after;
        } else {
            quicksort(after, order);
            slice = before;
        }
    }
}

/// Partition the slice in-place around the value of its middle item.
///
/// Returns two slices, where first contains items that go strictly before the
/// pivot in `order` and second the items that go strictly after it. All items
/// equal to the pivot are placed between the two returned slices, which is
/// their final sorted position, and are not part of either.
///
/// # Panics
///
/// * if `slice` is empty
fn partition_3way<T: Ord>(slice: &mut [T], order: Order) -> (&mut [T], &mut [T]) {
    // use middle element as pivot to not fall to worst case perf for already sorted slices
    let mid = slice.len() / 2;
    slice.swap(0, mid);

    // Invariants:
    //   `slice[..lt]` goes before pivot
    //   `slice[lt..i]` == pivot, never empty so `slice[lt]` is always a pivot
    //   `slice[i..gt]` is not yet looked at
    //   `slice[gt..]` goes after pivot
    let mut lt = 0;
    let mut i = 1;
    let mut gt = slice.len();

    while i < gt {
        match order.compare(&slice[i], &slice[lt]) {
            Ordering::Less => {
                slice.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Greater => {
                gt -= 1;
                slice.swap(i, gt);
            }
            Ordering::Equal => i += 1,
        }
    }

    let (before, rest) = slice.split_at_mut(lt);
    let (_pivots, after) = rest.split_at_mut(gt - lt);
    (before, after)
}
