use crate::algorithm::{AlgorithmName, SortAlgorithm};
use crate::error::SortError;
use crate::order::Order;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::Merge
    }

    fn is_stable(&self) -> bool {
        true
    }

    fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError> {
        validate(sequence)?;
        let mut out = sequence.to_vec();
        merge_sort(&mut out, order);
        Ok(out)
    }
}

/// Top-down stable merge sort for `Copy` types.
///
/// Allocates a single buffer of `slice.len()` items. The buffer and `slice`
/// swap roles at every level of recursion so nothing is copied back.
pub fn merge_sort<T: Ord + Copy>(slice: &mut [T], order: Order) {
    let mut tmp = slice.to_vec();
    merge_sort_core(slice, &mut tmp, order);
}

/// Sort the items of `output` using `tmp` as scratch space.
///
/// Both slices must hold the same items when called.
fn merge_sort_core<T: Ord + Copy>(output: &mut [T], tmp: &mut [T], order: Order) {
    if output.len() > 1 {
        let mid = output.len() / 2;
        let (l, r) = output.split_at_mut(mid);
        let (tmpl, tmpr) = tmp.split_at_mut(mid);

        // sort into temporary arrays
        merge_sort_core(tmpl, l, order);
        merge_sort_core(tmpr, r, order);
        // merge into actual array we want to sort
        merge(output, tmpl, tmpr, order);
    } else {
        // single item, must be sorted
    }
}

/// Merge sorted slices l and r into output.
///
/// Note that following must hold: `l.len() + r.len() == output.len()`
fn merge<T: Ord + Copy>(output: &mut [T], l: &[T], r: &[T], order: Order) {
    debug_assert_eq!(l.len() + r.len(), output.len());
    let (mut i, mut j, mut k) = (0, 0, 0);

    // take the right head only if it must go strictly before the left one,
    // ties go to the left to keep the sort stable
    while i < l.len() && j < r.len() {
        if order.precedes(&r[j], &l[i]) {
            output[k] = r[j];
            j += 1;
        } else {
            output[k] = l[i];
            i += 1;
        }
        k += 1;
    }

    let rest = if i < l.len() { &l[i..] } else { &r[j..] };
    output[k..].copy_from_slice(rest);
}
