use crate::algorithm::{AlgorithmName, SortAlgorithm};
use crate::error::SortError;
use crate::order::Order;
use crate::validate::validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn name(&self) -> AlgorithmName {
        AlgorithmName::Selection
    }

    fn is_stable(&self) -> bool {
        false
    }

    fn sort(&self, sequence: &[i64], order: Order) -> Result<Vec<i64>, SortError> {
        validate(sequence)?;
        let mut out = sequence.to_vec();
        selection_sort(&mut out, order);
        Ok(out)
    }
}

pub fn selection_sort<T: Ord>(slice: &mut [T], order: Order) {
    for i in 0..slice.len() {
        // slice[..i] is sorted and every item in it goes before any item in slice[i..]
        // find the item in slice[i..] that goes first and move it to i
        let mut first_index = i;
        let mut first = &slice[i];
        for (j, it) in (i + 1..).zip(&slice[i + 1..]) {
            if order.precedes(it, first) {
                first_index = j;
                first = it;
            }
        }

        if first_index != i {
            slice.swap(i, first_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_sort_test() {
        let mut arr = vec![1, 4, 2, 24, 65, 3, 3, 45];
        selection_sort(arr.as_mut_slice(), Order::Ascending);
        assert_eq!(arr, [1, 2, 3, 3, 4, 24, 45, 65]);

        selection_sort(arr.as_mut_slice(), Order::Descending);
        assert_eq!(arr, [65, 45, 24, 4, 3, 3, 2, 1]);
    }

    #[test]
    fn negative_and_extremes() {
        let input = [0, i64::MAX, -1, i64::MIN, 7, -1];
        let out = SelectionSort.sort(&input, Order::Ascending).unwrap();
        assert_eq!(out, [i64::MIN, -1, -1, 0, 7, i64::MAX]);
        let out = SelectionSort.sort(&input, Order::Descending).unwrap();
        assert_eq!(out, [i64::MAX, 7, 0, -1, -1, i64::MIN]);
    }

    mod proptests {
        use proptest::prelude::*;

        use super::*;

        #[cfg(not(miri))]
        const VEC_SIZE: usize = 1000;
        #[cfg(miri)]
        const VEC_SIZE: usize = 50;

        #[cfg(not(miri))]
        const PROPTEST_CASES: u32 = 200;
        #[cfg(miri)]
        const PROPTEST_CASES: u32 = 10;

        proptest!(
            #![proptest_config(ProptestConfig::with_cases(PROPTEST_CASES))]

            #[test]
            #[cfg_attr(miri, ignore = "no unsafe code, nothing for miri to check")]
            fn selection_sort_test(
                mut vec in proptest::collection::vec(0..10000i32, 0..VEC_SIZE),
                descending in any::<bool>(),
            ) {
                let order = if descending { Order::Descending } else { Order::Ascending };
                let mut expected = vec.clone();
                expected.sort_by(|a, b| order.compare(a, b));
                selection_sort(vec.as_mut_slice(), order);
                prop_assert_eq!(vec, expected);
            }
        );
    }
}
