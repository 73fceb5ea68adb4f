//! Integer sorting with algorithms picked by name at runtime.
//!
//! ```
//! use sorting::{Order, Selector};
//!
//! let sorted = Selector::new("Merge").sort(&[5, 3, 1, 4, 2], Order::Descending)?;
//! assert_eq!(sorted, [5, 4, 3, 2, 1]);
//! # Ok::<(), sorting::SortError>(())
//! ```
//!
//! Every algorithm is also available as a generic in-place function, e.g.
//! [`quicksort::quicksort`], for callers that already own their data.

#![deny(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod algorithm;
pub mod bubble_sort;
pub mod error;
pub mod merge_sort;
pub mod order;
pub mod quicksort;
pub mod selection_sort;
pub mod selector;
pub mod shell_sort;
pub mod validate;

pub use algorithm::{AlgorithmName, SortAlgorithm};
pub use bubble_sort::BubbleSort;
pub use error::{ErrorKind, SortError};
pub use merge_sort::MergeSort;
pub use order::Order;
pub use quicksort::QuickSort;
pub use selection_sort::SelectionSort;
pub use selector::{algorithm, algorithms, Selector};
pub use shell_sort::ShellSort;
pub use validate::{parse_sequence, sequence_from_json, validate, MAX_LEN};
