use crate::aa::{ArgumentSet, ArgumentSubset, LabelType};

/// Iterates over every subset of a set of arguments.
///
/// The subsets are produced lazily by reading a counter `i` ranging from `0` to `2^n-1` as a bitset:
/// the argument with id `k` belongs to the `i`-th subset iff the `k`-th bit of `i` is set.
/// Thus the first subset is the empty one, and each subset is produced exactly once.
///
/// Cloning the iterator gives an independent iterator resuming from the same position.
#[derive(Clone)]
pub struct SubsetIterator {
    next: Option<ArgumentSubset>,
}

impl SubsetIterator {
    /// Builds an iterator over the subsets of a set of `n_arguments` arguments.
    pub fn new(n_arguments: usize) -> Self {
        SubsetIterator {
            next: Some(ArgumentSubset::new_empty(n_arguments)),
        }
    }
}

impl Iterator for SubsetIterator {
    type Item = ArgumentSubset;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        let mut following = current.clone();
        if following.increment() {
            self.next = Some(following);
        }
        Some(current)
    }
}

/// Returns an iterator over all the subsets of an argument set, including the empty set and the whole set.
///
/// The iterator produces `2^n` subsets for `n` arguments, without duplicates.
/// Callers must not rely on the enumeration order.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::ArgumentSet;
/// # use bruteaf::utils::all_subsets;
/// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
/// assert_eq!(8, all_subsets(&arguments).count());
/// ```
pub fn all_subsets<T>(arguments: &ArgumentSet<T>) -> SubsetIterator
where
    T: LabelType,
{
    SubsetIterator::new(arguments.len())
}
