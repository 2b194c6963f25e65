const WORD_BITS: usize = u64::BITS as usize;

fn n_words(n_arguments: usize) -> usize {
    (n_arguments + WORD_BITS - 1) / WORD_BITS
}

// The bits of the word with the given index that map to actual arguments.
fn word_mask(n_arguments: usize, word_index: usize) -> u64 {
    let remaining = n_arguments - word_index * WORD_BITS;
    if remaining >= WORD_BITS {
        u64::MAX
    } else {
        (1 << remaining) - 1
    }
}

/// A subset of the arguments of an AA framework.
///
/// Subsets are fixed-width bitsets indexed by argument ids (see [`Argument::id`](crate::aa::Argument::id)).
/// The width of a subset is the number of arguments of the framework it refers to;
/// two subsets are equal iff they have the same width and the same members.
///
/// Subsets are used both as candidate extensions and as extensions computed by the solvers.
/// They do not refer to their framework: use [`AAFramework::subset_from_labels`](crate::aa::AAFramework::subset_from_labels)
/// and [`AAFramework::subset_to_arguments`](crate::aa::AAFramework::subset_to_arguments) to translate them from or into arguments.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::ArgumentSubset;
/// let mut subset = ArgumentSubset::new_empty(3);
/// subset.insert(0);
/// subset.insert(2);
/// assert_eq!(vec![0, 2], subset.iter().collect::<Vec<usize>>());
/// assert!(subset.is_subset_of(&ArgumentSubset::new_full(3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArgumentSubset {
    n_arguments: usize,
    words: Vec<u64>,
}

impl ArgumentSubset {
    /// Builds an empty subset for a framework with the given number of arguments.
    pub fn new_empty(n_arguments: usize) -> Self {
        ArgumentSubset {
            n_arguments,
            words: vec![0; n_words(n_arguments)],
        }
    }

    /// Builds the subset containing all the arguments of a framework with the given number of arguments.
    pub fn new_full(n_arguments: usize) -> Self {
        ArgumentSubset {
            n_arguments,
            words: (0..n_words(n_arguments))
                .map(|i| word_mask(n_arguments, i))
                .collect(),
        }
    }

    /// Builds a subset given the ids of its members.
    ///
    /// # Panics
    ///
    /// Panics if an id is not lower than `n_arguments`.
    pub fn new_with_ids(n_arguments: usize, ids: &[usize]) -> Self {
        let mut subset = ArgumentSubset::new_empty(n_arguments);
        ids.iter().for_each(|id| {
            subset.insert(*id);
        });
        subset
    }

    /// Returns the number of arguments of the framework this subset refers to.
    pub fn n_arguments(&self) -> usize {
        self.n_arguments
    }

    /// Adds an argument to the subset.
    ///
    /// Returns `true` iff the argument was not already in the subset.
    ///
    /// # Panics
    ///
    /// Panics if the id is not lower than the width of the subset.
    pub fn insert(&mut self, id: usize) -> bool {
        assert!(
            id < self.n_arguments,
            "argument id {} out of range (width is {})",
            id,
            self.n_arguments
        );
        let bit = 1 << (id % WORD_BITS);
        let word = &mut self.words[id / WORD_BITS];
        let absent = *word & bit == 0;
        *word |= bit;
        absent
    }

    /// Removes an argument from the subset.
    ///
    /// Returns `true` iff the argument was in the subset.
    pub fn remove(&mut self, id: usize) -> bool {
        if !self.contains(id) {
            return false;
        }
        self.words[id / WORD_BITS] &= !(1 << (id % WORD_BITS));
        true
    }

    /// Returns `true` iff the argument with the given id is in the subset.
    pub fn contains(&self, id: usize) -> bool {
        id < self.n_arguments && self.words[id / WORD_BITS] & (1 << (id % WORD_BITS)) != 0
    }

    /// Returns the number of arguments in the subset.
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` iff the subset has no argument.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| *w == 0)
    }

    /// Iterates over the ids of the members, in increasing order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(i, w)| {
            let mut word = *w;
            std::iter::from_fn(move || {
                if word == 0 {
                    None
                } else {
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    Some(i * WORD_BITS + bit)
                }
            })
        })
    }

    /// Returns `true` iff each member of this subset belongs to the other one.
    ///
    /// Subsets with different widths are never included into each other.
    pub fn is_subset_of(&self, other: &ArgumentSubset) -> bool {
        self.n_arguments == other.n_arguments
            && self
                .words
                .iter()
                .zip(other.words.iter())
                .all(|(a, b)| a & !b == 0)
    }

    /// Returns `true` iff this subset is included in the other one and differs from it.
    pub fn is_strict_subset_of(&self, other: &ArgumentSubset) -> bool {
        self.is_subset_of(other) && self != other
    }

    /// Returns `true` iff the two subsets share at least one argument.
    pub fn intersects(&self, other: &ArgumentSubset) -> bool {
        self.words
            .iter()
            .zip(other.words.iter())
            .any(|(a, b)| a & b != 0)
    }

    /// Adds the members of the other subset to this one.
    pub fn union_with(&mut self, other: &ArgumentSubset) {
        debug_assert_eq!(self.n_arguments, other.n_arguments);
        self.words
            .iter_mut()
            .zip(other.words.iter())
            .for_each(|(a, b)| *a |= b);
    }

    /// Returns the arguments of the framework that are not in this subset.
    pub fn complement(&self) -> ArgumentSubset {
        ArgumentSubset {
            n_arguments: self.n_arguments,
            words: self
                .words
                .iter()
                .enumerate()
                .map(|(i, w)| !w & word_mask(self.n_arguments, i))
                .collect(),
        }
    }

    // Moves to the next subset, reading the bits as a binary number.
    // Returns `false` when the counter wraps around to the empty subset.
    pub(crate) fn increment(&mut self) -> bool {
        let n_arguments = self.n_arguments;
        for (i, word) in self.words.iter_mut().enumerate() {
            let next = word.wrapping_add(1) & word_mask(n_arguments, i);
            *word = next;
            if next != 0 {
                return true;
            }
        }
        false
    }
}
