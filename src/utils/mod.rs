//! Miscellaneous components used in the library.

mod subsets;
pub use subsets::all_subsets;
pub use subsets::SubsetIterator;
