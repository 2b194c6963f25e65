use super::ReasoningError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;

/// The trait for argument labels.
///
/// Arguments may be labeled by any type implementing some traits.
/// This trait is used to combine them.
pub trait LabelType: Clone + Debug + Display + Eq + Hash {}
impl<T: Clone + Debug + Display + Eq + Hash> LabelType for T {}

/// Handles a single argument.
///
/// Each argument has a label and an identifier which is unique in an argument set.
/// The label must be a [`LabelType`].
/// Arguments are compared by their label and their identifier only; they have no other structure.
///
/// Arguments are built by [`ArgumentSet`] objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument<T: LabelType> {
    id: usize,
    label: T,
}

impl<T> Argument<T>
where
    T: LabelType,
{
    /// Returns the label of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use bruteaf::aa::{Argument, LabelType};
    /// fn describe_argument<T: LabelType>(a: &Argument<T>) {
    ///     println!("argument with id {} has the label {}", a.id(), a.label());
    /// }
    /// ```
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the argument.
    ///
    /// Ids are dense: in a set of `n` arguments, they range from `0` to `n-1`.
    /// They are the indices used by [`ArgumentSubset`](crate::aa::ArgumentSubset) objects.
    pub fn id(&self) -> usize {
        self.id
    }
}

impl<T> Display for Argument<T>
where
    T: LabelType,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Handles the set of arguments of an AA framework.
#[derive(Default)]
pub struct ArgumentSet<T>
where
    T: LabelType,
{
    arguments: Vec<Argument<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> ArgumentSet<T>
where
    T: LabelType,
{
    /// Builds a new argument set given the labels of the arguments.
    ///
    /// Each argument will be assigned an id equal to its index in the provided slice of argument labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    ///
    /// # Arguments
    ///
    /// * `labels` - the argument labels
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.len());
    /// ```
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut argument_set = ArgumentSet {
            arguments: Vec::with_capacity(labels.len()),
            label_to_id: HashMap::with_capacity(labels.len()),
        };
        labels
            .iter()
            .for_each(|l| argument_set.new_argument(l.clone()));
        argument_set.arguments.shrink_to_fit();
        argument_set.label_to_id.shrink_to_fit();
        argument_set
    }

    fn new_argument(&mut self, label: T) {
        self.label_to_id.entry(label.clone()).or_insert_with(|| {
            self.arguments.push(Argument {
                id: self.arguments.len(),
                label,
            });
            self.arguments.len() - 1
        });
    }

    /// Returns the number of arguments in the set.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "a"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(2, arguments.len());
    /// ```
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the unique index associated to an argument label.
    ///
    /// If no such label exists, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(0, arguments.get_argument_index(&labels[0]).unwrap());
    /// assert_eq!(2, arguments.get_argument_index(&labels[2]).unwrap());
    /// assert!(arguments.get_argument_index(&"d").is_err());
    /// ```
    pub fn get_argument_index(&self, label: &T) -> Result<usize, ReasoningError> {
        self.label_to_id
            .get(label)
            .copied()
            .ok_or_else(|| ReasoningError::UnknownArgument(label.to_string()))
    }

    /// Returns the argument associated to an argument label.
    ///
    /// If no such label exists, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert!(arguments.get_argument(&"a").is_ok());
    /// assert!(arguments.get_argument(&"d").is_err());
    /// ```
    pub fn get_argument(&self, label: &T) -> Result<&Argument<T>, ReasoningError> {
        self.get_argument_index(label)
            .map(|i| &self.arguments[i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(&labels[1], arguments.get_argument_by_id(1).label());
    /// ```
    pub fn get_argument_by_id(&self, id: usize) -> &Argument<T> {
        &self.arguments[id]
    }

    /// Returns `true` iff the argument belongs to this set.
    ///
    /// Both the label and the id must match; an argument built by another set with the same label may have a different id.
    pub fn contains(&self, arg: &Argument<T>) -> bool {
        self.arguments.get(arg.id()) == Some(arg)
    }

    /// Returns an iterator to the arguments, in increasing id order.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::ArgumentSet;
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// assert_eq!(3, arguments.iter().count());
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = &Argument<T>> + '_ {
        self.arguments.iter()
    }
}
