use super::{Argument, ArgumentSet, ArgumentSubset, LabelType, ReasoningError};
use anyhow::{anyhow, Context, Result};

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// A framework is a pair made of a finite set of arguments and an attack relation between them.
/// It is built in two steps: the set of arguments is given first, then the attacks are added.
/// Once built, a framework is only read: solvers borrow it and never alter it.
///
/// Attacks are handled as a set: adding an attack that already exists has no effect.
/// For each argument, the set of its attackers and the set of its targets are kept as [`ArgumentSubset`] objects;
/// this index is maintained while attacks are added.
#[derive(Default)]
pub struct AAFramework<T>
where
    T: LabelType,
{
    arguments: ArgumentSet<T>,
    attacks: Vec<(usize, usize)>,
    attacks_from: Vec<ArgumentSubset>,
    attacks_to: Vec<ArgumentSubset>,
}

/// An attack, represented as a couple of two arguments.
///
/// Attacks are built by [`AAFramework`] objects.
pub struct Attack<'a, T>(&'a Argument<T>, &'a Argument<T>)
where
    T: LabelType;

impl<'a, T> Attack<'a, T>
where
    T: LabelType,
{
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use bruteaf::aa::{Attack, LabelType};
    /// fn describe_attack<T: LabelType>(attack: &Attack<T>) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument<T> {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument<T> {
        self.1
    }
}

impl<T> AAFramework<T>
where
    T: LabelType,
{
    /// Builds an AA framework.
    ///
    /// The set of arguments used in the framework is provided.
    ///
    /// # Arguments
    ///
    /// * `arguments` - the set of arguments
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(3, framework.argument_set().len());
    /// assert_eq!(0, framework.iter_attacks().count());
    /// ```
    pub fn new_with_argument_set(arguments: ArgumentSet<T>) -> Self {
        let n = arguments.len();
        AAFramework {
            arguments,
            attacks: vec![],
            attacks_from: (0..n).map(|_| ArgumentSubset::new_empty(n)).collect(),
            attacks_to: (0..n).map(|_| ArgumentSubset::new_empty(n)).collect(),
        }
    }

    /// Adds a new attack given the labels of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// Else, the attack is added, and `true` is returned if it was not already present.
    ///
    /// # Arguments
    ///
    /// * `from` - the label of the source arguments (attacker)
    /// * `to` - the label of the destination argument (attacked)
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::{ArgumentSet, AAFramework};
    /// let labels = vec!["a", "b", "c"];
    /// let arguments = ArgumentSet::new_with_labels(&labels);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert!(framework.new_attack(&labels[0], &labels[1]).unwrap());
    /// assert!(!framework.new_attack(&labels[0], &labels[1]).unwrap());
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack(&mut self, from: &T, to: &T) -> Result<bool> {
        let context = || format!("cannot add an attack from {:?} to {:?}", from, to);
        let attacker_id = self
            .arguments
            .get_argument_index(from)
            .with_context(context)?;
        let attacked_id = self
            .arguments
            .get_argument_index(to)
            .with_context(context)?;
        Ok(self.insert_attack(attacker_id, attacked_id))
    }

    /// Adds a new attack given the IDs of the source and destination arguments.
    ///
    /// If the provided arguments are undefined, an error is returned.
    /// Else, the attack is added, and `true` is returned if it was not already present.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack_by_ids(0, 1).unwrap(); // "a" attacks "b"
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn new_attack_by_ids(&mut self, from: usize, to: usize) -> Result<bool> {
        let n_arguments = self.arguments.len();
        if from >= n_arguments || to >= n_arguments {
            return Err(anyhow!(
                "cannot add an attack from identifiers {:?} to {:?}; the framework has {} argument(s)",
                from,
                to,
                n_arguments
            ));
        }
        Ok(self.insert_attack(from, to))
    }

    fn insert_attack(&mut self, from: usize, to: usize) -> bool {
        if !self.attacks_from[from].insert(to) {
            return false;
        }
        self.attacks_to[to].insert(from);
        self.attacks.push((from, to));
        true
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet<T> {
        &self.arguments
    }

    /// Provides an iterator to the attacks, in insertion order.
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_, T>> + '_ {
        self.attacks.iter().map(|(a, b)| {
            Attack(
                self.arguments.get_argument_by_id(*a),
                self.arguments.get_argument_by_id(*b),
            )
        })
    }

    /// Returns the arguments attacking the argument with the given label.
    ///
    /// If no such label exists, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// framework.new_attack(&"a", &"c").unwrap();
    /// framework.new_attack(&"b", &"c").unwrap();
    /// let attackers = framework.attackers_of(&"c").unwrap();
    /// assert_eq!(vec!["a", "b"], attackers.iter().map(|a| *a.label()).collect::<Vec<_>>());
    /// assert!(framework.attackers_of(&"d").is_err());
    /// ```
    pub fn attackers_of(&self, label: &T) -> Result<Vec<&Argument<T>>, ReasoningError> {
        let id = self.arguments.get_argument_index(label)?;
        Ok(self.subset_to_arguments(&self.attacks_to[id]))
    }

    /// Returns the arguments attacked by the argument with the given label.
    ///
    /// If no such label exists, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    pub fn attacks(&self, label: &T) -> Result<Vec<&Argument<T>>, ReasoningError> {
        let id = self.arguments.get_argument_index(label)?;
        Ok(self.subset_to_arguments(&self.attacks_from[id]))
    }

    // The attackers of the argument with the given id.
    pub(crate) fn attackers_of_id(&self, id: usize) -> &ArgumentSubset {
        &self.attacks_to[id]
    }

    // The targets of the argument with the given id.
    pub(crate) fn attacked_by_id(&self, id: usize) -> &ArgumentSubset {
        &self.attacks_from[id]
    }

    /// Builds the subset made of the arguments with the given labels.
    ///
    /// If a label is not the one of an argument of this framework,
    /// an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let framework = AAFramework::new_with_argument_set(arguments);
    /// let subset = framework.subset_from_labels(&["c", "a"]).unwrap();
    /// assert_eq!(vec![0, 2], subset.iter().collect::<Vec<usize>>());
    /// assert!(framework.subset_from_labels(&["d"]).is_err());
    /// ```
    pub fn subset_from_labels(&self, labels: &[T]) -> Result<ArgumentSubset, ReasoningError> {
        let mut subset = ArgumentSubset::new_empty(self.n_arguments());
        for label in labels {
            let id = self.arguments.get_argument_index(label).map_err(|_| {
                ReasoningError::InvalidSet(format!(
                    "{} is not an argument of the framework",
                    label
                ))
            })?;
            subset.insert(id);
        }
        Ok(subset)
    }

    /// Returns the arguments of a subset, in increasing id order.
    ///
    /// # Panics
    ///
    /// Panics if the subset contains an id that is not the one of an argument of this framework.
    pub fn subset_to_arguments(&self, subset: &ArgumentSubset) -> Vec<&Argument<T>> {
        subset
            .iter()
            .map(|id| self.arguments.get_argument_by_id(id))
            .collect()
    }

    /// Checks an argument belongs to this framework.
    ///
    /// If it does not, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    pub fn check_argument(&self, arg: &Argument<T>) -> Result<(), ReasoningError> {
        if self.arguments.contains(arg) {
            Ok(())
        } else {
            Err(ReasoningError::UnknownArgument(arg.to_string()))
        }
    }

    /// Checks a subset refers to the arguments of this framework.
    ///
    /// If its width is not the number of arguments of the framework, an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
    pub fn check_subset(&self, subset: &ArgumentSubset) -> Result<(), ReasoningError> {
        if subset.n_arguments() == self.n_arguments() {
            Ok(())
        } else {
            Err(ReasoningError::InvalidSet(format!(
                "the subset refers to {} argument(s) while the framework has {}",
                subset.n_arguments(),
                self.n_arguments()
            )))
        }
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.argument_set().len()
    }

    /// Returns the number of attacks in this framework.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::{ArgumentSet, AAFramework};
    /// let arguments = ArgumentSet::new_with_labels(&["a", "b", "c"]);
    /// let mut framework = AAFramework::new_with_argument_set(arguments);
    /// assert_eq!(0, framework.n_attacks());
    /// framework.new_attack_by_ids(0, 1).unwrap();
    /// assert_eq!(1, framework.n_attacks());
    /// ```
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_framework() -> (Vec<String>, AAFramework<String>) {
        let arg_labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_labels);
        (arg_labels, AAFramework::new_with_argument_set(args))
    }

    #[test]
    fn test_n_args() {
        let (_, af) = abc_framework();
        assert_eq!(3, af.n_arguments());
    }

    #[test]
    fn test_new_attack_ok() {
        let (arg_labels, mut af) = abc_framework();
        assert_eq!(0, af.n_attacks());
        assert!(af.new_attack(&arg_labels[0], &arg_labels[0]).unwrap());
        assert_eq!(1, af.n_attacks());
        assert_eq!((0, 0), af.attacks[0]);
        assert!(af.attacks_from[0].contains(0));
        assert!(af.attacks_to[0].contains(0));
    }

    #[test]
    fn test_new_attack_duplicate() {
        let (arg_labels, mut af) = abc_framework();
        assert!(af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap());
        assert!(!af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap());
        assert!(!af.new_attack_by_ids(0, 1).unwrap());
        assert_eq!(1, af.n_attacks());
    }

    #[test]
    fn test_new_attack_unknown_label_1() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&"d".to_string(), &arg_labels[0]).unwrap_err();
    }

    #[test]
    fn test_new_attack_unknown_label_2() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[0], &"d".to_string()).unwrap_err();
    }

    #[test]
    fn test_new_attack_by_ids_unknown_id() {
        let (_, mut af) = abc_framework();
        af.new_attack_by_ids(3, 0).unwrap_err();
        af.new_attack_by_ids(0, 3).unwrap_err();
    }

    #[test]
    fn test_attackers_and_targets() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        af.new_attack(&arg_labels[1], &arg_labels[2]).unwrap();
        af.new_attack(&arg_labels[1], &arg_labels[0]).unwrap();
        let labels = |v: Vec<&Argument<String>>| {
            v.iter().map(|a| a.label().clone()).collect::<Vec<String>>()
        };
        assert_eq!(vec!["b"], labels(af.attackers_of(&arg_labels[0]).unwrap()));
        assert_eq!(vec!["a", "c"], labels(af.attacks(&arg_labels[1]).unwrap()));
        assert!(af.attacks(&arg_labels[2]).unwrap().is_empty());
        assert_eq!(
            ReasoningError::UnknownArgument("d".to_string()),
            af.attacks(&"d".to_string()).unwrap_err()
        );
        assert_eq!(
            ReasoningError::UnknownArgument("d".to_string()),
            af.attackers_of(&"d".to_string()).unwrap_err()
        );
    }

    #[test]
    fn test_subset_from_labels_invalid() {
        let (_, af) = abc_framework();
        assert!(matches!(
            af.subset_from_labels(&["a".to_string(), "z".to_string()]),
            Err(ReasoningError::InvalidSet(_))
        ));
    }

    #[test]
    fn test_check_subset() {
        let (_, af) = abc_framework();
        assert!(af.check_subset(&ArgumentSubset::new_empty(3)).is_ok());
        assert!(matches!(
            af.check_subset(&ArgumentSubset::new_empty(4)),
            Err(ReasoningError::InvalidSet(_))
        ));
    }

    #[test]
    fn test_check_argument() {
        let (_, af) = abc_framework();
        let other = ArgumentSet::new_with_labels(&["z".to_string()]);
        assert!(af
            .check_argument(af.argument_set().get_argument_by_id(2))
            .is_ok());
        assert_eq!(
            ReasoningError::UnknownArgument("z".to_string()),
            af.check_argument(other.get_argument_by_id(0)).unwrap_err()
        );
    }

    #[test]
    fn test_iter_attacks() {
        let (arg_labels, mut af) = abc_framework();
        af.new_attack(&arg_labels[2], &arg_labels[0]).unwrap();
        af.new_attack(&arg_labels[0], &arg_labels[1]).unwrap();
        let attacks = af
            .iter_attacks()
            .map(|att| format!("({},{})", att.attacker(), att.attacked()))
            .collect::<Vec<String>>();
        assert_eq!(vec!["(c,a)", "(a,b)"], attacks);
    }
}
