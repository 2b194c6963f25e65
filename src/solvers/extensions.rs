use crate::{
    aa::{AAFramework, Argument, ArgumentSubset, LabelType, ReasoningError},
    utils::all_subsets,
};

/// Checks whether a subset of arguments is conflict-free.
///
/// A subset is conflict-free iff none of its members attacks a member of the subset.
/// Self-attacking arguments never belong to conflict-free subsets.
///
/// If the subset does not refer to the arguments of the framework, an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::{AAFramework, ArgumentSet};
/// # use bruteaf::solvers::is_conflict_free;
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// assert!(is_conflict_free(&af, &af.subset_from_labels(&["a"]).unwrap()).unwrap());
/// assert!(!is_conflict_free(&af, &af.subset_from_labels(&["a", "b"]).unwrap()).unwrap());
/// ```
pub fn is_conflict_free<T>(
    af: &AAFramework<T>,
    subset: &ArgumentSubset,
) -> Result<bool, ReasoningError>
where
    T: LabelType,
{
    af.check_subset(subset)?;
    Ok(is_conflict_free_unchecked(af, subset))
}

/// Checks whether a subset of arguments defends an argument.
///
/// A subset defends an argument iff each attacker of this argument is attacked by a member of the subset.
/// Unattacked arguments are defended by any subset, including the empty one.
///
/// If the subset does not refer to the arguments of the framework, an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
/// If the argument does not belong to the framework, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
pub fn defends<T>(
    af: &AAFramework<T>,
    subset: &ArgumentSubset,
    arg: &Argument<T>,
) -> Result<bool, ReasoningError>
where
    T: LabelType,
{
    af.check_subset(subset)?;
    af.check_argument(arg)?;
    Ok(af
        .attackers_of_id(arg.id())
        .is_subset_of(&attacked_by(af, subset)))
}

/// Checks whether a subset of arguments is admissible.
///
/// A subset is admissible iff it is conflict-free and it defends each of its members.
/// The empty subset is always admissible.
///
/// If the subset does not refer to the arguments of the framework, an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
pub fn is_admissible<T>(
    af: &AAFramework<T>,
    subset: &ArgumentSubset,
) -> Result<bool, ReasoningError>
where
    T: LabelType,
{
    af.check_subset(subset)?;
    Ok(is_admissible_unchecked(af, subset))
}

/// Checks whether a subset of arguments is stable.
///
/// A subset is stable iff it is conflict-free and each argument outside the subset is attacked by one of its members.
///
/// If the subset does not refer to the arguments of the framework, an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
pub fn is_stable<T>(af: &AAFramework<T>, subset: &ArgumentSubset) -> Result<bool, ReasoningError>
where
    T: LabelType,
{
    af.check_subset(subset)?;
    Ok(is_stable_unchecked(af, subset))
}

/// Computes all the admissible subsets of a framework.
///
/// The result always contains the empty subset.
/// The exploration is exhaustive: its cost is exponential in the number of arguments.
pub fn admissible_extensions<T>(af: &AAFramework<T>) -> Vec<ArgumentSubset>
where
    T: LabelType,
{
    all_subsets(af.argument_set())
        .filter(|s| is_admissible_unchecked(af, s))
        .collect()
}

/// Computes the preferred extensions of a framework.
///
/// Preferred extensions are the admissible subsets that are maximal w.r.t. set inclusion.
/// When several maximal subsets exist, all of them are returned.
/// Since the empty subset is admissible, there is always at least one preferred extension.
pub fn preferred_extensions<T>(af: &AAFramework<T>) -> Vec<ArgumentSubset>
where
    T: LabelType,
{
    maximal_subsets(&admissible_extensions(af))
}

/// Computes the stable extensions of a framework.
///
/// The result may be empty, as in the case of an odd-length attack cycle.
pub fn stable_extensions<T>(af: &AAFramework<T>) -> Vec<ArgumentSubset>
where
    T: LabelType,
{
    all_subsets(af.argument_set())
        .filter(|s| is_stable_unchecked(af, s))
        .collect()
}

// The arguments attacked by at least one member of the subset.
fn attacked_by<T>(af: &AAFramework<T>, subset: &ArgumentSubset) -> ArgumentSubset
where
    T: LabelType,
{
    let mut attacked = ArgumentSubset::new_empty(af.n_arguments());
    subset
        .iter()
        .for_each(|id| attacked.union_with(af.attacked_by_id(id)));
    attacked
}

fn is_conflict_free_unchecked<T>(af: &AAFramework<T>, subset: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    subset
        .iter()
        .all(|id| !af.attacked_by_id(id).intersects(subset))
}

fn is_admissible_unchecked<T>(af: &AAFramework<T>, subset: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    if !is_conflict_free_unchecked(af, subset) {
        return false;
    }
    let attacked = attacked_by(af, subset);
    subset
        .iter()
        .all(|id| af.attackers_of_id(id).is_subset_of(&attacked))
}

fn is_stable_unchecked<T>(af: &AAFramework<T>, subset: &ArgumentSubset) -> bool
where
    T: LabelType,
{
    is_conflict_free_unchecked(af, subset)
        && subset.complement().is_subset_of(&attacked_by(af, subset))
}

// Keeps the subsets that are not strictly included in another one.
pub(crate) fn maximal_subsets(subsets: &[ArgumentSubset]) -> Vec<ArgumentSubset> {
    subsets
        .iter()
        .filter(|s| !subsets.iter().any(|other| s.is_strict_subset_of(other)))
        .cloned()
        .collect()
}
