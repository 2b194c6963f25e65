use crate::aa::{AAFramework, Argument, ArgumentSubset, LabelType, ReasoningError};
use log::warn;

// Above this number of arguments, exhaustive enumeration becomes noticeably slow.
const LARGE_FRAMEWORK_THRESHOLD: usize = 24;

pub(crate) fn warn_on_large_framework<T>(af: &AAFramework<T>)
where
    T: LabelType,
{
    if af.n_arguments() > LARGE_FRAMEWORK_THRESHOLD {
        warn!(
            "the framework has {} arguments; enumerating its 2^{} subsets may take a long time",
            af.n_arguments(),
            af.n_arguments()
        );
    }
}

// Returns an extension containing the argument, if any.
pub(crate) fn extension_containing<'a, T>(
    af: &'a AAFramework<T>,
    extensions: &[ArgumentSubset],
    arg: &Argument<T>,
) -> Result<Option<Vec<&'a Argument<T>>>, ReasoningError>
where
    T: LabelType,
{
    af.check_argument(arg)?;
    Ok(extensions
        .iter()
        .find(|ext| ext.contains(arg.id()))
        .map(|ext| af.subset_to_arguments(ext)))
}

// Returns an extension that does not contain the argument, if any.
pub(crate) fn extension_not_containing<'a, T>(
    af: &'a AAFramework<T>,
    extensions: &[ArgumentSubset],
    arg: &Argument<T>,
) -> Result<Option<Vec<&'a Argument<T>>>, ReasoningError>
where
    T: LabelType,
{
    af.check_argument(arg)?;
    Ok(extensions
        .iter()
        .find(|ext| !ext.contains(arg.id()))
        .map(|ext| af.subset_to_arguments(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    #[test]
    fn test_no_extension() {
        let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a"]));
        let arg = af.argument_set().get_argument_by_id(0);
        assert!(extension_containing(&af, &[], arg).unwrap().is_none());
        assert!(extension_not_containing(&af, &[], arg).unwrap().is_none());
    }

    #[test]
    fn test_find_extensions() {
        let af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
        let extensions = vec![
            ArgumentSubset::new_with_ids(2, &[0]),
            ArgumentSubset::new_with_ids(2, &[1]),
        ];
        let b = af.argument_set().get_argument_by_id(1);
        let containing = extension_containing(&af, &extensions, b).unwrap().unwrap();
        assert_eq!(vec!["b"], containing.iter().map(|a| *a.label()).collect::<Vec<&str>>());
        let not_containing = extension_not_containing(&af, &extensions, b)
            .unwrap()
            .unwrap();
        assert_eq!(
            vec!["a"],
            not_containing.iter().map(|a| *a.label()).collect::<Vec<&str>>()
        );
    }
}
