use super::{
    extensions, utils, CredulousAcceptanceComputer, ExtensionChecker, ExtensionEnumerator,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, ArgumentSubset, LabelType, ReasoningError};
use log::{debug, info};

/// A solver used to solve queries for the preferred semantics.
///
/// Preferred extensions are the admissible sets that are maximal w.r.t. set inclusion.
/// There is always at least one preferred extension, since the empty set is admissible.
///
/// The solver explores all the subsets of arguments of the framework to collect the admissible ones,
/// and then keeps the maximal ones.
/// This family is computed the first time it is needed, and reused by the subsequent calls.
///
/// When a certificate is provided for credulous acceptance, it is a preferred extension containing the argument.
/// When a certificate is provided for skeptical acceptance, it is a preferred extension that does not contain the argument.
pub struct PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    extensions: Option<Vec<ArgumentSubset>>,
}

impl<'a, T> PreferredSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the preferred semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::AAFramework;
    /// # use bruteaf::aa::LabelType;
    /// # use bruteaf::solvers::{ExtensionEnumerator, PreferredSemanticsSolver};
    /// fn count_preferred_extensions<T>(af: &AAFramework<T>) -> usize where T: LabelType {
    ///     let mut solver = PreferredSemanticsSolver::new(af);
    ///     solver.enumerate_extensions().len()
    /// }
    /// # assert_eq!(1, count_preferred_extensions::<usize>(&AAFramework::default()));
    /// ```
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self {
            af,
            extensions: None,
        }
    }

    fn extensions(&mut self) -> &[ArgumentSubset] {
        let af = self.af;
        self.extensions.get_or_insert_with(|| {
            utils::warn_on_large_framework(af);
            info!(
                "computing the preferred extensions of a framework with {} argument(s) and {} attack(s)",
                af.n_arguments(),
                af.n_attacks()
            );
            let admissible = extensions::admissible_extensions(af);
            debug!("found {} admissible set(s)", admissible.len());
            let preferred = extensions::maximal_subsets(&admissible);
            info!("found {} preferred extension(s)", preferred.len());
            preferred
        })
    }
}

impl<T> ExtensionEnumerator<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> &[ArgumentSubset] {
        self.extensions()
    }
}

impl<T> ExtensionChecker<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_extension(&mut self, candidate: &ArgumentSubset) -> Result<bool, ReasoningError> {
        self.af.check_subset(candidate)?;
        Ok(self.extensions().contains(candidate))
    }
}

impl<T> CredulousAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool, ReasoningError> {
        self.is_credulously_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError> {
        let af = self.af;
        let certificate = utils::extension_containing(af, self.extensions(), arg)?;
        Ok((certificate.is_some(), certificate))
    }
}

impl<T> SkepticalAcceptanceComputer<T> for PreferredSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool, ReasoningError> {
        self.is_skeptically_accepted_with_certificate(arg)
            .map(|(accepted, _)| accepted)
    }

    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError> {
        let af = self.af;
        let certificate = utils::extension_not_containing(af, self.extensions(), arg)?;
        Ok((certificate.is_none(), certificate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::{AspartixReader, InstanceReader};

    fn read_af(instance: &str) -> AAFramework<String> {
        AspartixReader::default()
            .read(&mut instance.as_bytes())
            .unwrap()
    }

    fn arg<'a>(af: &'a AAFramework<String>, label: &str) -> &'a Argument<String> {
        af.argument_set().get_argument(&label.to_string()).unwrap()
    }

    #[test]
    fn test_example_af() {
        let af = read_af("arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,c).\natt(b,d).\n");
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert_eq!(1, solver.enumerate_extensions().len());
        let acd = af
            .subset_from_labels(&["a".to_string(), "c".to_string(), "d".to_string()])
            .unwrap();
        assert!(solver.is_extension(&acd).unwrap());
        let a = af.subset_from_labels(&["a".to_string()]).unwrap();
        assert!(!solver.is_extension(&a).unwrap());
        assert!(!solver.is_credulously_accepted(arg(&af, "b")).unwrap());
        assert!(solver.is_skeptically_accepted(arg(&af, "a")).unwrap());
    }

    #[test]
    fn test_certificates() {
        let af = read_af("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(b,c).\n");
        let mut solver = PreferredSemanticsSolver::new(&af);
        let (accepted, certificate) = solver
            .is_credulously_accepted_with_certificate(arg(&af, "c"))
            .unwrap();
        assert!(accepted);
        let labels = certificate
            .unwrap()
            .iter()
            .map(|a| a.label().clone())
            .collect::<Vec<String>>();
        assert_eq!(vec!["a", "c"], labels);
        let (accepted, certificate) = solver
            .is_skeptically_accepted_with_certificate(arg(&af, "c"))
            .unwrap();
        assert!(!accepted);
        let labels = certificate
            .unwrap()
            .iter()
            .map(|a| a.label().clone())
            .collect::<Vec<String>>();
        assert_eq!(vec!["b"], labels);
    }

    #[test]
    fn test_odd_cycle() {
        let af = read_af("arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n");
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert!(!solver.is_credulously_accepted(arg(&af, "a")).unwrap());
        assert!(!solver.is_skeptically_accepted(arg(&af, "a")).unwrap());
        assert!(solver
            .is_extension(&ArgumentSubset::new_empty(3))
            .unwrap());
    }

    #[test]
    fn test_unknown_argument() {
        let af = read_af("arg(a).\n");
        let other = read_af("arg(b).\n");
        let mut solver = PreferredSemanticsSolver::new(&af);
        assert_eq!(
            ReasoningError::UnknownArgument("b".to_string()),
            solver
                .is_credulously_accepted(arg(&other, "b"))
                .unwrap_err()
        );
        assert!(matches!(
            solver.is_extension(&ArgumentSubset::new_empty(2)),
            Err(ReasoningError::InvalidSet(_))
        ));
    }
}
