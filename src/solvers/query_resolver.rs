use super::{PreferredSemanticsSolver, SemanticsSolver, StableSemanticsSolver};
use crate::aa::{
    read_problem_string, AAFramework, Argument, LabelType, Query, ReasoningError, Semantics,
};
use log::debug;

/// The argument of a query: a set of labels for extension verification, a single label for acceptance problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryArgument<T>
where
    T: LabelType,
{
    /// A candidate set of arguments, given by their labels.
    Set(Vec<T>),
    /// A single argument, given by its label.
    Argument(T),
}

/// Answers the problems defined by a query mode and a semantics on a given framework.
///
/// The resolver owns one solver per semantics.
/// Since solvers memoize the extensions they compute, a resolver used for several queries on the same framework
/// enumerates the extensions of each semantics at most once.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::{AAFramework, ArgumentSet};
/// # use bruteaf::solvers::{QueryArgument, QueryResolver};
/// let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&["a", "b"]));
/// af.new_attack(&"a", &"b").unwrap();
/// let mut resolver = QueryResolver::new(&af);
/// assert!(resolver.solve("DS-PR", &QueryArgument::Argument("a")).unwrap());
/// assert!(!resolver.solve("VE-ST", &QueryArgument::Set(vec!["b"])).unwrap());
/// ```
pub struct QueryResolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    preferred_solver: PreferredSemanticsSolver<'a, T>,
    stable_solver: StableSemanticsSolver<'a, T>,
}

impl<'a, T> QueryResolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new resolver for the given framework.
    pub fn new(af: &'a AAFramework<T>) -> Self {
        Self {
            af,
            preferred_solver: PreferredSemanticsSolver::new(af),
            stable_solver: StableSemanticsSolver::new(af),
        }
    }

    /// Returns the solver dedicated to a semantics.
    pub fn solver_for(&mut self, semantics: Semantics) -> &mut dyn SemanticsSolver<T> {
        match semantics {
            Semantics::PR => &mut self.preferred_solver,
            Semantics::ST => &mut self.stable_solver,
        }
    }

    /// Checks whether the set of arguments given by their labels is an extension.
    ///
    /// A set containing a label that does not belong to the framework is not an extension.
    pub fn verify_extension(
        &mut self,
        semantics: Semantics,
        labels: &[T],
    ) -> Result<bool, ReasoningError> {
        let candidate = match self.af.subset_from_labels(labels) {
            Ok(c) => c,
            Err(ReasoningError::InvalidSet(msg)) => {
                debug!("{}", msg);
                return Ok(false);
            }
            Err(e) => return Err(e),
        };
        self.solver_for(semantics).is_extension(&candidate)
    }

    /// Checks whether the argument with the given label belongs to at least one extension.
    ///
    /// A label that does not belong to the framework is never credulously accepted.
    pub fn decide_credulous(
        &mut self,
        semantics: Semantics,
        label: &T,
    ) -> Result<bool, ReasoningError> {
        self.decide_credulous_with_certificate(semantics, label)
            .map(|(status, _)| status)
    }

    /// Checks whether the argument with the given label belongs to at least one extension,
    /// and returns such an extension if it is the case.
    #[allow(clippy::type_complexity)]
    pub fn decide_credulous_with_certificate(
        &mut self,
        semantics: Semantics,
        label: &T,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError> {
        let af = self.af;
        match af.argument_set().get_argument(label) {
            Ok(arg) => self
                .solver_for(semantics)
                .is_credulously_accepted_with_certificate(arg),
            Err(e) => {
                debug!("{}", e);
                Ok((false, None))
            }
        }
    }

    /// Checks whether the argument with the given label belongs to all the extensions.
    ///
    /// The answer is `true` when there is no extension at all, including for labels that do not belong to the framework.
    /// Otherwise, such labels are not skeptically accepted.
    pub fn decide_skeptical(
        &mut self,
        semantics: Semantics,
        label: &T,
    ) -> Result<bool, ReasoningError> {
        self.decide_skeptical_with_certificate(semantics, label)
            .map(|(status, _)| status)
    }

    /// Checks whether the argument with the given label belongs to all the extensions,
    /// and returns an extension that does not contain it if it is not the case.
    #[allow(clippy::type_complexity)]
    pub fn decide_skeptical_with_certificate(
        &mut self,
        semantics: Semantics,
        label: &T,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError> {
        let af = self.af;
        match af.argument_set().get_argument(label) {
            Ok(arg) => self
                .solver_for(semantics)
                .is_skeptically_accepted_with_certificate(arg),
            Err(e) => {
                debug!("{}", e);
                let certificate = self
                    .solver_for(semantics)
                    .enumerate_extensions()
                    .first()
                    .map(|ext| af.subset_to_arguments(ext));
                Ok((certificate.is_none(), certificate))
            }
        }
    }

    /// Solves a problem given by its identifier (e.g. `DC-PR`).
    ///
    /// Verification problems expect a [`QueryArgument::Set`] while acceptance problems expect a [`QueryArgument::Argument`].
    /// An [`InvalidQueryArgument`](ReasoningError::InvalidQueryArgument) error is returned in case of mismatch.
    /// Unknown problem identifiers lead to an [`UnknownProblem`](ReasoningError::UnknownProblem) error.
    pub fn solve(
        &mut self,
        problem: &str,
        query_argument: &QueryArgument<T>,
    ) -> Result<bool, ReasoningError> {
        self.solve_with_certificate(problem, query_argument)
            .map(|(status, _)| status)
    }

    /// Solves a problem given by its identifier, and returns a certificate when one justifies the answer.
    ///
    /// Credulous acceptance is certified by an extension containing the argument,
    /// and skeptical rejection by an extension that does not contain it.
    /// Extension verification never comes with a certificate.
    #[allow(clippy::type_complexity)]
    pub fn solve_with_certificate(
        &mut self,
        problem: &str,
        query_argument: &QueryArgument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError> {
        let (query, semantics) = read_problem_string(problem)?;
        debug!(
            "solving {} under the {} semantics",
            query.as_ref(),
            semantics.as_ref()
        );
        match (query, query_argument) {
            (Query::VE, QueryArgument::Set(labels)) => self
                .verify_extension(semantics, labels)
                .map(|status| (status, None)),
            (Query::DC, QueryArgument::Argument(label)) => {
                self.decide_credulous_with_certificate(semantics, label)
            }
            (Query::DS, QueryArgument::Argument(label)) => {
                self.decide_skeptical_with_certificate(semantics, label)
            }
            (Query::VE, QueryArgument::Argument(_)) => Err(ReasoningError::InvalidQueryArgument(
                format!("{} expects a set of arguments", problem),
            )),
            (Query::DC | Query::DS, QueryArgument::Set(_)) => {
                Err(ReasoningError::InvalidQueryArgument(format!(
                    "{} expects a single argument",
                    problem
                )))
            }
        }
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

    fn set(labels: &[&str]) -> QueryArgument<String> {
        QueryArgument::Set(labels.iter().map(|l| l.to_string()).collect())
    }

    fn arg(label: &str) -> QueryArgument<String> {
        QueryArgument::Argument(label.to_string())
    }

    const EXAMPLE_AF: &str = "arg(a).\narg(b).\narg(c).\narg(d).\natt(a,b).\natt(b,c).\natt(b,d).\n";

    const CYCLE_AF: &str = "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,c).\natt(c,a).\n";

    #[test]
    fn test_example_af() {
        let af = read_af(EXAMPLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert!(resolver.solve("VE-PR", &set(&["a", "c", "d"])).unwrap());
        assert!(!resolver.solve("VE-PR", &set(&["a"])).unwrap());
        assert!(!resolver.solve("DC-PR", &arg("b")).unwrap());
        assert!(resolver.solve("DS-PR", &arg("a")).unwrap());
        assert!(resolver.solve("VE-ST", &set(&["d", "c", "a"])).unwrap());
        assert!(resolver.solve("DS-ST", &arg("c")).unwrap());
    }

    #[test]
    fn test_odd_cycle() {
        let af = read_af(CYCLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert!(resolver.solve("DS-ST", &arg("a")).unwrap());
        assert!(!resolver.solve("DC-ST", &arg("a")).unwrap());
        assert!(!resolver.solve("DC-PR", &arg("a")).unwrap());
        assert!(!resolver.solve("DS-PR", &arg("a")).unwrap());
        assert!(resolver.solve("VE-PR", &set(&[])).unwrap());
        assert!(!resolver.solve("VE-ST", &set(&[])).unwrap());
    }

    #[test]
    fn test_case_insensitive_problem() {
        let af = read_af(EXAMPLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert!(resolver.solve("dc-st", &arg("a")).unwrap());
    }

    #[test]
    fn test_unknown_problem() {
        let af = read_af(EXAMPLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert_eq!(
            ReasoningError::UnknownProblem("XX-PR".to_string()),
            resolver.solve("XX-PR", &arg("a")).unwrap_err()
        );
        assert_eq!(
            ReasoningError::UnknownProblem("DC-CO".to_string()),
            resolver.solve("DC-CO", &arg("a")).unwrap_err()
        );
    }

    #[test]
    fn test_unknown_labels() {
        let af = read_af(EXAMPLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert!(!resolver.solve("VE-PR", &set(&["a", "z"])).unwrap());
        assert!(!resolver.solve("DC-PR", &arg("z")).unwrap());
        assert!(!resolver.solve("DS-ST", &arg("z")).unwrap());
    }

    #[test]
    fn test_unknown_labels_without_extension() {
        let af = read_af(CYCLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert!(!resolver.solve("VE-PR", &set(&["a", "z"])).unwrap());
        assert!(!resolver.solve("DC-PR", &arg("z")).unwrap());
        assert!(!resolver.solve("DS-PR", &arg("z")).unwrap());
        assert!(!resolver.solve("DC-ST", &arg("z")).unwrap());
        assert!(resolver.solve("DS-ST", &arg("z")).unwrap());
    }

    #[test]
    fn test_certificates() {
        let af = read_af("arg(a).\narg(b).\natt(a,b).\natt(b,a).\n");
        let mut resolver = QueryResolver::new(&af);
        let labels = |c: Option<Vec<&Argument<String>>>| {
            c.map(|ext| ext.iter().map(|a| a.label().clone()).collect::<Vec<String>>())
        };
        let (status, certificate) = resolver.solve_with_certificate("DC-PR", &arg("a")).unwrap();
        assert!(status);
        assert_eq!(Some(vec!["a".to_string()]), labels(certificate));
        let (status, certificate) = resolver.solve_with_certificate("DS-ST", &arg("a")).unwrap();
        assert!(!status);
        assert_eq!(Some(vec!["b".to_string()]), labels(certificate));
        let (status, certificate) = resolver.solve_with_certificate("DS-PR", &arg("z")).unwrap();
        assert!(!status);
        assert_eq!(Some(vec!["a".to_string()]), labels(certificate));
        let (status, certificate) = resolver.solve_with_certificate("DC-PR", &arg("z")).unwrap();
        assert!(!status);
        assert!(certificate.is_none());
        let (status, certificate) = resolver.solve_with_certificate("VE-PR", &set(&["b"])).unwrap();
        assert!(status);
        assert!(certificate.is_none());
    }

    #[test]
    fn test_wrong_query_argument() {
        let af = read_af(EXAMPLE_AF);
        let mut resolver = QueryResolver::new(&af);
        assert!(matches!(
            resolver.solve("VE-PR", &arg("a")),
            Err(ReasoningError::InvalidQueryArgument(_))
        ));
        assert!(matches!(
            resolver.solve("DC-ST", &set(&["a"])),
            Err(ReasoningError::InvalidQueryArgument(_))
        ));
    }

    #[test]
    fn test_direct_calls() {
        let af = read_af("arg(a).\narg(b).\natt(a,b).\natt(b,a).\n");
        let mut resolver = QueryResolver::new(&af);
        let a = "a".to_string();
        assert!(resolver.decide_credulous(Semantics::PR, &a).unwrap());
        assert!(!resolver.decide_skeptical(Semantics::ST, &a).unwrap());
        assert!(resolver
            .verify_extension(Semantics::ST, &["b".to_string()])
            .unwrap());
        assert_eq!(2, resolver.solver_for(Semantics::PR).enumerate_extensions().len());
    }
}
