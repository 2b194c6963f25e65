use super::{
    extensions, utils, CredulousAcceptanceComputer, ExtensionChecker, ExtensionEnumerator,
    SkepticalAcceptanceComputer,
};
use crate::aa::{AAFramework, Argument, ArgumentSubset, LabelType, ReasoningError};
use log::info;

/// A solver used to solve queries for the stable semantics.
///
/// Stable extensions are the conflict-free sets that attack every argument they do not contain.
/// A framework may have no stable extension, as in the case of odd-length cycles of attacks.
/// In this case, no argument is credulously accepted and every argument is skeptically accepted.
///
/// Checking whether a set is a stable extension does not require the enumeration of the extensions.
/// Other queries rely on the set of all the stable extensions, which is computed the first time it is needed.
pub struct StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    af: &'a AAFramework<T>,
    extensions: Option<Vec<ArgumentSubset>>,
}

impl<'a, T> StableSemanticsSolver<'a, T>
where
    T: LabelType,
{
    /// Builds a new solver dedicated to the stable semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::AAFramework;
    /// # use bruteaf::aa::LabelType;
    /// # use bruteaf::solvers::{ExtensionEnumerator, StableSemanticsSolver};
    /// fn has_stable_extension<T>(af: &AAFramework<T>) -> bool where T: LabelType {
    ///     let mut solver = StableSemanticsSolver::new(af);
    ///     !solver.enumerate_extensions().is_empty()
    /// }
    /// # assert!(has_stable_extension::<usize>(&AAFramework::default()));
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
                "computing the stable extensions of a framework with {} argument(s) and {} attack(s)",
                af.n_arguments(),
                af.n_attacks()
            );
            let stable = extensions::stable_extensions(af);
            info!("found {} stable extension(s)", stable.len());
            stable
        })
    }
}

impl<T> ExtensionEnumerator<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn enumerate_extensions(&mut self) -> &[ArgumentSubset] {
        self.extensions()
    }
}

impl<T> ExtensionChecker<T> for StableSemanticsSolver<'_, T>
where
    T: LabelType,
{
    fn is_extension(&mut self, candidate: &ArgumentSubset) -> Result<bool, ReasoningError> {
        extensions::is_stable(self.af, candidate)
    }
}

impl<T> CredulousAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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

impl<T> SkepticalAcceptanceComputer<T> for StableSemanticsSolver<'_, T>
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
