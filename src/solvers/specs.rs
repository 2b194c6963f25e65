use crate::aa::{Argument, ArgumentSubset, LabelType, ReasoningError};

/// A trait for solvers able to compute all the extensions of a framework.
pub trait ExtensionEnumerator<T>
where
    T: LabelType,
{
    /// Computes the extensions.
    ///
    /// The order of the extensions is unspecified.
    /// The returned slice is empty iff the framework admits no extension under the semantics of the solver.
    fn enumerate_extensions(&mut self) -> &[ArgumentSubset];
}

/// A trait for solvers able to check whether a set of arguments is an extension.
pub trait ExtensionChecker<T>
where
    T: LabelType,
{
    /// Checks whether a subset of arguments is an extension.
    ///
    /// If the subset does not refer to the arguments of the framework, an [`InvalidSet`](ReasoningError::InvalidSet) error is returned.
    fn is_extension(&mut self, candidate: &ArgumentSubset) -> Result<bool, ReasoningError>;
}

/// A trait for solvers able to check the credulous acceptance of an argument.
pub trait CredulousAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the credulous acceptance of an argument.
    ///
    /// If the argument does not belong to the framework, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    fn is_credulously_accepted(&mut self, arg: &Argument<T>) -> Result<bool, ReasoningError>;

    /// Checks the credulous acceptance of an argument, and provide a certificate if it is the case.
    ///
    /// The certificate is set to `None` if the result of the test is `false`.
    /// Otherwise, the certificate is an extension containing the argument.
    #[allow(clippy::type_complexity)]
    fn is_credulously_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError>;
}

/// A trait for solvers able to check the skeptical acceptance of an argument.
///
/// An argument is skeptically accepted iff it belongs to all the extensions.
/// When there is no extension at all, every argument is skeptically accepted.
pub trait SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
    /// Checks the skeptical acceptance of an argument.
    ///
    /// If the argument does not belong to the framework, an [`UnknownArgument`](ReasoningError::UnknownArgument) error is returned.
    fn is_skeptically_accepted(&mut self, arg: &Argument<T>) -> Result<bool, ReasoningError>;

    /// Checks the skeptical acceptance of an argument, and provide a certificate if it is not the case.
    ///
    /// The certificate is set to `None` if the result of the test is `true`.
    /// Otherwise, the certificate is an extension that does not contain the argument.
    #[allow(clippy::type_complexity)]
    fn is_skeptically_accepted_with_certificate(
        &mut self,
        arg: &Argument<T>,
    ) -> Result<(bool, Option<Vec<&Argument<T>>>), ReasoningError>;
}

/// A trait gathering all the computations a semantics solver provides.
///
/// It is implemented by any type implementing the four underlying traits.
pub trait SemanticsSolver<T>:
    ExtensionEnumerator<T>
    + ExtensionChecker<T>
    + CredulousAcceptanceComputer<T>
    + SkepticalAcceptanceComputer<T>
where
    T: LabelType,
{
}

impl<T, S> SemanticsSolver<T> for S
where
    T: LabelType,
    S: ExtensionEnumerator<T>
        + ExtensionChecker<T>
        + CredulousAcceptanceComputer<T>
        + SkepticalAcceptanceComputer<T>,
{
}
