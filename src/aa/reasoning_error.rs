use thiserror::Error;

/// The errors raised by the reasoning components of the library.
///
/// All these errors are local validation failures: they are never recovered inside the library,
/// and are propagated to the caller which decides how to report them.
/// They convert into [`anyhow::Error`] values, which is what the readers and the application use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReasoningError {
    /// An argument is absent from the framework.
    #[error("no such argument: {0}")]
    UnknownArgument(String),
    /// A set of arguments is not a subset of the arguments of the framework.
    #[error("invalid set of arguments: {0}")]
    InvalidSet(String),
    /// A problem string does not denote a supported problem.
    #[error(r#"unknown problem "{0}""#)]
    UnknownProblem(String),
    /// The argument given to a query does not have the shape the query requires.
    #[error("invalid query argument: {0}")]
    InvalidQueryArgument(String),
}
