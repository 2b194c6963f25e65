use super::ReasoningError;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
}

impl TryFrom<&str> for Semantics {
    type Error = ReasoningError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "pr" => Ok(Semantics::PR),
            "st" => Ok(Semantics::ST),
            _ => Err(ReasoningError::UnknownProblem(format!(
                r#"undefined semantics "{}""#,
                value
            ))),
        }
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Verify a set of arguments is an extension
    VE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Iterates over the problem strings handled by the library.
    ///
    /// Problem strings follow the `XX-YY` pattern, where `XX` is the query and `YY` the semantics.
    ///
    /// # Example
    ///
    /// ```
    /// # use bruteaf::aa::Query;
    /// let problems = Query::iter_problem_strings().collect::<Vec<String>>();
    /// assert_eq!(6, problems.len());
    /// assert!(problems.contains(&"DS-ST".to_string()));
    /// ```
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter().flat_map(|q| {
            Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
        })
    }

    /// Returns `true` iff the query is about a set of arguments rather than a single argument.
    pub fn expects_set(&self) -> bool {
        matches!(self, Query::VE)
    }
}

impl TryFrom<&str> for Query {
    type Error = ReasoningError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase().as_str() {
            "ve" => Ok(Query::VE),
            "dc" => Ok(Query::DC),
            "ds" => Ok(Query::DS),
            _ => Err(ReasoningError::UnknownProblem(format!(
                r#"undefined query "{}""#,
                value
            ))),
        }
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
/// Both parts are case insensitive.
///
/// In case there is no hyphen, or one of the parts is not recognized, an [`UnknownProblem`](ReasoningError::UnknownProblem) error is returned.
///
/// # Example
///
/// ```
/// # use bruteaf::aa::{read_problem_string, Query, Semantics};
/// assert_eq!((Query::DC, Semantics::PR), read_problem_string("DC-PR").unwrap());
/// assert!(read_problem_string("SE-PR").is_err());
/// ```
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics), ReasoningError> {
    let unknown = |_| ReasoningError::UnknownProblem(problem.to_string());
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n]).map_err(unknown)?;
            let semantics = Semantics::try_from(&problem[1 + n..]).map_err(unknown)?;
            Ok((query, semantics))
        }
        None => Err(ReasoningError::UnknownProblem(problem.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::VE, Semantics::ST),
            read_problem_string("VE-ST").unwrap()
        );
        assert_eq!(
            (Query::DS, Semantics::PR),
            read_problem_string("ds-pr").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert_eq!(
            ReasoningError::UnknownProblem("foo-ST".to_string()),
            read_problem_string("foo-ST").unwrap_err()
        );
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        assert!(read_problem_string("DC-CO").is_err());
        assert!(read_problem_string("DC-PR-ST").is_err());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert_eq!(
            ReasoningError::UnknownProblem("DCPR".to_string()),
            read_problem_string("DCPR").unwrap_err()
        );
    }

    #[test]
    fn test_iter_problem_strings() {
        let mut problems = Query::iter_problem_strings().collect::<Vec<String>>();
        problems.sort_unstable();
        assert_eq!(
            vec!["DC-PR", "DC-ST", "DS-PR", "DS-ST", "VE-PR", "VE-ST"],
            problems
        );
        problems
            .iter()
            .for_each(|p| assert!(read_problem_string(p).is_ok()));
    }

    #[test]
    fn test_expects_set() {
        assert!(Query::VE.expects_set());
        assert!(!Query::DC.expects_set());
        assert!(!Query::DS.expects_set());
    }
}
