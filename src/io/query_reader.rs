use crate::{
    aa::{Query, ReasoningError},
    solvers::QueryArgument,
};

const LABEL_SEPARATOR: char = ',';

/// Reads the candidate set of an extension verification problem.
///
/// The labels are separated by commas; each of them is trimmed and converted to lowercase, and empty labels are dropped.
/// An [`InvalidQueryArgument`](ReasoningError::InvalidQueryArgument) error is returned if no label remains.
///
/// # Example
///
/// ```
/// # use bruteaf::io::read_candidate_set;
/// assert_eq!(vec!["a", "c"], read_candidate_set(" A, ,c,").unwrap());
/// assert!(read_candidate_set(" , ").is_err());
/// ```
pub fn read_candidate_set(raw: &str) -> Result<Vec<String>, ReasoningError> {
    let labels = raw
        .split(LABEL_SEPARATOR)
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect::<Vec<String>>();
    if labels.is_empty() {
        return Err(ReasoningError::InvalidQueryArgument(format!(
            r#"no argument in the candidate set "{}""#,
            raw
        )));
    }
    Ok(labels)
}

/// Reads the argument of an acceptance problem.
///
/// The label is trimmed and converted to lowercase.
/// An [`InvalidQueryArgument`](ReasoningError::InvalidQueryArgument) error is returned if it is empty or if it contains a comma.
pub fn read_single_argument(raw: &str) -> Result<String, ReasoningError> {
    let label = raw.trim().to_lowercase();
    if label.is_empty() {
        return Err(ReasoningError::InvalidQueryArgument(
            "an argument is expected".to_string(),
        ));
    }
    if label.contains(LABEL_SEPARATOR) {
        return Err(ReasoningError::InvalidQueryArgument(format!(
            r#"a single argument is expected, got "{}""#,
            raw
        )));
    }
    Ok(label)
}

/// Reads the argument of a query, which shape depends on the query.
///
/// Extension verification expects a candidate set (see [`read_candidate_set`]),
/// while acceptance problems expect a single argument (see [`read_single_argument`]).
///
/// # Example
///
/// ```
/// # use bruteaf::aa::Query;
/// # use bruteaf::io::read_query_argument;
/// # use bruteaf::solvers::QueryArgument;
/// assert_eq!(
///     QueryArgument::Set(vec!["a".to_string(), "b".to_string()]),
///     read_query_argument(Query::VE, "a,b").unwrap()
/// );
/// assert_eq!(
///     QueryArgument::Argument("a".to_string()),
///     read_query_argument(Query::DS, "A").unwrap()
/// );
/// ```
pub fn read_query_argument(query: Query, raw: &str) -> Result<QueryArgument<String>, ReasoningError> {
    if query.expects_set() {
        read_candidate_set(raw).map(QueryArgument::Set)
    } else {
        read_single_argument(raw).map(QueryArgument::Argument)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_candidate_set() {
        assert_eq!(vec!["a", "b", "c"], read_candidate_set("a,b,c").unwrap());
        assert_eq!(vec!["a", "b"], read_candidate_set(" A , b ").unwrap());
        assert_eq!(vec!["a"], read_candidate_set(",,a,").unwrap());
    }

    #[test]
    fn test_read_empty_candidate_set() {
        for raw in ["", " ", ",", " , ,"] {
            assert!(matches!(
                read_candidate_set(raw),
                Err(ReasoningError::InvalidQueryArgument(_))
            ));
        }
    }

    #[test]
    fn test_read_single_argument() {
        assert_eq!("a", read_single_argument("a").unwrap());
        assert_eq!("arg1", read_single_argument("  Arg1 ").unwrap());
    }

    #[test]
    fn test_read_wrong_single_argument() {
        for raw in ["", "  ", "a,b", "a,"] {
            assert!(matches!(
                read_single_argument(raw),
                Err(ReasoningError::InvalidQueryArgument(_))
            ));
        }
    }

    #[test]
    fn test_read_query_argument() {
        assert_eq!(
            QueryArgument::Set(vec!["a".to_string()]),
            read_query_argument(Query::VE, "a").unwrap()
        );
        assert_eq!(
            QueryArgument::Argument("a".to_string()),
            read_query_argument(Query::DC, " a").unwrap()
        );
        assert!(matches!(
            read_query_argument(Query::DC, "a,b"),
            Err(ReasoningError::InvalidQueryArgument(_))
        ));
        assert!(matches!(
            read_query_argument(Query::VE, ""),
            Err(ReasoningError::InvalidQueryArgument(_))
        ));
    }
}
