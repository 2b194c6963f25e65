/// A value that parsed successfully, possibly along with warnings.
///
/// Warnings never abort the reading process: the value is always available,
/// and the warnings are handed to a callback when the value is consumed.
pub(crate) enum WarningResult<T> {
    Ok(T),
    Warned(T, Vec<String>),
}

impl<T> WarningResult<T> {
    /// Returns the value, passing the warnings (if any) to the callback.
    pub(crate) fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<String>),
    {
        match self {
            WarningResult::Ok(t) => t,
            WarningResult::Warned(t, warnings) => {
                f(warnings);
                t
            }
        }
    }

    /// Pairs two values, concatenating their warnings.
    pub(crate) fn zip<U>(self, other: WarningResult<U>) -> WarningResult<(T, U)> {
        let (t, mut warnings) = self.into_parts();
        let (u, other_warnings) = other.into_parts();
        warnings.extend(other_warnings);
        if warnings.is_empty() {
            WarningResult::Ok((t, u))
        } else {
            WarningResult::Warned((t, u), warnings)
        }
    }

    fn into_parts(self) -> (T, Vec<String>) {
        match self {
            WarningResult::Ok(t) => (t, vec![]),
            WarningResult::Warned(t, warnings) => (t, warnings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T>(r: WarningResult<T>) -> (T, Vec<String>) {
        let mut collected = vec![];
        let t = r.consume_warnings(|w| collected = w);
        (t, collected)
    }

    #[test]
    fn test_consume_without_warnings() {
        let mut called = false;
        assert_eq!(1, WarningResult::Ok(1).consume_warnings(|_| called = true));
        assert!(!called);
    }

    #[test]
    fn test_zip_keeps_warning_order() {
        let left = WarningResult::Warned("a", vec!["w1".to_string()]);
        let right = WarningResult::Warned("b", vec!["w2".to_string()]);
        assert_eq!(
            (("a", "b"), vec!["w1".to_string(), "w2".to_string()]),
            collect(left.zip(right))
        );
    }

    #[test]
    fn test_zip_one_side_warned() {
        let left = WarningResult::Ok(1);
        let right = WarningResult::Warned(2, vec!["w".to_string()]);
        assert_eq!(((1, 2), vec!["w".to_string()]), collect(left.zip(right)));
        assert!(matches!(
            WarningResult::Ok(1).zip(WarningResult::Ok(2)),
            WarningResult::Ok((1, 2))
        ));
    }
}
