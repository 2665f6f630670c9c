use thiserror::Error;

/// A malformed rule tree, as opposed to input that fails validation.
///
/// Validation failures are returned as `Ok(Some(fail_text))`; this error
/// means the rules themselves cannot be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidateError {
    #[error("no rule registered under name '{name}'")]
    UnregisteredRule { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_rule_message() {
        let err = ValidateError::UnregisteredRule {
            name: "even-number".into(),
        };
        assert_eq!(
            err.to_string(),
            "no rule registered under name 'even-number'"
        );
    }
}
