use super::rule::{FnRule, RegisteredRule};
use super::string_rule::LengthBound;
use super::value::Value;

/// Accepts ordered sequences, optionally rejecting empty ones.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct ArrayRule {
    pub fail_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reject_empty: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Vec<ArrayCheck>,
}

/// Checks allowed under an [`ArrayRule`]. Lengths count elements.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum ArrayCheck {
    MaxLength(LengthBound),
    MinLength(LengthBound),
    Registered(RegisteredRule),
    #[cfg_attr(feature = "serde", serde(skip))]
    Fn(FnRule<[Value]>),
}

impl ArrayRule {
    #[must_use]
    pub fn new(fail_text: impl Into<String>) -> Self {
        Self {
            fail_text: Some(fail_text.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn soft() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn reject_empty(mut self) -> Self {
        self.reject_empty = true;
        self
    }

    #[must_use]
    pub fn check(mut self, check: ArrayCheck) -> Self {
        self.next.push(check);
        self
    }

    #[must_use]
    pub fn max_length(self, n: usize, fail_text: impl Into<String>) -> Self {
        self.check(ArrayCheck::MaxLength(LengthBound::new(n, fail_text)))
    }

    #[must_use]
    pub fn min_length(self, n: usize, fail_text: impl Into<String>) -> Self {
        self.check(ArrayCheck::MinLength(LengthBound::new(n, fail_text)))
    }

    #[must_use]
    pub fn registered(self, rule: RegisteredRule) -> Self {
        self.check(ArrayCheck::Registered(rule))
    }

    #[must_use]
    pub fn test(
        self,
        test: impl Fn(&[Value]) -> bool + Send + Sync + 'static,
        fail_text: impl Into<String>,
    ) -> Self {
        self.check(ArrayCheck::Fn(FnRule::new(test, fail_text)))
    }
}
