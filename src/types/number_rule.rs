use super::rule::{FnRule, RegisteredRule};

/// Accepts numeric values (`Int` or `Float`).
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct NumberRule {
    pub fail_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Vec<NumberCheck>,
}

/// Checks allowed under a [`NumberRule`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum NumberCheck {
    Max(NumberBound),
    Min(NumberBound),
    Registered(RegisteredRule),
    #[cfg_attr(feature = "serde", serde(skip))]
    Fn(FnRule<f64>),
}

/// Numeric bound. Inclusive by default: a value equal to `n` passes unless
/// `reject_equal` is set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct NumberBound {
    pub n: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reject_equal: bool,
    pub fail_text: Option<String>,
}

impl NumberBound {
    #[must_use]
    pub fn new(n: f64, fail_text: impl Into<String>) -> Self {
        Self {
            n,
            reject_equal: false,
            fail_text: Some(fail_text.into()),
        }
    }

    /// Make the bound exclusive.
    #[must_use]
    pub fn reject_equal(mut self) -> Self {
        self.reject_equal = true;
        self
    }

    pub(crate) fn exceeded_by(&self, x: f64) -> bool {
        x > self.n || (self.reject_equal && x == self.n)
    }

    pub(crate) fn undershot_by(&self, x: f64) -> bool {
        x < self.n || (self.reject_equal && x == self.n)
    }
}

impl NumberRule {
    #[must_use]
    pub fn new(fail_text: impl Into<String>) -> Self {
        Self {
            fail_text: Some(fail_text.into()),
            next: Vec::new(),
        }
    }

    #[must_use]
    pub fn soft() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn check(mut self, check: NumberCheck) -> Self {
        self.next.push(check);
        self
    }

    #[must_use]
    pub fn max(self, n: f64, fail_text: impl Into<String>) -> Self {
        self.check(NumberCheck::Max(NumberBound::new(n, fail_text)))
    }

    #[must_use]
    pub fn min(self, n: f64, fail_text: impl Into<String>) -> Self {
        self.check(NumberCheck::Min(NumberBound::new(n, fail_text)))
    }

    /// Upper bound that also rejects a value equal to `n`.
    #[must_use]
    pub fn max_exclusive(self, n: f64, fail_text: impl Into<String>) -> Self {
        self.check(NumberCheck::Max(NumberBound::new(n, fail_text).reject_equal()))
    }

    /// Lower bound that also rejects a value equal to `n`.
    #[must_use]
    pub fn min_exclusive(self, n: f64, fail_text: impl Into<String>) -> Self {
        self.check(NumberCheck::Min(NumberBound::new(n, fail_text).reject_equal()))
    }

    #[must_use]
    pub fn registered(self, rule: RegisteredRule) -> Self {
        self.check(NumberCheck::Registered(rule))
    }

    #[must_use]
    pub fn test(
        self,
        test: impl Fn(&f64) -> bool + Send + Sync + 'static,
        fail_text: impl Into<String>,
    ) -> Self {
        self.check(NumberCheck::Fn(FnRule::new(test, fail_text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inclusive_bounds() {
        let max = NumberBound::new(10.0, "too large");
        assert!(!max.exceeded_by(10.0));
        assert!(max.exceeded_by(10.5));
        let min = NumberBound::new(5.0, "too small");
        assert!(!min.undershot_by(5.0));
        assert!(min.undershot_by(4.0));
    }

    #[test]
    fn exclusive_bounds() {
        let max = NumberBound::new(10.0, "too large").reject_equal();
        assert!(max.exceeded_by(10.0));
        assert!(!max.exceeded_by(9.0));
        let min = NumberBound::new(5.0, "too small").reject_equal();
        assert!(min.undershot_by(5.0));
        assert!(!min.undershot_by(6.0));
    }

    #[test]
    fn nan_never_crosses_a_bound() {
        let max = NumberBound::new(10.0, "too large").reject_equal();
        let min = NumberBound::new(5.0, "too small").reject_equal();
        assert!(!max.exceeded_by(f64::NAN));
        assert!(!min.undershot_by(f64::NAN));
    }
}
