use regex::Regex;

use super::rule::{FnRule, RegisteredRule};

/// Accepts string values, optionally rejecting empty or blank strings.
///
/// `reject_empty` fails on `""` only. `reject_blank` also fails on strings
/// that are empty after trimming whitespace at both ends. Both are checked
/// against this node's `fail_text` before any child runs.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct StringRule {
    pub fail_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reject_empty: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reject_blank: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Vec<StringCheck>,
}

/// Checks allowed under a [`StringRule`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum StringCheck {
    /// Fails when the string has more than `n` characters.
    MaxLength(LengthBound),
    /// Fails when the string has fewer than `n` characters.
    MinLength(LengthBound),
    /// Fails when the pattern is not found anywhere in the string.
    Regex(RegexCheck),
    Email(EmailCheck),
    NonChinese(NonChineseCheck),
    Registered(RegisteredRule),
    #[cfg_attr(feature = "serde", serde(skip))]
    Fn(FnRule<str>),
}

/// Upper or lower bound on a length. Used by string and array rules.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct LengthBound {
    pub n: usize,
    pub fail_text: Option<String>,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct RegexCheck {
    #[cfg_attr(feature = "serde", serde(deserialize_with = "deserialize_regex"))]
    pub regex: Regex,
    pub fail_text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct EmailCheck {
    pub fail_text: Option<String>,
}

/// Fails on CJK ideographs, and on CJK or full-width punctuation unless
/// `allow_punctuations` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct NonChineseCheck {
    #[cfg_attr(feature = "serde", serde(default))]
    pub allow_punctuations: bool,
    pub fail_text: Option<String>,
}

#[cfg(feature = "serde")]
fn deserialize_regex<'de, D>(deserializer: D) -> Result<Regex, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    let pattern = String::deserialize(deserializer)?;
    Regex::new(&pattern).map_err(serde::de::Error::custom)
}

impl StringRule {
    #[must_use]
    pub fn new(fail_text: impl Into<String>) -> Self {
        Self {
            fail_text: Some(fail_text.into()),
            ..Self::default()
        }
    }

    /// A string check whose failures are absorbed instead of reported.
    /// Children still only run on string values.
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
    pub fn reject_blank(mut self) -> Self {
        self.reject_blank = true;
        self
    }

    #[must_use]
    pub fn check(mut self, check: StringCheck) -> Self {
        self.next.push(check);
        self
    }

    /// Fail when the string has more than `n` characters.
    ///
    /// Length counts Unicode scalar values, not UTF-16 code units, so `"😀"`
    /// has length 1.
    #[must_use]
    pub fn max_length(self, n: usize, fail_text: impl Into<String>) -> Self {
        self.check(StringCheck::MaxLength(LengthBound::new(n, fail_text)))
    }

    /// Fail when the string has fewer than `n` characters, counted as in
    /// [`max_length`](Self::max_length).
    #[must_use]
    pub fn min_length(self, n: usize, fail_text: impl Into<String>) -> Self {
        self.check(StringCheck::MinLength(LengthBound::new(n, fail_text)))
    }

    #[must_use]
    pub fn regex(self, regex: Regex, fail_text: impl Into<String>) -> Self {
        self.check(StringCheck::Regex(RegexCheck {
            regex,
            fail_text: Some(fail_text.into()),
        }))
    }

    #[must_use]
    pub fn email(self, fail_text: impl Into<String>) -> Self {
        self.check(StringCheck::Email(EmailCheck {
            fail_text: Some(fail_text.into()),
        }))
    }

    #[must_use]
    pub fn non_chinese(self, fail_text: impl Into<String>) -> Self {
        self.check(StringCheck::NonChinese(NonChineseCheck {
            allow_punctuations: false,
            fail_text: Some(fail_text.into()),
        }))
    }

    /// Like [`non_chinese`](Self::non_chinese), but CJK and full-width
    /// punctuation is accepted.
    #[must_use]
    pub fn non_chinese_allow_punctuations(self, fail_text: impl Into<String>) -> Self {
        self.check(StringCheck::NonChinese(NonChineseCheck {
            allow_punctuations: true,
            fail_text: Some(fail_text.into()),
        }))
    }

    #[must_use]
    pub fn registered(self, rule: RegisteredRule) -> Self {
        self.check(StringCheck::Registered(rule))
    }

    #[must_use]
    pub fn test(
        self,
        test: impl Fn(&str) -> bool + Send + Sync + 'static,
        fail_text: impl Into<String>,
    ) -> Self {
        self.check(StringCheck::Fn(FnRule::new(test, fail_text)))
    }
}

impl LengthBound {
    #[must_use]
    pub fn new(n: usize, fail_text: impl Into<String>) -> Self {
        Self {
            n,
            fail_text: Some(fail_text.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_check_order() {
        let rule = StringRule::new("not string")
            .max_length(4, "too long")
            .min_length(2, "too short")
            .email("not email");
        assert!(matches!(
            &rule.next[..],
            [
                StringCheck::MaxLength(LengthBound { n: 4, .. }),
                StringCheck::MinLength(LengthBound { n: 2, .. }),
                StringCheck::Email(_),
            ]
        ));
    }

    #[test]
    fn emptiness_flags_default_off() {
        let rule = StringRule::new("x");
        assert!(!rule.reject_empty);
        assert!(!rule.reject_blank);
        let rule = rule.reject_empty().reject_blank();
        assert!(rule.reject_empty);
        assert!(rule.reject_blank);
    }

    #[test]
    fn non_chinese_variants() {
        let rule = StringRule::soft()
            .non_chinese("strict")
            .non_chinese_allow_punctuations("lenient");
        assert!(matches!(
            &rule.next[..],
            [
                StringCheck::NonChinese(NonChineseCheck {
                    allow_punctuations: false,
                    ..
                }),
                StringCheck::NonChinese(NonChineseCheck {
                    allow_punctuations: true,
                    ..
                }),
            ]
        ));
        assert_eq!(rule.fail_text, None);
    }
}
