use std::fmt;
use std::slice;

use super::rule::Rule;

/// Anything that can be validated against: one rule or an ordered list of
/// sibling rules.
pub trait AsRules {
    fn as_rules(&self) -> &[Rule];
}

impl AsRules for Rule {
    fn as_rules(&self) -> &[Rule] {
        slice::from_ref(self)
    }
}

impl AsRules for [Rule] {
    fn as_rules(&self) -> &[Rule] {
        self
    }
}

impl AsRules for Vec<Rule> {
    fn as_rules(&self) -> &[Rule] {
        self
    }
}

impl<const N: usize> AsRules for [Rule; N] {
    fn as_rules(&self) -> &[Rule] {
        self
    }
}

/// An ordered sequence of top-level rules, checked as siblings.
///
/// Equivalent to nesting the rules under a node whose own check always
/// passes: the first failing rule wins.
///
/// # Example
///
/// ```
/// use ruled::{Registry, RequiredRule, RuleSet, StringRule, Validator, Value};
///
/// let rules = RuleSet::new()
///     .rule(RequiredRule::new("required"))
///     .rule(StringRule::new("not string"));
///
/// let registry = Registry::new();
/// let validator = Validator::new(&registry);
/// assert_eq!(validator.validate(&Value::Null, &rules).unwrap().as_deref(), Some("required"));
/// assert_eq!(validator.validate(&Value::Int(1), &rules).unwrap().as_deref(), Some("not string"));
/// assert_eq!(validator.validate(&Value::from("1"), &rules).unwrap(), None);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule after the ones already in the set.
    #[must_use]
    pub fn rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    pub fn push(&mut self, rule: impl Into<Rule>) {
        self.rules.push(rule.into());
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Kind tags of the top-level rules, in evaluation order.
    #[must_use]
    pub fn kinds(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::kind).collect()
    }
}

#[cfg(feature = "serde")]
impl RuleSet {
    /// Parse a JSON rule document: either a single rule object or an array
    /// of rules.
    ///
    /// Inline `fn` rules have no JSON form and are rejected like any other
    /// unknown `type` tag.
    ///
    /// # Errors
    ///
    /// Returns [`RuledError::Json`](crate::RuledError::Json) on malformed
    /// JSON, unknown rule kinds, missing fields or invalid regex patterns.
    pub fn from_json(input: &str) -> Result<Self, crate::RuledError> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Document {
            Many(Vec<Rule>),
            One(Rule),
        }

        let rules = match serde_json::from_str::<Document>(input) {
            Ok(Document::Many(rules)) => rules,
            Ok(Document::One(rule)) => vec![rule],
            // Untagged errors are opaque; reparse for the precise message.
            Err(_) if input.trim_start().starts_with('[') => serde_json::from_str(input)?,
            Err(_) => vec![serde_json::from_str(input)?],
        };
        Ok(Self { rules })
    }

    /// Read a JSON rule document from disk.
    ///
    /// # Errors
    ///
    /// Returns [`RuledError`](crate::RuledError) on I/O or parse failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::RuledError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_json(&input)
    }
}

impl AsRules for RuleSet {
    fn as_rules(&self) -> &[Rule] {
        &self.rules
    }
}

impl<R: Into<Rule>> FromIterator<R> for RuleSet {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RuleSet([{}])", self.kinds().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BooleanRule, NumberRule, RequiredRule, StringRule};

    #[test]
    fn builder_keeps_insertion_order() {
        let set = RuleSet::new()
            .rule(RequiredRule::new("required"))
            .rule(StringRule::new("not string"))
            .rule(NumberRule::soft());
        assert_eq!(set.len(), 3);
        assert_eq!(set.kinds(), vec!["required", "string", "number"]);
    }

    #[test]
    fn collect_from_iterator() {
        let set: RuleSet = vec![BooleanRule::new("a"), BooleanRule::new("b")]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }

    #[test]
    fn single_rule_is_a_one_element_slice() {
        let rule = Rule::from(BooleanRule::new("x"));
        assert_eq!(rule.as_rules().len(), 1);
    }

    #[test]
    fn display() {
        let set = RuleSet::new()
            .rule(RequiredRule::new("required"))
            .rule(BooleanRule::new("not boolean"));
        assert_eq!(set.to_string(), "RuleSet([required, boolean])");
    }
}
