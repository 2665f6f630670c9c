//! Declarative validation of loosely-typed values against rule trees.
//!
//! A rule tree is built from typed nodes. Each node checks the value and, if
//! the check passes, hands the narrowed value to its children in order. The
//! first failing node's text is returned. A node with no fail text absorbs its
//! own failure ("soft-narrowing") but still shields its children from values
//! of the wrong kind.
//!
//! # Example
//!
//! ```
//! use regex::Regex;
//! use ruled::{RequiredRule, Rule, StringRule, Value};
//!
//! let rule = Rule::from(
//!     RequiredRule::new("required").then(
//!         StringRule::new("not string")
//!             .max_length(4, "too long")
//!             .min_length(2, "too short")
//!             .regex(Regex::new("^[a-zA-Z]+$").unwrap(), "not letters"),
//!     ),
//! );
//!
//! assert_eq!(ruled::validate(&Value::from("ww"), &rule).unwrap(), None);
//! assert_eq!(
//!     ruled::validate(&Value::from("1234567"), &rule).unwrap().as_deref(),
//!     Some("too long"),
//! );
//! ```
//!
//! Named rules are resolved through a [`Registry`]. Pass one explicitly with
//! [`Validator`], or use the process-wide registry behind [`register_rule`]
//! and [`validate`].

mod cjk;
mod email;
#[cfg(feature = "serde")]
mod error;
mod evaluate;
mod registry;
mod types;

#[cfg(feature = "serde")]
pub use error::RuledError;
pub use evaluate::Validator;
pub use registry::{Registry, RuleFn};
pub use types::{
    ArrayCheck, ArrayRule, AsRules, BooleanRule, EmailCheck, FnRule, LengthBound, Map,
    NonChineseCheck, NumberBound, NumberCheck, NumberRule, ObjectRule, RegexCheck,
    RegisteredRule, RequiredRule, Rule, RuleSet, StringCheck, StringRule, TestFn, TypedRule,
    ValidateError, Value,
};

/// Validate `value` against `rules` using the process-wide registry.
///
/// Returns `Ok(None)` when every rule passes and `Ok(Some(text))` with the
/// first failure otherwise. The call evaluates against a snapshot of the
/// registry taken on entry: rules registered meanwhile, including by a
/// predicate of this call, apply from the next call on.
///
/// # Errors
///
/// Returns [`ValidateError::UnregisteredRule`] when a `registered` node
/// names a rule that was never registered.
pub fn validate<R: AsRules + ?Sized>(
    value: &Value,
    rules: &R,
) -> Result<Option<String>, ValidateError> {
    let registry = registry::global();
    Validator::new(&registry).validate(value, rules)
}

/// Register `predicate` under `name` in the process-wide registry.
///
/// Replaces, with a warning, any rule already registered under `name`.
pub fn register_rule<F>(name: impl Into<String>, predicate: F)
where
    F: Fn(&Value, &Value) -> bool + Send + Sync + 'static,
{
    registry::register_global(name.into(), predicate);
}
