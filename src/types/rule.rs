use std::fmt;
use std::sync::Arc;

use super::array_rule::ArrayRule;
use super::number_rule::NumberRule;
use super::string_rule::StringRule;
use super::value::{Map, Value};

/// A top-level validation rule node.
///
/// The variant decides both the check applied to the value and which child
/// kinds are legal in its `next` list. Nesting a leaf under the wrong parent
/// (a `min-length` under a `number`, say) does not type-check.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum Rule {
    Required(RequiredRule),
    String(StringRule),
    Number(NumberRule),
    Boolean(BooleanRule),
    Array(ArrayRule),
    Object(ObjectRule),
    #[cfg_attr(feature = "serde", serde(skip))]
    Fn(FnRule<Value>),
    Registered(RegisteredRule),
}

/// Rule kinds allowed under a [`RequiredRule`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "kebab-case"))]
pub enum TypedRule {
    String(StringRule),
    Number(NumberRule),
    Boolean(BooleanRule),
    Array(ArrayRule),
    Object(ObjectRule),
    #[cfg_attr(feature = "serde", serde(skip))]
    Fn(FnRule<Value>),
    Registered(RegisteredRule),
}

impl Rule {
    /// The kind tag of this node (`"required"`, `"string"`, ...).
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::Required(_) => "required",
            Rule::String(_) => "string",
            Rule::Number(_) => "number",
            Rule::Boolean(_) => "boolean",
            Rule::Array(_) => "array",
            Rule::Object(_) => "object",
            Rule::Fn(_) => "fn",
            Rule::Registered(_) => "registered",
        }
    }
}

/// Rejects absent (`Null`) values, then applies `next` to the same value.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct RequiredRule {
    pub fail_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub next: Vec<TypedRule>,
}

impl RequiredRule {
    #[must_use]
    pub fn new(fail_text: impl Into<String>) -> Self {
        Self {
            fail_text: Some(fail_text.into()),
            next: Vec::new(),
        }
    }

    /// Append a child rule, evaluated after every child added before it.
    #[must_use]
    pub fn then(mut self, rule: impl Into<TypedRule>) -> Self {
        self.next.push(rule.into());
        self
    }
}

/// Accepts only boolean values. Has no children.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct BooleanRule {
    pub fail_text: Option<String>,
}

impl BooleanRule {
    #[must_use]
    pub fn new(fail_text: impl Into<String>) -> Self {
        Self {
            fail_text: Some(fail_text.into()),
        }
    }

    /// A boolean check whose type mismatch is absorbed instead of reported.
    #[must_use]
    pub fn soft() -> Self {
        Self::default()
    }
}

/// Accepts keyed structures. Arrays and `Null` are rejected.
///
/// Children are inline predicates over the whole structure.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct ObjectRule {
    pub fail_text: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub next: Vec<FnRule<Map>>,
}

impl ObjectRule {
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
    pub fn test(
        mut self,
        test: impl Fn(&Map) -> bool + Send + Sync + 'static,
        fail_text: impl Into<String>,
    ) -> Self {
        self.next.push(FnRule::new(test, fail_text));
        self
    }
}

/// Shared predicate closure held by a [`FnRule`].
pub type TestFn<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// Inline predicate rule. `T` is the narrowed view the predicate receives:
/// `str` under a string rule, `f64` under a number rule, `[Value]` under an
/// array rule, [`Map`] under an object rule and [`Value`] elsewhere.
pub struct FnRule<T: ?Sized> {
    pub test: TestFn<T>,
    pub fail_text: Option<String>,
}

impl<T: ?Sized> FnRule<T> {
    #[must_use]
    pub fn new(
        test: impl Fn(&T) -> bool + Send + Sync + 'static,
        fail_text: impl Into<String>,
    ) -> Self {
        Self {
            test: Arc::new(test),
            fail_text: Some(fail_text.into()),
        }
    }
}

impl<T: ?Sized> Clone for FnRule<T> {
    fn clone(&self) -> Self {
        Self {
            test: Arc::clone(&self.test),
            fail_text: self.fail_text.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for FnRule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnRule")
            .field("fail_text", &self.fail_text)
            .finish_non_exhaustive()
    }
}

/// Reference to a predicate stored in a [`Registry`](crate::Registry) under `name`.
///
/// The predicate receives the value at this position in the tree together
/// with `options`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct RegisteredRule {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub options: Value,
    pub fail_text: Option<String>,
}

impl RegisteredRule {
    #[must_use]
    pub fn new(name: impl Into<String>, fail_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            options: Value::Null,
            fail_text: Some(fail_text.into()),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: impl Into<Value>) -> Self {
        self.options = options.into();
        self
    }
}

macro_rules! into_rule {
    ($target:ident: $($variant:ident($ty:ty)),+ $(,)?) => {
        $(
            impl From<$ty> for $target {
                fn from(rule: $ty) -> Self {
                    $target::$variant(rule)
                }
            }
        )+
    };
}

into_rule!(Rule:
    Required(RequiredRule),
    String(StringRule),
    Number(NumberRule),
    Boolean(BooleanRule),
    Array(ArrayRule),
    Object(ObjectRule),
    Fn(FnRule<Value>),
    Registered(RegisteredRule),
);

into_rule!(TypedRule:
    String(StringRule),
    Number(NumberRule),
    Boolean(BooleanRule),
    Array(ArrayRule),
    Object(ObjectRule),
    Fn(FnRule<Value>),
    Registered(RegisteredRule),
);
