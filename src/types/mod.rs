mod array_rule;
mod error;
mod number_rule;
mod rule;
mod ruleset;
mod string_rule;
mod value;

pub use array_rule::{ArrayCheck, ArrayRule};
pub use error::ValidateError;
pub use number_rule::{NumberBound, NumberCheck, NumberRule};
pub use rule::{
    BooleanRule, FnRule, ObjectRule, RegisteredRule, RequiredRule, Rule, TestFn, TypedRule,
};
pub use ruleset::{AsRules, RuleSet};
pub use string_rule::{
    EmailCheck, LengthBound, NonChineseCheck, RegexCheck, StringCheck, StringRule,
};
pub use value::{Map, Value};
