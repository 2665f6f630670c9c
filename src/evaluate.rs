use crate::{
    ArrayCheck, ArrayRule, AsRules, BooleanRule, FnRule, LengthBound, Map, NumberCheck,
    NumberRule, ObjectRule, RegisteredRule, Registry, RequiredRule, Rule, StringCheck,
    StringRule, TypedRule, ValidateError, Value, cjk, email,
};

/// `Ok(None)` passes, `Ok(Some(text))` is a validation failure.
type Outcome = Result<Option<String>, ValidateError>;

/// Walks rule trees against values, resolving `registered` nodes through a
/// [`Registry`].
///
/// # Example
///
/// ```
/// use ruled::{RegisteredRule, Registry, Rule, NumberRule, Validator, Value};
///
/// let registry = Registry::new().with("even-number", |v, _| {
///     v.as_f64().is_some_and(|n| n % 2.0 == 0.0)
/// });
/// let rule = Rule::from(
///     NumberRule::new("not a number").registered(RegisteredRule::new("even-number", "not even")),
/// );
///
/// let validator = Validator::new(&registry);
/// assert_eq!(validator.validate(&Value::Int(7), &rule).unwrap().as_deref(), Some("not even"));
/// assert_eq!(validator.validate(&Value::Int(8), &rule).unwrap(), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator<'r> {
    registry: &'r Registry,
}

impl<'r> Validator<'r> {
    #[must_use]
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Check `value` against `rules` in order and return the first failure
    /// text, or `None` if every rule passes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::UnregisteredRule`] when a `registered` node
    /// names a rule missing from the registry.
    pub fn validate<R: AsRules + ?Sized>(&self, value: &Value, rules: &R) -> Outcome {
        first_failure(rules.as_rules(), |rule| self.rule(value, rule))
    }

    fn rule(&self, value: &Value, rule: &Rule) -> Outcome {
        match rule {
            Rule::Required(r) => self.required(value, r),
            Rule::String(r) => self.string(value, r),
            Rule::Number(r) => self.number(value, r),
            Rule::Boolean(r) => Ok(boolean(value, r)),
            Rule::Array(r) => self.array(value, r),
            Rule::Object(r) => Ok(object(value, r)),
            Rule::Fn(r) => Ok(test(value, r)),
            Rule::Registered(r) => self.registered(value, r),
        }
    }

    fn typed(&self, value: &Value, rule: &TypedRule) -> Outcome {
        match rule {
            TypedRule::String(r) => self.string(value, r),
            TypedRule::Number(r) => self.number(value, r),
            TypedRule::Boolean(r) => Ok(boolean(value, r)),
            TypedRule::Array(r) => self.array(value, r),
            TypedRule::Object(r) => Ok(object(value, r)),
            TypedRule::Fn(r) => Ok(test(value, r)),
            TypedRule::Registered(r) => self.registered(value, r),
        }
    }

    fn required(&self, value: &Value, rule: &RequiredRule) -> Outcome {
        if value.is_null() {
            return Ok(reject("required", &rule.fail_text));
        }
        first_failure(&rule.next, |child| self.typed(value, child))
    }

    fn string(&self, value: &Value, rule: &StringRule) -> Outcome {
        let Some(s) = value.as_str() else {
            return Ok(reject("string", &rule.fail_text));
        };
        if (rule.reject_empty && s.is_empty()) || (rule.reject_blank && s.trim().is_empty()) {
            return Ok(reject("string", &rule.fail_text));
        }
        first_failure(&rule.next, |check| match check {
            StringCheck::MaxLength(b) => Ok(longer_than("max-length", s.chars().count(), b)),
            StringCheck::MinLength(b) => Ok(shorter_than("min-length", s.chars().count(), b)),
            StringCheck::Regex(r) => Ok(check_if("regex", r.regex.is_match(s), &r.fail_text)),
            StringCheck::Email(e) => Ok(check_if("email", email::is_email(s), &e.fail_text)),
            StringCheck::NonChinese(c) => Ok(check_if(
                "non-chinese",
                !cjk::contains_chinese(s, c.allow_punctuations),
                &c.fail_text,
            )),
            StringCheck::Registered(r) => self.registered(value, r),
            StringCheck::Fn(f) => Ok(test(s, f)),
        })
    }

    fn number(&self, value: &Value, rule: &NumberRule) -> Outcome {
        let Some(x) = value.as_f64() else {
            return Ok(reject("number", &rule.fail_text));
        };
        first_failure(&rule.next, |check| match check {
            NumberCheck::Max(b) => Ok(check_if("max", !b.exceeded_by(x), &b.fail_text)),
            NumberCheck::Min(b) => Ok(check_if("min", !b.undershot_by(x), &b.fail_text)),
            NumberCheck::Registered(r) => self.registered(value, r),
            NumberCheck::Fn(f) => Ok(test(&x, f)),
        })
    }

    fn array(&self, value: &Value, rule: &ArrayRule) -> Outcome {
        let Some(items) = value.as_array() else {
            return Ok(reject("array", &rule.fail_text));
        };
        if rule.reject_empty && items.is_empty() {
            return Ok(reject("array", &rule.fail_text));
        }
        first_failure(&rule.next, |check| match check {
            ArrayCheck::MaxLength(b) => Ok(longer_than("max-length", items.len(), b)),
            ArrayCheck::MinLength(b) => Ok(shorter_than("min-length", items.len(), b)),
            ArrayCheck::Registered(r) => self.registered(value, r),
            ArrayCheck::Fn(f) => Ok(test(items, f)),
        })
    }

    fn registered(&self, value: &Value, rule: &RegisteredRule) -> Outcome {
        let predicate =
            self.registry
                .get(&rule.name)
                .ok_or_else(|| ValidateError::UnregisteredRule {
                    name: rule.name.clone(),
                })?;
        Ok(check_if(
            "registered",
            predicate(value, &rule.options),
            &rule.fail_text,
        ))
    }
}

fn boolean(value: &Value, rule: &BooleanRule) -> Option<String> {
    check_if("boolean", value.as_bool().is_some(), &rule.fail_text)
}

fn object(value: &Value, rule: &ObjectRule) -> Option<String> {
    let Some(map) = value.as_object() else {
        return reject("object", &rule.fail_text);
    };
    rule.next.iter().find_map(|f| test::<Map>(map, f))
}

fn test<T: ?Sized>(value: &T, rule: &FnRule<T>) -> Option<String> {
    check_if("fn", (rule.test)(value), &rule.fail_text)
}

fn longer_than(kind: &'static str, len: usize, bound: &LengthBound) -> Option<String> {
    check_if(kind, len <= bound.n, &bound.fail_text)
}

fn shorter_than(kind: &'static str, len: usize, bound: &LengthBound) -> Option<String> {
    check_if(kind, len >= bound.n, &bound.fail_text)
}

fn check_if(kind: &'static str, passed: bool, fail_text: &Option<String>) -> Option<String> {
    if passed {
        None
    } else {
        reject(kind, fail_text)
    }
}

/// A failed check. Without fail text the failure is absorbed.
fn reject(kind: &'static str, fail_text: &Option<String>) -> Option<String> {
    tracing::trace!(rule = kind, absorbed = fail_text.is_none(), "check rejected value");
    fail_text.clone()
}

/// Runs `f` over `items` in order, stopping at the first failure or error.
fn first_failure<T>(items: &[T], mut f: impl FnMut(&T) -> Outcome) -> Outcome {
    for item in items {
        if let Some(text) = f(item)? {
            return Ok(Some(text));
        }
    }
    Ok(None)
}
