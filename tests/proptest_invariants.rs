
use proptest::collection::vec;
use proptest::prelude::*;
use ruled::{ArrayRule, NumberRule, Registry, Rule, RuleSet, StringRule, Validator, Value};
use strategies::{
    arb_non_array, arb_non_string, arb_number_rule, arb_ruleset, arb_string_rule, arb_value,
};

fn run(value: &Value, rules: &RuleSet) -> Option<String> {
    let registry = Registry::new();
    Validator::new(&registry).validate(value, rules).unwrap()
}

// ---------------------------------------------------------------------------
// Invariant 1: Determinism
//
// The same rules + value always produce the same result.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn determinism(rules in arb_ruleset(), value in arb_value()) {
        let first = run(&value, &rules);
        for _ in 0..5 {
            prop_assert_eq!(&first, &run(&value, &rules), "determinism violated");
        }
    }
}

// ---------------------------------------------------------------------------
// Invariant 2: First failure wins
//
// A rule set reports exactly the failure of its first failing member, and a
// check list reports its first failing check.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn ruleset_matches_first_failing_member(rules in arb_ruleset(), value in arb_value()) {
        let expected = rules
            .iter()
            .find_map(|rule| run(&value, &RuleSet::new().rule(rule.clone())));
        prop_assert_eq!(run(&value, &rules), expected);
    }

    #[test]
    fn first_failing_check_is_reported(passes in vec(any::<bool>(), 0..12), x in any::<i32>()) {
        let mut rule = NumberRule::new("not number");
        for (i, &pass) in passes.iter().enumerate() {
            rule = rule.test(move |_| pass, format!("check {i}"));
        }
        let expected = passes.iter().position(|p| !p).map(|i| format!("check {i}"));
        prop_assert_eq!(run(&Value::from(x), &RuleSet::new().rule(rule)), expected);
    }
}

// ---------------------------------------------------------------------------
// Invariant 3: Narrowing gates children
//
// Children never run against a value their parent did not accept.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn array_children_only_see_arrays(value in arb_non_array()) {
        let rules = RuleSet::new().rule(
            ArrayRule::new("not array").test(|_| panic!("child saw a non-array"), "unreachable"),
        );
        let got = run(&value, &rules);
        prop_assert_eq!(got.as_deref(), Some("not array"));
    }

    #[test]
    fn soft_string_absorbs_non_strings(value in arb_non_string()) {
        let rules = RuleSet::new().rule(StringRule::soft().test(|_| false, "child ran"));
        prop_assert_eq!(run(&value, &rules), None);
    }
}

// ---------------------------------------------------------------------------
// Invariant 4: Bounds
//
// Inclusive bounds pass on equality, exclusive ones fail; lengths count chars;
// emptiness and blankness follow their literal definitions.
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn number_bounds(rule in arb_number_rule(), x in -60_i64..60) {
        let rules = RuleSet::new().rule(rule.clone());
        let result = run(&Value::Int(x), &rules);
        let xf = x as f64;
        let too_large = rule.next.iter().any(|c| match c {
            ruled::NumberCheck::Max(b) => xf > b.n || (b.reject_equal && xf == b.n),
            _ => false,
        });
        let too_small = rule.next.iter().any(|c| match c {
            ruled::NumberCheck::Min(b) => xf < b.n || (b.reject_equal && xf == b.n),
            _ => false,
        });
        let expected = if too_large {
            Some("too large".to_owned())
        } else if too_small {
            Some("too small".to_owned())
        } else {
            None
        };
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn string_lengths_and_emptiness(rule in arb_string_rule(), s in "[ a中]{0,10}") {
        let rules = RuleSet::new().rule(Rule::from(rule.clone()));
        let len = s.chars().count();
        let (max, min) = match (&rule.next[0], &rule.next[1]) {
            (ruled::StringCheck::MaxLength(hi), ruled::StringCheck::MinLength(lo)) => (hi.n, lo.n),
            _ => unreachable!("strategy builds max then min"),
        };
        let expected = if (rule.reject_empty && s.is_empty())
            || (rule.reject_blank && s.trim().is_empty())
        {
            Some("not string")
        } else if len > max {
            Some("too long")
        } else if len < min {
            Some("too short")
        } else {
            None
        };
        let got = run(&Value::from(s), &rules);
        prop_assert_eq!(got.as_deref(), expected);
    }
}
