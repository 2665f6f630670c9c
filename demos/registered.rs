use ruled::{NumberRule, RegisteredRule, Registry, RuleSet, StringRule, Validator, Value};

fn main() {
    let registry = Registry::new()
        .with("even-number", |v, _| v.as_f64().is_some_and(|n| n % 2.0 == 0.0))
        .with("one-of", |v, options| {
            options.as_array().is_some_and(|allowed| allowed.contains(v))
        });

    println!("{registry:?}");

    let rules = RuleSet::new()
        .rule(
            NumberRule::soft()
                .min(0.0, "must not be negative")
                .registered(RegisteredRule::new("even-number", "must be even")),
        )
        .rule(StringRule::soft().registered(
            RegisteredRule::new("one-of", "unknown size").with_options(vec!["s", "m", "l"]),
        ));

    println!("{rules}");

    let validator = Validator::new(&registry);
    for input in [Value::Int(4), Value::Int(7), Value::Int(-2), Value::from("m"), Value::from("xl")] {
        match validator.validate(&input, &rules) {
            Ok(None) => println!("{input}: ok"),
            Ok(Some(message)) => println!("{input}: {message}"),
            Err(err) => eprintln!("bad rules: {err}"),
        }
    }
}
