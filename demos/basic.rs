use regex::Regex;
use ruled::{RequiredRule, Rule, StringRule, Value};

fn main() {
    // Define rules
    let username = Rule::from(
        RequiredRule::new("username is required").then(
            StringRule::new("username must be text")
                .reject_blank()
                .max_length(16, "username is too long")
                .min_length(3, "username is too short")
                .regex(
                    Regex::new("^[a-z0-9_]+$").expect("valid pattern"),
                    "use lowercase letters, digits and underscores",
                ),
        ),
    );

    // Validate some inputs
    for input in [
        Value::from("ada_lovelace"),
        Value::from("al"),
        Value::from("   "),
        Value::Int(42),
        Value::Null,
    ] {
        match ruled::validate(&input, &username) {
            Ok(None) => println!("{input}: ok"),
            Ok(Some(message)) => println!("{input}: {message}"),
            Err(err) => eprintln!("bad rules: {err}"),
        }
    }
}
