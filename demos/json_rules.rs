use ruled::{Registry, RuleSet, Validator, Value};

const RULES: &str = r#"[
    {"type": "required", "failText": "email is required"},
    {"type": "string", "failText": "email must be text", "rejectBlank": true, "next": [
        {"type": "max-length", "n": 64, "failText": "email is too long"},
        {"type": "email", "failText": "not an email address"},
        {"type": "registered", "name": "domain", "options": ["example.com"], "failText": "domain not allowed"}
    ]}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rules = RuleSet::from_json(RULES)?;
    let registry = Registry::new().with("domain", |v, options| {
        let domain = v.as_str().and_then(|s| s.rsplit('@').next());
        let allowed = options.as_array().unwrap_or_default();
        domain.is_some_and(|d| allowed.iter().any(|a| a.as_str() == Some(d)))
    });

    let validator = Validator::new(&registry);
    let inputs: Vec<Value> = serde_json::from_str(r#"["ada@example.com", "ada@other.org", "ada", null, 7]"#)?;
    for input in &inputs {
        match validator.validate(input, &rules)? {
            None => println!("{input}: ok"),
            Some(message) => println!("{input}: {message}"),
        }
    }
    Ok(())
}
