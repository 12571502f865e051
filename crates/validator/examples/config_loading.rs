//! Building validators from a JSON document supplied by the host.

use strand_validator::prelude::*;

const FIELDS: &str = r#"[
    { "name": "email", "required": true, "rules": [
        { "rule": "length", "min": 3, "max": 254 },
        { "rule": "regex", "pattern": "^[^@\\s]+@[^@\\s]+$" }
    ]},
    { "name": "created_at", "required": true, "rules": [
        { "rule": "date", "layout": "rfc3339" }
    ]}
]"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let configs: Vec<FieldConfig> = serde_json::from_str(FIELDS)?;
    let fields = configs
        .iter()
        .map(FieldConfig::build)
        .collect::<Result<Vec<_>, _>>()?;

    let submission = [("email", "ada@example.com"), ("created_at", "yesterday")];
    for (field, (_, value)) in fields.iter().zip(submission) {
        if let Err(e) = field.validate(value) {
            println!("{}", serde_json::to_string_pretty(&e)?);
        }
    }
    Ok(())
}
