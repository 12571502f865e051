//! Basic usage example for strand-validator

use strand_validator::prelude::*;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    let id = field_validator!("id", true, uuid(), length(1, 36));
    let nickname = field_validator!("nickname", false, length(3, 20));

    for (field, input) in [
        (&id, "4b9e7348-bdda-4584-88c1-a1e9ac4c6595"),
        (&id, "12314"),
        (&id, ""),
        (&nickname, ""),
        (&nickname, "al"),
    ] {
        match field.validate(input) {
            Ok(()) => println!("✓ {} = {input:?}", field.name()),
            Err(e) if e.is(ErrorKind::Required) => println!("✗ missing: {e}"),
            Err(e) => println!("✗ [{}] {e}", e.kind().code()),
        }
    }
}
