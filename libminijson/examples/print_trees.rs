//! Parse a fixed set of documents and print the resulting trees.
//!
//! Run with `cargo run --example print_trees`. Failures are logged to stderr.

use libminijson::parse;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let documents = [
        r#"{"a": 1, "b": 2}"#,
        r#"{"a": null, "b": [1, 2, 3]}"#,
        r#"{"a": {"b": 1}, "c": 2}"#,
        "[1, 2, 3]",
        "[1, 2, [3, 4]]",
        r#"[{"test": "foo"}, 2, 3]"#,
    ];

    let mut failed = 0;
    for doc in documents {
        match parse(doc) {
            Ok(value) => println!("{:?}", value),
            Err(e) => {
                failed += 1;
                eprintln!("Parse error for {}: {}", doc, e);
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
