//! Basic packed encoding of structs and dynamic values.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use std::error::Error;
use tokpack::{encode, pack, to_string, EncodeOptions};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: "alice@example.com".to_string(),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: "bob@example.com".to_string(),
        },
    ];

    // A uniform struct array renders as a table: one header, one row each
    let packed = to_string(&users)?;
    println!("Packed output:\n{}\n", packed);

    // Dynamic values work the same way through the pack! macro
    let playlist = pack!({
        "title": "Evening Mix",
        "tags": ["jazz", "chill", "lofi"],
        "owner": {"name": "Ann", "premium": true}
    });
    println!("Playlist: {}", encode(&playlist, &EncodeOptions::new()));

    Ok(())
}
