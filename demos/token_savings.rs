//! Packed output vs JSON size comparison.
//!
//! Run with: cargo run --example token_savings

use serde::Serialize;
use std::error::Error;
use tokpack::{to_string_with_options, EncodeOptions};

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: String,
    active: bool,
}

#[derive(Debug, Serialize)]
struct ApiResponse {
    users: Vec<User>,
    total: u32,
    page: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let response = ApiResponse {
        users: vec![
            User {
                id: 1,
                name: "Alice Johnson".to_string(),
                email: "alice@example.com".to_string(),
                active: true,
            },
            User {
                id: 2,
                name: "Bob Smith".to_string(),
                email: "bob@example.com".to_string(),
                active: true,
            },
            User {
                id: 3,
                name: "Charlie Brown".to_string(),
                email: "charlie@example.com".to_string(),
                active: false,
            },
        ],
        total: 3,
        page: 1,
    };

    let json = serde_json::to_string(&response)?;
    println!("JSON ({} chars):\n{}\n", json.len(), json);

    let packed = to_string_with_options(&response, EncodeOptions::for_llm())?;
    println!("Packed ({} chars):\n{}\n", packed.len(), packed);

    let savings = ((json.len() - packed.len()) as f64 / json.len() as f64) * 100.0;
    println!(
        "Savings: {:.1}% ({} -> {} chars)",
        savings,
        json.len(),
        packed.len()
    );

    Ok(())
}
