//! The four named option presets applied to the same value.
//!
//! Run with: cargo run --example presets

use tokpack::{encode, pack, EncodeOptions};

fn main() {
    let order = pack!({
        "orderId": 7001,
        "paid": true,
        "coupon": null,
        "items": [
            {"sku": "W-1", "price": 9.5, "quantity": 2},
            {"sku": "G-2", "price": 4.25, "quantity": 1}
        ],
        "customer": {"name": "Dana Cruz", "email": "dana@example.com"}
    });

    println!(
        "forLLM:\n{}\n",
        encode(&order, &EncodeOptions::for_llm())
    );
    println!(
        "forLLMNested (flattening enabled):\n{}\n",
        encode(&order, &EncodeOptions::for_llm_nested())
    );
    println!(
        "forDebugging:\n{}\n",
        encode(&order, &EncodeOptions::for_debugging())
    );
    println!(
        "forCompatibility:\n{}",
        encode(&order, &EncodeOptions::for_compatibility())
    );
}
