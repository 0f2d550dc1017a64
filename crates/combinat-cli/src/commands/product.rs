use crate::support::{or_exit, print_json_or_exit};
use combinat_kernel::product;
use serde_json::json;

pub fn run(start: i64, end: i64, json_output: bool) {
    let value = or_exit(product(start, end));

    if json_output {
        let payload = json!({
            "start": start,
            "end": end,
            "product": value.to_string(),
        });
        print_json_or_exit(&payload, "product");
        return;
    }

    println!("combinat product {start} {end}");
    println!("  Product: {value}");
}
