use crate::support::{or_exit, print_json_or_exit};
use combinat_kernel::bell_number;
use serde_json::json;

pub fn run(n: i64, json_output: bool) {
    let value = or_exit(bell_number(n));

    if json_output {
        print_json_or_exit(&json!({ "n": n, "bell": value.to_string() }), "bell");
        return;
    }

    println!("combinat bell {n}");
    println!("  Set partitions: {value}");
}
