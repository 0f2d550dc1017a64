use crate::support::{or_exit, parse_counter_or_exit, print_json_or_exit};
use combinat_kernel::Counter;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct CountReport {
    counter: Counter,
    n: i64,
    k: i64,
    value: String,
}

pub fn run(counter: String, n: i64, k: i64, json_output: bool) {
    let counter = parse_counter_or_exit(&counter);
    let value = or_exit(counter.count(n, k));

    let report = CountReport {
        counter,
        n,
        k,
        value: value.to_string(),
    };

    if json_output {
        let payload = serde_json::to_value(&report).unwrap_or_else(|err| {
            eprintln!("error: failed to render count json: {err}");
            std::process::exit(2);
        });
        print_json_or_exit(&payload, "count");
        return;
    }

    println!("combinat count {} {n} {k}", report.counter);
    println!("  Value: {}", report.value);
}
