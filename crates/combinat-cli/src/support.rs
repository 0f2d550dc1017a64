use combinat_kernel::{CombinatoricsError, Counter};
use serde_json::Value;

pub const DEFAULT_SAMPLE_LIMIT: usize = 25;

pub fn parse_counter_or_exit(counter: &str) -> Counter {
    counter.parse().unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

pub fn or_exit<T>(result: Result<T, CombinatoricsError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("error: {e}");
        std::process::exit(1);
    })
}

/// Takes at most `limit` items, reporting whether anything was left over.
///
/// Pulls one item past `limit` and no further, so unbounded or very large
/// enumerations are never materialized.
pub fn sample_with_truncation<I>(items: I, limit: usize) -> (Vec<I::Item>, bool)
where
    I: IntoIterator,
{
    let mut iter = items.into_iter();
    let sample: Vec<I::Item> = iter.by_ref().take(limit).collect();
    let truncated = iter.next().is_some();
    (sample, truncated)
}

pub fn print_sample_block(header: &str, items: &[String], truncated: bool) {
    if items.is_empty() {
        println!("  {header}: none");
        return;
    }

    println!("  {header} (showing up to {}):", items.len());
    for item in items {
        println!("    - {item}");
    }
    if truncated {
        println!("    - ... and more");
    }
}

pub fn print_json_or_exit(payload: &Value, label: &str) {
    let rendered = serde_json::to_string_pretty(payload).unwrap_or_else(|err| {
        eprintln!("error: failed to render {label} json: {err}");
        std::process::exit(2);
    });
    println!("{rendered}");
}

pub fn render_tuple<T: std::fmt::Display>(values: &[T]) -> String {
    let parts: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("({})", parts.join(", "))
}
