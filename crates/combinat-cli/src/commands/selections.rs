use crate::support::{
    or_exit, print_json_or_exit, print_sample_block, render_tuple, sample_with_truncation,
};
use combinat_kernel::enumerate_selections;
use serde_json::json;

pub fn run(n: i64, k: i64, limit: usize, json_output: bool) {
    let selections = or_exit(enumerate_selections(n, k));
    let total = selections.total();
    let (sample, truncated) = sample_with_truncation(selections.iter(), limit);

    if json_output {
        let payload = json!({
            "n": n,
            "k": k,
            "total": total.to_string(),
            "tuples": sample,
            "truncated": truncated,
        });
        print_json_or_exit(&payload, "selections");
        return;
    }

    let rendered: Vec<String> = sample.iter().map(|tuple| render_tuple(tuple)).collect();
    println!("combinat selections {n} {k}");
    println!("  Total: {total}");
    print_sample_block("Tuples", &rendered, truncated);
}
