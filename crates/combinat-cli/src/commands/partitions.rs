use crate::support::{
    or_exit, print_json_or_exit, print_sample_block, render_tuple, sample_with_truncation,
};
use combinat_kernel::SortedArrays;
use serde_json::json;

pub fn run(len: i64, sum: i64, limit: usize, json_output: bool) {
    let arrays = or_exit(SortedArrays::new(len, sum));
    let (sample, truncated) = sample_with_truncation(arrays, limit);

    if json_output {
        let payload = json!({
            "len": len,
            "sum": sum,
            "arrays": sample,
            "truncated": truncated,
        });
        print_json_or_exit(&payload, "partitions");
        return;
    }

    let rendered: Vec<String> = sample.iter().map(|array| render_tuple(array)).collect();
    println!("combinat partitions {len} {sum}");
    print_sample_block("Arrays", &rendered, truncated);
}
