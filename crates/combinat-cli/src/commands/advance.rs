use crate::support::{print_json_or_exit, render_tuple};
use combinat_kernel::advance;
use serde_json::json;

pub fn run(values: Vec<i64>, sum: Option<i64>, json_output: bool) {
    let sum = match sum {
        Some(sum) => sum,
        None => values
            .iter()
            .try_fold(0i64, |acc, &value| acc.checked_add(value))
            .unwrap_or_else(|| {
                eprintln!("error: sum of values overflows; pass --sum explicitly");
                std::process::exit(1);
            }),
    };

    let mut next = values.clone();
    let advanced = advance(&mut next, sum);

    if json_output {
        let successor = advanced.then_some(&next);
        let payload = json!({
            "input": values,
            "sum": sum,
            "advanced": advanced,
            "next": successor,
        });
        print_json_or_exit(&payload, "advance");
        return;
    }

    println!("combinat advance {} --sum {sum}", render_tuple(&values));
    if advanced {
        println!("  Next: {}", render_tuple(&next));
    } else {
        println!("  Next: none (already the last array)");
    }
}
