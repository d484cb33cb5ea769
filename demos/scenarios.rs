//! Example: worked OBST scenarios.
//!
//! Run with:
//! `cargo run --example scenarios`

use obst::{render, solve};

fn main() {
    // Frequencies only: the heavy last key becomes the root.
    let keys = [10, 20, 30];
    let sol = solve(&keys, &[1u64, 1, 10], None).expect("valid input");
    println!("keys {keys:?}, freq [1, 1, 10] -> cost {}", sol.cost);
    print!("{}", render::tree_outline(&sol.tree));

    println!();
    let keys = ['A', 'B', 'C', 'D'];
    let sol = solve(&keys, &[5u64, 10, 3, 2], None).expect("valid input");
    println!("keys {keys:?}, freq [5, 10, 3, 2] -> cost {}", sol.cost);
    print!("{}", render::tree_outline(&sol.tree));

    // Probabilities with unsuccessful searches (five-key textbook instance).
    println!();
    let p = [0.15, 0.10, 0.05, 0.10, 0.20];
    let q = [0.05, 0.10, 0.05, 0.05, 0.05, 0.10];
    let keys = ["k1", "k2", "k3", "k4", "k5"];
    let sol = solve(&keys, &p, Some(&q[..])).expect("valid input");
    println!("expected cost with gaps: {:.2}", sol.cost);
    print!("{}", render::root_table(&sol.tables));
    print!("{}", render::tree_outline(&sol.tree));
}
