use std::process::ExitCode;

use clap::Parser;
use obst::{render, solve, ObstError};
use tracing_subscriber::EnvFilter;

/// Compute an optimal binary search tree and print its tables.
///
/// Without arguments, runs the classic three-key sample with gap weights.
#[derive(Parser, Debug)]
#[command(name = "obst_demo", version, about)]
struct Args {
    /// Comma-separated access weights, one per key.
    #[arg(long, value_delimiter = ',', default_values_t = [0.15, 0.10, 0.05])]
    weights: Vec<f64>,

    /// Comma-separated gap weights (one more than the key count).
    #[arg(long, value_delimiter = ',', default_values_t = [0.05, 0.10, 0.05, 0.05])]
    gaps: Vec<f64>,

    /// Ignore gap weights and use the keys-only cost model.
    #[arg(long)]
    no_gaps: bool,

    /// Comma-separated key labels in ascending order; defaults to k1..kn.
    #[arg(long, value_delimiter = ',')]
    keys: Option<Vec<String>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "invalid input");
            eprintln!("obst_demo: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<(), ObstError> {
    let n = args.weights.len();
    let keys: Vec<String> = match &args.keys {
        Some(keys) => keys.clone(),
        // Zero-padded so lexicographic order matches numeric order.
        None => {
            let width = n.to_string().len();
            (1..=n).map(|i| format!("k{i:0width$}")).collect()
        }
    };
    let gaps = (!args.no_gaps).then_some(args.gaps.as_slice());

    let sol = solve(&keys, &args.weights, gaps)?;

    println!("Root table (root[i][j], 1-based keys)");
    print!("{}", render::root_table(&sol.tables));

    println!();
    match sol.tables.optimal_root() {
        Some(r) => println!("Overall root: root[1][{n}] = {} ({})", r + 1, keys[r]),
        None => println!("Overall root: none (no keys)"),
    }

    println!();
    println!("Expected cost table e[i][j] (1-based)");
    print!("{}", render::cost_table(&sol.tables));

    println!();
    println!("Optimal expected cost: {:.4}", sol.cost);
    println!();
    println!("Tree (right subtree above, left below):");
    print!("{}", render::tree_outline(&sol.tree));
    Ok(())
}
