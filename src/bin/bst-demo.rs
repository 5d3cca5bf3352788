//! Builds a tree from random keys and prints what every query and traversal says about it,
//! before and after skewing it with a few large inserts and rebalancing it again.

use bst_rebuild::{Order, Tree, TreeResult};
use clap::{ArgAction, Parser};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

/// Exercise a rebuildable binary search tree on random keys
#[derive(Parser, Debug)]
#[command(name = "bst-demo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// How many random keys to draw (duplicates included)
    #[arg(short, long, default_value_t = 10)]
    size: usize,

    /// Keys are drawn from `0..max`
    #[arg(short, long, default_value_t = 100)]
    max: i64,

    /// Seed for reproducible keys
    #[arg(long)]
    seed: Option<u64>,

    /// Keys inserted after the first round to skew the tree
    #[arg(short, long, value_delimiter = ',', default_values_t = [200, 300, 400])]
    extra: Vec<i64>,

    /// Log verbosity: -d for debug, -dd for trace. `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count)]
    debug: u8,
}

fn main() -> TreeResult<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let keys: Vec<i64> = (0..cli.size)
        .map(|_| rng.gen_range(0..cli.max.max(1)))
        .collect();
    tracing::info!(size = cli.size, max = cli.max, seed = ?cli.seed, "drew random keys");

    let mut tree = Tree::build(keys.iter().copied());
    println!("keys: {keys:?}");
    println!("sorted: {:?}", tree.to_vec());
    report(&tree)?;

    for key in &cli.extra {
        tree.insert(*key);
    }
    println!("after inserting {:?}", cli.extra);
    println!("balanced? {}", tree.is_balanced());
    print!("{tree}");

    tree.rebalance();
    println!("after rebalancing");
    report(&tree)
}

/// Prints the balance, the shape, and all four traversals of `tree`.
fn report(tree: &Tree<i64>) -> TreeResult<()> {
    println!("balanced? {}", tree.is_balanced());
    println!("height: {}", tree.height());
    print!("{tree}");
    for order in Order::ALL {
        let mut keys = Vec::with_capacity(tree.len());
        tree.traverse(order, Some(&mut |key: &i64| keys.push(*key)))?;
        println!("{order:?} order: {keys:?}");
    }
    Ok(())
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .init();
}
