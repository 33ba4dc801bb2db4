use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use mazegen::gen::kruskal;
use mazegen::Grid;

/// Generate a perfect maze with randomized Kruskal's algorithm.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Width and height of the maze, in cells.
    size: usize,

    /// Seed for the random source, for reproducible mazes.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut grid = Grid::new(args.size)?;
    println!("\nInitial Configuration:");
    print!("{grid}");

    match args.seed {
        Some(seed) => kruskal::on(&mut grid, &mut StdRng::seed_from_u64(seed)),
        None => kruskal::on(&mut grid, &mut rand::thread_rng()),
    }
    info!("generated a {0}x{0} maze", args.size);

    println!("\nEnding Configuration:");
    print!("{grid}");
    Ok(())
}
