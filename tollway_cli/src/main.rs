use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

mod compare;
mod coverage;
mod load;
mod matrix;
mod render;
mod schema;
mod survey;
mod timed_tolls;
mod tolls;
mod unroll;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and print the symmetric distance matrix
    Matrix {
        #[command(flatten)]
        args: matrix::MatrixArgs,
    },
    /// Unroll the matrix into a flat directional edge list
    Unroll {
        #[command(flatten)]
        args: unroll::UnrollArgs,
    },
    /// Find checkpoints whose average distance is comparable to a reference
    Compare {
        #[command(flatten)]
        args: compare::CompareArgs,
    },
    /// Price every unrolled edge with the flat rate table
    Tolls {
        #[command(flatten)]
        args: tolls::TollsArgs,
    },
    /// Price timed rows with weekday window and weekend discounts
    #[command(name = "timed-tolls")]
    TimedTolls {
        #[command(flatten)]
        args: timed_tolls::TimedTollsArgs,
    },
    /// Summarize a traffic survey
    Survey {
        #[command(flatten)]
        args: survey::SurveyArgs,
    },
    /// Check weekly observation coverage per checkpoint pair
    Coverage {
        #[command(flatten)]
        args: coverage::CoverageArgs,
    },
    /// Print the tariff configuration JSON schema
    Schema,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Matrix { args }) => matrix::run(args)?,
        Some(Commands::Unroll { args }) => unroll::run(args)?,
        Some(Commands::Compare { args }) => compare::run(args)?,
        Some(Commands::Tolls { args }) => tolls::run(args)?,
        Some(Commands::TimedTolls { args }) => timed_tolls::run(args)?,
        Some(Commands::Survey { args }) => survey::run(args)?,
        Some(Commands::Coverage { args }) => coverage::run(args)?,
        Some(Commands::Schema) => schema::run()?,
        None => {}
    }

    Ok(())
}
