use std::path::PathBuf;

use clap::Args;
use tracing::info;

use tollway_network::matrix::DistanceMatrix;

use crate::{load, render};

#[derive(Args)]
pub struct MatrixArgs {
    /// CSV file of id_start,id_end,distance rows
    #[arg(short, long)]
    input: PathBuf,

    /// Rescale cells around the calibration cutoff
    #[arg(long)]
    rescale: bool,

    /// Calibration cutoff for --rescale
    #[arg(long, default_value_t = 20.0)]
    cutoff: f64,
}

pub fn run(args: MatrixArgs) -> Result<(), anyhow::Error> {
    let edges = load::read_edges(&args.input)?;
    let mut matrix = DistanceMatrix::from_edges(&edges)?;
    if args.rescale {
        matrix = matrix.rescaled(args.cutoff, 0.75, 1.25);
    }

    info!(checkpoints = matrix.len(), "built distance matrix");
    println!("{}", render::matrix_table(&matrix));

    Ok(())
}
