use std::path::PathBuf;

use clap::Args;
use tracing::info;

use tollway_network::checkpoint::CheckpointId;
use tollway_network::matrix::DistanceMatrix;
use tollway_network::tolerance::checkpoints_within_tolerance;

use crate::load;

#[derive(Args)]
pub struct CompareArgs {
    /// CSV file of id_start,id_end,distance rows
    #[arg(short, long)]
    input: PathBuf,

    /// Reference checkpoint id
    #[arg(short, long)]
    reference: i64,
}

pub fn run(args: CompareArgs) -> Result<(), anyhow::Error> {
    let edges = load::read_edges(&args.input)?;
    let matrix = DistanceMatrix::from_edges(&edges)?;
    let rows = matrix.unroll();

    let reference = CheckpointId::new(args.reference);
    let matched = checkpoints_within_tolerance(&rows, reference)?;

    info!(matched = matched.len(), %reference, "tolerance band search");
    for id in matched {
        println!("{id}");
    }

    Ok(())
}
