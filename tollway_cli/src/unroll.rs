use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;

use tollway_network::matrix::DistanceMatrix;

use crate::load;

#[derive(Args)]
pub struct UnrollArgs {
    /// CSV file of id_start,id_end,distance rows
    #[arg(short, long)]
    input: PathBuf,
}

pub fn run(args: UnrollArgs) -> Result<(), anyhow::Error> {
    let edges = load::read_edges(&args.input)?;
    let matrix = DistanceMatrix::from_edges(&edges)?;

    let mut table = Table::new();
    table.set_header(vec!["id_start", "id_end", "distance"]);
    for row in matrix.unroll() {
        table.add_row(vec![
            row.id_start.to_string(),
            row.id_end.to_string(),
            format!("{:.1}", row.distance),
        ]);
    }

    println!("{table}");
    Ok(())
}
