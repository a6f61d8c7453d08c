use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;

use tollway_network::matrix::DistanceMatrix;
use tollway_tariff::toll::apply_flat_rates;

use crate::load;

#[derive(Args)]
pub struct TollsArgs {
    /// CSV file of id_start,id_end,distance rows
    #[arg(short, long)]
    input: PathBuf,

    /// Tariff configuration file (JSON); defaults to the reference tariff
    #[arg(short, long)]
    tariff: Option<PathBuf>,
}

pub fn run(args: TollsArgs) -> Result<(), anyhow::Error> {
    let edges = load::read_edges(&args.input)?;
    let (rates, _) = load::read_tariff(args.tariff.as_deref())?;

    let matrix = DistanceMatrix::from_edges(&edges)?;
    let rows = apply_flat_rates(&matrix.unroll(), &rates);

    let mut table = Table::new();
    let mut header = vec![
        "id_start".to_owned(),
        "id_end".to_owned(),
        "distance".to_owned(),
    ];
    header.extend(rates.entries().iter().map(|entry| entry.class.to_string()));
    table.set_header(header);

    for row in rows {
        let mut cells = vec![
            row.id_start.to_string(),
            row.id_end.to_string(),
            format!("{:.1}", row.distance),
        ];
        cells.extend(row.tolls.iter().map(|toll| format!("{:.1}", toll.amount)));
        table.add_row(cells);
    }

    println!("{table}");
    Ok(())
}
