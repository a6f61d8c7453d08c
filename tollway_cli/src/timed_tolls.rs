use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;

use tollway_tariff::toll::apply_time_based_rates;

use crate::load;

#[derive(Args)]
pub struct TimedTollsArgs {
    /// CSV file whose id_start/id_end columns carry HH:MM:SS_Weekday keys
    #[arg(short, long)]
    input: PathBuf,

    /// Tariff configuration file (JSON); defaults to the reference tariff
    #[arg(short, long)]
    tariff: Option<PathBuf>,
}

pub fn run(args: TimedTollsArgs) -> Result<(), anyhow::Error> {
    let edges = load::read_timed_edges(&args.input)?;
    let (rates, schedule) = load::read_tariff(args.tariff.as_deref())?;

    let rows = apply_time_based_rates(&edges, &rates, &schedule);

    let mut table = Table::new();
    let mut header = vec![
        "start_day".to_owned(),
        "start_time".to_owned(),
        "end_day".to_owned(),
        "end_time".to_owned(),
        "distance".to_owned(),
    ];
    header.extend(rates.entries().iter().map(|entry| entry.class.to_string()));
    header.push("factor".to_owned());
    table.set_header(header);

    for row in rows {
        let mut cells = vec![
            format!("{:?}", row.span.start_day),
            row.span.start_time.to_string(),
            format!("{:?}", row.span.end_day),
            row.span.end_time.to_string(),
            format!("{:.1}", row.distance),
        ];
        cells.extend(row.tolls.iter().map(|toll| format!("{:.1}", toll.amount)));
        cells.push(row.applied_factor.to_string());
        table.add_row(cells);
    }

    println!("{table}");
    Ok(())
}
