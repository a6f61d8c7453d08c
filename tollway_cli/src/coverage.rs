use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;

use tollway_reports::coverage::weekly_coverage;

use crate::load;

#[derive(Args)]
pub struct CoverageArgs {
    /// CSV file of id,id_2,timestamp rows
    #[arg(short, long)]
    input: PathBuf,
}

pub fn run(args: CoverageArgs) -> Result<(), anyhow::Error> {
    let observations = load::read_observations(&args.input)?;
    let coverage = weekly_coverage(&observations);

    let mut table = Table::new();
    table.set_header(vec!["id", "id_2", "complete"]);
    for pair in coverage {
        table.add_row(vec![
            pair.id.to_string(),
            pair.id_2.to_string(),
            pair.complete.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
