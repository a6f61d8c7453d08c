use std::path::PathBuf;

use clap::Args;
use comfy_table::Table;

use tollway_reports::survey::{
    car_flow_matrix, flow_band_counts, indexes_above_twice_mean, routes_above_mean_flow,
};
use tollway_tariff::vehicle_class::VehicleClass;

use crate::{load, render};

#[derive(Args)]
pub struct SurveyArgs {
    /// CSV file of id_1,id_2,route,moto,car,rv,bus,truck rows
    #[arg(short, long)]
    input: PathBuf,

    /// Mean truck flow above which a route is reported
    #[arg(long, default_value_t = 7.0)]
    truck_threshold: f64,
}

pub fn run(args: SurveyArgs) -> Result<(), anyhow::Error> {
    let records = load::read_flow_records(&args.input)?;

    let counts = flow_band_counts(&records);
    let mut bands = Table::new();
    bands.set_header(vec!["band", "count"]);
    bands.add_row(vec!["low".to_owned(), counts.low.to_string()]);
    bands.add_row(vec!["medium".to_owned(), counts.medium.to_string()]);
    bands.add_row(vec!["high".to_owned(), counts.high.to_string()]);
    println!("{bands}");

    let spikes = indexes_above_twice_mean(&records, VehicleClass::Bus);
    println!("bus flow spikes at rows: {spikes:?}");

    let routes = routes_above_mean_flow(&records, VehicleClass::Truck, args.truck_threshold);
    println!("heavy truck routes: {routes:?}");

    let matrix = car_flow_matrix(&records)?;
    println!("{}", render::matrix_table(&matrix));

    Ok(())
}
