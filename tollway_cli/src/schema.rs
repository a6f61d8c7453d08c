use tollway_tariff::schema::generate_json_schema;

pub fn run() -> Result<(), anyhow::Error> {
    println!("{}", generate_json_schema()?);
    Ok(())
}
