use std::path::Path;

use anyhow::Result;

use crate::api::config::Config;
use crate::api::output;
use crate::constants::PhysicalConstants;
use crate::data::{Observable, read_azure_file, read_cross_section_file};
use crate::nuclear::MassTable;
use crate::rate::{RateTable, TemperatureGrid, compute_rate_table};

//=====================================================================
// End-to-end rate calculation: configuration file in, rate table CSV
// out. The output file is only written once the whole table exists, a
// failed calculation leaves nothing behind.
//=====================================================================
pub async fn calc_rate<P: AsRef<Path>, Q: AsRef<Path>>(
    config_path: P,
    mass_table_path: Q,
) -> Result<RateTable> {
    let mass_table = MassTable::from_file(mass_table_path)?;
    let config = Config::from_file(config_path, &mass_table).await?;

    let table = run_config(&config).await?;
    output::write_rate_file(&config.output_filepath, &table)?;
    Ok(table)
}

// Compute the table for an already resolved configuration without
// writing it anywhere
pub async fn run_config(config: &Config) -> Result<RateTable> {
    let series = match config.observable {
        Observable::SFactor => read_azure_file(&config.data_filepath).await?,
        Observable::CrossSection => read_cross_section_file(&config.data_filepath).await?,
    };

    let constants = PhysicalConstants::new();
    let grid = TemperatureGrid::from_bounds(config.t_min, config.t_max, config.t_step)?;
    let table = compute_rate_table(&constants, &config.projectile, &config.target, &series, &grid)?;
    Ok(table)
}
