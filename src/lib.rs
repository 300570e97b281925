#![allow(non_snake_case)]

mod api;
mod constants;
mod data;
mod error;
mod nuclear;
mod plot;
mod rate;
mod utils;

pub use api::{Config, calc_rate, run_config, write_rate_file};
pub use constants::PhysicalConstants;
pub use data::{EnergySeries, Observable, read_azure_file, read_cross_section_file};
pub use error::RateError;
pub use nuclear::{DEFAULT_MASS_TABLE_PATH, MassTable, NucleusData, nucleus_id};
pub use plot::write_rate_plot;
pub use rate::{
    IntegrandModel, MIN_INTEGRATION_SAMPLES, RateTable, TemperatureGrid, calc_invkT,
    calc_reduced_mass, calc_sommerfeld, compute_rate_table, integrate,
};
