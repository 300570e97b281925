mod azure;
mod cross_section;
mod energy_series;

pub use azure::read_azure_file;
pub use cross_section::read_cross_section_file;
pub use energy_series::{EnergySeries, Observable};
