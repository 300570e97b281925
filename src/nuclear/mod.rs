mod mass_table;
mod nucleus;

pub use mass_table::{DEFAULT_MASS_TABLE_PATH, MassTable};
pub use nucleus::{NucleusData, nucleus_id};
