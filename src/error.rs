use std::path::PathBuf;

use thiserror::Error;

//=====================================================================
// Failure kinds for a rate computation. Rate tables are all-or-nothing;
// any of these aborts the whole computation before an output file is
// written.
//=====================================================================
#[derive(Debug, Error)]
pub enum RateError {
    #[error("configuration references {0:?} which does not exist")]
    ConfigurationMissingFile(PathBuf),

    #[error("invalid configuration: {0}")]
    ConfigurationInvalid(String),

    #[error("energy series has {0} samples, integration requires at least 3")]
    DataTooShort(usize),

    #[error("temperature grid from T_min={t_min} to T_max={t_max} with T_step={t_step} contains no points")]
    DegenerateGrid { t_min: f64, t_max: f64, t_step: f64 },

    #[error("non-positive {quantity} ({value}) reached a kinematics formula")]
    DivisionSingularity { quantity: &'static str, value: f64 },
}
