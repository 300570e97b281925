mod driver;
mod integrand;
mod integrator;
mod kinematics;

pub use driver::{RateTable, TemperatureGrid, compute_rate_table};
pub use integrand::IntegrandModel;
pub use integrator::{MIN_INTEGRATION_SAMPLES, integrate};
pub use kinematics::{calc_invkT, calc_reduced_mass, calc_sommerfeld};
