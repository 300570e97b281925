use std::ops::Deref;

use rayon::prelude::*;

use crate::constants::PhysicalConstants;
use crate::data::EnergySeries;
use crate::error::RateError;
use crate::nuclear::NucleusData;
use crate::rate::integrand::IntegrandModel;
use crate::rate::integrator;
use crate::rate::kinematics;

//=====================================================================
// Temperature grid in GK, linearly spaced from T_min to T_max over
// ceil(|T_max - T_min| / T_step) points. The ceiling guarantees the
// requested upper bound is always reached.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureGrid(Vec<f64>);

impl Deref for TemperatureGrid {
    type Target = Vec<f64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TemperatureGrid {
    pub fn from_bounds(t_min: f64, t_max: f64, t_step: f64) -> Result<Self, RateError> {
        let num_points = ((t_max - t_min).abs() / t_step).ceil();
        // Catches T_min == T_max as well as zero, negative and NaN steps
        if !num_points.is_finite() || num_points < 1.0 {
            return Err(RateError::DegenerateGrid { t_min, t_max, t_step });
        }

        let num_points = num_points as usize;
        let temperatures = if num_points == 1 {
            vec![t_min]
        } else {
            let step = (t_max - t_min) / (num_points - 1) as f64;
            (0..num_points).map(|i| t_min + i as f64 * step).collect()
        };
        Ok(Self(temperatures))
    }
}

// Final (temperature, rate) table, one row per grid point in grid order
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub temperatures: Vec<f64>, // GK
    pub rates: Vec<f64>,        // cm^3/(mol*s)
}

impl RateTable {
    pub fn len(&self) -> usize {
        self.temperatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.temperatures.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.temperatures.iter().copied().zip(self.rates.iter().copied())
    }
}

//=====================================================================
// Rate table driver: one integrand evaluation and one quadrature per
// grid temperature. Every failure mode is checked up front so the
// parallel loop below can never hand back a partially valid table.
//=====================================================================
pub fn compute_rate_table(
    constants: &PhysicalConstants,
    projectile: &NucleusData,
    target: &NucleusData,
    series: &EnergySeries,
    grid: &TemperatureGrid,
) -> Result<RateTable, RateError> {
    if series.len() < integrator::MIN_INTEGRATION_SAMPLES {
        return Err(RateError::DataTooShort(series.len()));
    }
    if let Some(&e) = series.energies().iter().find(|&&e| e <= 0.0) {
        return Err(RateError::DivisionSingularity { quantity: "energy", value: e });
    }
    if let Some(&t) = grid.iter().find(|&&t| t <= 0.0) {
        return Err(RateError::DivisionSingularity { quantity: "temperature", value: t });
    }

    let model = IntegrandModel::for_observable(series.observable());
    // Reduced mass is computed once for the whole grid; the unit follows
    // the model (MeV for the S-factor path, u for the cross-section path)
    let red_mass = match model {
        IntegrandModel::SFactor => kinematics::calc_reduced_mass(projectile.mass, target.mass),
        IntegrandModel::CrossSection => kinematics::calc_reduced_mass(projectile.mass_u, target.mass_u),
    };

    // Grid points are independent; rayon's collect keeps them in grid order
    let rates = grid
        .par_iter()
        .map(|&t| {
            let integrand = model.evaluate(
                constants,
                series.energies(),
                series.values(),
                red_mass,
                t,
                projectile.z,
                target.z,
            );
            integrator::integrate(&integrand, series.energies())
        })
        .collect::<Result<Vec<f64>, RateError>>()?;

    Ok(RateTable { temperatures: grid.to_vec(), rates })
}
