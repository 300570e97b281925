use std::f64::consts::PI;

use crate::constants::{BOLTZMANN_CONST, FINE_STRUCT_CONST};

//=====================================================================
// Two-body kinematics helpers. All closed-form, no state.
//=====================================================================

// Reduced mass; units in = units out
#[inline]
pub fn calc_reduced_mass(m1: f64, m2: f64) -> f64 {
    m1 * m2 / (m1 + m2)
}

// Boltzmann factor 1/kT; temperature in GK, result in 1/MeV.
// Goes to +inf at T = 0, the driver keeps zero temperatures out of the grid.
#[inline]
pub fn calc_invkT(T: f64) -> f64 {
    1.0 / (BOLTZMANN_CONST * T)
}

// Sommerfeld phase 2*pi*eta at each energy sample; reduced mass and
// energies in MeV, result unitless. Undefined at zero energy, which the
// series constructor rejects.
pub fn calc_sommerfeld(red_mass: f64, z1: usize, z2: usize, energies: &[f64]) -> Vec<f64> {
    let charge_factor = 2.0 * PI * z1 as f64 * z2 as f64 * FINE_STRUCT_CONST;
    energies.iter().map(|&e| charge_factor * (red_mass * 0.5 / e).sqrt()).collect()
}
