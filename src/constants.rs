//=====================================================================
// Physical constants used throughout the rate calculation.
//=====================================================================

pub const FINE_STRUCT_CONST: f64 = 7.2973525693e-3; // unitless
pub const BOLTZMANN_CONST: f64 = 8.617333262e-5 * 1.0e-6 * 1.0e9; // MeV/GK
pub const AVOGADRO: f64 = 6.02e23; // atoms/mol
pub const BARN_TO_CM2: f64 = 1.0e-24; // cm^2/barn
pub const C_CM_PER_S: f64 = 2.99792458e10; // speed of light in cm/s
pub const U_TO_MEV: f64 = 931.49410242; // MeV/u
pub const ELECTRON_MASS_U: f64 = 0.000548579909; // u

//=====================================================================
// Precomputed leading factors of the rate formulas. Constructed once
// at the start of a calculation and passed by reference into the
// integrand evaluation, so the square root is never recomputed inside
// the temperature loop.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicalConstants {
    pub sfactor_leading_factor: f64, // sqrt(8/pi) * N_A * (barn -> cm^2) * c
}

impl PhysicalConstants {
    pub fn new() -> Self {
        Self {
            sfactor_leading_factor: (8.0 / std::f64::consts::PI).sqrt()
                * AVOGADRO
                * BARN_TO_CM2
                * C_CM_PER_S,
        }
    }
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self::new()
    }
}
