use crate::constants::PhysicalConstants;
use crate::data::Observable;
use crate::rate::kinematics;

// Empirical leading constants of the cross-section rate formula
const XS_LEADING_FACTOR: f64 = 3.7318e10;
const XS_EXP_FACTOR: f64 = -11.605;

//=====================================================================
// The two rate integrand models. The S-factor model is the standard
// non-resonant Gamow-peak integrand; the cross-section model works
// directly in the measured cross section, which stays stable for
// resonant data where dividing out the penetration factor would not.
//
// The models are deliberately not interchangeable: the S-factor model
// takes the reduced mass in MeV and works in 1/kT (1/MeV), while the
// cross-section model takes the reduced mass in u and works in 1/T
// (1/GK).
//=====================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegrandModel {
    SFactor,
    CrossSection,
}

impl IntegrandModel {
    pub fn for_observable(observable: Observable) -> Self {
        match observable {
            Observable::SFactor => IntegrandModel::SFactor,
            Observable::CrossSection => IntegrandModel::CrossSection,
        }
    }

    // Evaluate the rate integrand at every energy sample for one grid
    // temperature (GK). The reduced mass unit follows the model, see above.
    // Integrating the result over energy yields a rate in cm^3/(mol*s).
    pub fn evaluate(
        &self,
        constants: &PhysicalConstants,
        energies: &[f64],
        observable: &[f64],
        red_mass: f64,
        T: f64,
        z1: usize,
        z2: usize,
    ) -> Vec<f64> {
        match self {
            IntegrandModel::SFactor => {
                let invkT = kinematics::calc_invkT(T);
                let leading = constants.sfactor_leading_factor * (invkT.powi(3) / red_mass).sqrt();
                let sommerfeld = kinematics::calc_sommerfeld(red_mass, z1, z2, energies);
                energies
                    .iter()
                    .zip(observable)
                    .zip(sommerfeld)
                    .map(|((&e, &sfactor), phase)| leading * sfactor * (-(phase + e * invkT)).exp())
                    .collect()
            }
            IntegrandModel::CrossSection => {
                let invT = 1.0 / T;
                let leading = XS_LEADING_FACTOR * (invT.powi(3) / red_mass).sqrt();
                energies
                    .iter()
                    .zip(observable)
                    .map(|(&e, &sigma)| leading * e * sigma * (XS_EXP_FACTOR * e * invT).exp())
                    .collect()
            }
        }
    }
}
