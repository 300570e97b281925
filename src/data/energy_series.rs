use strum_macros::EnumIter;

use crate::error::RateError;

// Which measured observable a series carries. The two kinds feed
// different rate formulas and must never be mixed in one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Observable {
    SFactor,      // astrophysical S-factor, MeV * barn
    CrossSection, // cross section, barn
}

impl std::fmt::Display for Observable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Observable::SFactor => write!(f, "S-factor"),
            Observable::CrossSection => write!(f, "cross section"),
        }
    }
}

//=====================================================================
// An ordered series of (energy, observable) samples on an irregular
// energy grid. Energies are in MeV, strictly increasing and positive;
// the observable unit is fixed by the kind tag.
//=====================================================================
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySeries {
    energies: Vec<f64>, // MeV
    values: Vec<f64>,
    observable: Observable,
}

impl EnergySeries {
    pub fn from_e_and_values(
        energies: Vec<f64>,
        values: Vec<f64>,
        observable: Observable,
    ) -> Result<Self, RateError> {
        // Mismatched columns are a reader bug, not a data problem
        if energies.len() != values.len() {
            panic!(
                "EnergySeries: energy ({}) and observable ({}) columns must be of the same length",
                energies.len(),
                values.len()
            );
        }

        if energies.is_empty() {
            return Err(RateError::DataTooShort(0));
        }
        if let Some(&e) = energies.iter().find(|&&e| e <= 0.0) {
            return Err(RateError::DivisionSingularity { quantity: "energy", value: e });
        }
        if energies.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(RateError::ConfigurationInvalid(
                "energy column is not strictly increasing".to_string(),
            ));
        }

        Ok(Self { energies, values, observable })
    }

    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn observable(&self) -> Observable {
        self.observable
    }

    pub fn len(&self) -> usize {
        self.energies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}
