use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::Observable;
use crate::error::RateError;
use crate::nuclear::{MassTable, NucleusData};

// Raw JSON shape of a reaction configuration file. Exactly one of
// Sfactor_file and CrossSection_file must be present; which one it is
// selects the integrand model for the whole calculation.
#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(rename = "Z_projectile")]
    z_projectile: usize,
    #[serde(rename = "A_projectile")]
    a_projectile: usize,
    #[serde(rename = "Z_target")]
    z_target: usize,
    #[serde(rename = "A_target")]
    a_target: usize,
    #[serde(rename = "Sfactor_file", default)]
    sfactor_file: Option<PathBuf>,
    #[serde(rename = "CrossSection_file", default)]
    cross_section_file: Option<PathBuf>,
    #[serde(rename = "output_file")]
    output_file: PathBuf,
    #[serde(rename = "T_min")]
    t_min: f64,
    #[serde(rename = "T_max")]
    t_max: f64,
    #[serde(rename = "T_step")]
    t_step: f64,
}

//=====================================================================
// A reaction configuration with both nuclides resolved against the
// mass table, ready to drive one rate calculation.
//=====================================================================
#[derive(Debug, Clone)]
pub struct Config {
    pub projectile: NucleusData,
    pub target: NucleusData,
    pub data_filepath: PathBuf,
    pub observable: Observable,
    pub output_filepath: PathBuf,
    pub t_min: f64, // GK
    pub t_max: f64, // GK
    pub t_step: f64, // GK
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P, mass_table: &MassTable) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RateError::ConfigurationMissingFile(path.to_path_buf()).into());
        }

        let contents = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read configuration file: {:?}", path))?;
        let raw: RawConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Malformed reaction configuration in {:?}", path))?;

        let (data_filepath, observable) = match (raw.sfactor_file, raw.cross_section_file) {
            (Some(file), None) => (file, Observable::SFactor),
            (None, Some(file)) => (file, Observable::CrossSection),
            (Some(_), Some(_)) => {
                return Err(RateError::ConfigurationInvalid(
                    "configuration names both an S-factor file and a cross section file".to_string(),
                )
                .into());
            }
            (None, None) => {
                return Err(RateError::ConfigurationInvalid(
                    "configuration names neither an S-factor file nor a cross section file".to_string(),
                )
                .into());
            }
        };
        if !data_filepath.exists() {
            return Err(RateError::ConfigurationMissingFile(data_filepath).into());
        }

        let projectile = mass_table.get(raw.z_projectile, raw.a_projectile)?.clone();
        let target = mass_table.get(raw.z_target, raw.a_target)?.clone();

        Ok(Self {
            projectile,
            target,
            data_filepath,
            observable,
            output_filepath: raw.output_file,
            t_min: raw.t_min,
            t_max: raw.t_max,
            t_step: raw.t_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils::testing::{TEST_CONFIG, TEST_CONFIG_XS, get_test_mass_table};

    #[tokio::test]
    async fn test_sfactor_config() {
        let mass_table = get_test_mass_table();
        let config = Config::from_file(*TEST_CONFIG, &mass_table).await.unwrap();
        assert_eq!(config.projectile.isotopic_symbol, "1H");
        assert_eq!(config.target.isotopic_symbol, "12C");
        assert_eq!(config.observable, Observable::SFactor);
        assert_eq!(config.t_min, 0.1);
        assert_eq!(config.t_max, 1.0);
        assert_eq!(config.t_step, 0.05);
    }

    #[tokio::test]
    async fn test_cross_section_config() {
        let mass_table = get_test_mass_table();
        let config = Config::from_file(*TEST_CONFIG_XS, &mass_table).await.unwrap();
        assert_eq!(config.observable, Observable::CrossSection);
        assert_eq!(config.projectile.isotopic_symbol, "4He");
        assert_eq!(config.target.isotopic_symbol, "12C");
    }

    #[tokio::test]
    async fn test_missing_config_file() {
        let mass_table = get_test_mass_table();
        let result = Config::from_file("does/not/exist.json", &mass_table).await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<RateError>(),
            Some(RateError::ConfigurationMissingFile(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_data_file_in_config() {
        let mass_table = get_test_mass_table();
        let contents = serde_json::json!({
            "Z_projectile": 1, "A_projectile": 1,
            "Z_target": 6, "A_target": 12,
            "Sfactor_file": "does/not/exist.txt",
            "output_file": "unused.csv",
            "T_min": 0.1, "T_max": 1.0, "T_step": 0.05
        });
        let config_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(config_file.path(), contents.to_string()).unwrap();

        let result = Config::from_file(config_file.path(), &mass_table).await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<RateError>(),
            Some(RateError::ConfigurationMissingFile(_))
        ));
    }

    #[tokio::test]
    async fn test_unknown_nuclide_in_config() {
        let mass_table = get_test_mass_table();
        let contents = serde_json::json!({
            "Z_projectile": 99, "A_projectile": 250,
            "Z_target": 6, "A_target": 12,
            "Sfactor_file": *TEST_CONFIG, // any existing file will do here
            "output_file": "unused.csv",
            "T_min": 0.1, "T_max": 1.0, "T_step": 0.05
        });
        let config_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(config_file.path(), contents.to_string()).unwrap();

        let result = Config::from_file(config_file.path(), &mass_table).await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<RateError>(),
            Some(RateError::ConfigurationInvalid(_))
        ));
    }

    #[tokio::test]
    async fn test_both_data_files_rejected() {
        let mass_table = get_test_mass_table();
        let contents = serde_json::json!({
            "Z_projectile": 1, "A_projectile": 1,
            "Z_target": 6, "A_target": 12,
            "Sfactor_file": *TEST_CONFIG,
            "CrossSection_file": *TEST_CONFIG,
            "output_file": "unused.csv",
            "T_min": 0.1, "T_max": 1.0, "T_step": 0.05
        });
        let config_file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(config_file.path(), contents.to_string()).unwrap();

        let result = Config::from_file(config_file.path(), &mass_table).await;
        let error = result.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<RateError>(),
            Some(RateError::ConfigurationInvalid(_))
        ));
    }
}
