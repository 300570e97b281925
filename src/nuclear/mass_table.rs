use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use dashmap::DashMap;
use memmap2::MmapOptions;
use rayon::prelude::*;

use crate::constants::{ELECTRON_MASS_U, U_TO_MEV};
use crate::error::RateError;
use crate::nuclear::nucleus::{NucleusData, nucleus_id};

// Default location of the AMDC mass evaluation file
pub const DEFAULT_MASS_TABLE_PATH: &str = "etc/amdc2016_mass.txt";

//=====================================================================
// Map of nuclide identity to mass data, built once per process from
// the AMDC mass evaluation file. The file layout is two header lines
// followed by whitespace-separated rows of
//     N  Z  A  symbol  mass(integer u)  mass(remainder micro-u)
// Masses are stored as nuclear masses, so the Z electron masses are
// subtracted during parsing.
//=====================================================================
#[derive(Clone, Debug)]
pub struct MassTable {
    map: HashMap<usize, NucleusData>,
}

impl MassTable {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open mass table file: {:?}", path.as_ref()))?;

        // The mass table is by far the largest file this crate touches,
        // map it instead of buffering it
        let mmap = unsafe { MmapOptions::new().map(&file) }
            .with_context(|| format!("Failed to memory map mass table file: {:?}", path.as_ref()))?;
        let contents = std::str::from_utf8(&mmap)
            .with_context(|| format!("Mass table file {:?} is not valid UTF-8", path.as_ref()))?;

        Self::parse(contents)
    }

    fn parse(contents: &str) -> Result<Self> {
        // First two lines are column headers
        let rows: Vec<&str> = contents.lines().skip(2).collect();

        // Rows are independent, parse them in parallel
        let map = DashMap::new();
        rows.par_iter().try_for_each(|row| -> Result<()> {
            if row.trim().is_empty() {
                return Ok(());
            }
            let data = parse_mass_row(row)?;
            map.insert(nucleus_id(data.z, data.a), data);
            Ok(())
        })?;

        // Convert DashMap back to a standard HashMap
        Ok(Self { map: map.into_iter().collect() })
    }

    pub fn get(&self, z: usize, a: usize) -> Result<&NucleusData, RateError> {
        self.map.get(&nucleus_id(z, a)).ok_or_else(|| {
            RateError::ConfigurationInvalid(format!("nuclide Z={} A={} not found in mass table", z, a))
        })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

fn parse_mass_row(row: &str) -> Result<NucleusData> {
    let entries: Vec<&str> = row.split_whitespace().collect();
    if entries.len() < 6 {
        bail!("Malformed mass table row: {}", row);
    }

    let z: usize = entries[1]
        .parse()
        .with_context(|| format!("Bad Z entry in mass table row: {}", row))?;
    let a: usize = entries[2]
        .parse()
        .with_context(|| format!("Bad A entry in mass table row: {}", row))?;
    let element_symbol = entries[3].to_string();
    let mass_integer: f64 = fast_float::parse(entries[4])
        .with_context(|| format!("Bad mass entry in mass table row: {}", row))?;
    let mass_micro_u: f64 = fast_float::parse(entries[5])
        .with_context(|| format!("Bad mass entry in mass table row: {}", row))?;

    // Nuclear, not atomic, mass
    let mass_u = mass_integer + 1.0e-6 * mass_micro_u - z as f64 * ELECTRON_MASS_U;

    Ok(NucleusData {
        mass: mass_u * U_TO_MEV,
        mass_u,
        isotopic_symbol: format!("{}{}", a, element_symbol),
        pretty_isotopic_symbol: format!("<sup>{}</sup>{}", a, element_symbol),
        element_symbol,
        z,
        a,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::utils::testing::get_test_mass_table;

    #[test]
    fn test_parse_row() {
        let proton = parse_mass_row("0 1 1 H 1 7825.031898").unwrap();
        assert_eq!(proton.z, 1);
        assert_eq!(proton.a, 1);
        assert_eq!(proton.isotopic_symbol, "1H");
        // Proton mass with the electron stripped off
        assert_relative_eq!(proton.mass_u, 1.00727646, max_relative = 1e-7);
        assert_relative_eq!(proton.mass, 938.2720, max_relative = 1e-6);
    }

    #[test]
    fn test_mass_table_lookup() {
        let table = get_test_mass_table();
        let carbon = table.get(6, 12).unwrap();
        assert_eq!(carbon.isotopic_symbol, "12C");
        // 12C nuclear mass: 12 u minus six electrons
        assert_relative_eq!(carbon.mass_u, 12.0 - 6.0 * ELECTRON_MASS_U, max_relative = 1e-12);
        assert_relative_eq!(carbon.mass, 11174.862, max_relative = 1e-6);
    }

    #[test]
    fn test_unknown_nuclide_is_an_error() {
        let table = get_test_mass_table();
        let result = table.get(99, 250);
        assert!(matches!(result, Err(RateError::ConfigurationInvalid(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(MassTable::from_file("does/not/exist.txt").is_err());
    }

    // This test should only be run locally against a full AMDC file
    // turn it on with `cargo test --features local`
    #[cfg(feature = "local")]
    #[test]
    fn test_full_mass_table() {
        let table = MassTable::from_file(DEFAULT_MASS_TABLE_PATH).unwrap();
        assert!(table.len() > 3000);
        table.get(1, 1).unwrap();
        table.get(92, 238).unwrap();
    }
}
