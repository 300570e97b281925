use std::path::Path;

use anyhow::{Context, Result};

use crate::data::energy_series::{EnergySeries, Observable};

//=====================================================================
// Reader for AZURE2 extrapolation files. Each data row carries five
// whitespace-separated columns; the center-of-mass energy (MeV) is the
// first and the S-factor (MeV*barn) is the fifth. AZURE output
// interleaves shorter bookkeeping rows between segments, those are
// skipped.
//=====================================================================
pub async fn read_azure_file<P: AsRef<Path>>(path: P) -> Result<EnergySeries> {
    let contents = tokio::fs::read_to_string(path.as_ref())
        .await
        .with_context(|| format!("Failed to read AZURE data file: {:?}", path.as_ref()))?;
    parse_azure(&contents)
}

fn parse_azure(contents: &str) -> Result<EnergySeries> {
    let mut energies = Vec::new();
    let mut sfactor = Vec::new();

    for row in contents.lines() {
        let entries: Vec<&str> = row.split_whitespace().collect();
        if entries.len() < 5 {
            continue;
        }
        energies.push(
            fast_float::parse(entries[0]).with_context(|| format!("Bad energy entry in AZURE row: {}", row))?,
        );
        sfactor.push(
            fast_float::parse(entries[4]).with_context(|| format!("Bad S-factor entry in AZURE row: {}", row))?,
        );
    }

    Ok(EnergySeries::from_e_and_values(energies, sfactor, Observable::SFactor)?)
}
