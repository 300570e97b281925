use std::path::Path;

use anyhow::{Context, Result};

use crate::data::energy_series::{EnergySeries, Observable};

//=====================================================================
// Reader for two-column cross-section files: center-of-mass energy
// (MeV) then cross section (barn), whitespace separated.
//=====================================================================
pub async fn read_cross_section_file<P: AsRef<Path>>(path: P) -> Result<EnergySeries> {
    let contents = tokio::fs::read_to_string(path.as_ref())
        .await
        .with_context(|| format!("Failed to read cross section data file: {:?}", path.as_ref()))?;
    parse_cross_section(&contents)
}

fn parse_cross_section(contents: &str) -> Result<EnergySeries> {
    let mut energies = Vec::new();
    let mut cross_section = Vec::new();

    for row in contents.lines() {
        let entries: Vec<&str> = row.split_whitespace().collect();
        if entries.len() < 2 {
            continue;
        }
        energies.push(
            fast_float::parse(entries[0])
                .with_context(|| format!("Bad energy entry in cross section row: {}", row))?,
        );
        cross_section.push(
            fast_float::parse(entries[1])
                .with_context(|| format!("Bad cross section entry in row: {}", row))?,
        );
    }

    Ok(EnergySeries::from_e_and_values(energies, cross_section, Observable::CrossSection)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::utils::testing::TEST_CROSS_SECTION;

    #[test]
    fn test_parse_two_columns() {
        let series = parse_cross_section("0.2 0.05\n0.6 0.40\n1.0 0.90\n").unwrap();
        assert_eq!(series.observable(), Observable::CrossSection);
        assert_eq!(series.energies(), &[0.2, 0.6, 1.0]);
        assert_eq!(series.values(), &[0.05, 0.40, 0.90]);
    }

    #[tokio::test]
    async fn test_read_cross_section_test_file() {
        let series = read_cross_section_file(*TEST_CROSS_SECTION).await.unwrap();
        assert_eq!(series.observable(), Observable::CrossSection);
        assert_eq!(series.len(), 7);
    }
}
