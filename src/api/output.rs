use std::path::Path;

use anyhow::{Context, Result};

use crate::rate::RateTable;

//=====================================================================
// Two-column CSV writer for the finished rate table. Downstream
// analysis parses this exact header and precision, keep them fixed.
//=====================================================================
pub fn write_rate_file<P: AsRef<Path>>(path: P, table: &RateTable) -> Result<()> {
    let mut contents = String::from("Temperature(GK),Rate(cm^3/(mol*s))\n");
    for (temperature, rate) in table.rows() {
        contents.push_str(&format!("{:.3},{:.6e}\n", temperature, rate));
    }

    std::fs::write(path.as_ref(), contents)
        .with_context(|| format!("Failed to write rate file: {:?}", path.as_ref()))
}
