use std::path::Path;

use plotly::layout::{Axis, AxisType};
use plotly::{Layout, Plot, Scatter};

use crate::rate::RateTable;

//=====================================================================
// Offline analysis helper: render the finished rate table as a
// rate-vs-temperature plot. Rates span many orders of magnitude, the
// rate axis is logarithmic.
//=====================================================================
pub fn write_rate_plot<P: AsRef<Path>>(path: P, table: &RateTable) {
    let trace = Scatter::new(table.temperatures.clone(), table.rates.clone()).name("rate");

    let layout = Layout::new()
        .x_axis(Axis::new().title("Temperature (GK)"))
        .y_axis(Axis::new().title("Rate (cm^3/(mol*s))").type_(AxisType::Log));

    let mut plot = Plot::new();
    plot.add_trace(trace);
    plot.set_layout(layout);
    plot.write_html(path.as_ref());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_file_is_written() {
        let table = RateTable {
            temperatures: vec![0.1, 0.5, 1.0],
            rates: vec![1.0e-12, 3.0e-2, 7.5e3],
        };
        let output_dir = tempfile::tempdir().unwrap();
        let output_path = output_dir.path().join("rate_plot.html");
        write_rate_plot(&output_path, &table);

        let written = std::fs::read_to_string(&output_path).unwrap();
        assert!(written.contains("Temperature (GK)"));
    }
}
