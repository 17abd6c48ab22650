use std::fs;
use std::path::Path;

use ecodash_vis::chart::Chart;
use ecodash_vis::chart::layout::Axis;
use ecodash_vis::chart::layout::Layout;
use ecodash_vis::chart::trace::SeriesTrace;
use ecodash_vis::render::RenderSink;
use ecodash_vis::render::page::HtmlPage;
use serde::Deserialize;

use crate::cli::PathExt;
use crate::cli::ZonesArgs;
use crate::error::CliError;
use crate::view::PAGE_TITLE;
use crate::view::write_page;

const MOUNT: &str = "fuelTypeChart";

/// The usage of one fuel type, one value per zone label.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct UsageSeries {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

/// The energy usage per zone as served by the dashboard backend.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub(crate) struct ZonalUsage {
    pub electricity_usage: UsageSeries,
    pub gas_usage: UsageSeries,
}

impl ZonalUsage {
    pub fn read(path: &Path) -> Result<ZonalUsage, CliError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

pub(crate) fn zones(args: ZonesArgs) -> Result<(), CliError> {
    let output_path = args.output.output_path.or_current_dir()?;
    let usage = ZonalUsage::read(&args.file)?;

    let mut page = HtmlPage::new(PAGE_TITLE);
    page.new_plot(&zones_chart(usage))?;
    write_page(&page, &output_path)
}

pub(crate) fn zones_chart(usage: ZonalUsage) -> Chart {
    let electricity = SeriesTrace::bar(
        "Electricity",
        usage.electricity_usage.labels,
        usage.electricity_usage.data,
    )
    .color("#1f77b4");
    let gas =
        SeriesTrace::bar("Gas", usage.gas_usage.labels, usage.gas_usage.data).color("#ff7f0e");

    let layout = Layout::titled("Zonal Energy Usage by Fuel Type")
        .x_axis(Axis::titled("Zones"))
        .y_axis(Axis::titled("Energy Usage (kWh)"))
        .grouped_bars()
        .with_legend();

    Chart::new(MOUNT, vec![electricity.into(), gas.into()], layout)
}

#[cfg(test)]
mod tests {
    use ecodash_vis::chart::trace::Trace;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn usage(value: serde_json::Value) -> ZonalUsage {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn zones_chart_groups_both_fuel_types() {
        let chart = zones_chart(usage(json!({
            "electricity_usage": { "labels": ["Zone A", "Zone B"], "data": [120.5, 80.0] },
            "gas_usage": { "labels": ["Zone A", "Zone B"], "data": [40.0, 60.0] }
        })));

        let value = serde_json::to_value(&chart).unwrap();

        assert_eq!(chart.mount(), "fuelTypeChart");
        assert_eq!(value["traces"][0]["type"], "bar");
        assert_eq!(value["traces"][0]["name"], "Electricity");
        assert_eq!(value["traces"][0]["marker"]["color"], "#1f77b4");
        assert_eq!(value["traces"][0]["y"], json!([120.5, 80.0]));
        assert_eq!(value["traces"][1]["name"], "Gas");
        assert_eq!(value["traces"][1]["marker"]["color"], "#ff7f0e");
        assert_eq!(value["layout"]["barmode"], "group");
        assert_eq!(
            value["layout"]["title"]["text"],
            "Zonal Energy Usage by Fuel Type"
        );
    }

    #[test]
    fn mismatched_lengths_are_truncated() {
        let chart = zones_chart(usage(json!({
            "electricity_usage": { "labels": ["Zone A", "Zone B", "Zone C"], "data": [1.0] }
        })));

        let Trace::Series(electricity) = &chart.traces()[0] else {
            panic!("expected a series trace");
        };
        let Trace::Series(gas) = &chart.traces()[1] else {
            panic!("expected a series trace");
        };

        assert_eq!(electricity.x(), ["Zone A"]);
        assert!(gas.x().is_empty());
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zones.json");
        fs::write(&path, "{ \"gas_usage\": ").unwrap();

        assert!(matches!(ZonalUsage::read(&path), Err(CliError::Json(_))));
    }
}
