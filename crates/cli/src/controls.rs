use chrono::NaiveDate;
use clap::Args;
use ecodash_series::mode::MetricMode;
use ecodash_series::range::RangeFilter;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;

/// Typed reads of the energy and CO₂ filter controls.
pub(crate) trait ControlState {
    fn selected_buildings(&self) -> &[String];
    fn energy_type(&self) -> &str;
    fn time_range(&self) -> &str;
    fn start_date(&self) -> Option<NaiveDate>;
    fn end_date(&self) -> Option<NaiveDate>;
}

/// Typed reads of the activity chart controls.
pub(crate) trait ActivityControls {
    fn metric_mode(&self) -> MetricMode;
    fn selected_range(&self) -> RangeFilter;
}

#[derive(Args, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub(crate) struct EnergyControls {
    /// Select a building; repeat the option to select several.
    #[arg(short, long = "building")]
    pub(crate) buildings: Vec<String>,

    /// The energy type: `electricity`, `gas` or `both`.
    #[arg(long, default_value = "both")]
    pub(crate) energy_type: String,

    /// The aggregation of the readings, for example `daily`.
    #[arg(long, default_value = "daily")]
    pub(crate) time_range: String,

    /// The first day of the readings, as `YYYY-MM-DD`.
    #[arg(long)]
    #[serde(default, deserialize_with = "empty_or_date")]
    pub(crate) start_date: Option<NaiveDate>,

    /// The last day of the readings, as `YYYY-MM-DD`.
    #[arg(long)]
    #[serde(default, deserialize_with = "empty_or_date")]
    pub(crate) end_date: Option<NaiveDate>,
}

impl Default for EnergyControls {
    fn default() -> Self {
        Self {
            buildings: Vec::new(),
            energy_type: String::from("both"),
            time_range: String::from("daily"),
            start_date: None,
            end_date: None,
        }
    }
}

impl ControlState for EnergyControls {
    fn selected_buildings(&self) -> &[String] {
        &self.buildings
    }

    fn energy_type(&self) -> &str {
        &self.energy_type
    }

    fn time_range(&self) -> &str {
        &self.time_range
    }

    fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }
}

/// The body of a backend chart request.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct ChartRequest {
    buildings: Vec<String>,
    energy_type: String,
    time_range: String,
    #[serde(serialize_with = "date_or_empty")]
    start_date: Option<NaiveDate>,
    #[serde(serialize_with = "date_or_empty")]
    end_date: Option<NaiveDate>,
}

impl ChartRequest {
    pub fn from_controls<C: ControlState + ?Sized>(controls: &C) -> ChartRequest {
        Self {
            buildings: controls.selected_buildings().to_vec(),
            energy_type: controls.energy_type().to_owned(),
            time_range: controls.time_range().to_owned(),
            start_date: controls.start_date(),
            end_date: controls.end_date(),
        }
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

// The backend treats an empty date as "not set".
fn date_or_empty<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.collect_str(&date.format(DATE_FORMAT)),
        None => serializer.serialize_str(""),
    }
}

// A cleared date picker sends an empty string.
fn empty_or_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let date = Option::<String>::deserialize(deserializer)?;

    match date.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(date) => NaiveDate::parse_from_str(date, DATE_FORMAT)
            .map(Some)
            .map_err(D::Error::custom),
    }
}
