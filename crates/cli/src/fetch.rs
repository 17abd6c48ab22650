pub(crate) mod client;
pub(crate) mod error;

use serde_json::Value;

use crate::controls::ChartRequest;
use crate::fetch::error::Result;

/// The backend endpoints serving pre-aggregated chart traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    EnergyData,
    Co2EnergyData,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::EnergyData => "get_energy_data",
            Endpoint::Co2EnergyData => "get_co2_energy_data",
        }
    }
}

/// A source of chart traces for the selected controls.
pub(crate) trait TraceSource {
    fn chart_traces(&self, endpoint: Endpoint, request: &ChartRequest) -> Result<Vec<Value>>;
}
