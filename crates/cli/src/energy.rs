use clap::ValueEnum;
use ecodash_vis::chart::Chart;
use ecodash_vis::chart::layout::Layout;
use ecodash_vis::chart::trace::Trace;
use ecodash_vis::render::RenderSink;
use ecodash_vis::render::page::HtmlPage;
use log::debug;
use log::warn;

use crate::cli::BackendChartArgs;
use crate::cli::PathExt;
use crate::controls::ChartRequest;
use crate::controls::ControlState;
use crate::error::CliError;
use crate::fetch;
use crate::fetch::Endpoint;
use crate::fetch::TraceSource;
use crate::fetch::client::DashboardClient;
use crate::update::Applied;
use crate::update::ChartState;
use crate::view::PAGE_TITLE;
use crate::view::write_page;

/// A chart whose traces are aggregated by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum BackendChart {
    Energy,
    Co2,
}

impl BackendChart {
    pub fn mount(self) -> &'static str {
        match self {
            BackendChart::Energy => "energyChartDiv",
            BackendChart::Co2 => "co2ChartDiv",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BackendChart::Energy => "Energy Usage",
            BackendChart::Co2 => "Kg CO₂ per kWh Emissions",
        }
    }

    pub fn endpoint(self) -> Endpoint {
        match self {
            BackendChart::Energy => Endpoint::EnergyData,
            BackendChart::Co2 => Endpoint::Co2EnergyData,
        }
    }

    /// Fetches the traces for `controls` and wraps them into a chart.
    pub fn fetch<T, C>(self, source: &T, controls: &C) -> fetch::error::Result<Chart>
    where
        T: TraceSource + ?Sized,
        C: ControlState + ?Sized,
    {
        let request = ChartRequest::from_controls(controls);
        let traces = source.chart_traces(self.endpoint(), &request)?;

        debug!(
            "Received {count} trace(s) for the `{mount}` chart.",
            count = traces.len(),
            mount = self.mount()
        );

        let traces = traces.into_iter().map(Trace::Passthrough).collect();
        Ok(Chart::new(self.mount(), traces, Layout::titled(self.title())))
    }
}

/// Runs one fetch-and-render cycle of `chart`.
pub(crate) fn update_chart<T, C, S>(
    chart: BackendChart,
    state: &mut ChartState,
    source: &T,
    controls: &C,
    sink: &mut S,
) -> Applied
where
    T: TraceSource + ?Sized,
    C: ControlState + ?Sized,
    S: RenderSink + ?Sized,
{
    let ticket = state.issue();
    let outcome = chart.fetch(source, controls);
    state.apply(ticket, outcome, sink)
}

pub(crate) fn render(chart: BackendChart, args: BackendChartArgs) -> Result<(), CliError> {
    let output_path = args.output.output_path.or_current_dir()?;
    let client = DashboardClient::new(&args.backend)?;

    let mut page = HtmlPage::new(PAGE_TITLE);
    let mut state = ChartState::new();

    match update_chart(chart, &mut state, &client, &args.controls, &mut page) {
        Applied::Rendered => write_page(&page, &output_path),
        Applied::Stale | Applied::Failed => {
            warn!(
                "The `{mount}` chart was not rendered; the page in `{path}` was left unchanged.",
                mount = chart.mount(),
                path = output_path.display()
            );
            Ok(())
        }
    }
}
