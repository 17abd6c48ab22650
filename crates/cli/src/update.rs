use std::fmt::Display;

use ecodash_vis::chart::Chart;
use ecodash_vis::render::RenderSink;
use log::debug;
use log::error;

/// Identifies one issued chart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Ticket(u64);

/// A monotonically increasing sequence of request tickets.
#[derive(Debug, Default)]
pub(crate) struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Applied {
    Rendered,
    Stale,
    Failed,
}

/// The state of one chart across updates: the last chart handed to the
/// sink and the tickets of the requests issued for it.
#[derive(Debug, Default)]
pub(crate) struct ChartState {
    sequence: RequestSequence,
    chart: Option<Chart>,
}

impl ChartState {
    pub fn new() -> ChartState {
        Self::default()
    }

    /// Issues a ticket for a new request, making every earlier one stale.
    pub fn issue(&mut self) -> Ticket {
        self.sequence.issue()
    }

    /// The last chart that was rendered.
    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    /// Renders the outcome of the request with `ticket`.
    ///
    /// Outcomes of stale requests and failed requests leave both the state
    /// and the sink as they were.
    pub fn apply<E, S>(
        &mut self,
        ticket: Ticket,
        outcome: Result<Chart, E>,
        sink: &mut S,
    ) -> Applied
    where
        E: Display,
        S: RenderSink + ?Sized,
    {
        if !self.sequence.is_latest(ticket) {
            debug!("Discarding the response to request {ticket:?}; a newer request was issued.");
            return Applied::Stale;
        }

        let chart = match outcome {
            Ok(chart) => chart,
            Err(error) => {
                match self.chart {
                    Some(ref previous) => error!(
                        "Updating the chart failed; keeping the `{}` chart. {error}",
                        previous.mount()
                    ),
                    None => error!("Updating the chart failed; no chart was rendered yet. {error}"),
                }
                return Applied::Failed;
            }
        };

        if let Err(error) = sink.new_plot(&chart) {
            error!("Rendering the `{}` chart failed. {error}", chart.mount());
            return Applied::Failed;
        }

        self.chart = Some(chart);
        Applied::Rendered
    }
}

#[cfg(test)]
mod tests {
    use ecodash_vis::chart::layout::Layout;
    use ecodash_vis::error::VisError;
    use ecodash_vis::render::page::HtmlPage;

    use super::*;

    fn chart(title: &str) -> Chart {
        Chart::new("energyChartDiv", Vec::new(), Layout::titled(title))
    }

    struct BrokenSink;

    impl RenderSink for BrokenSink {
        fn new_plot(&mut self, _chart: &Chart) -> ecodash_vis::error::Result<()> {
            Err(VisError::Io(std::io::Error::other("disk full")))
        }
    }

    #[test]
    fn tickets_increase_and_only_the_last_is_latest() {
        let mut sequence = RequestSequence::default();

        let first = sequence.issue();
        let second = sequence.issue();

        assert!(first < second);
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
    }

    #[test]
    fn latest_outcome_is_rendered() {
        let mut state = ChartState::new();
        let mut page = HtmlPage::new("ecodash");

        let ticket = state.issue();
        let applied = state.apply::<String, _>(ticket, Ok(chart("Energy Usage")), &mut page);

        assert_eq!(applied, Applied::Rendered);
        assert_eq!(state.chart(), Some(&chart("Energy Usage")));
        assert_eq!(page.chart("energyChartDiv"), Some(&chart("Energy Usage")));
    }

    #[test]
    fn stale_outcome_arriving_late_is_discarded() {
        let mut state = ChartState::new();
        let mut page = HtmlPage::new("ecodash");

        let slow = state.issue();
        let fast = state.issue();

        let fast_applied = state.apply::<String, _>(fast, Ok(chart("fast")), &mut page);
        let slow_applied = state.apply::<String, _>(slow, Ok(chart("slow")), &mut page);

        assert_eq!(fast_applied, Applied::Rendered);
        assert_eq!(slow_applied, Applied::Stale);
        assert_eq!(page.chart("energyChartDiv"), Some(&chart("fast")));
    }

    #[test]
    fn failed_outcome_keeps_the_previous_chart() {
        let mut state = ChartState::new();
        let mut page = HtmlPage::new("ecodash");

        let first = state.issue();
        state.apply::<String, _>(first, Ok(chart("first")), &mut page);

        let second = state.issue();
        let applied = state.apply(second, Err("connection reset"), &mut page);

        assert_eq!(applied, Applied::Failed);
        assert_eq!(state.chart(), Some(&chart("first")));
        assert_eq!(page.chart("energyChartDiv"), Some(&chart("first")));
    }

    #[test]
    fn failure_before_any_render_leaves_no_chart() {
        let mut state = ChartState::new();
        let mut page = HtmlPage::new("ecodash");

        let ticket = state.issue();
        let applied = state.apply(ticket, Err("timed out"), &mut page);

        assert_eq!(applied, Applied::Failed);
        assert_eq!(state.chart(), None);
        assert!(page.charts().is_empty());
    }

    #[test]
    fn sink_failure_keeps_the_previous_state() {
        let mut state = ChartState::new();

        let ticket = state.issue();
        let applied = state.apply::<String, _>(ticket, Ok(chart("first")), &mut BrokenSink);

        assert_eq!(applied, Applied::Failed);
        assert_eq!(state.chart(), None);
    }
}
