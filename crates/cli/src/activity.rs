use std::fs;
use std::path::Path;

use chrono::Local;
use chrono::NaiveDate;
use ecodash_series::activity::ActivityData;
use ecodash_series::activity::parse_series;
use ecodash_series::merge::MergedSeries;
use ecodash_series::observation::RawObservation;
use ecodash_vis::chart::Chart;
use ecodash_vis::chart::layout::Axis;
use ecodash_vis::chart::layout::HoverMode;
use ecodash_vis::chart::layout::Layout;
use ecodash_vis::chart::trace::SeriesTrace;
use ecodash_vis::render::RenderSink;
use ecodash_vis::render::page::HtmlPage;
use log::info;
use log::warn;

use crate::cli::ActivityArgs;
use crate::cli::PathExt;
use crate::controls::ActivityControls;
use crate::error::CliError;
use crate::view::PAGE_TITLE;
use crate::view::write_page;

const MOUNT: &str = "mainChart";

pub(crate) fn activity(args: ActivityArgs) -> Result<(), CliError> {
    let output_path = args.output.output_path.clone().or_current_dir()?;

    let data = ActivityData {
        walking: read_series("walking", args.walking.as_deref()),
        cycling: read_series("cycling", args.cycling.as_deref()),
        avg_walking: read_series("average walking", args.avg_walking.as_deref()),
        avg_cycling: read_series("average cycling", args.avg_cycling.as_deref()),
    };

    info!(
        "ecodash renders the {mode} activity for range `{range}`",
        mode = args.metric_mode(),
        range = args.selected_range()
    );

    let chart = activity_chart(&data, &args, Local::now().date_naive());

    let mut page = HtmlPage::new(PAGE_TITLE);
    page.new_plot(&chart)?;
    write_page(&page, &output_path)
}

/// Builds the chart of the user's series against the average series.
pub(crate) fn activity_chart<C>(data: &ActivityData, controls: &C, today: NaiveDate) -> Chart
where
    C: ActivityControls + ?Sized,
{
    let mode = controls.metric_mode();
    let range = controls.selected_range();
    let merged = MergedSeries::build(data, mode, range, today);

    let user = SeriesTrace::line(merged.labels.user, &merged.user)
        .color(merged.colors.user)
        .fill_to_zero(merged.fills.user);
    let comparison = SeriesTrace::line(merged.labels.comparison, &merged.comparison)
        .color(merged.colors.comparison)
        .fill_to_zero(merged.fills.comparison);

    let value_axis = Axis::titled("Value")
        .from_zero()
        .grid_color("rgba(0,0,0,0.05)");

    let layout = Layout::default()
        .x_axis(Axis::titled("Date").without_grid())
        .y_axis(value_axis)
        .with_legend_on_top()
        .hover_mode(HoverMode::XUnified)
        .auto_size();

    Chart::new(MOUNT, vec![user.into(), comparison.into()], layout)
}

fn read_series(name: &str, path: Option<&Path>) -> Vec<RawObservation> {
    let blob = path.and_then(|path| match fs::read_to_string(path) {
        Ok(blob) => Some(blob),
        Err(error) => {
            warn!(
                "Could not read the {name} series from `{}`: {error}",
                path.display()
            );
            None
        }
    });

    parse_series(name, blob.as_deref())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use ecodash_series::mode::MetricMode;
    use ecodash_series::range::RangeFilter;
    use ecodash_vis::chart::trace::Trace;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Controls(MetricMode, RangeFilter);

    impl ActivityControls for Controls {
        fn metric_mode(&self) -> MetricMode {
            self.0
        }

        fn selected_range(&self) -> RangeFilter {
            self.1
        }
    }

    fn series(trace: &Trace) -> &SeriesTrace {
        match trace {
            Trace::Series(series) => series,
            Trace::Passthrough(_) => panic!("expected a series trace"),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
    }

    #[test]
    fn steps_chart_aligns_user_and_average() {
        let data = ActivityData {
            walking: vec![
                RawObservation::steps("2024-01-01", 100.0).with_eco(1.0),
                RawObservation::steps("2024-01-03", 300.0),
            ],
            avg_walking: vec![RawObservation::steps("2024-01-02", 150.0)],
            ..ActivityData::default()
        };

        let controls = Controls(MetricMode::Steps, RangeFilter::All);
        let chart = activity_chart(&data, &controls, today());
        let user = series(&chart.traces()[0]);
        let average = series(&chart.traces()[1]);

        assert_eq!(chart.mount(), "mainChart");
        assert_eq!(user.name(), "Your Steps");
        assert_eq!(user.x(), ["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert_eq!(user.y(), [100.0, 0.0, 300.0]);
        assert_eq!(average.name(), "Average Steps");
        assert_eq!(average.y(), [0.0, 150.0, 0.0]);
        assert_eq!(
            user.text().map(|t| t[0].as_str()),
            Some("Your Steps: 100 (Eco Points: 1)")
        );
        assert_eq!(
            average.text().map(|t| t[1].as_str()),
            Some("Average Steps: 150")
        );
    }

    #[test]
    fn cycling_chart_for_the_last_week() {
        let data = ActivityData {
            cycling: vec![
                RawObservation::distance("2023-12-01", 20.0),
                RawObservation::distance("2024-01-09", 5.5),
            ],
            avg_cycling: vec![RawObservation::distance("2024-01-04", 4.0)],
            ..ActivityData::default()
        };

        let controls = Controls(MetricMode::Cycling, RangeFilter::LastDays(7));
        let chart = activity_chart(&data, &controls, today());
        let user = series(&chart.traces()[0]);

        assert_eq!(user.name(), "Your Cycling Distance");
        assert_eq!(user.x(), ["2024-01-04", "2024-01-09"]);
        assert_eq!(user.y(), [0.0, 5.5]);
    }

    #[test]
    fn missing_and_malformed_files_give_an_empty_chart() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("walking.json");
        fs::write(&broken, "[{\"date\": ").unwrap();

        let data = ActivityData {
            walking: read_series("walking", Some(&broken)),
            avg_walking: read_series("average walking", Some(&dir.path().join("missing.json"))),
            ..ActivityData::default()
        };

        let controls = Controls(MetricMode::Steps, RangeFilter::All);
        let chart = activity_chart(&data, &controls, today());

        assert!(series(&chart.traces()[0]).x().is_empty());
        assert!(series(&chart.traces()[1]).y().is_empty());
    }
}
