use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::sync::mpsc;
use std::sync::mpsc::Sender;
use std::thread;

use ecodash_vis::chart::Chart;
use ecodash_vis::render::page::HtmlPage;
use log::debug;
use log::error;
use log::info;
use log::warn;

use crate::cli::PathExt;
use crate::cli::WatchArgs;
use crate::controls::EnergyControls;
use crate::energy::BackendChart;
use crate::error::CliError;
use crate::fetch;
use crate::fetch::TraceSource;
use crate::fetch::client::DashboardClient;
use crate::update::Applied;
use crate::update::ChartState;
use crate::update::Ticket;
use crate::view::PAGE_TITLE;
use crate::view::write_page;

/// The most fetches of one chart that run at the same time.
pub(crate) const MAX_IN_FLIGHT: usize = 4;

enum Event {
    Change(EnergyControls),
    Response(Ticket, fetch::error::Result<Chart>),
    Closed,
}

pub(crate) fn watch(args: WatchArgs) -> Result<(), CliError> {
    let output_path = args.output.output_path.or_current_dir()?;
    let client = DashboardClient::new(&args.backend)?;
    let mut page = HtmlPage::new(PAGE_TITLE);

    info!(
        "ecodash watches control changes on stdin for the `{}` chart",
        args.chart.mount()
    );

    let input = BufReader::new(io::stdin());
    run(args.chart, &client, input, &mut page, |page| {
        write_page(page, &output_path)
    });

    Ok(())
}

/// Fetches `chart` for every control change read from `input` and renders
/// the responses in the order the changes were made. `on_render` is called
/// after every rendered response.
///
/// At most [`MAX_IN_FLIGHT`] fetches run at once. Changes arriving while
/// every slot is taken wait for a free slot, and only the newest waiting
/// change is fetched.
pub(crate) fn run<T, R, F>(
    chart: BackendChart,
    source: &T,
    input: R,
    page: &mut HtmlPage,
    mut on_render: F,
) where
    T: TraceSource + Sync + ?Sized,
    R: BufRead + Send,
    F: FnMut(&HtmlPage) -> Result<(), CliError>,
{
    let mut state = ChartState::new();
    let (sender, receiver) = mpsc::channel();

    thread::scope(|scope| {
        let reader = sender.clone();
        scope.spawn(move || read_changes(input, reader));

        let spawn_fetch = |ticket: Ticket, controls: EnergyControls| {
            let sender = sender.clone();

            scope.spawn(move || {
                let outcome = chart.fetch(source, &controls);
                // The receiver outlives every fetch thread of the scope.
                let _ = sender.send(Event::Response(ticket, outcome));
            });
        };

        let mut in_flight = 0usize;
        let mut waiting: Option<(Ticket, EnergyControls)> = None;
        let mut closed = false;

        while !closed || in_flight > 0 {
            let Ok(event) = receiver.recv() else {
                break;
            };

            match event {
                Event::Change(controls) => {
                    let ticket = state.issue();

                    if in_flight < MAX_IN_FLIGHT {
                        spawn_fetch(ticket, controls);
                        in_flight += 1;
                    } else if let Some((skipped, _)) = waiting.replace((ticket, controls)) {
                        debug!("Skipping the control change of request {skipped:?}.");
                    }
                }
                Event::Response(ticket, outcome) => {
                    in_flight -= 1;

                    if state.apply(ticket, outcome, page) == Applied::Rendered {
                        if let Err(error) = on_render(page) {
                            error!("Writing the page failed. {error}");
                        }
                    }

                    if let Some((ticket, controls)) = waiting.take() {
                        spawn_fetch(ticket, controls);
                        in_flight += 1;
                    }
                }
                Event::Closed => closed = true,
            }
        }
    });

    match state.chart() {
        Some(chart) => info!(
            "ecodash stopped watching; the `{mount}` chart shows {count} trace(s)",
            mount = chart.mount(),
            count = chart.traces().len()
        ),
        None => info!("ecodash stopped watching before any chart was rendered"),
    }
}

fn read_changes<R: BufRead>(input: R, sender: Sender<Event>) {
    for (index, line) in input.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(error) => {
                error!("Reading control changes failed. {error}");
                break;
            }
        };

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<EnergyControls>(&line) {
            Ok(controls) => {
                if sender.send(Event::Change(controls)).is_err() {
                    return;
                }
            }
            Err(error) => warn!(
                "Skipping the control change on line {}: {error}",
                index + 1
            ),
        }
    }

    let _ = sender.send(Event::Closed);
}
