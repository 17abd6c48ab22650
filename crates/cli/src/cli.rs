use std::env;
use std::path::PathBuf;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use ecodash_series::mode::MetricMode;
use ecodash_series::range::RangeFilter;

use crate::controls::ActivityControls;
use crate::controls::EnergyControls;
use crate::energy::BackendChart;
use crate::error::CliError;
use crate::products::ExpiryFilter;
use crate::products::PriceOrder;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the energy usage chart of the selected buildings.
    Energy(BackendChartArgs),

    /// Render the CO₂ emissions chart of the selected buildings.
    Co2(BackendChartArgs),

    /// Re-render a backend chart on every control change read from stdin.
    ///
    /// Each line is a JSON object with any of the `buildings`, `energy_type`,
    /// `time_range`, `start_date` and `end_date` fields.
    Watch(WatchArgs),

    /// Render the user's steps or cycling distance next to the average.
    Activity(ActivityArgs),

    /// Render the energy usage per zone and fuel type.
    Zones(ZonesArgs),

    /// Filter and sort the product catalogue.
    Products(ProductsArgs),

    /// Save an eco voucher QR code as a PNG image.
    Voucher(VoucherArgs),
}

#[derive(Args)]
pub(crate) struct BackendArgs {
    /// The base URL of the dashboard backend.
    #[arg(long, env = "ECODASH_BACKEND_URL", default_value = "http://localhost:5000")]
    pub(crate) backend_url: String,

    /// The request timeout in seconds.
    #[arg(long, env = "ECODASH_TIMEOUT", default_value_t = 10)]
    pub(crate) timeout: u64,

    /// The session cookie of a logged in dashboard user.
    #[arg(long, env = "ECODASH_SESSION", hide_env_values = true)]
    pub(crate) session_cookie: Option<String>,
}

#[derive(Args)]
pub(crate) struct OutputArgs {
    /// Specify the directory where the `index.html` page will be created.
    /// If the output path is not specified then the current working
    /// directory is used.
    #[arg(short, long, value_parser(parse_path))]
    pub(crate) output_path: Option<PathBuf>,
}

#[derive(Args)]
pub(crate) struct BackendChartArgs {
    #[command(flatten)]
    pub(crate) backend: BackendArgs,

    #[command(flatten)]
    pub(crate) controls: EnergyControls,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args)]
pub(crate) struct WatchArgs {
    /// The chart to keep up to date.
    #[arg(short, long, value_enum, default_value_t = BackendChart::Energy)]
    pub(crate) chart: BackendChart,

    #[command(flatten)]
    pub(crate) backend: BackendArgs,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args)]
pub(crate) struct ActivityArgs {
    /// The JSON file with the user's walking entries.
    #[arg(long)]
    pub(crate) walking: Option<PathBuf>,

    /// The JSON file with the user's cycling entries.
    #[arg(long)]
    pub(crate) cycling: Option<PathBuf>,

    /// The JSON file with the average steps per day.
    #[arg(long)]
    pub(crate) avg_walking: Option<PathBuf>,

    /// The JSON file with the average cycling distance per day.
    #[arg(long)]
    pub(crate) avg_cycling: Option<PathBuf>,

    /// The activity to show: `steps` or `cycling`.
    #[arg(short, long, default_value_t = MetricMode::Steps)]
    pub(crate) mode: MetricMode,

    /// Show `all` days or only the last N days.
    #[arg(short, long, default_value_t = RangeFilter::All, allow_hyphen_values = true)]
    pub(crate) range: RangeFilter,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

impl ActivityControls for ActivityArgs {
    fn metric_mode(&self) -> MetricMode {
        self.mode
    }

    fn selected_range(&self) -> RangeFilter {
        self.range
    }
}

#[derive(Args)]
pub(crate) struct ZonesArgs {
    /// The JSON file with the electricity and gas usage per zone.
    #[arg(short, long)]
    pub(crate) file: PathBuf,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

#[derive(Args)]
pub(crate) struct ProductsArgs {
    /// The JSON file with the product list.
    #[arg(short, long)]
    pub(crate) file: PathBuf,

    /// Sort the products by price.
    #[arg(long, value_enum, default_value_t = PriceOrder::None)]
    pub(crate) price: PriceOrder,

    /// Keep the products that have expired (`soon`) or not (`later`).
    #[arg(long, value_enum, default_value_t = ExpiryFilter::All)]
    pub(crate) expiry: ExpiryFilter,

    /// Keep the products of one location, or `all`.
    #[arg(long, default_value = "all")]
    pub(crate) location: String,
}

#[derive(Args)]
pub(crate) struct VoucherArgs {
    /// The `data:image/png;base64,...` URL of the QR code.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub(crate) data_url: Option<String>,

    /// A file holding the data URL of the QR code.
    #[arg(short, long)]
    pub(crate) file: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) output: OutputArgs,
}

fn parse_path(path: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path);

    if !path.exists() {
        return Err(format!("The `{}` path does not exist.", path.display()));
    }

    if !path.is_dir() {
        return Err(format!(
            "The `{}` path must point to a directory.",
            path.display()
        ));
    }

    Ok(path)
}

pub(crate) trait PathExt {
    fn or_current_dir(self) -> Result<PathBuf, CliError>;
}

impl PathExt for Option<PathBuf> {
    fn or_current_dir(self) -> Result<PathBuf, CliError> {
        if let Some(path) = self {
            Ok(path)
        } else {
            env::current_dir().map_err(|e| CliError::Path(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_line_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn activity_rejects_unknown_mode_and_range() {
        let mode = Cli::try_parse_from(["ecodash", "activity", "--mode", "swimming"]);
        let range = Cli::try_parse_from(["ecodash", "activity", "--range", "week"]);

        assert!(mode.is_err());
        assert!(range.is_err());
    }

    #[test]
    fn activity_parses_mode_and_negative_range() {
        let args = ["ecodash", "activity", "--mode", "cycling", "--range", "-1"];
        let cli = Cli::try_parse_from(args).unwrap();

        let Commands::Activity(args) = cli.command else {
            panic!("expected the activity command");
        };

        assert_eq!(args.metric_mode(), MetricMode::Cycling);
        assert_eq!(args.selected_range(), RangeFilter::LastDays(-1));
    }

    #[test]
    fn energy_collects_repeated_buildings() {
        let args = ["ecodash", "energy", "-b", "Library", "--building", "Gym"];
        let dates = ["--start-date", "2024-01-01"];
        let cli = Cli::try_parse_from(args.into_iter().chain(dates)).unwrap();

        let Commands::Energy(args) = cli.command else {
            panic!("expected the energy command");
        };

        assert_eq!(args.controls.buildings, vec!["Library", "Gym"]);
        assert_eq!(args.controls.energy_type, "both");
        assert_eq!(
            args.controls.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
    }

    #[test]
    fn voucher_needs_exactly_one_source() {
        let both = ["ecodash", "voucher", "--data-url", "data:,", "--file", "qr.txt"];

        assert!(Cli::try_parse_from(["ecodash", "voucher"]).is_err());
        assert!(Cli::try_parse_from(both).is_err());
    }
}
