use chrono::NaiveDateTime;
use clap::Parser;

use schedule_grid::api::config_dto::ConfigDto;
use schedule_grid::error::{Error, Result};
use schedule_grid::loader::parser::parse_json_file;
use schedule_grid::{RenderOptions, export, generate_schedule, logger};

const TIME_FILTER_FMT: &str = "%Y-%m-%d %H:%M";

/// Lay out a conference schedule grid from a Pretalx JSON export.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Rooms export of the /rooms API endpoint
    rooms_file: String,

    /// Talk export (/talks API endpoint or schedule editor API)
    talks_file: String,

    /// Configuration file (breaks, extra sessions, video rooms, ...)
    #[arg(short, long)]
    config: Option<String>,

    /// Locale used to resolve localized names, e.g. de or en
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Keep confirmed talks only
    #[arg(long)]
    confirmed_only: bool,

    /// Keep events ending after this time, format: YYYY-MM-DD HH:MM
    #[arg(long)]
    time_from: Option<String>,

    /// Keep events starting before this time, format: YYYY-MM-DD HH:MM
    #[arg(long)]
    time_to: Option<String>,

    /// Write the laid-out grid to this CSV file
    #[arg(long)]
    csv: Option<String>,
}

fn main() {
    logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => parse_json_file::<ConfigDto>(path)?,
        None => ConfigDto::default(),
    };

    let options = RenderOptions {
        confirmed_only: args.confirmed_only,
        time_from: parse_filter_time(args.time_from.as_deref())?,
        time_to: parse_filter_time(args.time_to.as_deref())?,
    };

    let model = generate_schedule(
        &args.rooms_file,
        &args.talks_file,
        &config,
        &args.locale,
        &options,
    )?;
    model.schedule.print_summary(&model.store, &model.registry);

    if let Some(path) = &args.csv {
        export::write_schedule_csv(path, &model.schedule, &model.store, &model.registry)?;
        log::info!("Schedule grid written to {}", path);
    }

    Ok(())
}

fn parse_filter_time(value: Option<&str>) -> Result<Option<NaiveDateTime>> {
    match value {
        Some(v) => NaiveDateTime::parse_from_str(v, TIME_FILTER_FMT)
            .map(Some)
            .map_err(|source| Error::InvalidTimestamp {
                value: v.to_string(),
                source,
            }),
        None => Ok(None),
    }
}
