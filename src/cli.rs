//! Command-line interface components.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::archive::{ArchiveDecoder, MonthAnchor};
use crate::config::DecoderConfig;
use crate::models::{DailyWeatherData, UnitSystem};

#[derive(Parser, Debug)]
#[command(name = "wlk_reader")]
#[command(about = "Decode a monthly WeatherLink .wlk archive into daily summaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to a monthly archive file named YYYY-MM.wlk
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Month covered by the file (YYYY-MM), overriding the file name
    #[arg(long, value_parser = parse_month)]
    pub month: Option<MonthAnchor>,

    /// Convert readings to metric units
    #[arg(long)]
    pub metric: bool,

    /// Only include data at or after this time (YYYY-MM-DD[ HH:MM[:SS]])
    #[arg(long, value_parser = parse_datetime)]
    pub from: Option<NaiveDateTime>,

    /// Only include data before this time (YYYY-MM-DD[ HH:MM[:SS]])
    #[arg(long, value_parser = parse_datetime)]
    pub to: Option<NaiveDateTime>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Args {
    /// Get the log level from verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Build the decoder configuration from the flags
    pub fn decoder_config(&self) -> DecoderConfig {
        let unit_system = if self.metric {
            UnitSystem::Metric
        } else {
            UnitSystem::Imperial
        };
        DecoderConfig::default()
            .with_unit_system(unit_system)
            .with_range(self.from, self.to)
    }
}

fn parse_month(value: &str) -> std::result::Result<MonthAnchor, String> {
    MonthAnchor::parse(value).ok_or_else(|| format!("expected YYYY-MM, got '{}'", value))
}

/// Parse a date or date-time; a bare date means midnight
pub fn parse_datetime(value: &str) -> std::result::Result<NaiveDateTime, String> {
    let value = value.trim();
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| {
            format!(
                "Invalid datetime '{}' (expected 'YYYY-MM-DD', 'YYYY-MM-DD HH:MM' or 'YYYY-MM-DD HH:MM:SS')",
                value
            )
        })
}

/// Set up tracing output on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wlk_reader={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Format one line per day
pub fn format_day(day: &DailyWeatherData, unit_system: UnitSystem) -> String {
    let (temp_unit, rain_unit) = match unit_system {
        UnitSystem::Imperial => ("°F", "in"),
        UnitSystem::Metric => ("°C", "mm"),
    };
    let fmt = |value: Option<f64>| match value {
        Some(v) => format!("{:.1}", v),
        None => "--".to_string(),
    };

    let summary = &day.summary;
    format!(
        "{}  records={:<4} hi={}{} lo={}{} rain={}{}",
        summary.date,
        day.records.len(),
        fmt(summary.outside_temperature.high.value),
        temp_unit,
        fmt(summary.outside_temperature.low.value),
        temp_unit,
        fmt(summary.daily_rain),
        rain_unit
    )
}

/// Load a whole archive file into memory
pub fn read_archive(path: &Path) -> crate::Result<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Main command runner
///
/// Completed days are printed even when the file fails part way through; the
/// structural error is then returned.
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    let config = args.decoder_config();
    config.validate()?;

    let anchor = match args.month {
        Some(anchor) => anchor,
        None => MonthAnchor::from_file_name(&args.file)?,
    };

    let bytes = read_archive(&args.file)
        .with_context(|| format!("Failed to read archive {}", args.file.display()))?;
    info!("Read {} bytes from {}", bytes.len(), args.file.display());

    let result = ArchiveDecoder::new(config.clone()).decode(&bytes, anchor);
    for day in &result.days {
        println!("{}", format_day(day, config.unit_system));
    }

    info!(
        "{} of {} populated days emitted, {} interval records",
        result.stats.days_decoded, result.stats.populated_days, result.stats.intervals_decoded
    );

    if let Some(error) = result.error {
        return Err(error).with_context(|| format!("Failed to decode {}", args.file.display()));
    }
    Ok(())
}
