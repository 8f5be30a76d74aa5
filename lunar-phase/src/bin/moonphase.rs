use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use lunar_phase::{compute_moon_phase, MoonPhaseRecord, UTC};
use std::str::FromStr;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser)]
#[command(name = "moonphase")]
#[command(about = "Lunar phase almanac for a date or range of dates")]
#[command(version)]
struct Cli {
    /// Date as ISO 8601 (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS), or "now"
    #[arg(default_value = "now")]
    date: String,

    /// Report this many consecutive days starting at the date
    #[arg(long, default_value = "1")]
    days: u32,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

fn parse_epoch(input: &str) -> Result<UTC> {
    if input.eq_ignore_ascii_case("now") {
        return Ok(UTC::now());
    }

    // Accept a bare date as midnight UTC
    let normalized = if input.len() == 10 && !input.contains('T') && !input.contains(' ') {
        format!("{}T00:00:00", input)
    } else {
        input.to_string()
    };

    UTC::from_str(&normalized).with_context(|| format!("Unrecognized date '{}'", input))
}

fn print_table_row(epoch: &UTC, record: &MoonPhaseRecord) {
    let flags = if record.is_supermoon() {
        "  (supermoon)"
    } else if record.is_micromoon() {
        "  (micromoon)"
    } else {
        ""
    };
    let special = record
        .special_name
        .map(|name| format!("  [{}]", name))
        .unwrap_or_default();

    println!(
        "{}  {}  {:<15}  {:5.1}%  age {:5.2} d  {:6.0} km  {:<11}{}{}",
        epoch.to_iso8601(),
        record.phase_name.symbol(),
        record.phase_name.as_str(),
        record.illumination_percent,
        record.age_days,
        record.distance_km,
        record.zodiac_sign.as_str(),
        special,
        flags,
    );
}

fn to_json(epoch: &UTC, record: &MoonPhaseRecord) -> serde_json::Value {
    serde_json::json!({
        "date": epoch.to_iso8601(),
        "julian_date": epoch.to_julian_date().to_f64(),
        "record": record,
        "supermoon": record.is_supermoon(),
        "micromoon": record.is_micromoon(),
        "days_until_full": record.days_until_full(),
        "days_until_new": record.days_until_new(),
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.days == 0 {
        bail!("--days must be at least 1");
    }

    let start = parse_epoch(&cli.date)?;
    let epochs: Vec<UTC> = (0..cli.days).map(|d| start.add_days(d as f64)).collect();

    match cli.format {
        OutputFormat::Table => {
            for epoch in &epochs {
                let record = compute_moon_phase(epoch);
                print_table_row(epoch, &record);
            }
        }
        OutputFormat::Json => {
            let reports: Vec<serde_json::Value> = epochs
                .iter()
                .map(|epoch| to_json(epoch, &compute_moon_phase(epoch)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(())
}
