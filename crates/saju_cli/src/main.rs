use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use saju_base::{ALL_PILLAR_SLOTS, FourPillars};
use saju_chart::{
    BirthInput, ChartConfig, DEFAULT_UTC_OFFSET_MINUTES, FourPillarsResult, Gender, compute_chart,
    daily_reference_pillar, parse_birth_date,
};
use saju_content::{
    build_daily_fortune, build_element_bars, build_interpretation, recommend_lucky_numbers,
};
use saju_solar::{LunarDate, SolarTermTable, TableRange, global_table};
use saju_time::CivilDate;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars (사주) chart CLI")]
struct Cli {
    /// Civil clock offset from UTC in minutes (540 = KST)
    #[arg(
        long,
        global = true,
        env = "SAJU_UTC_OFFSET",
        default_value_t = DEFAULT_UTC_OFFSET_MINUTES,
        allow_negative_numbers = true
    )]
    utc_offset: i32,
    /// Solar-term table JSON to use instead of the built-in 1899-2100 table
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth date (YYYY-MM-DD)
    #[arg(long)]
    date: String,
    /// Birth time (HH:MM); omit for a three-pillar chart
    #[arg(long, default_value = "")]
    time: String,
    /// male | female (also 남/여)
    #[arg(long, default_value = "male")]
    gender: Gender,
}

#[derive(Args)]
struct DayArgs {
    /// Reference date (YYYY-MM-DD); defaults to today on the civil clock
    #[arg(long)]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a four-pillars chart
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Daily fortune for a chart
    Daily {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        day: DayArgs,
        #[arg(long)]
        json: bool,
    },
    /// Lucky numbers for a chart on a day
    Lucky {
        #[command(flatten)]
        birth: BirthArgs,
        #[command(flatten)]
        day: DayArgs,
        #[arg(long)]
        json: bool,
    },
    /// Seven-category interpretation of a chart
    Interpret {
        #[command(flatten)]
        birth: BirthArgs,
        #[arg(long)]
        json: bool,
    },
    /// Day pillar of a date
    DayPillar {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// The twelve month-opening solar terms of a year
    Terms {
        /// Gregorian year
        #[arg(long)]
        year: i32,
        #[arg(long)]
        json: bool,
    },
    /// Generate a solar-term table as JSON
    Generate {
        /// First year (inclusive)
        #[arg(long, default_value_t = 1899)]
        start: i32,
        /// Last year (inclusive)
        #[arg(long, default_value_t = 2100)]
        end: i32,
        /// Output path; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Korean lunisolar date of a Gregorian date
    Lunar {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    std::process::exit(1);
}

fn load_table(path: &Path) -> SolarTermTable {
    SolarTermTable::load(path).unwrap_or_else(|e| fail(format!("{}: {e}", path.display())))
}

fn parse_date(s: &str) -> CivilDate {
    parse_birth_date(s).unwrap_or_else(|e| fail(e))
}

fn today(utc_offset_minutes: i32) -> CivilDate {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or_else(|e| fail(format!("system clock before 1970: {e}")));
    CivilDate::from_unix_millis(millis, utc_offset_minutes)
}

fn reference_date(day: &DayArgs, config: &ChartConfig) -> CivilDate {
    match &day.today {
        Some(s) => parse_date(s),
        None => today(config.utc_offset_minutes),
    }
}

fn chart(table: &SolarTermTable, config: &ChartConfig, birth: &BirthArgs) -> FourPillarsResult {
    let input = BirthInput::parse(&birth.date, &birth.time, birth.gender).unwrap_or_else(|e| fail(e));
    compute_chart(table, config, &input).unwrap_or_else(|e| fail(e))
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => fail(e),
    }
}

fn pillar_line(pillars: &FourPillars) -> String {
    ALL_PILLAR_SLOTS
        .iter()
        .map(|&slot| pillars.get(slot).map_or_else(|| "--".to_string(), |p| p.name()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_chart(result: &FourPillarsResult) {
    let meta = &result.meta;
    let summary = &result.summary;
    println!("사주: {}", pillar_line(&result.pillars));
    println!("양력: {}", meta.solar_date_label);
    println!("음력: {} ({}년)", meta.lunar_date_label, meta.lunar_year);
    println!("별자리: {}", meta.western_zodiac);
    println!("시간: {}", meta.time_label);
    println!("성별: {}", meta.gender_label);
    println!();
    for slot in ALL_PILLAR_SLOTS {
        let Some(p) = result.pillars.get(slot) else {
            continue;
        };
        let mut extra = String::new();
        if let Some(label) = &p.month_label {
            extra = format!("  음력 {label}");
        }
        if let Some(range) = p.hour_range {
            extra = format!("  {range}");
        }
        println!(
            "{}  {} ({}{})  {}/{}  {}띠  {}{extra}",
            slot.label(),
            p.name(),
            p.stem.hanja(),
            p.branch.hanja(),
            p.stem_element().label(),
            p.branch_element().label(),
            p.animal().korean(),
            p.focus.unwrap_or(""),
        );
    }
    println!();
    let bars = build_element_bars(result)
        .iter()
        .map(|b| format!("{} {} ({}%)", b.label, b.count, b.ratio))
        .collect::<Vec<_>>()
        .join("  ");
    println!("오행: {bars}");
    println!(
        "강한 오행: {}({})  약한 오행: {}({})",
        summary.strongest.element.label(),
        summary.strongest.count,
        summary.weakest.element.label(),
        summary.weakest.count,
    );
    println!(
        "음양: 양 {} / 음 {}  {}",
        summary.polarity_counts.yang, summary.polarity_counts.yin, summary.balance_message
    );
}

/// `HH:MM` on a clock `utc_offset_minutes` east of UTC.
fn local_clock(millis: i64, utc_offset_minutes: i32) -> String {
    let minutes = (millis.div_euclid(60_000) + i64::from(utc_offset_minutes)).rem_euclid(1440);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let config = ChartConfig::default().with_utc_offset_minutes(cli.utc_offset);

    let loaded;
    let table: &SolarTermTable = match &cli.table {
        Some(path) => {
            loaded = load_table(path);
            info!(path = %path.display(), "loaded solar-term table");
            &loaded
        }
        None => global_table(),
    };
    debug!(utc_offset = config.utc_offset_minutes, range = ?table.range(), "configured");

    match cli.command {
        Commands::Chart { birth, json } => {
            let result = chart(table, &config, &birth);
            if json {
                print_json(&result);
            } else {
                print_chart(&result);
            }
        }

        Commands::Daily { birth, day, json } => {
            let result = chart(table, &config, &birth);
            let fortune = build_daily_fortune(&result, reference_date(&day, &config));
            if json {
                print_json(&fortune);
            } else {
                println!(
                    "{}  {} 일진 ({})",
                    fortune.date_label, fortune.pillar_name, fortune.element_label
                );
                println!("기운: {}", fortune.energy_text);
                println!("행동: {}", fortune.action_text);
                println!("주의: {}", fortune.caution_text);
            }
        }

        Commands::Lucky { birth, day, json } => {
            let result = chart(table, &config, &birth);
            let fortune = build_daily_fortune(&result, reference_date(&day, &config));
            let lucky = recommend_lucky_numbers(&result, &fortune);
            if json {
                print_json(&json!({
                    "date_label": fortune.date_label,
                    "pillar_name": fortune.pillar_name,
                    "numbers": lucky.numbers,
                    "bonus": lucky.bonus,
                }));
            } else {
                let numbers = lucky
                    .numbers
                    .iter()
                    .map(u8::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                println!("{} ({})", fortune.date_label, fortune.pillar_name);
                println!("번호: {numbers}  보너스: {}", lucky.bonus);
            }
        }

        Commands::Interpret { birth, json } => {
            let result = chart(table, &config, &birth);
            let categories = build_interpretation(&result);
            if json {
                print_json(&categories);
            } else {
                for c in &categories {
                    println!("[{}]", c.title);
                    println!("{}", c.description);
                    println!();
                }
            }
        }

        Commands::DayPillar { date } => {
            let (stem, branch) = daily_reference_pillar(parse_date(&date));
            println!(
                "{}{} ({}{})  {}",
                stem.korean(),
                branch.korean(),
                stem.hanja(),
                branch.hanja(),
                stem.element().label()
            );
        }

        Commands::Terms { year, json } => {
            let entries = table.year(year).unwrap_or_else(|e| fail(e));
            if json {
                print_json(entries);
            } else {
                for entry in entries {
                    let ms = entry.instant.to_unix_millis();
                    println!(
                        "{} {:<4} {}  {}  (local {} {})",
                        entry.term.hanja(),
                        entry.term.korean(),
                        entry.term.branch().korean(),
                        entry.instant,
                        CivilDate::from_unix_millis(ms, config.utc_offset_minutes),
                        local_clock(ms, config.utc_offset_minutes),
                    );
                }
            }
        }

        Commands::Generate { start, end, output } => {
            let generated = SolarTermTable::generate(TableRange::new(start, end))
                .unwrap_or_else(|e| fail(e));
            let text = generated.to_json().unwrap_or_else(|e| fail(e));
            match output {
                Some(path) => {
                    std::fs::write(&path, text)
                        .unwrap_or_else(|e| fail(format!("{}: {e}", path.display())));
                    info!(path = %path.display(), start, end, "wrote solar-term table");
                }
                None => println!("{text}"),
            }
        }

        Commands::Lunar { date, json } => {
            let lunar = LunarDate::from_civil(parse_date(&date)).unwrap_or_else(|e| fail(e));
            if json {
                print_json(&lunar);
            } else {
                println!("{lunar}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_chart() {
        let cli = Cli::try_parse_from([
            "saju", "chart", "--date", "1990-05-15", "--time", "14:30", "--gender", "여",
        ])
        .unwrap();
        assert_eq!(cli.utc_offset, DEFAULT_UTC_OFFSET_MINUTES);
        match cli.command {
            Commands::Chart { birth, json } => {
                assert_eq!(birth.date, "1990-05-15");
                assert_eq!(birth.gender, Gender::Female);
                assert!(!json);
            }
            _ => panic!("expected chart"),
        }
    }

    #[test]
    fn cli_negative_offset() {
        let cli = Cli::try_parse_from(["saju", "--utc-offset", "-300", "day-pillar", "--date", "2024-03-20"])
            .unwrap();
        assert_eq!(cli.utc_offset, -300);
    }

    #[test]
    fn cli_rejects_unknown_gender() {
        assert!(Cli::try_parse_from(["saju", "chart", "--date", "1990-05-15", "--gender", "x"]).is_err());
    }

    #[test]
    fn local_clock_wraps() {
        assert_eq!(local_clock(0, 540), "09:00");
        assert_eq!(local_clock(15 * 3_600_000, 540), "00:00");
        assert_eq!(local_clock(-60_000, 0), "23:59");
    }

    #[test]
    fn pillar_line_marks_missing_hour() {
        let input = BirthInput::parse("1990-05-15", "", Gender::Male).unwrap();
        let r = compute_chart(global_table(), &ChartConfig::default(), &input).unwrap();
        assert_eq!(pillar_line(&r.pillars), "경오 신사 경진 --");
    }
}
