use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jyotish_chart::{BirthChart, ChartBuilder};
use jyotish_config::CoreConfig;
use jyotish_ephemeris::AnalyticEphemeris;
use jyotish_session::{CurrentSnapshot, CurrentStateService};
use jyotish_time::{Instant, SystemClock, TimeSource};
use jyotish_vedic_base::{ActiveChain, DashaLevel, DashaPeriod, GeoCoordinate, deg_to_dms, resolve};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyotish", about = "Vedic birth chart and dasha CLI")]
struct Cli {
    /// TOML config file (defaults are used when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct BirthArgs {
    /// Birth time, RFC 3339 with offset (e.g. 1990-04-12T06:30:00+05:30)
    #[arg(long)]
    date: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Natal chart: ascendant, houses and planet placements
    Chart {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Vimshottari dasha periods and the chain active at an instant
    Dasha {
        #[command(flatten)]
        birth: BirthArgs,
        /// Instant to evaluate (RFC 3339 with offset); defaults to now
        #[arg(long)]
        at: Option<String>,
        /// Also list the antardashas of the active mahadasha
        #[arg(long)]
        antardashas: bool,
    },
    /// Transiting positions and active dasha for a chart
    Transits {
        #[command(flatten)]
        birth: BirthArgs,
        /// Instant to evaluate (RFC 3339 with offset); defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Sign, nakshatra and pada of a sidereal longitude
    Resolve {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref());
    debug!(convention = %config.convention().tag(), "configuration ready");

    match cli.command {
        Commands::Chart { birth } => {
            let chart = build_chart(&config, &birth);
            let summary = chart.summary();
            if cli.json {
                print_json(&summary);
            } else {
                print!("{summary}");
            }
        }

        Commands::Dasha {
            birth,
            at,
            antardashas,
        } => {
            let chart = build_chart(&config, &birth);
            let at = at.map_or_else(|| SystemClock.now(), |s| require_instant(&s));
            let tree = chart.dasha();
            let chain = tree.active_chain(&at);
            if cli.json {
                print_json(&DashaReport {
                    balance_years: tree.balance().balance_years(),
                    mahadashas: tree.mahadashas(),
                    active: chain.as_ref(),
                });
                return;
            }

            let balance = tree.balance();
            println!(
                "Moon in {} ({:.2}% elapsed): {} balance {:.4} years",
                balance.nakshatra.name(),
                balance.elapsed_fraction * 100.0,
                balance.lord,
                balance.balance_years()
            );
            println!();
            for md in tree.mahadashas() {
                print_period(md, "");
            }
            match &chain {
                Some(c) => {
                    println!();
                    println!("Active at {at}: {}", c.label());
                    if antardashas {
                        let md_idx = tree
                            .mahadashas()
                            .iter()
                            .position(|p| p == &c.mahadasha)
                            .unwrap_or_default();
                        for ad in tree.children(DashaLevel::Mahadasha, md_idx) {
                            print_period(ad, "  ");
                        }
                    }
                }
                None => println!("\n{at} is outside the 120-year cycle"),
            }
        }

        Commands::Transits { birth, at } => {
            let chart = build_chart(&config, &birth);
            let service = current_state_service(&config);
            let at = at.map_or_else(|| service.now(), |s| require_instant(&s));
            let snapshot = match service.snapshot_at(&chart, &at) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Cannot evaluate transits: {e}");
                    std::process::exit(1);
                }
            };
            if cli.json {
                print_json(&snapshot);
            } else {
                print_transits(&chart, &snapshot);
            }
        }

        Commands::Resolve { lon } => {
            let pos = resolve(lon);
            if cli.json {
                print_json(&pos);
            } else {
                println!(
                    "{} ({}) {} - {} pada {} ({:.4} deg in nakshatra)",
                    pos.rashi.name(),
                    pos.rashi.western_name(),
                    deg_to_dms(pos.degree_in_sign),
                    pos.nakshatra.name(),
                    pos.pada,
                    pos.degrees_in_nakshatra
                );
            }
        }
    }
}

#[derive(Serialize)]
struct DashaReport<'a> {
    balance_years: f64,
    mahadashas: &'a [DashaPeriod],
    active: Option<&'a ActiveChain>,
}

fn load_config(path: Option<&PathBuf>) -> CoreConfig {
    CoreConfig::load_or_default(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_instant(s: &str) -> Instant {
    Instant::parse(s).unwrap_or_else(|e| {
        eprintln!("Invalid instant: {e}");
        std::process::exit(1);
    })
}

fn require_location(lat: f64, lon: f64) -> GeoCoordinate {
    GeoCoordinate::new(lat, lon).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn analytic_ephemeris(config: &CoreConfig) -> AnalyticEphemeris {
    let window = config.validity_window().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    AnalyticEphemeris::new(window, config.convention().node_mode)
}

fn build_chart(config: &CoreConfig, birth: &BirthArgs) -> BirthChart {
    let instant = require_instant(&birth.date);
    let location = require_location(birth.lat, birth.lon);
    let builder = ChartBuilder::new(analytic_ephemeris(config), config.convention());
    builder.build(&instant, &location).unwrap_or_else(|e| {
        eprintln!("Cannot build chart ({:?}): {e}", e.kind());
        std::process::exit(1);
    })
}

fn current_state_service(config: &CoreConfig) -> CurrentStateService {
    CurrentStateService::from_config(config).unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("Cannot serialize output: {e}");
            std::process::exit(1);
        }
    }
}

fn print_period(p: &DashaPeriod, indent: &str) {
    let fmt = |r: Result<Instant, _>| match r {
        Ok(i) => i.utc().format("%Y-%m-%d").to_string(),
        Err(_) => "?".to_string(),
    };
    println!(
        "{indent}{:<8} {} .. {}  ({:.2} y)",
        p.lord.name(),
        fmt(p.start_instant()),
        fmt(p.end_instant()),
        p.duration_years()
    );
}

fn print_transits(chart: &BirthChart, snapshot: &CurrentSnapshot) {
    println!("Transits at {}", snapshot.at);
    for (graha, p) in &snapshot.transits {
        let z = p.zodiac();
        println!(
            "{:<8} {:<10} {:>14}  natal H{:<2}  {}{}",
            graha.name(),
            z.rashi.name(),
            deg_to_dms(z.degree_in_sign).to_string(),
            snapshot.transit_house(chart, *graha).unwrap_or_default(),
            z.nakshatra.name(),
            if p.is_retrograde { "  (R)" } else { "" }
        );
    }
    match &snapshot.active_dasha {
        Some(chain) => println!("\nDasha: {}", chain.label()),
        None => println!("\nDasha: outside the 120-year cycle"),
    }
}
