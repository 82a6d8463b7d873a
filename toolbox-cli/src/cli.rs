use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{CustomType, Text};

use toolbox_core::clock::WorldClock;
use toolbox_core::config::Config;
use toolbox_core::curing::{self, CrackingRisk, TemperatureBand};
use toolbox_core::engineering::{self, Slope};
use toolbox_core::fx::{CachedRates, YahooChartSource};
use toolbox_core::model::CuringInputs;
use toolbox_core::weather::{WeatherError, WeatherProvider, WttrProvider};
use toolbox_core::{convert, lookup, report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "toolbox", version, about = "Daily Toolbox - field engineering CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Set defaults interactively (location, currency pair, fallback rate).
    Configure,

    /// Fetch current weather and run the concrete curing analysis.
    Weather {
        /// Location name or ZIP code; falls back to the configured default.
        location: Option<String>,
    },

    /// Run the curing analysis on manual inputs, no network.
    Curing {
        /// Air temperature in °F.
        #[arg(long, default_value_t = 75.0)]
        temp_f: f64,

        /// Relative humidity in percent.
        #[arg(long, default_value_t = 50.0)]
        humidity: f64,

        /// Wind speed in mph.
        #[arg(long, default_value_t = 5.0)]
        wind: f64,
    },

    /// Show the exchange rate and convert an amount. Fetches live; the
    /// hourly rate cache only spans a single process, so a one-shot
    /// invocation always queries the provider once.
    Rate {
        /// USD amount to convert at the quoted rate.
        #[arg(long)]
        usd: Option<f64>,
    },

    /// Unit conversions.
    #[command(subcommand)]
    Convert(ConvertCommand),

    /// Pipe slope drop over a run.
    Slope {
        /// Run length in feet.
        length_ft: f64,

        /// Slope per foot: 1/8, 1/4, 1/2 or 1.
        #[arg(default_value = "1/4")]
        slope: Slope,
    },

    /// Cable tray fill ratio against the 40% limit.
    Tray {
        /// Tray width in inches.
        #[arg(long)]
        width: f64,

        /// Tray depth in inches.
        #[arg(long)]
        depth: f64,

        /// Cable outside diameter in inches.
        #[arg(long)]
        od: f64,

        /// Number of cables.
        #[arg(long)]
        count: u32,
    },

    /// Crane load moment for a pick.
    Crane {
        /// Load weight in lbs.
        #[arg(long)]
        weight: f64,

        /// Working radius in feet.
        #[arg(long)]
        radius: f64,
    },

    /// Reference tables: rebar, bolts, acronyms, radio terms.
    #[command(subcommand)]
    Lookup(LookupCommand),

    /// Generate routine site correspondence.
    #[command(subcommand)]
    Report(ReportCommand),

    /// Site (US Eastern) and home (Korea) wall clocks.
    Time,
}

#[derive(Debug, Subcommand)]
pub enum ConvertCommand {
    /// Millimeters to feet and inches.
    MmFt { mm: f64 },
    /// Feet to millimeters.
    FtMm { ft: f64 },
    /// Cubic meters to cubic yards.
    M3Yd3 { m3: f64 },
    /// Cubic yards to cubic meters.
    Yd3M3 { yd3: f64 },
    /// Fahrenheit to Celsius.
    FC { f: f64 },
    /// Celsius to Fahrenheit.
    CF { c: f64 },
}

#[derive(Debug, Subcommand)]
pub enum LookupCommand {
    /// Rebar size by US (#5) or KR (D16) designation; no argument lists all.
    Rebar { designation: Option<String> },

    /// Wrench guidance for a bolt size ("1/2 inch", "M12").
    Bolt { size: String },

    /// Construction acronym (RFI, CO, NTP, TBM).
    Acronym { abbr: String },

    /// Radio shorthand ("10-4", "Copy that").
    Radio { term: String },
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Notice of delay for an item.
    Delay { item: String },

    /// Inspection request for a completed item.
    Inspection { item: String },

    /// Daily work report for today.
    Daily { work: String },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Weather { location } => show_weather(location.as_deref()).await,
            Command::Curing { temp_f, humidity, wind } => {
                let inputs = CuringInputs {
                    temperature_f: temp_f,
                    humidity_pct: humidity,
                    wind_mph: wind,
                };
                print_analysis(&inputs)
            }
            Command::Rate { usd } => show_rate(usd).await,
            Command::Convert(cmd) => {
                run_convert(cmd);
                Ok(())
            }
            Command::Slope { length_ft, slope } => {
                let drop = engineering::slope_drop_in(length_ft, slope);
                println!(
                    "Drop over {length_ft:.1} ft at {} per ft: {drop:.2} in ({:.1} mm)",
                    slope.label(),
                    convert::in_to_mm(drop),
                );
                Ok(())
            }
            Command::Tray { width, depth, od, count } => {
                let fill = engineering::tray_fill_pct(width, depth, od, count);
                let verdict = if engineering::tray_fill_passes(fill) {
                    "Pass"
                } else {
                    "Overfilled"
                };
                println!(
                    "Fill ratio: {fill:.1}% (max {:.0}%) -> {verdict}",
                    engineering::TRAY_FILL_LIMIT_PCT
                );
                Ok(())
            }
            Command::Crane { weight, radius } => {
                let moment = engineering::load_moment(weight, radius);
                println!("Load moment: {moment:.0} lbs-ft");
                Ok(())
            }
            Command::Lookup(cmd) => {
                run_lookup(cmd);
                Ok(())
            }
            Command::Report(cmd) => {
                run_report(cmd);
                Ok(())
            }
            Command::Time => {
                let clock = WorldClock::now();
                println!("Site (ET):   {}", clock.site.format("%H:%M"));
                println!("Korea (KST): {}", clock.home.format("%H:%M"));
                Ok(())
            }
        }
    }
}

async fn show_weather(location: Option<&str>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let location = config.resolve_location(location)?;

    let provider = WttrProvider::default();
    let reading = match provider.current(location).await {
        Ok(reading) => reading,
        Err(WeatherError::EmptyLocation) => {
            eprintln!("Location must not be empty.");
            return Ok(());
        }
        Err(err) => {
            // Lookup failures are expected operation, not a crash.
            eprintln!("Location not found. Check spelling. ({err})");
            return Ok(());
        }
    };

    println!("Weather for {location}:");
    println!(
        "  Temp: {:.1} °F ({:.1} °C)   Humidity: {:.0} %   Wind: {:.1} mph",
        reading.temperature_f,
        reading.temperature_c(),
        reading.humidity_pct,
        reading.wind_mph,
    );

    let mut inputs = CuringInputs::default();
    inputs.apply(&reading);
    print_analysis(&inputs)
}

fn print_analysis(inputs: &CuringInputs) -> anyhow::Result<()> {
    let band = TemperatureBand::classify_f(inputs.temperature_f);
    println!("Temperature check: {band}");
    println!("  {}", band.advice());

    let rate = curing::evaporation_rate(
        inputs.temperature_c(),
        inputs.humidity_pct,
        inputs.wind_mph,
    )
    .context("Evaporation estimate failed")?;
    let risk = CrackingRisk::classify(rate);

    println!("Evaporation rate: {rate:.3} lb/ft²/hr -> {risk}");
    println!("  {}", risk.advice());

    Ok(())
}

async fn show_rate(usd: Option<f64>) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut rates = CachedRates::new(YahooChartSource::default(), config.fx.cache_ttl());

    let (rate, live) = match rates.rate(&config.fx.ticker).await {
        Ok(rate) => (rate, true),
        Err(err) => {
            eprintln!("Live rate unavailable ({err}); using fallback.");
            (config.fx.fallback_rate, false)
        }
    };

    let tag = if live { "" } else { " (fallback)" };
    println!("USD/KRW: {rate:.1}{tag}");

    if let Some(usd) = usd {
        println!("${usd:.2} = {:.0} KRW", usd * rate);
    }

    Ok(())
}

fn run_convert(cmd: ConvertCommand) {
    match cmd {
        ConvertCommand::MmFt { mm } => {
            let (ft, inches) = convert::mm_to_ft_in(mm);
            println!("{mm:.1} mm = {:.2} ft ({ft:.0} ft {inches:.1} in)", convert::mm_to_ft(mm));
        }
        ConvertCommand::FtMm { ft } => {
            println!("{ft:.2} ft = {:.0} mm", convert::ft_to_mm(ft));
        }
        ConvertCommand::M3Yd3 { m3 } => {
            println!("{m3:.2} m³ = {:.2} yd³", convert::m3_to_yd3(m3));
        }
        ConvertCommand::Yd3M3 { yd3 } => {
            println!("{yd3:.2} yd³ = {:.2} m³", convert::yd3_to_m3(yd3));
        }
        ConvertCommand::FC { f } => {
            println!("{f:.1} °F = {:.1} °C", convert::f_to_c(f));
        }
        ConvertCommand::CF { c } => {
            println!("{c:.1} °C = {:.1} °F", convert::c_to_f(c));
        }
    }
}

fn run_lookup(cmd: LookupCommand) {
    match cmd {
        LookupCommand::Rebar { designation: Some(d) } => match lookup::rebar(&d) {
            Some(r) => println!("{} = {} ({:.1} mm)", r.us, r.kr, r.diameter_mm),
            None => println!("Unknown rebar size '{d}'."),
        },
        LookupCommand::Rebar { designation: None } => {
            for r in lookup::REBAR_SIZES {
                println!("{:3} = {} ({:.1} mm)", r.us, r.kr, r.diameter_mm);
            }
        }
        LookupCommand::Bolt { size } => match lookup::bolt_series(&size) {
            Some(series) => println!("{}", lookup::wrench_guidance(series)),
            None => println!("Unrecognized bolt size '{size}'."),
        },
        LookupCommand::Acronym { abbr } => match lookup::acronym(&abbr) {
            Some(full) => println!("{} = {full}", abbr.to_uppercase()),
            None => println!("Unknown acronym '{abbr}'."),
        },
        LookupCommand::Radio { term } => match lookup::radio_term(&term) {
            Some(meaning) => println!("{term}: {meaning}"),
            None => println!("Unknown radio term '{term}'."),
        },
    }
}

fn run_report(cmd: ReportCommand) {
    let body = match cmd {
        ReportCommand::Delay { item } => report::delay_notice(&item),
        ReportCommand::Inspection { item } => report::inspection_request(&item),
        ReportCommand::Daily { work } => {
            report::daily_report(chrono::Utc::now().date_naive(), &work)
        }
    };
    println!("{body}");
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let location = Text::new("Default weather location (blank to clear):")
        .with_initial_value(config.default_location.as_deref().unwrap_or(""))
        .prompt()
        .context("Failed to read location")?;
    config.default_location =
        if location.trim().is_empty() { None } else { Some(location.trim().to_string()) };

    config.fx.ticker = Text::new("Currency pair ticker:")
        .with_initial_value(&config.fx.ticker)
        .prompt()
        .context("Failed to read ticker")?;

    config.fx.fallback_rate = CustomType::<f64>::new("Fallback rate (per USD):")
        .with_default(config.fx.fallback_rate)
        .with_error_message("Enter a number")
        .prompt()
        .context("Failed to read fallback rate")?;

    config.save()?;
    println!("Saved {}", Config::config_file_path()?.display());

    Ok(())
}
