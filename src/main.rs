use std::fs::File;
use std::io::{
    self,
    BufReader
};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use normalprob::configuration::EngineConfiguration;
use normalprob::interval::updateevent::{
    read_events,
    UpdateEvent
};
use normalprob::math::curve::curve::Curve;
use normalprob::math::round::format_fixed;
use normalprob::presentation::report::TextSurface;
use normalprob::session::Session;

/// Probability that a standard normal variable falls in [a, b].
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON engine configuration (domain, step, default interval, rules)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// File of JSON input events, one per line; `-` reads stdin
    #[arg(short, long)]
    events: Option<String>,

    /// Move the range control to `a,b`
    #[arg(long, value_delimiter = ',', num_args = 1, allow_hyphen_values = true)]
    range: Option<Vec<f64>>,

    /// Type a value into the lower-bound field
    #[arg(short = 'a', long = "lower", allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Type a value into the upper-bound field
    #[arg(short = 'b', long = "upper", allow_hyphen_values = true)]
    upper: Option<f64>,

    /// Also print Φ(z) and φ(z) at this point
    #[arg(long, allow_hyphen_values = true)]
    at: Option<f64>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
        )
        .with_writer(io::stderr)
        .with_target(args.verbose)
        .init();

    let config = match &args.config {
        Some(path) => EngineConfiguration::from_reader(path)?,
        None => EngineConfiguration::default(),
    };
    let mut session = Session::new(config)?;
    let mut surface = TextSurface::new();
    session.render(&mut surface);

    let mut events = Vec::new();
    if let Some(range) = &args.range {
        if range.len() != 2 {
            return Err(format!("--range expects two values `a,b`, got {}", range.len()).into());
        }
        let control = session.controller().range_control();
        events.push(UpdateEvent::range(control.snap(range[0]), control.snap(range[1])));
    }
    if let Some(a) = args.lower {
        events.push(UpdateEvent::field_a(a));
    }
    if let Some(b) = args.upper {
        events.push(UpdateEvent::field_b(b));
    }
    match args.events.as_deref() {
        Some("-") => events.extend(read_events(io::stdin().lock())?),
        Some(path) => events.extend(read_events(BufReader::new(File::open(path)?))?),
        None => {}
    }

    for event in events {
        session.dispatch(event, &mut surface);
    }

    if let Some(report) = surface.last() {
        println!("{}", report);
    }

    if let Some(z) = args.at {
        let dist = session.distribution();
        println!("Φ({}) = {}", format_fixed(z, 2), format_fixed(dist.value(z), 4));
        println!("φ({}) = {}", format_fixed(z, 2), format_fixed(dist.derivative(z), 4));
    }

    Ok(())
}
