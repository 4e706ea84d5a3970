use clap::{ArgGroup, Parser};
use geo_along_lib::Units;

#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
#[clap(group(ArgGroup::new("mode").required(true).args(["distance", "step", "length"])))]
/// Geo Along - Find the point a given distance along a great-circle path
pub struct Settings {
    /// Path vertex as LON,LAT in decimal degrees (repeat once per vertex, in order)
    #[clap(
        short,
        long = "coord",
        value_name = "LON,LAT",
        value_parser = parse_coord,
        allow_hyphen_values = true,
        required = true
    )]
    pub coords: Vec<(f64, f64)>,

    /// Distance to travel along the path (negative values clamp to the start)
    #[clap(short, long, allow_hyphen_values = true)]
    pub distance: Option<f64>,

    /// Print points every STEP units along the path, ending with its last point
    #[clap(short, long)]
    pub step: Option<f64>,

    /// Print the total path length instead of a point
    #[clap(short, long)]
    pub length: bool,

    /// Distance units: degrees, radians, miles, kilometers, meters, nauticalmiles, feet
    #[clap(short, long, default_value = "kilometers", env = "GEO_ALONG_UNITS")]
    pub units: Units,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// What a single invocation computes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    At(f64),
    Sample(f64),
    Length,
}

impl Settings {
    /// The command selected by the mutually exclusive mode flags
    pub fn command(&self) -> Command {
        match (self.distance, self.step) {
            (Some(distance), _) => Command::At(distance),
            (None, Some(step)) => Command::Sample(step),
            (None, None) => Command::Length,
        }
    }

    /// Default log filter derived from `--verbose`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Parse a `LON,LAT` pair
fn parse_coord(value: &str) -> Result<(f64, f64), String> {
    let (lon, lat) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LON,LAT but got '{value}'"))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid longitude '{lon}': {e}"))?;
    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid latitude '{lat}': {e}"))?;
    Ok((lon, lat))
}
