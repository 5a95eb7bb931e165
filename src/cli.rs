//! Parsing command-line arguments.

use clap::{Arg, ArgAction, ArgMatches, Command, crate_version, value_parser};

use crate::application::{
    ConfigError, DEFAULT_CELL_SIZE, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, SimulationConfig,
};
use crate::domain::{Algorithm, Ruleset, Seed};

/// Parse results
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Args {
    pub config: SimulationConfig,
    /// Print generations to stdout instead of opening a window
    pub headless: bool,
}

fn command() -> Command {
    Command::new(env!("CARGO_PKG_NAME"))
        .version(crate_version!())
        .about("Renders elementary one-dimensional cellular automata")
        .long_about(
            "Renders elementary one-dimensional cellular automata.\n\
             \n\
             Each row is one generation of a Wolfram rule (0-255), starting from \
             a single live cell and stepped with wrap-around edges until the \
             window is filled.",
        )
        .arg(
            Arg::new("rule")
                .help("Ruleset number (0-255)")
                .short('r')
                .long("rule")
                .default_value("30")
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("width")
                .help("Drawing area width in pixels")
                .long("width")
                .default_value("810")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("height")
                .help("Drawing area height in pixels")
                .long("height")
                .default_value("610")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("cell-size")
                .help("Side of each cell in pixels")
                .short('c')
                .long("cell-size")
                .default_value("10")
                .value_parser(value_parser!(u32).range(1..)),
        )
        .arg(
            Arg::new("algorithm")
                .help("Stepping algorithm")
                .short('a')
                .long("algorithm")
                .default_value(Algorithm::default().name())
                .value_parser(["naive", "parallel", "bitpacked"]),
        )
        .arg(
            Arg::new("random-density")
                .help("Start from random cells with this density (0-1) instead of a single cell")
                .long("random-density")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("seed")
                .help("RNG seed for --random-density, for reproducible output")
                .long("seed")
                .requires("random-density")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("headless")
                .help("Print generations as text instead of opening a window")
                .long("headless")
                .action(ArgAction::SetTrue),
        )
}

impl Args {
    /// Parses the process arguments, exiting with usage on error
    pub fn parse() -> Result<Self, ConfigError> {
        Self::from_matches(&command().get_matches())
    }

    /// Parses an explicit argument list
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn std::error::Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches)?)
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, ConfigError> {
        let rule = *matches.get_one::<i64>("rule").unwrap_or(&30);
        let ruleset = u8::try_from(rule)
            .map(Ruleset)
            .map_err(|_| ConfigError::RulesetOutOfRange(rule))?;

        let algorithm = matches
            .get_one::<String>("algorithm")
            .and_then(|name| name.parse::<Algorithm>().ok())
            .unwrap_or_default();

        let seed = match matches.get_one::<f64>("random-density") {
            Some(&density) => Seed::Random {
                density,
                rng_seed: matches.get_one::<u64>("seed").copied(),
            },
            None => Seed::SingleCenter,
        };

        let config = SimulationConfig {
            screen_width: *matches.get_one::<u32>("width").unwrap_or(&DEFAULT_SCREEN_WIDTH),
            screen_height: *matches.get_one::<u32>("height").unwrap_or(&DEFAULT_SCREEN_HEIGHT),
            cell_size: *matches.get_one::<u32>("cell-size").unwrap_or(&DEFAULT_CELL_SIZE),
            ruleset,
            algorithm,
            seed,
        };
        config.validate()?;

        Ok(Self {
            config,
            headless: matches.get_flag("headless"),
        })
    }
}
