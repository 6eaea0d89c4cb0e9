//! Command-line options.

use std::fmt;
use std::path::PathBuf;

use heatpath_core::Coord;
use heatpath_search::SearchConfig;

pub const USAGE: &str = "\
usage: heatpath [FILE] [options]

Find the least heat-loss route through a grid of digits.

options:
  --random RxC          search a random RxC grid instead of FILE
  --seed N              seed for --random
  --walls P             chance (0-1) of a wall cell in --random grids
  --run-limit N         at most N consecutive steps along one axis
  --start R,C           start cell (default: top-left)
  --goal R,C            goal cell (default: bottom-right)
  --max-iterations N    expansion ceiling
  --costs               also print the cost-from-start map
  --color               highlight the route
  --json                print the result as JSON
  -h, --help            show this message";

/// Where the grid comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    File(PathBuf),
    Random {
        rows: i32,
        cols: i32,
        seed: Option<u64>,
        wall_chance: f64,
    },
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub input: Input,
    pub config: SearchConfig,
    pub show_costs: bool,
    pub color: bool,
    pub json: bool,
}

/// What the command line asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Run(Options),
}

/// Errors in command-line arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// A flag that needs a value came last.
    MissingValue(String),
    /// A flag's value could not be parsed.
    InvalidValue { flag: String, value: String },
    /// An unrecognized `--flag`.
    UnknownFlag(String),
    /// More than one input file.
    ExtraArgument(String),
    /// Neither a file nor `--random` was given.
    MissingInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} needs a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
            Self::UnknownFlag(flag) => write!(f, "unknown option {flag}"),
            Self::ExtraArgument(arg) => write!(f, "unexpected argument {arg}"),
            Self::MissingInput => write!(f, "no grid file given (or use --random)"),
        }
    }
}

impl std::error::Error for CliError {}

/// Parse arguments (without the program name).
pub fn parse<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut file = None;
    let mut random = None;
    let mut seed = None;
    let mut wall_chance = 0.0;
    let mut config = SearchConfig::default();
    let mut show_costs = false;
    let mut color = false;
    let mut json = false;

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| CliError::MissingValue(flag.to_string()));
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--random" => random = Some(parse_with(&arg, value(&arg)?, parse_size)?),
            "--seed" => seed = Some(parse_with(&arg, value(&arg)?, |s| s.parse().ok())?),
            "--walls" => {
                wall_chance = parse_with(&arg, value(&arg)?, |s| {
                    s.parse::<f64>().ok().filter(|p| (0.0..=1.0).contains(p))
                })?
            }
            "--run-limit" => {
                config.run_limit = Some(parse_with(&arg, value(&arg)?, |s| s.parse().ok())?)
            }
            "--start" => config.start = Some(parse_with(&arg, value(&arg)?, parse_coord)?),
            "--goal" => config.goal = Some(parse_with(&arg, value(&arg)?, parse_coord)?),
            "--max-iterations" => {
                config.max_iterations = parse_with(&arg, value(&arg)?, |s| s.parse().ok())?
            }
            "--costs" => show_costs = true,
            "--color" => color = true,
            "--json" => json = true,
            s if s.starts_with('-') && s.len() > 1 => return Err(CliError::UnknownFlag(arg)),
            _ => {
                if file.is_some() {
                    return Err(CliError::ExtraArgument(arg));
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    let input = match (random, file) {
        (Some((rows, cols)), _) => Input::Random {
            rows,
            cols,
            seed,
            wall_chance,
        },
        (None, Some(path)) => Input::File(path),
        (None, None) => return Err(CliError::MissingInput),
    };

    Ok(Command::Run(Options {
        input,
        config,
        show_costs,
        color,
        json,
    }))
}

fn parse_with<T>(flag: &str, value: String, f: impl Fn(&str) -> Option<T>) -> Result<T, CliError> {
    f(&value).ok_or_else(|| CliError::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

/// `RxC`, both positive.
fn parse_size(s: &str) -> Option<(i32, i32)> {
    let (r, c) = s.split_once(['x', 'X'])?;
    let rows: i32 = r.trim().parse().ok()?;
    let cols: i32 = c.trim().parse().ok()?;
    (rows > 0 && cols > 0).then_some((rows, cols))
}

/// `R,C`.
fn parse_coord(s: &str) -> Option<Coord> {
    let (r, c) = s.split_once(',')?;
    Some(Coord::new(r.trim().parse().ok()?, c.trim().parse().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(args: &[&str]) -> Options {
        match parse(args.iter().copied()).unwrap() {
            Command::Run(opts) => opts,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn file_with_defaults() {
        let opts = run(&["grid.txt"]);
        assert_eq!(opts.input, Input::File(PathBuf::from("grid.txt")));
        assert_eq!(opts.config, SearchConfig::default());
        assert!(!opts.json && !opts.color && !opts.show_costs);
    }

    #[test]
    fn search_flags() {
        let opts = run(&[
            "--run-limit",
            "3",
            "--start",
            "1,2",
            "--goal",
            "4, 5",
            "--max-iterations",
            "99",
            "in.txt",
            "--json",
        ]);
        assert_eq!(opts.config.run_limit, Some(3));
        assert_eq!(opts.config.start, Some(Coord::new(1, 2)));
        assert_eq!(opts.config.goal, Some(Coord::new(4, 5)));
        assert_eq!(opts.config.max_iterations, 99);
        assert!(opts.json);
    }

    #[test]
    fn random_input() {
        let opts = run(&["--random", "12x30", "--seed", "7", "--walls", "0.2"]);
        assert_eq!(
            opts.input,
            Input::Random {
                rows: 12,
                cols: 30,
                seed: Some(7),
                wall_chance: 0.2
            }
        );
    }

    #[test]
    fn help() {
        assert_eq!(parse(["-h"]), Ok(Command::Help));
    }

    #[test]
    fn errors() {
        assert_eq!(parse(Vec::<String>::new()), Err(CliError::MissingInput));
        assert_eq!(
            parse(["--run-limit"]),
            Err(CliError::MissingValue("--run-limit".into()))
        );
        assert_eq!(
            parse(["--start", "1;2", "f"]),
            Err(CliError::InvalidValue {
                flag: "--start".into(),
                value: "1;2".into()
            })
        );
        assert_eq!(
            parse(["--random", "0x4"]),
            Err(CliError::InvalidValue {
                flag: "--random".into(),
                value: "0x4".into()
            })
        );
        assert_eq!(parse(["--fast"]), Err(CliError::UnknownFlag("--fast".into())));
        assert_eq!(parse(["a", "b"]), Err(CliError::ExtraArgument("b".into())));
    }
}
