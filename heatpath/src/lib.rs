//! Find the least heat-loss route through a grid of digits.
//!
//! The harness loads (or generates) a [`WeightGrid`], hands it to a
//! [`Router`] and prints the outcome as text or JSON.

pub mod cli;
pub mod generate;
pub mod render;

use std::error::Error;
use std::io::Write;

use heatpath_core::{Bounds, WeightGrid};
use heatpath_search::{Route, Router, SearchConfig, SearchOutcome};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::Serialize;

use cli::{Input, Options};

/// Machine-readable summary of a run.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub bounds: Bounds,
    pub config: &'a SearchConfig,
    pub route: Option<&'a Route>,
    pub expanded: usize,
}

/// Read or generate the grid described by `input`.
pub fn load_grid(input: &Input) -> Result<WeightGrid, Box<dyn Error>> {
    match input {
        Input::File(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Ok(WeightGrid::parse(&text)?)
        }
        Input::Random {
            rows,
            cols,
            seed,
            wall_chance,
        } => {
            let mut rng = match seed {
                Some(s) => SmallRng::seed_from_u64(*s),
                None => rand::make_rng(),
            };
            let grid = generate::random_grid(&mut rng, *rows, *cols, *wall_chance);
            log::debug!(
                "generated {} grid with {} walls",
                grid.bounds(),
                generate::wall_count(&grid)
            );
            Ok(grid)
        }
    }
}

/// Search `grid` and write the result to `out`.
///
/// Returns the outcome so the caller can choose an exit status.
pub fn solve<W: Write>(
    grid: &WeightGrid,
    opts: &Options,
    out: &mut W,
) -> Result<SearchOutcome, Box<dyn Error>> {
    let mut router = Router::new(grid);
    let outcome = router.search(&opts.config)?;

    if opts.json {
        let report = Report {
            bounds: grid.bounds(),
            config: &opts.config,
            route: outcome.route(),
            expanded: outcome.expanded(),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(outcome);
    }

    match &outcome {
        SearchOutcome::Found(route) => {
            render::render_route(out, grid, route, opts.color)?;
            writeln!(out)?;
            writeln!(out, "steps:     {}", route.steps())?;
            writeln!(out, "heat loss: {}", route.heat_loss)?;
            writeln!(out, "total:     {}", route.total_cost)?;
        }
        SearchOutcome::NoPath { .. } => {
            write!(out, "{grid}\n\nno path\n")?;
        }
    }
    writeln!(out, "expanded:  {}", outcome.expanded())?;
    if opts.show_costs {
        writeln!(out)?;
        render::render_costs(out, &router)?;
    }
    Ok(outcome)
}

/// Load the grid and solve it.
pub fn run<W: Write>(opts: &Options, out: &mut W) -> Result<SearchOutcome, Box<dyn Error>> {
    let grid = load_grid(&opts.input)?;
    solve(&grid, opts, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use heatpath_core::Coord;

    fn options(json: bool) -> Options {
        Options {
            input: Input::Random {
                rows: 1,
                cols: 1,
                seed: Some(0),
                wall_chance: 0.0,
            },
            config: SearchConfig::default(),
            show_costs: false,
            color: false,
            json,
        }
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_report() {
        let grid = WeightGrid::parse("1163\n1151").unwrap();
        let mut buf = Vec::new();
        let outcome = solve(&grid, &options(false), &mut buf).unwrap();
        assert!(outcome.is_found());
        let s = text(buf);
        assert!(s.contains("heat loss: 8"));
        assert!(s.contains("total:     9"));
    }

    #[test]
    fn json_report() {
        let grid = WeightGrid::parse("12\n34").unwrap();
        let mut buf = Vec::new();
        solve(&grid, &options(true), &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text(buf)).unwrap();
        assert_eq!(v["bounds"]["rows"], 2);
        assert_eq!(v["route"]["heat_loss"], 6);
        assert_eq!(v["route"]["path"][0]["row"], 0);
    }

    #[test]
    fn no_path_report() {
        let grid = WeightGrid::parse("1#\n#1").unwrap();
        let mut buf = Vec::new();
        let outcome = solve(&grid, &options(false), &mut buf).unwrap();
        assert!(!outcome.is_found());
        assert!(text(buf).contains("no path"));

        let mut buf = Vec::new();
        solve(&grid, &options(true), &mut buf).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text(buf)).unwrap();
        assert!(v["route"].is_null());
    }

    #[test]
    fn zero_weight_grid_reports_cheapest_route() {
        let grid = WeightGrid::parse("03247\n59653\n51076\n00158\n46102").unwrap();
        let mut buf = Vec::new();
        let route = solve(&grid, &options(false), &mut buf)
            .unwrap()
            .into_route()
            .unwrap();
        assert_eq!(route.heat_loss, 14);
        assert!(text(buf).contains("heat loss: 14"));
    }

    #[test]
    fn search_errors_propagate() {
        let grid = WeightGrid::filled(2, 2, 1);
        let mut opts = options(false);
        opts.config.goal = Some(Coord::new(9, 9));
        let mut buf = Vec::new();
        assert!(solve(&grid, &opts, &mut buf).is_err());
    }

    #[test]
    fn sample_file() {
        let mut opts = options(false);
        opts.input = Input::File(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.txt").into());
        let free = run(&opts, &mut Vec::new()).unwrap().into_route().unwrap();
        assert_eq!(free.heat_loss, 78);
        assert_eq!(free.steps(), 24);

        opts.config.run_limit = Some(3);
        let limited = run(&opts, &mut Vec::new()).unwrap().into_route().unwrap();
        assert!(limited.heat_loss >= free.heat_loss);
        assert_eq!(limited.path.last(), Some(&Coord::new(12, 12)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let mut opts = options(false);
        opts.input = Input::File("/nonexistent/grid.txt".into());
        assert!(run(&opts, &mut Vec::new()).is_err());
    }

    #[test]
    fn random_input_runs() {
        let mut buf = Vec::new();
        let outcome = run(&options(false), &mut buf).unwrap();
        assert_eq!(outcome.route().map(|r| r.steps()), Some(0));
    }
}
