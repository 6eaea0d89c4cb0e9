//! Text rendering of grids, routes and cost maps.
//!
//! Route cells after the start are drawn as arrows giving the direction
//! they were entered from. With `color` set, arrows and walls are styled
//! through crossterm escape sequences.

use std::collections::HashMap;
use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use heatpath_core::{Coord, Delta, Direction, WALL, WeightGrid};
use heatpath_search::{NodeState, Route, Router};

/// Print `grid` with `route` overlaid.
pub fn render_route<W: Write>(
    out: &mut W,
    grid: &WeightGrid,
    route: &Route,
    color: bool,
) -> io::Result<()> {
    let arrows: HashMap<Coord, Direction> = route
        .path
        .windows(2)
        .filter_map(|w| {
            let d = Delta::between(w[0], w[1]).ok()?;
            Some((w[1], Direction::try_from(d).ok()?))
        })
        .collect();

    for r in 0..grid.rows() {
        for c in 0..grid.cols() {
            let at = Coord::new(r, c);
            match (arrows.get(&at), grid.cost(at)) {
                (Some(dir), _) if color => {
                    queue!(
                        out,
                        SetForegroundColor(Color::Red),
                        SetAttribute(Attribute::Bold),
                        Print(dir.arrow()),
                        SetAttribute(Attribute::Reset),
                        ResetColor
                    )?;
                }
                (Some(dir), _) => write!(out, "{}", dir.arrow())?,
                (None, None) if color => {
                    queue!(
                        out,
                        SetForegroundColor(Color::DarkGrey),
                        Print(WALL),
                        ResetColor
                    )?;
                }
                (None, None) => write!(out, "{WALL}")?,
                (None, Some(w)) => write!(out, "{}", digit(w))?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

/// Print the cost-from-start of every closed node, `.` elsewhere.
///
/// Columns are padded to the widest cost.
pub fn render_costs<W: Write>(out: &mut W, router: &Router) -> io::Result<()> {
    let bounds = router.bounds();
    let width = router
        .nodes_in(NodeState::Closed)
        .map(|n| n.cost_from_start().to_string().len())
        .max()
        .unwrap_or(1);

    for r in 0..bounds.rows {
        for c in 0..bounds.cols {
            if c > 0 {
                write!(out, " ")?;
            }
            match router.node(Coord::new(r, c)) {
                Some(n) if n.state() == NodeState::Closed => {
                    write!(out, "{:>width$}", n.cost_from_start())?
                }
                Some(_) => write!(out, "{:>width$}", '.')?,
                None => write!(out, "{:>width$}", WALL)?,
            }
        }
        writeln!(out)?;
    }
    out.flush()
}

fn digit(w: u32) -> char {
    char::from_digit(w, 10).unwrap_or('+')
}
