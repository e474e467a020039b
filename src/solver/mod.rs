//! The strategy seam: both solvers implement [`PathSolver`] and share the
//! frontier machinery, the cost scale and the movement-model heuristics, so
//! callers can swap one for the other without touching anything else.

pub mod astar;
pub mod jps;

use log::info;

use crate::expand_waypoints;
use crate::grid::{Movement, RouteGrid};
use crate::point::{Direction, Point};
use crate::search::{best_first_search, SearchOutcome};

/// Cost of a cardinal unit step. Costs are scaled integers so the search can
/// order on `i32` without touching floats.
pub const CARDINAL_COST: i32 = 99;

/// Cost of a diagonal unit step. 140/99 is just below √2, which keeps the
/// octile estimate admissible.
pub const DIAGONAL_COST: i32 = 140;

/// Inline capacity of successor buffers; a node has at most eight expansions.
pub const SUCCESSORS_INLINE: usize = 8;

/// Cost of a single step in the given direction.
pub fn step_cost(dir: Direction) -> i32 {
    if dir.diagonal() {
        DIAGONAL_COST
    } else {
        CARDINAL_COST
    }
}

/// Exact cost of the cheapest 4-way route between two cells on an open grid.
pub fn manhattan_cost(a: &Point, b: &Point) -> i32 {
    a.manhattan_distance(b) * CARDINAL_COST
}

/// Exact cost of the cheapest 8-way route between two cells on an open grid:
/// diagonal steps cover the shorter axis, cardinal steps the remainder.
pub fn octile_cost(a: &Point, b: &Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    CARDINAL_COST * dx.max(dy) + (DIAGONAL_COST - CARDINAL_COST) * dx.min(dy)
}

/// Distance estimate matching the movement model. Admissible and consistent
/// for the model it is paired with; pairing it with the other model would
/// break the optimality guarantee, which is why the model lives on the grid.
pub fn movement_cost(movement: Movement, a: &Point, b: &Point) -> i32 {
    match movement {
        Movement::FourWay => manhattan_cost(a, b),
        Movement::EightWay => octile_cost(a, b),
    }
}

/// Converts a scaled integer cost to its float equivalent where a cardinal
/// step costs 1.0.
pub fn cost_to_float(cost: i32) -> f64 {
    f64::from(cost) / f64::from(CARDINAL_COST)
}

/// Total cost of a path under the grid's movement model. Consecutive entries
/// must lie on a common row, column or diagonal, which holds for both
/// unit-step paths and waypoint chains.
pub fn path_cost(grid: &RouteGrid, path: &[Point]) -> i32 {
    path.windows(2)
        .map(|pair| movement_cost(grid.movement, &pair[0], &pair[1]))
        .sum()
}

/// A shortest-route strategy over a [`RouteGrid`].
///
/// Implementations provide successor generation and a heuristic; the search
/// loop, endpoint handling and path assembly are shared. "No path" is `None`
/// throughout, never an empty vector.
pub trait PathSolver {
    type Successors: IntoIterator<Item = (Point, i32)>;

    /// Frontier expansions of `node`: either its immediate neighbourhood or
    /// the jump points reachable from it, with accumulated step costs.
    fn successors(&self, grid: &RouteGrid, node: Point, goal: Point) -> Self::Successors;

    /// Estimated remaining cost from `from` to `to`. Must not overestimate the
    /// true remaining cost under the grid's movement model.
    fn heuristic(&self, grid: &RouteGrid, from: &Point, to: &Point) -> i32;

    /// Runs the search and returns the raw outcome: the waypoint chain with
    /// its cost, plus the expansion count. Blocked or out-of-bounds endpoints
    /// yield no path rather than an error, and endpoints in different
    /// components are rejected before any frontier work.
    fn search(&self, grid: &RouteGrid, start: Point, goal: Point) -> SearchOutcome<Point, i32> {
        if !grid.is_walkable(start) || !grid.is_walkable(goal) {
            return SearchOutcome {
                path: None,
                expanded: 0,
            };
        }
        if grid.unreachable(&start, &goal) {
            info!("{start} and {goal} lie in different components");
            return SearchOutcome {
                path: None,
                expanded: 0,
            };
        }
        best_first_search(
            &start,
            |node| self.successors(grid, *node, goal),
            |node| self.heuristic(grid, node, &goal),
            |node| *node == goal,
        )
    }

    /// The waypoints from which [`find_path`](PathSolver::find_path) builds a
    /// path. Consecutive waypoints may span several cells.
    fn find_waypoints(&self, grid: &RouteGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        self.search(grid, start, goal)
            .path
            .map(|(waypoints, _)| waypoints)
    }

    /// Computes a cheapest unit-step path from `start` to `goal`, or `None`
    /// when no path exists. `start == goal` yields the single-element path.
    fn find_path(&self, grid: &RouteGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
        self.find_waypoints(grid, start, goal).map(expand_waypoints)
    }
}
