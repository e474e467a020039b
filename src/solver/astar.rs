use smallvec::SmallVec;

use crate::grid::RouteGrid;
use crate::point::Point;
use crate::solver::{movement_cost, step_cost, PathSolver, SUCCESSORS_INLINE};

/// Best-first search over the immediate cell neighbourhood.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    /// Multiplier on the heuristic. Values above 1.0 pull the search towards
    /// the goal faster at the price of the optimality guarantee.
    pub heuristic_weight: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_weight: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl PathSolver for AstarSolver {
    type Successors = SmallVec<[(Point, i32); SUCCESSORS_INLINE]>;

    fn successors(&self, grid: &RouteGrid, node: Point, _goal: Point) -> Self::Successors {
        grid.movement
            .directions()
            .iter()
            .filter_map(|&dir| {
                let next = node + dir;
                grid.can_step(node, next).then(|| (next, step_cost(dir)))
            })
            .collect()
    }

    fn heuristic(&self, grid: &RouteGrid, from: &Point, to: &Point) -> i32 {
        (movement_cost(grid.movement, from, to) as f32 * self.heuristic_weight) as i32
    }
}
