use smallvec::SmallVec;

use crate::grid::{Movement, RouteGrid};
use crate::point::{Direction, Point};
use crate::solver::{movement_cost, step_cost, PathSolver, SUCCESSORS_INLINE};

/// Jump Point Search: the same frontier machinery as [`AstarSolver`], but a
/// node expands to *jump points* instead of its immediate neighbours. A jump
/// point is found by scanning along a fixed direction until the scan hits the
/// goal, a cell where an optimal route could turn, or an obstacle. Waypoint
/// chains therefore skip cells; [`find_path`](PathSolver::find_path) fills
/// them back in, so the returned path has the same unit-step granularity and
/// cost as the A* one.
///
/// [`AstarSolver`]: crate::solver::astar::AstarSolver
#[derive(Clone, Debug)]
pub struct JpsSolver {
    /// Multiplier on the heuristic. Values above 1.0 pull the search towards
    /// the goal faster at the price of the optimality guarantee.
    pub heuristic_weight: f32,
}

impl JpsSolver {
    pub fn new() -> JpsSolver {
        JpsSolver {
            heuristic_weight: 1.0,
        }
    }
}

impl Default for JpsSolver {
    fn default() -> JpsSolver {
        JpsSolver::new()
    }
}

impl PathSolver for JpsSolver {
    type Successors = SmallVec<[(Point, i32); SUCCESSORS_INLINE]>;

    fn successors(&self, grid: &RouteGrid, node: Point, goal: Point) -> Self::Successors {
        grid.movement
            .directions()
            .iter()
            .filter_map(|&dir| {
                let jumped = if dir.diagonal() {
                    jump_diagonal(grid, node, dir, goal)
                } else {
                    jump_cardinal(grid, node, dir, goal)
                };
                jumped.map(|(point, steps)| (point, steps * step_cost(dir)))
            })
            .collect()
    }

    fn heuristic(&self, grid: &RouteGrid, from: &Point, to: &Point) -> i32 {
        (movement_cost(grid.movement, from, to) as f32 * self.heuristic_weight) as i32
    }
}

/// Forced-neighbour rule for cardinal travel: the scan must stop once a side
/// cell opens up right past a wall, because the route may need to turn into
/// the opening. `next` is one step beyond `prev` along `dir`.
fn forced(grid: &RouteGrid, prev: Point, next: Point, dir: Direction) -> bool {
    [dir.rotate_ccw(2), dir.rotate_cw(2)]
        .into_iter()
        .any(|side| grid.is_walkable(next + side) && !grid.is_walkable(prev + side))
}

/// Plain cardinal scan: advances until a wall ends it, or the goal or a forced
/// neighbour stops it. Serves as the probe for the other scans and never
/// probes itself, which bounds the scan nesting.
fn scan_cardinal(
    grid: &RouteGrid,
    from: Point,
    dir: Direction,
    goal: Point,
) -> Option<(Point, i32)> {
    debug_assert!(!dir.diagonal());
    let mut prev = from;
    let mut steps = 0;
    loop {
        let next = prev + dir;
        steps += 1;
        if !grid.is_walkable(next) {
            return None;
        }
        if next == goal || forced(grid, prev, next, dir) {
            return Some((next, steps));
        }
        prev = next;
    }
}

/// Diagonal scan: a blocked cell or a clipped corner ends it, the goal stops
/// it, and any cell where a plain scan along either component succeeds is a
/// jump point, since the route may need to turn onto that line.
fn jump_diagonal(
    grid: &RouteGrid,
    from: Point,
    dir: Direction,
    goal: Point,
) -> Option<(Point, i32)> {
    debug_assert!(dir.diagonal());
    let mut prev = from;
    let mut steps = 0;
    loop {
        let next = prev + dir;
        steps += 1;
        if !grid.can_step(prev, next) {
            return None;
        }
        if next == goal {
            return Some((next, steps));
        }
        if scan_cardinal(grid, next, dir.x_dir(), goal).is_some()
            || scan_cardinal(grid, next, dir.y_dir(), goal).is_some()
        {
            return Some((next, steps));
        }
        prev = next;
    }
}

/// Primary cardinal scan. On top of the plain stopping rules it stops wherever
/// [`turn_probe`] finds a viable turn off the scan line: with corner cutting
/// ruled out, optimal routes can leave a straight run at cells no forced
/// neighbour marks.
fn jump_cardinal(
    grid: &RouteGrid,
    from: Point,
    dir: Direction,
    goal: Point,
) -> Option<(Point, i32)> {
    debug_assert!(!dir.diagonal());
    let mut prev = from;
    let mut steps = 0;
    loop {
        let next = prev + dir;
        steps += 1;
        if !grid.is_walkable(next) {
            return None;
        }
        if next == goal || forced(grid, prev, next, dir) {
            return Some((next, steps));
        }
        if turn_probe(grid, next, dir, goal) {
            return Some((next, steps));
        }
        prev = next;
    }
}

/// Whether a route travelling along `dir` could usefully turn at `at`. 8-way
/// probes the two forward diagonals and both perpendiculars; 4-way has no
/// diagonals and probes the perpendiculars only, which is also what lets a
/// scan passing the goal's row or column turn towards it.
fn turn_probe(grid: &RouteGrid, at: Point, dir: Direction, goal: Point) -> bool {
    match grid.movement {
        Movement::EightWay => {
            jump_diagonal(grid, at, dir.rotate_ccw(1), goal).is_some()
                || jump_diagonal(grid, at, dir.rotate_cw(1), goal).is_some()
                || scan_cardinal(grid, at, dir.rotate_ccw(2), goal).is_some()
                || scan_cardinal(grid, at, dir.rotate_cw(2), goal).is_some()
        }
        Movement::FourWay => {
            scan_cardinal(grid, at, dir.rotate_ccw(2), goal).is_some()
                || scan_cardinal(grid, at, dir.rotate_cw(2), goal).is_some()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::astar::AstarSolver;
    use crate::solver::{path_cost, CARDINAL_COST, DIAGONAL_COST};

    fn both_movements(rows: &[Vec<u8>]) -> Vec<RouteGrid> {
        [Movement::FourWay, Movement::EightWay]
            .into_iter()
            .map(|movement| {
                let mut grid = RouteGrid::from_rows(rows).unwrap();
                grid.movement = movement;
                grid
            })
            .collect()
    }

    #[test]
    fn equal_start_and_goal_yield_single_cell_path() {
        for grid in both_movements(&[vec![0, 0], vec![0, 0]]) {
            let start = Point::new(1, 1);
            let path = JpsSolver::new().find_path(&grid, start, start).unwrap();
            assert_eq!(path, vec![start]);
        }
    }

    #[test]
    fn open_grid_eight_way_runs_the_diagonal() {
        let grid = RouteGrid::from_rows(&vec![vec![0; 5]; 5]).unwrap();
        let path = JpsSolver::new()
            .find_path(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path_cost(&grid, &path), 4 * DIAGONAL_COST);
    }

    #[test]
    fn open_grid_four_way_takes_one_corner() {
        let mut grid = RouteGrid::from_rows(&vec![vec![0; 5]; 5]).unwrap();
        grid.movement = Movement::FourWay;
        let path = JpsSolver::new()
            .find_path(&grid, Point::new(0, 0), Point::new(4, 4))
            .unwrap();
        assert_eq!(path.len(), 9);
        assert_eq!(path_cost(&grid, &path), 8 * CARDINAL_COST);
    }

    /// ...
    /// ##.
    /// ...
    #[test]
    fn routes_around_an_l_shaped_wall() {
        for grid in both_movements(&[vec![0, 0, 0], vec![1, 1, 0], vec![0, 0, 0]]) {
            let path = JpsSolver::new()
                .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
                .unwrap();
            assert_eq!(path.len(), 5);
            assert_eq!(path_cost(&grid, &path), 4 * CARDINAL_COST);
        }
    }

    /// .#
    /// #.
    /// The only candidate step clips both corners, so the cells are mutually
    /// unreachable in either movement model.
    #[test]
    fn clipped_corner_is_no_path() {
        for grid in both_movements(&[vec![0, 1], vec![1, 0]]) {
            assert!(JpsSolver::new()
                .find_path(&grid, Point::new(0, 0), Point::new(1, 1))
                .is_none());
        }
    }

    #[test]
    fn disconnected_regions_yield_no_path() {
        for grid in both_movements(&[vec![0, 1, 0], vec![1, 1, 1], vec![0, 1, 0]]) {
            assert!(JpsSolver::new()
                .find_path(&grid, Point::new(0, 0), Point::new(2, 2))
                .is_none());
        }
    }

    /// Matches A* cost on a map with several rooms and door gaps.
    #[test]
    fn matches_astar_on_a_walled_map() {
        let rows = vec![
            vec![0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
            vec![0, 1, 1, 0, 1, 0, 1, 1, 1, 0],
            vec![0, 1, 0, 0, 1, 0, 0, 0, 1, 0],
            vec![0, 1, 0, 1, 1, 1, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
            vec![0, 1, 1, 1, 1, 0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 1, 0, 0, 0, 1, 0],
            vec![1, 1, 1, 0, 1, 1, 1, 0, 1, 0],
            vec![0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
            vec![0, 1, 1, 1, 1, 1, 1, 0, 0, 0],
        ];
        let astar = AstarSolver::new();
        let jps = JpsSolver::new();
        for grid in both_movements(&rows) {
            for goal in [Point::new(9, 9), Point::new(0, 9), Point::new(7, 2)] {
                let a = astar.search(&grid, Point::new(0, 0), goal);
                let j = jps.search(&grid, Point::new(0, 0), goal);
                assert_eq!(a.path.is_some(), j.path.is_some(), "goal {goal}");
                if let (Some((_, a_cost)), Some((j_waypoints, j_cost))) = (a.path, j.path) {
                    assert_eq!(a_cost, j_cost, "goal {goal}");
                    let path = crate::expand_waypoints(j_waypoints);
                    assert_eq!(path_cost(&grid, &path), j_cost, "goal {goal}");
                }
            }
        }
    }
}
