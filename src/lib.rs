//! # grid_route
//!
//! Shortest routes on a 2D occupancy grid, with two interchangeable solvers:
//! classic [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! cell neighbourhood and
//! [Jump Point Search](https://en.wikipedia.org/wiki/Jump_point_search), which
//! skips over runs of open cells and only queues the points where a route
//! could turn. Movement is 4-way or 8-way; diagonal steps never cut corners.
//! Connected components are pre-computed with a union-find so queries between
//! separated regions return immediately instead of flooding the map.
//!
//! ```
//! use grid_route::{AstarSolver, JpsSolver, PathSolver, Point, RouteGrid};
//!
//! // ...
//! // ##.
//! // ...
//! let grid = RouteGrid::from_rows(&[
//!     vec![0, 0, 0],
//!     vec![1, 1, 0],
//!     vec![0, 0, 0],
//! ])?;
//! let start = Point::new(0, 0);
//! let goal = Point::new(2, 2);
//! let astar_path = AstarSolver::new().find_path(&grid, start, goal).unwrap();
//! let jps_path = JpsSolver::new().find_path(&grid, start, goal).unwrap();
//! assert_eq!(astar_path.len(), 5);
//! assert_eq!(jps_path.len(), 5);
//! # Ok::<(), grid_route::GridError>(())
//! ```

pub mod grid;
pub mod point;
pub mod search;
pub mod solver;

pub use grid::{BoolGrid, GridError, Movement, RouteGrid};
pub use point::{Direction, Point};
pub use search::SearchOutcome;
pub use solver::astar::AstarSolver;
pub use solver::jps::JpsSolver;
pub use solver::{
    cost_to_float, manhattan_cost, movement_cost, octile_cost, path_cost, step_cost, PathSolver,
    CARDINAL_COST, DIAGONAL_COST,
};

/// Expands a waypoint chain into a unit-step path by filling in the cells
/// between consecutive waypoints. Each consecutive pair must lie on a common
/// row, column or diagonal, which the solvers guarantee.
pub fn expand_waypoints(waypoints: Vec<Point>) -> Vec<Point> {
    let mut cells = waypoints.into_iter();
    let Some(mut current) = cells.next() else {
        return Vec::new();
    };
    let mut path = vec![current];
    for next in cells {
        while current != next {
            current.x += (next.x - current.x).signum();
            current.y += (next.y - current.y).signum();
            path.push(current);
        }
    }
    path
}
