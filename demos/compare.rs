use std::time::Instant;

use grid_route::{cost_to_float, AstarSolver, JpsSolver, Movement, PathSolver, Point, RouteGrid};

// Prints how much frontier work and wall-clock time each solver spends on the
// same corner-to-corner query of a lightly obstructed map.
fn main() {
    const N: usize = 64;
    let mut grid = RouteGrid::new(N, N, false);
    grid.movement = Movement::EightWay;
    for i in 0..N {
        // A diagonal sprinkle of single-cell obstacles.
        if i % 7 == 3 {
            grid.set((i + 11) % N, i, true);
        }
    }
    grid.generate_components();

    let start = Point::new(0, 0);
    let goal = Point::new(N as i32 - 1, N as i32 - 1);

    let t = Instant::now();
    let astar = AstarSolver::new().search(&grid, start, goal);
    let astar_time = t.elapsed();
    let t = Instant::now();
    let jps = JpsSolver::new().search(&grid, start, goal);
    let jps_time = t.elapsed();

    for (name, outcome, time) in [("A* ", astar, astar_time), ("JPS", jps, jps_time)] {
        match outcome.path {
            Some((waypoints, cost)) => println!(
                "{name}: cost {:.1}, {} waypoints, {} expansions, {time:?}",
                cost_to_float(cost),
                waypoints.len(),
                outcome.expanded
            ),
            None => println!("{name}: no path ({} expansions, {time:?})", outcome.expanded),
        }
    }
}
