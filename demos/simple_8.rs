use grid_route::{JpsSolver, PathSolver, Point, RouteGrid};

// An 8-way route around a wall with a single gap. The grid is edited cell by
// cell, so the components have to be generated before searching.
fn main() {
    let mut grid = RouteGrid::new(8, 8, false);
    for y in 0..8 {
        if y != 5 {
            grid.set(4, y, true);
        }
    }
    grid.generate_components();
    println!("{grid}");

    let start = Point::new(1, 1);
    let goal = Point::new(6, 2);
    match JpsSolver::new().find_path(&grid, start, goal) {
        Some(path) => {
            println!("{} cells:", path.len());
            for p in path {
                println!("  {p}");
            }
        }
        None => println!("no path from {start} to {goal}"),
    }
}
