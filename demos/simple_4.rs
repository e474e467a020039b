use grid_route::{AstarSolver, JpsSolver, Movement, PathSolver, Point, RouteGrid};

// In this demo both solvers cross a 3x3 grid with shape
//  ___
// |S  |
// |## |
// |  G|
//  ___
// using a 4-neighbourhood, and find the same 4-step route.
fn main() {
    let mut grid = RouteGrid::from_rows(&[
        vec![0, 0, 0],
        vec![1, 1, 0],
        vec![0, 0, 0],
    ])
    .unwrap();
    grid.movement = Movement::FourWay;
    println!("{grid}");

    let start = Point::new(0, 0);
    let goal = Point::new(2, 2);
    let astar_path = AstarSolver::new().find_path(&grid, start, goal).unwrap();
    let jps_path = JpsSolver::new().find_path(&grid, start, goal).unwrap();
    println!("A* path:  {astar_path:?}");
    println!("JPS path: {jps_path:?}");
}
