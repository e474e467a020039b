use core::fmt;

use log::info;
use petgraph::unionfind::UnionFind;

use crate::point::{Direction, Point};

/// Rectangular occupancy storage. `true` marks a blocked cell.
#[derive(Clone, Debug)]
pub struct BoolGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl BoolGrid {
    pub fn new(width: usize, height: usize, value: bool) -> BoolGrid {
        BoolGrid {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index_of(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        let ix = self.index_of(x, y);
        self.cells[ix] = value;
    }

    /// Row-major cell index, also used as the union-find key.
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }
}

/// Movement model: cardinal steps only, or cardinals plus diagonals.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Movement {
    FourWay,
    #[default]
    EightWay,
}

impl Movement {
    /// The step directions this model allows.
    pub fn directions(self) -> &'static [Direction] {
        match self {
            Movement::FourWay => &Direction::CARDINALS,
            Movement::EightWay => &Direction::ALL,
        }
    }
}

/// Rejected occupancy matrix shapes and values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows of zero width.
    Empty,
    /// A row whose length differs from the first row's.
    JaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell value other than 0 (walkable) or 1 (blocked).
    InvalidCell { x: usize, y: usize, value: u8 },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "grid has no cells"),
            GridError::JaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells where {expected} were expected"
            ),
            GridError::InvalidCell { x, y, value } => {
                write!(f, "cell ({x}, {y}) holds {value}, expected 0 or 1")
            }
        }
    }
}

impl std::error::Error for GridError {}

/// Occupancy grid plus everything a route query needs: the movement model and a
/// union-find over walkable cells so hopeless queries are answered without
/// flooding the map. After editing cells through [`set`](RouteGrid::set), call
/// [`update`](RouteGrid::update) (or [`generate_components`](RouteGrid::generate_components))
/// before searching again.
#[derive(Clone, Debug)]
pub struct RouteGrid {
    pub grid: BoolGrid,
    pub movement: Movement,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl RouteGrid {
    pub fn new(width: usize, height: usize, blocked: bool) -> RouteGrid {
        RouteGrid {
            grid: BoolGrid::new(width, height, blocked),
            movement: Movement::default(),
            components: UnionFind::new(width * height),
            components_dirty: false,
        }
    }

    /// Builds a grid from a row-major matrix where 0 is walkable and 1 is
    /// blocked. Jagged rows, other cell values and empty input are rejected;
    /// nothing is coerced. Components are generated before returning.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<RouteGrid, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        let mut route_grid = RouteGrid::new(width, height, false);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::JaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                match value {
                    0 => {}
                    1 => route_grid.grid.set(x, y, true),
                    _ => return Err(GridError::InvalidCell { x, y, value }),
                }
            }
        }
        route_grid.generate_components();
        Ok(route_grid)
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }

    /// True iff the cell is inside the grid and not blocked. Out-of-range
    /// positions are simply not walkable.
    pub fn is_walkable(&self, p: Point) -> bool {
        self.in_bounds(p.x, p.y) && !self.grid.get(p.x as usize, p.y as usize)
    }

    /// Whether a single step from `from` to `to` is legal. A diagonal step
    /// additionally requires both orthogonally adjacent cells to be open, so a
    /// route can never clip through a wall corner.
    pub fn can_step(&self, from: Point, to: Point) -> bool {
        debug_assert!((from.x - to.x).abs() <= 1 && (from.y - to.y).abs() <= 1);
        if !self.is_walkable(to) {
            return false;
        }
        if from.x != to.x && from.y != to.y {
            self.is_walkable(Point::new(from.x, to.y)) && self.is_walkable(Point::new(to.x, from.y))
        } else {
            true
        }
    }

    /// Updates a cell. Newly blocked cells may split a component, which is only
    /// detected lazily: the components are flagged dirty and rebuilt on
    /// [`update`](RouteGrid::update). Newly cleared cells join their neighbours'
    /// components immediately.
    pub fn set(&mut self, x: usize, y: usize, blocked: bool) {
        let p = Point::new(x as i32, y as i32);
        if blocked && !self.grid.get(x, y) {
            self.components_dirty = true;
        } else if !blocked {
            let ix = self.grid.index_of(x, y);
            for dir in Direction::CARDINALS {
                let neighbour = p + dir;
                if self.is_walkable(neighbour) {
                    let n_ix = self.grid.index_of(neighbour.x as usize, neighbour.y as usize);
                    self.components.union(ix, n_ix);
                }
            }
        }
        self.grid.set(x, y, blocked);
    }

    /// Regenerates the components if they are marked dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Rebuilds the union-find from scratch. Cardinal adjacencies suffice for
    /// both movement models: a diagonal step is only legal when both orthogonal
    /// cells are open, so 8-way reachability coincides with 4-way reachability.
    pub fn generate_components(&mut self) {
        info!("generating connected components");
        let (w, h) = (self.width(), self.height());
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for y in 0..h {
            for x in 0..w {
                if self.grid.get(x, y) {
                    continue;
                }
                let p = Point::new(x as i32, y as i32);
                let ix = self.grid.index_of(x, y);
                for dir in [Direction::East, Direction::South] {
                    let neighbour = p + dir;
                    if self.is_walkable(neighbour) {
                        let n_ix = self.grid.index_of(neighbour.x as usize, neighbour.y as usize);
                        self.components.union(ix, n_ix);
                    }
                }
            }
        }
    }

    fn cell_index(&self, p: &Point) -> usize {
        self.grid.index_of(p.x as usize, p.y as usize)
    }

    /// Checks that start and goal lie in different components (or out of
    /// bounds), in which case no search can connect them.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if self.in_bounds(start.x, start.y) && self.in_bounds(goal.x, goal.y) {
            !self
                .components
                .equiv(self.cell_index(start), self.cell_index(goal))
        } else {
            true
        }
    }

    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
}

impl fmt::Display for RouteGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                write!(f, "{}", if self.grid.get(x, y) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_input() {
        assert_eq!(RouteGrid::from_rows(&[]).unwrap_err(), GridError::Empty);
        assert_eq!(RouteGrid::from_rows(&[vec![]]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn rejects_jagged_rows() {
        let rows = vec![vec![0, 0, 0], vec![0, 0]];
        assert_eq!(
            RouteGrid::from_rows(&rows).unwrap_err(),
            GridError::JaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn rejects_non_binary_cells() {
        let rows = vec![vec![0, 2, 0]];
        assert_eq!(
            RouteGrid::from_rows(&rows).unwrap_err(),
            GridError::InvalidCell {
                x: 1,
                y: 0,
                value: 2
            }
        );
    }

    #[test]
    fn walkability_respects_bounds_and_occupancy() {
        let grid = RouteGrid::from_rows(&[vec![0, 1], vec![0, 0]]).unwrap();
        assert!(grid.is_walkable(Point::new(0, 0)));
        assert!(!grid.is_walkable(Point::new(1, 0)));
        assert!(!grid.is_walkable(Point::new(-1, 0)));
        assert!(!grid.is_walkable(Point::new(0, -1)));
        assert!(!grid.is_walkable(Point::new(2, 0)));
        assert!(!grid.is_walkable(Point::new(0, 2)));
    }

    #[test]
    fn corner_rule_blocks_diagonal_steps() {
        // .#
        // #.
        let pinched = RouteGrid::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert!(!pinched.can_step(Point::new(0, 0), Point::new(1, 1)));

        let open = RouteGrid::from_rows(&[vec![0, 0], vec![0, 0]]).unwrap();
        assert!(open.can_step(Point::new(0, 0), Point::new(1, 1)));
        assert!(open.can_step(Point::new(1, 0), Point::new(0, 1)));
    }

    #[test]
    fn component_generation_splits_on_walls() {
        // .#.
        // .#.
        let grid = RouteGrid::from_rows(&[vec![0, 1, 0], vec![0, 1, 0]]).unwrap();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(0, 1)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(2, 0)));
        assert!(grid.unreachable(&Point::new(0, 1), &Point::new(2, 1)));
    }

    #[test]
    fn out_of_bounds_is_unreachable() {
        let grid = RouteGrid::from_rows(&[vec![0, 0]]).unwrap();
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(5, 0)));
        assert!(grid.unreachable(&Point::new(-1, 0), &Point::new(0, 0)));
    }

    #[test]
    fn set_and_update_refresh_components() {
        let mut grid = RouteGrid::from_rows(&[vec![0, 0, 0]]).unwrap();
        let (left, right) = (Point::new(0, 0), Point::new(2, 0));
        assert!(grid.reachable(&left, &right));

        grid.set(1, 0, true);
        assert!(grid.components_dirty);
        grid.update();
        assert!(grid.unreachable(&left, &right));

        grid.set(1, 0, false);
        assert!(grid.reachable(&left, &right));
    }
}
