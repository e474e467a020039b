use core::fmt;
use std::ops::Add;

/// A cell position on the grid: `x` is the column, `y` the row, both 0-based.
/// Out-of-range positions are representable; the grid treats them as blocked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// L1 distance: the number of cardinal steps between two cells.
    pub fn manhattan_distance(&self, other: &Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl Add<Direction> for Point {
    type Output = Point;

    fn add(self, dir: Direction) -> Point {
        let (dx, dy) = dir.delta();
        Point::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The eight compass directions, numbered counterclockwise from east with
/// `y` growing downwards. Odd numbers are the diagonals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East = 0,
    NorthEast = 1,
    North = 2,
    NorthWest = 3,
    West = 4,
    SouthWest = 5,
    South = 6,
    SouthEast = 7,
}

impl Direction {
    /// All eight directions in numbering order.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::NorthEast,
        Direction::North,
        Direction::NorthWest,
        Direction::West,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The four cardinal directions.
    pub const CARDINALS: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn num(self) -> i32 {
        self as i32
    }

    pub fn from_num(num: i32) -> Direction {
        match num.rem_euclid(8) {
            0 => Direction::East,
            1 => Direction::NorthEast,
            2 => Direction::North,
            3 => Direction::NorthWest,
            4 => Direction::West,
            5 => Direction::SouthWest,
            6 => Direction::South,
            _ => Direction::SouthEast,
        }
    }

    /// Unit step in this direction as an `(dx, dy)` pair.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::NorthEast => (1, -1),
            Direction::North => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::West => (-1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }

    pub fn diagonal(self) -> bool {
        self.num() % 2 == 1
    }

    /// Horizontal component of a diagonal direction.
    pub fn x_dir(self) -> Direction {
        debug_assert!(self.diagonal());
        if self.delta().0 > 0 {
            Direction::East
        } else {
            Direction::West
        }
    }

    /// Vertical component of a diagonal direction.
    pub fn y_dir(self) -> Direction {
        debug_assert!(self.diagonal());
        if self.delta().1 > 0 {
            Direction::South
        } else {
            Direction::North
        }
    }

    /// Rotates counterclockwise by `steps` eighth-turns.
    pub fn rotate_ccw(self, steps: i32) -> Direction {
        Direction::from_num(self.num() + steps)
    }

    /// Rotates clockwise by `steps` eighth-turns.
    pub fn rotate_cw(self, steps: i32) -> Direction {
        Direction::from_num(self.num() - steps)
    }
}
